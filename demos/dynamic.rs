//! Example redrawing a colored progress bar in place

use color_eyre::Result;
use shanks::color::fore;
use shanks::{Colorize, ProgressBar};
use std::thread::sleep;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut bar = ProgressBar::builder()
        .high(50.0)
        .bar_len(30)
        .fill(("|", fore::GREEN))
        .build()?;
    bar.colorize(Colorize::slots().empty(fore::LIGHTBLACK))?;

    bar.scope(|dynamic| {
        for step in 0..=50 {
            dynamic.render(step as f64)?;
            sleep(Duration::from_millis(40));
        }
        dynamic.replace("Complete!");
        Ok(())
    })?;

    Ok(())
}
