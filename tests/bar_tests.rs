//! Tests for the bar module functionality.
//!
//! This file contains tests for the render math, colored output,
//! builder configuration and delegation to the render settings.

use console::strip_ansi_codes;
use rand::Rng;
use shanks::color::{fore, style, ColorSet, Palette, Slot};
use shanks::{Colorize, ColoredStr, Error, ProgressBar, ProgressBarConfig, RenderSettings};

mod common;
use common::helpers::*;

#[test]
fn test_render_defaults() {
    let bar = ProgressBar::new();
    assert_eq!(bar.low(), 0.0);
    assert_eq!(bar.high(), 100.0);
    assert_eq!(bar.render(0.0).unwrap(), "[          ]");
    assert_eq!(bar.render(50.0).unwrap(), "[#####     ]");
    assert_eq!(bar.render(100.0).unwrap(), "[##########]");
}

#[test]
fn test_render_high_fifty() {
    let bar = create_test_bar(50.0);
    assert_eq!(bar.render(10.0).unwrap(), "[##        ]");
}

#[test]
fn test_render_custom_segments() {
    let bar = ProgressBar::builder()
        .high(50.0)
        .fill("|")
        .prefix("/")
        .postfix("/")
        .build()
        .unwrap();
    assert_eq!(bar.render(20.0).unwrap(), "/||||      /");
}

#[test]
fn test_render_after_settings_change() {
    let mut bar = ProgressBar::builder()
        .high(50.0)
        .fill("|")
        .prefix("/")
        .postfix("/")
        .build()
        .unwrap();
    bar.render_settings_mut().set_fill("#");
    assert_eq!(bar.render(30.0).unwrap(), "/######    /");
}

#[test]
fn test_render_floors_partial_segments() {
    let bar = ProgressBar::new();
    assert_eq!(bar.render(19.9).unwrap(), "[#         ]");
    assert_eq!(bar.render(9.99).unwrap(), "[          ]");
}

#[test]
fn test_render_is_idempotent() {
    let bar = create_test_bar(50.0);
    assert_eq!(bar.render(17.0).unwrap(), bar.render(17.0).unwrap());
}

#[test]
fn test_render_length_matches_segments() {
    let bar = create_test_bar(50.0);
    let mut rng = rand::rng();
    for _ in 0..100 {
        let progress = rng.random_range(0.0..=50.0);
        let rendered = bar.render(progress).unwrap();
        assert_eq!(rendered.chars().count(), 1 + 1 + TEST_BAR_LEN, "{rendered:?}");
    }
}

#[test]
fn test_render_clamps_overflow() {
    let bar = create_test_bar(50.0);
    assert_eq!(bar.render(500.0).unwrap(), "[##########]");
    assert_eq!(bar.segment_counts(75.0, TEST_BAR_LEN).unwrap(), (10, 0));
}

#[test]
fn test_render_progress_not_offset_by_low() {
    let bar = ProgressBar::builder().low(50.0).high(100.0).build().unwrap();
    // ratio = 25 / (100 - 50), progress is used as-is.
    assert_eq!(bar.render(25.0).unwrap(), "[#####     ]");
    assert_eq!(bar.render(60.0).unwrap(), "[##########]");
}

#[test]
fn test_render_zero_range_is_domain_error() {
    let bar = ProgressBar::builder().low(10.0).high(10.0).build().unwrap();
    assert_domain_error(bar.render(5.0));
}

#[test]
fn test_render_negative_progress_is_domain_error() {
    let bar = create_test_bar(50.0);
    assert_domain_error(bar.render(-1.0));
    assert_domain_error(bar.render(-0.1));

    // high below low turns positive progress into a negative ratio.
    let inverted = ProgressBar::builder().low(100.0).high(0.0).build().unwrap();
    assert_domain_error(inverted.render(10.0));
}

#[test]
fn test_render_non_finite_progress_is_domain_error() {
    let bar = create_test_bar(50.0);
    assert_domain_error(bar.render(f64::NAN));
    assert_domain_error(bar.render(f64::INFINITY));
}

#[test]
fn test_render_uncolored_has_no_codes() {
    let bar = create_test_bar(50.0);
    let rendered = bar.render(20.0).unwrap();
    assert!(!rendered.contains('\x1b'));
    assert_eq!(rendered, format!("[{}{}]", "#".repeat(4), " ".repeat(6)));
}

#[test]
fn test_render_colored_segments() {
    let mut bar = create_test_bar(50.0);
    bar.colorize(create_fill_empty_palette()).unwrap();

    let expected = format!(
        "[{}####{}{}      {}]",
        fore::GREEN,
        style::RESET_ALL,
        fore::RED,
        style::RESET_ALL
    );
    let rendered = bar.render(20.0).unwrap();
    assert_eq!(rendered, expected);
    assert_eq!(strip_ansi_codes(&rendered), "[####      ]");
    assert_eq!(visible_width(&rendered), 12);
}

#[test]
fn test_render_resets_only_colored_segments() {
    let bar = ProgressBar::builder()
        .high(50.0)
        .fill(("#", fore::GREEN))
        .build()
        .unwrap();

    let expected = format!("[{}####{}      ]", fore::GREEN, style::RESET_ALL);
    assert_eq!(bar.render(20.0).unwrap(), expected);
}

#[test]
fn test_render_ignores_affix_colors() {
    let bar = ProgressBar::builder()
        .high(50.0)
        .prefix(("[", fore::CYAN))
        .postfix(ColoredStr::new("]", fore::CYAN))
        .build()
        .unwrap();

    assert!(bar.render_settings().palette().get(Slot::Prefix).is_some());
    assert_eq!(bar.render(20.0).unwrap(), "[####      ]");
}

#[test]
fn test_render_with_custom_color_set_reset() {
    let set = ColorSet::new(["<g>"], "</>");
    let bar = ProgressBar::builder()
        .high(50.0)
        .color_set(set)
        .fill(("#", "<g>"))
        .build()
        .unwrap();

    assert_eq!(bar.render(20.0).unwrap(), "[<g>####</>      ]");
}

#[test]
fn test_builder_palette_checked_against_color_set() {
    let ansi = Palette::new(None, None, Some(fore::GREEN), None).unwrap();
    let result = ProgressBar::builder()
        .high(50.0)
        .color_set(ColorSet::new(["<g>"], "</>"))
        .palette(ansi)
        .build();

    assert!(matches!(result, Err(Error::InvalidColor(code)) if code == fore::GREEN));
}

#[test]
fn test_render_with_other_settings() {
    let bar = create_test_bar(50.0);
    let settings = RenderSettings::new("<", ">", "=", "-", 5, None).unwrap();

    assert_eq!(bar.render_with(20.0, &settings).unwrap(), "<==--->");
    assert_eq!(bar.render_bar(20.0, &settings).unwrap(), "==---");
    assert_eq!(bar.render(20.0).unwrap(), "[####      ]");
}

#[test]
fn test_render_multi_char_segments() {
    let bar = ProgressBar::builder()
        .high(4.0)
        .bar_len(4)
        .fill("<>")
        .empty(".")
        .build()
        .unwrap();
    assert_eq!(bar.render(1.0).unwrap(), "[<>...]");
}

#[test]
fn test_builder_render_settings_win() {
    let settings = RenderSettings::new("(", ")", "*", "_", 4, None).unwrap();
    let bar = ProgressBar::builder()
        .high(8.0)
        .prefix("ignored")
        .bar_len(99)
        .render_settings(settings)
        .build()
        .unwrap();

    assert_eq!(bar.high(), 8.0);
    assert_eq!(bar.render(4.0).unwrap(), "(**__)");
}

#[test]
fn test_builder_explicit_palette() {
    let palette = Palette::new(None, None, None, Some(fore::RED)).unwrap();
    let bar = ProgressBar::builder()
        .fill(("#", fore::GREEN))
        .palette(palette.clone())
        .build()
        .unwrap();

    assert_eq!(bar.render_settings().palette(), &palette);
}

#[test]
fn test_builder_rejects_unknown_color() {
    assert_invalid_color(ProgressBar::builder().fill(("#", UNKNOWN_COLOR)).build());
    assert_invalid_color(
        ProgressBar::builder()
            .empty(ColoredStr::new(" ", UNKNOWN_COLOR))
            .build(),
    );
}

#[test]
fn test_builder_rejects_zero_bar_len() {
    let result = ProgressBar::builder().bar_len(0).build();
    assert!(matches!(result, Err(Error::InvalidBarLength(0))));
}

#[test]
fn test_config_defaults() {
    let config = ProgressBarConfig::default();
    assert_eq!(config.low, 0.0);
    assert_eq!(config.high, 100.0);
    assert_eq!(config.bar_len, 10);
    assert!(config.palette.is_none());
    assert!(config.render_settings.is_none());
    assert!(format!("{config:?}").contains("ProgressBarConfig"));
}

#[test]
fn test_colorize_delegates() {
    let mut bar = create_test_bar(50.0);
    bar.colorize(Colorize::slots().empty(fore::RED)).unwrap();
    bar.colorize(Colorize::slots().fill(fore::GREEN)).unwrap();

    let palette = bar.render_settings().palette();
    assert_slot_color(palette, Slot::Fill, Some(fore::GREEN));
    assert_slot_color(palette, Slot::Empty, Some(fore::RED));

    assert_invalid_color(bar.colorize(Colorize::slots().fill(UNKNOWN_COLOR)));

    bar.reset_color(&Slot::ALL);
    assert_eq!(bar.render(20.0).unwrap(), "[####      ]");
}
