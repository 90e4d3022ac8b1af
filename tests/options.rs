//! Tests for the options table and its shared handle.

use logtint::fmt::{Color, Style};
use logtint::{Level, RenderOptions, SharedOptions, SourceFileMode};

#[test]
fn defaults_are_stable() {
    let options = RenderOptions::default();
    assert_eq!(options.min_level, Level::INFO);
    assert_eq!(options.level_tags[&Level::WARN], "WRN");
    assert_eq!(options.level_colors[&Level::ERROR], Style::new().fg(Color::red()));
    assert_eq!(options.level_colors[&Level::DEBUG], Style::new().dim());
    assert_eq!(options.level_width, 3);
    assert_eq!(options.time_format, "%Y-%m-%d %H:%M:%S");
    assert_eq!(options.source_file_mode, SourceFileMode::ShortFile);
    assert_eq!(options.source_file_length, None);
    assert_eq!(options.msg_color, None);
    assert_eq!(options.attr_key_color, None);
    assert!(options.quote_attr_values);
    assert!(!options.no_color);
    assert_eq!(options, RenderOptions::new());
}

#[test]
fn source_file_mode_from_str() {
    assert_eq!("nop".parse::<SourceFileMode>().unwrap(), SourceFileMode::Nop);
    assert_eq!("Short".parse::<SourceFileMode>().unwrap(), SourceFileMode::ShortFile);
    assert_eq!("mediumfile".parse::<SourceFileMode>().unwrap(), SourceFileMode::MediumFile);
    assert_eq!("full".parse::<SourceFileMode>().unwrap(), SourceFileMode::LongFile);
    assert!("sideways".parse::<SourceFileMode>().is_err());
}

#[test]
fn source_file_mode_display_round_trips() {
    for mode in [
        SourceFileMode::Nop,
        SourceFileMode::ShortFile,
        SourceFileMode::MediumFile,
        SourceFileMode::LongFile,
    ] {
        assert_eq!(mode.to_string().parse::<SourceFileMode>().unwrap(), mode);
    }
}

#[test]
fn shared_options_clones_see_updates() {
    let shared = SharedOptions::new(RenderOptions::default());
    let other = shared.clone();

    other.set_min_level(Level::ERROR);
    other.set_source_file_length(Some(20));
    other.set_no_color(true);

    let seen = shared.get();
    assert_eq!(seen.min_level, Level::ERROR);
    assert_eq!(seen.source_file_length, Some(20));
    assert!(seen.no_color);
    assert!(shared.ptr_eq(&other));
}

#[test]
fn set_level_color_none_removes_entry() {
    let shared = SharedOptions::default();
    shared.set_level_color(Level::INFO, None);
    assert!(!shared.read().level_colors.contains_key(&Level::INFO));

    shared.set_level_color(Level::INFO, Some(Style::new().bold()));
    assert_eq!(shared.read().level_colors[&Level::INFO], Style::new().bold());
}

#[test]
fn update_applies_all_changes_together() {
    let shared = SharedOptions::default();
    shared.update(|o| {
        o.time_format = String::new();
        o.msg_prefix = "> ".to_string();
    });
    let seen = shared.get();
    assert!(seen.time_format.is_empty());
    assert_eq!(seen.msg_prefix, "> ");
}

#[test]
fn set_replaces_whole_table() {
    let shared = SharedOptions::default();
    shared.set(RenderOptions::plain());
    assert_eq!(shared.get(), RenderOptions::plain());
}
