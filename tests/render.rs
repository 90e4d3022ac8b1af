//! Tests for the record-to-text pipeline.

use chrono::{DateTime, FixedOffset};
use logtint::fmt::{Color, Style};
use logtint::{Attr, Level, Record, RenderOptions, Source, SourceFileMode, render, render_lines};

fn at() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2025-01-15T14:30:05+00:00").unwrap()
}

fn record(msg: &str) -> Record {
    Record::new(Level::INFO, at(), msg)
}

fn with_source(mode: SourceFileMode) -> RenderOptions {
    RenderOptions::plain().source_file_mode(mode)
}

#[test]
fn nop_mode_omits_source_even_when_present() {
    let rec = record("hello").source(Source::new("/a/b/c/main.go", 42));
    let lines = render_lines(&rec, &with_source(SourceFileMode::Nop));
    assert_eq!(lines, vec!["INF hello"]);
}

#[test]
fn missing_source_omits_segment() {
    let lines = render_lines(&record("hello"), &with_source(SourceFileMode::LongFile));
    assert_eq!(lines, vec!["INF hello"]);
}

#[test]
fn short_file_keeps_final_component() {
    let rec = record("hello").source(Source::new("/a/b/c/main.go", 42));
    let lines = render_lines(&rec, &with_source(SourceFileMode::ShortFile));
    assert_eq!(lines[0], "INF main.go:42 hello");
}

#[test]
fn medium_file_is_relative_to_project_root() {
    let rec = record("hello").source(Source::new("/a/b/c/main.go", 10));
    let options = with_source(SourceFileMode::MediumFile).project_root("/a/b");
    assert_eq!(render_lines(&rec, &options)[0], "INF c/main.go:10 hello");
}

#[test]
fn medium_file_defaults_to_working_directory() {
    let cwd = std::env::current_dir().unwrap();
    let file = cwd.join("src").join("server.rs");
    let rec = record("hello").source(Source::new(file.to_string_lossy(), 3));
    let expected = format!("INF {} hello", std::path::Path::new("src").join("server.rs:3").display());
    assert_eq!(render_lines(&rec, &with_source(SourceFileMode::MediumFile))[0], expected);
}

#[test]
fn medium_file_outside_root_falls_back_to_full_path() {
    let rec = record("hello").source(Source::new("/elsewhere/lib.rs", 1));
    let options = with_source(SourceFileMode::MediumFile).project_root("/a/b");
    assert_eq!(render_lines(&rec, &options)[0], "INF /elsewhere/lib.rs:1 hello");
}

#[test]
fn long_file_keeps_path_verbatim() {
    let rec = record("hello").source(Source::new("/a/b/c/main.go", 42));
    let lines = render_lines(&rec, &with_source(SourceFileMode::LongFile));
    assert_eq!(lines[0], "INF /a/b/c/main.go:42 hello");
}

#[test]
fn source_length_keeps_rightmost_characters() {
    let rec = record("m").source(Source::new("/a/b/c/main.go", 10));
    let options = with_source(SourceFileMode::MediumFile).project_root("/a/b");

    let truncated = options.clone().source_file_length(Some(8));
    assert_eq!(render_lines(&rec, &truncated)[0], "INF in.go:10 m");

    let one_short = options.clone().source_file_length(Some(11));
    assert_eq!(render_lines(&rec, &one_short)[0], "INF /main.go:10 m");

    let exact = options.clone().source_file_length(Some(12));
    assert_eq!(render_lines(&rec, &exact)[0], "INF c/main.go:10 m");

    let longer = options.source_file_length(Some(100));
    assert_eq!(render_lines(&rec, &longer)[0], "INF c/main.go:10 m");
}

#[test]
fn source_length_shorter_than_line_suffix_still_truncates() {
    let rec = record("m").source(Source::new("main.go", 1234));
    let options = with_source(SourceFileMode::ShortFile).source_file_length(Some(3));
    assert_eq!(render_lines(&rec, &options)[0], "INF 234 m");
}

#[test]
fn source_length_with_nop_mode_is_harmless() {
    let rec = record("m").source(Source::new("main.go", 1));
    let options = with_source(SourceFileMode::Nop).source_file_length(Some(2));
    assert_eq!(render_lines(&rec, &options), vec!["INF m"]);
}

#[test]
fn groups_break_lines_and_preserve_order() {
    let rec = record("m").attrs([
        Attr::new("a", 1),
        Attr::group("g", [Attr::new("b", 2)]),
        Attr::new("c", 3),
    ]);
    assert_eq!(
        render_lines(&rec, &RenderOptions::plain()),
        vec!["INF m", "a=1", "g:", "  b=2", "c=3"]
    );
}

#[test]
fn scalars_at_one_depth_share_a_line() {
    let rec = record("m")
        .attr("a", 1)
        .attr("b", true)
        .attr("a", "dup");
    assert_eq!(
        render_lines(&rec, &RenderOptions::plain()),
        vec!["INF m", "a=1 b=true a=dup"]
    );
}

#[test]
fn empty_group_still_prints_its_key() {
    let rec = record("m").attrs([Attr::group("g", [])]);
    assert_eq!(render_lines(&rec, &RenderOptions::plain()), vec!["INF m", "g:"]);
}

#[test]
fn deep_nesting_indents_per_level() {
    let rec = record("m").attrs([Attr::group(
        "outer",
        [
            Attr::new("x", 1),
            Attr::group("inner", [Attr::group("core", [Attr::new("y", 2)])]),
            Attr::new("z", 3),
        ],
    )]);
    assert_eq!(
        render_lines(&rec, &RenderOptions::plain()),
        vec![
            "INF m",
            "outer:",
            "  x=1",
            "  inner:",
            "    core:",
            "      y=2",
            "  z=3",
        ]
    );
}

#[test]
fn very_deep_nesting_renders_every_level() {
    let mut attr = Attr::new("leaf", 0);
    for depth in (0..200).rev() {
        attr = Attr::group(format!("g{depth}"), [attr]);
    }
    let lines = render_lines(&record("m").attrs([attr]), &RenderOptions::plain());
    assert_eq!(lines.len(), 202);
    assert_eq!(lines[201], format!("{}leaf=0", "  ".repeat(200)));
}

#[test]
fn custom_indent_unit() {
    let rec = record("m").attrs([Attr::group("g", [Attr::new("b", 2)])]);
    let options = RenderOptions::plain().indent("\t");
    assert_eq!(render_lines(&rec, &options), vec!["INF m", "g:", "\tb=2"]);
}

#[test]
fn values_with_spaces_or_separators_are_quoted() {
    let rec = record("m")
        .attr("path", "/tmp/a b")
        .attr("expr", "k=v")
        .attr("empty", "")
        .attr("plain", "word");
    let lines = render_lines(&rec, &RenderOptions::plain());
    assert_eq!(lines[1], r#"path="/tmp/a b" expr="k=v" empty="" plain=word"#);
}

#[test]
fn quoting_can_be_disabled() {
    let rec = record("m").attr("path", "/tmp/a b");
    let options = RenderOptions::plain().quote_attr_values(false);
    assert_eq!(render_lines(&rec, &options)[1], "path=/tmp/a b");
}

#[test]
fn scalar_kinds_stringify() {
    let rec = record("m")
        .attr("f", 1.5)
        .attr("u", 7_u64)
        .attr("neg", -3)
        .attr("d", std::time::Duration::from_millis(1500))
        .attr("at", at());
    assert_eq!(
        render_lines(&rec, &RenderOptions::plain())[1],
        "f=1.5 u=7 neg=-3 d=1.5s at=2025-01-15T14:30:05+00:00"
    );
}

#[test]
fn message_is_not_quoted_or_escaped() {
    let rec = record("say \"hi\" = fine");
    assert_eq!(render_lines(&rec, &RenderOptions::plain())[0], "INF say \"hi\" = fine");
}

#[test]
fn timestamp_uses_record_time_and_format() {
    let options = RenderOptions::plain().time_format("%H:%M:%S");
    assert_eq!(render_lines(&record("m"), &options)[0], "INF 14:30:05 m");
}

#[test]
fn default_time_format() {
    let options = RenderOptions {
        no_color: true,
        source_file_mode: SourceFileMode::Nop,
        ..RenderOptions::default()
    };
    assert_eq!(render_lines(&record("m"), &options)[0], "INF 2025-01-15 14:30:05 m");
}

#[test]
fn unparseable_time_format_omits_timestamp() {
    let options = RenderOptions::plain().time_format("%Y %J");
    assert_eq!(render_lines(&record("m"), &options)[0], "INF m");
}

#[test]
fn segments_keep_fixed_order() {
    let rec = record("m").source(Source::new("/x/main.rs", 9));
    let options = with_source(SourceFileMode::ShortFile).time_format("%H:%M");
    assert_eq!(render_lines(&rec, &options)[0], "INF 14:30 main.rs:9 m");
}

#[test]
fn level_labels_pad_to_width() {
    let options = RenderOptions::plain().level_tag(Level::INFO, "I").level_width(4);
    assert_eq!(render_lines(&record("m"), &options)[0], "I    m");
}

#[test]
fn long_level_labels_are_not_cut() {
    let options = RenderOptions::plain().level_tag(Level::INFO, "INFORMATION");
    assert_eq!(render_lines(&record("m"), &options)[0], "INFORMATION m");
}

#[test]
fn level_without_tag_prints_display_form() {
    let rec = Record::new(Level::new(2), at(), "m");
    assert_eq!(render_lines(&rec, &RenderOptions::plain())[0], "INFO+2 m");
}

#[test]
fn message_prefix_and_length() {
    let options = RenderOptions::plain().msg_prefix("> ").msg_length(Some(6));
    assert_eq!(render_lines(&record("hi"), &options)[0], "INF > hi  ");

    let longer = RenderOptions::plain().msg_length(Some(2));
    assert_eq!(render_lines(&record("hello"), &longer)[0], "INF hello");
}

#[test]
fn level_color_wraps_padded_label() {
    let options = RenderOptions {
        time_format: String::new(),
        source_file_mode: SourceFileMode::Nop,
        ..RenderOptions::default()
    };
    let cyan = Color::cyan().fg_ansi();
    assert_eq!(render_lines(&record("m"), &options)[0], format!("{cyan}INF\x1b[0m m"));
}

#[test]
fn field_colors_wrap_each_segment() {
    let bold = Style::new().bold();
    let dim = Style::new().dim();
    let options = RenderOptions::plain()
        .no_color(false)
        .level_color(Level::INFO, Style::new())
        .msg_color(Some(bold))
        .attr_key_color(Some(dim))
        .attr_val_color(Some(bold))
        .source_file_mode(SourceFileMode::ShortFile)
        .source_file_color(Some(dim));
    let rec = record("m")
        .source(Source::new("a.rs", 1))
        .attrs([Attr::new("k", 1), Attr::group("g", [])]);

    assert_eq!(
        render_lines(&rec, &options),
        vec![
            "INF \x1b[2ma.rs:1\x1b[0m \x1b[1mm\x1b[0m".to_string(),
            "\x1b[2mk\x1b[0m=\x1b[1m1\x1b[0m".to_string(),
            "\x1b[2mg\x1b[0m:".to_string(),
        ]
    );
}

#[test]
fn unset_colors_render_without_escapes() {
    let mut options = RenderOptions::default()
        .time_color(None)
        .msg_color(None)
        .attr_key_color(None)
        .attr_val_color(None)
        .source_file_color(None)
        .time_format("")
        .source_file_mode(SourceFileMode::LongFile);
    options.level_colors.clear();

    let rec = record("m")
        .source(Source::new("/x.rs", 1))
        .attrs([Attr::new("k", "v"), Attr::group("g", [Attr::new("n", 1)])]);
    let out = render(&rec, &options);
    assert!(!out.contains('\x1b'));
    assert_eq!(out, "INF /x.rs:1 m\nk=v\ng:\n  n=1\n");
}

#[test]
fn no_color_overrides_every_style() {
    let options = RenderOptions::default()
        .msg_color(Some(Style::new().bold()))
        .attr_key_color(Some(Style::new().fg(Color::red())))
        .no_color(true);
    let out = render(&record("m").attr("k", 1), &options);
    assert!(!out.contains('\x1b'));
}

#[test]
fn output_is_newline_terminated_per_line() {
    let rec = record("m").attrs([Attr::group("g", [Attr::new("b", 2)])]);
    assert_eq!(render(&rec, &RenderOptions::plain()), "INF m\ng:\n  b=2\n");
}

#[test]
fn rendering_is_deterministic() {
    let rec = record("m")
        .source(Source::new("/a/b/c.rs", 5))
        .attrs([Attr::new("a", 1), Attr::group("g", [Attr::new("b", "x y")])]);
    let options = RenderOptions::default().source_file_mode(SourceFileMode::MediumFile).project_root("/a");
    assert_eq!(render(&rec, &options), render(&rec, &options));
}

#[test]
fn hundred_thousand_nested_groups_render() {
    const DEPTH: usize = 100_000;

    let mut attr = Attr::new("leaf", 1);
    for _ in 0..DEPTH {
        attr = Attr::group("g", [attr]);
    }
    let rec = record("deep").attrs([attr, Attr::new("after", 2)]);

    let lines = render_lines(&rec, &RenderOptions::plain().indent(""));
    assert_eq!(lines.len(), DEPTH + 3);
    assert_eq!(lines[0], "INF deep");
    assert!(lines[1..=DEPTH].iter().all(|line| line == "g:"));
    assert_eq!(lines[DEPTH + 1], "leaf=1");
    assert_eq!(lines[DEPTH + 2], "after=2");
}

#[test]
fn scalars_after_a_group_resume_outer_depth() {
    let rec = record("m").attrs([
        Attr::new("a", 1),
        Attr::group("outer", [Attr::group("inner", [Attr::new("x", 1)]), Attr::new("y", 2)]),
        Attr::new("b", 3),
        Attr::new("c", 4),
    ]);
    assert_eq!(
        render_lines(&rec, &RenderOptions::plain()),
        vec!["INF m", "a=1", "outer:", "  inner:", "    x=1", "  y=2", "b=3 c=4"]
    );
}
