#![no_main]
use chrono::DateTime;
use libfuzzer_sys::fuzz_target;
use logtint::{Attr, Level, Record, RenderOptions, Source, SourceFileMode, render};

fuzz_target!(|input: (&str, &str, &str, u8, i8)| {
    let (file, time_format, text, length, severity) = input;
    let Ok(time) = DateTime::parse_from_rfc3339("2025-01-01T00:00:00+00:00") else {
        return;
    };

    // Must not panic for any path, time format, or truncation length
    let record = Record::new(Level::new(i32::from(severity)), time, text)
        .source(Source::new(file, u32::from(length)))
        .attrs([
            Attr::new(text, text),
            Attr::group(file, [Attr::new("k", text), Attr::group(text, [])]),
        ]);

    for mode in [
        SourceFileMode::Nop,
        SourceFileMode::ShortFile,
        SourceFileMode::MediumFile,
        SourceFileMode::LongFile,
    ] {
        let options = RenderOptions::default()
            .time_format(time_format)
            .source_file_mode(mode)
            .source_file_length(Some(usize::from(length)));
        let out = render(&record, &options);
        assert!(out.ends_with('\n'));
    }
});
