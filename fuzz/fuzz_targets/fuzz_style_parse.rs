#![no_main]
use libfuzzer_sys::fuzz_target;
use logtint::fmt::{Paint, Style};

fuzz_target!(|data: &str| {
    // Must not panic on any style string
    let _ = data.parse::<Style>();
    let style = Style::parse_lossy(data);
    let _ = style.paint(data);
});
