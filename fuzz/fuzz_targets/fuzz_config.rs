#![no_main]
use libfuzzer_sys::fuzz_target;
use logtint::Config;

fuzz_target!(|data: &str| {
    // Syntax errors are fine; a parsed config must always convert
    if let Ok(config) = Config::parse(data) {
        let _ = config.render_options();
    }
});
