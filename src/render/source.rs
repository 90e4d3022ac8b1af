//! Turns a caller location into the `path:line` segment for the configured verbosity.

use crate::options::SourceFileMode;
use crate::record::Source;
use std::borrow::Cow;
use std::path::Path;

/// `None` for `Nop`. `root` is only consulted in `MediumFile` mode; when it is missing
/// or the file doesn't live under it, the path is printed as captured.
#[must_use]
pub fn format_source(source: &Source, mode: SourceFileMode, root: Option<&Path>) -> Option<String> {
    let path: Cow<'_, str> = match mode {
        SourceFileMode::Nop => return None,
        SourceFileMode::ShortFile => Cow::Borrowed(file_name(&source.file)),
        SourceFileMode::MediumFile => root
            .and_then(|root| relative_to(&source.file, root))
            .map_or(Cow::Borrowed(source.file.as_str()), Cow::Owned),
        SourceFileMode::LongFile => Cow::Borrowed(source.file.as_str()),
    };

    Some(format!("{path}:{}", source.line))
}

/// Last non-empty path component. Both separators count, since captured paths may come
/// from either platform. A path with no named component is returned whole.
fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\'])
        .find(|part| !part.is_empty())
        .unwrap_or(path)
}

fn relative_to(file: &str, root: &Path) -> Option<String> {
    let relative = Path::new(file).strip_prefix(root).ok()?;
    if relative.as_os_str().is_empty() {
        return None;
    }
    Some(relative.to_string_lossy().into_owned())
}

/// Keeps the rightmost `max` characters. Lengths are counted in `char`s so a multi-byte
/// path component is never split; a string already within `max` is returned whole.
#[must_use]
pub fn truncate_left(s: &str, max: usize) -> &str {
    let len = s.chars().count();
    if len <= max {
        return s;
    }
    let skip = len - max;
    s.char_indices().nth(skip).map_or("", |(idx, _)| &s[idx..])
}
