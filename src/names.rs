//! Reading the newline-delimited name list.

use std::path::Path;

use tracing::debug;

use crate::error::{ListError, Result};

/// Characters that end a line. `\r\n` counts as a single break.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split text into names, one per line.
///
/// Blank lines are kept. A trailing line break ends the last line rather than
/// starting an empty one. Besides `\n` and `\r\n`, a lone `\r`, the vertical
/// tab, form feed, file/group/record separators, NEL and the Unicode line and
/// paragraph separators all break lines.
pub fn parse_names(text: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some(pos) = rest.find(&LINE_BREAKS[..]) else {
            names.push(rest.to_string());
            break;
        };
        names.push(rest[..pos].to_string());

        let tail = &rest[pos..];
        let break_len = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[break_len..];
    }

    names
}

/// Read names from a UTF-8 file.
pub fn read_names(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path).map_err(|source| ListError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| ListError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;

    let names = parse_names(&text);
    debug!("Parsed {} names from {:?}", names.len(), path);
    Ok(names)
}
