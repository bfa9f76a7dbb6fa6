/// Both separators are honoured so Windows targets can be encoded from any host.
#[inline]
fn is_sep(c: char) -> bool {
    c == '\\' || c == '/'
}

/// Length of a leading `X:` volume prefix, if any.
fn drive_prefix_len(path: &str) -> usize {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        2
    } else {
        0
    }
}

/// Strip trailing separators, never below the root (`/`, `C:\`).
fn trim_trailing_seps(path: &str) -> &str {
    let drive = drive_prefix_len(path);
    let (prefix, rest) = path.split_at(drive);
    let trimmed = rest.trim_end_matches(is_sep);
    if trimmed.is_empty() && !rest.is_empty() {
        // keep exactly one root separator
        &path[..drive + 1]
    } else {
        &path[..prefix.len() + trimmed.len()]
    }
}

/// Split off the final component: `C:\a\b` -> (`C:\a`, `b`), `C:\` -> (`C:\`, ``).
pub(crate) fn split_last(path: &str) -> (&str, &str) {
    let drive = drive_prefix_len(path);
    let rest = &path[drive..];

    let cut = rest.rfind(is_sep).map(|i| i + 1).unwrap_or(0);
    let (head, tail) = rest.split_at(cut);

    let trimmed = head.trim_end_matches(is_sep);
    let head_len = if trimmed.is_empty() { head.len() } else { trimmed.len() };

    (&path[..drive + head_len], tail)
}

/// Ancestor levels of `path`, root first: `C:\a\b` -> [`C:\`, `C:\a`, `C:\a\b`].
///
/// Built by peeling the last component off until none is left, so depth does
/// not grow the stack.
pub fn path_levels(path: &str) -> Vec<&str> {
    let mut levels = Vec::new();
    let mut current = trim_trailing_seps(path.trim());

    while !current.is_empty() {
        levels.push(current);
        let (head, tail) = split_last(current);
        if tail.is_empty() || head.is_empty() {
            break;
        }
        current = head;
    }

    levels.reverse();
    levels
}

/// Final component of a level (`C:\a\b` -> `b`, `C:\` -> ``).
pub fn level_name(level: &str) -> &str {
    split_last(level).1
}

/// Drive letter when `level` is a bare volume root such as `C:`, `C:\` or `c:/`.
pub fn drive_letter(level: &str) -> Option<char> {
    let level = level.trim();
    let mut chars = level.chars();
    let letter = chars.next().filter(char::is_ascii_alphabetic)?;
    let rest = chars.as_str();

    if rest.starts_with(':') && rest.chars().all(|c| c == ':' || is_sep(c)) {
        Some(letter)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "levels_tests.rs"]
mod tests;
