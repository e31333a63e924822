//! Whitespace-insensitive text comparison.

/// Normalize line-based output.
///
/// Right-trims every line, joins with a single `\n` and right-trims the
/// whole result, dropping any trailing blank line.
///
/// Lines are split on `\n` and `\r\n` only; a lone `\r` or a vertical
/// form feed is ordinary content and stays part of its line (where it
/// is then subject to the right-trim like any other trailing
/// whitespace).
pub fn normalize(s: &str) -> String {
    s.lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}

/// Compare two outputs modulo trailing whitespace and a trailing blank
/// line.
pub fn cmp_text(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
