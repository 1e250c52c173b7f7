//! Logging helpers so raw player input always stays on a single log line.

/// Longest preview of player input written to the log.
const MAX_PREVIEW: usize = 120;

/// Escape a player-supplied line for logging:
/// - `\n`, `\r`, `\t` and backslash are escaped
/// - other control characters become `\xNN`
/// - printable text (including Cyrillic) is kept as is
///
/// Input longer than [`MAX_PREVIEW`] characters is cut and ends with `…`.
/// The result is quoted so empty or space-only input is visible in logs.
pub fn escape_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 2);
    out.push('"');
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
