//! Terminal output sanitization utilities
//!
//! # Security: Terminal Injection Prevention
//!
//! Chat-log content is user-controlled. Authors, titles, message bodies and everything derived
//! from them (event titles, evidence excerpts) must be sanitized before they reach the terminal,
//! otherwise embedded ANSI escape sequences could clear the screen, move the cursor or restyle
//! output. The CLI runs all printed event text through [`strip_ansi_codes`]; list rows use
//! [`single_line`] as well.

/// Strips ANSI escape codes from a string
///
/// Removes ANSI CSI (Control Sequence Introducer) escape codes and other control characters
/// except tab, newline and carriage return.
///
/// # Examples
///
/// ```
/// use care_journey_timeline::utils::terminal::strip_ansi_codes;
///
/// let text = "\x1b[31mStart medication\x1b[0m";
/// assert_eq!(strip_ansi_codes(text), "Start medication");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // CSI sequence: ESC [ ... (letter)
            if chars.peek() == Some(&'[') {
                chars.next();
                while let Some(&next_ch) = chars.peek() {
                    chars.next();
                    if next_ch.is_ascii_alphabetic() {
                        break;
                    }
                }
                continue;
            }
        }

        if ch.is_control() && ch != '\t' && ch != '\n' && ch != '\r' {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Sanitize text and fold it onto one line (newlines and tabs become spaces)
pub fn single_line(text: &str) -> String {
    strip_ansi_codes(text)
        .chars()
        .map(|c| if c == '\n' || c == '\r' || c == '\t' { ' ' } else { c })
        .collect()
}
