//! Terminal output sanitization for scraped roster text
//!
//! # Security: Terminal Injection Prevention
//!
//! Names and times come straight from venue web pages. Before they are printed they go
//! through [`sanitize_cell`], which removes ANSI CSI sequences and control characters so a
//! scraped entry can't clear the screen, move the cursor or recolor the table.

/// Make scraped text safe to print as a single table cell
///
/// Drops ANSI CSI escape sequences (`ESC [ ... letter`) and control characters, and turns
/// tabs and line breaks into spaces so a cell never spans more than one line.
///
/// # Examples
///
/// ```
/// use roster_view::utils::terminal::sanitize_cell;
///
/// assert_eq!(sanitize_cell("\x1b[31mMarie\x1b[0m"), "Marie");
/// assert_eq!(sanitize_cell("9am\n5pm"), "9am 5pm");
/// ```
pub fn sanitize_cell(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameters run until the final letter
            for next_ch in chars.by_ref() {
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        match ch {
            '\t' | '\n' | '\r' => result.push(' '),
            c if c.is_control() => {}
            c => result.push(c),
        }
    }

    result
}
