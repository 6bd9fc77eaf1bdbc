// crates/unescape_newlines/src/lib.rs

/// Converts escape sequences typed on a command line into the characters they name.
///
/// Handled sequences:
///   - `\n` becomes a newline
///   - `\t` becomes a tab
///   - `\\` becomes a single backslash
///
/// Any other backslash (including a trailing one) is kept as-is, so
/// JavaScript like `/[SW]/i` or `\d` passes through untouched.
pub fn unescape_newlines(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            output.push(c);
            continue;
        }
        match chars.peek() {
            Some('n') => {
                output.push('\n');
                chars.next();
            }
            Some('t') => {
                output.push('\t');
                chars.next();
            }
            Some('\\') => {
                output.push('\\');
                chars.next();
            }
            _ => output.push('\\'),
        }
    }
    output
}
