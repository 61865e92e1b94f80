//! Whitespace tokenizer with double-quote protection

/// Split one line of command-line text into tokens.
///
/// A `"` toggles quoted mode and is dropped from the output. Spaces only separate
/// tokens outside quotes. An unterminated quote runs to the end of the line.
/// Empty tokens are never emitted.
pub fn split_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => quoted = !quoted,
            ' ' if !quoted => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
