//! Line splitting for the command language.

/// Token produced in place of the remaining text when a quote is left open.
pub const UNTERMINATED_QUOTE: &str = "\"UNTERMINATED_QUOTE\"";

const QUOTE: char = '"';

fn is_separator(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

/// Returns `true` for lines the dispatcher should skip without output:
/// empty lines, lines of spaces and tabs, and `#` comments.
pub fn is_blank_or_comment(line: &str) -> bool {
    match line.trim_start_matches([' ', '\t']).chars().next() {
        None => true,
        Some(first) => first == '#',
    }
}

pub fn contains_quote(line: &str) -> bool {
    line.contains(QUOTE)
}

/// Split `line` into tokens on runs of spaces, tabs, carriage returns and
/// newlines.
///
/// A double quote closes any pending token and opens a quoted span that
/// runs to the next quote, whitespace included. An unclosed span yields
/// [`UNTERMINATED_QUOTE`] as the final token.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut buf = String::new();
    let mut in_quote = false;

    for ch in line.chars() {
        if in_quote {
            if ch == QUOTE {
                tokens.push(std::mem::take(&mut buf));
                in_quote = false;
            } else {
                buf.push(ch);
            }
        } else if ch == QUOTE {
            if !buf.is_empty() {
                tokens.push(std::mem::take(&mut buf));
            }
            in_quote = true;
        } else if is_separator(ch) {
            if !buf.is_empty() {
                tokens.push(std::mem::take(&mut buf));
            }
        } else {
            buf.push(ch);
        }
    }

    if in_quote {
        tokens.push(UNTERMINATED_QUOTE.to_string());
    } else if !buf.is_empty() {
        tokens.push(buf);
    }
    tokens
}
