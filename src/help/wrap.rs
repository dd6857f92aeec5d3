//! Word wrapping and argument patterns

use crate::registry::ArgSpec;

/// Column width used to wrap descriptions
pub const WRAP_WIDTH: usize = 55;

/// Split `text` on single spaces and pack the words into lines of at most
/// `width` characters. A word longer than `width` gets a line of its own.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split(' ') {
        let word_len = word.chars().count();
        if line_len > 0 && line_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Render declared arguments as a usage pattern.
///
/// A trailing variadic argument `things` is shown as `things1 things2 things3...`.
pub fn format_arg_pattern(args: &[ArgSpec]) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(args.len() + 2);
    for arg in args {
        match arg {
            ArgSpec::Fixed(name) => parts.push(name.clone()),
            ArgSpec::Variadic(name) => {
                parts.push(format!("{}1", name));
                parts.push(format!("{}2", name));
                parts.push(format!("{}3...", name));
            }
        }
    }
    parts.join(" ")
}
