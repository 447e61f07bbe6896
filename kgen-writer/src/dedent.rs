//! Common-indentation removal for pre-formatted snippets.

fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

fn drop_chars(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}

/// Remove the leading whitespace shared by every non-blank line.
///
/// A blank first line and a blank last line are dropped, so a snippet written
/// as an indented raw string literal comes out flush-left:
///
/// ```
/// use kgen_writer::trim_indent;
///
/// let snippet = "
///     if (ready) {
///         start()
///     }
/// ";
/// assert_eq!(trim_indent(snippet), "if (ready) {\n    start()\n}");
/// ```
pub fn trim_indent(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let min_indent = lines
        .iter()
        .filter(|line| !is_blank(line))
        .map(|line| indent_width(line))
        .min()
        .unwrap_or(0);
    let last = lines.len() - 1;

    lines
        .iter()
        .enumerate()
        .filter(|(index, line)| !((*index == 0 || *index == last) && is_blank(line)))
        .map(|(_, line)| drop_chars(line, min_indent))
        .collect::<Vec<_>>()
        .join("\n")
}
