//! Helpers shared by container nodes: separated lists, member blocks and
//! keyword sets.

use std::collections::BTreeSet;

use crate::{CodeWriter, Writable};

/// A child declaration inside a braced member block.
pub trait Member: Writable {
    /// Simple declarations (properties and the like) are not separated from
    /// each other by a blank line.
    fn is_simple_declaration(&self) -> bool {
        false
    }
}

/// Write `items` separated by `separator`. Writes nothing for an empty slice.
pub fn write_joined<T: Writable>(writer: &mut CodeWriter, items: &[T], separator: &str) {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            writer.write(separator);
        }
        item.write(writer);
    }
}

/// Write `items` between `open` and `close`, separated by `separator`.
///
/// With `skip_if_empty` an empty slice writes nothing at all, which suits
/// type parameter lists; parameter lists always get their parentheses.
pub fn write_delimited<T: Writable>(
    writer: &mut CodeWriter,
    items: &[T],
    open: &str,
    separator: &str,
    close: &str,
    skip_if_empty: bool,
) {
    if skip_if_empty && items.is_empty() {
        return;
    }
    writer.write(open);
    write_joined(writer, items, separator);
    writer.write(close);
}

/// Write a braced block of members, one per line.
///
/// Adjacent members get a blank line between them unless both are simple
/// declarations. With `omit_if_empty` an empty slice writes nothing, not even
/// the braces.
pub fn write_member_block<M: Member>(writer: &mut CodeWriter, members: &[M], omit_if_empty: bool) {
    if omit_if_empty && members.is_empty() {
        return;
    }

    writer.write(" {");
    writer.with_indent(|w| {
        w.new_line("");
        let mut previous: Option<&M> = None;
        for member in members {
            if let Some(previous) = previous {
                if !(previous.is_simple_declaration() && member.is_simple_declaration()) {
                    w.new_line("");
                }
            }
            member.write(w);
            // Literal members commit their own line break.
            if !w.is_current_line_blank() {
                w.new_line("");
            }
            previous = Some(member);
        }
    });
    writer.write("}");
}

/// Write a keyword set: de-duplicated, sorted, space-joined, with one
/// trailing space. Writes nothing when there are no keywords.
pub fn write_keywords<'a, I>(writer: &mut CodeWriter, keywords: I)
where
    I: IntoIterator<Item = &'a str>,
{
    let keywords: BTreeSet<&str> = keywords.into_iter().collect();
    if keywords.is_empty() {
        return;
    }
    for keyword in keywords {
        writer.write(keyword).write(" ");
    }
}
