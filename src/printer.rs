//! Plain text rendering of tree entries.

use std::io::{self, Write};

use crate::{Order, WordEntry, WordTree};

/// Width the word is padded to.
pub const WORD_WIDTH: usize = 18;

/// Writes one entry: the count when it is above one, the padded word and the
/// line numbers.
///
/// ```text
///     2 -- the                -- 1, 3
///          cat                -- 1
/// ```
pub fn write_entry<W: Write>(out: &mut W, entry: &WordEntry) -> io::Result<()> {
    if entry.count() > 1 {
        write!(out, "{:5} -- ", entry.count())?;
    } else {
        write!(out, "{:9}", "")?;
    }
    write!(out, "{:<width$} -- ", entry.word(), width = WORD_WIDTH)?;

    for (i, line) in entry.lines().iter().enumerate() {
        write!(out, "{}{line}", if i == 0 { "" } else { ", " })?;
    }
    writeln!(out)
}

/// Writes every entry of `entries`, then a blank line.
pub fn write_entries<'a, W, I>(out: &mut W, entries: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a WordEntry>,
{
    for entry in entries {
        write_entry(out, entry)?;
    }
    writeln!(out)
}

/// Writes one titled section per order.
pub fn write_report<W: Write>(out: &mut W, tree: &WordTree, orders: &[Order]) -> io::Result<()> {
    for &order in orders {
        writeln!(out, "printing in {order}...")?;
        write_entries(out, tree.traverse(order))?;
        writeln!(out, "end of printing in {order}...")?;
        writeln!(out)?;
    }
    Ok(())
}
