//! JSON emission.
//!
//! Compact output goes straight through `serde_json`. Indented output uses
//! [`IndentFormatter`], a [`serde_json::ser::Formatter`] that reproduces
//! Go's `json.MarshalIndent` line layout: every line after the first starts
//! with a caller-supplied prefix followed by one copy of the indent unit
//! per nesting level, and object keys are followed by `": "`. The two modes
//! produce structurally identical JSON; only whitespace differs.

use serde_json::ser::Formatter;
use std::io;

/// Formatter for indented output with a per-line prefix.
///
/// Most users want the crate-level functions
/// ([`to_vec_indent`](crate::to_vec_indent),
/// [`to_string_indent`](crate::to_string_indent)); the formatter is public
/// for callers driving a `serde_json::Serializer` themselves.
///
/// # Examples
///
/// ```rust
/// use alfred_script_filter::{to_string_indent, Item, ScriptFilter};
///
/// let mut sf = ScriptFilter::new();
/// sf.items_mut().push(Item::new("Title"));
///
/// let json = to_string_indent(&sf, "", "  ").unwrap();
/// assert_eq!(json, "{\n  \"items\": [\n    {\n      \"title\": \"Title\"\n    }\n  ]\n}");
/// ```
#[derive(Clone, Debug)]
pub struct IndentFormatter<'a> {
    prefix: &'a [u8],
    indent: &'a [u8],
    depth: usize,
    has_value: bool,
}

impl<'a> IndentFormatter<'a> {
    /// Creates a formatter with the given per-line prefix and per-level
    /// indent unit.
    #[must_use]
    pub fn new(prefix: &'a str, indent: &'a str) -> Self {
        IndentFormatter {
            prefix: prefix.as_bytes(),
            indent: indent.as_bytes(),
            depth: 0,
            has_value: false,
        }
    }

    fn newline<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b"\n")?;
        writer.write_all(self.prefix)?;
        for _ in 0..self.depth {
            writer.write_all(self.indent)?;
        }
        Ok(())
    }
}

impl Formatter for IndentFormatter<'_> {
    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.depth += 1;
        self.has_value = false;
        writer.write_all(b"[")
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.depth -= 1;
        if self.has_value {
            self.newline(writer)?;
        }
        writer.write_all(b"]")
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if !first {
            writer.write_all(b",")?;
        }
        self.newline(writer)
    }

    fn end_array_value<W>(&mut self, _writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.has_value = true;
        Ok(())
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.depth += 1;
        self.has_value = false;
        writer.write_all(b"{")
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.depth -= 1;
        if self.has_value {
            self.newline(writer)?;
        }
        writer.write_all(b"}")
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if !first {
            writer.write_all(b",")?;
        }
        self.newline(writer)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn end_object_value<W>(&mut self, _writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.has_value = true;
        Ok(())
    }
}
