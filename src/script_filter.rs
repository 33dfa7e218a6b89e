//! The root result document.

use crate::{Error, Item, Items, Result, Variables};
use serde::Serialize;
use std::io::{self, Write};

/// One complete script filter result set: the ordered item list plus
/// document-level session variables.
///
/// The item list is always emitted, as `[]` when empty; the variable map
/// is omitted from output entirely when empty. A document is built up in
/// memory, serialized once (or once per output mode), then discarded.
///
/// # Examples
///
/// ```rust
/// use alfred_script_filter::{Item, ScriptFilter};
///
/// let mut sf = ScriptFilter::new();
/// sf.append([
///     Item::new("Title1").subtitle("Sub1").arg("Arg1"),
///     Item::new("Title2").subtitle("Sub2").arg("Arg2"),
/// ]);
/// sf.output().unwrap();
/// ```
///
/// Not synchronized: mutating one `ScriptFilter` from multiple threads
/// concurrently is outside the contract.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScriptFilter {
    items: Items,
    #[serde(skip_serializing_if = "Variables::is_empty")]
    variables: Variables,
}

impl ScriptFilter {
    /// Creates an empty document. Never fails.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the item list.
    #[must_use]
    pub fn items(&self) -> &Items {
        &self.items
    }

    /// Returns the item list for mutation.
    pub fn items_mut(&mut self) -> &mut Items {
        &mut self.items
    }

    /// Returns the document-level variables.
    #[must_use]
    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Returns the document-level variables for mutation.
    pub fn variables_mut(&mut self) -> &mut Variables {
        &mut self.variables
    }

    /// Appends zero or more items, preserving call order.
    pub fn append(&mut self, items: impl IntoIterator<Item = Item>) {
        self.items.extend(items);
    }

    /// Inserts or overwrites one document-level variable.
    pub fn put_variable(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.put(key, value);
    }

    /// Serializes compactly and writes the result to `writer` in a single
    /// call.
    ///
    /// The document is fully serialized before any byte is written, so a
    /// failing sink never observes a torn encoding, only a truncated one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the write fails. There is no retry.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let bytes = crate::to_vec(self)?;
        writer.write_all(&bytes).map_err(Error::io)
    }

    /// Serializes with the given per-line prefix and indent unit and writes
    /// the result to `writer` in a single call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the write fails.
    pub fn write_indent_to<W: Write>(&self, mut writer: W, prefix: &str, indent: &str) -> Result<()> {
        let bytes = crate::to_vec_indent(self, prefix, indent)?;
        writer.write_all(&bytes).map_err(Error::io)
    }

    /// Prints the compact result payload to standard output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the write fails, e.g. stdout is a closed
    /// pipe.
    pub fn output(&self) -> Result<()> {
        self.write_to(io::stdout().lock())
    }

    /// Like [`output`](ScriptFilter::output) but indented, in the style of
    /// `json.MarshalIndent`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the write fails.
    pub fn output_indent(&self, prefix: &str, indent: &str) -> Result<()> {
        self.write_indent_to(io::stdout().lock(), prefix, indent)
    }
}
