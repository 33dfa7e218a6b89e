//! # alfred_script_filter
//!
//! Build and serialize result payloads for [Alfred]'s Script Filter JSON
//! protocol.
//!
//! A Script Filter script prints one JSON document to stdout describing the
//! rows Alfred should show: each row's title, subtitle, arg, icon,
//! keyboard-modifier variants, and free-form session variables. This crate
//! is the producing side of that contract and nothing else: an in-memory
//! document model, chained builders to fill it, and a deterministic JSON
//! projection written to an output sink in one shot.
//!
//! [Alfred]: https://www.alfredapp.com/help/workflows/inputs/script-filter/json/
//!
//! ## Key Properties
//!
//! - **Presence-tracked fields**: an optional field set to `false` or `""`
//!   still serializes; an unset field emits no key at all
//! - **Stable output**: key order is structural (declaration order), the
//!   variable map is insertion-ordered, and the same document always
//!   produces byte-identical output
//! - **Two output modes**: compact, and indented with a caller-supplied
//!   per-line prefix and indent unit; identical content either way
//! - **No validation**: titles may be empty, URLs malformed; Alfred's
//!   behavior is the semantic contract
//! - **One failure mode**: the final write to the sink; encoding itself
//!   cannot fail for documents built through this API
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! alfred_script_filter = "0.1"
//! ```
//!
//! Then in the script behind your workflow's Script Filter input:
//!
//! ```rust
//! use alfred_script_filter::{Item, ScriptFilter};
//!
//! let mut sf = ScriptFilter::new();
//! sf.append([
//!     Item::new("Title1").subtitle("Sub1").arg("Arg1"),
//!     Item::new("Title2").subtitle("Sub2").arg("Arg2"),
//! ]);
//!
//! let json = alfred_script_filter::to_string(&sf).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"items":[{"title":"Title1","subtitle":"Sub1","arg":"Arg1"},{"title":"Title2","subtitle":"Sub2","arg":"Arg2"}]}"#
//! );
//!
//! // or straight to stdout for Alfred to read:
//! sf.output().unwrap();
//! ```
//!
//! ## Modifier Keys and Variables
//!
//! ```rust
//! use alfred_script_filter::{Item, Modifier, ScriptFilter};
//!
//! let mut sf = ScriptFilter::new();
//! sf.append([Item::new("Open")
//!     .arg("file")
//!     .mod_cmd(Modifier::new().subtitle("Reveal in Finder").arg("reveal"))]);
//! sf.put_variable("session", "abc123");
//!
//! let json = alfred_script_filter::to_string(&sf).unwrap();
//! assert!(json.ends_with(r#""variables":{"session":"abc123"}}"#));
//! ```

pub mod error;
pub mod icon;
pub mod icons;
pub mod item;
pub mod items;
pub mod modifier;
pub mod script_filter;
pub mod ser;
pub mod text;
pub mod variables;

pub use error::{Error, Result};
pub use icon::{Icon, IconType};
pub use item::{Item, ItemType};
pub use items::Items;
pub use modifier::{Modifier, Modifiers};
pub use script_filter::ScriptFilter;
pub use ser::IndentFormatter;
pub use text::Text;
pub use variables::Variables;

use serde::Serialize;
use std::io;

/// Serializes a value to compact JSON bytes.
///
/// Deterministic: the same value always yields byte-identical output.
///
/// # Errors
///
/// Returns [`Error::Json`] if the value cannot be encoded; unreachable for
/// documents built through this crate's construction API.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    serde_json::to_vec(value).map_err(Error::json)
}

/// Serializes a value to indented JSON bytes.
///
/// Layout follows Go's `json.MarshalIndent`: every line after the first
/// begins with `prefix` followed by one copy of `indent` per nesting
/// level. Content is identical to [`to_vec`]; only whitespace differs.
///
/// # Errors
///
/// Returns [`Error::Json`] if the value cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec_indent<T>(value: &T, prefix: &str, indent: &str) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(128);
    let formatter = IndentFormatter::new(prefix, indent);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer).map_err(Error::json)?;
    Ok(buf)
}

/// Serializes a value to a compact JSON string.
///
/// # Examples
///
/// ```rust
/// use alfred_script_filter::{to_string, ScriptFilter};
///
/// let sf = ScriptFilter::new();
/// assert_eq!(to_string(&sf).unwrap(), r#"{"items":[]}"#);
/// ```
///
/// # Errors
///
/// Returns [`Error::Json`] if the value cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    serde_json::to_string(value).map_err(Error::json)
}

/// Serializes a value to an indented JSON string.
///
/// # Errors
///
/// Returns [`Error::Json`] if the value cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_indent<T>(value: &T, prefix: &str, indent: &str) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let buf = to_vec_indent(value, prefix, indent)?;
    String::from_utf8(buf).map_err(Error::json)
}

/// Serializes a value compactly and writes it to `writer` in a single
/// call.
///
/// The value is fully encoded before any byte is written; there is no
/// retry and no partial re-emission on failure.
///
/// # Errors
///
/// Returns [`Error::Io`] if the write fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let bytes = to_vec(value)?;
    writer.write_all(&bytes).map_err(Error::io)
}

/// Serializes a value with indentation and writes it to `writer` in a
/// single call.
///
/// # Errors
///
/// Returns [`Error::Io`] if the write fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_indent<W, T>(mut writer: W, value: &T, prefix: &str, indent: &str) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let bytes = to_vec_indent(value, prefix, indent)?;
    writer.write_all(&bytes).map_err(Error::io)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_item_filter() -> ScriptFilter {
        let mut sf = ScriptFilter::new();
        sf.append([
            Item::new("Title1").subtitle("Sub1").arg("Arg1"),
            Item::new("Title2").subtitle("Sub2").arg("Arg2"),
        ]);
        sf
    }

    #[test]
    fn compact_and_string_agree() {
        let sf = two_item_filter();
        assert_eq!(to_vec(&sf).unwrap(), to_string(&sf).unwrap().into_bytes());
    }

    #[test]
    fn indent_and_compact_share_content() {
        let sf = two_item_filter();
        let compact: serde_json::Value =
            serde_json::from_str(&to_string(&sf).unwrap()).unwrap();
        let indented: serde_json::Value =
            serde_json::from_str(&to_string_indent(&sf, "", "  ").unwrap()).unwrap();
        assert_eq!(compact, indented);
    }

    #[test]
    fn to_writer_writes_compact_bytes() {
        let sf = two_item_filter();
        let mut buf = Vec::new();
        to_writer(&mut buf, &sf).unwrap();
        assert_eq!(buf, to_vec(&sf).unwrap());
    }

    #[test]
    fn serialization_is_deterministic() {
        let sf = two_item_filter();
        assert_eq!(to_vec(&sf).unwrap(), to_vec(&sf).unwrap());
    }
}
