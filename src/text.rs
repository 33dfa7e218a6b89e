//! Copy and large-type text for a result item.

use serde::Serialize;

/// Text shown when the user copies a result (cmd+C) or displays it in
/// large type (cmd+L). Both fields are independent and optional.
///
/// # Examples
///
/// ```rust
/// use alfred_script_filter::{to_string, Text};
///
/// let text = Text::new().copy("copied");
/// assert_eq!(to_string(&text).unwrap(), r#"{"copy":"copied"}"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Text {
    #[serde(skip_serializing_if = "Option::is_none")]
    copy: Option<String>,
    #[serde(rename = "largetype", skip_serializing_if = "Option::is_none")]
    large_type: Option<String>,
}

impl Text {
    /// Creates an empty `Text`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the clipboard text.
    #[must_use]
    pub fn copy(mut self, text: impl Into<String>) -> Self {
        self.copy = Some(text.into());
        self
    }

    /// Sets the large-type text.
    #[must_use]
    pub fn large_type(mut self, text: impl Into<String>) -> Self {
        self.large_type = Some(text.into());
        self
    }
}
