//! Icon reference for result items.
//!
//! An [`Icon`] points Alfred at an image to display next to a result. The
//! path is interpreted by Alfred itself; this crate performs no existence
//! or format checks. An optional [`IconType`] changes how the path is
//! interpreted:
//!
//! - [`IconType::FileIcon`]: show the icon *of* the file at the path
//! - [`IconType::FileType`]: the path is a UTI such as `public.png`
//!
//! With no type set, the path is loaded as an image file directly.

use serde::Serialize;

/// How Alfred should interpret an icon path.
///
/// Serializes to the fixed literals `"fileicon"` and `"filetype"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconType {
    FileIcon,
    FileType,
}

/// The icon displayed for an [`Item`](crate::Item) or
/// [`Modifier`](crate::Modifier).
///
/// # Examples
///
/// ```rust
/// use alfred_script_filter::{to_string, Icon, IconType};
///
/// let icon = Icon::new("./icon.png");
/// assert_eq!(to_string(&icon).unwrap(), r#"{"path":"./icon.png"}"#);
///
/// let icon = Icon::with_type("~/Desktop", IconType::FileIcon);
/// assert_eq!(
///     to_string(&icon).unwrap(),
///     r#"{"path":"~/Desktop","type":"fileicon"}"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Icon {
    path: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    icon_type: Option<IconType>,
}

impl Icon {
    /// Creates an `Icon` with the given path and no type.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Icon {
            path: path.into(),
            icon_type: None,
        }
    }

    /// Creates an `Icon` with the given path and type.
    #[must_use]
    pub fn with_type(path: impl Into<String>, icon_type: IconType) -> Self {
        Icon {
            path: path.into(),
            icon_type: Some(icon_type),
        }
    }

    /// Replaces the path.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the type.
    #[must_use]
    pub fn icon_type(mut self, icon_type: IconType) -> Self {
        self.icon_type = Some(icon_type);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::to_string;

    #[test]
    fn marshal_minimal() {
        let icon = Icon::new("./icon.png");
        assert_eq!(to_string(&icon).unwrap(), r#"{"path":"./icon.png"}"#);
    }

    #[test]
    fn marshal_with_type_fileicon() {
        let icon = Icon::with_type("./icon.png", IconType::FileIcon);
        assert_eq!(
            to_string(&icon).unwrap(),
            r#"{"path":"./icon.png","type":"fileicon"}"#
        );
    }

    #[test]
    fn marshal_with_type_filetype() {
        let icon = Icon::new("./icon.png").icon_type(IconType::FileType);
        assert_eq!(
            to_string(&icon).unwrap(),
            r#"{"path":"./icon.png","type":"filetype"}"#
        );
    }

    #[test]
    fn path_replaces_existing() {
        let icon = Icon::new("./old.png").path("./new.png");
        assert_eq!(to_string(&icon).unwrap(), r#"{"path":"./new.png"}"#);
    }
}
