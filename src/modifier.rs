//! Alternate item presentations for held modifier keys.
//!
//! Holding shift, fn, ctrl, alt, or cmd while a result is selected can swap
//! out its subtitle, arg, icon, validity, and variables. A [`Modifier`]
//! describes one such alternate rendering; [`Modifiers`] is the fixed set
//! of five key slots.

use crate::{Icon, Variables};
use serde::Serialize;

/// One alternate rendering of an [`Item`](crate::Item), activated while a
/// modifier key is held.
///
/// Every field is optional and emitted only when set. An explicit
/// `valid(false)` serializes as `"valid":false`; an untouched `valid` slot
/// produces no key at all.
///
/// # Examples
///
/// ```rust
/// use alfred_script_filter::{to_string, Modifier};
///
/// let m = Modifier::new().subtitle("open in browser").valid(false);
/// assert_eq!(
///     to_string(&m).unwrap(),
///     r#"{"subtitle":"open in browser","valid":false}"#
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Modifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    arg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    valid: Option<bool>,
    #[serde(skip_serializing_if = "Variables::is_empty")]
    variables: Variables,
}

impl Modifier {
    /// Creates an empty `Modifier`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the subtitle shown while the key is held.
    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Sets the arg passed on to the workflow.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.arg = Some(arg.into());
        self
    }

    /// Sets the icon.
    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets whether the result is actionable while the key is held.
    #[must_use]
    pub fn valid(mut self, valid: bool) -> Self {
        self.valid = Some(valid);
        self
    }

    /// Replaces the variable set wholesale.
    #[must_use]
    pub fn variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }
}

/// The five modifier key slots of an [`Item`](crate::Item).
///
/// A fixed-shape struct rather than a map: output order is always shift,
/// fn, ctrl, alt, cmd no matter in which order the slots were filled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Modifiers {
    #[serde(skip_serializing_if = "Option::is_none")]
    shift: Option<Modifier>,
    #[serde(rename = "fn", skip_serializing_if = "Option::is_none")]
    fn_key: Option<Modifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ctrl: Option<Modifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    alt: Option<Modifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cmd: Option<Modifier>,
}

impl Modifiers {
    /// Creates an empty `Modifiers` set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shift slot.
    #[must_use]
    pub fn shift(mut self, modifier: Modifier) -> Self {
        self.shift = Some(modifier);
        self
    }

    /// Sets the fn slot.
    #[must_use]
    pub fn fn_key(mut self, modifier: Modifier) -> Self {
        self.fn_key = Some(modifier);
        self
    }

    /// Sets the ctrl slot.
    #[must_use]
    pub fn ctrl(mut self, modifier: Modifier) -> Self {
        self.ctrl = Some(modifier);
        self
    }

    /// Sets the alt slot.
    #[must_use]
    pub fn alt(mut self, modifier: Modifier) -> Self {
        self.alt = Some(modifier);
        self
    }

    /// Sets the cmd slot.
    #[must_use]
    pub fn cmd(mut self, modifier: Modifier) -> Self {
        self.cmd = Some(modifier);
        self
    }
}
