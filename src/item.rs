//! A single selectable result.
//!
//! [`Item`] is the unit Alfred renders one row for. Title is the only
//! required field; everything else is presence-tracked and emitted only
//! when set. The key order in the serialized object is structural: uid,
//! title, subtitle, arg, icon, valid, match, autocomplete, type, mods,
//! text, quicklookurl.

use crate::{Icon, Modifier, Modifiers, Text};
use serde::Serialize;

/// How Alfred treats a result's arg.
///
/// Serializes to `"default"`, `"file"`, or `"file:skipcheck"`. `File`
/// makes Alfred treat the arg as a file path and enables file actions;
/// `FileSkipCheck` does the same without checking that the file exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Default,
    File,
    #[serde(rename = "file:skipcheck")]
    FileSkipCheck,
}

/// One selectable result row.
///
/// Built with [`Item::new`] and chained setters. No field is validated;
/// Alfred's own behavior is the contract for what values mean.
///
/// # Examples
///
/// ```rust
/// use alfred_script_filter::{to_string, Item};
///
/// let item = Item::new("Open project").arg("~/src/project").valid(true);
/// assert_eq!(
///     to_string(&item).unwrap(),
///     r#"{"title":"Open project","arg":"~/src/project","valid":true}"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Item {
    #[serde(skip_serializing_if = "Option::is_none")]
    uid: Option<String>,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    arg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    valid: Option<bool>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    match_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    autocomplete: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    item_type: Option<ItemType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mods: Option<Modifiers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<Text>,
    #[serde(rename = "quicklookurl", skip_serializing_if = "Option::is_none")]
    quicklook_url: Option<String>,
}

impl Item {
    /// Creates an `Item` with the given title and nothing else set.
    ///
    /// The title is accepted as-is, including the empty string.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Item {
            uid: None,
            title: title.into(),
            subtitle: None,
            arg: None,
            icon: None,
            valid: None,
            match_text: None,
            autocomplete: None,
            item_type: None,
            mods: None,
            text: None,
            quicklook_url: None,
        }
    }

    /// Creates an `Item` with `valid` explicitly set to `false`.
    ///
    /// The usual shape for a placeholder or error row that must not be
    /// actionable. Distinct from [`Item::new`], which leaves `valid`
    /// unset so no `"valid"` key is emitted at all.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use alfred_script_filter::{to_string, Item};
    ///
    /// let item = Item::invalid("No results");
    /// assert_eq!(
    ///     to_string(&item).unwrap(),
    ///     r#"{"title":"No results","valid":false}"#
    /// );
    /// ```
    #[must_use]
    pub fn invalid(title: impl Into<String>) -> Self {
        Item::new(title).valid(false)
    }

    /// Sets the uid, Alfred's key for learning result ordering.
    #[must_use]
    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Replaces the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the subtitle.
    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Sets the arg passed on to the workflow when actioned.
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

    /// Sets whether the result can be actioned.
    #[must_use]
    pub fn valid(mut self, valid: bool) -> Self {
        self.valid = Some(valid);
        self
    }

    /// Sets the text Alfred filters against instead of the title.
    #[must_use]
    pub fn match_text(mut self, match_text: impl Into<String>) -> Self {
        self.match_text = Some(match_text.into());
        self
    }

    /// Sets the autocomplete text applied on tab.
    #[must_use]
    pub fn autocomplete(mut self, autocomplete: impl Into<String>) -> Self {
        self.autocomplete = Some(autocomplete.into());
        self
    }

    /// Sets the item type.
    #[must_use]
    pub fn item_type(mut self, item_type: ItemType) -> Self {
        self.item_type = Some(item_type);
        self
    }

    /// Replaces the whole modifier set.
    #[must_use]
    pub fn mods(mut self, mods: Modifiers) -> Self {
        self.mods = Some(mods);
        self
    }

    /// Sets the shift modifier, creating the modifier set on first use.
    #[must_use]
    pub fn mod_shift(mut self, modifier: Modifier) -> Self {
        self.mods = Some(self.mods.unwrap_or_default().shift(modifier));
        self
    }

    /// Sets the fn modifier, creating the modifier set on first use.
    #[must_use]
    pub fn mod_fn(mut self, modifier: Modifier) -> Self {
        self.mods = Some(self.mods.unwrap_or_default().fn_key(modifier));
        self
    }

    /// Sets the ctrl modifier, creating the modifier set on first use.
    #[must_use]
    pub fn mod_ctrl(mut self, modifier: Modifier) -> Self {
        self.mods = Some(self.mods.unwrap_or_default().ctrl(modifier));
        self
    }

    /// Sets the alt modifier, creating the modifier set on first use.
    #[must_use]
    pub fn mod_alt(mut self, modifier: Modifier) -> Self {
        self.mods = Some(self.mods.unwrap_or_default().alt(modifier));
        self
    }

    /// Sets the cmd modifier, creating the modifier set on first use.
    #[must_use]
    pub fn mod_cmd(mut self, modifier: Modifier) -> Self {
        self.mods = Some(self.mods.unwrap_or_default().cmd(modifier));
        self
    }

    /// Sets the copy text, creating the text pair on first use.
    #[must_use]
    pub fn copy_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(self.text.unwrap_or_default().copy(text));
        self
    }

    /// Sets the large-type text, creating the text pair on first use.
    #[must_use]
    pub fn large_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(self.text.unwrap_or_default().large_type(text));
        self
    }

    /// Sets both copy and large-type text to the same string.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.copy_text(text.clone()).large_text(text)
    }

    /// Sets the quick look URL previewed on shift.
    #[must_use]
    pub fn quicklook_url(mut self, url: impl Into<String>) -> Self {
        self.quicklook_url = Some(url.into());
        self
    }
}
