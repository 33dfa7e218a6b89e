//! Well-known macOS system icons.
//!
//! macOS ships a large set of stock icons in the CoreTypes bundle. Each
//! function here returns an [`Icon`] pointing at one of them, with no
//! [`IconType`](crate::IconType) set, ready to attach to an item:
//!
//! ```rust
//! use alfred_script_filter::{icons, Item};
//!
//! let item = Item::new("Open folder").icon(icons::generic_folder());
//! ```
//!
//! The paths are plain strings into
//! `/System/Library/CoreServices/CoreTypes.bundle/Contents/Resources`;
//! whether a given resource exists on the running OS release is Alfred's
//! problem at render time, consistent with the rest of this crate doing no
//! path validation. This is a curated set of the stable, commonly used
//! resources, not an exhaustive catalog.

use crate::Icon;

pub(crate) const CORE_TYPES: &str =
    "/System/Library/CoreServices/CoreTypes.bundle/Contents/Resources";

fn core_type(resource: &str) -> Icon {
    Icon::new(format!("{CORE_TYPES}/{resource}.icns"))
}

macro_rules! system_icons {
    ($($(#[$meta:meta])* $name:ident => $resource:literal,)*) => {
        $(
            $(#[$meta])*
            #[must_use]
            pub fn $name() -> Icon {
                core_type($resource)
            }
        )*

        #[cfg(test)]
        pub(crate) fn all() -> Vec<Icon> {
            vec![$($name(),)*]
        }
    };
}

system_icons! {
    // Alerts and badges
    alert_note => "AlertNoteIcon",
    alert_stop => "AlertStopIcon",
    problem_report => "ProblemReport",
    locked => "LockedIcon",
    unlocked => "UnlockedIcon",

    // Folders
    applications_folder => "ApplicationsFolderIcon",
    desktop_folder => "DesktopFolderIcon",
    developer_folder => "DeveloperFolderIcon",
    documents_folder => "DocumentsFolderIcon",
    downloads_folder => "DownloadsFolder",
    generic_folder => "GenericFolderIcon",
    home_folder => "HomeFolderIcon",
    library_folder => "LibraryFolderIcon",
    movie_folder => "MovieFolderIcon",
    music_folder => "MusicFolderIcon",
    open_folder => "OpenFolderIcon",
    pictures_folder => "PicturesFolderIcon",
    public_folder => "PublicFolderIcon",
    smart_folder => "SmartFolderIcon",
    system_folder => "SystemFolderIcon",
    users_folder => "UsersFolderIcon",
    utilities_folder => "UtilitiesFolder",

    // Generic files and resources
    executable_binary => "ExecutableBinaryIcon",
    generic_application => "GenericApplicationIcon",
    generic_document => "GenericDocumentIcon",
    generic_file_server => "GenericFileServerIcon",
    generic_font => "GenericFontIcon",
    generic_network => "GenericNetworkIcon",
    generic_question_mark => "GenericQuestionMarkIcon",
    generic_url => "GenericURLIcon",
    generic_window => "GenericWindowIcon",
    unknown_fs_object => "UnknownFSObjectIcon",

    // Finder and toolbar
    bookmark => "BookmarkIcon",
    burnable_folder => "BurnableFolderIcon",
    clock => "Clock",
    connect_to => "ConnectToIcon",
    eject_media => "EjectMediaIcon",
    finder => "FinderIcon",
    grid => "GridIcon",
    help => "HelpIcon",
    magnifying_glass => "MagnifyingGlassIcon",
    multiple_items => "MultipleItemsIcon",
    recent_items => "RecentItemsIcon",
    toolbar_customize => "ToolbarCustomizeIcon",
    toolbar_delete => "ToolbarDeleteIcon",
    toolbar_favorites => "ToolbarFavoritesIcon",
    toolbar_info => "ToolbarInfo",

    // Users and sharing
    group => "GroupIcon",
    user => "UserIcon",
    user_unknown => "UserUnknownIcon",
    vcard => "VCardIcon",

    // Trash
    trash => "TrashIcon",
    full_trash => "FullTrashIcon",
}
