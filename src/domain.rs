pub mod common_dirs;
pub mod navigation;

pub use common_dirs::{list_common_directories, CommonDir};
pub use navigation::{home_directory, FilterPolicy, Listing, ListingRequest, NavigationState};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// What a filesystem entry turned out to be when it was listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Directory,
    File,
    /// Dangling symlinks, sockets, devices, and anything that could not be stat'd.
    Other,
}

impl ItemKind {
    /// Classifies `path` by a filesystem type check, following symlinks.
    ///
    /// Exactly one kind is returned for every path. A path that cannot be
    /// stat'd is `Other`; callers are expected to pass paths they enumerated.
    pub fn of(path: &Path) -> Self {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => ItemKind::Directory,
            Ok(meta) if meta.is_file() => ItemKind::File,
            _ => ItemKind::Other,
        }
    }
}

/// Dot-prefix convention; no platform hidden attributes are consulted.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Returns `(kind, hidden)` for an existing entry.
pub fn classify(path: &Path) -> (ItemKind, bool) {
    (ItemKind::of(path), is_hidden(&display_name(path)))
}

/// Final path component, or the whole path when there is none (e.g. `/`).
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// One entry shown in a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub path: PathBuf,
    pub kind: ItemKind,
    pub hidden: bool,
}

impl Item {
    /// Builds an item by classifying `path` on disk.
    pub fn from_path(path: &Path) -> Self {
        let (kind, hidden) = classify(path);
        Self {
            name: display_name(path),
            path: path.to_path_buf(),
            kind,
            hidden,
        }
    }

    /// Builds a directory item without touching the filesystem.
    pub fn directory(path: &Path) -> Self {
        let name = display_name(path);
        Self {
            hidden: is_hidden(&name),
            name,
            path: path.to_path_buf(),
            kind: ItemKind::Directory,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == ItemKind::Directory
    }
}

/// Which entries a listing keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Directories,
    Files,
    Hidden,
}

impl Filter {
    /// Every filter, in the order the UI presents them.
    pub const VARIANTS: [Filter; 4] = [
        Filter::All,
        Filter::Directories,
        Filter::Files,
        Filter::Hidden,
    ];

    pub fn matches(self, kind: ItemKind, hidden: bool) -> bool {
        match self {
            Filter::All => true,
            Filter::Directories => kind == ItemKind::Directory,
            Filter::Files => kind == ItemKind::File,
            Filter::Hidden => hidden,
        }
    }

    /// Whether the filter can be decided from the entry name alone.
    fn needs_stat(self) -> bool {
        !matches!(self, Filter::Hidden)
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Directories => "Dirs",
            Filter::Files => "Files",
            Filter::Hidden => "Hidden",
        }
    }
}

/// Lists the immediate children of `dir_path` that pass `filter`.
///
/// # Behavior
/// - A missing path or a path that is not a directory yields an empty list
/// - Does not recurse into subdirectories
/// - Entries that cannot be read while enumerating are skipped
/// - Entries that cannot be stat'd are classified as [`ItemKind::Other`]
/// - Sorted by name, case-insensitively, ties broken by the exact name
pub fn list_directory(dir_path: &Path, filter: Filter) -> Vec<Item> {
    if !dir_path.exists() {
        debug!("Listing {}: path does not exist", dir_path.display());
        return Vec::new();
    }
    if !dir_path.is_dir() {
        debug!("Listing {}: not a directory", dir_path.display());
        return Vec::new();
    }

    let entries = match fs::read_dir(dir_path) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot read directory {}: {}", dir_path.display(), e);
            return Vec::new();
        }
    };

    let mut items = Vec::new();

    for entry_result in entries {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir_path.display(), e);
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        let hidden = is_hidden(&name);

        // Hidden is a name check; skip the stat for names that cannot pass
        if !filter.needs_stat() && !filter.matches(ItemKind::Other, hidden) {
            continue;
        }

        let path = entry.path();
        let kind = ItemKind::of(&path);

        if !filter.matches(kind, hidden) {
            continue;
        }

        items.push(Item {
            name,
            path,
            kind,
            hidden,
        });
    }

    items.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });

    debug!(
        "Listed {} entries in {} ({:?})",
        items.len(),
        dir_path.display(),
        filter
    );

    items
}
