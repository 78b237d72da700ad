//! Well-known user directories offered as navigation shortcuts

use super::Item;
use log::{debug, warn};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonDir {
    Desktop,
    Documents,
    Downloads,
}

impl CommonDir {
    /// Shortcut order shown in the sidebar.
    pub const ORDER: [CommonDir; 3] = [
        CommonDir::Desktop,
        CommonDir::Documents,
        CommonDir::Downloads,
    ];

    /// Platform location, or `None` when the platform does not define one.
    pub fn resolve(self) -> Option<PathBuf> {
        match self {
            CommonDir::Desktop => dirs::desktop_dir(),
            CommonDir::Documents => dirs::document_dir(),
            CommonDir::Downloads => dirs::download_dir(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CommonDir::Desktop => "Desktop",
            CommonDir::Documents => "Documents",
            CommonDir::Downloads => "Downloads",
        }
    }
}

/// Resolves desktop, documents and downloads, in that order.
///
/// Existence is not checked. Locations the platform does not define are
/// left out rather than failing the whole list.
pub fn list_common_directories() -> Vec<Item> {
    common_directories_from(CommonDir::ORDER.iter().map(|dir| (*dir, dir.resolve())))
}

fn common_directories_from<I>(resolved: I) -> Vec<Item>
where
    I: IntoIterator<Item = (CommonDir, Option<PathBuf>)>,
{
    let items: Vec<Item> = resolved
        .into_iter()
        .filter_map(|(dir, path)| match path {
            Some(path) => Some(Item::directory(&path)),
            None => {
                warn!("No {} directory defined on this platform", dir.label());
                None
            }
        })
        .collect();

    debug!("Resolved {} common directories", items.len());
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemKind;

    #[test]
    fn test_common_directories_are_directories() {
        let items = list_common_directories();

        assert!(items.len() <= 3);
        assert!(items.iter().all(|i| i.kind == ItemKind::Directory));
    }

    #[test]
    fn test_common_directories_follow_platform_order() {
        let expected: Vec<PathBuf> = CommonDir::ORDER
            .iter()
            .filter_map(|dir| dir.resolve())
            .collect();
        let paths: Vec<PathBuf> = list_common_directories()
            .into_iter()
            .map(|i| i.path)
            .collect();

        assert_eq!(paths, expected);
    }

    #[test]
    fn test_unresolved_slots_are_omitted() {
        let items = common_directories_from(vec![
            (CommonDir::Desktop, None),
            (CommonDir::Documents, Some(PathBuf::from("/home/u/Documents"))),
            (CommonDir::Downloads, Some(PathBuf::from("/home/u/.downloads"))),
        ]);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Documents");
        assert!(!items[0].hidden);
        assert_eq!(items[1].name, ".downloads");
        assert!(items[1].hidden);
    }

    #[test]
    fn test_nothing_resolved_is_empty() {
        let items = common_directories_from(CommonDir::ORDER.iter().map(|d| (*d, None)));
        assert!(items.is_empty());
    }

    #[test]
    fn test_existence_not_required() {
        let items = common_directories_from(vec![(
            CommonDir::Desktop,
            Some(PathBuf::from("/definitely/not/here/Desktop")),
        )]);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, ItemKind::Directory);
    }
}
