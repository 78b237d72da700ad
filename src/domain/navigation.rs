//! Navigation state: the directory being browsed and the active filter
//!
//! Every transition bumps a generation counter and produces a
//! [`ListingRequest`]. Results come back as a [`Listing`] and are only
//! accepted while their generation is still current, so a slow listing for a
//! directory the user already left can never overwrite the newer one.

use super::{list_directory, Filter, Item};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What happens to the active filter when the directory changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterPolicy {
    /// Go back to [`Filter::All`] on every directory change
    #[default]
    Reset,
    /// Keep whatever filter was selected
    Preserve,
}

/// A listing to perform for a given state generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    pub generation: u64,
    pub path: PathBuf,
    pub filter: Filter,
}

impl ListingRequest {
    /// Performs the listing on the calling thread.
    pub fn run(self) -> Listing {
        let items = list_directory(&self.path, self.filter);
        Listing {
            generation: self.generation,
            path: self.path,
            filter: self.filter,
            items,
        }
    }
}

/// The result of a [`ListingRequest`].
#[derive(Debug, Clone)]
pub struct Listing {
    pub generation: u64,
    pub path: PathBuf,
    pub filter: Filter,
    pub items: Vec<Item>,
}

#[derive(Debug)]
pub struct NavigationState {
    current_path: PathBuf,
    active_filter: Filter,
    policy: FilterPolicy,
    generation: u64,
    items: Vec<Item>,
    /// Generation the current `items` belong to
    listed: Option<u64>,
}

impl NavigationState {
    /// Creates the state without listing anything yet.
    ///
    /// Call [`NavigationState::start`] (or submit [`NavigationState::request`]
    /// to a background lister) to populate it.
    pub fn new(start_path: PathBuf, filter: Filter, policy: FilterPolicy) -> Self {
        Self {
            current_path: start_path,
            active_filter: filter,
            policy,
            generation: 0,
            items: Vec::new(),
            listed: None,
        }
    }

    /// `(home, All)` with its initial listing done.
    pub fn on_start(policy: FilterPolicy) -> Self {
        let mut state = Self::new(home_directory(), Filter::All, policy);
        state.start();
        state
    }

    /// Performs the initial listing.
    pub fn start(&mut self) {
        info!(
            "Starting in {} ({:?})",
            self.current_path.display(),
            self.active_filter
        );
        let request = self.request();
        self.complete(request);
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    pub fn active_filter(&self) -> Filter {
        self.active_filter
    }

    pub fn policy(&self) -> FilterPolicy {
        self.policy
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Items for the current state; empty while a listing is outstanding.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Whether the current generation has not been listed yet.
    pub fn is_loading(&self) -> bool {
        self.listed != Some(self.generation)
    }

    /// Listing request for the current state, without transitioning.
    pub fn request(&self) -> ListingRequest {
        ListingRequest {
            generation: self.generation,
            path: self.current_path.clone(),
            filter: self.active_filter,
        }
    }

    /// Replaces the filter and returns the listing that must follow.
    pub fn request_filter(&mut self, filter: Filter) -> ListingRequest {
        debug!("Filter {:?} -> {:?}", self.active_filter, filter);
        self.active_filter = filter;
        self.advance()
    }

    /// Moves to `path`, applying the filter policy, and returns the listing
    /// that must follow.
    pub fn request_directory(&mut self, path: PathBuf) -> ListingRequest {
        info!("Entering {}", path.display());
        self.current_path = path;
        if self.policy == FilterPolicy::Reset {
            self.active_filter = Filter::All;
        }
        self.advance()
    }

    /// Moves to the parent directory, or `None` at the root.
    pub fn request_parent(&mut self) -> Option<ListingRequest> {
        let parent = self
            .current_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())?
            .to_path_buf();
        Some(self.request_directory(parent))
    }

    /// Enters `item` if it is a directory; other kinds are not a transition.
    pub fn request_item(&mut self, item: &Item) -> Option<ListingRequest> {
        item.is_dir().then(|| self.request_directory(item.path.clone()))
    }

    pub fn request_home(&mut self) -> ListingRequest {
        self.request_directory(home_directory())
    }

    /// Re-lists the current state without changing it.
    pub fn request_refresh(&mut self) -> ListingRequest {
        self.advance()
    }

    /// Accepts a listing if it belongs to the current generation.
    ///
    /// Returns `false` for superseded listings, which are dropped.
    pub fn apply(&mut self, listing: Listing) -> bool {
        if listing.generation != self.generation {
            debug!(
                "Discarding stale listing of {} (generation {}, current {})",
                listing.path.display(),
                listing.generation,
                self.generation
            );
            return false;
        }
        self.items = listing.items;
        self.listed = Some(listing.generation);
        true
    }

    /// Selects a filter and re-lists synchronously.
    pub fn select_filter(&mut self, filter: Filter) {
        let request = self.request_filter(filter);
        self.complete(request);
    }

    /// Enters `path` and re-lists synchronously.
    pub fn select_directory(&mut self, path: PathBuf) {
        let request = self.request_directory(path);
        self.complete(request);
    }

    /// Enters `item` if it is a directory. Other kinds are not a transition.
    pub fn select_item(&mut self, item: &Item) -> bool {
        match self.request_item(item) {
            Some(request) => {
                self.complete(request);
                true
            }
            None => false,
        }
    }

    /// Enters the parent directory; `false` at the root.
    pub fn go_parent(&mut self) -> bool {
        match self.request_parent() {
            Some(request) => {
                self.complete(request);
                true
            }
            None => false,
        }
    }

    pub fn go_home(&mut self) {
        let request = self.request_home();
        self.complete(request);
    }

    pub fn refresh(&mut self) {
        let request = self.request_refresh();
        self.complete(request);
    }

    fn advance(&mut self) -> ListingRequest {
        self.generation += 1;
        self.items.clear();
        self.request()
    }

    fn complete(&mut self, request: ListingRequest) {
        let listing = request.run();
        self.apply(listing);
    }
}

/// The user's home directory, falling back to the working directory.
pub fn home_directory() -> PathBuf {
    dirs::home_dir()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemKind;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let dir_path = temp_dir.path();
        fs::write(dir_path.join("a.txt"), b"a").unwrap();
        fs::write(dir_path.join(".secret"), b"s").unwrap();
        fs::create_dir(dir_path.join("sub")).unwrap();
        fs::write(dir_path.join("sub").join("inner.txt"), b"i").unwrap();
        temp_dir
    }

    fn started(path: &Path, policy: FilterPolicy) -> NavigationState {
        let mut state = NavigationState::new(path.to_path_buf(), Filter::All, policy);
        state.start();
        state
    }

    mod transition_tests {
        use super::*;

        #[test]
        fn test_new_is_unlisted() {
            let temp_dir = fixture();
            let state =
                NavigationState::new(temp_dir.path().to_path_buf(), Filter::All, FilterPolicy::Reset);

            assert!(state.is_loading());
            assert!(state.items().is_empty());
        }

        #[test]
        fn test_start_lists_current_path() {
            let temp_dir = fixture();
            let state = started(temp_dir.path(), FilterPolicy::Reset);

            assert!(!state.is_loading());
            assert_eq!(state.items().len(), 3);
            assert_eq!(state.active_filter(), Filter::All);
        }

        #[test]
        fn test_on_start_uses_home() {
            let state = NavigationState::on_start(FilterPolicy::Reset);

            assert_eq!(state.current_path(), home_directory().as_path());
            assert_eq!(state.active_filter(), Filter::All);
            assert!(!state.is_loading());
        }

        #[test]
        fn test_select_filter_keeps_path() {
            let temp_dir = fixture();
            let mut state = started(temp_dir.path(), FilterPolicy::Reset);

            state.select_filter(Filter::Directories);

            assert_eq!(state.current_path(), temp_dir.path());
            assert_eq!(state.active_filter(), Filter::Directories);
            assert_eq!(state.items().len(), 1);
            assert!(state.items().iter().all(|i| i.kind == ItemKind::Directory));
        }

        #[test]
        fn test_select_directory_resets_filter() {
            let temp_dir = fixture();
            let mut state = started(temp_dir.path(), FilterPolicy::Reset);
            state.select_filter(Filter::Hidden);

            state.select_directory(temp_dir.path().join("sub"));

            assert_eq!(state.active_filter(), Filter::All);
            assert_eq!(state.items().len(), 1);
            assert_eq!(state.items()[0].name, "inner.txt");
        }

        #[test]
        fn test_select_directory_preserves_filter() {
            let temp_dir = fixture();
            let mut state = started(temp_dir.path(), FilterPolicy::Preserve);
            state.select_filter(Filter::Directories);

            state.select_directory(temp_dir.path().join("sub"));

            assert_eq!(state.active_filter(), Filter::Directories);
            assert!(state.items().is_empty());
        }

        #[test]
        fn test_select_item_only_enters_directories() {
            let temp_dir = fixture();
            let mut state = started(temp_dir.path(), FilterPolicy::Reset);
            let file = state
                .items()
                .iter()
                .find(|i| i.name == "a.txt")
                .cloned()
                .unwrap();
            let dir = state
                .items()
                .iter()
                .find(|i| i.name == "sub")
                .cloned()
                .unwrap();
            let generation = state.generation();

            assert!(!state.select_item(&file));
            assert_eq!(state.generation(), generation);
            assert_eq!(state.current_path(), temp_dir.path());

            assert!(state.select_item(&dir));
            assert_eq!(state.current_path(), temp_dir.path().join("sub"));
        }

        #[test]
        fn test_go_parent() {
            let temp_dir = fixture();
            let mut state = started(&temp_dir.path().join("sub"), FilterPolicy::Reset);

            assert!(state.go_parent());
            assert_eq!(state.current_path(), temp_dir.path());
            assert_eq!(state.items().len(), 3);
        }

        #[test]
        fn test_go_parent_at_root() {
            let mut state = NavigationState::new(PathBuf::from("/"), Filter::All, FilterPolicy::Reset);
            let generation = state.generation();

            assert!(!state.go_parent());
            assert_eq!(state.generation(), generation);
        }

        #[test]
        fn test_nonexistent_directory_lists_empty() {
            let temp_dir = fixture();
            let mut state = started(temp_dir.path(), FilterPolicy::Reset);

            state.select_directory(temp_dir.path().join("gone"));

            assert!(!state.is_loading());
            assert!(state.items().is_empty());
        }

        #[test]
        fn test_refresh_picks_up_changes() {
            let temp_dir = fixture();
            let mut state = started(temp_dir.path(), FilterPolicy::Reset);
            fs::write(temp_dir.path().join("b.txt"), b"b").unwrap();

            state.refresh();

            assert_eq!(state.items().len(), 4);
        }

        #[test]
        fn test_every_transition_lists_once() {
            let temp_dir = fixture();
            let mut state = started(temp_dir.path(), FilterPolicy::Reset);
            let start = state.generation();

            state.select_filter(Filter::Files);
            state.select_directory(temp_dir.path().join("sub"));
            state.go_parent();
            state.refresh();

            assert_eq!(state.generation(), start + 4);
            assert!(!state.is_loading());
        }
    }

    mod generation_tests {
        use super::*;

        #[test]
        fn test_transition_clears_items_until_applied() {
            let temp_dir = fixture();
            let mut state = started(temp_dir.path(), FilterPolicy::Reset);

            let request = state.request_filter(Filter::Files);

            assert!(state.is_loading());
            assert!(state.items().is_empty());

            assert!(state.apply(request.run()));
            assert!(!state.is_loading());
            assert_eq!(state.items().len(), 2);
        }

        #[test]
        fn test_stale_listing_is_discarded() {
            let temp_dir = fixture();
            let mut state = started(temp_dir.path(), FilterPolicy::Reset);

            let stale = state.request_directory(temp_dir.path().join("sub"));
            let current = state.request_parent().unwrap();

            assert!(state.apply(current.run()));
            assert!(!state.apply(stale.run()));

            assert_eq!(state.current_path(), temp_dir.path());
            assert_eq!(state.items().len(), 3);
        }

        #[test]
        fn test_out_of_order_completion() {
            let temp_dir = fixture();
            let mut state = started(temp_dir.path(), FilterPolicy::Reset);

            let first = state.request_filter(Filter::Directories);
            let second = state.request_filter(Filter::Hidden);

            assert!(!state.apply(first.run()));
            assert!(state.is_loading());
            assert!(state.apply(second.run()));

            let names: Vec<_> = state.items().iter().map(|i| i.name.as_str()).collect();
            assert_eq!(names, vec![".secret"]);
        }
    }
}
