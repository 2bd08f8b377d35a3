//! Session owning the currently loaded dataset

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::error::Result;
use crate::loader::Indexes;

/// Holds the dataset that queries run against
///
/// A reload swaps in a fresh [`Indexes`] only once it is fully built.
/// Callers holding an `Arc` from [`Session::current`] keep querying the
/// dataset they started with.
#[derive(Debug, Default)]
pub struct Session {
    current: RwLock<Option<Arc<Indexes>>>,
}

impl Session {
    /// Create a session with no dataset loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a dataset from a JSON input file and make it current
    ///
    /// On failure the previously loaded dataset stays current.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Arc<Indexes>> {
        let path = path.as_ref();

        match Indexes::load(path) {
            Ok(indexes) => {
                info!(path = %path.display(), "dataset loaded");
                Ok(self.install(indexes))
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "dataset load failed");
                Err(e)
            }
        }
    }

    /// Make an already built dataset current
    pub fn install(&self, indexes: Indexes) -> Arc<Indexes> {
        let indexes = Arc::new(indexes);
        *self.current.write() = Some(Arc::clone(&indexes));
        indexes
    }

    /// The current dataset, if any
    pub fn current(&self) -> Option<Arc<Indexes>> {
        self.current.read().clone()
    }

    /// Check if a dataset is loaded
    pub fn is_loaded(&self) -> bool {
        self.current.read().is_some()
    }

    /// Drop the current dataset
    pub fn clear(&self) {
        *self.current.write() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_input(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();

        assert!(!session.is_loaded());
        assert!(session.current().is_none());
    }

    #[test]
    fn test_load_and_clear() {
        let file = write_input(
            r#"[{"postcode": "10224", "recipe": "Creamy Dill Chicken", "delivery": "Wednesday 1AM - 7PM"}]"#,
        );
        let session = Session::new();

        let loaded = session.load(file.path()).unwrap();
        assert_eq!(loaded.recipes().count(), 1);
        assert!(Arc::ptr_eq(&loaded, &session.current().unwrap()));

        session.clear();
        assert!(!session.is_loaded());
    }

    #[test]
    fn test_failed_reload_keeps_previous_dataset() {
        let good = write_input(
            r#"[{"postcode": "10224", "recipe": "Creamy Dill Chicken", "delivery": "Wednesday 1AM - 7PM"}]"#,
        );
        let bad = write_input("not json");
        let session = Session::new();

        let first = session.load(good.path()).unwrap();
        let result = session.load(bad.path());

        assert!(matches!(result, Err(Error::Decode(_))));
        assert!(Arc::ptr_eq(&first, &session.current().unwrap()));
    }

    #[test]
    fn test_reload_leaves_earlier_readers_untouched() {
        let first = write_input(
            r#"[{"postcode": "10224", "recipe": "Creamy Dill Chicken", "delivery": "Wednesday 1AM - 7PM"}]"#,
        );
        let second = write_input(
            r#"[
                {"postcode": "10224", "recipe": "Pork Stir Fry", "delivery": "Monday 8AM - 2PM"},
                {"postcode": "10224", "recipe": "Speedy Steak Fajitas", "delivery": "Monday 8AM - 2PM"}
            ]"#,
        );
        let session = Session::new();

        let before = session.load(first.path()).unwrap();
        session.load(second.path()).unwrap();

        assert_eq!(before.recipes().count(), 1);
        assert_eq!(session.current().unwrap().recipes().count(), 2);
    }
}
