//! # Data Loader Crate
//!
//! This crate loads a movie credits dataset (one row per movie, with cast
//! and crew serialized as JSON arrays) and indexes it for querying.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Work, CastAppearance, CrewAppearance)
//! - **name**: Case-insensitive name keys
//! - **parser**: Turn one raw row into a Work
//! - **loader**: Read a tabular source, skipping rows that fail
//! - **index**: PersonIndex, DepartmentIndex and the Catalog that owns them
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{load_from_path, LoaderOptions};
//! use std::path::Path;
//!
//! let report = load_from_path(Path::new("tmdb_5000_credits.csv"), &LoaderOptions::default())?;
//! println!("Loaded {} works, skipped {} rows", report.retained(), report.skipped.len());
//!
//! let catalog = report.catalog;
//! for work in catalog.works_for("Tom Hanks") {
//!     println!("{} {}", work.id, work.title);
//! }
//! ```

// Public modules
pub mod error;
pub mod name;
pub mod types;
pub mod parser;
pub mod loader;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use index::{Catalog, CrewRef, DepartmentIndex, PersonIndex};
pub use loader::{load_from_path, load_from_reader, LoadReport, LoaderOptions, SkippedRow};
pub use name::{fold_name, names_match, Name};
pub use types::{
    // Type aliases
    PersonId,
    WorkId,
    WorkIdx,
    // Core types
    CastAppearance,
    CrewAppearance,
    Work,
    WorkSummary,
    // Job titles
    JOB_ACTOR,
    JOB_COMPOSER,
    JOB_DIRECTOR,
    JOB_PRODUCER,
    WRITING_JOBS,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_work(id: WorkId, title: &str) -> Work {
        Work {
            id,
            title: title.to_string(),
            cast: vec![CastAppearance {
                id: 31,
                name: "Tom Hanks".to_string(),
                character: "Forrest Gump".to_string(),
            }],
            crew: vec![CrewAppearance {
                id: 24,
                name: "Robert Zemeckis".to_string(),
                department: "Directing".to_string(),
                job: "Director".to_string(),
            }],
        }
    }

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new(vec![sample_work(13, "Forrest Gump")]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.people().len(), 2);
        assert_eq!(catalog.departments().len(), 1);
    }

    #[test]
    fn test_empty_queries() {
        let catalog = Catalog::new(vec![sample_work(13, "Forrest Gump")]);

        // Unknown keys give empty results, not errors
        assert!(catalog.work(99).is_none());
        assert!(catalog.people().works_for("Nobody").is_empty());
        assert!(catalog.departments().entries("Camera").is_empty());
        assert!(catalog.find_by_title("Titanic").is_none());
    }

    #[test]
    fn test_catalog_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
