//! # Queries Crate
//!
//! Analytical questions over a loaded [`Catalog`] of movie credits.
//!
//! ## Components
//!
//! ### Filters
//! Exact-match lookups: films by director or composer, films sharing a set
//! of actors, characters played, departments, people per department.
//!
//! ### Rankings
//! Top-N by count: busiest actors, a director's inner circle, actor pairs,
//! crew members spanning the most departments.
//!
//! ### Roles
//! Multi-role detection inside one work (director + producer + writer),
//! an actor's most common crew department, character archetypes.
//!
//! ### Network
//! Two-hop co-appearance rings around a person, and the people two
//! directors have both worked with.
//!
//! ### Aggregates
//! Mean cast/crew sizes grouped by director, mean cast size per department.
//!
//! Every query borrows the catalog immutably and returns owned results, so
//! running a query twice gives the same answer and queries can run
//! concurrently against a shared `Arc<Catalog>`.
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{load_from_path, LoaderOptions};
//! use queries::{top_actor_pairs, degrees_of_separation};
//!
//! let catalog = load_from_path(path, &LoaderOptions::default())?.catalog;
//!
//! for pair in top_actor_pairs(&catalog, 10) {
//!     println!("{} / {}: {}", pair.first, pair.second, pair.count);
//! }
//! let rings = degrees_of_separation(&catalog, "Kevin Bacon");
//! ```

// Public modules
pub mod counter;
pub mod types;
pub mod filters;
pub mod rankings;
pub mod roles;
pub mod network;
pub mod aggregates;

// Re-export commonly used items
pub use counter::Counter;
pub use types::*;
pub use filters::{
    cast_and_crew_overlap, characters_by_actor, count_people_in_department, director_by_work,
    films_by_composer, films_by_director, films_with_actors, largest_casts, unique_departments,
};
pub use rankings::{diversity_index, inner_circle, top_actor_pairs, top_actors_by_film_count};
pub use roles::{career_paths, character_archetypes, creative_trios};
pub use network::{degrees_of_separation, shared_collaborators};
pub use aggregates::{department_cast_averages, group_by_director};

#[cfg(test)]
pub(crate) mod fixtures {
    use data_loader::{CastAppearance, CrewAppearance, Work, WorkId};

    /// Build a work from (name, character) and (name, department, job) tuples.
    pub fn work(
        id: WorkId,
        title: &str,
        cast: &[(&str, &str)],
        crew: &[(&str, &str, &str)],
    ) -> Work {
        Work {
            id,
            title: title.to_string(),
            cast: cast
                .iter()
                .enumerate()
                .map(|(i, &(name, character))| CastAppearance {
                    id: i as u64,
                    name: name.to_string(),
                    character: character.to_string(),
                })
                .collect(),
            crew: crew
                .iter()
                .enumerate()
                .map(|(i, &(name, department, job))| CrewAppearance {
                    id: 1000 + i as u64,
                    name: name.to_string(),
                    department: department.to_string(),
                    job: job.to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Catalog;

    #[test]
    fn test_queries_on_empty_catalog() {
        let catalog = Catalog::new(Vec::new());

        assert!(films_by_director(&catalog, "Anyone").is_empty());
        assert!(top_actor_pairs(&catalog, 10).is_empty());
        assert!(creative_trios(&catalog).is_empty());
        assert!(group_by_director(&catalog).is_empty());
        assert!(department_cast_averages(&catalog).is_empty());
        assert!(cast_and_crew_overlap(&catalog, "Titanic").is_none());

        let rings = degrees_of_separation(&catalog, "Kevin Bacon");
        assert!(rings.first.is_empty() && rings.second.is_empty());
    }

    #[test]
    fn test_results_serialize() {
        let pair = PairCount {
            first: "A".into(),
            second: "B".into(),
            count: 3,
        };
        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(json, serde_json::json!({"first": "A", "second": "B", "count": 3}));
    }
}
