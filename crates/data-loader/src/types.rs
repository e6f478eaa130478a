//! Core domain types for the movie credits dataset.
//!
//! A [`Work`] is one movie together with its credited cast and crew. Works
//! are built once by the loader and never mutated afterwards.

use crate::name::names_match;
use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier of a work (the `movie_id` column)
pub type WorkId = u32;

/// Identifier of a credited person; zero when the source omits it
pub type PersonId = u64;

/// Position of a work inside the loaded collection.
///
/// Indices refer to works by position rather than by [`WorkId`] because the
/// loader does not enforce identifier uniqueness.
pub type WorkIdx = usize;

// =============================================================================
// Well-known job titles
// =============================================================================

pub const JOB_DIRECTOR: &str = "Director";
pub const JOB_PRODUCER: &str = "Producer";
pub const JOB_COMPOSER: &str = "Original Music Composer";
pub const JOB_ACTOR: &str = "Actor";

/// Job titles that count as a writing credit
pub const WRITING_JOBS: [&str; 3] = ["Writer", "Screenplay", "Author"];

// =============================================================================
// Credits
// =============================================================================

/// One person's credit as an actor in a work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastAppearance {
    pub id: PersonId,
    pub name: String,
    /// Character played; empty when the source omits it
    pub character: String,
}

/// One person's credit as a crew member in a work.
///
/// The same person may hold several crew credits in one work (e.g. Director
/// and Producer), one `CrewAppearance` per job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewAppearance {
    pub id: PersonId,
    pub name: String,
    pub department: String,
    pub job: String,
}

impl CrewAppearance {
    /// Returns true when this credit's job equals `job` ignoring case and
    /// surrounding whitespace.
    pub fn has_job(&self, job: &str) -> bool {
        names_match(self.job.trim(), job)
    }
}

// =============================================================================
// Work
// =============================================================================

/// A movie with its cast and crew, in source order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Work {
    pub id: WorkId,
    pub title: String,
    pub cast: Vec<CastAppearance>,
    pub crew: Vec<CrewAppearance>,
}

impl Work {
    /// Iterator over the names of crew members credited with `job`.
    pub fn crew_with_job<'a>(&'a self, job: &'a str) -> impl Iterator<Item = &'a CrewAppearance> + 'a {
        self.crew.iter().filter(move |c| c.has_job(job))
    }

    /// Returns true when `name` holds a `job` credit in this work.
    pub fn has_credit(&self, name: &str, job: &str) -> bool {
        self.crew_with_job(job).any(|c| names_match(&c.name, name))
    }

    /// Returns true when `name` appears in the cast.
    pub fn has_cast_member(&self, name: &str) -> bool {
        self.cast.iter().any(|c| names_match(&c.name, name))
    }

    /// Name of the first Director credit, if any.
    pub fn first_director(&self) -> Option<&str> {
        self.crew_with_job(JOB_DIRECTOR).next().map(|c| c.name.as_str())
    }

    pub fn summary(&self) -> WorkSummary {
        WorkSummary {
            id: self.id,
            title: self.title.clone(),
        }
    }
}

/// Identifier and title of a work, as surfaced by queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkSummary {
    pub id: WorkId,
    pub title: String,
}
