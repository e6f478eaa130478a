//! Result types returned by the queries.
//!
//! All of them serialize, so a caller can print them as a table or dump
//! them as JSON without further conversion.

use data_loader::{Name, WorkSummary};
use serde::Serialize;

/// Bucket for works without any Director credit
pub const UNKNOWN_DIRECTOR: &str = "(unknown)";

/// A name and how often it was counted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCount {
    pub name: Name,
    pub count: usize,
}

impl From<(Name, usize)> for NameCount {
    fn from((name, count): (Name, usize)) -> Self {
        Self { name, count }
    }
}

/// A work and the size of its cast
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastSize {
    pub work: WorkSummary,
    pub cast_size: usize,
}

/// Two actors and the number of works they share.
///
/// `first` sorts before `second` by folded name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairCount {
    pub first: Name,
    pub second: Name,
    pub count: usize,
}

/// A person who directed, produced and wrote the same work
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreativeTrio {
    pub work: WorkSummary,
    pub person: Name,
}

/// Co-appearance rings around a root person
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rings {
    pub root: String,
    /// Names sharing a cast with the root
    pub first: Vec<Name>,
    /// Names sharing a cast with someone in `first`, excluding `first` and the root
    pub second: Vec<Name>,
}

/// Mean cast and crew size of one director's works
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorGroup {
    pub director: Name,
    pub films: usize,
    pub avg_cast: f64,
    pub avg_crew: f64,
}

/// The department a person worked in most often
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerPath {
    pub person: Name,
    pub department: Name,
    pub credits: usize,
}

/// Mean cast size of the works a department contributed to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentAverage {
    pub department: Name,
    pub works: usize,
    pub avg_cast: f64,
}

/// Characters grouped by their first word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Archetype {
    pub token: Name,
    pub count: usize,
}
