//! Lookup structures derived from the loaded works.
//!
//! - [`PersonIndex`]: person name -> works that credit the person (cast or crew)
//! - [`DepartmentIndex`]: department name -> crew credits in that department
//! - [`Catalog`]: owns the works and both indices; every query reads from it
//!
//! Indices hold positions into the works vector rather than copies, and are
//! built once. Name keys are case-insensitive (see [`Name`]).

use crate::name::Name;
use crate::types::*;
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::debug;

// =============================================================================
// PersonIndex
// =============================================================================

/// Person name -> positions of the works crediting that person.
///
/// A work is listed once per person no matter how many credits the person
/// holds in it. Lists are in load order.
#[derive(Debug, Default)]
pub struct PersonIndex {
    works: IndexMap<Name, Vec<WorkIdx>>,
}

impl PersonIndex {
    pub fn build(works: &[Work]) -> Self {
        let mut index: IndexMap<Name, Vec<WorkIdx>> = IndexMap::new();

        for (idx, work) in works.iter().enumerate() {
            let mut seen: HashSet<Name> = HashSet::new();
            let names = work
                .cast
                .iter()
                .map(|c| c.name.as_str())
                .chain(work.crew.iter().map(|c| c.name.as_str()));

            for name in names {
                let key = Name::new(name);
                if seen.insert(key.clone()) {
                    index.entry(key).or_default().push(idx);
                }
            }
        }

        debug!("Person index built with {} names", index.len());
        Self { works: index }
    }

    /// Works crediting `name`; empty for unknown names.
    pub fn works_for(&self, name: &str) -> &[WorkIdx] {
        self.works
            .get(&Name::new(name))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.works.contains_key(&Name::new(name))
    }

    /// Names in first-seen order, with their first-seen casing.
    pub fn names(&self) -> impl Iterator<Item = &Name> {
        self.works.keys()
    }

    pub fn len(&self) -> usize {
        self.works.len()
    }

    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }
}

// =============================================================================
// DepartmentIndex
// =============================================================================

/// A crew credit located by work position and position in that work's crew
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CrewRef {
    pub work: WorkIdx,
    pub crew: usize,
}

/// Department name -> every crew credit in that department.
///
/// Credits with no department are indexed under the empty name.
#[derive(Debug, Default)]
pub struct DepartmentIndex {
    entries: IndexMap<Name, Vec<CrewRef>>,
}

impl DepartmentIndex {
    pub fn build(works: &[Work]) -> Self {
        let mut entries: IndexMap<Name, Vec<CrewRef>> = IndexMap::new();

        for (work_idx, work) in works.iter().enumerate() {
            for (crew_idx, credit) in work.crew.iter().enumerate() {
                entries
                    .entry(Name::new(credit.department.as_str()))
                    .or_default()
                    .push(CrewRef {
                        work: work_idx,
                        crew: crew_idx,
                    });
            }
        }

        debug!("Department index built with {} departments", entries.len());
        Self { entries }
    }

    /// Credits in `department`; empty for unknown departments.
    pub fn entries(&self, department: &str) -> &[CrewRef] {
        self.entries
            .get(&Name::new(department))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Departments with their credits, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&Name, &[CrewRef])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn departments(&self) -> impl Iterator<Item = &Name> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Catalog - the query context
// =============================================================================

/// The loaded works plus the indices built over them.
///
/// Constructed once and read-only afterwards, so it can be shared across
/// threads behind an `Arc` without locking.
#[derive(Debug, Default)]
pub struct Catalog {
    works: Vec<Work>,
    people: PersonIndex,
    departments: DepartmentIndex,
}

impl Catalog {
    /// Take ownership of the works and build both indices.
    pub fn new(works: Vec<Work>) -> Self {
        let people = PersonIndex::build(&works);
        let departments = DepartmentIndex::build(&works);
        Self {
            works,
            people,
            departments,
        }
    }

    pub fn works(&self) -> &[Work] {
        &self.works
    }

    pub fn work(&self, idx: WorkIdx) -> Option<&Work> {
        self.works.get(idx)
    }

    pub fn people(&self) -> &PersonIndex {
        &self.people
    }

    pub fn departments(&self) -> &DepartmentIndex {
        &self.departments
    }

    /// Resolve a crew reference from the department index.
    pub fn crew_credit(&self, r: CrewRef) -> Option<(&Work, &CrewAppearance)> {
        let work = self.works.get(r.work)?;
        Some((work, work.crew.get(r.crew)?))
    }

    /// Works crediting `name`, in load order.
    pub fn works_for<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Work> + use<'a> {
        self.people
            .works_for(name)
            .iter()
            .filter_map(move |&idx| self.works.get(idx))
    }

    /// First work whose title matches ignoring case.
    pub fn find_by_title(&self, title: &str) -> Option<&Work> {
        let wanted = Name::new(title);
        self.works.iter().find(|w| wanted.matches(&w.title))
    }

    pub fn len(&self) -> usize {
        self.works.len()
    }

    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }
}
