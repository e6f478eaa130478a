//! Top-N rankings built on [`Counter`].
//!
//! Every ranking here orders by count descending. Equal counts keep the
//! order in which the key was first counted while walking the works in
//! load order.

use crate::counter::Counter;
use crate::types::{NameCount, PairCount};
use data_loader::{Catalog, Name, JOB_ACTOR, JOB_DIRECTOR};
use indexmap::{IndexMap, IndexSet};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Actors ranked by the number of works whose cast includes them.
///
/// A name listed twice in one cast counts once for that work.
#[instrument(skip(catalog))]
pub fn top_actors_by_film_count(catalog: &Catalog, n: usize) -> Vec<NameCount> {
    let mut counter = Counter::new();
    for work in catalog.works() {
        let distinct: IndexSet<Name> = work.cast.iter().map(|c| Name::new(c.name.as_str())).collect();
        for name in distinct {
            counter.increment(name);
        }
    }
    debug!("Counted {} distinct actors", counter.len());
    counter.top(n).into_iter().map(NameCount::from).collect()
}

/// The crew members who most often worked on `director`'s films.
///
/// Counts shared works, so several credits on one work count once. Director
/// and Actor job credits are ignored, and so is the director themself, even
/// for their other jobs on the same work.
#[instrument(skip(catalog))]
pub fn inner_circle(catalog: &Catalog, director: &str, n: usize) -> Vec<NameCount> {
    let root = Name::new(director);
    let mut counter = Counter::new();

    for work in catalog
        .works_for(director)
        .filter(|w| w.has_credit(director, JOB_DIRECTOR))
    {
        let members: IndexSet<Name> = work
            .crew
            .iter()
            .filter(|c| !c.has_job(JOB_DIRECTOR) && !c.has_job(JOB_ACTOR))
            .map(|c| Name::new(c.name.as_str()))
            .filter(|name| *name != root)
            .collect();
        for member in members {
            counter.increment(member);
        }
    }

    counter.top(n).into_iter().map(NameCount::from).collect()
}

/// Pairs of actors ranked by the number of works they share.
///
/// Each work's distinct cast names are sorted before pairing, so a pair is
/// always keyed the same way whatever the cast order in the source.
#[instrument(skip(catalog))]
pub fn top_actor_pairs(catalog: &Catalog, n: usize) -> Vec<PairCount> {
    let mut counter: Counter<(Name, Name)> = Counter::new();

    for work in catalog.works() {
        let distinct: IndexSet<Name> = work.cast.iter().map(|c| Name::new(c.name.as_str())).collect();
        let mut names: Vec<Name> = distinct.into_iter().collect();
        names.sort();

        for (i, first) in names.iter().enumerate() {
            for second in &names[i + 1..] {
                counter.increment((first.clone(), second.clone()));
            }
        }
    }

    debug!("Counted {} distinct actor pairs", counter.len());
    counter
        .top(n)
        .into_iter()
        .map(|((first, second), count)| PairCount {
            first,
            second,
            count,
        })
        .collect()
}

/// Crew members ranked by how many distinct departments they worked in.
///
/// Credits without a department are ignored, but the person still takes part
/// in the ranking with whatever count they have.
#[instrument(skip(catalog))]
pub fn diversity_index(catalog: &Catalog, n: usize) -> Vec<NameCount> {
    let mut departments: IndexMap<Name, HashSet<Name>> = IndexMap::new();

    for credit in catalog.works().iter().flat_map(|w| &w.crew) {
        let seen = departments.entry(Name::new(credit.name.as_str())).or_default();
        if !credit.department.is_empty() {
            seen.insert(Name::new(credit.department.as_str()));
        }
    }

    let mut counter = Counter::new();
    for (person, seen) in departments {
        counter.add(person, seen.len());
    }
    counter.top(n).into_iter().map(NameCount::from).collect()
}
