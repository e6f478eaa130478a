//! Queries about the roles a person holds.
//!
//! - creative trios: one person credited as director, producer and writer
//!   of the same work
//! - career paths: the department an actor most often works in as crew
//! - archetypes: an actor's characters grouped by their first word

use crate::counter::Counter;
use crate::types::{Archetype, CareerPath, CreativeTrio};
use data_loader::{
    Catalog, Name, Work, names_match, JOB_DIRECTOR, JOB_PRODUCER, WRITING_JOBS,
};
use indexmap::{IndexMap, IndexSet};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};

/// Every (work, person) where the person holds a Director credit, a
/// Producer credit and at least one writing credit in that work.
///
/// Works are independent, so they are checked in parallel; the result keeps
/// load order.
#[instrument(skip(catalog))]
pub fn creative_trios(catalog: &Catalog) -> Vec<CreativeTrio> {
    let trios: Vec<CreativeTrio> = catalog
        .works()
        .par_iter()
        .flat_map_iter(trios_in)
        .collect();
    debug!("Found {} creative trios", trios.len());
    trios
}

fn trios_in(work: &Work) -> Vec<CreativeTrio> {
    // person -> set of trimmed, non-empty job titles
    let mut jobs: IndexMap<Name, HashSet<Name>> = IndexMap::new();
    for credit in &work.crew {
        let held = jobs.entry(Name::new(credit.name.as_str())).or_default();
        let job = credit.job.trim();
        if !job.is_empty() {
            held.insert(Name::new(job));
        }
    }

    let director = Name::new(JOB_DIRECTOR);
    let producer = Name::new(JOB_PRODUCER);
    let writers: Vec<Name> = WRITING_JOBS.iter().map(|&j| Name::new(j)).collect();

    jobs.into_iter()
        .filter(|(_, held)| {
            held.contains(&director)
                && held.contains(&producer)
                && writers.iter().any(|w| held.contains(w))
        })
        .map(|(person, _)| CreativeTrio {
            work: work.summary(),
            person,
        })
        .collect()
}

/// For each person credited both as an actor and as crew, the department of
/// most of their crew credits (first-seen department on ties).
///
/// People are listed in the order they first appear in a cast.
#[instrument(skip(catalog))]
pub fn career_paths(catalog: &Catalog) -> Vec<CareerPath> {
    let actors: IndexSet<Name> = catalog
        .works()
        .iter()
        .flat_map(|w| &w.cast)
        .map(|c| Name::new(c.name.as_str()))
        .collect();

    let mut departments: HashMap<Name, Counter<Name>> = HashMap::new();
    for credit in catalog.works().iter().flat_map(|w| &w.crew) {
        departments
            .entry(Name::new(credit.name.as_str()))
            .or_default()
            .increment(Name::new(credit.department.as_str()));
    }

    actors
        .into_iter()
        .filter_map(|person| {
            let (department, credits) = departments.get(&person)?.most_common()?;
            Some(CareerPath {
                department: department.clone(),
                credits,
                person,
            })
        })
        .collect()
}

/// `actor`'s characters grouped by first word, largest group first.
///
/// Grouping ignores case; each group is reported with the casing of the
/// first character that created it. Blank characters are skipped.
pub fn character_archetypes(catalog: &Catalog, actor: &str) -> Vec<Archetype> {
    let counter: Counter<Name> = catalog
        .works_for(actor)
        .flat_map(|w| &w.cast)
        .filter(|c| names_match(&c.name, actor))
        .filter_map(|c| c.character.split_whitespace().next())
        .map(Name::new)
        .collect();

    counter
        .ranked()
        .into_iter()
        .map(|(token, count)| Archetype { token, count })
        .collect()
}
