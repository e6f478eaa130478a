//! Queries over the co-appearance graph.
//!
//! Two people are adjacent when they are credited in the same work. The
//! graph is never materialized; neighbours are found by scanning works.

use crate::types::Rings;
use data_loader::{Catalog, Name, Work, JOB_DIRECTOR};
use indexmap::IndexSet;
use tracing::{debug, instrument};

/// Co-cast rings one and two hops out from `root`.
///
/// Ring one is every cast name sharing a work with the root. Ring two is
/// every cast name sharing a work with any ring-one member. A name is placed
/// in the first ring that reaches it and never moved; the root is in
/// neither ring. Both rings keep first-seen order.
#[instrument(skip(catalog))]
pub fn degrees_of_separation(catalog: &Catalog, root: &str) -> Rings {
    let root_name = Name::new(root);

    let mut first: IndexSet<Name> = IndexSet::new();
    for work in catalog.works_for(root).filter(|w| w.has_cast_member(root)) {
        for name in cast_names(work) {
            if name != root_name {
                first.insert(name);
            }
        }
    }

    let mut second: IndexSet<Name> = IndexSet::new();
    for work in catalog.works() {
        let names = cast_names(work);
        if !names.iter().any(|n| first.contains(n)) {
            continue;
        }
        for name in names {
            if name != root_name && !first.contains(&name) {
                second.insert(name);
            }
        }
    }

    debug!(
        "Rings around {}: {} at one hop, {} at two hops",
        root,
        first.len(),
        second.len()
    );

    Rings {
        root: root.to_string(),
        first: first.into_iter().collect(),
        second: second.into_iter().collect(),
    }
}

fn cast_names(work: &Work) -> Vec<Name> {
    work.cast.iter().map(|c| Name::new(c.name.as_str())).collect()
}

/// Everyone credited (cast or crew) on a work directed by `director`.
fn collaborators(catalog: &Catalog, director: &str) -> IndexSet<Name> {
    let mut people = IndexSet::new();
    for work in catalog
        .works_for(director)
        .filter(|w| w.has_credit(director, JOB_DIRECTOR))
    {
        people.extend(work.crew.iter().map(|c| Name::new(c.name.as_str())));
        people.extend(work.cast.iter().map(|c| Name::new(c.name.as_str())));
    }
    people
}

/// People who worked on films by both `a` and `b`, in the order they were
/// first met on `a`'s films.
#[instrument(skip(catalog))]
pub fn shared_collaborators(catalog: &Catalog, a: &str, b: &str) -> Vec<Name> {
    let with_a = collaborators(catalog, a);
    let with_b = collaborators(catalog, b);

    with_a.into_iter().filter(|n| with_b.contains(n)).collect()
}
