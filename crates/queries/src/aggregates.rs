//! Grouped averages.

use crate::types::{DepartmentAverage, DirectorGroup, UNKNOWN_DIRECTOR};
use data_loader::{Catalog, Name, Work, WorkIdx, JOB_DIRECTOR};
use indexmap::{IndexMap, IndexSet};
use tracing::instrument;

fn mean(values: impl Iterator<Item = usize>) -> f64 {
    let (sum, count) = values.fold((0usize, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Works grouped by director, with mean cast and crew sizes per group.
///
/// A work with no Director credit goes to the `(unknown)` group. A work with
/// several Director credits goes to each of those directors' groups, once
/// per distinct director. Groups are ranked by number of works, largest
/// first, ties in first-seen order.
#[instrument(skip(catalog))]
pub fn group_by_director(catalog: &Catalog) -> Vec<DirectorGroup> {
    let mut groups: IndexMap<Name, Vec<WorkIdx>> = IndexMap::new();

    for (idx, work) in catalog.works().iter().enumerate() {
        let mut directors: IndexSet<Name> = work
            .crew_with_job(JOB_DIRECTOR)
            .map(|c| Name::new(c.name.as_str()))
            .collect();
        if directors.is_empty() {
            directors.insert(Name::new(UNKNOWN_DIRECTOR));
        }
        for director in directors {
            groups.entry(director).or_default().push(idx);
        }
    }

    let mut result: Vec<DirectorGroup> = groups
        .into_iter()
        .map(|(director, indices)| {
            let works: Vec<&Work> = indices.iter().filter_map(|&i| catalog.work(i)).collect();
            DirectorGroup {
                director,
                films: works.len(),
                avg_cast: mean(works.iter().map(|w| w.cast.len())),
                avg_crew: mean(works.iter().map(|w| w.crew.len())),
            }
        })
        .collect();
    result.sort_by(|a, b| b.films.cmp(&a.films));
    result
}

/// For each non-empty department, the mean cast size over the distinct works
/// with at least one crew credit in it. Ranked by that mean, largest first.
#[instrument(skip(catalog))]
pub fn department_cast_averages(catalog: &Catalog) -> Vec<DepartmentAverage> {
    let mut result: Vec<DepartmentAverage> = catalog
        .departments()
        .iter()
        .filter(|(department, _)| !department.is_empty())
        .map(|(department, credits)| {
            let works: IndexSet<WorkIdx> = credits.iter().map(|r| r.work).collect();
            DepartmentAverage {
                department: department.clone(),
                works: works.len(),
                avg_cast: mean(
                    works
                        .iter()
                        .filter_map(|&i| catalog.work(i))
                        .map(|w| w.cast.len()),
                ),
            }
        })
        .collect();
    result.sort_by(|a, b| b.avg_cast.total_cmp(&a.avg_cast));
    result
}
