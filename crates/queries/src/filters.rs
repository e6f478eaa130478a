//! Exact-match lookups over the catalog.
//!
//! These are predicate scans. Where a person is named, the person index
//! narrows the scan to the works that credit them; results keep load order.

use crate::types::CastSize;
use data_loader::{
    Catalog, Name, Work, WorkId, WorkSummary, names_match, JOB_COMPOSER, JOB_DIRECTOR,
};
use indexmap::{IndexMap, IndexSet};
use std::collections::HashSet;

/// Works with a Director credit for `director`.
pub fn films_by_director(catalog: &Catalog, director: &str) -> Vec<WorkSummary> {
    films_with_credit(catalog, director, JOB_DIRECTOR)
}

/// Works with an Original Music Composer credit for `composer`.
pub fn films_by_composer(catalog: &Catalog, composer: &str) -> Vec<WorkSummary> {
    films_with_credit(catalog, composer, JOB_COMPOSER)
}

fn films_with_credit(catalog: &Catalog, name: &str, job: &str) -> Vec<WorkSummary> {
    catalog
        .works_for(name)
        .filter(|w| w.has_credit(name, job))
        .map(Work::summary)
        .collect()
}

/// Works whose cast contains every one of `actors`.
///
/// An empty list matches every work.
pub fn films_with_actors<S: AsRef<str>>(catalog: &Catalog, actors: &[S]) -> Vec<WorkSummary> {
    let matches_all = |w: &Work| actors.iter().all(|a| w.has_cast_member(a.as_ref()));

    match actors.first() {
        None => catalog.works().iter().map(Work::summary).collect(),
        Some(first) => catalog
            .works_for(first.as_ref())
            .filter(|w| matches_all(*w))
            .map(Work::summary)
            .collect(),
    }
}

/// Distinct characters played by `actor`, in first-seen order.
pub fn characters_by_actor(catalog: &Catalog, actor: &str) -> Vec<String> {
    let mut characters: IndexSet<String> = IndexSet::new();
    for work in catalog.works_for(actor) {
        for credit in work.cast.iter().filter(|c| names_match(&c.name, actor)) {
            characters.insert(credit.character.clone());
        }
    }
    characters.into_iter().collect()
}

/// The `n` works with the largest casts; ties keep load order.
pub fn largest_casts(catalog: &Catalog, n: usize) -> Vec<CastSize> {
    let mut works: Vec<&Work> = catalog.works().iter().collect();
    works.sort_by(|a, b| b.cast.len().cmp(&a.cast.len()));
    works
        .into_iter()
        .take(n)
        .map(|w| CastSize {
            work: w.summary(),
            cast_size: w.cast.len(),
        })
        .collect()
}

/// Every non-empty department name, sorted ignoring case.
pub fn unique_departments(catalog: &Catalog) -> Vec<Name> {
    let mut departments: Vec<Name> = catalog
        .departments()
        .departments()
        .filter(|d| !d.is_empty())
        .cloned()
        .collect();
    departments.sort();
    departments
}

/// Work id -> name of its first Director credit.
///
/// A repeated id keeps the position of its first occurrence and the value of
/// its last.
pub fn director_by_work(catalog: &Catalog) -> IndexMap<WorkId, Option<String>> {
    let mut directors = IndexMap::new();
    for work in catalog.works() {
        directors.insert(work.id, work.first_director().map(str::to_string));
    }
    directors
}

/// Number of distinct people credited in `department`.
pub fn count_people_in_department(catalog: &Catalog, department: &str) -> usize {
    catalog
        .departments()
        .entries(department)
        .iter()
        .filter_map(|&r| catalog.crew_credit(r))
        .map(|(_, credit)| Name::new(credit.name.as_str()))
        .collect::<HashSet<Name>>()
        .len()
}

/// People credited in both the cast and the crew of the work titled
/// `title`, or `None` when no such work exists.
pub fn cast_and_crew_overlap(catalog: &Catalog, title: &str) -> Option<Vec<Name>> {
    let work = catalog.find_by_title(title)?;

    let crew: HashSet<Name> = work.crew.iter().map(|c| Name::new(c.name.as_str())).collect();
    let cast: IndexSet<Name> = work.cast.iter().map(|c| Name::new(c.name.as_str())).collect();

    Some(cast.into_iter().filter(|n| crew.contains(n)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            work(
                1,
                "Jaws",
                &[("Roy Scheider", "Brody"), ("Richard Dreyfuss", "Hooper")],
                &[
                    ("Steven Spielberg", "Directing", "Director"),
                    ("John Williams", "Sound", "Original Music Composer"),
                    ("Bill Butler", "Camera", "Director of Photography"),
                ],
            ),
            work(
                2,
                "Inception",
                &[("Leonardo DiCaprio", "Cobb"), ("Tom Hardy", "Eames")],
                &[
                    ("Christopher Nolan", "Directing", "Director"),
                    ("Hans Zimmer", "Sound", "Original Music Composer"),
                    ("Wally Pfister", "Camera", "Director of Photography"),
                    ("Wally Pfister", "camera", "Camera Operator"),
                ],
            ),
            work(
                3,
                "Catch Me If You Can",
                &[("Leonardo DiCaprio", "Frank Abagnale Jr."), ("Tom Hanks", "Carl Hanratty")],
                &[
                    ("Steven Spielberg", "Directing", "Director"),
                    ("Steven Spielberg", "Production", "Producer"),
                    ("Janusz Kaminski", "Camera", "Director of Photography"),
                ],
            ),
            work(
                4,
                "Titanic",
                &[("Leonardo DiCaprio", "Jack Dawson"), ("James Cameron", "")],
                &[("James Cameron", "Directing", "Director"), ("Someone", "", "Grip")],
            ),
        ])
    }

    fn ids(works: &[WorkSummary]) -> Vec<WorkId> {
        works.iter().map(|w| w.id).collect()
    }

    #[test]
    fn test_films_by_director_is_case_insensitive() {
        let catalog = catalog();
        let lower = films_by_director(&catalog, "steven spielberg");
        let upper = films_by_director(&catalog, "STEVEN SPIELBERG");

        assert_eq!(ids(&lower), vec![1, 3]);
        assert_eq!(lower, upper);
        assert_eq!(lower[0].title, "Jaws");
    }

    #[test]
    fn test_films_by_composer() {
        let catalog = catalog();
        assert_eq!(ids(&films_by_composer(&catalog, "Hans Zimmer")), vec![2]);
        // A director credit is not a composer credit
        assert!(films_by_composer(&catalog, "Christopher Nolan").is_empty());
    }

    #[test]
    fn test_films_with_actors_requires_all() {
        let catalog = catalog();
        assert_eq!(ids(&films_with_actors(&catalog, &["Leonardo DiCaprio", "tom hanks"])), vec![3]);
        assert_eq!(ids(&films_with_actors(&catalog, &["Leonardo DiCaprio"])), vec![2, 3, 4]);
        assert!(films_with_actors(&catalog, &["Tom Hanks", "Tom Hardy"]).is_empty());
        assert_eq!(films_with_actors::<&str>(&catalog, &[]).len(), 4);
    }

    #[test]
    fn test_characters_by_actor() {
        let catalog = catalog();
        assert_eq!(
            characters_by_actor(&catalog, "leonardo dicaprio"),
            vec!["Cobb", "Frank Abagnale Jr.", "Jack Dawson"]
        );
        assert!(characters_by_actor(&catalog, "Nobody").is_empty());
    }

    #[test]
    fn test_largest_casts_keeps_load_order_on_ties() {
        let catalog = Catalog::new(vec![
            work(1, "Small", &[("A", "")], &[]),
            work(2, "Big", &[("A", ""), ("B", ""), ("C", "")], &[]),
            work(3, "Medium", &[("A", ""), ("B", "")], &[]),
            work(4, "Medium Too", &[("C", ""), ("D", "")], &[]),
        ]);

        let top: Vec<(WorkId, usize)> = largest_casts(&catalog, 3)
            .into_iter()
            .map(|c| (c.work.id, c.cast_size))
            .collect();
        assert_eq!(top, vec![(2, 3), (3, 2), (4, 2)]);
    }

    #[test]
    fn test_unique_departments() {
        let catalog = catalog();
        let departments: Vec<String> = unique_departments(&catalog)
            .into_iter()
            .map(Name::into_string)
            .collect();
        assert_eq!(departments, vec!["Camera", "Directing", "Production", "Sound"]);
    }

    #[test]
    fn test_director_by_work() {
        let catalog = Catalog::new(vec![
            work(1, "A", &[], &[("First", "Directing", "Director")]),
            work(2, "B", &[], &[]),
            work(1, "A again", &[], &[("Second", "Directing", "Director")]),
        ]);

        let directors = director_by_work(&catalog);
        let entries: Vec<(WorkId, Option<&str>)> = directors
            .iter()
            .map(|(id, d)| (*id, d.as_deref()))
            .collect();
        assert_eq!(entries, vec![(1, Some("Second")), (2, None)]);
    }

    #[test]
    fn test_count_people_in_department() {
        let catalog = catalog();
        // Wally Pfister counts once despite two Camera credits
        assert_eq!(count_people_in_department(&catalog, "camera"), 3);
        assert_eq!(count_people_in_department(&catalog, "Editing"), 0);
    }

    #[test]
    fn test_cast_and_crew_overlap() {
        let catalog = catalog();
        let both = cast_and_crew_overlap(&catalog, "titanic").unwrap();
        assert_eq!(both, vec![Name::new("James Cameron")]);

        assert_eq!(cast_and_crew_overlap(&catalog, "Jaws"), Some(Vec::new()));
        assert!(cast_and_crew_overlap(&catalog, "Avatar").is_none());
    }
}
