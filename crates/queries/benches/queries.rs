//! Benchmarks for the heavier queries
//!
//! Run with: cargo bench --package queries
//!
//! Uses a synthetic catalog so no dataset download is needed.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{CastAppearance, Catalog, CrewAppearance, Work};
use queries::{
    creative_trios, degrees_of_separation, department_cast_averages, top_actor_pairs,
};

const WORKS: u32 = 2_000;
const PEOPLE: u32 = 5_000;
const DEPARTMENTS: [&str; 6] = ["Directing", "Writing", "Production", "Camera", "Sound", "Editing"];
const JOBS: [&str; 6] = ["Director", "Screenplay", "Producer", "Director of Photography", "Original Music Composer", "Editor"];

// Deterministic pseudo-random person for slot `k` of work `w`.
fn person(w: u32, k: u32) -> String {
    format!("Person {}", (w.wrapping_mul(7919) ^ k.wrapping_mul(104_729)) % PEOPLE)
}

fn synthetic_catalog() -> Catalog {
    let works = (0..WORKS)
        .map(|w| Work {
            id: w,
            title: format!("Work {w}"),
            cast: (0..20)
                .map(|k| CastAppearance {
                    id: k as u64,
                    name: person(w, k),
                    character: format!("Role {k}"),
                })
                .collect(),
            crew: (0..30)
                .map(|k| CrewAppearance {
                    id: k as u64,
                    name: person(w, k + 100),
                    department: DEPARTMENTS[k as usize % DEPARTMENTS.len()].to_string(),
                    job: JOBS[k as usize % JOBS.len()].to_string(),
                })
                .collect(),
        })
        .collect();
    Catalog::new(works)
}

fn bench_top_actor_pairs(c: &mut Criterion) {
    let catalog = synthetic_catalog();

    c.bench_function("top_actor_pairs", |b| {
        b.iter(|| black_box(top_actor_pairs(black_box(&catalog), 10)))
    });
}

fn bench_degrees_of_separation(c: &mut Criterion) {
    let catalog = synthetic_catalog();
    let root = person(0, 0);

    c.bench_function("degrees_of_separation", |b| {
        b.iter(|| black_box(degrees_of_separation(black_box(&catalog), &root)))
    });
}

fn bench_creative_trios(c: &mut Criterion) {
    let catalog = synthetic_catalog();

    c.bench_function("creative_trios", |b| {
        b.iter(|| black_box(creative_trios(black_box(&catalog))))
    });
}

fn bench_department_cast_averages(c: &mut Criterion) {
    let catalog = synthetic_catalog();

    c.bench_function("department_cast_averages", |b| {
        b.iter(|| black_box(department_cast_averages(black_box(&catalog))))
    });
}

criterion_group!(
    benches,
    bench_top_actor_pairs,
    bench_degrees_of_separation,
    bench_creative_trios,
    bench_department_cast_averages
);
criterion_main!(benches);
