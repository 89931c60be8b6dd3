use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dupediff::compare::{diff, FileGroup, GroupCollection};

// Synthetic collections shaped like real finder output: a few paths per
// group, long shared directory prefixes.
fn synthetic_groups(count: usize, paths_per_group: usize) -> Vec<FileGroup> {
    (0..count)
        .map(|g| {
            FileGroup::from_paths(
                (0..paths_per_group)
                    .map(|p| format!("/var/data/set_{:04}/copy_{p}/file_{g}.bin", g % 97)),
            )
        })
        .collect()
}

fn bench_canonicalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonicalize");

    for count in [100, 1_000, 10_000] {
        let groups = synthetic_groups(count, 3);
        group.bench_with_input(format!("{count}_groups"), &groups, |b, groups| {
            b.iter(|| {
                let collection = GroupCollection::canonicalize(groups.clone());
                black_box(collection);
            });
        });
    }
    group.finish();
}

fn bench_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff");

    for count in [100, 1_000, 10_000] {
        let a = GroupCollection::canonicalize(synthetic_groups(count, 3));
        // Different group shapes, so every composite key mismatches.
        let b = GroupCollection::canonicalize(synthetic_groups(count, 4));

        group.bench_with_input(format!("{count}_groups_identical"), &a, |bench, a| {
            bench.iter(|| {
                let report = diff(a, a);
                black_box(report);
            });
        });
        group.bench_with_input(
            format!("{count}_groups_disjoint"),
            &(a.clone(), b.clone()),
            |bench, (a, b)| {
                bench.iter(|| {
                    let report = diff(a, b);
                    black_box(report);
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_canonicalize, bench_diff);
criterion_main!(benches);
