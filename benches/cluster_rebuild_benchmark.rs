use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use social_graph::{catalog::DEFAULT_TASTES, TasteCatalog, TasteClusters};

fn random_taste_lists(rng: &mut StdRng, users: usize) -> Vec<Vec<String>> {
    (0..users)
        .map(|_| {
            let count = rng.gen_range(0..4);
            (0..count)
                .map(|_| {
                    DEFAULT_TASTES[rng.gen_range(0..DEFAULT_TASTES.len())]
                        .to_string()
                })
                .collect()
        })
        .collect()
}

fn cluster_rebuild_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("taste_clusters");
    let catalog = TasteCatalog::default();
    let mut rng = StdRng::seed_from_u64(7);

    for users in [100, 1000, 10000] {
        let taste_lists = random_taste_lists(&mut rng, users);
        group.bench_with_input(
            BenchmarkId::new("rebuild", users),
            &taste_lists,
            |b, lists| {
                b.iter(|| {
                    TasteClusters::rebuild(
                        black_box(&catalog),
                        lists.iter().map(Vec::as_slice),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, cluster_rebuild_benchmark);
criterion_main!(benches);
