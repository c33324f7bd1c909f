use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use social_graph::{catalog::DEFAULT_TASTES, SocialGraph};

const USERS: usize = 1000;
const FRIENDS_PER_USER: usize = 8;

/// Build a random graph where every user picks three tastes and a handful
/// of friends
fn random_graph(rng: &mut StdRng) -> SocialGraph {
    let mut graph = SocialGraph::default();
    for i in 0..USERS {
        let tastes = (0..3)
            .map(|_| {
                DEFAULT_TASTES[rng.gen_range(0..DEFAULT_TASTES.len())]
                    .to_string()
            })
            .collect();
        graph.add_user(&format!("user{}", i), "", tastes);
    }
    for i in 0..USERS {
        for _ in 0..FRIENDS_PER_USER {
            let j = rng.gen_range(0..USERS);
            graph.add_friendship(&format!("user{}", i), &format!("user{}", j));
        }
    }
    graph
}

fn recommend_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("social_graph");
    group.measurement_time(std::time::Duration::from_secs(10)); // Set the measurement time here

    let mut rng = StdRng::seed_from_u64(7);
    let graph = random_graph(&mut rng);

    // Benchmark `SocialGraph::recommend_friends()`
    group.bench_with_input(
        BenchmarkId::new("recommend_friends", USERS),
        &"user0",
        |b, name| {
            b.iter(|| {
                let _recs = graph.recommend_friends(black_box(name));
            });
        },
    );

    // Benchmark `SocialGraph::shortest_path()`
    let target = format!("user{}", USERS - 1);
    group.bench_function("shortest_path", |b| {
        b.iter(|| {
            let _path =
                graph.shortest_path(black_box("user0"), black_box(&target));
        });
    });

    // Benchmark `SocialGraph::connected_components()`
    group.bench_function("connected_components", |b| {
        b.iter(|| {
            let _components = black_box(&graph).connected_components();
        });
    });

    group.finish();
}

criterion_group!(benches, recommend_benchmark);
criterion_main!(benches);
