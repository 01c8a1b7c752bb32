use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use teleport_pathfinding::*;

fn random_teleporters(rng: &mut impl Rng, count: usize, extent: i32) -> Vec<Teleporter> {
    (0..count)
        .map(|_| {
            let xy: [i32; 2] = [rng.gen_range(0..extent), rng.gen_range(0..extent)];
            Teleporter::new(rng.gen_range(0..10), xy)
        })
        .collect()
}

fn independent_searches(c: &mut Criterion) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
    let sets: Vec<_> = (0..100)
        .map(|_| random_teleporters(&mut rng, 25, 100))
        .collect();

    c.bench_function("100 searches of 25 teleporters", |b| {
        b.iter(|| {
            for set in &sets {
                let mut pf = Pathfinder::new(set.as_slice());
                black_box(pf.find_path(0, 24, 40, 30).ok().flatten().map(|p| p.len()));
            }
        })
    });
}

fn reused_pathfinder(c: &mut Criterion) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
    let mut pf = Pathfinder::new(random_teleporters(&mut rng, 1000, 1000));

    c.bench_function("1000 teleporters", |b| {
        b.iter(|| {
            black_box(pf.find_path(0, 999, 500, 80).ok().flatten().map(|p| p.len()));
        })
    });
}

criterion_group!(benches, independent_searches, reused_pathfinder);
criterion_main!(benches);
