use criterion::{black_box, criterion_group, criterion_main, Criterion};

use district_games::core::GameRng;
use district_games::duel::DuelEngine;
use district_games::people::{District, DistrictId, Person, PersonId};
use district_games::registry::DistrictRegistry;

/// Ids in a scrambled but fixed order so the tree is not a chain.
fn scrambled(n: i32) -> Vec<i32> {
    (0..n).map(|i| (i * 7919) % n).collect()
}

fn populated(n: i32, per_district: u32) -> DistrictRegistry {
    let mut next = 0u32;
    let districts = scrambled(n)
        .into_iter()
        .map(|id| {
            let mut district = District::new(DistrictId::new(id));
            for k in 0..per_district {
                district.add_person(Person::new(
                    PersonId::new(next),
                    "P",
                    "Q",
                    k % 12 + 1,
                    10 + k % 20,
                    DistrictId::new(id),
                    (k % 10) as i32,
                ));
                next += 1;
            }
            district
        })
        .collect();
    DistrictRegistry::with_staged(districts)
}

fn bench_insert_eliminate(c: &mut Criterion) {
    c.bench_function("registry_insert_eliminate_1k", |b| {
        b.iter(|| {
            let mut registry = populated(1000, 0);
            registry.add_all();
            for id in scrambled(1000).into_iter().rev() {
                let _ = registry.eliminate(DistrictId::new(id));
            }
            black_box(registry.active_len())
        })
    });
}

fn bench_full_games(c: &mut Criterion) {
    c.bench_function("duel_until_done_64x24", |b| {
        b.iter(|| {
            let mut registry = populated(64, 24);
            registry.add_all();
            let mut engine = DuelEngine::new(registry, GameRng::new(2023), 10);
            let mut rounds = 0u32;
            while let Some(pair) = engine.select_duelers() {
                let _ = engine.eliminate_dueler(pair);
                rounds += 1;
            }
            black_box(rounds)
        })
    });
}

criterion_group!(benches, bench_insert_eliminate, bench_full_games);
criterion_main!(benches);
