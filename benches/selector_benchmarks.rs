use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use mathbuddy::engine::coach::{CoachRoster, DEFAULT_COACHES};
use mathbuddy::engine::problem::{ProblemBank, ProblemId};
use mathbuddy::engine::selector::select_next;

fn bench_generation(c: &mut Criterion) {
    c.bench_function("addition bank (3 digits)", |b| {
        b.iter(|| ProblemBank::addition(black_box(3)))
    });
    c.bench_function("subtraction bank (3 digits)", |b| {
        b.iter(|| ProblemBank::subtraction(black_box(3)))
    });
}

fn bench_selection(c: &mut Criterion) {
    let mut bank = ProblemBank::addition(3);
    let mut rng = SmallRng::seed_from_u64(7);
    // Spread counts so the low tier is a strict subset.
    for i in (0..bank.len()).step_by(3) {
        if let Some(p) = bank.get_mut(ProblemId(i)) {
            p.record(true);
        }
    }

    c.bench_function("select_next (addition, 3 digits)", |b| {
        b.iter(|| select_next(black_box(&bank), &mut rng))
    });
}

fn bench_perfect_run(c: &mut Criterion) {
    c.bench_function("perfect run over all tables", |b| {
        b.iter(|| {
            let mut rng = SmallRng::seed_from_u64(1);
            let mut bank = ProblemBank::multiplication(0);
            for _ in 0..bank.len() {
                let id = select_next(&bank, &mut rng).unwrap();
                bank.get_mut(id).unwrap().record(true);
            }
            bank
        })
    });
}

fn bench_coach_rotation(c: &mut Criterion) {
    let names: Vec<String> = DEFAULT_COACHES.iter().map(|s| s.to_string()).collect();
    let mut rng = SmallRng::seed_from_u64(3);
    let mut roster = CoachRoster::new(names, &mut rng).unwrap();

    c.bench_function("coach rotate (default roster)", |b| {
        b.iter(|| roster.rotate(&mut rng).len())
    });
}

criterion_group!(
    benches,
    bench_generation,
    bench_selection,
    bench_perfect_run,
    bench_coach_rotation
);
criterion_main!(benches);
