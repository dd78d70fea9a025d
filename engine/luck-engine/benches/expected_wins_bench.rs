use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use luck_engine::{ScoreTable, compute_expected_wins, weekly_expected_wins};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed seed so runs are comparable
fn synthetic_league(teams: usize, weeks: usize) -> ScoreTable {
    let mut rng = StdRng::seed_from_u64(42);
    (0..teams)
        .map(|t| {
            let series: Vec<f64> = (0..weeks).map(|_| rng.gen_range(60.0..150.0)).collect();
            (format!("Team {t:03}"), series)
        })
        .collect()
}

fn bench_single_week(c: &mut Criterion) {
    let league = synthetic_league(12, 1);
    let scores: Vec<f64> = league.values().map(|series| series[0]).collect();

    c.bench_function("weekly_expected_wins_12_teams", |b| {
        b.iter(|| black_box(weekly_expected_wins(black_box(&scores))).unwrap());
    });
}

fn bench_season(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_expected_wins");
    for teams in [12usize, 100, 1000] {
        let league = synthetic_league(teams, 17);
        group.bench_with_input(BenchmarkId::from_parameter(teams), &league, |b, league| {
            b.iter(|| black_box(compute_expected_wins(league)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_week, bench_season);
criterion_main!(benches);
