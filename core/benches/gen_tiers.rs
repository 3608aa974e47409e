use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kaboom_core::*;
use std::hint::black_box;

fn gen_tiers(c: &mut Criterion) {
    let settings = Settings {
        difficulty: Difficulty::Custom,
        custom: CustomPreset::new(30, 30, 900 - CustomPreset::RESERVED_CELLS).expect("valid preset"),
    };
    let mut group = c.benchmark_group("place_mines");
    for preset in settings.presets() {
        let id = BenchmarkId::from_parameter(format!("{:?}", preset.difficulty));
        group.bench_with_input(id, &preset, |b, preset| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                let mut board = Board::new(preset.size());
                let center = (preset.rows / 2, preset.columns / 2);
                RandomMineGenerator::new(seed).place_mines(&mut board, center, preset.mines);
                black_box(board)
            })
        });
    }
    group.finish();
}

fn flood_fill(c: &mut Criterion) {
    c.bench_function("open_empty_30x30", |b| {
        b.iter(|| {
            let mut board = Board::new((30, 30));
            black_box(reveal::open(&mut board, (15, 15)))
        })
    });
}

criterion_group!(benches, gen_tiers, flood_fill);
criterion_main!(benches);
