use criterion::{black_box, criterion_group, criterion_main, Criterion};
use room_core::{Size, Vec2, WallId};
use room_geometry::{compute_geometry, GeometryCache, GeometryParams};

fn bench_compute(c: &mut Criterion) {
    let params = GeometryParams::default();
    c.bench_function("compute_geometry_1200x800", |b| {
        b.iter(|| compute_geometry(black_box(Size::new(1200.0, 800.0)), &params))
    });

    let mut cache = GeometryCache::new(params);
    c.bench_function("geometry_cache_hit", |b| {
        b.iter(|| cache.get(black_box(Size::new(1200.0, 800.0))).cols)
    });
}

fn bench_classify(c: &mut Criterion) {
    let g = compute_geometry(Size::new(1200.0, 800.0), &GeometryParams::default());
    c.bench_function("wall_at_grid_101x101", |b| {
        b.iter(|| {
            let mut floors = 0u32;
            for xi in 0..=100 {
                for yi in 0..=100 {
                    if g.wall_at(black_box(Vec2::new(xi as f32, yi as f32))) == WallId::Floor {
                        floors += 1;
                    }
                }
            }
            floors
        })
    });
}

fn bench_lines(c: &mut Criterion) {
    let g = compute_geometry(Size::new(3840.0, 2160.0), &GeometryParams::default());
    c.bench_function("grid_lines_all_surfaces_4k", |b| {
        b.iter(|| WallId::ALL.iter().map(|w| g.lines(*w).len()).sum::<usize>())
    });
}

criterion_group!(benches, bench_compute, bench_classify, bench_lines);
criterion_main!(benches);
