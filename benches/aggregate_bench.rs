use criterion::{Criterion, criterion_group, criterion_main};
use lifestyle_charts::aggregate::{
    BinSpec, group_mean, histogram_bins, kernel_density, sample_grid, stack_layers,
};
use lifestyle_charts::core::CategorySet;
use std::hint::black_box;

fn synthetic_hours(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            6.0 + (t * 0.37).sin() * 2.5 + (t * 0.011).cos()
        })
        .collect()
}

fn bench_kernel_density_2k(c: &mut Criterion) {
    let values = synthetic_hours(2_000);
    let grid = sample_grid(0.0, 12.0, 0.15).expect("valid grid");

    c.bench_function("kernel_density_2k_values_80_points", |b| {
        b.iter(|| {
            let _ = kernel_density(black_box(&values), black_box(&grid), 0.35)
                .expect("density");
        })
    });
}

fn bench_histogram_bins_10k(c: &mut Criterion) {
    let values = synthetic_hours(10_000);
    let spec = BinSpec::Count(18);

    c.bench_function("histogram_bins_10k_values_18_bins", |b| {
        b.iter(|| {
            let _ = histogram_bins(black_box(&values), 2.0, 10.0, &spec).expect("bins");
        })
    });
}

fn bench_group_mean_10k(c: &mut Criterion) {
    let categories = CategorySet::stress_levels();
    let keys = ["Low", "Moderate", "High"];
    let rows: Vec<(&str, f64)> = synthetic_hours(10_000)
        .into_iter()
        .enumerate()
        .map(|(i, value)| (keys[i % keys.len()], value))
        .collect();

    c.bench_function("group_mean_10k_rows", |b| {
        b.iter(|| {
            let _ = group_mean(
                black_box(&rows),
                |row| Some(row.0),
                |row| row.1,
                &categories,
            );
        })
    });
}

fn bench_stack_layers_1k(c: &mut Criterion) {
    let groups: Vec<[f64; 4]> = synthetic_hours(4_000)
        .chunks_exact(4)
        .map(|chunk| [chunk[0], chunk[1], chunk[2], chunk[3]])
        .collect();
    let keys: Vec<usize> = (0..4).collect();

    c.bench_function("stack_layers_1k_groups_4_keys", |b| {
        b.iter(|| {
            let _ = stack_layers(black_box(&groups), &keys, |group, key| group[*key]);
        })
    });
}

criterion_group!(
    benches,
    bench_kernel_density_2k,
    bench_histogram_bins_10k,
    bench_group_mean_10k,
    bench_stack_layers_1k
);
criterion_main!(benches);
