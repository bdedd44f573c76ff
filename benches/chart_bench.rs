//! Benchmarks for chart geometry and simulators
//!
//! Run with: cargo bench

use bogor_nexus::charts::svg::{area_svg, donut_svg, network_svg};
use bogor_nexus::charts::{area_chart, line_chart, network_layout, proportional_donut};
use bogor_nexus::simulation::{DataStream, ResourceMonitor, Simulator};
use bogor_nexus::{MockDataSource, Panel, Shell, SimulationSettings};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::time::Duration;

fn create_series(count: usize) -> Vec<f64> {
    (0..count).map(|i| (i * 37 % 101) as f64).collect()
}

fn bench_charts(c: &mut Criterion) {
    let mut group = c.benchmark_group("charts");

    for size in [20, 200, 2000] {
        let data = create_series(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("line_{}", size), |b| {
            b.iter(|| line_chart(black_box(&data), 20.0))
        });

        group.bench_function(format!("area_svg_{}", size), |b| {
            b.iter(|| area_svg(&area_chart(black_box(&data), 30.0), "#fb923c"))
        });
    }

    let slices: Vec<(&str, f64, &str)> = (0..12)
        .map(|i| ("slice", (i + 1) as f64, "#22d3ee"))
        .collect();
    group.bench_function("donut_12", |b| {
        b.iter(|| donut_svg(&proportional_donut(black_box(&slices))))
    });

    let active = [true, false, true, true, false, false, true, false];
    group.bench_function("network_5x8", |b| {
        b.iter(|| network_svg(&network_layout(5, 8, black_box(&active)), "#22d3ee"))
    });

    group.finish();
}

fn bench_simulators(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulators");

    group.bench_function("resources_tick", |b| {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut monitor = ResourceMonitor::default();
        b.iter(|| monitor.tick(&mut rng))
    });

    group.bench_function("stream_tick", |b| {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut stream = DataStream::new(20);
        b.iter(|| stream.tick(&mut rng))
    });

    group.finish();
}

fn bench_shell(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let mut group = c.benchmark_group("shell");

    group.bench_function("switch_panels", |b| {
        b.iter_custom(|iters| {
            rt.block_on(async {
                let source = MockDataSource::new(Default::default(), Duration::ZERO);
                let mut shell = Shell::new(source, SimulationSettings::default());
                let mut panel = Panel::Dashboard;

                let start = std::time::Instant::now();

                for _ in 0..iters {
                    panel = panel.next();
                    shell.select(panel).await;
                }

                let elapsed = start.elapsed();
                shell.close().await;
                elapsed
            })
        });
    });

    group.finish();
}

criterion_group!(benches, bench_charts, bench_simulators, bench_shell);
criterion_main!(benches);
