use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use weather_charts::config::Config;
use weather_charts::data::SyntheticSource;
use weather_charts::ir::ChartKind;
use weather_charts::render::render_html;
use weather_charts::scale::{BandScale, LinearScale, ticks};
use weather_charts::surface::Surface;
use weather_charts::{render_chart, render_dashboard};

fn bench_charts(c: &mut Criterion) {
    let config = Config::default();
    let mut group = c.benchmark_group("chart");
    for kind in ChartKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, kind| {
            b.iter(|| {
                let mut surface = Surface::dashboard();
                let mut source = SyntheticSource::new(Some(7));
                render_chart(*kind, &mut surface, &config, &mut source).unwrap();
                black_box(surface)
            });
        });
    }
    group.finish();
}

fn bench_dashboard(c: &mut Criterion) {
    let config = Config::default();
    c.bench_function("dashboard_html", |b| {
        b.iter(|| {
            let mut surface = Surface::dashboard();
            let mut source = SyntheticSource::new(Some(7));
            render_dashboard(&mut surface, &config, &mut source).unwrap();
            black_box(render_html(&surface, &config))
        });
    });
}

fn bench_scales(c: &mut Criterion) {
    let months: Vec<String> = (0..12).map(|i| format!("m{i}")).collect();
    c.bench_function("band_scale_map", |b| {
        let x = BandScale::new(months.clone(), (0.0, 480.0), 0.2);
        b.iter(|| {
            for m in &months {
                black_box(x.map(m));
            }
        });
    });
    c.bench_function("linear_ticks", |b| {
        let y = LinearScale::new((0.0, 45.0), (300.0, 0.0));
        b.iter(|| black_box(ticks(y.domain().0, y.domain().1, 10)));
    });
}

criterion_group!(benches, bench_charts, bench_dashboard, bench_scales);
criterion_main!(benches);
