use criterion::{black_box, Criterion};
use sparkline::scale::Frame;
use sparkline::style::{LineMode, StyleConfig};
use sparkline::{configure, curve, split};
use crate::common::samples::SERIES;

pub fn build(c: &mut Criterion) {
    c.bench_function("build", |b| {
        for series in SERIES.iter() {
            let frame = Frame::new(series, 360.0, 120.0, 4.0);
            b.iter(|| black_box(curve::build_in(&frame, series, 0.5)))
        }
    });
}

pub fn split_curve(c: &mut Criterion) {
    c.bench_function("split", |b| {
        for series in SERIES.iter() {
            let frame = Frame::new(series, 360.0, 120.0, 4.0);
            let path = curve::build_in(&frame, series, 0.5);
            b.iter(|| black_box(split::split(&path, 0.37, frame.span(), frame.x_step)))
        }
    });
}

pub fn plan(c: &mut Criterion) {
    let style = StyleConfig {
        mode: LineMode::Split,
        ..Default::default()
    };
    c.bench_function("plan", |b| {
        for series in SERIES.iter() {
            b.iter(|| black_box(configure(series, &style, 360.0, 120.0)))
        }
    });
}

pub fn all(c: &mut Criterion) {
    build(c);
    split_curve(c);
    plan(c);
}
