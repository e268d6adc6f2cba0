use crate::common::samples::CURVES;
use beztrace::color::Rgba;
use beztrace::render::render_levels;
use beztrace::surface::Surface;
use criterion::{black_box, Criterion};
use nalgebra::Vector2;

/// Surface discarding every draw call.
struct Sink;
impl Surface for Sink {
    fn width(&self) -> u32 {
        640
    }
    fn height(&self) -> u32 {
        480
    }
    fn clear(&mut self) {}
    fn line(&mut self, _from: Vector2<f64>, _to: Vector2<f64>, _color: Rgba) {}
}

pub fn subdivide(c: &mut Criterion) {
    c.bench_function("subdivide", |b| {
        for curve in CURVES.iter() {
            b.iter(|| black_box(curve.subdivide(0.5)))
        }
    });
}

pub fn eval(c: &mut Criterion) {
    c.bench_function("eval", |b| {
        for curve in CURVES.iter() {
            b.iter(|| black_box(curve.castlejau_eval(0.5)))
        }
    });
}

pub fn render(c: &mut Criterion) {
    c.bench_function("render", |b| {
        let mut sink = Sink;
        for curve in CURVES.iter() {
            b.iter(|| black_box(render_levels(curve, 0.5, 0.5, &mut sink)))
        }
    });
}

pub fn all(c: &mut Criterion) {
    subdivide(c);
    eval(c);
    render(c);
}
