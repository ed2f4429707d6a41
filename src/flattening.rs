use crate::geometry::{Arc, Float, Path, Point, Shape};

use wizdraw::push_cubic_bezier_segments;

use vek::bezier::CubicBezier2;
use vek::bezier::QuadraticBezier2;

#[allow(unused_imports)]
use vek::num_traits::real::Real;

use core::f32::consts::FRAC_PI_2;
use alloc::vec::Vec;

/// Appends a polyline approximation of `shape` to `out`.
///
/// Arcs and curves are flattened through cubic beziers with the given
/// tolerance; lines contribute their two endpoints as-is.
pub fn flatten_shape(shape: &Shape, tolerance: Float, out: &mut Vec<Point>) {
    match shape {
        Shape::Arc(arc) => push_arc_segments(arc, tolerance, out),
        Shape::CubicCurve(curve) => {
            let [a, b, c, d] = curve.points;
            let curve = CubicBezier2 {
                start: a,
                ctrl0: b,
                ctrl1: c,
                end: d,
            };
            push_cubic_bezier_segments::<8>(&curve, tolerance, out);
        }
        Shape::QuadraticCurve(curve) => {
            let [a, b, c] = curve.points;
            let curve = QuadraticBezier2 {
                start: a,
                ctrl: b,
                end: c,
            };
            push_cubic_bezier_segments::<8>(&curve.into_cubic(), tolerance, out);
        }
        Shape::Line(line) => {
            let [a, b] = line.points;
            out.push(a);
            out.push(b);
        }
    }
}

// one cubic bezier per sweep of at most 90°
fn push_arc_segments(arc: &Arc, tolerance: Float, out: &mut Vec<Point>) {
    let p = arc.center_parameterization();
    let mut angle = p.start_angle;
    let mut remaining = p.sweep_angle;

    while remaining != 0.0 {
        let step = remaining.clamp(-FRAC_PI_2, FRAC_PI_2);
        let k = (4.0 / 3.0) * (step / 4.0).tan();

        let (s_sin, s_cos) = angle.sin_cos();
        let (e_sin, e_cos) = (angle + step).sin_cos();

        let start = p.center + p.radius * Point::new(s_cos, s_sin);
        let end = p.center + p.radius * Point::new(e_cos, e_sin);

        let curve = CubicBezier2 {
            start,
            ctrl0: start + (p.radius * k) * Point::new(-s_sin, s_cos),
            ctrl1: end - (p.radius * k) * Point::new(-e_sin, e_cos),
            end,
        };

        push_cubic_bezier_segments::<8>(&curve, tolerance, out);

        angle += step;
        remaining -= step;
    }
}

impl Path {
    /// Flattens every shape in order into one polyline.
    pub fn flatten(&self, tolerance: Float) -> Vec<Point> {
        let mut out = Vec::new();
        for shape in self.iter() {
            flatten_shape(shape, tolerance, &mut out);
        }
        out
    }
}
