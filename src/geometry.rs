use core::f32::consts::{FRAC_PI_2, PI, TAU};
use core::slice;
use alloc::vec::Vec;

#[allow(unused_imports)]
use vek::num_traits::real::Real;

pub type Float = f32;
pub type Point = vek::vec::repr_c::vec2::Vec2<Float>;
pub const P_ZERO: Point = Point::new(0.0, 0.0);

use GeometryError::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GeometryError {
    InvalidGeometry,
}

pub type GeometryResult<T> = Result<T, GeometryError>;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    pub points: [Point; 2],
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadraticCurve {
    pub points: [Point; 3],
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubicCurve {
    pub points: [Point; 4],
}

/// A circular arc running from `start` to `end` via `through`.
///
/// The three points are fixed at construction; [`Arc::from_points`]
/// rejects collinear triples, so every `Arc` lies on a well-defined
/// circle and [`Arc::center_parameterization`] is total.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Arc {
    start: Point,
    through: Point,
    end: Point,
}

/// Center form of an [`Arc`]: sweep `sweep_angle` radians from
/// `start_angle`, counter-clockwise when positive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcParameters {
    pub center: Point,
    pub radius: Float,
    pub start_angle: Float,
    pub sweep_angle: Float,
}

pub fn collinear(a: Point, b: Point, c: Point) -> bool {
    let ab = b - a;
    let ac = c - a;
    let cross = ab.x * ac.y - ab.y * ac.x;
    cross.abs() <= Float::EPSILON * (ab.magnitude() * ac.magnitude()).max(1.0)
}

impl Arc {
    pub fn from_points(start: Point, through: Point, end: Point) -> GeometryResult<Self> {
        match collinear(start, through, end) {
            true => Err(InvalidGeometry),
            false => Ok(Self { start, through, end }),
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn through(&self) -> Point {
        self.through
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn center_parameterization(&self) -> ArcParameters {
        let (a, b, c) = (self.start, self.through, self.end);

        let a_sq = a.x * a.x + a.y * a.y;
        let b_sq = b.x * b.x + b.y * b.y;
        let c_sq = c.x * c.x + c.y * c.y;

        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        let center = Point::new(
            (a_sq * (b.y - c.y) + b_sq * (c.y - a.y) + c_sq * (a.y - b.y)) / d,
            (a_sq * (c.x - b.x) + b_sq * (a.x - c.x) + c_sq * (b.x - a.x)) / d,
        );

        let radius = (a - center).magnitude();
        let start_angle = angle_of(a - center);
        let end_angle = angle_of(c - center);

        // orientation of the control triangle picks the sweep direction
        let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
        let mut sweep_angle = end_angle - start_angle;
        if cross > 0.0 && sweep_angle <= 0.0 {
            sweep_angle += TAU;
        } else if cross < 0.0 && sweep_angle >= 0.0 {
            sweep_angle -= TAU;
        }

        ArcParameters {
            center,
            radius,
            start_angle,
            sweep_angle,
        }
    }

    pub fn bounds(&self) -> (Point, Point) {
        let p = self.center_parameterization();
        let (mut min, mut max) = point_bounds(&[self.start, self.end]);

        let extremes = [
            (0.0, Point::new(p.radius, 0.0)),
            (FRAC_PI_2, Point::new(0.0, p.radius)),
            (PI, Point::new(-p.radius, 0.0)),
            (-FRAC_PI_2, Point::new(0.0, -p.radius)),
        ];

        for (angle, offset) in extremes {
            if angle_in_sweep(angle, p.start_angle, p.sweep_angle) {
                let pt = p.center + offset;
                min = Point::new(min.x.min(pt.x), min.y.min(pt.y));
                max = Point::new(max.x.max(pt.x), max.y.max(pt.y));
            }
        }

        (min, max)
    }
}

fn angle_of(v: Point) -> Float {
    v.y.atan2(v.x)
}

fn angle_in_sweep(angle: Float, start_angle: Float, sweep_angle: Float) -> bool {
    let mut delta = angle - start_angle;
    if sweep_angle >= 0.0 {
        while delta < 0.0 {
            delta += TAU;
        }
        delta <= sweep_angle
    } else {
        while delta > 0.0 {
            delta -= TAU;
        }
        delta >= sweep_angle
    }
}

fn point_bounds(points: &[Point]) -> (Point, Point) {
    let mut min = points[0];
    let mut max = points[0];
    for p in &points[1..] {
        min = Point::new(min.x.min(p.x), min.y.min(p.y));
        max = Point::new(max.x.max(p.x), max.y.max(p.y));
    }
    (min, max)
}

impl Line {
    pub fn bounds(&self) -> (Point, Point) {
        point_bounds(&self.points)
    }
}

impl QuadraticCurve {
    /// Control-point hull; contains the curve but is not tight.
    pub fn bounds(&self) -> (Point, Point) {
        point_bounds(&self.points)
    }
}

impl CubicCurve {
    /// Control-point hull; contains the curve but is not tight.
    pub fn bounds(&self) -> (Point, Point) {
        point_bounds(&self.points)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape {
    Arc(Arc),
    Line(Line),
    QuadraticCurve(QuadraticCurve),
    CubicCurve(CubicCurve),
}

impl Shape {
    pub fn as_text(self) -> &'static str {
        match self {
            Shape::Arc(_) => "Arc",
            Shape::Line(_) => "Line",
            Shape::QuadraticCurve(_) => "QuadraticCurve",
            Shape::CubicCurve(_) => "CubicCurve",
        }
    }

    pub fn bounds(&self) -> (Point, Point) {
        match self {
            Shape::Arc(arc) => arc.bounds(),
            Shape::Line(line) => line.bounds(),
            Shape::QuadraticCurve(curve) => curve.bounds(),
            Shape::CubicCurve(curve) => curve.bounds(),
        }
    }
}

/// An ordered sequence of shapes forming a composite figure.
///
/// Shapes are owned by the path and keep their insertion order;
/// appending never moves earlier elements. Mutation is single-writer,
/// there is no interior synchronization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    shapes: Vec<Shape>,
}

impl Path {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Appends the circular arc running from `a` to `c` via `b`.
    ///
    /// Exactly one shape is appended on success. Collinear points leave
    /// no circle to trace, so they append the line from `a` to `c`
    /// instead; fully coincident points are rejected.
    pub fn add_arc(&mut self, a: Point, b: Point, c: Point) -> GeometryResult<()> {
        if a == b && b == c {
            return Err(InvalidGeometry);
        }
        match Arc::from_points(a, b, c) {
            Ok(arc) => self.shapes.push(Shape::Arc(arc)),
            Err(InvalidGeometry) => self.shapes.push(Shape::Line(Line { points: [a, c] })),
        }
        Ok(())
    }

    pub fn add_line(&mut self, a: Point, b: Point) {
        self.shapes.push(Shape::Line(Line { points: [a, b] }));
    }

    pub fn add_quadratic_curve(&mut self, a: Point, b: Point, c: Point) {
        self.shapes
            .push(Shape::QuadraticCurve(QuadraticCurve { points: [a, b, c] }));
    }

    pub fn add_cubic_curve(&mut self, a: Point, b: Point, c: Point, d: Point) {
        self.shapes
            .push(Shape::CubicCurve(CubicCurve { points: [a, b, c, d] }));
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Shape> {
        self.shapes.get(i)
    }

    pub fn iter(&self) -> slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut shapes = self.shapes.iter();
        let (mut min, mut max) = shapes.next()?.bounds();
        for shape in shapes {
            let (lo, hi) = shape.bounds();
            min = Point::new(min.x.min(lo.x), min.y.min(lo.y));
            max = Point::new(max.x.max(hi.x), max.y.max(hi.y));
        }
        Some((min, max))
    }

    pub fn log_shapes(&self) {
        log::info!("| INDEX |      KIND      |       MIN       |       MAX       |");

        for (i, shape) in self.shapes.iter().enumerate() {
            let (min, max) = shape.bounds();
            log::info!(
                "| {:^5} | {:^14} | {:>7.2};{:>7.2} | {:>7.2};{:>7.2} |",
                i,
                shape.as_text(),
                min.x,
                min.y,
                max.x,
                max.y,
            );
        }
    }
}

impl Extend<Shape> for Path {
    fn extend<I: IntoIterator<Item = Shape>>(&mut self, iter: I) {
        self.shapes.extend(iter);
    }
}
