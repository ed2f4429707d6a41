#![no_std]
extern crate alloc;

pub mod geometry;
pub mod flattening;
pub mod parameter;

#[doc(inline)]
pub use {
    geometry::Arc,
    geometry::ArcParameters,
    geometry::GeometryError,
    geometry::GeometryResult,
    geometry::Path,
    geometry::Point,
    geometry::Shape,
    flattening::flatten_shape,
    parameter::Parameter,
    parameter::ParameterHint,
};
