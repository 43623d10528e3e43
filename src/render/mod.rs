//! Display backends
//!
//! Consumers of the scene graph: an SVG writer and a flattened instance buffer for GPU drawing.

pub mod instances;
pub mod svg;

pub use instances::{InstanceBuffer, ShapeInstance};
pub use svg::{Palette, SvgWriter};
