//! Math utilities module
//!
//! Provides convenient re-exports from glam and the 2D transform used by every scene node.

mod transform;

pub use transform::Transform2D;

// Re-export commonly used glam types
pub use glam::{Affine2, Mat2, Vec2};
