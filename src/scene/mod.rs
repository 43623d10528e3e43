//! Scene graph module
//!
//! Nested local transforms and the primitives drawn in each frame. A display
//! surface walks the tree and applies transforms the same way an SVG `<g>`
//! hierarchy does.

pub mod hand_scene;
pub mod node;

pub use hand_scene::HandScene;
pub use node::{Circle, NodeTag, Primitive, RoundedRect, SceneNode};
