//! # haptic-hand
//!
//! A 2D kinematic hand driven by the eight channels of a haptic glove: wrist
//! yaw, pitch and roll plus one curl value per finger. It lets glove input be
//! previewed against a visual hand before the hardware exists.
//!
//! ## Features
//! - Pure pose → scene graph mapping with forward-kinematic finger chains
//! - Single-scalar curl law driving all three finger joints
//! - Configurable hand geometry
//! - JSON-lines pose stream decoding for recorded or live glove data
//! - Spring smoothing of the wrist for display
//! - SVG and GPU-instance backends, native and WASM entry points
//!
//! ## Example
//! ```rust
//! use haptic_hand::{render, Finger, Pose, PoseField, SvgWriter};
//!
//! let pose = Pose::default().with(PoseField::Index, 100.0);
//! let scene = render(&pose);
//! let angles = scene.joint_angles(Finger::Index).unwrap();
//! assert_eq!(angles.to_array(), [50.0, 60.0, 45.0]);
//!
//! let svg = SvgWriter::new().render_to_string(&scene);
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod dynamics;
pub mod error;
pub mod kinematics;
pub mod math;
pub mod pose;
pub mod render;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use dynamics::{SecondOrderDynamics, Spring, WristSmoother};
pub use error::{HandError, Result};
pub use kinematics::{
    curl_to_angles, render, render_with, FingerChain, HandGeometry, Joint, JointAngles,
};
pub use math::Transform2D;
pub use pose::{clamp, parse_assignments, Finger, JsonLinesSource, Pose, PoseField, PoseSource};
pub use render::{InstanceBuffer, SvgWriter};
pub use scene::{HandScene, NodeTag, Primitive, SceneNode};
