//! Kinematics module
//!
//! Maps a [`Pose`](crate::Pose) onto the hand's scene graph: the curl law,
//! the geometry the hand is laid out with, and the forward-kinematic finger
//! chains.

pub mod curl;
pub mod finger;
pub mod geometry;
pub mod hand;

pub use curl::{curl_fraction, curl_profile, curl_to_angles, JointAngles};
pub use finger::{FingerChain, FingerChainBuilder, Joint, Segment};
pub use geometry::{HandGeometry, HandGeometryBuilder};
pub use hand::{palm_transform, render, render_with, wrist_transform, DRAW_ORDER};
