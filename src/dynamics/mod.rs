//! Second-order dynamics used to ease the wrist between poses.

pub mod second_order;
pub mod wrist;

pub use second_order::{Interpolatable, SecondOrderDynamics, Spring};
pub use wrist::WristSmoother;
