use glam::Vec2;

use super::second_order::{SecondOrderDynamics, Spring};
use crate::pose::Pose;

/// Eases the wrist's yaw and pitch towards their targets for display.
///
/// Only yaw and pitch are animated; roll and finger curls pass through
/// unchanged. The smoothed pose is cosmetic and never fed back into the
/// input pose.
#[derive(Debug, Clone)]
pub struct WristSmoother {
    dynamics: SecondOrderDynamics<Vec2>,
}

impl Default for WristSmoother {
    fn default() -> Self {
        Self::new(&Pose::DEFAULT)
    }
}

impl WristSmoother {
    pub fn new(initial: &Pose) -> Self {
        Self {
            dynamics: SecondOrderDynamics::from_spring(Spring::WRIST, Self::wrist(initial)),
        }
    }

    fn wrist(pose: &Pose) -> Vec2 {
        Vec2::new(pose.wrist_yaw, pose.wrist_pitch)
    }

    /// Advances by `dt` seconds towards `target` and returns the pose to draw.
    pub fn update(&mut self, target: &Pose, dt: f32) -> Pose {
        let wrist = self.dynamics.update(Self::wrist(target), dt);
        Pose {
            wrist_yaw: wrist.x,
            wrist_pitch: wrist.y,
            ..*target
        }
    }

    /// Jumps straight to `target` with no motion left over.
    pub fn snap(&mut self, target: &Pose) {
        self.dynamics.reset(Self::wrist(target));
    }

    /// Current smoothed `(yaw, pitch)`.
    pub fn current(&self) -> (f32, f32) {
        let wrist = self.dynamics.current();
        (wrist.x, wrist.y)
    }
}
