//! Pose module
//!
//! The eight-channel input vector that drives the hand, plus the helpers input
//! sources use to produce it.

pub mod field;
pub mod stream;

pub use field::PoseField;
pub use stream::{parse_assignments, JsonLinesSource, PoseSource};

use serde::{Deserialize, Serialize};

/// Curl every finger rests at in the default pose.
pub const REST_CURL: f32 = 10.0;

/// Returns `min` below the range, `max` above it, and `value` otherwise.
///
/// Total for any `min`/`max`; NaN passes through unchanged.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }

    pub fn field(self) -> PoseField {
        match self {
            Finger::Thumb => PoseField::Thumb,
            Finger::Index => PoseField::Index,
            Finger::Middle => PoseField::Middle,
            Finger::Ring => PoseField::Ring,
            Finger::Pinky => PoseField::Pinky,
        }
    }
}

/// Hand configuration at one instant.
///
/// Wrist angles are degrees; finger values are curl percentages where 0 is
/// fully extended and 100 fully closed. The nominal ranges in
/// [`PoseField::range`] are advisory: nothing here rejects values outside
/// them. Updates replace the whole value, see [`Pose::with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pose {
    pub wrist_yaw: f32,
    pub wrist_pitch: f32,
    pub wrist_roll: f32,
    pub thumb: f32,
    pub index: f32,
    pub middle: f32,
    pub ring: f32,
    pub pinky: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Pose {
    /// Relaxed resting hand: level wrist, every finger slightly curled.
    pub const DEFAULT: Self = Self {
        wrist_yaw: 0.0,
        wrist_pitch: 0.0,
        wrist_roll: 0.0,
        thumb: REST_CURL,
        index: REST_CURL,
        middle: REST_CURL,
        ring: REST_CURL,
        pinky: REST_CURL,
    };

    /// Restores the default pose in place.
    pub fn reset(&mut self) {
        *self = Self::DEFAULT;
    }

    pub fn get(&self, field: PoseField) -> f32 {
        match field {
            PoseField::WristYaw => self.wrist_yaw,
            PoseField::WristPitch => self.wrist_pitch,
            PoseField::WristRoll => self.wrist_roll,
            PoseField::Thumb => self.thumb,
            PoseField::Index => self.index,
            PoseField::Middle => self.middle,
            PoseField::Ring => self.ring,
            PoseField::Pinky => self.pinky,
        }
    }

    /// A copy of this pose with exactly one field replaced.
    #[must_use]
    pub fn with(self, field: PoseField, value: f32) -> Self {
        let mut next = self;
        let slot = match field {
            PoseField::WristYaw => &mut next.wrist_yaw,
            PoseField::WristPitch => &mut next.wrist_pitch,
            PoseField::WristRoll => &mut next.wrist_roll,
            PoseField::Thumb => &mut next.thumb,
            PoseField::Index => &mut next.index,
            PoseField::Middle => &mut next.middle,
            PoseField::Ring => &mut next.ring,
            PoseField::Pinky => &mut next.pinky,
        };
        *slot = value;
        log::debug!("pose {} -> {}", field.name(), value);
        next
    }

    /// Like [`Pose::with`], but clamps `value` to the field's slider range first.
    #[must_use]
    pub fn with_clamped(self, field: PoseField, value: f32) -> Self {
        let (min, max) = field.range();
        self.with(field, clamp(value, min, max))
    }

    pub fn curl(&self, finger: Finger) -> f32 {
        self.get(finger.field())
    }

    /// Curls in [`Finger::ALL`] order.
    pub fn curls(&self) -> [f32; 5] {
        Finger::ALL.map(|finger| self.curl(finger))
    }

    pub fn is_finite(&self) -> bool {
        PoseField::ALL.iter().all(|&field| self.get(field).is_finite())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn clamp_is_total() {
        assert_eq!(clamp(-5.0, 0.0, 100.0), 0.0);
        assert_eq!(clamp(150.0, 0.0, 100.0), 100.0);
        assert_eq!(clamp(42.0, 0.0, 100.0), 42.0);
        assert_eq!(clamp(0.0, 0.0, 100.0), 0.0);
        assert_eq!(clamp(100.0, 0.0, 100.0), 100.0);
        assert!(clamp(f32::NAN, 0.0, 100.0).is_nan());
    }

    #[test]
    fn default_pose_is_relaxed_hand() {
        let pose = Pose::default();
        assert_eq!(pose.wrist_yaw, 0.0);
        assert_eq!(pose.wrist_pitch, 0.0);
        assert_eq!(pose.wrist_roll, 0.0);
        assert_eq!(pose.curls(), [10.0; 5]);
    }

    #[test]
    fn with_replaces_only_one_field() {
        let pose = Pose::DEFAULT.with(PoseField::Ring, 80.0);
        assert_eq!(pose.ring, 80.0);
        for field in PoseField::ALL {
            if field != PoseField::Ring {
                assert_eq!(pose.get(field), Pose::DEFAULT.get(field), "{field:?}");
            }
        }
    }

    #[test]
    fn with_keeps_out_of_range_values() {
        let pose = Pose::DEFAULT.with(PoseField::WristYaw, 170.0);
        assert_eq!(pose.wrist_yaw, 170.0);
    }

    #[test]
    fn with_clamped_uses_slider_range() {
        let pose = Pose::DEFAULT
            .with_clamped(PoseField::WristPitch, -80.0)
            .with_clamped(PoseField::Index, 140.0);
        assert_eq!(pose.wrist_pitch, -30.0);
        assert_eq!(pose.index, 100.0);
    }

    #[test]
    fn reset_restores_default_after_mutations() {
        let mut pose = Pose::DEFAULT
            .with(PoseField::WristYaw, 33.0)
            .with(PoseField::WristRoll, -12.0)
            .with(PoseField::Thumb, 99.0)
            .with(PoseField::Pinky, -4.0);
        assert_ne!(pose, Pose::DEFAULT);
        pose.reset();
        assert_eq!(pose, Pose::DEFAULT);
    }

    #[test]
    fn curl_maps_fingers_to_fields() {
        let pose = Pose::DEFAULT
            .with(PoseField::Thumb, 1.0)
            .with(PoseField::Index, 2.0)
            .with(PoseField::Middle, 3.0)
            .with(PoseField::Ring, 4.0)
            .with(PoseField::Pinky, 5.0);
        assert_eq!(pose.curls(), [1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(pose.curl(Finger::Ring), 4.0);
    }

    #[test]
    fn non_finite_pose_is_detected() {
        assert!(Pose::DEFAULT.is_finite());
        assert!(!Pose::DEFAULT.with(PoseField::Middle, f32::NAN).is_finite());
        assert!(!Pose::DEFAULT.with(PoseField::WristYaw, f32::INFINITY).is_finite());
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let json = serde_json::to_string(&Pose::DEFAULT).unwrap();
        assert!(json.contains("\"wristYaw\":0.0"));
        assert!(json.contains("\"pinky\":10.0"));
        let back: Pose = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Pose::DEFAULT);
    }
}
