use std::fmt;
use std::str::FromStr;

use crate::error::HandError;

/// One of the eight independent pose channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoseField {
    WristYaw,
    WristPitch,
    WristRoll,
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl PoseField {
    pub const ALL: [PoseField; 8] = [
        PoseField::WristYaw,
        PoseField::WristPitch,
        PoseField::WristRoll,
        PoseField::Thumb,
        PoseField::Index,
        PoseField::Middle,
        PoseField::Ring,
        PoseField::Pinky,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PoseField::WristYaw => "wrist_yaw",
            PoseField::WristPitch => "wrist_pitch",
            PoseField::WristRoll => "wrist_roll",
            PoseField::Thumb => "thumb",
            PoseField::Index => "index",
            PoseField::Middle => "middle",
            PoseField::Ring => "ring",
            PoseField::Pinky => "pinky",
        }
    }

    /// Slider label.
    pub fn label(self) -> &'static str {
        match self {
            PoseField::WristYaw => "Wrist Yaw",
            PoseField::WristPitch => "Wrist Pitch",
            PoseField::WristRoll => "Wrist Roll",
            PoseField::Thumb => "Thumb curl",
            PoseField::Index => "Index curl",
            PoseField::Middle => "Middle curl",
            PoseField::Ring => "Ring curl",
            PoseField::Pinky => "Pinky curl",
        }
    }

    /// Nominal `(min, max)` of the control driving this field.
    pub fn range(self) -> (f32, f32) {
        match self {
            PoseField::WristYaw | PoseField::WristRoll => (-45.0, 45.0),
            PoseField::WristPitch => (-30.0, 30.0),
            _ => (0.0, 100.0),
        }
    }

    pub fn is_wrist(self) -> bool {
        matches!(
            self,
            PoseField::WristYaw | PoseField::WristPitch | PoseField::WristRoll
        )
    }

    /// Accepts `wrist_yaw`, `wristYaw`, `wrist-yaw` and any ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let field = match key.as_str() {
            "wristyaw" | "yaw" => PoseField::WristYaw,
            "wristpitch" | "pitch" => PoseField::WristPitch,
            "wristroll" | "roll" => PoseField::WristRoll,
            "thumb" => PoseField::Thumb,
            "index" => PoseField::Index,
            "middle" => PoseField::Middle,
            "ring" => PoseField::Ring,
            "pinky" => PoseField::Pinky,
            _ => return None,
        };
        Some(field)
    }

    /// Readout shown next to a slider: rounded half away from zero, no decimals.
    pub fn format_value(value: f32) -> String {
        format!("{:.0}", value.round())
    }
}

impl fmt::Display for PoseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PoseField {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| HandError::unknown_field(s))
    }
}
