use crate::pose::clamp;

/// Rotations, in degrees, at a finger's three joints.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JointAngles {
    /// Metacarpophalangeal.
    pub mcp: f32,
    /// Proximal interphalangeal.
    pub pip: f32,
    /// Distal interphalangeal.
    pub dip: f32,
}

impl JointAngles {
    /// Angles of a fully curled finger.
    pub const FULL_CURL: Self = Self::new(50.0, 60.0, 45.0);

    pub const fn new(mcp: f32, pip: f32, dip: f32) -> Self {
        Self { mcp, pip, dip }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.mcp, self.pip, self.dip]
    }

    pub fn scale(self, k: f32) -> Self {
        Self::new(self.mcp * k, self.pip * k, self.dip * k)
    }
}

impl From<JointAngles> for [f32; 3] {
    fn from(angles: JointAngles) -> Self {
        angles.to_array()
    }
}

/// Normalises a curl percentage to `[0, 1]`.
///
/// This is the only place out-of-range input is corrected.
pub fn curl_fraction(curl: f32) -> f32 {
    clamp(curl, 0.0, 100.0) / 100.0
}

/// Maps one curl value onto all three joints in the fixed 50:60:45 profile.
pub fn curl_to_angles(curl: f32) -> JointAngles {
    curl_profile(curl, JointAngles::FULL_CURL)
}

/// Like [`curl_to_angles`] with a custom fully-curled profile.
pub fn curl_profile(curl: f32, full: JointAngles) -> JointAngles {
    full.scale(curl_fraction(curl))
}
