use glam::Vec2;

use super::curl::JointAngles;
use crate::pose::Finger;

/// Dimensions of the drawn hand. All lengths are in surface units before the
/// palm scale is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct HandGeometry {
    pub(crate) anchor: Vec2,
    pub(crate) scale: f32,
    pub(crate) pitch_skew: f32,
    pub(crate) palm_size: Vec2,
    pub(crate) palm_corner: f32,
    pub(crate) heel_size: Vec2,
    pub(crate) heel_corner: f32,
    pub(crate) finger_spacing: f32,
    pub(crate) finger_length: f32,
    pub(crate) short_finger_length: f32,
    pub(crate) thickness: f32,
    pub(crate) length_ratios: [f32; 3],
    pub(crate) thickness_ratios: [f32; 3],
    pub(crate) marker_radii: [f32; 3],
    pub(crate) fingertip_radius: f32,
    pub(crate) thumb_inset: f32,
    pub(crate) thumb_rotation: f32,
    pub(crate) full_curl: JointAngles,
}

impl Default for HandGeometry {
    fn default() -> Self {
        Self {
            anchor: Vec2::new(220.0, 200.0),
            scale: 1.1,
            pitch_skew: 0.2,
            palm_size: Vec2::new(140.0, 120.0),
            palm_corner: 24.0,
            heel_size: Vec2::new(120.0, 20.0),
            heel_corner: 10.0,
            finger_spacing: 28.0,
            finger_length: 80.0,
            short_finger_length: 70.0,
            thickness: 16.0,
            length_ratios: [1.0, 0.65, 0.55],
            thickness_ratios: [1.0, 0.9, 0.8],
            marker_radii: [5.0, 4.5, 4.0],
            fingertip_radius: 6.0,
            thumb_inset: 18.0,
            thumb_rotation: -30.0,
            full_curl: JointAngles::FULL_CURL,
        }
    }
}

impl HandGeometry {
    pub fn builder() -> HandGeometryBuilder {
        HandGeometryBuilder::new()
    }

    /// Palm centre in surface coordinates; wrist rotation pivots here.
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Degrees of X-skew per degree of wrist pitch.
    pub fn pitch_skew(&self) -> f32 {
        self.pitch_skew
    }

    pub fn palm_size(&self) -> Vec2 {
        self.palm_size
    }

    pub fn finger_spacing(&self) -> f32 {
        self.finger_spacing
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn full_curl(&self) -> JointAngles {
        self.full_curl
    }

    /// Base length of the proximal segment.
    pub fn finger_length(&self, finger: Finger) -> f32 {
        match finger {
            Finger::Thumb | Finger::Pinky => self.short_finger_length,
            _ => self.finger_length,
        }
    }

    /// Multiples of the spacing at which the four fingers leave the palm's top edge.
    fn spread(finger: Finger) -> Option<f32> {
        match finger {
            Finger::Index => Some(-1.5),
            Finger::Middle => Some(-0.5),
            Finger::Ring => Some(0.5),
            Finger::Pinky => Some(1.5),
            Finger::Thumb => None,
        }
    }

    /// Where a finger attaches, in palm-local coordinates.
    pub fn finger_base(&self, finger: Finger) -> Vec2 {
        match Self::spread(finger) {
            Some(k) => Vec2::new(k * self.finger_spacing, -self.palm_size.y),
            None => Vec2::new(
                -self.palm_size.x / 2.0 + self.thumb_inset,
                -self.palm_size.y / 2.0,
            ),
        }
    }

    /// Rotation of the finger's base frame relative to the palm, in degrees.
    pub fn finger_rotation(&self, finger: Finger) -> f32 {
        match finger {
            Finger::Thumb => self.thumb_rotation,
            _ => 0.0,
        }
    }

    /// `(length, thickness, marker radius)` of each segment, proximal first.
    pub fn segment_dims(&self, finger: Finger) -> [(f32, f32, f32); 3] {
        let length = self.finger_length(finger);
        [0, 1, 2].map(|i| {
            (
                length * self.length_ratios[i],
                self.thickness * self.thickness_ratios[i],
                self.marker_radii[i],
            )
        })
    }

    pub fn fingertip_radius(&self) -> f32 {
        self.fingertip_radius
    }

    pub(crate) fn palm_rect(&self) -> (Vec2, Vec2, f32) {
        (
            Vec2::new(-self.palm_size.x / 2.0, -self.palm_size.y),
            self.palm_size,
            self.palm_corner,
        )
    }

    pub(crate) fn heel_rect(&self) -> (Vec2, Vec2, f32) {
        (
            Vec2::new(-self.heel_size.x / 2.0, -self.heel_size.y / 2.0),
            self.heel_size,
            self.heel_corner,
        )
    }
}

pub struct HandGeometryBuilder {
    geometry: HandGeometry,
}

impl HandGeometryBuilder {
    pub fn new() -> Self {
        Self {
            geometry: HandGeometry::default(),
        }
    }

    pub fn anchor(mut self, anchor: Vec2) -> Self {
        self.geometry.anchor = anchor;
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.geometry.scale = scale;
        self
    }

    pub fn pitch_skew(mut self, factor: f32) -> Self {
        self.geometry.pitch_skew = factor;
        self
    }

    pub fn palm(mut self, width: f32, height: f32, corner_radius: f32) -> Self {
        self.geometry.palm_size = Vec2::new(width, height);
        self.geometry.palm_corner = corner_radius;
        self
    }

    pub fn heel(mut self, width: f32, height: f32, corner_radius: f32) -> Self {
        self.geometry.heel_size = Vec2::new(width, height);
        self.geometry.heel_corner = corner_radius;
        self
    }

    pub fn finger_spacing(mut self, spacing: f32) -> Self {
        self.geometry.finger_spacing = spacing;
        self
    }

    pub fn finger_lengths(mut self, long: f32, short: f32) -> Self {
        self.geometry.finger_length = long;
        self.geometry.short_finger_length = short;
        self
    }

    pub fn thickness(mut self, thickness: f32) -> Self {
        self.geometry.thickness = thickness;
        self
    }

    pub fn length_ratios(mut self, ratios: [f32; 3]) -> Self {
        self.geometry.length_ratios = ratios;
        self
    }

    pub fn thickness_ratios(mut self, ratios: [f32; 3]) -> Self {
        self.geometry.thickness_ratios = ratios;
        self
    }

    pub fn marker_radii(mut self, radii: [f32; 3]) -> Self {
        self.geometry.marker_radii = radii;
        self
    }

    pub fn fingertip_radius(mut self, radius: f32) -> Self {
        self.geometry.fingertip_radius = radius;
        self
    }

    pub fn thumb(mut self, inset: f32, rotation: f32) -> Self {
        self.geometry.thumb_inset = inset;
        self.geometry.thumb_rotation = rotation;
        self
    }

    pub fn full_curl(mut self, angles: JointAngles) -> Self {
        self.geometry.full_curl = angles;
        self
    }

    pub fn build(self) -> HandGeometry {
        self.geometry
    }
}

impl Default for HandGeometryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
