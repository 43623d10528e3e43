use glam::{Affine2, Mat2, Vec2};

/// A local 2D transform, applied as `translate · rotate · skewX · scale`.
///
/// Angles are in degrees, matching the order in which an SVG `transform`
/// attribute lists them. With a y-down surface a positive rotation turns
/// clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub translation: Vec2,
    pub rotation: f32,
    pub skew_x: f32,
    pub scale: Vec2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        rotation: 0.0,
        skew_x: 0.0,
        scale: Vec2::ONE,
    };

    pub fn from_translation(translation: Vec2) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn from_rotation(degrees: f32) -> Self {
        Self {
            rotation: degrees,
            ..Self::IDENTITY
        }
    }

    pub fn from_translation_rotation(translation: Vec2, degrees: f32) -> Self {
        Self {
            translation,
            rotation: degrees,
            ..Self::IDENTITY
        }
    }

    pub fn new(translation: Vec2, rotation: f32, skew_x: f32, scale: Vec2) -> Self {
        Self {
            translation,
            rotation,
            skew_x,
            scale,
        }
    }

    pub fn with_skew_x(mut self, degrees: f32) -> Self {
        self.skew_x = degrees;
        self
    }

    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec2::splat(scale);
        self
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn to_affine(&self) -> Affine2 {
        let skew = Mat2::from_cols(Vec2::X, Vec2::new(self.skew_x.to_radians().tan(), 1.0));
        Affine2::from_translation(self.translation)
            * Affine2::from_angle(self.rotation.to_radians())
            * Affine2::from_mat2(skew)
            * Affine2::from_scale(self.scale)
    }

    /// Composes this transform under `parent`, yielding the child's world matrix.
    pub fn compose(&self, parent: Affine2) -> Affine2 {
        parent * self.to_affine()
    }

    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        self.to_affine().transform_point2(point)
    }

    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            translation: self.translation.lerp(other.translation, t),
            rotation: self.rotation + (other.rotation - self.rotation) * t,
            skew_x: self.skew_x + (other.skew_x - self.skew_x) * t,
            scale: self.scale.lerp(other.scale, t),
        }
    }
}
