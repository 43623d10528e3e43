use glam::Vec2;

use super::curl::{curl_profile, JointAngles};
use super::geometry::HandGeometry;
use crate::math::Transform2D;
use crate::pose::Finger;
use crate::scene::{Circle, NodeTag, Primitive, RoundedRect, SceneNode};

/// A frame in a finger chain. `Base` is where the finger leaves the palm; the
/// others sit at the far end of the proximal, middle and distal segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    Base,
    Mcp,
    Pip,
    Dip,
}

impl Joint {
    pub const ALL: [Joint; 4] = [Joint::Base, Joint::Mcp, Joint::Pip, Joint::Dip];
}

/// One rigid link of a finger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub length: f32,
    pub thickness: f32,
    pub marker_radius: f32,
}

impl Segment {
    pub fn shape(&self) -> RoundedRect {
        RoundedRect::capsule(self.length, self.thickness)
    }
}

/// Proximal, middle and distal segments driven by a single curl value.
#[derive(Debug, Clone, PartialEq)]
pub struct FingerChain {
    pub(crate) finger: Finger,
    pub(crate) base: Vec2,
    pub(crate) base_rotation: f32,
    pub(crate) segments: [Segment; 3],
    pub(crate) angles: JointAngles,
    pub(crate) fingertip_radius: f32,
}

impl FingerChain {
    pub fn builder(finger: Finger) -> FingerChainBuilder {
        FingerChainBuilder::new(finger)
    }

    /// A chain laid out by `geometry` and curled by `curl`.
    pub fn from_geometry(finger: Finger, curl: f32, geometry: &HandGeometry) -> Self {
        let mut builder = Self::builder(finger)
            .base(geometry.finger_base(finger))
            .base_rotation(geometry.finger_rotation(finger))
            .angles(curl_profile(curl, geometry.full_curl()))
            .fingertip_radius(geometry.fingertip_radius());
        for (length, thickness, marker_radius) in geometry.segment_dims(finger) {
            builder = builder.add_segment(length, thickness, marker_radius);
        }
        builder.build()
    }

    pub fn finger(&self) -> Finger {
        self.finger
    }

    pub fn base(&self) -> Vec2 {
        self.base
    }

    pub fn base_rotation(&self) -> f32 {
        self.base_rotation
    }

    pub fn segments(&self) -> &[Segment; 3] {
        &self.segments
    }

    pub fn angles(&self) -> JointAngles {
        self.angles
    }

    pub fn total_length(&self) -> f32 {
        self.segments.iter().map(|s| s.length).sum()
    }

    /// Local transform of each joint frame relative to its parent frame.
    ///
    /// The base frame is placed on the palm; every later frame sits at the far
    /// end of the previous segment and turns by that joint's angle.
    pub fn local_transforms(&self) -> [(Joint, Transform2D); 4] {
        let [proximal, middle, distal] = self.segments;
        [
            (
                Joint::Base,
                Transform2D::from_translation_rotation(self.base, self.base_rotation),
            ),
            (
                Joint::Mcp,
                Transform2D::from_translation_rotation(
                    Vec2::new(0.0, -proximal.length),
                    self.angles.mcp,
                ),
            ),
            (
                Joint::Pip,
                Transform2D::from_translation_rotation(
                    Vec2::new(0.0, -middle.length),
                    self.angles.pip,
                ),
            ),
            (
                Joint::Dip,
                Transform2D::from_translation_rotation(
                    Vec2::new(0.0, -distal.length),
                    self.angles.dip,
                ),
            ),
        ]
    }

    /// Builds the nested frames, innermost first so each parent can own its child.
    pub fn to_node(&self) -> SceneNode {
        let frames = self.local_transforms();
        let tip = Circle::new(
            Vec2::new(0.0, -self.fingertip_radius),
            self.fingertip_radius,
        );
        let (joint, transform) = frames[3];
        let mut node = SceneNode::new(NodeTag::Joint(self.finger, joint), transform)
            .with_primitive(Primitive::Fingertip(tip));

        for i in (0..3).rev() {
            let (joint, transform) = frames[i];
            let segment = self.segments[i];
            node = SceneNode::new(NodeTag::Joint(self.finger, joint), transform)
                .with_primitive(Primitive::FingerSegment(segment.shape()))
                .with_primitive(Primitive::JointMarker(Circle::new(
                    Vec2::ZERO,
                    segment.marker_radius,
                )))
                .with_child(node);
        }
        node
    }
}

pub struct FingerChainBuilder {
    finger: Finger,
    base: Vec2,
    base_rotation: f32,
    segments: Vec<Segment>,
    angles: JointAngles,
    fingertip_radius: f32,
}

impl FingerChainBuilder {
    pub fn new(finger: Finger) -> Self {
        Self {
            finger,
            base: Vec2::ZERO,
            base_rotation: 0.0,
            segments: Vec::with_capacity(3),
            angles: JointAngles::default(),
            fingertip_radius: 6.0,
        }
    }

    pub fn base(mut self, base: Vec2) -> Self {
        self.base = base;
        self
    }

    pub fn base_rotation(mut self, degrees: f32) -> Self {
        self.base_rotation = degrees;
        self
    }

    /// Appends a segment. Only the first three are used.
    pub fn add_segment(mut self, length: f32, thickness: f32, marker_radius: f32) -> Self {
        self.segments.push(Segment {
            length,
            thickness,
            marker_radius,
        });
        self
    }

    pub fn angles(mut self, angles: JointAngles) -> Self {
        self.angles = angles;
        self
    }

    pub fn fingertip_radius(mut self, radius: f32) -> Self {
        self.fingertip_radius = radius;
        self
    }

    /// Missing segments are zero-length.
    pub fn build(self) -> FingerChain {
        let empty = Segment {
            length: 0.0,
            thickness: 0.0,
            marker_radius: 0.0,
        };
        let segment = |i: usize| self.segments.get(i).copied().unwrap_or(empty);
        FingerChain {
            finger: self.finger,
            base: self.base,
            base_rotation: self.base_rotation,
            segments: [segment(0), segment(1), segment(2)],
            angles: self.angles,
            fingertip_radius: self.fingertip_radius,
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use glam::Affine2;

    fn straight_chain() -> FingerChain {
        FingerChain::builder(Finger::Index)
            .add_segment(10.0, 4.0, 2.0)
            .add_segment(5.0, 3.0, 1.5)
            .add_segment(3.0, 2.0, 1.0)
            .build()
    }

    fn tip_world(chain: &FingerChain) -> Vec2 {
        let mut tip = Vec2::ZERO;
        chain.to_node().walk(Affine2::IDENTITY, &mut |node, world| {
            for p in &node.primitives {
                if let Primitive::Fingertip(c) = p {
                    tip = world.transform_point2(c.center);
                }
            }
        });
        tip
    }

    #[test]
    fn straight_chain_reaches_up() {
        let chain = straight_chain();
        assert_eq!(chain.total_length(), 18.0);
        let tip = tip_world(&chain);
        assert!((tip - Vec2::new(0.0, -24.0)).length() < 1e-4);
    }

    #[test]
    fn rotations_accumulate_down_the_chain() {
        let chain = FingerChain::builder(Finger::Index)
            .add_segment(10.0, 4.0, 2.0)
            .add_segment(10.0, 3.0, 1.5)
            .add_segment(10.0, 2.0, 1.0)
            .angles(JointAngles::new(90.0, 90.0, 0.0))
            .fingertip_radius(0.0)
            .build();
        // up 10, turn right and go 10, turn again and come back down 10
        let tip = tip_world(&chain);
        assert!((tip - Vec2::new(10.0, 0.0)).length() < 1e-4, "{tip:?}");
    }

    #[test]
    fn node_structure() {
        let node = straight_chain().to_node();
        assert_eq!(node.tag, NodeTag::Joint(Finger::Index, Joint::Base));
        assert_eq!(node.node_count(), 4);
        assert_eq!(node.primitives.len(), 2);
        let dip = node.find(NodeTag::Joint(Finger::Index, Joint::Dip)).unwrap();
        assert!(dip.children.is_empty());
        assert!(matches!(dip.primitives[..], [Primitive::Fingertip(_)]));
    }

    #[test]
    fn builder_pads_missing_segments() {
        let chain = FingerChain::builder(Finger::Thumb)
            .add_segment(7.0, 1.0, 1.0)
            .build();
        assert_eq!(chain.segments()[1].length, 0.0);
        assert_eq!(chain.total_length(), 7.0);
    }

    #[test]
    fn from_geometry_uses_curl_profile() {
        let chain = FingerChain::from_geometry(Finger::Middle, 100.0, &HandGeometry::default());
        assert_eq!(chain.angles(), JointAngles::FULL_CURL);
        assert_eq!(chain.base(), Vec2::new(-14.0, -120.0));
        assert_eq!(chain.segments()[0].length, 80.0);
    }
}
