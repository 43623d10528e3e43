use glam::{Affine2, Vec2};

use crate::kinematics::Joint;
use crate::math::Transform2D;
use crate::pose::Finger;

/// Rectangle with rounded corners, in its node's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
}

impl RoundedRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32, corner_radius: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            corner_radius,
        }
    }

    /// A capsule standing on the origin and extending `length` towards -y.
    pub fn capsule(length: f32, thickness: f32) -> Self {
        Self::new(-thickness / 2.0, -length, thickness, length, thickness / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Something a display surface draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Palm(RoundedRect),
    PalmHeel(RoundedRect),
    FingerSegment(RoundedRect),
    JointMarker(Circle),
    Fingertip(Circle),
}

/// Identifies a node in the hand hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeTag {
    Wrist,
    Palm,
    Joint(Finger, Joint),
}

impl NodeTag {
    pub fn finger(self) -> Option<Finger> {
        match self {
            NodeTag::Joint(finger, _) => Some(finger),
            _ => None,
        }
    }
}

/// A local transform, the shapes drawn in that frame, and the child frames.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub tag: NodeTag,
    pub transform: Transform2D,
    pub primitives: Vec<Primitive>,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn new(tag: NodeTag, transform: Transform2D) -> Self {
        Self {
            tag,
            transform,
            primitives: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_primitive(mut self, primitive: Primitive) -> Self {
        self.primitives.push(primitive);
        self
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn find(&self, tag: NodeTag) -> Option<&SceneNode> {
        if self.tag == tag {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(tag))
    }

    /// Depth-first, parent before children, with each node's world matrix.
    pub fn walk<F>(&self, parent: Affine2, visit: &mut F)
    where
        F: FnMut(&SceneNode, Affine2),
    {
        let world = self.transform.compose(parent);
        visit(self, world);
        for child in &self.children {
            child.walk(world, visit);
        }
    }

    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SceneNode::node_count).sum::<usize>()
    }
}
