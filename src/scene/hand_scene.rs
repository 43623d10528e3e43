use glam::{Affine2, Vec2};

use super::node::{NodeTag, Primitive, SceneNode};
use crate::kinematics::{Joint, JointAngles};
use crate::math::Transform2D;
use crate::pose::Finger;

/// The hand rendered for one pose: a wrist frame wrapping the palm, which in
/// turn carries the five finger chains.
#[derive(Debug, Clone, PartialEq)]
pub struct HandScene {
    root: SceneNode,
}

impl HandScene {
    pub(crate) fn new(root: SceneNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &SceneNode {
        &self.root
    }

    pub fn wrist_transform(&self) -> Transform2D {
        self.root.transform
    }

    pub fn palm(&self) -> Option<&SceneNode> {
        self.root.find(NodeTag::Palm)
    }

    /// Base frame of a finger chain; its descendants are the joint frames.
    pub fn finger(&self, finger: Finger) -> Option<&SceneNode> {
        self.root.find(NodeTag::Joint(finger, Joint::Base))
    }

    pub fn joint(&self, finger: Finger, joint: Joint) -> Option<&SceneNode> {
        self.finger(finger)?.find(NodeTag::Joint(finger, joint))
    }

    /// Joint angles as applied to the MCP, PIP and DIP frames.
    pub fn joint_angles(&self, finger: Finger) -> Option<JointAngles> {
        let rotation = |joint| self.joint(finger, joint).map(|n| n.transform.rotation);
        Some(JointAngles::new(
            rotation(Joint::Mcp)?,
            rotation(Joint::Pip)?,
            rotation(Joint::Dip)?,
        ))
    }

    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(&SceneNode, Affine2),
    {
        self.root.walk(Affine2::IDENTITY, &mut visit);
    }

    /// Every node's world matrix, in draw order.
    pub fn world_transforms(&self) -> Vec<(NodeTag, Affine2)> {
        let mut out = Vec::with_capacity(self.root.node_count());
        self.walk(|node, world| out.push((node.tag, world)));
        out
    }

    /// Every primitive paired with the world matrix of the frame it lives in.
    pub fn world_primitives(&self) -> Vec<(NodeTag, Affine2, Primitive)> {
        let mut out = Vec::new();
        self.walk(|node, world| {
            out.extend(node.primitives.iter().map(|p| (node.tag, world, *p)));
        });
        out
    }

    /// Centre of the fingertip in surface coordinates.
    pub fn fingertip_position(&self, finger: Finger) -> Option<Vec2> {
        let target = NodeTag::Joint(finger, Joint::Dip);
        let mut found = None;
        self.walk(|node, world| {
            if node.tag == target {
                found = node.primitives.iter().find_map(|p| match p {
                    Primitive::Fingertip(tip) => Some(world.transform_point2(tip.center)),
                    _ => None,
                });
            }
        });
        found
    }
}
