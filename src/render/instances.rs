use bytemuck::{Pod, Zeroable};
use glam::Affine2;

use crate::pose::Finger;
use crate::scene::{HandScene, NodeTag, Primitive};

pub const KIND_PALM: u32 = 0;
pub const KIND_HEEL: u32 = 1;
pub const KIND_SEGMENT: u32 = 2;
pub const KIND_MARKER: u32 = 3;
pub const KIND_FINGERTIP: u32 = 4;

/// Owner value for shapes that belong to the palm rather than a finger.
pub const OWNER_PALM: u32 = u32::MAX;

const PALM_COLOR: [f32; 4] = [0.102, 0.102, 0.102, 1.0];
const HEEL_COLOR: [f32; 4] = [0.051, 0.051, 0.051, 1.0];
const SEGMENT_COLOR: [f32; 4] = [0.067, 0.067, 0.067, 1.0];
const MARKER_COLOR: [f32; 4] = [0.2, 0.2, 0.2, 1.0];

/// One shape ready for an instanced draw call.
///
/// `world` holds the two matrix columns followed by the translation. For
/// rectangles `shape` is `[x, y, width, height]`; for circles it is
/// `[cx, cy, radius, 0]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ShapeInstance {
    pub world: [f32; 6],
    pub shape: [f32; 4],
    pub color: [f32; 4],
    pub corner_radius: f32,
    pub kind: u32,
    pub owner: u32,
}

impl ShapeInstance {
    fn new(world: Affine2, tag: NodeTag, primitive: &Primitive) -> Self {
        let m = world.matrix2;
        let t = world.translation;
        let (shape, corner_radius, kind, color) = match primitive {
            Primitive::Palm(r) => (
                [r.x, r.y, r.width, r.height],
                r.corner_radius,
                KIND_PALM,
                PALM_COLOR,
            ),
            Primitive::PalmHeel(r) => (
                [r.x, r.y, r.width, r.height],
                r.corner_radius,
                KIND_HEEL,
                HEEL_COLOR,
            ),
            Primitive::FingerSegment(r) => (
                [r.x, r.y, r.width, r.height],
                r.corner_radius,
                KIND_SEGMENT,
                SEGMENT_COLOR,
            ),
            Primitive::JointMarker(c) => (
                [c.center.x, c.center.y, c.radius, 0.0],
                c.radius,
                KIND_MARKER,
                MARKER_COLOR,
            ),
            Primitive::Fingertip(c) => (
                [c.center.x, c.center.y, c.radius, 0.0],
                c.radius,
                KIND_FINGERTIP,
                SEGMENT_COLOR,
            ),
        };
        Self {
            world: [m.x_axis.x, m.x_axis.y, m.y_axis.x, m.y_axis.y, t.x, t.y],
            shape,
            color,
            corner_radius,
            kind,
            owner: tag.finger().map_or(OWNER_PALM, |f| f as u32),
        }
    }

    pub fn finger(&self) -> Option<Finger> {
        Finger::ALL.get(self.owner as usize).copied()
    }
}

/// Flattened, world-space copy of a scene for GPU upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceBuffer {
    instances: Vec<ShapeInstance>,
}

impl InstanceBuffer {
    pub fn from_scene(scene: &HandScene) -> Self {
        let instances = scene
            .world_primitives()
            .iter()
            .map(|(tag, world, primitive)| ShapeInstance::new(*world, *tag, primitive))
            .collect();
        Self { instances }
    }

    pub fn instances(&self) -> &[ShapeInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Shapes belonging to one finger, in draw order.
    pub fn finger(&self, finger: Finger) -> impl Iterator<Item = &ShapeInstance> + '_ {
        self.instances
            .iter()
            .filter(move |i| i.finger() == Some(finger))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::render;
    use crate::pose::Pose;

    #[test]
    fn instance_layout_has_no_padding() {
        assert_eq!(std::mem::size_of::<ShapeInstance>(), 17 * 4);
    }

    #[test]
    fn default_scene_shape_counts() {
        let buffer = InstanceBuffer::from_scene(&render(&Pose::DEFAULT));
        // palm + heel, then per finger 3 segments, 3 markers and a tip
        assert_eq!(buffer.len(), 2 + 5 * 7);
        assert_eq!(buffer.as_bytes().len(), buffer.len() * 68);
        assert_eq!(buffer.instances()[0].kind, KIND_PALM);
        assert_eq!(buffer.instances()[0].owner, OWNER_PALM);
        for finger in Finger::ALL {
            assert_eq!(buffer.finger(finger).count(), 7);
        }
    }

    #[test]
    fn palm_world_matrix_includes_anchor_and_scale() {
        let buffer = InstanceBuffer::from_scene(&render(&Pose::DEFAULT));
        let palm = buffer.instances()[0];
        assert!((palm.world[0] - 1.1).abs() < 1e-6);
        assert!((palm.world[3] - 1.1).abs() < 1e-6);
        assert_eq!([palm.world[4], palm.world[5]], [220.0, 200.0]);
    }
}
