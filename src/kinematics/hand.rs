use super::finger::FingerChain;
use super::geometry::HandGeometry;
use crate::math::Transform2D;
use crate::pose::{Finger, Pose};
use crate::scene::{HandScene, NodeTag, Primitive, RoundedRect, SceneNode};

/// Order the fingers are drawn in; the thumb goes last so it overlaps the palm.
pub const DRAW_ORDER: [Finger; 5] = [
    Finger::Index,
    Finger::Middle,
    Finger::Ring,
    Finger::Pinky,
    Finger::Thumb,
];

/// Renders `pose` with the default hand geometry.
pub fn render(pose: &Pose) -> HandScene {
    render_with(pose, &HandGeometry::default())
}

/// Builds the scene graph for `pose`.
///
/// Pure: the result depends only on the arguments. Non-finite pose values are
/// not corrected and flow into the transforms as-is.
pub fn render_with(pose: &Pose, geometry: &HandGeometry) -> HandScene {
    if !pose.is_finite() {
        log::warn!("rendering non-finite pose {:?}", pose);
    }
    log::trace!("render {:?}", pose);

    let mut palm = SceneNode::new(NodeTag::Palm, palm_transform(pose, geometry))
        .with_primitive(Primitive::Palm(rect(geometry.palm_rect())))
        .with_primitive(Primitive::PalmHeel(rect(geometry.heel_rect())));

    for finger in DRAW_ORDER {
        let chain = FingerChain::from_geometry(finger, pose.curl(finger), geometry);
        palm = palm.with_child(chain.to_node());
    }

    let wrist = SceneNode::new(NodeTag::Wrist, wrist_transform(pose, geometry)).with_child(palm);
    HandScene::new(wrist)
}

/// Outermost frame: move to the anchor, turn by yaw, and fake pitch with an X-skew.
pub fn wrist_transform(pose: &Pose, geometry: &HandGeometry) -> Transform2D {
    Transform2D::from_translation_rotation(geometry.anchor(), pose.wrist_yaw)
        .with_skew_x(geometry.pitch_skew() * pose.wrist_pitch)
}

/// Palm frame inside the wrist: roll in-plane, then size up.
pub fn palm_transform(pose: &Pose, geometry: &HandGeometry) -> Transform2D {
    Transform2D::from_rotation(pose.wrist_roll).with_uniform_scale(geometry.scale())
}

fn rect((origin, size, corner_radius): (glam::Vec2, glam::Vec2, f32)) -> RoundedRect {
    RoundedRect::new(origin.x, origin.y, size.x, size.y, corner_radius)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::kinematics::Joint;
    use crate::pose::PoseField;
    use glam::Vec2;

    #[test]
    fn default_pose_has_level_wrist() {
        let scene = render(&Pose::DEFAULT);
        let wrist = scene.wrist_transform();
        assert_eq!(wrist.translation, Vec2::new(220.0, 200.0));
        assert_eq!(wrist.rotation, 0.0);
        assert_eq!(wrist.skew_x, 0.0);

        let palm = scene.palm().unwrap();
        assert_eq!(palm.transform.rotation, 0.0);
        assert_eq!(palm.transform.scale, Vec2::splat(1.1));
    }

    #[test]
    fn wrist_angles_land_in_their_frames() {
        let pose = Pose::DEFAULT
            .with(PoseField::WristYaw, 20.0)
            .with(PoseField::WristPitch, -15.0)
            .with(PoseField::WristRoll, 7.0);
        let scene = render(&pose);
        assert_eq!(scene.wrist_transform().rotation, 20.0);
        assert!((scene.wrist_transform().skew_x + 3.0).abs() < 1e-5);
        assert_eq!(scene.palm().unwrap().transform.rotation, 7.0);
    }

    #[test]
    fn palm_shapes() {
        let scene = render(&Pose::DEFAULT);
        let palm = scene.palm().unwrap();
        assert_eq!(
            palm.primitives,
            vec![
                Primitive::Palm(RoundedRect::new(-70.0, -120.0, 140.0, 120.0, 24.0)),
                Primitive::PalmHeel(RoundedRect::new(-60.0, -10.0, 120.0, 20.0, 10.0)),
            ]
        );
    }

    #[test]
    fn fingers_in_draw_order() {
        let scene = render(&Pose::DEFAULT);
        let order: Vec<_> = scene
            .palm()
            .unwrap()
            .children
            .iter()
            .filter_map(|c| c.tag.finger())
            .collect();
        assert_eq!(order, DRAW_ORDER.to_vec());
    }

    #[test]
    fn curl_drives_joint_rotations() {
        let scene = render(&Pose::DEFAULT.with(PoseField::Index, 100.0));
        let index = scene.joint_angles(Finger::Index).unwrap();
        assert_eq!(index.to_array(), [50.0, 60.0, 45.0]);
        let pip = scene.joint(Finger::Index, Joint::Pip).unwrap();
        assert_eq!(pip.transform.translation, Vec2::new(0.0, -80.0 * 0.65));
    }

    #[test]
    fn extreme_values_still_render() {
        let pose = Pose::DEFAULT
            .with(PoseField::WristYaw, 720.0)
            .with(PoseField::WristPitch, -400.0)
            .with(PoseField::Thumb, -1e6);
        let scene = render(&pose);
        assert_eq!(scene.root().node_count(), 2 + 5 * 4);
        assert_eq!(scene.joint_angles(Finger::Thumb).unwrap().to_array(), [0.0; 3]);
    }

    #[test]
    fn non_finite_values_propagate() {
        let scene = render(&Pose::DEFAULT.with(PoseField::WristRoll, f32::NAN));
        assert!(scene.palm().unwrap().transform.rotation.is_nan());
        assert_eq!(scene.root().node_count(), 22);
    }

    #[test]
    fn custom_geometry_moves_anchor() {
        let geometry = HandGeometry::builder().anchor(Vec2::new(0.0, 0.0)).build();
        let scene = render_with(&Pose::DEFAULT, &geometry);
        assert_eq!(scene.wrist_transform().translation, Vec2::ZERO);
    }
}
