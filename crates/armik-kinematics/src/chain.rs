use armik_core::{ArmikError, Result, Transform};
use glam::{Quat, Vec3};

use crate::Joint;

/// One angle per joint, in degrees, root first.
pub type AngleVector = Vec<f32>;

/// Open serial chain, root to end effector.
///
/// Joint `i`'s angle turns the offset of joint `i + 1` and everything after
/// it. The root's own offset is never rotated, and the last joint's angle
/// moves nothing.
#[derive(Clone, Debug)]
pub struct Chain {
    origin: Vec3,
    joints: Vec<Joint>,
}

impl Chain {
    pub fn new(joints: Vec<Joint>) -> Result<Self> {
        Self::with_origin(Vec3::ZERO, joints)
    }

    /// `origin` is the world position the root's offset is measured from.
    pub fn with_origin(origin: Vec3, joints: Vec<Joint>) -> Result<Self> {
        if joints.len() < 2 {
            return Err(ArmikError::DegenerateChain {
                joints: joints.len(),
            });
        }
        if !origin.is_finite() {
            return Err(ArmikError::InvalidConfiguration(format!(
                "chain origin {origin} is not finite"
            )));
        }
        if let Some(joint) = joints.iter().position(|j| !j.local_offset().is_finite()) {
            return Err(ArmikError::NonFiniteOffset { joint });
        }
        Ok(Self { origin, joints })
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    /// World position of the root joint. Its own angle does not move it.
    pub fn root_position(&self) -> Vec3 {
        self.origin + self.joints[0].local_offset()
    }

    /// Current live angles, usable as the starting [`AngleVector`].
    pub fn angles(&self) -> AngleVector {
        self.joints.iter().map(Joint::angle).collect()
    }

    pub fn check_angles(&self, angles: &[f32]) -> Result<()> {
        if angles.len() != self.joints.len() {
            return Err(ArmikError::AngleCountMismatch {
                expected: self.joints.len(),
                found: angles.len(),
            });
        }
        Ok(())
    }

    /// End effector position for `angles`. Reads nothing but the fixed
    /// geometry and the given angles.
    ///
    /// # Panics
    ///
    /// If `angles` does not hold one entry per joint. Use [`Chain::check_angles`]
    /// first when the length is not already known to match.
    pub fn end_effector_position(&self, angles: &[f32]) -> Vec3 {
        assert_eq!(angles.len(), self.joints.len(), "one angle per joint");

        let mut position = self.root_position();
        let mut rotation = Quat::IDENTITY;
        for (pair, &angle) in self.joints.windows(2).zip(angles) {
            let (parent, joint) = (&pair[0], &pair[1]);
            rotation *= parent.rotation_for(angle);
            position += rotation * joint.local_offset();
        }
        position
    }

    /// Panics under the same condition as [`Chain::end_effector_position`].
    pub fn distance_to_target(&self, target: Vec3, angles: &[f32]) -> f32 {
        self.end_effector_position(angles).distance(target)
    }

    /// World position of every joint for `angles`. The last entry is the end
    /// effector.
    ///
    /// # Panics
    ///
    /// If `angles` does not hold one entry per joint.
    pub fn joint_positions(&self, angles: &[f32]) -> Vec<Vec3> {
        assert_eq!(angles.len(), self.joints.len(), "one angle per joint");

        let mut positions = Vec::with_capacity(self.joints.len());
        let mut position = self.root_position();
        let mut rotation = Quat::IDENTITY;
        positions.push(position);
        for (pair, &angle) in self.joints.windows(2).zip(angles) {
            rotation *= pair[0].rotation_for(angle);
            position += rotation * pair[1].local_offset();
            positions.push(position);
        }
        positions
    }

    /// World transform of every joint from the live angles.
    pub fn world_transforms(&self) -> Vec<Transform> {
        let mut transforms: Vec<Transform> = Vec::with_capacity(self.joints.len());
        let mut parent = Transform::from_position(self.origin);
        for joint in &self.joints {
            let world = parent.compose(&joint.local_transform());
            transforms.push(world);
            parent = world;
        }
        transforms
    }

    /// Writes a whole angle vector into the live pose.
    pub fn apply_angles(&mut self, angles: &[f32]) -> Result<()> {
        self.check_angles(angles)?;
        self.write_angles(angles);
        Ok(())
    }

    pub(crate) fn write_angles(&mut self, angles: &[f32]) {
        for (joint, &angle) in self.joints.iter_mut().zip(angles) {
            joint.set_angle(angle);
        }
    }

    pub(crate) fn set_joint_angle(&mut self, index: usize, angle: f32) {
        self.joints[index].set_angle(angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use armik_core::JointAxis;
    use proptest::prelude::*;

    fn vertical_arm() -> Chain {
        Chain::new(vec![
            Joint::new(Vec3::new(0.0, 1.0, 0.0), JointAxis::Y).unwrap(),
            Joint::new(Vec3::new(1.0, 0.0, 0.0), JointAxis::Y).unwrap(),
            Joint::new(Vec3::new(1.0, 0.0, 0.0), JointAxis::Y).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_short_chains() {
        let err = Chain::new(vec![Joint::new(Vec3::X, JointAxis::Y).unwrap()]).unwrap_err();
        assert!(matches!(err, ArmikError::DegenerateChain { joints: 1 }));

        let err = Chain::new(Vec::new()).unwrap_err();
        assert!(matches!(err, ArmikError::DegenerateChain { joints: 0 }));
    }

    #[test]
    fn rejects_non_finite_offsets() {
        let err = Chain::new(vec![
            Joint::new(Vec3::ZERO, JointAxis::Y).unwrap(),
            Joint::new(Vec3::new(f32::INFINITY, 0.0, 0.0), JointAxis::Y).unwrap(),
        ])
        .unwrap_err();
        assert!(matches!(err, ArmikError::NonFiniteOffset { joint: 1 }));
    }

    #[test]
    fn zero_angles_sum_offsets() {
        let chain = vertical_arm();
        let end = chain.end_effector_position(&[0.0, 0.0, 0.0]);
        assert!(end.abs_diff_eq(Vec3::new(2.0, 1.0, 0.0), 1e-6));
    }

    #[test]
    fn origin_shifts_everything() {
        let chain = Chain::with_origin(Vec3::new(0.0, 0.0, 5.0), vertical_arm().joints().to_vec()).unwrap();
        assert!(chain.root_position().abs_diff_eq(Vec3::new(0.0, 1.0, 5.0), 1e-6));
        let end = chain.end_effector_position(&[0.0, 0.0, 0.0]);
        assert!(end.abs_diff_eq(Vec3::new(2.0, 1.0, 5.0), 1e-6));
    }

    #[test]
    fn previous_joint_angle_turns_next_offset() {
        let chain = vertical_arm();
        // Root angle swings the whole arm; the last angle moves nothing.
        let end = chain.end_effector_position(&[90.0, 0.0, 0.0]);
        assert!(end.abs_diff_eq(Vec3::new(0.0, 1.0, -2.0), 1e-5));

        let elbow = chain.end_effector_position(&[0.0, 90.0, 0.0]);
        assert!(elbow.abs_diff_eq(Vec3::new(1.0, 1.0, -1.0), 1e-5));

        let tip = chain.end_effector_position(&[0.0, 0.0, 90.0]);
        assert!(tip.abs_diff_eq(Vec3::new(2.0, 1.0, 0.0), 1e-6));
    }

    #[test]
    fn distance_is_euclidean() {
        let chain = vertical_arm();
        let d = chain.distance_to_target(Vec3::new(2.0, 4.0, 4.0), &[0.0, 0.0, 0.0]);
        assert_abs_diff_eq!(d, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn joint_positions_end_at_effector() {
        let chain = vertical_arm();
        let angles = [30.0, -45.0, 10.0];
        let positions = chain.joint_positions(&angles);
        assert_eq!(positions.len(), 3);
        assert!(positions[0].abs_diff_eq(chain.root_position(), 1e-6));
        assert!(positions[2].abs_diff_eq(chain.end_effector_position(&angles), 1e-5));
    }

    #[test]
    fn world_transforms_follow_live_angles() {
        let mut chain = vertical_arm();
        let angles = [20.0, 35.0, -5.0];
        chain.apply_angles(&angles).unwrap();
        assert_eq!(chain.angles(), angles.to_vec());

        let transforms = chain.world_transforms();
        let positions = chain.joint_positions(&angles);
        for (transform, position) in transforms.iter().zip(&positions) {
            assert!(transform.position.abs_diff_eq(*position, 1e-5));
        }
    }

    #[test]
    fn apply_angles_checks_length() {
        let mut chain = vertical_arm();
        let err = chain.apply_angles(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, ArmikError::AngleCountMismatch { expected: 3, found: 2 }));
        assert_eq!(chain.angles(), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "one angle per joint")]
    fn short_angle_vector_panics_in_forward_kinematics() {
        vertical_arm().end_effector_position(&[0.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "one angle per joint")]
    fn long_angle_vector_panics_in_joint_positions() {
        vertical_arm().joint_positions(&[0.0; 4]);
    }

    proptest! {
        #[test]
        fn zero_angles_match_offset_sum(
            offsets in prop::collection::vec((-10.0f32..10.0, -10.0f32..10.0, -10.0f32..10.0), 2..8)
        ) {
            let joints: Vec<Joint> = offsets
                .iter()
                .map(|&(x, y, z)| Joint::new(Vec3::new(x, y, z), JointAxis::Z).unwrap())
                .collect();
            let sum: Vec3 = joints.iter().map(Joint::local_offset).sum();
            let chain = Chain::new(joints).unwrap();
            let end = chain.end_effector_position(&vec![0.0; chain.len()]);
            prop_assert!(end.abs_diff_eq(sum, 1e-4));
        }
    }
}
