use armik_core::{JointAxis, Result, Transform};
use glam::{Quat, Vec3};

/// One revolute link of a chain.
///
/// Offset and axis are fixed at construction. Only the angle changes, and
/// only through the owning [`Chain`](crate::Chain).
#[derive(Clone, Debug, PartialEq)]
pub struct Joint {
    local_offset: Vec3,
    axis: JointAxis,
    unit_axis: Vec3,
    angle: f32,
}

impl Joint {
    pub fn new(local_offset: Vec3, axis: JointAxis) -> Result<Self> {
        let unit_axis = axis.unit_vector()?;
        Ok(Self {
            local_offset,
            axis,
            unit_axis,
            angle: 0.0,
        })
    }

    /// Builds a joint from its rest pose in the parent frame. The offset is
    /// the transform's position, the starting angle is the rotation read
    /// about `axis`.
    pub fn from_local_transform(local: Transform, axis: JointAxis) -> Result<Self> {
        let angle = axis.angle_of(local.rotation)?;
        Ok(Self::new(local.position, axis)?.with_angle(angle))
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    pub fn local_offset(&self) -> Vec3 {
        self.local_offset
    }

    pub fn axis(&self) -> JointAxis {
        self.axis
    }

    pub fn unit_axis(&self) -> Vec3 {
        self.unit_axis
    }

    /// Current angle in degrees about the joint axis.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub(crate) fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    pub fn rotation_for(&self, angle: f32) -> Quat {
        Quat::from_axis_angle(self.unit_axis, angle.to_radians())
    }

    pub fn local_rotation(&self) -> Quat {
        self.rotation_for(self.angle)
    }

    pub fn local_transform(&self) -> Transform {
        Transform::new(self.local_offset, self.local_rotation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use armik_core::ArmikError;

    #[test]
    fn arbitrary_axis_is_stored_normalized() {
        let joint = Joint::new(Vec3::X, JointAxis::Arbitrary(Vec3::new(0.0, 0.0, 2.0))).unwrap();
        assert!(joint.unit_axis().abs_diff_eq(Vec3::Z, 1e-6));
        assert_eq!(joint.axis(), JointAxis::Arbitrary(Vec3::new(0.0, 0.0, 2.0)));
    }

    #[test]
    fn degenerate_axis_fails_fast() {
        let err = Joint::new(Vec3::X, JointAxis::Arbitrary(Vec3::ZERO)).unwrap_err();
        assert!(matches!(err, ArmikError::DegenerateAxis { .. }));
    }

    #[test]
    fn seeds_angle_from_local_rotation() {
        let local = Transform::new(Vec3::new(0.0, 0.5, 0.0), Quat::from_rotation_z(40f32.to_radians()));
        let joint = Joint::from_local_transform(local, JointAxis::Z).unwrap();
        assert_abs_diff_eq!(joint.angle(), 40.0, epsilon = 1e-4);
        assert_eq!(joint.local_offset(), Vec3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn local_rotation_uses_only_its_axis() {
        let joint = Joint::new(Vec3::Y, JointAxis::X).unwrap().with_angle(90.0);
        let turned = joint.local_rotation() * Vec3::Y;
        assert!(turned.abs_diff_eq(Vec3::Z, 1e-5));
        assert_eq!(joint.local_transform().position, Vec3::Y);
    }
}
