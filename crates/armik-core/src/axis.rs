use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::{ArmikError, Result};

/// The single local axis a revolute joint turns about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointAxis {
    X,
    #[default]
    Y,
    Z,
    Arbitrary(Vec3),
}

impl JointAxis {
    /// Unit direction of the axis.
    ///
    /// Fails for zero-length or non-finite `Arbitrary` vectors so that NaN
    /// never reaches a pose.
    pub fn unit_vector(&self) -> Result<Vec3> {
        match *self {
            JointAxis::X => Ok(Vec3::X),
            JointAxis::Y => Ok(Vec3::Y),
            JointAxis::Z => Ok(Vec3::Z),
            JointAxis::Arbitrary(v) => v.try_normalize().ok_or(ArmikError::DegenerateAxis {
                x: v.x,
                y: v.y,
                z: v.z,
            }),
        }
    }

    /// Angle in degrees that `rotation` turns about this axis, in (-180, 180].
    ///
    /// Principal axes read the matching component of a YXZ Euler
    /// decomposition. Arbitrary axes use the twist part of a swing-twist
    /// split.
    pub fn angle_of(&self, rotation: Quat) -> Result<f32> {
        let (yaw, pitch, roll) = rotation.to_euler(EulerRot::YXZ);
        let radians = match *self {
            JointAxis::X => pitch,
            JointAxis::Y => yaw,
            JointAxis::Z => roll,
            JointAxis::Arbitrary(_) => {
                let axis = self.unit_vector()?;
                let projection = rotation.xyz().dot(axis);
                2.0 * projection.atan2(rotation.w)
            }
        };
        Ok(wrap_degrees(radians.to_degrees()))
    }
}

fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}
