use glam::Vec3;

use crate::Chain;

/// Temporarily offsets one entry of an angle vector.
///
/// The original value is written back on drop, so the vector is restored
/// bit for bit however the probe's scope is left.
pub struct AngleProbe<'a> {
    angles: &'a mut [f32],
    index: usize,
    original: f32,
}

impl<'a> AngleProbe<'a> {
    /// # Panics
    ///
    /// If `index` is out of bounds for `angles`.
    pub fn new(angles: &'a mut [f32], index: usize, delta: f32) -> Self {
        let original = angles[index];
        angles[index] = original + delta;
        Self {
            angles,
            index,
            original,
        }
    }

    pub fn angles(&self) -> &[f32] {
        &self.angles[..]
    }
}

impl Drop for AngleProbe<'_> {
    fn drop(&mut self) {
        self.angles[self.index] = self.original;
    }
}

/// Forward-difference estimate of d(distance)/d(angle[index]), in length
/// units per degree.
///
/// `angles` is perturbed while the probe runs and left untouched afterwards.
pub fn partial_gradient(
    chain: &Chain,
    target: Vec3,
    angles: &mut [f32],
    index: usize,
    sampling_step: f32,
) -> f32 {
    let f_x = chain.distance_to_target(target, angles);
    let f_x_plus_h = {
        let probe = AngleProbe::new(angles, index, sampling_step);
        chain.distance_to_target(target, probe.angles())
    };
    (f_x_plus_h - f_x) / sampling_step
}
