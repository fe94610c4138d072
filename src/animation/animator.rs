//! Drives per-object animation state from the scene clock.

use super::profile::MotionProfile;
use super::state::{AnimationState, Pose};

/// Advances [`AnimationState`]s once per frame.
///
/// Oscillations are phased by the scene-wide clock rather than each object's
/// own elapsed time, so two objects bound to the same profile and parameters
/// move in lockstep no matter when they were created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProceduralAnimator {
    enabled: bool,
}

impl ProceduralAnimator {
    /// Create an enabled animator.
    #[must_use]
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Enable or disable procedural motion. Disabled objects rest in their
    /// identity pose but keep counting elapsed time.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether procedural motion is applied.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Advance one object by `dt` seconds with the scene clock at
    /// `total_time`.
    ///
    /// Negative `dt` is treated as zero.
    pub fn advance(
        &self,
        state: &mut AnimationState,
        profile: Option<&MotionProfile>,
        dt: f32,
        total_time: f64,
    ) {
        state.elapsed += dt.max(0.0);

        let pose = match profile {
            Some(profile) if self.enabled => profile.evaluate(total_time),
            _ => Pose::IDENTITY,
        };
        state.set_pose(pose);
    }
}

impl Default for ProceduralAnimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rustc_hash::FxHashMap;

    use super::*;
    use crate::animation::profile::MotionKind;

    fn bob() -> MotionProfile {
        let params: FxHashMap<String, f32> = [
            ("bob_amplitude", 0.1),
            ("bob_frequency", 3.0),
            ("bob_phase", 0.2),
        ]
        .iter()
        .map(|(k, v)| ((*k).to_owned(), *v))
        .collect();
        MotionProfile::bind(MotionKind::Bob, "rose", &params).unwrap()
    }

    #[test]
    fn unprofiled_object_stays_at_rest() {
        let animator = ProceduralAnimator::new();
        let mut state = AnimationState::new();
        let mut total = 0.0;
        for dt in [0.016_f32, 0.0, 0.5, 0.033, 1.25] {
            total += f64::from(dt);
            animator.advance(&mut state, None, dt, total);
        }
        assert_eq!(state.offset, Vec3::ZERO);
        assert_eq!(state.rotation, Vec3::ZERO);
        assert_eq!(state.scale, Vec3::ONE);
        assert!((f64::from(state.elapsed) - total).abs() < 1e-6);
    }

    #[test]
    fn negative_dt_does_not_rewind() {
        let animator = ProceduralAnimator::new();
        let mut state = AnimationState::new();
        animator.advance(&mut state, None, 0.5, 0.5);
        animator.advance(&mut state, None, -0.25, 0.5);
        assert_eq!(state.elapsed, 0.5);
    }

    #[test]
    fn same_profile_objects_stay_phase_aligned() {
        let animator = ProceduralAnimator::new();
        let profile = bob();
        let mut early = AnimationState::new();
        let mut late = AnimationState::new();

        animator.advance(&mut early, Some(&profile), 2.0, 2.0);
        // `late` joined the scene later and has a shorter private history.
        animator.advance(&mut late, Some(&profile), 0.1, 2.0);

        assert_eq!(early.offset, late.offset);
        assert_eq!(early.rotation, late.rotation);
        assert!(early.elapsed > late.elapsed);
    }

    #[test]
    fn disabled_animator_rests_objects() {
        let mut animator = ProceduralAnimator::new();
        let profile = bob();
        let mut state = AnimationState::new();
        animator.advance(&mut state, Some(&profile), 1.0, 1.0);
        assert_ne!(state.offset, Vec3::ZERO);

        animator.set_enabled(false);
        animator.advance(&mut state, Some(&profile), 1.0, 2.0);
        assert_eq!(state.pose(), Pose::IDENTITY);
        assert_eq!(state.elapsed, 2.0);
    }
}
