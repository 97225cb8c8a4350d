//! Quaternion orientation blending
//!
//! An [`OrientationAnimation`] turns discrete rotation requests into a short
//! slerp from the live orientation to the accumulated target. Requests that
//! arrive mid-blend restart the blend from wherever the object currently is,
//! so rapid key presses stack up instead of popping.

use crate::trajectory::Trajectory;
use glam::{Quat, Vec3};

/// Default length of a rotation blend, in the caller's time units
pub const DEFAULT_BLEND_DURATION: f32 = 0.1;

/// Whether an orientation is still moving toward its target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendState {
    /// Blend factor has settled at 1; current equals target
    Idle,
    /// Slerping from the initial to the target rotation
    Blending,
}

/// Animated orientation of a single object
#[derive(Clone, Debug)]
pub struct OrientationAnimation {
    initial: Quat,
    target: Quat,
    current: Quat,
    /// Blend factor, 0 at `initial` and 1 at `target`
    blend: Trajectory,
    blend_duration: f32,
}

impl OrientationAnimation {
    pub fn new(blend_duration: f32) -> Self {
        Self {
            initial: Quat::IDENTITY,
            target: Quat::IDENTITY,
            current: Quat::IDENTITY,
            blend: Trajectory::constant(1.0),
            blend_duration,
        }
    }

    /// Snap back to identity, dropping any in-flight blend
    pub fn reset(&mut self) {
        self.initial = Quat::IDENTITY;
        self.target = Quat::IDENTITY;
        self.current = Quat::IDENTITY;
        self.blend = Trajectory::constant(1.0);
    }

    /// Start blending toward `rotation(angle, axis) * target`
    ///
    /// `angle` is in radians. The blend begins at the last evaluated
    /// orientation and lasts `blend_duration` from `time`.
    pub fn rotate(&mut self, angle: f32, axis: Vec3, time: f32) {
        let Some(axis) = axis.try_normalize() else {
            tracing::warn!(?axis, "ignoring rotation about a degenerate axis");
            return;
        };
        if !angle.is_finite() {
            tracing::warn!(angle, "ignoring rotation by a non-finite angle");
            return;
        }

        self.initial = self.current;
        self.target = (Quat::from_axis_angle(axis, angle) * self.target).normalize();
        self.blend = Trajectory::new(time, time + self.blend_duration, 0.0, 1.0);

        tracing::trace!(angle, ?axis, time, "orientation blend armed");
    }

    /// Sample the blend at `time` and store the result as the current
    /// orientation
    pub fn evaluate(&mut self, time: f32) -> Quat {
        let factor = self.blend.sample(time);
        self.current = self.initial.slerp(self.target, factor).normalize();
        self.current
    }

    pub fn state(&self, time: f32) -> BlendState {
        if self.blend.is_settled(time) {
            BlendState::Idle
        } else {
            BlendState::Blending
        }
    }

    /// Orientation produced by the last [`evaluate`](Self::evaluate)
    pub fn current(&self) -> Quat {
        self.current
    }

    pub fn initial(&self) -> Quat {
        self.initial
    }

    pub fn target(&self) -> Quat {
        self.target
    }

    pub fn blend_duration(&self) -> f32 {
        self.blend_duration
    }
}

impl Default for OrientationAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_BLEND_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-4;

    fn assert_quat_eq(a: Quat, b: Quat) {
        // q and -q are the same rotation
        let dot = a.dot(b).abs();
        assert!((dot - 1.0).abs() < EPS, "expected {b:?}, got {a:?}");
    }

    #[test]
    fn test_starts_idle_at_identity() {
        let mut anim = OrientationAnimation::default();
        assert_eq!(anim.state(0.0), BlendState::Idle);
        assert_quat_eq(anim.evaluate(0.0), Quat::IDENTITY);
    }

    #[test]
    fn test_idle_at_negative_time() {
        let mut anim = OrientationAnimation::default();
        assert_eq!(anim.state(-1.0), BlendState::Idle);

        anim.rotate(FRAC_PI_2, Vec3::Y, 0.0);
        anim.reset();
        assert_eq!(anim.state(-1.0), BlendState::Idle);
    }

    #[test]
    fn test_single_rotation_reaches_target() {
        let mut anim = OrientationAnimation::new(0.1);
        anim.evaluate(1.0);
        anim.rotate(FRAC_PI_2, Vec3::Y, 1.0);

        assert_eq!(anim.state(1.0), BlendState::Blending);
        assert_quat_eq(anim.evaluate(1.0), Quat::IDENTITY);
        assert_quat_eq(anim.evaluate(1.05), Quat::from_rotation_y(FRAC_PI_2 / 2.0));
        assert_quat_eq(anim.evaluate(1.1), Quat::from_rotation_y(FRAC_PI_2));
        assert_eq!(anim.state(1.1), BlendState::Idle);
        assert_quat_eq(anim.evaluate(5.0), Quat::from_rotation_y(FRAC_PI_2));
    }

    #[test]
    fn test_back_to_back_rotations_accumulate() {
        let mut anim = OrientationAnimation::new(0.1);
        anim.rotate(FRAC_PI_2, Vec3::Y, 0.0);
        anim.rotate(FRAC_PI_2, Vec3::Y, 0.0);

        assert_quat_eq(anim.target(), Quat::from_rotation_y(PI));

        for i in 0..=20 {
            let q = anim.evaluate(i as f32 * 0.01);
            assert!((q.length() - 1.0).abs() < EPS, "non-unit quaternion {q:?}");
        }
        assert_quat_eq(anim.current(), Quat::from_rotation_y(PI));
    }

    #[test]
    fn test_mid_blend_rotation_restarts_from_live_value() {
        let mut anim = OrientationAnimation::new(0.1);
        anim.rotate(FRAC_PI_2, Vec3::Y, 0.0);
        let halfway = anim.evaluate(0.05);

        anim.rotate(FRAC_PI_2, Vec3::X, 0.05);
        assert_quat_eq(anim.initial(), halfway);
        assert_quat_eq(
            anim.target(),
            Quat::from_rotation_x(FRAC_PI_2) * Quat::from_rotation_y(FRAC_PI_2),
        );

        // No pop at the restart
        assert_quat_eq(anim.evaluate(0.05), halfway);
        assert_eq!(anim.state(0.1), BlendState::Blending);
        assert_eq!(anim.state(0.2), BlendState::Idle);
    }

    #[test]
    fn test_reset_returns_to_identity() {
        let mut anim = OrientationAnimation::default();
        anim.rotate(PI, Vec3::Z, 0.0);
        anim.evaluate(0.05);

        anim.reset();
        assert_eq!(anim.state(0.05), BlendState::Idle);
        assert_quat_eq(anim.evaluate(0.06), Quat::IDENTITY);
        assert_quat_eq(anim.target(), Quat::IDENTITY);
    }

    #[test]
    fn test_unnormalized_axis_is_accepted() {
        let mut anim = OrientationAnimation::new(0.1);
        anim.rotate(FRAC_PI_2, Vec3::new(0.0, 5.0, 0.0), 0.0);
        assert_quat_eq(anim.evaluate(1.0), Quat::from_rotation_y(FRAC_PI_2));
    }

    #[test]
    fn test_degenerate_axis_is_ignored() {
        let mut anim = OrientationAnimation::new(0.1);
        anim.rotate(FRAC_PI_2, Vec3::ZERO, 0.0);

        assert_eq!(anim.state(0.0), BlendState::Idle);
        assert_quat_eq(anim.target(), Quat::IDENTITY);
    }

    #[test]
    fn test_blend_takes_shortest_arc() {
        let mut anim = OrientationAnimation::new(1.0);
        // Three quarter turns forward end up one quarter turn backward
        anim.rotate(3.0 * FRAC_PI_2, Vec3::Y, 0.0);

        let (_, angle) = anim.evaluate(0.5).to_axis_angle();
        assert!((angle - FRAC_PI_2 / 2.0).abs() < 1e-3, "got {angle}");
    }
}
