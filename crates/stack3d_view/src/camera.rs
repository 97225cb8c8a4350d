//! Orbital camera rig
//!
//! The camera circles a fixed look-at point at a fixed radius. Its orbit
//! angle and field of view are each driven by a [`Trajectory`], so turns and
//! zooms ease in over a short window and can be re-issued mid-flight.

use crate::config::CameraConfig;
use crate::direction::{self, CompassDirection, RotationSteps, ScreenDirection};
use glam::{Mat4, Vec3};
use stack3d_animation::Trajectory;
use std::f32::consts::FRAC_PI_2;

/// Quarter-turn orbit request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// +90 degrees around the up axis
    CounterClockwise,
    /// -90 degrees around the up axis
    Clockwise,
}

impl Turn {
    /// Signed orbit angle in radians
    pub fn angle(self) -> f32 {
        match self {
            Turn::CounterClockwise => FRAC_PI_2,
            Turn::Clockwise => -FRAC_PI_2,
        }
    }

    /// Quarter turns this adds to the directional remap.
    ///
    /// The remap runs opposite to the orbit: -1 is 3 modulo 4.
    pub fn remap_steps(self) -> u8 {
        match self {
            Turn::CounterClockwise => 3,
            Turn::Clockwise => 1,
        }
    }
}

/// Camera state at one instant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov_y: f32,
}

impl CameraPose {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// OpenGL-style perspective projection for this pose's field of view
    pub fn projection(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y.to_radians(), aspect, near, far)
    }
}

/// Animated orbit camera
#[derive(Clone, Debug)]
pub struct CameraRig {
    angle: Trajectory,
    fov: Trajectory,
    /// Angle the orbit is heading toward, in radians
    target_angle: f32,
    /// Field of view the zoom is heading toward, in degrees
    target_fov: f32,
    min_fov: f32,
    max_fov: f32,
    radius: f32,
    height: f32,
    look_at: Vec3,
    up: Vec3,
    steps: RotationSteps,
    turn_duration: f32,
    zoom_duration: f32,
    zoom_in_factor: f32,
    zoom_out_factor: f32,
    height_step: f32,
}

impl CameraRig {
    /// Build the rig and start its intro: the orbit swings from
    /// `initial_angle` to `intro_angle` while the lens zooms in from
    /// `fov * intro_fov_scale` to `fov`.
    pub fn new(config: &CameraConfig) -> Self {
        let intro_end = config.intro_duration;
        let (min_fov, max_fov) = fov_range(config);

        Self {
            angle: Trajectory::new(0.0, intro_end, config.initial_angle, config.intro_angle),
            fov: Trajectory::new(
                0.0,
                intro_end,
                config.fov * config.intro_fov_scale,
                config.fov,
            ),
            target_angle: config.intro_angle,
            target_fov: config.fov,
            min_fov,
            max_fov,
            radius: config.distance,
            height: config.height,
            look_at: config.look_at,
            up: config.up.normalize_or(Vec3::Y),
            steps: RotationSteps::default(),
            turn_duration: config.turn_duration,
            zoom_duration: config.zoom_duration,
            zoom_in_factor: config.zoom_in_factor,
            zoom_out_factor: config.zoom_out_factor,
            height_step: config.height_step,
        }
    }

    /// Move the camera up or down immediately
    pub fn set_height_delta(&mut self, delta: f32) {
        if !delta.is_finite() {
            tracing::warn!(delta, "ignoring non-finite height change");
            return;
        }
        self.height += delta;
    }

    /// Orbit a quarter turn, finishing `turn_duration` after `time`
    pub fn turn(&mut self, direction: Turn, time: f32) {
        self.target_angle += direction.angle();
        self.angle.retarget(time + self.turn_duration, self.target_angle);
        self.steps = self.steps.advance(direction.remap_steps());

        tracing::debug!(
            ?direction,
            target_angle = self.target_angle,
            steps = self.steps.get(),
            "camera turn"
        );
    }

    /// Scale the field of view by `factor`, finishing `zoom_duration` after
    /// `time`
    pub fn zoom(&mut self, factor: f32, time: f32) {
        if !(factor.is_finite() && factor > 0.0) {
            tracing::warn!(factor, "ignoring zoom by a non-positive factor");
            return;
        }

        let requested = self.target_fov * factor;
        let clamped = requested.clamp(self.min_fov, self.max_fov);
        if clamped != requested {
            tracing::debug!(requested, clamped, "zoom clamped to fov range");
        }

        self.target_fov = clamped;
        self.fov.retarget(time + self.zoom_duration, self.target_fov);
    }

    pub fn zoom_in(&mut self, time: f32) {
        self.zoom(self.zoom_in_factor, time);
    }

    pub fn zoom_out(&mut self, time: f32) {
        self.zoom(self.zoom_out_factor, time);
    }

    /// Move up by one configured height step
    pub fn raise(&mut self) {
        self.set_height_delta(self.height_step);
    }

    pub fn lower(&mut self) {
        self.set_height_delta(-self.height_step);
    }

    /// Sample both trajectories and place the camera on its orbit
    pub fn evaluate(&mut self, time: f32) -> CameraPose {
        let angle = self.angle.sample(time);
        let fov_y = self.fov.sample(time);

        let position = Vec3::new(
            self.look_at.x + angle.cos() * self.radius,
            self.height,
            self.look_at.z + angle.sin() * self.radius,
        );

        CameraPose {
            position,
            target: self.look_at,
            up: self.up,
            fov_y,
        }
    }

    /// Board direction a screen-relative move maps to under the current turn
    pub fn remap_directional_action(&self, logical: ScreenDirection) -> CompassDirection {
        direction::remap(self.steps, logical)
    }

    pub fn rotation_steps(&self) -> RotationSteps {
        self.steps
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn target_angle(&self) -> f32 {
        self.target_angle
    }

    pub fn target_fov(&self) -> f32 {
        self.target_fov
    }

    /// True once neither the orbit nor the zoom is still moving at `time`
    pub fn is_settled(&self, time: f32) -> bool {
        self.angle.is_settled(time) && self.fov.is_settled(time)
    }
}

/// Zoom limits from `config`, ordered and with non-finite bounds replaced by
/// the defaults so clamping cannot fail
fn fov_range(config: &CameraConfig) -> (f32, f32) {
    let defaults = CameraConfig::default();
    let min = if config.min_fov.is_finite() {
        config.min_fov
    } else {
        defaults.min_fov
    };
    let max = if config.max_fov.is_finite() {
        config.max_fov
    } else {
        defaults.max_fov
    };

    if min > max {
        tracing::warn!(min, max, "fov range is inverted, swapping bounds");
    }
    (min.min(max), min.max(max))
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}
