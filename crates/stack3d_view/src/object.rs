//! Renderable scene objects
//!
//! A scene object is a board or a falling piece: a position on the board, a
//! visibility flag and an animated orientation. Geometry lives with the
//! renderer; this side only produces the model matrix.

use crate::config::ObjectConfig;
use glam::{Mat4, Quat, Vec3};
use stack3d_animation::{BlendState, OrientationAnimation};

#[derive(Clone, Debug)]
pub struct SceneObject {
    position: Vec3,
    visible: bool,
    orientation: OrientationAnimation,
}

impl SceneObject {
    /// New objects start hidden at the origin with identity orientation
    pub fn new(rotation_duration: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            visible: false,
            orientation: OrientationAnimation::new(rotation_duration),
        }
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn reset_rotation(&mut self) {
        self.orientation.reset();
    }

    /// Queue a blended rotation of `angle` radians about `axis`
    pub fn rotate(&mut self, angle: f32, axis: Vec3, time: f32) {
        self.orientation.rotate(angle, axis, time);
    }

    /// Sample the orientation at `time`
    pub fn orientation(&mut self, time: f32) -> Quat {
        self.orientation.evaluate(time)
    }

    pub fn blend_state(&self, time: f32) -> BlendState {
        self.orientation.state(time)
    }

    /// Model matrix at `time`
    ///
    /// The orientation is applied about the centre of the piece's block grid,
    /// then the piece is moved to its board cell.
    pub fn model_matrix(&mut self, time: f32, layout: &ObjectConfig) -> Mat4 {
        let pivot = layout.pivot();
        let rotation = self.orientation(time);

        Mat4::from_translation(-pivot)
            * Mat4::from_translation(self.position - layout.board_offset)
            * Mat4::from_quat(rotation)
            * Mat4::from_translation(pivot)
    }
}

impl Default for SceneObject {
    fn default() -> Self {
        Self::new(ObjectConfig::default().rotation_duration)
    }
}
