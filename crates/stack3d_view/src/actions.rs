//! Animation requests and game actions
//!
//! Input handling produces two kinds of output. [`AnimationRequest`]s change
//! how the scene is shown and are applied by the scene at the start of the
//! next frame. [`Action`]s are for the game logic and wait in an
//! [`ActionQueue`] until it polls them.

use crate::camera::Turn;
use crate::direction::CompassDirection;
use crate::scene::ObjectId;
use glam::Vec3;
use std::collections::VecDeque;

/// A change to the view, applied with the time of the frame that drains it
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationRequest {
    /// Orbit the camera a quarter turn
    Turn(Turn),
    /// Multiply the field of view
    Zoom(f32),
    /// Raise (positive) or lower the camera
    AdjustHeight(f32),
    /// Blend an object's orientation by `angle` radians about `axis`
    Rotate {
        object: ObjectId,
        angle: f32,
        axis: Vec3,
    },
    /// Snap an object back to identity orientation
    ResetRotation(ObjectId),
}

/// Game-level intent, consumed outside the view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move the active piece one cell on the board
    Move(CompassDirection),
    RotateForward,
    RotateBackward,
    RotateLeft,
    RotateRight,
    StartBoost,
    StopBoost,
    Exit,
}

/// FIFO of actions waiting for the game loop
#[derive(Clone, Debug, Default)]
pub struct ActionQueue {
    pending: VecDeque<Action>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        tracing::trace!(?action, "action queued");
        self.pending.push_back(action);
    }

    /// Oldest pending action, if any
    pub fn dequeue(&mut self) -> Option<Action> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
