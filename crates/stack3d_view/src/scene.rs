//! Per-frame transform pipeline
//!
//! The [`Scene`] owns the camera rig and every scene object. Input handling
//! submits [`AnimationRequest`]s and pushes [`Action`]s; the render loop calls
//! [`Scene::frame`] once per frame, which applies the pending requests with
//! that frame's time and returns the matrices the renderer uploads.

use crate::actions::{Action, ActionQueue, AnimationRequest};
use crate::camera::{CameraPose, CameraRig};
use crate::config::ViewConfig;
use crate::direction::ScreenDirection;
use crate::object::SceneObject;
use glam::Mat4;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle to an object owned by a [`Scene`]
    pub struct ObjectId;
}

/// Model matrix for one visible object
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectTransform {
    pub id: ObjectId,
    pub model: Mat4,
}

/// Everything the renderer needs for one frame
#[derive(Clone, Debug)]
pub struct FrameTransforms {
    pub time: f32,
    pub camera: CameraPose,
    pub view: Mat4,
    pub projection: Mat4,
    /// `projection * view`
    pub view_projection: Mat4,
    /// Visible objects only, in scene iteration order
    pub objects: Vec<ObjectTransform>,
}

impl FrameTransforms {
    pub fn model(&self, id: ObjectId) -> Option<Mat4> {
        self.objects.iter().find(|t| t.id == id).map(|t| t.model)
    }
}

pub struct Scene {
    config: ViewConfig,
    camera: CameraRig,
    objects: SlotMap<ObjectId, SceneObject>,
    /// Requests waiting for the next frame, in submission order
    requests: SmallVec<[AnimationRequest; 4]>,
    actions: ActionQueue,
}

impl Scene {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            camera: CameraRig::new(&config.camera),
            config,
            objects: SlotMap::with_key(),
            requests: SmallVec::new(),
            actions: ActionQueue::new(),
        }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraRig {
        &mut self.camera
    }

    /// Add a hidden object at the origin
    pub fn create_object(&mut self) -> ObjectId {
        let object = SceneObject::new(self.config.objects.rotation_duration);
        self.objects.insert(object)
    }

    pub fn remove_object(&mut self, id: ObjectId) -> Option<SceneObject> {
        self.objects.remove(id)
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Queue a view change for the next frame
    pub fn submit(&mut self, request: AnimationRequest) {
        self.requests.push(request);
    }

    pub fn pending_requests(&self) -> usize {
        self.requests.len()
    }

    pub fn push_action(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Queue a move in the board direction `logical` currently points to
    pub fn push_directional(&mut self, logical: ScreenDirection) {
        let direction = self.camera.remap_directional_action(logical);
        self.actions.push(Action::Move(direction));
    }

    pub fn dequeue_action(&mut self) -> Option<Action> {
        self.actions.dequeue()
    }

    /// Apply pending requests, then evaluate the camera and every visible
    /// object at `time`
    pub fn frame(&mut self, time: f32, aspect: f32) -> FrameTransforms {
        for request in std::mem::take(&mut self.requests) {
            self.apply(request, time);
        }

        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            tracing::warn!(aspect, "invalid aspect ratio, using 1.0");
            1.0
        };

        let camera = self.camera.evaluate(time);
        let view = camera.view_matrix();
        let projection = camera.projection(
            aspect,
            self.config.camera.near,
            self.config.camera.far,
        );

        let layout = &self.config.objects;
        let objects = self
            .objects
            .iter_mut()
            .filter(|(_, object)| object.is_visible())
            .map(|(id, object)| ObjectTransform {
                id,
                model: object.model_matrix(time, layout),
            })
            .collect();

        FrameTransforms {
            time,
            camera,
            view,
            projection,
            view_projection: projection * view,
            objects,
        }
    }

    fn apply(&mut self, request: AnimationRequest, time: f32) {
        match request {
            AnimationRequest::Turn(turn) => self.camera.turn(turn, time),
            AnimationRequest::Zoom(factor) => self.camera.zoom(factor, time),
            AnimationRequest::AdjustHeight(delta) => self.camera.set_height_delta(delta),
            AnimationRequest::Rotate {
                object,
                angle,
                axis,
            } => match self.objects.get_mut(object) {
                Some(target) => target.rotate(angle, axis, time),
                None => tracing::warn!(?object, "dropping rotation for removed object"),
            },
            AnimationRequest::ResetRotation(object) => match self.objects.get_mut(object) {
                Some(target) => target.reset_rotation(),
                None => tracing::warn!(?object, "dropping reset for removed object"),
            },
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}
