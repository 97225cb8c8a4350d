//! Stack3D View
//!
//! Camera and object animation for the Stack3D renderer:
//!
//! - **Camera rig**: an orbit camera whose angle and zoom ease between targets
//! - **Directional remap**: screen-relative moves that follow camera turns
//! - **Scene objects**: animated orientations and model matrices
//! - **Frame pipeline**: queued requests applied once per frame
//!
//! # Example
//!
//! ```rust
//! use stack3d_view::{AnimationRequest, Scene, Turn, ViewConfig};
//!
//! let mut scene = Scene::new(ViewConfig::default());
//! let piece = scene.create_object();
//! scene.object_mut(piece).unwrap().set_visible(true);
//!
//! scene.submit(AnimationRequest::Turn(Turn::Clockwise));
//! let frame = scene.frame(0.016, 16.0 / 9.0);
//!
//! assert_eq!(frame.objects.len(), 1);
//! assert_eq!(scene.camera().rotation_steps().get(), 1);
//! ```

pub mod actions;
pub mod camera;
pub mod config;
pub mod direction;
pub mod error;
pub mod object;
pub mod scene;

pub use actions::{Action, ActionQueue, AnimationRequest};
pub use camera::{CameraPose, CameraRig, Turn};
pub use config::{CameraConfig, ObjectConfig, ViewConfig};
pub use direction::{CompassDirection, RotationSteps, ScreenDirection};
pub use error::{Result, ViewError};
pub use object::SceneObject;
pub use scene::{FrameTransforms, ObjectId, ObjectTransform, Scene};
