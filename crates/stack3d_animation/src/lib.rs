//! Stack3D Animation
//!
//! Time-driven interpolation primitives for the Stack3D renderer.
//!
//! # Features
//!
//! - **Trajectories**: clamped linear transitions over a time window
//! - **Retargeting**: redirect a transition mid-flight without a value jump
//! - **Orientation blends**: slerp between accumulated quaternion targets
//!
//! # Example
//!
//! ```rust
//! use stack3d_animation::Trajectory;
//!
//! let mut fov = Trajectory::new(0.0, 1.0, 100.0, 50.0);
//! assert_eq!(fov.sample(0.5), 75.0);
//!
//! // Zoom out again, starting from where the last frame left off
//! fov.retarget(0.9, 55.0);
//! assert_eq!(fov.sample(0.9), 55.0);
//! ```

pub mod orientation;
pub mod trajectory;

pub use orientation::{BlendState, OrientationAnimation};
pub use trajectory::Trajectory;
