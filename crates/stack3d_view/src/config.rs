//! View configuration (view.toml)
//!
//! Every field has a default, so an empty document is a complete config.

use crate::error::{Result, ViewError};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level view configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ViewConfig {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub objects: ObjectConfig,
}

/// Orbital camera parameters
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Radius of the orbit around `look_at`
    pub distance: f32,
    /// Absolute camera height
    pub height: f32,
    /// Height change per raise/lower request
    pub height_step: f32,
    pub look_at: Vec3,
    pub up: Vec3,
    /// Orbit angle at time zero, in radians
    pub initial_angle: f32,
    /// Orbit angle the intro settles at, in radians
    pub intro_angle: f32,
    pub intro_duration: f32,
    /// Resting vertical field of view, in degrees
    pub fov: f32,
    /// The intro starts at `fov * intro_fov_scale` and zooms in to `fov`
    pub intro_fov_scale: f32,
    pub min_fov: f32,
    pub max_fov: f32,
    pub turn_duration: f32,
    pub zoom_duration: f32,
    pub zoom_in_factor: f32,
    pub zoom_out_factor: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 20.0,
            height: 35.0,
            height_step: 5.0,
            look_at: Vec3::new(0.0, 15.0, 0.0),
            up: Vec3::Y,
            initial_angle: 0.0,
            intro_angle: std::f32::consts::FRAC_PI_8,
            intro_duration: 1.0,
            fov: 50.0,
            intro_fov_scale: 2.0,
            min_fov: 5.0,
            max_fov: 150.0,
            turn_duration: 0.5,
            zoom_duration: 0.4,
            zoom_in_factor: 0.9,
            zoom_out_factor: 1.1,
            near: 0.1,
            far: 10000.0,
        }
    }
}

/// Per-object animation and layout parameters
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObjectConfig {
    /// Length of a rotation blend
    pub rotation_duration: f32,
    /// Edge length of a piece's block grid, in cells
    pub block_size: u32,
    /// Subtracted from every object position to centre the board on the origin
    pub board_offset: Vec3,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            rotation_duration: 0.1,
            block_size: 4,
            board_offset: Vec3::new(5.0, 0.0, 5.0),
        }
    }
}

impl ObjectConfig {
    /// Offset from a piece's origin cell to the centre of its block grid
    pub fn pivot(&self) -> Vec3 {
        Vec3::splat(-(self.block_size as f32) / 2.0 + 0.5)
    }
}

impl ViewConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ViewConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ViewError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded view config");
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values that would produce a degenerate camera or projection
    pub fn validate(&self) -> Result<()> {
        let camera = &self.camera;

        positive("camera.distance", camera.distance)?;
        positive("camera.intro_fov_scale", camera.intro_fov_scale)?;
        positive("camera.zoom_in_factor", camera.zoom_in_factor)?;
        positive("camera.zoom_out_factor", camera.zoom_out_factor)?;
        positive("camera.near", camera.near)?;
        non_negative("camera.intro_duration", camera.intro_duration)?;
        non_negative("camera.turn_duration", camera.turn_duration)?;
        non_negative("camera.zoom_duration", camera.zoom_duration)?;
        finite("camera.height", camera.height)?;
        finite("camera.height_step", camera.height_step)?;
        finite("camera.initial_angle", camera.initial_angle)?;
        finite("camera.intro_angle", camera.intro_angle)?;

        if !camera.look_at.is_finite() {
            return Err(invalid("camera.look_at", "must be finite"));
        }
        if camera.up.try_normalize().is_none() {
            return Err(invalid("camera.up", "must be a non-zero vector"));
        }
        if camera.far <= camera.near {
            return Err(invalid(
                "camera.far",
                format!("must be greater than near ({})", camera.near),
            ));
        }
        if !(camera.min_fov > 0.0 && camera.min_fov < camera.max_fov && camera.max_fov < 180.0) {
            return Err(invalid(
                "camera.min_fov",
                format!(
                    "fov range [{}, {}] must lie inside (0, 180)",
                    camera.min_fov, camera.max_fov
                ),
            ));
        }
        if !(camera.min_fov..=camera.max_fov).contains(&camera.fov) {
            return Err(invalid(
                "camera.fov",
                format!(
                    "{} is outside [{}, {}]",
                    camera.fov, camera.min_fov, camera.max_fov
                ),
            ));
        }

        non_negative("objects.rotation_duration", self.objects.rotation_duration)?;
        if self.objects.block_size == 0 {
            return Err(invalid("objects.block_size", "must be at least 1"));
        }
        if !self.objects.board_offset.is_finite() {
            return Err(invalid("objects.board_offset", "must be finite"));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ViewError {
    ViewError::InvalidConfig {
        field,
        reason: reason.into(),
    }
}

fn finite(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} is not finite")))
    }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} must be positive")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<()> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} must not be negative")))
    }
}
