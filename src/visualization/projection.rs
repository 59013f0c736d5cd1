//! Perspective projection onto the canvas
//!
//! A camera-space point `(xP, yP, zP)` lands on the projection plane at
//! `(xP, yP) * eye_distance / zP`, shifted so the camera axis hits the canvas
//! centre. Anything with `zP <= 0` is behind or level with the viewer and is
//! culled, which also keeps the division well defined.
//!
//! Apparent radius falls off with the true distance to the camera, not with
//! `zP`, so an entity near the edge of view does not swell as it turns away.

use crate::configuration::config::CameraConfig;
use crate::error::{Result, SimulationError};
use crate::math::Vec3;
use crate::simulation::states::Spatial;
use crate::visualization::camera::Camera;

/// Smallest radius a visible entity is drawn with
pub const MIN_SCREEN_RADIUS: f64 = 1.0;

/// Canvas size and the distance from the viewer to the projection plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub eye_distance: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, eye_distance: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !(valid(width) && valid(height) && valid(eye_distance)) {
            return Err(SimulationError::invalid_config(format!(
                "viewport must be positive, got {width}x{height} at eye distance {eye_distance}"
            )));
        }
        Ok(Self {
            width,
            height,
            eye_distance,
        })
    }

    pub fn from_config(cfg: &CameraConfig) -> Result<Self> {
        Self::new(cfg.canvas_width, cfg.canvas_height, cfg.eye_distance)
    }

    pub fn center(&self) -> ScreenPoint {
        ScreenPoint {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            eye_distance: 5000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// A visible body on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub point: ScreenPoint,
    pub radius: f64,
}

/// Project an already rotated camera-space vector; `None` if `zP <= 0`
pub fn project_camera_space(viewport: &Viewport, v: Vec3) -> Option<ScreenPoint> {
    if v.z <= 0.0 {
        return None;
    }
    let ratio = viewport.eye_distance / v.z;
    let center = viewport.center();
    Some(ScreenPoint {
        x: v.x * ratio + center.x,
        y: v.y * ratio + center.y,
    })
}

/// Project any spatial point through the camera
pub fn project_point<S: Spatial + ?Sized>(camera: &Camera, viewport: &Viewport, body: &S) -> Option<ScreenPoint> {
    project_camera_space(viewport, camera.to_camera_space(body))
}

/// Screen radius for `body`, scaled by eye distance over true distance
pub fn apparent_radius<S: Spatial + ?Sized>(camera: &Camera, viewport: &Viewport, body: &S) -> f64 {
    let distance = camera.get_distance(body);
    if distance <= 0.0 {
        return MIN_SCREEN_RADIUS;
    }
    (body.radius() * viewport.eye_distance / distance).max(MIN_SCREEN_RADIUS)
}

/// Point and radius for `body`, or `None` when it is culled
pub fn project<S: Spatial + ?Sized>(camera: &Camera, viewport: &Viewport, body: &S) -> Option<Projected> {
    let point = project_point(camera, viewport, body)?;
    Some(Projected {
        point,
        radius: apparent_radius(camera, viewport, body),
    })
}
