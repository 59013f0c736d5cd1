//! Viewer position and orientation
//!
//! The camera never touches entities; it only answers transform and distance
//! queries about them. Camera space is reached by translating to the camera's
//! position and then rotating about x, then y, then z. Rotations do not
//! commute, so that order is part of the contract.
//!
//! Axes follow the display: x to the right, y down the screen, z into it.

use std::f64::consts::TAU;

use crate::configuration::config::CameraConfig;
use crate::error::{Result, SimulationError};
use crate::math::{Mat3, Vec3};
use crate::simulation::states::Spatial;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub angles: Vec3, // rotation about x, y, z in radians, kept in [0, 2pi)
    pub velocity: Vec3, // applied once per rendered frame
    pub angular_velocity: Vec3, // applied once per rendered frame
}

impl Camera {
    /// Camera at `position` with no rotation and no motion
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            angles: Vec3::zeros(),
            velocity: Vec3::zeros(),
            angular_velocity: Vec3::zeros(),
        }
    }

    /// Like [`Camera::new`] but rejects non-finite input
    pub fn try_new(position: Vec3, angles: Vec3) -> Result<Self> {
        Self::new(position).with_angles(angles).validated()
    }

    pub fn from_config(cfg: &CameraConfig) -> Result<Self> {
        Self::new(cfg.position)
            .with_angles(cfg.angles)
            .with_velocity(cfg.velocity)
            .with_angular_velocity(cfg.angular_velocity)
            .validated()
    }

    pub fn with_angles(mut self, angles: Vec3) -> Self {
        self.angles = wrap_angles(angles);
        self
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_angular_velocity(mut self, angular_velocity: Vec3) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    fn validated(self) -> Result<Self> {
        let finite = self.position.is_finite()
            && self.angles.is_finite()
            && self.velocity.is_finite()
            && self.angular_velocity.is_finite();
        if finite {
            Ok(self)
        } else {
            Err(SimulationError::NonFiniteCamera)
        }
    }

    /// Position of `body` relative to the camera, before any rotation
    pub fn translate<S: Spatial + ?Sized>(&self, body: &S) -> Vec3 {
        body.position() - self.position
    }

    pub fn perform_x_rotation(&self, v: Vec3) -> Vec3 {
        Mat3::rotation_x(self.angles.x) * v
    }

    pub fn perform_y_rotation(&self, v: Vec3) -> Vec3 {
        Mat3::rotation_y(self.angles.y) * v
    }

    pub fn perform_z_rotation(&self, v: Vec3) -> Vec3 {
        Mat3::rotation_z(self.angles.z) * v
    }

    /// The composed rotation, equal to applying x, then y, then z
    pub fn rotation(&self) -> Mat3 {
        Mat3::rotation_z(self.angles.z) * Mat3::rotation_y(self.angles.y) * Mat3::rotation_x(self.angles.x)
    }

    /// Translate then rotate x -> y -> z; the z component is camera-space depth
    pub fn to_camera_space<S: Spatial + ?Sized>(&self, body: &S) -> Vec3 {
        let v = self.translate(body);
        let v = self.perform_x_rotation(v);
        let v = self.perform_y_rotation(v);
        self.perform_z_rotation(v)
    }

    /// True Euclidean distance to `body`, independent of orientation
    pub fn get_distance<S: Spatial + ?Sized>(&self, body: &S) -> f64 {
        self.position.distance(&body.position())
    }

    /// Autonomous motion for one rendered frame
    pub fn move_step(&mut self) {
        self.position += self.velocity;
        self.angles = wrap_angles(self.angles + self.angular_velocity);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::zeros())
    }
}

fn wrap_angles(a: Vec3) -> Vec3 {
    Vec3::new(a.x.rem_euclid(TAU), a.y.rem_euclid(TAU), a.z.rem_euclid(TAU))
}
