//! Draw commands for one rendered frame
//!
//! This is the boundary with whatever actually paints pixels: filled circles
//! for each visible entity and a trail segment back to where it was one tick
//! earlier, when that point is visible too.

use crate::simulation::states::Entity;
use crate::visualization::camera::Camera;
use crate::visualization::projection::{project, project_point, Projected, ScreenPoint, Viewport};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: ScreenPoint,
    pub radius: f64,
    pub index: usize, // entity index in the snapshot
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSegment {
    pub from: ScreenPoint, // current position
    pub to: ScreenPoint, // previous position
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub circles: Vec<Circle>,
    pub trails: Vec<TrailSegment>,
    pub culled: usize,
}

impl Frame {
    pub fn build(camera: &Camera, viewport: &Viewport, entities: &[Entity]) -> Self {
        let mut frame = Frame {
            circles: Vec::with_capacity(entities.len()),
            trails: Vec::new(),
            culled: 0,
        };

        for (index, entity) in entities.iter().enumerate() {
            let Some(Projected { point, radius }) = project(camera, viewport, entity) else {
                frame.culled += 1;
                continue;
            };
            frame.circles.push(Circle {
                center: point,
                radius,
                index,
            });

            if entity.previous_position == entity.position {
                continue;
            }
            if let Some(prev) = project_point(camera, viewport, &entity.previous_position) {
                frame.trails.push(TrailSegment { from: point, to: prev });
            }
        }
        frame
    }

    pub fn visible(&self) -> usize {
        self.circles.len()
    }
}
