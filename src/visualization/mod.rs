pub mod camera;
pub mod projection;
pub mod frame;
