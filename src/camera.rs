//! Camera with a collidable body box.

use relay_geom::{Aabb, Vec3};

const BODY_SIZE: Vec3 = Vec3::new(0.3, 0.95, 0.3);
const EYE_OFFSET: Vec3 = Vec3::new(0.15, 0.85, 0.15);

pub struct Camera {
    /// Collidable body box in world space.
    pub body: Aabb,
    pub vel: Vec3,
    /// Radians; yaw 0 looks along +X.
    pub yaw: f32,
    pub pitch: f32,
}

impl Camera {
    pub fn new(eye: Vec3) -> Self {
        let min = eye - EYE_OFFSET;
        Self {
            body: Aabb::new(min, min + BODY_SIZE),
            vel: Vec3::ZERO,
            yaw: std::f32::consts::FRAC_PI_2,
            pitch: 0.0,
        }
    }

    pub fn eye_position(&self) -> Vec3 {
        self.body.min + EYE_OFFSET
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalized()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::UP).normalized()
    }

    /// Applies look deltas; pitch is clamped just shy of straight up/down so
    /// the forward vector never degenerates.
    pub fn look(&mut self, yaw_delta: f32, pitch_delta: f32) {
        const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
        self.yaw += yaw_delta;
        self.pitch = (self.pitch + pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}
