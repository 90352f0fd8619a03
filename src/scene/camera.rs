//! A first-person fly camera driven by keyboard, mouse and wheel deltas.

use crate::input::{InputState, Key};
use crate::math;
use crate::math::prelude::*;

/// Default yaw in degrees. `-90` looks down the negative z axis.
pub const YAW: f32 = -90.0;
/// Default pitch in degrees.
pub const PITCH: f32 = 0.0;
/// Default movement speed in units per second.
pub const SPEED: f32 = 2.5;
/// Default mouse sensitivity, in degrees per pixel.
pub const SENSITIVITY: f32 = 0.1;
/// Default, and maximum, zoom in degrees.
pub const ZOOM: f32 = 45.0;

const MIN_ZOOM: f32 = 1.0;
const MAX_ZOOM: f32 = 45.0;
const MAX_PITCH: f32 = 89.0;

/// Possible directions of keyboard movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
}

/// Everything a camera is built from.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraParams {
    pub position: Point3<f32>,
    pub world_up: Vector3<f32>,
    /// Degrees.
    pub yaw: f32,
    /// Degrees.
    pub pitch: f32,
    pub movement_speed: f32,
    /// Vertical field of view in degrees.
    pub zoom: f32,
    pub mouse_sensitivity: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        CameraParams {
            position: Point3::new(0.0, 0.0, 0.0),
            world_up: Vector3::unit_y(),
            yaw: YAW,
            pitch: PITCH,
            movement_speed: SPEED,
            zoom: ZOOM,
            mouse_sensitivity: SENSITIVITY,
        }
    }
}

/// Euler-angle camera. The `front`, `right` and `up` vectors are derived
/// from yaw and pitch and kept orthonormal after every orientation change.
#[derive(Debug, Copy, Clone)]
pub struct Camera {
    position: Point3<f32>,
    front: Vector3<f32>,
    up: Vector3<f32>,
    right: Vector3<f32>,
    world_up: Vector3<f32>,
    yaw: f32,
    pitch: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Camera::with_params(CameraParams::default())
    }
}

impl Camera {
    /// Creates a camera with the default speed, sensitivity and zoom.
    pub fn new(position: Point3<f32>, world_up: Vector3<f32>, yaw: f32, pitch: f32) -> Self {
        Camera::with_params(CameraParams {
            position,
            world_up,
            yaw,
            pitch,
            ..Default::default()
        })
    }

    /// Creates a camera from explicit parameters. `zoom` is clamped into
    /// `[1, 45]`; `pitch` is taken as is.
    pub fn with_params(params: CameraParams) -> Self {
        let mut camera = Camera {
            position: params.position,
            front: Vector3::new(0.0, 0.0, -1.0),
            up: params.world_up,
            right: Vector3::unit_x(),
            world_up: params.world_up,
            yaw: params.yaw,
            pitch: params.pitch,
            movement_speed: params.movement_speed,
            mouse_sensitivity: params.mouse_sensitivity,
            zoom: params.zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        };

        camera.update_camera_vectors();
        camera
    }

    #[inline]
    pub fn position(&self) -> Point3<f32> {
        self.position
    }

    #[inline]
    pub fn set_position(&mut self, position: Point3<f32>) {
        self.position = position;
    }

    #[inline]
    pub fn front(&self) -> Vector3<f32> {
        self.front
    }

    #[inline]
    pub fn up(&self) -> Vector3<f32> {
        self.up
    }

    #[inline]
    pub fn right(&self) -> Vector3<f32> {
        self.right
    }

    #[inline]
    pub fn world_up(&self) -> Vector3<f32> {
        self.world_up
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Sets the orientation directly. No clamping happens here.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch;
        self.update_camera_vectors();
    }

    /// The vertical field of view in degrees.
    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[inline]
    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    #[inline]
    pub fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed = speed;
    }

    #[inline]
    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    #[inline]
    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity;
    }

    /// Returns the view matrix calculated using euler angles and the look-at
    /// matrix.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        math::look_at(self.position, self.position + self.front, self.up)
    }

    /// Returns a perspective projection with the current zoom as vertical
    /// field of view.
    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Matrix4<f32> {
        math::perspective_deg(self.zoom, aspect, near, far)
    }

    /// Moves along `front` or `right` by `movement_speed * dt`.
    pub fn process_keyboard(&mut self, direction: Movement, dt: f32) {
        let velocity = self.movement_speed * dt;
        match direction {
            Movement::Forward => self.position += self.front * velocity,
            Movement::Backward => self.position -= self.front * velocity,
            Movement::Left => self.position -= self.right * velocity,
            Movement::Right => self.position += self.right * velocity,
        }
    }

    /// Turns by a cursor offset in pixels, y pointing up.
    pub fn process_mouse_movement(&mut self, xoffset: f32, yoffset: f32, constrain_pitch: bool) {
        self.yaw += xoffset * self.mouse_sensitivity;
        self.pitch += yoffset * self.mouse_sensitivity;

        // Past 89 degrees the front vector flips over the world up.
        if constrain_pitch {
            self.pitch = self.pitch.clamp(-MAX_PITCH, MAX_PITCH);
        }

        self.update_camera_vectors();
    }

    /// Zooms in by `yoffset` degrees, keeping the field of view in `[1, 45]`.
    pub fn process_mouse_scroll(&mut self, yoffset: f32) {
        self.zoom = (self.zoom - yoffset).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Applies one frame of input: `WASD` moves, the cursor turns with a
    /// constrained pitch and the wheel zooms.
    pub fn process_input(&mut self, input: &InputState, dt: f32) {
        let bindings = [
            (Key::W, Movement::Forward),
            (Key::S, Movement::Backward),
            (Key::A, Movement::Left),
            (Key::D, Movement::Right),
        ];

        for &(key, movement) in &bindings {
            if input.is_key_down(key) {
                self.process_keyboard(movement, dt);
            }
        }

        let delta = input.mouse_delta();
        if delta.x != 0.0 || delta.y != 0.0 {
            self.process_mouse_movement(delta.x, delta.y, true);
        }

        let scroll = input.scroll_delta();
        if scroll.y != 0.0 {
            self.process_mouse_scroll(scroll.y);
        }
    }

    fn update_camera_vectors(&mut self) {
        let (yaw, pitch) = (Deg(self.yaw), Deg(self.pitch));
        let front = Vector3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );

        self.front = front.normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_looks_down_negative_z() {
        let camera = Camera::default();
        assert_relative_eq!(camera.front(), Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-6);
        assert_relative_eq!(camera.right(), Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(camera.up(), Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
        assert_eq!(camera.zoom(), ZOOM);
    }

    #[test]
    fn params_clamp_zoom() {
        let camera = Camera::with_params(CameraParams {
            zoom: 90.0,
            ..Default::default()
        });

        assert_eq!(camera.zoom(), 45.0);
    }
}
