use crate::math::prelude::Vector2;
use crate::utils::FastHashSet;

/// Describes a button of a mouse controller.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Cursor and wheel state. Movement is accumulated across every cursor
/// sample of a frame and reset by `advance`.
pub struct Mouse {
    downs: FastHashSet<MouseButton>,
    presses: FastHashSet<MouseButton>,
    releases: FastHashSet<MouseButton>,
    last_position: Option<Vector2<f32>>,
    movement: Vector2<f32>,
    scroll: Vector2<f32>,
}

impl Default for Mouse {
    fn default() -> Self {
        Mouse::new()
    }
}

impl Mouse {
    pub fn new() -> Self {
        Mouse {
            downs: FastHashSet::default(),
            presses: FastHashSet::default(),
            releases: FastHashSet::default(),
            last_position: None,
            movement: Vector2::new(0.0, 0.0),
            scroll: Vector2::new(0.0, 0.0),
        }
    }

    /// Forgets everything, including the last cursor position. The next
    /// cursor sample is treated like the very first one.
    #[inline]
    pub fn reset(&mut self) {
        self.downs.clear();
        self.presses.clear();
        self.releases.clear();
        self.last_position = None;
        self.movement = Vector2::new(0.0, 0.0);
        self.scroll = Vector2::new(0.0, 0.0);
    }

    #[inline]
    pub fn advance(&mut self) {
        self.presses.clear();
        self.releases.clear();
        self.movement = Vector2::new(0.0, 0.0);
        self.scroll = Vector2::new(0.0, 0.0);
    }

    /// Feeds a cursor position in window pixels, origin at the top-left.
    ///
    /// The first sample only primes the last position, so the cursor
    /// jumping into the window does not yank the camera around. Later
    /// samples move by `(x - last_x, last_y - y)`, with y pointing up.
    #[inline]
    pub fn on_move(&mut self, position: (f32, f32)) {
        let position = Vector2::new(position.0, position.1);
        if let Some(last) = self.last_position {
            self.movement.x += position.x - last.x;
            self.movement.y += last.y - position.y;
        }

        self.last_position = Some(position);
    }

    #[inline]
    pub fn on_button_pressed(&mut self, button: MouseButton) {
        if self.downs.insert(button) {
            self.presses.insert(button);
        }
    }

    #[inline]
    pub fn on_button_released(&mut self, button: MouseButton) {
        self.downs.remove(&button);
        self.releases.insert(button);
    }

    #[inline]
    pub fn on_wheel_scroll(&mut self, delta: (f32, f32)) {
        self.scroll.x += delta.0;
        self.scroll.y += delta.1;
    }

    #[inline]
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.downs.contains(&button)
    }

    #[inline]
    pub fn is_button_press(&self, button: MouseButton) -> bool {
        self.presses.contains(&button)
    }

    #[inline]
    pub fn is_button_release(&self, button: MouseButton) -> bool {
        self.releases.contains(&button)
    }

    #[inline]
    pub fn position(&self) -> Option<Vector2<f32>> {
        self.last_position
    }

    #[inline]
    pub fn movement(&self) -> Vector2<f32> {
        self.movement
    }

    #[inline]
    pub fn scroll(&self) -> Vector2<f32> {
        self.scroll
    }
}
