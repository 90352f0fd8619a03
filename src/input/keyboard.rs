use crate::utils::FastHashSet;

/// Symbolic name for a keyboard key. Only the keys the demos bind are listed.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
pub enum Key {
    /// The '1' key over the letters.
    Key1,
    /// The '2' key over the letters.
    Key2,
    /// The '3' key over the letters.
    Key3,
    /// The '4' key over the letters.
    Key4,
    /// The '5' key over the letters.
    Key5,
    /// The '6' key over the letters.
    Key6,
    /// The '7' key over the letters.
    Key7,
    /// The '8' key over the letters.
    Key8,
    /// The '9' key over the letters.
    Key9,
    /// The '0' key over the 'O' and 'P' keys.
    Key0,

    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    /// The Escape key, next to F1.
    Escape,

    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    Left,
    Up,
    Right,
    Down,

    /// The Backspace key, right over Enter.
    Back,
    /// The Enter key.
    Return,
    /// The space bar.
    Space,
    Tab,

    LAlt,
    LControl,
    LShift,
    RAlt,
    RControl,
    RShift,
}

#[derive(Default)]
pub struct Keyboard {
    downs: FastHashSet<Key>,
    presses: FastHashSet<Key>,
    releases: FastHashSet<Key>,
}

impl Keyboard {
    pub fn new() -> Self {
        Keyboard::default()
    }

    #[inline]
    pub fn reset(&mut self) {
        self.downs.clear();
        self.presses.clear();
        self.releases.clear();
    }

    #[inline]
    pub fn advance(&mut self) {
        self.presses.clear();
        self.releases.clear();
    }

    #[inline]
    pub fn on_key_pressed(&mut self, key: Key) {
        // Auto-repeat delivers presses of held keys again.
        if self.downs.insert(key) {
            self.presses.insert(key);
        }
    }

    #[inline]
    pub fn on_key_released(&mut self, key: Key) {
        self.downs.remove(&key);
        self.releases.insert(key);
    }

    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.downs.contains(&key)
    }

    #[inline]
    pub fn is_key_press(&self, key: Key) -> bool {
        self.presses.contains(&key)
    }

    #[inline]
    pub fn is_key_release(&self, key: Key) -> bool {
        self.releases.contains(&key)
    }
}
