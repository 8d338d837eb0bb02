// Input module - Key table and quit flag
//
// InputState is what the caller reads between updates: one pressed/released
// flag per 8-bit key code plus a sticky quit flag. Only the current state is
// kept, never an event history.

pub mod keyboard;

pub use keyboard::{vk, vk_from_keycode, vk_from_physical};

/// Number of entries in the key table
pub const KEY_COUNT: usize = 256;

/// Reduce a host key code to a key table index
///
/// Codes are truncated to their low 8 bits, so codes of 256 and above alias
/// onto lower entries.
#[inline]
pub fn key_index(code: u32) -> u8 {
    (code & 0xFF) as u8
}

/// Current keyboard and quit state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    quit: bool,
    keys: [bool; KEY_COUNT],
}

impl InputState {
    /// No keys pressed, not quitting
    pub fn new() -> Self {
        Self {
            quit: false,
            keys: [false; KEY_COUNT],
        }
    }

    /// Whether a close or quit signal has been seen
    #[inline]
    pub fn quit(&self) -> bool {
        self.quit
    }

    /// Mark the session as quitting
    ///
    /// Quit is never cleared once set.
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// The whole key table, indexed by key code
    #[inline]
    pub fn keys(&self) -> &[bool; KEY_COUNT] {
        &self.keys
    }

    /// Whether a key is held down
    #[inline]
    pub fn is_pressed(&self, code: u8) -> bool {
        self.keys[code as usize]
    }

    /// Record a key transition
    ///
    /// # Arguments
    /// * `code` - Host key code, truncated to 8 bits
    /// * `pressed` - true for key-down, false for key-up
    pub fn set_key(&mut self, code: u32, pressed: bool) {
        let index = key_index(code);
        if code as usize >= KEY_COUNT {
            log::debug!("Key code {:#x} aliased to {:#04x}", code, index);
        }
        self.keys[index as usize] = pressed;
    }

    /// Number of keys currently held down
    pub fn pressed_count(&self) -> usize {
        self.keys.iter().filter(|&&k| k).count()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let input = InputState::new();
        assert!(!input.quit());
        assert_eq!(input.pressed_count(), 0);
        assert_eq!(input.keys().len(), 256);
    }

    #[test]
    fn test_key_down_up() {
        let mut input = InputState::new();
        input.set_key(0x41, true);
        assert!(input.is_pressed(0x41));
        assert!(!input.is_pressed(0x42));

        input.set_key(0x41, false);
        assert!(!input.is_pressed(0x41));
    }

    #[test]
    fn test_key_codes_truncate() {
        let mut input = InputState::new();
        input.set_key(0x141, true);
        assert!(input.is_pressed(0x41));
        assert_eq!(key_index(0x1FF), 0xFF);
    }

    #[test]
    fn test_quit_is_sticky() {
        let mut input = InputState::new();
        input.request_quit();
        input.set_key(0x1B, true);
        assert!(input.quit());
    }
}
