// Keyboard mapping module
//
// Translates winit physical keys into 8-bit virtual-key codes. The numbering
// follows the classic Windows virtual-key table: letters and digits are their
// ASCII upper-case values, and modifier keys report the side-neutral code
// (both Shift keys are `vk::SHIFT`).

use winit::keyboard::{KeyCode, PhysicalKey};

/// Virtual-key code constants
pub mod vk {
    pub const BACKSPACE: u8 = 0x08;
    pub const TAB: u8 = 0x09;
    pub const ENTER: u8 = 0x0D;
    pub const SHIFT: u8 = 0x10;
    pub const CONTROL: u8 = 0x11;
    pub const ALT: u8 = 0x12;
    pub const PAUSE: u8 = 0x13;
    pub const CAPS_LOCK: u8 = 0x14;
    pub const ESCAPE: u8 = 0x1B;
    pub const SPACE: u8 = 0x20;
    pub const PAGE_UP: u8 = 0x21;
    pub const PAGE_DOWN: u8 = 0x22;
    pub const END: u8 = 0x23;
    pub const HOME: u8 = 0x24;
    pub const LEFT: u8 = 0x25;
    pub const UP: u8 = 0x26;
    pub const RIGHT: u8 = 0x27;
    pub const DOWN: u8 = 0x28;
    pub const PRINT_SCREEN: u8 = 0x2C;
    pub const INSERT: u8 = 0x2D;
    pub const DELETE: u8 = 0x2E;
    /// `'0'`; digits run to `'9'` (0x39)
    pub const DIGIT0: u8 = 0x30;
    /// `'A'`; letters run to `'Z'` (0x5A)
    pub const A: u8 = 0x41;
    pub const SUPER_LEFT: u8 = 0x5B;
    pub const SUPER_RIGHT: u8 = 0x5C;
    pub const CONTEXT_MENU: u8 = 0x5D;
    /// Numpad digits run to 0x69
    pub const NUMPAD0: u8 = 0x60;
    pub const NUMPAD_MULTIPLY: u8 = 0x6A;
    pub const NUMPAD_ADD: u8 = 0x6B;
    pub const NUMPAD_SUBTRACT: u8 = 0x6D;
    pub const NUMPAD_DECIMAL: u8 = 0x6E;
    pub const NUMPAD_DIVIDE: u8 = 0x6F;
    /// F-keys run to F24 (0x87)
    pub const F1: u8 = 0x70;
    pub const NUM_LOCK: u8 = 0x90;
    pub const SCROLL_LOCK: u8 = 0x91;
    pub const SEMICOLON: u8 = 0xBA;
    pub const EQUAL: u8 = 0xBB;
    pub const COMMA: u8 = 0xBC;
    pub const MINUS: u8 = 0xBD;
    pub const PERIOD: u8 = 0xBE;
    pub const SLASH: u8 = 0xBF;
    pub const BACKQUOTE: u8 = 0xC0;
    pub const BRACKET_LEFT: u8 = 0xDB;
    pub const BACKSLASH: u8 = 0xDC;
    pub const BRACKET_RIGHT: u8 = 0xDD;
    pub const QUOTE: u8 = 0xDE;

    /// Code for an upper-case ASCII letter or digit
    ///
    /// # Example
    /// ```
    /// use framewin::input::vk;
    ///
    /// assert_eq!(vk::ascii(b'w'), Some(0x57));
    /// assert_eq!(vk::ascii(b'7'), Some(0x37));
    /// ```
    pub const fn ascii(c: u8) -> Option<u8> {
        match c {
            b'0'..=b'9' | b'A'..=b'Z' => Some(c),
            b'a'..=b'z' => Some(c - 32),
            _ => None,
        }
    }

    /// Code for function key `n` (1-24)
    pub const fn function(n: u8) -> Option<u8> {
        if n >= 1 && n <= 24 {
            Some(F1 + n - 1)
        } else {
            None
        }
    }
}

/// Map a physical key to a virtual-key code
///
/// # Returns
/// `None` for unidentified keys and keys without a virtual-key equivalent
pub fn vk_from_physical(key: PhysicalKey) -> Option<u8> {
    match key {
        PhysicalKey::Code(code) => vk_from_keycode(code),
        PhysicalKey::Unidentified(_) => None,
    }
}

/// Map a winit key code to a virtual-key code
pub fn vk_from_keycode(key: KeyCode) -> Option<u8> {
    let code = match key {
        KeyCode::Backspace => vk::BACKSPACE,
        KeyCode::Tab => vk::TAB,
        KeyCode::Enter | KeyCode::NumpadEnter => vk::ENTER,
        KeyCode::ShiftLeft | KeyCode::ShiftRight => vk::SHIFT,
        KeyCode::ControlLeft | KeyCode::ControlRight => vk::CONTROL,
        KeyCode::AltLeft | KeyCode::AltRight => vk::ALT,
        KeyCode::Pause => vk::PAUSE,
        KeyCode::CapsLock => vk::CAPS_LOCK,
        KeyCode::Escape => vk::ESCAPE,
        KeyCode::Space => vk::SPACE,
        KeyCode::PageUp => vk::PAGE_UP,
        KeyCode::PageDown => vk::PAGE_DOWN,
        KeyCode::End => vk::END,
        KeyCode::Home => vk::HOME,
        KeyCode::ArrowLeft => vk::LEFT,
        KeyCode::ArrowUp => vk::UP,
        KeyCode::ArrowRight => vk::RIGHT,
        KeyCode::ArrowDown => vk::DOWN,
        KeyCode::PrintScreen => vk::PRINT_SCREEN,
        KeyCode::Insert => vk::INSERT,
        KeyCode::Delete => vk::DELETE,

        KeyCode::Digit0 => b'0',
        KeyCode::Digit1 => b'1',
        KeyCode::Digit2 => b'2',
        KeyCode::Digit3 => b'3',
        KeyCode::Digit4 => b'4',
        KeyCode::Digit5 => b'5',
        KeyCode::Digit6 => b'6',
        KeyCode::Digit7 => b'7',
        KeyCode::Digit8 => b'8',
        KeyCode::Digit9 => b'9',

        KeyCode::KeyA => b'A',
        KeyCode::KeyB => b'B',
        KeyCode::KeyC => b'C',
        KeyCode::KeyD => b'D',
        KeyCode::KeyE => b'E',
        KeyCode::KeyF => b'F',
        KeyCode::KeyG => b'G',
        KeyCode::KeyH => b'H',
        KeyCode::KeyI => b'I',
        KeyCode::KeyJ => b'J',
        KeyCode::KeyK => b'K',
        KeyCode::KeyL => b'L',
        KeyCode::KeyM => b'M',
        KeyCode::KeyN => b'N',
        KeyCode::KeyO => b'O',
        KeyCode::KeyP => b'P',
        KeyCode::KeyQ => b'Q',
        KeyCode::KeyR => b'R',
        KeyCode::KeyS => b'S',
        KeyCode::KeyT => b'T',
        KeyCode::KeyU => b'U',
        KeyCode::KeyV => b'V',
        KeyCode::KeyW => b'W',
        KeyCode::KeyX => b'X',
        KeyCode::KeyY => b'Y',
        KeyCode::KeyZ => b'Z',

        KeyCode::SuperLeft => vk::SUPER_LEFT,
        KeyCode::SuperRight => vk::SUPER_RIGHT,
        KeyCode::ContextMenu => vk::CONTEXT_MENU,

        KeyCode::Numpad0 => vk::NUMPAD0,
        KeyCode::Numpad1 => vk::NUMPAD0 + 1,
        KeyCode::Numpad2 => vk::NUMPAD0 + 2,
        KeyCode::Numpad3 => vk::NUMPAD0 + 3,
        KeyCode::Numpad4 => vk::NUMPAD0 + 4,
        KeyCode::Numpad5 => vk::NUMPAD0 + 5,
        KeyCode::Numpad6 => vk::NUMPAD0 + 6,
        KeyCode::Numpad7 => vk::NUMPAD0 + 7,
        KeyCode::Numpad8 => vk::NUMPAD0 + 8,
        KeyCode::Numpad9 => vk::NUMPAD0 + 9,
        KeyCode::NumpadMultiply => vk::NUMPAD_MULTIPLY,
        KeyCode::NumpadAdd => vk::NUMPAD_ADD,
        KeyCode::NumpadSubtract => vk::NUMPAD_SUBTRACT,
        KeyCode::NumpadDecimal => vk::NUMPAD_DECIMAL,
        KeyCode::NumpadDivide => vk::NUMPAD_DIVIDE,

        KeyCode::F1 => vk::F1,
        KeyCode::F2 => vk::F1 + 1,
        KeyCode::F3 => vk::F1 + 2,
        KeyCode::F4 => vk::F1 + 3,
        KeyCode::F5 => vk::F1 + 4,
        KeyCode::F6 => vk::F1 + 5,
        KeyCode::F7 => vk::F1 + 6,
        KeyCode::F8 => vk::F1 + 7,
        KeyCode::F9 => vk::F1 + 8,
        KeyCode::F10 => vk::F1 + 9,
        KeyCode::F11 => vk::F1 + 10,
        KeyCode::F12 => vk::F1 + 11,
        KeyCode::F13 => vk::F1 + 12,
        KeyCode::F14 => vk::F1 + 13,
        KeyCode::F15 => vk::F1 + 14,
        KeyCode::F16 => vk::F1 + 15,
        KeyCode::F17 => vk::F1 + 16,
        KeyCode::F18 => vk::F1 + 17,
        KeyCode::F19 => vk::F1 + 18,
        KeyCode::F20 => vk::F1 + 19,
        KeyCode::F21 => vk::F1 + 20,
        KeyCode::F22 => vk::F1 + 21,
        KeyCode::F23 => vk::F1 + 22,
        KeyCode::F24 => vk::F1 + 23,

        KeyCode::NumLock => vk::NUM_LOCK,
        KeyCode::ScrollLock => vk::SCROLL_LOCK,
        KeyCode::Semicolon => vk::SEMICOLON,
        KeyCode::Equal => vk::EQUAL,
        KeyCode::Comma => vk::COMMA,
        KeyCode::Minus => vk::MINUS,
        KeyCode::Period => vk::PERIOD,
        KeyCode::Slash => vk::SLASH,
        KeyCode::Backquote => vk::BACKQUOTE,
        KeyCode::BracketLeft => vk::BRACKET_LEFT,
        KeyCode::Backslash => vk::BACKSLASH,
        KeyCode::BracketRight => vk::BRACKET_RIGHT,
        KeyCode::Quote => vk::QUOTE,
        _ => return None,
    };
    Some(code)
}
