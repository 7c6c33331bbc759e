//! Color codec - raw key codes and palette indices.

use crate::types::{Color, RawKeyCode, BLANK_DISPLAY_CODE};

/// Decode a raw key code into a color.
///
/// Both letter cases are accepted. Red answers to 114 (`r`) and 12 rather than
/// 82 (`R`); 12 is what the reference keyboard driver reports, and on a terminal
/// it is Ctrl+L.
///
/// Returns `None` for every other code.
pub fn decode(raw: RawKeyCode) -> Option<Color> {
    match raw {
        66 | 98 => Some(Color::Blue),
        71 | 103 => Some(Color::Green),
        12 | 114 => Some(Color::Red),
        89 | 121 => Some(Color::Yellow),
        _ => None,
    }
}

/// Lowercase key code that decodes to `color`.
pub fn key_code(color: Color) -> RawKeyCode {
    match color {
        Color::Blue => 98,
        Color::Green => 103,
        Color::Red => 114,
        Color::Yellow => 121,
    }
}

/// Palette index to fill the screen with; `None` blanks the screen.
pub fn display_code(color: Option<Color>) -> u8 {
    match color {
        Some(Color::Blue) => 1,
        Some(Color::Green) => 2,
        Some(Color::Red) => 12,
        Some(Color::Yellow) => 14,
        None => BLANK_DISPLAY_CODE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_table() {
        assert_eq!(decode(66), Some(Color::Blue));
        assert_eq!(decode(98), Some(Color::Blue));
        assert_eq!(decode(71), Some(Color::Green));
        assert_eq!(decode(103), Some(Color::Green));
        assert_eq!(decode(12), Some(Color::Red));
        assert_eq!(decode(114), Some(Color::Red));
        assert_eq!(decode(89), Some(Color::Yellow));
        assert_eq!(decode(121), Some(Color::Yellow));
    }

    #[test]
    fn test_decode_is_total() {
        let mut hits = 0;
        for raw in 0..=1024u32 {
            if decode(raw).is_some() {
                hits += 1;
            }
        }
        assert_eq!(hits, 8);
        assert_eq!(decode(RawKeyCode::MAX), None);
    }

    #[test]
    fn test_uppercase_r_is_not_red() {
        assert_eq!(decode('R' as RawKeyCode), None);
        assert_eq!(decode('r' as RawKeyCode), Some(Color::Red));
    }

    #[test]
    fn test_key_code_decodes_back() {
        for color in Color::ALL {
            assert_eq!(decode(key_code(color)), Some(color));
        }
    }

    #[test]
    fn test_display_codes() {
        assert_eq!(display_code(Some(Color::Blue)), 1);
        assert_eq!(display_code(Some(Color::Green)), 2);
        assert_eq!(display_code(Some(Color::Red)), 12);
        assert_eq!(display_code(Some(Color::Yellow)), 14);
        assert_eq!(display_code(None), 0);
    }
}
