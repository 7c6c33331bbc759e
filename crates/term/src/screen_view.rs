//! ScreenView: maps the current fill color and notice into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, Notice};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// What is currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenState {
    /// Palette index the screen is filled with.
    pub fill: u8,
    /// Text drawn over the fill, if any.
    pub notice: Option<Notice>,
}

/// Default VGA text palette, indices 0..=15.
const VGA_PALETTE: [Rgb; 16] = [
    Rgb::new(0, 0, 0),
    Rgb::new(0, 0, 170),
    Rgb::new(0, 170, 0),
    Rgb::new(0, 170, 170),
    Rgb::new(170, 0, 0),
    Rgb::new(170, 0, 170),
    Rgb::new(170, 85, 0),
    Rgb::new(170, 170, 170),
    Rgb::new(85, 85, 85),
    Rgb::new(85, 85, 255),
    Rgb::new(85, 255, 85),
    Rgb::new(85, 255, 255),
    Rgb::new(255, 85, 85),
    Rgb::new(255, 85, 255),
    Rgb::new(255, 255, 85),
    Rgb::new(255, 255, 255),
];

/// RGB for a palette index.
///
/// Indices past the 16 standard colors follow the mode 13h grayscale ramp at
/// 16..=31 and fall back to black above that.
pub fn palette_rgb(index: u8) -> Rgb {
    match index {
        0..=15 => VGA_PALETTE[index as usize],
        16..=31 => {
            let v = (index - 16) * 17;
            Rgb::new(v, v, v)
        }
        _ => Rgb::new(0, 0, 0),
    }
}

/// Text lines for a notice, top to bottom.
pub fn notice_lines(notice: Notice) -> Vec<String> {
    match notice {
        Notice::Banner => vec![
            "============= VGA MEMORIZE =============".to_string(),
            "         Angelito M. Goulart            ".to_string(),
            "         www.angelitomg.com             ".to_string(),
            "========================================".to_string(),
            String::new(),
            "Press any key to start game or ESC to exit.".to_string(),
        ],
        Notice::Level(level) => vec![format!("LEVEL {}", level)],
        Notice::Instructions => {
            let mut lines = vec!["Don't forget:".to_string()];
            for color in Color::ALL {
                let name = match color {
                    Color::Blue => "Blue",
                    Color::Green => "Green",
                    Color::Red => "Red",
                    Color::Yellow => "Yellow",
                };
                lines.push(format!("{} for {}", color.key_hint(), name));
            }
            lines.push("Now, type sequence:".to_string());
            lines
        }
        Notice::Victory => vec!["-- CONGRATULATIONS! YOU WIN! --".to_string()],
    }
}

/// Renders a [`ScreenState`] into a framebuffer.
#[derive(Debug, Default)]
pub struct ScreenView;

impl ScreenView {
    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, screen: ScreenState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);

        let bg = palette_rgb(screen.fill);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle {
                fg: bg,
                bg,
                bold: false,
            },
        });

        let Some(notice) = screen.notice else {
            return;
        };

        // Dark text on the bright fills, white otherwise.
        let fg = if bg.luma() > 140 {
            Rgb::new(0, 0, 0)
        } else {
            Rgb::new(255, 255, 255)
        };
        let text = CellStyle { fg, bg, bold: true };

        let lines = notice_lines(notice);
        let top = viewport.height.saturating_sub(lines.len() as u16) / 2;
        for (i, line) in lines.iter().enumerate() {
            fb.put_str_centered(top.saturating_add(i as u16), line, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, screen: ScreenState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(screen, viewport, &mut fb);
        fb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_colors_use_vga_palette() {
        assert_eq!(palette_rgb(0), Rgb::new(0, 0, 0));
        assert_eq!(palette_rgb(1), Rgb::new(0, 0, 170));
        assert_eq!(palette_rgb(2), Rgb::new(0, 170, 0));
        assert_eq!(palette_rgb(12), Rgb::new(255, 85, 85));
        assert_eq!(palette_rgb(14), Rgb::new(255, 255, 85));
        assert_eq!(palette_rgb(31), Rgb::new(255, 255, 255));
        assert_eq!(palette_rgb(200), Rgb::new(0, 0, 0));
    }

    #[test]
    fn fill_covers_every_cell() {
        let fb = ScreenView.render(
            ScreenState {
                fill: 2,
                notice: None,
            },
            Viewport::new(6, 3),
        );
        for y in 0..3 {
            for x in 0..6 {
                assert_eq!(fb.get(x, y).unwrap().style.bg, Rgb::new(0, 170, 0));
            }
        }
    }

    #[test]
    fn banner_credits_the_author() {
        let lines = notice_lines(Notice::Banner);
        assert_eq!(lines[0], "============= VGA MEMORIZE =============");
        assert!(lines.iter().any(|l| l.trim() == "Angelito M. Goulart"));
        assert!(lines.iter().any(|l| l.trim() == "www.angelitomg.com"));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Press any key to start game or ESC to exit.")
        );
    }

    #[test]
    fn instructions_list_every_key() {
        let lines = notice_lines(Notice::Instructions);
        assert!(lines.contains(&"B for Blue".to_string()));
        assert!(lines.contains(&"G for Green".to_string()));
        assert!(lines.contains(&"R for Red".to_string()));
        assert!(lines.contains(&"Y for Yellow".to_string()));
    }

    #[test]
    fn yellow_fill_gets_dark_text() {
        let fb = ScreenView.render(
            ScreenState {
                fill: 14,
                notice: Some(Notice::Level(3)),
            },
            Viewport::new(20, 5),
        );
        let row = fb.row_text(2);
        assert!(row.contains("LEVEL 3"), "row was {:?}", row);
        let x = row.find('L').unwrap() as u16;
        assert_eq!(fb.get(x, 2).unwrap().style.fg, Rgb::new(0, 0, 0));
    }
}
