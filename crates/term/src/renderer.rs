//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Implements the `Display` capability. Entering graphics mode switches to the
//! alternate screen in raw mode; every fill or notice re-renders the screen
//! and writes only the cells that changed since the previous frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::core::Display;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::screen_view::{ScreenState, ScreenView, Viewport};
use crate::types::Notice;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    view: ScreenView,
    screen: ScreenState,
    frame: FrameBuffer,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            view: ScreenView,
            screen: ScreenState::default(),
            frame: FrameBuffer::new(0, 0),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        if let Err(err) = encode_enter_into(&mut self.buf).and_then(|()| self.flush_buf()) {
            // Leave the terminal usable when setup fails halfway.
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        self.invalidate();
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// The renderer diffs against the previous frame and then swaps buffers so
    /// the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        let mut frame = std::mem::replace(&mut self.frame, FrameBuffer::new(0, 0));
        self.view
            .render_into(self.screen, Viewport::new(w, h), &mut frame);
        let result = self.draw_swap(&mut frame);
        self.frame = frame;
        result
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for TerminalRenderer {
    fn enter_graphics_mode(&mut self) -> Result<()> {
        self.enter()
    }

    fn exit_graphics_mode(&mut self) -> Result<()> {
        self.exit()
    }

    fn fill(&mut self, color_index: u8) -> Result<()> {
        // A fill paints over any text on screen.
        self.screen = ScreenState {
            fill: color_index,
            notice: None,
        };
        self.redraw()
    }

    fn show(&mut self, notice: Notice) -> Result<()> {
        self.screen.notice = Some(notice);
        self.redraw()
    }
}

/// Encode the alternate-screen setup sent by [`TerminalRenderer::enter`].
pub fn encode_enter_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::EnterAlternateScreen)?;
    out.queue(cursor::Hide)?;
    out.queue(terminal::DisableLineWrap)?;
    Ok(())
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let view = ScreenView;
        let a = view.render(ScreenState::default(), Viewport::new(5, 1));
        let mut b = a.clone();
        let style = CellStyle::default();
        for x in 1..=3 {
            b.set(x, 0, crate::fb::Cell { ch: 'X', style });
        }

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 0, 3)]);
    }

    #[test]
    fn color_fill_changes_every_cell() {
        let view = ScreenView;
        let blank = view.render(ScreenState::default(), Viewport::new(4, 2));
        let blue = view.render(
            ScreenState {
                fill: 1,
                notice: None,
            },
            Viewport::new(4, 2),
        );

        let mut runs = Vec::new();
        for_each_changed_run(&blank, &blue, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(0, 0, 4), (0, 1, 4)]);
    }

    #[test]
    fn identical_frames_encode_no_cells() {
        let view = ScreenView;
        let fb = view.render(ScreenState::default(), Viewport::new(3, 3));
        let mut out = Vec::new();
        encode_diff_into(&fb, &fb, &mut out).unwrap();

        let mut reset_only = Vec::new();
        reset_only.queue(ResetColor).unwrap();
        reset_only.queue(SetAttribute(Attribute::Reset)).unwrap();
        assert_eq!(out, reset_only);
    }

    #[test]
    fn enter_sequence_switches_screen_and_hides_cursor() {
        let mut out = Vec::new();
        encode_enter_into(&mut out).unwrap();

        let mut expected = Vec::new();
        expected.queue(terminal::EnterAlternateScreen).unwrap();
        expected.queue(cursor::Hide).unwrap();
        expected.queue(terminal::DisableLineWrap).unwrap();
        assert_eq!(out, expected);
    }

    #[test]
    fn rgb_maps_to_truecolor() {
        assert_eq!(
            rgb_to_color(Rgb::new(255, 85, 85)),
            Color::Rgb {
                r: 255,
                g: 85,
                b: 85
            }
        );
    }
}
