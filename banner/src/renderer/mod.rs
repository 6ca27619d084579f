use std::io::Write;

use anyhow::Context;
use frame::TextFrame;
use liblife::grid::Grid;

use crate::config::Palette;

pub mod frame;
pub mod sleeper;

const CLEAR_SCREEN: &str = "\x1b[2J";
const CURSOR_HOME: &str = "\x1b[H";

/// Paints grids onto a terminal-like writer, redrawing over the previous frame.
pub struct Renderer<W>
where
    W: Write,
{
    out: W,
    frame: TextFrame,
    in_place: bool,
    drawn_frames: u64,
}

impl<W> Renderer<W>
where
    W: Write,
{
    pub fn new(out: W, palette: Palette) -> Self {
        Self {
            out,
            frame: TextFrame::new(palette),
            in_place: true,
            drawn_frames: 0,
        }
    }

    /// Appends frames one after another instead of redrawing over the last one.
    pub fn scrolling(mut self) -> Self {
        self.in_place = false;
        self
    }

    #[cfg(test)]
    pub fn frame_mut(&mut self) -> &mut TextFrame {
        &mut self.frame
    }

    pub fn draw(&mut self, grid: &Grid) -> anyhow::Result<()> {
        if self.in_place {
            if self.drawn_frames == 0 {
                self.out.write_all(CLEAR_SCREEN.as_bytes())?;
            }
            self.out.write_all(CURSOR_HOME.as_bytes())?;
        }

        self.out
            .write_all(self.frame.draw(grid).as_bytes())
            .context("Couldn't write frame")?;
        self.out.flush().context("Couldn't flush frame")?;

        self.drawn_frames += 1;
        Ok(())
    }

    pub fn drawn_frames(&self) -> u64 {
        self.drawn_frames
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
