use colored::Colorize;
use liblife::grid::{Cell, Grid};

use crate::config::Palette;

/// Terminal columns per cell, so cells come out roughly square.
pub const CELL_WIDTH: usize = 2;

pub struct TextFrame {
    pub palette: Palette,
    pub colorize: bool,
}

impl TextFrame {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            colorize: colored::control::SHOULD_COLORIZE.should_colorize(),
        }
    }

    /// One text line per grid row. Colour blocks when colourizing, `#`/`.` glyphs otherwise.
    pub fn draw(&self, grid: &Grid) -> String {
        let mut out = String::with_capacity(grid.rows() * (grid.cols() * CELL_WIDTH + 1));

        for row in grid.row_cells() {
            for cell in row {
                out.push_str(&self.draw_cell(*cell));
            }
            out.push('\n');
        }

        out
    }

    fn draw_cell(&self, cell: Cell) -> String {
        if self.colorize {
            let [r, g, b] = self.palette.color(cell);
            " ".repeat(CELL_WIDTH).on_truecolor(r, g, b).to_string()
        } else {
            let glyph = if cell.is_alive() { "#" } else { "." };
            glyph.repeat(CELL_WIDTH)
        }
    }
}
