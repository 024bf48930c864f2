use crate::render::gif_loader::RgbFrame;
use crate::render::scaler::DisplayGrid;
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};

pub const BLOCK_GLYPH: char = '█';

/// Draws `frame` as rows of true-color full blocks, centered in `term_width`.
pub fn render_frame<W: Write>(
    out: &mut W,
    frame: &RgbFrame,
    term_width: u16,
    max_width: u32,
) -> io::Result<()> {
    let grid = DisplayGrid::fit(frame.width(), frame.height(), max_width);
    if grid.is_empty() {
        return Ok(());
    }

    let padding = left_padding(term_width, grid.width);
    let indent = " ".repeat(padding);

    for y in 0..grid.height {
        let src_y = grid.source_y(y);
        queue!(out, Print(&indent))?;
        for x in 0..grid.width {
            let [r, g, b] = frame.rgb_at(grid.source_x(x), src_y);
            queue!(out, SetForegroundColor(Color::Rgb { r, g, b }), Print(BLOCK_GLYPH))?;
        }
        queue!(out, ResetColor, Print('\n'))?;
    }

    Ok(())
}

fn left_padding(term_width: u16, display_width: u32) -> usize {
    let pad = (i64::from(term_width) - i64::from(display_width)) / 2;
    pad.max(0) as usize
}
