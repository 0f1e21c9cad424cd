/// Character-cell surface for terminal wireframe rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use lw3d_core::{Segment2, Surface};
use std::io::Write;

const LINE_CHAR: char = '#';
const LINE_COLOR: Color = Color::Cyan;

/// A character framebuffer the pipeline strokes into, presented to the
/// terminal once per frame.
pub struct CharSurface {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl CharSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    fn set_cell(&mut self, x: i32, y: i32) {
        if x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height {
            self.cells[y as usize * self.width + x as usize] = LINE_CHAR;
        }
    }

    /// Bresenham line rasterization. Cells outside the surface are skipped;
    /// there is no clipping stage ahead of this.
    fn plot_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.set_cell(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Queues the framebuffer contents to `writer`. The caller positions the
    /// cursor and flushes.
    pub fn present<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(SetForegroundColor(LINE_COLOR))?;
        for row in self.cells.chunks(self.width) {
            let line: String = row.iter().collect();
            writer.queue(Print(line))?;
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }

    #[cfg(test)]
    fn cell(&self, x: usize, y: usize) -> char {
        self.cells[y * self.width + x]
    }
}

impl Surface for CharSurface {
    fn width(&self) -> u32 {
        self.width as u32
    }

    fn height(&self) -> u32 {
        self.height as u32
    }

    fn clear(&mut self) {
        self.cells.fill(' ');
    }

    fn stroke(&mut self, segment: Segment2) {
        let [x0, y0] = segment.a;
        let [x1, y1] = segment.b;
        // A degenerate projection can pass non-finite coordinates through;
        // drop the stroke rather than walking a garbage line.
        if !(x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite()) {
            return;
        }
        // An edge crossing the w ~= 0 plane projects to coordinates that are
        // finite but enormous; an unclamped cast saturates to the i32 limits
        // and the Bresenham deltas overflow. Clamp each endpoint to a band
        // around the surface so the walk stays a few dimensions long.
        let band_x = self.width as f32;
        let band_y = self.height as f32;
        self.plot_line(
            x0.round().clamp(-band_x, 2.0 * band_x) as i32,
            y0.round().clamp(-band_y, 2.0 * band_y) as i32,
            x1.round().clamp(-band_x, 2.0 * band_x) as i32,
            y1.round().clamp(-band_y, 2.0 * band_y) as i32,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(x0: f32, y0: f32, x1: f32, y1: f32) -> Segment2 {
        Segment2 {
            a: [x0, y0],
            b: [x1, y1],
        }
    }

    #[test]
    fn test_stroke_marks_both_endpoints() {
        let mut surface = CharSurface::new(20, 10);
        surface.stroke(segment(2.0, 3.0, 15.0, 7.0));
        assert_eq!(surface.cell(2, 3), LINE_CHAR);
        assert_eq!(surface.cell(15, 7), LINE_CHAR);
    }

    #[test]
    fn test_horizontal_stroke_is_contiguous() {
        let mut surface = CharSurface::new(20, 10);
        surface.stroke(segment(1.0, 5.0, 10.0, 5.0));
        for x in 1..=10 {
            assert_eq!(surface.cell(x, 5), LINE_CHAR);
        }
    }

    #[test]
    fn test_clear_resets_cells() {
        let mut surface = CharSurface::new(20, 10);
        surface.stroke(segment(0.0, 0.0, 19.0, 9.0));
        surface.clear();
        for y in 0..10 {
            for x in 0..20 {
                assert_eq!(surface.cell(x, y), ' ');
            }
        }
    }

    #[test]
    fn test_offscreen_cells_are_skipped() {
        let mut surface = CharSurface::new(10, 10);
        // Runs off the right edge; the in-bounds part is still drawn.
        surface.stroke(segment(8.0, 4.0, 14.0, 4.0));
        assert_eq!(surface.cell(8, 4), LINE_CHAR);
        assert_eq!(surface.cell(9, 4), LINE_CHAR);
    }

    #[test]
    fn test_huge_finite_stroke_is_clamped_not_overflowed() {
        // Endpoints far past the surface (an edge near the w == 0 plane)
        // must neither panic nor stall; the crossing row is still drawn.
        let mut surface = CharSurface::new(10, 10);
        surface.stroke(segment(-3.0e9, 0.0, 3.0e9, 0.0));
        for x in 0..10 {
            assert_eq!(surface.cell(x, 0), LINE_CHAR);
        }
    }

    #[test]
    fn test_one_huge_endpoint_still_draws_visible_start() {
        let mut surface = CharSurface::new(10, 10);
        surface.stroke(segment(5.0, 5.0, 1.0e9, 5.0));
        assert_eq!(surface.cell(5, 5), LINE_CHAR);
        assert_eq!(surface.cell(9, 5), LINE_CHAR);
    }

    #[test]
    fn test_non_finite_stroke_is_dropped() {
        let mut surface = CharSurface::new(10, 10);
        surface.stroke(segment(f32::NAN, 0.0, 5.0, 5.0));
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(surface.cell(x, y), ' ');
            }
        }
    }
}
