/// Character grid renderer for terminal output
use bluegeom_core::{Offset4i, Point3f};
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;

/// Character ramp for depth (farthest to nearest)
const DEPTH_RAMP: &[char] = &['.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Depth range mapped onto the ramp, in world units either side of z = 0
const DEPTH_RANGE: f32 = 8.0;

/// Renders points onto a character grid, projected orthographically onto the
/// xy plane with the origin at the centre of the drawable area.
pub struct GridRenderer {
    width: usize,
    height: usize,
    scale: f32,
    insets: Offset4i,
    depth_buffer: Vec<f32>,
    char_buffer: Vec<char>,
}

impl GridRenderer {
    pub fn new(width: usize, height: usize, scale: f32, insets: Offset4i) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            scale,
            insets,
            depth_buffer: vec![f32::NEG_INFINITY; size],
            char_buffer: vec![' '; size],
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        let size = width * height;
        self.width = width;
        self.height = height;
        self.depth_buffer = vec![f32::NEG_INFINITY; size];
        self.char_buffer = vec![' '; size];
    }

    pub fn clear(&mut self) {
        for i in 0..self.depth_buffer.len() {
            self.depth_buffer[i] = f32::NEG_INFINITY;
            self.char_buffer[i] = ' ';
        }
    }

    /// Drawable columns and rows after the insets are removed.
    pub fn area(&self) -> (usize, usize) {
        let columns = (self.width as i64 - self.insets.horizontal() as i64).max(0);
        let rows = (self.height as i64 - self.insets.vertical() as i64).max(0);
        (columns as usize, rows as usize)
    }

    /// Draw the x and y axes through the origin.
    pub fn render_axes(&mut self) {
        let (columns, rows) = self.area();
        let left = self.insets.left().max(0) as usize;
        let top = self.insets.top().max(0) as usize;
        let (cx, cy) = (left + columns / 2, top + rows / 2);

        for x in left..left + columns {
            self.put(x, cy, '-', f32::NEG_INFINITY);
        }
        for y in top..top + rows {
            self.put(cx, y, '|', f32::NEG_INFINITY);
        }
        self.put(cx, cy, '+', f32::NEG_INFINITY);
    }

    /// Plot a point, shaded by depth unless a marker is given.
    pub fn render_point(&mut self, point: &Point3f, marker: Option<char>) {
        let Some((x, y)) = self.project(point) else {
            return;
        };
        let depth = point.z();
        let character = marker.unwrap_or_else(|| shade(depth));
        self.put(x, y, character, depth);
    }

    /// Grid cell for a point, or `None` when it falls outside the area.
    pub fn project(&self, point: &Point3f) -> Option<(usize, usize)> {
        let world: nalgebra::Point3<f32> = (*point).into();
        let (columns, rows) = self.area();
        let left = self.insets.left() as f32;
        let top = self.insets.top() as f32;

        // Terminal cells are roughly twice as tall as wide.
        let x = left + columns as f32 / 2.0 + world.x * self.scale;
        let y = top + rows as f32 / 2.0 - world.y * self.scale / 2.0;

        let inside_x = x >= left && x < left + columns as f32;
        let inside_y = y >= top && y < top + rows as f32;
        if inside_x && inside_y {
            Some((x as usize, y as usize))
        } else {
            None
        }
    }

    pub fn char_at(&self, x: usize, y: usize) -> Option<char> {
        if x < self.width && y < self.height {
            Some(self.char_buffer[y * self.width + x])
        } else {
            None
        }
    }

    fn put(&mut self, x: usize, y: usize, character: char, depth: f32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = y * self.width + x;
        if depth >= self.depth_buffer[idx] {
            self.depth_buffer[idx] = depth;
            self.char_buffer[idx] = character;
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                let c = self.char_buffer[idx];

                let color = match c {
                    '-' | '|' | '+' => Color::DarkGrey,
                    'o' => Color::Green,
                    'x' => Color::Red,
                    '.' | ':' | '=' => Color::Grey,
                    '*' | '#' | '%' | '@' => Color::Cyan,
                    _ => Color::White,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Nearer points (larger z) get denser characters.
fn shade(depth: f32) -> char {
    let t = ((depth + DEPTH_RANGE) / (2.0 * DEPTH_RANGE)).clamp(0.0, 1.0);
    let index = (t * (DEPTH_RAMP.len() - 1) as f32).round() as usize;
    DEPTH_RAMP[index.min(DEPTH_RAMP.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_projects_to_centre() {
        let renderer = GridRenderer::new(20, 11, 1.0, Offset4i::zero());
        let origin = Point3f::origin();
        assert_eq!(renderer.project(&origin), Some((10, 5)));
    }

    #[test]
    fn test_insets_shrink_area() {
        let renderer = GridRenderer::new(20, 10, 1.0, Offset4i::frozen(2, 2, 1, 1));
        assert_eq!(renderer.area(), (16, 8));
        let far = Point3f::frozen(100.0, 0.0, 0.0).unwrap();
        assert_eq!(renderer.project(&far), None);
    }

    #[test]
    fn test_render_point_with_marker() {
        let mut renderer = GridRenderer::new(20, 11, 1.0, Offset4i::zero());
        renderer.render_axes();
        let p = Point3f::frozen(3.0, 0.0, 0.0).unwrap();
        renderer.render_point(&p, Some('x'));
        assert_eq!(renderer.char_at(13, 5), Some('x'));
        assert_eq!(renderer.char_at(10, 5), Some('+'));
        renderer.clear();
        assert_eq!(renderer.char_at(13, 5), Some(' '));
    }

    #[test]
    fn test_shade_by_depth() {
        assert_eq!(shade(-100.0), '.');
        assert_eq!(shade(100.0), '@');
        assert_eq!(shade(0.0), '+');
    }
}
