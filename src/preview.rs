//! CPU rasterization of the scene as text
//!
//! Used by the native binary, which has no window to draw into. Evaluates
//! the same scene functions as the shader, one sample per character cell.

use glam::Vec2;

use crate::frame::FrameUniforms;
use crate::scene::{frame_point, scene_distance};

/// Cell fully inside a shape
pub const GLYPH_INSIDE: char = '#';
/// Cell straddling a boundary
pub const GLYPH_EDGE: char = '+';
/// Empty cell
pub const GLYPH_OUTSIDE: char = ' ';

/// Height / width of a terminal character cell
pub const CELL_ASPECT: f32 = 2.0;

/// Render the scene into `rows` lines of `columns` characters
///
/// `uniforms.aspect` is used as-is; callers wanting round circles in a
/// terminal should set it from [`preview_aspect`].
pub fn preview_ascii(uniforms: &FrameUniforms, columns: usize, rows: usize) -> String {
    let columns = columns.max(1);
    let rows = rows.max(1);
    // Half a cell in scene units (the y span is 2)
    let edge = 1.0 / rows as f32;

    let mut out = String::with_capacity((columns + 1) * rows);
    for row in 0..rows {
        for col in 0..columns {
            let uv = Vec2::new(
                (col as f32 + 0.5) / columns as f32,
                (row as f32 + 0.5) / rows as f32,
            );
            let d = scene_distance(frame_point(uv, uniforms.aspect), uniforms);
            out.push(if d < -edge {
                GLYPH_INSIDE
            } else if d <= edge {
                GLYPH_EDGE
            } else {
                GLYPH_OUTSIDE
            });
        }
        out.push('\n');
    }
    out
}

/// Aspect ratio of a `columns` x `rows` character grid
pub fn preview_aspect(columns: usize, rows: usize) -> f32 {
    columns.max(1) as f32 / (rows.max(1) as f32 * CELL_ASPECT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> Vec<Vec<char>> {
        text.lines().map(|l| l.chars().collect()).collect()
    }

    #[test]
    fn test_dimensions() {
        let u = FrameUniforms::new(preview_aspect(40, 20), 0.35);
        let text = preview_ascii(&u, 40, 20);
        let g = grid(&text);
        assert_eq!(g.len(), 20);
        assert!(g.iter().all(|line| line.len() == 40));
    }

    #[test]
    fn test_circle_center_filled_corners_empty() {
        let u = FrameUniforms::new(preview_aspect(41, 21), 0.35);
        let g = grid(&preview_ascii(&u, 41, 21));
        assert_eq!(g[10][20], GLYPH_INSIDE);
        assert_eq!(g[0][0], GLYPH_OUTSIDE);
        assert_eq!(g[20][40], GLYPH_OUTSIDE);
        assert!(g.iter().flatten().any(|&c| c == GLYPH_EDGE));
    }

    #[test]
    fn test_hidden_scene_is_blank() {
        let mut u = FrameUniforms::new(preview_aspect(32, 16), 0.35);
        u.circle_mul = 0.0;
        let text = preview_ascii(&u, 32, 16);
        assert!(text.chars().all(|c| c == GLYPH_OUTSIDE || c == '\n'));
    }

    #[test]
    fn test_zero_size_clamps_to_one_cell() {
        let u = FrameUniforms::default();
        // Center sample is inside, but within one cell of the rim
        assert_eq!(preview_ascii(&u, 0, 0), "+\n");
    }
}
