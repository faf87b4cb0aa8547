//! Glyph cell layout over the source image.

use super::params::EncodeParams;

/// One glyph cell: its character code and the top-left pixel of its region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphCell {
    pub code: u32,
    pub x: u32,
    pub y: u32,
}

/// Row-major grid of glyph cells.
///
/// Codes are assigned from 0 in row-major order. Iteration skips cells below
/// the start code and stops right after the end code. If the image holds
/// fewer than `end + 1` cells, iteration ends early and fewer glyphs are
/// encoded than requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphGrid {
    columns: u32,
    rows: u32,
    pitch_x: u32,
    pitch_y: u32,
    start: u32,
    end: u32,
}

impl GlyphGrid {
    pub fn new(image_width: u32, image_height: u32, params: &EncodeParams) -> Self {
        let (pitch_x, pitch_y) = params.pitch();
        Self {
            columns: image_width.div_ceil(pitch_x),
            rows: image_height.div_ceil(pitch_y),
            pitch_x,
            pitch_y,
            start: params.start(),
            end: params.end(),
        }
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells in the image, including the ones outside the code range.
    pub fn cell_count(&self) -> u64 {
        self.columns as u64 * self.rows as u64
    }

    /// Lazy walk over the cells in the code range. Can be restarted freely.
    pub fn iter(&self) -> GridIter {
        GridIter {
            grid: *self,
            code: self.start as u64,
        }
    }
}

impl IntoIterator for &GlyphGrid {
    type Item = GlyphCell;
    type IntoIter = GridIter;

    fn into_iter(self) -> GridIter {
        self.iter()
    }
}

/// Iterator over the cells of a [`GlyphGrid`].
#[derive(Debug, Clone)]
pub struct GridIter {
    grid: GlyphGrid,
    // u64 so that `end == u32::MAX` cannot overflow the cursor.
    code: u64,
}

impl Iterator for GridIter {
    type Item = GlyphCell;

    fn next(&mut self) -> Option<GlyphCell> {
        let grid = &self.grid;
        if grid.end < grid.start
            || self.code > grid.end as u64
            || self.code >= grid.cell_count()
        {
            return None;
        }

        let code = self.code;
        self.code += 1;

        let column = (code % grid.columns as u64) as u32;
        let row = (code / grid.columns as u64) as u32;
        Some(GlyphCell {
            code: code as u32,
            x: column * grid.pitch_x,
            y: row * grid.pitch_y,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let grid = &self.grid;
        if grid.end < grid.start {
            return (0, Some(0));
        }
        let stop = (grid.end as u64 + 1).min(grid.cell_count());
        let remaining = stop.saturating_sub(self.code) as usize;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::params::{BitOrder, Padding};

    fn grid(
        width: u32,
        height: u32,
        cell: (u32, u32),
        border: u32,
        start: u32,
        end: u32,
    ) -> GlyphGrid {
        let params = EncodeParams::new(cell.0, cell.1, border, start, end, BitOrder::Lsb, Padding::Row)
            .unwrap();
        GlyphGrid::new(width, height, &params)
    }

    #[test]
    fn test_cells_in_row_major_order() {
        let g = grid(16, 16, (8, 8), 0, 0, 3);
        let cells: Vec<_> = g.iter().collect();
        assert_eq!(
            cells,
            vec![
                GlyphCell { code: 0, x: 0, y: 0 },
                GlyphCell { code: 1, x: 8, y: 0 },
                GlyphCell { code: 2, x: 0, y: 8 },
                GlyphCell { code: 3, x: 8, y: 8 },
            ]
        );
    }

    #[test]
    fn test_skips_codes_before_start() {
        let g = grid(32, 16, (8, 8), 0, 5, 6);
        let codes: Vec<_> = g.iter().map(|c| (c.code, c.x, c.y)).collect();
        assert_eq!(codes, vec![(5, 8, 8), (6, 16, 8)]);
    }

    #[test]
    fn test_stops_mid_row_at_end_code() {
        let g = grid(32, 32, (8, 8), 0, 0, 5);
        let last = g.iter().last().unwrap();
        assert_eq!(last, GlyphCell { code: 5, x: 8, y: 8 });
        assert_eq!(g.iter().count(), 6);
    }

    #[test]
    fn test_border_advances_origin() {
        let g = grid(20, 20, (4, 4), 1, 0, 100);
        assert_eq!(g.columns(), 4);
        assert_eq!(g.rows(), 4);
        let cells: Vec<_> = g.iter().take(5).map(|c| (c.x, c.y)).collect();
        assert_eq!(cells, vec![(0, 0), (5, 0), (10, 0), (15, 0), (0, 5)]);
    }

    #[test]
    fn test_partial_trailing_cells_are_counted() {
        // 10px wide with 4px cells: ceil(10 / 4) = 3 columns.
        let g = grid(10, 4, (4, 4), 0, 0, 10);
        assert_eq!(g.columns(), 3);
        assert_eq!(g.cell_count(), 3);
        assert_eq!(g.iter().last().map(|c| c.x), Some(8));
    }

    #[test]
    fn test_grid_runs_out_before_end_code() {
        // 5 x 2 = 10 cells for a 20 code range.
        let g = grid(40, 16, (8, 8), 0, 0, 19);
        assert_eq!(g.cell_count(), 10);
        assert_eq!(g.iter().count(), 10);
        assert_eq!(g.iter().size_hint(), (10, Some(10)));
    }

    #[test]
    fn test_start_beyond_grid_is_empty() {
        let g = grid(16, 8, (8, 8), 0, 32, 126);
        assert_eq!(g.iter().next(), None);
        assert_eq!(g.iter().size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_iteration_is_restartable() {
        let g = grid(64, 64, (8, 8), 0, 3, 40);
        let first: Vec<_> = g.iter().collect();
        let second: Vec<_> = (&g).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 38);
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let g = GlyphGrid {
            columns: 4,
            rows: 4,
            pitch_x: 8,
            pitch_y: 8,
            start: 5,
            end: 2,
        };
        assert_eq!(g.iter().count(), 0);
    }
}
