//! Layout Module - Cell row layout via Taffy
//!
//! Lays out the N cells as a flexbox row (fixed-size leaves, fixed gap) and
//! extracts one [`Rect`] per cell in index order. Positions are relative to
//! the widget origin; the renderer adds the on-screen offset.
//!
//! Cells are created once at construction and never resize, so the row is
//! computed once and the resulting rects are reused for every draw and for
//! click hit-testing.

use taffy::{
    AvailableSpace, Dimension as TaffyDimension, Display, FlexDirection, LengthPercentage, Size,
    Style, TaffyTree,
};

use crate::error::OtpError;
use crate::types::Rect;

// =============================================================================
// OPTIONS
// =============================================================================

/// Geometry of the cell row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowOptions {
    /// Width of each cell box in terminal columns (border included).
    pub cell_width: u16,
    /// Height of each cell box in terminal rows (border included).
    pub cell_height: u16,
    /// Gap between adjacent cells in columns.
    pub gap: u16,
}

impl Default for RowOptions {
    fn default() -> Self {
        Self {
            cell_width: 5,
            cell_height: 3,
            gap: 2,
        }
    }
}

impl RowOptions {
    /// Total width of a row of `cell_count` cells.
    pub fn row_width(&self, cell_count: usize) -> u16 {
        let count = cell_count as u16;
        count * self.cell_width + count.saturating_sub(1) * self.gap
    }
}

// =============================================================================
// ROW LAYOUT
// =============================================================================

/// Compute the cell rects for a row of `cell_count` cells.
///
/// Builds a Taffy tree - a flex row container with one fixed-size leaf per
/// cell - computes layout, and reads each leaf's position back out.
pub fn layout_row(cell_count: usize, opts: &RowOptions) -> Result<Vec<Rect>, OtpError> {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let leaf_style = Style {
        size: Size {
            width: TaffyDimension::Length(opts.cell_width as f32),
            height: TaffyDimension::Length(opts.cell_height as f32),
        },
        ..Default::default()
    };

    let mut children = Vec::with_capacity(cell_count);
    for _ in 0..cell_count {
        children.push(tree.new_leaf(leaf_style.clone())?);
    }

    let root = tree.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Row,
            gap: Size {
                width: LengthPercentage::Length(opts.gap as f32),
                height: LengthPercentage::Length(0.0),
            },
            ..Default::default()
        },
        &children,
    )?;

    tree.compute_layout(
        root,
        Size {
            width: AvailableSpace::MaxContent,
            height: AvailableSpace::MaxContent,
        },
    )?;

    let mut rects = Vec::with_capacity(cell_count);
    for child in &children {
        let layout = tree.layout(*child)?;
        rects.push(Rect::new(
            layout.location.x.round() as u16,
            layout.location.y.round() as u16,
            layout.size.width.round() as u16,
            layout.size.height.round() as u16,
        ));
    }

    Ok(rects)
}

// =============================================================================
// HIT TESTING
// =============================================================================

/// Resolve a terminal coordinate to the index of the cell under it.
///
/// Coordinates must be in the same space as the rects (the caller subtracts
/// the widget's on-screen origin first). Gaps between cells resolve to None.
pub fn hit_test(rects: &[Rect], x: u16, y: u16) -> Option<usize> {
    rects.iter().position(|rect| rect.contains(x, y))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_positions_left_to_right() {
        let opts = RowOptions::default();
        let rects = layout_row(4, &opts).unwrap();

        assert_eq!(rects.len(), 4);
        for (i, rect) in rects.iter().enumerate() {
            assert_eq!(rect.x, i as u16 * (opts.cell_width + opts.gap));
            assert_eq!(rect.y, 0);
            assert_eq!(rect.width, opts.cell_width);
            assert_eq!(rect.height, opts.cell_height);
        }
    }

    #[test]
    fn test_single_cell_row() {
        let rects = layout_row(1, &RowOptions::default()).unwrap();
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0], Rect::new(0, 0, 5, 3));
    }

    #[test]
    fn test_row_width_matches_layout() {
        let opts = RowOptions::default();
        let rects = layout_row(6, &opts).unwrap();
        assert_eq!(rects.last().unwrap().right(), opts.row_width(6));
    }

    #[test]
    fn test_custom_geometry() {
        let opts = RowOptions {
            cell_width: 3,
            cell_height: 1,
            gap: 1,
        };
        let rects = layout_row(3, &opts).unwrap();
        assert_eq!(rects[1].x, 4);
        assert_eq!(rects[2].x, 8);
        assert_eq!(rects[0].height, 1);
    }

    #[test]
    fn test_hit_test_resolves_cells() {
        let rects = layout_row(4, &RowOptions::default()).unwrap();

        // Center of each cell.
        for (i, rect) in rects.iter().enumerate() {
            assert_eq!(hit_test(&rects, rect.x + 2, rect.y + 1), Some(i));
        }

        // Gap between cell 0 and cell 1.
        assert_eq!(hit_test(&rects, 5, 1), None);
        assert_eq!(hit_test(&rects, 6, 1), None);

        // Past the end of the row.
        assert_eq!(hit_test(&rects, 200, 1), None);
    }
}
