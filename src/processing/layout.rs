//! Grid sizing from aggregate tile weights

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_GRID, GRID_ASPECT, MIN_GRID_COLUMNS, ROW_HEADROOM};
use crate::core::{tile_weight, Item};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
	pub cols: usize,
	pub rows: usize,
}

impl Default for GridShape {
	fn default() -> Self {
		Self {
			cols: DEFAULT_GRID.0,
			rows: DEFAULT_GRID.1,
		}
	}
}

impl std::fmt::Display for GridShape {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}x{}", self.cols, self.rows)
	}
}

/// Grid for a set of items, with 25% spare rows for the tile packer
pub fn grid_shape(items: &[Item]) -> GridShape {
	let total_cells: usize = items.iter().map(|item| tile_weight(&item.text)).sum();
	grid_for_cells(total_cells)
}

pub fn grid_for_cells(total_cells: usize) -> GridShape {
	if total_cells == 0 {
		return GridShape::default();
	}

	let cells = total_cells as f64;
	let cols = MIN_GRID_COLUMNS.max((cells * GRID_ASPECT).sqrt().ceil() as usize);
	let rows = total_cells.div_ceil(cols);
	let rows = rows + (rows as f64 * ROW_HEADROOM).ceil() as usize;

	GridShape { cols, rows }
}
