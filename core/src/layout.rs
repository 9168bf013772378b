use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Starting configuration of a board, suitable for loading from a config file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout<C> {
    pub step: StepRule,
    pub rows: Vec<Vec<C>>,
}

impl<C: CellLabel> Layout<C> {
    pub fn validate(&self) -> Result<(usize, usize), LayoutError> {
        let rows = self.rows.len();
        let cols = self.rows.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(LayoutError::Empty);
        }
        if Coord::try_from(rows).is_err() || Coord::try_from(cols).is_err() {
            return Err(LayoutError::TooLarge);
        }
        if let Some((row, found)) = self
            .rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(LayoutError::Ragged {
                row,
                expected: cols,
                found,
            });
        }
        Ok((rows, cols))
    }
}

impl<C: CellLabel> TryFrom<Layout<C>> for Board<C> {
    type Error = LayoutError;

    fn try_from(layout: Layout<C>) -> Result<Self, Self::Error> {
        let shape = layout.validate()?;
        let data: Vec<C> = layout.rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec(shape, data).map_err(|_| LayoutError::Empty)?;
        Ok(Board::from_cells(cells, layout.step))
    }
}
