//! Byte and sparse board adapters.
//!
//! Conversions between host-facing cell arrays and [`DigitGrid`] happen
//! here and nowhere else; the rest of the engine works on typed grids.

use gridwright_core::{DigitGrid, grid::GridError};

use crate::EngineError;

/// Parses an 81-cell byte board (`0` = empty, `1`-`9` digits).
pub(crate) fn grid_from_bytes(cells: &[u8]) -> Result<DigitGrid, EngineError> {
    let values: &[u8; 81] = cells.try_into().map_err(|_| length_error(cells.len()))?;
    Ok(DigitGrid::from_values(values)?)
}

/// Parses an 81-cell sparse board (`None` = empty).
pub(crate) fn grid_from_sparse(cells: &[Option<u8>]) -> Result<DigitGrid, EngineError> {
    if cells.len() != 81 {
        return Err(length_error(cells.len()));
    }
    let mut values = [0; 81];
    for (value, cell) in values.iter_mut().zip(cells) {
        *value = cell.unwrap_or(0);
    }
    Ok(DigitGrid::from_values(&values)?)
}

/// Renders a grid as an 81-cell byte board.
pub(crate) fn bytes_from_grid(grid: &DigitGrid) -> [u8; 81] {
    grid.to_values()
}

/// Renders a grid as an 81-cell sparse board.
pub(crate) fn sparse_from_grid(grid: &DigitGrid) -> Vec<Option<u8>> {
    grid.to_values()
        .iter()
        .map(|&value| if value == 0 { None } else { Some(value) })
        .collect()
}

fn length_error(len: usize) -> EngineError {
    if len < 81 {
        GridError::TooFewCells { count: len }.into()
    } else {
        GridError::TooManyCells.into()
    }
}

#[cfg(test)]
mod tests {
    use gridwright_core::{Digit, Position};

    use super::*;

    #[test]
    fn test_bytes_round_trip() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(0, 0), Digit::D5);
        grid.set(Position::new(8, 8), Digit::D9);

        let bytes = bytes_from_grid(&grid);
        assert_eq!(bytes[0], 5);
        assert_eq!(bytes[80], 9);
        assert_eq!(grid_from_bytes(&bytes).unwrap(), grid);
    }

    #[test]
    fn test_sparse_round_trip() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(4, 4), Digit::D1);

        let sparse = sparse_from_grid(&grid);
        assert_eq!(sparse.len(), 81);
        assert_eq!(sparse[40], Some(1));
        assert_eq!(sparse[0], None);
        assert_eq!(grid_from_sparse(&sparse).unwrap(), grid);
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(grid_from_bytes(&[0; 80]).is_err());
        assert!(grid_from_bytes(&[0; 82]).is_err());
        assert!(grid_from_sparse(&[None; 80]).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_value() {
        let mut cells = [0; 81];
        cells[7] = 10;
        assert!(grid_from_bytes(&cells).is_err());
        assert!(grid_from_sparse(&[Some(10); 81]).is_err());
    }
}
