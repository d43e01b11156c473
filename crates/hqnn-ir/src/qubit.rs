//! Grid-addressed qubits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A qubit addressed by its position on a 2D grid.
///
/// Ordering is row-major, so sorting a set of grid qubits yields the same
/// sequence as [`GridQubit::rect`]. Negative coordinates are allowed and are
/// typically used for ancilla or readout qubits placed off the data grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridQubit {
    /// Row coordinate.
    pub row: i32,
    /// Column coordinate.
    pub col: i32,
}

impl GridQubit {
    /// Create a qubit at `(row, col)`.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// All qubits of a `rows` x `cols` rectangle anchored at `(0, 0)`, row-major.
    pub fn rect(rows: u32, cols: u32) -> Vec<GridQubit> {
        Self::rect_at(0, 0, rows, cols)
    }

    /// All qubits of a `rows` x `cols` rectangle anchored at `(top, left)`, row-major.
    pub fn rect_at(top: i32, left: i32, rows: u32, cols: u32) -> Vec<GridQubit> {
        let mut qubits = Vec::with_capacity(rows as usize * cols as usize);
        for r in 0..rows {
            for c in 0..cols {
                qubits.push(GridQubit::new(top + r as i32, left + c as i32));
            }
        }
        qubits
    }

    /// All qubits of an `n` x `n` square anchored at `(0, 0)`.
    pub fn square(n: u32) -> Vec<GridQubit> {
        Self::rect(n, n)
    }

    /// Check whether this qubit lies inside the `rows` x `cols` rectangle at the origin.
    pub fn is_within(&self, rows: u32, cols: u32) -> bool {
        self.row >= 0 && self.col >= 0 && (self.row as u32) < rows && (self.col as u32) < cols
    }
}

impl fmt::Display for GridQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for GridQubit {
    fn from((row, col): (i32, i32)) -> Self {
        GridQubit::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_qubit_display() {
        assert_eq!(format!("{}", GridQubit::new(0, 1)), "q(0, 1)");
        assert_eq!(format!("{}", GridQubit::new(-1, -1)), "q(-1, -1)");
    }

    #[test]
    fn test_rect_is_row_major() {
        let qubits = GridQubit::rect(2, 3);
        assert_eq!(qubits.len(), 6);
        assert_eq!(qubits[0], GridQubit::new(0, 0));
        assert_eq!(qubits[2], GridQubit::new(0, 2));
        assert_eq!(qubits[3], GridQubit::new(1, 0));

        let mut sorted = qubits.clone();
        sorted.sort();
        assert_eq!(sorted, qubits);
    }

    #[test]
    fn test_rect_empty() {
        assert!(GridQubit::rect(0, 4).is_empty());
        assert!(GridQubit::rect(4, 0).is_empty());
    }

    #[test]
    fn test_square_and_offset() {
        assert_eq!(GridQubit::square(4).len(), 16);
        let shifted = GridQubit::rect_at(-2, 3, 1, 2);
        assert_eq!(shifted, vec![GridQubit::new(-2, 3), GridQubit::new(-2, 4)]);
    }

    #[test]
    fn test_is_within() {
        assert!(GridQubit::new(3, 3).is_within(4, 4));
        assert!(!GridQubit::new(4, 0).is_within(4, 4));
        assert!(!GridQubit::new(-1, -1).is_within(4, 4));
    }
}
