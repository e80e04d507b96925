//! Matrix transposition implementations.

use crate::utils::VariantInfo;

/// Error returned when the rows of a matrix differ in length.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransposeError {
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Check that every row has as many columns as the first; returns the width.
pub fn check_rectangular<T>(matrix: &[Vec<T>]) -> Result<usize, TransposeError> {
    let expected = matrix.first().map_or(0, Vec::len);
    match matrix.iter().position(|row| row.len() != expected) {
        Some(row) => Err(TransposeError::Ragged {
            row,
            expected,
            found: matrix[row].len(),
        }),
        None => Ok(expected),
    }
}

/// Swap rows and columns by indexing: output `[c][r]` is input `[r][c]`.
///
/// ```
/// use practice_algo::matrix::transpose::transpose_original;
///
/// let matrix = vec![vec![1, 2, 3], vec![4, 5, 6]];
/// assert_eq!(transpose_original(&matrix), Ok(vec![vec![1, 4], vec![2, 5], vec![3, 6]]));
/// ```
pub fn transpose_original<T: Clone>(matrix: &[Vec<T>]) -> Result<Vec<Vec<T>>, TransposeError> {
    let cols = check_rectangular(matrix)?;

    let mut transposed = Vec::with_capacity(cols);
    for c in 0..cols {
        let mut column = Vec::with_capacity(matrix.len());
        for row in matrix {
            column.push(row[c].clone());
        }
        transposed.push(column);
    }
    Ok(transposed)
}

/// Row-major single pass appending each element to its column.
pub fn transpose_column_iter<T: Clone>(matrix: &[Vec<T>]) -> Result<Vec<Vec<T>>, TransposeError> {
    let cols = check_rectangular(matrix)?;

    let mut transposed: Vec<Vec<T>> = (0..cols).map(|_| Vec::with_capacity(matrix.len())).collect();
    for row in matrix {
        for (column, value) in transposed.iter_mut().zip(row) {
            column.push(value.clone());
        }
    }
    Ok(transposed)
}

pub type TransposeFn = fn(&[Vec<i64>]) -> Result<Vec<Vec<i64>>, TransposeError>;

pub fn available_variants() -> Vec<VariantInfo<TransposeFn>> {
    vec![
        VariantInfo {
            name: "original",
            description: "Column-major nested index loops",
            function: transpose_original::<i64>,
        },
        VariantInfo {
            name: "column_iter",
            description: "Row-major pass pushing into preallocated columns",
            function: transpose_column_iter::<i64>,
        },
    ]
}
