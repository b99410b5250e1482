//! Dense row-major matrix of optional cells, convertible to and from the
//! sparse `(row, col, value)` form consumed by grids.
use itertools::iproduct;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Shape mismatch: matrix is {expected:?} but the transform is {found:?}.")]
pub struct ShapeMismatchError {
    pub expected: (usize, usize),
    pub found: (usize, usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    nrows: usize,
    ncols: usize,
    cells: Vec<Option<T>>,
}

impl<T> Matrix<T> {
    pub fn empty(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            cells: std::iter::repeat_with(|| None).take(nrows * ncols).collect(),
        }
    }

    /// Builds a matrix from nested rows. Short rows are padded with empty
    /// cells up to the widest row.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let nrows = rows.len();
        let ncols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut cells = Vec::with_capacity(nrows * ncols);
        for row in rows {
            let len = row.len();
            cells.extend(row.into_iter().map(Some));
            cells.extend(std::iter::repeat_with(|| None).take(ncols - len));
        }
        Self {
            nrows,
            ncols,
            cells,
        }
    }

    pub fn from_fn<F>(nrows: usize, ncols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let cells = iproduct!(0..nrows, 0..ncols)
            .map(|(row, col)| Some(f(row, col)))
            .collect();
        Self {
            nrows,
            ncols,
            cells,
        }
    }

    /// Rebuilds a dense matrix from sparse triples. Cells outside the shape
    /// are dropped; a repeated position keeps the last value.
    pub fn from_sparse<I>(nrows: usize, ncols: usize, triples: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::empty(nrows, ncols);
        for (row, col, value) in triples {
            if row < nrows && col < ncols {
                matrix.cells[row * ncols + col] = Some(value);
            }
        }
        matrix
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.nrows || col >= self.ncols {
            return None;
        }
        self.cells[row * self.ncols + col].as_ref()
    }

    /// Populated cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let ncols = self.ncols.max(1);
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.as_ref().map(|value| (i / ncols, i % ncols, value)))
    }

    pub fn map<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            nrows: self.nrows,
            ncols: self.ncols,
            cells: self.cells.iter().map(|cell| cell.as_ref().map(&mut f)).collect(),
        }
    }

    /// Applies a same-shaped table of functions cell by cell. Empty cells
    /// stay empty.
    pub fn apply<U, F>(&self, fns: &[Vec<F>]) -> Result<Matrix<U>, ShapeMismatchError>
    where
        F: Fn(&T) -> U,
    {
        let found_cols = fns.iter().map(Vec::len).max().unwrap_or(0);
        let ragged = fns.iter().any(|row| row.len() != found_cols);
        if fns.len() != self.nrows || found_cols != self.ncols || ragged {
            return Err(ShapeMismatchError {
                expected: self.shape(),
                found: (fns.len(), found_cols),
            });
        }
        let cells = iproduct!(0..self.nrows, 0..self.ncols)
            .map(|(row, col)| {
                self.cells[row * self.ncols + col]
                    .as_ref()
                    .map(|value| fns[row][col](value))
            })
            .collect();
        Ok(Matrix {
            nrows: self.nrows,
            ncols: self.ncols,
            cells,
        })
    }
}

impl<T: Clone> Matrix<T> {
    /// Populated cells as `(row, col, value)` triples, in row-major order.
    pub fn to_sparse(&self) -> Vec<(usize, usize, T)> {
        self.iter()
            .map(|(row, col, value)| (row, col, value.clone()))
            .collect()
    }
}

impl<T> From<Vec<Vec<T>>> for Matrix<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Self::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_pads_ragged_rows() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4]]);
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.get(1, 0), Some(&4));
        assert_eq!(m.get(1, 2), None);
    }

    #[test]
    fn test_sparse_round_trip_keeps_holes() {
        let mut m = Matrix::from_fn(3, 3, |row, col| row * 3 + col);
        m.cells[4] = None;

        let sparse = m.to_sparse();
        assert_eq!(sparse.len(), 8);
        assert!(!sparse.iter().any(|&(row, col, _)| row == 1 && col == 1));
        assert_eq!(sparse[5], (2, 0, 6));

        let rebuilt = Matrix::from_sparse(3, 3, sparse);
        assert_eq!(rebuilt, m);
    }

    #[test]
    fn test_apply_maps_each_cell() {
        let colors = Matrix::from_rows(vec![vec!["red", "green"], vec!["blue", "gray"]]);
        let upper = |s: &&str| s.to_uppercase();
        let len = |s: &&str| s.len().to_string();
        let fns: Vec<Vec<Box<dyn Fn(&&str) -> String>>> = vec![
            vec![Box::new(upper), Box::new(len)],
            vec![Box::new(len), Box::new(upper)],
        ];
        let out = colors.apply(&fns).unwrap();
        assert_eq!(out.get(0, 0).map(String::as_str), Some("RED"));
        assert_eq!(out.get(0, 1).map(String::as_str), Some("5"));
        assert_eq!(out.get(1, 1).map(String::as_str), Some("GRAY"));
    }

    #[test]
    fn test_apply_rejects_other_shapes() {
        let m = Matrix::from_fn(2, 2, |_, _| 1);
        let double = |v: &i32| v * 2;
        let err = m.apply(&[vec![double, double]]).unwrap_err();
        assert_eq!(err.expected, (2, 2));
        assert_eq!(err.found, (1, 2));
    }
}
