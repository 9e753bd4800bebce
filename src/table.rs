//! Ordered numeric sample tables as produced by slice files or inline data.

use ndarray::{s, Array2, ArrayView1, Axis};

/// Rectangular table of samples, one row per point along the integration path.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionTable {
    /// Row-major sample storage.
    data: Array2<f64>,
}

impl SectionTable {
    /// Wrap an existing array.
    #[must_use]
    pub fn new(data: Array2<f64>) -> Self {
        Self { data }
    }

    /// Build a table from rows of equal width.
    ///
    /// Returns `None` when the rows do not all share the width of the first row.
    ///
    /// # Examples
    /// ```
    /// use aerotools::SectionTable;
    ///
    /// let table = SectionTable::from_rows(&[[1.0, 0.0], [0.0, -1.0]]).expect("uniform rows");
    /// assert_eq!(table.len(), 2);
    /// assert!(SectionTable::from_rows(&[vec![1.0, 0.0], vec![0.0]]).is_none());
    /// ```
    #[must_use]
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Option<Self> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.iter().any(|row| row.as_ref().len() != width) {
            return None;
        }
        Some(Self::from_uniform_rows(rows, width))
    }

    /// Build a table from rows already known to share `width`.
    pub(crate) fn from_uniform_rows<R: AsRef<[f64]>>(rows: &[R], width: usize) -> Self {
        let mut data = Array2::zeros((rows.len(), width));
        for (mut target, source) in data.rows_mut().into_iter().zip(rows) {
            target.assign(&ArrayView1::from(source.as_ref()));
        }
        Self { data }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    /// Whether the table holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    /// Borrow the underlying array.
    #[must_use]
    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    /// Borrow one column, or `None` when it is out of range.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.width()).then(|| self.data.column(index))
    }

    /// Copy one column into a vector.
    #[must_use]
    pub fn column_vec(&self, index: usize) -> Option<Vec<f64>> {
        self.column(index).map(|column| column.to_vec())
    }

    /// Return a copy without the rows that contain a NaN in any column.
    #[must_use]
    pub fn without_nan_rows(&self) -> Self {
        let keep: Vec<usize> = self
            .data
            .axis_iter(Axis(0))
            .enumerate()
            .filter(|(_, row)| !row.iter().any(|value| value.is_nan()))
            .map(|(idx, _)| idx)
            .collect();
        Self {
            data: self.data.select(Axis(0), &keep),
        }
    }

    /// Return a copy with the row order reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            data: self.data.slice(s![..;-1, ..]).to_owned(),
        }
    }
}

impl From<Array2<f64>> for SectionTable {
    fn from(value: Array2<f64>) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn nan_rows_are_masked() {
        let table = SectionTable::new(array![
            [1.0, 0.1],
            [f64::NAN, 0.2],
            [0.5, f64::NAN],
            [0.0, -0.3]
        ]);
        let cleaned = table.without_nan_rows();
        assert_eq!(cleaned.data(), &array![[1.0, 0.1], [0.0, -0.3]]);
    }

    #[test]
    fn columns_out_of_range_are_none() {
        let table = SectionTable::from_rows(&[[0.0, 1.0, 2.0]]).expect("uniform rows");
        assert_eq!(table.width(), 3);
        assert_eq!(table.column_vec(2), Some(vec![2.0]));
        assert!(table.column(3).is_none());
    }

    #[test]
    fn reversal_flips_row_order() {
        let table = SectionTable::from_rows(&[[1.0, 0.0], [0.5, 0.2], [0.0, 0.4]])
            .expect("uniform rows");
        let reversed = table.reversed();
        assert_eq!(reversed.column_vec(0), Some(vec![0.0, 0.5, 1.0]));
        assert_eq!(reversed.column_vec(1), Some(vec![0.4, 0.2, 0.0]));
    }

    #[test]
    fn empty_table_has_no_width() {
        let rows: [[f64; 2]; 0] = [];
        let table = SectionTable::from_rows(&rows).expect("empty input is uniform");
        assert!(table.is_empty());
        assert_eq!(table.width(), 0);
    }
}
