//! Dense row-major `f32` matrix: the bulk view of a descriptor set.

use serde::{Deserialize, Serialize};

use crate::descriptor::{Descriptor, DescriptorSet};
use crate::error::{DescriptorError, Result};

/// An `N x L` single-precision matrix, one descriptor per row.
///
/// Invariants: `cols > 0` and `data.len() == rows * cols`. Both are checked
/// on construction and on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMat32F")]
pub struct Mat32F {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

#[derive(Deserialize)]
struct RawMat32F {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl TryFrom<RawMat32F> for Mat32F {
    type Error = DescriptorError;

    fn try_from(raw: RawMat32F) -> Result<Self> {
        Mat32F::from_flat(raw.rows, raw.cols, raw.data)
    }
}

impl Mat32F {
    /// Zero-filled `rows x cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; len],
        })
    }

    /// Wraps a row-major buffer of `rows * cols` values.
    pub fn from_flat(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        if data.len() != len {
            return Err(DescriptorError::mismatch(len, data.len()));
        }
        Ok(Self { rows, cols, data })
    }

    /// Builds a matrix from descriptors that must all have length `cols`.
    ///
    /// Row `j` holds descriptor `j`. An empty slice yields a `0 x cols`
    /// matrix.
    pub(crate) fn from_rows(cols: usize, descriptors: &[Descriptor]) -> Result<Self> {
        let len = checked_len(descriptors.len(), cols)?;
        let mut data = Vec::with_capacity(len);
        for d in descriptors {
            if d.len() != cols {
                return Err(DescriptorError::mismatch(cols, d.len()));
            }
            data.extend_from_slice(d);
        }
        Ok(Self {
            rows: descriptors.len(),
            cols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Element at row `r`, column `c`.
    pub fn get(&self, r: usize, c: usize) -> Option<f32> {
        if r >= self.rows || c >= self.cols {
            return None;
        }
        Some(self.data[r * self.cols + c])
    }

    /// Row `r` as a slice.
    pub fn row(&self, r: usize) -> Option<&[f32]> {
        if r >= self.rows {
            return None;
        }
        let start = r * self.cols;
        Some(&self.data[start..start + self.cols])
    }

    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[f32]> + '_ {
        self.data.chunks_exact(self.cols)
    }

    /// The whole buffer, row-major.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Copies every row back out as an owned descriptor.
    pub fn to_descriptors(&self) -> DescriptorSet {
        self.iter_rows().map(<[f32]>::to_vec).collect()
    }
}

fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    if cols == 0 {
        return Err(DescriptorError::InvalidParameter(
            "matrix must have at least one column".to_string(),
        ));
    }
    rows.checked_mul(cols).ok_or_else(|| {
        DescriptorError::InvalidParameter(format!("{rows} x {cols} matrix is too large"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_keeps_order() {
        let ds = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        let m = Mat32F::from_rows(2, &ds).unwrap();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.row(1), Some(&[3.0_f32, 4.0][..]));
        assert_eq!(m.get(2, 0), Some(5.0));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.get(0, 2), None);
        assert_eq!(m.to_descriptors(), ds);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let ds = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(
            Mat32F::from_rows(2, &ds),
            Err(DescriptorError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn empty_input_has_shape_zero_by_cols() {
        let m = Mat32F::from_rows(128, &[]).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.cols(), 128);
        assert_eq!(m.iter_rows().len(), 0);
    }

    #[test]
    fn zero_columns_are_rejected() {
        assert!(matches!(
            Mat32F::zeros(3, 0),
            Err(DescriptorError::InvalidParameter(_))
        ));
    }

    #[test]
    fn from_flat_checks_length() {
        assert!(Mat32F::from_flat(2, 2, vec![0.0; 4]).is_ok());
        assert_eq!(
            Mat32F::from_flat(2, 2, vec![0.0; 3]),
            Err(DescriptorError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn serde_round_trip_and_validation() {
        let m = Mat32F::from_flat(1, 3, vec![0.5, -1.0, 2.0]).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let parsed: Mat32F = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, m);

        let bad = r#"{"rows":2,"cols":3,"data":[1.0]}"#;
        assert!(serde_json::from_str::<Mat32F>(bad).is_err());
    }
}
