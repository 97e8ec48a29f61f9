//! Single level 2D Haar wavelet transform.
//!
//! Every 2x2 block `[[a, b], [c, d]]` of a plane maps to one coefficient of each subband:
//!
//! ```text
//! cA = (a + b + c + d) / 2     approximation
//! cH = (a + b - c - d) / 2     horizontal detail
//! cV = (a - b + c - d) / 2     vertical detail
//! cD = (a - b - c + d) / 2     diagonal detail
//! ```
//!
//! The basis is orthonormal, so the inverse uses the same matrix. Odd dimensions are
//! extended with zeros, all subbands are `⌈H/2⌉ x ⌈W/2⌉`.

use crate::error::VeilError;
use crate::result::Result;

/// a dense row major plane of `f64` values
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(VeilError::UnreadableImage(format!(
                "{} values cannot form a {rows}x{cols} plane",
                data.len()
            )));
        }

        Ok(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// value at `(row, col)`, zero outside of the plane
    fn get_or_zero(&self, row: usize, col: usize) -> f64 {
        if row < self.rows && col < self.cols {
            self.get(row, col)
        } else {
            0.0
        }
    }
}

/// the four subbands of a one level decomposition
#[derive(Debug, Clone, PartialEq)]
pub struct Subbands {
    pub approximation: Matrix,
    pub horizontal: Matrix,
    pub vertical: Matrix,
    pub diagonal: Matrix,
}

impl Subbands {
    pub fn rows(&self) -> usize {
        self.approximation.rows()
    }

    pub fn cols(&self) -> usize {
        self.approximation.cols()
    }
}

pub fn decompose(plane: &Matrix) -> Subbands {
    let rows = plane.rows().div_ceil(2);
    let cols = plane.cols().div_ceil(2);
    let mut bands = Subbands {
        approximation: Matrix::zeros(rows, cols),
        horizontal: Matrix::zeros(rows, cols),
        vertical: Matrix::zeros(rows, cols),
        diagonal: Matrix::zeros(rows, cols),
    };

    for i in 0..rows {
        for j in 0..cols {
            let a = plane.get_or_zero(2 * i, 2 * j);
            let b = plane.get_or_zero(2 * i, 2 * j + 1);
            let c = plane.get_or_zero(2 * i + 1, 2 * j);
            let d = plane.get_or_zero(2 * i + 1, 2 * j + 1);

            bands.approximation.set(i, j, (a + b + c + d) / 2.0);
            bands.horizontal.set(i, j, (a + b - c - d) / 2.0);
            bands.vertical.set(i, j, (a - b + c - d) / 2.0);
            bands.diagonal.set(i, j, (a - b - c + d) / 2.0);
        }
    }

    bands
}

/// inverse of [`decompose`], cropped to `height x width`
pub fn reconstruct(bands: &Subbands, height: usize, width: usize) -> Matrix {
    let mut plane = Matrix::zeros(height, width);

    for i in 0..bands.rows() {
        for j in 0..bands.cols() {
            let ca = bands.approximation.get(i, j);
            let ch = bands.horizontal.get(i, j);
            let cv = bands.vertical.get(i, j);
            let cd = bands.diagonal.get(i, j);

            let block = [
                (0, 0, (ca + ch + cv + cd) / 2.0),
                (0, 1, (ca + ch - cv - cd) / 2.0),
                (1, 0, (ca - ch + cv - cd) / 2.0),
                (1, 1, (ca - ch - cv + cd) / 2.0),
            ];
            for (di, dj, value) in block {
                let (row, col) = (2 * i + di, 2 * j + dj);
                if row < height && col < width {
                    plane.set(row, col, value);
                }
            }
        }
    }

    plane
}
