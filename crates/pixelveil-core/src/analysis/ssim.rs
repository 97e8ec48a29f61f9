//! Structural similarity on the grayscale version of two images.
//!
//! Uniform 7x7 window, sample covariance, `K1 = 0.01`, `K2 = 0.03`, data range 255.
//! The SSIM map is averaged over all window positions that lie completely inside of
//! the image. For images smaller than the window it shrinks to the largest odd size
//! that still fits.

use crate::media::RawImage;

const WINDOW: usize = 7;
const K1: f64 = 0.01;
const K2: f64 = 0.03;
const DATA_RANGE: f64 = 255.0;

/// `round(0.299 R + 0.587 G + 0.114 B)`, single channel images are used as they are
pub fn grayscale(image: &RawImage) -> Vec<f64> {
    let channels = image.channels() as usize;
    image
        .samples()
        .chunks_exact(channels)
        .map(|p| {
            if channels >= 3 {
                (0.299 * p[0] as f64 + 0.587 * p[1] as f64 + 0.114 * p[2] as f64).round()
            } else {
                p[0] as f64
            }
        })
        .collect()
}

/// summed area table with a zero row and column in front
struct Integral {
    cols: usize,
    sums: Vec<f64>,
}

impl Integral {
    fn new(values: &[f64], rows: usize, cols: usize) -> Self {
        let stride = cols + 1;
        let mut sums = vec![0.0; (rows + 1) * stride];
        for r in 0..rows {
            let mut row_sum = 0.0;
            for c in 0..cols {
                row_sum += values[r * cols + c];
                sums[(r + 1) * stride + c + 1] = sums[r * stride + c + 1] + row_sum;
            }
        }

        Self { cols, sums }
    }

    /// sum of the `size x size` window with its top left corner at `(r, c)`
    fn window(&self, r: usize, c: usize, size: usize) -> f64 {
        let stride = self.cols + 1;
        let at = |row: usize, col: usize| self.sums[row * stride + col];
        at(r + size, c + size) - at(r, c + size) - at(r + size, c) + at(r, c)
    }
}

pub fn window_size(rows: usize, cols: usize) -> usize {
    let size = WINDOW.min(rows).min(cols);
    if size % 2 == 0 {
        size - 1
    } else {
        size
    }
}

/// SSIM of two equally sized grayscale planes
pub fn ssim_planes(x: &[f64], y: &[f64], rows: usize, cols: usize) -> f64 {
    let size = window_size(rows, cols);
    let np = (size * size) as f64;
    let cov_norm = if np > 1.0 { np / (np - 1.0) } else { 1.0 };
    let c1 = (K1 * DATA_RANGE).powi(2);
    let c2 = (K2 * DATA_RANGE).powi(2);

    let products = |f: fn(f64, f64) -> f64| -> Vec<f64> {
        x.iter().zip(y).map(|(&a, &b)| f(a, b)).collect()
    };
    let ix = Integral::new(x, rows, cols);
    let iy = Integral::new(y, rows, cols);
    let ixx = Integral::new(&products(|a, _| a * a), rows, cols);
    let iyy = Integral::new(&products(|_, b| b * b), rows, cols);
    let ixy = Integral::new(&products(|a, b| a * b), rows, cols);

    let mut total = 0.0;
    let mut count = 0usize;
    for r in 0..=rows - size {
        for c in 0..=cols - size {
            let ux = ix.window(r, c, size) / np;
            let uy = iy.window(r, c, size) / np;
            let uxx = ixx.window(r, c, size) / np;
            let uyy = iyy.window(r, c, size) / np;
            let uxy = ixy.window(r, c, size) / np;

            let vx = cov_norm * (uxx - ux * ux);
            let vy = cov_norm * (uyy - uy * uy);
            let vxy = cov_norm * (uxy - ux * uy);

            let numerator = (2.0 * ux * uy + c1) * (2.0 * vxy + c2);
            let denominator = (ux * ux + uy * uy + c1) * (vx + vy + c2);
            total += numerator / denominator;
            count += 1;
        }
    }

    total / count as f64
}

/// SSIM of two images with identical layout
pub fn ssim(original: &RawImage, stego: &RawImage) -> f64 {
    let (rows, cols) = (original.height() as usize, original.width() as usize);
    ssim_planes(&grayscale(original), &grayscale(stego), rows, cols)
}
