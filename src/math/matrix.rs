use rand::prelude::*;
use serde::{Serialize, Deserialize};
use std::f64::consts::PI;
use std::ops::{Add, Mul};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    pub fn filled(rows: usize, cols: usize, value: f64) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![value; cols]; rows]
        }
    }

    /// Samples a single value from N(0, 1) using the Box-Muller transform.
    fn sample_standard_normal(rng: &mut ThreadRng) -> f64 {
        // Both uniforms in (0, 1] to avoid log(0).
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = 1.0 - rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    /// Xavier (Glorot) initialization: samples from N(0, sqrt(1 / rows)).
    ///
    /// Shape: (rows, cols). Weight matrices are stored input-major, so `rows`
    /// is the fan-in.
    pub fn xavier(rows: usize, cols: usize) -> Matrix {
        let mut rng = rand::thread_rng();
        let std_dev = (1.0 / rows.max(1) as f64).sqrt();
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = Matrix::sample_standard_normal(&mut rng) * std_dev;
            }
        }
        res
    }

    /// Single-row matrix wrapping `values`.
    pub fn row(values: &[f64]) -> Matrix {
        Matrix {
            rows: 1,
            cols: values.len(),
            data: vec![values.to_vec()]
        }
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix::from_data(
            self.data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect()
        )
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, rhs: &Matrix) -> Matrix {
        assert_eq!(self.rows, rhs.rows);
        assert_eq!(self.cols, rhs.cols);
        let data = self.data.iter().zip(rhs.data.iter())
            .map(|(row_a, row_b)| {
                row_a.iter().zip(row_b.iter()).map(|(x, y)| x * y).collect()
            })
            .collect();
        Matrix::from_data(data)
    }

    /// In-place element-wise sum; used to accumulate gradients.
    pub fn add_assign(&mut self, rhs: &Matrix) {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }
        for (row, rhs_row) in self.data.iter_mut().zip(rhs.data.iter()) {
            for (x, y) in row.iter_mut().zip(rhs_row.iter()) {
                *x += y;
            }
        }
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map(Vec::len).unwrap_or(0),
            data
        }
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        let mut res = self.clone();
        res.add_assign(rhs);
        res
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res =  Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for k in 0..self.cols {
                let a = self.data[i][k];
                if a == 0.0 {
                    continue;
                }
                for j in 0..res.cols {
                    res.data[i][j] += a * rhs.data[k][j];
                }
            }
        }

        res
    }
}
