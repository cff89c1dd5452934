use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
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

    /// Fills every entry with an independent draw from U[0, 1).
    pub fn uniform<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>();
            }
        }

        res
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row vector times matrix: `out[i] = sum_j v[j] * self[j][i]`.
    ///
    /// `v` must have `rows` entries; the result has `cols` entries.
    pub fn left_mul(&self, v: &[f64]) -> Vec<f64> {
        assert_eq!(v.len(), self.rows, "vector length must match matrix rows");

        let mut res = vec![0.0; self.cols];
        for i in 0..self.cols {
            let mut sum = 0.0;
            for j in 0..self.rows {
                sum += v[j] * self.data[j][i];
            }
            res[i] = sum;
        }

        res
    }

    /// Matrix times column vector: `out[i] = sum_k self[i][k] * v[k]`.
    pub fn mul_vec(&self, v: &[f64]) -> Vec<f64> {
        assert_eq!(v.len(), self.cols, "vector length must match matrix cols");

        self.data.iter()
            .map(|row| row.iter().zip(v.iter()).map(|(w, x)| w * x).sum())
            .collect()
    }

    /// In-place `self[j][i] += scale * a[j] * b[i]`.
    pub fn add_scaled_outer(&mut self, a: &[f64], b: &[f64], scale: f64) {
        assert_eq!(a.len(), self.rows, "left factor must match matrix rows");
        assert_eq!(b.len(), self.cols, "right factor must match matrix cols");

        for i in 0..self.cols {
            for j in 0..self.rows {
                self.data[j][i] += scale * b[i] * a[j];
            }
        }
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, |row| row.len()),
            data
        }
    }
}
