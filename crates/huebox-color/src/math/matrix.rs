//! Row-major 3×3 matrix used by every linear step of the conversion pipeline.

/// A 3×3 matrix of `f32` values stored row-major.
///
/// Element `(x, y)` is column `x` of row `y`. All operations return a new
/// matrix; the `*_in_place` variants are the only ones that mutate and have
/// to be requested explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    row_major: [f32; 9],
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);

    /// Create a matrix from its nine values, listed row by row.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        v00: f32,
        v10: f32,
        v20: f32,
        v01: f32,
        v11: f32,
        v21: f32,
        v02: f32,
        v12: f32,
        v22: f32,
    ) -> Self {
        Self {
            row_major: [v00, v10, v20, v01, v11, v21, v02, v12, v22],
        }
    }

    #[inline]
    pub const fn from_row_major(row_major: [f32; 9]) -> Self {
        Self { row_major }
    }

    #[inline]
    pub const fn row_major(&self) -> [f32; 9] {
        self.row_major
    }

    /// Element at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.row_major[y * 3 + x]
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, value: f32) {
        self.row_major[y * 3 + x] = value;
    }

    /// Matrix-vector product `self · (v0, v1, v2)`.
    #[inline]
    pub fn dot_vector(&self, v0: f32, v1: f32, v2: f32) -> [f32; 3] {
        let m = &self.row_major;
        [
            m[0] * v0 + m[1] * v1 + m[2] * v2,
            m[3] * v0 + m[4] * v1 + m[5] * v2,
            m[6] * v0 + m[7] * v1 + m[8] * v2,
        ]
    }

    /// Matrix product `self · other`.
    pub fn dot(&self, other: &Matrix) -> Matrix {
        let mut out = Matrix::from_row_major([0.0; 9]);
        for y in 0..3 {
            for x in 0..3 {
                let value = (0..3).map(|i| self.get(i, y) * other.get(x, i)).sum::<f32>();
                out.set(x, y, value);
            }
        }
        out
    }

    /// Right-multiply by `diag(d0, d1, d2)`, scaling each column.
    pub fn dot_diagonal(&self, d0: f32, d1: f32, d2: f32) -> Matrix {
        let d = [d0, d1, d2];
        let mut out = *self;
        for y in 0..3 {
            for (x, scale) in d.iter().enumerate() {
                out.set(x, y, self.get(x, y) * scale);
            }
        }
        out
    }

    pub fn scalar_div(&self, divisor: f32) -> Matrix {
        let mut out = *self;
        out.scalar_div_in_place(divisor);
        out
    }

    pub fn scalar_div_in_place(&mut self, divisor: f32) {
        for v in self.row_major.iter_mut() {
            *v /= divisor;
        }
    }

    /// Closed-form inverse via the adjugate and determinant.
    ///
    /// The arithmetic runs in `f64` to limit cancellation error. Singular
    /// matrices are not guarded and produce non-finite values.
    pub fn inverse(&self) -> Matrix {
        let mut out = *self;
        out.invert_in_place();
        out
    }

    pub fn invert_in_place(&mut self) {
        let g = |x: usize, y: usize| self.get(x, y) as f64;
        let a = g(0, 0);
        let b = g(1, 0);
        let c = g(2, 0);
        let d = g(0, 1);
        let e = g(1, 1);
        let f = g(2, 1);
        let gg = g(0, 2);
        let h = g(1, 2);
        let i = g(2, 2);

        let cof_a = e * i - h * f;
        let cof_b = h * c - b * i;
        let cof_c = b * f - e * c;
        let det = a * cof_a + d * cof_b + gg * cof_c;

        let values = [
            cof_a / det,
            cof_b / det,
            cof_c / det,
            (gg * f - d * i) / det,
            (a * i - gg * c) / det,
            (d * c - a * f) / det,
            (d * h - gg * e) / det,
            (gg * b - a * h) / det,
            (a * e - d * b) / det,
        ];
        self.row_major = values.map(|v| v as f32);
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}
