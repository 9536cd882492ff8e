//! DCT 순변환/역변환 쌍
//!
//! 역변환은 비정규화 DCT-III에 2를 곱한 것으로 고정한다 (scipy.fftpack.idct와
//! 동일한 값). 순변환은 그 정확한 역인 비정규화 DCT-II를 N으로 나눈 것이다.
//! 이 규약은 시스템 전체에서 하나로 유지되어야 한다.

use ndarray::{Array, Array2};
use rustdct::DctPlanner;

/// DCT-II/DCT-III 기반 순·역변환 쌍
pub struct SpectralTransform {
    // planner는 재사용 가능하므로 변환기가 소유하는 것이 효율적
    planner: DctPlanner<f32>,
}

impl SpectralTransform {
    pub fn new() -> Self {
        Self {
            planner: DctPlanner::new(),
        }
    }

    /// 순변환: 비정규화 DCT-II ÷ N
    ///
    /// `forward(inverse(x)) == x`, `inverse(forward(x)) == x`가 성립한다.
    pub fn forward(&mut self, buffer: &mut [f32]) {
        let n = buffer.len();
        let dct = self.planner.plan_dct2(n);
        dct.process_dct2(buffer);

        let scale = 1.0 / n as f32;
        for v in buffer.iter_mut() {
            *v *= scale;
        }
    }

    /// 역변환: 비정규화 DCT-III × 2
    pub fn inverse(&mut self, buffer: &mut [f32]) {
        let n = buffer.len();
        let dct = self.planner.plan_dct3(n);
        dct.process_dct3(buffer);

        for v in buffer.iter_mut() {
            *v *= 2.0;
        }
    }

    /// 2차원 분리형 역변환: 행 방향 → 열 방향 순서로 1차원 역변환 적용
    pub fn inverse_2d(&mut self, field: &Array2<f32>) -> Array2<f32> {
        let mut result = field.clone();
        for mut row in result.rows_mut() {
            let mut row_vec = row.to_vec();
            self.inverse(&mut row_vec);
            row.assign(&Array::from(row_vec));
        }

        let mut transposed = result.t().to_owned();
        for mut col in transposed.rows_mut() {
            let mut col_vec = col.to_vec();
            self.inverse(&mut col_vec);
            col.assign(&Array::from(col_vec));
        }
        transposed.t().to_owned()
    }
}

impl Default for SpectralTransform {
    fn default() -> Self {
        Self::new()
    }
}
