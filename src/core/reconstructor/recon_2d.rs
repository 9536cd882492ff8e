//! 2차원 분리형 희소 샘플 재구성기

use ndarray::Array2;

use crate::core::basis::BasisTable;
use crate::core::transform::SpectralTransform;

/// 2차원 재구성기: 행/열 기저표와 계수장, 외적 스크래치 버퍼
///
/// 외적 버퍼는 재구성기가 소유하며 호출마다 전체를 덮어쓴다. 전역 버퍼를
/// 쓰지 않으므로 재구성기 인스턴스 단위로 재진입 가능하다.
pub struct SSRReconstructor2D {
    pub coeffs: Array2<f32>,
    pub learning_rate: f32,
    row_basis: BasisTable,
    col_basis: BasisTable,
    transform: SpectralTransform,
    scratch: Array2<f32>,
}

impl SSRReconstructor2D {
    /// rows×cols 휘도장용 재구성기 생성 (rows, cols > 0 전제)
    pub fn new(rows: usize, cols: usize, learning_rate: f32) -> Self {
        Self {
            coeffs: Array2::zeros((rows, cols)),
            learning_rate,
            row_basis: BasisTable::new(rows),
            col_basis: BasisTable::new(cols),
            transform: SpectralTransform::new(),
            scratch: Array2::zeros((rows, cols)),
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.coeffs.dim()
    }

    /// 샘플 하나를 계수장에 통합
    ///
    /// 잔차는 원 참조 구현을 그대로 따라 계수장 전체와 외적 기저의 원소별
    /// 곱에 대해 계산한다. 1차원 형태의 단일점 평가와 다른 근사식이며,
    /// 정확한 수렴은 보장되지 않는다. 범위 밖 point는 전제조건 위반으로 패닉.
    pub fn integrate_sample(&mut self, point: (usize, usize), value: f32) {
        let (r, c) = point;
        let row_values = self.row_basis.column(r);
        let col_values = self.col_basis.column(c);

        // scratch[i][j] = row_values[i] * col_values[j]
        for (i, rv) in row_values.iter().enumerate() {
            for (j, cv) in col_values.iter().enumerate() {
                self.scratch[[i, j]] = rv * cv;
            }
        }

        let lr = self.learning_rate;
        for (idx, w) in self.coeffs.indexed_iter_mut() {
            let b = self.scratch[idx];
            let delta = value - *w * b;
            *w += lr * delta * b;
        }
    }

    /// 현재 계수장의 분리형 역변환 (행 → 열 순서)
    ///
    /// 표시용 [0,1] 클램핑은 호출자 몫이다.
    pub fn reconstruct(&mut self) -> Array2<f32> {
        self.transform.inverse_2d(&self.coeffs)
    }
}
