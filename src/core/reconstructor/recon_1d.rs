//! 1차원 희소 샘플 재구성기

use ndarray::Array1;

use crate::core::basis::BasisTable;
use crate::core::transform::SpectralTransform;

/// 1차원 재구성기: 계수장과 샘플 통합 단계
///
/// 계수장은 0으로 초기화되며 `integrate_sample`에 의해서만 갱신된다.
pub struct SSRReconstructor1D {
    pub coeffs: Array1<f32>,
    pub learning_rate: f32,
    basis: BasisTable,
    transform: SpectralTransform,
}

impl SSRReconstructor1D {
    /// 길이 n인 신호용 재구성기 생성 (n > 0 전제)
    pub fn new(n: usize, learning_rate: f32) -> Self {
        Self {
            coeffs: Array1::zeros(n),
            learning_rate,
            basis: BasisTable::new(n),
            transform: SpectralTransform::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// 샘플 하나를 계수장에 통합
    ///
    /// 현재 계수장의 역변환에서 샘플 위치의 잔차를 구하고, 해당 위치의
    /// 기저값 방향으로 계수장을 이동시킨다. 매 호출마다 전체 역변환을
    /// 다시 계산한다 (신호 길이 N당 O(N) — 작은 데모 신호 기준).
    /// 범위 밖 index는 전제조건 위반으로 패닉한다.
    pub fn integrate_sample(&mut self, index: usize, value: f32) {
        let approx = self.reconstruct();
        let delta = value - approx[index];

        let lr = self.learning_rate;
        let basis_values = self.basis.column(index);
        for (c, b) in self.coeffs.iter_mut().zip(basis_values.iter()) {
            *c += lr * delta * b;
        }
    }

    /// 현재 계수장의 역변환 (신호 공간 재구성)
    pub fn reconstruct(&mut self) -> Array1<f32> {
        let mut buffer = self.coeffs.to_vec();
        self.transform.inverse(&mut buffer);
        Array1::from(buffer)
    }
}
