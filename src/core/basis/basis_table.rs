//! 역변환 기저 행렬 사전계산

use ndarray::{Array, Array2, ArrayView1, Axis};
use rayon::prelude::*;
use rustdct::DctPlanner;

/// 역변환 기저표
///
/// `matrix`의 i번 행은 i번 계수 단위 벡터의 역변환이다. 따라서 `column(p)`는
/// 샘플 위치 p에서 모든 계수가 기여하는 값, 즉 역변환의 야코비안 열을 준다.
/// 런당 한 번만 계산하고 모든 샘플 갱신에서 재사용한다.
pub struct BasisTable {
    pub matrix: Array2<f32>,
}

impl BasisTable {
    /// N×N 기저 행렬 생성
    ///
    /// 역변환 규약은 `SpectralTransform::inverse`와 동일 (DCT-III × 2).
    /// 행 단위 역변환만 병렬 처리하며, 샘플 갱신 루프는 직렬로 유지된다.
    pub fn new(n: usize) -> Self {
        let mut planner = DctPlanner::new();
        let idct = planner.plan_dct3(n);

        let mut matrix = Array2::<f32>::zeros((n, n));
        matrix
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(i, mut row)| {
                let mut unit = vec![0.0f32; n];
                unit[i] = 1.0;
                idct.process_dct3(&mut unit);
                for v in unit.iter_mut() {
                    *v *= 2.0;
                }
                row.assign(&Array::from(unit));
            });

        Self { matrix }
    }

    /// 샘플 위치 p에서의 기저값 열
    pub fn column(&self, p: usize) -> ArrayView1<f32> {
        self.matrix.column(p)
    }

    pub fn len(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.nrows() == 0
    }
}
