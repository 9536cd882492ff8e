//! 실험용 신호/휘도장 생성기

use anyhow::{bail, Result};
use ndarray::{Array1, Array2};

/// 0..1 구간을 균등 분할한 선형 신호
pub fn linspace_signal(n: usize) -> Array1<f32> {
    Array1::linspace(0.0, 1.0, n)
}

/// 이미 디코딩된 8비트 그레이스케일 바이트를 [0,1] 휘도장으로 변환
///
/// 이미지 컨테이너 포맷 디코딩은 호출자(외부 협력자) 몫이다.
pub fn luma_from_bytes(bytes: &[u8], rows: usize, cols: usize) -> Result<Array2<f32>> {
    if bytes.len() != rows * cols {
        bail!("휘도 데이터 크기 불일치: {} vs {}x{}", bytes.len(), rows, cols);
    }
    let data: Vec<f32> = bytes.iter().map(|&b| b as f32 / 255.0).collect();
    Ok(Array2::from_shape_vec((rows, cols), data)?)
}

/// 대각 방향 그라디언트 패턴
pub fn gradient_luma(rows: usize, cols: usize) -> Array2<f32> {
    let span = (rows + cols).saturating_sub(2).max(1) as f32;
    Array2::from_shape_fn((rows, cols), |(r, c)| (r + c) as f32 / span)
}

/// 중앙 가우시안 패턴
pub fn gaussian_luma(rows: usize, cols: usize) -> Array2<f32> {
    Array2::from_shape_fn((rows, cols), |(r, c)| {
        let y = r as f32 / rows as f32 - 0.5;
        let x = c as f32 / cols as f32 - 0.5;
        (-2.0 * (x * x + y * y)).exp()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn 선형_신호_테스트() {
        let signal = linspace_signal(100);
        assert_eq!(signal.len(), 100);
        assert_eq!(signal[0], 0.0);
        assert_eq!(signal[99], 1.0);
    }

    #[test]
    fn 휘도_정규화_테스트() {
        let luma = luma_from_bytes(&[0, 128, 255, 51], 2, 2).unwrap();
        assert_eq!(luma[[0, 0]], 0.0);
        assert_eq!(luma[[0, 1]], 128.0 / 255.0);
        assert_eq!(luma[[1, 0]], 1.0);
        assert_eq!(luma[[1, 1]], 0.2);

        // 크기 불일치는 오류
        assert!(luma_from_bytes(&[0, 1, 2], 2, 2).is_err());
    }

    #[test]
    fn 합성_패턴_범위_테스트() {
        for v in gradient_luma(16, 16).iter().chain(gaussian_luma(16, 16).iter()) {
            assert!(*v >= 0.0 && *v <= 1.0);
        }
    }
}
