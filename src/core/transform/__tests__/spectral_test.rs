use crate::core::transform::SpectralTransform;
use approx::assert_abs_diff_eq;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn 순변환_역변환_왕복_테스트() {
    let mut transform = SpectralTransform::new();
    let mut rng = StdRng::seed_from_u64(7);
    let original: Vec<f32> = (0..64).map(|_| rng.gen_range(-1.0..1.0)).collect();

    let mut buffer = original.clone();
    transform.forward(&mut buffer);
    transform.inverse(&mut buffer);
    for (a, b) in original.iter().zip(buffer.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-4);
    }

    let mut buffer = original.clone();
    transform.inverse(&mut buffer);
    transform.forward(&mut buffer);
    for (a, b) in original.iter().zip(buffer.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-4);
    }
}

#[test]
fn 역변환_직류_기준값_테스트() {
    // 직류 계수 1의 역변환은 모든 위치에서 1 (scipy.fftpack.idct 규약)
    let mut transform = SpectralTransform::new();
    let mut buffer = vec![0.0f32; 8];
    buffer[0] = 1.0;
    transform.inverse(&mut buffer);
    for v in &buffer {
        assert_abs_diff_eq!(*v, 1.0, epsilon = 1e-5);
    }
}

#[test]
fn 분리형_역변환_외적_일치_테스트() {
    let (rows, cols, k, l) = (6, 5, 2, 3);
    let mut transform = SpectralTransform::new();

    let mut field = Array2::<f32>::zeros((rows, cols));
    field[[k, l]] = 1.0;
    let result = transform.inverse_2d(&field);

    let mut row_vals = vec![0.0f32; rows];
    row_vals[k] = 1.0;
    transform.inverse(&mut row_vals);
    let mut col_vals = vec![0.0f32; cols];
    col_vals[l] = 1.0;
    transform.inverse(&mut col_vals);

    for i in 0..rows {
        for j in 0..cols {
            assert_abs_diff_eq!(result[[i, j]], row_vals[i] * col_vals[j], epsilon = 1e-4);
        }
    }
}
