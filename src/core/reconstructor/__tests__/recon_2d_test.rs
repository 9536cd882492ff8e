use crate::core::basis::BasisTable;
use crate::core::reconstructor::SSRReconstructor2D;
use approx::assert_abs_diff_eq;

#[test]
fn 영휘도_고정점_테스트() {
    let mut recon = SSRReconstructor2D::new(8, 6, 0.000005);
    for r in 0..8 {
        for c in 0..6 {
            recon.integrate_sample((r, c), 0.0);
        }
    }
    for w in recon.coeffs.iter() {
        assert_eq!(*w, 0.0);
    }
    for v in recon.reconstruct().iter() {
        assert_eq!(*v, 0.0);
    }
}

#[test]
fn 첫_갱신_외적_일치_테스트() {
    // 0 계수장에서 한 번 갱신하면 coeffs == lr * value * outer(row_basis, col_basis)
    let (rows, cols) = (8, 6);
    let lr = 0.000005f32;
    let mut recon = SSRReconstructor2D::new(rows, cols, lr);
    recon.integrate_sample((3, 2), 0.7);

    let row_basis = BasisTable::new(rows);
    let col_basis = BasisTable::new(cols);
    for i in 0..rows {
        for j in 0..cols {
            let b = row_basis.matrix[[i, 3]] * col_basis.matrix[[j, 2]];
            assert_abs_diff_eq!(recon.coeffs[[i, j]], lr * 0.7 * b, epsilon = 1e-10);
        }
    }
}

#[test]
fn 스크래치_버퍼_덮어쓰기_테스트() {
    // 연속 호출에서 외적 버퍼가 누적되지 않고 매번 전체가 덮어써지는지 확인
    let (rows, cols) = (5, 4);
    let lr = 0.001f32;
    let mut recon = SSRReconstructor2D::new(rows, cols, lr);
    recon.integrate_sample((1, 1), 0.4);
    recon.integrate_sample((4, 2), 0.9);

    // 동일한 갱신 규칙의 독립 구현과 비교
    let row_basis = BasisTable::new(rows);
    let col_basis = BasisTable::new(cols);
    let mut expected = vec![vec![0.0f32; cols]; rows];
    for &(r, c, v) in &[(1usize, 1usize, 0.4f32), (4, 2, 0.9)] {
        for i in 0..rows {
            for j in 0..cols {
                let b = row_basis.matrix[[i, r]] * col_basis.matrix[[j, c]];
                let delta = v - expected[i][j] * b;
                expected[i][j] += lr * delta * b;
            }
        }
    }
    for i in 0..rows {
        for j in 0..cols {
            assert_abs_diff_eq!(recon.coeffs[[i, j]], expected[i][j], epsilon = 1e-6);
        }
    }
}

#[test]
#[should_panic]
fn 범위_밖_좌표_패닉_테스트() {
    let mut recon = SSRReconstructor2D::new(4, 4, 0.001);
    recon.integrate_sample((4, 0), 0.5);
}
