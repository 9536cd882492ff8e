//! 설정, 샘플 영역, 실행 통계 타입들

use anyhow::{bail, Result};

/// 1차원 재구성 설정
#[derive(Debug, Clone)]
pub struct ReconstructionConfig {
    pub num_samples: usize,
    pub learning_rate: f32,
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            num_samples: 100,
            learning_rate: 0.005,
            seed: None,
            show_progress: false,
        }
    }
}

/// 2차원 재구성 설정
///
/// `learning_rate` 기본값이 1차원보다 훨씬 작은 것은 갱신 크기가 두 기저
/// 차원에 비례해 커지기 때문이다.
#[derive(Debug, Clone)]
pub struct ImageReconstructionConfig {
    /// 전체 픽셀 대비 샘플 비율 (반복 횟수 = floor(rows * cols * sample_factor))
    pub sample_factor: f32,
    pub learning_rate: f32,
    pub seed: Option<u64>,
    /// 샘플 추첨을 제한할 영역 (None이면 전체 범위)
    pub region: Option<SampleRegion>,
    pub show_progress: bool,
}

impl Default for ImageReconstructionConfig {
    fn default() -> Self {
        Self {
            sample_factor: 0.5,
            learning_rate: 0.000005,
            seed: None,
            region: None,
            show_progress: true,
        }
    }
}

/// 샘플 추첨을 제한하는 반열린 직사각 영역 [row_start, row_end) × [col_start, col_end)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRegion {
    pub row_start: usize,
    pub row_end: usize,
    pub col_start: usize,
    pub col_end: usize,
}

impl SampleRegion {
    /// 전체 범위 영역
    pub fn full(rows: usize, cols: usize) -> Self {
        Self {
            row_start: 0,
            row_end: rows,
            col_start: 0,
            col_end: cols,
        }
    }

    /// 영역이 비어있지 않고 주어진 크기 안에 들어가는지 검증
    pub fn validate(&self, rows: usize, cols: usize) -> Result<()> {
        if self.row_start >= self.row_end || self.col_start >= self.col_end {
            bail!("샘플 영역이 비어 있습니다: {:?}", self);
        }
        if self.row_end > rows || self.col_end > cols {
            bail!("샘플 영역이 {}x{} 범위를 벗어납니다: {:?}", rows, cols, self);
        }
        Ok(())
    }

    pub fn contains(&self, r: usize, c: usize) -> bool {
        r >= self.row_start && r < self.row_end && c >= self.col_start && c < self.col_end
    }
}

/// 재구성 실행 통계
#[derive(Debug, Clone)]
pub struct ReconstructionStats {
    pub num_samples: usize,
    pub initial_rmse: f32,
    pub final_rmse: f32,
    pub elapsed_ms: f64,
}
