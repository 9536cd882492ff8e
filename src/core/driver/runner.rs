//! 재구성 드라이버
//!
//! 샘플 위치를 균등 추첨해 통합 단계에 공급하는 루프. 루프가 끝나면
//! 계수장을 한 번 더 역변환해 최종 재구성을 만든다. 루프는 완전 직렬이다.

use std::time::Instant;

use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::reconstructor::{SSRReconstructor1D, SSRReconstructor2D};
use crate::core::types::{
    ImageReconstructionConfig, ReconstructionConfig, ReconstructionStats, SampleRegion,
};

/// 드라이버 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Done,
}

/// 두 배열 간 RMSE
pub fn rmse<D: ndarray::Dimension>(a: &ndarray::Array<f32, D>, b: &ndarray::Array<f32, D>) -> f32 {
    if a.len() != b.len() {
        return f32::INFINITY;
    }
    let mse = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f32>()
        / a.len() as f32;
    mse.sqrt()
}

/// 1차원 재구성 결과
pub struct ReconstructionResult1D {
    pub reconstruction: Array1<f32>,
    pub stats: ReconstructionStats,
}

/// 2차원 재구성 결과
pub struct ReconstructionResult2D {
    pub reconstruction: Array2<f32>,
    pub stats: ReconstructionStats,
}

/// 1차원 신호 재구성 드라이버
pub struct ReconstructionDriver {
    pub state: RunState,
    pub samples_taken: usize,
    pub num_samples: usize,
    pub reconstructor: SSRReconstructor1D,
    signal: Array1<f32>,
    rng: StdRng,
    show_progress: bool,
}

impl ReconstructionDriver {
    pub fn new(signal: ArrayView1<f32>, config: &ReconstructionConfig) -> Result<Self> {
        if signal.is_empty() {
            bail!("신호 길이는 양수여야 합니다");
        }
        if config.num_samples == 0 {
            bail!("샘플 개수는 양수여야 합니다");
        }

        Ok(Self {
            state: RunState::Running,
            samples_taken: 0,
            num_samples: config.num_samples,
            reconstructor: SSRReconstructor1D::new(signal.len(), config.learning_rate),
            signal: signal.to_owned(),
            rng: make_rng(config.seed),
            show_progress: config.show_progress,
        })
    }

    /// 샘플 위치 하나를 추첨해 통합 단계 수행 (Done 상태에서는 무시)
    pub fn step(&mut self) {
        if self.state == RunState::Done {
            return;
        }

        let index = self.rng.gen_range(0..self.signal.len());
        let value = self.signal[index];
        self.reconstructor.integrate_sample(index, value);

        self.samples_taken += 1;
        if self.samples_taken == self.num_samples {
            self.state = RunState::Done;
        }
    }

    /// 전체 루프를 돌리고 최종 재구성과 통계 반환
    pub fn run(mut self) -> Result<ReconstructionResult1D> {
        let start = Instant::now();
        let initial_rmse = rmse(&self.signal, &self.reconstructor.reconstruct());

        let pb = progress_bar(self.num_samples, self.show_progress);
        while self.state == RunState::Running {
            self.step();
            if let Some(pb) = &pb {
                pb.inc(1);
            }
        }
        if let Some(pb) = &pb {
            pb.finish_and_clear();
        }

        let reconstruction = self.reconstructor.reconstruct();
        let final_rmse = rmse(&self.signal, &reconstruction);

        Ok(ReconstructionResult1D {
            reconstruction,
            stats: ReconstructionStats {
                num_samples: self.samples_taken,
                initial_rmse,
                final_rmse,
                elapsed_ms: start.elapsed().as_millis() as f64,
            },
        })
    }
}

/// 2차원 휘도장 재구성 드라이버
pub struct ImageReconstructionDriver {
    pub state: RunState,
    pub samples_taken: usize,
    pub num_samples: usize,
    pub reconstructor: SSRReconstructor2D,
    luma: Array2<f32>,
    region: SampleRegion,
    rng: StdRng,
    show_progress: bool,
}

impl ImageReconstructionDriver {
    pub fn new(luma: ArrayView2<f32>, config: &ImageReconstructionConfig) -> Result<Self> {
        let (rows, cols) = luma.dim();
        if rows == 0 || cols == 0 {
            bail!("휘도장 크기는 양수여야 합니다: {}x{}", rows, cols);
        }
        if !(config.sample_factor > 0.0) || !config.sample_factor.is_finite() {
            bail!("샘플 비율은 양의 실수여야 합니다: {}", config.sample_factor);
        }

        let region = config.region.unwrap_or_else(|| SampleRegion::full(rows, cols));
        region.validate(rows, cols)?;

        let num_samples = (rows as f32 * cols as f32 * config.sample_factor) as usize;

        Ok(Self {
            state: if num_samples == 0 {
                RunState::Done
            } else {
                RunState::Running
            },
            samples_taken: 0,
            num_samples,
            reconstructor: SSRReconstructor2D::new(rows, cols, config.learning_rate),
            luma: luma.to_owned(),
            region,
            rng: make_rng(config.seed),
            show_progress: config.show_progress,
        })
    }

    /// 영역 안에서 샘플 위치 하나를 추첨해 통합 단계 수행
    pub fn step(&mut self) {
        if self.state == RunState::Done {
            return;
        }

        let r = self.rng.gen_range(self.region.row_start..self.region.row_end);
        let c = self.rng.gen_range(self.region.col_start..self.region.col_end);
        let value = self.luma[[r, c]];
        self.reconstructor.integrate_sample((r, c), value);

        self.samples_taken += 1;
        if self.samples_taken >= self.num_samples {
            self.state = RunState::Done;
        }
    }

    /// 전체 루프를 돌리고 최종 재구성과 통계 반환
    pub fn run(mut self) -> Result<ReconstructionResult2D> {
        let start = Instant::now();
        let initial_rmse = rmse(&self.luma, &self.reconstructor.reconstruct());

        if self.show_progress {
            println!("{}개 샘플 추출", self.num_samples);
        }

        let pb = progress_bar(self.num_samples, self.show_progress);
        while self.state == RunState::Running {
            self.step();
            if let Some(pb) = &pb {
                pb.inc(1);
            }
        }
        if let Some(pb) = &pb {
            pb.finish_and_clear();
        }

        let reconstruction = self.reconstructor.reconstruct();
        let final_rmse = rmse(&self.luma, &reconstruction);

        Ok(ReconstructionResult2D {
            reconstruction,
            stats: ReconstructionStats {
                num_samples: self.samples_taken,
                initial_rmse,
                final_rmse,
                elapsed_ms: start.elapsed().as_millis() as f64,
            },
        })
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn progress_bar(total: usize, show: bool) -> Option<ProgressBar> {
    if !show {
        return None;
    }
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40}] {percent}% 샘플 {pos}/{len} 통합 중")
            .unwrap(),
    );
    Some(pb)
}
