//! SSR (Sparse Sample Reconstruction) 라이브러리
//!
//! 희소하게 추출된 (위치, 관측값) 샘플 스트림으로부터 DCT 계수장을
//! 온라인 확률적 경사 갱신으로 학습하여 1차원 신호와 2차원 휘도장을 재구성

pub mod core;

// 핵심 모듈들 재수출
pub use core::{
    // 변환 및 기저
    BasisTable, SpectralTransform,
    // 재구성기
    SSRReconstructor1D, SSRReconstructor2D,
    // 드라이버
    ImageReconstructionDriver, ReconstructionDriver, RunState,
    // 설정 및 통계
    ImageReconstructionConfig, ReconstructionConfig, ReconstructionStats, SampleRegion,
};

// 편의 타입 별칭들
pub type Reconstructor = SSRReconstructor1D;
pub type ImageReconstructor = SSRReconstructor2D;
