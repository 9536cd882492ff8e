//! # SSR 핵심 라이브러리 모듈
//!
//! 희소 샘플 DCT 재구성의 핵심 구성 요소들

pub mod basis;
pub mod driver;
pub mod reconstructor;
pub mod signal;
pub mod transform;
pub mod types;

// 주요 타입들 재수출
pub use basis::*;
pub use driver::*;
pub use reconstructor::*;
pub use transform::*;
pub use types::*;

// 각 모듈이 자체 테스트를 포함함
