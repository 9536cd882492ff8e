pub mod spectral;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

// 재수출
pub use spectral::*;
