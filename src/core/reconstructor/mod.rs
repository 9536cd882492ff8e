pub mod recon_1d;
pub mod recon_2d;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

// 재수출
pub use recon_1d::*;
pub use recon_2d::*;
