pub mod runner;


// 재수출
pub use runner::*;
