pub mod basis_table;


// 재수출
pub use basis_table::*;
