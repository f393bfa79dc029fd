pub mod comparison;
pub mod discrepancy;
pub mod enums;
pub mod report;

pub use comparison::*;
pub use discrepancy::*;
pub use enums::*;
pub use report::*;
