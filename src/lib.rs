pub mod cs;
pub mod error;

pub use cs::selection;
pub use cs::selection::{linear_select, select_kth, select_median, PivotStrategy, Selector};
pub use error::{Result, SelectError};
