pub mod metric;
pub mod planet;

pub use metric::*;
pub use planet::*;
