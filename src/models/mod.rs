pub mod day;
pub mod meal;
pub mod nutrition;
pub mod plan;
pub mod recipe;

pub use day::*;
pub use meal::*;
pub use nutrition::*;
pub use plan::*;
pub use recipe::*;
