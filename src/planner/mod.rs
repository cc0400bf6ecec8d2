pub mod aggregator;
pub mod eligibility;
pub mod nutrition;
pub mod ports;

pub use aggregator::*;
pub use eligibility::*;
pub use ports::*;
