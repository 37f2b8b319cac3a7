pub mod forest;
pub mod model;

pub use forest::*;
pub use model::*;
