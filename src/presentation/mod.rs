/// Order rows, status labels and tables
pub mod order;
/// Product links and prices
pub mod product;

pub use order::*;
pub use product::*;
