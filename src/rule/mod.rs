pub mod evaluator;
pub mod operator;
pub mod value;

pub use evaluator::*;
pub use operator::*;
