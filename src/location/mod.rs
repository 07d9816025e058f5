pub mod context;
pub mod evaluator;
pub mod group;
mod lenient;
pub mod matcher;
pub mod rule;

pub use context::*;
pub use evaluator::*;
pub use group::*;
pub use matcher::*;
pub use rule::*;
