pub mod cache;
pub mod recommendation_cache;
pub mod warmup;

pub use cache::*;
pub use recommendation_cache::*;
pub use warmup::*;

pub use sayu_core::{Result, SayuError};
