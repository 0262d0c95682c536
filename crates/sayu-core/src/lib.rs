pub mod analysis;
pub mod archetype;
pub mod behavior;
pub mod catalog;
pub mod compatibility;
pub mod config;
pub mod error;
pub mod matching;
mod narratives;
pub mod recommendation;

pub use analysis::*;
pub use archetype::*;
pub use behavior::*;
pub use catalog::*;
pub use compatibility::*;
pub use config::*;
pub use error::*;
pub use matching::*;
pub use recommendation::*;
