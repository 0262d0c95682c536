pub mod auth;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod rate_limit;
pub mod routes;
pub mod server;
pub mod share;
pub mod state;
pub mod usage;

pub use auth::*;
pub use error::*;
pub use metrics::*;
pub use rate_limit::*;
pub use routes::*;
pub use server::*;
pub use share::*;
pub use state::*;
pub use usage::*;
