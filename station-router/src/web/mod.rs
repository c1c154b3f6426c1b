//! Web layer for the station router.
//!
//! Provides a read-only JSON API over one station: shortest routes, parks,
//! park vertices and segments.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
