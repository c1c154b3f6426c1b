//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, CachedRouter};
use crate::domain::Station;

/// Shared application state.
///
/// The station is immutable once built, so handlers share it without a
/// lock.
#[derive(Clone)]
pub struct AppState {
    /// The station being served
    pub station: Arc<Station>,

    /// Shortest-path engine with memoised results
    pub router: Arc<CachedRouter>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(station: Station, cache_config: &CacheConfig) -> Self {
        let station = Arc::new(station);
        let router = CachedRouter::new(Arc::clone(&station), cache_config);
        Self {
            station,
            router: Arc::new(router),
        }
    }
}
