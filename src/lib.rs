pub mod api;
pub mod classifier;
pub mod config;
pub mod error;
pub mod query;
pub mod synthesizer;

use std::sync::Arc;
use config::Config;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}
