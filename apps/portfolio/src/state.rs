use std::sync::Arc;

use crate::config::Config;
use crate::contact::ContactSink;
use crate::models::Portfolio;
use crate::render::Fragments;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Loaded once at startup; read-only afterwards.
    pub portfolio: Arc<Portfolio>,
    /// Optional HTML overrides from the components directory.
    pub fragments: Arc<Fragments>,
    /// Pluggable contact delivery. Default: SimulatedContactSink.
    pub contact_sink: Arc<dyn ContactSink>,
}
