//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::KetavApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Transliteration Service
  ///
  /// - Production: `Arc::new(KetavApiServiceFull::new(&config)?)`
  /// - Test: `Arc::new(StubKetavApiService)`
  pub service: Arc<dyn KetavApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn KetavApiService>) -> Self {
    Self { config, service }
  }
}
