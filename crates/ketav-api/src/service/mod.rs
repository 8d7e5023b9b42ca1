//! Service module

mod ketav_api_service;

pub use ketav_api_service::{KetavApiService, KetavApiServiceFull};
