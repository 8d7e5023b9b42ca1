//! Config loading from environment variables

use std::str::FromStr;

use super::constants::{DEFAULT_BIND_ADDR, DEFAULT_STYLE};
use crate::errors::ApiError;

/// Transliteration output style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
  /// Stress marks kept (`ma-l*aaḵ`)
  Marked,
  /// Stress marks removed (`ma-laaḵ`)
  Unmarked,
}

impl FromStr for Style {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "marked" => Ok(Self::Marked),
      "unmarked" => Ok(Self::Unmarked),
      _ => Err(format!("Unknown style: {}. Valid values: marked, unmarked", s)),
    }
  }
}

impl Style {
  /// Whether stress marks stay in the output.
  #[must_use]
  pub fn stress_marks(self) -> bool {
    matches!(self, Self::Marked)
  }
}

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5540")
  pub bind_addr: String,
  /// Output style
  pub style: Style,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// - `KETAV_API_BASE_URL`: bind address
  /// - `KETAV_STYLE`: `marked` | `unmarked`
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    let bind_addr =
      std::env::var("KETAV_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let style_str = std::env::var("KETAV_STYLE").unwrap_or_else(|_| DEFAULT_STYLE.to_string());

    let style = Style::from_str(&style_str).map_err(ApiError::config)?;

    Ok(Self { bind_addr, style })
  }
}
