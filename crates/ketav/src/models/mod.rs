//! models module
pub mod model_definition;

/// Re-export
pub use model_definition::TransliteratedWord;
