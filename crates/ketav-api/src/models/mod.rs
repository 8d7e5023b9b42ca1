//! モデルモジュール

mod request;
mod response;

pub use request::{QueryKeysRequest, TransliterateRequest};
pub use response::{QueryKeysResponse, TransliterateResponse, WordDto};
