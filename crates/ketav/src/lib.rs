//! ketav ヘブライ語翻字ライブラリー
//!
//! 母音記号付きの聖書ヘブライ語を学術的なラテン文字表記に翻字し、
//! 全文検索用のキーを生成する

/// 設定モジュール - KetavConfig, LogLevel等の設定構造体を定義
pub mod config;

/// エラーモジュール - KetavError, KetavResult等のエラー型を定義
pub mod errors;

/// 翻字エンジン - 文字分類・注釈・描画の各段階
pub mod hebrew;

/// データモデルモジュール - TransliteratedWord等のデータ構造を定義
pub mod models;

/// 正規化モジュール - 母音記号の除去と検索キーへの畳み込み
pub mod normalize;

/// 変換規則モジュール - 入力綴りと翻字表記の対応規則、クエリ展開
pub mod rules;

/// サービスモジュール - KetavService等の上位レベルAPIを提供
pub mod service;

/// Strong 番号モジュール - 辞書引き用キーの正規化
pub mod strong;

/// トークナイザーモジュール - Tantivy用の翻字トークナイザー
pub mod tokenizer;

/// 再エクスポート
pub use config::{KetavConfig, LogLevel};
pub use errors::{KetavError, KetavResult, TransliterationError};
pub use hebrew::{Letter, analyze, transliterate_hebrew};
pub use models::TransliteratedWord;
pub use normalize::{fold_for_indexing, strip_pointing};
pub use service::KetavService;
pub use strong::pad_strong_number;
