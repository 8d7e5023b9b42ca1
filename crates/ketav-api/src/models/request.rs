//! リクエストモデル定義

use serde::Deserialize;

/// 翻字リクエスト
#[derive(Debug, Deserialize)]
pub struct TransliterateRequest {
  /// 翻字対象のテキスト（空白区切り）
  pub text: String,
}

/// 検索キー生成リクエスト
#[derive(Debug, Deserialize)]
pub struct QueryKeysRequest {
  /// ラテン文字またはヘブライ文字の検索クエリ
  pub query: String,
}
