//! HTTPハンドラー定義

use axum::{Json, extract::State};
use tracing::{debug, error, info};

use crate::errors::ApiError;
use crate::models::{QueryKeysRequest, QueryKeysResponse, TransliterateRequest, TransliterateResponse};

use super::state::AppState;

/// POST /transliterate エンドポイント
///
/// 母音記号付きヘブライ語テキストを単語ごとに翻字する。
///
/// # Request Body
/// ```json
/// { "text": "翻字対象のテキスト" }
/// ```
///
/// # Response
/// - 200 OK: 翻字成功
/// - 400 Bad Request: 入力エラー（空テキスト、テキスト長超過、単語長超過）
/// - 500 Internal Server Error: 翻字の前提違反、内部エラー
pub async fn post_transliterate(
  State(state): State<AppState>,
  Json(request): Json<TransliterateRequest>,
) -> Result<Json<TransliterateResponse>, ApiError> {
  debug!(text_len = request.text.len(), "翻字リクエストを受信");

  // CPUバウンドな処理を spawn_blocking で実行
  let service = state.service.clone();

  let response =
    tokio::task::spawn_blocking(move || service.transliterate(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal("処理の実行に失敗しました")
    })??;

  info!(
    word_count = response.words.len(),
    elapsed_ms = response.elapsed_ms,
    "翻字完了"
  );

  Ok(Json(response))
}

/// POST /query-keys エンドポイント
///
/// 検索クエリから検索キーの一覧を生成する。
///
/// # Request Body
/// ```json
/// { "query": "David" }
/// ```
pub async fn post_query_keys(
  State(state): State<AppState>,
  Json(request): Json<QueryKeysRequest>,
) -> Result<Json<QueryKeysResponse>, ApiError> {
  debug!(query_len = request.query.len(), "検索キー生成リクエストを受信");

  let service = state.service.clone();

  let response =
    tokio::task::spawn_blocking(move || service.query_keys(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal("処理の実行に失敗しました")
    })??;

  info!(key_count = response.keys.len(), "検索キー生成完了");

  Ok(Json(response))
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}
