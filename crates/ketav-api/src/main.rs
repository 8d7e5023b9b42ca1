//! ketav-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ketav_api::ApiError;
use ketav_api::api::AppState;
use ketav_api::api::run_server;
use ketav_api::config::Config;
use ketav_api::service::KetavApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // ロギングの初期化（RUST_LOG が未設定なら info）
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::registry().with(env_filter).with(tracing_subscriber::fmt::layer()).init();

  // 設定の読み込み
  let config = Config::from_env()?;
  tracing::info!(style = ?config.style, "設定を読み込みました");

  // サービスの初期化
  let service = Arc::new(KetavApiServiceFull::new(&config)?);
  tracing::info!("翻字サービスを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
