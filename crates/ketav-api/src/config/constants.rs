//! API設定の定数定義

/// 入力テキストの最大長（バイト単位）
///
/// 1MB までのテキストを許可する。
/// 単語ごとの走査は語長の二乗に比例するため、全体量も制限する。
pub const MAX_TEXT_LENGTH: usize = 1_000_000;

/// デフォルトのバインドアドレス
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5540";

/// デフォルトの表記スタイル
///
/// 強勢記号 `*` を残す。
pub const DEFAULT_STYLE: &str = "marked";
