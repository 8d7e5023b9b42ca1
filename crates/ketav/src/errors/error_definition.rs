//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::hebrew::letter::Letter;

/// 設定（KetavConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// transliteration.max_word_chars が許容範囲外
  #[error(
    "transliteration.max_word_chars は {min}〜{max} の範囲で指定してください: actual={actual}"
  )]
  InvalidMaxWordChars {
    /// 許容される最小値
    min: usize,
    /// 許容される最大値
    max: usize,
    /// 実際に指定された値
    actual: usize,
  },

  /// search.max_query_variants < 1
  #[error("search.max_query_variants は 1 以上である必要があります: actual={actual}")]
  InvalidMaxQueryVariants {
    /// 実際に指定された値
    actual: usize,
  },

  /// 設定ファイルの読み込みに失敗
  #[error("設定ファイルの読み込みに失敗しました: path={path:?}, error={source}")]
  FileRead {
    /// 読み込もうとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// 設定ファイルの JSON 解析に失敗
  #[error("設定ファイルの解析に失敗しました: path={path:?}, error={source}")]
  FileParse {
    /// 解析しようとしたパス
    path: PathBuf,
    /// 元となった JSON エラー
    #[source]
    source: Arc<serde_json::Error>,
  },
}

/// 呼び出し側から渡された入力の不正
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputError {
  /// 単語が transliteration.max_word_chars を超えている
  #[error("単語が長すぎます: max={max}, actual={actual}, word={word}")]
  WordTooLong {
    /// 対象の単語
    word: String,
    /// 許容される最大文字数
    max: usize,
    /// 実際の文字数
    actual: usize,
  },

  /// 検索クエリが空
  #[error("検索クエリが空です")]
  EmptyQuery,
}

/// 翻字処理中に検出された契約違反の内容
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Violation {
  /// 単語が子音ではなく記号で始まっている
  #[error("単語の先頭が子音ではありません: codepoint={codepoint:?}")]
  LeadingMark {
    /// 先頭の記号
    codepoint: char,
  },

  /// ヘブライ文字ブロック外の文字
  #[error("ヘブライ文字ではありません: position={position}, codepoint={codepoint:?}")]
  UnexpectedCodepoint {
    /// 位置（分解後の文字単位）
    position: usize,
    /// 問題の文字
    codepoint: char,
  },

  /// アクセントが付く母音が見つからない
  #[error("アクセントに対応する母音が見つかりません: position={position}")]
  NoVowelForAccent {
    /// アクセントの位置
    position: usize,
  },
}

/// 翻字エラー
///
/// 単語・違反内容に加えて、その時点までの文字解析結果を保持する
#[derive(Debug, Error, Clone)]
#[error("ヘブライ語の翻字に失敗しました: word={word}, {violation}")]
pub struct TransliterationError {
  /// 対象の単語（提示形分解後）
  pub word: String,
  /// 違反内容
  pub violation: Violation,
  /// 違反を検出した時点までの文字解析結果
  pub analysis: Vec<Letter>,
}

impl TransliterationError {
  /// 分解済みの入力から構築する
  pub fn new(input: &[char], violation: Violation, analysis: Vec<Letter>) -> Self {
    Self {
      word: input.iter().collect(),
      violation,
      analysis,
    }
  }

  /// 解析結果を1文字1行で出力する
  pub fn analysis_report(&self) -> String {
    self
      .analysis
      .iter()
      .enumerate()
      .map(|(position, letter)| format!("[{position}]: {letter}"))
      .collect::<Vec<_>>()
      .join("\n")
  }
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `KetavResult<T>` = `Result<T, KetavError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum KetavError {
  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// 入力エラー
  #[error(transparent)]
  Input(#[from] InputError),

  /// 翻字エラー
  #[error(transparent)]
  Transliteration(#[from] TransliterationError),
}

/// ketav クレートの標準 Result 型エイリアス
pub type KetavResult<T> = Result<T, KetavError>;
