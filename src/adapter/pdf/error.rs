//! PDF Reader Errors
//!
//! フォーム読み込み時のエラー分類

use thiserror::Error;

/// フォーム読み込みエラー
///
/// いずれもファイル単位の失敗として扱われ、バッチ全体は中断しない
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("failed to read file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse PDF")]
    Parse(#[from] lopdf::Error),

    #[error("document is encrypted")]
    Encrypted,

    #[error("malformed form: {0}")]
    Malformed(String),
}
