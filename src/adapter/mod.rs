//! Adapter Layer
//!
//! 外部システム（PDFライブラリ, ファイルシステム）との統合

pub mod config;
pub mod pdf;
pub mod repositories;
