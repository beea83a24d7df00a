//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! - **DiscoverPdfsUseCase**: PDFファイルの発見
//! - **InspectFormsUseCase**: ファイルごとのフォームフィールド取得

pub mod discover_pdfs;
pub mod inspect_forms;
