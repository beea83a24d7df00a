//! # Domain Entities
//!
//! - **FormField**: フォームフィールドとその種類
//! - **FileReport**: ファイル単位の処理結果

pub mod file_report;
pub mod form_field;
