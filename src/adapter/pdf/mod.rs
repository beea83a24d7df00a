//! PDF Adapter
//!
//! lopdf を使ったドキュメント読み込みとフォーム解析

pub mod acroform;
pub mod error;
pub mod text_string;

use lopdf::Document;

use crate::domain::entities::form_field::FormField;
use error::PdfError;

/// バイト列からドキュメントを読み込む
pub fn load_document(bytes: &[u8]) -> Result<Document, PdfError> {
    Ok(Document::load_mem(bytes)?)
}

/// バイト列を読み込み、フォームフィールドを取得する
pub fn read_form_fields(bytes: &[u8]) -> Result<Vec<FormField>, PdfError> {
    let document = load_document(bytes)?;
    acroform::extract_form_fields(&document)
}
