//! # FileReport Entity
//!
//! PDFファイル1件分の処理結果

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::form_field::FormField;

/// ファイル単位の処理結果
///
/// 読み込みに失敗したファイルも `Failed` として報告され、バッチは継続する
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileReport {
    /// フィールド一覧の取得に成功
    Listed {
        file_name: String,
        fields: Vec<FormField>,
    },
    /// 読み込み・パースに失敗
    Failed { file_name: String, message: String },
}

impl FileReport {
    pub fn listed(file_name: impl Into<String>, fields: Vec<FormField>) -> Self {
        FileReport::Listed {
            file_name: file_name.into(),
            fields,
        }
    }

    pub fn failed(file_name: impl Into<String>, message: impl Into<String>) -> Self {
        FileReport::Failed {
            file_name: file_name.into(),
            message: message.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        match self {
            FileReport::Listed { file_name, .. } | FileReport::Failed { file_name, .. } => {
                file_name
            }
        }
    }

    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, FileReport::Failed { .. })
    }

    /// フィールド数（失敗時は `None`）
    pub fn field_count(&self) -> Option<usize> {
        match self {
            FileReport::Listed { fields, .. } => Some(fields.len()),
            FileReport::Failed { .. } => None,
        }
    }
}

/// `{"file", "field_count", "fields"}` または `{"file", "error"}` としてシリアライズ
///
/// フィールドは切り詰めずに全件出力する
impl Serialize for FileReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("file", self.file_name())?;
        if let Some(count) = self.field_count() {
            map.serialize_entry("field_count", &count)?;
        }
        match self {
            FileReport::Listed { fields, .. } => {
                map.serialize_entry("fields", fields)?;
            }
            FileReport::Failed { message, .. } => {
                map.serialize_entry("error", message)?;
            }
        }
        map.end()
    }
}
