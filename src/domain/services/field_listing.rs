//! # Field Listing Service
//!
//! 表示件数の上限に合わせてフィールド一覧を切り詰める

use crate::domain::entities::form_field::FormField;

/// 既定の表示件数上限
pub const DEFAULT_MAX_FIELDS: usize = 20;

/// 切り詰め後のフィールド一覧
#[derive(Debug, PartialEq, Eq)]
pub struct FieldListing<'a> {
    /// 表示するフィールド（先頭から最大 `max_fields` 件）
    pub shown: &'a [FormField],
    /// 表示しなかった残りの件数
    pub remaining: usize,
}

/// フィールド一覧サービス
pub struct FieldListingService;

impl FieldListingService {
    /// 先頭 `max_fields` 件と残り件数に分割する
    ///
    /// # Arguments
    ///
    /// * `fields` - フィールド一覧
    /// * `max_fields` - 表示件数の上限
    pub fn truncate(fields: &[FormField], max_fields: usize) -> FieldListing<'_> {
        let shown_len = fields.len().min(max_fields);
        FieldListing {
            shown: &fields[..shown_len],
            remaining: fields.len() - shown_len,
        }
    }
}
