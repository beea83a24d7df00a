//! # List Configuration DTO
//!
//! フィールド一覧表示の設定

use crate::domain::repositories::pdf_repository::DiscoveryOptions;
use crate::domain::services::field_listing::DEFAULT_MAX_FIELDS;

/// 一覧表示設定
///
/// 設定ファイルとCLI引数をマージした結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// 1ファイルあたりの表示件数上限
    pub max_fields: usize,
    /// ファイル発見オプション
    pub discovery: DiscoveryOptions,
    /// ファイル名を自然順でソートするかどうか（無効時はファイルシステムの列挙順）
    pub sort: bool,
}

impl ListConfig {
    /// 新しい一覧表示設定を作成します。
    ///
    /// ```
    /// use formlist::application::dto::list_config::ListConfig;
    ///
    /// let config = ListConfig::new(5, true, false, true);
    ///
    /// assert_eq!(config.max_fields, 5);
    /// assert!(config.discovery.recursive);
    /// assert!(!config.discovery.follow_links);
    /// assert!(config.sort);
    /// ```
    pub fn new(max_fields: usize, recursive: bool, follow_links: bool, sort: bool) -> Self {
        Self {
            max_fields,
            discovery: DiscoveryOptions {
                recursive,
                follow_links,
            },
            sort,
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            max_fields: DEFAULT_MAX_FIELDS,
            discovery: DiscoveryOptions::default(),
            sort: false,
        }
    }
}
