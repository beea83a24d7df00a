//! # PDF Repository Trait
//!
//! PDFファイルの発見とフォームフィールド読み込みを抽象化

use anyhow::Result;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::form_field::FormField;

/// ファイル発見時のオプション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// サブディレクトリも探索する
    pub recursive: bool,
    /// シンボリックリンクを辿る
    pub follow_links: bool,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            recursive: false,
            follow_links: true,
        }
    }
}

/// PDFリポジトリ
///
/// PDFファイルの発見とフォームフィールドの読み込みを担当するリポジトリ
#[cfg_attr(test, automock)]
pub trait PdfRepository {
    /// PDFファイルを発見する
    ///
    /// # Arguments
    ///
    /// * `dir` - 探索するディレクトリ
    /// * `options` - 探索オプション
    ///
    /// # Returns
    ///
    /// 発見されたPDFファイルのパスのリスト（ファイルシステムの列挙順）
    ///
    /// # Errors
    ///
    /// ディレクトリの読み取りに失敗した場合にエラーを返す
    fn discover_pdf_files(&self, dir: &Path, options: DiscoveryOptions) -> Result<Vec<PathBuf>>;

    /// PDFファイルのフォームフィールドを読み込む
    ///
    /// # Arguments
    ///
    /// * `file_path` - PDFファイルのパス
    ///
    /// # Returns
    ///
    /// 終端フィールドのリスト（フォームが無い場合は空）
    ///
    /// # Errors
    ///
    /// 読み込み・パース・フォーム解析のいずれかに失敗した場合にエラーを返す
    fn read_form_fields(&self, file_path: &Path) -> Result<Vec<FormField>>;
}
