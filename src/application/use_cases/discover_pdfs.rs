//! # Discover PDFs Use Case
//!
//! PDFファイル発見ユースケース

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::dto::list_config::ListConfig;
use crate::domain::repositories::pdf_repository::PdfRepository;

/// PDFファイル発見ユースケース
///
/// 指定されたディレクトリからPDFファイルを発見する
pub struct DiscoverPdfsUseCase<R: PdfRepository> {
    pdf_repository: Arc<R>,
}

impl<R: PdfRepository> DiscoverPdfsUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `pdf_repository` - PDFリポジトリ
    pub fn new(pdf_repository: Arc<R>) -> Self {
        Self { pdf_repository }
    }

    /// PDFファイルを発見する
    ///
    /// `config.sort` が無効の場合はリポジトリが返した順序をそのまま保つ
    ///
    /// # Errors
    ///
    /// ディレクトリの読み取りに失敗した場合にエラーを返す
    pub fn execute(&self, dir: &Path, config: &ListConfig) -> Result<Vec<PathBuf>> {
        let mut files = self
            .pdf_repository
            .discover_pdf_files(dir, config.discovery)?;

        if config.sort {
            files.sort_by(|a, b| {
                natord::compare(&a.to_string_lossy(), &b.to_string_lossy())
            });
        }

        Ok(files)
    }
}
