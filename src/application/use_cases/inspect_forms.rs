//! # Inspect Forms Use Case
//!
//! PDFファイルごとのフォームフィールド取得ユースケース

use log::{debug, warn};
use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::file_report::FileReport;
use crate::domain::repositories::pdf_repository::PdfRepository;

/// フォームフィールド取得ユースケース
///
/// ファイルを1件ずつ順番に処理し、失敗はそのファイルの `FileReport::Failed` として扱う
pub struct InspectFormsUseCase<R: PdfRepository> {
    pdf_repository: Arc<R>,
}

impl<R: PdfRepository> InspectFormsUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `pdf_repository` - PDFリポジトリ
    pub fn new(pdf_repository: Arc<R>) -> Self {
        Self { pdf_repository }
    }

    /// 1ファイル分のフォームフィールドを取得
    ///
    /// # Arguments
    ///
    /// * `root` - 探索したディレクトリ（表示名の基準）
    /// * `file_path` - PDFファイルのパス
    pub fn inspect_file(&self, root: &Path, file_path: &Path) -> FileReport {
        let file_name = display_name(root, file_path);

        match self.pdf_repository.read_form_fields(file_path) {
            Ok(fields) => {
                debug!("{}: {} form fields", file_name, fields.len());
                FileReport::listed(file_name, fields)
            }
            Err(e) => {
                let message = format!("{:#}", e);
                warn!("Failed to process {}: {}", file_name, message);
                FileReport::failed(file_name, message)
            }
        }
    }

    /// 全ファイルを順番に処理
    ///
    /// # Returns
    ///
    /// 入力と同じ順序のファイル単位の結果
    pub fn execute(&self, root: &Path, file_paths: &[impl AsRef<Path>]) -> Vec<FileReport> {
        file_paths
            .iter()
            .map(|path| self.inspect_file(root, path.as_ref()))
            .collect()
    }
}

/// 表示用のファイル名（探索ディレクトリからの相対パス）
pub fn display_name(root: &Path, file_path: &Path) -> String {
    file_path
        .strip_prefix(root)
        .unwrap_or(file_path)
        .to_string_lossy()
        .to_string()
}
