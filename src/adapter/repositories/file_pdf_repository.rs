//! File PDF Repository Implementation
//!
//! PdfRepositoryのファイルシステム実装

use anyhow::{bail, Context, Result};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::adapter::pdf;
use crate::domain::entities::form_field::FormField;
use crate::domain::repositories::pdf_repository::{DiscoveryOptions, PdfRepository};

/// 対象ファイルのサフィックス
const PDF_SUFFIX: &str = ".pdf";

/// ファイルシステムベースのPDFリポジトリ
pub struct FilePdfRepository;

impl FilePdfRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// ファイル名が `.pdf` で終わるかどうか（大文字小文字を区別する）
    pub fn is_pdf_name(file_name: &str) -> bool {
        file_name.ends_with(PDF_SUFFIX)
    }
}

impl PdfRepository for FilePdfRepository {
    fn discover_pdf_files(&self, dir: &Path, options: DiscoveryOptions) -> Result<Vec<PathBuf>> {
        if !dir.exists() {
            warn!("Directory does not exist: {}", dir.display());
            bail!("Directory does not exist: {}", dir.display());
        }
        if !dir.is_dir() {
            bail!("Not a readable directory: {}", dir.display());
        }

        let max_depth = if options.recursive { usize::MAX } else { 1 };
        let mut pdf_files = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(options.follow_links)
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(e)
                        .with_context(|| format!("Failed to read directory: {}", dir.display()));
                }
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_file()
                && Self::is_pdf_name(&entry.file_name().to_string_lossy())
            {
                pdf_files.push(entry.into_path());
            }
        }

        info!(
            "Found {} PDF files in {}",
            pdf_files.len(),
            dir.display()
        );

        Ok(pdf_files)
    }

    fn read_form_fields(&self, file_path: &Path) -> Result<Vec<FormField>> {
        let bytes = fs::read(file_path).map_err(pdf::error::PdfError::from)?;
        Ok(pdf::read_form_fields(&bytes)?)
    }
}

impl Default for FilePdfRepository {
    fn default() -> Self {
        Self::new()
    }
}
