//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::file_pdf_repository::FilePdfRepository;
use crate::application::dto::list_config::ListConfig;
use crate::application::use_cases::discover_pdfs::DiscoverPdfsUseCase;
use crate::application::use_cases::inspect_forms::InspectFormsUseCase;

use super::cli::{Args, OutputFormat};
use super::report;

/// 設定ファイルとCLI引数をマージする（CLI引数が優先）
pub fn build_list_config(config: &Config, args: &Args) -> ListConfig {
    ListConfig::new(
        args.max_fields.unwrap_or(config.max_fields),
        args.recursive || config.recursive,
        config.follow_links && !args.no_follow_links,
        args.sort || config.sort,
    )
}

/// 実行結果の集計
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub files: usize,
    pub failed: usize,
}

/// Form Listing Workflow
pub struct FormListWorkflow {
    config: Config,
    discover_use_case: DiscoverPdfsUseCase<FilePdfRepository>,
    inspect_use_case: InspectFormsUseCase<FilePdfRepository>,
}

impl FormListWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        let pdf_repo = Arc::new(FilePdfRepository::new());

        Self {
            config,
            discover_use_case: DiscoverPdfsUseCase::new(pdf_repo.clone()),
            inspect_use_case: InspectFormsUseCase::new(pdf_repo),
        }
    }

    /// Execute the listing workflow
    ///
    /// Per-file failures are reported in the output and never abort the batch.
    /// Only an unreadable directory or a failed write returns an error.
    pub fn execute<W: Write>(&self, args: &Args, out: &mut W) -> Result<BatchSummary> {
        let list_config = build_list_config(&self.config, args);
        let root = PathBuf::from(&*shellexpand::tilde(&args.dir));

        info!("Listing form fields in {}", root.display());

        let pdf_files = self.discover_use_case.execute(&root, &list_config)?;
        let mut summary = BatchSummary {
            files: pdf_files.len(),
            failed: 0,
        };

        match args.format {
            OutputFormat::Text => {
                for path in &pdf_files {
                    let file_report = self.inspect_use_case.inspect_file(&root, path);
                    if file_report.is_failed() {
                        summary.failed += 1;
                    }
                    report::write_text(out, &file_report, list_config.max_fields)
                        .context("Failed to write report")?;
                }
            }
            OutputFormat::Json => {
                let reports = self.inspect_use_case.execute(&root, &pdf_files);
                summary.failed = reports.iter().filter(|r| r.is_failed()).count();
                report::write_json(out, &reports)?;
            }
        }

        info!(
            "Processed {} PDF files ({} failed)",
            summary.files, summary.failed
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_build_list_config_defaults() {
        let args = Args::parse_from(["formlist"]);
        let list_config = build_list_config(&Config::default(), &args);
        assert_eq!(list_config, ListConfig::default());
    }

    #[test]
    fn test_build_list_config_file_values() {
        let args = Args::parse_from(["formlist"]);
        let config = Config {
            max_fields: 7,
            recursive: true,
            follow_links: false,
            sort: true,
        };

        let list_config = build_list_config(&config, &args);

        assert_eq!(list_config, ListConfig::new(7, true, false, true));
    }

    #[test]
    fn test_build_list_config_cli_overrides() {
        let args = Args::parse_from(["formlist", "-n", "3", "--no-follow-links"]);
        let config = Config {
            max_fields: 50,
            ..Config::default()
        };

        let list_config = build_list_config(&config, &args);

        assert_eq!(list_config.max_fields, 3);
        assert!(!list_config.discovery.follow_links);
    }
}
