//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, ValueEnum};

/// 出力形式
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// JSON array of per-file reports
    Json,
}

/// ディレクトリ内のPDFフォームフィールドを一覧表示するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "formlist")]
#[command(about = "List the form fields of every PDF in a directory", long_about = None)]
pub struct Args {
    /// Directory to scan for .pdf files
    #[arg(default_value = ".")]
    pub dir: String,

    /// Maximum number of fields printed per file
    #[arg(short = 'n', long)]
    pub max_fields: Option<usize>,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Do not follow symbolic links
    #[arg(long)]
    pub no_follow_links: bool,

    /// Sort files by name (natural order) instead of directory order
    #[arg(long)]
    pub sort: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<String>,
}
