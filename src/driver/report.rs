//! Report Output
//!
//! ファイル単位の結果をテキストまたはJSONで出力

use anyhow::{Context, Result};
use std::io::{self, Write};

use crate::domain::entities::file_report::FileReport;
use crate::domain::services::field_listing::FieldListingService;

/// `1 field` / `N fields`
fn field_count_label(count: usize) -> String {
    if count == 1 {
        "1 field".to_string()
    } else {
        format!("{} fields", count)
    }
}

/// 1ファイル分の結果をテキストで出力
///
/// ```text
/// 📄 form.pdf (3 fields)
///   Text: "name"
///   CheckBox: "agree"
///   ... and 1 more
/// ```
pub fn write_text<W: Write>(out: &mut W, report: &FileReport, max_fields: usize) -> io::Result<()> {
    match report {
        FileReport::Listed { file_name, fields } => {
            writeln!(out, "📄 {} ({})", file_name, field_count_label(fields.len()))?;
            let listing = FieldListingService::truncate(fields, max_fields);
            for field in listing.shown {
                writeln!(out, "  {}", field.display_line())?;
            }
            if listing.remaining > 0 {
                writeln!(out, "  ... and {} more", listing.remaining)?;
            }
        }
        FileReport::Failed { file_name, message } => {
            writeln!(out, "❌ {}: {}", file_name, message)?;
        }
    }
    writeln!(out)
}

/// 全ファイルの結果をJSON配列で出力（フィールドは切り詰めない）
pub fn write_json<W: Write>(out: &mut W, reports: &[FileReport]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)
        .context("Failed to serialize reports")?;
    writeln!(out)?;
    Ok(())
}
