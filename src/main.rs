//! formlist - PDF Form Field Lister
//!
//! ディレクトリ内の各PDFのフォームフィールドを一覧表示

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;
use std::io;

use formlist::adapter::config::Config;
use formlist::driver::{Args, FormListWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration (defaults when no file is given)
    let config = Config::load_optional(args.config.as_deref())?;

    let workflow = FormListWorkflow::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    workflow.execute(&args, &mut out)?;

    Ok(())
}
