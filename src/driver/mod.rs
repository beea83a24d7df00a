//! # Driver Layer (Presentation)
//!
//! CLIやその他の外部インターフェースを提供
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **report**: テキスト/JSON出力
//! - **workflow**: ワークフロー全体のオーケストレーション

pub mod cli;
pub mod report;
pub mod workflow;

pub use cli::Args;
pub use workflow::FormListWorkflow;
