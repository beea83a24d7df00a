//! # formlist
//!
//! ディレクトリ内のPDFファイルを列挙し、フォームフィールドの名前と種類を表示するツール
//!
//! 以下の4層で構成されています：
//!
//! - **Domain層**: フォームフィールドのエンティティと表示件数のルール（外部依存なし）
//! - **Application層**: ファイル発見とフォーム取得のユースケース
//! - **Adapter層**: lopdf によるPDF解析、ファイルシステム、設定ファイル
//! - **Driver層**: CLI、出力、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
