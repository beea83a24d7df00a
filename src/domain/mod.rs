//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - PDFライブラリやファイルシステムについて何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（FormField, FileReportなど）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（表示件数の切り詰め）

pub mod entities;
pub mod repositories;
pub mod services;
