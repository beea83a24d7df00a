//! # Domain Repositories
//!
//! Repository trait（インターフェース）定義
//!
//! - Domain層では実装を持たない（traitの定義のみ）
//! - Adapter層で具体的な実装を提供

pub mod pdf_repository;
