//! Repository Implementations
//!
//! Domain層で定義されたRepository traitの実装

pub mod file_pdf_repository;
