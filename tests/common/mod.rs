//! Test helpers: build small AcroForm PDFs with lopdf

#![allow(dead_code)]

use lopdf::{dictionary, Document, Object, StringFormat};
use std::fs;
use std::path::Path;

/// (name, /FT, /Ff)
pub type FieldSpec<'a> = (&'a str, &'a str, i64);

/// Build a one-page PDF whose AcroForm holds the given flat fields
pub fn build_form_pdf(fields: &[FieldSpec<'_>]) -> Vec<u8> {
    save(build_form_document(fields))
}

fn build_form_document(fields: &[FieldSpec<'_>]) -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(612),
            Object::Integer(792),
        ],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => Object::Integer(1),
        }),
    );

    let field_refs: Vec<Object> = fields
        .iter()
        .map(|(name, ft, flags)| {
            Object::Reference(doc.add_object(dictionary! {
                "FT" => Object::Name(ft.as_bytes().to_vec()),
                "T" => Object::string_literal(*name),
                "Ff" => Object::Integer(*flags),
            }))
        })
        .collect();

    let acro_form_id = doc.add_object(dictionary! { "Fields" => field_refs });
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
        "AcroForm" => acro_form_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

fn save(mut doc: Document) -> Vec<u8> {
    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to serialize test PDF");
    buf
}

/// Same form as `build_form_pdf`, with a Standard security handler (V1, R2)
/// in the trailer
pub fn build_encrypted_form_pdf(fields: &[FieldSpec<'_>]) -> Vec<u8> {
    let mut doc = build_form_document(fields);
    doc.trailer.set(
        "Encrypt",
        dictionary! {
            "Filter" => "Standard",
            "V" => Object::Integer(1),
            "R" => Object::Integer(2),
            "O" => Object::String(vec![0x4f; 32], StringFormat::Literal),
            "U" => Object::String(vec![0x55; 32], StringFormat::Literal),
            "P" => Object::Integer(-4),
        },
    );
    doc.trailer.set(
        "ID",
        vec![
            Object::String(vec![0x01; 16], StringFormat::Hexadecimal),
            Object::String(vec![0x01; 16], StringFormat::Hexadecimal),
        ],
    );
    save(doc)
}

/// `count` text fields named field0, field1, ...
pub fn text_fields(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("field{}", i)).collect()
}

pub fn write_text_form(dir: &Path, file_name: &str, count: usize) {
    let names = text_fields(count);
    let specs: Vec<FieldSpec<'_>> = names.iter().map(|n| (n.as_str(), "Tx", 0)).collect();
    fs::write(dir.join(file_name), build_form_pdf(&specs)).unwrap();
}

pub fn write_corrupt(dir: &Path, file_name: &str) {
    fs::write(dir.join(file_name), b"%PDF-1.7\n%%garbage, no objects, no xref\n").unwrap();
}

pub fn write_encrypted(dir: &Path, file_name: &str) {
    let bytes = build_encrypted_form_pdf(&[("secret", "Tx", 0)]);
    fs::write(dir.join(file_name), bytes).unwrap();
}
