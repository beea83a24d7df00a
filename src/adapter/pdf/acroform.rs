//! AcroForm field tree walk
//!
//! ドキュメントカタログの `/AcroForm /Fields` を辿り、終端フィールドを列挙する

use lopdf::{Dictionary, Document, Object, ObjectId};
use log::debug;
use std::collections::HashSet;

use super::error::PdfError;
use super::text_string::decode_text_string;
use crate::domain::entities::form_field::{FieldKind, FormField};

/// 参照チェーンの上限
const MAX_REFERENCE_DEPTH: usize = 32;
/// フィールド階層の上限
const MAX_FIELD_DEPTH: usize = 64;

/// フィールドフラグ（/Ff）
pub mod field_flags {
    /// ラジオボタン（bit 16）
    pub const RADIO: i64 = 1 << 15;
    /// プッシュボタン（bit 17）
    pub const PUSH_BUTTON: i64 = 1 << 16;
    /// コンボボックス（bit 18）
    pub const COMBO: i64 = 1 << 17;
}

/// /FT と /Ff からフィールドの種類を判定する
pub fn classify(field_type: Option<&[u8]>, flags: i64) -> FieldKind {
    match field_type {
        Some(b"Tx") => FieldKind::Text,
        Some(b"Btn") if flags & field_flags::PUSH_BUTTON != 0 => FieldKind::Button,
        Some(b"Btn") if flags & field_flags::RADIO != 0 => FieldKind::RadioGroup,
        Some(b"Btn") => FieldKind::CheckBox,
        Some(b"Ch") if flags & field_flags::COMBO != 0 => FieldKind::Dropdown,
        Some(b"Ch") => FieldKind::OptionList,
        Some(b"Sig") => FieldKind::Signature,
        _ => FieldKind::Unknown,
    }
}

/// ドキュメントのフォームフィールドを取得する
///
/// `/AcroForm` や `/Fields` が無いドキュメントは空のリストを返す
///
/// # Errors
///
/// 暗号化されたドキュメント、壊れたオブジェクト参照、不正なフォーム構造の場合にエラーを返す
pub fn extract_form_fields(document: &Document) -> Result<Vec<FormField>, PdfError> {
    if document.is_encrypted() {
        return Err(PdfError::Encrypted);
    }

    let catalog = catalog(document)?;

    let acro_form = match catalog.get(b"AcroForm") {
        Ok(obj) => match resolve(document, obj)? {
            Object::Dictionary(dict) => dict,
            Object::Null => return Ok(Vec::new()),
            other => {
                return Err(PdfError::Malformed(format!(
                    "/AcroForm is {}, expected dictionary",
                    object_kind(other)
                )))
            }
        },
        Err(_) => {
            debug!("Document has no /AcroForm");
            return Ok(Vec::new());
        }
    };

    let roots = match acro_form.get(b"Fields") {
        Ok(obj) => match resolve(document, obj)? {
            Object::Array(items) => items,
            Object::Null => return Ok(Vec::new()),
            other => {
                return Err(PdfError::Malformed(format!(
                    "/Fields is {}, expected array",
                    object_kind(other)
                )))
            }
        },
        Err(_) => return Ok(Vec::new()),
    };

    let mut walker = FieldWalker::new(document);
    for root in roots {
        walker.visit(root, &Inherited::default(), 0)?;
    }

    Ok(walker.fields)
}

fn catalog(document: &Document) -> Result<&Dictionary, PdfError> {
    let root = document.trailer.get(b"Root")?;
    match resolve(document, root)? {
        Object::Dictionary(dict) => Ok(dict),
        other => Err(PdfError::Malformed(format!(
            "/Root is {}, expected dictionary",
            object_kind(other)
        ))),
    }
}

/// 間接参照を解決する
fn resolve<'a>(document: &'a Document, object: &'a Object) -> Result<&'a Object, PdfError> {
    let mut current = object;
    for _ in 0..MAX_REFERENCE_DEPTH {
        match current {
            Object::Reference(id) => current = document.get_object(*id)?,
            _ => return Ok(current),
        }
    }
    Err(PdfError::Malformed("reference chain too long".to_string()))
}

fn object_kind(object: &Object) -> &'static str {
    match object {
        Object::Null => "null",
        Object::Boolean(_) => "boolean",
        Object::Integer(_) | Object::Real(_) => "number",
        Object::Name(_) => "name",
        Object::String(..) => "string",
        Object::Array(_) => "array",
        Object::Dictionary(_) => "dictionary",
        Object::Stream(_) => "stream",
        Object::Reference(_) => "reference",
        #[allow(unreachable_patterns)]
        _ => "object",
    }
}

/// 親から継承される属性
#[derive(Debug, Clone, Default)]
struct Inherited {
    /// 完全修飾名
    name: Option<String>,
    /// /FT
    field_type: Option<Vec<u8>>,
    /// /Ff
    flags: Option<i64>,
}

impl Inherited {
    fn extend(&self, dict: &Dictionary) -> Inherited {
        let partial = dict.get(b"T").ok().and_then(text_value);
        let name = match (&self.name, partial) {
            (Some(parent), Some(partial)) => Some(format!("{}.{}", parent, partial)),
            (None, Some(partial)) => Some(partial),
            (parent, None) => parent.clone(),
        };

        let field_type = match dict.get(b"FT") {
            Ok(Object::Name(ft)) => Some(ft.clone()),
            _ => self.field_type.clone(),
        };

        let flags = match dict.get(b"Ff") {
            Ok(Object::Integer(ff)) => Some(*ff),
            Ok(Object::Real(ff)) => Some(*ff as i64),
            _ => self.flags,
        };

        Inherited {
            name,
            field_type,
            flags,
        }
    }
}

fn text_value(object: &Object) -> Option<String> {
    match object {
        Object::String(bytes, _) => Some(decode_text_string(bytes)),
        Object::Name(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        _ => None,
    }
}

struct FieldWalker<'a> {
    document: &'a Document,
    visited: HashSet<ObjectId>,
    fields: Vec<FormField>,
}

impl<'a> FieldWalker<'a> {
    fn new(document: &'a Document) -> Self {
        Self {
            document,
            visited: HashSet::new(),
            fields: Vec::new(),
        }
    }

    fn visit(
        &mut self,
        object: &'a Object,
        parent: &Inherited,
        depth: usize,
    ) -> Result<(), PdfError> {
        if depth > MAX_FIELD_DEPTH {
            return Err(PdfError::Malformed("field tree too deep".to_string()));
        }

        if let Object::Reference(id) = object {
            if !self.visited.insert(*id) {
                debug!("Skipping already visited field object {:?}", id);
                return Ok(());
            }
        }

        let dict = match resolve(self.document, object)? {
            Object::Dictionary(dict) => dict,
            other => {
                debug!("Skipping non-dictionary field entry ({})", object_kind(other));
                return Ok(());
            }
        };

        let inherited = parent.extend(dict);

        match self.named_kids(dict)? {
            Some(kids) => {
                for kid in kids {
                    self.visit(kid, &inherited, depth + 1)?;
                }
            }
            None => {
                let kind = classify(
                    inherited.field_type.as_deref(),
                    inherited.flags.unwrap_or(0),
                );
                self.fields
                    .push(FormField::new(inherited.name.unwrap_or_default(), kind));
            }
        }

        Ok(())
    }

    /// /Kids に名前付きの子（/T を持つ辞書）が含まれる場合のみ子を返す
    ///
    /// 子が全てウィジェット注釈の場合は終端フィールドとして扱う
    fn named_kids(&self, dict: &'a Dictionary) -> Result<Option<&'a Vec<Object>>, PdfError> {
        let kids = match dict.get(b"Kids") {
            Ok(obj) => match resolve(self.document, obj)? {
                Object::Array(kids) => kids,
                _ => return Ok(None),
            },
            Err(_) => return Ok(None),
        };

        for kid in kids {
            if let Object::Dictionary(kid_dict) = resolve(self.document, kid)? {
                if kid_dict.get(b"T").is_ok() {
                    return Ok(Some(kids));
                }
            }
        }

        Ok(None)
    }
}
