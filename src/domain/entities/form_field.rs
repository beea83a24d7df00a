//! # FormField Entity
//!
//! フォームフィールドのドメインエンティティ

use serde::{Serialize, Serializer};

/// クラス名から取り除くプレフィックス
const CLASS_PREFIX: &str = "PDF";
/// クラス名から取り除くサフィックス
const CLASS_SUFFIX: &str = "Field";

/// フォームフィールドの種類
///
/// PDFライブラリのオブジェクトモデルにおけるフィールドクラスに対応する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    CheckBox,
    RadioGroup,
    Dropdown,
    OptionList,
    Button,
    Signature,
    Unknown,
}

impl FieldKind {
    /// ライブラリ上のクラス名を返す
    pub fn class_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "PDFTextField",
            FieldKind::CheckBox => "PDFCheckBox",
            FieldKind::RadioGroup => "PDFRadioGroup",
            FieldKind::Dropdown => "PDFDropdown",
            FieldKind::OptionList => "PDFOptionList",
            FieldKind::Button => "PDFButton",
            FieldKind::Signature => "PDFSignature",
            FieldKind::Unknown => "PDFUnknownField",
        }
    }

    /// 表示用ラベル（例: `PDFTextField` -> `Text`）
    pub fn label(&self) -> String {
        type_label(self.class_name())
    }
}

/// 表示用ラベル（`Text`, `RadioGroup` など）としてシリアライズ
impl Serialize for FieldKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.label())
    }
}

/// クラス名からプレフィックス `PDF` とサフィックス `Field` を取り除く
///
/// 取り除いた結果が空になる場合はプレフィックスのみ取り除いた名前を返す
///
/// ```
/// use formlist::domain::entities::form_field::type_label;
///
/// assert_eq!(type_label("PDFTextField"), "Text");
/// assert_eq!(type_label("PDFCheckBox"), "CheckBox");
/// assert_eq!(type_label("PDFField"), "Field");
/// ```
pub fn type_label(class_name: &str) -> String {
    let without_prefix = class_name.strip_prefix(CLASS_PREFIX).unwrap_or(class_name);
    match without_prefix.strip_suffix(CLASS_SUFFIX) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => without_prefix.to_string(),
    }
}

/// フォームフィールド
///
/// `name` は親フィールドの部分名を `.` で連結した完全修飾名
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
}

impl FormField {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// `<type>: "<name>"` 形式の1行表現
    pub fn display_line(&self) -> String {
        format!("{}: \"{}\"", self.kind.label(), self.name)
    }
}
