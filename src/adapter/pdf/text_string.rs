//! PDF text string decoding
//!
//! フィールド名（/T）などのテキスト文字列をデコードする

const UTF16BE_BOM: [u8; 2] = [0xFE, 0xFF];
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// PDFDocEncoding 0x18..=0x1F
const PDF_DOC_0X18: [char; 8] = [
    '\u{02D8}', '\u{02C7}', '\u{02C6}', '\u{02D9}', '\u{02DD}', '\u{02DB}', '\u{02DA}', '\u{02DC}',
];

/// PDFDocEncoding 0x80..=0xA0（0x9F は未定義）
const PDF_DOC_0X80: [char; 33] = [
    '\u{2022}', '\u{2020}', '\u{2021}', '\u{2026}', '\u{2014}', '\u{2013}', '\u{0192}', '\u{2044}',
    '\u{2039}', '\u{203A}', '\u{2212}', '\u{2030}', '\u{201E}', '\u{201C}', '\u{201D}', '\u{2018}',
    '\u{2019}', '\u{201A}', '\u{2122}', '\u{FB01}', '\u{FB02}', '\u{0141}', '\u{0152}', '\u{0160}',
    '\u{0178}', '\u{017D}', '\u{0131}', '\u{0142}', '\u{0153}', '\u{0161}', '\u{017E}', '\u{FFFD}',
    '\u{20AC}',
];

/// テキスト文字列をデコードする
///
/// - `FE FF` で始まる場合は UTF-16BE
/// - `EF BB BF` で始まる場合は UTF-8
/// - それ以外は PDFDocEncoding
pub fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(&UTF16BE_BOM) {
        return decode_utf16be(rest);
    }
    if let Some(rest) = bytes.strip_prefix(&UTF8_BOM) {
        return String::from_utf8_lossy(rest).into_owned();
    }
    bytes.iter().map(|&b| pdf_doc_char(b)).collect()
}

fn decode_utf16be(bytes: &[u8]) -> String {
    // 奇数長の末尾1バイトは捨てる
    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
    char::decode_utf16(units)
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

fn pdf_doc_char(byte: u8) -> char {
    match byte {
        0x18..=0x1F => PDF_DOC_0X18[(byte - 0x18) as usize],
        0x80..=0xA0 => PDF_DOC_0X80[(byte - 0x80) as usize],
        _ => byte as char,
    }
}
