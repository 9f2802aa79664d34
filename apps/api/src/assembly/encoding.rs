//! WinAnsi (CP1252) encoding for text drawn with the base-14 Times faces.

/// Byte written for characters WinAnsi cannot represent.
pub const REPLACEMENT_BYTE: u8 = b'?';

/// Encodes `text` to WinAnsi bytes. Whitespace controls become spaces;
/// unrepresentable characters become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(encode_char).collect()
}

fn encode_char(c: char) -> u8 {
    match c as u32 {
        0x20..=0x7E | 0xA0..=0xFF => c as u32 as u8,
        _ if c.is_whitespace() => b' ',
        _ => cp1252_special(c).unwrap_or(REPLACEMENT_BYTE),
    }
}

/// The 0x80..=0x9F block, where CP1252 departs from Latin-1.
fn cp1252_special(c: char) -> Option<u8> {
    let byte = match c {
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        // Hyphen variants LLMs like to emit.
        '\u{2010}' | '\u{2011}' => b'-',
        _ => return None,
    };
    Some(byte)
}
