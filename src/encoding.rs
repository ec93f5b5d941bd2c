//! Output character set handling.
//!
//! The PDF canvas writes text with the standard Type 1 fonts under
//! WinAnsiEncoding, so only characters that have a WinAnsi code survive into
//! the artifact. Everything else is replaced with [`REPLACEMENT`] before it
//! reaches the layout stage.

use unicode_normalization::UnicodeNormalization;

/// Placeholder for characters outside the output character set.
pub const REPLACEMENT: char = '?';

/// Map a character to its WinAnsiEncoding byte.
pub fn win_ansi_byte(c: char) -> Option<u8> {
    let code = c as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as u8),
        _ => match c {
            '€' => Some(0x80),
            '‚' => Some(0x82),
            'ƒ' => Some(0x83),
            '„' => Some(0x84),
            '…' => Some(0x85),
            '†' => Some(0x86),
            '‡' => Some(0x87),
            'ˆ' => Some(0x88),
            '‰' => Some(0x89),
            'Š' => Some(0x8A),
            '‹' => Some(0x8B),
            'Œ' => Some(0x8C),
            'Ž' => Some(0x8E),
            '‘' => Some(0x91),
            '’' => Some(0x92),
            '“' => Some(0x93),
            '”' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '˜' => Some(0x98),
            '™' => Some(0x99),
            'š' => Some(0x9A),
            '›' => Some(0x9B),
            'œ' => Some(0x9C),
            'ž' => Some(0x9E),
            'Ÿ' => Some(0x9F),
            _ => None,
        },
    }
}

/// Check whether a character can be written by the canvas.
pub fn is_representable(c: char) -> bool {
    win_ansi_byte(c).is_some()
}

/// Text restricted to the output character set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    /// The representable text
    pub text: String,
    /// Number of characters that were replaced
    pub replaced: usize,
}

/// Normalize to NFC and replace every unrepresentable character.
///
/// Whitespace without a WinAnsi code, such as a carriage return or form
/// feed, becomes a plain space so trimming still removes it. Other unsupported characters become [`REPLACEMENT`].
/// Never fails.
pub fn sanitize(input: &str) -> Sanitized {
    let mut text = String::with_capacity(input.len());
    let mut replaced = 0;

    for c in input.nfc() {
        if is_representable(c) {
            text.push(c);
        } else if is_blank(c) {
            text.push(' ');
        } else {
            text.push(REPLACEMENT);
            replaced += 1;
        }
    }

    Sanitized { text, replaced }
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Encode text as WinAnsi bytes for a PDF string operand.
pub fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| win_ansi_byte(c).unwrap_or(REPLACEMENT as u8))
        .collect()
}
