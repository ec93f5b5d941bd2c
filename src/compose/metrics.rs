//! Glyph metrics for the standard fonts and greedy line wrapping.
//!
//! Widths are the Adobe core font metrics in 1/1000 em, indexed by
//! WinAnsi code for the printable ASCII range.

use super::options::Face;
use crate::encoding;

/// Millimetres per PostScript point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// PostScript points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

#[rustfmt::skip]
const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    278, 278, 564, 564, 564, 444, 921,
    722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889,
    722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611,
    333, 278, 333, 469, 500, 333,
    444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778,
    500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444,
    480, 200, 480, 541,
];

fn ascii_table(face: Face) -> &'static [u16; 95] {
    match face {
        Face::Helvetica | Face::HelveticaOblique => &HELVETICA,
        Face::HelveticaBold => &HELVETICA_BOLD,
        Face::TimesRoman => &TIMES_ROMAN,
    }
}

/// Advance width of a character in 1/1000 em.
///
/// Characters without a WinAnsi code are measured as the replacement
/// character they will be written as.
pub fn char_width(face: Face, c: char) -> u16 {
    let byte = encoding::win_ansi_byte(c)
        .or_else(|| encoding::win_ansi_byte(encoding::REPLACEMENT))
        .unwrap_or(b'?');
    let table = ascii_table(face);
    let times = face == Face::TimesRoman;

    match byte {
        0x20..=0x7E => table[(byte - 0x20) as usize],
        0xA0 => table[0],
        0x91 | 0x92 => match face {
            Face::Helvetica | Face::HelveticaOblique => 222,
            Face::HelveticaBold => 278,
            Face::TimesRoman => 333,
        },
        0x93 | 0x94 => match face {
            Face::Helvetica | Face::HelveticaOblique => 333,
            Face::HelveticaBold => 500,
            Face::TimesRoman => 444,
        },
        0x96 if times => 500,
        0x96 => 556,
        0x85 | 0x97 => 1000,
        0x95 => 350,
        _ if times => 500,
        _ => 556,
    }
}

/// Width of a string in millimetres at `size` points.
pub fn text_width(face: Face, size: f32, text: &str) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(face, c) as u32).sum();
    units as f32 * size / 1000.0 * MM_PER_PT
}

/// Break text into lines no wider than `max_width` millimetres.
///
/// Words are packed greedily. Spacing inside a line is kept as written; the
/// spaces at a break are dropped. A word wider than a whole line is split
/// between characters. Empty input gives no lines.
pub fn wrap_text(face: Face, size: f32, text: &str, max_width: f32) -> Vec<String> {
    let space = text_width(face, size, " ");
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;

    for word in text.split(' ') {
        let word_width = text_width(face, size, word);

        if !current.is_empty() {
            if current_width + space + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_width;
                continue;
            }
            push_line(&mut lines, &mut current);
            current_width = 0.0;
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for c in word.chars() {
            let width = text_width(face, size, c.encode_utf8(&mut [0; 4]));
            if !current.is_empty() && current_width + width > max_width {
                push_line(&mut lines, &mut current);
                current_width = 0.0;
            }
            current.push(c);
            current_width += width;
        }
    }

    push_line(&mut lines, &mut current);
    lines
}

fn push_line(lines: &mut Vec<String>, current: &mut String) {
    let line = std::mem::take(current);
    let line = line.trim_end_matches(' ');
    if !line.is_empty() {
        lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_width_ascii() {
        assert_eq!(char_width(Face::Helvetica, ' '), 278);
        assert_eq!(char_width(Face::Helvetica, 'W'), 944);
        assert_eq!(char_width(Face::HelveticaBold, 'a'), 556);
        assert_eq!(char_width(Face::HelveticaBold, 'b'), 611);
        assert_eq!(char_width(Face::TimesRoman, 'a'), 444);
        assert_eq!(char_width(Face::TimesRoman, '~'), 541);
        assert_eq!(
            char_width(Face::HelveticaOblique, 'x'),
            char_width(Face::Helvetica, 'x')
        );
    }

    #[test]
    fn test_char_width_extended() {
        assert_eq!(char_width(Face::Helvetica, '—'), 1000);
        assert_eq!(char_width(Face::TimesRoman, '’'), 333);
        assert_eq!(char_width(Face::Helvetica, '\u{a0}'), 278);
        // unmapped characters measure as '?'
        assert_eq!(char_width(Face::Helvetica, '✓'), 556);
    }

    #[test]
    fn test_text_width() {
        // "Page" in Helvetica: 667 + 556 + 556 + 556 units
        let width = text_width(Face::Helvetica, 10.0, "Page");
        let expected = 2335.0 * 10.0 / 1000.0 * MM_PER_PT;
        assert!((width - expected).abs() < 1e-4);
        assert_eq!(text_width(Face::TimesRoman, 14.0, ""), 0.0);
    }

    #[test]
    fn test_wrap_fits_single_line() {
        let lines = wrap_text(Face::TimesRoman, 14.0, "Profits rose.", 118.0);
        assert_eq!(lines, vec!["Profits rose."]);
    }

    #[test]
    fn test_wrap_greedy() {
        let text = "one two three four five six seven eight nine ten eleven twelve";
        let lines = wrap_text(Face::TimesRoman, 14.0, text, 40.0);

        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), text);
        for line in &lines {
            assert!(text_width(Face::TimesRoman, 14.0, line) <= 40.0);
        }
    }

    #[test]
    fn test_wrap_breaks_long_word() {
        let word = "x".repeat(200);
        let lines = wrap_text(Face::Helvetica, 12.0, &word, 30.0);

        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(text_width(Face::Helvetica, 12.0, line) <= 30.0);
        }
    }

    #[test]
    fn test_wrap_keeps_inner_spacing() {
        let lines = wrap_text(Face::TimesRoman, 14.0, "Net  income:   up", 118.0);
        assert_eq!(lines, vec!["Net  income:   up"]);

        let lines = wrap_text(Face::TimesRoman, 14.0, "alpha    beta", 15.0);
        assert_eq!(lines, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap_text(Face::Helvetica, 12.0, "", 30.0).is_empty());
        assert!(wrap_text(Face::Helvetica, 12.0, "   ", 30.0).is_empty());
    }
}
