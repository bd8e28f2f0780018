//! Standard Type1 fonts: resource names, glyph widths and WinAnsi encoding.

/// The base-14 fonts the PDF renderer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    Courier,
}

impl StandardFont {
    /// Pick the face for a combination of run styles.
    pub fn for_style(bold: bool, italic: bool, code: bool) -> Self {
        match (code, bold, italic) {
            (true, _, _) => StandardFont::Courier,
            (false, true, true) => StandardFont::HelveticaBoldOblique,
            (false, true, false) => StandardFont::HelveticaBold,
            (false, false, true) => StandardFont::HelveticaOblique,
            (false, false, false) => StandardFont::Helvetica,
        }
    }

    /// PostScript name written as `/BaseFont`.
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            StandardFont::Courier => "Courier",
        }
    }

    /// Key in the page resources `/Font` dictionary.
    pub fn resource_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "F1",
            StandardFont::HelveticaBold => "F2",
            StandardFont::HelveticaOblique => "F3",
            StandardFont::HelveticaBoldOblique => "F4",
            StandardFont::Courier => "F5",
        }
    }

    /// Advance width of a character in 1/1000 em.
    ///
    /// Oblique faces share the upright widths.
    pub fn char_width(&self, ch: char) -> u16 {
        let table = match self {
            StandardFont::Courier => return 600,
            StandardFont::Helvetica | StandardFont::HelveticaOblique => &HELVETICA_WIDTHS,
            StandardFont::HelveticaBold | StandardFont::HelveticaBoldOblique => {
                &HELVETICA_BOLD_WIDTHS
            }
        };
        match ch {
            ' '..='~' => table[(ch as usize) - 0x20],
            '\u{2022}' => 350,
            _ => match self {
                StandardFont::HelveticaBold | StandardFont::HelveticaBoldOblique => 611,
                _ => 556,
            },
        }
    }

    /// Width of `text` in points at `size`.
    pub fn measure(&self, text: &str, size: f32) -> f32 {
        let units: u32 = text.chars().map(|ch| self.char_width(ch) as u32).sum();
        units as f32 / 1000.0 * size
    }
}

/// Helvetica widths for `' '..='~'`.
#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 95] = [
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

/// Helvetica-Bold widths for `' '..='~'`.
#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 95] = [
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

/// Encode text as Windows-1252 bytes for `/WinAnsiEncoding` fonts.
///
/// Characters with no WinAnsi code point become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    let mut lossy = false;

    for ch in text.chars() {
        let byte = match ch as u32 {
            0x00..=0x7F | 0xA0..=0xFF => ch as u8,
            0x20AC => 0x80,
            0x201A => 0x82,
            0x0192 => 0x83,
            0x201E => 0x84,
            0x2026 => 0x85,
            0x2020 => 0x86,
            0x2021 => 0x87,
            0x02C6 => 0x88,
            0x2030 => 0x89,
            0x0160 => 0x8A,
            0x2039 => 0x8B,
            0x0152 => 0x8C,
            0x017D => 0x8E,
            0x2018 => 0x91,
            0x2019 => 0x92,
            0x201C => 0x93,
            0x201D => 0x94,
            0x2022 => 0x95,
            0x2013 => 0x96,
            0x2014 => 0x97,
            0x02DC => 0x98,
            0x2122 => 0x99,
            0x0161 => 0x9A,
            0x203A => 0x9B,
            0x0153 => 0x9C,
            0x017E => 0x9E,
            0x0178 => 0x9F,
            _ => {
                lossy = true;
                b'?'
            }
        };
        out.push(byte);
    }

    if lossy {
        log::warn!("Replaced characters without a WinAnsi mapping in {:?}", text);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_for_style() {
        assert_eq!(
            StandardFont::for_style(false, false, false),
            StandardFont::Helvetica
        );
        assert_eq!(
            StandardFont::for_style(true, true, false),
            StandardFont::HelveticaBoldOblique
        );
        assert_eq!(
            StandardFont::for_style(true, false, true),
            StandardFont::Courier
        );
    }

    #[test]
    fn test_char_widths() {
        assert_eq!(StandardFont::Helvetica.char_width(' '), 278);
        assert_eq!(StandardFont::Helvetica.char_width('W'), 944);
        assert_eq!(StandardFont::Helvetica.char_width('~'), 584);
        assert_eq!(StandardFont::HelveticaBold.char_width('a'), 556);
        assert_eq!(StandardFont::HelveticaOblique.char_width('i'), 222);
        assert_eq!(StandardFont::Courier.char_width('i'), 600);
    }

    #[test]
    fn test_measure() {
        // "Hi" = 722 + 222
        let width = StandardFont::Helvetica.measure("Hi", 10.0);
        assert!((width - 9.44).abs() < 1e-4);
        assert!((StandardFont::Courier.measure("abc", 10.0) - 18.0).abs() < 1e-4);
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("Hello"), b"Hello".to_vec());
        assert_eq!(encode_win_ansi("\u{2022} caf\u{e9}"), vec![0x95, b' ', b'c', b'a', b'f', 0xE9]);
        assert_eq!(encode_win_ansi("\u{4e2d}"), vec![b'?']);
    }
}
