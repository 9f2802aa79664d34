//! Static font-metric tables for the two letter faces (Times-Roman, Times-Bold).
//!
//! Widths are the standard Type1 AFM advance widths in em units. Both faces are
//! PDF base-14 fonts, so viewers supply the glyphs; these tables only drive line
//! breaking and justification. Text is measured after WinAnsi encoding so the
//! measured bytes are exactly the bytes written to the content stream.
//! Index = byte - 32 for 0x20..=0x7E.

// ────────────────────────────────────────────────────────────────────────────
// Font face enum
// ────────────────────────────────────────────────────────────────────────────

/// The faces a letter is set in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    TimesRoman,
    TimesBold,
}

impl FontFace {
    pub fn for_weight(bold: bool) -> Self {
        if bold {
            FontFace::TimesBold
        } else {
            FontFace::TimesRoman
        }
    }

    /// PostScript name of the base-14 font.
    pub fn base_font(self) -> &'static str {
        match self {
            FontFace::TimesRoman => "Times-Roman",
            FontFace::TimesBold => "Times-Bold",
        }
    }

    /// Key of the font in the page resource dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontFace::TimesRoman => "F1",
            FontFace::TimesBold => "F2",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Physical page geometry in PDF points (1/72 in).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageConfig {
    pub width_pt: f32,
    pub height_pt: f32,
    /// Uniform margin on all four sides.
    pub margin_pt: f32,
}

impl PageConfig {
    pub fn text_width_pt(&self) -> f32 {
        self.width_pt - 2.0 * self.margin_pt
    }

    /// Y coordinate of the top of the text area (PDF origin is bottom-left).
    pub fn text_top_pt(&self) -> f32 {
        self.height_pt - self.margin_pt
    }

    pub fn text_bottom_pt(&self) -> f32 {
        self.margin_pt
    }
}

/// ISO A4 (210 × 297 mm) with 56pt margins all sides.
pub fn letter_page_config() -> PageConfig {
    PageConfig {
        width_pt: 595.2756,
        height_pt: 841.8898,
        margin_pt: 56.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a font face.
///
/// `widths[i]` = width of WinAnsi byte `(i + 32)`, covering 0x20 (space) through 0x7E (~).
pub struct FontMetricTable {
    pub face: FontFace,
    widths: [f32; 95],
    /// Fallback width for Latin-1 bytes without a dedicated entry.
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Width in em units of a single WinAnsi-encoded byte.
    pub fn byte_width(&self, byte: u8) -> f32 {
        match byte {
            0x20..=0x7E => self.widths[(byte - 0x20) as usize],
            _ => self.typographic_width(byte).unwrap_or(self.average_char_width),
        }
    }

    /// Width in em units of already-encoded text.
    pub fn measure_bytes(&self, bytes: &[u8]) -> f32 {
        bytes.iter().map(|&b| self.byte_width(b)).sum()
    }

    /// Quotes, dashes and the like that LLM output is full of.
    fn typographic_width(&self, byte: u8) -> Option<f32> {
        let bold = self.face == FontFace::TimesBold;
        let width = match byte {
            0x80 => 0.500,                            // €
            0x85 => 1.000,                            // …
            0x91 | 0x92 => 0.333,                     // ‘ ’
            0x93 | 0x94 => if bold { 0.500 } else { 0.444 }, // “ ”
            0x95 => 0.350,                            // •
            0x96 => 0.500,                            // –
            0x97 => 1.000,                            // —
            0x99 => if bold { 1.000 } else { 0.980 }, // ™
            0xA0 => 0.250,                            // nbsp
            _ => return None,
        };
        Some(width)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

/// Times-Roman — body, header and closing text.
static TIMES_ROMAN_TABLE: FontMetricTable = FontMetricTable {
    face: FontFace::TimesRoman,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.250, 0.333, 0.408, 0.500, 0.500, 0.833, 0.778, 0.180, 0.333, 0.333, 0.500, 0.564, 0.250, 0.333, 0.250, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.564, 0.564, 0.564, 0.444, 0.921,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.667, 0.667, 0.722, 0.611, 0.556, 0.722, 0.722, 0.333, 0.389, 0.722, 0.611, 0.889,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.722, 0.556, 0.722, 0.667, 0.556, 0.611, 0.722, 0.722, 0.944, 0.722, 0.722, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.469, 0.500, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.444, 0.500, 0.444, 0.500, 0.444, 0.333, 0.500, 0.500, 0.278, 0.278, 0.500, 0.278, 0.778,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.500, 0.500, 0.500, 0.500, 0.333, 0.389, 0.278, 0.500, 0.500, 0.722, 0.500, 0.500, 0.444,
        // {      |      }      ~
        0.480, 0.200, 0.480, 0.541,
    ],
    average_char_width: 0.500,
    space_width: 0.250,
};

/// Times-Bold — the candidate name and `<b>` spans.
static TIMES_BOLD_TABLE: FontMetricTable = FontMetricTable {
    face: FontFace::TimesBold,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.250, 0.333, 0.555, 0.500, 0.500, 1.000, 0.833, 0.278, 0.333, 0.333, 0.500, 0.570, 0.250, 0.333, 0.250, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.570, 0.570, 0.570, 0.500, 0.930,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.778, 0.389, 0.500, 0.778, 0.667, 0.944,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.611, 0.778, 0.722, 0.556, 0.667, 0.722, 0.722, 1.000, 0.722, 0.722, 0.667,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.581, 0.500, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.500, 0.556, 0.444, 0.556, 0.444, 0.333, 0.500, 0.556, 0.278, 0.333, 0.556, 0.278, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.500, 0.556, 0.556, 0.444, 0.389, 0.333, 0.556, 0.500, 0.722, 0.500, 0.500, 0.444,
        // {      |      }      ~
        0.394, 0.220, 0.394, 0.520,
    ],
    average_char_width: 0.540,
    space_width: 0.250,
};

/// Returns the static metric table for a given face.
pub fn get_metrics(face: FontFace) -> &'static FontMetricTable {
    match face {
        FontFace::TimesRoman => &TIMES_ROMAN_TABLE,
        FontFace::TimesBold => &TIMES_BOLD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::encoding::encode_win_ansi;

    fn measure(metrics: &FontMetricTable, s: &str) -> f32 {
        metrics.measure_bytes(&encode_win_ansi(s))
    }

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(measure(get_metrics(FontFace::TimesRoman), ""), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(FontFace::TimesRoman);
        // "Dear" = D(0.722) + e(0.444) + a(0.444) + r(0.333) = 1.943
        let width = measure(metrics, "Dear");
        assert!((width - 1.943).abs() < 1e-3, "Dear width should be ~1.943, got {width}");
    }

    #[test]
    fn test_bold_is_wider_than_roman() {
        let text = "Month-end closure and reconciliations";
        let roman = measure(get_metrics(FontFace::TimesRoman), text);
        let bold = measure(get_metrics(FontFace::TimesBold), text);
        assert!(bold > roman, "bold {bold} should exceed roman {roman}");
    }

    #[test]
    fn test_curly_quote_uses_typographic_width() {
        let metrics = get_metrics(FontFace::TimesRoman);
        assert!((measure(metrics, "\u{2019}") - 0.333).abs() < 1e-4);
        assert!((measure(metrics, "\u{2014}") - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_latin1_falls_back_to_average() {
        let metrics = get_metrics(FontFace::TimesRoman);
        assert!((measure(metrics, "é") - metrics.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_unencodable_measured_as_question_mark() {
        let metrics = get_metrics(FontFace::TimesRoman);
        assert_eq!(measure(metrics, "漢"), measure(metrics, "?"));
    }

    #[test]
    fn test_letter_page_config_is_a4_with_56pt_margins() {
        let config = letter_page_config();
        assert!((config.width_pt - 595.28).abs() < 0.01);
        assert!((config.height_pt - 841.89).abs() < 0.01);
        assert!((config.text_width_pt() - 483.28).abs() < 0.01);
        assert_eq!(config.text_bottom_pt(), 56.0);
    }

    #[test]
    fn test_faces_have_distinct_resources() {
        assert_ne!(
            FontFace::TimesRoman.resource_name(),
            FontFace::TimesBold.resource_name()
        );
        assert_eq!(FontFace::for_weight(true).base_font(), "Times-Bold");
    }
}
