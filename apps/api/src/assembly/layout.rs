//! Line breaking, justification and pagination.
//!
//! Greedy word wrap against the page's text width using the static Times
//! metrics. Justified lines spread the slack evenly over inter-word gaps; the
//! last line of a paragraph stays ragged. A new page starts whenever the next
//! line would cross the bottom margin. Nothing is ever dropped: a word wider
//! than the line sits alone on its line and overflows to the right.

use crate::assembly::encoding::encode_win_ansi;
use crate::assembly::font_metrics::{get_metrics, FontFace, PageConfig};
use crate::assembly::letter::{Alignment, LetterBlock, ParagraphStyle};
use crate::assembly::markup::Span;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// A string of WinAnsi bytes drawn at one position in one face.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRun {
    pub x: f32,
    /// Baseline.
    pub y: f32,
    pub face: FontFace,
    pub font_size_pt: f32,
    pub bytes: Vec<u8>,
}

impl PlacedRun {
    pub fn width_pt(&self) -> f32 {
        get_metrics(self.face).measure_bytes(&self.bytes) * self.font_size_pt
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub runs: Vec<PlacedRun>,
}

// ────────────────────────────────────────────────────────────────────────────
// Words
// ────────────────────────────────────────────────────────────────────────────

/// Part of a word in a single face, e.g. `MIS` in `<b>MIS</b>,`.
#[derive(Debug, Clone, PartialEq)]
struct Fragment {
    face: FontFace,
    bytes: Vec<u8>,
}

/// A whitespace-delimited word, possibly mixing faces.
#[derive(Debug, Clone, PartialEq)]
struct Word {
    fragments: Vec<Fragment>,
}

impl Word {
    fn width_em(&self) -> f32 {
        self.fragments
            .iter()
            .map(|f| get_metrics(f.face).measure_bytes(&f.bytes))
            .sum()
    }
}

/// Splits spans into words on any whitespace run except no-break space, which
/// stays inside its word. Style changes inside a word (no whitespace between)
/// keep the word whole.
fn split_words(spans: &[Span]) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current: Vec<Fragment> = Vec::new();

    for span in spans {
        let face = FontFace::for_weight(span.bold);
        for c in span.text.chars() {
            if c.is_whitespace() && c != '\u{a0}' {
                if !current.is_empty() {
                    words.push(Word {
                        fragments: std::mem::take(&mut current),
                    });
                }
                continue;
            }
            let encoded = encode_win_ansi(c.encode_utf8(&mut [0; 4]));
            match current.last_mut() {
                Some(fragment) if fragment.face == face => fragment.bytes.extend(encoded),
                _ => current.push(Fragment {
                    face,
                    bytes: encoded,
                }),
            }
        }
    }
    if !current.is_empty() {
        words.push(Word { fragments: current });
    }

    words
}

/// Greedy fill: indices of words per line.
fn break_lines(words: &[Word], max_width_em: f32, space_em: f32) -> Vec<Vec<usize>> {
    let mut lines: Vec<Vec<usize>> = Vec::new();
    let mut line: Vec<usize> = Vec::new();
    let mut width = 0.0_f32;

    for (i, word) in words.iter().enumerate() {
        let word_w = word.width_em();
        if !line.is_empty() && width + space_em + word_w > max_width_em {
            lines.push(std::mem::take(&mut line));
            width = 0.0;
        }
        if !line.is_empty() {
            width += space_em;
        }
        width += word_w;
        line.push(i);
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

// ────────────────────────────────────────────────────────────────────────────
// Pagination
// ────────────────────────────────────────────────────────────────────────────

struct Cursor<'a> {
    config: &'a PageConfig,
    pages: Vec<PageLayout>,
    /// Top of the next line box on the current page.
    y: f32,
}

impl<'a> Cursor<'a> {
    fn new(config: &'a PageConfig) -> Self {
        Self {
            config,
            pages: vec![PageLayout::default()],
            y: config.text_top_pt(),
        }
    }

    fn page_is_empty(&self) -> bool {
        self.y >= self.config.text_top_pt()
    }

    /// Reserves one line box, breaking the page if needed; returns the baseline.
    fn next_baseline(&mut self, style: &ParagraphStyle) -> f32 {
        // Tolerance keeps float drift from pushing a fitting line onto a new page.
        if self.y - style.leading_pt < self.config.text_bottom_pt() - 0.01 && !self.page_is_empty() {
            self.pages.push(PageLayout::default());
            self.y = self.config.text_top_pt();
        }
        let baseline = self.y - style.font_size_pt;
        self.y -= style.leading_pt;
        baseline
    }

    fn space(&mut self, points: f32) {
        self.y -= points;
    }

    fn push_run(&mut self, run: PlacedRun) {
        if let Some(page) = self.pages.last_mut() {
            page.runs.push(run);
        }
    }
}

/// Lays out all blocks onto as many pages as needed (always at least one).
pub fn layout_blocks(blocks: &[LetterBlock], config: &PageConfig) -> Vec<PageLayout> {
    let mut cursor = Cursor::new(config);

    for block in blocks {
        let style = &block.style;
        for hard_line in &block.lines {
            layout_hard_line(&mut cursor, hard_line, style);
        }
        cursor.space(style.space_after_pt);
    }

    cursor.pages
}

fn layout_hard_line(cursor: &mut Cursor<'_>, spans: &[Span], style: &ParagraphStyle) {
    let words = split_words(spans);
    if words.is_empty() {
        cursor.next_baseline(style);
        return;
    }

    let size = style.font_size_pt;
    let max_width_em = cursor.config.text_width_pt() / size;
    let space_em = get_metrics(FontFace::TimesRoman).space_width;
    let lines = break_lines(&words, max_width_em, space_em);
    let last = lines.len() - 1;

    for (line_index, indices) in lines.iter().enumerate() {
        let baseline = cursor.next_baseline(style);
        let natural_em: f32 = indices.iter().map(|&i| words[i].width_em()).sum::<f32>()
            + space_em * (indices.len() - 1) as f32;

        let justify = style.alignment == Alignment::Justify && line_index != last && indices.len() > 1;
        let gap_em = if justify {
            space_em + (max_width_em - natural_em).max(0.0) / (indices.len() - 1) as f32
        } else {
            space_em
        };

        let mut x = cursor.config.margin_pt;
        for (position, &i) in indices.iter().enumerate() {
            if position > 0 {
                x += gap_em * size;
            }
            for fragment in &words[i].fragments {
                let run = PlacedRun {
                    x,
                    y: baseline,
                    face: fragment.face,
                    font_size_pt: size,
                    bytes: fragment.bytes.clone(),
                };
                x += run.width_pt();
                cursor.push_run(run);
            }
        }
    }
}
