// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A plain-text paragraph with uniform glyph advance and line height.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Insets, Point, Rect};
use smallvec::{SmallVec, smallvec};
use unicode_segmentation::UnicodeSegmentation;

use crate::paragraph::{LayoutContext, LocalPaintOptions, Paragraph};
use crate::types::{CaretInfo, HitTestResult};

/// Paint target for [`FixedPitchParagraph`].
pub trait FixedPitchCanvas {
    /// Fills a selection highlight.
    fn fill_selection(&mut self, rect: Rect);
    /// Draws a run of text with its top-left at `origin`.
    fn draw_text(&mut self, origin: Point, text: &str);
}

/// A [`Paragraph`] of plain text where every code point advances by the same width.
///
/// Caret stops fall on extended grapheme cluster boundaries and word boundaries on the
/// start of each word, so multi-code-point clusters behave like a single character for
/// navigation. Lines wrap greedily at word boundaries, and a word longer than a whole line
/// is broken at the last caret stop that fits. Trailing whitespace hangs past the wrap
/// width.
///
/// The text always ends in a `\n` terminator, which is appended if missing.
#[derive(Clone, Debug)]
pub struct FixedPitchParagraph {
    text: String,
    /// Byte offset of every code point, plus the end of the text.
    byte_offsets: Vec<usize>,
    advance: f64,
    line_height: f64,
    margins: Insets,
    caret_stops: Vec<usize>,
    word_boundaries: Vec<usize>,
    line_starts: SmallVec<[usize; 4]>,
    content_width: f64,
}

impl FixedPitchParagraph {
    /// Creates a paragraph with the given glyph advance and line height.
    pub fn new(text: impl Into<String>, advance: f64, line_height: f64) -> Self {
        debug_assert!(
            advance.is_finite() && advance > 0.0,
            "advance must be finite and positive; got {advance:?}"
        );
        debug_assert!(
            line_height.is_finite() && line_height >= 0.0,
            "line height must be finite and non-negative; got {line_height:?}"
        );
        let mut paragraph = Self {
            text: String::new(),
            byte_offsets: Vec::new(),
            advance,
            line_height,
            margins: Insets::ZERO,
            caret_stops: Vec::new(),
            word_boundaries: Vec::new(),
            line_starts: smallvec![0],
            content_width: 0.0,
        };
        paragraph.set_text(text);
        paragraph
    }

    /// Returns this paragraph with `margins`.
    #[must_use]
    pub fn with_margins(mut self, margins: Insets) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the paragraph margins.
    pub fn set_margins(&mut self, margins: Insets) {
        self.margins = margins;
    }

    /// The text, including the terminator.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text.
    ///
    /// Lines are reset to a single unwrapped line until the next layout.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if !self.text.ends_with('\n') {
            self.text.push('\n');
        }
        self.byte_offsets = self
            .text
            .char_indices()
            .map(|(byte, _)| byte)
            .chain([self.text.len()])
            .collect();

        self.caret_stops = self
            .text
            .grapheme_indices(true)
            .map(|(byte, _)| self.char_index(byte))
            .collect();

        let mut words = Vec::new();
        words.push(0);
        for (byte, segment) in self.text.split_word_bound_indices() {
            if !segment.chars().all(char::is_whitespace) {
                words.push(self.char_index(byte));
            }
        }
        words.push(self.len() - 1);
        words.dedup();
        self.word_boundaries = words;

        self.break_lines(None);
    }

    /// Horizontal advance of every code point.
    #[must_use]
    pub const fn advance(&self) -> f64 {
        self.advance
    }

    /// Height of every line.
    #[must_use]
    pub const fn line_height(&self) -> f64 {
        self.line_height
    }

    /// Number of lines as of the last layout.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    fn char_index(&self, byte: usize) -> usize {
        self.byte_offsets.partition_point(|&b| b < byte)
    }

    fn slice(&self, range: Range<usize>) -> &str {
        &self.text[self.byte_offsets[range.start]..self.byte_offsets[range.end]]
    }

    fn line_range(&self, line: usize) -> Range<usize> {
        let start = self.line_starts[line];
        let end = self.line_starts.get(line + 1).copied().unwrap_or(self.len());
        start..end
    }

    /// Code points on `line` before any trailing whitespace.
    fn visible_len(&self, line: usize) -> usize {
        self.slice(self.line_range(line)).trim_end().chars().count()
    }

    fn line_of(&self, offset: usize) -> usize {
        self.line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    fn stop_at_or_before(&self, offset: usize) -> Option<usize> {
        let i = self.caret_stops.partition_point(|&stop| stop <= offset);
        i.checked_sub(1).map(|i| self.caret_stops[i])
    }

    fn break_lines(&mut self, columns: Option<usize>) {
        self.line_starts.clear();
        self.line_starts.push(0);

        if let Some(columns) = columns {
            let mut line_start = 0;
            for (byte, segment) in self.text.split_word_bound_indices() {
                if segment.chars().all(char::is_whitespace) {
                    continue;
                }
                let start = self.char_index(byte);
                let end = start + segment.chars().count();
                if end - line_start > columns && start > line_start {
                    line_start = start;
                    self.line_starts.push(line_start);
                }
                while end - line_start > columns {
                    line_start = self
                        .stop_at_or_before(line_start + columns)
                        .filter(|&stop| stop > line_start)
                        .unwrap_or(line_start + columns);
                    self.line_starts.push(line_start);
                }
            }
        }

        let widest = (0..self.line_count())
            .map(|line| self.visible_len(line))
            .max()
            .unwrap_or(0);
        self.content_width = widest as f64 * self.advance;
    }

    fn column_at(&self, x: f64) -> f64 {
        x / self.advance
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Negative and NaN inputs saturate to zero, and callers clamp the upper end"
)]
fn to_index(value: f64) -> usize {
    value as usize
}

impl Paragraph for FixedPitchParagraph {
    type Canvas = dyn FixedPitchCanvas;

    fn layout(&mut self, cx: &LayoutContext) {
        let columns = cx
            .available_width(self.margins)
            .map(|width| to_index(self.column_at(width).floor()).max(1));
        self.break_lines(columns);
    }

    fn paint(&self, canvas: &mut Self::Canvas, options: &LocalPaintOptions) {
        for line in 0..self.line_count() {
            let range = self.line_range(line);
            let top = options.origin.y + line as f64 * self.line_height;
            if let Some(selection) = &options.selection {
                let start = selection.start.max(range.start);
                let end = selection.end.min(range.end);
                if start < end {
                    let x0 = options.origin.x + (start - range.start) as f64 * self.advance;
                    let x1 = options.origin.x + (end - range.start) as f64 * self.advance;
                    canvas.fill_selection(Rect::new(x0, top, x1, top + self.line_height));
                }
            }
            let text = self.slice(range).trim_end();
            if !text.is_empty() {
                canvas.draw_text(Point::new(options.origin.x, top), text);
            }
        }
    }

    fn hit_test(&self, point: Point) -> HitTestResult {
        let last = self.line_count() - 1;
        let line = to_index((point.y / self.line_height).floor()).min(last);

        let mut result = self.hit_test_line(line, point.x);
        if point.y >= 0.0 && point.y < self.content_height() {
            result.over_line = Some(line);
            if point.x >= 0.0 {
                let column = to_index(self.column_at(point.x).floor());
                if column < self.visible_len(line) {
                    result.over_code_point_index = Some(self.line_starts[line] + column);
                }
            }
        }
        result
    }

    fn hit_test_line(&self, line_index: usize, x: f64) -> HitTestResult {
        let last = self.line_count() - 1;
        let line = line_index.min(last);
        let range = self.line_range(line);
        // Wrapped lines end at the next line's start, drawn with the alternate caret. The
        // last line ends before the terminator.
        let max = if line == last {
            self.len() - 1
        } else {
            range.end
        };
        let column = to_index(self.column_at(x).round()).min(max.saturating_sub(range.start));
        let target = range.start + column;
        let closest = self
            .stop_at_or_before(target)
            .filter(|&stop| stop >= range.start)
            .unwrap_or(range.start);
        HitTestResult {
            closest_code_point_index: closest,
            alt_caret_position: line != last && closest == range.end,
            over_code_point_index: None,
            closest_line: Some(line),
            over_line: None,
        }
    }

    fn caret_info(&self, offset: usize, alt_position: bool) -> CaretInfo {
        let offset = offset.min(self.len());
        let mut line = self.line_of(offset);
        if alt_position && line > 0 && self.line_starts[line] == offset {
            line -= 1;
        }
        let x = (offset - self.line_starts[line]) as f64 * self.advance;
        let top = line as f64 * self.line_height;
        CaretInfo {
            code_point_index: offset,
            caret_x: x,
            caret_rect: Rect::new(x, top, x, top + self.line_height),
            line_index: Some(line),
        }
    }

    fn len(&self) -> usize {
        self.byte_offsets.len() - 1
    }

    fn margins(&self) -> Insets {
        self.margins
    }

    fn content_height(&self) -> f64 {
        self.line_count() as f64 * self.line_height
    }

    fn content_width(&self) -> f64 {
        self.content_width
    }

    fn caret_indices(&self) -> &[usize] {
        &self.caret_stops
    }

    fn word_boundary_indices(&self) -> &[usize] {
        &self.word_boundaries
    }

    fn line_indices(&self) -> &[usize] {
        &self.line_starts
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Insets, Point, Rect};

    use super::FixedPitchParagraph;
    use crate::paragraph::{LayoutContext, Paragraph};

    fn wrap_at(paragraph: &mut FixedPitchParagraph, columns: f64) {
        paragraph.layout(&LayoutContext {
            page_width: columns * paragraph.advance(),
            line_wrap: true,
            margins: Insets::ZERO,
        });
    }

    #[test]
    fn terminator_is_appended_once() {
        let a = FixedPitchParagraph::new("abc", 10.0, 20.0);
        let b = FixedPitchParagraph::new("abc\n", 10.0, 20.0);
        assert_eq!(a.text(), "abc\n");
        assert_eq!(b.text(), "abc\n");
        assert_eq!(a.len(), 4);
        assert_eq!(FixedPitchParagraph::new("", 10.0, 20.0).len(), 1);
    }

    #[test]
    fn tables_are_in_code_points() {
        // Multi-byte code points must not skew offsets.
        let p = FixedPitchParagraph::new("héllo wörld", 10.0, 20.0);
        assert_eq!(p.len(), 12);
        assert_eq!(p.caret_indices().len(), 12);
        assert_eq!(p.word_boundary_indices(), &[0, 6, 11]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let mut p = FixedPitchParagraph::new("aaaa bbbbbbbb cc dddddddd", 10.0, 20.0);
        wrap_at(&mut p, 10.0);
        assert_eq!(p.line_indices(), &[0, 5, 14, 17]);
        assert_eq!(p.content_height(), 80.0);
        assert_eq!(p.content_width(), 80.0);
    }

    #[test]
    fn long_words_break_mid_word() {
        let mut p = FixedPitchParagraph::new("abcdefghij", 10.0, 20.0);
        wrap_at(&mut p, 4.0);
        assert_eq!(p.line_indices(), &[0, 4, 8]);
    }

    #[test]
    fn unwrapped_layout_is_a_single_line() {
        let mut p = FixedPitchParagraph::new("aaaa bbbbbbbb cc dddddddd", 10.0, 20.0);
        wrap_at(&mut p, 10.0);
        p.layout(&LayoutContext {
            page_width: 100.0,
            line_wrap: false,
            margins: Insets::ZERO,
        });
        assert_eq!(p.line_indices(), &[0]);
        assert_eq!(p.content_width(), 250.0);
    }

    #[test]
    fn alternate_caret_renders_at_end_of_previous_line() {
        let mut p = FixedPitchParagraph::new("aaaa bbbb", 10.0, 20.0);
        wrap_at(&mut p, 6.0);
        assert_eq!(p.line_indices(), &[0, 5]);

        let start = p.caret_info(5, false);
        assert_eq!(start.line_index, Some(1));
        assert_eq!(start.caret_rect, Rect::new(0.0, 20.0, 0.0, 40.0));

        let end = p.caret_info(5, true);
        assert_eq!(end.line_index, Some(0));
        assert_eq!(end.caret_x, 50.0);
    }

    #[test]
    fn hit_test_line_clamps_to_line_end() {
        let mut p = FixedPitchParagraph::new("aaaa bbbb", 10.0, 20.0);
        wrap_at(&mut p, 6.0);

        let wrapped = p.hit_test_line(0, 500.0);
        assert_eq!(wrapped.closest_code_point_index, 5);
        assert!(wrapped.alt_caret_position);

        let last = p.hit_test_line(1, 500.0);
        assert_eq!(last.closest_code_point_index, 9);
        assert!(!last.alt_caret_position);

        let before = p.hit_test_line(1, -30.0);
        assert_eq!(before.closest_code_point_index, 5);
    }

    #[test]
    fn hit_test_line_accepts_unbounded_x() {
        let mut p = FixedPitchParagraph::new("aaaa bbbb", 10.0, 20.0);
        wrap_at(&mut p, 6.0);

        let wrapped = p.hit_test_line(0, f64::INFINITY);
        assert_eq!(wrapped.closest_code_point_index, 5);
        assert!(wrapped.alt_caret_position);

        assert_eq!(p.hit_test_line(1, 1e300).closest_code_point_index, 9);
        assert_eq!(p.hit_test_line(1, f64::NEG_INFINITY).closest_code_point_index, 5);
        assert_eq!(p.hit_test(Point::new(f64::INFINITY, 25.0)).closest_code_point_index, 9);
    }

    #[test]
    fn hit_test_reports_what_is_under_the_point() {
        let p = FixedPitchParagraph::new("ab cd", 10.0, 20.0);
        let over = p.hit_test(Point::new(34.0, 5.0));
        assert_eq!(over.closest_code_point_index, 3);
        assert_eq!(over.over_code_point_index, Some(3));
        assert_eq!(over.over_line, Some(0));

        let past_end = p.hit_test(Point::new(80.0, 5.0));
        assert_eq!(past_end.closest_code_point_index, 5);
        assert_eq!(past_end.over_code_point_index, None);
        assert_eq!(past_end.over_line, Some(0));

        let below = p.hit_test(Point::new(12.0, 50.0));
        assert_eq!(below.closest_code_point_index, 1);
        assert_eq!(below.closest_line, Some(0));
        assert_eq!(below.over_line, None);
    }
}
