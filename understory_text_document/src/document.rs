// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document layout: paragraph flow, code point and spatial lookup, and query composition.

use alloc::vec::Vec;
use core::ops::Range;

use kurbo::{Insets, Point, Rect};

use crate::paragraph::{LayoutContext, LocalPaintOptions, Paragraph};
use crate::types::{CaretInfo, HitTestResult};

/// Construction parameters for a [`Document`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DocumentConfig {
    /// Document margins, applied around the whole paragraph flow.
    pub margins: Insets,
    /// Page width, including margins. Only consulted when `line_wrap` is set.
    pub page_width: f64,
    /// Whether paragraphs wrap to the page width.
    pub line_wrap: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            margins: Insets::uniform(10.0),
            page_width: 1000.0,
            line_wrap: true,
        }
    }
}

/// Painting parameters for [`Document::paint`], expressed in document space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaintOptions {
    /// Selected document code points. Reversed ranges are accepted.
    pub selection: Option<Range<usize>>,
    /// Only paragraphs whose content overlaps this rectangle vertically are painted.
    pub clip: Option<Rect>,
}

/// Where the layout pass put a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParagraphPlacement {
    /// Top-left of the paragraph's content box in document space.
    pub origin: Point,
    /// Document code point index of the paragraph's first code point.
    pub code_point_index: usize,
    /// Paragraph length in code points at layout time.
    pub len: usize,
    /// Content height at layout time.
    pub content_height: f64,
}

impl ParagraphPlacement {
    /// Bottom edge of the content box.
    #[must_use]
    pub fn content_bottom(&self) -> f64 {
        self.origin.y + self.content_height
    }

    /// The document code points covered by this paragraph.
    #[must_use]
    pub fn code_point_range(&self) -> Range<usize> {
        self.code_point_index..self.code_point_index + self.len
    }

    fn local_selection(&self, selection: &Range<usize>) -> Option<Range<usize>> {
        let start = selection
            .start
            .saturating_sub(self.code_point_index)
            .min(self.len);
        let end = selection.end.saturating_sub(self.code_point_index).min(self.len);
        (start < end).then_some(start..end)
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct LayoutCache {
    measured_height: f64,
    total_length: usize,
    valid: bool,
}

/// An ordered flow of paragraphs with document-level hit testing and caret navigation.
///
/// Layout is lazy. Mutations that affect geometry (page width, line wrap, or access to a
/// paragraph through [`Document::paragraph_mut`]) only clear a validity flag, and every
/// geometry query lays the document out again first if needed. This is why queries take
/// `&mut self`. Values returned by queries are snapshots and go stale on the next mutation.
///
/// ## Example
///
/// ```rust
/// use kurbo::Point;
/// use understory_text_document::{Document, DocumentConfig, FixedPitchParagraph};
///
/// let mut doc = Document::with_paragraphs(
///     DocumentConfig::default(),
///     [
///         FixedPitchParagraph::new("Hello", 8.0, 16.0),
///         FixedPitchParagraph::new("World", 8.0, 16.0),
///     ],
/// );
///
/// // Each paragraph carries a trailing terminator.
/// assert_eq!(doc.length(), 12);
/// assert_eq!(doc.paragraph_for_code_point_index(7), Some((1, 1)));
///
/// let hit = doc.hit_test(Point::new(10.0 + 8.0 * 2.0, 10.0));
/// assert_eq!(hit.closest_code_point_index, 2);
/// ```
#[derive(Clone, Debug)]
pub struct Document<P: Paragraph> {
    pub(crate) paragraphs: Vec<P>,
    pub(crate) placements: Vec<ParagraphPlacement>,
    margins: Insets,
    page_width: f64,
    line_wrap: bool,
    cache: LayoutCache,
}

impl<P: Paragraph> Document<P> {
    /// Creates an empty document.
    #[must_use]
    pub fn new(config: DocumentConfig) -> Self {
        Self::with_paragraphs(config, [])
    }

    /// Creates a document from paragraphs in reading order.
    #[must_use]
    pub fn with_paragraphs(config: DocumentConfig, paragraphs: impl IntoIterator<Item = P>) -> Self {
        debug_assert!(
            config.page_width.is_finite(),
            "page width must be finite; got {:?}",
            config.page_width
        );
        Self {
            paragraphs: paragraphs.into_iter().collect(),
            placements: Vec::new(),
            margins: config.margins,
            page_width: config.page_width,
            line_wrap: config.line_wrap,
            cache: LayoutCache::default(),
        }
    }

    /// Returns the configuration the document currently lays out with.
    #[must_use]
    pub fn config(&self) -> DocumentConfig {
        DocumentConfig {
            margins: self.margins,
            page_width: self.page_width,
            line_wrap: self.line_wrap,
        }
    }

    /// Document margins.
    #[must_use]
    pub const fn margins(&self) -> Insets {
        self.margins
    }

    /// Page width, including margins.
    #[must_use]
    pub const fn page_width(&self) -> f64 {
        self.page_width
    }

    /// Sets the page width.
    pub fn set_page_width(&mut self, page_width: f64) {
        debug_assert!(
            page_width.is_finite(),
            "page width must be finite; got {page_width:?}"
        );
        if page_width != self.page_width {
            self.page_width = page_width;
            self.invalidate_layout();
        }
    }

    /// Whether paragraphs wrap to the page width.
    #[must_use]
    pub const fn line_wrap(&self) -> bool {
        self.line_wrap
    }

    /// Enables or disables line wrapping.
    pub fn set_line_wrap(&mut self, line_wrap: bool) {
        if line_wrap != self.line_wrap {
            self.line_wrap = line_wrap;
            self.invalidate_layout();
        }
    }

    /// The paragraphs in reading order.
    #[must_use]
    pub fn paragraphs(&self) -> &[P] {
        &self.paragraphs
    }

    /// Returns the paragraph at `index`.
    #[must_use]
    pub fn paragraph(&self, index: usize) -> Option<&P> {
        self.paragraphs.get(index)
    }

    /// Returns the paragraph at `index` for modification, invalidating the layout.
    pub fn paragraph_mut(&mut self, index: usize) -> Option<&mut P> {
        self.invalidate_layout();
        self.paragraphs.get_mut(index)
    }

    /// Returns where the paragraph at `index` was placed, laying out first if needed.
    pub fn placement(&mut self, index: usize) -> Option<ParagraphPlacement> {
        self.layout();
        self.placements.get(index).copied()
    }

    /// Marks the layout stale. The next query lays the document out again.
    pub fn invalidate_layout(&mut self) {
        self.cache.valid = false;
    }

    /// Returns `true` if the cached layout is current.
    #[must_use]
    pub const fn is_layout_valid(&self) -> bool {
        self.cache.valid
    }

    /// Lays out every paragraph if the cached layout is stale.
    ///
    /// Paragraphs are stacked top to bottom. Adjacent vertical margins collapse: the gap
    /// between two paragraphs is the larger of the upper one's bottom margin and the lower
    /// one's top margin, and the document's top and bottom margins collapse the same way
    /// with the first and last paragraphs.
    pub fn layout(&mut self) {
        if self.cache.valid {
            return;
        }

        let cx = LayoutContext {
            page_width: self.page_width,
            line_wrap: self.line_wrap,
            margins: self.margins,
        };

        let mut y = 0.0;
        let mut prev_margin = self.margins.y0;
        let mut cursor = 0;
        self.placements.clear();
        for paragraph in &mut self.paragraphs {
            paragraph.layout(&cx);
            let margins = paragraph.margins();
            let placement = ParagraphPlacement {
                origin: Point::new(self.margins.x0 + margins.x0, y + margins.y0.max(prev_margin)),
                code_point_index: cursor,
                len: paragraph.len(),
                content_height: paragraph.content_height(),
            };
            y = placement.content_bottom();
            prev_margin = margins.y1;
            cursor += placement.len;
            self.placements.push(placement);
        }

        self.cache = LayoutCache {
            measured_height: y + prev_margin.max(self.margins.y1),
            total_length: cursor,
            valid: true,
        };
        tracing::trace!(
            target: "text_document.layout",
            paragraphs = self.paragraphs.len(),
            measured_height = self.cache.measured_height,
            length = self.cache.total_length,
            "layout"
        );
    }

    /// Total length in code points.
    pub fn length(&mut self) -> usize {
        self.layout();
        self.cache.total_length
    }

    /// Total height, including margins.
    pub fn measured_height(&mut self) -> f64 {
        self.layout();
        self.cache.measured_height
    }

    /// Total width.
    ///
    /// This is the page width, margins included, when lines wrap. Otherwise it is the
    /// content width of the widest paragraph, or zero for a document without paragraphs.
    pub fn measured_width(&mut self) -> f64 {
        self.layout();
        if self.line_wrap {
            return self.page_width;
        }
        self.paragraphs
            .iter()
            .map(|p| p.content_width())
            .fold(0.0, f64::max)
    }

    /// Finds the paragraph holding a document code point index.
    ///
    /// Returns the paragraph index and the offset within it. Indices at or past the end of
    /// the document resolve to the last paragraph, and offsets are clamped to the last code
    /// point of their paragraph. Returns `None` for a document without paragraphs.
    pub fn paragraph_for_code_point_index(&mut self, code_point_index: usize) -> Option<(usize, usize)> {
        self.layout();
        self.locate_code_point(code_point_index)
    }

    /// Finds the paragraph whose content is closest to `y`.
    ///
    /// Points inside a paragraph's vertical extent resolve to that paragraph. Points in the
    /// margin between two paragraphs resolve to the nearer content edge, preferring the
    /// lower paragraph on ties. Points above or below the flow resolve to the first or last
    /// paragraph. Returns `None` for a document without paragraphs.
    pub fn closest_paragraph(&mut self, y: f64) -> Option<usize> {
        self.layout();
        self.locate_y(y)
    }

    /// Hit tests a point in document space.
    ///
    /// Code point indices in the result are document-relative. Line numbers are not
    /// meaningful at document level and are always `None`.
    pub fn hit_test(&mut self, point: Point) -> HitTestResult {
        self.layout();
        self.hit_test_laid_out(point)
    }

    /// Resolves caret geometry for a document code point index, in document space.
    ///
    /// `line_index` is always `None`.
    pub fn caret_info(&mut self, code_point_index: usize, alt_position: bool) -> CaretInfo {
        self.layout();
        self.caret_info_laid_out(code_point_index, alt_position)
    }

    /// Paints the document, paragraph by paragraph in reading order.
    ///
    /// Each paragraph receives its own [`LocalPaintOptions`] with the selection translated
    /// into its code points. `options` itself is never modified.
    pub fn paint(&mut self, canvas: &mut P::Canvas, options: &PaintOptions) {
        self.layout();

        let visible = match options.clip {
            Some(clip) => self.paragraphs_in_band(clip.y0, clip.y1),
            None => 0..self.paragraphs.len(),
        };
        let selection = options
            .selection
            .as_ref()
            .map(|s| s.start.min(s.end)..s.start.max(s.end));

        tracing::trace!(
            target: "text_document.paint",
            first = visible.start,
            end = visible.end,
            culled = self.paragraphs.len() - visible.len(),
            "paint"
        );

        for index in visible {
            let placement = &self.placements[index];
            let local = LocalPaintOptions {
                origin: placement.origin,
                selection: selection.as_ref().and_then(|s| placement.local_selection(s)),
            };
            self.paragraphs[index].paint(canvas, &local);
        }
    }

    // --- internals, all assume a valid layout ---

    pub(crate) fn total_length(&self) -> usize {
        debug_assert!(self.cache.valid, "layout must be valid");
        self.cache.total_length
    }

    pub(crate) fn locate_code_point(&self, code_point_index: usize) -> Option<(usize, usize)> {
        let last = self.placements.len().checked_sub(1)?;
        let index = self
            .placements
            .partition_point(|p| p.code_point_index + p.len <= code_point_index)
            .min(last);
        let placement = &self.placements[index];
        debug_assert!(
            code_point_index >= placement.code_point_index,
            "code point {code_point_index} resolved to paragraph {index} starting at {}",
            placement.code_point_index
        );
        let offset = code_point_index
            .saturating_sub(placement.code_point_index)
            .min(placement.len.saturating_sub(1));
        Some((index, offset))
    }

    pub(crate) fn locate_y(&self, y: f64) -> Option<usize> {
        let last = self.placements.len().checked_sub(1)?;
        let index = self.placements.partition_point(|p| p.content_bottom() < y);
        if index > last {
            return Some(last);
        }
        let next = &self.placements[index];
        if index == 0 || next.origin.y <= y {
            return Some(index);
        }
        // In the margin between two paragraphs, so both distances are non-negative.
        let prev = &self.placements[index - 1];
        if y - prev.content_bottom() < next.origin.y - y {
            Some(index - 1)
        } else {
            Some(index)
        }
    }

    /// Paragraphs whose content overlaps `y0..=y1`.
    fn paragraphs_in_band(&self, y0: f64, y1: f64) -> Range<usize> {
        let start = self.placements.partition_point(|p| p.content_bottom() < y0);
        let end = self.placements.partition_point(|p| p.origin.y <= y1);
        start..end.max(start)
    }

    pub(crate) fn hit_test_laid_out(&self, point: Point) -> HitTestResult {
        let Some(index) = self.locate_y(point.y) else {
            return HitTestResult::default();
        };
        let placement = &self.placements[index];
        self.paragraphs[index]
            .hit_test(point - placement.origin.to_vec2())
            .to_document(placement.code_point_index)
    }

    pub(crate) fn caret_info_laid_out(&self, code_point_index: usize, alt_position: bool) -> CaretInfo {
        let Some((index, offset)) = self.locate_code_point(code_point_index) else {
            let origin = Point::new(self.margins.x0, self.margins.y0);
            return CaretInfo {
                caret_x: origin.x,
                caret_rect: Rect::from_origin_size(origin, (0.0, 0.0)),
                ..CaretInfo::default()
            };
        };
        let placement = &self.placements[index];
        self.paragraphs[index]
            .caret_info(offset, alt_position)
            .to_document(placement.code_point_index, placement.origin.to_vec2())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::{Insets, Point, Rect};

    use super::{Document, DocumentConfig, PaintOptions};
    use crate::fixed_pitch::{FixedPitchCanvas, FixedPitchParagraph};

    fn para(text: &str) -> FixedPitchParagraph {
        FixedPitchParagraph::new(text, 10.0, 20.0)
    }

    fn two_paragraphs() -> Document<FixedPitchParagraph> {
        // 10 and 20 code points, terminators included.
        Document::with_paragraphs(
            DocumentConfig::default(),
            [para("abcdefghi"), para("abcdefghijklmnopqrs")],
        )
    }

    #[derive(Default)]
    struct Recorder {
        fills: Vec<Rect>,
        texts: Vec<(Point, String)>,
    }

    impl FixedPitchCanvas for Recorder {
        fn fill_selection(&mut self, rect: Rect) {
            self.fills.push(rect);
        }

        fn draw_text(&mut self, origin: Point, text: &str) {
            self.texts.push((origin, text.into()));
        }
    }

    #[test]
    fn paragraphs_are_contiguous_in_code_points() {
        let mut doc = Document::with_paragraphs(
            DocumentConfig::default(),
            [para("one"), para(""), para("three three"), para("four")],
        );
        assert_eq!(doc.length(), 4 + 1 + 12 + 5);
        let placements: Vec<_> = (0..4).map(|i| doc.placement(i).unwrap()).collect();
        assert_eq!(placements[0].code_point_index, 0);
        for pair in placements.windows(2) {
            assert_eq!(pair[1].code_point_index, pair[0].code_point_index + pair[0].len);
        }
    }

    #[test]
    fn layout_stacks_paragraphs_inside_document_margins() {
        let mut doc = two_paragraphs();
        let a = doc.placement(0).unwrap();
        let b = doc.placement(1).unwrap();
        assert_eq!(a.origin, Point::new(10.0, 10.0));
        assert_eq!(a.content_height, 20.0);
        assert_eq!(b.origin, Point::new(10.0, 30.0));
        assert_eq!(doc.measured_height(), 60.0);
        assert_eq!(doc.length(), 30);
    }

    #[test]
    fn adjacent_margins_collapse_to_the_larger() {
        let mut doc = Document::with_paragraphs(
            DocumentConfig {
                margins: Insets::ZERO,
                ..DocumentConfig::default()
            },
            [
                para("upper").with_margins(Insets::new(0.0, 0.0, 0.0, 20.0)),
                para("lower").with_margins(Insets::new(0.0, 10.0, 0.0, 0.0)),
            ],
        );
        let a = doc.placement(0).unwrap();
        let b = doc.placement(1).unwrap();
        assert_eq!(b.origin.y - a.content_bottom(), 20.0);
        // The last paragraph's bottom margin is 0, the document's is 0.
        assert_eq!(doc.measured_height(), b.content_bottom());
    }

    #[test]
    fn document_margins_collapse_with_paragraph_margins() {
        let mut doc = Document::with_paragraphs(
            DocumentConfig::default(),
            [para("only").with_margins(Insets::new(4.0, 25.0, 0.0, 3.0))],
        );
        let p = doc.placement(0).unwrap();
        assert_eq!(p.origin, Point::new(14.0, 25.0));
        assert_eq!(doc.measured_height(), 25.0 + 20.0 + 10.0);
    }

    #[test]
    fn layout_is_idempotent() {
        let mut doc = two_paragraphs();
        doc.layout();
        let first: Vec<_> = doc.placements.clone();
        let height = doc.measured_height();
        let length = doc.length();

        doc.invalidate_layout();
        doc.layout();
        assert_eq!(doc.placements, first);
        assert_eq!(doc.measured_height(), height);
        assert_eq!(doc.length(), length);
    }

    #[test]
    fn setters_only_invalidate_on_change() {
        let mut doc = two_paragraphs();
        doc.layout();
        doc.set_page_width(1000.0);
        doc.set_line_wrap(true);
        assert!(doc.is_layout_valid());

        doc.set_page_width(500.0);
        assert!(!doc.is_layout_valid());
        doc.layout();
        doc.set_line_wrap(false);
        assert!(!doc.is_layout_valid());
        doc.layout();
        let _ = doc.paragraph_mut(0);
        assert!(!doc.is_layout_valid());
    }

    #[test]
    fn narrowing_the_page_rewraps_paragraphs() {
        let mut doc = Document::with_paragraphs(
            DocumentConfig {
                margins: Insets::ZERO,
                ..DocumentConfig::default()
            },
            [para("alpha beta gamma")],
        );
        assert_eq!(doc.measured_height(), 20.0);
        doc.set_page_width(60.0);
        assert_eq!(doc.measured_height(), 60.0);
        doc.paragraph_mut(0).unwrap().set_text("alpha");
        assert_eq!(doc.measured_height(), 20.0);
        assert_eq!(doc.length(), 6);
    }

    #[test]
    fn measured_width_without_wrapping_uses_widest_paragraph() {
        let mut doc = Document::with_paragraphs(
            DocumentConfig {
                line_wrap: false,
                ..DocumentConfig::default()
            },
            [
                para("abc"),
                para("abcdef").with_margins(Insets::new(5.0, 0.0, 0.0, 0.0)),
            ],
        );
        assert_eq!(doc.measured_width(), 60.0);

        doc.set_line_wrap(true);
        assert_eq!(doc.measured_width(), 1000.0);

        let mut empty = Document::<FixedPitchParagraph>::new(DocumentConfig {
            line_wrap: false,
            ..DocumentConfig::default()
        });
        assert_eq!(empty.measured_width(), 0.0);
    }

    #[test]
    fn code_point_lookup_scenario() {
        let mut doc = two_paragraphs();
        assert_eq!(doc.paragraph_for_code_point_index(9), Some((0, 9)));
        assert_eq!(doc.paragraph_for_code_point_index(10), Some((1, 0)));
        assert_eq!(doc.paragraph_for_code_point_index(29), Some((1, 19)));
        assert_eq!(doc.paragraph_for_code_point_index(30), Some((1, 19)));
        assert_eq!(doc.paragraph_for_code_point_index(1000), Some((1, 19)));
    }

    #[test]
    fn code_point_lookup_round_trips() {
        let mut doc = Document::with_paragraphs(
            DocumentConfig::default(),
            [para("ab"), para(""), para("cdef"), para("g")],
        );
        let length = doc.length();
        for i in 0..length {
            let (index, offset) = doc.paragraph_for_code_point_index(i).unwrap();
            let placement = doc.placement(index).unwrap();
            assert_eq!(placement.code_point_index + offset, i);
        }
    }

    #[test]
    fn closest_paragraph_resolves_gaps_toward_nearer_edge() {
        let mut doc = Document::with_paragraphs(
            DocumentConfig::default(),
            [
                para("upper").with_margins(Insets::new(0.0, 0.0, 0.0, 20.0)),
                para("lower"),
            ],
        );
        // Upper content spans 10..=30, lower 50..=70.
        assert_eq!(doc.closest_paragraph(0.0), Some(0));
        assert_eq!(doc.closest_paragraph(20.0), Some(0));
        assert_eq!(doc.closest_paragraph(30.0), Some(0));
        assert_eq!(doc.closest_paragraph(35.0), Some(0));
        assert_eq!(doc.closest_paragraph(40.0), Some(1));
        assert_eq!(doc.closest_paragraph(45.0), Some(1));
        assert_eq!(doc.closest_paragraph(60.0), Some(1));
        assert_eq!(doc.closest_paragraph(500.0), Some(1));
    }

    #[test]
    fn hit_test_translates_to_document_indices() {
        let mut doc = Document::with_paragraphs(
            DocumentConfig::default(),
            [
                para("abcdefghi").with_margins(Insets::new(0.0, 0.0, 0.0, 20.0)),
                para("abcdefghijklmnopqrs"),
            ],
        );

        let over = doc.hit_test(Point::new(10.0 + 34.0, 55.0));
        assert_eq!(over.closest_code_point_index, 13);
        assert_eq!(over.over_code_point_index, Some(13));
        assert_eq!(over.closest_line, None);
        assert_eq!(over.over_line, None);

        // In the gap, nearer to the lower paragraph's content.
        let gap = doc.hit_test(Point::new(10.0 + 30.0, 45.0));
        assert_eq!(gap.closest_code_point_index, 13);
        assert_eq!(gap.over_code_point_index, None);

        // Left of the content box.
        let margin = doc.hit_test(Point::new(2.0, 15.0));
        assert_eq!(margin.closest_code_point_index, 0);
        assert_eq!(margin.over_code_point_index, None);
    }

    #[test]
    fn caret_info_is_in_document_space() {
        let mut doc = two_paragraphs();
        let info = doc.caret_info(13, false);
        assert_eq!(info.code_point_index, 13);
        assert_eq!(info.caret_x, 40.0);
        assert_eq!(info.caret_rect, Rect::new(40.0, 30.0, 40.0, 50.0));
        assert_eq!(info.line_index, None);
    }

    #[test]
    fn empty_document_answers_queries() {
        let mut doc = Document::<FixedPitchParagraph>::new(DocumentConfig::default());
        assert_eq!(doc.length(), 0);
        assert_eq!(doc.measured_height(), 10.0);
        assert_eq!(doc.paragraph_for_code_point_index(3), None);
        assert_eq!(doc.closest_paragraph(3.0), None);
        assert_eq!(doc.hit_test(Point::new(5.0, 5.0)).closest_code_point_index, 0);
        let info = doc.caret_info(0, false);
        assert_eq!(info.caret_rect, Rect::new(10.0, 10.0, 10.0, 10.0));
    }

    #[test]
    fn paint_translates_selection_per_paragraph() {
        let mut doc = Document::with_paragraphs(
            DocumentConfig {
                margins: Insets::ZERO,
                ..DocumentConfig::default()
            },
            [para("ab"), para("cd")],
        );
        let options = PaintOptions {
            selection: Some(4..1),
            clip: None,
        };
        let mut canvas = Recorder::default();
        doc.paint(&mut canvas, &options);

        assert_eq!(
            canvas.fills,
            vec![
                Rect::new(10.0, 0.0, 30.0, 20.0),
                Rect::new(0.0, 20.0, 10.0, 40.0),
            ]
        );
        assert_eq!(
            canvas.texts,
            vec![
                (Point::new(0.0, 0.0), String::from("ab")),
                (Point::new(0.0, 20.0), String::from("cd")),
            ]
        );
        // The caller's options are left as they were.
        assert_eq!(options.selection, Some(4..1));
    }

    #[test]
    fn paint_skips_paragraphs_outside_clip() {
        let mut doc = Document::with_paragraphs(
            DocumentConfig {
                margins: Insets::ZERO,
                ..DocumentConfig::default()
            },
            [para("ab"), para("cd"), para("ef")],
        );
        let mut canvas = Recorder::default();
        doc.paint(
            &mut canvas,
            &PaintOptions {
                selection: None,
                clip: Some(Rect::new(0.0, 25.0, 100.0, 30.0)),
            },
        );
        assert!(canvas.fills.is_empty());
        assert_eq!(canvas.texts.len(), 1);
        assert_eq!(canvas.texts[0].1, "cd");
    }
}
