// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paragraph capability consumed by [`Document`](crate::Document).

use core::ops::Range;

use kurbo::{Insets, Point};

use crate::types::{CaretInfo, HitTestResult};

/// Document-wide parameters handed to [`Paragraph::layout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutContext {
    /// Page width, including the document margins.
    pub page_width: f64,
    /// Whether paragraphs should wrap to the page width.
    pub line_wrap: bool,
    /// Document margins.
    pub margins: Insets,
}

impl LayoutContext {
    /// Width available to a paragraph's content, or `None` when lines do not wrap.
    ///
    /// This is the page width minus the document's and the paragraph's horizontal margins,
    /// clamped to zero.
    #[must_use]
    pub fn available_width(&self, paragraph_margins: Insets) -> Option<f64> {
        if !self.line_wrap {
            return None;
        }
        let width = self.page_width
            - self.margins.x0
            - self.margins.x1
            - paragraph_margins.x0
            - paragraph_margins.x1;
        Some(width.max(0.0))
    }
}

/// Per-paragraph paint parameters, already translated into the paragraph's frame.
///
/// The document builds a fresh value for every paragraph it paints, so paragraphs never
/// observe another paragraph's frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocalPaintOptions {
    /// Document-space origin of the paragraph's content box.
    pub origin: Point,
    /// Selected code points, local to the paragraph and clamped to `0..=len`.
    ///
    /// `None` when the selection does not touch this paragraph.
    pub selection: Option<Range<usize>>,
}

/// A block of content that a [`Document`](crate::Document) stacks vertically.
///
/// Implementations own their line breaking, shaping, and painting. The document only
/// composes paragraphs: it positions them, assigns each one a code point offset, and
/// translates queries into and out of each paragraph's local frame. All offsets passed to
/// and returned from these methods are paragraph-local, and all coordinates are relative to
/// the top-left of the paragraph's content box.
///
/// Documents are generic over a single paragraph type. To mix kinds of content, implement
/// this trait for an enum over the concrete paragraph kinds.
///
/// The three index tables must be strictly ascending.
pub trait Paragraph {
    /// Paint target consumed by [`Paragraph::paint`].
    type Canvas: ?Sized;

    /// Lays out the paragraph's content against the document parameters.
    fn layout(&mut self, cx: &LayoutContext);

    /// Paints the paragraph.
    fn paint(&self, canvas: &mut Self::Canvas, options: &LocalPaintOptions);

    /// Hit tests a point relative to the content box.
    fn hit_test(&self, point: Point) -> HitTestResult;

    /// Hit tests a horizontal position on a specific line.
    fn hit_test_line(&self, line_index: usize, x: f64) -> HitTestResult;

    /// Resolves caret geometry for a local code point offset.
    fn caret_info(&self, offset: usize, alt_position: bool) -> CaretInfo;

    /// Length in code points, including any terminator.
    fn len(&self) -> usize;

    /// Returns `true` if the paragraph holds no code points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Paragraph margins.
    fn margins(&self) -> Insets;

    /// Height of the laid out content, excluding margins.
    fn content_height(&self) -> f64;

    /// Width of the widest laid out line, excluding margins.
    fn content_width(&self) -> f64;

    /// Offsets the caret may rest at.
    fn caret_indices(&self) -> &[usize];

    /// Offsets of word boundaries.
    fn word_boundary_indices(&self) -> &[usize];

    /// Offset of the first code point on each line.
    fn line_indices(&self) -> &[usize];
}

#[cfg(test)]
mod tests {
    use kurbo::Insets;

    use super::LayoutContext;

    #[test]
    fn available_width_subtracts_both_margin_sets() {
        let cx = LayoutContext {
            page_width: 200.0,
            line_wrap: true,
            margins: Insets::uniform(10.0),
        };
        assert_eq!(cx.available_width(Insets::new(5.0, 0.0, 15.0, 0.0)), Some(160.0));
        assert_eq!(cx.available_width(Insets::uniform_xy(100.0, 0.0)), Some(0.0));
    }

    #[test]
    fn unwrapped_layout_has_no_width_limit() {
        let cx = LayoutContext {
            page_width: 200.0,
            line_wrap: false,
            margins: Insets::ZERO,
        };
        assert_eq!(cx.available_width(Insets::ZERO), None);
    }
}
