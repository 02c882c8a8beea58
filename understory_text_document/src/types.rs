// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value records exchanged across the document API: caret positions, caret geometry, and hit results.

use kurbo::{Rect, Vec2};

/// A caret location in document code points.
///
/// `alt_position` selects between the two renderings of a caret that sits exactly on a
/// wrapped-line boundary: `false` draws it at the start of the following line, `true` at the
/// end of the preceding one.
///
/// `ghost_x` is the horizontal coordinate (document space) remembered across consecutive
/// vertical moves. Vertical navigation carries it forward; every other navigation clears it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CaretPosition {
    /// Code point index in the document.
    pub code_point_index: usize,
    /// Render the caret at the end of the previous line when on a wrap boundary.
    pub alt_position: bool,
    /// Remembered horizontal coordinate for vertical moves.
    pub ghost_x: Option<f64>,
}

impl CaretPosition {
    /// A caret at `code_point_index` with the default rendering and no ghost coordinate.
    #[must_use]
    pub const fn new(code_point_index: usize) -> Self {
        Self {
            code_point_index,
            alt_position: false,
            ghost_x: None,
        }
    }

    /// A caret at `code_point_index` using the alternate rendering.
    #[must_use]
    pub const fn alt(code_point_index: usize) -> Self {
        Self {
            code_point_index,
            alt_position: true,
            ghost_x: None,
        }
    }

    /// Returns this position carrying `x` as its ghost coordinate.
    #[must_use]
    pub const fn with_ghost_x(self, x: f64) -> Self {
        Self {
            ghost_x: Some(x),
            ..self
        }
    }
}

/// Resolved caret geometry for a code point index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaretInfo {
    /// The code point index the caret was resolved for.
    pub code_point_index: usize,
    /// Horizontal position of the caret.
    pub caret_x: f64,
    /// Rectangle to draw the caret into.
    pub caret_rect: Rect,
    /// Line the caret is on.
    ///
    /// Paragraphs report their own line numbers. Document-level results always report `None`.
    pub line_index: Option<usize>,
}

impl Default for CaretInfo {
    fn default() -> Self {
        Self {
            code_point_index: 0,
            caret_x: 0.0,
            caret_rect: Rect::ZERO,
            line_index: None,
        }
    }
}

impl CaretInfo {
    /// Moves the result from a paragraph's local frame into the document frame.
    pub(crate) fn to_document(self, code_point_offset: usize, origin: Vec2) -> Self {
        Self {
            code_point_index: self.code_point_index + code_point_offset,
            caret_x: self.caret_x + origin.x,
            caret_rect: self.caret_rect + origin,
            line_index: None,
        }
    }
}

/// Result of hit testing a point or a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HitTestResult {
    /// The caret position closest to the probe. Always populated.
    pub closest_code_point_index: usize,
    /// Whether the closest position should use the alternate caret rendering.
    pub alt_caret_position: bool,
    /// The code point directly under the probe, if any.
    pub over_code_point_index: Option<usize>,
    /// The line closest to the probe.
    pub closest_line: Option<usize>,
    /// The line directly under the probe, if any.
    pub over_line: Option<usize>,
}

impl HitTestResult {
    /// Moves the result from a paragraph's local code points into document code points.
    ///
    /// Line numbers are paragraph-relative and are dropped.
    pub(crate) fn to_document(self, code_point_offset: usize) -> Self {
        Self {
            closest_code_point_index: self.closest_code_point_index + code_point_offset,
            alt_caret_position: self.alt_caret_position,
            over_code_point_index: self.over_code_point_index.map(|i| i + code_point_offset),
            closest_line: None,
            over_line: None,
        }
    }
}
