// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_text_document --heading-base-level=0

//! Understory Text Document: paragraph flow, hit testing, and caret navigation.
//!
//! This crate is the document-level core of a rich text editor. It arranges an ordered
//! sequence of paragraphs into a vertical flow and answers queries that span three
//! coordinate systems at once: document code point indices, paragraph-local offsets, and
//! 2D positions.
//!
//! The core concepts are:
//!
//! - [`Paragraph`]: the capability every paragraph implements. Paragraphs own shaping,
//!   line breaking, and painting, and expose caret-stop, word-boundary, and line-start
//!   tables in paragraph-local code points.
//! - [`Document`]: owns the paragraphs, lays them out lazily (collapsing adjacent vertical
//!   margins and assigning each paragraph its code point offset), and composes
//!   [`Document::hit_test`], [`Document::caret_info`], and [`Document::paint`] by
//!   translating into and out of each paragraph's frame.
//! - [`Document::navigate`]: resolves a [`CaretPosition`] and a [`NavigationKind`] into a
//!   new position, moving by character, word, line, page, or to the line or document
//!   edges. Vertical moves remember a ghost x coordinate so the caret keeps its column
//!   across short lines.
//! - [`FixedPitchParagraph`]: a small monospaced plain-text paragraph, useful for tests,
//!   terminal-like surfaces, and as a reference for implementing [`Paragraph`].
//!
//! This crate deliberately does **not** shape text, break lines, resolve styles, or talk to
//! a rendering backend. It also does not edit text: paragraphs are treated as immutable
//! content between layouts, and any change to one must go through
//! [`Document::paragraph_mut`] so the cached layout is invalidated.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Insets;
//! use understory_text_document::{
//!     CaretPosition, Document, DocumentConfig, FixedPitchParagraph, NavigationKind,
//! };
//!
//! let config = DocumentConfig {
//!     margins: Insets::ZERO,
//!     page_width: 100.0,
//!     line_wrap: true,
//! };
//! let mut doc = Document::with_paragraphs(
//!     config,
//!     [
//!         FixedPitchParagraph::new("The quick brown fox", 10.0, 20.0),
//!         FixedPitchParagraph::new("jumps", 10.0, 20.0),
//!     ],
//! );
//!
//! // Ten columns per line: "The quick " / "brown fox".
//! assert_eq!(doc.measured_height(), 60.0);
//!
//! let caret = CaretPosition::new(2);
//! let below = doc.navigate(caret, NavigationKind::LineDown, 0.0);
//! assert_eq!(below.code_point_index, 12);
//! assert_eq!(below.ghost_x, Some(20.0));
//!
//! let end = doc.navigate(below, NavigationKind::DocumentEnd, 0.0);
//! assert_eq!(end, CaretPosition::alt(26));
//! ```
//!
//! ## Logging
//!
//! Layout passes, navigation requests, and paint culling are reported through
//! [`tracing`] at trace level under the `text_document.layout`, `text_document.navigate`,
//! and `text_document.paint` targets. No subscriber is installed by this crate.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod document;
mod error;
mod fixed_pitch;
mod navigate;
mod paragraph;
mod types;

pub use document::{Document, DocumentConfig, PaintOptions, ParagraphPlacement};
pub use error::Error;
pub use fixed_pitch::{FixedPitchCanvas, FixedPitchParagraph};
pub use navigate::NavigationKind;
pub use paragraph::{LayoutContext, LocalPaintOptions, Paragraph};
pub use types::{CaretInfo, CaretPosition, HitTestResult};
