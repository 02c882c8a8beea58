// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caret navigation over a laid out [`Document`].

use alloc::string::ToString;
use core::str::FromStr;

use kurbo::Point;

use crate::document::Document;
use crate::error::Error;
use crate::paragraph::Paragraph;
use crate::types::CaretPosition;

/// A caret movement request.
///
/// The discriminants are stable and accepted by `TryFrom<u8>`. Names accepted by
/// [`FromStr`] are the kebab-case forms returned by [`NavigationKind::name`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NavigationKind {
    /// Leave the caret where it is.
    None = 0,
    /// Previous caret stop.
    CharacterLeft = 1,
    /// Next caret stop.
    CharacterRight = 2,
    /// Previous word boundary.
    WordLeft = 3,
    /// Next word boundary.
    WordRight = 4,
    /// Same horizontal position on the line above.
    LineUp = 5,
    /// Same horizontal position on the line below.
    LineDown = 6,
    /// Same horizontal position one page up.
    PageUp = 7,
    /// Same horizontal position one page down.
    PageDown = 8,
    /// Start of the current line.
    LineHome = 9,
    /// End of the current line.
    LineEnd = 10,
    /// Start of the document.
    DocumentHome = 11,
    /// End of the document.
    DocumentEnd = 12,
}

impl NavigationKind {
    /// Every navigation kind, in discriminant order.
    pub const ALL: [Self; 13] = [
        Self::None,
        Self::CharacterLeft,
        Self::CharacterRight,
        Self::WordLeft,
        Self::WordRight,
        Self::LineUp,
        Self::LineDown,
        Self::PageUp,
        Self::PageDown,
        Self::LineHome,
        Self::LineEnd,
        Self::DocumentHome,
        Self::DocumentEnd,
    ];

    /// Kebab-case name, suitable for key binding tables.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::CharacterLeft => "character-left",
            Self::CharacterRight => "character-right",
            Self::WordLeft => "word-left",
            Self::WordRight => "word-right",
            Self::LineUp => "line-up",
            Self::LineDown => "line-down",
            Self::PageUp => "page-up",
            Self::PageDown => "page-down",
            Self::LineHome => "line-home",
            Self::LineEnd => "line-end",
            Self::DocumentHome => "document-home",
            Self::DocumentEnd => "document-end",
        }
    }
}

impl TryFrom<u8> for NavigationKind {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(Error::InvalidNavigationKind(value))
    }
}

impl FromStr for NavigationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownNavigationKindName(s.to_string()))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Direction {
    Backward,
    Forward,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Self::Backward => -1.0,
            Self::Forward => 1.0,
        }
    }
}

impl<P: Paragraph> Document<P> {
    /// Resolves a caret movement.
    ///
    /// `page_size` is the vertical distance covered by [`NavigationKind::PageUp`] and
    /// [`NavigationKind::PageDown`]. Vertical moves (line and page) carry a ghost x
    /// coordinate forward so that repeated moves keep their column across lines of
    /// different widths; every other move returns a position without one.
    pub fn navigate(
        &mut self,
        position: CaretPosition,
        kind: NavigationKind,
        page_size: f64,
    ) -> CaretPosition {
        self.layout();
        let next = match kind {
            NavigationKind::None => position,
            NavigationKind::CharacterLeft => {
                self.step_index_table(position, Direction::Backward, P::caret_indices)
            }
            NavigationKind::CharacterRight => {
                self.step_index_table(position, Direction::Forward, P::caret_indices)
            }
            NavigationKind::WordLeft => {
                self.step_index_table(position, Direction::Backward, P::word_boundary_indices)
            }
            NavigationKind::WordRight => {
                self.step_index_table(position, Direction::Forward, P::word_boundary_indices)
            }
            NavigationKind::LineUp => self.step_line(position, Direction::Backward),
            NavigationKind::LineDown => self.step_line(position, Direction::Forward),
            NavigationKind::PageUp => self.step_page(position, Direction::Backward, page_size),
            NavigationKind::PageDown => self.step_page(position, Direction::Forward, page_size),
            NavigationKind::LineHome => self.line_edge(position, Direction::Backward),
            NavigationKind::LineEnd => self.line_edge(position, Direction::Forward),
            NavigationKind::DocumentHome => CaretPosition::new(0),
            NavigationKind::DocumentEnd => CaretPosition::alt(self.total_length()),
        };
        tracing::trace!(
            target: "text_document.navigate",
            kind = kind.name(),
            from = position.code_point_index,
            to = next.code_point_index,
            alt = next.alt_position,
            ghost_x = ?next.ghost_x,
            "navigate"
        );
        next
    }

    /// Character and word moves.
    ///
    /// An offset that is not itself in the table sits between two entries; moving forward
    /// lands on the entry after it and moving backward on the entry before it.
    fn step_index_table(
        &self,
        position: CaretPosition,
        direction: Direction,
        table: fn(&P) -> &[usize],
    ) -> CaretPosition {
        let Some((index, offset)) = self.locate_code_point(position.code_point_index) else {
            return CaretPosition::new(0);
        };
        let placement = &self.placements[index];
        let entries = table(&self.paragraphs[index]);

        let target = match (entries.binary_search(&offset), direction) {
            (Ok(i), Direction::Forward) => Some(i + 1),
            (Err(i), Direction::Forward) => Some(i),
            (Ok(i) | Err(i), Direction::Backward) => i.checked_sub(1),
        };

        match target {
            Some(i) if i < entries.len() => {
                CaretPosition::new(placement.code_point_index + entries[i])
            }
            Some(_) => match self.placements.get(index + 1) {
                Some(next) => CaretPosition::new(next.code_point_index),
                None => CaretPosition::new(self.total_length()),
            },
            None => match index.checked_sub(1).map(|i| &self.placements[i]) {
                Some(prev) => {
                    CaretPosition::new(prev.code_point_index + prev.len.saturating_sub(1))
                }
                None => CaretPosition::new(0),
            },
        }
    }

    fn step_line(&self, position: CaretPosition, direction: Direction) -> CaretPosition {
        let Some((index, offset)) = self.locate_code_point(position.code_point_index) else {
            return CaretPosition::new(0);
        };
        let placement = &self.placements[index];
        let paragraph = &self.paragraphs[index];
        let caret = paragraph.caret_info(offset, position.alt_position);
        let x = position
            .ghost_x
            .unwrap_or(placement.origin.x + caret.caret_x);
        let Some(line) = caret.line_index else {
            return position;
        };

        let (target, line) = match direction {
            Direction::Backward => match line.checked_sub(1) {
                Some(line) => (index, line),
                None if index == 0 => return CaretPosition::new(0),
                None => {
                    let prev = index - 1;
                    let last_line = self.paragraphs[prev].line_indices().len().saturating_sub(1);
                    (prev, last_line)
                }
            },
            Direction::Forward => {
                if line + 1 < paragraph.line_indices().len() {
                    (index, line + 1)
                } else if index + 1 < self.paragraphs.len() {
                    (index + 1, 0)
                } else {
                    return CaretPosition::new(self.total_length());
                }
            }
        };

        let placement = &self.placements[target];
        let hit = self.paragraphs[target].hit_test_line(line, x - placement.origin.x);
        CaretPosition {
            code_point_index: placement.code_point_index + hit.closest_code_point_index,
            alt_position: hit.alt_caret_position,
            ghost_x: Some(x),
        }
    }

    fn step_page(
        &self,
        position: CaretPosition,
        direction: Direction,
        page_size: f64,
    ) -> CaretPosition {
        debug_assert!(
            page_size.is_finite(),
            "page size must be finite; got {page_size:?}"
        );
        let caret = self.caret_info_laid_out(position.code_point_index, position.alt_position);
        let x = position.ghost_x.unwrap_or(caret.caret_x);
        let hit = self.hit_test_laid_out(Point::new(
            x,
            caret.caret_rect.y0 + direction.sign() * page_size,
        ));
        CaretPosition {
            code_point_index: hit.closest_code_point_index,
            alt_position: hit.alt_caret_position,
            ghost_x: Some(x),
        }
    }

    fn line_edge(&self, position: CaretPosition, direction: Direction) -> CaretPosition {
        let Some((index, offset)) = self.locate_code_point(position.code_point_index) else {
            return CaretPosition::new(0);
        };
        let placement = &self.placements[index];
        let paragraph = &self.paragraphs[index];
        let Some(line) = paragraph.caret_info(offset, position.alt_position).line_index else {
            return CaretPosition::new(placement.code_point_index);
        };
        let lines = paragraph.line_indices();

        match direction {
            Direction::Backward => {
                CaretPosition::new(placement.code_point_index + lines.get(line).copied().unwrap_or(0))
            }
            // The start of the next line, drawn at the end of this one.
            Direction::Forward => match lines.get(line + 1) {
                Some(&next) => CaretPosition::alt(placement.code_point_index + next),
                None => CaretPosition::new(placement.code_point_index + placement.len.saturating_sub(1)),
            },
        }
    }
}
