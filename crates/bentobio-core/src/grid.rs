//! Responsive grid placement.
//!
//! Cards are placed in their configured order with the sparse, row-major
//! auto-placement rule of CSS grid: a cursor walks forward through the
//! grid, never backwards, and each card lands at the first position at or
//! after the cursor where it fits without overlapping anything. Nothing
//! is reordered, so a wide or tall card pushes later cards into whatever
//! cells remain.
//!
//! # Invariants
//!
//! 1. No two placements overlap.
//! 2. Every placement lies within the column count.
//! 3. A column span wider than the grid is clamped to the grid width.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{CardSpec, Span};

/// Viewport width tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    Narrow,
    Medium,
    Wide,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Narrow, Breakpoint::Medium, Breakpoint::Wide];

    /// Tier for a viewport width in CSS pixels.
    pub fn for_width(width_px: f64) -> Self {
        if width_px >= Breakpoint::Wide.min_width_px() as f64 {
            Breakpoint::Wide
        } else if width_px >= Breakpoint::Medium.min_width_px() as f64 {
            Breakpoint::Medium
        } else {
            Breakpoint::Narrow
        }
    }

    pub fn min_width_px(self) -> u32 {
        match self {
            Breakpoint::Narrow => 0,
            Breakpoint::Medium => 640,
            Breakpoint::Wide => 1024,
        }
    }

    pub fn columns(self) -> u16 {
        match self {
            Breakpoint::Narrow => 1,
            Breakpoint::Medium => 2,
            Breakpoint::Wide => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Narrow => "narrow",
            Breakpoint::Medium => "medium",
            Breakpoint::Wide => "wide",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grid track sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Rows are at least this tall and grow to fit content
    pub min_row_height_px: u32,
    pub gap_narrow_px: u32,
    pub gap_px: u32,
    pub max_width_px: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            min_row_height_px: 180,
            gap_narrow_px: 16,
            gap_px: 24,
            max_width_px: 1200,
        }
    }
}

impl GridSpec {
    pub fn gap(&self, breakpoint: Breakpoint) -> u32 {
        match breakpoint {
            Breakpoint::Narrow => self.gap_narrow_px,
            Breakpoint::Medium | Breakpoint::Wide => self.gap_px,
        }
    }

    /// Column tracks, gap and card area selection for every breakpoint.
    ///
    /// Each card carries one `--bento-area-<breakpoint>` property per tier;
    /// the rule for a tier picks its own. The narrowest tier is
    /// unconditional, wider ones sit behind `min-width` media queries at
    /// [`Breakpoint::min_width_px`].
    pub fn breakpoint_css(&self) -> String {
        let mut css = String::new();
        for breakpoint in Breakpoint::ALL {
            let rules = format!(
                ".bento-grid {{ grid-template-columns: repeat({}, minmax(0, 1fr)); gap: {}px; }}\n\
                 .bento-grid > .bento-card {{ grid-area: var(--bento-area-{}); }}\n",
                breakpoint.columns(),
                self.gap(breakpoint),
                breakpoint.as_str(),
            );
            match breakpoint.min_width_px() {
                0 => css.push_str(&rules),
                min_width => {
                    css.push_str(&format!("@media (min-width: {min_width}px) {{\n{rules}}}\n"))
                }
            }
        }
        css
    }
}

/// Cell area assigned to one card. Zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub column: u16,
    pub row: u16,
    pub column_span: u16,
    pub row_span: u16,
}

impl Placement {
    pub fn column_end(&self) -> u16 {
        self.column + self.column_span
    }

    pub fn row_end(&self) -> u16 {
        self.row + self.row_span
    }

    pub fn overlaps(&self, other: &Placement) -> bool {
        self.column < other.column_end()
            && other.column < self.column_end()
            && self.row < other.row_end()
            && other.row < self.row_end()
    }

    /// CSS `grid-area` value (one-based lines).
    pub fn css_area(&self) -> String {
        format!(
            "{} / {} / span {} / span {}",
            self.row + 1,
            self.column + 1,
            self.row_span,
            self.column_span
        )
    }
}

/// Incremental auto-placement over a fixed number of columns.
#[derive(Debug, Clone)]
pub struct GridFlow {
    columns: u16,
    occupied: Vec<Vec<bool>>,
    cursor_row: u16,
    cursor_column: u16,
}

impl GridFlow {
    pub fn new(columns: u16) -> Self {
        Self {
            columns: columns.max(1),
            occupied: Vec::new(),
            cursor_row: 0,
            cursor_column: 0,
        }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Rows used so far.
    pub fn rows(&self) -> u16 {
        self.occupied.len() as u16
    }

    fn is_free(&self, row: u16, column: u16, column_span: u16, row_span: u16) -> bool {
        (row..row + row_span).all(|r| {
            self.occupied.get(r as usize).map_or(true, |line| {
                (column..column + column_span).all(|c| !line[c as usize])
            })
        })
    }

    fn occupy(&mut self, placement: &Placement) {
        let columns = self.columns as usize;
        while self.occupied.len() < placement.row_end() as usize {
            self.occupied.push(vec![false; columns]);
        }
        for row in placement.row..placement.row_end() {
            for column in placement.column..placement.column_end() {
                self.occupied[row as usize][column as usize] = true;
            }
        }
    }

    /// Place the next item in flow order.
    pub fn place(&mut self, column_span: u16, row_span: u16) -> Placement {
        let column_span = column_span.clamp(1, self.columns);
        let row_span = row_span.max(1);

        let mut row = self.cursor_row;
        let mut column = self.cursor_column;
        loop {
            if column + column_span <= self.columns && self.is_free(row, column, column_span, row_span) {
                break;
            }
            column += 1;
            if column + column_span > self.columns {
                row += 1;
                column = 0;
            }
        }

        let placement = Placement {
            column,
            row,
            column_span,
            row_span,
        };
        self.occupy(&placement);
        self.cursor_row = row;
        self.cursor_column = placement.column_end();
        placement
    }
}

/// Placement of a whole page at one breakpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    pub breakpoint: Breakpoint,
    pub placements: Vec<Placement>,
    pub rows: u16,
}

impl GridLayout {
    /// Place spans in order on a grid with `breakpoint`'s column count.
    pub fn from_spans(spans: impl IntoIterator<Item = (Span, Span)>, breakpoint: Breakpoint) -> Self {
        let mut flow = GridFlow::new(breakpoint.columns());
        let placements = spans
            .into_iter()
            .map(|(column_span, row_span)| flow.place(column_span.tracks(), row_span.tracks()))
            .collect();
        Self {
            breakpoint,
            placements,
            rows: flow.rows(),
        }
    }

    pub fn for_cards(cards: &[CardSpec], breakpoint: Breakpoint) -> Self {
        Self::from_spans(cards.iter().map(|c| (c.column_span, c.row_span)), breakpoint)
    }

    /// Text grid of card indices, one line per row; `.` marks a hole.
    pub fn ascii(&self) -> String {
        let columns = self.breakpoint.columns() as usize;
        let mut cells = vec![vec![".".to_string(); columns]; self.rows as usize];
        for (index, placement) in self.placements.iter().enumerate() {
            for row in placement.row..placement.row_end() {
                for column in placement.column..placement.column_end() {
                    cells[row as usize][column as usize] = index.to_string();
                }
            }
        }
        cells
            .into_iter()
            .map(|line| line.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
