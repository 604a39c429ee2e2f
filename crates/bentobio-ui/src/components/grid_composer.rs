//! Responsive card grid.

use bentobio_core::{Breakpoint, CardSpec, GridLayout, GridSpec};
use dioxus::prelude::*;

use super::CardContainer;
use crate::context::use_page_style;

/// Grid-area custom properties for card `index`, one per breakpoint.
///
/// The stylesheet picks `--bento-area-narrow`, `--bento-area-medium` or
/// `--bento-area-wide` with media queries, so resizing the window moves
/// cards without a re-render.
pub fn area_variables(layouts: &[GridLayout], index: usize) -> String {
    layouts
        .iter()
        .filter_map(|layout| {
            layout.placements.get(index).map(|placement| {
                format!(
                    "--bento-area-{}: {};",
                    layout.breakpoint.as_str(),
                    placement.css_area()
                )
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Row sizing custom properties for the grid element. Columns and gaps
/// come from [`GridSpec::breakpoint_css`].
pub fn grid_variables(spec: &GridSpec) -> String {
    format!(
        "--bento-row-min: {}px; --bento-max-width: {}px;",
        spec.min_row_height_px, spec.max_width_px,
    )
}

/// Lays out cards in page order on a 1, 2 or 4 column grid.
#[component]
pub fn GridComposer(cards: Vec<CardSpec>) -> Element {
    let style = use_page_style();
    let layouts: Vec<GridLayout> = Breakpoint::ALL
        .iter()
        .map(|breakpoint| GridLayout::for_cards(&cards, *breakpoint))
        .collect();
    let track_style = grid_variables(&style.grid);

    rsx! {
        div { class: "bento-grid", style: "{track_style}",
            for (index, spec) in cards.iter().enumerate() {
                CardContainer {
                    key: "{index}",
                    spec: spec.clone(),
                    index,
                    areas: area_variables(&layouts, index),
                }
            }
        }
    }
}
