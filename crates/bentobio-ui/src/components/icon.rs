//! Stroke icons for content cells.

use bentobio_core::IconToken;
use dioxus::prelude::*;

/// One SVG primitive on a 24x24 canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    Path(&'static str),
    Circle { cx: f32, cy: f32, r: f32 },
    Rect { x: f32, y: f32, size: f32, rx: f32 },
}

/// Primitives making up each glyph.
pub fn strokes(token: IconToken) -> &'static [Stroke] {
    match token {
        IconToken::Instagram => &[
            Stroke::Rect { x: 2.0, y: 2.0, size: 20.0, rx: 5.0 },
            Stroke::Path("M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"),
            Stroke::Path("M17.5 6.5h.01"),
        ],
        IconToken::MapPin => &[
            Stroke::Path("M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"),
            Stroke::Circle { cx: 12.0, cy: 10.0, r: 3.0 },
        ],
        IconToken::MessageCircle => &[Stroke::Path("M7.9 20A9 9 0 1 0 4 16.1L2 22Z")],
        IconToken::Music => &[
            Stroke::Path("M9 18V5l12-2v13"),
            Stroke::Circle { cx: 6.0, cy: 18.0, r: 3.0 },
            Stroke::Circle { cx: 18.0, cy: 16.0, r: 3.0 },
        ],
        IconToken::Link => &[
            Stroke::Path("M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71"),
            Stroke::Path("M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71"),
        ],
        IconToken::Facebook => &[Stroke::Path(
            "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z",
        )],
        IconToken::AtSign => &[
            Stroke::Circle { cx: 12.0, cy: 12.0, r: 4.0 },
            Stroke::Path("M16 8v5a3 3 0 0 0 6 0v-1a10 10 0 1 0-4 8"),
        ],
        IconToken::Globe => &[
            Stroke::Circle { cx: 12.0, cy: 12.0, r: 10.0 },
            Stroke::Path("M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"),
            Stroke::Path("M2 12h20"),
        ],
        IconToken::ArrowUpRight => &[Stroke::Path("M7 7h10v10"), Stroke::Path("M7 17 17 7")],
    }
}

/// Inline SVG icon drawn with `currentColor`.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     Icon { token: IconToken::MapPin, size: 20, filled: true }
/// }
/// ```
#[component]
pub fn Icon(
    token: IconToken,
    /// Edge length in CSS pixels
    #[props(default = 24)]
    size: u32,
    /// Fill closed shapes as well as stroking them
    #[props(default = false)]
    filled: bool,
    #[props(default)] class: Option<String>,
) -> Element {
    let fill = if filled { "currentColor" } else { "none" };
    let class = class.unwrap_or_default();

    rsx! {
        svg {
            class: "bento-icon {class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "{fill}",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            role: "img",
            "aria-label": token.label(),

            for (i, stroke) in strokes(token).iter().enumerate() {
                {
                    match *stroke {
                        Stroke::Path(d) => rsx! { path { key: "{i}", d: d } },
                        Stroke::Circle { cx, cy, r } => rsx! {
                            circle { key: "{i}", cx: "{cx}", cy: "{cy}", r: "{r}" }
                        },
                        Stroke::Rect { x, y, size, rx } => rsx! {
                            rect { key: "{i}", x: "{x}", y: "{y}", width: "{size}", height: "{size}", rx: "{rx}" }
                        },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_strokes() {
        for token in IconToken::ALL {
            assert!(!strokes(token).is_empty(), "{token:?} has no strokes");
        }
    }

    #[test]
    fn paths_start_with_move() {
        for token in IconToken::ALL {
            for stroke in strokes(token) {
                if let Stroke::Path(d) = stroke {
                    assert!(d.starts_with('M'), "{token:?}: {d}");
                }
            }
        }
    }
}
