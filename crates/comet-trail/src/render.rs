//! Canvas shape builders for the trail.

use comet_core::ColorTheme;
use ratatui::widgets::canvas::{Circle, Line};

use crate::color::fade;
use crate::point::TrailParams;
use crate::state::TrailState;

/// A filled circle for every live point, faded by its remaining opacity.
pub fn point_circles(state: &TrailState, params: &TrailParams, theme: ColorTheme) -> Vec<Circle> {
    state
        .points()
        .map(|point| Circle {
            x: point.x,
            y: point.y,
            radius: params.point_radius,
            color: fade(theme.rgb(), point.opacity() * params.point_alpha),
        })
        .collect()
}

/// A segment for every pair of live points within the link distance, faded
/// by the opacity of the earlier point of the pair.
pub fn link_segments(state: &TrailState, params: &TrailParams, theme: ColorTheme) -> Vec<Line> {
    state
        .links(params)
        .into_iter()
        .map(|(a, b)| Line {
            x1: a.x,
            y1: a.y,
            x2: b.x,
            y2: b.y,
            color: fade(theme.rgb(), a.opacity() * params.link_alpha),
        })
        .collect()
}
