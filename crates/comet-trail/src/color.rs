//! Alpha emulation for terminal cells.

use ratatui::style::Color;

/// Scale an RGB hue toward the black background to stand in for an alpha
/// channel, which terminal cells do not have.
pub fn fade((r, g, b): (u8, u8, u8), alpha: f64) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    Color::Rgb(
        (f64::from(r) * alpha) as u8,
        (f64::from(g) * alpha) as u8,
        (f64::from(b) * alpha) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_extremes() {
        assert_eq!(fade((147, 51, 234), 1.0), Color::Rgb(147, 51, 234));
        assert_eq!(fade((147, 51, 234), 0.0), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_fade_scales_each_component() {
        assert_eq!(fade((100, 200, 50), 0.5), Color::Rgb(50, 100, 25));
    }

    #[test]
    fn test_fade_clamps_out_of_range_alpha() {
        assert_eq!(fade((10, 10, 10), 2.0), Color::Rgb(10, 10, 10));
        assert_eq!(fade((10, 10, 10), -1.0), Color::Rgb(0, 0, 0));
    }
}
