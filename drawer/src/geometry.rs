/// Fraction of the sampled screen width occupied by the drawer panel. The
/// trailing quarter of the screen stays uncovered so the backdrop remains
/// reachable next to an open drawer.
pub(crate) const PANEL_WIDTH_RATIO: f32 = 0.75;

/// Backdrop opacity when the drawer is fully open.
pub(crate) const BACKDROP_MAX_OPACITY: f32 = 0.7;

/// Drawer panel width for a sampled screen width.
pub(crate) fn panel_width(screen_width: f32) -> f32 {
    screen_width * PANEL_WIDTH_RATIO
}

/// Horizontal panel offset for an openness fraction in `[0, 1]`.
///
/// Fully closed the panel rests one screen width off the left edge; fully
/// open it sits flush against it.
pub(crate) fn panel_offset(screen_width: f32, openness: f32) -> f32 {
    -screen_width * (1.0 - openness.clamp(0.0, 1.0))
}

/// Backdrop opacity for an openness fraction in `[0, 1]`.
pub(crate) fn backdrop_opacity(openness: f32) -> f32 {
    BACKDROP_MAX_OPACITY * openness.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN_WIDTH: f32 = 420.0;

    #[test]
    fn given_closed_openness_when_computing_offset_then_panel_is_off_screen() {
        assert_eq!(panel_offset(SCREEN_WIDTH, 0.0), -SCREEN_WIDTH);
    }

    #[test]
    fn given_open_openness_when_computing_offset_then_panel_is_flush() {
        assert_eq!(panel_offset(SCREEN_WIDTH, 1.0), 0.0);
    }

    #[test]
    fn given_mid_transition_when_computing_offset_then_panel_is_between_endpoints()
     {
        let offset = panel_offset(SCREEN_WIDTH, 0.5);
        assert!(offset > -SCREEN_WIDTH);
        assert!(offset < 0.0);
    }

    #[test]
    fn given_out_of_range_openness_when_computing_offset_then_endpoints_clamp() {
        assert_eq!(panel_offset(SCREEN_WIDTH, -1.0), -SCREEN_WIDTH);
        assert_eq!(panel_offset(SCREEN_WIDTH, 2.0), 0.0);
    }

    #[test]
    fn panel_width_is_three_quarters_of_the_screen() {
        assert_eq!(panel_width(SCREEN_WIDTH), 315.0);
    }

    #[test]
    fn backdrop_opacity_follows_openness_between_zero_and_limit() {
        assert_eq!(backdrop_opacity(0.0), 0.0);
        assert_eq!(backdrop_opacity(1.0), BACKDROP_MAX_OPACITY);
        assert!(backdrop_opacity(0.5) > 0.0);
        assert!(backdrop_opacity(0.5) < BACKDROP_MAX_OPACITY);
    }
}
