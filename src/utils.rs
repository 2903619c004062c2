use crate::config::{COUNT_DURATION_MS, COUNT_TICK_MS, MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH};

/// Backdrop image treatment for one viewport band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backdrop {
    pub filter: &'static str,
    pub transform: &'static str,
    pub object_position: &'static str,
}

/// Pick the backdrop treatment for a viewport width. Narrow screens get
/// a stronger crop and dim so overlaid copy stays readable.
pub fn backdrop_for_width(width: f64) -> Backdrop {
    if width < MOBILE_MAX_WIDTH {
        Backdrop {
            filter: "blur(1px) brightness(0.7)",
            transform: "scale(1.15)",
            object_position: "top center",
        }
    } else if width < TABLET_MAX_WIDTH {
        Backdrop {
            filter: "blur(2px) brightness(0.8)",
            transform: "scale(1.08)",
            object_position: "center center",
        }
    } else {
        Backdrop {
            filter: "blur(3px) brightness(0.85)",
            transform: "scale(1.05)",
            object_position: "center center",
        }
    }
}

/// `(flex-direction, grid-template-columns)` for the services block.
pub fn services_layout(width: f64) -> (&'static str, &'static str) {
    if width <= MOBILE_MAX_WIDTH {
        ("column", "1fr")
    } else {
        ("row", "repeat(2, 1fr)")
    }
}

/// Whether the nav renders in its collapsed, hamburger-driven mode.
pub fn is_mobile(width: f64) -> bool {
    width <= MOBILE_MAX_WIDTH
}

/// Per-tick increment that carries a counter from zero to `target`
/// across the configured count-up duration.
pub fn counter_step(target: u32) -> f64 {
    target as f64 / (COUNT_DURATION_MS as f64 / COUNT_TICK_MS as f64)
}

/// Display label for a running counter. Once the target is reached the
/// exact value is shown; until then the floor of the running value.
pub fn counter_label(current: f64, target: u32) -> String {
    if current >= target as f64 {
        format!("{target}+")
    } else {
        format!("{}+", current.floor() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_bands_switch_at_the_breakpoints() {
        assert_eq!(backdrop_for_width(500.0).object_position, "top center");
        assert_eq!(backdrop_for_width(800.0).transform, "scale(1.08)");
        assert_eq!(backdrop_for_width(1440.0).filter, "blur(3px) brightness(0.85)");
        // Boundary widths fall into the wider band.
        assert_eq!(backdrop_for_width(768.0).transform, "scale(1.08)");
        assert_eq!(backdrop_for_width(1024.0).transform, "scale(1.05)");
    }

    #[test]
    fn services_layout_collapses_on_mobile() {
        assert_eq!(services_layout(375.0), ("column", "1fr"));
        assert_eq!(services_layout(768.0), ("column", "1fr"));
        assert_eq!(services_layout(769.0), ("row", "repeat(2, 1fr)"));
    }

    #[test]
    fn counter_reaches_target_within_the_duration() {
        let target = 120;
        let step = counter_step(target);
        let ticks = (COUNT_DURATION_MS / COUNT_TICK_MS) as f64;
        assert!(step * ticks >= target as f64);
        assert_eq!(counter_label(step, target), "0+");
        assert_eq!(counter_label(119.9, target), "119+");
        assert_eq!(counter_label(120.4, target), "120+");
    }
}
