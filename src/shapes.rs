//! Decorative floating-shape field.
//!
//! A field is a fixed population of randomly parameterized shapes,
//! generated once and never resized. Only the animation duration ever
//! mutates afterwards, driven by hover events on the owning section.
//! Every sampling function takes the rng as a parameter so tests can
//! drive the field with a seeded generator.

use log::debug;
use rand::Rng;

use crate::defaults::MAX_SHAPES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Hexagon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Hexagon,
    ];

    pub fn css_class(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Hexagon => "hexagon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeColor {
    Blue,
    Purple,
    Green,
    Orange,
    Pink,
}

impl ShapeColor {
    pub const ALL: [ShapeColor; 5] = [
        ShapeColor::Blue,
        ShapeColor::Purple,
        ShapeColor::Green,
        ShapeColor::Orange,
        ShapeColor::Pink,
    ];

    pub fn css_class(self) -> &'static str {
        match self {
            ShapeColor::Blue => "blue",
            ShapeColor::Purple => "purple",
            ShapeColor::Green => "green",
            ShapeColor::Orange => "orange",
            ShapeColor::Pink => "pink",
        }
    }
}

/// Animation profile of one shape. `Float` carries no explicit
/// declaration and rides on the stylesheet's `.shape` default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    Float,
    Pulse,
    Spin,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub color: ShapeColor,
    /// Edge length or diameter, px.
    pub size: f64,
    /// Horizontal position, percent of the container.
    pub left: f64,
    /// Vertical position, percent of the container.
    pub top: f64,
    pub opacity: f64,
    pub delay_secs: f64,
    pub duration_secs: f64,
    pub animation: Animation,
}

impl Shape {
    pub fn class_names(&self) -> String {
        format!(
            "shape {} {} glow",
            self.kind.css_class(),
            self.color.css_class()
        )
    }

    /// Explicit animation shorthand, when the profile has one.
    ///
    /// Pulse and Spin override the stylesheet default; Float returns
    /// `None`, so the bare `animation-duration` emitted by [`style`]
    /// is its only knob.
    pub fn animation_declaration(&self) -> Option<String> {
        match self.animation {
            Animation::Float => None,
            Animation::Pulse => Some(format!(
                "animation: pulse {:.2}s ease-in-out infinite;",
                self.duration_secs
            )),
            Animation::Spin => Some(format!(
                "animation: spin {:.2}s linear infinite;",
                self.duration_secs
            )),
        }
    }

    /// Inline style for the shape node. The shorthand comes last; for
    /// Pulse and Spin it supersedes the duration and delay written
    /// just before it, same as the source order in the stylesheet-free
    /// rendition of this field.
    pub fn style(&self) -> String {
        let height = if self.kind == ShapeKind::Triangle {
            0.0
        } else {
            self.size
        };
        let mut css = format!(
            "width: {:.1}px; height: {:.1}px; left: {:.1}%; top: {:.1}%; \
             opacity: {:.2}; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.size, height, self.left, self.top, self.opacity, self.delay_secs,
            self.duration_secs,
        );
        if self.kind == ShapeKind::Triangle {
            css.push_str(&format!(
                " border-left-width: {:.1}px; border-right-width: {:.1}px; \
                 border-bottom-width: {:.1}px; border-bottom-color: rgba(255, 255, 255, 0.3);",
                self.size / 2.0,
                self.size / 2.0,
                self.size
            ));
        }
        if let Some(animation) = self.animation_declaration() {
            css.push(' ');
            css.push_str(&animation);
        }
        css
    }
}

/// First pass: build the full population with independently randomized
/// geometry and a base duration. Animation profiles are assigned in a
/// separate pass, see [`assign_animations`].
pub fn generate(rng: &mut impl Rng) -> Vec<Shape> {
    let shapes: Vec<Shape> = (0..MAX_SHAPES)
        .map(|_| Shape {
            kind: ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())],
            color: ShapeColor::ALL[rng.random_range(0..ShapeColor::ALL.len())],
            size: rng.random_range(20.0..80.0),
            left: rng.random_range(0.0..100.0),
            top: rng.random_range(0.0..100.0),
            opacity: rng.random_range(0.3..0.8),
            delay_secs: rng.random_range(0.0..5.0),
            duration_secs: rng.random_range(10.0..30.0),
            animation: Animation::Float,
        })
        .collect();
    debug!("generated {} shapes", shapes.len());
    shapes
}

/// Second pass: pick each shape's animation uniformly. Pulse and Spin
/// resample the duration into their own bands; Float keeps the draw
/// from [`generate`].
pub fn assign_animations(shapes: &mut [Shape], rng: &mut impl Rng) {
    for shape in shapes {
        shape.animation = match rng.random_range(0..3) {
            0 => Animation::Float,
            1 => {
                shape.duration_secs = rng.random_range(2.0..5.0);
                Animation::Pulse
            }
            _ => {
                shape.duration_secs = rng.random_range(10.0..30.0);
                Animation::Spin
            }
        };
    }
}

/// Hover-in: pin every duration to the same value.
pub fn set_all_durations(shapes: &mut [Shape], secs: f64) {
    for shape in shapes {
        shape.duration_secs = secs;
    }
}

/// Hover-out: a fresh independent draw per shape. The pre-hover
/// durations are deliberately not restored.
pub fn rerandomize_durations(shapes: &mut [Shape], rng: &mut impl Rng) {
    for shape in shapes.iter_mut() {
        shape.duration_secs = rng.random_range(10.0..20.0);
    }
    debug!("rerandomized {} shape durations", shapes.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{HOVER_DURATION_SECS, MAX_SHAPES};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field(seed: u64) -> Vec<Shape> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut shapes = generate(&mut rng);
        assign_animations(&mut shapes, &mut rng);
        shapes
    }

    #[test]
    fn generates_exactly_the_fixed_population() {
        assert_eq!(field(1).len(), MAX_SHAPES);
    }

    #[test]
    fn generated_parameters_stay_in_their_bands() {
        for shape in field(2) {
            assert!((20.0..80.0).contains(&shape.size));
            assert!((0.0..100.0).contains(&shape.left));
            assert!((0.0..100.0).contains(&shape.top));
            assert!((0.3..0.8).contains(&shape.opacity));
            assert!((0.0..5.0).contains(&shape.delay_secs));
        }
    }

    #[test]
    fn animation_bands_match_the_profile() {
        for shape in field(3) {
            match shape.animation {
                Animation::Pulse => assert!((2.0..5.0).contains(&shape.duration_secs)),
                Animation::Spin => assert!((10.0..30.0).contains(&shape.duration_secs)),
                Animation::Float => assert!((10.0..30.0).contains(&shape.duration_secs)),
            }
        }
    }

    #[test]
    fn float_emits_no_animation_shorthand() {
        let mut shapes = field(4);
        shapes[0].animation = Animation::Float;
        assert!(shapes[0].animation_declaration().is_none());
        assert!(!shapes[0].style().contains("animation:"));
        assert!(shapes[0].style().contains("animation-duration:"));
    }

    #[test]
    fn hover_cycle_pins_then_redraws_durations() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut shapes = generate(&mut rng);
        assign_animations(&mut shapes, &mut rng);

        set_all_durations(&mut shapes, HOVER_DURATION_SECS);
        assert!(shapes
            .iter()
            .all(|s| s.duration_secs == HOVER_DURATION_SECS));

        rerandomize_durations(&mut shapes, &mut rng);
        for shape in &shapes {
            assert!(
                (10.0..20.0).contains(&shape.duration_secs),
                "duration {} out of the hover-out band",
                shape.duration_secs
            );
        }
    }

    #[test]
    fn same_seed_reproduces_the_field() {
        assert_eq!(field(6), field(6));
    }

    #[test]
    fn triangle_style_carries_border_geometry() {
        let mut shapes = field(7);
        shapes[0].kind = ShapeKind::Triangle;
        let style = shapes[0].style();
        assert!(style.contains("height: 0.0px"));
        assert!(style.contains("border-bottom-width:"));
        let classes = shapes[0].class_names();
        assert!(classes.starts_with("shape triangle"));
        assert!(classes.ends_with("glow"));
    }
}
