use crate::params::StyleParameters;
use crate::style::{compute_style, ComputedStyle};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique element id. Assigned in increasing order, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Point in canvas pixel space (also used for pointer coordinates).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Uniform whole-pixel position with the footprint still inside the canvas.
    ///
    /// A canvas smaller than the footprint collapses that axis to 0.
    pub fn random_within<R: Rng + ?Sized>(
        bounds: CanvasBounds,
        footprint: Footprint,
        rng: &mut R,
    ) -> Self {
        let (max_x, max_y) = bounds.placement_limits(footprint);
        let sample = |rng: &mut R, max: f64| {
            if max > 0.0 {
                rng.gen_range(0.0..=max).floor()
            } else {
                0.0
            }
        };
        let x = sample(rng, max_x);
        let y = sample(rng, max_y);
        Self { x, y }
    }

    pub fn offset_from(&self, origin: Position) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Size of the canvas in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
}

impl CanvasBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Largest x and y an element may be placed at, floored at 0.
    pub fn placement_limits(&self, footprint: Footprint) -> (f64, f64) {
        (
            (self.width - footprint.width).max(0.0),
            (self.height - footprint.height).max(0.0),
        )
    }

    pub fn contains(&self, position: Position, footprint: Footprint) -> bool {
        let (max_x, max_y) = self.placement_limits(footprint);
        (0.0..=max_x).contains(&position.x) && (0.0..=max_y).contains(&position.y)
    }
}

/// Space reserved for an element when placing it randomly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub width: f64,
    pub height: f64,
}

impl Default for Footprint {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 100.0,
        }
    }
}

/// A draggable text item on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub id: ElementId,
    pub position: Position,
    pub text: String,
    /// `None` until the first apply; the host renders its default styling.
    pub style: Option<ComputedStyle>,
    pub selected: bool,
}

impl Element {
    pub fn new(id: ElementId, position: Position, text: impl Into<String>) -> Self {
        Self {
            id,
            position,
            text: text.into(),
            style: None,
            selected: false,
        }
    }

    /// Replace text and style wholesale. Ghost layers are never patched.
    pub fn apply(&mut self, params: &StyleParameters) {
        self.text = params.resolved_text().to_string();
        self.style = Some(compute_style(params));
    }

    pub fn ghost_layer_count(&self) -> usize {
        self.style.as_ref().map_or(0, |s| s.ghost_layers.len())
    }

    pub fn halftone(&self) -> bool {
        self.style.as_ref().is_some_and(|s| s.halftone)
    }

    /// Inline style for the element container.
    pub fn position_css(&self) -> String {
        format!("left: {}px; top: {}px;", self.position.x, self.position.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_position_respects_footprint() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = CanvasBounds::new(800.0, 600.0);
        let footprint = Footprint::default();
        for _ in 0..1000 {
            let p = Position::random_within(bounds, footprint, &mut rng);
            assert!(bounds.contains(p, footprint), "{p:?} outside canvas");
            assert_eq!(p.x, p.x.floor());
        }
    }

    #[test]
    fn tiny_canvas_collapses_to_origin() {
        let mut rng = StdRng::seed_from_u64(3);
        let p = Position::random_within(
            CanvasBounds::new(150.0, 50.0),
            Footprint::default(),
            &mut rng,
        );
        assert_eq!(p, Position::new(0.0, 0.0));
    }

    #[test]
    fn apply_twice_is_idempotent() {
        let mut el = Element::new(ElementId(1), Position::new(50.0, 50.0), "PUNK");
        let params = StyleParameters {
            layer_count: 4,
            glitch_intensity: 30,
            ..StyleParameters::default()
        };
        el.apply(&params);
        let first = el.clone();
        el.apply(&params);
        assert_eq!(el, first);
        assert_eq!(el.ghost_layer_count(), 3);
    }

    #[test]
    fn fewer_layers_discard_old_ghosts() {
        let mut el = Element::new(ElementId(1), Position::default(), "PUNK");
        el.apply(&StyleParameters {
            layer_count: 5,
            ..StyleParameters::default()
        });
        el.apply(&StyleParameters {
            layer_count: 2,
            ..StyleParameters::default()
        });
        assert_eq!(el.ghost_layer_count(), 1);
    }

    #[test]
    fn position_css_uses_pixels() {
        let el = Element::new(ElementId(2), Position::new(110.0, 110.5), "NEW");
        assert_eq!(el.position_css(), "left: 110px; top: 110.5px;");
    }
}
