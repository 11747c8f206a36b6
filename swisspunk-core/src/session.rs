//! Playground session: the elements on the canvas, the selection and the drag.
//!
//! All mutable playground state lives here instead of in globals, so the host
//! holds one `PlaygroundSession` and routes every UI event through it. Calls
//! that need a selected element quietly do nothing when there is none.

use crate::config::PlaygroundConfig;
use crate::drag::DragSession;
use crate::element::{CanvasBounds, Element, ElementId, Position};
use crate::params::{resolve_text, StyleParameters};
use rand::Rng;

#[derive(Clone, Debug)]
pub struct PlaygroundSession {
    config: PlaygroundConfig,
    elements: Vec<Element>,
    selected: Option<ElementId>,
    last_id: u32,
    drag: Option<DragSession>,
    show_grid: bool,
    break_grid: bool,
}

impl Default for PlaygroundSession {
    fn default() -> Self {
        Self::new(PlaygroundConfig::default())
    }
}

impl PlaygroundSession {
    /// Start with a single selected element, matching the page's initial markup.
    pub fn new(config: PlaygroundConfig) -> Self {
        let mut first = Element::new(
            ElementId(1),
            config.default_position,
            config.initial_text.clone(),
        );
        first.selected = true;

        Self {
            config,
            elements: vec![first],
            selected: Some(ElementId(1)),
            last_id: 1,
            drag: None,
            show_grid: false,
            break_grid: false,
        }
    }

    /// A session with no elements at all.
    pub fn empty(config: PlaygroundConfig) -> Self {
        Self {
            config,
            elements: Vec::new(),
            selected: None,
            last_id: 0,
            drag: None,
            show_grid: false,
            break_grid: false,
        }
    }

    pub fn config(&self) -> &PlaygroundConfig {
        &self.config
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element_ids(&self) -> Vec<ElementId> {
        self.elements.iter().map(|e| e.id).collect()
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Element> {
        self.selected.and_then(|id| self.element(id))
    }

    // ---- element lifecycle ----

    /// Create an element with the next id, place it diagonally from the spawn
    /// origin and select it. It keeps host-default styling until styled.
    pub fn add_element(&mut self) -> ElementId {
        self.last_id += 1;
        let id = ElementId(self.last_id);
        let position = self.config.spawn_position(self.last_id);
        self.elements.push(Element::new(
            id,
            position,
            self.config.new_element_text.clone(),
        ));
        log::debug!("added element {id} at ({}, {})", position.x, position.y);

        self.select(id);
        id
    }

    /// Make `id` the only selected element and return its text for the host's
    /// text input. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, id: ElementId) -> Option<String> {
        self.element(id)?;

        for element in &mut self.elements {
            element.selected = element.id == id;
        }
        self.selected = Some(id);
        log::trace!("selected element {id}");

        self.element(id).map(|e| e.text.clone())
    }

    // ---- styling ----

    /// Recompute and store the style of `id`. Returns false for unknown ids.
    pub fn apply_style(&mut self, id: ElementId, params: &StyleParameters) -> bool {
        match self.element_mut(id) {
            Some(element) => {
                element.apply(params);
                true
            }
            None => false,
        }
    }

    pub fn apply_to_selected(&mut self, params: &StyleParameters) -> bool {
        match self.selected {
            Some(id) => self.apply_style(id, params),
            None => false,
        }
    }

    /// Update only the selected element's text. Empty text shows the placeholder.
    pub fn set_text(&mut self, text: &str) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        match self.element_mut(id) {
            Some(element) => {
                element.text = resolve_text(text).to_string();
                true
            }
            None => false,
        }
    }

    /// Switch the selected element to `color`, reapplying the rest of `current`.
    ///
    /// Returns the updated parameters, or `None` with nothing selected.
    pub fn set_color(
        &mut self,
        current: &StyleParameters,
        color: &str,
    ) -> Option<StyleParameters> {
        let id = self.selected?;
        let element = self.element_mut(id)?;

        let params = StyleParameters {
            color: color.to_string(),
            ..current.clone()
        };
        element.apply(&params);
        Some(params)
    }

    /// Random parameters and a random position for the selected element.
    ///
    /// `current` supplies the text, which is not randomized. Returns the new
    /// parameters so the host can push them back into its controls.
    pub fn randomize_selected<R: Rng + ?Sized>(
        &mut self,
        current: &StyleParameters,
        bounds: CanvasBounds,
        rng: &mut R,
    ) -> Option<StyleParameters> {
        let id = self.selected?;
        let footprint = self.config.footprint;
        let element = self.element_mut(id)?;

        let params = StyleParameters::random(rng, &current.text);
        element.position = Position::random_within(bounds, footprint, rng);
        element.apply(&params);
        Some(params)
    }

    /// Default parameters and default position for the selected element.
    pub fn reset_selected(&mut self) -> Option<StyleParameters> {
        let id = self.selected?;
        let position = self.config.default_position;
        let element = self.element_mut(id)?;

        let params = StyleParameters::default();
        element.position = position;
        element.apply(&params);
        Some(params)
    }

    // ---- dragging ----

    /// Start dragging `id`, replacing any drag in progress. Also selects it.
    pub fn begin_drag(&mut self, id: ElementId, pointer: Position) -> Option<String> {
        let position = self.element(id)?.position;
        self.drag = Some(DragSession::begin(id, position, pointer));
        log::trace!("drag start on element {id}");
        self.select(id)
    }

    /// Move the dragged element under the pointer. `None` when not dragging.
    pub fn drag_to(&mut self, pointer: Position) -> Option<Position> {
        let drag = self.drag?;
        let element = self.element_mut(drag.element)?;
        element.position = drag.position_for(pointer);
        Some(element.position)
    }

    pub fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            log::trace!("drag end on element {}", drag.element);
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn dragged_id(&self) -> Option<ElementId> {
        self.drag.map(|d| d.element)
    }

    // ---- canvas toggles ----

    pub fn set_show_grid(&mut self, on: bool) {
        self.show_grid = on;
    }

    pub fn set_break_grid(&mut self, on: bool) {
        self.break_grid = on;
    }

    /// Class list for the canvas container.
    pub fn canvas_class(&self) -> String {
        let mut class = String::from("playground-canvas");
        if self.show_grid {
            class.push_str(" show-grid");
        }
        if self.break_grid {
            class.push_str(" broken-grid");
        }
        class
    }
}
