use crate::element::{ElementId, Position};

/// An in-progress drag of a single element.
///
/// The element follows the pointer at the offset it was grabbed with, so it
/// does not jump to put its corner under the cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub element: ElementId,
    grab_offset: (f64, f64),
}

impl DragSession {
    pub fn begin(element: ElementId, element_position: Position, pointer: Position) -> Self {
        Self {
            element,
            grab_offset: pointer.offset_from(element_position),
        }
    }

    pub fn grab_offset(&self) -> (f64, f64) {
        self.grab_offset
    }

    /// Element position for the given pointer position.
    pub fn position_for(&self, pointer: Position) -> Position {
        pointer.translated(-self.grab_offset.0, -self.grab_offset.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_initial_grab_offset() {
        let drag = DragSession::begin(
            ElementId(1),
            Position::new(50.0, 50.0),
            Position::new(70.0, 65.0),
        );
        assert_eq!(drag.grab_offset(), (20.0, 15.0));
        assert_eq!(
            drag.position_for(Position::new(300.0, 200.0)),
            Position::new(280.0, 185.0)
        );
    }

    #[test]
    fn pointer_at_grab_point_leaves_element_in_place() {
        let start = Position::new(12.0, 34.0);
        let pointer = Position::new(40.0, 40.0);
        let drag = DragSession::begin(ElementId(3), start, pointer);
        assert_eq!(drag.position_for(pointer), start);
    }
}
