//! Board events and their dispatch onto the canvas.
//!
//! The host UI turns pointer and button activity into [`BoardEvent`]s and
//! feeds them to [`Canvas::handle_event`] in arrival order.

use crate::canvas::Canvas;
use crate::shapes::ObjectId;
use crate::tools::ToolKind;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Hit tolerance, in pixels, when deciding whether a click landed on an object.
pub const CLICK_TOLERANCE: f64 = 0.0;

/// An input the editor reacts to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BoardEvent {
    /// Toolbar selection. `None` deselects.
    SelectTool { tool: Option<ToolKind> },
    /// A click or tap. `position` is `None` when the pointer could not be
    /// resolved to the canvas; `target` is the object under the pointer as
    /// reported by the renderer, if any.
    Click {
        position: Option<Point>,
        #[serde(default)]
        target: Option<ObjectId>,
    },
    /// Pointer pressed on an object.
    PointerDown { id: ObjectId },
    /// A drag finished with the object at `position`.
    DragEnd { id: ObjectId, position: Point },
    Undo,
    Redo,
    Clear,
    /// The container changed width.
    Resize { container_width: f64 },
}

/// What an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event had no effect.
    Ignored,
    /// An object was placed and selected.
    Placed(ObjectId),
    /// An object was selected.
    Selected(ObjectId),
    /// An object was moved and recorded.
    Moved(ObjectId),
    /// The cursor moved back.
    Undone,
    /// The cursor moved forward.
    Redone,
    /// The board was emptied.
    Cleared,
    /// UI state changed (tool or layout) without touching history.
    Updated,
}

impl EventOutcome {
    /// Check if the event changed the scene on display.
    pub fn changed_scene(self) -> bool {
        matches!(
            self,
            EventOutcome::Placed(_)
                | EventOutcome::Moved(_)
                | EventOutcome::Undone
                | EventOutcome::Redone
                | EventOutcome::Cleared
        )
    }
}

impl Canvas {
    /// Apply one event.
    pub fn handle_event(&mut self, event: &BoardEvent) -> EventOutcome {
        log::trace!("Handling {event:?}");
        match *event {
            BoardEvent::SelectTool { tool } => {
                self.set_tool(tool);
                EventOutcome::Updated
            }
            BoardEvent::Click { position, target } => self.handle_click(position, target),
            BoardEvent::PointerDown { id } => {
                if self.select(id) {
                    EventOutcome::Selected(id)
                } else {
                    EventOutcome::Ignored
                }
            }
            BoardEvent::DragEnd { id, position } => {
                if self.move_object(id, position) {
                    EventOutcome::Moved(id)
                } else {
                    EventOutcome::Ignored
                }
            }
            BoardEvent::Undo => outcome(self.undo(), EventOutcome::Undone),
            BoardEvent::Redo => outcome(self.redo(), EventOutcome::Redone),
            BoardEvent::Clear => outcome(self.clear(), EventOutcome::Cleared),
            BoardEvent::Resize { container_width } => {
                self.resize(container_width);
                EventOutcome::Updated
            }
        }
    }

    /// Apply events in order, returning each outcome.
    pub fn handle_events<'a>(&mut self, events: impl IntoIterator<Item = &'a BoardEvent>) -> Vec<EventOutcome> {
        events.into_iter().map(|e| self.handle_event(e)).collect()
    }

    /// Place on empty canvas only: clicks on an existing object never place,
    /// and positions off the canvas count as unresolved.
    fn handle_click(&mut self, position: Option<Point>, target: Option<ObjectId>) -> EventOutcome {
        if target.is_some() {
            return EventOutcome::Ignored;
        }
        let position = position.filter(|p| self.layout.contains(*p));
        if let Some(point) = position {
            if !self.scene().objects_at_point(point, CLICK_TOLERANCE).is_empty() {
                return EventOutcome::Ignored;
            }
        }
        match self.place(position) {
            Some(id) => EventOutcome::Placed(id),
            None => EventOutcome::Ignored,
        }
    }
}

fn outcome(done: bool, effect: EventOutcome) -> EventOutcome {
    if done { effect } else { EventOutcome::Ignored }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(x: f64, y: f64) -> BoardEvent {
        BoardEvent::Click {
            position: Some(Point::new(x, y)),
            target: None,
        }
    }

    #[test]
    fn test_click_without_tool_is_ignored() {
        let mut canvas = Canvas::new();
        assert_eq!(canvas.handle_event(&click(10.0, 10.0)), EventOutcome::Ignored);
        assert_eq!(canvas.document.len(), 1);
    }

    #[test]
    fn test_click_places_with_active_tool() {
        let mut canvas = Canvas::new();
        canvas.handle_event(&BoardEvent::SelectTool {
            tool: Some(ToolKind::Ball),
        });
        let outcome = canvas.handle_event(&click(10.0, 10.0));
        let EventOutcome::Placed(id) = outcome else {
            panic!("expected placement, got {outcome:?}");
        };
        assert!(canvas.is_selected(id));
        assert!(outcome.changed_scene());
    }

    #[test]
    fn test_click_on_object_does_not_place() {
        let mut canvas = Canvas::new();
        canvas.set_tool(Some(ToolKind::PlayerBlue));
        let EventOutcome::Placed(id) = canvas.handle_event(&click(100.0, 100.0)) else {
            panic!("expected placement");
        };

        // Reported by the renderer.
        let on_target = BoardEvent::Click {
            position: Some(Point::new(300.0, 300.0)),
            target: Some(id),
        };
        assert_eq!(canvas.handle_event(&on_target), EventOutcome::Ignored);
        // Found by hit-testing.
        assert_eq!(canvas.handle_event(&click(101.0, 101.0)), EventOutcome::Ignored);
        assert_eq!(canvas.scene().len(), 1);
    }

    #[test]
    fn test_click_without_position() {
        let mut canvas = Canvas::new();
        canvas.set_tool(Some(ToolKind::Cone));
        let event = BoardEvent::Click {
            position: None,
            target: None,
        };
        assert_eq!(canvas.handle_event(&event), EventOutcome::Ignored);
    }

    #[test]
    fn test_click_off_canvas() {
        let mut canvas = Canvas::new();
        canvas.resize(600.0);
        canvas.set_tool(Some(ToolKind::Ball));
        assert_eq!(canvas.handle_event(&click(650.0, 10.0)), EventOutcome::Ignored);
        assert_eq!(canvas.handle_event(&click(10.0, -1.0)), EventOutcome::Ignored);
        assert_eq!(canvas.handle_event(&click(f64::NAN, 10.0)), EventOutcome::Ignored);
        assert_eq!(canvas.document.len(), 1);
        assert!(matches!(canvas.handle_event(&click(600.0, 300.0)), EventOutcome::Placed(_)));
    }

    #[test]
    fn test_drag_to_non_finite_point() {
        let mut canvas = Canvas::new();
        canvas.set_tool(Some(ToolKind::Cone));
        let EventOutcome::Placed(id) = canvas.handle_event(&click(50.0, 50.0)) else {
            panic!("expected placement");
        };
        let drag = BoardEvent::DragEnd {
            id,
            position: Point::new(f64::INFINITY, 60.0),
        };
        assert_eq!(canvas.handle_event(&drag), EventOutcome::Ignored);
        assert_eq!(canvas.document.len(), 2);
    }

    #[test]
    fn test_pointer_down_and_drag() {
        let mut canvas = Canvas::new();
        canvas.set_tool(Some(ToolKind::PlayerRed));
        let EventOutcome::Placed(id) = canvas.handle_event(&click(50.0, 50.0)) else {
            panic!("expected placement");
        };
        canvas.clear_selection();

        assert_eq!(canvas.handle_event(&BoardEvent::PointerDown { id }), EventOutcome::Selected(id));
        let drag = BoardEvent::DragEnd {
            id,
            position: Point::new(80.0, 60.0),
        };
        assert_eq!(canvas.handle_event(&drag), EventOutcome::Moved(id));
        // Same spot again records nothing.
        assert_eq!(canvas.handle_event(&drag), EventOutcome::Ignored);
        assert_eq!(canvas.document.len(), 3);
    }

    #[test]
    fn test_history_events() {
        let mut canvas = Canvas::new();
        assert_eq!(canvas.handle_event(&BoardEvent::Undo), EventOutcome::Ignored);
        assert_eq!(canvas.handle_event(&BoardEvent::Clear), EventOutcome::Ignored);

        canvas.set_tool(Some(ToolKind::SimpleGoal));
        canvas.handle_event(&click(20.0, 20.0));
        let outcomes = canvas.handle_events(&[BoardEvent::Clear, BoardEvent::Undo, BoardEvent::Redo, BoardEvent::Redo]);
        assert_eq!(
            outcomes,
            vec![
                EventOutcome::Cleared,
                EventOutcome::Undone,
                EventOutcome::Redone,
                EventOutcome::Ignored
            ]
        );
    }

    #[test]
    fn test_resize_event() {
        let mut canvas = Canvas::new();
        let outcome = canvas.handle_event(&BoardEvent::Resize { container_width: 500.0 });
        assert_eq!(outcome, EventOutcome::Updated);
        assert!(!outcome.changed_scene());
        assert!((canvas.layout.height - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_events_deserialize_from_script() {
        let json = r#"[
            {"event": "select_tool", "tool": "player-blue"},
            {"event": "click", "position": {"x": 100.0, "y": 100.0}},
            {"event": "drag_end", "id": 0, "position": {"x": 150.0, "y": 120.0}},
            {"event": "select_tool", "tool": null},
            {"event": "undo"}
        ]"#;
        let events: Vec<BoardEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(events.len(), 5);
        assert_eq!(
            events[0],
            BoardEvent::SelectTool {
                tool: Some(ToolKind::PlayerBlue)
            }
        );
        assert_eq!(events[3], BoardEvent::SelectTool { tool: None });

        let mut canvas = Canvas::new();
        canvas.handle_events(&events);
        assert_eq!(canvas.document.cursor(), 1);
        assert_eq!(canvas.document.len(), 3);
    }
}
