//! low-level interaction events and the view event-filter chain

use crate::core::view::View;
use crate::sys::geometry::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MouseEvent {
    pub local_pos: Point,
    pub global_pos: Point,
    pub button: MouseButton,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MouseEventKind {
    Press,
    Release,
    Move,
    DoubleClick,
}

/// Observer a view notifies of interaction events before default handling.
///
/// Each hook returns whether the event was consumed; a consumed event stops
/// the chain and suppresses the backend's default handling. All hooks
/// default to "not handled".
pub trait EventFilter {
    fn on_mouse_press(&self, view: &dyn View, event: &MouseEvent) -> bool {
        let _ = (view, event);
        false
    }

    fn on_mouse_release(&self, view: &dyn View, event: &MouseEvent) -> bool {
        let _ = (view, event);
        false
    }

    fn on_mouse_move(&self, view: &dyn View, event: &MouseEvent) -> bool {
        let _ = (view, event);
        false
    }

    fn on_mouse_double_click(&self, view: &dyn View, event: &MouseEvent) -> bool {
        let _ = (view, event);
        false
    }
}

/// Runs `event` through `view`'s installed filters in installation order.
/// Returns true as soon as one filter consumes it.
pub fn deliver_mouse_event(view: &dyn View, kind: MouseEventKind, event: &MouseEvent) -> bool {
    for filter in view.core().event_filters() {
        let handled = match kind {
            MouseEventKind::Press => filter.on_mouse_press(view, event),
            MouseEventKind::Release => filter.on_mouse_release(view, event),
            MouseEventKind::Move => filter.on_mouse_move(view, event),
            MouseEventKind::DoubleClick => filter.on_mouse_double_click(view, event),
        };
        if handled {
            return true;
        }
    }
    false
}
