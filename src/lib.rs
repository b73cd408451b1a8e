//! Platform-neutral view/controller core for a docking window framework.
//!
//! A single tree of logical widgets (panels, tab bars, title bars, floating
//! windows) is rendered by interchangeable native backends. The docking and
//! layout logic programs exclusively against the [`core::view::View`] trait;
//! backends implement a handful of primitives (geometry, sizing, coordinate
//! mapping, window association) and the core derives everything else.

pub mod core;
pub mod layout_engine;
pub mod sys;
pub mod views;

pub use crate::core::controller::{Controller, Layout, maybe_create_controller};
pub use crate::core::event::{
    EventFilter, MouseButton, MouseEvent, MouseEventKind, deliver_mouse_event,
};
pub use crate::core::signal::{Signal, Subscription};
pub use crate::core::view::{
    LifecycleState, NativeHandle, View, ViewCore, bounded_max_size, first_parent_of_type,
};
pub use crate::core::view_type::ViewType;
pub use crate::sys::geometry::{Point, Rect, Size};
pub use crate::sys::screen::{Screen, ScreenId};
pub use crate::sys::window::{Window, WindowHandle, WindowId};
