//! toolkit window handle abstraction consumed by the view core

use std::rc::Rc;

use crate::sys::geometry::Rect;
use crate::sys::screen::Screen;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub u64);

impl WindowId {
    #[inline]
    pub fn new(id: u64) -> Self { Self(id) }

    #[inline]
    pub fn as_u64(self) -> u64 { self.0 }
}

/// A native top-level window. Views query it for screen and geometry
/// information; they never own or mutate it through this interface.
pub trait Window {
    /// Native identity, used for equality.
    fn id(&self) -> WindowId;

    /// Frame in global coordinates.
    fn geometry(&self) -> Rect;

    /// Monitor currently hosting the window, if known.
    fn screen(&self) -> Option<Screen> { None }

    /// The window this one is transient for (e.g. a floating window's
    /// main window), if any.
    fn transient_parent(&self) -> Option<WindowHandle> { None }

    fn equals(&self, other: &dyn Window) -> bool { self.id() == other.id() }
}

pub type WindowHandle = Rc<dyn Window>;
