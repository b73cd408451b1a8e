//! logical controllers and the typed role facades views downcast to

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::core::view::View;
use crate::core::view_type::ViewType;

/// The backend-independent object owning docking behaviour and state for one
/// UI role. A controller normally owns exactly one view; it may briefly
/// exist without one while the view is being (re)created.
pub struct Controller {
    kind: ViewType,
    view: RefCell<Option<Weak<dyn View>>>,
}

impl Controller {
    pub fn new(kind: ViewType) -> Rc<Controller> {
        Rc::new(Controller { kind, view: RefCell::new(None) })
    }

    pub fn kind(&self) -> ViewType { self.kind }

    /// Bitmask role test; true if any tag in `t` is set on this controller.
    pub fn is(&self, t: ViewType) -> bool { self.kind.intersects(t) }

    /// The view currently rendering this controller, if any.
    pub fn view(&self) -> Option<Rc<dyn View>> {
        self.view.borrow().as_ref().and_then(Weak::upgrade)
    }

    pub fn set_view(&self, view: &Rc<dyn View>) {
        *self.view.borrow_mut() = Some(Rc::downgrade(view));
    }

    pub(crate) fn clear_view(&self) { *self.view.borrow_mut() = None; }
}

/// Raw views constructed without a controller get a placeholder one, so the
/// View↔Controller edge is never dangling. Wrapper views keep their wrapper
/// role; anything else gets the inert `None` role.
pub fn maybe_create_controller(
    controller: Option<Rc<Controller>>,
    kind: ViewType,
) -> Rc<Controller> {
    if let Some(controller) = controller {
        return controller;
    }
    if kind == ViewType::VIEW_WRAPPER {
        return Controller::new(ViewType::VIEW_WRAPPER);
    }
    Controller::new(ViewType::NONE)
}

// Typed facades handed out by the per-role downcast accessors on `View`.
// Construction is crate-internal: a facade existing implies its role tag was
// checked. The table below must stay exhaustive and one-to-one with the
// accessor list in `core::view`.

macro_rules! role_facade {
    ($(#[$meta:meta])* $name:ident, $tag:ident) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name(Rc<Controller>);

        impl $name {
            pub(crate) fn new(controller: Rc<Controller>) -> $name {
                debug_assert!(controller.is(ViewType::$tag));
                $name(controller)
            }

            pub fn controller(&self) -> &Rc<Controller> { &self.0 }
        }
    };
}

role_facade!(FloatingWindow, FLOATING_WINDOW);
role_facade!(
    /// A group of tabbed dock widgets (a "frame" in older terminology).
    Group,
    GROUP
);
role_facade!(TitleBar, TITLE_BAR);
role_facade!(TabBar, TAB_BAR);
role_facade!(Stack, STACK);
role_facade!(DockWidget, DOCK_WIDGET);
role_facade!(MainWindow, MAIN_WINDOW);
role_facade!(DropArea, DROP_AREA);
role_facade!(MdiLayout, MDI_LAYOUT);

/// The two concrete layout kinds, interchangeable for callers that only
/// need layout operations.
#[derive(Clone)]
pub enum Layout {
    DropArea(DropArea),
    Mdi(MdiLayout),
}

impl Layout {
    pub fn controller(&self) -> &Rc<Controller> {
        match self {
            Layout::DropArea(drop_area) => drop_area.controller(),
            Layout::Mdi(mdi) => mdi.controller(),
        }
    }
}
