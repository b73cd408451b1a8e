//! the platform-neutral view base: identity, lifecycle, geometry, downcasts
//!
//! Backends implement the primitive methods of [`View`] on a type embedding
//! a [`ViewCore`]; everything else is derived here so the docking logic
//! never sees a concrete toolkit type.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

use crate::core::controller::{
    Controller, DockWidget, DropArea, FloatingWindow, Group, Layout, MainWindow, MdiLayout, Stack,
    TabBar, TitleBar, maybe_create_controller,
};
use crate::core::error::Diagnostic;
use crate::core::event::EventFilter;
use crate::core::signal::{Signal, Subscription};
use crate::core::view_type::ViewType;
use crate::layout_engine::item;
use crate::sys::geometry::{Point, Rect, Size};
use crate::sys::screen::Screen;
use crate::sys::window::{Window, WindowHandle};

/// Monotonic source of process-unique view ids. Starts at 1, never reused,
/// never persisted.
struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    const fn new() -> IdGenerator {
        IdGenerator { next: AtomicU64::new(1) }
    }

    fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

static VIEW_IDS: IdGenerator = IdGenerator::new();

/// Opaque backend-native identity token. Two views are the same native
/// widget iff their handles are equal; this is distinct from the
/// process-assigned id string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NativeHandle(pub u64);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LifecycleState {
    Live,
    InDestruction,
    Destroyed,
}

/// Per-view auxiliary state not exposed to backends: the installed event
/// filters and the two notification channels.
struct ViewPrivate {
    event_filters: RefCell<Vec<Rc<dyn EventFilter>>>,
    being_destroyed: Signal<()>,
    resized: Signal<Size>,
}

impl ViewPrivate {
    fn new() -> ViewPrivate {
        ViewPrivate {
            event_filters: RefCell::new(Vec::new()),
            being_destroyed: Signal::new(),
            resized: Signal::new(),
        }
    }
}

/// Shared state block embedded by every backend view.
///
/// Holds the view's identity, its role tag, the strong edge to its
/// controller and the lifecycle flags. The freed flag and the
/// `Live → InDestruction → Destroyed` progression are orthogonal: a view
/// freed through [`View::free`] is destroyed by `free_impl`, while a view
/// dropped by native parent teardown reaches destruction without ever being
/// freed (see [`ViewCore::destroy`]).
pub struct ViewCore {
    id: String,
    kind: ViewType,
    controller: RefCell<Option<Rc<Controller>>>,
    freed: Cell<bool>,
    state: Cell<LifecycleState>,
    about_to_be_destroyed: Cell<bool>,
    d: RefCell<Option<Rc<ViewPrivate>>>,
}

impl ViewCore {
    /// `kind` is immutable for the lifetime of the view. A missing
    /// controller is synthesized via
    /// [`maybe_create_controller`](crate::core::controller::maybe_create_controller).
    pub fn new(controller: Option<Rc<Controller>>, kind: ViewType) -> ViewCore {
        ViewCore {
            id: VIEW_IDS.next_id(),
            kind,
            controller: RefCell::new(Some(maybe_create_controller(controller, kind))),
            freed: Cell::new(false),
            state: Cell::new(LifecycleState::Live),
            about_to_be_destroyed: Cell::new(false),
            d: RefCell::new(Some(Rc::new(ViewPrivate::new()))),
        }
    }

    pub fn id(&self) -> &str { &self.id }

    pub fn kind(&self) -> ViewType { self.kind }

    pub fn controller(&self) -> Option<Rc<Controller>> { self.controller.borrow().clone() }

    pub fn freed(&self) -> bool { self.freed.get() }

    pub fn lifecycle_state(&self) -> LifecycleState { self.state.get() }

    /// True from the instant teardown starts, before any notification fires.
    pub fn in_dtor(&self) -> bool { self.state.get() != LifecycleState::Live }

    pub fn set_about_to_be_destroyed(&self) { self.about_to_be_destroyed.set(true); }

    pub fn about_to_be_destroyed(&self) -> bool { self.about_to_be_destroyed.get() }

    /// First half of [`View::free`]: flags the view as freed. Returns false
    /// (with one loud diagnostic) if it already was, in which case the
    /// caller must not tear down again.
    pub(crate) fn mark_freed(&self) -> bool {
        if self.freed.get() {
            Diagnostic::DoubleFree(self.id.clone()).report();
            return false;
        }
        self.freed.set(true);
        true
    }

    /// Runs the teardown sequence exactly once; later calls are no-ops.
    ///
    /// Order matters: the in-destruction flag is set before
    /// `being_destroyed` fires, so reentrant queries from handlers observe a
    /// consistent state, and the private block is dropped last.
    pub fn destroy(&self) {
        if self.state.get() != LifecycleState::Live {
            return;
        }
        self.state.set(LifecycleState::InDestruction);

        if let Some(d) = self.d() {
            d.being_destroyed.emit(&());
        }

        if !self.freed.get() && !self.kind.intersects(ViewType::VIEW_WRAPPER) {
            self.release_controller_on_implicit_destroy();
        } else if let Some(controller) = self.controller.borrow_mut().take() {
            controller.clear_view();
        }

        *self.d.borrow_mut() = None;
        self.state.set(LifecycleState::Destroyed);
    }

    /// Compatibility shim for backends whose native widget tree destroys
    /// child views as a side effect of parent teardown, bypassing
    /// [`View::free`]. The view then takes the controller down with it so
    /// the logical object is not leaked. Remove once every backend drives
    /// destruction through the controller.
    fn release_controller_on_implicit_destroy(&self) {
        if let Some(controller) = self.controller.borrow_mut().take() {
            trace!(view = %self.id, "view destroyed without free(); releasing its controller");
            controller.clear_view();
        }
    }

    pub fn install_view_event_filter(&self, filter: Rc<dyn EventFilter>) {
        if let Some(d) = self.d() {
            d.event_filters.borrow_mut().push(filter);
        }
    }

    /// Removes every matching installation of `filter`; absent filters are
    /// a no-op.
    pub fn remove_view_event_filter(&self, filter: &Rc<dyn EventFilter>) {
        if let Some(d) = self.d() {
            d.event_filters.borrow_mut().retain(|installed| !Rc::ptr_eq(installed, filter));
        }
    }

    /// Snapshot of the installed filters, in installation order.
    pub fn event_filters(&self) -> Vec<Rc<dyn EventFilter>> {
        self.d().map(|d| d.event_filters.borrow().clone()).unwrap_or_default()
    }

    pub fn connect_being_destroyed(&self, handler: impl Fn() + 'static) -> Option<Subscription> {
        self.d().map(|d| d.being_destroyed.connect(move |_| handler()))
    }

    pub fn disconnect_being_destroyed(&self, subscription: Subscription) {
        if let Some(d) = self.d() {
            d.being_destroyed.disconnect(subscription);
        }
    }

    pub fn connect_resized(&self, handler: impl Fn(Size) + 'static) -> Option<Subscription> {
        self.d().map(|d| d.resized.connect(move |size| handler(*size)))
    }

    pub fn disconnect_resized(&self, subscription: Subscription) {
        if let Some(d) = self.d() {
            d.resized.disconnect(subscription);
        }
    }

    pub(crate) fn emit_resized(&self, size: Size) {
        if let Some(d) = self.d() {
            d.resized.emit(&size);
        }
    }

    fn d(&self) -> Option<Rc<ViewPrivate>> { self.d.borrow().clone() }
}

impl Drop for ViewCore {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Platform-neutral view contract.
///
/// Backends implement the primitives (`geometry`, `set_size`, `move_to`,
/// `map_to_global`, `window`, `is_root_view`, `handle`, `parent_view`);
/// the remaining methods are derived and should not normally be overridden,
/// except where noted (`free_impl`, `on_resize`, `create_platform_window`).
pub trait View {
    /// The shared state block embedded in the backend type.
    fn core(&self) -> &ViewCore;

    // Backend primitives.

    /// Current rectangle in parent coordinates.
    fn geometry(&self) -> Rect { Rect::ZERO }

    /// Applies a new size to the native widget. Width and height carry
    /// unsigned semantics; rejecting negative values is the backend's
    /// responsibility, not this layer's.
    fn set_size(&self, width: i32, height: i32);

    /// Repositions the native widget within its parent.
    fn move_to(&self, x: i32, y: i32);

    /// Local to global (screen) coordinates.
    fn map_to_global(&self, local: Point) -> Point;

    /// Owning window, if the view is currently associated with one. A view
    /// briefly has none while being reparented or before being shown.
    fn window(&self) -> Option<WindowHandle> { None }

    /// True if this view has no logical parent within its native window.
    /// Root views delimit parent-chain traversal and are already in global
    /// coordinates.
    fn is_root_view(&self) -> bool;

    /// Backend-native identity token, used for equality.
    fn handle(&self) -> NativeHandle;

    /// Parent in the native view tree. The pointer graph is owned by the
    /// backend windowing tree; this layer only traverses it.
    fn parent_view(&self) -> Option<Rc<dyn View>> { None }

    /// Promotes the view to a top-level native window. Only desktop-widget
    /// backends ever need this; reaching the base implementation is a
    /// backend integration bug.
    fn create_platform_window(&self) {
        panic!("create_platform_window: not supported on this backend");
    }

    /// Teardown strategy invoked by [`View::free`]. The default destroys
    /// immediately; a backend may override to defer, e.g. until a native
    /// close animation finishes.
    fn free_impl(&self) {
        self.core().destroy();
    }

    fn set_visible(&self, visible: bool) {
        let _ = visible;
        Diagnostic::Unsupported("set_visible").report();
    }

    fn is_visible(&self) -> bool {
        Diagnostic::Unsupported("is_visible").report();
        false
    }

    /// Requests the view be closed. Returns whether it accepted.
    fn close(&self) -> bool {
        Diagnostic::Unsupported("close").report();
        false
    }

    /// Preferred size, if the backend computes one.
    fn size_hint(&self) -> Size { Size::ZERO }

    /// Null-marker views stand in for "no view" in shared-handle APIs and
    /// have no identity; see [`equals_shared`].
    fn is_null(&self) -> bool { false }

    // Identity.

    fn id(&self) -> &str { self.core().id() }

    fn view_type(&self) -> ViewType { self.core().kind() }

    /// Bitmask role test, true for composite matches as well.
    fn is(&self, t: ViewType) -> bool { self.view_type().intersects(t) }

    fn controller(&self) -> Option<Rc<Controller>> { self.core().controller() }

    // Lifecycle.

    /// The only sanctioned teardown entry point. Calling it twice is a
    /// programming error: it is reported loudly and the second call has no
    /// further effect.
    fn free(&self) {
        if self.core().mark_freed() {
            self.free_impl();
        }
    }

    fn freed(&self) -> bool { self.core().freed() }

    fn in_dtor(&self) -> bool { self.core().in_dtor() }

    fn set_about_to_be_destroyed(&self) { self.core().set_about_to_be_destroyed(); }

    fn about_to_be_destroyed(&self) -> bool { self.core().about_to_be_destroyed() }

    // Geometry, derived from the primitives.

    fn size(&self) -> Size { self.geometry().size }

    fn pos(&self) -> Point { self.geometry().origin }

    /// Local rectangle: the view's extent at origin (0, 0).
    fn rect(&self) -> Rect { Rect::new(Point::ZERO, self.size()) }

    fn x(&self) -> i32 { self.geometry().x() }

    fn y(&self) -> i32 { self.geometry().y() }

    fn width(&self) -> i32 { self.geometry().width() }

    fn height(&self) -> i32 { self.geometry().height() }

    fn move_point(&self, pos: Point) { self.move_to(pos.x, pos.y); }

    fn resize(&self, size: Size) { self.set_size(size.width, size.height); }

    fn set_geometry(&self, geometry: Rect) {
        self.move_to(geometry.x(), geometry.y());
        self.set_size(geometry.width(), geometry.height());
    }

    /// Geometry in screen coordinates. Root views are already in global
    /// space; for the rest the local origin is mapped out.
    fn global_geometry(&self) -> Rect {
        let geometry = self.geometry();
        if self.is_root_view() {
            geometry
        } else {
            geometry.moved_to(self.map_to_global(Point::ZERO))
        }
    }

    fn window_geometry(&self) -> Rect {
        self.window().map(|window| window.geometry()).unwrap_or(Rect::ZERO)
    }

    fn screen(&self) -> Option<Screen> { self.window().and_then(|window| window.screen()) }

    fn transient_window(&self) -> Option<WindowHandle> {
        self.window().and_then(|window| window.transient_parent())
    }

    fn is_in_window(&self, window: &WindowHandle) -> bool {
        match self.window() {
            Some(ours) => ours.equals(&**window),
            None => false,
        }
    }

    fn parent_size(&self) -> Size {
        self.parent_view().map(|parent| parent.size()).unwrap_or(Size::ZERO)
    }

    // Typed downcasts. One accessor per role, keyed on the controller's
    // tag; keep this table exhaustive and one-to-one.

    fn as_floating_window_controller(&self) -> Option<FloatingWindow> {
        self.controller()
            .filter(|c| c.is(ViewType::FLOATING_WINDOW))
            .map(FloatingWindow::new)
    }

    fn as_group_controller(&self) -> Option<Group> {
        self.controller().filter(|c| c.is(ViewType::GROUP)).map(Group::new)
    }

    fn as_title_bar_controller(&self) -> Option<TitleBar> {
        self.controller().filter(|c| c.is(ViewType::TITLE_BAR)).map(TitleBar::new)
    }

    fn as_tab_bar_controller(&self) -> Option<TabBar> {
        self.controller().filter(|c| c.is(ViewType::TAB_BAR)).map(TabBar::new)
    }

    fn as_stack_controller(&self) -> Option<Stack> {
        self.controller().filter(|c| c.is(ViewType::STACK)).map(Stack::new)
    }

    fn as_dock_widget_controller(&self) -> Option<DockWidget> {
        self.controller().filter(|c| c.is(ViewType::DOCK_WIDGET)).map(DockWidget::new)
    }

    fn as_main_window_controller(&self) -> Option<MainWindow> {
        self.controller().filter(|c| c.is(ViewType::MAIN_WINDOW)).map(MainWindow::new)
    }

    /// Unlike the other accessors this returns None mid-destruction: drop
    /// areas are looked up reentrantly during teardown cascades and must not
    /// resurrect a half-destroyed controller.
    fn as_drop_area_controller(&self) -> Option<DropArea> {
        if self.in_dtor() {
            return None;
        }
        self.controller().filter(|c| c.is(ViewType::DROP_AREA)).map(DropArea::new)
    }

    /// Guarded mid-destruction, same as [`View::as_drop_area_controller`].
    fn as_mdi_layout_controller(&self) -> Option<MdiLayout> {
        if self.in_dtor() {
            return None;
        }
        self.controller().filter(|c| c.is(ViewType::MDI_LAYOUT)).map(MdiLayout::new)
    }

    /// The two concrete layout kinds behind one capability: drop area if
    /// present, else MDI layout.
    fn as_layout(&self) -> Option<Layout> {
        if let Some(drop_area) = self.as_drop_area_controller() {
            return Some(Layout::DropArea(drop_area));
        }
        self.as_mdi_layout_controller().map(Layout::Mdi)
    }

    // Notifications.

    /// Canonical resize notification point: emits to `resized` subscribers
    /// synchronously, in subscription order, and reports the event as not
    /// handled. Backends may override to consume it instead.
    fn on_resize(&self, width: i32, height: i32) -> bool {
        self.core().emit_resized(Size::new(width, height));
        false
    }

    fn install_view_event_filter(&self, filter: Rc<dyn EventFilter>) {
        self.core().install_view_event_filter(filter);
    }

    fn remove_view_event_filter(&self, filter: &Rc<dyn EventFilter>) {
        self.core().remove_view_event_filter(filter);
    }

    /// Handle equality against another live view.
    fn equals(&self, other: &dyn View) -> bool { self.handle() == other.handle() }
}

/// Hard floor every view honors, republished from the layout item solver.
pub fn hardcoded_minimum_size() -> Size {
    item::HARDCODED_MINIMUM_SIZE
}

/// Clamps a requested maximum size into `[min, hardcoded ceiling]`.
///
/// Three steps, in this order: clamp `max` down to the hardcoded ceiling; a
/// non-positive axis in `max` means "unbounded" and becomes the ceiling
/// axis; finally expand `max` so it is no smaller than `min` on each axis.
/// Min/max widgets rely on this exact policy.
pub fn bounded_max_size(min: Size, max: Size) -> Size {
    let mut max = max.bounded_to(item::HARDCODED_MAXIMUM_SIZE);

    if max.width <= 0 {
        max.width = item::HARDCODED_MAXIMUM_SIZE.width;
    }
    if max.height <= 0 {
        max.height = item::HARDCODED_MAXIMUM_SIZE.height;
    }

    max.expanded_to(min)
}

/// Walks the parent chain starting at `view` itself, returning the first
/// controller whose view matches `kind`. Stops with None upon reaching a
/// root view, so the search never crosses into an unrelated window's tree;
/// a matching root is still returned (the match test runs first).
pub fn first_parent_of_type(view: &Rc<dyn View>, kind: ViewType) -> Option<Rc<Controller>> {
    let mut current = Some(Rc::clone(view));
    while let Some(candidate) = current {
        if candidate.is(kind) {
            return candidate.controller();
        }
        if candidate.is_root_view() {
            return None;
        }
        current = candidate.parent_view();
    }
    None
}

/// Topmost view of the native window `view` belongs to.
pub fn root_view(view: &Rc<dyn View>) -> Rc<dyn View> {
    let mut current = Rc::clone(view);
    loop {
        if current.is_root_view() {
            return current;
        }
        match current.parent_view() {
            Some(parent) => current = parent,
            None => return current,
        }
    }
}

pub fn close_root_view(view: &Rc<dyn View>) {
    root_view(view).close();
}

/// Null-tolerant equality: both absent compares equal, exactly one absent
/// compares unequal, otherwise handles are compared.
pub fn equals(one: Option<&dyn View>, two: Option<&dyn View>) -> bool {
    match (one, two) {
        (None, None) => true,
        (Some(one), Some(two)) => one.equals(two),
        _ => false,
    }
}

/// Shared-handle equality. Null-marker views ([`View::is_null`]) have no
/// identity and never compare equal, not even to themselves.
pub fn equals_shared(one: &Rc<dyn View>, two: Option<&Rc<dyn View>>) -> bool {
    let Some(two) = two else {
        return false;
    };
    if one.is_null() || two.is_null() {
        return false;
    }
    one.handle() == two.handle()
}
