use bitflags::bitflags;

bitflags! {
    /// Semantic role(s) of a view.
    ///
    /// A view may legitimately carry more than one tag (a wrapper view that
    /// is also a drop area, for example), so role tests go through
    /// [`ViewType::intersects`] rather than equality.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct ViewType: u32 {
        const GROUP = 1 << 0;
        const TITLE_BAR = 1 << 1;
        const TAB_BAR = 1 << 2;
        const STACK = 1 << 3;
        const FLOATING_WINDOW = 1 << 4;
        const SEPARATOR = 1 << 5;
        const DOCK_WIDGET = 1 << 6;
        const LAYOUT_ITEM = 1 << 7;
        const SIDE_BAR = 1 << 8;
        const MAIN_WINDOW = 1 << 9;
        const DROP_AREA = 1 << 10;
        const MDI_LAYOUT = 1 << 11;
        const RUBBER_BAND = 1 << 12;
        const DROP_INDICATOR_OVERLAY = 1 << 13;
        const VIEW_WRAPPER = 1 << 14;
    }
}

impl ViewType {
    /// Placeholder role for controllers synthesized behind raw views.
    pub const NONE: ViewType = ViewType::empty();
}
