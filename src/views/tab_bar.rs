use crate::core::controller::TabBar;
use crate::sys::geometry::{Point, Rect};

/// Interface tab-bar backend views implement for the tab-bar controller,
/// beyond the base [`View`](crate::core::view::View) contract.
pub trait TabBarView {
    fn tab_bar_controller(&self) -> &TabBar;

    fn tabs_are_movable(&self) -> bool;

    /// Index of the tab at `local_pos`, if any.
    fn tab_at(&self, local_pos: Point) -> Option<usize>;

    fn move_tab_to(&self, from: usize, to: usize);

    fn rect_for_tab(&self, index: usize) -> Rect;

    fn set_current_index(&self, index: usize);

    fn num_dock_widgets(&self) -> usize;

    fn rename_tab(&self, index: usize, text: &str);

    fn text(&self, index: usize) -> String;
}
