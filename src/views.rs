//! per-role interfaces backend views implement on top of the core contract

pub mod tab_bar;
