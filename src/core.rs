pub mod controller;
pub mod error;
pub mod event;
pub mod signal;
pub mod view;
pub mod view_type;
