//! published sizing constants of the multisplitter item solver
//!
//! The solver itself lives outside this crate; the view core only consumes
//! the two constants that bound every item's size negotiation.

use crate::sys::geometry::Size;

/// Smallest size the layout will ever assign to an item.
pub const HARDCODED_MINIMUM_SIZE: Size = Size::new(80, 90);

/// Absolute ceiling for any item size request.
pub const HARDCODED_MAXIMUM_SIZE: Size = Size::new(16_777_215, 16_777_215);
