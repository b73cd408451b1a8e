//! screen descriptors surfaced by backend window handles

use serde::{Deserialize, Serialize};

use crate::sys::geometry::Rect;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScreenId(pub u32);

impl ScreenId {
    #[inline]
    pub fn new(id: u32) -> Self { Self(id) }

    #[inline]
    pub fn as_u32(self) -> u32 { self.0 }
}

impl From<ScreenId> for u32 {
    fn from(val: ScreenId) -> Self { val.0 }
}

/// Description of one monitor, as reported by the backend windowing system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub id: ScreenId,
    /// Frame in global coordinates.
    pub frame: Rect,
    pub name: Option<String>,
}
