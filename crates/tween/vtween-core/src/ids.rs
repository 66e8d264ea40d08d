//! Tween identifiers and a monotonic allocator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle for a registered tween. Never reused within one scheduler.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TweenId(pub u32);

impl fmt::Display for TweenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tween#{}", self.0)
    }
}

#[derive(Default, Debug)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc(&mut self) -> TweenId {
        let id = TweenId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}
