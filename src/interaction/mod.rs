use serde::{Deserialize, Serialize};

/// Tracks which chart element (bar, point or slice) is emphasized.
///
/// Pointer-enter on an element sets its index, pointer-leave clears it.
/// Changing the highlight never touches computed geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighlightState {
    index: Option<usize>,
}

impl HighlightState {
    #[must_use]
    pub fn index(self) -> Option<usize> {
        self.index
    }

    #[must_use]
    pub fn is_highlighted(self, index: usize) -> bool {
        self.index == Some(index)
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.index.is_some()
    }

    pub fn set(&mut self, index: usize) {
        self.index = Some(index);
    }

    pub fn clear(&mut self) {
        self.index = None;
    }
}
