//! Browsing history

use super::NavigationState;

/// Linear browsing history with a cursor, like a browser tab's session history
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<NavigationState>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new entry, dropping anything forward of the cursor
    pub fn push(&mut self, state: NavigationState) {
        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        }
        self.entries.push(state);
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Swap the entry under the cursor
    pub fn replace_current(&mut self, state: NavigationState) {
        match self.cursor {
            Some(cursor) => self.entries[cursor] = state,
            None => self.push(state),
        }
    }

    pub fn current(&self) -> Option<&NavigationState> {
        self.cursor.map(|cursor| &self.entries[cursor])
    }

    /// Move the cursor one entry back
    pub fn back(&mut self) -> Option<&NavigationState> {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                self.entries.get(cursor - 1)
            }
            _ => None,
        }
    }

    /// Move the cursor one entry forward
    pub fn forward(&mut self) -> Option<&NavigationState> {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.entries.len() => {
                self.cursor = Some(cursor + 1);
                self.entries.get(cursor + 1)
            }
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
