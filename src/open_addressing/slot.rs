use std::mem;

/// A single cell of the hash table.
pub enum Slot<T> {
    Empty,
    Occupied(T),
    Tombstone,
}

impl<T> Slot<T> {
    pub fn take(&mut self) -> Option<T> {
        match mem::replace(self, Slot::Tombstone) {
            Slot::Occupied(value) => Some(value),
            old_slot => {
                *self = old_slot;
                None
            },
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Slot::Occupied(value) => Some(value),
            _ => None,
        }
    }
}
