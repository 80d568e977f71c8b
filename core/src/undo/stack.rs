//! Fixed-capacity circular undo buffer.
//!
//! [`UndoStack`] stores entries in a ring. A logical cursor splits the
//! retained entries into the undo history (below the cursor) and the redo
//! tail (entries that were popped but not yet overwritten).
//!
//! ```text
//! capacity = 4, two pushes, one pop
//!
//!   slot:    0      1      2      3
//!          [ A ]  [ B ]  [   ]  [   ]
//!                   ^ top
//!   len = 1 (A undoable), total_len = 2 (B restorable)
//! ```
//!
//! Entries are never cleared by [`pop`](UndoStack::pop), so
//! [`restore`](UndoStack::restore) can step forward over them again. A
//! [`push`](UndoStack::push) discards the redo tail and, once the ring is
//! full, overwrites the oldest entry. Both kinds of unreachable entries are
//! handed back to the caller so it can purge them.

use std::fmt;

use super::error::{UndoError, UndoResult};

/// Ring buffer with undo/redo cursor semantics.
pub struct UndoStack<T> {
    buffer: Vec<Option<T>>,
    /// Next write slot.
    top: usize,
    /// Entries available to pop.
    len: usize,
    /// `len` plus the redo tail still physically retained.
    total_len: usize,
}

impl<T> UndoStack<T> {
    /// Creates an empty stack holding at most `capacity` entries.
    ///
    /// Returns [`UndoError::InvalidArgument`] when `capacity` is zero.
    pub fn new(capacity: usize) -> UndoResult<Self> {
        if capacity == 0 {
            return Err(UndoError::InvalidArgument(
                "capacity must be greater than 0".into(),
            ));
        }
        let mut buffer = Vec::with_capacity(capacity);
        buffer.resize_with(capacity, || None);
        Ok(Self {
            buffer,
            top: 0,
            len: 0,
            total_len: 0,
        })
    }

    /// Creates an empty stack with the same capacity as `self`.
    pub fn empty_like(&self) -> Self {
        let mut buffer = Vec::with_capacity(self.capacity());
        buffer.resize_with(self.capacity(), || None);
        Self {
            buffer,
            top: 0,
            len: 0,
            total_len: 0,
        }
    }

    /// Maximum number of entries the ring can hold.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Number of entries that can be popped.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing can be popped.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Undoable entries plus the redo tail.
    pub fn total_len(&self) -> usize {
        self.total_len
    }

    /// Number of entries that can be restored.
    pub fn redo_len(&self) -> usize {
        self.total_len - self.len
    }

    pub fn can_pop(&self) -> bool {
        self.len > 0
    }

    pub fn can_restore(&self) -> bool {
        self.len < self.total_len
    }

    /// Writes `item` at the top of the stack.
    ///
    /// Returns every entry that became unreachable: the redo tail (the
    /// pushed entry starts a new branch) and, when the ring was full, the
    /// oldest entry that got overwritten. The returned vector is empty in
    /// the common case and does not allocate then.
    pub fn push(&mut self, item: T) -> Vec<T> {
        let capacity = self.capacity();
        let mut evicted = Vec::new();

        for offset in 0..self.redo_len() {
            let index = (self.top + offset) % capacity;
            if let Some(entry) = self.buffer[index].take() {
                evicted.push(entry);
            }
        }

        if let Some(oldest) = self.buffer[self.top].replace(item) {
            evicted.push(oldest);
        }

        self.top = (self.top + 1) % capacity;
        if self.len < capacity {
            self.len += 1;
        }
        self.total_len = self.len;
        evicted
    }

    /// Steps the cursor back and returns the entry it passed over.
    ///
    /// The slot is not cleared, so the entry stays available to
    /// [`restore`](Self::restore).
    pub fn pop(&mut self) -> UndoResult<&T> {
        if self.len == 0 {
            return Err(UndoError::Empty);
        }
        let capacity = self.capacity();
        self.len -= 1;
        self.top = (self.top + capacity - 1) % capacity;
        self.buffer[self.top]
            .as_ref()
            .ok_or_else(|| UndoError::InvalidState("popped slot is vacant".into()))
    }

    /// Steps the cursor forward over the next redo entry and returns it.
    pub fn restore(&mut self) -> UndoResult<&T> {
        if !self.can_restore() {
            return Err(UndoError::InvalidState("nothing to restore".into()));
        }
        self.top = (self.top + 1) % self.capacity();
        self.len += 1;
        self.peek()
    }

    /// Returns the entry just below the cursor.
    pub fn peek(&self) -> UndoResult<&T> {
        if self.len == 0 {
            return Err(UndoError::Empty);
        }
        let capacity = self.capacity();
        let index = (self.top + capacity - 1) % capacity;
        self.buffer[index]
            .as_ref()
            .ok_or_else(|| UndoError::InvalidState("top slot is vacant".into()))
    }

    /// Drops every entry and resets the cursor.
    ///
    /// Entries are dropped, not purged. Purge them through
    /// [`iter_mut`](Self::iter_mut) first if that matters.
    pub fn clear(&mut self) {
        self.top = 0;
        self.len = 0;
        self.total_len = 0;
        for slot in &mut self.buffer {
            *slot = None;
        }
    }

    /// Iterates every physically retained entry (undo history and redo
    /// tail) in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buffer.iter().flatten()
    }

    /// Mutable counterpart of [`iter`](Self::iter).
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.buffer.iter_mut().flatten()
    }
}

impl<T> fmt::Debug for UndoStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoStack")
            .field("capacity", &self.capacity())
            .field("top", &self.top)
            .field("len", &self.len)
            .field("total_len", &self.total_len)
            .finish()
    }
}
