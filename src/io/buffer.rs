use bytes::BytesMut;

/// Growable read buffer.
///
/// The buffer is split into `[0, filled)`, bytes read but not yet consumed, and
/// `[filled, capacity)`, free space for the next read. Capacity only grows, by doubling, and only
/// when the free space is exhausted.
pub struct WorkBuffer {
    buf: BytesMut,
    filled: usize,
}

impl WorkBuffer {
    /// Create new buffer with given initial capacity.
    ///
    /// Zero capacity is raised to one, so doubling always makes room.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut buf = BytesMut::with_capacity(capacity);
        buf.resize(capacity, 0);
        Self { buf, filled: 0 }
    }

    /// Returns the number of bytes the buffer can hold before growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of unconsumed bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.filled
    }

    /// Returns `true` if there are no unconsumed bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Returns the unconsumed bytes.
    #[inline]
    pub fn filled(&self) -> &[u8] {
        &self.buf[..self.filled]
    }

    /// Double the capacity if there is no free space left.
    ///
    /// Returns `true` if the buffer grew. Unconsumed bytes stay in place.
    pub fn grow_if_full(&mut self) -> bool {
        if self.filled < self.capacity() {
            return false;
        }
        let capacity = self.capacity() * 2;
        self.buf.resize(capacity, 0);
        true
    }

    /// Returns the free space after the unconsumed bytes.
    #[inline]
    pub fn spare_mut(&mut self) -> &mut [u8] {
        &mut self.buf[self.filled..]
    }

    /// Mark `n` bytes of the free space as filled.
    ///
    /// # Panics
    ///
    /// Panics if `n` is larger than the free space.
    pub fn advance_filled(&mut self, n: usize) {
        assert!(
            n <= self.capacity() - self.filled,
            "advance out of bounds: the free space is {} but advancing by {n}",
            self.capacity() - self.filled,
        );
        self.filled += n;
    }

    /// Discard `n` bytes from the front, moving the rest of the unconsumed bytes to the front.
    ///
    /// Discarding more than [`len`] clears the buffer.
    ///
    /// [`len`]: WorkBuffer::len
    pub fn consume(&mut self, n: usize) {
        let n = n.min(self.filled);
        if n == 0 {
            return;
        }
        self.buf.copy_within(n..self.filled, 0);
        self.filled -= n;
    }

    /// Discard all unconsumed bytes, keeping the capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.filled = 0;
    }
}

impl std::fmt::Debug for WorkBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("WorkBuffer")
            .field("filled", &self.filled)
            .field("capacity", &self.capacity())
            .finish()
    }
}
