use crate::error::BridgeError;

/// Fixed-capacity FIFO with contiguous batch views.
///
/// Storage is twice the capacity and every committed slot is mirrored into
/// the other half, so the readable run and the free run are always one
/// contiguous slice no matter where the wrap point falls. The buffer never
/// reallocates after construction.
pub struct RingBuffer<T> {
    data: Box<[T]>,
    capacity: usize,
    start: usize,
    len: usize,
}

impl<T: Copy + Default> RingBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: vec![T::default(); capacity * 2].into_boxed_slice(),
            capacity,
            start: 0,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn free_len(&self) -> usize {
        self.capacity - self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    pub fn push(&mut self, value: T) -> Result<(), BridgeError> {
        if self.is_full() {
            return Err(BridgeError::CapacityExceeded);
        }
        let idx = self.write_index();
        self.data[idx] = value;
        self.data[idx + self.capacity] = value;
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, BridgeError> {
        if self.is_empty() {
            return Err(BridgeError::Underrun);
        }
        let value = self.data[self.start];
        self.consume(1);
        Ok(value)
    }

    pub fn peek(&self) -> Option<&T> {
        self.readable().first()
    }

    /// Every queued element, oldest first.
    #[inline]
    pub fn readable(&self) -> &[T] {
        &self.data[self.start..self.start + self.len]
    }

    /// Drop the `count` oldest elements (clamped to `len`).
    pub fn consume(&mut self, count: usize) {
        let count = count.min(self.len);
        self.start = (self.start + count) % self.capacity;
        self.len -= count;
    }

    /// Every free slot, in the order they will be committed.
    #[inline]
    pub fn writable(&mut self) -> &mut [T] {
        let idx = self.write_index();
        let free = self.free_len();
        &mut self.data[idx..idx + free]
    }

    /// Publish the first `count` slots of [`writable`](Self::writable)
    /// (clamped to the free space).
    pub fn commit(&mut self, count: usize) {
        let count = count.min(self.free_len());
        let first = self.write_index();
        for i in first..first + count {
            if i < self.capacity {
                self.data[i + self.capacity] = self.data[i];
            } else {
                self.data[i - self.capacity] = self.data[i];
            }
        }
        self.len += count;
    }

    pub fn clear(&mut self) {
        self.start = 0;
        self.len = 0;
    }

    #[inline]
    fn write_index(&self) -> usize {
        (self.start + self.len) % self.capacity
    }
}
