/// Default initial capacity of the read buffer.
pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

/// Reader configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Initial read buffer capacity in bytes, the buffer doubles from here as needed.
    pub initial_capacity: usize,
}

impl Config {
    /// Create default [`Config`].
    #[inline]
    pub const fn new() -> Self {
        Self { initial_capacity: DEFAULT_INITIAL_CAPACITY }
    }

    /// Set the initial read buffer capacity.
    #[inline]
    pub const fn initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
