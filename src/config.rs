//! Konfigurasi Writer

/// Default kapasitas awal buffer writer (bytes)
pub const DEFAULT_INITIAL_CAPACITY: usize = 64;

/// Writer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterConfig {
    /// Kapasitas awal buffer. Buffer tetap tumbuh tanpa batas,
    /// ini hanya mengurangi realokasi untuk pesan yang ukurannya sudah diketahui.
    pub initial_capacity: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl WriterConfig {
    /// Set kapasitas awal
    #[must_use]
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
