//! Storage: persisted encoded buffers
//!
//! Seluruh buffer ditulis/di-map sekaligus. Codec tetap bekerja
//! di atas byte slice in-memory, tidak ada streaming I/O.

mod mapped_buffer;

pub use mapped_buffer::MappedBuffer;
