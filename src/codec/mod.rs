//! Codec Layer: Positional Binary Encoding
//!
//! Prinsip desain:
//! - Positional: tidak ada type tag, reader harus mengulang urutan write
//! - Fixed byte order: little-endian untuk semua tipe
//! - Bounds-safe: reader tidak pernah membaca di luar source

mod reader;
mod traits;
pub mod wire;
mod writer;

pub use reader::Reader;
pub use traits::{WireDecode, WireEncode};
pub use writer::Writer;
