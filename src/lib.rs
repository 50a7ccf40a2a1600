//! BRW - Sequential Binary Reader/Writer
//!
//! Arsitektur:
//! - Writer: append typed values ke growable buffer, chainable
//! - Reader: consume typed values dengan cursor yang bounds-safe
//! - Wire format: fixed-width little-endian, `[i32 length][payload]` untuk data variable
//! - Storage: persist/map buffer utuh lewat mmap
//!
//! Format ini positional: tidak ada magic, versi, atau type tag. Reader HARUS
//! memanggil read dengan urutan dan tipe yang sama seperti write. Kalau tidak,
//! hasilnya garbage, bukan error - codec tidak punya informasi untuk mendeteksinya.
//! Menjaga urutan itu adalah kewajiban protocol di atas codec.
//!
//! ```
//! use brw::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer
//!     .write_u8(10)
//!     .write_i16(20)
//!     .write_i32(30)
//!     .write_f32(40.5)
//!     .write_str("Test");
//!
//! let mut reader = Reader::new(writer.bytes());
//! assert_eq!(reader.read_u8().unwrap(), 10);
//! assert_eq!(reader.read_i16().unwrap(), 20);
//! assert_eq!(reader.read_i32().unwrap(), 30);
//! assert_eq!(reader.read_f32().unwrap(), 40.5);
//! assert_eq!(reader.read_string().unwrap(), "Test");
//! assert!(reader.is_exhausted());
//! ```
//!
//! Read yang kekurangan data tidak pernah panic dan tidak memajukan cursor:
//!
//! ```
//! use brw::Reader;
//!
//! let mut reader = Reader::new(&[1, 2]);
//! assert!(reader.read_i32().is_err());
//! assert_eq!(reader.cursor(), 0);
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod storage;
pub mod types;

pub use codec::{Reader, WireDecode, WireEncode, Writer};
pub use config::WriterConfig;
pub use error::{CodecError, Result};
pub use storage::MappedBuffer;
pub use types::{Color, Color32, Rect, Vector2, Vector3};
