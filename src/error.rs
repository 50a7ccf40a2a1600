//! Error types untuk codec
//!
//! Semua kegagalan bersifat lokal dan langsung terlihat oleh caller.
//! Tidak ada retry, tidak ada transient failure.

use std::io;
use std::str::Utf8Error;

use thiserror::Error;

/// Result alias untuk seluruh operasi codec
pub type Result<T> = std::result::Result<T, CodecError>;

/// Error yang bisa terjadi saat encode/decode
#[derive(Debug, Error)]
pub enum CodecError {
    /// Consume meminta lebih banyak bytes daripada yang tersisa
    #[error("unexpected end of buffer at offset {offset}: need {needed} bytes, {remaining} remaining")]
    UnexpectedEof {
        /// Posisi cursor (atau offset discrete) saat read gagal
        offset: usize,
        /// Jumlah bytes yang diminta
        needed: usize,
        /// Jumlah bytes yang tersedia dari offset tersebut
        remaining: usize,
    },

    /// Overwrite menyentuh bytes di luar panjang buffer
    #[error("overwrite of {len} bytes at index {index} exceeds buffer length {buffer_len}")]
    OverwriteOutOfRange {
        index: usize,
        len: usize,
        buffer_len: usize,
    },

    /// Length prefix negatif - buffer korup atau urutan read tidak cocok
    #[error("negative length prefix {length} at offset {offset}")]
    NegativeLength { offset: usize, length: i32 },

    /// Body string bukan UTF-8 yang valid
    #[error("invalid UTF-8 string at offset {offset}: {source}")]
    InvalidUtf8 {
        offset: usize,
        #[source]
        source: Utf8Error,
    },

    /// UTF-16 code unit berupa lone surrogate, tidak bisa jadi `char`
    #[error("invalid char code unit {unit:#06x} at offset {offset}")]
    InvalidChar { offset: usize, unit: u16 },

    /// I/O error dari mapped storage
    #[error("storage i/o error: {0}")]
    Io(#[from] io::Error),
}

impl CodecError {
    /// True jika error berasal dari buffer yang terlalu pendek
    #[must_use]
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::UnexpectedEof { .. })
    }
}
