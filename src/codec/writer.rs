//! Sequential Writer
//!
//! Append typed values ke growable buffer, sesuai urutan pemanggilan.
//! Setiap write mengembalikan `&mut Self` supaya bisa di-chain.
//! Append tidak pernah gagal, buffer tumbuh selama memory tersedia.

use byteorder::ByteOrder;
use tracing::debug;

use super::traits::WireEncode;
use super::wire::{
    char_to_unit, length_prefix, WireOrder, CHAR_SIZE, F32_SIZE, F64_SIZE, I16_SIZE, I32_SIZE,
    I64_SIZE,
};
use crate::config::WriterConfig;
use crate::error::{CodecError, Result};
use crate::types::{Color, Color32, Rect, Vector2, Vector3};

/// Growable binary writer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Membuat writer kosong dengan konfigurasi default
    pub fn new() -> Self {
        Self::with_config(WriterConfig::default())
    }

    /// Membuat writer dengan kapasitas awal tertentu
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(WriterConfig::default().initial_capacity(capacity))
    }

    pub fn with_config(config: WriterConfig) -> Self {
        Self {
            buf: Vec::with_capacity(config.initial_capacity),
        }
    }

    /// Isi buffer saat ini
    ///
    /// Borrow ini snapshot: write berikutnya butuh `&mut self`, jadi slice
    /// tidak bisa dipakai lagi setelah buffer berubah.
    #[inline(always)]
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Ambil buffer, writer selesai dipakai
    #[inline(always)]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Reset writer untuk reuse (kapasitas dipertahankan)
    #[inline(always)]
    pub fn clear(&mut self) -> &mut Self {
        self.buf.clear();
        self
    }

    // ------------------------------------------------------------------
    // Scalars
    // ------------------------------------------------------------------

    #[inline(always)]
    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    #[inline(always)]
    pub fn write_i16(&mut self, value: i16) -> &mut Self {
        let mut scratch = [0u8; I16_SIZE];
        WireOrder::write_i16(&mut scratch, value);
        self.write_bytes(&scratch)
    }

    #[inline(always)]
    pub fn write_i32(&mut self, value: i32) -> &mut Self {
        let mut scratch = [0u8; I32_SIZE];
        WireOrder::write_i32(&mut scratch, value);
        self.write_bytes(&scratch)
    }

    #[inline(always)]
    pub fn write_i64(&mut self, value: i64) -> &mut Self {
        let mut scratch = [0u8; I64_SIZE];
        WireOrder::write_i64(&mut scratch, value);
        self.write_bytes(&scratch)
    }

    #[inline(always)]
    pub fn write_f32(&mut self, value: f32) -> &mut Self {
        let mut scratch = [0u8; F32_SIZE];
        WireOrder::write_f32(&mut scratch, value);
        self.write_bytes(&scratch)
    }

    #[inline(always)]
    pub fn write_f64(&mut self, value: f64) -> &mut Self {
        let mut scratch = [0u8; F64_SIZE];
        WireOrder::write_f64(&mut scratch, value);
        self.write_bytes(&scratch)
    }

    /// Write raw UTF-16 code unit
    #[inline(always)]
    pub fn write_utf16(&mut self, unit: u16) -> &mut Self {
        let mut scratch = [0u8; CHAR_SIZE];
        WireOrder::write_u16(&mut scratch, unit);
        self.write_bytes(&scratch)
    }

    /// Write char sebagai satu UTF-16 code unit
    ///
    /// Char di luar BMP ditulis sebagai U+FFFD.
    #[inline(always)]
    pub fn write_char(&mut self, value: char) -> &mut Self {
        self.write_utf16(char_to_unit(value))
    }

    /// Write string: `[i32 byte length][UTF-8 bytes]`
    ///
    /// # Panics
    /// Panic jika string lebih dari `i32::MAX` bytes
    pub fn write_str(&mut self, value: &str) -> &mut Self {
        self.write_byte_array(value.as_bytes())
    }

    // ------------------------------------------------------------------
    // Raw bytes
    // ------------------------------------------------------------------

    /// Append bytes apa adanya, TANPA length prefix
    #[inline(always)]
    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Append `[i32 count][bytes]` - self-describing, beda dengan `write_bytes`
    ///
    /// # Panics
    /// Panic jika lebih dari `i32::MAX` bytes
    pub fn write_byte_array(&mut self, bytes: &[u8]) -> &mut Self {
        self.write_i32(length_prefix(bytes.len()));
        self.write_bytes(bytes)
    }

    // ------------------------------------------------------------------
    // Composite types (field order tetap, tanpa padding)
    // ------------------------------------------------------------------

    #[inline(always)]
    pub fn write_vector2(&mut self, value: Vector2) -> &mut Self {
        self.write_f32(value.x).write_f32(value.y)
    }

    #[inline(always)]
    pub fn write_vector3(&mut self, value: Vector3) -> &mut Self {
        self.write_f32(value.x)
            .write_f32(value.y)
            .write_f32(value.z)
    }

    #[inline(always)]
    pub fn write_rect(&mut self, value: Rect) -> &mut Self {
        self.write_f32(value.x)
            .write_f32(value.y)
            .write_f32(value.width)
            .write_f32(value.height)
    }

    #[inline(always)]
    pub fn write_color32(&mut self, value: Color32) -> &mut Self {
        self.write_bytes(&[value.r, value.g, value.b, value.a])
    }

    #[inline(always)]
    pub fn write_color(&mut self, value: Color) -> &mut Self {
        self.write_f32(value.r)
            .write_f32(value.g)
            .write_f32(value.b)
            .write_f32(value.a)
    }

    // ------------------------------------------------------------------
    // Generic
    // ------------------------------------------------------------------

    /// Write satu value lewat `WireEncode`
    #[inline(always)]
    pub fn write<T: WireEncode + ?Sized>(&mut self, value: &T) -> &mut Self {
        value.encode(self);
        self
    }

    /// Write `[i32 count][count × encode(T)]`, urutan sesuai input
    ///
    /// # Panics
    /// Panic jika lebih dari `i32::MAX` elemen
    pub fn write_array<T: WireEncode>(&mut self, values: &[T]) -> &mut Self {
        self.write_i32(length_prefix(values.len()));
        for value in values {
            value.encode(self);
        }
        self
    }

    pub fn write_i16_array(&mut self, values: &[i16]) -> &mut Self {
        self.write_array(values)
    }

    pub fn write_i32_array(&mut self, values: &[i32]) -> &mut Self {
        self.write_array(values)
    }

    pub fn write_i64_array(&mut self, values: &[i64]) -> &mut Self {
        self.write_array(values)
    }

    pub fn write_f32_array(&mut self, values: &[f32]) -> &mut Self {
        self.write_array(values)
    }

    pub fn write_f64_array(&mut self, values: &[f64]) -> &mut Self {
        self.write_array(values)
    }

    pub fn write_char_array(&mut self, values: &[char]) -> &mut Self {
        self.write_array(values)
    }

    /// Write array of strings, masing-masing dengan byte length prefix sendiri
    pub fn write_str_array<S: AsRef<str>>(&mut self, values: &[S]) -> &mut Self {
        self.write_i32(length_prefix(values.len()));
        for value in values {
            self.write_str(value.as_ref());
        }
        self
    }

    pub fn write_vector2_array(&mut self, values: &[Vector2]) -> &mut Self {
        self.write_array(values)
    }

    pub fn write_vector3_array(&mut self, values: &[Vector3]) -> &mut Self {
        self.write_array(values)
    }

    pub fn write_rect_array(&mut self, values: &[Rect]) -> &mut Self {
        self.write_array(values)
    }

    pub fn write_color32_array(&mut self, values: &[Color32]) -> &mut Self {
        self.write_array(values)
    }

    pub fn write_color_array(&mut self, values: &[Color]) -> &mut Self {
        self.write_array(values)
    }

    // ------------------------------------------------------------------
    // Random overwrite
    // ------------------------------------------------------------------

    /// Ganti satu byte di offset yang sudah ada. Panjang buffer tidak berubah.
    pub fn overwrite_byte(&mut self, index: usize, value: u8) -> Result<&mut Self> {
        self.overwrite_bytes(index, &[value])
    }

    /// Ganti `values.len()` bytes mulai dari `index`. Panjang buffer tidak berubah.
    ///
    /// Gagal dengan `OverwriteOutOfRange` jika `index + values.len() > len()`,
    /// buffer tidak disentuh sama sekali.
    pub fn overwrite_bytes(&mut self, index: usize, values: &[u8]) -> Result<&mut Self> {
        let buffer_len = self.buf.len();
        let end = match index.checked_add(values.len()) {
            Some(end) if end <= buffer_len => end,
            _ => {
                debug!(index, len = values.len(), buffer_len, "rejected out-of-range overwrite");
                return Err(CodecError::OverwriteOutOfRange {
                    index,
                    len: values.len(),
                    buffer_len,
                });
            }
        };

        self.buf[index..end].copy_from_slice(values);
        Ok(self)
    }
}

impl From<Writer> for Vec<u8> {
    fn from(writer: Writer) -> Self {
        writer.into_bytes()
    }
}

impl AsRef<[u8]> for Writer {
    fn as_ref(&self) -> &[u8] {
        self.bytes()
    }
}
