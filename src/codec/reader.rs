//! Sequential Reader dengan bounds-safe cursor
//!
//! Prinsip desain:
//! - Zero-copy: `read_bytes`/`read_str` mengembalikan slice ke source
//! - Total: read yang kekurangan data return `Err`, tidak pernah panic
//! - Atomic: read yang gagal tidak memajukan cursor, termasuk read
//!   length-prefixed yang prefix-nya sukses tapi body-nya tidak

use byteorder::ByteOrder;
use tracing::trace;

use super::traits::WireDecode;
use super::wire::{
    bounded_capacity, unit_to_char, WireOrder, CHAR_SIZE, COLOR32_SIZE, COLOR_SIZE, F32_SIZE,
    F64_SIZE, I16_SIZE, I32_SIZE, I64_SIZE, LENGTH_PREFIX_SIZE, RECT_SIZE, U8_SIZE, VECTOR2_SIZE,
    VECTOR3_SIZE,
};
use crate::error::{CodecError, Result};
use crate::types::{Color, Color32, Rect, Vector2, Vector3};

/// Binary reader di atas byte slice yang immutable
///
/// Source tidak pernah dimodifikasi. Beberapa reader boleh berbagi source
/// yang sama, masing-masing dengan cursor sendiri.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    buf: &'a [u8],
    cursor: usize,
}

impl<'a> Reader<'a> {
    /// Membuat reader dari buffer, cursor mulai di 0
    #[inline(always)]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, cursor: 0 }
    }

    /// Posisi absolut cursor saat ini
    #[inline(always)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Bytes yang belum dibaca
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.cursor
    }

    #[inline(always)]
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.buf.len()
    }

    /// Panjang total source
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Source lengkap (tidak tergantung cursor)
    #[inline(always)]
    pub fn source(&self) -> &'a [u8] {
        self.buf
    }

    /// Slice `[start, start + count)` tanpa menyentuh cursor
    #[inline(always)]
    fn slice_at(&self, start: usize, count: usize) -> Result<&'a [u8]> {
        match start.checked_add(count) {
            Some(end) if end <= self.buf.len() => Ok(&self.buf[start..end]),
            _ => {
                let remaining = self.buf.len().saturating_sub(start);
                trace!(offset = start, needed = count, remaining, "read past end of buffer");
                Err(CodecError::UnexpectedEof {
                    offset: start,
                    needed: count,
                    remaining,
                })
            }
        }
    }

    /// Consume `count` bytes dari cursor
    #[inline(always)]
    fn take(&mut self, count: usize) -> Result<&'a [u8]> {
        let bytes = self.slice_at(self.cursor, count)?;
        self.cursor += count;
        Ok(bytes)
    }

    /// Jalankan `f`, kembalikan cursor ke posisi awal jika gagal
    fn atomically<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let start = self.cursor;
        let result = f(self);
        if result.is_err() && self.cursor != start {
            trace!(from = self.cursor, to = start, "rolling back partial read");
            self.cursor = start;
        }
        result
    }

    /// Baca length prefix i32. Prefix negatif ditolak tanpa memajukan cursor.
    fn read_length(&mut self) -> Result<usize> {
        let offset = self.cursor;
        let length = WireOrder::read_i32(self.slice_at(offset, LENGTH_PREFIX_SIZE)?);
        if length < 0 {
            trace!(offset, length, "negative length prefix");
            return Err(CodecError::NegativeLength { offset, length });
        }
        self.cursor += LENGTH_PREFIX_SIZE;
        Ok(length as usize)
    }

    // ------------------------------------------------------------------
    // Raw bytes
    // ------------------------------------------------------------------

    /// Baca satu byte
    ///
    /// `Ok(0)` berarti byte 0 terbaca, `Err` berarti buffer habis.
    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(U8_SIZE)?[0])
    }

    /// Consume tepat `count` bytes. Tidak ada partial read.
    #[inline(always)]
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        self.take(count)
    }

    /// Random-access read dari offset absolut `start`, cursor tidak berubah
    #[inline(always)]
    pub fn read_bytes_discrete(&self, start: usize, count: usize) -> Result<&'a [u8]> {
        self.slice_at(start, count)
    }

    /// Baca `[i32 count][bytes]`
    pub fn read_byte_array(&mut self) -> Result<&'a [u8]> {
        self.atomically(|r| {
            let count = r.read_length()?;
            r.take(count)
        })
    }

    // ------------------------------------------------------------------
    // Scalars
    // ------------------------------------------------------------------

    #[inline(always)]
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(WireOrder::read_i16(self.take(I16_SIZE)?))
    }

    #[inline(always)]
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(WireOrder::read_i32(self.take(I32_SIZE)?))
    }

    #[inline(always)]
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(WireOrder::read_i64(self.take(I64_SIZE)?))
    }

    #[inline(always)]
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(WireOrder::read_f32(self.take(F32_SIZE)?))
    }

    #[inline(always)]
    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(WireOrder::read_f64(self.take(F64_SIZE)?))
    }

    /// Baca raw UTF-16 code unit
    #[inline(always)]
    pub fn read_utf16(&mut self) -> Result<u16> {
        Ok(WireOrder::read_u16(self.take(CHAR_SIZE)?))
    }

    /// Baca UTF-16 code unit sebagai `char`
    ///
    /// Lone surrogate gagal dengan `InvalidChar`, cursor tidak maju.
    pub fn read_char(&mut self) -> Result<char> {
        let offset = self.cursor;
        let unit = WireOrder::read_u16(self.slice_at(offset, CHAR_SIZE)?);
        let value = unit_to_char(unit).ok_or(CodecError::InvalidChar { offset, unit })?;
        self.cursor += CHAR_SIZE;
        Ok(value)
    }

    /// Baca string tanpa alokasi (slice ke source)
    pub fn read_str(&mut self) -> Result<&'a str> {
        self.atomically(|r| {
            let count = r.read_length()?;
            let offset = r.cursor;
            let bytes = r.take(count)?;
            std::str::from_utf8(bytes).map_err(|source| CodecError::InvalidUtf8 { offset, source })
        })
    }

    /// Baca `[i32 byte length][UTF-8 bytes]` ke owned `String`
    pub fn read_string(&mut self) -> Result<String> {
        self.read_str().map(str::to_owned)
    }

    // ------------------------------------------------------------------
    // Composite types
    //
    // Dibaca sekaligus dari satu slice, jadi field pertama tidak pernah
    // ter-consume kalau field terakhir tidak cukup bytes.
    // ------------------------------------------------------------------

    pub fn read_vector2(&mut self) -> Result<Vector2> {
        let b = self.take(VECTOR2_SIZE)?;
        Ok(Vector2::new(
            WireOrder::read_f32(&b[0..4]),
            WireOrder::read_f32(&b[4..8]),
        ))
    }

    pub fn read_vector3(&mut self) -> Result<Vector3> {
        let b = self.take(VECTOR3_SIZE)?;
        Ok(Vector3::new(
            WireOrder::read_f32(&b[0..4]),
            WireOrder::read_f32(&b[4..8]),
            WireOrder::read_f32(&b[8..12]),
        ))
    }

    pub fn read_rect(&mut self) -> Result<Rect> {
        let b = self.take(RECT_SIZE)?;
        Ok(Rect::new(
            WireOrder::read_f32(&b[0..4]),
            WireOrder::read_f32(&b[4..8]),
            WireOrder::read_f32(&b[8..12]),
            WireOrder::read_f32(&b[12..16]),
        ))
    }

    pub fn read_color32(&mut self) -> Result<Color32> {
        let b = self.take(COLOR32_SIZE)?;
        Ok(Color32::new(b[0], b[1], b[2], b[3]))
    }

    pub fn read_color(&mut self) -> Result<Color> {
        let b = self.take(COLOR_SIZE)?;
        Ok(Color::new(
            WireOrder::read_f32(&b[0..4]),
            WireOrder::read_f32(&b[4..8]),
            WireOrder::read_f32(&b[8..12]),
            WireOrder::read_f32(&b[12..16]),
        ))
    }

    // ------------------------------------------------------------------
    // Generic
    // ------------------------------------------------------------------

    /// Baca satu value lewat `WireDecode`
    #[inline(always)]
    pub fn read<T: WireDecode>(&mut self) -> Result<T> {
        T::decode(self)
    }

    /// Baca `[i32 count][count × decode(T)]` ke `Vec`, urutan sesuai wire
    ///
    /// Jika ada elemen yang gagal, seluruh array gagal dan cursor kembali
    /// ke sebelum prefix.
    pub fn read_array<T: WireDecode>(&mut self) -> Result<Vec<T>> {
        self.atomically(|r| {
            let count = r.read_length()?;
            let mut values = Vec::with_capacity(bounded_capacity(
                count,
                r.remaining(),
                T::MIN_ENCODED_SIZE,
            ));
            for _ in 0..count {
                values.push(T::decode(r)?);
            }
            Ok(values)
        })
    }

    pub fn read_i16_array(&mut self) -> Result<Vec<i16>> {
        self.read_array()
    }

    pub fn read_i32_array(&mut self) -> Result<Vec<i32>> {
        self.read_array()
    }

    pub fn read_i64_array(&mut self) -> Result<Vec<i64>> {
        self.read_array()
    }

    pub fn read_f32_array(&mut self) -> Result<Vec<f32>> {
        self.read_array()
    }

    pub fn read_f64_array(&mut self) -> Result<Vec<f64>> {
        self.read_array()
    }

    pub fn read_char_array(&mut self) -> Result<Vec<char>> {
        self.read_array()
    }

    pub fn read_string_array(&mut self) -> Result<Vec<String>> {
        self.read_array()
    }

    pub fn read_vector2_array(&mut self) -> Result<Vec<Vector2>> {
        self.read_array()
    }

    pub fn read_vector3_array(&mut self) -> Result<Vec<Vector3>> {
        self.read_array()
    }

    pub fn read_rect_array(&mut self) -> Result<Vec<Rect>> {
        self.read_array()
    }

    pub fn read_color32_array(&mut self) -> Result<Vec<Color32>> {
        self.read_array()
    }

    pub fn read_color_array(&mut self) -> Result<Vec<Color>> {
        self.read_array()
    }
}

impl<'a> From<&'a [u8]> for Reader<'a> {
    fn from(buf: &'a [u8]) -> Self {
        Self::new(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Writer;

    #[test]
    fn test_read_u8() {
        let data = [42u8];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.read_u8().unwrap(), 42);
        assert_eq!(reader.cursor(), 1);
        assert!(reader.is_exhausted());
    }

    #[test]
    fn test_read_u8_zero_vs_eof() {
        let data = [0u8];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.read_u8().unwrap(), 0);

        let err = reader.read_u8().unwrap_err();
        assert!(err.is_eof());
        assert_eq!(reader.cursor(), 1);
    }

    #[test]
    fn test_read_u8_empty_source() {
        let mut reader = Reader::new(&[]);
        assert!(reader.is_empty());
        assert!(reader.read_u8().is_err());
        assert_eq!(reader.cursor(), 0);
    }

    #[test]
    fn test_read_bytes() {
        let data = [1u8, 2, 3, 4, 5];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.read_bytes(3).unwrap(), &[1, 2, 3]);
        assert_eq!(reader.cursor(), 3);
        assert_eq!(reader.remaining(), 2);
    }

    #[test]
    fn test_read_bytes_no_partial_read() {
        let data = [1u8, 2];
        let mut reader = Reader::new(&data);
        let err = reader.read_bytes(5).unwrap_err();
        assert!(matches!(
            err,
            CodecError::UnexpectedEof {
                offset: 0,
                needed: 5,
                remaining: 2
            }
        ));
        assert_eq!(reader.cursor(), 0);
        // Data masih bisa dibaca setelah kegagalan
        assert_eq!(reader.read_bytes(2).unwrap(), &[1, 2]);
    }

    #[test]
    fn test_read_bytes_zero_count() {
        let mut reader = Reader::new(&[]);
        assert_eq!(reader.read_bytes(0).unwrap(), &[] as &[u8]);
        assert_eq!(reader.cursor(), 0);
    }

    #[test]
    fn test_read_bytes_discrete_keeps_cursor() {
        let data = [1u8, 2, 3, 4, 5];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.read_bytes_discrete(2, 2).unwrap(), &[3, 4]);
        assert_eq!(reader.cursor(), 0);

        reader.read_u8().unwrap();
        assert_eq!(reader.read_bytes_discrete(0, 5).unwrap(), &data);
        assert_eq!(reader.cursor(), 1);
        assert_eq!(reader.read_u8().unwrap(), 2);
    }

    #[test]
    fn test_read_bytes_discrete_out_of_bounds() {
        let data = [1u8, 2, 3];
        let reader = Reader::new(&data);
        assert!(reader.read_bytes_discrete(2, 2).is_err());
        assert!(reader.read_bytes_discrete(4, 0).is_err());
        assert!(reader.read_bytes_discrete(usize::MAX, 2).is_err());
        assert_eq!(reader.read_bytes_discrete(3, 0).unwrap(), &[] as &[u8]);
    }

    #[test]
    fn test_cursor_advances_by_width() {
        let data = [0u8; 32];
        let mut reader = Reader::new(&data);
        reader.read_i32().unwrap();
        assert_eq!(reader.cursor(), 4);
        reader.read_i16().unwrap();
        assert_eq!(reader.cursor(), 6);
        reader.read_i64().unwrap();
        assert_eq!(reader.cursor(), 14);
        reader.read_f32().unwrap();
        assert_eq!(reader.cursor(), 18);
        reader.read_f64().unwrap();
        assert_eq!(reader.cursor(), 26);
        reader.read_char().unwrap();
        assert_eq!(reader.cursor(), 28);
        reader.read_color32().unwrap();
        assert_eq!(reader.cursor(), 32);
    }

    #[test]
    fn test_failed_scalar_keeps_cursor() {
        let data = [1u8, 2, 3];
        let mut reader = Reader::new(&data);
        reader.read_u8().unwrap();
        assert!(reader.read_i32().is_err());
        assert!(reader.read_i64().is_err());
        assert!(reader.read_f64().is_err());
        assert!(reader.read_vector2().is_err());
        assert_eq!(reader.cursor(), 1);
        assert_eq!(reader.read_i16().unwrap(), 0x0302);
    }

    #[test]
    fn test_read_char_lone_surrogate() {
        let data = [0x00u8, 0xD8, 0x41, 0x00];
        let mut reader = Reader::new(&data);
        let err = reader.read_char().unwrap_err();
        assert!(matches!(
            err,
            CodecError::InvalidChar {
                offset: 0,
                unit: 0xD800
            }
        ));
        assert_eq!(reader.cursor(), 0);

        // Raw unit tetap bisa dibaca
        assert_eq!(reader.read_utf16().unwrap(), 0xD800);
        assert_eq!(reader.read_char().unwrap(), 'A');
    }

    #[test]
    fn test_read_byte_array() {
        let mut writer = Writer::new();
        writer.write_byte_array(&[10, 20, 30]);
        let mut reader = Reader::new(writer.bytes());
        assert_eq!(reader.read_byte_array().unwrap(), &[10, 20, 30]);
        assert!(reader.is_exhausted());
    }

    #[test]
    fn test_read_byte_array_truncated_prefix() {
        let data = [3u8, 0];
        let mut reader = Reader::new(&data);
        assert!(reader.read_byte_array().unwrap_err().is_eof());
        assert_eq!(reader.cursor(), 0);
    }

    #[test]
    fn test_read_byte_array_truncated_body_rolls_back() {
        // Prefix bilang 5, body cuma 2
        let data = [5u8, 0, 0, 0, 1, 2];
        let mut reader = Reader::new(&data);
        let err = reader.read_byte_array().unwrap_err();
        assert!(matches!(
            err,
            CodecError::UnexpectedEof {
                offset: 4,
                needed: 5,
                remaining: 2
            }
        ));
        assert_eq!(reader.cursor(), 0);
        // Prefix masih bisa dibaca ulang
        assert_eq!(reader.read_i32().unwrap(), 5);
    }

    #[test]
    fn test_negative_length_prefix() {
        let data = (-1i32).to_le_bytes();
        let mut reader = Reader::new(&data);
        assert!(matches!(
            reader.read_byte_array().unwrap_err(),
            CodecError::NegativeLength {
                offset: 0,
                length: -1
            }
        ));
        assert!(reader.read_string().is_err());
        assert!(reader.read_i32_array().is_err());
        assert_eq!(reader.cursor(), 0);
    }

    #[test]
    fn test_read_string_invalid_utf8_rolls_back() {
        let mut writer = Writer::new();
        writer.write_byte_array(&[0xFF, 0xFE]);
        let mut reader = Reader::new(writer.bytes());
        assert!(matches!(
            reader.read_string().unwrap_err(),
            CodecError::InvalidUtf8 { offset: 4, .. }
        ));
        assert_eq!(reader.cursor(), 0);
    }

    #[test]
    fn test_read_str_zero_copy() {
        let mut writer = Writer::new();
        writer.write_str("Hello, World!");
        let bytes = writer.into_bytes();
        let mut reader = Reader::new(&bytes);
        let s = reader.read_str().unwrap();
        assert_eq!(s, "Hello, World!");
        assert!(std::ptr::eq(s.as_ptr(), bytes[4..].as_ptr()));
    }

    #[test]
    fn test_array_element_failure_rolls_back() {
        // Count 3 tapi hanya ada 2 i32
        let mut writer = Writer::new();
        writer.write_i32(3).write_i32(100).write_i32(200);
        let mut reader = Reader::new(writer.bytes());
        assert!(reader.read_i32_array().unwrap_err().is_eof());
        assert_eq!(reader.cursor(), 0);
    }

    #[test]
    fn test_huge_prefix_does_not_preallocate() {
        let mut writer = Writer::new();
        writer.write_i32(i32::MAX).write_i64(1);
        let mut reader = Reader::new(writer.bytes());
        assert!(reader.read_i64_array().is_err());
        assert!(reader.read_string_array().is_err());
        assert_eq!(reader.cursor(), 0);
    }

    #[test]
    fn test_read_empty_arrays() {
        let mut writer = Writer::new();
        writer.write_i32_array(&[]).write_str("").write_str_array::<&str>(&[]);
        let mut reader = Reader::new(writer.bytes());
        assert!(reader.read_i32_array().unwrap().is_empty());
        assert_eq!(reader.read_string().unwrap(), "");
        assert!(reader.read_string_array().unwrap().is_empty());
        assert!(reader.is_exhausted());
    }

    #[test]
    fn test_independent_readers_share_source() {
        let mut writer = Writer::new();
        writer.write_i32(1).write_i32(2);
        let bytes = writer.into_bytes();

        let mut first = Reader::new(&bytes);
        let mut second = Reader::from(bytes.as_slice());
        assert_eq!(first.read_i32().unwrap(), 1);
        assert_eq!(first.read_i32().unwrap(), 2);
        assert_eq!(second.read_i32().unwrap(), 1);
        assert_eq!(second.cursor(), 4);
    }
}
