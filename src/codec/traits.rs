//! Encoding dan decoding traits
//!
//! Menghubungkan setiap tipe yang didukung ke operasi scalar/composite
//! di `Writer`/`Reader`, supaya array bisa ditangani secara generic.

use super::reader::Reader;
use super::wire::{
    CHAR_SIZE, COLOR32_SIZE, COLOR_SIZE, F32_SIZE, F64_SIZE, I16_SIZE, I32_SIZE, I64_SIZE,
    LENGTH_PREFIX_SIZE, RECT_SIZE, U8_SIZE, VECTOR2_SIZE, VECTOR3_SIZE,
};
use super::writer::Writer;
use crate::error::Result;
use crate::types::{Color, Color32, Rect, Vector2, Vector3};

/// Tipe yang bisa di-append ke `Writer`
pub trait WireEncode {
    /// Append encoding value ini ke writer
    fn encode(&self, writer: &mut Writer);
}

/// Tipe yang bisa di-consume dari `Reader`
pub trait WireDecode: Sized {
    /// Ukuran encoding terkecil yang mungkin (untuk membatasi alokasi)
    const MIN_ENCODED_SIZE: usize;

    /// Consume satu value. Gagal tanpa memajukan cursor.
    ///
    /// # Errors
    ///
    /// Returns error jika bytes tidak cukup atau isi tidak valid.
    fn decode(reader: &mut Reader<'_>) -> Result<Self>;
}

impl<T: WireEncode + ?Sized> WireEncode for &T {
    #[inline(always)]
    fn encode(&self, writer: &mut Writer) {
        (**self).encode(writer);
    }
}

/// Implementasi untuk tipe dengan pasangan write_x/read_x
macro_rules! impl_wire {
    ($ty:ty, $size:expr, $write:ident, $read:ident) => {
        impl WireEncode for $ty {
            #[inline(always)]
            fn encode(&self, writer: &mut Writer) {
                writer.$write(*self);
            }
        }

        impl WireDecode for $ty {
            const MIN_ENCODED_SIZE: usize = $size;

            #[inline(always)]
            fn decode(reader: &mut Reader<'_>) -> Result<Self> {
                reader.$read()
            }
        }
    };
}

impl_wire!(u8, U8_SIZE, write_u8, read_u8);
impl_wire!(i16, I16_SIZE, write_i16, read_i16);
impl_wire!(i32, I32_SIZE, write_i32, read_i32);
impl_wire!(i64, I64_SIZE, write_i64, read_i64);
impl_wire!(f32, F32_SIZE, write_f32, read_f32);
impl_wire!(f64, F64_SIZE, write_f64, read_f64);
impl_wire!(char, CHAR_SIZE, write_char, read_char);
impl_wire!(Vector2, VECTOR2_SIZE, write_vector2, read_vector2);
impl_wire!(Vector3, VECTOR3_SIZE, write_vector3, read_vector3);
impl_wire!(Rect, RECT_SIZE, write_rect, read_rect);
impl_wire!(Color32, COLOR32_SIZE, write_color32, read_color32);
impl_wire!(Color, COLOR_SIZE, write_color, read_color);

impl WireEncode for str {
    #[inline(always)]
    fn encode(&self, writer: &mut Writer) {
        writer.write_str(self);
    }
}

impl WireEncode for String {
    #[inline(always)]
    fn encode(&self, writer: &mut Writer) {
        writer.write_str(self);
    }
}

impl WireDecode for String {
    // String kosong = prefix saja
    const MIN_ENCODED_SIZE: usize = LENGTH_PREFIX_SIZE;

    #[inline(always)]
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        reader.read_string()
    }
}
