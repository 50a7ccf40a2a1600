//! Wire format constants dan helper bersama
//!
//! Satu byte order untuk semua: little-endian. Tidak bisa dikonfigurasi.
//!
//! Layout:
//! ┌─────────────────────────────────────────────────────┐
//! │ Scalar: fixed-width, little-endian                  │
//! ├─────────────────────────────────────────────────────┤
//! │ Variable: [i32 length prefix][length × element]     │
//! └─────────────────────────────────────────────────────┘

use byteorder::LittleEndian;

/// Byte order yang dipakai writer dan reader
pub type WireOrder = LittleEndian;

pub const U8_SIZE: usize = 1;
pub const I16_SIZE: usize = 2;
pub const I32_SIZE: usize = 4;
pub const I64_SIZE: usize = 8;
pub const F32_SIZE: usize = 4;
pub const F64_SIZE: usize = 8;
/// Satu UTF-16 code unit
pub const CHAR_SIZE: usize = 2;
/// Length prefix adalah i32
pub const LENGTH_PREFIX_SIZE: usize = I32_SIZE;

pub const VECTOR2_SIZE: usize = 2 * F32_SIZE;
pub const VECTOR3_SIZE: usize = 3 * F32_SIZE;
pub const RECT_SIZE: usize = 4 * F32_SIZE;
pub const COLOR32_SIZE: usize = 4 * U8_SIZE;
pub const COLOR_SIZE: usize = 4 * F32_SIZE;

/// Pengganti untuk char yang tidak muat di satu UTF-16 code unit
pub const REPLACEMENT_UNIT: u16 = 0xFFFD;

/// Konversi panjang Rust ke length prefix wire
///
/// # Panics
/// Panic jika `len > i32::MAX` - format tidak bisa merepresentasikannya
#[inline(always)]
pub fn length_prefix(len: usize) -> i32 {
    assert!(
        len <= i32::MAX as usize,
        "length {} exceeds i32 length prefix",
        len
    );
    len as i32
}

/// Encode `char` ke satu UTF-16 code unit
///
/// Char di luar BMP (butuh surrogate pair) diganti U+FFFD.
#[inline(always)]
pub fn char_to_unit(c: char) -> u16 {
    let mut units = [0u16; 2];
    match c.encode_utf16(&mut units) {
        [unit] => *unit,
        _ => REPLACEMENT_UNIT,
    }
}

/// Decode satu UTF-16 code unit ke `char`, `None` untuk lone surrogate
#[inline(always)]
pub fn unit_to_char(unit: u16) -> Option<char> {
    char::from_u32(u32::from(unit))
}

/// Kapasitas awal yang aman untuk array hasil decode
///
/// Prefix datang dari wire, jadi alokasi dibatasi oleh bytes yang benar-benar tersisa.
#[inline(always)]
pub fn bounded_capacity(count: usize, remaining: usize, min_element_size: usize) -> usize {
    count.min(remaining / min_element_size.max(1))
}
