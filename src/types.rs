//! Composite value types (geometri & warna)
//!
//! Plain records dengan field bernama. Codec hanya peduli urutan field
//! dan lebar primitifnya, tidak ada behavior lain.
//!
//! Layout wire (tanpa padding):
//! ┌───────────┬──────────────────────────────┬──────────┐
//! │ Type      │ Fields                       │ Size     │
//! ├───────────┼──────────────────────────────┼──────────┤
//! │ Vector2   │ x, y            (f32)        │ 8 bytes  │
//! │ Vector3   │ x, y, z         (f32)        │ 12 bytes │
//! │ Rect      │ x, y, w, h      (f32)        │ 16 bytes │
//! │ Color32   │ r, g, b, a      (u8)         │ 4 bytes  │
//! │ Color     │ r, g, b, a      (f32)        │ 16 bytes │
//! └───────────┴──────────────────────────────┴──────────┘

/// Titik / vektor 2D
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    #[inline(always)]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Titik / vektor 3D
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    #[inline(always)]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Rectangle: posisi (x, y) plus ukuran (width, height)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline(always)]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Warna dengan channel integer 8-bit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color32 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color32 {
    #[inline(always)]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Warna dengan channel floating point (biasanya 0.0..=1.0)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline(always)]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}
