// Color unpacking - Normalized RGBA and the packed-sample unpack rules
//
// Packed formats slice color channels out of a single fixed-width integer
// sample. Unpacking divides each N-bit field by 2^N - 1 so every channel
// lands in [0, 1]; alpha is always fully opaque since the source formats
// carry no alpha.

/// A color with channels normalized to [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Opaque black
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Create an opaque color from normalized channels
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Unpack a 15-bit 0RGB1555 sample
    ///
    /// Red is bits [14:10], green bits [9:5], blue bits [4:0]; each 5-bit
    /// field is normalized by dividing by 31. The top bit is ignored.
    #[inline]
    pub fn from_xrgb1555(sample: u16) -> Self {
        Self {
            r: ((sample >> 10) & 0x1F) as f32 / 31.0,
            g: ((sample >> 5) & 0x1F) as f32 / 31.0,
            b: (sample & 0x1F) as f32 / 31.0,
            a: 1.0,
        }
    }

    /// Unpack a 32-bit XRGB8888 sample
    ///
    /// Red is bits [23:16], green bits [15:8], blue bits [7:0]; each 8-bit
    /// field is normalized by dividing by 255. Byte 3 is ignored.
    #[inline]
    pub fn from_xrgb8888(sample: u32) -> Self {
        Self {
            r: ((sample >> 16) & 0xFF) as f32 / 255.0,
            g: ((sample >> 8) & 0xFF) as f32 / 255.0,
            b: (sample & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Quantize to the RGBA8 byte layout expected by the surface
    #[inline]
    pub fn to_rgba_bytes(self) -> [u8; 4] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }
}
