/// The two-tone palette of the whole display, packed as XRGB8888.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const fn packed(self) -> u32 {
        match self {
            Color::White => 0x00FF_FFFF,
            Color::Black => 0x0000_0000,
        }
    }
}

/// An 8x8 monochrome button glyph. Each row is one byte, bit 7 leftmost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Play,
    Pause,
    SpeedUp,
    SpeedDown,
    Clear,
}

impl Icon {
    pub const fn bitmap(self) -> [u8; 8] {
        match self {
            Icon::Play => [0x00, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00],
            Icon::Pause => [0x00, 0x3C, 0x7E, 0x66, 0x66, 0x7E, 0x3C, 0x00],
            Icon::SpeedUp => [0x00, 0x48, 0x6C, 0x7E, 0x7E, 0x6C, 0x48, 0x00],
            Icon::SpeedDown => [0x00, 0x12, 0x36, 0x7E, 0x7E, 0x36, 0x12, 0x00],
            Icon::Clear => [0x00, 0x60, 0x70, 0x38, 0x1C, 0x0E, 0x06, 0x00],
        }
    }
}
