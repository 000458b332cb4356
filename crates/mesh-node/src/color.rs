use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb { r: 0xFF, g: 0xFF, b: 0xFF };

    /// Low 24 bits of `value` as 0xRRGGBB.
    pub fn from_u24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Opaque packed 0xAARRGGBB.
    pub fn to_argb(self) -> u32 {
        0xFF00_0000 | (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Perceived brightness in 0.0..=1.0 (ITU-R BT.601 luma weights).
    pub fn brightness(self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)) / 255.0
    }
}

/// `#rrggbb`
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Text and fill colors for drawing a node badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeColors {
    pub foreground: Rgb,
    pub background: Rgb,
}

impl NodeColors {
    /// The node number itself is the background; text is black or white for contrast.
    pub fn for_node(num: u32) -> Self {
        let background = Rgb::from_u24(num);
        let foreground = if background.brightness() > 0.5 { Rgb::BLACK } else { Rgb::WHITE };
        Self { foreground, background }
    }
}
