use serde::{Deserialize, Serialize};

use crate::{DayStyle, Rgb};

/// Colors of the day cells in the calendar popup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayPalette {
    pub background:          Rgb,
    pub hover:               Rgb,
    pub foreground:          Rgb,
    pub endpoint:            Rgb,
    pub endpoint_foreground: Rgb,
    pub in_range:            Rgb,
}

impl Default for DayPalette {
    fn default() -> Self {
        Self {
            background:          Rgb::new(0xfd, 0xf5, 0xe6),
            hover:               Rgb::new(0xf0, 0xe6, 0xd2),
            foreground:          Rgb::new(0x6b, 0x37, 0x10),
            endpoint:            Rgb::new(0x4a, 0x93, 0x4a),
            endpoint_foreground: Rgb::new(0xfd, 0xf5, 0xe6),
            in_range:            Rgb::new(0xa9, 0xe3, 0xb3),
        }
    }
}

impl DayPalette {
    /// Resting background of a day with the given style; also the target of
    /// the hover-leave transition
    pub const fn background(&self, style: DayStyle) -> Rgb {
        match style {
            DayStyle::Default => self.background,
            DayStyle::InRange => self.in_range,
            DayStyle::RangeEndpoint => self.endpoint,
        }
    }

    /// Text color of a day with the given style
    pub const fn foreground(&self, style: DayStyle) -> Rgb {
        match style {
            DayStyle::Default | DayStyle::InRange => self.foreground,
            DayStyle::RangeEndpoint => self.endpoint_foreground,
        }
    }
}
