//! Fire palette: intensity 0 (cold) to 36 (hottest)

/// An (r, g, b) triple
pub type Rgb = (u8, u8, u8);

/// Highest intensity a cell can hold
pub const MAX_INTENSITY: u8 = 36;

/// Classic doom fire colors, black through red and orange to white
pub const PALETTE: [Rgb; MAX_INTENSITY as usize + 1] = [
    (7, 7, 7),
    (31, 7, 7),
    (47, 15, 7),
    (71, 15, 7),
    (87, 23, 7),
    (103, 31, 7),
    (119, 31, 7),
    (143, 39, 7),
    (159, 47, 7),
    (175, 63, 7),
    (191, 71, 7),
    (199, 71, 7),
    (223, 79, 7),
    (223, 87, 7),
    (223, 87, 7),
    (215, 95, 7),
    (215, 95, 7),
    (215, 103, 15),
    (207, 111, 15),
    (207, 119, 15),
    (207, 127, 15),
    (207, 135, 23),
    (199, 135, 23),
    (199, 143, 23),
    (199, 151, 31),
    (191, 159, 31),
    (191, 159, 31),
    (191, 167, 39),
    (191, 167, 39),
    (191, 175, 47),
    (183, 175, 47),
    (183, 183, 47),
    (183, 183, 55),
    (207, 207, 111),
    (223, 223, 159),
    (239, 239, 199),
    (255, 255, 255),
];

/// Look up the palette entry for an intensity, saturating at the hottest entry
#[inline]
pub fn palette_color(intensity: u8) -> Rgb {
    PALETTE[intensity.min(MAX_INTENSITY) as usize]
}
