//! Perceptual (gamma) correction for intensity percentages.
//!
//! Human brightness perception is non-linear, so a linear 0-100% intensity
//! ramp driven straight into a PWM output looks wrong at the low end. This
//! module maps an intensity percentage onto a 10-bit drive value through a
//! precomputed lookup table. For background see
//! <https://learn.adafruit.com/led-tricks-gamma-correction/>.

/// Highest accepted intensity level, in percent.
pub const LEVEL_MAX: u8 = 100;

/// Highest drive value produced by [`correct`] (10-bit PWM range).
pub const DRIVE_MAX: u16 = 1024;

/// Gamma lookup table, one entry per percent from 0 to 100 inclusive.
///
/// Strictly non-decreasing, `TABLE[0] == 0`, `TABLE[100] == DRIVE_MAX`.
const TABLE: [u16; LEVEL_MAX as usize + 1] = [
    0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 2, 2, 3, 3, 4, 5, //
    6, 7, 8, 10, 11, 13, 15, 17, 19, 21, 24, 26, 29, 32, 35, 39, //
    42, 46, 50, 54, 59, 63, 68, 73, 79, 84, 90, 96, 103, 109, 116, 124, //
    131, 139, 147, 155, 164, 173, 182, 192, 202, 212, 223, 234, 245, 257, 269, 281, //
    293, 307, 320, 334, 348, 362, 377, 392, 408, 424, 441, 458, 475, 493, 511, 529, //
    548, 568, 587, 608, 628, 650, 671, 693, 716, 739, 762, 786, 811, 836, 861, 887, //
    913, 940, 968, 996, 1024,
];

/// Map an intensity percentage to a gamma-corrected drive value.
///
/// Callers are expected to pass a level in `0..=LEVEL_MAX`; anything above
/// is clamped to full intensity.
pub const fn correct(level: u8) -> u16 {
    let level = if level > LEVEL_MAX { LEVEL_MAX } else { level };
    TABLE[level as usize]
}
