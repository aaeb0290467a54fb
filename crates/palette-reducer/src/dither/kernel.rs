//! Error diffusion kernel definitions.
//!
//! Each kernel specifies how a pixel's quantization error is split among
//! its unvisited neighbors. All kernels here reach at most one row ahead,
//! which is all [`ErrorRows`](super::ErrorRows) stores.

/// An error diffusion kernel.
///
/// Each entry specifies an offset (dx, dy) and a weight for that neighbor.
/// A neighbor receives `error * s * weight / divisor`, where `s` is the
/// user-facing dither strength; every kernel here sums to `divisor`, so a
/// strength of 1 propagates the whole error.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    ///
    /// - `dx`: horizontal offset (positive = right)
    /// - `dy`: 0 for the current row, 1 for the row below
    /// - `weight`: numerator, divisor is separate
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,
}

impl Kernel {
    /// Sum of all weights.
    pub fn total_weight(&self) -> u32 {
        self.entries.iter().map(|&(_, _, w)| w as u32).sum()
    }
}

/// Sierra Lite dithering kernel.
///
/// Distributes error to 3 neighbors with 100% propagation (4/4).
///
/// ```text
///    X   2
///    1   1
/// ```
pub const SIERRA_LITE: Kernel = Kernel {
    entries: &[
        (1, 0, 2),  // right
        (-1, 1, 1), // bottom-left
        (0, 1, 1),  // bottom
    ],
    divisor: 4,
};

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

/// Burkes dithering kernel.
///
/// Distributes error to 7 neighbors over 2 rows with 100% propagation
/// (16/16). Reaches two pixels to each side, one further than
/// Floyd-Steinberg.
///
/// ```text
///            X   4   2
///    1   2   4   2   1
/// ```
pub const BURKES: Kernel = Kernel {
    entries: &[
        (1, 0, 4),
        (2, 0, 2),
        (-2, 1, 1),
        (-1, 1, 2),
        (0, 1, 4),
        (1, 1, 2),
        (2, 1, 1),
    ],
    divisor: 16,
};
