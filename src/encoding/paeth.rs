//! PNG filter type 4.

/// Filter type byte that precedes every Paeth-filtered scanline.
pub const FILTER_TYPE: u8 = 4;

/// Pick whichever of left `a`, above `b` or upper-left `c` is closest to
/// `a + b - c`. Ties go to `a`, then `b`.
#[inline]
pub fn predictor(a: u8, b: u8, c: u8) -> u8 {
    let (ia, ib, ic) = (a as i16, b as i16, c as i16);
    let p = ia + ib - ic;
    let pa = (p - ia).abs();
    let pb = (p - ib).abs();
    let pc = (p - ic).abs();
    if pa <= pb && pa <= pc {
        a
    } else if pb <= pc {
        b
    } else {
        c
    }
}

/// Filter one scanline.
///
/// `prev` is the unfiltered row above (all zeros for the first row) and
/// `bpp` the bytes per pixel. `cur`, `prev` and `out` must have the same
/// length.
pub fn filter_row(cur: &[u8], prev: &[u8], bpp: usize, out: &mut [u8]) {
    debug_assert_eq!(cur.len(), prev.len());
    debug_assert_eq!(cur.len(), out.len());

    let lead = bpp.min(cur.len());
    for i in 0..lead {
        out[i] = cur[i].wrapping_sub(prev[i]);
    }
    for i in lead..cur.len() {
        let pred = predictor(cur[i - bpp], prev[i], prev[i - bpp]);
        out[i] = cur[i].wrapping_sub(pred);
    }
}
