//! Unit conversion utilities.
//!
//! DrawingML positions and sizes are expressed in English Metric Units (EMU).
//! Font sizes stay in points and are scaled to hundredths of a point only when
//! serialized.

/// A length in English Metric Units.
pub type Emu = i64;

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_PT: i64 = 12_700;

/// Convert inches to EMU, rounding to the nearest unit.
///
/// # Examples
///
/// ```
/// use pptx_fixtures::common::unit::inches;
/// assert_eq!(inches(1.0), 914_400);
/// assert_eq!(inches(7.5), 6_858_000);
/// ```
#[inline]
pub fn inches(value: f64) -> Emu {
    (value * EMUS_PER_INCH as f64).round() as Emu
}

#[inline]
pub fn cm(value: f64) -> Emu {
    (value * EMUS_PER_CM as f64).round() as Emu
}

#[inline]
pub fn pt_to_emu(pt: f64) -> Emu {
    (pt * EMUS_PER_PT as f64).round() as Emu
}

#[inline]
pub fn emu_to_inches(emu: Emu) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

#[inline]
pub fn emu_to_pt(emu: Emu) -> f64 {
    emu as f64 / EMUS_PER_PT as f64
}

/// Font size in points to the `sz` attribute value (hundredths of a point).
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}

/// `sz` attribute value back to points.
#[inline]
pub fn centipoints_to_pt(sz: u32) -> f64 {
    sz as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_inches() {
        assert_eq!(inches(10.0), 9_144_000);
        assert_eq!(inches(0.5), 457_200);
        assert_eq!(inches(0.3), 274_320);
        assert_eq!(inches(2.5), 2_286_000);
    }

    #[test]
    fn test_points() {
        assert_eq!(pt_to_emu(1.0), 12_700);
        assert_eq!(pt_to_centipoints(18.0), 1800);
        assert_eq!(pt_to_centipoints(10.5), 1050);
        assert_eq!(centipoints_to_pt(3600), 36.0);
    }

    #[test]
    fn test_cm() {
        assert_eq!(cm(2.54), inches(1.0));
    }

    proptest! {
        #[test]
        fn prop_inches_round_trip(hundredths in 0i64..10_000) {
            let value = hundredths as f64 / 100.0;
            let emu = inches(value);
            prop_assert!(emu >= 0);
            prop_assert!((emu_to_inches(emu) - value).abs() < 1e-6);
        }
    }
}
