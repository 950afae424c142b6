//! Formatting helpers for quadrature tables
//!
//! Direction cosines and weights are printed in fixed-width columns, which
//! needs a scientific notation with a signed, zero-padded exponent that the
//! standard `{:e}` formatting does not give.

use std::fmt::LowerExp;

// Alias for the format! macro out of laziness
pub use std::format as f;

/// Scientific notation with a fixed exponent layout
pub trait NumberFmt {
    /// Mantissa to `precision` decimal places, exponent signed and padded to
    /// at least `exp_pad` digits
    ///
    /// ```rust
    /// # use snquad::utils::NumberFmt;
    /// assert_eq!((-1.0).sci(5, 2), "-1.00000e+00");
    /// assert_eq!((0.5773502691896257).sci(3, 2), "5.774e-01");
    /// ```
    ///
    /// Values with no exponent to speak of (NaN, infinities) are left as the
    /// standard library writes them.
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: LowerExp> NumberFmt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let raw = f!("{:.precision$e}", self);
        let Some((mantissa, exponent)) = raw.split_once('e') else {
            return raw;
        };
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        f!("{mantissa}e{sign}{digits:0>exp_pad$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sci_pads_exponent() {
        assert_eq!((1.0e-5).sci(2, 3), "1.00e-005");
        assert_eq!((12.566370614359172).sci(4, 2), "1.2566e+01");
        assert_eq!((0.0).sci(1, 2), "0.0e+00");
    }

    #[test]
    fn sci_keeps_wide_exponents() {
        assert_eq!((1.0e123).sci(1, 2), "1.0e+123");
        assert_eq!((-2.5e-300).sci(2, 2), "-2.50e-300");
    }

    #[test]
    fn sci_passes_through_non_finite() {
        assert_eq!(f64::NAN.sci(3, 2), "NaN");
        assert_eq!(f64::INFINITY.sci(3, 2), "inf");
    }
}
