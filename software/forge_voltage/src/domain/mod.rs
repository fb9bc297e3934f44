//! Voltage domains and the generic volts <-> digital-code codec.
//!
//! Each hardware voltage range gets its own marker type implementing
//! [`VoltageDomain`], and values are carried as [`Voltage<D>`] so that a
//! trigger level on a 3.3V input can never end up in a ±5V DAC register.

use core::fmt;
use core::marker::PhantomData;

#[cfg(feature = "ser")]
use serde::{Deserialize, Serialize};

use crate::RangeError;

// Specific domain parameter tables

mod v3v3;
mod v5v0;
mod v5v_bipolar;

pub use v3v3::{Domain3V3, Voltage3V3};
pub use v5v0::{Domain5V0, Voltage5V0};
pub use v5v_bipolar::{Domain5VBipolar, Voltage5VBipolar};

/// Constant table defining one physical voltage range and its register encoding.
///
/// Implementors carry no data; every constant resolves at compile time, so a
/// `Voltage<D>` is exactly one `f64` wide. Adding a domain is mechanical:
/// a new marker type with another table.
pub trait VoltageDomain: Copy + fmt::Debug {
    /// Lower inclusive bound, volts
    const V_MIN: f64;

    /// Upper inclusive bound, volts
    const V_MAX: f64;

    /// Digital units per volt.
    ///
    /// Always derived from `32767.0`, including on the bipolar domain whose
    /// code range extends one unit further negative. The lost negative
    /// resolution step is part of the register contract; do not rescale.
    const SCALE_FACTOR: f64;

    /// Smallest valid digital code: `0` for unipolar domains, `-32768` bipolar
    const DIGITAL_MIN: i16;

    /// Largest valid digital code
    const DIGITAL_MAX: i16 = i16::MAX;

    /// Name used in diagnostics, e.g. `Voltage3V3`
    const NAME: &'static str;

    /// Range label used for display, e.g. `0-3.3V`
    const RANGE: &'static str;
}

/// A single voltage in domain `D`, validated at construction.
///
/// Immutable `Copy` value: once built it can only be read back
/// ([`volts`](Self::volts)) or encoded for a register write
/// ([`to_digital`](Self::to_digital)).
///
/// Arithmetic is deliberately not implemented, for any domain, because the
/// unit and range information would detach from the result:
///
/// ```compile_fail
/// use forge_voltage::Voltage3V3;
///
/// let a = Voltage3V3::new(1.0).unwrap();
/// let b = Voltage3V3::new(2.0).unwrap();
/// let _ = a + b; // no `Add` impl; does not compile
/// ```
///
/// Domains never substitute for one another:
///
/// ```compile_fail
/// use forge_voltage::{Voltage3V3, Voltage5VBipolar};
///
/// fn write_dac(setpoint: Voltage5VBipolar) -> i16 {
///     setpoint.to_digital()
/// }
///
/// let trigger = Voltage3V3::new(2.5).unwrap();
/// write_dac(trigger); // mismatched domains; does not compile
/// ```
#[derive(Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "ser",
    derive(Serialize, Deserialize),
    serde(try_from = "f64", into = "f64", bound = "")
)]
pub struct Voltage<D: VoltageDomain> {
    volts: f64,
    domain: PhantomData<D>,
}

impl<D: VoltageDomain> Voltage<D> {
    /// Validated construction from a volt value.
    ///
    /// The value is stored unchanged on success; no rounding or snapping
    /// happens here. Out-of-range inputs (NaN and infinities included) are
    /// rejected with [`RangeError`] rather than clamped. Clamping is reserved
    /// for the register direction in [`to_digital`](Self::to_digital).
    pub fn new(volts: f64) -> Result<Self, RangeError> {
        if D::V_MIN <= volts && volts <= D::V_MAX {
            Ok(Self {
                volts,
                domain: PhantomData,
            })
        } else {
            Err(RangeError {
                volts,
                v_min: D::V_MIN,
                v_max: D::V_MAX,
                domain: D::NAME,
            })
        }
    }

    /// The stored volt value, exactly as constructed.
    pub fn volts(&self) -> f64 {
        self.volts
    }

    /// Signed 16-bit register code for this voltage.
    ///
    /// Scales by [`SCALE_FACTOR`](VoltageDomain::SCALE_FACTOR), rounds to the
    /// nearest code with ties away from zero (add `+0.5` for nonnegative
    /// values, `-0.5` for negative, then truncate), and clamps into
    /// `[DIGITAL_MIN, DIGITAL_MAX]`. The clamp catches floating-point
    /// rounding error at the range ends and is always applied, so this never
    /// fails for a live value.
    pub fn to_digital(&self) -> i16 {
        let half = if self.volts >= 0.0 { 0.5 } else { -0.5 };
        let raw = (self.volts * D::SCALE_FACTOR + half).trunc();
        raw.clamp(f64::from(D::DIGITAL_MIN), f64::from(D::DIGITAL_MAX)) as i16
    }

    /// Decode a register code back into a validated voltage.
    ///
    /// Exact inverse of the scale step; no half-unit offset is re-added.
    /// Codes whose inverse-scaled volts land outside the domain fail with
    /// [`RangeError`]. Only codes at the extremes can plausibly do so, via
    /// floating-point edge effects: on the bipolar domain `-32768` decodes
    /// just below -5.0V and is rejected.
    pub fn from_digital(digital: i16) -> Result<Self, RangeError> {
        Self::new(f64::from(digital) / D::SCALE_FACTOR)
    }
}

impl<D: VoltageDomain> TryFrom<f64> for Voltage<D> {
    type Error = RangeError;

    fn try_from(volts: f64) -> Result<Self, Self::Error> {
        Self::new(volts)
    }
}

impl<D: VoltageDomain> From<Voltage<D>> for f64 {
    fn from(v: Voltage<D>) -> Self {
        v.volts
    }
}

/// Renders like `2.5V (0-3.3V domain)`. Diagnostic display only; not a parser.
impl<D: VoltageDomain> fmt::Display for Voltage<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}V ({} domain)", self.volts, D::RANGE)
    }
}

/// Renders constructor-style, like `Voltage3V3(2.5V)`.
impl<D: VoltageDomain> fmt::Debug for Voltage<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}V)", D::NAME, self.volts)
    }
}
