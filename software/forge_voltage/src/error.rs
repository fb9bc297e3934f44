//! Range violations reported by voltage construction and register decoding.

use thiserror::Error;

/// A volt value fell outside its domain's allowed range.
///
/// Returned by [`Voltage::new`](crate::Voltage::new) when a caller supplies an
/// out-of-range value, and by [`Voltage::from_digital`](crate::Voltage::from_digital)
/// when a register code decodes to a voltage past the domain bounds. Always
/// recoverable; the caller decides whether to retry with a corrected value,
/// clamp on their side, or propagate.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
#[error("voltage {volts:?}V out of range for {domain} [{v_min:?}, {v_max:?}]V")]
pub struct RangeError {
    /// The rejected volt value
    pub volts: f64,

    /// Lower inclusive bound of the domain, volts
    pub v_min: f64,

    /// Upper inclusive bound of the domain, volts
    pub v_max: f64,

    /// Display name of the offending domain, e.g. `Voltage3V3`
    pub domain: &'static str,
}
