//! ±5.0V bipolar domain: AC signals and general analog work.

use super::{Voltage, VoltageDomain};

/// ±5.0V bipolar range. Used for DAC/ADC front ends and AC signals.
///
/// The code range runs to `-32768`, but the scale factor is still derived
/// from `32767.0 / 5.0`: the extra negative code is unreachable from an
/// in-range voltage and exists only on the decode side, where it is rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Domain5VBipolar;

impl VoltageDomain for Domain5VBipolar {
    const V_MIN: f64 = -5.0;
    const V_MAX: f64 = 5.0;
    const SCALE_FACTOR: f64 = 32767.0 / 5.0; // 6553.4 digital units per volt
    const DIGITAL_MIN: i16 = i16::MIN;
    const NAME: &'static str = "Voltage5VBipolar";
    const RANGE: &'static str = "±5.0V";
}

/// A voltage on the ±5.0V domain.
pub type Voltage5VBipolar = Voltage<Domain5VBipolar>;
