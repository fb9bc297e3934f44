//! 0-3.3V unipolar domain: TTL and digital logic levels.

use super::{Voltage, VoltageDomain};

/// 0-3.3V unipolar range. Used for GPIO, TTL probe interfaces, and 3.3V I/O.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Domain3V3;

impl VoltageDomain for Domain3V3 {
    const V_MIN: f64 = 0.0;
    const V_MAX: f64 = 3.3;
    const SCALE_FACTOR: f64 = 32767.0 / 3.3; // ~9929.4 digital units per volt
    const DIGITAL_MIN: i16 = 0;
    const NAME: &'static str = "Voltage3V3";
    const RANGE: &'static str = "0-3.3V";
}

/// A voltage on the 0-3.3V domain.
pub type Voltage3V3 = Voltage<Domain3V3>;
