//! 0-5.0V unipolar domain: unipolar supplies and sensor excitation.

use super::{Voltage, VoltageDomain};

/// 0-5.0V unipolar range. Used for unipolar DAC outputs and sensor power.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Domain5V0;

impl VoltageDomain for Domain5V0 {
    const V_MIN: f64 = 0.0;
    const V_MAX: f64 = 5.0;
    const SCALE_FACTOR: f64 = 32767.0 / 5.0; // 6553.4 digital units per volt
    const DIGITAL_MIN: i16 = 0;
    const NAME: &'static str = "Voltage5V0";
    const RANGE: &'static str = "0-5.0V";
}

/// A voltage on the 0-5.0V domain.
pub type Voltage5V0 = Voltage<Domain5V0>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supply_rail_code() {
        // trunc(3.3 * 32767/5.0 + 0.5) = trunc(21626.71...) = 21626
        let supply = Voltage5V0::new(3.3).unwrap();
        assert_eq!(supply.to_digital(), 21626);
    }

    #[test]
    fn endpoints_hit_the_code_range_exactly() {
        assert_eq!(Voltage5V0::new(0.0).unwrap().to_digital(), 0);
        assert_eq!(Voltage5V0::new(5.0).unwrap().to_digital(), 32767);
    }

    #[test]
    fn rejects_bipolar_swing() {
        // A -5V excursion belongs on the bipolar domain, not this one
        let err = Voltage5V0::new(-5.0).unwrap_err();
        assert_eq!(err.v_min, 0.0);
        assert_eq!(err.v_max, 5.0);
        assert_eq!(err.domain, "Voltage5V0");
    }

    #[test]
    fn decode_stays_within_one_code_of_encode() {
        let code = Voltage5V0::new(3.3).unwrap().to_digital();
        let back = Voltage5V0::from_digital(code).unwrap();
        assert!((back.volts() - 3.3).abs() <= 1.0 / Domain5V0::SCALE_FACTOR);
    }

    #[test]
    fn renders_volts_and_domain_range() {
        let supply = Voltage5V0::new(3.3).unwrap();
        assert_eq!(supply.to_string(), "3.3V (0-5.0V domain)");
        assert_eq!(format!("{supply:?}"), "Voltage5V0(3.3V)");
    }
}
