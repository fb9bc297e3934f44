#![doc = include_str!("../README.md")]

pub mod domain;
mod error;

pub use domain::{
    Domain3V3, Domain5V0, Domain5VBipolar, Voltage, Voltage3V3, Voltage5V0, Voltage5VBipolar,
    VoltageDomain,
};
pub use error::RangeError;
