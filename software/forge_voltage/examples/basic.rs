//! Register codes for a mixed set of analog channels.
//!
//! Demonstrated here:
//!   * Constructing voltages on each domain
//!   * Producing register-facing digital codes
//!   * Reconstructing a value from a register readback
//!   * Rejecting an out-of-range setpoint

use forge_voltage::{RangeError, Voltage3V3, Voltage5V0, Voltage5VBipolar};

/// The trigger threshold register only accepts 3.3V-domain levels.
fn write_trigger_register(level: Voltage3V3) {
    println!("trigger  <- {level} (code {})", level.to_digital());
}

/// The DAC register only accepts bipolar setpoints.
fn write_dac_register(setpoint: Voltage5VBipolar) {
    println!("dac      <- {setpoint} (code {})", setpoint.to_digital());
}

fn main() -> Result<(), RangeError> {
    // Values on three different domains; mixing them up is a compile error
    let trigger = Voltage3V3::new(2.5)?;
    let supply = Voltage5V0::new(3.3)?;
    let dac = Voltage5VBipolar::new(-3.0)?;

    write_trigger_register(trigger);
    println!("supply   <- {supply} (code {})", supply.to_digital());
    write_dac_register(dac);

    // Reconstruct from a register readback; lands within one code of the setpoint
    let readback = Voltage5VBipolar::from_digital(dac.to_digital())?;
    println!("readback  = {readback}");

    // Out-of-range setpoints are rejected, not clamped
    let err = Voltage3V3::new(5.0).unwrap_err();
    println!("rejected: {err}");

    Ok(())
}
