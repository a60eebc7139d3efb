// Raw ADC code to physical unit conversions

/// Full-scale value of the rig's 10-bit ADC.
pub const ADC_FULL_SCALE: f64 = 1023.0;

/// Converts raw sensor codes into physical units.
///
/// Pure and total: out-of-range codes pass through the arithmetic unclamped,
/// so callers wanting strict range enforcement must validate upstream.
#[derive(Debug, Clone, Copy)]
pub struct UnitConverter {
    voltage_reference: f64,
    divider_ratio: f64,
    power_scale: f64,
}

impl UnitConverter {
    /// `divider_r1`/`divider_r2` describe the resistive divider between the
    /// panel and the ADC pin; `power_scale` is an empirical calibration
    /// factor from the rig's calibration run, not a physical constant.
    pub fn new(voltage_reference: f64, divider_r1: f64, divider_r2: f64, power_scale: f64) -> Self {
        Self {
            voltage_reference,
            divider_ratio: (divider_r1 + divider_r2) / divider_r2,
            power_scale,
        }
    }

    /// True panel voltage in volts from a raw divider-node reading.
    pub fn voltage(&self, raw: u16) -> f64 {
        (f64::from(raw) / ADC_FULL_SCALE) * self.voltage_reference * self.divider_ratio
    }

    /// Output power in watts from panel voltage and a raw illuminance
    /// reading, with illuminance normalized to [0, 1].
    pub fn power(&self, voltage: f64, illuminance_raw: u16) -> f64 {
        voltage * (f64::from(illuminance_raw) / ADC_FULL_SCALE) * self.power_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_converter() -> UnitConverter {
        UnitConverter::new(5.0, 120.0, 220.0, 10.0)
    }

    #[test]
    fn test_voltage_at_half_scale() {
        // (512/1023) * 5.0 * (340/220)
        let voltage = reference_converter().voltage(512);
        assert!((voltage - 3.8674).abs() < 1e-3, "got {voltage}");
    }

    #[test]
    fn test_power_at_full_illuminance() {
        let converter = reference_converter();
        let voltage = converter.voltage(512);
        let power = converter.power(voltage, 1023);
        assert!((power - voltage * 10.0).abs() < 1e-9);
        assert!((power - 38.674).abs() < 1e-2, "got {power}");
    }

    #[test]
    fn test_power_scales_linearly_with_illuminance() {
        let converter = reference_converter();
        let full = converter.power(4.0, 1023);
        let none = converter.power(4.0, 0);
        assert!((full - 40.0).abs() < 1e-9);
        assert_eq!(none, 0.0);
    }

    #[test]
    fn test_voltage_non_negative_and_monotonic_over_adc_range() {
        let converter = reference_converter();
        let mut previous = -1.0;
        for raw in 0..=1023u16 {
            let voltage = converter.voltage(raw);
            assert!(voltage >= 0.0);
            assert!(voltage >= previous);
            previous = voltage;
        }
    }

    #[test]
    fn test_out_of_range_code_passes_through() {
        let converter = reference_converter();
        // 2046 is exactly twice full scale; no clamping applies.
        assert!((converter.voltage(2046) - 2.0 * converter.voltage(1023)).abs() < 1e-9);
    }
}
