//! Quantity aliases and temperature helpers used across Ignis.

use uom::{
    si::{
        ISQ, SI, Quantity,
        f64::{TemperatureInterval, ThermodynamicTemperature},
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin as abs_kelvin,
    },
    typenum::{N1, N2, P2, Z0},
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific enthalpy, J/kg in SI.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Heating value (chemical energy per unit mass), J/kg in SI.
pub type HeatingValue = SpecificEnthalpy;

/// Extension method for computing temperature differences.
pub trait TemperatureOps {
    /// Computes the difference `self - other` as a `TemperatureInterval`.
    ///
    /// A `TemperatureInterval` (a temperature change) is a distinct quantity
    /// from a `ThermodynamicTemperature` (an absolute temperature), and `uom`
    /// does not allow subtracting the latter directly. Values are converted
    /// to kelvin internally, so the inputs may use any temperature units.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureOps for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::{degree_celsius, kelvin},
    };

    #[test]
    fn temperature_difference_is_signed() {
        let cold = ThermodynamicTemperature::new::<kelvin>(300.0);
        let hot = ThermodynamicTemperature::new::<kelvin>(450.0);

        assert_relative_eq!(hot.minus(cold).get::<delta_kelvin>(), 150.0);
        assert_relative_eq!(cold.minus(hot).get::<delta_kelvin>(), -150.0);
    }

    #[test]
    fn temperature_difference_crosses_unit_systems() {
        let a = ThermodynamicTemperature::new::<degree_celsius>(25.0);
        let b = ThermodynamicTemperature::new::<kelvin>(298.15);

        assert_relative_eq!(a.minus(b).get::<delta_kelvin>(), 0.0, epsilon = 1e-12);
    }
}
