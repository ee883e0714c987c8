use uom::si::{
    f64::SpecificHeatCapacity, specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::{model::IdealGasFluid, units::SpecificGasConstant};

/// Marker type for dry air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Air;

impl IdealGasFluid for Air {
    fn gas_constant(&self) -> SpecificGasConstant {
        SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.053)
    }

    fn cp(&self) -> SpecificHeatCapacity {
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1005.0)
    }
}
