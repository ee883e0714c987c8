use uom::si::f64::{MassDensity, SpecificHeatCapacity, Velocity};

use crate::{PropertyError, State, units::SpecificEnthalpy};

/// Trait for computing thermodynamic properties from a fluid's state.
///
/// A model can be general-purpose, working with any fluid that implements a
/// capability trait (as [`IdealGas`] does with [`IdealGasFluid`]), or it can
/// be implemented for one specific fluid type with tighter domain control.
///
/// [`IdealGas`]: crate::model::IdealGas
/// [`IdealGasFluid`]: crate::model::IdealGasFluid
pub trait ThermodynamicProperties<Fluid> {
    /// Returns the mass density at the given state.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the density cannot be calculated.
    fn density(&self, state: &State<Fluid>) -> Result<MassDensity, PropertyError>;

    /// Returns the specific enthalpy at the given state.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the enthalpy cannot be calculated.
    fn enthalpy(&self, state: &State<Fluid>) -> Result<SpecificEnthalpy, PropertyError>;

    /// Returns the specific heat capacity at constant pressure.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if `cp` cannot be calculated.
    fn cp(&self, state: &State<Fluid>) -> Result<SpecificHeatCapacity, PropertyError>;

    /// Returns the specific heat capacity at constant volume.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if `cv` cannot be calculated.
    fn cv(&self, state: &State<Fluid>) -> Result<SpecificHeatCapacity, PropertyError>;

    /// Returns the ratio of specific heats `γ = cp / cv`.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the ratio cannot be calculated.
    fn gamma(&self, state: &State<Fluid>) -> Result<f64, PropertyError>;

    /// Returns the speed of sound at the given state.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the sound speed cannot be calculated.
    fn sound_speed(&self, state: &State<Fluid>) -> Result<Velocity, PropertyError>;
}
