use std::{fmt, str::FromStr};

use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MolarMass, SpecificHeatCapacity},
    molar_mass::kilogram_per_mole,
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::{
    PropertyError,
    model::IdealGasFluid,
    units::{HeatingValue, SpecificGasConstant},
};

/// Universal gas constant, J/(mol·K).
const R_UNIVERSAL: f64 = 8.314_462_618;

/// A chemical species known to this crate.
///
/// Each species carries a molar mass, a mass-basis heat capacity near room
/// temperature, its elemental makeup, and (for fuels) a lower heating value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    H2,
    O2,
    N2,
    CH4,
    H2O,
    CO2,
    Ar,
}

/// Atom counts per molecule, used for stoichiometry.
struct Atoms {
    c: f64,
    h: f64,
    o: f64,
}

impl Species {
    /// Parses a species symbol, case-insensitively.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.to_ascii_uppercase().as_str() {
            "H2" => Some(Self::H2),
            "O2" => Some(Self::O2),
            "N2" => Some(Self::N2),
            "CH4" => Some(Self::CH4),
            "H2O" => Some(Self::H2O),
            "CO2" => Some(Self::CO2),
            "AR" => Some(Self::Ar),
            _ => None,
        }
    }

    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::H2 => "H2",
            Self::O2 => "O2",
            Self::N2 => "N2",
            Self::CH4 => "CH4",
            Self::H2O => "H2O",
            Self::CO2 => "CO2",
            Self::Ar => "AR",
        }
    }

    /// Molar mass of the species.
    #[must_use]
    pub fn molar_mass(&self) -> MolarMass {
        MolarMass::new::<kilogram_per_mole>(self.molar_mass_si())
    }

    /// Mass-basis heat capacity at constant pressure, near 300 K.
    #[must_use]
    pub fn cp(&self) -> SpecificHeatCapacity {
        let value = match self {
            Self::H2 => 14_300.0,
            Self::O2 => 918.0,
            Self::N2 => 1_040.0,
            Self::CH4 => 2_220.0,
            Self::H2O => 1_860.0,
            Self::CO2 => 846.0,
            Self::Ar => 520.0,
        };
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(value)
    }

    /// Lower heating value; zero for species that are not fuels.
    #[must_use]
    pub fn lower_heating_value(&self) -> HeatingValue {
        HeatingValue::new::<joule_per_kilogram>(self.lhv_si())
    }

    fn molar_mass_si(&self) -> f64 {
        match self {
            Self::H2 => 2.016e-3,
            Self::O2 => 31.998e-3,
            Self::N2 => 28.014e-3,
            Self::CH4 => 16.043e-3,
            Self::H2O => 18.015e-3,
            Self::CO2 => 44.009e-3,
            Self::Ar => 39.948e-3,
        }
    }

    fn lhv_si(&self) -> f64 {
        match self {
            Self::H2 => 119.96e6,
            Self::CH4 => 50.0e6,
            _ => 0.0,
        }
    }

    fn atoms(&self) -> Atoms {
        let (c, h, o) = match self {
            Self::H2 => (0.0, 2.0, 0.0),
            Self::O2 => (0.0, 0.0, 2.0),
            Self::N2 | Self::Ar => (0.0, 0.0, 0.0),
            Self::CH4 => (1.0, 4.0, 0.0),
            Self::H2O => (0.0, 2.0, 1.0),
            Self::CO2 => (1.0, 0.0, 2.0),
        };
        Atoms { c, h, o }
    }

    /// Moles of O2 consumed per mole of this species at complete combustion.
    fn oxygen_demand(&self) -> f64 {
        let Atoms { c, h, o } = self.atoms();
        (c + h / 4.0 - o / 2.0).max(0.0)
    }
}

/// An ideal gas mixture described by species mole amounts.
///
/// Compositions use the same shorthand as the mechanism files they come
/// from: `"H2:2 O2:1 N2:3.56"`, with entries separated by whitespace or
/// commas. Amounts are relative moles; they need not sum to one.
///
/// # Example
///
/// ```
/// use ignis_thermo::fluid::GasMixture;
///
/// let mixture: GasMixture = "CH4:1.0, O2:2.0, N2:7.52".parse().unwrap();
/// assert_eq!(mixture.entries().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GasMixture {
    entries: Vec<(Species, f64)>,
}

impl GasMixture {
    /// Creates a mixture from species mole amounts.
    ///
    /// Duplicate species are merged by summing their amounts.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the list is empty or any amount is
    /// non-finite or not strictly positive.
    pub fn new(entries: impl IntoIterator<Item = (Species, f64)>) -> Result<Self, PropertyError> {
        let mut merged: Vec<(Species, f64)> = Vec::new();

        for (species, moles) in entries {
            if !moles.is_finite() || moles <= 0.0 {
                return Err(PropertyError::InvalidInput(format!(
                    "mole amount for {} must be finite and positive, got {moles}",
                    species.symbol()
                )));
            }

            match merged.iter_mut().find(|(s, _)| *s == species) {
                Some((_, amount)) => *amount += moles,
                None => merged.push((species, moles)),
            }
        }

        if merged.is_empty() {
            return Err(PropertyError::EmptyComposition);
        }

        Ok(Self { entries: merged })
    }

    /// Builds a fuel/oxidizer blend at the given equivalence ratio.
    ///
    /// The fuel amounts are scaled so that the fuel-to-oxidizer ratio is
    /// `phi` times stoichiometric, where the stoichiometric point balances
    /// the fuel's O2 demand (from its C/H/O content) against the O2 carried
    /// by the oxidizer. The oxidizer amounts are kept as given.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if `phi` is not finite and positive, the
    /// fuel demands no oxygen, or the oxidizer carries none.
    pub fn from_equivalence_ratio(
        phi: f64,
        fuel: &GasMixture,
        oxidizer: &GasMixture,
    ) -> Result<Self, PropertyError> {
        if !phi.is_finite() || phi <= 0.0 {
            return Err(PropertyError::InvalidInput(format!(
                "equivalence ratio must be finite and positive, got {phi}"
            )));
        }

        let demand = fuel.oxygen_demand();
        if demand <= 0.0 {
            return Err(PropertyError::InvalidInput(
                "fuel has no oxygen demand; it cannot set an equivalence ratio".into(),
            ));
        }

        let available = oxidizer.moles_of(Species::O2);
        if available <= 0.0 {
            return Err(PropertyError::InvalidInput(
                "oxidizer contains no O2".into(),
            ));
        }

        let scale = phi * available / demand;

        let blend = fuel
            .entries
            .iter()
            .map(|&(species, moles)| (species, moles * scale))
            .chain(oxidizer.entries.iter().copied());

        Self::new(blend)
    }

    /// The species and their mole amounts, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[(Species, f64)] {
        &self.entries
    }

    #[must_use]
    pub fn total_moles(&self) -> f64 {
        self.entries.iter().map(|(_, moles)| moles).sum()
    }

    /// Mole fraction of one species; zero if absent.
    #[must_use]
    pub fn mole_fraction(&self, species: Species) -> f64 {
        self.moles_of(species) / self.total_moles()
    }

    /// Mass fraction of one species; zero if absent.
    #[must_use]
    pub fn mass_fraction(&self, species: Species) -> f64 {
        self.moles_of(species) * species.molar_mass_si() / self.total_mass_si()
    }

    /// Mean molar mass of the mixture.
    #[must_use]
    pub fn molar_mass(&self) -> MolarMass {
        MolarMass::new::<kilogram_per_mole>(self.total_mass_si() / self.total_moles())
    }

    /// Specific gas constant of the mixture.
    #[must_use]
    pub fn gas_constant(&self) -> SpecificGasConstant {
        let mean = self.total_mass_si() / self.total_moles();
        SpecificGasConstant::new::<joule_per_kilogram_kelvin>(R_UNIVERSAL / mean)
    }

    /// Mass-weighted heat capacity of the mixture at constant pressure.
    #[must_use]
    pub fn cp(&self) -> SpecificHeatCapacity {
        let total_mass = self.total_mass_si();
        let weighted: f64 = self
            .entries
            .iter()
            .map(|&(species, moles)| {
                let mass = moles * species.molar_mass_si();
                mass * species.cp().get::<joule_per_kilogram_kelvin>()
            })
            .sum();

        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(weighted / total_mass)
    }

    /// Chemical energy released per unit mass of mixture at complete
    /// combustion, limited by the available oxygen.
    ///
    /// Lean mixtures burn all their fuel; rich mixtures burn only the share
    /// the O2 supports. Inert mixtures release zero.
    #[must_use]
    pub fn heat_of_combustion(&self) -> HeatingValue {
        let demand = self.oxygen_demand();
        if demand <= 0.0 {
            return HeatingValue::new::<joule_per_kilogram>(0.0);
        }

        let burn_fraction = (self.moles_of(Species::O2) / demand).min(1.0);

        let energy: f64 = self
            .entries
            .iter()
            .map(|&(species, moles)| moles * species.molar_mass_si() * species.lhv_si())
            .sum();

        HeatingValue::new::<joule_per_kilogram>(burn_fraction * energy / self.total_mass_si())
    }

    fn moles_of(&self, species: Species) -> f64 {
        self.entries
            .iter()
            .find(|(s, _)| *s == species)
            .map_or(0.0, |(_, moles)| *moles)
    }

    /// Total O2 demand of the composition, in moles.
    fn oxygen_demand(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(species, moles)| moles * species.oxygen_demand())
            .sum()
    }

    /// Mass of the composition as given, in kg.
    fn total_mass_si(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(species, moles)| moles * species.molar_mass_si())
            .sum()
    }
}

impl FromStr for GasMixture {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut entries = Vec::new();

        for token in s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
        {
            let (symbol, amount) = token
                .split_once(':')
                .ok_or_else(|| PropertyError::MalformedEntry(token.to_string()))?;

            let species = Species::from_symbol(symbol)
                .ok_or_else(|| PropertyError::UnknownSpecies(symbol.to_string()))?;

            let moles: f64 = amount
                .parse()
                .map_err(|_| PropertyError::MalformedEntry(token.to_string()))?;

            entries.push((species, moles));
        }

        Self::new(entries)
    }
}

impl fmt::Display for GasMixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (species, moles)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{moles}", species.symbol())?;
        }
        Ok(())
    }
}

impl IdealGasFluid for GasMixture {
    fn gas_constant(&self) -> SpecificGasConstant {
        GasMixture::gas_constant(self)
    }

    fn cp(&self) -> SpecificHeatCapacity {
        GasMixture::cp(self)
    }
}
