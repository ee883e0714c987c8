mod traits;

pub mod ideal_gas;

pub use ideal_gas::{IdealGas, IdealGasFluid};
pub use traits::ThermodynamicProperties;
