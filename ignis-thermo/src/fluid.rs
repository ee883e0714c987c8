mod air;
mod mixture;

pub use air::Air;
pub use mixture::{GasMixture, Species};
