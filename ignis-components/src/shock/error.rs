use thiserror::Error;

use ignis_thermo::PropertyError;

/// Errors that can occur when evaluating shock-wave models.
#[derive(Debug, Error)]
pub enum ShockError {
    /// The wave speed does not exceed the upstream sound speed.
    #[error("shock speed is subsonic (Mach {mach:.3}); jump conditions require Mach > 1")]
    Subsonic { mach: f64 },

    /// The mixture has no chemical energy to drive a detonation.
    #[error("mixture releases no heat; Chapman-Jouguet speed is undefined")]
    NoHeatRelease,

    /// The reflected-shock solve hit its iteration limit.
    #[error("reflected shock solve did not converge")]
    NotConverged,

    /// A property evaluation failed.
    #[error(transparent)]
    Property(#[from] PropertyError),

    /// The root-finding step failed.
    #[error("reflected shock solve failed")]
    Solver(#[from] ignis_solve::bisection::Error),
}
