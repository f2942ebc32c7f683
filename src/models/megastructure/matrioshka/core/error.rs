use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Rejection of a shell model parameter set.
///
/// Every variant names the offending parameter and its value.
/// A computation that fails returns exactly one of these and no partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// The temperature decay factor is outside `(0, 1)`.
    #[error("temperature decay factor f_T must satisfy 0 < f_T < 1, got {value}")]
    TemperatureFactor {
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// The radius growth factor is not greater than one.
    #[error("radius growth factor f_r must be greater than 1, got {value}")]
    RadiusFactor {
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// The absorptivity is outside `(0, 1]`.
    #[error("absorptivity must satisfy 0 < α ≤ 1, got {value}")]
    Absorptivity {
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// The emissivity is outside `(0, 1]`.
    #[error("emissivity must satisfy 0 < ε ≤ 1, got {value}")]
    Emissivity {
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// The inner shell temperature is not positive.
    #[error("inner shell temperature must be positive, got {kelvin} K")]
    InnerTemperature {
        kelvin: f64,
        #[source]
        source: ConstraintError,
    },

    /// The stellar inputs did not yield a finite, positive luminosity.
    #[error("could not calculate a positive stellar luminosity (got {watts} W)")]
    Luminosity { watts: f64 },

    /// The target outer temperature is missing, not positive, or not below
    /// the inner temperature.
    #[error(
        "outer temperature must be positive and below the inner temperature of {inner} K, got {outer} K"
    )]
    OuterTemperature { outer: f64, inner: f64 },

    /// The requested number of layers is not a positive whole number.
    #[error("number of layers must be a positive whole number, got {value}")]
    LayerCount { value: f64 },

    /// The parameters call for more shells than the configured limit.
    #[error("parameters call for {layers} shells, more than the limit of {limit}")]
    TooManyLayers { layers: f64, limit: usize },
}

/// A field name that does not match any editable parameter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown parameter field `{0}`")]
pub struct UnknownField(pub String);
