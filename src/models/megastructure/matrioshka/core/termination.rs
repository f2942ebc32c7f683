//! Converts a termination rule into a bound on the shell loop.

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use super::{EngineConfig, ParameterError, Termination};

/// Bound on the shell loop derived from a [`Termination`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct LayerBound {
    /// Index of the last shell the loop may emit.
    ///
    /// Shells with a lower index are transitions to a further shell;
    /// the shell at this index has no successor.
    pub(super) last_layer: usize,

    /// Temperature at or below which a shell ends the sequence early.
    pub(super) stop_at: Option<ThermodynamicTemperature>,
}

/// Resolves the termination rule against the inner temperature and decay factor.
///
/// For a target outer temperature the bound is
/// `ceil(ln(T_outer / T_inner) / ln(f_T))`, the number of decay steps needed
/// to reach it. For a layer count `N` the bound is `N - 1`.
///
/// # Errors
///
/// Returns [`ParameterError::OuterTemperature`] or [`ParameterError::LayerCount`]
/// for an invalid rule, and [`ParameterError::TooManyLayers`] when the shell
/// count would exceed `config.max_layers`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub(super) fn resolve(
    termination: Termination,
    inner_temperature: ThermodynamicTemperature,
    temperature_factor: f64,
    config: &EngineConfig,
) -> Result<LayerBound, ParameterError> {
    match termination {
        Termination::OuterTemperature(outer_temperature) => {
            let outer = outer_temperature.get::<kelvin>();
            let inner = inner_temperature.get::<kelvin>();
            if !(outer.is_finite() && outer > 0.0 && outer < inner) {
                return Err(ParameterError::OuterTemperature { outer, inner });
            }

            let steps = ((outer / inner).ln() / temperature_factor.ln()).ceil();
            let layers = steps + 1.0;
            if layers > config.max_layers as f64 {
                return Err(ParameterError::TooManyLayers {
                    layers,
                    limit: config.max_layers,
                });
            }

            Ok(LayerBound {
                last_layer: steps as usize,
                stop_at: Some(outer_temperature),
            })
        }
        Termination::Layers(0) => Err(ParameterError::LayerCount { value: 0.0 }),
        Termination::Layers(layers) => {
            if layers > config.max_layers {
                return Err(ParameterError::TooManyLayers {
                    layers: layers as f64,
                    limit: config.max_layers,
                });
            }

            Ok(LayerBound {
                last_layer: layers - 1,
                stop_at: None,
            })
        }
    }
}
