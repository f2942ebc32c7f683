//! Numeric inputs to the shell model.

use uom::si::{
    f64::{Length, Mass, Power, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{
    GreaterThanOne, StrictlyPositive, UnitIntervalLowerOpen, UnitIntervalOpen,
};

use super::ParameterError;

/// Stellar data for one of the three ways of fixing the star's luminosity.
///
/// Only the data of the selected method is carried, so inputs belonging to
/// other methods can never leak into the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StellarInput {
    /// Estimate from stellar mass with `L = L☉·(M/M☉)^2.3`.
    ///
    /// The relation is fitted to red dwarfs; above half a solar mass the
    /// result carries a [`Warning`](super::Warning).
    Mass(Mass),

    /// Black-body luminosity from the photosphere radius and effective temperature.
    RadiusTemperature {
        radius: Length,
        effective_temperature: ThermodynamicTemperature,
    },

    /// Luminosity given directly.
    Luminosity(Power),
}

/// Rule that ends the shell sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Termination {
    /// Add shells until one is at or below this temperature.
    ///
    /// Must be positive and strictly below the inner shell temperature.
    OuterTemperature(ThermodynamicTemperature),

    /// Build exactly this many shells. Must be at least one.
    Layers(usize),
}

/// Optional per-shell quantities to report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Columns {
    /// Carnot efficiency of the step out of each non-terminal shell.
    pub carnot: bool,

    /// Landauer limit at every shell's temperature.
    pub landauer: bool,

    /// Available power of the step out of each non-terminal shell.
    pub exergy: bool,
}

/// Fully numeric parameters for one shell model computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellParameters {
    /// Source of the stellar luminosity.
    pub star: StellarInput,

    /// Shell absorptivity α, in `(0, 1]`, shared by every shell.
    pub absorptivity: f64,

    /// Shell emissivity ε, in `(0, 1]`, shared by every shell.
    pub emissivity: f64,

    /// Equilibrium temperature of the innermost shell.
    pub inner_temperature: ThermodynamicTemperature,

    /// Temperature ratio between consecutive shells, `f_T`, in `(0, 1)`.
    pub temperature_factor: f64,

    /// Radius ratio between consecutive shells, `f_r`, greater than one.
    pub radius_factor: f64,

    /// When to stop adding shells.
    pub termination: Termination,

    /// Optional per-shell quantities.
    pub columns: Columns,
}

/// Shell material and decay factors that passed validation.
#[derive(Debug, Clone, Copy)]
pub(super) struct Validated {
    pub(super) temperature_factor: f64,
    pub(super) radius_factor: f64,
    pub(super) absorptivity: f64,
    pub(super) emissivity: f64,
    pub(super) inner_temperature: ThermodynamicTemperature,
}

impl ShellParameters {
    /// Checks the decay factors, material coefficients and inner temperature.
    ///
    /// Checks run in a fixed order and the first violation is returned.
    ///
    /// # Errors
    ///
    /// Returns the [`ParameterError`] of the first parameter out of range.
    pub(super) fn validate(&self) -> Result<Validated, ParameterError> {
        let temperature_factor = UnitIntervalOpen::new(self.temperature_factor)
            .map_err(|source| ParameterError::TemperatureFactor {
                value: self.temperature_factor,
                source,
            })?
            .into_inner();

        let radius_factor = GreaterThanOne::new(self.radius_factor)
            .map_err(|source| ParameterError::RadiusFactor {
                value: self.radius_factor,
                source,
            })?
            .into_inner();

        let absorptivity = UnitIntervalLowerOpen::new(self.absorptivity)
            .map_err(|source| ParameterError::Absorptivity {
                value: self.absorptivity,
                source,
            })?
            .into_inner();

        let emissivity = UnitIntervalLowerOpen::new(self.emissivity)
            .map_err(|source| ParameterError::Emissivity {
                value: self.emissivity,
                source,
            })?
            .into_inner();

        let t_inner = self.inner_temperature.get::<kelvin>();
        StrictlyPositive::new(t_inner)
            .map_err(|source| ParameterError::InnerTemperature {
                kelvin: t_inner,
                source,
            })?;

        Ok(Validated {
            temperature_factor,
            radius_factor,
            absorptivity,
            emissivity,
            inner_temperature: self.inner_temperature,
        })
    }
}
