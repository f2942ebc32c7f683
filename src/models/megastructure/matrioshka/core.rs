//! Shell model of a Matrioshka brain.
//!
//! The star's luminosity passes outward through concentric shells in
//! radiative equilibrium. The innermost shell sits at the radius where it
//! settles at the inner temperature; each further shell is cooler by the
//! temperature factor and wider by the radius factor.
//!
//! Parameters arrive either fully numeric, as [`ShellParameters`], or as the
//! textual [`ParameterSet`] a user edits. [`apply_edit`] keeps the decay
//! factors of a parameter set coupled through absorptivity, and [`compute`]
//! evaluates numeric parameters into [`Results`].

mod config;
mod coupling;
mod error;
mod input;
mod luminosity;
mod params;
mod results;
mod shells;
mod termination;

#[cfg(test)]
mod test_support;

pub use config::EngineConfig;
pub use coupling::{Edit, FlagField, TextField, apply_edit};
pub use error::{ParameterError, UnknownField};
pub use input::{Columns, ShellParameters, StellarInput, Termination};
pub use params::{ArchitectureDriver, LuminosityMethod, ParameterSet, TerminationCriterion};
pub use results::{Results, Shell, Warning};

use uom::si::{
    f64::ThermodynamicTemperature, length::meter, power::watt, thermodynamic_temperature::kelvin,
};

use crate::support::radiation::{equilibrium_radius, erasure_rate};

use shells::ShellSequence;

/// Computes the shell sequence for a set of numeric parameters.
///
/// Validation runs before any shell is generated, so a failed computation
/// never yields partial results. The same parameters always give the same
/// results.
///
/// # Errors
///
/// Returns a [`ParameterError`] naming the first invalid parameter, or
/// [`ParameterError::TooManyLayers`] if the structure would need more shells
/// than `config.max_layers`.
pub fn compute(params: &ShellParameters, config: &EngineConfig) -> Result<Results, ParameterError> {
    let validated = params.validate()?;
    let resolved = luminosity::resolve(&params.star)?;

    let inner_radius = equilibrium_radius(
        resolved.luminosity,
        validated.absorptivity,
        validated.emissivity,
        validated.inner_temperature,
    );

    let bound = termination::resolve(
        params.termination,
        validated.inner_temperature,
        validated.temperature_factor,
        config,
    )?;

    log::debug!(
        "matrioshka: L = {:e} W, r0 = {:e} m, up to {} shells",
        resolved.luminosity.get::<watt>(),
        inner_radius.get::<meter>(),
        bound.last_layer + 1,
    );

    let shells: Vec<_> = ShellSequence::new(
        validated.inner_temperature,
        inner_radius,
        validated.temperature_factor,
        validated.radius_factor,
        resolved.luminosity,
        bound,
        params.columns,
    )
    .collect();

    let coldest = shells.last().map_or_else(
        || ThermodynamicTemperature::new::<kelvin>(0.0),
        |shell| shell.equilibrium_temperature,
    );
    let total_throughput = erasure_rate(resolved.luminosity, coldest);

    let warnings: Vec<_> = resolved.warning.into_iter().collect();
    for warning in &warnings {
        log::warn!("{warning}");
    }

    Ok(Results {
        shells,
        luminosity: resolved.luminosity,
        warnings,
        total_throughput,
    })
}
