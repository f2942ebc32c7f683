//! Shared fixtures for tests.

use uom::si::{
    f64::{Mass, ThermodynamicTemperature},
    mass::kilogram,
    thermodynamic_temperature::kelvin,
};

use crate::support::constants::SOLAR_MASS;

use super::{Columns, ShellParameters, StellarInput, Termination};

/// One solar mass, near-black shells from 1000 K down to 3 K.
pub(super) fn sun_like() -> ShellParameters {
    ShellParameters {
        star: StellarInput::Mass(Mass::new::<kilogram>(SOLAR_MASS)),
        absorptivity: 0.99,
        emissivity: 0.99,
        inner_temperature: ThermodynamicTemperature::new::<kelvin>(1000.0),
        temperature_factor: 0.5,
        radius_factor: 4.0,
        termination: Termination::OuterTemperature(ThermodynamicTemperature::new::<kelvin>(3.0)),
        columns: Columns {
            carnot: false,
            landauer: true,
            exergy: false,
        },
    }
}
