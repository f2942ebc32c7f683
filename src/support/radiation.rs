//! Radiative and thermodynamic relations for bodies in radiative equilibrium.
//!
//! All functions are pure and operate on [`uom`] quantities.
//! Dimensionless coefficients (absorptivity, emissivity, temperature ratios)
//! are plain `f64`.
//!
//! ```
//! use matrioshka_models::support::radiation::stefan_boltzmann_luminosity;
//! use uom::si::{
//!     f64::{Length, ThermodynamicTemperature},
//!     length::meter,
//!     power::watt,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! // The Sun: R = 6.957e8 m, T_eff = 5772 K.
//! let l = stefan_boltzmann_luminosity(
//!     Length::new::<meter>(6.957e8),
//!     ThermodynamicTemperature::new::<kelvin>(5772.0),
//! );
//! assert!((l.get::<watt>() / 3.828e26 - 1.0).abs() < 1e-3);
//! ```

use std::f64::consts::{LN_2, PI};

use uom::si::{
    energy::joule,
    f64::{Energy, Frequency, Length, Power, ThermodynamicTemperature},
    frequency::hertz,
    length::meter,
    power::watt,
    thermodynamic_temperature::kelvin,
};

use super::constants::{BOLTZMANN, STEFAN_BOLTZMANN};

/// Luminosity of a black-body sphere, `L = 4π·r²·σ·T⁴`.
#[must_use]
pub fn stefan_boltzmann_luminosity(
    radius: Length,
    temperature: ThermodynamicTemperature,
) -> Power {
    let r = radius.get::<meter>();
    let t = temperature.get::<kelvin>();
    Power::new::<watt>(4.0 * PI * r.powi(2) * STEFAN_BOLTZMANN * t.powi(4))
}

/// Radius at which a closed shell around a source settles at `temperature`.
///
/// The shell absorbs `absorptivity · L` and radiates from its outer face
/// with `emissivity`, so `r = sqrt(α·L / (4π·ε·σ·T⁴))`.
#[must_use]
pub fn equilibrium_radius(
    luminosity: Power,
    absorptivity: f64,
    emissivity: f64,
    temperature: ThermodynamicTemperature,
) -> Length {
    let l = luminosity.get::<watt>();
    let t = temperature.get::<kelvin>();
    Length::new::<meter>(
        ((absorptivity * l) / (4.0 * PI * emissivity * STEFAN_BOLTZMANN * t.powi(4))).sqrt(),
    )
}

/// Minimum energy to erase one bit at `temperature`, `k_B·T·ln 2`.
#[must_use]
pub fn landauer_limit(temperature: ThermodynamicTemperature) -> Energy {
    Energy::new::<joule>(BOLTZMANN * temperature.get::<kelvin>() * LN_2)
}

/// Bit erasures per second that `power` sustains at the Landauer limit.
///
/// Returns zero when `temperature` is not positive, where the limit
/// vanishes and the rate is unbounded.
#[must_use]
pub fn erasure_rate(power: Power, temperature: ThermodynamicTemperature) -> Frequency {
    if temperature.get::<kelvin>() > 0.0 {
        let per_bit = landauer_limit(temperature).get::<joule>();
        Frequency::new::<hertz>(power.get::<watt>() / per_bit)
    } else {
        Frequency::new::<hertz>(0.0)
    }
}

/// Carnot efficiency for a cold-to-hot temperature ratio, `1 − T_c/T_h`.
#[must_use]
pub fn carnot_efficiency(cold_to_hot: f64) -> f64 {
    1.0 - cold_to_hot
}
