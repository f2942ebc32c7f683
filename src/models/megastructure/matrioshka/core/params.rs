//! Textual parameter set as edited by a user.
//!
//! Numeric fields are kept as entered so that partially typed values survive
//! editing. [`ParameterSet::to_shell_parameters`] converts the set to numeric
//! form once the user asks for a computation.

use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Length, Mass, Power, ThermodynamicTemperature},
    length::meter,
    mass::kilogram,
    power::watt,
    thermodynamic_temperature::kelvin,
};

use crate::support::constants::SOLAR_MASS;

use super::{Columns, ParameterError, ShellParameters, StellarInput, Termination};

/// How the star's luminosity is specified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LuminosityMethod {
    /// From stellar mass, in solar masses.
    #[default]
    Mass,
    /// From stellar radius (m) and effective temperature (K).
    RadiusTemp,
    /// Luminosity in watts.
    Direct,
}

/// Which rule ends the shell sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationCriterion {
    /// Stop at a target outer temperature.
    #[default]
    #[serde(rename = "temp")]
    Temperature,
    /// Stop after a fixed number of shells.
    #[serde(rename = "layers")]
    Layers,
}

/// The decay factor the user controls directly.
///
/// The other factor is derived from it and the absorptivity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchitectureDriver {
    /// The radius factor `f_r` drives; `f_T` follows.
    #[default]
    Radius,
    /// The temperature factor `f_T` drives; `f_r` follows.
    Temp,
}

/// Flat, textual parameter record using the external field names.
///
/// Missing fields deserialize to the stock design of [`ParameterSet::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParameterSet {
    pub luminosity_method: LuminosityMethod,
    /// Stellar mass, solar masses.
    pub star_mass: String,
    /// Stellar radius, m.
    pub star_radius: String,
    /// Stellar effective temperature, K.
    pub star_teff: String,
    /// Stellar luminosity, W.
    pub star_luminosity: String,
    pub alpha: String,
    pub epsilon: String,
    /// Keeps emissivity equal to absorptivity.
    pub same_alpha_epsilon: bool,
    /// Inner shell temperature, K.
    #[serde(rename = "T_inner")]
    pub inner_temperature: String,
    pub architecture_driver: ArchitectureDriver,
    #[serde(rename = "f_T")]
    pub temperature_factor: String,
    #[serde(rename = "f_r")]
    pub radius_factor: String,
    pub termination_criterion: TerminationCriterion,
    /// Target outer temperature, K.
    #[serde(rename = "T_outer")]
    pub outer_temperature: String,
    #[serde(rename = "N_max")]
    pub max_layers: String,
    pub show_carnot: bool,
    pub show_landauer: bool,
    pub show_exergy: bool,
}

impl Default for ParameterSet {
    /// A Sun-like star enclosed by near-black shells starting at 1000 K,
    /// halving in temperature and quadrupling in radius down to 3 K.
    fn default() -> Self {
        Self {
            luminosity_method: LuminosityMethod::Mass,
            star_mass: "1".into(),
            star_radius: "6.957e8".into(),
            star_teff: "5778".into(),
            star_luminosity: "3.828e26".into(),
            alpha: "0.99".into(),
            epsilon: "0.99".into(),
            same_alpha_epsilon: true,
            inner_temperature: "1000".into(),
            architecture_driver: ArchitectureDriver::Radius,
            temperature_factor: "0.50".into(),
            radius_factor: "4.00".into(),
            termination_criterion: TerminationCriterion::Temperature,
            outer_temperature: "3".into(),
            max_layers: "20".into(),
            show_carnot: false,
            show_landauer: true,
            show_exergy: false,
        }
    }
}

impl ParameterSet {
    /// Loads a parameter set from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Converts the textual fields to numeric model parameters.
    ///
    /// Only the stellar fields of the selected luminosity method and the bound
    /// of the selected termination criterion are read. Text that does not parse
    /// as a number becomes `NaN`, which the model then rejects.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::LayerCount`] if the layer count is used and is
    /// not a positive whole number.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_shell_parameters(&self) -> Result<ShellParameters, ParameterError> {
        let star = match self.luminosity_method {
            LuminosityMethod::Mass => StellarInput::Mass(Mass::new::<kilogram>(
                parse_number(&self.star_mass) * SOLAR_MASS,
            )),
            LuminosityMethod::RadiusTemp => StellarInput::RadiusTemperature {
                radius: Length::new::<meter>(parse_number(&self.star_radius)),
                effective_temperature: ThermodynamicTemperature::new::<kelvin>(parse_number(
                    &self.star_teff,
                )),
            },
            LuminosityMethod::Direct => {
                StellarInput::Luminosity(Power::new::<watt>(parse_number(&self.star_luminosity)))
            }
        };

        let termination = match self.termination_criterion {
            TerminationCriterion::Temperature => Termination::OuterTemperature(
                ThermodynamicTemperature::new::<kelvin>(parse_number(&self.outer_temperature)),
            ),
            TerminationCriterion::Layers => {
                let value = parse_number(&self.max_layers);
                if !(value.is_finite() && value >= 1.0 && value.fract() == 0.0) {
                    return Err(ParameterError::LayerCount { value });
                }
                Termination::Layers(value as usize)
            }
        };

        Ok(ShellParameters {
            star,
            absorptivity: parse_number(&self.alpha),
            emissivity: parse_number(&self.epsilon),
            inner_temperature: ThermodynamicTemperature::new::<kelvin>(parse_number(
                &self.inner_temperature,
            )),
            temperature_factor: parse_number(&self.temperature_factor),
            radius_factor: parse_number(&self.radius_factor),
            termination,
            columns: Columns {
                carnot: self.show_carnot,
                landauer: self.show_landauer,
                exergy: self.show_exergy,
            },
        })
    }
}

/// Parses numeric text, yielding `NaN` for anything that is not a number.
pub(super) fn parse_number(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

/// Parses numeric text, yielding `None` unless it is a finite number.
pub(super) fn parse_finite(text: &str) -> Option<f64> {
    Some(parse_number(text)).filter(|value| value.is_finite())
}
