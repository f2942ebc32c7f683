//! Results types for the shell model.

use std::fmt;

use uom::si::{
    f64::{Energy, Frequency, Length, Power, ThermodynamicTemperature},
    length::meter,
};

use crate::support::constants::ASTRONOMICAL_UNIT;

/// One concentric shell of the structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shell {
    /// Zero-based index, counting outward from the star.
    pub layer: usize,

    /// Radiative equilibrium temperature of the shell.
    pub equilibrium_temperature: ThermodynamicTemperature,

    /// Orbital radius of the shell.
    pub radius: Length,

    /// Carnot efficiency of the step to the next shell.
    ///
    /// `None` for the outermost shell or when not requested.
    pub carnot: Option<f64>,

    /// Landauer limit at this shell's temperature, when requested.
    pub landauer: Option<Energy>,

    /// Available power of the step to the next shell.
    ///
    /// `None` for the outermost shell or when not requested.
    pub exergy: Option<Power>,
}

impl Shell {
    /// Orbital radius in astronomical units.
    #[must_use]
    pub fn radius_au(&self) -> f64 {
        self.radius.get::<meter>() / ASTRONOMICAL_UNIT
    }
}

/// Non-fatal note about the reliability of a result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Warning {
    /// The mass–luminosity relation was applied outside the red-dwarf range.
    MassLuminosityRange {
        /// Stellar mass the relation was applied to.
        solar_masses: f64,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MassLuminosityRange { solar_masses } => write!(
                f,
                "the mass–luminosity law M^2.3 is only accurate for red dwarfs below 0.5 solar \
                 masses; the luminosity for {solar_masses} solar masses may be inaccurate"
            ),
        }
    }
}

/// Shell sequence and summary figures for one computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Results {
    /// Shells ordered from the innermost (index 0) outward.
    ///
    /// Never empty.
    pub shells: Vec<Shell>,

    /// Stellar luminosity used for the computation.
    pub luminosity: Power,

    /// Advisory notes, in the order they were raised.
    pub warnings: Vec<Warning>,

    /// Bit erasures per second sustainable by dissipating the full
    /// luminosity at the outermost shell's temperature.
    pub total_throughput: Frequency,
}

impl Results {
    /// Number of shells generated.
    #[must_use]
    pub fn total_layers(&self) -> usize {
        self.shells.len()
    }

    /// Radius of the innermost shell in astronomical units, or zero without shells.
    #[must_use]
    pub fn inner_shell_radius_au(&self) -> f64 {
        self.shells.first().map_or(0.0, Shell::radius_au)
    }

    /// The outermost, coldest shell.
    #[must_use]
    pub fn outermost(&self) -> Option<&Shell> {
        self.shells.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{frequency::hertz, power::watt, thermodynamic_temperature::kelvin};

    fn shell(layer: usize, radius_m: f64) -> Shell {
        Shell {
            layer,
            equilibrium_temperature: ThermodynamicTemperature::new::<kelvin>(100.0),
            radius: Length::new::<meter>(radius_m),
            carnot: None,
            landauer: None,
            exergy: None,
        }
    }

    #[test]
    fn radius_in_astronomical_units() {
        let s = shell(0, 2.0 * ASTRONOMICAL_UNIT);
        assert!((s.radius_au() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn summary_accessors() {
        let results = Results {
            shells: vec![shell(0, ASTRONOMICAL_UNIT), shell(1, 4.0 * ASTRONOMICAL_UNIT)],
            luminosity: Power::new::<watt>(1.0),
            warnings: Vec::new(),
            total_throughput: Frequency::new::<hertz>(0.0),
        };
        assert_eq!(results.total_layers(), 2);
        assert!((results.inner_shell_radius_au() - 1.0).abs() < 1e-12);
        assert_eq!(results.outermost().map(|s| s.layer), Some(1));
    }

    #[test]
    fn empty_results_report_zero_radius() {
        let results = Results {
            shells: Vec::new(),
            luminosity: Power::new::<watt>(1.0),
            warnings: Vec::new(),
            total_throughput: Frequency::new::<hertz>(0.0),
        };
        assert_eq!(results.inner_shell_radius_au(), 0.0);
    }

    #[test]
    fn warning_message_names_the_mass() {
        let w = Warning::MassLuminosityRange { solar_masses: 1.0 };
        let message = w.to_string();
        assert!(message.contains("red dwarfs"));
        assert!(message.contains("1 solar masses"));
    }
}
