//! Stellar luminosity resolution.

use uom::si::{f64::Power, mass::kilogram, power::watt};

use crate::support::{
    constants::{SOLAR_LUMINOSITY, SOLAR_MASS},
    radiation::stefan_boltzmann_luminosity,
};

use super::{ParameterError, StellarInput, Warning};

/// Exponent of the red-dwarf mass–luminosity relation.
const MASS_LUMINOSITY_EXPONENT: f64 = 2.3;

/// Mass, in solar masses, above which the mass–luminosity relation is unreliable.
const MASS_LUMINOSITY_LIMIT: f64 = 0.5;

/// Luminosity of the star along with any advisory about how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Resolved {
    pub(super) luminosity: Power,
    pub(super) warning: Option<Warning>,
}

/// Resolves the stellar luminosity from the selected input method.
///
/// # Errors
///
/// Returns [`ParameterError::Luminosity`] if the result is not a finite,
/// positive power.
pub(super) fn resolve(star: &StellarInput) -> Result<Resolved, ParameterError> {
    let (luminosity, warning) = match *star {
        StellarInput::Luminosity(luminosity) => (luminosity, None),
        StellarInput::RadiusTemperature {
            radius,
            effective_temperature,
        } => (
            stefan_boltzmann_luminosity(radius, effective_temperature),
            None,
        ),
        StellarInput::Mass(mass) => {
            let solar_masses = mass.get::<kilogram>() / SOLAR_MASS;
            let luminosity = Power::new::<watt>(
                SOLAR_LUMINOSITY * solar_masses.powf(MASS_LUMINOSITY_EXPONENT),
            );
            let warning = (solar_masses > MASS_LUMINOSITY_LIMIT)
                .then_some(Warning::MassLuminosityRange { solar_masses });
            (luminosity, warning)
        }
    };

    let watts = luminosity.get::<watt>();
    if !(watts.is_finite() && watts > 0.0) {
        return Err(ParameterError::Luminosity { watts });
    }

    Ok(Resolved {
        luminosity,
        warning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, Mass, ThermodynamicTemperature},
        length::meter,
        thermodynamic_temperature::kelvin,
    };

    fn solar_masses(m: f64) -> StellarInput {
        StellarInput::Mass(Mass::new::<kilogram>(m * SOLAR_MASS))
    }

    #[test]
    fn one_solar_mass_gives_solar_luminosity_with_warning() {
        let resolved = resolve(&solar_masses(1.0)).unwrap();
        assert_relative_eq!(resolved.luminosity.get::<watt>(), SOLAR_LUMINOSITY);
        assert!(matches!(
            resolved.warning,
            Some(Warning::MassLuminosityRange { .. })
        ));
    }

    #[test]
    fn red_dwarf_has_no_warning() {
        let resolved = resolve(&solar_masses(0.2)).unwrap();
        assert_relative_eq!(
            resolved.luminosity.get::<watt>(),
            SOLAR_LUMINOSITY * 0.2_f64.powf(2.3),
            max_relative = 1e-12
        );
        assert_eq!(resolved.warning, None);
    }

    #[test]
    fn half_solar_mass_is_within_range() {
        let resolved = resolve(&solar_masses(0.5)).unwrap();
        assert_eq!(resolved.warning, None);
    }

    #[test]
    fn direct_luminosity_passes_through() {
        let l = Power::new::<watt>(1.5e25);
        let resolved = resolve(&StellarInput::Luminosity(l)).unwrap();
        assert_eq!(resolved.luminosity, l);
        assert_eq!(resolved.warning, None);
    }

    #[test]
    fn radius_and_temperature_use_stefan_boltzmann() {
        let star = StellarInput::RadiusTemperature {
            radius: Length::new::<meter>(6.957e8),
            effective_temperature: ThermodynamicTemperature::new::<kelvin>(5772.0),
        };
        let resolved = resolve(&star).unwrap();
        assert_relative_eq!(
            resolved.luminosity.get::<watt>(),
            SOLAR_LUMINOSITY,
            max_relative = 1e-4
        );
    }

    #[test]
    fn non_positive_luminosity_is_rejected() {
        let zero = StellarInput::Luminosity(Power::new::<watt>(0.0));
        assert_eq!(
            resolve(&zero),
            Err(ParameterError::Luminosity { watts: 0.0 })
        );

        assert!(matches!(
            resolve(&solar_masses(-1.0)),
            Err(ParameterError::Luminosity { .. })
        ));

        let nan = StellarInput::Luminosity(Power::new::<watt>(f64::NAN));
        assert!(resolve(&nan).is_err());

        let inf = StellarInput::Luminosity(Power::new::<watt>(f64::INFINITY));
        assert!(resolve(&inf).is_err());
    }
}
