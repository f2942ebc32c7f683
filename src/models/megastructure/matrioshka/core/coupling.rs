//! Coupling between the decay factors and absorptivity.
//!
//! For shells in radiative equilibrium the temperature and radius factors
//! are linked through absorptivity by `f_r · f_T² = √α`. One factor is the
//! driver the user sets; after every relevant edit the other is re-derived.
//!
//! The derived factor is written back as text rounded to four decimals, and
//! that rounded text is what later computations parse.

use std::str::FromStr;

use super::{
    ArchitectureDriver, LuminosityMethod, ParameterSet, TerminationCriterion, UnknownField,
    params::parse_finite,
};

/// Editable text fields of a [`ParameterSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    StarMass,
    StarRadius,
    StarTeff,
    StarLuminosity,
    Alpha,
    Epsilon,
    InnerTemperature,
    TemperatureFactor,
    RadiusFactor,
    OuterTemperature,
    MaxLayers,
}

impl TextField {
    /// External name of the field.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::StarMass => "starMass",
            Self::StarRadius => "starRadius",
            Self::StarTeff => "starTeff",
            Self::StarLuminosity => "starLuminosity",
            Self::Alpha => "alpha",
            Self::Epsilon => "epsilon",
            Self::InnerTemperature => "T_inner",
            Self::TemperatureFactor => "f_T",
            Self::RadiusFactor => "f_r",
            Self::OuterTemperature => "T_outer",
            Self::MaxLayers => "N_max",
        }
    }

    const ALL: [Self; 11] = [
        Self::StarMass,
        Self::StarRadius,
        Self::StarTeff,
        Self::StarLuminosity,
        Self::Alpha,
        Self::Epsilon,
        Self::InnerTemperature,
        Self::TemperatureFactor,
        Self::RadiusFactor,
        Self::OuterTemperature,
        Self::MaxLayers,
    ];

    fn slot(self, params: &mut ParameterSet) -> &mut String {
        match self {
            Self::StarMass => &mut params.star_mass,
            Self::StarRadius => &mut params.star_radius,
            Self::StarTeff => &mut params.star_teff,
            Self::StarLuminosity => &mut params.star_luminosity,
            Self::Alpha => &mut params.alpha,
            Self::Epsilon => &mut params.epsilon,
            Self::InnerTemperature => &mut params.inner_temperature,
            Self::TemperatureFactor => &mut params.temperature_factor,
            Self::RadiusFactor => &mut params.radius_factor,
            Self::OuterTemperature => &mut params.outer_temperature,
            Self::MaxLayers => &mut params.max_layers,
        }
    }
}

impl FromStr for TextField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_owned()))
    }
}

/// Editable boolean fields of a [`ParameterSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagField {
    SameAlphaEpsilon,
    ShowCarnot,
    ShowLandauer,
    ShowExergy,
}

impl FlagField {
    /// External name of the field.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::SameAlphaEpsilon => "sameAlphaEpsilon",
            Self::ShowCarnot => "showCarnot",
            Self::ShowLandauer => "showLandauer",
            Self::ShowExergy => "showExergy",
        }
    }
}

impl FromStr for FlagField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::SameAlphaEpsilon,
            Self::ShowCarnot,
            Self::ShowLandauer,
            Self::ShowExergy,
        ]
        .into_iter()
        .find(|field| field.name() == s)
        .ok_or_else(|| UnknownField(s.to_owned()))
    }
}

/// A single user edit: the field changed and its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Text(TextField, String),
    Flag(FlagField, bool),
    LuminosityMethod(LuminosityMethod),
    TerminationCriterion(TerminationCriterion),
    ArchitectureDriver(ArchitectureDriver),
}

impl ArchitectureDriver {
    /// Derives the dependent factor from absorptivity and the driving factor.
    ///
    /// Returns `None` when the inputs are outside the range where the
    /// relation applies: `α > 0`, and `0 < f_T < 1` or `f_r > 1`.
    #[must_use]
    pub fn derive(self, alpha: f64, driving_factor: f64) -> Option<f64> {
        if !(alpha.is_finite() && alpha > 0.0 && driving_factor.is_finite()) {
            return None;
        }
        match self {
            Self::Temp => (driving_factor > 0.0 && driving_factor < 1.0)
                .then(|| alpha.sqrt() / (driving_factor * driving_factor)),
            Self::Radius => {
                (driving_factor > 1.0).then(|| alpha.powf(0.25) / driving_factor.sqrt())
            }
        }
    }

    /// The field this driver controls.
    #[must_use]
    pub fn driving_field(self) -> TextField {
        match self {
            Self::Temp => TextField::TemperatureFactor,
            Self::Radius => TextField::RadiusFactor,
        }
    }

    /// The field derived from the driving one.
    #[must_use]
    pub fn dependent_field(self) -> TextField {
        match self {
            Self::Temp => TextField::RadiusFactor,
            Self::Radius => TextField::TemperatureFactor,
        }
    }
}

/// Applies a user edit and restores the coupling between dependent fields.
///
/// Besides the edited field, at most the dependent decay factor changes,
/// plus `epsilon` when it is locked to `alpha`:
///
/// - Editing `f_T` re-derives `f_r`, and editing `f_r` re-derives `f_T`.
/// - Editing `alpha` re-derives the factor dependent on the selected driver.
/// - Selecting a driver re-derives the factor it makes dependent.
/// - While `sameAlphaEpsilon` is set, `epsilon` follows `alpha`; turning it
///   on copies `alpha` into `epsilon`.
///
/// A factor is left unchanged when its inputs do not parse to values in range.
#[must_use]
pub fn apply_edit(current: &ParameterSet, edit: Edit) -> ParameterSet {
    let mut next = current.clone();

    let driver = match &edit {
        Edit::Text(TextField::TemperatureFactor, _) => Some(ArchitectureDriver::Temp),
        Edit::Text(TextField::RadiusFactor, _) => Some(ArchitectureDriver::Radius),
        Edit::Text(TextField::Alpha, _) => Some(current.architecture_driver),
        Edit::ArchitectureDriver(driver) => Some(*driver),
        _ => None,
    };

    match edit {
        Edit::Text(TextField::Alpha, value) => {
            if next.same_alpha_epsilon {
                next.epsilon.clone_from(&value);
            }
            next.alpha = value;
        }
        Edit::Text(field, value) => *field.slot(&mut next) = value,
        Edit::Flag(FlagField::SameAlphaEpsilon, on) => {
            next.same_alpha_epsilon = on;
            if on {
                next.epsilon.clone_from(&next.alpha);
            }
        }
        Edit::Flag(FlagField::ShowCarnot, on) => next.show_carnot = on,
        Edit::Flag(FlagField::ShowLandauer, on) => next.show_landauer = on,
        Edit::Flag(FlagField::ShowExergy, on) => next.show_exergy = on,
        Edit::LuminosityMethod(method) => next.luminosity_method = method,
        Edit::TerminationCriterion(criterion) => next.termination_criterion = criterion,
        Edit::ArchitectureDriver(driver) => next.architecture_driver = driver,
    }

    if let Some(driver) = driver {
        couple(&mut next, driver);
    }

    next
}

/// Overwrites the factor dependent on `driver`, if it can be derived.
fn couple(params: &mut ParameterSet, driver: ArchitectureDriver) {
    let Some(alpha) = parse_finite(&params.alpha) else {
        return;
    };
    let Some(driving) = parse_finite(driver.driving_field().slot(params)) else {
        return;
    };
    let Some(derived) = driver.derive(alpha, driving) else {
        return;
    };

    let field = driver.dependent_field();
    let text = format!("{derived:.4}");
    log::trace!("{} derived as {text} from alpha={alpha}", field.name());
    *field.slot(params) = text;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit_text(params: &ParameterSet, field: TextField, value: &str) -> ParameterSet {
        apply_edit(params, Edit::Text(field, value.to_owned()))
    }

    #[test]
    fn temperature_driver_derives_radius_factor() {
        let params = ParameterSet {
            alpha: "0.5".into(),
            architecture_driver: ArchitectureDriver::Temp,
            ..ParameterSet::default()
        };

        let next = edit_text(&params, TextField::TemperatureFactor, "0.5");

        assert_eq!(next.temperature_factor, "0.5");
        assert_eq!(next.radius_factor, "2.8284");
    }

    #[test]
    fn editing_radius_factor_derives_temperature_factor() {
        let params = ParameterSet {
            alpha: "1".into(),
            ..ParameterSet::default()
        };

        let next = edit_text(&params, TextField::RadiusFactor, "4");

        // 1^0.25 / √4
        assert_eq!(next.temperature_factor, "0.5000");
        assert_eq!(next.radius_factor, "4");
    }

    #[test]
    fn editing_a_factor_overrides_the_selected_driver() {
        let params = ParameterSet {
            alpha: "1".into(),
            architecture_driver: ArchitectureDriver::Radius,
            ..ParameterSet::default()
        };

        let next = edit_text(&params, TextField::TemperatureFactor, "0.25");

        assert_eq!(next.radius_factor, "16.0000");
        assert_eq!(next.architecture_driver, ArchitectureDriver::Radius);
    }

    #[test]
    fn editing_alpha_uses_selected_driver() {
        let params = ParameterSet::default();

        let next = edit_text(&params, TextField::Alpha, "0.81");

        // Radius driver with f_r = 4.00: 0.81^0.25 / 2
        assert_eq!(next.temperature_factor, "0.4743");
        assert_eq!(next.radius_factor, "4.00");
        // Locked by default.
        assert_eq!(next.epsilon, "0.81");
    }

    #[test]
    fn unlocked_epsilon_is_independent() {
        let params = ParameterSet {
            same_alpha_epsilon: false,
            epsilon: "0.7".into(),
            ..ParameterSet::default()
        };

        let next = edit_text(&params, TextField::Alpha, "0.5");
        assert_eq!(next.epsilon, "0.7");
    }

    #[test]
    fn locking_copies_alpha_into_epsilon() {
        let params = ParameterSet {
            alpha: "0.6".into(),
            epsilon: "0.9".into(),
            same_alpha_epsilon: false,
            ..ParameterSet::default()
        };

        let locked = apply_edit(&params, Edit::Flag(FlagField::SameAlphaEpsilon, true));
        assert!(locked.same_alpha_epsilon);
        assert_eq!(locked.epsilon, "0.6");

        let unlocked = apply_edit(&locked, Edit::Flag(FlagField::SameAlphaEpsilon, false));
        assert!(!unlocked.same_alpha_epsilon);
        assert_eq!(unlocked.epsilon, "0.6");
    }

    #[test]
    fn selecting_driver_recomputes_dependent_factor() {
        let params = ParameterSet {
            alpha: "1".into(),
            temperature_factor: "0.5".into(),
            radius_factor: "9".into(),
            ..ParameterSet::default()
        };

        let next = apply_edit(&params, Edit::ArchitectureDriver(ArchitectureDriver::Temp));
        assert_eq!(next.architecture_driver, ArchitectureDriver::Temp);
        assert_eq!(next.radius_factor, "4.0000");
        assert_eq!(next.temperature_factor, "0.5");
    }

    #[test]
    fn out_of_range_driver_leaves_dependent_unchanged() {
        let params = ParameterSet::default();

        let next = edit_text(&params, TextField::TemperatureFactor, "1.5");
        assert_eq!(next.temperature_factor, "1.5");
        assert_eq!(next.radius_factor, "4.00");

        let next = edit_text(&params, TextField::RadiusFactor, "0.9");
        assert_eq!(next.temperature_factor, "0.50");
    }

    #[test]
    fn malformed_text_disables_recompute() {
        let params = ParameterSet::default();

        let next = edit_text(&params, TextField::TemperatureFactor, "0.");
        // "0." parses as zero, which is out of range.
        assert_eq!(next.radius_factor, "4.00");

        let next = edit_text(&params, TextField::TemperatureFactor, "abc");
        assert_eq!(next.temperature_factor, "abc");
        assert_eq!(next.radius_factor, "4.00");

        let next = edit_text(&params, TextField::Alpha, "-");
        assert_eq!(next.alpha, "-");
        assert_eq!(next.temperature_factor, "0.50");
    }

    #[test]
    fn unrelated_edits_pass_through() {
        let params = ParameterSet::default();

        let next = edit_text(&params, TextField::OuterTemperature, "10");
        assert_eq!(next.outer_temperature, "10");
        assert_eq!(
            ParameterSet {
                outer_temperature: "10".into(),
                ..params.clone()
            },
            next
        );

        let next = apply_edit(&params, Edit::Flag(FlagField::ShowCarnot, true));
        assert!(next.show_carnot);

        let next = apply_edit(
            &params,
            Edit::TerminationCriterion(TerminationCriterion::Layers),
        );
        assert_eq!(next.termination_criterion, TerminationCriterion::Layers);
        assert_eq!(next.temperature_factor, params.temperature_factor);
    }

    #[test]
    fn derived_text_reparses_to_rounded_value() {
        let params = ParameterSet {
            alpha: "0.5".into(),
            ..ParameterSet::default()
        };
        let next = edit_text(&params, TextField::TemperatureFactor, "0.5");
        let numeric = next.to_shell_parameters().unwrap();
        assert_eq!(numeric.radius_factor, 2.8284);
    }

    #[test]
    fn field_names_round_trip() {
        for field in TextField::ALL {
            assert_eq!(field.name().parse::<TextField>(), Ok(field));
        }
        assert_eq!("showExergy".parse::<FlagField>(), Ok(FlagField::ShowExergy));
        assert_eq!(
            "f_x".parse::<TextField>(),
            Err(UnknownField("f_x".to_owned()))
        );
    }

    #[test]
    fn derive_guards() {
        assert_eq!(ArchitectureDriver::Temp.derive(0.0, 0.5), None);
        assert_eq!(ArchitectureDriver::Temp.derive(1.0, 1.0), None);
        assert_eq!(ArchitectureDriver::Radius.derive(1.0, 1.0), None);
        assert_eq!(ArchitectureDriver::Radius.derive(f64::NAN, 4.0), None);
        assert_eq!(ArchitectureDriver::Radius.derive(1.0, 4.0), Some(0.5));
    }
}
