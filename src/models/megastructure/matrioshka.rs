//! Matrioshka brain models.
//!
//! [`MatrioshkaBrain`] implements [`twine_core::Model`] over the shell model
//! in the internal `core` module. The parameter-editing helpers
//! ([`ParameterSet`], [`apply_edit`]) are re-exported for front ends that let
//! users type parameters in before computing.
//!
//! ```
//! use matrioshka_models::models::megastructure::matrioshka::{
//!     MatrioshkaBrain, ParameterSet,
//! };
//! use twine_core::Model;
//!
//! let params = ParameterSet::default().to_shell_parameters()?;
//! let results = MatrioshkaBrain::default().call(&params)?;
//!
//! assert_eq!(results.total_layers(), 10);
//! # Ok::<(), matrioshka_models::models::megastructure::matrioshka::ParameterError>(())
//! ```

pub(crate) mod core;

use twine_core::Model;

pub use self::core::{
    ArchitectureDriver, Columns, Edit, EngineConfig, FlagField, LuminosityMethod,
    ParameterError, ParameterSet, Results, Shell, ShellParameters, StellarInput, Termination,
    TerminationCriterion, TextField, UnknownField, Warning, apply_edit, compute,
};

/// Shell model of a star enclosed by nested shells in radiative equilibrium.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatrioshkaBrain {
    config: EngineConfig,
}

impl MatrioshkaBrain {
    /// Creates a model with the given engine limits.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Engine limits applied to every call.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Model for MatrioshkaBrain {
    type Input = ShellParameters;
    type Output = Results;
    type Error = ParameterError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        compute(input, &self.config)
    }
}
