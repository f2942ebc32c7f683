//! # Matrioshka Models
//!
//! Models of nested stellar megastructures built on
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! A Matrioshka brain is a series of concentric shells around a star.
//! Each shell absorbs the radiation of the shell inside it, computes with it,
//! and re-radiates the waste heat outward at a lower temperature.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Physical constants, radiation relations, and numeric
//!   constraints used by the models.
//!
//! Only [`support`] and the model adapters are public.
//! Each model keeps its computation in a private `core` module.

pub mod models;
pub mod support;
