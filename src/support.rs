//! Supporting utilities used by models.
//!
//! These APIs are public because they are useful on their own,
//! but they are not stable.

pub mod constants;
pub mod constraint;
pub mod radiation;
