//! Stellar megastructure models.
//!
//! Structures that enclose a star to harvest its output, such as Dyson
//! swarms and their layered extension, the Matrioshka brain.

pub mod matrioshka;
