//! Lazy generation of the shell sequence.

use std::iter::FusedIterator;

use uom::si::{
    f64::{Length, Power, ThermodynamicTemperature},
    length::meter,
    thermodynamic_temperature::kelvin,
};

use crate::support::radiation::{carnot_efficiency, landauer_limit};

use super::{Columns, Shell, termination::LayerBound};

/// Iterator over the shells of a structure, innermost first.
///
/// Each shell's temperature and radius are the previous shell's values
/// multiplied by the decay factors. The sequence ends at the loop bound or,
/// with a target outer temperature, at the first shell at or below it.
/// It always yields at least the innermost shell and cannot be restarted.
#[derive(Debug, Clone)]
pub(super) struct ShellSequence {
    layer: usize,
    temperature: f64,
    radius: f64,
    temperature_factor: f64,
    radius_factor: f64,
    luminosity: Power,
    bound: LayerBound,
    columns: Columns,
    finished: bool,
}

impl ShellSequence {
    pub(super) fn new(
        inner_temperature: ThermodynamicTemperature,
        inner_radius: Length,
        temperature_factor: f64,
        radius_factor: f64,
        luminosity: Power,
        bound: LayerBound,
        columns: Columns,
    ) -> Self {
        Self {
            layer: 0,
            temperature: inner_temperature.get::<kelvin>(),
            radius: inner_radius.get::<meter>(),
            temperature_factor,
            radius_factor,
            luminosity,
            bound,
            columns,
            finished: false,
        }
    }
}

impl Iterator for ShellSequence {
    type Item = Shell;

    fn next(&mut self) -> Option<Shell> {
        if self.finished {
            return None;
        }

        let layer = self.layer;
        let temperature = ThermodynamicTemperature::new::<kelvin>(self.temperature);
        let has_successor = layer < self.bound.last_layer;
        let step_efficiency = carnot_efficiency(self.temperature_factor);

        let shell = Shell {
            layer,
            equilibrium_temperature: temperature,
            radius: Length::new::<meter>(self.radius),
            carnot: (self.columns.carnot && has_successor).then_some(step_efficiency),
            landauer: self.columns.landauer.then(|| landauer_limit(temperature)),
            exergy: (self.columns.exergy && has_successor)
                .then(|| self.luminosity * step_efficiency),
        };

        let reached_outer = self
            .bound
            .stop_at
            .is_some_and(|outer| self.temperature <= outer.get::<kelvin>());

        if reached_outer || !has_successor {
            self.finished = true;
        } else {
            self.temperature *= self.temperature_factor;
            self.radius *= self.radius_factor;
            self.layer += 1;
        }

        Some(shell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (1, Some(self.bound.last_layer - self.layer + 1))
        }
    }
}

impl FusedIterator for ShellSequence {}
