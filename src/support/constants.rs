//! Physical and astronomical constants, in SI units.

/// Stefan–Boltzmann constant, W·m⁻²·K⁻⁴ (CODATA 2018, exact).
pub const STEFAN_BOLTZMANN: f64 = 5.670_374_419e-8;

/// Boltzmann constant, J/K (exact since the 2019 SI redefinition).
pub const BOLTZMANN: f64 = 1.380_649e-23;

/// Nominal solar luminosity, W (IAU 2015 Resolution B3).
pub const SOLAR_LUMINOSITY: f64 = 3.828e26;

/// Solar mass, kg.
pub const SOLAR_MASS: f64 = 1.988_47e30;

/// Nominal solar radius, m (IAU 2015 Resolution B3).
pub const SOLAR_RADIUS: f64 = 6.957e8;

/// Astronomical unit, m (IAU 2012, exact).
pub const ASTRONOMICAL_UNIT: f64 = 1.495_978_707e11;
