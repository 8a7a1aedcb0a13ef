//! # Gravitation Formulas
//!
//! Newtonian gravity and circular orbits. Every law here has a radial
//! term, so the separation `r` is always declared positive and non-zero.
//! The gravitational constant `G` may be overridden by the caller (useful
//! for normalised units) but defaults to CODATA 2018.

use std::f64::consts::PI;

use super::{args, Formula, Subject};
use crate::constants::{C, G};
use crate::validate::Param;

const GRAV_CONSTANT: Param = Param::new("G", "Gravitational constant", "m³/(kg·s²)")
    .positive()
    .default_value(G);
const SEPARATION: Param = Param::new("r", "Distance between centres", "m").radial();
const ORBIT_RADIUS: Param = Param::new("r", "Orbital radius", "m").radial();
const CENTRAL_MASS: Param = Param::new("M", "Central mass", "kg").non_negative();
const ORBITING_MASS: Param = Param::new("m", "Orbiting mass", "kg").non_negative();
const LIGHT_SPEED: Param = Param::new("c", "Speed of light", "m/s").radial().default_value(C);

/// F = G m₁ m₂ / r²
#[inline]
pub fn universal_gravitation(m1: f64, m2: f64, r: f64, g: f64) -> f64 {
    g * m1 * m2 / (r * r)
}

/// g = GM / r²
#[inline]
pub fn gravitational_field_strength(m: f64, r: f64, g: f64) -> f64 {
    g * m / (r * r)
}

/// U = -GMm / r
#[inline]
pub fn orbital_potential_energy(big_m: f64, m: f64, r: f64, g: f64) -> f64 {
    -g * big_m * m / r
}

/// v_esc = √(2GM / r)
#[inline]
pub fn escape_velocity(m: f64, r: f64, g: f64) -> f64 {
    (2.0 * g * m / r).sqrt()
}

/// v = √(GM / r)
#[inline]
pub fn orbital_velocity(m: f64, r: f64, g: f64) -> f64 {
    (g * m / r).sqrt()
}

/// Kepler's third law: T = 2π √(r³ / GM)
#[inline]
pub fn orbital_period(m: f64, r: f64, g: f64) -> f64 {
    2.0 * PI * (r.powi(3) / (g * m)).sqrt()
}

/// r_s = 2GM / c²
#[inline]
pub fn schwarzschild_radius(m: f64, g: f64, c: f64) -> f64 {
    2.0 * g * m / (c * c)
}

pub static FORMULAS: &[Formula] = &[
    Formula {
        id: "universal-gravitation",
        name: "Newton's Law of Universal Gravitation",
        subject: Subject::Gravitation,
        topic: "newtonian gravity",
        equation: "F = G * m1 * m2 / r^2",
        description: "Attractive force between two point masses.",
        params: &[
            Param::new("m1", "First mass", "kg").non_negative(),
            Param::new("m2", "Second mass", "kg").non_negative(),
            SEPARATION,
            GRAV_CONSTANT,
        ],
        evaluate: |x| {
            let [m1, m2, r, g] = args::<4>(x)?;
            Ok(universal_gravitation(m1, m2, r, g).into())
        },
    },
    Formula {
        id: "gravitational-field-strength",
        name: "Gravitational Field Strength",
        subject: Subject::Gravitation,
        topic: "newtonian gravity",
        equation: "g = G * M / r^2",
        description: "Gravitational acceleration at distance r from a spherical mass.",
        params: &[CENTRAL_MASS, SEPARATION, GRAV_CONSTANT],
        evaluate: |x| {
            let [m, r, g] = args::<3>(x)?;
            Ok(gravitational_field_strength(m, r, g).into())
        },
    },
    Formula {
        id: "orbital-potential-energy",
        name: "Gravitational Potential Energy (Two Bodies)",
        subject: Subject::Gravitation,
        topic: "newtonian gravity",
        equation: "U = -G * M * m / r",
        description: "Potential energy of two masses, zero at infinite separation.",
        params: &[CENTRAL_MASS, ORBITING_MASS, SEPARATION, GRAV_CONSTANT],
        evaluate: |x| {
            let [big_m, m, r, g] = args::<4>(x)?;
            Ok(orbital_potential_energy(big_m, m, r, g).into())
        },
    },
    Formula {
        id: "escape-velocity",
        name: "Escape Velocity",
        subject: Subject::Gravitation,
        topic: "orbits",
        equation: "v = sqrt(2 * G * M / r)",
        description: "Minimum launch speed to escape a body's gravity without further propulsion.",
        params: &[CENTRAL_MASS, ORBIT_RADIUS, GRAV_CONSTANT],
        evaluate: |x| {
            let [m, r, g] = args::<3>(x)?;
            Ok(escape_velocity(m, r, g).into())
        },
    },
    Formula {
        id: "orbital-velocity",
        name: "Circular Orbital Velocity",
        subject: Subject::Gravitation,
        topic: "orbits",
        equation: "v = sqrt(G * M / r)",
        description: "Speed of a circular orbit at radius r.",
        params: &[CENTRAL_MASS, ORBIT_RADIUS, GRAV_CONSTANT],
        evaluate: |x| {
            let [m, r, g] = args::<3>(x)?;
            Ok(orbital_velocity(m, r, g).into())
        },
    },
    Formula {
        id: "orbital-period",
        name: "Orbital Period (Kepler's Third Law)",
        subject: Subject::Gravitation,
        topic: "orbits",
        equation: "T = 2 * pi * sqrt(r^3 / (G * M))",
        description: "Time for one circular orbit around a central mass.",
        params: &[
            Param::new("M", "Central mass", "kg").radial(),
            ORBIT_RADIUS,
            GRAV_CONSTANT,
        ],
        evaluate: |x| {
            let [m, r, g] = args::<3>(x)?;
            Ok(orbital_period(m, r, g).into())
        },
    },
    Formula {
        id: "schwarzschild-radius",
        name: "Schwarzschild Radius",
        subject: Subject::Gravitation,
        topic: "black holes",
        equation: "r_s = 2 * G * M / c^2",
        description: "Event-horizon radius of a non-rotating black hole of mass M.",
        params: &[CENTRAL_MASS, GRAV_CONSTANT, LIGHT_SPEED],
        evaluate: |x| {
            let [m, g, c] = args::<3>(x)?;
            Ok(schwarzschild_radius(m, g, c).into())
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::test_util::approx_eq;

    const EARTH_MASS: f64 = 5.972e24;
    const EARTH_RADIUS: f64 = 6.371e6;

    #[test]
    fn test_surface_gravity() {
        let g = gravitational_field_strength(EARTH_MASS, EARTH_RADIUS, G);
        assert!((g - 9.82).abs() < 0.01, "g = {}", g);
    }

    #[test]
    fn test_universal_gravitation_unit_masses() {
        assert!(approx_eq(universal_gravitation(1.0, 1.0, 1.0, G), G));
        assert!(approx_eq(universal_gravitation(2.0, 3.0, 2.0, 1.0), 1.5));
    }

    #[test]
    fn test_orbits() {
        let v_esc = escape_velocity(EARTH_MASS, EARTH_RADIUS, G);
        assert!((v_esc - 11_186.0).abs() < 5.0, "v_esc = {}", v_esc);
        let v_orb = orbital_velocity(EARTH_MASS, EARTH_RADIUS, G);
        assert!(approx_eq(v_esc / v_orb, 2f64.sqrt()));
        // Unit system with GM = 1, r = 1: T = 2π
        assert!(approx_eq(orbital_period(1.0, 1.0, 1.0), 2.0 * PI));
    }

    #[test]
    fn test_potential_energy_negative() {
        assert!(approx_eq(orbital_potential_energy(2.0, 3.0, 6.0, 1.0), -1.0));
    }

    #[test]
    fn test_schwarzschild_radius_of_sun() {
        let rs = schwarzschild_radius(1.989e30, G, C);
        assert!((rs - 2954.0).abs() < 5.0, "r_s = {}", rs);
    }
}
