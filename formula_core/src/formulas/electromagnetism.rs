//! # Electromagnetism Formulas
//!
//! Electrostatics, DC circuits, capacitors and magnetism.
//!
//! ## Notation
//!
//! - `q`, `q1`, `q2` = charge (C), signed
//! - `r` = separation (m), always positive and non-zero
//! - `I` = current (A), `V` = potential difference (V), `R` = resistance (Ω)
//! - `B` = magnetic flux density (T)
//!
//! Coulomb's constant, ε₀ and μ₀ are defaults that callers may override.

use std::f64::consts::PI;

use super::{args, deg_to_rad, Formula, Subject};
use crate::constants::{COULOMB_K, EPSILON_0, MU_0};
use crate::validate::Param;

const COULOMB_CONSTANT: Param = Param::new("k", "Coulomb constant", "N·m²/C²")
    .positive()
    .default_value(COULOMB_K);
const PERMEABILITY: Param = Param::new("mu0", "Vacuum permeability", "N/A²")
    .positive()
    .default_value(MU_0);
const CHARGE: Param = Param::new("q", "Charge", "C");
const CHARGE_1: Param = Param::new("q1", "First charge", "C");
const CHARGE_2: Param = Param::new("q2", "Second charge", "C");
const SEPARATION: Param = Param::new("r", "Distance", "m").radial();
const CURRENT: Param = Param::new("I", "Current", "A");
const VOLTAGE: Param = Param::new("V", "Voltage", "V");
const RESISTANCE: Param = Param::new("R", "Resistance", "Ω").non_negative();
const CAPACITANCE: Param = Param::new("C", "Capacitance", "F").non_negative();
const FIELD: Param = Param::new("B", "Magnetic field", "T");
const ANGLE: Param = Param::new("theta", "Angle", "deg").default_value(90.0);

// =============================================================================
// ELECTROSTATICS
// =============================================================================

/// F = k q₁ q₂ / r²; positive means repulsion
#[inline]
pub fn coulombs_law(q1: f64, q2: f64, r: f64, k: f64) -> f64 {
    k * q1 * q2 / (r * r)
}

/// E = k q / r²
#[inline]
pub fn electric_field_point_charge(q: f64, r: f64, k: f64) -> f64 {
    k * q / (r * r)
}

/// V = k q / r
#[inline]
pub fn electric_potential_point_charge(q: f64, r: f64, k: f64) -> f64 {
    k * q / r
}

/// U = k q₁ q₂ / r
#[inline]
pub fn electric_potential_energy(q1: f64, q2: f64, r: f64, k: f64) -> f64 {
    k * q1 * q2 / r
}

// =============================================================================
// CIRCUITS
// =============================================================================

#[inline]
pub fn ohms_law_voltage(i: f64, r: f64) -> f64 {
    i * r
}

#[inline]
pub fn ohms_law_current(v: f64, r: f64) -> f64 {
    v / r
}

#[inline]
pub fn electric_power(v: f64, i: f64) -> f64 {
    v * i
}

/// P = I²R
#[inline]
pub fn joule_heating(i: f64, r: f64) -> f64 {
    i * i * r
}

#[inline]
pub fn resistance_series(r1: f64, r2: f64) -> f64 {
    r1 + r2
}

/// R = R₁R₂ / (R₁ + R₂); both resistors are positive so the sum cannot vanish
#[inline]
pub fn resistance_parallel(r1: f64, r2: f64) -> f64 {
    r1 * r2 / (r1 + r2)
}

/// R = ρL / A
#[inline]
pub fn resistivity_resistance(rho: f64, l: f64, a: f64) -> f64 {
    rho * l / a
}

// =============================================================================
// CAPACITORS
// =============================================================================

#[inline]
pub fn capacitance(q: f64, v: f64) -> f64 {
    q / v
}

/// C = ε₀ εᵣ A / d
#[inline]
pub fn parallel_plate_capacitance(epsilon_r: f64, a: f64, d: f64, epsilon_0: f64) -> f64 {
    epsilon_0 * epsilon_r * a / d
}

#[inline]
pub fn capacitor_energy(c: f64, v: f64) -> f64 {
    0.5 * c * v * v
}

/// τ = RC
#[inline]
pub fn rc_time_constant(r: f64, c: f64) -> f64 {
    r * c
}

// =============================================================================
// MAGNETISM
// =============================================================================

/// Lorentz force magnitude on a moving charge: F = qvB sinθ
#[inline]
pub fn magnetic_force_on_charge(q: f64, v: f64, b: f64, theta_deg: f64) -> f64 {
    q * v * b * deg_to_rad(theta_deg).sin()
}

/// F = BIL sinθ
#[inline]
pub fn magnetic_force_on_wire(b: f64, i: f64, l: f64, theta_deg: f64) -> f64 {
    b * i * l * deg_to_rad(theta_deg).sin()
}

/// B = μ₀ I / (2πr)
#[inline]
pub fn magnetic_field_straight_wire(i: f64, r: f64, mu0: f64) -> f64 {
    mu0 * i / (2.0 * PI * r)
}

/// B = μ₀ n I, with n in turns per metre
#[inline]
pub fn solenoid_field(n: f64, i: f64, mu0: f64) -> f64 {
    mu0 * n * i
}

/// ε = -N ΔΦ / Δt
#[inline]
pub fn faradays_law(turns: f64, delta_flux: f64, t: f64) -> f64 {
    -turns * delta_flux / t
}

/// r = mv / (|q| B)
///
/// Both `q` and `B` are declared non-zero; the radius is reported as a
/// magnitude.
#[inline]
pub fn cyclotron_radius(m: f64, v: f64, q: f64, b: f64) -> f64 {
    (m * v / (q * b)).abs()
}

/// Ideal transformer: Vₛ = Vₚ Nₛ / Nₚ
#[inline]
pub fn transformer_voltage(vp: f64, np: f64, ns: f64) -> f64 {
    vp * ns / np
}

pub static FORMULAS: &[Formula] = &[
    Formula {
        id: "coulombs-law",
        name: "Coulomb's Law",
        subject: Subject::Electromagnetism,
        topic: "electrostatics",
        equation: "F = k * q1 * q2 / r^2",
        description: "Electrostatic force between two point charges; positive values are repulsive.",
        params: &[CHARGE_1, CHARGE_2, SEPARATION, COULOMB_CONSTANT],
        evaluate: |x| {
            let [q1, q2, r, k] = args::<4>(x)?;
            Ok(coulombs_law(q1, q2, r, k).into())
        },
    },
    Formula {
        id: "electric-field-point-charge",
        name: "Electric Field of a Point Charge",
        subject: Subject::Electromagnetism,
        topic: "electrostatics",
        equation: "E = k * q / r^2",
        description: "Field strength at distance r from a point charge.",
        params: &[CHARGE, SEPARATION, COULOMB_CONSTANT],
        evaluate: |x| {
            let [q, r, k] = args::<3>(x)?;
            Ok(electric_field_point_charge(q, r, k).into())
        },
    },
    Formula {
        id: "electric-potential-point-charge",
        name: "Electric Potential of a Point Charge",
        subject: Subject::Electromagnetism,
        topic: "electrostatics",
        equation: "V = k * q / r",
        description: "Potential at distance r from a point charge, zero at infinity.",
        params: &[CHARGE, SEPARATION, COULOMB_CONSTANT],
        evaluate: |x| {
            let [q, r, k] = args::<3>(x)?;
            Ok(electric_potential_point_charge(q, r, k).into())
        },
    },
    Formula {
        id: "electric-potential-energy",
        name: "Electric Potential Energy",
        subject: Subject::Electromagnetism,
        topic: "electrostatics",
        equation: "U = k * q1 * q2 / r",
        description: "Potential energy of a pair of point charges.",
        params: &[CHARGE_1, CHARGE_2, SEPARATION, COULOMB_CONSTANT],
        evaluate: |x| {
            let [q1, q2, r, k] = args::<4>(x)?;
            Ok(electric_potential_energy(q1, q2, r, k).into())
        },
    },
    Formula {
        id: "ohms-law-voltage",
        name: "Ohm's Law (Voltage)",
        subject: Subject::Electromagnetism,
        topic: "circuits",
        equation: "V = I * R",
        description: "Potential difference across a resistor carrying a current.",
        params: &[CURRENT, RESISTANCE],
        evaluate: |x| {
            let [i, r] = args::<2>(x)?;
            Ok(ohms_law_voltage(i, r).into())
        },
    },
    Formula {
        id: "ohms-law-current",
        name: "Ohm's Law (Current)",
        subject: Subject::Electromagnetism,
        topic: "circuits",
        equation: "I = V / R",
        description: "Current through a resistor for a given potential difference.",
        params: &[VOLTAGE, Param::new("R", "Resistance", "Ω").radial()],
        evaluate: |x| {
            let [v, r] = args::<2>(x)?;
            Ok(ohms_law_current(v, r).into())
        },
    },
    Formula {
        id: "electric-power",
        name: "Electric Power",
        subject: Subject::Electromagnetism,
        topic: "circuits",
        equation: "P = V * I",
        description: "Power delivered to a circuit element.",
        params: &[VOLTAGE, CURRENT],
        evaluate: |x| {
            let [v, i] = args::<2>(x)?;
            Ok(electric_power(v, i).into())
        },
    },
    Formula {
        id: "joule-heating",
        name: "Joule Heating",
        subject: Subject::Electromagnetism,
        topic: "circuits",
        equation: "P = I^2 * R",
        description: "Power dissipated as heat in a resistor.",
        params: &[CURRENT, RESISTANCE],
        evaluate: |x| {
            let [i, r] = args::<2>(x)?;
            Ok(joule_heating(i, r).into())
        },
    },
    Formula {
        id: "resistance-series",
        name: "Resistors in Series",
        subject: Subject::Electromagnetism,
        topic: "circuits",
        equation: "R = R1 + R2",
        description: "Equivalent resistance of two resistors in series.",
        params: &[
            Param::new("R1", "First resistance", "Ω").non_negative(),
            Param::new("R2", "Second resistance", "Ω").non_negative(),
        ],
        evaluate: |x| {
            let [r1, r2] = args::<2>(x)?;
            Ok(resistance_series(r1, r2).into())
        },
    },
    Formula {
        id: "resistance-parallel",
        name: "Resistors in Parallel",
        subject: Subject::Electromagnetism,
        topic: "circuits",
        equation: "R = R1 * R2 / (R1 + R2)",
        description: "Equivalent resistance of two resistors in parallel.",
        params: &[
            Param::new("R1", "First resistance", "Ω").radial(),
            Param::new("R2", "Second resistance", "Ω").radial(),
        ],
        evaluate: |x| {
            let [r1, r2] = args::<2>(x)?;
            Ok(resistance_parallel(r1, r2).into())
        },
    },
    Formula {
        id: "resistivity-resistance",
        name: "Resistance From Resistivity",
        subject: Subject::Electromagnetism,
        topic: "circuits",
        equation: "R = rho * L / A",
        description: "Resistance of a uniform conductor.",
        params: &[
            Param::new("rho", "Resistivity", "Ω·m").non_negative(),
            Param::new("L", "Length", "m").non_negative(),
            Param::new("A", "Cross-sectional area", "m²").radial(),
        ],
        evaluate: |x| {
            let [rho, l, a] = args::<3>(x)?;
            Ok(resistivity_resistance(rho, l, a).into())
        },
    },
    Formula {
        id: "capacitance",
        name: "Capacitance",
        subject: Subject::Electromagnetism,
        topic: "capacitors",
        equation: "C = Q / V",
        description: "Charge stored per unit potential difference.",
        params: &[
            Param::new("Q", "Charge", "C"),
            Param::new("V", "Voltage", "V").non_zero(),
        ],
        evaluate: |x| {
            let [q, v] = args::<2>(x)?;
            Ok(capacitance(q, v).into())
        },
    },
    Formula {
        id: "parallel-plate-capacitance",
        name: "Parallel-Plate Capacitance",
        subject: Subject::Electromagnetism,
        topic: "capacitors",
        equation: "C = epsilon0 * epsilonR * A / d",
        description: "Capacitance of two parallel plates separated by a dielectric.",
        params: &[
            Param::new("epsilonR", "Relative permittivity", "").positive().default_value(1.0),
            Param::new("A", "Plate area", "m²").non_negative(),
            Param::new("d", "Plate separation", "m").radial(),
            Param::new("epsilon0", "Vacuum permittivity", "F/m")
                .positive()
                .default_value(EPSILON_0),
        ],
        evaluate: |x| {
            let [er, a, d, e0] = args::<4>(x)?;
            Ok(parallel_plate_capacitance(er, a, d, e0).into())
        },
    },
    Formula {
        id: "capacitor-energy",
        name: "Energy Stored in a Capacitor",
        subject: Subject::Electromagnetism,
        topic: "capacitors",
        equation: "E = 0.5 * C * V^2",
        description: "Electrostatic energy held by a charged capacitor.",
        params: &[CAPACITANCE, VOLTAGE],
        evaluate: |x| {
            let [c, v] = args::<2>(x)?;
            Ok(capacitor_energy(c, v).into())
        },
    },
    Formula {
        id: "rc-time-constant",
        name: "RC Time Constant",
        subject: Subject::Electromagnetism,
        topic: "capacitors",
        equation: "tau = R * C",
        description: "Characteristic charge/discharge time of an RC circuit.",
        params: &[RESISTANCE, CAPACITANCE],
        evaluate: |x| {
            let [r, c] = args::<2>(x)?;
            Ok(rc_time_constant(r, c).into())
        },
    },
    Formula {
        id: "magnetic-force-on-charge",
        name: "Magnetic Force on a Moving Charge",
        subject: Subject::Electromagnetism,
        topic: "magnetism",
        equation: "F = q * v * B * sin(theta)",
        description: "Magnetic part of the Lorentz force on a charge moving through a field.",
        params: &[CHARGE, Param::new("v", "Speed", "m/s").non_negative(), FIELD, ANGLE],
        evaluate: |x| {
            let [q, v, b, theta] = args::<4>(x)?;
            Ok(magnetic_force_on_charge(q, v, b, theta).into())
        },
    },
    Formula {
        id: "magnetic-force-on-wire",
        name: "Magnetic Force on a Current-Carrying Wire",
        subject: Subject::Electromagnetism,
        topic: "magnetism",
        equation: "F = B * I * L * sin(theta)",
        description: "Force on a straight wire in a uniform magnetic field.",
        params: &[FIELD, CURRENT, Param::new("L", "Wire length", "m").non_negative(), ANGLE],
        evaluate: |x| {
            let [b, i, l, theta] = args::<4>(x)?;
            Ok(magnetic_force_on_wire(b, i, l, theta).into())
        },
    },
    Formula {
        id: "magnetic-field-straight-wire",
        name: "Magnetic Field of a Straight Wire",
        subject: Subject::Electromagnetism,
        topic: "magnetism",
        equation: "B = mu0 * I / (2 * pi * r)",
        description: "Field at distance r from a long straight current.",
        params: &[CURRENT, SEPARATION, PERMEABILITY],
        evaluate: |x| {
            let [i, r, mu0] = args::<3>(x)?;
            Ok(magnetic_field_straight_wire(i, r, mu0).into())
        },
    },
    Formula {
        id: "solenoid-field",
        name: "Magnetic Field Inside a Solenoid",
        subject: Subject::Electromagnetism,
        topic: "magnetism",
        equation: "B = mu0 * n * I",
        description: "Uniform field inside a long solenoid with n turns per metre.",
        params: &[
            Param::new("n", "Turns per metre", "1/m").non_negative(),
            CURRENT,
            PERMEABILITY,
        ],
        evaluate: |x| {
            let [n, i, mu0] = args::<3>(x)?;
            Ok(solenoid_field(n, i, mu0).into())
        },
    },
    Formula {
        id: "faradays-law",
        name: "Faraday's Law of Induction",
        subject: Subject::Electromagnetism,
        topic: "induction",
        equation: "emf = -N * delta_phi / t",
        description: "EMF induced in a coil by a change in magnetic flux.",
        params: &[
            Param::new("N", "Number of turns", "").counting(),
            Param::new("deltaPhi", "Change in flux", "Wb"),
            Param::new("t", "Time", "s").radial(),
        ],
        evaluate: |x| {
            let [n, phi, t] = args::<3>(x)?;
            Ok(faradays_law(n, phi, t).into())
        },
    },
    Formula {
        id: "cyclotron-radius",
        name: "Cyclotron Radius",
        subject: Subject::Electromagnetism,
        topic: "magnetism",
        equation: "r = m * v / (|q| * B)",
        description: "Radius of the circular path of a charge moving perpendicular to a magnetic field.",
        params: &[
            Param::new("m", "Mass", "kg").non_negative(),
            Param::new("v", "Speed", "m/s").non_negative(),
            Param::new("q", "Charge", "C").non_zero(),
            Param::new("B", "Magnetic field", "T").non_zero(),
        ],
        evaluate: |x| {
            let [m, v, q, b] = args::<4>(x)?;
            Ok(cyclotron_radius(m, v, q, b).into())
        },
    },
    Formula {
        id: "transformer-voltage",
        name: "Ideal Transformer",
        subject: Subject::Electromagnetism,
        topic: "induction",
        equation: "Vs = Vp * Ns / Np",
        description: "Secondary voltage of an ideal transformer from the turns ratio.",
        params: &[
            Param::new("Vp", "Primary voltage", "V"),
            Param::new("Np", "Primary turns", "").counting(),
            Param::new("Ns", "Secondary turns", "").counting(),
        ],
        evaluate: |x| {
            let [vp, np, ns] = args::<3>(x)?;
            Ok(transformer_voltage(vp, np, ns).into())
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::test_util::approx_eq;

    #[test]
    fn test_coulomb_one_coulomb_one_metre() {
        assert!(approx_eq(coulombs_law(1.0, 1.0, 1.0, COULOMB_K), COULOMB_K));
        // Opposite charges attract
        assert!(coulombs_law(1.0, -1.0, 1.0, COULOMB_K) < 0.0);
    }

    #[test]
    fn test_point_charge_field_and_potential() {
        assert!(approx_eq(electric_field_point_charge(2.0, 2.0, 1.0), 0.5));
        assert!(approx_eq(electric_potential_point_charge(2.0, 2.0, 1.0), 1.0));
        assert!(approx_eq(electric_potential_energy(2.0, 3.0, 2.0, 1.0), 3.0));
    }

    #[test]
    fn test_circuits() {
        assert!(approx_eq(ohms_law_voltage(2.0, 5.0), 10.0));
        assert!(approx_eq(ohms_law_current(10.0, 5.0), 2.0));
        assert!(approx_eq(electric_power(12.0, 2.0), 24.0));
        assert!(approx_eq(joule_heating(2.0, 5.0), 20.0));
        assert!(approx_eq(resistance_series(4.0, 6.0), 10.0));
        assert!(approx_eq(resistance_parallel(4.0, 4.0), 2.0));
        // Copper, 1 m, 1 mm²
        assert!(approx_eq(resistivity_resistance(1.68e-8, 1.0, 1e-6), 0.0168));
    }

    #[test]
    fn test_capacitors() {
        assert!(approx_eq(capacitance(1e-3, 10.0), 1e-4));
        assert!(approx_eq(parallel_plate_capacitance(1.0, 1.0, 1.0, EPSILON_0), EPSILON_0));
        assert!(approx_eq(capacitor_energy(2.0, 3.0), 9.0));
        assert!(approx_eq(rc_time_constant(1000.0, 1e-3), 1.0));
    }

    #[test]
    fn test_magnetism() {
        assert!(approx_eq(magnetic_force_on_charge(1.0, 2.0, 3.0, 90.0), 6.0));
        assert!(magnetic_force_on_charge(1.0, 2.0, 3.0, 0.0).abs() < 1e-12);
        assert!(approx_eq(magnetic_force_on_wire(0.5, 2.0, 3.0, 90.0), 3.0));
        // 1 A at 1 m: 2e-7 T
        assert!((magnetic_field_straight_wire(1.0, 1.0, MU_0) - 2e-7).abs() < 1e-15);
        assert!(approx_eq(solenoid_field(1000.0, 1.0, 1.0), 1000.0));
    }

    #[test]
    fn test_induction() {
        assert!(approx_eq(faradays_law(100.0, 0.5, 2.0), -25.0));
        assert!(approx_eq(transformer_voltage(240.0, 100.0, 10.0), 24.0));
    }

    #[test]
    fn test_cyclotron_radius_is_magnitude() {
        let r = cyclotron_radius(2.0, 3.0, -1.0, 2.0);
        assert!(approx_eq(r, 3.0));
    }
}
