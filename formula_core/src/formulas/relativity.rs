//! # Special Relativity Formulas
//!
//! All formulas take the speed of light as parameter `c` (default
//! [`C`](crate::constants::C)) so callers can work in natural units.
//!
//! ## Limiting Cases
//!
//! | Input | Result |
//! |-------|--------|
//! | `\|v\| > c` | `ExceedsSpeedOfLight` error |
//! | `\|v\| == c`, massive particle | `Infinity` (signed for momentum) |
//! | `\|v\| == c`, length contraction | `0` |
//! | `m == 0` in mass-based formulas | `NotApplicable`, pointing at `energy-momentum-massless` when `\|v\| == c` |

use super::{args, Formula, Subject};
use crate::constants::C;
use crate::errors::{FormulaError, FormulaResult};
use crate::validate::Param;

const VELOCITY: Param = Param::new("v", "Velocity", "m/s");
const FRAME_VELOCITY: Param = Param::new("u", "Velocity", "m/s");
const LIGHT_SPEED: Param = Param::new("c", "Speed of light", "m/s").radial().default_value(C);
const REST_MASS: Param = Param::new("m", "Rest mass", "kg").non_negative();

/// Where a speed sits relative to c
#[derive(Debug, Clone, Copy, PartialEq)]
enum Regime {
    /// |v| < c, carries γ
    Subluminal(f64),
    /// |v| == c
    Luminal,
}

fn regime(v: f64, c: f64, param: &Param) -> FormulaResult<Regime> {
    let speed = v.abs();
    if speed > c {
        return Err(FormulaError::exceeds_light_speed(param.key, param.label));
    }
    if speed == c {
        return Ok(Regime::Luminal);
    }
    let beta = v / c;
    Ok(Regime::Subluminal(1.0 / (1.0 - beta * beta).sqrt()))
}

/// Mass-based formulas are meaningless for massless particles
fn require_mass(m: f64, regime: Regime) -> FormulaResult<()> {
    if m != 0.0 {
        return Ok(());
    }
    Err(FormulaError::not_applicable(match regime {
        Regime::Luminal => {
            "Massless particles at the speed of light: use energy-momentum-massless (E = p * c) instead."
        }
        Regime::Subluminal(_) => {
            "Rest mass (m) must be positive; massless particles only travel at the speed of light."
        }
    }))
}

// =============================================================================
// KINEMATICS
// =============================================================================

/// γ = 1 / √(1 - v²/c²)
pub fn lorentz_factor(v: f64, c: f64) -> FormulaResult<f64> {
    Ok(match regime(v, c, &VELOCITY)? {
        Regime::Subluminal(gamma) => gamma,
        Regime::Luminal => f64::INFINITY,
    })
}

/// Δt = γ Δt₀
pub fn time_dilation(t0: f64, v: f64, c: f64) -> FormulaResult<f64> {
    Ok(match regime(v, c, &VELOCITY)? {
        Regime::Subluminal(gamma) => gamma * t0,
        Regime::Luminal => f64::INFINITY,
    })
}

/// L = L₀ / γ
pub fn length_contraction(l0: f64, v: f64, c: f64) -> FormulaResult<f64> {
    Ok(match regime(v, c, &VELOCITY)? {
        Regime::Subluminal(gamma) => l0 / gamma,
        Regime::Luminal => 0.0,
    })
}

/// w = (u + v) / (1 + uv/c²)
pub fn velocity_addition(u: f64, v: f64, c: f64) -> FormulaResult<f64> {
    regime(u, c, &FRAME_VELOCITY)?;
    regime(v, c, &VELOCITY)?;
    let denominator = 1.0 + u * v / (c * c);
    if denominator == 0.0 {
        return Err(FormulaError::singularity(
            "Velocities (u, v) are equal and opposite at the speed of light; the combined velocity is undefined.",
        ));
    }
    Ok((u + v) / denominator)
}

// =============================================================================
// DYNAMICS
// =============================================================================

/// p = γmv
pub fn relativistic_momentum(m: f64, v: f64, c: f64) -> FormulaResult<f64> {
    let regime = regime(v, c, &VELOCITY)?;
    require_mass(m, regime)?;
    Ok(match regime {
        Regime::Subluminal(gamma) => gamma * m * v,
        Regime::Luminal => f64::INFINITY.copysign(v),
    })
}

/// E = γmc²
pub fn relativistic_energy(m: f64, v: f64, c: f64) -> FormulaResult<f64> {
    let regime = regime(v, c, &VELOCITY)?;
    require_mass(m, regime)?;
    Ok(match regime {
        Regime::Subluminal(gamma) => gamma * m * c * c,
        Regime::Luminal => f64::INFINITY,
    })
}

/// K = (γ - 1)mc²
pub fn relativistic_kinetic_energy(m: f64, v: f64, c: f64) -> FormulaResult<f64> {
    let regime = regime(v, c, &VELOCITY)?;
    require_mass(m, regime)?;
    Ok(match regime {
        Regime::Subluminal(gamma) => (gamma - 1.0) * m * c * c,
        Regime::Luminal => f64::INFINITY,
    })
}

/// E = mc²
#[inline]
pub fn mass_energy_equivalence(m: f64, c: f64) -> f64 {
    m * c * c
}

/// E = pc for massless particles
#[inline]
pub fn energy_momentum_massless(p: f64, c: f64) -> f64 {
    p * c
}

/// E² = (pc)² + (mc²)²
#[inline]
pub fn energy_momentum_relation(p: f64, m: f64, c: f64) -> f64 {
    (p * c).hypot(m * c * c)
}

pub static FORMULAS: &[Formula] = &[
    Formula {
        id: "lorentz-factor",
        name: "Lorentz Factor",
        subject: Subject::Relativity,
        topic: "kinematics",
        equation: "gamma = 1 / sqrt(1 - v^2 / c^2)",
        description: "Relativistic scale factor for time, length and mass at speed v.",
        params: &[VELOCITY, LIGHT_SPEED],
        evaluate: |x| {
            let [v, c] = args::<2>(x)?;
            Ok(lorentz_factor(v, c)?.into())
        },
    },
    Formula {
        id: "time-dilation",
        name: "Time Dilation",
        subject: Subject::Relativity,
        topic: "kinematics",
        equation: "t = gamma * t0",
        description: "Interval measured by an observer for a clock moving at speed v.",
        params: &[Param::new("t0", "Proper time", "s").positive(), VELOCITY, LIGHT_SPEED],
        evaluate: |x| {
            let [t0, v, c] = args::<3>(x)?;
            Ok(time_dilation(t0, v, c)?.into())
        },
    },
    Formula {
        id: "length-contraction",
        name: "Length Contraction",
        subject: Subject::Relativity,
        topic: "kinematics",
        equation: "L = L0 / gamma",
        description: "Length of a moving object measured along its direction of motion.",
        params: &[Param::new("L0", "Proper length", "m").non_negative(), VELOCITY, LIGHT_SPEED],
        evaluate: |x| {
            let [l0, v, c] = args::<3>(x)?;
            Ok(length_contraction(l0, v, c)?.into())
        },
    },
    Formula {
        id: "relativistic-momentum",
        name: "Relativistic Momentum",
        subject: Subject::Relativity,
        topic: "dynamics",
        equation: "p = gamma * m * v",
        description: "Momentum of a massive particle at relativistic speed.",
        params: &[REST_MASS, VELOCITY, LIGHT_SPEED],
        evaluate: |x| {
            let [m, v, c] = args::<3>(x)?;
            Ok(relativistic_momentum(m, v, c)?.into())
        },
    },
    Formula {
        id: "relativistic-energy",
        name: "Total Relativistic Energy",
        subject: Subject::Relativity,
        topic: "dynamics",
        equation: "E = gamma * m * c^2",
        description: "Total energy (rest plus kinetic) of a massive particle.",
        params: &[REST_MASS, VELOCITY, LIGHT_SPEED],
        evaluate: |x| {
            let [m, v, c] = args::<3>(x)?;
            Ok(relativistic_energy(m, v, c)?.into())
        },
    },
    Formula {
        id: "relativistic-kinetic-energy",
        name: "Relativistic Kinetic Energy",
        subject: Subject::Relativity,
        topic: "dynamics",
        equation: "K = (gamma - 1) * m * c^2",
        description: "Kinetic energy of a massive particle at relativistic speed.",
        params: &[REST_MASS, VELOCITY, LIGHT_SPEED],
        evaluate: |x| {
            let [m, v, c] = args::<3>(x)?;
            Ok(relativistic_kinetic_energy(m, v, c)?.into())
        },
    },
    Formula {
        id: "mass-energy-equivalence",
        name: "Mass-Energy Equivalence",
        subject: Subject::Relativity,
        topic: "energy",
        equation: "E = m * c^2",
        description: "Rest energy of a mass.",
        params: &[REST_MASS, LIGHT_SPEED],
        evaluate: |x| {
            let [m, c] = args::<2>(x)?;
            Ok(mass_energy_equivalence(m, c).into())
        },
    },
    Formula {
        id: "relativistic-velocity-addition",
        name: "Relativistic Velocity Addition",
        subject: Subject::Relativity,
        topic: "kinematics",
        equation: "w = (u + v) / (1 + u * v / c^2)",
        description: "Combined velocity of an object moving at v in a frame that itself moves at u.",
        params: &[
            FRAME_VELOCITY,
            Param::new("v", "Velocity", "m/s"),
            LIGHT_SPEED,
        ],
        evaluate: |x| {
            let [u, v, c] = args::<3>(x)?;
            Ok(velocity_addition(u, v, c)?.into())
        },
    },
    Formula {
        id: "energy-momentum-massless",
        name: "Energy of a Massless Particle",
        subject: Subject::Relativity,
        topic: "energy",
        equation: "E = p * c",
        description: "Energy of a photon or other massless particle from its momentum.",
        params: &[Param::new("p", "Momentum", "kg·m/s").non_negative(), LIGHT_SPEED],
        evaluate: |x| {
            let [p, c] = args::<2>(x)?;
            Ok(energy_momentum_massless(p, c).into())
        },
    },
    Formula {
        id: "energy-momentum-relation",
        name: "Energy-Momentum Relation",
        subject: Subject::Relativity,
        topic: "energy",
        equation: "E = sqrt((p * c)^2 + (m * c^2)^2)",
        description: "Total energy from momentum and rest mass; valid for any particle.",
        params: &[
            Param::new("p", "Momentum", "kg·m/s").non_negative(),
            REST_MASS,
            LIGHT_SPEED,
        ],
        evaluate: |x| {
            let [p, m, c] = args::<3>(x)?;
            Ok(energy_momentum_relation(p, m, c).into())
        },
    },
];
