//! # Fluid Formulas
//!
//! Hydrostatics and ideal incompressible flow.

use super::{args, Formula, Subject};
use crate::constants::{STANDARD_GRAVITY, STANDARD_PRESSURE};
use crate::validate::Param;

const DENSITY: Param = Param::new("rho", "Density", "kg/m³").non_negative();
const GRAVITY: Param = Param::new("g", "Gravitational acceleration", "m/s²")
    .positive()
    .default_value(STANDARD_GRAVITY);

#[inline]
pub fn density(m: f64, v: f64) -> f64 {
    m / v
}

#[inline]
pub fn pressure(f: f64, a: f64) -> f64 {
    f / a
}

/// P = P₀ + ρgh
#[inline]
pub fn hydrostatic_pressure(p0: f64, rho: f64, g: f64, h: f64) -> f64 {
    p0 + rho * g * h
}

/// Archimedes: F = ρ g V
#[inline]
pub fn buoyant_force(rho: f64, g: f64, v: f64) -> f64 {
    rho * g * v
}

/// A₁v₁ = A₂v₂, solved for v₂
#[inline]
pub fn continuity_velocity(a1: f64, v1: f64, a2: f64) -> f64 {
    a1 * v1 / a2
}

/// Bernoulli along a streamline, solved for p₂:
/// p₂ = p₁ + ½ρ(v₁² - v₂²) + ρg(h₁ - h₂)
pub fn bernoulli_pressure(p1: f64, rho: f64, v1: f64, v2: f64, h1: f64, h2: f64, g: f64) -> f64 {
    p1 + 0.5 * rho * (v1 * v1 - v2 * v2) + rho * g * (h1 - h2)
}

/// Re = ρvL / μ
#[inline]
pub fn reynolds_number(rho: f64, v: f64, l: f64, mu: f64) -> f64 {
    rho * v * l / mu
}

pub static FORMULAS: &[Formula] = &[
    Formula {
        id: "density",
        name: "Density",
        subject: Subject::Fluids,
        topic: "hydrostatics",
        equation: "rho = m / V",
        description: "Mass per unit volume.",
        params: &[
            Param::new("m", "Mass", "kg").non_negative(),
            Param::new("V", "Volume", "m³").radial(),
        ],
        evaluate: |x| {
            let [m, v] = args::<2>(x)?;
            Ok(density(m, v).into())
        },
    },
    Formula {
        id: "pressure",
        name: "Pressure",
        subject: Subject::Fluids,
        topic: "hydrostatics",
        equation: "P = F / A",
        description: "Normal force per unit area.",
        params: &[Param::new("F", "Force", "N"), Param::new("A", "Area", "m²").radial()],
        evaluate: |x| {
            let [f, a] = args::<2>(x)?;
            Ok(pressure(f, a).into())
        },
    },
    Formula {
        id: "hydrostatic-pressure",
        name: "Hydrostatic Pressure",
        subject: Subject::Fluids,
        topic: "hydrostatics",
        equation: "P = P0 + rho * g * h",
        description: "Absolute pressure at depth h in a static fluid below a surface at pressure P0.",
        params: &[
            DENSITY,
            Param::new("h", "Depth", "m").non_negative(),
            Param::new("P0", "Surface pressure", "Pa")
                .non_negative()
                .default_value(STANDARD_PRESSURE),
            GRAVITY,
        ],
        evaluate: |x| {
            let [rho, h, p0, g] = args::<4>(x)?;
            Ok(hydrostatic_pressure(p0, rho, g, h).into())
        },
    },
    Formula {
        id: "buoyant-force",
        name: "Buoyant Force",
        subject: Subject::Fluids,
        topic: "hydrostatics",
        equation: "F = rho * g * V",
        description: "Upward force on a body equal to the weight of fluid it displaces.",
        params: &[DENSITY, Param::new("V", "Displaced volume", "m³").non_negative(), GRAVITY],
        evaluate: |x| {
            let [rho, v, g] = args::<3>(x)?;
            Ok(buoyant_force(rho, g, v).into())
        },
    },
    Formula {
        id: "continuity-equation",
        name: "Continuity Equation",
        subject: Subject::Fluids,
        topic: "flow",
        equation: "v2 = A1 * v1 / A2",
        description: "Outlet velocity of an incompressible flow through a change in cross-section.",
        params: &[
            Param::new("A1", "Inlet area", "m²").radial(),
            Param::new("v1", "Inlet velocity", "m/s"),
            Param::new("A2", "Outlet area", "m²").radial(),
        ],
        evaluate: |x| {
            let [a1, v1, a2] = args::<3>(x)?;
            Ok(continuity_velocity(a1, v1, a2).into())
        },
    },
    Formula {
        id: "bernoulli-pressure",
        name: "Bernoulli's Equation",
        subject: Subject::Fluids,
        topic: "flow",
        equation: "p2 = p1 + 0.5 * rho * (v1^2 - v2^2) + rho * g * (h1 - h2)",
        description: "Downstream pressure along a streamline of ideal incompressible flow.",
        params: &[
            Param::new("p1", "Upstream pressure", "Pa"),
            DENSITY,
            Param::new("v1", "Upstream velocity", "m/s"),
            Param::new("v2", "Downstream velocity", "m/s"),
            Param::new("h1", "Upstream height", "m").default_value(0.0),
            Param::new("h2", "Downstream height", "m").default_value(0.0),
            GRAVITY,
        ],
        evaluate: |x| {
            let [p1, rho, v1, v2, h1, h2, g] = args::<7>(x)?;
            Ok(bernoulli_pressure(p1, rho, v1, v2, h1, h2, g).into())
        },
    },
    Formula {
        id: "reynolds-number",
        name: "Reynolds Number",
        subject: Subject::Fluids,
        topic: "flow",
        equation: "Re = rho * v * L / mu",
        description: "Ratio of inertial to viscous forces; predicts laminar or turbulent flow.",
        params: &[
            DENSITY,
            Param::new("v", "Flow speed", "m/s").non_negative(),
            Param::new("L", "Characteristic length", "m").positive(),
            Param::new("mu", "Dynamic viscosity", "Pa·s").radial(),
        ],
        evaluate: |x| {
            let [rho, v, l, mu] = args::<4>(x)?;
            Ok(reynolds_number(rho, v, l, mu).into())
        },
    },
];
