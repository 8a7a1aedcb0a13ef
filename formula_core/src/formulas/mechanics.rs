//! # Mechanics Formulas
//!
//! Kinematics, dynamics, rotation, oscillation and mechanical energy.
//!
//! ## Notation
//!
//! - `u` = initial velocity, `v` = final velocity (m/s)
//! - `a` = acceleration (m/s²), `t` = time (s)
//! - `s`, `d` = displacement / distance (m)
//! - `g` = gravitational acceleration, defaults to standard gravity
//! - `theta` = angle in degrees
//!
//! ## Sign Conventions
//!
//! - Velocities, accelerations and displacements are signed along one axis
//! - Hooke's law force opposes displacement (negative for positive `x`)

use std::f64::consts::PI;

use super::{args, deg_to_rad, Formula, Subject};
use crate::constants::STANDARD_GRAVITY;
use crate::errors::{FormulaError, FormulaResult};
use crate::validate::Param;

// =============================================================================
// PARAMETER DECLARATIONS
// =============================================================================

const MASS: Param = Param::new("m", "Mass", "kg").non_negative();
const VELOCITY: Param = Param::new("v", "Velocity", "m/s");
const INITIAL_VELOCITY: Param = Param::new("u", "Initial velocity", "m/s");
const ACCELERATION: Param = Param::new("a", "Acceleration", "m/s²");
const ELAPSED: Param = Param::new("t", "Time", "s").non_negative();
const DURATION: Param = Param::new("t", "Time", "s").non_zero().positive();
const RADIUS: Param = Param::new("r", "Radius", "m").radial();
const GRAVITY: Param = Param::new("g", "Gravitational acceleration", "m/s²")
    .positive()
    .default_value(STANDARD_GRAVITY);
const LAUNCH_SPEED: Param = Param::new("v", "Launch speed", "m/s").non_negative();
const LAUNCH_ANGLE: Param = Param::new("theta", "Launch angle", "deg");
const ANGLE: Param = Param::new("theta", "Angle", "deg");
const HEIGHT: Param = Param::new("h", "Height", "m").non_negative();
const FORCE: Param = Param::new("F", "Force", "N");
const SPRING_CONSTANT: Param = Param::new("k", "Spring constant", "N/m").non_negative();
const STIFFNESS: Param = Param::new("k", "Spring constant", "N/m").positive();
const OSCILLATOR_MASS: Param = Param::new("m", "Mass", "kg").positive();
const EXTENSION: Param = Param::new("x", "Displacement from equilibrium", "m");
const MOMENT_OF_INERTIA: Param = Param::new("I", "Moment of inertia", "kg·m²").non_negative();
const ANGULAR_VELOCITY: Param = Param::new("omega", "Angular velocity", "rad/s");

// =============================================================================
// KINEMATICS
// =============================================================================

/// v = d / t
#[inline]
pub fn average_velocity(d: f64, t: f64) -> f64 {
    d / t
}

/// a = (v - u) / t
#[inline]
pub fn average_acceleration(v: f64, u: f64, t: f64) -> f64 {
    (v - u) / t
}

/// v = u + at
#[inline]
pub fn final_velocity(u: f64, a: f64, t: f64) -> f64 {
    u + a * t
}

/// s = ut + ½at²
#[inline]
pub fn displacement(u: f64, a: f64, t: f64) -> f64 {
    u * t + 0.5 * a * t * t
}

/// Final speed from v² = u² + 2as.
///
/// Returns the magnitude. Fails when `u² + 2as < 0`: the body reverses
/// before covering `s`, so no real speed exists at that displacement.
pub fn final_velocity_from_displacement(u: f64, a: f64, s: f64) -> FormulaResult<f64> {
    let radicand = u * u + 2.0 * a * s;
    if radicand < 0.0 {
        return Err(FormulaError::singularity(
            "No real solution: u² + 2as is negative, the displacement is never reached.",
        ));
    }
    Ok(radicand.sqrt())
}

/// t = √(2h / g)
#[inline]
pub fn free_fall_time(h: f64, g: f64) -> f64 {
    (2.0 * h / g).sqrt()
}

/// v = √(2gh)
#[inline]
pub fn free_fall_velocity(h: f64, g: f64) -> f64 {
    (2.0 * g * h).sqrt()
}

fn check_launch_angle(theta_deg: f64) -> FormulaResult<()> {
    if !(0.0..=90.0).contains(&theta_deg) {
        return Err(FormulaError::out_of_domain(
            "Launch angle (theta) must be between 0 and 90 degrees.",
        ));
    }
    Ok(())
}

/// Range on level ground: R = v² sin(2θ) / g
pub fn projectile_range(v: f64, theta_deg: f64, g: f64) -> FormulaResult<f64> {
    check_launch_angle(theta_deg)?;
    Ok(v * v * (2.0 * deg_to_rad(theta_deg)).sin() / g)
}

/// H = v² sin²θ / 2g
pub fn projectile_max_height(v: f64, theta_deg: f64, g: f64) -> FormulaResult<f64> {
    check_launch_angle(theta_deg)?;
    let vy = v * deg_to_rad(theta_deg).sin();
    Ok(vy * vy / (2.0 * g))
}

/// T = 2v sinθ / g
pub fn projectile_time_of_flight(v: f64, theta_deg: f64, g: f64) -> FormulaResult<f64> {
    check_launch_angle(theta_deg)?;
    Ok(2.0 * v * deg_to_rad(theta_deg).sin() / g)
}

// =============================================================================
// DYNAMICS
// =============================================================================

#[inline]
pub fn newtons_second_law(m: f64, a: f64) -> f64 {
    m * a
}

#[inline]
pub fn weight(m: f64, g: f64) -> f64 {
    m * g
}

#[inline]
pub fn momentum(m: f64, v: f64) -> f64 {
    m * v
}

#[inline]
pub fn impulse(f: f64, t: f64) -> f64 {
    f * t
}

#[inline]
pub fn friction_force(mu: f64, normal: f64) -> f64 {
    mu * normal
}

/// a = v² / r
///
/// ```text
///        v →
///      .-----.
///     /   r   \
///    |    •────|  a points to the centre
///     \       /
///      '-----'
/// ```
#[inline]
pub fn centripetal_acceleration(v: f64, r: f64) -> f64 {
    v * v / r
}

/// F = mv² / r
#[inline]
pub fn centripetal_force(m: f64, v: f64, r: f64) -> f64 {
    m * centripetal_acceleration(v, r)
}

// =============================================================================
// ROTATION
// =============================================================================

/// ω = Δθ / t, angle in radians
#[inline]
pub fn angular_velocity(delta_theta: f64, t: f64) -> f64 {
    delta_theta / t
}

/// τ = rF sinθ
#[inline]
pub fn torque(r: f64, f: f64, theta_deg: f64) -> f64 {
    r * f * deg_to_rad(theta_deg).sin()
}

/// I = mr² for a point mass
#[inline]
pub fn moment_of_inertia_point(m: f64, r: f64) -> f64 {
    m * r * r
}

#[inline]
pub fn rotational_kinetic_energy(i: f64, omega: f64) -> f64 {
    0.5 * i * omega * omega
}

#[inline]
pub fn angular_momentum(i: f64, omega: f64) -> f64 {
    i * omega
}

// =============================================================================
// OSCILLATION
// =============================================================================

/// F = -kx
#[inline]
pub fn hookes_law(k: f64, x: f64) -> f64 {
    -k * x
}

#[inline]
pub fn spring_potential_energy(k: f64, x: f64) -> f64 {
    0.5 * k * x * x
}

/// T = 2π√(m/k)
#[inline]
pub fn spring_period(m: f64, k: f64) -> f64 {
    2.0 * PI * (m / k).sqrt()
}

/// T = 2π√(L/g), small-angle approximation
#[inline]
pub fn pendulum_period(length: f64, g: f64) -> f64 {
    2.0 * PI * (length / g).sqrt()
}

/// f = (1/2π)√(k/m)
#[inline]
pub fn oscillation_frequency(k: f64, m: f64) -> f64 {
    (k / m).sqrt() / (2.0 * PI)
}

// =============================================================================
// ENERGY & POWER
// =============================================================================

#[inline]
pub fn kinetic_energy(m: f64, v: f64) -> f64 {
    0.5 * m * v * v
}

#[inline]
pub fn gravitational_potential_energy(m: f64, g: f64, h: f64) -> f64 {
    m * g * h
}

/// W = Fd cosθ
#[inline]
pub fn work(f: f64, d: f64, theta_deg: f64) -> f64 {
    f * d * deg_to_rad(theta_deg).cos()
}

#[inline]
pub fn power(work: f64, t: f64) -> f64 {
    work / t
}

/// η = 100 · output / input (percent)
pub fn efficiency(output: f64, input: f64) -> FormulaResult<f64> {
    if output > input {
        return Err(FormulaError::out_of_domain(
            "Useful output (output) cannot exceed energy input (input).",
        ));
    }
    Ok(100.0 * output / input)
}

// =============================================================================
// FORMULA TABLE
// =============================================================================

pub static FORMULAS: &[Formula] = &[
    Formula {
        id: "average-velocity",
        name: "Average Velocity",
        subject: Subject::Mechanics,
        topic: "kinematics",
        equation: "v = d / t",
        description: "Displacement covered per unit time.",
        params: &[Param::new("d", "Displacement", "m"), DURATION],
        evaluate: |x| {
            let [d, t] = args::<2>(x)?;
            Ok(average_velocity(d, t).into())
        },
    },
    Formula {
        id: "average-acceleration",
        name: "Average Acceleration",
        subject: Subject::Mechanics,
        topic: "kinematics",
        equation: "a = (v - u) / t",
        description: "Change in velocity divided by the time taken.",
        params: &[Param::new("v", "Final velocity", "m/s"), INITIAL_VELOCITY, DURATION],
        evaluate: |x| {
            let [v, u, t] = args::<3>(x)?;
            Ok(average_acceleration(v, u, t).into())
        },
    },
    Formula {
        id: "final-velocity",
        name: "Final Velocity",
        subject: Subject::Mechanics,
        topic: "kinematics",
        equation: "v = u + a * t",
        description: "Velocity after accelerating uniformly for a given time.",
        params: &[INITIAL_VELOCITY, ACCELERATION, ELAPSED],
        evaluate: |x| {
            let [u, a, t] = args::<3>(x)?;
            Ok(final_velocity(u, a, t).into())
        },
    },
    Formula {
        id: "displacement",
        name: "Displacement Under Constant Acceleration",
        subject: Subject::Mechanics,
        topic: "kinematics",
        equation: "s = u * t + 0.5 * a * t^2",
        description: "Distance travelled along a line under constant acceleration.",
        params: &[INITIAL_VELOCITY, ACCELERATION, ELAPSED],
        evaluate: |x| {
            let [u, a, t] = args::<3>(x)?;
            Ok(displacement(u, a, t).into())
        },
    },
    Formula {
        id: "final-velocity-from-displacement",
        name: "Final Speed From Displacement",
        subject: Subject::Mechanics,
        topic: "kinematics",
        equation: "v = sqrt(u^2 + 2 * a * s)",
        description: "Speed reached after a displacement under constant acceleration, without reference to time.",
        params: &[INITIAL_VELOCITY, ACCELERATION, Param::new("s", "Displacement", "m")],
        evaluate: |x| {
            let [u, a, s] = args::<3>(x)?;
            Ok(final_velocity_from_displacement(u, a, s)?.into())
        },
    },
    Formula {
        id: "free-fall-time",
        name: "Free Fall Time",
        subject: Subject::Mechanics,
        topic: "kinematics",
        equation: "t = sqrt(2 * h / g)",
        description: "Time for a body released from rest to fall a height h, ignoring drag.",
        params: &[HEIGHT, GRAVITY],
        evaluate: |x| {
            let [h, g] = args::<2>(x)?;
            Ok(free_fall_time(h, g).into())
        },
    },
    Formula {
        id: "free-fall-velocity",
        name: "Free Fall Velocity",
        subject: Subject::Mechanics,
        topic: "kinematics",
        equation: "v = sqrt(2 * g * h)",
        description: "Impact speed of a body released from rest after falling a height h.",
        params: &[HEIGHT, GRAVITY],
        evaluate: |x| {
            let [h, g] = args::<2>(x)?;
            Ok(free_fall_velocity(h, g).into())
        },
    },
    Formula {
        id: "projectile-range",
        name: "Projectile Range",
        subject: Subject::Mechanics,
        topic: "projectile motion",
        equation: "R = v^2 * sin(2 * theta) / g",
        description: "Horizontal distance travelled by a projectile landing at launch height.",
        params: &[LAUNCH_SPEED, LAUNCH_ANGLE, GRAVITY],
        evaluate: |x| {
            let [v, theta, g] = args::<3>(x)?;
            Ok(projectile_range(v, theta, g)?.into())
        },
    },
    Formula {
        id: "projectile-max-height",
        name: "Projectile Maximum Height",
        subject: Subject::Mechanics,
        topic: "projectile motion",
        equation: "H = v^2 * sin(theta)^2 / (2 * g)",
        description: "Peak height above the launch point reached by a projectile.",
        params: &[LAUNCH_SPEED, LAUNCH_ANGLE, GRAVITY],
        evaluate: |x| {
            let [v, theta, g] = args::<3>(x)?;
            Ok(projectile_max_height(v, theta, g)?.into())
        },
    },
    Formula {
        id: "projectile-time-of-flight",
        name: "Projectile Time of Flight",
        subject: Subject::Mechanics,
        topic: "projectile motion",
        equation: "T = 2 * v * sin(theta) / g",
        description: "Time a projectile spends in the air before returning to launch height.",
        params: &[LAUNCH_SPEED, LAUNCH_ANGLE, GRAVITY],
        evaluate: |x| {
            let [v, theta, g] = args::<3>(x)?;
            Ok(projectile_time_of_flight(v, theta, g)?.into())
        },
    },
    Formula {
        id: "newtons-second-law",
        name: "Newton's Second Law",
        subject: Subject::Mechanics,
        topic: "dynamics",
        equation: "F = m * a",
        description: "Net force required to give a mass an acceleration.",
        params: &[MASS, ACCELERATION],
        evaluate: |x| {
            let [m, a] = args::<2>(x)?;
            Ok(newtons_second_law(m, a).into())
        },
    },
    Formula {
        id: "weight",
        name: "Weight",
        subject: Subject::Mechanics,
        topic: "dynamics",
        equation: "W = m * g",
        description: "Gravitational force on a mass near a planet's surface.",
        params: &[MASS, GRAVITY],
        evaluate: |x| {
            let [m, g] = args::<2>(x)?;
            Ok(weight(m, g).into())
        },
    },
    Formula {
        id: "momentum",
        name: "Linear Momentum",
        subject: Subject::Mechanics,
        topic: "dynamics",
        equation: "p = m * v",
        description: "Product of mass and velocity.",
        params: &[MASS, VELOCITY],
        evaluate: |x| {
            let [m, v] = args::<2>(x)?;
            Ok(momentum(m, v).into())
        },
    },
    Formula {
        id: "impulse",
        name: "Impulse",
        subject: Subject::Mechanics,
        topic: "dynamics",
        equation: "J = F * t",
        description: "Change in momentum produced by a constant force acting over a time interval.",
        params: &[FORCE, ELAPSED],
        evaluate: |x| {
            let [f, t] = args::<2>(x)?;
            Ok(impulse(f, t).into())
        },
    },
    Formula {
        id: "friction-force",
        name: "Friction Force",
        subject: Subject::Mechanics,
        topic: "dynamics",
        equation: "f = mu * N",
        description: "Friction from the coefficient of friction and the normal force.",
        params: &[
            Param::new("mu", "Coefficient of friction", "").non_negative(),
            Param::new("N", "Normal force", "N").non_negative(),
        ],
        evaluate: |x| {
            let [mu, n] = args::<2>(x)?;
            Ok(friction_force(mu, n).into())
        },
    },
    Formula {
        id: "centripetal-acceleration",
        name: "Centripetal Acceleration",
        subject: Subject::Mechanics,
        topic: "circular motion",
        equation: "a = v^2 / r",
        description: "Acceleration towards the centre for uniform circular motion.",
        params: &[VELOCITY, RADIUS],
        evaluate: |x| {
            let [v, r] = args::<2>(x)?;
            Ok(centripetal_acceleration(v, r).into())
        },
    },
    Formula {
        id: "centripetal-force",
        name: "Centripetal Force",
        subject: Subject::Mechanics,
        topic: "circular motion",
        equation: "F = m * v^2 / r",
        description: "Net inward force needed to keep a mass on a circular path.",
        params: &[MASS, VELOCITY, RADIUS],
        evaluate: |x| {
            let [m, v, r] = args::<3>(x)?;
            Ok(centripetal_force(m, v, r).into())
        },
    },
    Formula {
        id: "angular-velocity",
        name: "Angular Velocity",
        subject: Subject::Mechanics,
        topic: "rotation",
        equation: "omega = delta_theta / t",
        description: "Angle swept in radians per unit time.",
        params: &[Param::new("deltaTheta", "Angular displacement", "rad"), DURATION],
        evaluate: |x| {
            let [theta, t] = args::<2>(x)?;
            Ok(angular_velocity(theta, t).into())
        },
    },
    Formula {
        id: "torque",
        name: "Torque",
        subject: Subject::Mechanics,
        topic: "rotation",
        equation: "tau = r * F * sin(theta)",
        description: "Turning effect of a force applied at a lever arm.",
        params: &[Param::new("r", "Lever arm", "m").non_negative(), FORCE, ANGLE],
        evaluate: |x| {
            let [r, f, theta] = args::<3>(x)?;
            Ok(torque(r, f, theta).into())
        },
    },
    Formula {
        id: "moment-of-inertia-point",
        name: "Moment of Inertia (Point Mass)",
        subject: Subject::Mechanics,
        topic: "rotation",
        equation: "I = m * r^2",
        description: "Rotational inertia of a point mass about an axis.",
        params: &[MASS, Param::new("r", "Distance from axis", "m").non_negative()],
        evaluate: |x| {
            let [m, r] = args::<2>(x)?;
            Ok(moment_of_inertia_point(m, r).into())
        },
    },
    Formula {
        id: "rotational-kinetic-energy",
        name: "Rotational Kinetic Energy",
        subject: Subject::Mechanics,
        topic: "rotation",
        equation: "E = 0.5 * I * omega^2",
        description: "Kinetic energy stored in a rotating body.",
        params: &[MOMENT_OF_INERTIA, ANGULAR_VELOCITY],
        evaluate: |x| {
            let [i, omega] = args::<2>(x)?;
            Ok(rotational_kinetic_energy(i, omega).into())
        },
    },
    Formula {
        id: "angular-momentum",
        name: "Angular Momentum",
        subject: Subject::Mechanics,
        topic: "rotation",
        equation: "L = I * omega",
        description: "Rotational analogue of linear momentum.",
        params: &[MOMENT_OF_INERTIA, ANGULAR_VELOCITY],
        evaluate: |x| {
            let [i, omega] = args::<2>(x)?;
            Ok(angular_momentum(i, omega).into())
        },
    },
    Formula {
        id: "hookes-law",
        name: "Hooke's Law",
        subject: Subject::Mechanics,
        topic: "oscillation",
        equation: "F = -k * x",
        description: "Restoring force of an ideal spring displaced from equilibrium.",
        params: &[SPRING_CONSTANT, EXTENSION],
        evaluate: |x| {
            let [k, ext] = args::<2>(x)?;
            Ok(hookes_law(k, ext).into())
        },
    },
    Formula {
        id: "spring-potential-energy",
        name: "Elastic Potential Energy",
        subject: Subject::Mechanics,
        topic: "oscillation",
        equation: "E = 0.5 * k * x^2",
        description: "Energy stored in a stretched or compressed ideal spring.",
        params: &[SPRING_CONSTANT, EXTENSION],
        evaluate: |x| {
            let [k, ext] = args::<2>(x)?;
            Ok(spring_potential_energy(k, ext).into())
        },
    },
    Formula {
        id: "spring-period",
        name: "Mass-Spring Period",
        subject: Subject::Mechanics,
        topic: "oscillation",
        equation: "T = 2 * pi * sqrt(m / k)",
        description: "Period of a mass oscillating on an ideal spring.",
        params: &[OSCILLATOR_MASS, STIFFNESS],
        evaluate: |x| {
            let [m, k] = args::<2>(x)?;
            Ok(spring_period(m, k).into())
        },
    },
    Formula {
        id: "pendulum-period",
        name: "Simple Pendulum Period",
        subject: Subject::Mechanics,
        topic: "oscillation",
        equation: "T = 2 * pi * sqrt(L / g)",
        description: "Small-angle period of a simple pendulum.",
        params: &[Param::new("L", "Pendulum length", "m").positive(), GRAVITY],
        evaluate: |x| {
            let [l, g] = args::<2>(x)?;
            Ok(pendulum_period(l, g).into())
        },
    },
    Formula {
        id: "oscillation-frequency",
        name: "Mass-Spring Frequency",
        subject: Subject::Mechanics,
        topic: "oscillation",
        equation: "f = sqrt(k / m) / (2 * pi)",
        description: "Natural frequency of a mass on an ideal spring.",
        params: &[STIFFNESS, OSCILLATOR_MASS],
        evaluate: |x| {
            let [k, m] = args::<2>(x)?;
            Ok(oscillation_frequency(k, m).into())
        },
    },
    Formula {
        id: "kinetic-energy",
        name: "Kinetic Energy",
        subject: Subject::Mechanics,
        topic: "energy",
        equation: "E = 0.5 * m * v^2",
        description: "Energy of a moving mass at non-relativistic speed.",
        params: &[MASS, VELOCITY],
        evaluate: |x| {
            let [m, v] = args::<2>(x)?;
            Ok(kinetic_energy(m, v).into())
        },
    },
    Formula {
        id: "gravitational-potential-energy",
        name: "Gravitational Potential Energy",
        subject: Subject::Mechanics,
        topic: "energy",
        equation: "E = m * g * h",
        description: "Potential energy of a mass raised a height h in a uniform field.",
        params: &[MASS, GRAVITY, Param::new("h", "Height", "m")],
        evaluate: |x| {
            let [m, g, h] = args::<3>(x)?;
            Ok(gravitational_potential_energy(m, g, h).into())
        },
    },
    Formula {
        id: "work",
        name: "Work Done by a Force",
        subject: Subject::Mechanics,
        topic: "energy",
        equation: "W = F * d * cos(theta)",
        description: "Energy transferred by a constant force acting through a displacement.",
        params: &[FORCE, Param::new("d", "Displacement", "m"), ANGLE.default_value(0.0)],
        evaluate: |x| {
            let [f, d, theta] = args::<3>(x)?;
            Ok(work(f, d, theta).into())
        },
    },
    Formula {
        id: "power",
        name: "Power",
        subject: Subject::Mechanics,
        topic: "energy",
        equation: "P = W / t",
        description: "Rate at which work is done.",
        params: &[Param::new("W", "Work", "J"), DURATION],
        evaluate: |x| {
            let [w, t] = args::<2>(x)?;
            Ok(power(w, t).into())
        },
    },
    Formula {
        id: "efficiency",
        name: "Efficiency",
        subject: Subject::Mechanics,
        topic: "energy",
        equation: "eta = 100 * output / input",
        description: "Percentage of input energy converted to useful output.",
        params: &[
            Param::new("output", "Useful output", "J").non_negative(),
            Param::new("input", "Energy input", "J").radial(),
        ],
        evaluate: |x| {
            let [output, input] = args::<2>(x)?;
            Ok(efficiency(output, input)?.into())
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::test_util::approx_eq;

    #[test]
    fn test_kinematics() {
        assert!(approx_eq(average_velocity(100.0, 20.0), 5.0));
        assert!(approx_eq(average_acceleration(30.0, 10.0, 4.0), 5.0));
        assert!(approx_eq(final_velocity(10.0, 2.0, 5.0), 20.0));
        // s = 10*5 + 0.5*2*25 = 75
        assert!(approx_eq(displacement(10.0, 2.0, 5.0), 75.0));
    }

    #[test]
    fn test_final_velocity_from_displacement() {
        // v² = 9 + 2*2*4 = 25
        assert!(approx_eq(final_velocity_from_displacement(3.0, 2.0, 4.0).unwrap(), 5.0));
        // Decelerating body never reaches s = 100
        let err = final_velocity_from_displacement(10.0, -1.0, 100.0).unwrap_err();
        assert_eq!(err.error_code(), "SINGULARITY");
    }

    #[test]
    fn test_free_fall() {
        // h = 19.6 m at g = 9.8: t = 2 s, v = 19.6 m/s
        assert!(approx_eq(free_fall_time(19.6, 9.8), 2.0));
        assert!(approx_eq(free_fall_velocity(19.6, 9.8), 19.6));
    }

    #[test]
    fn test_projectile_at_45_degrees() {
        // v = 20, g = 10: R = 40, H = 10, T = 2√2
        assert!(approx_eq(projectile_range(20.0, 45.0, 10.0).unwrap(), 40.0));
        assert!(approx_eq(projectile_max_height(20.0, 45.0, 10.0).unwrap(), 10.0));
        assert!(approx_eq(projectile_time_of_flight(20.0, 45.0, 10.0).unwrap(), 2.0 * 2f64.sqrt()));
    }

    #[test]
    fn test_projectile_angle_bounds() {
        assert!(projectile_range(20.0, 95.0, 10.0).is_err());
        assert!(projectile_range(20.0, -5.0, 10.0).is_err());
        assert!(projectile_range(20.0, 90.0, 10.0).unwrap().abs() < 1e-9);
    }

    #[test]
    fn test_centripetal() {
        assert!(approx_eq(centripetal_acceleration(10.0, 5.0), 20.0));
        assert!(approx_eq(centripetal_force(2.0, 10.0, 5.0), 40.0));
    }

    #[test]
    fn test_rotation() {
        assert!(approx_eq(torque(2.0, 10.0, 90.0), 20.0));
        assert!(approx_eq(moment_of_inertia_point(3.0, 2.0), 12.0));
        assert!(approx_eq(rotational_kinetic_energy(2.0, 3.0), 9.0));
        assert!(approx_eq(angular_momentum(2.0, 3.0), 6.0));
    }

    #[test]
    fn test_oscillation() {
        assert!(approx_eq(hookes_law(100.0, 0.1), -10.0));
        assert!(approx_eq(spring_potential_energy(100.0, 0.1), 0.5));
        // T = 2π√(1/4π²)... pick m = k so T = 2π
        assert!(approx_eq(spring_period(4.0, 4.0), 2.0 * PI));
        assert!(approx_eq(oscillation_frequency(4.0, 4.0), 1.0 / (2.0 * PI)));
        assert!(approx_eq(pendulum_period(9.81, 9.81), 2.0 * PI));
    }

    #[test]
    fn test_energy() {
        assert!(approx_eq(kinetic_energy(2.0, 3.0), 9.0));
        assert!(approx_eq(gravitational_potential_energy(2.0, 10.0, 5.0), 100.0));
        assert!(approx_eq(work(10.0, 5.0, 60.0), 25.0));
        assert!(approx_eq(power(100.0, 4.0), 25.0));
        assert!(approx_eq(efficiency(40.0, 50.0).unwrap(), 80.0));
        assert!(efficiency(60.0, 50.0).is_err());
    }
}
