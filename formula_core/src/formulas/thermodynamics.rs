//! # Thermodynamics Formulas
//!
//! Heat transfer, ideal gases, temperature scales and heat engines.
//! Temperatures are absolute (kelvin) unless the parameter says otherwise.
//!
//! ## Ideal Gas Identity
//!
//! `ideal-gas-law` returns a boolean: whether `PV = nRT` holds for the given
//! state. With the default `tolerance` of `0` the comparison is exact
//! floating-point equality, which realistic measured inputs almost never
//! satisfy. Pass a relative `tolerance` (e.g. `0.01` for 1%) to compare
//! within a margin.

use super::{args, Formula, Subject};
use crate::constants::{K_B, R, STEFAN_BOLTZMANN, ZERO_CELSIUS_K};
use crate::errors::{FormulaError, FormulaResult};
use crate::validate::Param;

const GAS_CONSTANT: Param = Param::new("R", "Gas constant", "J/(mol·K)")
    .positive()
    .default_value(R);
const ABSOLUTE_TEMPERATURE: Param = Param::new("T", "Temperature", "K").non_negative();
const AMOUNT: Param = Param::new("n", "Amount of substance", "mol").non_negative();
const MASS: Param = Param::new("m", "Mass", "kg").non_negative();
const CELSIUS: Param = Param::new("C", "Temperature", "°C");
const FAHRENHEIT: Param = Param::new("F", "Temperature", "°F");
const TEMPERATURE_CHANGE: Param = Param::new("deltaT", "Temperature change", "K");

/// Absolute zero on the Fahrenheit scale
const ABSOLUTE_ZERO_F: f64 = -459.67;

// =============================================================================
// IDEAL GAS
// =============================================================================

/// P = nRT / V
#[inline]
pub fn ideal_gas_pressure(n: f64, t: f64, v: f64, r: f64) -> f64 {
    n * r * t / v
}

/// Whether PV = nRT holds.
///
/// `tolerance` is relative to the larger side; `0` demands exact equality.
pub fn ideal_gas_law_holds(p: f64, v: f64, n: f64, t: f64, r: f64, tolerance: f64) -> bool {
    let lhs = p * v;
    let rhs = n * r * t;
    if tolerance == 0.0 {
        return lhs == rhs;
    }
    (lhs - rhs).abs() <= tolerance * lhs.abs().max(rhs.abs())
}

/// Mean translational kinetic energy of a molecule: E = 3/2 k_B T
#[inline]
pub fn average_molecular_kinetic_energy(t: f64) -> f64 {
    1.5 * K_B * t
}

/// v_rms = √(3RT / M), M in kg/mol
#[inline]
pub fn rms_speed(t: f64, molar_mass: f64, r: f64) -> f64 {
    (3.0 * r * t / molar_mass).sqrt()
}

// =============================================================================
// HEAT
// =============================================================================

/// Q = mcΔT
#[inline]
pub fn heat_transfer(m: f64, c: f64, delta_t: f64) -> f64 {
    m * c * delta_t
}

/// Q = mL
#[inline]
pub fn latent_heat(m: f64, l: f64) -> f64 {
    m * l
}

/// ΔL = αL₀ΔT
#[inline]
pub fn linear_thermal_expansion(alpha: f64, l0: f64, delta_t: f64) -> f64 {
    alpha * l0 * delta_t
}

/// Fourier's law: P = kAΔT / d
#[inline]
pub fn thermal_conduction(k: f64, a: f64, delta_t: f64, d: f64) -> f64 {
    k * a * delta_t / d
}

/// P = εσAT⁴
pub fn stefan_boltzmann(emissivity: f64, a: f64, t: f64) -> FormulaResult<f64> {
    if emissivity > 1.0 {
        return Err(FormulaError::out_of_domain(
            "Emissivity (emissivity) must be between 0 and 1.",
        ));
    }
    Ok(emissivity * STEFAN_BOLTZMANN * a * t.powi(4))
}

/// ΔS = Q / T for a reversible isothermal transfer
#[inline]
pub fn entropy_change(q: f64, t: f64) -> f64 {
    q / t
}

// =============================================================================
// ENGINES & FIRST LAW
// =============================================================================

/// η = 1 - T_c / T_h
pub fn carnot_efficiency(t_hot: f64, t_cold: f64) -> FormulaResult<f64> {
    if t_cold > t_hot {
        return Err(FormulaError::out_of_domain(
            "Cold reservoir temperature (Tc) cannot exceed hot reservoir temperature (Th).",
        ));
    }
    Ok(1.0 - t_cold / t_hot)
}

/// ΔU = Q - W (W is work done by the system)
#[inline]
pub fn first_law(q: f64, w: f64) -> f64 {
    q - w
}

// =============================================================================
// TEMPERATURE SCALES
// =============================================================================

pub fn celsius_to_kelvin(celsius: f64) -> FormulaResult<f64> {
    let kelvin = celsius + ZERO_CELSIUS_K;
    if kelvin < 0.0 {
        return Err(FormulaError::below_absolute_zero(CELSIUS.key, CELSIUS.label));
    }
    Ok(kelvin)
}

#[inline]
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - ZERO_CELSIUS_K
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> FormulaResult<f64> {
    if fahrenheit < ABSOLUTE_ZERO_F {
        return Err(FormulaError::below_absolute_zero(FAHRENHEIT.key, FAHRENHEIT.label));
    }
    Ok((fahrenheit - 32.0) * 5.0 / 9.0)
}

pub static FORMULAS: &[Formula] = &[
    Formula {
        id: "ideal-gas-pressure",
        name: "Ideal Gas Pressure",
        subject: Subject::Thermodynamics,
        topic: "ideal gas",
        equation: "P = n * R * T / V",
        description: "Pressure of an ideal gas from its amount, temperature and volume.",
        params: &[
            AMOUNT,
            ABSOLUTE_TEMPERATURE,
            Param::new("V", "Volume", "m³").radial(),
            GAS_CONSTANT,
        ],
        evaluate: |x| {
            let [n, t, v, r] = args::<4>(x)?;
            Ok(ideal_gas_pressure(n, t, v, r).into())
        },
    },
    Formula {
        id: "ideal-gas-law",
        name: "Ideal Gas Law Check",
        subject: Subject::Thermodynamics,
        topic: "ideal gas",
        equation: "P * V = n * R * T",
        description: "Checks whether a gas state satisfies the ideal gas law, optionally within a relative tolerance.",
        params: &[
            Param::new("P", "Pressure", "Pa").non_negative(),
            Param::new("V", "Volume", "m³").non_negative(),
            AMOUNT,
            ABSOLUTE_TEMPERATURE,
            GAS_CONSTANT,
            Param::new("tolerance", "Relative tolerance", "").non_negative().default_value(0.0),
        ],
        evaluate: |x| {
            let [p, v, n, t, r, tolerance] = args::<6>(x)?;
            Ok(ideal_gas_law_holds(p, v, n, t, r, tolerance).into())
        },
    },
    Formula {
        id: "heat-transfer",
        name: "Sensible Heat",
        subject: Subject::Thermodynamics,
        topic: "heat",
        equation: "Q = m * c * deltaT",
        description: "Heat needed to change the temperature of a mass without a phase change.",
        params: &[
            MASS,
            Param::new("c", "Specific heat capacity", "J/(kg·K)").non_negative(),
            TEMPERATURE_CHANGE,
        ],
        evaluate: |x| {
            let [m, c, dt] = args::<3>(x)?;
            Ok(heat_transfer(m, c, dt).into())
        },
    },
    Formula {
        id: "latent-heat",
        name: "Latent Heat",
        subject: Subject::Thermodynamics,
        topic: "heat",
        equation: "Q = m * L",
        description: "Heat absorbed or released during a phase change.",
        params: &[MASS, Param::new("L", "Specific latent heat", "J/kg").non_negative()],
        evaluate: |x| {
            let [m, l] = args::<2>(x)?;
            Ok(latent_heat(m, l).into())
        },
    },
    Formula {
        id: "linear-thermal-expansion",
        name: "Linear Thermal Expansion",
        subject: Subject::Thermodynamics,
        topic: "heat",
        equation: "deltaL = alpha * L0 * deltaT",
        description: "Change in length of a solid heated through a temperature change.",
        params: &[
            Param::new("alpha", "Coefficient of linear expansion", "1/K"),
            Param::new("L0", "Original length", "m").non_negative(),
            TEMPERATURE_CHANGE,
        ],
        evaluate: |x| {
            let [alpha, l0, dt] = args::<3>(x)?;
            Ok(linear_thermal_expansion(alpha, l0, dt).into())
        },
    },
    Formula {
        id: "thermal-conduction",
        name: "Thermal Conduction (Fourier's Law)",
        subject: Subject::Thermodynamics,
        topic: "heat transfer",
        equation: "P = k * A * deltaT / d",
        description: "Steady heat flow through a slab of material.",
        params: &[
            Param::new("k", "Thermal conductivity", "W/(m·K)").non_negative(),
            Param::new("A", "Area", "m²").non_negative(),
            TEMPERATURE_CHANGE,
            Param::new("d", "Thickness", "m").radial(),
        ],
        evaluate: |x| {
            let [k, a, dt, d] = args::<4>(x)?;
            Ok(thermal_conduction(k, a, dt, d).into())
        },
    },
    Formula {
        id: "stefan-boltzmann",
        name: "Stefan-Boltzmann Law",
        subject: Subject::Thermodynamics,
        topic: "heat transfer",
        equation: "P = emissivity * sigma * A * T^4",
        description: "Power radiated by a surface at absolute temperature T.",
        params: &[
            Param::new("emissivity", "Emissivity", "").non_negative().default_value(1.0),
            Param::new("A", "Surface area", "m²").non_negative(),
            ABSOLUTE_TEMPERATURE,
        ],
        evaluate: |x| {
            let [e, a, t] = args::<3>(x)?;
            Ok(stefan_boltzmann(e, a, t)?.into())
        },
    },
    Formula {
        id: "carnot-efficiency",
        name: "Carnot Efficiency",
        subject: Subject::Thermodynamics,
        topic: "heat engines",
        equation: "eta = 1 - Tc / Th",
        description: "Maximum efficiency of a heat engine between two reservoirs.",
        params: &[
            Param::new("Th", "Hot reservoir temperature", "K").radial(),
            Param::new("Tc", "Cold reservoir temperature", "K").non_negative(),
        ],
        evaluate: |x| {
            let [th, tc] = args::<2>(x)?;
            Ok(carnot_efficiency(th, tc)?.into())
        },
    },
    Formula {
        id: "first-law-thermodynamics",
        name: "First Law of Thermodynamics",
        subject: Subject::Thermodynamics,
        topic: "heat engines",
        equation: "deltaU = Q - W",
        description: "Change in internal energy from heat added and work done by the system.",
        params: &[Param::new("Q", "Heat added", "J"), Param::new("W", "Work done by system", "J")],
        evaluate: |x| {
            let [q, w] = args::<2>(x)?;
            Ok(first_law(q, w).into())
        },
    },
    Formula {
        id: "celsius-to-kelvin",
        name: "Celsius to Kelvin",
        subject: Subject::Thermodynamics,
        topic: "temperature",
        equation: "K = C + 273.15",
        description: "Converts a Celsius temperature to the absolute scale.",
        params: &[CELSIUS],
        evaluate: |x| {
            let [c] = args::<1>(x)?;
            Ok(celsius_to_kelvin(c)?.into())
        },
    },
    Formula {
        id: "kelvin-to-celsius",
        name: "Kelvin to Celsius",
        subject: Subject::Thermodynamics,
        topic: "temperature",
        equation: "C = K - 273.15",
        description: "Converts an absolute temperature to Celsius.",
        params: &[Param::new("K", "Temperature", "K").non_negative()],
        evaluate: |x| {
            let [k] = args::<1>(x)?;
            Ok(kelvin_to_celsius(k).into())
        },
    },
    Formula {
        id: "fahrenheit-to-celsius",
        name: "Fahrenheit to Celsius",
        subject: Subject::Thermodynamics,
        topic: "temperature",
        equation: "C = (F - 32) * 5 / 9",
        description: "Converts a Fahrenheit temperature to Celsius.",
        params: &[FAHRENHEIT],
        evaluate: |x| {
            let [f] = args::<1>(x)?;
            Ok(fahrenheit_to_celsius(f)?.into())
        },
    },
    Formula {
        id: "average-molecular-kinetic-energy",
        name: "Average Molecular Kinetic Energy",
        subject: Subject::Thermodynamics,
        topic: "kinetic theory",
        equation: "E = 1.5 * k_B * T",
        description: "Mean translational kinetic energy of a gas molecule.",
        params: &[ABSOLUTE_TEMPERATURE],
        evaluate: |x| {
            let [t] = args::<1>(x)?;
            Ok(average_molecular_kinetic_energy(t).into())
        },
    },
    Formula {
        id: "rms-speed",
        name: "RMS Molecular Speed",
        subject: Subject::Thermodynamics,
        topic: "kinetic theory",
        equation: "v = sqrt(3 * R * T / M)",
        description: "Root-mean-square speed of gas molecules with molar mass M.",
        params: &[
            ABSOLUTE_TEMPERATURE,
            Param::new("M", "Molar mass", "kg/mol").radial(),
            GAS_CONSTANT,
        ],
        evaluate: |x| {
            let [t, m, r] = args::<3>(x)?;
            Ok(rms_speed(t, m, r).into())
        },
    },
    Formula {
        id: "entropy-change",
        name: "Entropy Change",
        subject: Subject::Thermodynamics,
        topic: "entropy",
        equation: "deltaS = Q / T",
        description: "Entropy change for heat transferred reversibly at constant temperature.",
        params: &[Param::new("Q", "Heat transferred", "J"), Param::new("T", "Temperature", "K").radial()],
        evaluate: |x| {
            let [q, t] = args::<2>(x)?;
            Ok(entropy_change(q, t).into())
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::test_util::approx_eq;

    #[test]
    fn test_ideal_gas_pressure_one_mole_stp() {
        // 1 mol at 273.15 K in 22.414 L
        let p = ideal_gas_pressure(1.0, 273.15, 0.022_414, R);
        assert!((p - 101_325.0).abs() < 50.0, "P = {}", p);
    }

    #[test]
    fn test_ideal_gas_law_exact_equality() {
        // 2 * 4 == 1 * 2 * 4 exactly
        assert!(ideal_gas_law_holds(2.0, 4.0, 1.0, 4.0, 2.0, 0.0));
        // Realistic inputs rarely satisfy exact equality
        assert!(!ideal_gas_law_holds(101_325.0, 0.022_414, 1.0, 273.15, R, 0.0));
    }

    #[test]
    fn test_ideal_gas_law_with_tolerance() {
        assert!(ideal_gas_law_holds(101_325.0, 0.022_414, 1.0, 273.15, R, 0.01));
        assert!(!ideal_gas_law_holds(200_000.0, 0.022_414, 1.0, 273.15, R, 0.01));
    }

    #[test]
    fn test_heat() {
        // 1 kg water, 10 K
        assert!(approx_eq(heat_transfer(1.0, 4186.0, 10.0), 41_860.0));
        assert!(approx_eq(latent_heat(2.0, 334_000.0), 668_000.0));
        assert!(approx_eq(linear_thermal_expansion(1.2e-5, 10.0, 100.0), 0.012));
        assert!(approx_eq(thermal_conduction(1.0, 2.0, 10.0, 0.5), 40.0));
    }

    #[test]
    fn test_stefan_boltzmann() {
        let p = stefan_boltzmann(1.0, 1.0, 1000.0).unwrap();
        assert!(approx_eq(p, STEFAN_BOLTZMANN * 1e12));
        assert!(stefan_boltzmann(1.5, 1.0, 1000.0).is_err());
    }

    #[test]
    fn test_carnot() {
        assert!(approx_eq(carnot_efficiency(500.0, 300.0).unwrap(), 0.4));
        assert!(approx_eq(carnot_efficiency(500.0, 500.0).unwrap(), 0.0));
        assert!(carnot_efficiency(300.0, 500.0).is_err());
    }

    #[test]
    fn test_temperature_scales() {
        assert!(approx_eq(celsius_to_kelvin(25.0).unwrap(), 298.15));
        assert!(approx_eq(celsius_to_kelvin(-273.15).unwrap(), 0.0));
        assert_eq!(celsius_to_kelvin(-300.0).unwrap_err().error_code(), "BELOW_ABSOLUTE_ZERO");
        assert!(approx_eq(kelvin_to_celsius(373.15), 100.0));
        assert!(approx_eq(fahrenheit_to_celsius(212.0).unwrap(), 100.0));
        assert!(fahrenheit_to_celsius(-500.0).is_err());
    }

    #[test]
    fn test_below_absolute_zero_names_declared_param() {
        assert_eq!(
            celsius_to_kelvin(-300.0).unwrap_err().to_string(),
            format!("{} ({}) cannot be below absolute zero.", CELSIUS.label, CELSIUS.key)
        );
        assert_eq!(
            fahrenheit_to_celsius(-500.0).unwrap_err().to_string(),
            "Temperature (F) cannot be below absolute zero."
        );
        let declared = FORMULAS.iter().find(|f| f.id == "fahrenheit-to-celsius").unwrap();
        assert_eq!(declared.params[0].key, FAHRENHEIT.key);
    }

    #[test]
    fn test_kinetic_theory() {
        assert!(approx_eq(average_molecular_kinetic_energy(300.0), 1.5 * K_B * 300.0));
        // Nitrogen at 300 K: ~517 m/s
        let v = rms_speed(300.0, 0.028, R);
        assert!((v - 517.0).abs() < 1.0, "v_rms = {}", v);
    }

    #[test]
    fn test_first_law_and_entropy() {
        assert!(approx_eq(first_law(100.0, 40.0), 60.0));
        assert!(approx_eq(entropy_change(600.0, 300.0), 2.0));
    }
}
