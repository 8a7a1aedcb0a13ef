//! # Quantum & Nuclear Formulas
//!
//! Photons, matter waves, the hydrogen atom and radioactive decay.
//! Energies in `photoelectric-effect` and `hydrogen-energy-level` are in
//! electronvolts; everything else is SI.

use std::f64::consts::LN_2;

use super::{args, deg_to_rad, Formula, Subject};
use crate::constants::{C, ELECTRON_MASS, H, HYDROGEN_GROUND_EV, H_BAR, RYDBERG, WIEN_B};
use crate::errors::{FormulaError, FormulaResult};
use crate::validate::Param;

const PLANCK: Param = Param::new("h", "Planck constant", "J·s").positive().default_value(H);
const LIGHT_SPEED: Param = Param::new("c", "Speed of light", "m/s").radial().default_value(C);
const INITIAL_COUNT: Param = Param::new("N0", "Initial quantity", "").non_negative();
const ELAPSED: Param = Param::new("t", "Elapsed time", "s").non_negative();
const HALF_LIFE: Param = Param::new("halfLife", "Half-life", "s").radial();
const DECAY_CONSTANT: Param = Param::new("lambda", "Decay constant", "1/s").non_negative();

// =============================================================================
// PHOTONS
// =============================================================================

/// E = hf
#[inline]
pub fn photon_energy(f: f64, h: f64) -> f64 {
    h * f
}

/// E = hc / λ
#[inline]
pub fn photon_energy_from_wavelength(lambda: f64, h: f64, c: f64) -> f64 {
    h * c / lambda
}

/// Maximum photoelectron kinetic energy, clamped at zero below threshold
#[inline]
pub fn photoelectric_effect(photon_energy: f64, work_function: f64) -> f64 {
    (photon_energy - work_function).max(0.0)
}

/// Δλ = h / (m_e c) (1 - cos θ)
#[inline]
pub fn compton_shift(theta_deg: f64, h: f64, c: f64) -> f64 {
    h / (ELECTRON_MASS * c) * (1.0 - deg_to_rad(theta_deg).cos())
}

/// Peak blackbody wavelength: λ_max = b / T
#[inline]
pub fn wien_displacement(t: f64) -> f64 {
    WIEN_B / t
}

// =============================================================================
// MATTER WAVES & UNCERTAINTY
// =============================================================================

/// λ = h / |mv|
#[inline]
pub fn de_broglie_wavelength(m: f64, v: f64, h: f64) -> f64 {
    h / (m * v).abs()
}

/// Minimum momentum uncertainty: Δp = ħ / (2Δx)
#[inline]
pub fn heisenberg_uncertainty(delta_x: f64) -> f64 {
    H_BAR / (2.0 * delta_x)
}

// =============================================================================
// HYDROGEN ATOM
// =============================================================================

/// Emitted or absorbed wavelength for a transition between levels.
///
/// 1/λ = R |1/n₁² - 1/n₂²|
pub fn rydberg_wavelength(n_initial: f64, n_final: f64, rydberg: f64) -> FormulaResult<f64> {
    if n_initial == n_final {
        return Err(FormulaError::DegenerateTransition {
            level: format!("{}", n_initial),
        });
    }
    let wavenumber = rydberg * (1.0 / (n_initial * n_initial) - 1.0 / (n_final * n_final)).abs();
    let wavelength = 1.0 / wavenumber;
    // Levels so high that both 1/n² terms underflow leave no measurable gap
    if !wavelength.is_finite() {
        return Err(FormulaError::singularity(
            "Energy levels (nInitial, nFinal) are too high to resolve a transition wavelength.",
        ));
    }
    Ok(wavelength)
}

/// E_n = -13.6057 eV / n²
#[inline]
pub fn hydrogen_energy_level(n: f64) -> f64 {
    -HYDROGEN_GROUND_EV / (n * n)
}

// =============================================================================
// NUCLEAR
// =============================================================================

/// N = N₀ e^(-λt)
#[inline]
pub fn radioactive_decay(n0: f64, lambda: f64, t: f64) -> f64 {
    n0 * (-lambda * t).exp()
}

/// N = N₀ (½)^(t / T½)
#[inline]
pub fn half_life_decay(n0: f64, t: f64, half_life: f64) -> f64 {
    n0 * 0.5f64.powf(t / half_life)
}

/// λ = ln 2 / T½
#[inline]
pub fn decay_constant(half_life: f64) -> f64 {
    LN_2 / half_life
}

/// A = λN
#[inline]
pub fn activity(lambda: f64, n: f64) -> f64 {
    lambda * n
}

/// E = Δm c²
#[inline]
pub fn binding_energy(mass_defect: f64, c: f64) -> f64 {
    mass_defect * c * c
}

pub static FORMULAS: &[Formula] = &[
    Formula {
        id: "photon-energy",
        name: "Photon Energy",
        subject: Subject::Quantum,
        topic: "photons",
        equation: "E = h * f",
        description: "Energy carried by a photon of frequency f.",
        params: &[Param::new("f", "Frequency", "Hz").non_negative(), PLANCK],
        evaluate: |x| {
            let [f, h] = args::<2>(x)?;
            Ok(photon_energy(f, h).into())
        },
    },
    Formula {
        id: "photon-energy-from-wavelength",
        name: "Photon Energy from Wavelength",
        subject: Subject::Quantum,
        topic: "photons",
        equation: "E = h * c / lambda",
        description: "Energy carried by a photon of wavelength lambda.",
        params: &[Param::new("lambda", "Wavelength", "m").radial(), PLANCK, LIGHT_SPEED],
        evaluate: |x| {
            let [lambda, h, c] = args::<3>(x)?;
            Ok(photon_energy_from_wavelength(lambda, h, c).into())
        },
    },
    Formula {
        id: "de-broglie-wavelength",
        name: "de Broglie Wavelength",
        subject: Subject::Quantum,
        topic: "matter waves",
        equation: "lambda = h / |m * v|",
        description: "Wavelength associated with a moving massive particle.",
        params: &[
            Param::new("m", "Mass", "kg").positive(),
            Param::new("v", "Velocity", "m/s").non_zero(),
            PLANCK,
        ],
        evaluate: |x| {
            let [m, v, h] = args::<3>(x)?;
            Ok(de_broglie_wavelength(m, v, h).into())
        },
    },
    Formula {
        id: "photoelectric-effect",
        name: "Photoelectric Effect",
        subject: Subject::Quantum,
        topic: "photons",
        equation: "K_max = max(E - phi, 0)",
        description: "Maximum kinetic energy of an ejected electron; zero below the threshold frequency.",
        params: &[
            Param::new("photonEnergy", "Photon energy", "eV").non_negative(),
            Param::new("phi", "Work function", "eV").non_negative(),
        ],
        evaluate: |x| {
            let [e, phi] = args::<2>(x)?;
            Ok(photoelectric_effect(e, phi).into())
        },
    },
    Formula {
        id: "rydberg-formula",
        name: "Rydberg Formula",
        subject: Subject::Quantum,
        topic: "hydrogen atom",
        equation: "1 / lambda = R * |1/nInitial^2 - 1/nFinal^2|",
        description: "Wavelength of light emitted or absorbed in a hydrogen transition.",
        params: &[
            Param::new("nInitial", "Initial energy level", "").counting(),
            Param::new("nFinal", "Final energy level", "").counting(),
            Param::new("R", "Rydberg constant", "1/m").positive().default_value(RYDBERG),
        ],
        evaluate: |x| {
            let [n_initial, n_final, r] = args::<3>(x)?;
            Ok(rydberg_wavelength(n_initial, n_final, r)?.into())
        },
    },
    Formula {
        id: "hydrogen-energy-level",
        name: "Hydrogen Energy Level",
        subject: Subject::Quantum,
        topic: "hydrogen atom",
        equation: "E = -13.6057 / n^2",
        description: "Bohr-model energy of the electron in level n, in electronvolts.",
        params: &[Param::new("n", "Quantum number", "").counting()],
        evaluate: |x| {
            let [n] = args::<1>(x)?;
            Ok(hydrogen_energy_level(n).into())
        },
    },
    Formula {
        id: "radioactive-decay",
        name: "Radioactive Decay",
        subject: Subject::Quantum,
        topic: "nuclear",
        equation: "N = N0 * e^(-lambda * t)",
        description: "Remaining quantity of a radioactive sample after time t.",
        params: &[INITIAL_COUNT, DECAY_CONSTANT, ELAPSED],
        evaluate: |x| {
            let [n0, lambda, t] = args::<3>(x)?;
            Ok(radioactive_decay(n0, lambda, t).into())
        },
    },
    Formula {
        id: "half-life-decay",
        name: "Half-Life Decay",
        subject: Subject::Quantum,
        topic: "nuclear",
        equation: "N = N0 * (1/2)^(t / halfLife)",
        description: "Remaining quantity after t given the half-life.",
        params: &[INITIAL_COUNT, ELAPSED, HALF_LIFE],
        evaluate: |x| {
            let [n0, t, half_life] = args::<3>(x)?;
            Ok(half_life_decay(n0, t, half_life).into())
        },
    },
    Formula {
        id: "decay-constant",
        name: "Decay Constant",
        subject: Subject::Quantum,
        topic: "nuclear",
        equation: "lambda = ln(2) / halfLife",
        description: "Probability of decay per unit time from the half-life.",
        params: &[HALF_LIFE],
        evaluate: |x| {
            let [half_life] = args::<1>(x)?;
            Ok(decay_constant(half_life).into())
        },
    },
    Formula {
        id: "activity",
        name: "Activity",
        subject: Subject::Quantum,
        topic: "nuclear",
        equation: "A = lambda * N",
        description: "Decays per second of a sample of N nuclei.",
        params: &[DECAY_CONSTANT, Param::new("N", "Number of nuclei", "").non_negative()],
        evaluate: |x| {
            let [lambda, n] = args::<2>(x)?;
            Ok(activity(lambda, n).into())
        },
    },
    Formula {
        id: "binding-energy",
        name: "Nuclear Binding Energy",
        subject: Subject::Quantum,
        topic: "nuclear",
        equation: "E = deltaM * c^2",
        description: "Energy equivalent of the mass defect of a nucleus.",
        params: &[Param::new("deltaM", "Mass defect", "kg").non_negative(), LIGHT_SPEED],
        evaluate: |x| {
            let [dm, c] = args::<2>(x)?;
            Ok(binding_energy(dm, c).into())
        },
    },
    Formula {
        id: "heisenberg-uncertainty",
        name: "Heisenberg Uncertainty Principle",
        subject: Subject::Quantum,
        topic: "matter waves",
        equation: "deltaP = hbar / (2 * deltaX)",
        description: "Minimum momentum uncertainty for a given position uncertainty.",
        params: &[Param::new("deltaX", "Position uncertainty", "m").radial()],
        evaluate: |x| {
            let [dx] = args::<1>(x)?;
            Ok(heisenberg_uncertainty(dx).into())
        },
    },
    Formula {
        id: "compton-shift",
        name: "Compton Shift",
        subject: Subject::Quantum,
        topic: "photons",
        equation: "deltaLambda = h / (m_e * c) * (1 - cos(theta))",
        description: "Wavelength increase of a photon scattered off a free electron.",
        params: &[Param::new("theta", "Scattering angle", "deg"), PLANCK, LIGHT_SPEED],
        evaluate: |x| {
            let [theta, h, c] = args::<3>(x)?;
            Ok(compton_shift(theta, h, c).into())
        },
    },
    Formula {
        id: "wien-displacement",
        name: "Wien's Displacement Law",
        subject: Subject::Quantum,
        topic: "blackbody",
        equation: "lambda_max = b / T",
        description: "Wavelength of peak emission for a blackbody at temperature T.",
        params: &[Param::new("T", "Temperature", "K").radial()],
        evaluate: |x| {
            let [t] = args::<1>(x)?;
            Ok(wien_displacement(t).into())
        },
    },
];
