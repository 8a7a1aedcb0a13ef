//! # Wave & Optics Formulas
//!
//! Angles are taken and returned in degrees. Sign conventions:
//! - Doppler: `vo` positive when the observer moves toward the source,
//!   `vs` positive when the source moves toward the observer.
//! - Thin lens: real-is-positive, so a diverging lens has negative `f`.

use super::{args, deg_to_rad, Formula, Subject};
use crate::constants::{C, HEARING_THRESHOLD, SPEED_OF_SOUND_AIR};
use crate::errors::{FormulaError, FormulaResult};
use crate::validate::Param;

const FREQUENCY: Param = Param::new("f", "Frequency", "Hz").non_negative();
const SOUND_SPEED: Param = Param::new("c", "Wave speed in medium", "m/s")
    .positive()
    .default_value(SPEED_OF_SOUND_AIR);
const OBJECT_DISTANCE: Param = Param::new("do", "Object distance", "m").non_zero();

// =============================================================================
// WAVE BASICS
// =============================================================================

/// v = fλ
#[inline]
pub fn wave_speed(f: f64, lambda: f64) -> f64 {
    f * lambda
}

/// f = 1 / T
#[inline]
pub fn wave_frequency(period: f64) -> f64 {
    1.0 / period
}

/// Observed frequency: f' = f (c + v_o) / (c - v_s)
pub fn doppler_effect(f: f64, c: f64, vo: f64, vs: f64) -> FormulaResult<f64> {
    let denominator = c - vs;
    if denominator == 0.0 {
        return Err(FormulaError::singularity(
            "Source speed (vs) equals the wave speed (c); the observed frequency is undefined.",
        ));
    }
    Ok(f * (c + vo) / denominator)
}

/// β = 10 log₁₀(I / I₀) in decibels
#[inline]
pub fn sound_intensity_level(i: f64, i0: f64) -> f64 {
    10.0 * (i / i0).log10()
}

/// Half-angle of the shock cone: sin μ = c / v
pub fn mach_angle(v: f64, c: f64) -> FormulaResult<f64> {
    if v < c {
        return Err(FormulaError::not_applicable(
            "Object speed (v) must be at least the wave speed (c); no Mach cone forms below it.",
        ));
    }
    Ok((c / v).asin().to_degrees())
}

// =============================================================================
// REFRACTION
// =============================================================================

/// n = c / v
#[inline]
pub fn refractive_index(c: f64, v: f64) -> f64 {
    c / v
}

/// Refraction angle θ₂ from n₁ sin θ₁ = n₂ sin θ₂
pub fn snells_law(n1: f64, theta1_deg: f64, n2: f64) -> FormulaResult<f64> {
    if !(0.0..=90.0).contains(&theta1_deg) {
        return Err(FormulaError::out_of_domain(
            "Angle of incidence (theta1) must be between 0 and 90 degrees.",
        ));
    }
    let sin_theta2 = n1 * deg_to_rad(theta1_deg).sin() / n2;
    if sin_theta2 > 1.0 {
        return Err(FormulaError::not_applicable(
            "Total internal reflection: no refracted ray exists for this angle of incidence.",
        ));
    }
    Ok(sin_theta2.asin().to_degrees())
}

/// θ_c = asin(n₂ / n₁), defined only when n₂ < n₁
pub fn critical_angle(n1: f64, n2: f64) -> FormulaResult<f64> {
    if n2 >= n1 {
        return Err(FormulaError::not_applicable(
            "Critical angle requires the second medium to have a lower index (n2 < n1).",
        ));
    }
    Ok((n2 / n1).asin().to_degrees())
}

// =============================================================================
// LENSES
// =============================================================================

/// 1/f = 1/d_o + 1/d_i, solved for d_i
pub fn thin_lens_image_distance(f: f64, d_o: f64) -> FormulaResult<f64> {
    if d_o == f {
        return Err(FormulaError::singularity(
            "Object distance (do) equals the focal length (f); the image forms at infinity.",
        ));
    }
    Ok(f * d_o / (d_o - f))
}

/// m = -d_i / d_o
#[inline]
pub fn magnification(d_i: f64, d_o: f64) -> f64 {
    -d_i / d_o
}

pub static FORMULAS: &[Formula] = &[
    Formula {
        id: "wave-speed",
        name: "Wave Speed",
        subject: Subject::Waves,
        topic: "wave basics",
        equation: "v = f * lambda",
        description: "Propagation speed of a periodic wave.",
        params: &[FREQUENCY, Param::new("lambda", "Wavelength", "m").non_negative()],
        evaluate: |x| {
            let [f, lambda] = args::<2>(x)?;
            Ok(wave_speed(f, lambda).into())
        },
    },
    Formula {
        id: "wave-frequency",
        name: "Frequency from Period",
        subject: Subject::Waves,
        topic: "wave basics",
        equation: "f = 1 / T",
        description: "Number of cycles per second for a wave of period T.",
        params: &[Param::new("T", "Period", "s").radial()],
        evaluate: |x| {
            let [t] = args::<1>(x)?;
            Ok(wave_frequency(t).into())
        },
    },
    Formula {
        id: "doppler-effect",
        name: "Doppler Effect",
        subject: Subject::Waves,
        topic: "sound",
        equation: "f' = f * (c + vo) / (c - vs)",
        description: "Frequency heard by a moving observer from a moving source.",
        params: &[
            FREQUENCY,
            Param::new("vo", "Observer velocity", "m/s").default_value(0.0),
            Param::new("vs", "Source velocity", "m/s").default_value(0.0),
            SOUND_SPEED,
        ],
        evaluate: |x| {
            let [f, vo, vs, c] = args::<4>(x)?;
            Ok(doppler_effect(f, c, vo, vs)?.into())
        },
    },
    Formula {
        id: "snells-law",
        name: "Snell's Law",
        subject: Subject::Waves,
        topic: "refraction",
        equation: "theta2 = asin(n1 * sin(theta1) / n2)",
        description: "Angle of the refracted ray at an interface between two media.",
        params: &[
            Param::new("n1", "Refractive index of first medium", "").radial(),
            Param::new("theta1", "Angle of incidence", "deg"),
            Param::new("n2", "Refractive index of second medium", "").radial(),
        ],
        evaluate: |x| {
            let [n1, theta1, n2] = args::<3>(x)?;
            Ok(snells_law(n1, theta1, n2)?.into())
        },
    },
    Formula {
        id: "critical-angle",
        name: "Critical Angle",
        subject: Subject::Waves,
        topic: "refraction",
        equation: "theta_c = asin(n2 / n1)",
        description: "Smallest angle of incidence producing total internal reflection.",
        params: &[
            Param::new("n1", "Refractive index of denser medium", "").radial(),
            Param::new("n2", "Refractive index of rarer medium", "").radial(),
        ],
        evaluate: |x| {
            let [n1, n2] = args::<2>(x)?;
            Ok(critical_angle(n1, n2)?.into())
        },
    },
    Formula {
        id: "thin-lens-image-distance",
        name: "Thin Lens Equation",
        subject: Subject::Waves,
        topic: "lenses",
        equation: "di = 1 / (1/f - 1/do)",
        description: "Image distance for a thin lens of focal length f.",
        params: &[Param::new("f", "Focal length", "m").non_zero(), OBJECT_DISTANCE],
        evaluate: |x| {
            let [f, d_o] = args::<2>(x)?;
            Ok(thin_lens_image_distance(f, d_o)?.into())
        },
    },
    Formula {
        id: "magnification",
        name: "Lateral Magnification",
        subject: Subject::Waves,
        topic: "lenses",
        equation: "m = -di / do",
        description: "Ratio of image height to object height; negative for inverted images.",
        params: &[Param::new("di", "Image distance", "m"), OBJECT_DISTANCE],
        evaluate: |x| {
            let [d_i, d_o] = args::<2>(x)?;
            Ok(magnification(d_i, d_o).into())
        },
    },
    Formula {
        id: "refractive-index",
        name: "Refractive Index",
        subject: Subject::Waves,
        topic: "refraction",
        equation: "n = c / v",
        description: "Ratio of the vacuum light speed to the speed in the medium.",
        params: &[
            Param::new("v", "Speed of light in medium", "m/s").radial(),
            Param::new("c", "Speed of light in vacuum", "m/s").radial().default_value(C),
        ],
        evaluate: |x| {
            let [v, c] = args::<2>(x)?;
            Ok(refractive_index(c, v).into())
        },
    },
    Formula {
        id: "mach-angle",
        name: "Mach Angle",
        subject: Subject::Waves,
        topic: "sound",
        equation: "mu = asin(c / v)",
        description: "Half-angle of the shock cone behind an object moving faster than sound.",
        params: &[Param::new("v", "Object speed", "m/s").radial(), SOUND_SPEED],
        evaluate: |x| {
            let [v, c] = args::<2>(x)?;
            Ok(mach_angle(v, c)?.into())
        },
    },
    Formula {
        id: "sound-intensity-level",
        name: "Sound Intensity Level",
        subject: Subject::Waves,
        topic: "sound",
        equation: "beta = 10 * log10(I / I0)",
        description: "Loudness in decibels relative to the threshold of hearing.",
        params: &[
            Param::new("I", "Intensity", "W/m²").radial(),
            Param::new("I0", "Reference intensity", "W/m²")
                .radial()
                .default_value(HEARING_THRESHOLD),
        ],
        evaluate: |x| {
            let [i, i0] = args::<2>(x)?;
            Ok(sound_intensity_level(i, i0).into())
        },
    },
];
