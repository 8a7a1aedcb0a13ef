//! # Physical Constants
//!
//! Read-only constants injected into formulas as parameter defaults.
//! All values are SI (CODATA 2018) unless noted otherwise.

// ============================================================================
// Universal Constants
// ============================================================================

/// Speed of light in vacuum (m/s)
pub const C: f64 = 299_792_458.0;

/// Gravitational constant (m³/(kg·s²))
pub const G: f64 = 6.674_30e-11;

/// Planck constant (J·s)
pub const H: f64 = 6.626_070_15e-34;

/// Reduced Planck constant ℏ = h/(2π) (J·s)
pub const H_BAR: f64 = 1.054_571_817e-34;

/// Standard gravitational acceleration (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.806_65;

// ============================================================================
// Electromagnetic Constants
// ============================================================================

/// Coulomb constant k = 1/(4πε₀) (N·m²/C²)
pub const COULOMB_K: f64 = 8.987_551_792_3e9;

/// Vacuum permittivity ε₀ (F/m)
pub const EPSILON_0: f64 = 8.854_187_812_8e-12;

/// Vacuum permeability μ₀ (N/A²)
pub const MU_0: f64 = 1.256_637_062_12e-6;

/// Elementary charge (C)
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

// ============================================================================
// Thermodynamic Constants
// ============================================================================

/// Universal gas constant (J/(mol·K))
pub const R: f64 = 8.314_462_618;

/// Boltzmann constant (J/K)
pub const K_B: f64 = 1.380_649e-23;

/// Stefan-Boltzmann constant (W/(m²·K⁴))
pub const STEFAN_BOLTZMANN: f64 = 5.670_374_419e-8;

/// Wien displacement constant (m·K)
pub const WIEN_B: f64 = 2.897_771_955e-3;

/// 0 °C in kelvin
pub const ZERO_CELSIUS_K: f64 = 273.15;

// ============================================================================
// Atomic & Nuclear Constants
// ============================================================================

/// Electron rest mass (kg)
pub const ELECTRON_MASS: f64 = 9.109_383_701_5e-31;

/// Rydberg constant (1/m)
pub const RYDBERG: f64 = 10_973_731.568_160;

/// Hydrogen ground-state energy magnitude (eV)
pub const HYDROGEN_GROUND_EV: f64 = 13.605_693_122_994;

// ============================================================================
// Acoustic Constants
// ============================================================================

/// Speed of sound in dry air at 20 °C (m/s)
pub const SPEED_OF_SOUND_AIR: f64 = 343.0;

/// Threshold of hearing (W/m²)
pub const HEARING_THRESHOLD: f64 = 1e-12;

/// Standard atmospheric pressure (Pa)
pub const STANDARD_PRESSURE: f64 = 101_325.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_constants_agree() {
        // ħ = h / 2π
        assert!((H / (2.0 * std::f64::consts::PI) - H_BAR).abs() / H_BAR < 1e-9);
        // k = 1 / (4π ε₀)
        let k = 1.0 / (4.0 * std::f64::consts::PI * EPSILON_0);
        assert!((k - COULOMB_K).abs() / COULOMB_K < 1e-9);
        // c² = 1 / (μ₀ ε₀)
        let c = (1.0 / (MU_0 * EPSILON_0)).sqrt();
        assert!((c - C).abs() / C < 1e-9);
    }
}
