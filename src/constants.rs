//! Physical constants of free space, derived from the defined speed of light
//! and the defining relation for the vacuum permeability

use {
    crate::utils::is_equal_rel,
    anyhow::{bail, Result},
    lazy_static::lazy_static,
    log::{debug, warn},
    serde::Serialize,
};

/// Speed of light in vacuum (m/s), exact by SI definition
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// mu0 = 4 * pi * PERMEABILITY_FACTOR
pub const PERMEABILITY_FACTOR: f64 = 1.0e-7;

lazy_static! {
    static ref CONSTANTS: PhysicalConstants = {
        let constants = PhysicalConstants::si();
        debug!("Initialized physical constants: {:?}", constants);
        constants
    };
}

/// Returns the process-wide constant table, deriving it on the first call.
///
/// Every call returns the same table, so callers may invoke this freely
/// during startup and keep the reference for the lifetime of the process.
pub fn initialize_constants() -> &'static PhysicalConstants {
    &CONSTANTS
}

/// Immutable table of free-space constants.
///
/// `eps0` and `eta0` are never stored independently of `c0` and `mu0`; they
/// are always computed by [`PhysicalConstants::derive`].
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct PhysicalConstants {
    /// pi, computed as 4 * atan(1)
    pub pi: f64,
    /// Speed of light in vacuum (m/s)
    pub c0: f64,
    /// Vacuum permeability (H/m)
    pub mu0: f64,
    /// Vacuum permittivity (F/m)
    pub eps0: f64,
    /// Impedance of free space (ohm)
    pub eta0: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::si()
    }
}

impl PhysicalConstants {
    /// SI values: c0 = 299792458 m/s, mu0 = 4 * pi * 1e-7 H/m
    pub fn si() -> Self {
        Self::derive(SPEED_OF_LIGHT, PERMEABILITY_FACTOR)
    }

    /// Derives the full table from the speed of light and the permeability
    /// factor `k` in mu0 = 4 * pi * k.
    pub fn derive(speed_of_light: f64, permeability_factor: f64) -> Self {
        let pi = 4.0 * 1.0f64.atan();
        let c0 = speed_of_light;
        let mu0 = 4.0 * pi * permeability_factor;
        let eps0 = 1.0 / (mu0 * c0 * c0);
        let eta0 = (mu0 / eps0).sqrt();

        PhysicalConstants {
            pi,
            c0,
            mu0,
            eps0,
            eta0,
        }
    }

    pub fn degrees_to_radians(&self, angle: f64) -> f64 {
        angle * (self.pi / 180.0)
    }

    pub fn radians_to_degrees(&self, angle: f64) -> f64 {
        angle * (180.0 / self.pi)
    }

    /// Free-space wavelength (m) at `frequency` (Hz)
    pub fn wavelength(&self, frequency: f64) -> f64 {
        self.c0 / frequency
    }

    /// Angular frequency (rad/s) of `frequency` (Hz)
    pub fn angular_frequency(&self, frequency: f64) -> f64 {
        2.0 * self.pi * frequency
    }

    /// Largest stable explicit time step on a Yee grid with the given cell
    /// spacings (m).
    pub fn courant_time_step(&self, dx: f64, dy: f64, dz: f64) -> Result<f64> {
        for (name, d) in [("dx", dx), ("dy", dy), ("dz", dz)].iter() {
            if !d.is_finite() || *d <= 0.0 {
                bail!("Cell spacing {} must be positive and finite, got {}", name, d);
            }
        }

        let inv = (1.0 / (dx * dx) + 1.0 / (dy * dy) + 1.0 / (dz * dz)).sqrt();

        Ok(1.0 / (self.c0 * inv))
    }

    /// Checks eps0 * mu0 * c0^2 = 1 and eta0^2 = mu0 / eps0 to within `rtol`.
    pub fn check_identities(&self, rtol: f64) -> Result<()> {
        let wave = self.eps0 * self.mu0 * self.c0 * self.c0;
        if !is_equal_rel(wave, 1.0, rtol) {
            warn!("eps0 * mu0 * c0^2 = {:e}", wave);
            bail!(
                "Identity eps0 * mu0 * c0^2 = 1 violated: got {:e} (rtol {:e})",
                wave,
                rtol
            );
        }

        let impedance = self.eta0 * self.eta0;
        let ratio = self.mu0 / self.eps0;
        if !is_equal_rel(impedance, ratio, rtol) {
            warn!("eta0^2 = {:e}, mu0 / eps0 = {:e}", impedance, ratio);
            bail!(
                "Identity eta0^2 = mu0 / eps0 violated: {:e} != {:e} (rtol {:e})",
                impedance,
                ratio,
                rtol
            );
        }

        Ok(())
    }
}
