use {
    crate::constants::{PhysicalConstants, PERMEABILITY_FACTOR, SPEED_OF_LIGHT},
    anyhow::{Context, Result},
    serde::Deserialize,
    std::{fs::File, path::Path},
};

/// Configuration of the constant table and of numerical checks
#[derive(Debug, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Parameters {
    pub physical: Physical,
    pub numerical: Numerical,
}

impl Parameters {
    /// Loads parameters from a YAML file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;

        serde_yaml::from_reader(file)
            .with_context(|| format!("Failed to parse parameters from {}", path.display()))
    }

    /// Constant table for the configured defining values
    pub fn constants(&self) -> PhysicalConstants {
        PhysicalConstants::derive(
            self.physical.speed_of_light,
            self.physical.permeability_factor,
        )
    }
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Physical {
    /// Speed of light in vacuum c0
    pub speed_of_light: f64,
    /// Factor k in mu0 = 4 * pi * k
    pub permeability_factor: f64,
}

impl Default for Physical {
    fn default() -> Self {
        Physical {
            speed_of_light: SPEED_OF_LIGHT,
            permeability_factor: PERMEABILITY_FACTOR,
        }
    }
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Numerical {
    /// Relative tolerance used when verifying the constant identities
    pub relative_tolerance: f64,
}

impl Default for Numerical {
    fn default() -> Self {
        Numerical {
            relative_tolerance: 1.0e-9,
        }
    }
}
