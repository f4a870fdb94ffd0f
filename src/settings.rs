use serde::{Deserialize, Serialize};
use std::{fs::File, path::Path};

use crate::{akari_info, integrator::WhittedParams, sampling::SamplerSettings, state::Features};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Serializable bundle of everything that configures a render.
#[derive(Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    pub features: Features,
    pub whitted: WhittedParams,
    pub sampler: SamplerSettings,
}

impl Settings {
    /// Loads `Settings` from a YAML file.
    pub fn load(path: &Path) -> Result<Settings> {
        let settings = serde_yaml::from_reader(File::open(path)?)?;
        akari_info!("Settings loaded from '{}'", path.to_string_lossy());
        Ok(settings)
    }

    /// Stores this `Settings` as a YAML file.
    pub fn store(&self, path: &Path) -> Result<()> {
        serde_yaml::to_writer(File::create(path)?, self)?;
        akari_info!("Settings written to '{}'", path.to_string_lossy());
        Ok(())
    }
}
