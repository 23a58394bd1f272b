use std::error::Error;
use std::fs;
use std::path::Path;

use logmap_core::SweepConfig;

pub mod bench;
pub mod sweep;

pub(crate) fn load_config(path: Option<&Path>) -> Result<SweepConfig, Box<dyn Error>> {
    let config = match path {
        Some(path) => serde_yaml::from_str(&fs::read_to_string(path)?)?,
        None => SweepConfig::default(),
    };
    config.validate()?;
    Ok(config)
}
