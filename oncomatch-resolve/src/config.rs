use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use oncomatch_core::errors::AlterationError;
use oncomatch_core::models::ReferenceGenome;

fn default_include_alternative_allele() -> bool {
    true
}

///
/// Resolver settings, read from TOML:
///
/// ```toml
/// reference_genome = "GRCh37"
/// include_alternative_allele = true
///
/// [abbreviations]
/// CTD = "C-terminal domain"
/// ```
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Genome used when a call does not name one.
    pub reference_genome: Option<String>,
    #[serde(default = "default_include_alternative_allele")]
    pub include_alternative_allele: bool,
    /// Merged over the built-in abbreviation table.
    #[serde(default)]
    pub abbreviations: BTreeMap<String, String>,
}

#[derive(Error, Debug)]
pub enum ResolverConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error("Invalid reference genome in resolver config: {0}")]
    InvalidReferenceGenome(#[from] AlterationError),
}

pub type ResolverConfigResult<T> = std::result::Result<T, ResolverConfigError>;

impl ResolverConfig {
    pub fn reference_genome(&self) -> ResolverConfigResult<Option<ReferenceGenome>> {
        self.reference_genome
            .as_deref()
            .map(str::parse::<ReferenceGenome>)
            .transpose()
            .map_err(ResolverConfigError::from)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            reference_genome: None,
            include_alternative_allele: default_include_alternative_allele(),
            abbreviations: BTreeMap::new(),
        }
    }
}

impl FromStr for ResolverConfig {
    type Err = ResolverConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: ResolverConfig = toml::from_str(s)?;
        // fail on load, not on first use
        config.reference_genome()?;
        Ok(config)
    }
}

impl TryFrom<&Path> for ResolverConfig {
    type Error = ResolverConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        toml_str.parse()
    }
}
