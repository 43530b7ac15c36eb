//! Runtime options shared by commands that open the seed ledger.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use runtime::{OracleKind, Runtime, RuntimeConfig};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OracleArg {
    /// PCG-XSH-RR generator (fast)
    Pcg,
    /// SHA-256 keyed hash
    Sha256,
}

impl From<OracleArg> for OracleKind {
    fn from(arg: OracleArg) -> Self {
        match arg {
            OracleArg::Pcg => OracleKind::Pcg,
            OracleArg::Sha256 => OracleKind::Sha256,
        }
    }
}

/// Overrides applied on top of `RuntimeConfig::from_env`.
#[derive(Args, Debug)]
pub struct RuntimeArgs {
    /// Directory holding the seed snapshot (overrides HITS_DATA_DIR)
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// RNG oracle (overrides HITS_ORACLE)
    #[arg(long, value_enum)]
    pub oracle: Option<OracleArg>,
}

impl RuntimeArgs {
    pub fn config(&self) -> RuntimeConfig {
        let mut config = RuntimeConfig::from_env();
        if let Some(dir) = &self.data_dir {
            config.data_dir = Some(dir.clone());
        }
        if let Some(oracle) = self.oracle {
            config.oracle = oracle.into();
        }
        config
    }

    pub fn open(&self) -> Result<Runtime> {
        Self::open_with(self.config())
    }

    pub fn open_with(config: RuntimeConfig) -> Result<Runtime> {
        let location = config
            .data_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|| "memory".to_string());

        Runtime::builder()
            .config(config)
            .build()
            .with_context(|| format!("Failed to open seed ledger at {location}"))
    }
}
