//! High-level settlement runtime.
//!
//! The runtime owns the shared [`SeedLedger`] and an optional
//! [`SeedRepository`], and exposes a builder-based API for settlement
//! triggers. [`Runtime`] is cheap to clone; clones share one ledger.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use hits_core::{GameSeedState, PcgRng, ResolverConfig, RngOracle, SeedPolicy, Sha256Rng};

use crate::api::{Result, Settlement, SettlementRequest};
use crate::ledger::SeedLedger;
use crate::repository::{FileSeedRepository, SeedRepository};

/// Which RNG oracle backs the ledger.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OracleKind {
    #[default]
    Pcg,
    #[strum(serialize = "sha256")]
    Sha256,
}

impl OracleKind {
    pub fn build(self) -> Box<dyn RngOracle> {
        match self {
            Self::Pcg => Box::new(PcgRng),
            Self::Sha256 => Box::new(Sha256Rng),
        }
    }
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub resolver: ResolverConfig,
    pub oracle: OracleKind,
    /// Directory of the file repository; `None` keeps seeds in memory only.
    pub data_dir: Option<PathBuf>,
    /// Save the ledger after every settlement (default: true)
    pub persist_every_settlement: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            resolver: ResolverConfig::default(),
            oracle: OracleKind::default(),
            data_dir: None,
            persist_every_settlement: true,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HITS_SEED_POLICY` - `zero_default` or `strict` (default: zero_default)
    /// - `HITS_SLASH_BOUND` - Inclusive slash upper bound (default: u64::MAX)
    /// - `HITS_ORACLE` - `pcg` or `sha256` (default: pcg)
    /// - `HITS_DATA_DIR` - Directory for the seed snapshot (default: in-memory)
    /// - `HITS_PERSIST` - Save after every settlement (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(policy) = read_env::<SeedPolicy>("HITS_SEED_POLICY") {
            config.resolver.seed_policy = policy;
        }

        if let Some(bound) = read_env::<u64>("HITS_SLASH_BOUND") {
            config.resolver.slash_bound = bound;
        }

        if let Some(oracle) = read_env::<OracleKind>("HITS_ORACLE") {
            config.oracle = oracle;
        }

        config.data_dir = env::var("HITS_DATA_DIR").ok().map(PathBuf::from);

        if let Some(persist) = read_env::<bool>("HITS_PERSIST") {
            config.persist_every_settlement = persist;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Settlement runtime.
#[derive(Clone)]
pub struct Runtime {
    ledger: Arc<SeedLedger>,
    repository: Option<Arc<dyn SeedRepository>>,
    config: RuntimeConfig,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn ledger(&self) -> &Arc<SeedLedger> {
        &self.ledger
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Settle one resolution event.
    ///
    /// When a repository is configured and `persist_every_settlement` is set,
    /// the settled seed map is saved before it is committed to the ledger. A
    /// failed save returns the error and leaves the ledger as it was, so the
    /// request can be retried without folding its input twice.
    pub fn settle(&self, request: SettlementRequest) -> Result<Settlement> {
        let settlement = match &self.repository {
            Some(repository) if self.config.persist_every_settlement => self
                .ledger
                .settle_with_save(&request, |state| Ok(repository.save(state)?))
                .inspect_err(|e| {
                    tracing::warn!("Settlement of {} not committed: {}", request.game_id, e)
                })?,
            _ => self.ledger.settle(&request)?,
        };

        tracing::info!(
            "Settled {} (input {}, salt {}) -> seed {}, slash {}",
            request.game_id,
            request.input,
            request.salt,
            settlement.seed,
            settlement.values.slash
        );

        Ok(settlement)
    }

    /// Save the ledger to the repository, if any.
    ///
    /// Settlements are held off until the save returns.
    pub fn persist(&self) -> Result<()> {
        if let Some(repository) = &self.repository {
            self.ledger.save_with(|state| Ok(repository.save(state)?))?;
        }
        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameSeedState>,
    repository: Option<Arc<dyn SeedRepository>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            repository: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide an initial seed map instead of loading one from the repository
    pub fn initial_state(mut self, state: GameSeedState) -> Self {
        self.state = Some(state);
        self
    }

    /// Set a custom repository.
    ///
    /// Takes precedence over `data_dir` in the configuration.
    pub fn repository(mut self, repository: impl SeedRepository + 'static) -> Self {
        self.repository = Some(Arc::new(repository));
        self
    }

    pub fn build(self) -> Result<Runtime> {
        let repository: Option<Arc<dyn SeedRepository>> =
            match (self.repository, &self.config.data_dir) {
                (Some(repository), _) => Some(repository),
                (None, Some(dir)) => Some(Arc::new(FileSeedRepository::new(dir)?)),
                (None, None) => None,
            };

        let state = match (self.state, &repository) {
            (Some(state), _) => state,
            (None, Some(repository)) => repository.load_or_default()?,
            (None, None) => GameSeedState::new(),
        };

        tracing::debug!(
            "Building runtime with {} oracle, {} policy, {} restored seeds",
            self.config.oracle,
            self.config.resolver.seed_policy,
            state.len()
        );

        let ledger = SeedLedger::with_state(
            self.config.oracle.build(),
            self.config.resolver.clone(),
            state,
        );

        Ok(Runtime {
            ledger: Arc::new(ledger),
            repository,
            config: self.config,
        })
    }
}
