//! League configuration
//!
//! Defaults cover a standard league. A JSON file named by
//! `HOOPS_LEAGUE_CONFIG_PATH` (or passed explicitly) overrides any subset of
//! fields.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};

use crate::domain::{Money, SalaryCap, SalaryStrategy, ValidationError};

pub const LEAGUE_CONFIG_PATH_ENV: &str = "HOOPS_LEAGUE_CONFIG_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    /// Cap for teams registered by hand
    pub default_salary_cap: Money,

    pub max_roster_size: usize,

    /// Ceiling of the rookie-scale salary strategy
    pub rookie_scale_max_annual: Money,

    /// Cap for teams created by a league import
    pub import_salary_cap: Money,

    /// Minimum contract total for imported players
    pub import_salary_floor: Money,

    /// Contract total per overall-rating point for imported players
    pub import_salary_per_rating_point: Money,

    pub import_contract_years: i32,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            default_salary_cap: Money::of(140_000_000.0),
            max_roster_size: 20,
            rookie_scale_max_annual: Money::of(5_000_000.0),
            import_salary_cap: Money::of(155_000_000.0),
            import_salary_floor: Money::of(1_200_000.0),
            import_salary_per_rating_point: Money::of(350_000.0),
            import_contract_years: 2,
        }
    }
}

impl LeagueConfig {
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let config: LeagueConfig = serde_json::from_str(json)
            .map_err(|e| ValidationError::InvalidConfig(format!("failed to parse JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ValidationError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ValidationError::InvalidConfig(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Defaults when the variable is unset or blank.
    pub fn from_env() -> Result<Self, ValidationError> {
        let Ok(path) = env::var(LEAGUE_CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        tracing::info!("loading league config from {}={}", LEAGUE_CONFIG_PATH_ENV, path);
        Self::from_path(Path::new(path))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let positive = [
            ("default_salary_cap", self.default_salary_cap),
            ("rookie_scale_max_annual", self.rookie_scale_max_annual),
            ("import_salary_cap", self.import_salary_cap),
        ];
        for (field, value) in positive {
            if value <= Money::zero() {
                return Err(ValidationError::InvalidConfig(format!("{} must be > 0, got {}", field, value)));
            }
        }
        if self.import_salary_floor.is_negative() || self.import_salary_per_rating_point.is_negative() {
            return Err(ValidationError::InvalidConfig("import salary terms must be >= 0".to_string()));
        }
        if self.max_roster_size == 0 {
            return Err(ValidationError::InvalidConfig("max_roster_size must be > 0".to_string()));
        }
        if self.import_contract_years <= 0 {
            return Err(ValidationError::InvalidConfig(format!(
                "import_contract_years must be > 0, got {}",
                self.import_contract_years
            )));
        }
        Ok(())
    }

    pub fn new_salary_cap(&self) -> SalaryCap {
        SalaryCap::new(self.default_salary_cap)
    }

    pub fn rookie_scale(&self) -> SalaryStrategy {
        SalaryStrategy::RookieScale { max_annual: self.rookie_scale_max_annual }
    }
}
