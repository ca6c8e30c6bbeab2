use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::directory::ApproverGroup;

/// Thresholds driving the smart-default approver suggestions. Defaults match
/// the prototype's hard-coded constants; deployments override them from a
/// TOML policy file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApprovalPolicyConfig {
    /// Finance is suggested on reimbursements above this amount.
    pub expense_finance_threshold: Decimal,
    /// Finance is suggested on bills, requests, and POs above this amount.
    pub procurement_finance_threshold: Decimal,
    /// Finance is suggested once a project's spent/budget ratio passes this.
    pub budget_watermark: Decimal,
    /// Group every new chain starts from.
    pub default_approver_group: ApproverGroup,
}

impl Default for ApprovalPolicyConfig {
    fn default() -> Self {
        Self {
            expense_finance_threshold: Decimal::new(500, 0),
            procurement_finance_threshold: Decimal::new(50_000, 0),
            budget_watermark: Decimal::new(85, 2),
            default_approver_group: ApproverGroup::ProjectManagers,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read policy file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse policy config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("policy validation failed: {0}")]
    Validation(String),
}

impl ApprovalPolicyConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.budget_watermark <= Decimal::ZERO || self.budget_watermark > Decimal::ONE {
            return Err(ConfigError::Validation(format!(
                "budget_watermark must be in (0, 1], got {}",
                self.budget_watermark
            )));
        }
        if self.expense_finance_threshold < Decimal::ZERO
            || self.procurement_finance_threshold < Decimal::ZERO
        {
            return Err(ConfigError::Validation(
                "finance thresholds must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}
