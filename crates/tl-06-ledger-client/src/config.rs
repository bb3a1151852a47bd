//! Deployment configuration.
//!
//! A deployment is a program id plus the work item layout that program
//! stores. The layout cannot be detected from the data, so it is always
//! configured.

use serde::{Deserialize, Serialize};
use shared_types::Pubkey;
use std::env;
use thiserror::Error;
use tl_03_record_schemas::WorkItemLayout;

/// Program id of the assignment-layout deployment.
pub const ASSIGNMENT_PROGRAM_ID: &str = "2YmU1jJSZvn99rUPz4yAsCcyjCQ5aZPRA2FXKQZK4T9o";

/// Program id of the competition-layout deployment.
pub const COMPETITION_PROGRAM_ID: &str = "FBtigfHS7NXnQYgjaGACFY8SVmd3sX2XmsdWna2ak99L";

pub const DEFAULT_MAX_CREATE_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}: invalid program id '{value}': {reason}")]
    InvalidProgramId {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("{var}: {reason}")]
    InvalidLayout { var: &'static str, reason: String },

    #[error("{var}: invalid treasury '{value}': {reason}")]
    InvalidTreasury {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("{var}: expected a positive integer, got '{value}'")]
    InvalidAttempts { var: &'static str, value: String },

    /// The program id names a known deployment but the layout disagrees.
    #[error("Program {program_id} stores the {expected} layout, not {configured}")]
    LayoutMismatch {
        program_id: Pubkey,
        expected: WorkItemLayout,
        configured: WorkItemLayout,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    pub program_id: Pubkey,
    pub layout: WorkItemLayout,
    /// Fee recipient. `None` means the namespace authority.
    pub treasury: Option<Pubkey>,
    pub max_create_attempts: u32,
}

impl DeploymentConfig {
    pub fn new(program_id: Pubkey, layout: WorkItemLayout) -> Self {
        Self {
            program_id,
            layout,
            treasury: None,
            max_create_attempts: DEFAULT_MAX_CREATE_ATTEMPTS,
        }
    }

    /// The assignment (claim and review) deployment.
    pub fn assignment() -> Self {
        Self::new(known_program(ASSIGNMENT_PROGRAM_ID), WorkItemLayout::Assignment)
    }

    /// The competition (submissions and winner) deployment.
    pub fn competition() -> Self {
        Self::new(known_program(COMPETITION_PROGRAM_ID), WorkItemLayout::Competition)
    }

    pub fn with_treasury(mut self, treasury: Pubkey) -> Self {
        self.treasury = Some(treasury);
        self
    }

    pub fn with_max_create_attempts(mut self, attempts: u32) -> Self {
        self.max_create_attempts = attempts.max(1);
        self
    }

    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `TL_PROGRAM_ID`: base58 program id (default: competition deployment)
    /// - `TL_WORK_ITEM_LAYOUT`: `assignment` or `competition` (default: the
    ///   known layout of the program id, otherwise competition)
    /// - `TL_TREASURY`: base58 fee recipient (default: namespace authority)
    /// - `TL_MAX_CREATE_ATTEMPTS`: positive integer (default: 3)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let program_id = match lookup("TL_PROGRAM_ID") {
            Some(value) => value
                .trim()
                .parse::<Pubkey>()
                .map_err(|e| ConfigError::InvalidProgramId {
                    var: "TL_PROGRAM_ID",
                    reason: e.to_string(),
                    value,
                })?,
            None => known_program(COMPETITION_PROGRAM_ID),
        };

        let known = known_layout(&program_id);
        let layout = match lookup("TL_WORK_ITEM_LAYOUT") {
            Some(value) => {
                let configured = value
                    .parse::<WorkItemLayout>()
                    .map_err(|reason| ConfigError::InvalidLayout {
                        var: "TL_WORK_ITEM_LAYOUT",
                        reason,
                    })?;
                if let Some(expected) = known.filter(|expected| *expected != configured) {
                    return Err(ConfigError::LayoutMismatch {
                        program_id,
                        expected,
                        configured,
                    });
                }
                configured
            }
            None => known.unwrap_or(WorkItemLayout::Competition),
        };

        let treasury = lookup("TL_TREASURY")
            .map(|value| {
                value
                    .trim()
                    .parse::<Pubkey>()
                    .map_err(|e| ConfigError::InvalidTreasury {
                        var: "TL_TREASURY",
                        reason: e.to_string(),
                        value,
                    })
            })
            .transpose()?;

        let max_create_attempts = match lookup("TL_MAX_CREATE_ATTEMPTS") {
            Some(value) => match value.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidAttempts {
                        var: "TL_MAX_CREATE_ATTEMPTS",
                        value,
                    })
                }
            },
            None => DEFAULT_MAX_CREATE_ATTEMPTS,
        };

        Ok(Self {
            program_id,
            layout,
            treasury,
            max_create_attempts,
        })
    }
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self::competition()
    }
}

/// Layout of a known deployment.
pub fn known_layout(program_id: &Pubkey) -> Option<WorkItemLayout> {
    if *program_id == known_program(ASSIGNMENT_PROGRAM_ID) {
        Some(WorkItemLayout::Assignment)
    } else if *program_id == known_program(COMPETITION_PROGRAM_ID) {
        Some(WorkItemLayout::Competition)
    } else {
        None
    }
}

fn known_program(id: &str) -> Pubkey {
    // Both constants decode to 32 bytes.
    id.parse().unwrap_or_default()
}
