use thiserror::Error;
use tracing::debug;

pub const WARD_UNITS_ENV: &str = "CLINIC_WARD_UNITS";
pub const DEFAULT_UNIT_CAPACITY: u32 = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CLINIC_WARD_UNITS JSON is malformed: {message}")]
    MalformedJson { message: String },

    #[error("ward unit entry #{index} invalid capacity '{value}': must be integer")]
    InvalidCapacity { index: usize, value: String },

    #[error("ward unit entry #{index} has zero capacity")]
    ZeroCapacity { index: usize },

    #[error("no ward units configured")]
    Empty,

    #[error("ward units exceed {max} beds in total")]
    TotalOverflow { max: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WardsConfig {
    pub units: Vec<u32>, // capacity per unit, in creation order
}

impl Default for WardsConfig {
    fn default() -> Self {
        Self {
            units: vec![DEFAULT_UNIT_CAPACITY],
        }
    }
}

pub fn load_from_env() -> Result<WardsConfig, ConfigError> {
    match std::env::var(WARD_UNITS_ENV) {
        Ok(raw) if !raw.trim().is_empty() => parse_units(&raw),
        _ => Ok(WardsConfig::default()),
    }
}

/// Parse a unit list, either a JSON array (`[10, 6]`) or a compact
/// comma-separated list (`10,6`).
pub fn parse_units(raw: &str) -> Result<WardsConfig, ConfigError> {
    let raw = raw.trim();

    let units = if raw.starts_with('[') {
        serde_json::from_str::<Vec<u32>>(raw).map_err(|e| ConfigError::MalformedJson {
            message: e.to_string(),
        })?
    } else {
        raw.split(',')
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .enumerate()
            .map(|(idx, entry)| {
                entry.parse::<u32>().map_err(|_| ConfigError::InvalidCapacity {
                    index: idx + 1,
                    value: entry.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    if units.is_empty() {
        return Err(ConfigError::Empty);
    }
    if let Some(pos) = units.iter().position(|&c| c == 0) {
        return Err(ConfigError::ZeroCapacity { index: pos + 1 });
    }
    // pool totals are u32
    units
        .iter()
        .try_fold(0u32, |acc, &c| acc.checked_add(c))
        .ok_or(ConfigError::TotalOverflow { max: u32::MAX })?;

    debug!(?units, "parsed ward units");
    Ok(WardsConfig { units })
}
