use std::{cmp, str::FromStr};

use thiserror::Error;

use crate::{felt::Modulus, parser::parse_int};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to parse env var {key} with value {value}: {message}")]
    InvalidEnv { key: String, value: String, message: String },
    #[error("Modulus must be a positive integer, got `{0}`")]
    InvalidModulus(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcConfig {
    /// 0 = silent, 1 = warnings, 2 = trace computed bounds
    pub verbosity: u8,
    pub modulus: Modulus,
}

impl Default for CalcConfig {
    fn default() -> Self {
        CalcConfig { verbosity: 1, modulus: Modulus::felt252() }
    }
}

impl CalcConfig {
    pub fn from_env() -> Result<CalcConfig, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, `from_env` uses the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<CalcConfig, ConfigError> {
        let default = CalcConfig::default();
        let verbosity = parse_env(&lookup, "BOUNDCALC_VERBOSITY", default.verbosity)?;
        let modulus = match lookup("BOUNDCALC_MODULUS").filter(|v| !v.is_empty()) {
            Some(value) => parse_modulus(&value).map_err(|err| ConfigError::InvalidEnv {
                key: "BOUNDCALC_MODULUS".to_string(),
                value,
                message: err.to_string(),
            })?,
            None => default.modulus,
        };
        Ok(CalcConfig { verbosity, modulus })
    }

    /// Applies `-v` / `-q` counts on top of the configured level.
    pub fn adjust_verbosity(&mut self, verbose: u8, quiet: u8) {
        self.verbosity = self.verbosity.saturating_add(verbose).saturating_sub(quiet);
    }

    #[inline]
    pub fn verbosity(&self) -> u8 {
        cmp::min(16, self.verbosity)
    }

    #[inline]
    pub fn should_log(&self, level: u8) -> bool {
        self.verbosity() >= level
    }
}

/// Parses a modulus literal. Anything other than the felt252 prime is reported as "modulus".
pub fn parse_modulus(str: &str) -> Result<Modulus, ConfigError> {
    let value = parse_int(str).map_err(|_| ConfigError::InvalidModulus(str.to_string()))?;
    if value == *Modulus::felt252().value() {
        return Ok(Modulus::felt252());
    }
    Modulus::custom("modulus", value).ok_or_else(|| ConfigError::InvalidModulus(str.to_string()))
}

fn parse_env_opt<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr, <T as FromStr>::Err: std::fmt::Display
{
    match lookup(key) {
        Some(val) if val.is_empty() => Ok(None),
        Some(val) => match val.trim().parse::<T>() {
            Ok(v) => Ok(Some(v)),
            Err(err) => Err(ConfigError::InvalidEnv { key: key.to_string(), value: val, message: err.to_string() }),
        },
        None => Ok(None),
    }
}

fn parse_env<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr, <T as FromStr>::Err: std::fmt::Display
{
    Ok(parse_env_opt(lookup, key)?.unwrap_or(default))
}

#[cfg(test)]
fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key: &str| vars.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string())
}

#[test]
fn test_defaults() {
    let c = CalcConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(c, CalcConfig::default());
    assert!(c.should_log(1));
    assert!(!c.should_log(2));
}

#[test]
fn test_env_overrides() {
    let c = CalcConfig::from_lookup(lookup_from(&[("BOUNDCALC_VERBOSITY", "3"), ("BOUNDCALC_MODULUS", "0x3001")])).unwrap();
    assert_eq!(c.verbosity, 3);
    assert_eq!(c.modulus.value(), &num_bigint::BigInt::from(12289));
    assert_eq!(c.modulus.name(), "modulus");

    let c = CalcConfig::from_lookup(lookup_from(&[("BOUNDCALC_VERBOSITY", ""), ("BOUNDCALC_MODULUS", "")])).unwrap();
    assert_eq!(c, CalcConfig::default());
}

#[test]
fn test_env_errors() {
    assert!(matches!(
        CalcConfig::from_lookup(lookup_from(&[("BOUNDCALC_VERBOSITY", "loud")])),
        Err(ConfigError::InvalidEnv { .. })
    ));
    assert!(matches!(
        CalcConfig::from_lookup(lookup_from(&[("BOUNDCALC_MODULUS", "-5")])),
        Err(ConfigError::InvalidEnv { .. })
    ));
}

#[test]
fn test_adjust_verbosity() {
    let mut c = CalcConfig::default();
    c.adjust_verbosity(0, 5);
    assert_eq!(c.verbosity, 0);
    assert!(!c.should_log(1));
    c.adjust_verbosity(2, 0);
    assert!(c.should_log(2));
}

#[test]
fn test_parse_modulus() {
    assert_eq!(parse_modulus("0x800000000000011000000000000000000000000000000000000000000000001"), Ok(Modulus::felt252()));
    assert!(parse_modulus("0").is_err());
    assert!(parse_modulus("abc").is_err());
}
