//! Module descriptor declaration and validation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Metadata one module advertises to the host.
///
/// Descriptors are declaration-only: they carry no behavior and are
/// validated once at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    /// Stable module name, e.g. `host.filesystem`.
    pub name: String,
    /// Module semantic version string (`major.minor.patch`).
    pub version: String,
}

impl ModuleDescriptor {
    /// Creates a descriptor from name and version strings.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Validates declaration-level descriptor invariants.
    pub fn validate(&self) -> Result<(), DescriptorValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DescriptorValidationError::EmptyName);
        }
        if !is_valid_module_name(name) {
            return Err(DescriptorValidationError::InvalidName(self.name.clone()));
        }

        let version = self.version.trim();
        if version.is_empty() {
            return Err(DescriptorValidationError::EmptyVersion);
        }
        if !is_semver_triplet(version) {
            return Err(DescriptorValidationError::InvalidVersion(
                self.version.clone(),
            ));
        }
        Ok(())
    }
}

fn is_valid_module_name(value: &str) -> bool {
    let mut chars = value.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };
    if !first.is_ascii_lowercase() && !first.is_ascii_digit() {
        return false;
    }

    let mut prev_separator = false;
    for c in chars {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            prev_separator = false;
            continue;
        }
        if c == '.' || c == '_' || c == '-' {
            if prev_separator {
                return false;
            }
            prev_separator = true;
            continue;
        }
        return false;
    }
    !prev_separator
}

fn is_semver_triplet(value: &str) -> bool {
    let parts: Vec<&str> = value.split('.').collect();
    if parts.len() != 3 {
        return false;
    }
    parts
        .iter()
        .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
}

/// Descriptor validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorValidationError {
    EmptyName,
    InvalidName(String),
    EmptyVersion,
    InvalidVersion(String),
}

impl Display for DescriptorValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "module name must not be empty"),
            Self::InvalidName(value) => write!(f, "module name is invalid: {value}"),
            Self::EmptyVersion => write!(f, "module version must not be empty"),
            Self::InvalidVersion(value) => write!(
                f,
                "module version is invalid: {value} (expected major.minor.patch)"
            ),
        }
    }
}

impl Error for DescriptorValidationError {}
