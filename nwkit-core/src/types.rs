//! Domain newtypes for project identity.
//!
//! Both types validate on [`FromStr`], which is what the CLI parses through.
//! Deserialization is transparent so hand-edited manifests always load.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProjectError;

// ---------------------------------------------------------------------------
// ProjectName
// ---------------------------------------------------------------------------

/// Human-facing project name. Used as the manifest `name` and window title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ProjectName {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| ProjectError::InvalidName {
            value: s.to_owned(),
            reason,
        };
        if s.trim().is_empty() {
            return Err(invalid("must not be empty"));
        }
        if s.chars().any(char::is_control) {
            return Err(invalid("must not contain control characters"));
        }
        Ok(Self(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// PackageId
// ---------------------------------------------------------------------------

/// Reverse-domain style package identifier (`com.example.app`, or just `pkg`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(String);

impl PackageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PackageId {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| ProjectError::InvalidPackageId {
            value: s.to_owned(),
            reason,
        };
        if s.is_empty() {
            return Err(invalid("must not be empty"));
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        {
            return Err(invalid("allowed characters are A-Z, a-z, 0-9, '.', '_', '-'"));
        }
        if s.starts_with('.') || s.ends_with('.') {
            return Err(invalid("must not start or end with '.'"));
        }
        if s.contains("..") {
            return Err(invalid("segments must not be empty"));
        }
        Ok(Self(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
