//! Adoption-domain enums and the status transition rule.
//!
//! Both enums are stored as TEXT in the database (matching the CHECK
//! constraints in the migrations) and serialized SCREAMING_CASE on the wire.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle status of an adoption request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdoptionStatus {
    Pending,
    Approved,
    Rejected,
}

impl AdoptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdoptionStatus::Pending => "PENDING",
            AdoptionStatus::Approved => "APPROVED",
            AdoptionStatus::Rejected => "REJECTED",
        }
    }

    /// Whether entering this status takes the referenced dog off the market.
    ///
    /// Only approval closes the dog; rejecting or re-pending a request does
    /// not re-open a dog that was already adopted out.
    pub fn closes_dog(&self) -> bool {
        matches!(self, AdoptionStatus::Approved)
    }
}

impl fmt::Display for AdoptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdoptionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(AdoptionStatus::Pending),
            "APPROVED" => Ok(AdoptionStatus::Approved),
            "REJECTED" => Ok(AdoptionStatus::Rejected),
            other => Err(format!("Unknown adoption status: {other}")),
        }
    }
}

/// Dog gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MALE" => Ok(Gender::Male),
            "FEMALE" => Ok(Gender::Female),
            other => Err(format!("Unknown gender: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            AdoptionStatus::Pending,
            AdoptionStatus::Approved,
            AdoptionStatus::Rejected,
        ] {
            let parsed: AdoptionStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!("CANCELLED".parse::<AdoptionStatus>().is_err());
        assert!("pending".parse::<AdoptionStatus>().is_err());
    }

    #[test]
    fn test_only_approval_closes_dog() {
        assert!(AdoptionStatus::Approved.closes_dog());
        assert!(!AdoptionStatus::Pending.closes_dog());
        assert!(!AdoptionStatus::Rejected.closes_dog());
    }

    #[test]
    fn test_serde_wire_format() {
        let json = serde_json::to_string(&AdoptionStatus::Approved).unwrap();
        assert_eq!(json, "\"APPROVED\"");

        let status: AdoptionStatus = serde_json::from_str("\"REJECTED\"").unwrap();
        assert_eq!(status, AdoptionStatus::Rejected);
    }
}
