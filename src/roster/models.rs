use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::core::error::DevOrbitError;

/// Presence of a nearby developer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Online,
    Busy,
    Away,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Online => "online",
            Status::Busy => "busy",
            Status::Away => "away",
        };
        f.write_str(label)
    }
}

/// A developer record as supplied by a data source
///
/// Records are read-only once loaded; views refer to them by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    /// Unique opaque identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Handle shown as `@handle`
    pub handle: String,

    /// Distance from the viewer in kilometres
    #[serde(alias = "distance")]
    pub distance_km: f64,

    /// Skills in display priority order
    #[serde(default)]
    pub skills: Vec<String>,

    /// Current presence
    pub status: Status,

    /// Short badge tokens
    #[serde(default)]
    pub badges: Vec<String>,

    /// Whether the developer is open for collaboration
    #[serde(default)]
    pub open_for_collab: bool,
}

impl Developer {
    /// First character of the name, used as the avatar
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// Check the invariants of a developer set: non-empty unique ids and
/// finite, non-negative distances.
pub fn validate_roster(developers: &[Developer]) -> Result<(), DevOrbitError> {
    let mut seen = HashSet::new();

    for dev in developers {
        if dev.id.is_empty() {
            return Err(DevOrbitError::ValidationError(format!(
                "developer '{}' has an empty id",
                dev.name
            )));
        }

        if !seen.insert(dev.id.as_str()) {
            return Err(DevOrbitError::ValidationError(format!(
                "duplicate developer id '{}'",
                dev.id
            )));
        }

        if !dev.distance_km.is_finite() || dev.distance_km < 0.0 {
            return Err(DevOrbitError::ValidationError(format!(
                "developer '{}' has invalid distance {}",
                dev.id, dev.distance_km
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dev(id: &str, distance_km: f64) -> Developer {
        Developer {
            id: id.to_string(),
            name: format!("Dev {}", id),
            handle: format!("dev{}", id),
            distance_km,
            skills: vec!["Rust".to_string()],
            status: Status::Online,
            badges: vec![],
            open_for_collab: false,
        }
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "7",
            "name": "Ada",
            "handle": "ada",
            "distance": 0.4,
            "skills": ["Rust", "Go"],
            "status": "away",
            "badges": ["🚀"],
            "openForCollab": true
        }"#;

        let dev: Developer = serde_json::from_str(json).unwrap();
        assert_eq!(dev.distance_km, 0.4);
        assert_eq!(dev.status, Status::Away);
        assert!(dev.open_for_collab);
        assert_eq!(dev.initial(), 'A');
    }

    #[test]
    fn test_validate_ok() {
        assert!(validate_roster(&[dev("1", 0.0), dev("2", 3.5)]).is_ok());
        assert!(validate_roster(&[]).is_ok());
    }

    #[test]
    fn test_validate_duplicate_id() {
        let err = validate_roster(&[dev("1", 1.0), dev("1", 2.0)]).unwrap_err();
        assert!(err.to_string().contains("duplicate developer id '1'"));
    }

    #[test]
    fn test_validate_distance() {
        assert!(validate_roster(&[dev("1", -0.1)]).is_err());
        assert!(validate_roster(&[dev("1", f64::NAN)]).is_err());
    }

    #[test]
    fn test_validate_empty_id() {
        assert!(validate_roster(&[dev("", 1.0)]).is_err());
    }
}
