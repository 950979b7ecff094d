//! Feature-state types shared across the bridge.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one logical sensor reading on a device.
///
/// Single-instance features (e.g. the temperature sensor) omit the instance;
/// range features carry the instance the remote feed assigned to them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureKey {
    /// Feature name as reported by the remote feed (e.g. "range").
    pub feature: String,

    /// Instance discriminator for multi-instance features.
    pub instance: Option<String>,
}

impl FeatureKey {
    /// Key for a single-instance feature.
    pub fn new(feature: impl Into<String>) -> Self {
        Self {
            feature: feature.into(),
            instance: None,
        }
    }

    /// Key for an instance of a multi-instance feature.
    pub fn with_instance(feature: impl Into<String>, instance: impl Into<String>) -> Self {
        Self {
            feature: feature.into(),
            instance: Some(instance.into()),
        }
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.instance {
            Some(instance) => write!(f, "{}#{}", self.feature, instance),
            None => write!(f, "{}", self.feature),
        }
    }
}

/// Temperature unit reported by the remote feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
}

/// Raw value shapes the remote feed produces.
///
/// Untagged on the wire: a bare number, a bare string, or a scaled
/// temperature object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RemoteValue {
    /// Plain numeric reading (range features).
    Number(f64),

    /// String-enum reading (e.g. detection states).
    Text(String),

    /// Temperature reading with its unit.
    Temperature {
        value: f64,
        scale: TemperatureScale,
    },
}

/// One feature's current state as reported by a remote snapshot.
///
/// Produced transiently per fetch; the bridge does not own these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureStateRecord {
    pub feature_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    pub value: RemoteValue,
}

impl FeatureStateRecord {
    /// Whether this record answers for the given key.
    pub fn matches(&self, key: &FeatureKey) -> bool {
        self.feature_name == key.feature && self.instance == key.instance
    }
}
