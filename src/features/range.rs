//! Range-feature discovery.
//!
//! Range-backed sensors (humidity, CO) are addressed by the instance the
//! remote feed assigned to the backing range capability. Each sensor kind
//! carries a preference-ordered list of asset IDs; the first one present
//! in the device's capability set wins.

use serde::{Deserialize, Serialize};

/// Asset IDs that can back a humidity sensor, in preference order.
pub const HUMIDITY_RANGE_ASSETS: &[&str] = &["Alexa.AirQuality.Humidity"];

/// Asset IDs that can back a carbon monoxide sensor, in preference order.
pub const CARBON_MONOXIDE_RANGE_ASSETS: &[&str] = &["Alexa.AirQuality.CarbonMonoxide"];

/// One range capability reported by a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeFeature {
    /// Asset ID identifying what the range measures.
    pub asset_id: String,

    /// Instance discriminator used to address this range in state queries.
    pub instance: String,

    /// Human-readable range name, used in logs.
    pub range_name: String,
}

/// Select the backing range feature for a sensor kind.
///
/// Returns the first feature whose asset ID appears in `preferences`,
/// scanning preferences in order. `None` means the device cannot back
/// this sensor and the host should not register it.
pub fn select_range_feature<'a>(
    preferences: &[&str],
    available: &'a [RangeFeature],
) -> Option<&'a RangeFeature> {
    preferences
        .iter()
        .find_map(|asset_id| available.iter().find(|f| f.asset_id == *asset_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(asset_id: &str, instance: &str) -> RangeFeature {
        RangeFeature {
            asset_id: asset_id.to_string(),
            instance: instance.to_string(),
            range_name: asset_id.rsplit('.').next().unwrap_or(asset_id).to_string(),
        }
    }

    #[test]
    fn test_selects_by_preference_order() {
        let available = vec![
            feature("Alexa.AirQuality.ParticulateMatter", "4"),
            feature("Alexa.AirQuality.Humidity", "7"),
        ];
        let selected = select_range_feature(HUMIDITY_RANGE_ASSETS, &available).unwrap();
        assert_eq!(selected.instance, "7");
    }

    #[test]
    fn test_absent_asset_yields_none() {
        let available = vec![feature("Alexa.AirQuality.ParticulateMatter", "4")];
        assert!(select_range_feature(CARBON_MONOXIDE_RANGE_ASSETS, &available).is_none());
    }
}
