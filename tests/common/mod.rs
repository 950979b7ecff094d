//! Shared test helpers: a programmable remote fetcher and snapshot
//! builders.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use futures_util::future::BoxFuture;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use sensor_bridge::{
    FeatureStateRecord, FetchError, FetchResult, RemoteStateFetcher, RemoteValue,
    TemperatureScale,
};

/// Remote fetcher driven by a script of responses, one per call.
///
/// Counts calls; once the script is exhausted every further call fails
/// with a transport error.
pub struct ProgrammableFetcher {
    responses: Mutex<VecDeque<FetchResult<Vec<FeatureStateRecord>>>>,
    calls: AtomicU32,
}

impl ProgrammableFetcher {
    pub fn new(responses: Vec<FetchResult<Vec<FeatureStateRecord>>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicU32::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Self::new(Vec::new())
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Append another scripted response.
    pub fn push(&self, response: FetchResult<Vec<FeatureStateRecord>>) {
        self.responses.lock().unwrap().push_back(response);
    }
}

impl RemoteStateFetcher for ProgrammableFetcher {
    fn fetch(&self) -> BoxFuture<'_, FetchResult<Vec<FeatureStateRecord>>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::Transport("no backend available".into())))
        })
    }
}

/// A snapshot with one numeric range record.
pub fn range_record(instance: &str, level: f64) -> FeatureStateRecord {
    FeatureStateRecord {
        feature_name: "range".to_string(),
        instance: Some(instance.to_string()),
        value: RemoteValue::Number(level),
    }
}

/// A snapshot record for the temperature sensor.
pub fn temperature_record(value: f64, scale: TemperatureScale) -> FeatureStateRecord {
    FeatureStateRecord {
        feature_name: "temperatureSensor".to_string(),
        instance: None,
        value: RemoteValue::Temperature { value, scale },
    }
}
