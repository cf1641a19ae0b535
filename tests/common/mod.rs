#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Semaphore;

use waypoint::{DirectoryError, Region, RegionDirectory, Selection, SubRegion};

/// In-memory directory that records every call it receives.
#[derive(Default)]
pub struct FakeDirectory {
    regions: Option<Vec<Region>>,
    sub_regions: HashMap<String, Vec<SubRegion>>,
    delays: HashMap<String, Duration>,
    gate: Option<Arc<Semaphore>>,
    calls: Mutex<Vec<String>>,
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_regions(mut self, codes: &[&str]) -> Self {
        self.regions = Some(codes.iter().map(|c| Region::new(*c)).collect());
        self
    }

    pub fn with_sub_regions(mut self, code: &str, names: &[&str]) -> Self {
        self.sub_regions
            .insert(code.to_string(), names.iter().map(|n| SubRegion::new(*n)).collect());
        self
    }

    /// Delay the sub-region answer for `code`.
    pub fn with_delay(mut self, code: &str, delay: Duration) -> Self {
        self.delays.insert(code.to_string(), delay);
        self
    }

    /// Every sub-region read waits for one permit from `gate`.
    pub fn with_gate(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sub_region_calls(&self, code: &str) -> usize {
        let needle = format!("sub_regions:{}", code);
        self.calls().iter().filter(|c| **c == needle).count()
    }
}

#[async_trait]
impl RegionDirectory for FakeDirectory {
    async fn regions(&self) -> Result<Vec<Region>, DirectoryError> {
        self.calls.lock().unwrap().push("regions".to_string());
        self.regions
            .clone()
            .ok_or_else(|| DirectoryError::Network("simulated outage".to_string()))
    }

    async fn sub_regions(&self, region_code: &str) -> Result<Vec<SubRegion>, DirectoryError> {
        self.calls.lock().unwrap().push(format!("sub_regions:{}", region_code));
        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate closed").forget();
        }
        if let Some(delay) = self.delays.get(region_code) {
            tokio::time::sleep(*delay).await;
        }
        self.sub_regions
            .get(region_code)
            .cloned()
            .ok_or_else(|| DirectoryError::Status {
                status: 400,
                url: format!("/estados/{}/municipios", region_code),
            })
    }
}

/// Navigator that remembers every selection it was handed.
pub fn recording_navigator() -> (Arc<Mutex<Vec<Selection>>>, impl Fn(Selection) + Send + Sync + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |selection: Selection| sink.lock().unwrap().push(selection))
}

pub fn values(options: &[waypoint::SelectableOption]) -> Vec<String> {
    options.iter().map(|o| o.value.clone()).collect()
}

pub fn labels(options: &[waypoint::SelectableOption]) -> Vec<String> {
    options.iter().map(|o| o.label.clone()).collect()
}
