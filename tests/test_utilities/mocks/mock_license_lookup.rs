use async_trait::async_trait;
use sbom_license_enricher::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock LicenseLookup answering from a fixed table and recording every call
#[derive(Clone)]
pub struct MockLicenseLookup {
    source: LookupSource,
    licenses: HashMap<String, String>,
    delay: Duration,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockLicenseLookup {
    pub fn new(source: LookupSource) -> Self {
        Self {
            source,
            licenses: HashMap::new(),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_license(mut self, name: &str, license: &str) -> Self {
        self.licenses.insert(name.to_string(), license.to_string());
        self
    }

    /// Makes every lookup take `delay`, to widen race windows
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_for(&self, name: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.as_str() == name)
            .count()
    }
}

#[async_trait]
impl LicenseLookup for MockLicenseLookup {
    fn source(&self) -> LookupSource {
        self.source
    }

    async fn lookup(&self, name: &str) -> LicenseLabel {
        self.calls.lock().unwrap().push(name.to_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        LicenseNormalizer::normalize(self.licenses.get(name).map(String::as_str))
    }
}
