use contact_book::models::ContactRecord;
use contact_book::repositories::ContactRepository;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

/// Mock contact repository for testing.
///
/// Keeps records sorted by name (not insertion order) and tracks method
/// calls for verification.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockContactRepository {
    records: BTreeMap<String, ContactRecord>,
    call_counts: Mutex<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn add_record(&mut self, record: ContactRecord) {
        self.track_call("add_record");
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.track_call("find");
        self.records.get(name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.track_call("find_mut");
        self.records.get_mut(name)
    }

    fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        self.track_call("delete");
        self.records.remove(name)
    }

    fn records(&self) -> Box<dyn Iterator<Item = &ContactRecord> + '_> {
        self.track_call("records");
        Box::new(self.records.values())
    }
}
