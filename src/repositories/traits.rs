use crate::models::ContactRecord;

/// Repository for managing contact records.
///
/// Provides abstraction over contact storage so the birthday engine and
/// the command service work against any keyed record collection.
/// Implementations are not synchronized; a host sharing one across threads
/// must hold a single lock around each read-modify-write sequence.
pub trait ContactRepository {
    /// Insert a record, replacing any record with the same name.
    fn add_record(&mut self, record: ContactRecord);

    /// Look up a record by exact name.
    fn find(&self, name: &str) -> Option<&ContactRecord>;

    /// Look up a record by exact name for modification.
    fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord>;

    /// Remove a record. Absent names are a no-op.
    fn delete(&mut self, name: &str) -> Option<ContactRecord>;

    /// All records in iteration order.
    fn records(&self) -> Box<dyn Iterator<Item = &ContactRecord> + '_>;

    /// Number of records.
    fn len(&self) -> usize {
        self.records().count()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
