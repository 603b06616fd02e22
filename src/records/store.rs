//! # Student Store
//!
//! Ordered in-memory sequence of students plus the next-id counter.
//!
//! The store is shared between request handlers behind an `Arc`. All
//! operations take the lock for their whole duration and never await while
//! holding it, so every request observes and applies a complete mutation.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{RecordError, RecordResult};
use super::student::{Student, StudentInput, Validation};

struct StoreState {
    students: Vec<Student>,
    next_id: u64,
}

/// In-memory student store
pub struct StudentStore {
    state: RwLock<StoreState>,
    validation: Validation,
}

/// The five example records a fresh process starts with
pub fn seed_students() -> Vec<Student> {
    let seed = [
        (1, "John Doe", 20, "A", "john@school.com"),
        (2, "Jane Smith", 21, "B", "jane@school.com"),
        (3, "Mike Johnson", 19, "A", "mike@school.com"),
        (4, "Sarah Wilson", 22, "C", "sarah@school.com"),
        (5, "Tom Brown", 18, "B", "tom@school.com"),
    ];

    seed.into_iter()
        .map(|(id, name, age, grade, email)| Student {
            id,
            name: name.to_string(),
            age,
            grade: grade.to_string(),
            email: email.to_string(),
        })
        .collect()
}

impl StudentStore {
    /// Create an empty store; the first id handed out is 1
    pub fn new() -> Self {
        Self::with_students(Vec::new())
    }

    /// Create a store holding the example records (ids 1-5, next id 6)
    pub fn seeded() -> Self {
        Self::with_students(seed_students())
    }

    /// Create a store from existing records. The counter starts after the
    /// highest id present.
    pub fn with_students(students: Vec<Student>) -> Self {
        let next_id = students.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        Self {
            state: RwLock::new(StoreState { students, next_id }),
            validation: Validation::default(),
        }
    }

    /// Set how strictly incoming fields are checked
    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    pub fn validation(&self) -> Validation {
        self.validation
    }

    fn read(&self) -> RecordResult<RwLockReadGuard<'_, StoreState>> {
        self.state
            .read()
            .map_err(|_| RecordError::Internal("Lock poisoned".to_string()))
    }

    fn write(&self) -> RecordResult<RwLockWriteGuard<'_, StoreState>> {
        self.state
            .write()
            .map_err(|_| RecordError::Internal("Lock poisoned".to_string()))
    }

    /// All records in store order
    pub fn list(&self) -> RecordResult<Vec<Student>> {
        Ok(self.read()?.students.clone())
    }

    /// Number of records
    pub fn len(&self) -> RecordResult<usize> {
        Ok(self.read()?.students.len())
    }

    pub fn is_empty(&self) -> RecordResult<bool> {
        Ok(self.len()? == 0)
    }

    /// The id the next create will receive
    pub fn next_id(&self) -> RecordResult<u64> {
        Ok(self.read()?.next_id)
    }

    /// First record with the given id
    pub fn get(&self, id: u64) -> RecordResult<Student> {
        self.read()?
            .students
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(RecordError::NotFound)
    }

    /// Validate the input, assign the next id and append the record
    pub fn create(&self, input: &StudentInput) -> RecordResult<Student> {
        let fields = input.validate(self.validation)?;

        let mut state = self.write()?;
        let student = Student::from_fields(state.next_id, fields);
        state.next_id += 1;
        state.students.push(student.clone());

        tracing::info!(id = student.id, "student created");
        Ok(student)
    }

    /// Replace every field of the record with the given id, keeping its
    /// position and id
    pub fn update(&self, id: u64, input: &StudentInput) -> RecordResult<Student> {
        let fields = input.validate(self.validation)?;

        let mut state = self.write()?;
        let slot = state
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RecordError::NotFound)?;
        *slot = Student::from_fields(id, fields);

        tracing::info!(id, "student updated");
        Ok(slot.clone())
    }

    /// Remove the record with the given id and return it
    pub fn delete(&self, id: u64) -> RecordResult<Student> {
        let mut state = self.write()?;
        let idx = state
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or(RecordError::NotFound)?;
        let removed = state.students.remove(idx);

        tracing::info!(id, "student deleted");
        Ok(removed)
    }
}

impl Default for StudentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::StudentFields;

    fn amy() -> StudentInput {
        StudentFields::new("Amy", 20, "A", "amy@x.com").into()
    }

    #[test]
    fn test_seeded_store() {
        let store = StudentStore::seeded();
        let students = store.list().unwrap();

        assert_eq!(students.len(), 5);
        assert_eq!(
            students.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
        assert_eq!(store.next_id().unwrap(), 6);
    }

    #[test]
    fn test_create_assigns_increasing_ids() {
        let store = StudentStore::seeded();

        let first = store.create(&amy()).unwrap();
        let second = store.create(&amy()).unwrap();

        assert_eq!(first.id, 6);
        assert_eq!(second.id, 7);
        assert_eq!(store.len().unwrap(), 7);
        assert_eq!(store.list().unwrap().last(), Some(&second));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = StudentStore::seeded();

        let created = store.create(&amy()).unwrap();
        store.delete(created.id).unwrap();
        let again = store.create(&amy()).unwrap();

        assert_eq!(again.id, created.id + 1);
    }

    #[test]
    fn test_empty_store_starts_at_one() {
        let store = StudentStore::new();
        assert!(store.is_empty().unwrap());
        assert_eq!(store.create(&amy()).unwrap().id, 1);
    }

    #[test]
    fn test_get_missing() {
        let store = StudentStore::seeded();
        assert_eq!(store.get(99), Err(RecordError::NotFound));
    }

    #[test]
    fn test_invalid_create_leaves_store_untouched() {
        let store = StudentStore::seeded();
        let before = store.list().unwrap();

        let result = store.create(&StudentInput::default());

        assert_eq!(result, Err(RecordError::MissingFields));
        assert_eq!(store.list().unwrap(), before);
        assert_eq!(store.next_id().unwrap(), 6);
    }

    #[test]
    fn test_update_keeps_position() {
        let store = StudentStore::seeded();
        let before = store.list().unwrap();

        let updated = store
            .update(3, &StudentFields::new("Mike J", 20, "B", "mj@school.com").into())
            .unwrap();
        let after = store.list().unwrap();

        assert_eq!(updated.id, 3);
        assert_eq!(after[2], updated);
        for (i, (old, new)) in before.iter().zip(after.iter()).enumerate() {
            if i != 2 {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_update_missing_and_invalid() {
        let store = StudentStore::seeded();
        let before = store.list().unwrap();

        assert_eq!(store.update(42, &amy()), Err(RecordError::NotFound));
        assert_eq!(
            store.update(1, &StudentInput::default()),
            Err(RecordError::MissingFields)
        );
        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let store = StudentStore::seeded();
        let before = store.list().unwrap();

        let removed = store.delete(2).unwrap();
        let after = store.list().unwrap();

        assert_eq!(removed, before[1]);
        assert_eq!(after.len(), before.len() - 1);
        let expected: Vec<_> = before.into_iter().filter(|s| s.id != 2).collect();
        assert_eq!(after, expected);
    }

    #[test]
    fn test_second_delete_is_not_found() {
        let store = StudentStore::seeded();
        store.delete(5).unwrap();
        assert_eq!(store.delete(5), Err(RecordError::NotFound));
        assert_eq!(store.len().unwrap(), 4);
    }

    #[test]
    fn test_strict_store_rejects_out_of_range_age() {
        let store = StudentStore::seeded().with_validation(Validation::Strict);
        let result = store.create(&StudentFields::new("Kid", 12, "A", "kid@x.com").into());

        assert!(matches!(
            result,
            Err(RecordError::InvalidField { field: "age", .. })
        ));
        assert_eq!(store.len().unwrap(), 5);
    }
}
