//! Generic keyed table used by the in-memory store.
//!
//! Rows live in a `DashMap` keyed by record identifier. Each row also carries
//! the sequence number it was inserted with, so listings come back in
//! insertion order even though the map itself is unordered.

use crate::models::{
    Article, ContactSubmission, Course, Enrollment, Instructor, Review, Testimonial, User,
};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// A record that can be stored in a [`Table`]
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

impl_record!(
    User,
    Course,
    Instructor,
    Enrollment,
    Review,
    Article,
    Testimonial,
    ContactSubmission,
);

#[derive(Debug)]
struct Row<T> {
    seq: u64,
    record: T,
}

/// Hash-indexed collection of owned records
#[derive(Debug)]
pub struct Table<T> {
    rows: DashMap<String, Row<T>>,
    next_seq: AtomicU64,
}

impl<T: Record> Table<T> {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    /// Insert a record under its own identifier and return a copy of it.
    /// Replacing an existing identifier moves it to the end of the order.
    pub fn insert(&self, record: T) -> T {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.rows.insert(
            record.id().to_string(),
            Row {
                seq,
                record: record.clone(),
            },
        );
        record
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.rows.get(id).map(|row| row.record.clone())
    }

    /// All records in insertion order
    pub fn all(&self) -> Vec<T> {
        self.filter(|_| true)
    }

    /// Records matching `pred`, in insertion order
    pub fn filter<F>(&self, pred: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        let mut rows: Vec<(u64, T)> = self
            .rows
            .iter()
            .filter(|row| pred(&row.record))
            .map(|row| (row.seq, row.record.clone()))
            .collect();
        rows.sort_by_key(|(seq, _)| *seq);
        rows.into_iter().map(|(_, record)| record).collect()
    }

    /// The earliest-inserted record matching `pred`
    pub fn find<F>(&self, pred: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        self.rows
            .iter()
            .filter(|row| pred(&row.record))
            .min_by_key(|row| row.seq)
            .map(|row| row.record.clone())
    }

    /// Mutate a record in place, keeping its position. `None` if absent.
    ///
    /// `f` runs while the row's shard is write-locked and must not touch
    /// this table.
    pub fn update<F>(&self, id: &str, f: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut row = self.rows.get_mut(id)?;
        f(&mut row.record);
        Some(row.record.clone())
    }

    /// Remove by identifier. Returns whether a record was removed.
    pub fn remove(&self, id: &str) -> bool {
        self.rows.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T: Record> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}
