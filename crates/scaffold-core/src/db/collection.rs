//! Module: db::collection
//! Responsibility: the record-collection seam and its in-memory implementation.
//! Does not own: query-string parsing or access control.
//! Boundary: filters hand compiled predicates and order terms to collections.

use crate::{
    db::{
        direction::OrderTerm,
        predicate::{Predicate, PredicateProgram, ValidateError, read_path_values},
    },
    model::entity::EntityModel,
    traits::{EntityKind, EntityValue},
    value::Value,
};
use std::{cmp::Ordering, collections::HashSet};

///
/// RecordCollection
///
/// An ordered set of records that predicates and orderings compose against.
/// Storage stays with the implementor.
///

pub trait RecordCollection: Sized {
    fn model(&self) -> &'static EntityModel;

    /// Keep only records matching `predicate`.
    fn filter(self, predicate: &Predicate) -> Result<Self, ValidateError>;

    /// Drop records matching `predicate`.
    fn exclude(self, predicate: &Predicate) -> Result<Self, ValidateError>;

    /// Deduplicate by primary key; the first occurrence wins.
    #[must_use]
    fn distinct(self) -> Self;

    /// Stable sort by the given terms.
    #[must_use]
    fn order_by(self, terms: &[OrderTerm]) -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

///
/// RecordSet
///
/// In-memory record collection for one entity type.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RecordSet<E> {
    records: Vec<E>,
}

impl<E> RecordSet<E> {
    #[must_use]
    pub const fn new(records: Vec<E>) -> Self {
        Self { records }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.records.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        &self.records
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<E> {
        self.records
    }
}

impl<E> RecordSet<E>
where
    E: EntityKind + EntityValue,
{
    /// Keep records for which `program` evaluates to `keep`.
    #[must_use]
    pub fn retain_program(mut self, program: &PredicateProgram, keep: bool) -> Self {
        self.records.retain(|record| program.eval(record) == keep);
        self
    }
}

impl<E> FromIterator<E> for RecordSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<E> IntoIterator for RecordSet<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<E> RecordCollection for RecordSet<E>
where
    E: EntityKind + EntityValue,
{
    fn model(&self) -> &'static EntityModel {
        E::MODEL
    }

    fn filter(self, predicate: &Predicate) -> Result<Self, ValidateError> {
        let program = PredicateProgram::compile(E::MODEL, predicate)?;

        Ok(self.retain_program(&program, true))
    }

    fn exclude(self, predicate: &Predicate) -> Result<Self, ValidateError> {
        let program = PredicateProgram::compile(E::MODEL, predicate)?;

        Ok(self.retain_program(&program, false))
    }

    fn distinct(mut self) -> Self {
        let mut seen = HashSet::new();

        // records without a primary key are never duplicates
        self.records
            .retain(|record| record.primary_key_value().is_none_or(|pk| seen.insert(pk)));
        self
    }

    fn order_by(self, terms: &[OrderTerm]) -> Self {
        if terms.is_empty() {
            return self;
        }

        let mut decorated: Vec<(Vec<Value>, E)> = self
            .records
            .into_iter()
            .map(|record| (sort_keys(&record, terms), record))
            .collect();

        decorated.sort_by(|(left, _), (right, _)| compare_keys(left, right, terms));

        Self::new(decorated.into_iter().map(|(_, record)| record).collect())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

// One sort key per term; to-many paths sort by their first reached value.
fn sort_keys<E: EntityValue>(record: &E, terms: &[OrderTerm]) -> Vec<Value> {
    terms
        .iter()
        .map(|term| {
            read_path_values(record, term.slots())
                .into_iter()
                .next()
                .unwrap_or(Value::Null)
        })
        .collect()
}

fn compare_keys(left: &[Value], right: &[Value], terms: &[OrderTerm]) -> Ordering {
    for ((left, right), term) in left.iter().zip(right).zip(terms) {
        let ordering = term.direction().apply(Value::canonical_cmp(left, right));

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

///
/// TESTS
///
