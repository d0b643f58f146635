// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interchangeable list classifiers
//!
//! A classifier takes a list and returns a reordered or filtered copy. The
//! `ListReader` client is written against the `Classifier` trait only, so
//! any classifier (including a plain closure) can be swapped in.

mod def;

pub use def::{StrategyDef, StrategyParseError};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

/// A list classification strategy
pub trait Classifier<T> {
    /// Name shown in classification reports
    fn name(&self) -> &str;

    /// Return a classified copy of `items`; the input is left untouched
    fn classify(&self, items: &[T]) -> Vec<T>;
}

/// Reversed copy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReversedClassifier;

impl<T: Clone> Classifier<T> for ReversedClassifier {
    fn name(&self) -> &str {
        "ReversedClassifier"
    }

    fn classify(&self, items: &[T]) -> Vec<T> {
        items.iter().rev().cloned().collect()
    }
}

/// Shuffled copy
///
/// With a seed the shuffle is reproducible; without one it draws from the
/// thread-local RNG.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomClassifier {
    pub seed: Option<u64>,
}

impl RandomClassifier {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl<T: Clone> Classifier<T> for RandomClassifier {
    fn name(&self) -> &str {
        "RandomClassifier"
    }

    fn classify(&self, items: &[T]) -> Vec<T> {
        let mut shuffled = items.to_vec();
        match self.seed {
            Some(seed) => shuffled.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => shuffled.shuffle(&mut rand::thread_rng()),
        }
        shuffled
    }
}

/// Ascending sorted copy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortingClassifier;

impl<T: Ord + Clone> Classifier<T> for SortingClassifier {
    fn name(&self) -> &str {
        "SortingClassifier"
    }

    fn classify(&self, items: &[T]) -> Vec<T> {
        let mut sorted = items.to_vec();
        sorted.sort();
        sorted
    }
}

/// Copy without the elements at the given positions
///
/// Positions past the end are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveIndicesClassifier {
    pub indices: Vec<usize>,
}

impl RemoveIndicesClassifier {
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
        }
    }
}

impl<T: Clone> Classifier<T> for RemoveIndicesClassifier {
    fn name(&self) -> &str {
        "RemoveIndicesClassifier"
    }

    fn classify(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.indices.contains(i))
            .map(|(_, item)| item.clone())
            .collect()
    }
}

/// Rotation that starts the list at `initial_index`
///
/// `items[i..]` followed by `items[..i]`, with `i` clamped to the length, so
/// an index past the end leaves the order unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialIndexClassifier {
    pub initial_index: usize,
}

impl InitialIndexClassifier {
    pub const DEFAULT_INDEX: usize = 5;

    pub fn new(initial_index: usize) -> Self {
        Self { initial_index }
    }
}

impl Default for InitialIndexClassifier {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INDEX)
    }
}

impl<T: Clone> Classifier<T> for InitialIndexClassifier {
    fn name(&self) -> &str {
        "InitialIndexClassifier"
    }

    fn classify(&self, items: &[T]) -> Vec<T> {
        let split = self.initial_index.min(items.len());
        let (head, tail) = items.split_at(split);
        tail.iter().chain(head).cloned().collect()
    }
}

/// Drops everything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackHoleClassifier;

impl<T> Classifier<T> for BlackHoleClassifier {
    fn name(&self) -> &str {
        "BlackHoleClassifier"
    }

    fn classify(&self, _items: &[T]) -> Vec<T> {
        Vec::new()
    }
}

/// A named closure used as a classifier
#[derive(Clone)]
pub struct FnClassifier<F> {
    name: String,
    f: F,
}

impl<T, F> Classifier<T> for FnClassifier<F>
where
    F: Fn(&[T]) -> Vec<T>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn classify(&self, items: &[T]) -> Vec<T> {
        (self.f)(items)
    }
}

/// Wrap a closure as a classifier
///
/// Closures capturing extra arguments (a seed, a threshold) stand in for
/// parameterised classifier types.
pub fn classifier_fn<T, F>(name: impl Into<String>, f: F) -> FnClassifier<F>
where
    F: Fn(&[T]) -> Vec<T>,
{
    FnClassifier {
        name: name.into(),
        f,
    }
}

/// Result of running one classifier over a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification<T> {
    pub strategy: String,
    pub given: Vec<T>,
    pub classified: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Display for Classification<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "The provided classifier is {}", self.strategy)?;
        writeln!(f, "Given list {:?}", self.given)?;
        write!(f, "Classified list {:?}", self.classified)
    }
}

/// Client that classifies a fixed list with a pluggable strategy
pub struct ListReader<T> {
    items: Vec<T>,
    strategy: Box<dyn Classifier<T>>,
}

impl<T: Clone + std::fmt::Debug> ListReader<T> {
    pub fn new(items: Vec<T>, strategy: impl Classifier<T> + 'static) -> Self {
        Self::from_boxed(items, Box::new(strategy))
    }

    pub fn from_boxed(items: Vec<T>, strategy: Box<dyn Classifier<T>>) -> Self {
        Self { items, strategy }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Swap the strategy, keeping the list
    pub fn set_strategy(&mut self, strategy: impl Classifier<T> + 'static) {
        self.strategy = Box::new(strategy);
    }

    /// Classify with the reader's own strategy
    pub fn classify_list(&self) -> Classification<T> {
        self.classify_with(self.strategy.as_ref())
    }

    /// Classify with a one-off strategy, leaving the reader's own in place
    pub fn classify_with(&self, strategy: &dyn Classifier<T>) -> Classification<T> {
        let classified = strategy.classify(&self.items);
        tracing::info!(
            strategy = strategy.name(),
            given = ?self.items,
            classified = ?classified,
            "classified list"
        );

        Classification {
            strategy: strategy.name().to_string(),
            given: self.items.clone(),
            classified,
        }
    }
}

#[cfg(test)]
#[path = "strategy_tests.rs"]
mod tests;
