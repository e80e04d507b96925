//! Nested-list flattening implementations.

use crate::utils::VariantInfo;

/// A value or an arbitrarily nested list of values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Nested<T> {
    Value(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Wrap a flat sequence of values as one list.
    pub fn list_of<I: IntoIterator<Item = T>>(values: I) -> Self {
        Nested::List(values.into_iter().map(Nested::Value).collect())
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Value(value)
    }
}

/// Recursive depth-first flatten.
///
/// ```
/// use practice_algo::collections::flatten::{flatten_original, Nested::*};
///
/// let nested = [Value(1), List(vec![Value(2), Value(3)]), List(vec![Value(4), List(vec![Value(5)])])];
/// assert_eq!(flatten_original(&nested), vec![1, 2, 3, 4, 5]);
/// ```
pub fn flatten_original<T: Clone>(items: &[Nested<T>]) -> Vec<T> {
    let mut flat = Vec::new();
    for item in items {
        match item {
            Nested::Value(value) => flat.push(value.clone()),
            Nested::List(inner) => flat.extend(flatten_original(inner)),
        }
    }
    flat
}

/// Flatten with an explicit stack of iterators, so deep nesting cannot
/// overflow the call stack.
pub fn flatten_iterative<T: Clone>(items: &[Nested<T>]) -> Vec<T> {
    let mut flat = Vec::new();
    let mut stack = vec![items.iter()];

    while let Some(top) = stack.last_mut() {
        match top.next() {
            Some(Nested::Value(value)) => flat.push(value.clone()),
            Some(Nested::List(inner)) => stack.push(inner.iter()),
            None => {
                stack.pop();
            }
        }
    }
    flat
}

pub type FlattenFn = fn(&[Nested<i64>]) -> Vec<i64>;

pub fn available_variants() -> Vec<VariantInfo<FlattenFn>> {
    vec![
        VariantInfo {
            name: "original",
            description: "Recursive depth-first traversal",
            function: flatten_original::<i64>,
        },
        VariantInfo {
            name: "iterative",
            description: "Explicit stack of slice iterators",
            function: flatten_iterative::<i64>,
        },
    ]
}
