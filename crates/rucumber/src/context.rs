//! Shared execution context handed to step handlers and hooks.
//!
//! A single [`StepContext`] lives for a whole feature run. Handlers stash
//! fixture state under a name and later steps read it back by name and type.
//! Nothing is cleared between scenarios.

use std::any::Any;
use std::fmt;

use hashbrown::HashMap;

/// Named, type-erased values shared across the steps of a run.
///
/// # Examples
///
/// ```
/// use rucumber::StepContext;
///
/// let mut ctx = StepContext::default();
/// ctx.insert("answer", 42_u32);
///
/// assert_eq!(ctx.get::<u32>("answer"), Some(&42));
/// assert_eq!(ctx.get::<String>("answer"), None);
/// ```
#[derive(Default)]
pub struct StepContext {
    values: HashMap<String, Box<dyn Any>>,
}

impl StepContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `name`, returning the previous value when it had
    /// the same type.
    pub fn insert<T: Any>(&mut self, name: impl Into<String>, value: T) -> Option<T> {
        let name = name.into();
        log::trace!("context insert {name}");
        self.values
            .insert(name, Box::new(value))
            .and_then(|previous| previous.downcast::<T>().ok())
            .map(|previous| *previous)
    }

    /// Borrow the value stored under `name` if it has type `T`.
    #[must_use]
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.values.get(name)?.downcast_ref::<T>()
    }

    /// Mutably borrow the value stored under `name` if it has type `T`.
    pub fn get_mut<T: Any>(&mut self, name: &str) -> Option<&mut T> {
        self.values.get_mut(name)?.downcast_mut::<T>()
    }

    /// Remove and return the value stored under `name` if it has type `T`.
    ///
    /// A value of another type is left in place.
    pub fn remove<T: Any>(&mut self, name: &str) -> Option<T> {
        if !self.values.get(name).is_some_and(|value| value.is::<T>()) {
            return None;
        }
        self.values
            .remove(name)
            .and_then(|value| value.downcast::<T>().ok())
            .map(|value| *value)
    }

    /// Whether any value is stored under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Names of the stored values, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.values.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the context holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Drop every stored value.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl fmt::Debug for StepContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepContext")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests;
