// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Lifecycle states and wait targets.

use gax::error::Error;

/// Implemented by resources that report a lifecycle state.
///
/// Every Block Storage resource (volumes, boot volumes, volume groups, and
/// their backups) has an id and a lifecycle state. The wait engine only needs
/// these two fields to decide if a resource reached the desired state.
///
/// Both fields are optional: the service may omit them in some responses, and
/// a missing lifecycle state never matches any wait target.
pub trait LifecycleResource {
    /// The lifecycle states known to this version of the library.
    ///
    /// The service may return states not in this list. They are not errors.
    const KNOWN_LIFECYCLE_STATES: &'static [&'static str];

    /// The resource id, used to query the resource while waiting.
    fn resource_id(&self) -> Option<&str>;

    /// The current lifecycle state, as returned by the service.
    fn lifecycle_state(&self) -> Option<&str>;
}

/// An error in the configuration of a wait target.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum WaitTargetError {
    #[error("the lifecycle state at position {0} in the wait target is blank")]
    BlankState(usize),
}

/// The set of lifecycle states that completes a wait.
///
/// Lifecycle states are compared without regard to case. The target keeps
/// the states in insertion order, lower-cased, and without duplicates.
///
/// An empty target means "do not wait". Composite operations with an empty
/// target return the response of the mutating request immediately.
///
/// # Example
/// ```
/// # use blockstorage_waiter::WaitTarget;
/// let target = WaitTarget::new(["AVAILABLE", "faulty", "Available"]);
/// assert_eq!(target.len(), 2);
/// assert!(target.contains("Faulty"));
/// assert_eq!(target.iter().collect::<Vec<_>>(), vec!["available", "faulty"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WaitTarget {
    states: Vec<String>,
}

impl WaitTarget {
    /// Creates a target from a sequence of lifecycle states.
    pub fn new<I, V>(states: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let mut target = Self::default();
        for state in states {
            target.insert(state);
        }
        target
    }

    /// Adds a lifecycle state to the target.
    ///
    /// Returns `false` if the state was already present.
    pub fn insert<V: Into<String>>(&mut self, state: V) -> bool {
        let state = state.into().to_lowercase();
        if self.states.contains(&state) {
            return false;
        }
        self.states.push(state);
        true
    }

    /// Returns true if there are no states to wait for.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The number of distinct states in the target.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if `state` is in the target, ignoring case.
    pub fn contains(&self, state: &str) -> bool {
        let state = state.to_lowercase();
        self.states.iter().any(|s| *s == state)
    }

    /// Iterates over the (lower-cased) states, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(String::as_str)
    }

    /// Verifies the target can be used in a wait.
    ///
    /// Blank states cannot match any resource, they are almost certainly a
    /// bug in the application.
    pub fn validate(&self) -> gax::Result<()> {
        match self.states.iter().position(|s| s.trim().is_empty()) {
            Some(index) => Err(Error::binding(WaitTargetError::BlankState(index))),
            None => Ok(()),
        }
    }

    /// Returns the states in the target that `T` does not know about.
    ///
    /// # Example
    /// ```
    /// # use blockstorage_waiter::{LifecycleResource, WaitTarget};
    /// struct Disk;
    /// impl LifecycleResource for Disk {
    ///     const KNOWN_LIFECYCLE_STATES: &'static [&'static str] = &["AVAILABLE"];
    ///     fn resource_id(&self) -> Option<&str> { None }
    ///     fn lifecycle_state(&self) -> Option<&str> { None }
    /// }
    /// let target = WaitTarget::new(["available", "melted"]);
    /// assert_eq!(target.unknown_states::<Disk>(), vec!["melted"]);
    /// ```
    pub fn unknown_states<T: LifecycleResource>(&self) -> Vec<&str> {
        self.iter()
            .filter(|s| {
                !T::KNOWN_LIFECYCLE_STATES
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(s))
            })
            .collect()
    }
}

impl<V: Into<String>> FromIterator<V> for WaitTarget {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl std::fmt::Display for WaitTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.states.join(", "))
    }
}
