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

//! Predicates deciding when a wait is complete.

use crate::{LifecycleResource, WaitTarget};

/// Decides if a resource snapshot completes a wait.
///
/// Any `Fn(&T) -> bool` closure is a predicate.
///
/// # Example
/// ```
/// # use blockstorage_waiter::predicate::PollPredicate;
/// fn is_large(size: &u64) -> bool { *size > 1024 }
/// assert!(is_large.matches(&2048_u64));
/// ```
pub trait PollPredicate<T>: Send + Sync {
    /// Returns true if `resource` is in the desired state.
    fn matches(&self, resource: &T) -> bool;
}

impl<T, F> PollPredicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn matches(&self, resource: &T) -> bool {
        self(resource)
    }
}

/// Matches resources whose lifecycle state is in a [WaitTarget].
///
/// The comparison ignores case. Resources without a lifecycle state never
/// match.
///
/// # Example
/// ```
/// # use blockstorage_waiter::{LifecycleResource, WaitTarget};
/// # use blockstorage_waiter::predicate::{LifecycleStatePredicate, PollPredicate};
/// struct Disk(Option<&'static str>);
/// impl LifecycleResource for Disk {
///     const KNOWN_LIFECYCLE_STATES: &'static [&'static str] = &["AVAILABLE"];
///     fn resource_id(&self) -> Option<&str> { None }
///     fn lifecycle_state(&self) -> Option<&str> { self.0 }
/// }
/// let predicate = LifecycleStatePredicate::new(WaitTarget::new(["AVAILABLE"]));
/// assert!(predicate.matches(&Disk(Some("Available"))));
/// assert!(!predicate.matches(&Disk(None)));
/// ```
#[derive(Clone, Debug)]
pub struct LifecycleStatePredicate {
    target: WaitTarget,
}

impl LifecycleStatePredicate {
    pub fn new(target: WaitTarget) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &WaitTarget {
        &self.target
    }
}

impl<T: LifecycleResource> PollPredicate<T> for LifecycleStatePredicate {
    fn matches(&self, resource: &T) -> bool {
        resource
            .lifecycle_state()
            .is_some_and(|state| self.target.contains(state))
    }
}
