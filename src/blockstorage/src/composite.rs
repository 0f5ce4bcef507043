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

//! Mutations combined with a wait for the resulting lifecycle state.
//!
//! Each method sends a mutating request and then polls the affected resource
//! until it reaches one of the lifecycle states in a [WaitTarget]. An empty
//! target skips the wait: the methods return the response to the mutating
//! request.
//!
//! The request options apply to the mutating request only. The polling
//! requests use the default options.
//!
//! # Errors
//!
//! Invalid arguments (missing ids, blank target states, invalid waiter
//! options) are reported before sending any request, see
//! [is_binding][gax::error::Error::is_binding]. Errors in the mutating request
//! are returned unchanged. Once the mutating request succeeds its changes
//! remain in effect; any failure while waiting is returned as an error for
//! which [is_composite][gax::error::Error::is_composite] is true, with a
//! [CompositeOperationError] as its source.

use crate::Result;
use crate::client::BlockStorage;
use crate::model::*;
use gax::options::RequestOptions;
use gax::response::Response;
use std::future::Future;
use tracing::Instrument;
use waiter::composite::{delete_and_wait, mutate_and_wait};

pub use waiter::composite::{CompositeOperationError, DeleteOutcome, PartialResults};
pub use waiter::{WaitTarget, WaitTimeout, WaiterOptions};

/// Combines the [BlockStorage] operations with waits for lifecycle states.
///
/// # Example
/// ```
/// # use blockstorage::client::BlockStorage;
/// # use blockstorage::composite::*;
/// # use blockstorage::model::{CreateVolumeDetails, Volume};
/// # use gax::options::RequestOptions;
/// # use std::time::Duration;
/// # async fn sample(client: BlockStorage) -> anyhow::Result<()> {
/// let composite = BlockStorageCompositeOperations::new(client);
/// let details = CreateVolumeDetails::new()
///     .set_compartment_id("ocid1.compartment.oc1..example")
///     .set_availability_domain("Uocm:PHX-AD-1");
/// let result = composite
///     .create_volume_and_wait_for_state(
///         details,
///         WaitTarget::new(["AVAILABLE", "FAULTY"]),
///         RequestOptions::default(),
///         WaiterOptions::default().with_max_wait(Duration::from_secs(600)),
///     )
///     .await;
/// match result {
///     Ok(response) => println!("volume is {:?}", response.body().lifecycle_state),
///     Err(e) => match CompositeOperationError::<Volume, Volume>::from_error(&e) {
///         Some(c) => println!("created {:?}, but the wait failed: {}", c.partial_results().mutation().body().id, c.cause()),
///         None => println!("the volume was not created: {e}"),
///     },
/// }
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct BlockStorageCompositeOperations {
    client: BlockStorage,
}

impl BlockStorageCompositeOperations {
    pub fn new(client: BlockStorage) -> Self {
        Self { client }
    }

    /// The client used to send the requests.
    pub fn client(&self) -> &BlockStorage {
        &self.client
    }

    /// Creates a new volume and waits for it to reach one of the `target`
    /// states.
    ///
    /// Wait failures are reported as [CompositeOperationError<Volume, Volume>][CompositeOperationError].
    pub async fn create_volume_and_wait_for_state(
        &self,
        req: CreateVolumeDetails,
        target: WaitTarget,
        options: RequestOptions,
        waiter_options: WaiterOptions,
    ) -> Result<Response<Volume>> {
        let client = &self.client;
        let future = mutate_and_wait(
            || client.create_volume(req, options),
            |id| client.get_volume(id, RequestOptions::default()),
            target,
            &waiter_options,
        );
        traced("create_volume_and_wait_for_state", future).await
    }

    /// Updates a volume and waits for it to reach one of the `target` states.
    ///
    /// Wait failures are reported as [CompositeOperationError<Volume, Volume>][CompositeOperationError].
    pub async fn update_volume_and_wait_for_state(
        &self,
        volume_id: impl Into<String>,
        req: UpdateVolumeDetails,
        target: WaitTarget,
        options: RequestOptions,
        waiter_options: WaiterOptions,
    ) -> Result<Response<Volume>> {
        let volume_id = volume_id.into();
        gax::path_parameter::required("volume_id", &volume_id)?;
        let client = &self.client;
        let future = mutate_and_wait(
            || client.update_volume(volume_id, req, options),
            |id| client.get_volume(id, RequestOptions::default()),
            target,
            &waiter_options,
        );
        traced("update_volume_and_wait_for_state", future).await
    }

    /// Deletes a volume and waits for it to reach one of the `target` states,
    /// or to disappear.
    ///
    /// Wait failures are reported as [CompositeOperationError<(), Volume>][CompositeOperationError].
    pub async fn delete_volume_and_wait_for_state(
        &self,
        volume_id: impl Into<String>,
        target: WaitTarget,
        options: RequestOptions,
        waiter_options: WaiterOptions,
    ) -> Result<DeleteOutcome<Volume>> {
        let volume_id = volume_id.into();
        gax::path_parameter::required("volume_id", &volume_id)?;
        let client = &self.client;
        let future = delete_and_wait(
            &volume_id,
            |id| client.delete_volume(id, options),
            |id| client.get_volume(id, RequestOptions::default()),
            target,
            &waiter_options,
        );
        traced("delete_volume_and_wait_for_state", future).await
    }

    /// Creates a new boot volume and waits for it to reach one of the `target`
    /// states.
    ///
    /// Wait failures are reported as [CompositeOperationError<BootVolume, BootVolume>][CompositeOperationError].
    pub async fn create_boot_volume_and_wait_for_state(
        &self,
        req: CreateBootVolumeDetails,
        target: WaitTarget,
        options: RequestOptions,
        waiter_options: WaiterOptions,
    ) -> Result<Response<BootVolume>> {
        let client = &self.client;
        let future = mutate_and_wait(
            || client.create_boot_volume(req, options),
            |id| client.get_boot_volume(id, RequestOptions::default()),
            target,
            &waiter_options,
        );
        traced("create_boot_volume_and_wait_for_state", future).await
    }

    /// Updates a boot volume and waits for it to reach one of the `target` states.
    ///
    /// Wait failures are reported as [CompositeOperationError<BootVolume, BootVolume>][CompositeOperationError].
    pub async fn update_boot_volume_and_wait_for_state(
        &self,
        boot_volume_id: impl Into<String>,
        req: UpdateBootVolumeDetails,
        target: WaitTarget,
        options: RequestOptions,
        waiter_options: WaiterOptions,
    ) -> Result<Response<BootVolume>> {
        let boot_volume_id = boot_volume_id.into();
        gax::path_parameter::required("boot_volume_id", &boot_volume_id)?;
        let client = &self.client;
        let future = mutate_and_wait(
            || client.update_boot_volume(boot_volume_id, req, options),
            |id| client.get_boot_volume(id, RequestOptions::default()),
            target,
            &waiter_options,
        );
        traced("update_boot_volume_and_wait_for_state", future).await
    }

    /// Deletes a boot volume and waits for it to reach one of the `target` states,
    /// or to disappear.
    ///
    /// Wait failures are reported as [CompositeOperationError<(), BootVolume>][CompositeOperationError].
    pub async fn delete_boot_volume_and_wait_for_state(
        &self,
        boot_volume_id: impl Into<String>,
        target: WaitTarget,
        options: RequestOptions,
        waiter_options: WaiterOptions,
    ) -> Result<DeleteOutcome<BootVolume>> {
        let boot_volume_id = boot_volume_id.into();
        gax::path_parameter::required("boot_volume_id", &boot_volume_id)?;
        let client = &self.client;
        let future = delete_and_wait(
            &boot_volume_id,
            |id| client.delete_boot_volume(id, options),
            |id| client.get_boot_volume(id, RequestOptions::default()),
            target,
            &waiter_options,
        );
        traced("delete_boot_volume_and_wait_for_state", future).await
    }

    /// Creates a new volume group and waits for it to reach one of the `target`
    /// states.
    ///
    /// Wait failures are reported as [CompositeOperationError<VolumeGroup, VolumeGroup>][CompositeOperationError].
    pub async fn create_volume_group_and_wait_for_state(
        &self,
        req: CreateVolumeGroupDetails,
        target: WaitTarget,
        options: RequestOptions,
        waiter_options: WaiterOptions,
    ) -> Result<Response<VolumeGroup>> {
        let client = &self.client;
        let future = mutate_and_wait(
            || client.create_volume_group(req, options),
            |id| client.get_volume_group(id, RequestOptions::default()),
            target,
            &waiter_options,
        );
        traced("create_volume_group_and_wait_for_state", future).await
    }

    /// Updates a volume group and waits for it to reach one of the `target` states.
    ///
    /// Wait failures are reported as [CompositeOperationError<VolumeGroup, VolumeGroup>][CompositeOperationError].
    pub async fn update_volume_group_and_wait_for_state(
        &self,
        volume_group_id: impl Into<String>,
        req: UpdateVolumeGroupDetails,
        target: WaitTarget,
        options: RequestOptions,
        waiter_options: WaiterOptions,
    ) -> Result<Response<VolumeGroup>> {
        let volume_group_id = volume_group_id.into();
        gax::path_parameter::required("volume_group_id", &volume_group_id)?;
        let client = &self.client;
        let future = mutate_and_wait(
            || client.update_volume_group(volume_group_id, req, options),
            |id| client.get_volume_group(id, RequestOptions::default()),
            target,
            &waiter_options,
        );
        traced("update_volume_group_and_wait_for_state", future).await
    }

    /// Deletes a volume group and waits for it to reach one of the `target` states,
    /// or to disappear.
    ///
    /// Wait failures are reported as [CompositeOperationError<(), VolumeGroup>][CompositeOperationError].
    pub async fn delete_volume_group_and_wait_for_state(
        &self,
        volume_group_id: impl Into<String>,
        target: WaitTarget,
        options: RequestOptions,
        waiter_options: WaiterOptions,
    ) -> Result<DeleteOutcome<VolumeGroup>> {
        let volume_group_id = volume_group_id.into();
        gax::path_parameter::required("volume_group_id", &volume_group_id)?;
        let client = &self.client;
        let future = delete_and_wait(
            &volume_group_id,
            |id| client.delete_volume_group(id, options),
            |id| client.get_volume_group(id, RequestOptions::default()),
            target,
            &waiter_options,
        );
        traced("delete_volume_group_and_wait_for_state", future).await
    }

    /// Creates a new volume backup and waits for it to reach one of the `target`
    /// states.
    ///
    /// Wait failures are reported as [CompositeOperationError<VolumeBackup, VolumeBackup>][CompositeOperationError].
    pub async fn create_volume_backup_and_wait_for_state(
        &self,
        req: CreateVolumeBackupDetails,
        target: WaitTarget,
        options: RequestOptions,
        waiter_options: WaiterOptions,
    ) -> Result<Response<VolumeBackup>> {
        let client = &self.client;
        let future = mutate_and_wait(
            || client.create_volume_backup(req, options),
            |id| client.get_volume_backup(id, RequestOptions::default()),
            target,
            &waiter_options,
        );
        traced("create_volume_backup_and_wait_for_state", future).await
    }

    /// Updates a volume backup and waits for it to reach one of the `target` states.
    ///
    /// Wait failures are reported as [CompositeOperationError<VolumeBackup, VolumeBackup>][CompositeOperationError].
    pub async fn update_volume_backup_and_wait_for_state(
        &self,
        volume_backup_id: impl Into<String>,
        req: UpdateBackupDetails,
        target: WaitTarget,
        options: RequestOptions,
        waiter_options: WaiterOptions,
    ) -> Result<Response<VolumeBackup>> {
        let volume_backup_id = volume_backup_id.into();
        gax::path_parameter::required("volume_backup_id", &volume_backup_id)?;
        let client = &self.client;
        let future = mutate_and_wait(
            || client.update_volume_backup(volume_backup_id, req, options),
            |id| client.get_volume_backup(id, RequestOptions::default()),
            target,
            &waiter_options,
        );
        traced("update_volume_backup_and_wait_for_state", future).await
    }

    /// Deletes a volume backup and waits for it to reach one of the `target` states,
    /// or to disappear.
    ///
    /// Wait failures are reported as [CompositeOperationError<(), VolumeBackup>][CompositeOperationError].
    pub async fn delete_volume_backup_and_wait_for_state(
        &self,
        volume_backup_id: impl Into<String>,
        target: WaitTarget,
        options: RequestOptions,
        waiter_options: WaiterOptions,
    ) -> Result<DeleteOutcome<VolumeBackup>> {
        let volume_backup_id = volume_backup_id.into();
        gax::path_parameter::required("volume_backup_id", &volume_backup_id)?;
        let client = &self.client;
        let future = delete_and_wait(
            &volume_backup_id,
            |id| client.delete_volume_backup(id, options),
            |id| client.get_volume_backup(id, RequestOptions::default()),
            target,
            &waiter_options,
        );
        traced("delete_volume_backup_and_wait_for_state", future).await
    }

    /// Copies a volume backup to another region and waits for the copy to reach one
    /// of the `target` states.
    ///
    /// The copy is polled using this client. Wait failures are reported as
    /// [CompositeOperationError<VolumeBackup, VolumeBackup>][CompositeOperationError].
    pub async fn copy_volume_backup_and_wait_for_state(
        &self,
        volume_backup_id: impl Into<String>,
        req: CopyBackupDetails,
        target: WaitTarget,
        options: RequestOptions,
        waiter_options: WaiterOptions,
    ) -> Result<Response<VolumeBackup>> {
        let volume_backup_id = volume_backup_id.into();
        gax::path_parameter::required("volume_backup_id", &volume_backup_id)?;
        let client = &self.client;
        let future = mutate_and_wait(
            || client.copy_volume_backup(volume_backup_id, req, options),
            |id| client.get_volume_backup(id, RequestOptions::default()),
            target,
            &waiter_options,
        );
        traced("copy_volume_backup_and_wait_for_state", future).await
    }

    /// Creates a new boot volume backup and waits for it to reach one of the `target`
    /// states.
    ///
    /// Wait failures are reported as [CompositeOperationError<BootVolumeBackup, BootVolumeBackup>][CompositeOperationError].
    pub async fn create_boot_volume_backup_and_wait_for_state(
        &self,
        req: CreateBootVolumeBackupDetails,
        target: WaitTarget,
        options: RequestOptions,
        waiter_options: WaiterOptions,
    ) -> Result<Response<BootVolumeBackup>> {
        let client = &self.client;
        let future = mutate_and_wait(
            || client.create_boot_volume_backup(req, options),
            |id| client.get_boot_volume_backup(id, RequestOptions::default()),
            target,
            &waiter_options,
        );
        traced("create_boot_volume_backup_and_wait_for_state", future).await
    }

    /// Updates a boot volume backup and waits for it to reach one of the `target` states.
    ///
    /// Wait failures are reported as [CompositeOperationError<BootVolumeBackup, BootVolumeBackup>][CompositeOperationError].
    pub async fn update_boot_volume_backup_and_wait_for_state(
        &self,
        boot_volume_backup_id: impl Into<String>,
        req: UpdateBackupDetails,
        target: WaitTarget,
        options: RequestOptions,
        waiter_options: WaiterOptions,
    ) -> Result<Response<BootVolumeBackup>> {
        let boot_volume_backup_id = boot_volume_backup_id.into();
        gax::path_parameter::required("boot_volume_backup_id", &boot_volume_backup_id)?;
        let client = &self.client;
        let future = mutate_and_wait(
            || client.update_boot_volume_backup(boot_volume_backup_id, req, options),
            |id| client.get_boot_volume_backup(id, RequestOptions::default()),
            target,
            &waiter_options,
        );
        traced("update_boot_volume_backup_and_wait_for_state", future).await
    }

    /// Deletes a boot volume backup and waits for it to reach one of the `target` states,
    /// or to disappear.
    ///
    /// Wait failures are reported as [CompositeOperationError<(), BootVolumeBackup>][CompositeOperationError].
    pub async fn delete_boot_volume_backup_and_wait_for_state(
        &self,
        boot_volume_backup_id: impl Into<String>,
        target: WaitTarget,
        options: RequestOptions,
        waiter_options: WaiterOptions,
    ) -> Result<DeleteOutcome<BootVolumeBackup>> {
        let boot_volume_backup_id = boot_volume_backup_id.into();
        gax::path_parameter::required("boot_volume_backup_id", &boot_volume_backup_id)?;
        let client = &self.client;
        let future = delete_and_wait(
            &boot_volume_backup_id,
            |id| client.delete_boot_volume_backup(id, options),
            |id| client.get_boot_volume_backup(id, RequestOptions::default()),
            target,
            &waiter_options,
        );
        traced("delete_boot_volume_backup_and_wait_for_state", future).await
    }

    /// Copies a boot volume backup to another region and waits for the copy to reach one
    /// of the `target` states.
    ///
    /// The copy is polled using this client. Wait failures are reported as
    /// [CompositeOperationError<BootVolumeBackup, BootVolumeBackup>][CompositeOperationError].
    pub async fn copy_boot_volume_backup_and_wait_for_state(
        &self,
        boot_volume_backup_id: impl Into<String>,
        req: CopyBackupDetails,
        target: WaitTarget,
        options: RequestOptions,
        waiter_options: WaiterOptions,
    ) -> Result<Response<BootVolumeBackup>> {
        let boot_volume_backup_id = boot_volume_backup_id.into();
        gax::path_parameter::required("boot_volume_backup_id", &boot_volume_backup_id)?;
        let client = &self.client;
        let future = mutate_and_wait(
            || client.copy_boot_volume_backup(boot_volume_backup_id, req, options),
            |id| client.get_boot_volume_backup(id, RequestOptions::default()),
            target,
            &waiter_options,
        );
        traced("copy_boot_volume_backup_and_wait_for_state", future).await
    }

    /// Creates a new volume group backup and waits for it to reach one of the `target`
    /// states.
    ///
    /// Wait failures are reported as [CompositeOperationError<VolumeGroupBackup, VolumeGroupBackup>][CompositeOperationError].
    pub async fn create_volume_group_backup_and_wait_for_state(
        &self,
        req: CreateVolumeGroupBackupDetails,
        target: WaitTarget,
        options: RequestOptions,
        waiter_options: WaiterOptions,
    ) -> Result<Response<VolumeGroupBackup>> {
        let client = &self.client;
        let future = mutate_and_wait(
            || client.create_volume_group_backup(req, options),
            |id| client.get_volume_group_backup(id, RequestOptions::default()),
            target,
            &waiter_options,
        );
        traced("create_volume_group_backup_and_wait_for_state", future).await
    }

    /// Updates a volume group backup and waits for it to reach one of the `target` states.
    ///
    /// Wait failures are reported as [CompositeOperationError<VolumeGroupBackup, VolumeGroupBackup>][CompositeOperationError].
    pub async fn update_volume_group_backup_and_wait_for_state(
        &self,
        volume_group_backup_id: impl Into<String>,
        req: UpdateBackupDetails,
        target: WaitTarget,
        options: RequestOptions,
        waiter_options: WaiterOptions,
    ) -> Result<Response<VolumeGroupBackup>> {
        let volume_group_backup_id = volume_group_backup_id.into();
        gax::path_parameter::required("volume_group_backup_id", &volume_group_backup_id)?;
        let client = &self.client;
        let future = mutate_and_wait(
            || client.update_volume_group_backup(volume_group_backup_id, req, options),
            |id| client.get_volume_group_backup(id, RequestOptions::default()),
            target,
            &waiter_options,
        );
        traced("update_volume_group_backup_and_wait_for_state", future).await
    }

    /// Deletes a volume group backup and waits for it to reach one of the `target` states,
    /// or to disappear.
    ///
    /// Wait failures are reported as [CompositeOperationError<(), VolumeGroupBackup>][CompositeOperationError].
    pub async fn delete_volume_group_backup_and_wait_for_state(
        &self,
        volume_group_backup_id: impl Into<String>,
        target: WaitTarget,
        options: RequestOptions,
        waiter_options: WaiterOptions,
    ) -> Result<DeleteOutcome<VolumeGroupBackup>> {
        let volume_group_backup_id = volume_group_backup_id.into();
        gax::path_parameter::required("volume_group_backup_id", &volume_group_backup_id)?;
        let client = &self.client;
        let future = delete_and_wait(
            &volume_group_backup_id,
            |id| client.delete_volume_group_backup(id, options),
            |id| client.get_volume_group_backup(id, RequestOptions::default()),
            target,
            &waiter_options,
        );
        traced("delete_volume_group_backup_and_wait_for_state", future).await
    }

    /// Copies a volume group backup to another region and waits for the copy to reach one
    /// of the `target` states.
    ///
    /// The copy is polled using this client. Wait failures are reported as
    /// [CompositeOperationError<VolumeGroupBackup, VolumeGroupBackup>][CompositeOperationError].
    pub async fn copy_volume_group_backup_and_wait_for_state(
        &self,
        volume_group_backup_id: impl Into<String>,
        req: CopyBackupDetails,
        target: WaitTarget,
        options: RequestOptions,
        waiter_options: WaiterOptions,
    ) -> Result<Response<VolumeGroupBackup>> {
        let volume_group_backup_id = volume_group_backup_id.into();
        gax::path_parameter::required("volume_group_backup_id", &volume_group_backup_id)?;
        let client = &self.client;
        let future = mutate_and_wait(
            || client.copy_volume_group_backup(volume_group_backup_id, req, options),
            |id| client.get_volume_group_backup(id, RequestOptions::default()),
            target,
            &waiter_options,
        );
        traced("copy_volume_group_backup_and_wait_for_state", future).await
    }
}

/// Runs a composite operation in its own span.
///
/// The span is the parent of the events logged while waiting.
async fn traced<F, T>(method: &'static str, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let span = tracing::debug_span!(
        "composite_operation",
        method,
        error = tracing::field::Empty
    );
    let result = future.instrument(span.clone()).await;
    if let Err(e) = &result {
        span.record("error", tracing::field::display(e));
    }
    result
}
