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

use crate::Result;
use crate::model::*;
use gax::options::RequestOptions;
use gax::response::Response;
use std::sync::Arc;

/// Implements a client for the Block Storage API.
///
/// # Example
/// ```
/// # use blockstorage::client::BlockStorage;
/// # use blockstorage::model::ListRequest;
/// # use gax::options::RequestOptions;
/// # async fn sample(client: BlockStorage) -> anyhow::Result<()> {
/// let response = client
///     .list_volumes(ListRequest::new("ocid1.compartment.oc1..example"), RequestOptions::default())
///     .await?;
/// for volume in response.body() {
///     println!("{:?} is {:?}", volume.display_name, volume.lifecycle_state);
/// }
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// Block Storage provides network-attached volumes for compute instances.
/// Volumes, boot volumes, and volume groups can be backed up, and the backups
/// can be copied across regions.
///
/// Most mutations are asynchronous: the service returns the resource in a
/// transitional lifecycle state, and completes the change in the background.
/// Use [BlockStorageCompositeOperations][crate::composite::BlockStorageCompositeOperations]
/// to wait for the change to complete.
///
/// # Configuration
///
/// This library does not send requests over the network. It delegates each
/// request to an implementation of [crate::stub::BlockStorage], which owns
/// the transport, authentication, and retry policies. Use
/// [from_stub][BlockStorage::from_stub] to create a client over such an
/// implementation.
///
/// # Pooling and Cloning
///
/// `BlockStorage` holds the stub in an `Arc`, so cloning it is cheap and all
/// clones share the same stub.
#[derive(Clone, Debug)]
pub struct BlockStorage {
    inner: Arc<dyn crate::stub::dynamic::BlockStorage>,
}

impl BlockStorage {
    /// Creates a new client from the provided stub.
    ///
    /// Typically used with a transport, or with a mock in tests.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: crate::stub::BlockStorage + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    /// Creates a new volume.
    ///
    /// The service returns the volume in the `PROVISIONING` state. Use
    /// [create_volume_and_wait_for_state] to wait until it is `AVAILABLE`.
    ///
    /// # Example
    /// ```
    /// # use blockstorage::client::BlockStorage;
    /// # use blockstorage::model::CreateVolumeDetails;
    /// # use gax::options::RequestOptions;
    /// # async fn sample(client: BlockStorage) -> anyhow::Result<()> {
    /// let details = CreateVolumeDetails::new()
    ///     .set_compartment_id("ocid1.compartment.oc1..example")
    ///     .set_availability_domain("Uocm:PHX-AD-1")
    ///     .set_size_in_gbs(1024);
    /// let mut options = RequestOptions::default();
    /// options.set_opc_retry_token("create-data-volume-1");
    /// let response = client.create_volume(details, options).await?;
    /// println!("created {:?}", response.body().id);
    /// # Ok(()) }
    /// ```
    ///
    /// [create_volume_and_wait_for_state]: crate::composite::BlockStorageCompositeOperations::create_volume_and_wait_for_state
    pub async fn create_volume(
        &self,
        req: CreateVolumeDetails,
        options: RequestOptions,
    ) -> Result<Response<Volume>> {
        self.inner.create_volume(req, options).await
    }

    /// Gets a volume.
    pub async fn get_volume(
        &self,
        volume_id: impl Into<String>,
        options: RequestOptions,
    ) -> Result<Response<Volume>> {
        let volume_id = volume_id.into();
        gax::path_parameter::required("volume_id", &volume_id)?;
        self.inner.get_volume(volume_id, options).await
    }

    /// Lists the volumes in a compartment.
    ///
    /// Returns one page of results. The `opc-next-page` header in the
    /// response, if present, is the token for the next page.
    ///
    /// # Example
    /// ```
    /// # use blockstorage::client::BlockStorage;
    /// # use blockstorage::model::ListRequest;
    /// # use gax::options::RequestOptions;
    /// # async fn sample(client: BlockStorage) -> anyhow::Result<()> {
    /// let mut request = ListRequest::new("ocid1.compartment.oc1..example");
    /// loop {
    ///     let response = client.list_volumes(request.clone(), RequestOptions::default()).await?;
    ///     for volume in response.body() {
    ///         println!("{:?}", volume.id);
    ///     }
    ///     match response.next_page() {
    ///         Some(page) => request = request.set_page(page),
    ///         None => break,
    ///     }
    /// }
    /// # Ok(()) }
    /// ```
    pub async fn list_volumes(
        &self,
        req: ListRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<Volume>>> {
        gax::path_parameter::required("compartment_id", &req.compartment_id)?;
        self.inner.list_volumes(req, options).await
    }

    /// Updates a volume.
    pub async fn update_volume(
        &self,
        volume_id: impl Into<String>,
        req: UpdateVolumeDetails,
        options: RequestOptions,
    ) -> Result<Response<Volume>> {
        let volume_id = volume_id.into();
        gax::path_parameter::required("volume_id", &volume_id)?;
        self.inner.update_volume(volume_id, req, options).await
    }

    /// Deletes a volume.
    ///
    /// The volume must be detached. The service moves the volume to the
    /// `TERMINATING` state and removes it in the background.
    pub async fn delete_volume(
        &self,
        volume_id: impl Into<String>,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let volume_id = volume_id.into();
        gax::path_parameter::required("volume_id", &volume_id)?;
        self.inner.delete_volume(volume_id, options).await
    }

    /// Moves a volume to a different compartment.
    pub async fn change_volume_compartment(
        &self,
        volume_id: impl Into<String>,
        req: ChangeCompartmentDetails,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let volume_id = volume_id.into();
        gax::path_parameter::required("volume_id", &volume_id)?;
        self.inner.change_volume_compartment(volume_id, req, options).await
    }

    /// Creates a new boot volume.
    pub async fn create_boot_volume(
        &self,
        req: CreateBootVolumeDetails,
        options: RequestOptions,
    ) -> Result<Response<BootVolume>> {
        self.inner.create_boot_volume(req, options).await
    }

    /// Gets a boot volume.
    pub async fn get_boot_volume(
        &self,
        boot_volume_id: impl Into<String>,
        options: RequestOptions,
    ) -> Result<Response<BootVolume>> {
        let boot_volume_id = boot_volume_id.into();
        gax::path_parameter::required("boot_volume_id", &boot_volume_id)?;
        self.inner.get_boot_volume(boot_volume_id, options).await
    }

    /// Lists the boot volumes in a compartment.
    pub async fn list_boot_volumes(
        &self,
        req: ListRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<BootVolume>>> {
        gax::path_parameter::required("compartment_id", &req.compartment_id)?;
        self.inner.list_boot_volumes(req, options).await
    }

    /// Updates a boot volume.
    pub async fn update_boot_volume(
        &self,
        boot_volume_id: impl Into<String>,
        req: UpdateBootVolumeDetails,
        options: RequestOptions,
    ) -> Result<Response<BootVolume>> {
        let boot_volume_id = boot_volume_id.into();
        gax::path_parameter::required("boot_volume_id", &boot_volume_id)?;
        self.inner.update_boot_volume(boot_volume_id, req, options).await
    }

    /// Deletes a boot volume.
    pub async fn delete_boot_volume(
        &self,
        boot_volume_id: impl Into<String>,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let boot_volume_id = boot_volume_id.into();
        gax::path_parameter::required("boot_volume_id", &boot_volume_id)?;
        self.inner.delete_boot_volume(boot_volume_id, options).await
    }

    /// Moves a boot volume to a different compartment.
    pub async fn change_boot_volume_compartment(
        &self,
        boot_volume_id: impl Into<String>,
        req: ChangeCompartmentDetails,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let boot_volume_id = boot_volume_id.into();
        gax::path_parameter::required("boot_volume_id", &boot_volume_id)?;
        self.inner.change_boot_volume_compartment(boot_volume_id, req, options).await
    }

    /// Creates a new volume group.
    pub async fn create_volume_group(
        &self,
        req: CreateVolumeGroupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroup>> {
        self.inner.create_volume_group(req, options).await
    }

    /// Gets a volume group.
    pub async fn get_volume_group(
        &self,
        volume_group_id: impl Into<String>,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroup>> {
        let volume_group_id = volume_group_id.into();
        gax::path_parameter::required("volume_group_id", &volume_group_id)?;
        self.inner.get_volume_group(volume_group_id, options).await
    }

    /// Lists the volume groups in a compartment.
    pub async fn list_volume_groups(
        &self,
        req: ListRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<VolumeGroup>>> {
        gax::path_parameter::required("compartment_id", &req.compartment_id)?;
        self.inner.list_volume_groups(req, options).await
    }

    /// Updates a volume group.
    pub async fn update_volume_group(
        &self,
        volume_group_id: impl Into<String>,
        req: UpdateVolumeGroupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroup>> {
        let volume_group_id = volume_group_id.into();
        gax::path_parameter::required("volume_group_id", &volume_group_id)?;
        self.inner.update_volume_group(volume_group_id, req, options).await
    }

    /// Deletes a volume group.
    pub async fn delete_volume_group(
        &self,
        volume_group_id: impl Into<String>,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let volume_group_id = volume_group_id.into();
        gax::path_parameter::required("volume_group_id", &volume_group_id)?;
        self.inner.delete_volume_group(volume_group_id, options).await
    }

    /// Moves a volume group to a different compartment.
    pub async fn change_volume_group_compartment(
        &self,
        volume_group_id: impl Into<String>,
        req: ChangeCompartmentDetails,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let volume_group_id = volume_group_id.into();
        gax::path_parameter::required("volume_group_id", &volume_group_id)?;
        self.inner.change_volume_group_compartment(volume_group_id, req, options).await
    }

    /// Creates a new volume backup.
    pub async fn create_volume_backup(
        &self,
        req: CreateVolumeBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeBackup>> {
        self.inner.create_volume_backup(req, options).await
    }

    /// Gets a volume backup.
    pub async fn get_volume_backup(
        &self,
        volume_backup_id: impl Into<String>,
        options: RequestOptions,
    ) -> Result<Response<VolumeBackup>> {
        let volume_backup_id = volume_backup_id.into();
        gax::path_parameter::required("volume_backup_id", &volume_backup_id)?;
        self.inner.get_volume_backup(volume_backup_id, options).await
    }

    /// Lists the volume backups in a compartment.
    pub async fn list_volume_backups(
        &self,
        req: ListRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<VolumeBackup>>> {
        gax::path_parameter::required("compartment_id", &req.compartment_id)?;
        self.inner.list_volume_backups(req, options).await
    }

    /// Updates a volume backup.
    pub async fn update_volume_backup(
        &self,
        volume_backup_id: impl Into<String>,
        req: UpdateBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeBackup>> {
        let volume_backup_id = volume_backup_id.into();
        gax::path_parameter::required("volume_backup_id", &volume_backup_id)?;
        self.inner.update_volume_backup(volume_backup_id, req, options).await
    }

    /// Deletes a volume backup.
    pub async fn delete_volume_backup(
        &self,
        volume_backup_id: impl Into<String>,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let volume_backup_id = volume_backup_id.into();
        gax::path_parameter::required("volume_backup_id", &volume_backup_id)?;
        self.inner.delete_volume_backup(volume_backup_id, options).await
    }

    /// Copies a volume backup to another region.
    pub async fn copy_volume_backup(
        &self,
        volume_backup_id: impl Into<String>,
        req: CopyBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeBackup>> {
        let volume_backup_id = volume_backup_id.into();
        gax::path_parameter::required("volume_backup_id", &volume_backup_id)?;
        self.inner.copy_volume_backup(volume_backup_id, req, options).await
    }

    /// Moves a volume backup to a different compartment.
    pub async fn change_volume_backup_compartment(
        &self,
        volume_backup_id: impl Into<String>,
        req: ChangeCompartmentDetails,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let volume_backup_id = volume_backup_id.into();
        gax::path_parameter::required("volume_backup_id", &volume_backup_id)?;
        self.inner.change_volume_backup_compartment(volume_backup_id, req, options).await
    }

    /// Creates a new boot volume backup.
    pub async fn create_boot_volume_backup(
        &self,
        req: CreateBootVolumeBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<BootVolumeBackup>> {
        self.inner.create_boot_volume_backup(req, options).await
    }

    /// Gets a boot volume backup.
    pub async fn get_boot_volume_backup(
        &self,
        boot_volume_backup_id: impl Into<String>,
        options: RequestOptions,
    ) -> Result<Response<BootVolumeBackup>> {
        let boot_volume_backup_id = boot_volume_backup_id.into();
        gax::path_parameter::required("boot_volume_backup_id", &boot_volume_backup_id)?;
        self.inner.get_boot_volume_backup(boot_volume_backup_id, options).await
    }

    /// Lists the boot volume backups in a compartment.
    pub async fn list_boot_volume_backups(
        &self,
        req: ListRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<BootVolumeBackup>>> {
        gax::path_parameter::required("compartment_id", &req.compartment_id)?;
        self.inner.list_boot_volume_backups(req, options).await
    }

    /// Updates a boot volume backup.
    pub async fn update_boot_volume_backup(
        &self,
        boot_volume_backup_id: impl Into<String>,
        req: UpdateBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<BootVolumeBackup>> {
        let boot_volume_backup_id = boot_volume_backup_id.into();
        gax::path_parameter::required("boot_volume_backup_id", &boot_volume_backup_id)?;
        self.inner.update_boot_volume_backup(boot_volume_backup_id, req, options).await
    }

    /// Deletes a boot volume backup.
    pub async fn delete_boot_volume_backup(
        &self,
        boot_volume_backup_id: impl Into<String>,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let boot_volume_backup_id = boot_volume_backup_id.into();
        gax::path_parameter::required("boot_volume_backup_id", &boot_volume_backup_id)?;
        self.inner.delete_boot_volume_backup(boot_volume_backup_id, options).await
    }

    /// Copies a boot volume backup to another region.
    pub async fn copy_boot_volume_backup(
        &self,
        boot_volume_backup_id: impl Into<String>,
        req: CopyBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<BootVolumeBackup>> {
        let boot_volume_backup_id = boot_volume_backup_id.into();
        gax::path_parameter::required("boot_volume_backup_id", &boot_volume_backup_id)?;
        self.inner.copy_boot_volume_backup(boot_volume_backup_id, req, options).await
    }

    /// Moves a boot volume backup to a different compartment.
    pub async fn change_boot_volume_backup_compartment(
        &self,
        boot_volume_backup_id: impl Into<String>,
        req: ChangeCompartmentDetails,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let boot_volume_backup_id = boot_volume_backup_id.into();
        gax::path_parameter::required("boot_volume_backup_id", &boot_volume_backup_id)?;
        self.inner.change_boot_volume_backup_compartment(boot_volume_backup_id, req, options).await
    }

    /// Creates a new volume group backup.
    pub async fn create_volume_group_backup(
        &self,
        req: CreateVolumeGroupBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroupBackup>> {
        self.inner.create_volume_group_backup(req, options).await
    }

    /// Gets a volume group backup.
    pub async fn get_volume_group_backup(
        &self,
        volume_group_backup_id: impl Into<String>,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroupBackup>> {
        let volume_group_backup_id = volume_group_backup_id.into();
        gax::path_parameter::required("volume_group_backup_id", &volume_group_backup_id)?;
        self.inner.get_volume_group_backup(volume_group_backup_id, options).await
    }

    /// Lists the volume group backups in a compartment.
    pub async fn list_volume_group_backups(
        &self,
        req: ListRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<VolumeGroupBackup>>> {
        gax::path_parameter::required("compartment_id", &req.compartment_id)?;
        self.inner.list_volume_group_backups(req, options).await
    }

    /// Updates a volume group backup.
    pub async fn update_volume_group_backup(
        &self,
        volume_group_backup_id: impl Into<String>,
        req: UpdateBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroupBackup>> {
        let volume_group_backup_id = volume_group_backup_id.into();
        gax::path_parameter::required("volume_group_backup_id", &volume_group_backup_id)?;
        self.inner.update_volume_group_backup(volume_group_backup_id, req, options).await
    }

    /// Deletes a volume group backup.
    pub async fn delete_volume_group_backup(
        &self,
        volume_group_backup_id: impl Into<String>,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let volume_group_backup_id = volume_group_backup_id.into();
        gax::path_parameter::required("volume_group_backup_id", &volume_group_backup_id)?;
        self.inner.delete_volume_group_backup(volume_group_backup_id, options).await
    }

    /// Copies a volume group backup to another region.
    pub async fn copy_volume_group_backup(
        &self,
        volume_group_backup_id: impl Into<String>,
        req: CopyBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroupBackup>> {
        let volume_group_backup_id = volume_group_backup_id.into();
        gax::path_parameter::required("volume_group_backup_id", &volume_group_backup_id)?;
        self.inner.copy_volume_group_backup(volume_group_backup_id, req, options).await
    }

    /// Moves a volume group backup to a different compartment.
    pub async fn change_volume_group_backup_compartment(
        &self,
        volume_group_backup_id: impl Into<String>,
        req: ChangeCompartmentDetails,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let volume_group_backup_id = volume_group_backup_id.into();
        gax::path_parameter::required("volume_group_backup_id", &volume_group_backup_id)?;
        self.inner.change_volume_group_backup_compartment(volume_group_backup_id, req, options).await
    }
}
