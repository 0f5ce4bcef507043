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

/// A dyn-compatible, crate-private version of [super::BlockStorage].
#[async_trait::async_trait]
pub trait BlockStorage: std::fmt::Debug + Send + Sync {
    async fn create_volume(
        &self,
        req: CreateVolumeDetails,
        options: RequestOptions,
    ) -> Result<Response<Volume>>;

    async fn get_volume(
        &self,
        volume_id: String,
        options: RequestOptions,
    ) -> Result<Response<Volume>>;

    async fn list_volumes(
        &self,
        req: ListRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<Volume>>>;

    async fn update_volume(
        &self,
        volume_id: String,
        req: UpdateVolumeDetails,
        options: RequestOptions,
    ) -> Result<Response<Volume>>;

    async fn delete_volume(
        &self,
        volume_id: String,
        options: RequestOptions,
    ) -> Result<Response<()>>;

    async fn change_volume_compartment(
        &self,
        volume_id: String,
        req: ChangeCompartmentDetails,
        options: RequestOptions,
    ) -> Result<Response<()>>;

    async fn create_boot_volume(
        &self,
        req: CreateBootVolumeDetails,
        options: RequestOptions,
    ) -> Result<Response<BootVolume>>;

    async fn get_boot_volume(
        &self,
        boot_volume_id: String,
        options: RequestOptions,
    ) -> Result<Response<BootVolume>>;

    async fn list_boot_volumes(
        &self,
        req: ListRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<BootVolume>>>;

    async fn update_boot_volume(
        &self,
        boot_volume_id: String,
        req: UpdateBootVolumeDetails,
        options: RequestOptions,
    ) -> Result<Response<BootVolume>>;

    async fn delete_boot_volume(
        &self,
        boot_volume_id: String,
        options: RequestOptions,
    ) -> Result<Response<()>>;

    async fn change_boot_volume_compartment(
        &self,
        boot_volume_id: String,
        req: ChangeCompartmentDetails,
        options: RequestOptions,
    ) -> Result<Response<()>>;

    async fn create_volume_group(
        &self,
        req: CreateVolumeGroupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroup>>;

    async fn get_volume_group(
        &self,
        volume_group_id: String,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroup>>;

    async fn list_volume_groups(
        &self,
        req: ListRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<VolumeGroup>>>;

    async fn update_volume_group(
        &self,
        volume_group_id: String,
        req: UpdateVolumeGroupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroup>>;

    async fn delete_volume_group(
        &self,
        volume_group_id: String,
        options: RequestOptions,
    ) -> Result<Response<()>>;

    async fn change_volume_group_compartment(
        &self,
        volume_group_id: String,
        req: ChangeCompartmentDetails,
        options: RequestOptions,
    ) -> Result<Response<()>>;

    async fn create_volume_backup(
        &self,
        req: CreateVolumeBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeBackup>>;

    async fn get_volume_backup(
        &self,
        volume_backup_id: String,
        options: RequestOptions,
    ) -> Result<Response<VolumeBackup>>;

    async fn list_volume_backups(
        &self,
        req: ListRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<VolumeBackup>>>;

    async fn update_volume_backup(
        &self,
        volume_backup_id: String,
        req: UpdateBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeBackup>>;

    async fn delete_volume_backup(
        &self,
        volume_backup_id: String,
        options: RequestOptions,
    ) -> Result<Response<()>>;

    async fn copy_volume_backup(
        &self,
        volume_backup_id: String,
        req: CopyBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeBackup>>;

    async fn change_volume_backup_compartment(
        &self,
        volume_backup_id: String,
        req: ChangeCompartmentDetails,
        options: RequestOptions,
    ) -> Result<Response<()>>;

    async fn create_boot_volume_backup(
        &self,
        req: CreateBootVolumeBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<BootVolumeBackup>>;

    async fn get_boot_volume_backup(
        &self,
        boot_volume_backup_id: String,
        options: RequestOptions,
    ) -> Result<Response<BootVolumeBackup>>;

    async fn list_boot_volume_backups(
        &self,
        req: ListRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<BootVolumeBackup>>>;

    async fn update_boot_volume_backup(
        &self,
        boot_volume_backup_id: String,
        req: UpdateBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<BootVolumeBackup>>;

    async fn delete_boot_volume_backup(
        &self,
        boot_volume_backup_id: String,
        options: RequestOptions,
    ) -> Result<Response<()>>;

    async fn copy_boot_volume_backup(
        &self,
        boot_volume_backup_id: String,
        req: CopyBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<BootVolumeBackup>>;

    async fn change_boot_volume_backup_compartment(
        &self,
        boot_volume_backup_id: String,
        req: ChangeCompartmentDetails,
        options: RequestOptions,
    ) -> Result<Response<()>>;

    async fn create_volume_group_backup(
        &self,
        req: CreateVolumeGroupBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroupBackup>>;

    async fn get_volume_group_backup(
        &self,
        volume_group_backup_id: String,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroupBackup>>;

    async fn list_volume_group_backups(
        &self,
        req: ListRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<VolumeGroupBackup>>>;

    async fn update_volume_group_backup(
        &self,
        volume_group_backup_id: String,
        req: UpdateBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroupBackup>>;

    async fn delete_volume_group_backup(
        &self,
        volume_group_backup_id: String,
        options: RequestOptions,
    ) -> Result<Response<()>>;

    async fn copy_volume_group_backup(
        &self,
        volume_group_backup_id: String,
        req: CopyBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroupBackup>>;

    async fn change_volume_group_backup_compartment(
        &self,
        volume_group_backup_id: String,
        req: ChangeCompartmentDetails,
        options: RequestOptions,
    ) -> Result<Response<()>>;
}

/// All implementations of [super::BlockStorage] also implement [BlockStorage].
#[async_trait::async_trait]
impl<T: super::BlockStorage> BlockStorage for T {
    async fn create_volume(
        &self,
        req: CreateVolumeDetails,
        options: RequestOptions,
    ) -> Result<Response<Volume>> {
        T::create_volume(self, req, options).await
    }

    async fn get_volume(
        &self,
        volume_id: String,
        options: RequestOptions,
    ) -> Result<Response<Volume>> {
        T::get_volume(self, volume_id, options).await
    }

    async fn list_volumes(
        &self,
        req: ListRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<Volume>>> {
        T::list_volumes(self, req, options).await
    }

    async fn update_volume(
        &self,
        volume_id: String,
        req: UpdateVolumeDetails,
        options: RequestOptions,
    ) -> Result<Response<Volume>> {
        T::update_volume(self, volume_id, req, options).await
    }

    async fn delete_volume(
        &self,
        volume_id: String,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        T::delete_volume(self, volume_id, options).await
    }

    async fn change_volume_compartment(
        &self,
        volume_id: String,
        req: ChangeCompartmentDetails,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        T::change_volume_compartment(self, volume_id, req, options).await
    }

    async fn create_boot_volume(
        &self,
        req: CreateBootVolumeDetails,
        options: RequestOptions,
    ) -> Result<Response<BootVolume>> {
        T::create_boot_volume(self, req, options).await
    }

    async fn get_boot_volume(
        &self,
        boot_volume_id: String,
        options: RequestOptions,
    ) -> Result<Response<BootVolume>> {
        T::get_boot_volume(self, boot_volume_id, options).await
    }

    async fn list_boot_volumes(
        &self,
        req: ListRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<BootVolume>>> {
        T::list_boot_volumes(self, req, options).await
    }

    async fn update_boot_volume(
        &self,
        boot_volume_id: String,
        req: UpdateBootVolumeDetails,
        options: RequestOptions,
    ) -> Result<Response<BootVolume>> {
        T::update_boot_volume(self, boot_volume_id, req, options).await
    }

    async fn delete_boot_volume(
        &self,
        boot_volume_id: String,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        T::delete_boot_volume(self, boot_volume_id, options).await
    }

    async fn change_boot_volume_compartment(
        &self,
        boot_volume_id: String,
        req: ChangeCompartmentDetails,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        T::change_boot_volume_compartment(self, boot_volume_id, req, options).await
    }

    async fn create_volume_group(
        &self,
        req: CreateVolumeGroupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroup>> {
        T::create_volume_group(self, req, options).await
    }

    async fn get_volume_group(
        &self,
        volume_group_id: String,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroup>> {
        T::get_volume_group(self, volume_group_id, options).await
    }

    async fn list_volume_groups(
        &self,
        req: ListRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<VolumeGroup>>> {
        T::list_volume_groups(self, req, options).await
    }

    async fn update_volume_group(
        &self,
        volume_group_id: String,
        req: UpdateVolumeGroupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroup>> {
        T::update_volume_group(self, volume_group_id, req, options).await
    }

    async fn delete_volume_group(
        &self,
        volume_group_id: String,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        T::delete_volume_group(self, volume_group_id, options).await
    }

    async fn change_volume_group_compartment(
        &self,
        volume_group_id: String,
        req: ChangeCompartmentDetails,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        T::change_volume_group_compartment(self, volume_group_id, req, options).await
    }

    async fn create_volume_backup(
        &self,
        req: CreateVolumeBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeBackup>> {
        T::create_volume_backup(self, req, options).await
    }

    async fn get_volume_backup(
        &self,
        volume_backup_id: String,
        options: RequestOptions,
    ) -> Result<Response<VolumeBackup>> {
        T::get_volume_backup(self, volume_backup_id, options).await
    }

    async fn list_volume_backups(
        &self,
        req: ListRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<VolumeBackup>>> {
        T::list_volume_backups(self, req, options).await
    }

    async fn update_volume_backup(
        &self,
        volume_backup_id: String,
        req: UpdateBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeBackup>> {
        T::update_volume_backup(self, volume_backup_id, req, options).await
    }

    async fn delete_volume_backup(
        &self,
        volume_backup_id: String,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        T::delete_volume_backup(self, volume_backup_id, options).await
    }

    async fn copy_volume_backup(
        &self,
        volume_backup_id: String,
        req: CopyBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeBackup>> {
        T::copy_volume_backup(self, volume_backup_id, req, options).await
    }

    async fn change_volume_backup_compartment(
        &self,
        volume_backup_id: String,
        req: ChangeCompartmentDetails,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        T::change_volume_backup_compartment(self, volume_backup_id, req, options).await
    }

    async fn create_boot_volume_backup(
        &self,
        req: CreateBootVolumeBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<BootVolumeBackup>> {
        T::create_boot_volume_backup(self, req, options).await
    }

    async fn get_boot_volume_backup(
        &self,
        boot_volume_backup_id: String,
        options: RequestOptions,
    ) -> Result<Response<BootVolumeBackup>> {
        T::get_boot_volume_backup(self, boot_volume_backup_id, options).await
    }

    async fn list_boot_volume_backups(
        &self,
        req: ListRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<BootVolumeBackup>>> {
        T::list_boot_volume_backups(self, req, options).await
    }

    async fn update_boot_volume_backup(
        &self,
        boot_volume_backup_id: String,
        req: UpdateBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<BootVolumeBackup>> {
        T::update_boot_volume_backup(self, boot_volume_backup_id, req, options).await
    }

    async fn delete_boot_volume_backup(
        &self,
        boot_volume_backup_id: String,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        T::delete_boot_volume_backup(self, boot_volume_backup_id, options).await
    }

    async fn copy_boot_volume_backup(
        &self,
        boot_volume_backup_id: String,
        req: CopyBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<BootVolumeBackup>> {
        T::copy_boot_volume_backup(self, boot_volume_backup_id, req, options).await
    }

    async fn change_boot_volume_backup_compartment(
        &self,
        boot_volume_backup_id: String,
        req: ChangeCompartmentDetails,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        T::change_boot_volume_backup_compartment(self, boot_volume_backup_id, req, options).await
    }

    async fn create_volume_group_backup(
        &self,
        req: CreateVolumeGroupBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroupBackup>> {
        T::create_volume_group_backup(self, req, options).await
    }

    async fn get_volume_group_backup(
        &self,
        volume_group_backup_id: String,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroupBackup>> {
        T::get_volume_group_backup(self, volume_group_backup_id, options).await
    }

    async fn list_volume_group_backups(
        &self,
        req: ListRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<VolumeGroupBackup>>> {
        T::list_volume_group_backups(self, req, options).await
    }

    async fn update_volume_group_backup(
        &self,
        volume_group_backup_id: String,
        req: UpdateBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroupBackup>> {
        T::update_volume_group_backup(self, volume_group_backup_id, req, options).await
    }

    async fn delete_volume_group_backup(
        &self,
        volume_group_backup_id: String,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        T::delete_volume_group_backup(self, volume_group_backup_id, options).await
    }

    async fn copy_volume_group_backup(
        &self,
        volume_group_backup_id: String,
        req: CopyBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroupBackup>> {
        T::copy_volume_group_backup(self, volume_group_backup_id, req, options).await
    }

    async fn change_volume_group_backup_compartment(
        &self,
        volume_group_backup_id: String,
        req: ChangeCompartmentDetails,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        T::change_volume_group_backup_compartment(self, volume_group_backup_id, req, options).await
    }
}
