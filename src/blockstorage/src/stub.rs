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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.
//!
//! The transport that sends requests to the service also implements these
//! traits.

use crate::Result;
use crate::model::*;
use gax::error::Error;
use gax::options::RequestOptions;
use gax::response::Response;

pub(crate) mod dynamic;

/// Defines the trait used to implement [crate::client::BlockStorage].
///
/// Application developers may need to implement this trait to mock
/// `client::BlockStorage`. In other use-cases, application developers only
/// use `client::BlockStorage` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait BlockStorage: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::BlockStorage::create_volume].
    fn create_volume(
        &self,
        _req: CreateVolumeDetails,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<Volume>>> + Send {
        unimplemented_stub("create_volume")
    }

    /// Implements [crate::client::BlockStorage::get_volume].
    fn get_volume(
        &self,
        _volume_id: String,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<Volume>>> + Send {
        unimplemented_stub("get_volume")
    }

    /// Implements [crate::client::BlockStorage::list_volumes].
    fn list_volumes(
        &self,
        _req: ListRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<Vec<Volume>>>> + Send {
        unimplemented_stub("list_volumes")
    }

    /// Implements [crate::client::BlockStorage::update_volume].
    fn update_volume(
        &self,
        _volume_id: String,
        _req: UpdateVolumeDetails,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<Volume>>> + Send {
        unimplemented_stub("update_volume")
    }

    /// Implements [crate::client::BlockStorage::delete_volume].
    fn delete_volume(
        &self,
        _volume_id: String,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<()>>> + Send {
        unimplemented_stub("delete_volume")
    }

    /// Implements [crate::client::BlockStorage::change_volume_compartment].
    fn change_volume_compartment(
        &self,
        _volume_id: String,
        _req: ChangeCompartmentDetails,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<()>>> + Send {
        unimplemented_stub("change_volume_compartment")
    }

    /// Implements [crate::client::BlockStorage::create_boot_volume].
    fn create_boot_volume(
        &self,
        _req: CreateBootVolumeDetails,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<BootVolume>>> + Send {
        unimplemented_stub("create_boot_volume")
    }

    /// Implements [crate::client::BlockStorage::get_boot_volume].
    fn get_boot_volume(
        &self,
        _boot_volume_id: String,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<BootVolume>>> + Send {
        unimplemented_stub("get_boot_volume")
    }

    /// Implements [crate::client::BlockStorage::list_boot_volumes].
    fn list_boot_volumes(
        &self,
        _req: ListRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<Vec<BootVolume>>>> + Send {
        unimplemented_stub("list_boot_volumes")
    }

    /// Implements [crate::client::BlockStorage::update_boot_volume].
    fn update_boot_volume(
        &self,
        _boot_volume_id: String,
        _req: UpdateBootVolumeDetails,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<BootVolume>>> + Send {
        unimplemented_stub("update_boot_volume")
    }

    /// Implements [crate::client::BlockStorage::delete_boot_volume].
    fn delete_boot_volume(
        &self,
        _boot_volume_id: String,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<()>>> + Send {
        unimplemented_stub("delete_boot_volume")
    }

    /// Implements [crate::client::BlockStorage::change_boot_volume_compartment].
    fn change_boot_volume_compartment(
        &self,
        _boot_volume_id: String,
        _req: ChangeCompartmentDetails,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<()>>> + Send {
        unimplemented_stub("change_boot_volume_compartment")
    }

    /// Implements [crate::client::BlockStorage::create_volume_group].
    fn create_volume_group(
        &self,
        _req: CreateVolumeGroupDetails,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<VolumeGroup>>> + Send {
        unimplemented_stub("create_volume_group")
    }

    /// Implements [crate::client::BlockStorage::get_volume_group].
    fn get_volume_group(
        &self,
        _volume_group_id: String,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<VolumeGroup>>> + Send {
        unimplemented_stub("get_volume_group")
    }

    /// Implements [crate::client::BlockStorage::list_volume_groups].
    fn list_volume_groups(
        &self,
        _req: ListRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<Vec<VolumeGroup>>>> + Send {
        unimplemented_stub("list_volume_groups")
    }

    /// Implements [crate::client::BlockStorage::update_volume_group].
    fn update_volume_group(
        &self,
        _volume_group_id: String,
        _req: UpdateVolumeGroupDetails,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<VolumeGroup>>> + Send {
        unimplemented_stub("update_volume_group")
    }

    /// Implements [crate::client::BlockStorage::delete_volume_group].
    fn delete_volume_group(
        &self,
        _volume_group_id: String,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<()>>> + Send {
        unimplemented_stub("delete_volume_group")
    }

    /// Implements [crate::client::BlockStorage::change_volume_group_compartment].
    fn change_volume_group_compartment(
        &self,
        _volume_group_id: String,
        _req: ChangeCompartmentDetails,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<()>>> + Send {
        unimplemented_stub("change_volume_group_compartment")
    }

    /// Implements [crate::client::BlockStorage::create_volume_backup].
    fn create_volume_backup(
        &self,
        _req: CreateVolumeBackupDetails,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<VolumeBackup>>> + Send {
        unimplemented_stub("create_volume_backup")
    }

    /// Implements [crate::client::BlockStorage::get_volume_backup].
    fn get_volume_backup(
        &self,
        _volume_backup_id: String,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<VolumeBackup>>> + Send {
        unimplemented_stub("get_volume_backup")
    }

    /// Implements [crate::client::BlockStorage::list_volume_backups].
    fn list_volume_backups(
        &self,
        _req: ListRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<Vec<VolumeBackup>>>> + Send {
        unimplemented_stub("list_volume_backups")
    }

    /// Implements [crate::client::BlockStorage::update_volume_backup].
    fn update_volume_backup(
        &self,
        _volume_backup_id: String,
        _req: UpdateBackupDetails,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<VolumeBackup>>> + Send {
        unimplemented_stub("update_volume_backup")
    }

    /// Implements [crate::client::BlockStorage::delete_volume_backup].
    fn delete_volume_backup(
        &self,
        _volume_backup_id: String,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<()>>> + Send {
        unimplemented_stub("delete_volume_backup")
    }

    /// Implements [crate::client::BlockStorage::copy_volume_backup].
    fn copy_volume_backup(
        &self,
        _volume_backup_id: String,
        _req: CopyBackupDetails,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<VolumeBackup>>> + Send {
        unimplemented_stub("copy_volume_backup")
    }

    /// Implements [crate::client::BlockStorage::change_volume_backup_compartment].
    fn change_volume_backup_compartment(
        &self,
        _volume_backup_id: String,
        _req: ChangeCompartmentDetails,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<()>>> + Send {
        unimplemented_stub("change_volume_backup_compartment")
    }

    /// Implements [crate::client::BlockStorage::create_boot_volume_backup].
    fn create_boot_volume_backup(
        &self,
        _req: CreateBootVolumeBackupDetails,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<BootVolumeBackup>>> + Send {
        unimplemented_stub("create_boot_volume_backup")
    }

    /// Implements [crate::client::BlockStorage::get_boot_volume_backup].
    fn get_boot_volume_backup(
        &self,
        _boot_volume_backup_id: String,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<BootVolumeBackup>>> + Send {
        unimplemented_stub("get_boot_volume_backup")
    }

    /// Implements [crate::client::BlockStorage::list_boot_volume_backups].
    fn list_boot_volume_backups(
        &self,
        _req: ListRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<Vec<BootVolumeBackup>>>> + Send {
        unimplemented_stub("list_boot_volume_backups")
    }

    /// Implements [crate::client::BlockStorage::update_boot_volume_backup].
    fn update_boot_volume_backup(
        &self,
        _boot_volume_backup_id: String,
        _req: UpdateBackupDetails,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<BootVolumeBackup>>> + Send {
        unimplemented_stub("update_boot_volume_backup")
    }

    /// Implements [crate::client::BlockStorage::delete_boot_volume_backup].
    fn delete_boot_volume_backup(
        &self,
        _boot_volume_backup_id: String,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<()>>> + Send {
        unimplemented_stub("delete_boot_volume_backup")
    }

    /// Implements [crate::client::BlockStorage::copy_boot_volume_backup].
    fn copy_boot_volume_backup(
        &self,
        _boot_volume_backup_id: String,
        _req: CopyBackupDetails,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<BootVolumeBackup>>> + Send {
        unimplemented_stub("copy_boot_volume_backup")
    }

    /// Implements [crate::client::BlockStorage::change_boot_volume_backup_compartment].
    fn change_boot_volume_backup_compartment(
        &self,
        _boot_volume_backup_id: String,
        _req: ChangeCompartmentDetails,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<()>>> + Send {
        unimplemented_stub("change_boot_volume_backup_compartment")
    }

    /// Implements [crate::client::BlockStorage::create_volume_group_backup].
    fn create_volume_group_backup(
        &self,
        _req: CreateVolumeGroupBackupDetails,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<VolumeGroupBackup>>> + Send {
        unimplemented_stub("create_volume_group_backup")
    }

    /// Implements [crate::client::BlockStorage::get_volume_group_backup].
    fn get_volume_group_backup(
        &self,
        _volume_group_backup_id: String,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<VolumeGroupBackup>>> + Send {
        unimplemented_stub("get_volume_group_backup")
    }

    /// Implements [crate::client::BlockStorage::list_volume_group_backups].
    fn list_volume_group_backups(
        &self,
        _req: ListRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<Vec<VolumeGroupBackup>>>> + Send {
        unimplemented_stub("list_volume_group_backups")
    }

    /// Implements [crate::client::BlockStorage::update_volume_group_backup].
    fn update_volume_group_backup(
        &self,
        _volume_group_backup_id: String,
        _req: UpdateBackupDetails,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<VolumeGroupBackup>>> + Send {
        unimplemented_stub("update_volume_group_backup")
    }

    /// Implements [crate::client::BlockStorage::delete_volume_group_backup].
    fn delete_volume_group_backup(
        &self,
        _volume_group_backup_id: String,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<()>>> + Send {
        unimplemented_stub("delete_volume_group_backup")
    }

    /// Implements [crate::client::BlockStorage::copy_volume_group_backup].
    fn copy_volume_group_backup(
        &self,
        _volume_group_backup_id: String,
        _req: CopyBackupDetails,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<VolumeGroupBackup>>> + Send {
        unimplemented_stub("copy_volume_group_backup")
    }

    /// Implements [crate::client::BlockStorage::change_volume_group_backup_compartment].
    fn change_volume_group_backup_compartment(
        &self,
        _volume_group_backup_id: String,
        _req: ChangeCompartmentDetails,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<()>>> + Send {
        unimplemented_stub("change_volume_group_backup_compartment")
    }
}

/// The error returned by the default implementation of each method.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("{0} is not implemented by this stub")]
pub struct Unimplemented(pub &'static str);

async fn unimplemented_stub<T>(method: &'static str) -> Result<T> {
    Err(Error::other(Unimplemented(method)))
}
