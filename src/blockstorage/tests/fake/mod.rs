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

//! A scripted implementation of the Block Storage stub.

#![allow(dead_code)]

use blockstorage::Result;
use blockstorage::model::*;
use gax::error::Error;
use gax::error::rpc::Status;
use gax::options::RequestOptions;
use gax::response::Response;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const RESOURCE_ID: &str = "ocid1.resource.oc1..test";

/// Returns resources in the scripted lifecycle states.
///
/// Each `get_*()` call consumes the next state in the script. A `None` state
/// means the resource is not found.
#[derive(Clone, Debug, Default)]
pub struct Fake {
    states: Arc<Mutex<VecDeque<Option<&'static str>>>>,
    calls: Arc<Mutex<Vec<String>>>,
    retry_tokens: Arc<Mutex<Vec<Option<String>>>>,
}

impl Fake {
    pub fn new<I>(states: I) -> Self
    where
        I: IntoIterator<Item = Option<&'static str>>,
    {
        Self {
            states: Arc::new(Mutex::new(states.into_iter().collect())),
            ..Default::default()
        }
    }

    /// The methods called so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// The retry token of each mutating request.
    pub fn retry_tokens(&self) -> Vec<Option<String>> {
        self.retry_tokens.lock().unwrap().clone()
    }

    fn record(&self, method: &str) {
        self.calls.lock().unwrap().push(method.to_string());
    }

    fn mutation(&self, method: &str, options: &RequestOptions) {
        self.record(method);
        self.retry_tokens
            .lock()
            .unwrap()
            .push(options.opc_retry_token().clone());
    }

    fn next_state(&self, method: &str, id: &str) -> Result<&'static str> {
        self.record(method);
        if id != RESOURCE_ID {
            return Err(not_found());
        }
        match self.states.lock().unwrap().pop_front() {
            Some(Some(state)) => Ok(state),
            Some(None) => Err(not_found()),
            None => Err(Error::other(format!("unexpected call to {method}"))),
        }
    }
}

pub fn not_found() -> Error {
    Error::service_with_http_metadata(
        Status::default()
            .set_code("NotAuthorizedOrNotFound")
            .set_message("Authorization failed or requested resource not found."),
        Some(404),
        None,
    )
}

impl blockstorage::stub::BlockStorage for Fake {
    async fn create_volume(
        &self,
        _req: CreateVolumeDetails,
        options: RequestOptions,
    ) -> Result<Response<Volume>> {
        self.mutation("create_volume", &options);
        Ok(Response::from(
            Volume::new().set_id(RESOURCE_ID).set_lifecycle_state("PROVISIONING"),
        ))
    }

    async fn get_volume(
        &self,
        volume_id: String,
        _options: RequestOptions,
    ) -> Result<Response<Volume>> {
        let state = self.next_state("get_volume", &volume_id)?;
        Ok(Response::from(
            Volume::new().set_id(volume_id).set_lifecycle_state(state),
        ))
    }

    async fn update_volume(
        &self,
        volume_id: String,
        _req: UpdateVolumeDetails,
        options: RequestOptions,
    ) -> Result<Response<Volume>> {
        self.mutation("update_volume", &options);
        Ok(Response::from(
            Volume::new().set_id(volume_id).set_lifecycle_state("PROVISIONING"),
        ))
    }

    async fn delete_volume(
        &self,
        volume_id: String,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        self.mutation("delete_volume", &options);
        if volume_id != RESOURCE_ID {
            return Err(not_found());
        }
        Ok(Response::from(()))
    }

    async fn create_boot_volume(
        &self,
        _req: CreateBootVolumeDetails,
        options: RequestOptions,
    ) -> Result<Response<BootVolume>> {
        self.mutation("create_boot_volume", &options);
        Ok(Response::from(
            BootVolume::new().set_id(RESOURCE_ID).set_lifecycle_state("PROVISIONING"),
        ))
    }

    async fn get_boot_volume(
        &self,
        boot_volume_id: String,
        _options: RequestOptions,
    ) -> Result<Response<BootVolume>> {
        let state = self.next_state("get_boot_volume", &boot_volume_id)?;
        Ok(Response::from(
            BootVolume::new().set_id(boot_volume_id).set_lifecycle_state(state),
        ))
    }

    async fn update_boot_volume(
        &self,
        boot_volume_id: String,
        _req: UpdateBootVolumeDetails,
        options: RequestOptions,
    ) -> Result<Response<BootVolume>> {
        self.mutation("update_boot_volume", &options);
        Ok(Response::from(
            BootVolume::new().set_id(boot_volume_id).set_lifecycle_state("PROVISIONING"),
        ))
    }

    async fn delete_boot_volume(
        &self,
        boot_volume_id: String,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        self.mutation("delete_boot_volume", &options);
        if boot_volume_id != RESOURCE_ID {
            return Err(not_found());
        }
        Ok(Response::from(()))
    }

    async fn create_volume_group(
        &self,
        _req: CreateVolumeGroupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroup>> {
        self.mutation("create_volume_group", &options);
        Ok(Response::from(
            VolumeGroup::new().set_id(RESOURCE_ID).set_lifecycle_state("PROVISIONING"),
        ))
    }

    async fn get_volume_group(
        &self,
        volume_group_id: String,
        _options: RequestOptions,
    ) -> Result<Response<VolumeGroup>> {
        let state = self.next_state("get_volume_group", &volume_group_id)?;
        Ok(Response::from(
            VolumeGroup::new().set_id(volume_group_id).set_lifecycle_state(state),
        ))
    }

    async fn update_volume_group(
        &self,
        volume_group_id: String,
        _req: UpdateVolumeGroupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroup>> {
        self.mutation("update_volume_group", &options);
        Ok(Response::from(
            VolumeGroup::new().set_id(volume_group_id).set_lifecycle_state("PROVISIONING"),
        ))
    }

    async fn delete_volume_group(
        &self,
        volume_group_id: String,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        self.mutation("delete_volume_group", &options);
        if volume_group_id != RESOURCE_ID {
            return Err(not_found());
        }
        Ok(Response::from(()))
    }

    async fn create_volume_backup(
        &self,
        _req: CreateVolumeBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeBackup>> {
        self.mutation("create_volume_backup", &options);
        Ok(Response::from(
            VolumeBackup::new().set_id(RESOURCE_ID).set_lifecycle_state("CREATING"),
        ))
    }

    async fn get_volume_backup(
        &self,
        volume_backup_id: String,
        _options: RequestOptions,
    ) -> Result<Response<VolumeBackup>> {
        let state = self.next_state("get_volume_backup", &volume_backup_id)?;
        Ok(Response::from(
            VolumeBackup::new().set_id(volume_backup_id).set_lifecycle_state(state),
        ))
    }

    async fn update_volume_backup(
        &self,
        volume_backup_id: String,
        _req: UpdateBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeBackup>> {
        self.mutation("update_volume_backup", &options);
        Ok(Response::from(
            VolumeBackup::new().set_id(volume_backup_id).set_lifecycle_state("CREATING"),
        ))
    }

    async fn delete_volume_backup(
        &self,
        volume_backup_id: String,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        self.mutation("delete_volume_backup", &options);
        if volume_backup_id != RESOURCE_ID {
            return Err(not_found());
        }
        Ok(Response::from(()))
    }

    async fn copy_volume_backup(
        &self,
        _volume_backup_id: String,
        _req: CopyBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeBackup>> {
        self.mutation("copy_volume_backup", &options);
        Ok(Response::from(
            VolumeBackup::new().set_id(RESOURCE_ID).set_lifecycle_state("CREATING"),
        ))
    }

    async fn create_boot_volume_backup(
        &self,
        _req: CreateBootVolumeBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<BootVolumeBackup>> {
        self.mutation("create_boot_volume_backup", &options);
        Ok(Response::from(
            BootVolumeBackup::new().set_id(RESOURCE_ID).set_lifecycle_state("CREATING"),
        ))
    }

    async fn get_boot_volume_backup(
        &self,
        boot_volume_backup_id: String,
        _options: RequestOptions,
    ) -> Result<Response<BootVolumeBackup>> {
        let state = self.next_state("get_boot_volume_backup", &boot_volume_backup_id)?;
        Ok(Response::from(
            BootVolumeBackup::new().set_id(boot_volume_backup_id).set_lifecycle_state(state),
        ))
    }

    async fn update_boot_volume_backup(
        &self,
        boot_volume_backup_id: String,
        _req: UpdateBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<BootVolumeBackup>> {
        self.mutation("update_boot_volume_backup", &options);
        Ok(Response::from(
            BootVolumeBackup::new().set_id(boot_volume_backup_id).set_lifecycle_state("CREATING"),
        ))
    }

    async fn delete_boot_volume_backup(
        &self,
        boot_volume_backup_id: String,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        self.mutation("delete_boot_volume_backup", &options);
        if boot_volume_backup_id != RESOURCE_ID {
            return Err(not_found());
        }
        Ok(Response::from(()))
    }

    async fn copy_boot_volume_backup(
        &self,
        _boot_volume_backup_id: String,
        _req: CopyBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<BootVolumeBackup>> {
        self.mutation("copy_boot_volume_backup", &options);
        Ok(Response::from(
            BootVolumeBackup::new().set_id(RESOURCE_ID).set_lifecycle_state("CREATING"),
        ))
    }

    async fn create_volume_group_backup(
        &self,
        _req: CreateVolumeGroupBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroupBackup>> {
        self.mutation("create_volume_group_backup", &options);
        Ok(Response::from(
            VolumeGroupBackup::new().set_id(RESOURCE_ID).set_lifecycle_state("CREATING"),
        ))
    }

    async fn get_volume_group_backup(
        &self,
        volume_group_backup_id: String,
        _options: RequestOptions,
    ) -> Result<Response<VolumeGroupBackup>> {
        let state = self.next_state("get_volume_group_backup", &volume_group_backup_id)?;
        Ok(Response::from(
            VolumeGroupBackup::new().set_id(volume_group_backup_id).set_lifecycle_state(state),
        ))
    }

    async fn update_volume_group_backup(
        &self,
        volume_group_backup_id: String,
        _req: UpdateBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroupBackup>> {
        self.mutation("update_volume_group_backup", &options);
        Ok(Response::from(
            VolumeGroupBackup::new().set_id(volume_group_backup_id).set_lifecycle_state("CREATING"),
        ))
    }

    async fn delete_volume_group_backup(
        &self,
        volume_group_backup_id: String,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        self.mutation("delete_volume_group_backup", &options);
        if volume_group_backup_id != RESOURCE_ID {
            return Err(not_found());
        }
        Ok(Response::from(()))
    }

    async fn copy_volume_group_backup(
        &self,
        _volume_group_backup_id: String,
        _req: CopyBackupDetails,
        options: RequestOptions,
    ) -> Result<Response<VolumeGroupBackup>> {
        self.mutation("copy_volume_group_backup", &options);
        Ok(Response::from(
            VolumeGroupBackup::new().set_id(RESOURCE_ID).set_lifecycle_state("CREATING"),
        ))
    }
}
