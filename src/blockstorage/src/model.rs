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

//! The resources and request payloads of the Block Storage service.
//!
//! The service serializes all these types as JSON objects with `camelCase`
//! field names. Optional fields are omitted when not set.

use std::collections::HashMap;
use waiter::LifecycleResource;

/// Defines an enum for a string-valued field of the service.
///
/// The enums preserve values unknown to this version of the library in the
/// `UnknownValue` variant, so they survive a round trip.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $( $(#[$vmeta:meta])* $variant:ident => $value:literal, )+ }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Use this variant to handle new values that are not yet known to this library.
            UnknownValue(String),
        }

        impl $name {
            /// All the values known to this version of the library.
            pub const KNOWN: &'static [&'static str] = &[ $( $value, )+ ];

            /// The name of the value, as used by the service.
            pub fn name(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )+
                    Self::UnknownValue(v) => v.as_str(),
                }
            }
        }

        impl std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $value => Self::$variant, )+
                    _ => Self::UnknownValue(value.to_string()),
                }
            }
        }

        impl std::convert::From<$name> for String {
            fn from(value: $name) -> Self {
                value.name().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl serde::ser::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> serde::de::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <String as serde::de::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(value.as_str()))
            }
        }
    };
}

string_enum! {
    /// The lifecycle state of a [Volume].
    VolumeLifecycleState {
        Provisioning => "PROVISIONING",
        Restoring => "RESTORING",
        Available => "AVAILABLE",
        Terminating => "TERMINATING",
        Terminated => "TERMINATED",
        Faulty => "FAULTY",
    }
}

string_enum! {
    /// The lifecycle state of a [BootVolume].
    BootVolumeLifecycleState {
        Provisioning => "PROVISIONING",
        Restoring => "RESTORING",
        Available => "AVAILABLE",
        Terminating => "TERMINATING",
        Terminated => "TERMINATED",
        Faulty => "FAULTY",
    }
}

string_enum! {
    /// The lifecycle state of a [VolumeGroup].
    VolumeGroupLifecycleState {
        Provisioning => "PROVISIONING",
        Available => "AVAILABLE",
        Terminating => "TERMINATING",
        Terminated => "TERMINATED",
        Faulty => "FAULTY",
        /// The group membership is changing.
        UpdatePending => "UPDATE_PENDING",
    }
}

string_enum! {
    /// The lifecycle state of a [VolumeBackup].
    VolumeBackupLifecycleState {
        Creating => "CREATING",
        Available => "AVAILABLE",
        Terminating => "TERMINATING",
        Terminated => "TERMINATED",
        Faulty => "FAULTY",
        /// The service accepted the request, but has not started the backup.
        RequestReceived => "REQUEST_RECEIVED",
    }
}

string_enum! {
    /// The lifecycle state of a [BootVolumeBackup].
    BootVolumeBackupLifecycleState {
        Creating => "CREATING",
        Available => "AVAILABLE",
        Terminating => "TERMINATING",
        Terminated => "TERMINATED",
        Faulty => "FAULTY",
        RequestReceived => "REQUEST_RECEIVED",
    }
}

string_enum! {
    /// The lifecycle state of a [VolumeGroupBackup].
    VolumeGroupBackupLifecycleState {
        Creating => "CREATING",
        /// The backups of all the volumes in the group have been started, but
        /// some are still in progress.
        Committed => "COMMITTED",
        Available => "AVAILABLE",
        Terminating => "TERMINATING",
        Terminated => "TERMINATED",
        Faulty => "FAULTY",
        RequestReceived => "REQUEST_RECEIVED",
    }
}

string_enum! {
    /// The kind of backup.
    BackupType {
        /// A backup of all the data in the volume.
        Full => "FULL",
        /// A backup of the changes since the last backup.
        Incremental => "INCREMENTAL",
    }
}

/// A block volume.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Volume {
    /// The volume id.
    pub id: Option<String>,
    pub compartment_id: Option<String>,
    pub availability_domain: Option<String>,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<VolumeLifecycleState>,
    /// The size of the volume in GiB.
    #[serde(rename = "sizeInGBs")]
    pub size_in_gbs: Option<i64>,
    /// The number of volume performance units per GiB.
    #[serde(rename = "vpusPerGB")]
    pub vpus_per_gb: Option<i64>,
    /// The volume group containing this volume, if any.
    pub volume_group_id: Option<String>,
    /// True once all the data in a volume restored from a backup is
    /// available.
    pub is_hydrated: Option<bool>,
    pub kms_key_id: Option<String>,
    /// The creation time, in RFC 3339 format.
    pub time_created: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub freeform_tags: HashMap<String, String>,
}

impl Volume {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][Volume::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][Volume::compartment_id].
    pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [display_name][Volume::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][Volume::lifecycle_state].
    pub fn set_lifecycle_state<T: Into<VolumeLifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [size_in_gbs][Volume::size_in_gbs].
    pub fn set_size_in_gbs(mut self, v: i64) -> Self {
        self.size_in_gbs = Some(v);
        self
    }
}

impl LifecycleResource for Volume {
    const KNOWN_LIFECYCLE_STATES: &'static [&'static str] = VolumeLifecycleState::KNOWN;
    fn resource_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn lifecycle_state(&self) -> Option<&str> {
        self.lifecycle_state.as_ref().map(VolumeLifecycleState::name)
    }
}

/// A boot volume, containing the image used to boot an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BootVolume {
    /// The boot volume id.
    pub id: Option<String>,
    pub compartment_id: Option<String>,
    pub availability_domain: Option<String>,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<BootVolumeLifecycleState>,
    /// The size of the boot volume in GiB.
    #[serde(rename = "sizeInGBs")]
    pub size_in_gbs: Option<i64>,
    #[serde(rename = "vpusPerGB")]
    pub vpus_per_gb: Option<i64>,
    /// The image used to create the boot volume.
    pub image_id: Option<String>,
    pub volume_group_id: Option<String>,
    pub is_hydrated: Option<bool>,
    pub kms_key_id: Option<String>,
    pub time_created: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub freeform_tags: HashMap<String, String>,
}

impl BootVolume {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][BootVolume::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [display_name][BootVolume::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][BootVolume::lifecycle_state].
    pub fn set_lifecycle_state<T: Into<BootVolumeLifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [image_id][BootVolume::image_id].
    pub fn set_image_id<T: Into<String>>(mut self, v: T) -> Self {
        self.image_id = Some(v.into());
        self
    }
}

impl LifecycleResource for BootVolume {
    const KNOWN_LIFECYCLE_STATES: &'static [&'static str] = BootVolumeLifecycleState::KNOWN;
    fn resource_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn lifecycle_state(&self) -> Option<&str> {
        self.lifecycle_state
            .as_ref()
            .map(BootVolumeLifecycleState::name)
    }
}

/// A group of volumes, backed up and cloned together.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct VolumeGroup {
    pub id: Option<String>,
    pub compartment_id: Option<String>,
    pub availability_domain: Option<String>,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<VolumeGroupLifecycleState>,
    /// The aggregate size of the volumes in the group, in GiB.
    #[serde(rename = "sizeInGBs")]
    pub size_in_gbs: Option<i64>,
    /// The ids of the volumes and boot volumes in the group.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volume_ids: Vec<String>,
    pub time_created: Option<String>,
}

impl VolumeGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][VolumeGroup::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][VolumeGroup::lifecycle_state].
    pub fn set_lifecycle_state<T: Into<VolumeGroupLifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [volume_ids][VolumeGroup::volume_ids].
    pub fn set_volume_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.volume_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl LifecycleResource for VolumeGroup {
    const KNOWN_LIFECYCLE_STATES: &'static [&'static str] = VolumeGroupLifecycleState::KNOWN;
    fn resource_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn lifecycle_state(&self) -> Option<&str> {
        self.lifecycle_state
            .as_ref()
            .map(VolumeGroupLifecycleState::name)
    }
}

/// A point-in-time copy of a volume.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct VolumeBackup {
    pub id: Option<String>,
    pub compartment_id: Option<String>,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<VolumeBackupLifecycleState>,
    /// The volume this backup was taken from.
    pub volume_id: Option<String>,
    #[serde(rename = "type")]
    pub backup_type: Option<BackupType>,
    /// The backup this one was copied from, for backups copied across
    /// regions.
    pub source_volume_backup_id: Option<String>,
    #[serde(rename = "sizeInGBs")]
    pub size_in_gbs: Option<i64>,
    pub kms_key_id: Option<String>,
    pub time_created: Option<String>,
    /// When the backup is automatically deleted, in RFC 3339 format.
    pub expiration_time: Option<String>,
}

impl VolumeBackup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][VolumeBackup::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][VolumeBackup::lifecycle_state].
    pub fn set_lifecycle_state<T: Into<VolumeBackupLifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [volume_id][VolumeBackup::volume_id].
    pub fn set_volume_id<T: Into<String>>(mut self, v: T) -> Self {
        self.volume_id = Some(v.into());
        self
    }
}

impl LifecycleResource for VolumeBackup {
    const KNOWN_LIFECYCLE_STATES: &'static [&'static str] = VolumeBackupLifecycleState::KNOWN;
    fn resource_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn lifecycle_state(&self) -> Option<&str> {
        self.lifecycle_state
            .as_ref()
            .map(VolumeBackupLifecycleState::name)
    }
}

/// A point-in-time copy of a boot volume.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BootVolumeBackup {
    pub id: Option<String>,
    pub compartment_id: Option<String>,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<BootVolumeBackupLifecycleState>,
    /// The boot volume this backup was taken from.
    pub boot_volume_id: Option<String>,
    pub image_id: Option<String>,
    #[serde(rename = "type")]
    pub backup_type: Option<BackupType>,
    pub source_boot_volume_backup_id: Option<String>,
    #[serde(rename = "sizeInGBs")]
    pub size_in_gbs: Option<i64>,
    pub kms_key_id: Option<String>,
    pub time_created: Option<String>,
    pub expiration_time: Option<String>,
}

impl BootVolumeBackup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][BootVolumeBackup::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][BootVolumeBackup::lifecycle_state].
    pub fn set_lifecycle_state<T: Into<BootVolumeBackupLifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [boot_volume_id][BootVolumeBackup::boot_volume_id].
    pub fn set_boot_volume_id<T: Into<String>>(mut self, v: T) -> Self {
        self.boot_volume_id = Some(v.into());
        self
    }
}

impl LifecycleResource for BootVolumeBackup {
    const KNOWN_LIFECYCLE_STATES: &'static [&'static str] = BootVolumeBackupLifecycleState::KNOWN;
    fn resource_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn lifecycle_state(&self) -> Option<&str> {
        self.lifecycle_state
            .as_ref()
            .map(BootVolumeBackupLifecycleState::name)
    }
}

/// A backup of all the volumes in a volume group.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct VolumeGroupBackup {
    pub id: Option<String>,
    pub compartment_id: Option<String>,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<VolumeGroupBackupLifecycleState>,
    /// The volume group this backup was taken from.
    pub volume_group_id: Option<String>,
    #[serde(rename = "type")]
    pub backup_type: Option<BackupType>,
    /// The ids of the volume backups in this group backup.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volume_backup_ids: Vec<String>,
    pub source_volume_group_backup_id: Option<String>,
    #[serde(rename = "sizeInGBs")]
    pub size_in_gbs: Option<i64>,
    pub time_created: Option<String>,
    pub expiration_time: Option<String>,
}

impl VolumeGroupBackup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][VolumeGroupBackup::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][VolumeGroupBackup::lifecycle_state].
    pub fn set_lifecycle_state<T: Into<VolumeGroupBackupLifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [volume_group_id][VolumeGroupBackup::volume_group_id].
    pub fn set_volume_group_id<T: Into<String>>(mut self, v: T) -> Self {
        self.volume_group_id = Some(v.into());
        self
    }
}

impl LifecycleResource for VolumeGroupBackup {
    const KNOWN_LIFECYCLE_STATES: &'static [&'static str] = VolumeGroupBackupLifecycleState::KNOWN;
    fn resource_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn lifecycle_state(&self) -> Option<&str> {
        self.lifecycle_state
            .as_ref()
            .map(VolumeGroupBackupLifecycleState::name)
    }
}

/// The request payload to create a [Volume].
///
/// A volume is created empty, or from a backup when
/// [source_volume_backup_id][CreateVolumeDetails::source_volume_backup_id] is
/// set.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateVolumeDetails {
    pub compartment_id: String,
    pub availability_domain: String,
    pub display_name: Option<String>,
    #[serde(rename = "sizeInGBs")]
    pub size_in_gbs: Option<i64>,
    #[serde(rename = "vpusPerGB")]
    pub vpus_per_gb: Option<i64>,
    pub source_volume_backup_id: Option<String>,
    pub kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub freeform_tags: HashMap<String, String>,
}

impl CreateVolumeDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [compartment_id][CreateVolumeDetails::compartment_id].
    pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [availability_domain][CreateVolumeDetails::availability_domain].
    pub fn set_availability_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.availability_domain = v.into();
        self
    }

    /// Sets the value of [display_name][CreateVolumeDetails::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [size_in_gbs][CreateVolumeDetails::size_in_gbs].
    pub fn set_size_in_gbs(mut self, v: i64) -> Self {
        self.size_in_gbs = Some(v);
        self
    }

    /// Sets the value of [source_volume_backup_id][CreateVolumeDetails::source_volume_backup_id].
    pub fn set_source_volume_backup_id<T: Into<String>>(mut self, v: T) -> Self {
        self.source_volume_backup_id = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][CreateVolumeDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// The request payload to update a [Volume].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateVolumeDetails {
    pub display_name: Option<String>,
    /// The new size. Volumes can only grow.
    #[serde(rename = "sizeInGBs")]
    pub size_in_gbs: Option<i64>,
    #[serde(rename = "vpusPerGB")]
    pub vpus_per_gb: Option<i64>,
}

impl UpdateVolumeDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [display_name][UpdateVolumeDetails::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [size_in_gbs][UpdateVolumeDetails::size_in_gbs].
    pub fn set_size_in_gbs(mut self, v: i64) -> Self {
        self.size_in_gbs = Some(v);
        self
    }

    /// Sets the value of [vpus_per_gb][UpdateVolumeDetails::vpus_per_gb].
    pub fn set_vpus_per_gb(mut self, v: i64) -> Self {
        self.vpus_per_gb = Some(v);
        self
    }
}

/// The request payload to create a [BootVolume].
///
/// Boot volumes are created from another boot volume or from a boot volume
/// backup.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateBootVolumeDetails {
    pub compartment_id: String,
    pub availability_domain: String,
    pub display_name: Option<String>,
    #[serde(rename = "sizeInGBs")]
    pub size_in_gbs: Option<i64>,
    #[serde(rename = "vpusPerGB")]
    pub vpus_per_gb: Option<i64>,
    pub source_boot_volume_id: Option<String>,
    pub source_boot_volume_backup_id: Option<String>,
    pub kms_key_id: Option<String>,
}

impl CreateBootVolumeDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [compartment_id][CreateBootVolumeDetails::compartment_id].
    pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [availability_domain][CreateBootVolumeDetails::availability_domain].
    pub fn set_availability_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.availability_domain = v.into();
        self
    }

    /// Sets the value of [display_name][CreateBootVolumeDetails::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [source_boot_volume_id][CreateBootVolumeDetails::source_boot_volume_id].
    pub fn set_source_boot_volume_id<T: Into<String>>(mut self, v: T) -> Self {
        self.source_boot_volume_id = Some(v.into());
        self
    }

    /// Sets the value of [source_boot_volume_backup_id][CreateBootVolumeDetails::source_boot_volume_backup_id].
    pub fn set_source_boot_volume_backup_id<T: Into<String>>(mut self, v: T) -> Self {
        self.source_boot_volume_backup_id = Some(v.into());
        self
    }
}

/// The request payload to update a [BootVolume].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateBootVolumeDetails {
    pub display_name: Option<String>,
    #[serde(rename = "sizeInGBs")]
    pub size_in_gbs: Option<i64>,
    #[serde(rename = "vpusPerGB")]
    pub vpus_per_gb: Option<i64>,
}

impl UpdateBootVolumeDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [display_name][UpdateBootVolumeDetails::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [size_in_gbs][UpdateBootVolumeDetails::size_in_gbs].
    pub fn set_size_in_gbs(mut self, v: i64) -> Self {
        self.size_in_gbs = Some(v);
        self
    }
}

/// The request payload to create a [VolumeGroup].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateVolumeGroupDetails {
    pub compartment_id: String,
    pub availability_domain: String,
    pub display_name: Option<String>,
    /// The volumes and boot volumes to include in the group.
    pub volume_ids: Vec<String>,
}

impl CreateVolumeGroupDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [compartment_id][CreateVolumeGroupDetails::compartment_id].
    pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [availability_domain][CreateVolumeGroupDetails::availability_domain].
    pub fn set_availability_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.availability_domain = v.into();
        self
    }

    /// Sets the value of [display_name][CreateVolumeGroupDetails::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [volume_ids][CreateVolumeGroupDetails::volume_ids].
    pub fn set_volume_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.volume_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request payload to update a [VolumeGroup].
///
/// Setting [volume_ids][UpdateVolumeGroupDetails::volume_ids] replaces the
/// group membership.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateVolumeGroupDetails {
    pub display_name: Option<String>,
    pub volume_ids: Option<Vec<String>>,
}

impl UpdateVolumeGroupDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [display_name][UpdateVolumeGroupDetails::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [volume_ids][UpdateVolumeGroupDetails::volume_ids].
    pub fn set_volume_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.volume_ids = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// The request payload to create a [VolumeBackup].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateVolumeBackupDetails {
    /// The volume to back up.
    pub volume_id: String,
    pub display_name: Option<String>,
    #[serde(rename = "type")]
    pub backup_type: Option<BackupType>,
    pub kms_key_id: Option<String>,
}

impl CreateVolumeBackupDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [volume_id][CreateVolumeBackupDetails::volume_id].
    pub fn set_volume_id<T: Into<String>>(mut self, v: T) -> Self {
        self.volume_id = v.into();
        self
    }

    /// Sets the value of [display_name][CreateVolumeBackupDetails::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [backup_type][CreateVolumeBackupDetails::backup_type].
    pub fn set_backup_type<T: Into<BackupType>>(mut self, v: T) -> Self {
        self.backup_type = Some(v.into());
        self
    }
}

/// The request payload to create a [BootVolumeBackup].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateBootVolumeBackupDetails {
    /// The boot volume to back up.
    pub boot_volume_id: String,
    pub display_name: Option<String>,
    #[serde(rename = "type")]
    pub backup_type: Option<BackupType>,
    pub kms_key_id: Option<String>,
}

impl CreateBootVolumeBackupDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [boot_volume_id][CreateBootVolumeBackupDetails::boot_volume_id].
    pub fn set_boot_volume_id<T: Into<String>>(mut self, v: T) -> Self {
        self.boot_volume_id = v.into();
        self
    }

    /// Sets the value of [display_name][CreateBootVolumeBackupDetails::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [backup_type][CreateBootVolumeBackupDetails::backup_type].
    pub fn set_backup_type<T: Into<BackupType>>(mut self, v: T) -> Self {
        self.backup_type = Some(v.into());
        self
    }
}

/// The request payload to create a [VolumeGroupBackup].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateVolumeGroupBackupDetails {
    /// The volume group to back up.
    pub volume_group_id: String,
    pub compartment_id: Option<String>,
    pub display_name: Option<String>,
    #[serde(rename = "type")]
    pub backup_type: Option<BackupType>,
}

impl CreateVolumeGroupBackupDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [volume_group_id][CreateVolumeGroupBackupDetails::volume_group_id].
    pub fn set_volume_group_id<T: Into<String>>(mut self, v: T) -> Self {
        self.volume_group_id = v.into();
        self
    }

    /// Sets the value of [display_name][CreateVolumeGroupBackupDetails::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [backup_type][CreateVolumeGroupBackupDetails::backup_type].
    pub fn set_backup_type<T: Into<BackupType>>(mut self, v: T) -> Self {
        self.backup_type = Some(v.into());
        self
    }
}

/// The request payload to update any kind of backup.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateBackupDetails {
    pub display_name: Option<String>,
    /// The new expiration time, in RFC 3339 format.
    pub expiration_time: Option<String>,
}

impl UpdateBackupDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [display_name][UpdateBackupDetails::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [expiration_time][UpdateBackupDetails::expiration_time].
    pub fn set_expiration_time<T: Into<String>>(mut self, v: T) -> Self {
        self.expiration_time = Some(v.into());
        self
    }
}

/// The request payload to copy a backup to another region.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CopyBackupDetails {
    /// The region receiving the copy, for example `us-ashburn-1`.
    pub destination_region: String,
    pub display_name: Option<String>,
    /// The key used to encrypt the copy in the destination region.
    pub kms_key_id: Option<String>,
}

impl CopyBackupDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [destination_region][CopyBackupDetails::destination_region].
    pub fn set_destination_region<T: Into<String>>(mut self, v: T) -> Self {
        self.destination_region = v.into();
        self
    }

    /// Sets the value of [display_name][CopyBackupDetails::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [kms_key_id][CopyBackupDetails::kms_key_id].
    pub fn set_kms_key_id<T: Into<String>>(mut self, v: T) -> Self {
        self.kms_key_id = Some(v.into());
        self
    }
}

/// The request payload to move any resource to a different compartment.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ChangeCompartmentDetails {
    /// The destination compartment.
    pub compartment_id: String,
}

impl ChangeCompartmentDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [compartment_id][ChangeCompartmentDetails::compartment_id].
    pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }
}

/// The parameters to list resources in a compartment.
///
/// Results are paginated. Use the `opc-next-page` header of the response, see
/// [Response::next_page][gax::response::Response::next_page], to set
/// [page][ListRequest::page] in the next request.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListRequest {
    pub compartment_id: String,
    pub availability_domain: Option<String>,
    pub display_name: Option<String>,
    /// Only return resources in this lifecycle state.
    pub lifecycle_state: Option<String>,
    /// The maximum number of items per page.
    pub limit: Option<u32>,
    /// The page token returned in the previous response.
    pub page: Option<String>,
}

impl ListRequest {
    pub fn new<T: Into<String>>(compartment_id: T) -> Self {
        Self {
            compartment_id: compartment_id.into(),
            ..Default::default()
        }
    }

    /// Sets the value of [availability_domain][ListRequest::availability_domain].
    pub fn set_availability_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.availability_domain = Some(v.into());
        self
    }

    /// Sets the value of [display_name][ListRequest::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][ListRequest::lifecycle_state].
    pub fn set_lifecycle_state<T: Into<String>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [limit][ListRequest::limit].
    pub fn set_limit(mut self, v: u32) -> Self {
        self.limit = Some(v);
        self
    }

    /// Sets the value of [page][ListRequest::page].
    pub fn set_page<T: Into<String>>(mut self, v: T) -> Self {
        self.page = Some(v.into());
        self
    }
}
