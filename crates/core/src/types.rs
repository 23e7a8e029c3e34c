use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A wire record: field name to raw JSON value.
pub type Record = Map<String, Value>;

/// ShotGrid entity types known to the wrapper.
///
/// Custom entity types (e.g. `CustomEntity01`) are addressed by their raw
/// name through the low-level `find`/`create` calls instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    ApiUser,
    Asset,
    Attachment,
    Booking,
    Composition,
    Department,
    Group,
    HumanUser,
    Note,
    Playlist,
    Project,
    PublishedFile,
    PublishedFileType,
    Reply,
    Sequence,
    Shot,
    Step,
    Status,
    Task,
    TimeLog,
    Version,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApiUser => "ApiUser",
            Self::Asset => "Asset",
            Self::Attachment => "Attachment",
            Self::Booking => "Booking",
            Self::Composition => "Composition",
            Self::Department => "Department",
            Self::Group => "Group",
            Self::HumanUser => "HumanUser",
            Self::Note => "Note",
            Self::Playlist => "Playlist",
            Self::Project => "Project",
            Self::PublishedFile => "PublishedFile",
            Self::PublishedFileType => "PublishedFileType",
            Self::Reply => "Reply",
            Self::Sequence => "Sequence",
            Self::Shot => "Shot",
            Self::Step => "Step",
            Self::Status => "Status",
            Self::Task => "Task",
            Self::TimeLog => "TimeLog",
            Self::Version => "Version",
        }
    }
}

impl AsRef<str> for EntityType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values of `HumanUser.sg_status_list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HumanUserStatus {
    #[serde(rename = "act")]
    Active,
    #[serde(rename = "dis")]
    Disabled,
}

impl HumanUserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "act",
            Self::Disabled => "dis",
        }
    }
}

/// Stock `sg_status_list` codes shared by most entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusList {
    Wtg,
    Hld,
    Ip,
    Na,
}

impl StatusList {
    /// Status code as stored in `sg_status_list`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Wtg => "wtg",
            Self::Hld => "hld",
            Self::Ip => "ip",
            Self::Na => "na",
        }
    }

    /// Display name shown in the ShotGrid UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Wtg => "Waiting to Start",
            Self::Hld => "On Hold",
            Self::Ip => "In Progress",
            Self::Na => "N/A",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_names() {
        assert_eq!(EntityType::HumanUser.as_str(), "HumanUser");
        assert_eq!(EntityType::TimeLog.to_string(), "TimeLog");
        assert_eq!(
            serde_json::to_string(&EntityType::PublishedFileType).unwrap(),
            "\"PublishedFileType\""
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(HumanUserStatus::Active.as_str(), "act");
        assert_eq!(serde_json::to_string(&HumanUserStatus::Disabled).unwrap(), "\"dis\"");
        assert_eq!(StatusList::Ip.code(), "ip");
        assert_eq!(StatusList::Hld.display_name(), "On Hold");
        assert_eq!(serde_json::to_string(&StatusList::Wtg).unwrap(), "\"wtg\"");
    }
}
