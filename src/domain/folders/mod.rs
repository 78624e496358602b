//! Folders domain: scan folders.

pub mod client;

use serde::{Deserialize, Serialize};

use crate::shared::serde_util::int_bool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderType {
    Main,
    Trash,
    Custom,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub folder_type: FolderType,
    #[serde(default, deserialize_with = "int_bool::deserialize")]
    pub default_tag: bool,
    #[serde(default, deserialize_with = "int_bool::deserialize")]
    pub custom: bool,
    #[serde(default)]
    pub unread_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FoldersResponse {
    #[serde(default)]
    pub folders: Vec<Folder>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatedId {
    pub id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_deserialize_int_flags() {
        let json = r#"{
            "unread_count": 0, "custom": 0, "default_tag": 1,
            "type": "main", "name": "My Scans", "id": 3
        }"#;
        let folder: Folder = serde_json::from_str(json).unwrap();
        assert_eq!(folder.id, 3);
        assert_eq!(folder.folder_type, FolderType::Main);
        assert!(folder.default_tag);
        assert!(!folder.custom);
    }

    #[test]
    fn test_unknown_folder_type() {
        let json = r#"{"id": 9, "name": "x", "type": "shared", "custom": 1}"#;
        let folder: Folder = serde_json::from_str(json).unwrap();
        assert_eq!(folder.folder_type, FolderType::Other);
        assert!(folder.custom);
    }
}
