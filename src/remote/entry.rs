// src/remote/entry.rs

use serde::Deserialize;

/// Kind of object named by a listing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectKind {
    /// A subdirectory.
    Tree,
    /// A file.
    Blob,
    /// Anything else the API may report (e.g. `commit` for submodules).
    Other(String),
}

impl From<String> for ObjectKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "tree" => ObjectKind::Tree,
            "blob" => ObjectKind::Blob,
            _ => ObjectKind::Other(kind),
        }
    }
}

/// One item of a one-level directory listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteEntry {
    /// Absolute, slash-separated path from the repository root.
    #[serde(default)]
    pub path: String,
    #[serde(rename = "gitObjectType", default, deserialize_with = "deserialize_kind")]
    pub kind: ObjectKind,
    /// Item URL; blobs are downloaded from a rewritten form of it.
    #[serde(default)]
    pub url: Option<String>,
}

impl Default for ObjectKind {
    fn default() -> Self {
        ObjectKind::Other(String::new())
    }
}

fn deserialize_kind<'de, D>(deserializer: D) -> Result<ObjectKind, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let kind = Option::<String>::deserialize(deserializer)?;
    Ok(kind.map(ObjectKind::from).unwrap_or_default())
}

impl RemoteEntry {
    /// The final path segment, used as the local file or directory name.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Kind as reported by the API, for log lines.
    pub fn kind_str(&self) -> &str {
        match &self.kind {
            ObjectKind::Tree => "tree",
            ObjectKind::Blob => "blob",
            ObjectKind::Other(kind) => kind,
        }
    }
}
