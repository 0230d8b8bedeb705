use std::borrow::Cow;

pub type CowStr = Cow<'static, str>;

/// Operation class a [`ClusterBlock`] restricts.
#[derive(
    serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum ClusterBlockLevel {
    Read,
    Write,
    MetadataRead,
    MetadataWrite,
}

impl ClusterBlockLevel {
    pub const READ_WRITE: &'static [Self] = &[Self::Read, Self::Write];
    pub const ALL: &'static [Self] = &[
        Self::Read,
        Self::Write,
        Self::MetadataRead,
        Self::MetadataWrite,
    ];
}

/// A marker that restricts operations on an index until it is lifted.
///
/// Blocks are identified by their numeric id only: two blocks with the same
/// id are the same block, regardless of description or levels.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
pub struct ClusterBlock {
    pub id: u32,
    pub description: CowStr,
    /// Whether operations rejected by this block may be retried.
    pub retryable: bool,
    pub disable_state_persistence: bool,
    pub levels: Vec<ClusterBlockLevel>,
}

impl ClusterBlock {
    pub const INDEX_CLOSED_ID: u32 = 4;
    pub const INDEX_READ_ONLY_ID: u32 = 5;
    pub const INDEX_READ_ID: u32 = 7;
    pub const INDEX_WRITE_ID: u32 = 8;
    pub const INDEX_METADATA_ID: u32 = 9;

    pub fn new(
        id: u32,
        description: impl Into<CowStr>,
        retryable: bool,
        levels: impl Into<Vec<ClusterBlockLevel>>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            retryable,
            disable_state_persistence: false,
            levels: levels.into(),
        }
    }

    pub fn with_disable_state_persistence(mut self, disable: bool) -> Self {
        self.disable_state_persistence = disable;
        self
    }

    pub fn contains_level(&self, level: ClusterBlockLevel) -> bool {
        self.levels.contains(&level)
    }

    pub fn index_closed() -> Self {
        Self::new(
            Self::INDEX_CLOSED_ID,
            "index closed",
            false,
            ClusterBlockLevel::READ_WRITE,
        )
    }

    pub fn index_read_only() -> Self {
        Self::new(
            Self::INDEX_READ_ONLY_ID,
            "index read-only (api)",
            false,
            [ClusterBlockLevel::Write, ClusterBlockLevel::MetadataWrite],
        )
    }

    pub fn index_read() -> Self {
        Self::new(
            Self::INDEX_READ_ID,
            "index read (api)",
            false,
            [ClusterBlockLevel::Read],
        )
    }

    pub fn index_write() -> Self {
        Self::new(
            Self::INDEX_WRITE_ID,
            "index write (api)",
            false,
            [ClusterBlockLevel::Write],
        )
    }

    pub fn index_metadata() -> Self {
        Self::new(
            Self::INDEX_METADATA_ID,
            "index metadata (api)",
            false,
            [
                ClusterBlockLevel::MetadataRead,
                ClusterBlockLevel::MetadataWrite,
            ],
        )
    }
}

impl PartialEq for ClusterBlock {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ClusterBlock {}

impl std::hash::Hash for ClusterBlock {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for ClusterBlock {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ClusterBlock {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::fmt::Display for ClusterBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}, blocks ", self.id, self.description)?;
        for (index, level) in self.levels.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{:?}", level)?;
        }
        Ok(())
    }
}
