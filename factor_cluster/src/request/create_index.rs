use std::{sync::Arc, time::Duration};

use crate::{
    data::{BlockSet, ClusterBlock, CustomMap, IndexCustom, IndexState, MappingMap, Settings},
    error::{ConstructionError, RequiredField},
};

use super::{ClusterStateUpdateRequest, UpdateEnvelope};

/// Cluster state update request that creates a new index.
///
/// Built by the index creation service with the two identity fields, then
/// populated through the chained `with_*` methods and handed over to the
/// cluster state coordinator by value.
///
/// The fields follow different accumulation rules:
/// * settings are replaced as a whole by [`Self::with_settings`]
/// * mappings and customs are merged, later values win for equal keys
/// * blocks are added to a set, identified by block id
///
/// Accessors return live references into the request.
/// Use [`Self::into_shared`] to read a finished request from multiple
/// threads, or [`Self::into_parts`] to take ownership of the fields.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateIndexRequest {
    cause: String,
    index: String,
    state: IndexState,
    settings: Settings,
    mappings: MappingMap,
    customs: CustomMap,
    blocks: BlockSet,
    envelope: UpdateEnvelope,
}

/// All fields of a [`CreateIndexRequest`], moved out of the request.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateIndexParts {
    pub cause: String,
    pub index: String,
    pub state: IndexState,
    pub settings: Settings,
    pub mappings: MappingMap,
    pub customs: CustomMap,
    pub blocks: BlockSet,
    pub envelope: UpdateEnvelope,
}

impl CreateIndexRequest {
    /// Create a new request.
    ///
    /// Meant for the index creation service only: requests should reach the
    /// coordinator through that service, which resolves the index name and
    /// the cause before building the request.
    ///
    /// Fails if `cause` or `index` is empty. Any other value is accepted,
    /// checking index name legality is left to the coordinator.
    pub fn new(
        cause: impl Into<String>,
        index: impl Into<String>,
    ) -> Result<Self, ConstructionError> {
        let cause = cause.into();
        let index = index.into();

        if cause.is_empty() {
            tracing::debug!(%index, "rejected create index request without a cause");
            return Err(ConstructionError::new(RequiredField::Cause));
        }
        if index.is_empty() {
            tracing::debug!(%cause, "rejected create index request without an index name");
            return Err(ConstructionError::new(RequiredField::Index));
        }

        tracing::trace!(%cause, %index, "create index request constructed");

        Ok(Self {
            cause,
            index,
            state: IndexState::default(),
            settings: Settings::empty(),
            mappings: MappingMap::default(),
            customs: CustomMap::default(),
            blocks: BlockSet::default(),
            envelope: UpdateEnvelope::default(),
        })
    }

    /// Replace the settings.
    ///
    /// Settings passed in an earlier call are discarded.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        if !self.settings.is_empty() {
            tracing::trace!(
                index = %self.index,
                previous = self.settings.len(),
                new = settings.len(),
                "replacing index settings"
            );
        }
        self.settings = settings;
        self
    }

    /// Merge mappings into the existing ones.
    pub fn with_mappings<K, V, I>(mut self, mappings: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, source) in mappings {
            self = self.with_mapping(key, source);
        }
        self
    }

    pub fn with_mapping(mut self, key: impl Into<String>, source: impl Into<String>) -> Self {
        let key = key.into();
        if self.mappings.contains_key(&key) {
            tracing::debug!(index = %self.index, mapping = %key, "overwriting mapping");
        }
        self.mappings.insert(key, source.into());
        self
    }

    /// Merge custom metadata into the existing entries.
    pub fn with_customs<K, I>(mut self, customs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, IndexCustom)>,
    {
        for (key, custom) in customs {
            self = self.with_custom(key, custom);
        }
        self
    }

    pub fn with_custom(mut self, key: impl Into<String>, custom: IndexCustom) -> Self {
        let key = key.into();
        if self.customs.contains_key(&key) {
            tracing::debug!(index = %self.index, custom = %key, "overwriting custom metadata");
        }
        self.customs.insert(key, custom);
        self
    }

    /// Add blocks to the initial block set.
    ///
    /// Blocks already present (by id) are kept unchanged.
    pub fn with_blocks<I>(mut self, blocks: I) -> Self
    where
        I: IntoIterator<Item = ClusterBlock>,
    {
        for block in blocks {
            self = self.with_block(block);
        }
        self
    }

    pub fn with_block(mut self, block: ClusterBlock) -> Self {
        let id = block.id;
        if !self.blocks.insert(block) {
            tracing::trace!(index = %self.index, block = id, "block already present");
        }
        self
    }

    pub fn with_state(mut self, state: IndexState) -> Self {
        self.state = state;
        self
    }

    pub fn with_ack_timeout(mut self, timeout: Duration) -> Self {
        self.envelope.ack_timeout = timeout;
        self
    }

    pub fn with_master_node_timeout(mut self, timeout: Duration) -> Self {
        self.envelope.master_node_timeout = timeout;
        self
    }

    /// Reason for the change, for example "api" or "auto(bulk api)".
    pub fn cause(&self) -> &str {
        &self.cause
    }

    /// Name of the index to create.
    pub fn index(&self) -> &str {
        &self.index
    }

    pub fn state(&self) -> IndexState {
        self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn mappings(&self) -> &MappingMap {
        &self.mappings
    }

    pub fn customs(&self) -> &CustomMap {
        &self.customs
    }

    pub fn blocks(&self) -> &BlockSet {
        &self.blocks
    }

    /// Freeze the request for concurrent read access.
    pub fn into_shared(self) -> Arc<Self> {
        tracing::trace!(index = %self.index, "create index request handed off");
        Arc::new(self)
    }

    pub fn into_parts(self) -> CreateIndexParts {
        tracing::trace!(index = %self.index, "create index request handed off");
        CreateIndexParts {
            cause: self.cause,
            index: self.index,
            state: self.state,
            settings: self.settings,
            mappings: self.mappings,
            customs: self.customs,
            blocks: self.blocks,
            envelope: self.envelope,
        }
    }
}

impl ClusterStateUpdateRequest for CreateIndexRequest {
    fn envelope(&self) -> &UpdateEnvelope {
        &self.envelope
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        data::ClusterBlockLevel,
        mappings,
        request::{DEFAULT_ACK_TIMEOUT, DEFAULT_MASTER_NODE_TIMEOUT},
    };

    fn request() -> CreateIndexRequest {
        CreateIndexRequest::new("api", "logs-2024").unwrap()
    }

    #[test]
    fn test_new_defaults() {
        let req = request();
        assert_eq!(req.cause(), "api");
        assert_eq!(req.index(), "logs-2024");
        assert_eq!(req.state(), IndexState::Open);
        assert!(req.settings().is_empty());
        assert!(req.mappings().is_empty());
        assert!(req.customs().is_empty());
        assert!(req.blocks().is_empty());
        assert_eq!(req.ack_timeout(), DEFAULT_ACK_TIMEOUT);
        assert_eq!(req.master_node_timeout(), DEFAULT_MASTER_NODE_TIMEOUT);
    }

    #[test]
    fn test_new_requires_cause_and_index() {
        let err = CreateIndexRequest::new("", "logs").unwrap_err();
        assert_eq!(err.field(), RequiredField::Cause);

        let err = CreateIndexRequest::new("api", "").unwrap_err();
        assert_eq!(err.field(), RequiredField::Index);

        let err = CreateIndexRequest::new("", "").unwrap_err();
        assert_eq!(err.field(), RequiredField::Cause);
    }

    #[test]
    fn test_new_accepts_any_non_empty_value() {
        // Name legality is checked by the coordinator, not here.
        let req = CreateIndexRequest::new(" ", "Invalid Name\t").unwrap();
        assert_eq!(req.cause(), " ");
        assert_eq!(req.index(), "Invalid Name\t");
    }

    #[test]
    fn test_settings_replace() {
        let a = Settings::builder().put("index.number_of_shards", 3).build();
        let b = Settings::builder().put("index.number_of_replicas", 2).build();

        let req = request().with_settings(a).with_settings(b.clone());
        assert_eq!(req.settings(), &b);
        assert_eq!(req.settings().get("index.number_of_shards"), None);

        let req = req.with_settings(Settings::empty());
        assert!(req.settings().is_empty());
    }

    #[test]
    fn test_mappings_merge() {
        let req = request()
            .with_mappings(mappings! { "doc": "{}", "event": "{\"a\":1}" })
            .with_mappings(mappings! { "metric": "{}" });
        assert_eq!(
            req.mappings(),
            &mappings! { "doc": "{}", "event": "{\"a\":1}", "metric": "{}" }
        );

        let req = req
            .with_mappings(vec![("event", "{\"b\":2}")])
            .with_mapping("doc", "{\"c\":3}");
        assert_eq!(
            req.mappings(),
            &mappings! { "doc": "{\"c\":3}", "event": "{\"b\":2}", "metric": "{}" }
        );
    }

    #[test]
    fn test_customs_merge() {
        let first = IndexCustom::new(serde_json::json!({ "v": 1 }));
        let second = IndexCustom::new(serde_json::json!({ "v": 2 }));
        let other = IndexCustom::new(serde_json::json!("x"));

        let req = request()
            .with_customs(vec![("rollover", first), ("warmers", other.clone())])
            .with_custom("rollover", second.clone());

        assert_eq!(req.customs().len(), 2);
        assert_eq!(req.customs().get("rollover"), Some(&second));
        assert_eq!(req.customs().get("warmers"), Some(&other));
    }

    #[test]
    fn test_blocks_union() {
        let req = request()
            .with_blocks(vec![ClusterBlock::index_read_only()])
            .with_blocks(vec![
                ClusterBlock::index_read_only(),
                ClusterBlock::index_metadata(),
            ]);

        let expected: BlockSet = vec![
            ClusterBlock::index_read_only(),
            ClusterBlock::index_metadata(),
        ]
        .into_iter()
        .collect();
        assert_eq!(req.blocks(), &expected);
    }

    #[test]
    fn test_blocks_keep_first_instance() {
        let replacement = ClusterBlock::new(
            ClusterBlock::INDEX_WRITE_ID,
            "replacement",
            true,
            ClusterBlockLevel::ALL,
        );
        let req = request()
            .with_block(ClusterBlock::index_write())
            .with_block(replacement);

        assert_eq!(req.blocks().len(), 1);
        let block = req.blocks().iter().next().unwrap();
        assert_eq!(block.description, "index write (api)");
        assert!(!block.retryable);
    }

    #[test]
    fn test_state_and_timeouts() {
        let req = request()
            .with_state(IndexState::Close)
            .with_ack_timeout(Duration::from_secs(1))
            .with_master_node_timeout(Duration::from_secs(2));

        assert_eq!(req.state(), IndexState::Close);
        assert_eq!(req.ack_timeout(), Duration::from_secs(1));
        assert_eq!(req.master_node_timeout(), Duration::from_secs(2));
        assert_eq!(
            req.envelope(),
            &UpdateEnvelope::default()
                .with_ack_timeout(Duration::from_secs(1))
                .with_master_node_timeout(Duration::from_secs(2))
        );

        let req = req.with_state(IndexState::Open);
        assert_eq!(req.state(), IndexState::Open);
    }

    #[test]
    fn test_accessors_are_live() {
        let req = request().with_mapping("doc", "{}");
        let before = req.mappings().len();

        let req = req.with_mapping("event", "{}");
        assert_eq!(before, 1);
        assert_eq!(req.mappings().len(), 2);

        // No copy is made: the accessor points into the request itself.
        let a: *const MappingMap = req.mappings();
        let b: *const MappingMap = req.mappings();
        assert_eq!(a, b);
    }

    #[test]
    fn test_into_parts() {
        let settings = Settings::builder().put("index.number_of_shards", 1).build();
        let req = request()
            .with_settings(settings.clone())
            .with_mapping("doc", "{}")
            .with_custom("c", IndexCustom::new(serde_json::Value::Null))
            .with_block(ClusterBlock::index_closed())
            .with_state(IndexState::Close);

        let parts = req.clone().into_parts();
        assert_eq!(parts.cause, "api");
        assert_eq!(parts.index, "logs-2024");
        assert_eq!(parts.state, IndexState::Close);
        assert_eq!(parts.settings, settings);
        assert_eq!(&parts.mappings, req.mappings());
        assert_eq!(&parts.customs, req.customs());
        assert_eq!(&parts.blocks, req.blocks());
        assert_eq!(&parts.envelope, req.envelope());
    }
}
