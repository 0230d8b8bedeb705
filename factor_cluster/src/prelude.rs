pub use crate::{
    data::{
        ClusterBlock, ClusterBlockLevel, IndexCustom, IndexState, Settings, SettingsBuilder,
    },
    error::{ConstructionError, RequiredField},
    request::{
        ClusterStateUpdateRequest, CreateIndexParts, CreateIndexRequest, UpdateEnvelope,
    },
};
