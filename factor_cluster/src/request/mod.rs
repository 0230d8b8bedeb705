mod envelope;
pub use envelope::{
    ClusterStateUpdateRequest, UpdateEnvelope, DEFAULT_ACK_TIMEOUT, DEFAULT_MASTER_NODE_TIMEOUT,
};

mod create_index;
pub use create_index::{CreateIndexParts, CreateIndexRequest};
