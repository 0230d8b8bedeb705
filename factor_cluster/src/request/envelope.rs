use std::time::Duration;

pub const DEFAULT_ACK_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MASTER_NODE_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings shared by all cluster state update requests.
///
/// The timeouts are only carried here. Enforcing them is up to the
/// coordinator that applies the update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpdateEnvelope {
    /// How long to wait for all nodes to acknowledge the new cluster state.
    pub ack_timeout: Duration,
    /// How long to wait for a connection to the elected master node.
    pub master_node_timeout: Duration,
}

impl Default for UpdateEnvelope {
    fn default() -> Self {
        Self {
            ack_timeout: DEFAULT_ACK_TIMEOUT,
            master_node_timeout: DEFAULT_MASTER_NODE_TIMEOUT,
        }
    }
}

impl UpdateEnvelope {
    pub fn with_ack_timeout(mut self, timeout: Duration) -> Self {
        self.ack_timeout = timeout;
        self
    }

    pub fn with_master_node_timeout(mut self, timeout: Duration) -> Self {
        self.master_node_timeout = timeout;
        self
    }
}

/// A request to change the cluster state.
pub trait ClusterStateUpdateRequest {
    fn envelope(&self) -> &UpdateEnvelope;

    fn ack_timeout(&self) -> Duration {
        self.envelope().ack_timeout
    }

    fn master_node_timeout(&self) -> Duration {
        self.envelope().master_node_timeout
    }
}

impl ClusterStateUpdateRequest for UpdateEnvelope {
    fn envelope(&self) -> &UpdateEnvelope {
        self
    }
}
