use crate::request::RunRequest;

/// Formats run requests into short human-readable reports.
pub struct RequestSummary;

impl RequestSummary {
    /// Renders node/edge counts followed by one line per node.
    ///
    /// Nodes with a model assignment show it after an arrow; the first line is
    /// always the start node when one was found.
    pub fn format(request: &RunRequest) -> String {
        let mut result = String::new();
        result.push_str(&format!(
            "Run request: {} node(s), {} edge(s), {} agent model(s)\n",
            request.graph_nodes.len(),
            request.graph_edges.len(),
            request.agent_models.len()
        ));

        for node in &request.graph_nodes {
            match request.model_for(&node.id) {
                Some(model) => result.push_str(&format!(
                    "  - {} [{}] -> {} ({})\n",
                    node.id, node.node_type, model.model_name, model.model_provider
                )),
                None => result.push_str(&format!("  - {} [{}]\n", node.id, node.node_type)),
            }
        }

        if request.graph_nodes.is_empty() {
            result.push_str("  (nothing reachable)\n");
        }
        result
    }
}
