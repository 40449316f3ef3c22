use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Professor,
    Laboratory,
    Paper,
    Institution,
    User,
}

impl NodeType {
    /// Types the synthesizer may pick for generated nodes.
    pub const SYNTHESIZABLE: [NodeType; 4] = [
        NodeType::Professor,
        NodeType::Laboratory,
        NodeType::Paper,
        NodeType::Institution,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Professor => "professor",
            NodeType::Laboratory => "laboratory",
            NodeType::Paper => "paper",
            NodeType::Institution => "institution",
            NodeType::User => "user",
        }
    }

    /// Title-cased label used in generated display names ("Laboratory").
    pub fn title(&self) -> &'static str {
        match self {
            NodeType::Professor => "Professor",
            NodeType::Laboratory => "Laboratory",
            NodeType::Paper => "Paper",
            NodeType::Institution => "Institution",
            NodeType::User => "User",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstitutionRef {
    pub id: String,
    pub name: String,
}

/// One member of a laboratory's staff listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyEntry {
    pub full_name: String,
    pub role: String,
    pub contact: String,
}

/// An entity in the discovery graph (professor, lab, paper, institution, or the user).
///
/// The linker only reads `id`, `institution` and `ranking_metric`; every other
/// field is echoed back to the caller untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub contacts: Vec<String>,
    #[serde(default)]
    pub institution: Option<InstitutionRef>,
    #[serde(default, alias = "h_index")]
    pub ranking_metric: Option<f64>,
    #[serde(default)]
    pub hierarchy: Option<Vec<HierarchyEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub works_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cited_by_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_orcid: Option<String>,
}

impl GraphNode {
    /// A bare node with empty descriptive fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type,
            description: String::new(),
            sources: vec![],
            contacts: vec![],
            institution: None,
            ranking_metric: None,
            hierarchy: None,
            works_count: None,
            cited_by_count: None,
            link_orcid: None,
        }
    }

    /// Institution id used for grouping. Missing or empty ids make the node an orphan.
    pub fn institution_id(&self) -> Option<&str> {
        self.institution
            .as_ref()
            .map(|i| i.id.as_str())
            .filter(|id| !id.is_empty())
    }

    /// Ranking value for representative selection. Absent and NaN rank lowest.
    pub fn rank(&self) -> f64 {
        self.ranking_metric
            .filter(|m| !m.is_nan())
            .unwrap_or(f64::NEG_INFINITY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeLabel {
    Supervises,
    InterestedIn,
    CollaboratesWith,
    WorksAt,
    Authored,
    PartOf,
    Cites,
    AffiliatedWith,
}

impl EdgeLabel {
    /// Labels drawn for edges into synthesized nodes.
    pub const SYNTHETIC: [EdgeLabel; 4] = [
        EdgeLabel::CollaboratesWith,
        EdgeLabel::Cites,
        EdgeLabel::AffiliatedWith,
        EdgeLabel::WorksAt,
    ];
}

/// A directed, labelled edge between two node ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub label: EdgeLabel,
}

impl GraphLink {
    pub fn new(source: impl Into<String>, target: impl Into<String>, label: EdgeLabel) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_accepts_h_index_alias() {
        let node: GraphNode = serde_json::from_value(json!({
            "id": "prof-7",
            "name": "Dr. Ada",
            "type": "professor",
            "h_index": 42,
            "institution": {"id": "inst-1", "name": "ETH"}
        }))
        .unwrap();

        assert_eq!(node.ranking_metric, Some(42.0));
        assert_eq!(node.institution_id(), Some("inst-1"));
        assert!(node.sources.is_empty());
    }

    #[test]
    fn test_empty_institution_id_is_orphan() {
        let mut node = GraphNode::new("p", "P", NodeType::Professor);
        node.institution = Some(InstitutionRef {
            id: String::new(),
            name: "Nowhere".to_string(),
        });
        assert_eq!(node.institution_id(), None);
    }

    #[test]
    fn test_nan_metric_ranks_like_absent() {
        let mut node = GraphNode::new("p", "P", NodeType::Professor);
        node.ranking_metric = Some(f64::NAN);
        assert_eq!(node.rank(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_link_serializes_snake_case_label() {
        let link = GraphLink::new("user-node", "prof-1", EdgeLabel::InterestedIn);
        let value = serde_json::to_value(&link).unwrap();
        assert_eq!(
            value,
            json!({"source": "user-node", "target": "prof-1", "label": "interested_in"})
        );
    }

    #[test]
    fn test_optional_bibliometrics_omitted_when_absent() {
        let node = GraphNode::new("paper-1", "Paper", NodeType::Paper);
        let value = serde_json::to_value(&node).unwrap();
        assert!(value.get("works_count").is_none());
        assert_eq!(value["type"], "paper");
        assert!(value["institution"].is_null());
    }
}
