//! Mock graph generator used when no discovery pipeline is wired in.
//!
//! Produces four canonical nodes (professor, laboratory, paper, institution) joined by
//! three seed edges, then pads up to `max_nodes` with synthesized nodes. Every padded
//! node gets exactly one incoming edge from an earlier node, so the graph stays connected.

use tracing::debug;

use crate::graph::sampler::Sampler;
use crate::models::graph::{EdgeLabel, GraphData, GraphLink, GraphNode, HierarchyEntry, NodeType};

/// Number of fixed nodes at the start of every mock graph.
pub const CANONICAL_NODE_COUNT: usize = 4;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn member(full_name: &str, role: &str, contact: &str) -> HierarchyEntry {
    HierarchyEntry {
        full_name: full_name.to_string(),
        role: role.to_string(),
        contact: contact.to_string(),
    }
}

fn canonical_nodes() -> Vec<GraphNode> {
    vec![
        GraphNode {
            description: "Professor of Machine Learning and Computer Vision at MIT".to_string(),
            sources: strings(&[
                "https://example.com/jane-smith-profile",
                "https://scholar.google.com/citations?user=example",
            ]),
            contacts: strings(&["jsmith@mit.edu", "https://janesmith.ai"]),
            ..GraphNode::new("prof-1", "Dr. Jane Smith", NodeType::Professor)
        },
        GraphNode {
            description: "Leading laboratory in artificial intelligence and deep learning research"
                .to_string(),
            sources: strings(&[
                "https://example.com/ai-lab",
                "https://ailab.mit.edu/publications",
            ]),
            contacts: strings(&["contact@ailab.mit.edu", "https://ailab.mit.edu"]),
            hierarchy: Some(vec![
                member("Dr. Jane Smith", "Lab Director", "jsmith@mit.edu"),
                member(
                    "Dr. John Doe",
                    "Senior Researcher",
                    "https://linkedin.com/in/johndoe",
                ),
                member("Alice Johnson", "PhD Student", "alice@mit.edu"),
            ]),
            ..GraphNode::new("lab-1", "AI Research Lab", NodeType::Laboratory)
        },
        GraphNode {
            description:
                "A comprehensive study on modern neural network designs and their applications"
                    .to_string(),
            sources: strings(&[
                "https://arxiv.org/abs/1234.5678",
                "https://paperswithcode.com/paper/example",
            ]),
            ..GraphNode::new(
                "paper-1",
                "Advances in Neural Network Architectures",
                NodeType::Paper,
            )
        },
        GraphNode {
            description: "Private research university in Cambridge, Massachusetts".to_string(),
            sources: strings(&["https://mit.edu", "https://csail.mit.edu"]),
            contacts: strings(&["https://mit.edu/contact"]),
            ..GraphNode::new(
                "inst-1",
                "Massachusetts Institute of Technology",
                NodeType::Institution,
            )
        },
    ]
}

fn seed_links() -> Vec<GraphLink> {
    vec![
        GraphLink::new("prof-1", "lab-1", EdgeLabel::WorksAt),
        GraphLink::new("prof-1", "paper-1", EdgeLabel::Authored),
        GraphLink::new("lab-1", "inst-1", EdgeLabel::PartOf),
    ]
}

/// Builds the padded node at position `index`, named after its index and type.
fn synthesize_node(index: usize, node_type: NodeType) -> GraphNode {
    let kind = node_type.as_str();
    let mut node = GraphNode {
        description: format!("Description of {kind} number {index}"),
        sources: vec![format!("https://example.com/{kind}-{index}")],
        contacts: vec![format!("contact{index}@example.com")],
        ..GraphNode::new(
            format!("{kind}-{index}"),
            format!("Mock {} {index}", node_type.title()),
            node_type,
        )
    };

    if node_type == NodeType::Laboratory {
        node.hierarchy = Some(vec![
            member(
                &format!("Dr. Leader {index}"),
                "Lab Director",
                &format!("leader{index}@example.com"),
            ),
            member(
                &format!("Researcher {index}"),
                "Senior Researcher",
                &format!("researcher{index}@example.com"),
            ),
        ]);
    }

    node
}

/// Generates a mock graph of `max(4, max_nodes)` nodes.
pub fn generate_mock_graph<S: Sampler>(max_nodes: usize, sampler: &mut S) -> GraphData {
    let mut nodes = canonical_nodes();

    for index in CANONICAL_NODE_COUNT..max_nodes {
        let node_type = sampler
            .choose(&NodeType::SYNTHESIZABLE)
            .copied()
            .unwrap_or(NodeType::Professor);
        nodes.push(synthesize_node(index, node_type));
    }

    let mut links = seed_links();

    for index in CANONICAL_NODE_COUNT..nodes.len() {
        let source = sampler.choose(&nodes[..index]).map(|n| n.id.clone());
        let label = sampler
            .choose(&EdgeLabel::SYNTHETIC)
            .copied()
            .unwrap_or(EdgeLabel::CollaboratesWith);
        if let Some(source) = source {
            links.push(GraphLink::new(source, nodes[index].id.clone(), label));
        }
    }

    debug!(nodes = nodes.len(), links = links.len(), "Synthesized mock graph");

    GraphData { nodes, links }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::graph::sampler::testing::ScriptedSampler;
    use crate::graph::sampler::RngSampler;

    #[test]
    fn test_four_nodes_yields_canonical_graph() {
        let mut sampler = ScriptedSampler::default();
        let graph = generate_mock_graph(4, &mut sampler);

        let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["prof-1", "lab-1", "paper-1", "inst-1"]);
        assert_eq!(graph.links, seed_links());
        assert_eq!(sampler.choice_calls, 0);
    }

    #[test]
    fn test_budget_below_four_still_canonical() {
        let graph = generate_mock_graph(1, &mut RngSampler::seeded(5));
        assert_eq!(graph.nodes.len(), 4);
        assert_eq!(graph.links.len(), 3);
    }

    #[test]
    fn test_canonical_lab_has_three_member_hierarchy() {
        let graph = generate_mock_graph(4, &mut ScriptedSampler::default());
        let lab = &graph.nodes[1];
        assert_eq!(lab.node_type, NodeType::Laboratory);
        assert_eq!(lab.hierarchy.as_ref().map(Vec::len), Some(3));
        assert!(graph
            .nodes
            .iter()
            .filter(|n| n.node_type != NodeType::Laboratory)
            .all(|n| n.hierarchy.is_none()));
    }

    #[test]
    fn test_scripted_draws_produce_exact_nodes() {
        // node 4: laboratory (idx 1); node 5: paper (idx 2)
        // edge into 4: source idx 3 (inst-1), label idx 1 (cites)
        // edge into 5: source idx 4 (laboratory-4), label idx 2 (affiliated_with)
        let mut sampler = ScriptedSampler::new(vec![], vec![1, 2, 3, 1, 4, 2]);
        let graph = generate_mock_graph(6, &mut sampler);

        assert_eq!(graph.nodes[4].id, "laboratory-4");
        assert_eq!(graph.nodes[4].name, "Mock Laboratory 4");
        assert_eq!(graph.nodes[4].hierarchy.as_ref().map(Vec::len), Some(2));
        assert_eq!(graph.nodes[5].id, "paper-5");
        assert!(graph.nodes[5].hierarchy.is_none());
        assert_eq!(
            &graph.links[3..],
            &[
                GraphLink::new("inst-1", "laboratory-4", EdgeLabel::Cites),
                GraphLink::new("laboratory-4", "paper-5", EdgeLabel::AffiliatedWith),
            ]
        );
    }

    #[test]
    fn test_every_padded_node_has_earlier_parent() {
        for seed in 0..50 {
            let graph = generate_mock_graph(25, &mut RngSampler::seeded(seed));
            assert_eq!(graph.nodes.len(), 25);
            assert_eq!(graph.links.len(), 3 + 21);

            let ids: HashSet<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
            assert_eq!(ids.len(), 25, "duplicate ids, seed {seed}");

            for (index, node) in graph.nodes.iter().enumerate().skip(CANONICAL_NODE_COUNT) {
                let incoming: Vec<_> = graph.links.iter().filter(|l| l.target == node.id).collect();
                assert_eq!(incoming.len(), 1, "seed {seed}");
                let source_pos = graph
                    .nodes
                    .iter()
                    .position(|n| n.id == incoming[0].source)
                    .unwrap();
                assert!(source_pos < index);
                assert!(EdgeLabel::SYNTHETIC.contains(&incoming[0].label));
                assert_ne!(node.node_type, NodeType::User);
            }
        }
    }
}
