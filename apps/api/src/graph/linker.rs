//! Graph Linker: derives the relationship graph from a flat list of discovered entities.
//!
//! Algorithm:
//! 1. Partition nodes by institution id (first-seen order). Nodes without one are orphans.
//! 2. Per group, the representative is the member with the highest ranking metric
//!    (absent metric ranks lowest, ties go to the earliest member).
//! 3. Representative → every other member: `supervises`.
//! 4. If `max_nodes >= 5` and at least two representatives have no members under them,
//!    two of those are redirected: each links to a random peer with `collaborates_with`
//!    instead of hanging off the root.
//! 5. Root → every other representative and every orphan: `interested_in`.
//!
//! Pure and infallible. Randomness comes only from the injected `Sampler`.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::graph::sampler::Sampler;
use crate::models::graph::{EdgeLabel, GraphData, GraphLink, GraphNode, NodeType};

/// Id of the synthetic node standing for the querying user.
pub const ROOT_NODE_ID: &str = "user-node";
/// Smallest node budget at which childless representatives get redirected.
pub const REWIRE_MIN_NODES: usize = 5;
/// How many childless representatives are redirected when eligible.
pub const REWIRE_COUNT: usize = 2;

/// Members sharing one institution id, in input order.
#[derive(Debug)]
pub struct InstitutionGroup<'a> {
    pub institution_id: &'a str,
    pub members: Vec<&'a GraphNode>,
}

#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub groups: Vec<InstitutionGroup<'a>>,
    pub orphans: Vec<&'a GraphNode>,
}

/// Splits `nodes` into institution groups (ordered by first appearance) and orphans.
pub fn partition_by_institution(nodes: &[GraphNode]) -> Partition<'_> {
    let mut partition = Partition::default();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for node in nodes {
        let Some(inst_id) = node.institution_id() else {
            partition.orphans.push(node);
            continue;
        };
        let slot = *index.entry(inst_id).or_insert_with(|| {
            partition.groups.push(InstitutionGroup {
                institution_id: inst_id,
                members: Vec::new(),
            });
            partition.groups.len() - 1
        });
        partition.groups[slot].members.push(node);
    }

    partition
}

/// Highest-ranked member; the earliest one wins ties. `None` only for an empty slice.
pub fn select_representative<'a>(members: &[&'a GraphNode]) -> Option<&'a GraphNode> {
    let mut best: Option<&'a GraphNode> = None;
    for &member in members {
        if best.map_or(true, |current| member.rank() > current.rank()) {
            best = Some(member);
        }
    }
    best
}

/// Builds the edge set for `nodes`. `max_nodes` is the run's node budget and only
/// gates the redirect pass.
pub fn build_links<S: Sampler>(
    nodes: &[GraphNode],
    max_nodes: usize,
    sampler: &mut S,
) -> Vec<GraphLink> {
    let partition = partition_by_institution(nodes);
    let mut links = Vec::new();

    // (representative, child count) in group order
    let mut representatives: Vec<(&GraphNode, usize)> = Vec::with_capacity(partition.groups.len());

    for group in &partition.groups {
        let Some(rep) = select_representative(&group.members) else {
            continue;
        };

        let mut children = 0;
        for member in &group.members {
            if member.id != rep.id {
                links.push(GraphLink::new(&rep.id, &member.id, EdgeLabel::Supervises));
                children += 1;
            }
        }
        trace!(
            institution = group.institution_id,
            representative = %rep.id,
            children,
            "Selected representative"
        );
        representatives.push((rep, children));
    }

    let childless: Vec<&GraphNode> = representatives
        .iter()
        .filter(|(_, children)| *children == 0)
        .map(|(rep, _)| *rep)
        .collect();

    let redirected: HashSet<&str> =
        if max_nodes >= REWIRE_MIN_NODES && childless.len() >= REWIRE_COUNT {
            sampler
                .choose_multiple(&childless, REWIRE_COUNT)
                .into_iter()
                .map(|rep| rep.id.as_str())
                .collect()
        } else {
            HashSet::new()
        };

    debug!(
        groups = partition.groups.len(),
        orphans = partition.orphans.len(),
        childless = childless.len(),
        redirected = redirected.len(),
        "Linking graph"
    );

    for (rep, _) in &representatives {
        if !redirected.contains(rep.id.as_str()) {
            links.push(GraphLink::new(ROOT_NODE_ID, &rep.id, EdgeLabel::InterestedIn));
            continue;
        }

        let candidates: Vec<&GraphNode> = nodes
            .iter()
            .filter(|n| n.id != rep.id && !redirected.contains(n.id.as_str()))
            .collect();

        match sampler.choose(&candidates) {
            Some(target) => {
                debug!(from = %rep.id, to = %target.id, "Redirected childless representative");
                links.push(GraphLink::new(&rep.id, &target.id, EdgeLabel::CollaboratesWith));
            }
            None => debug!(node = %rep.id, "No redirect target; node left detached"),
        }
    }

    for orphan in &partition.orphans {
        links.push(GraphLink::new(ROOT_NODE_ID, &orphan.id, EdgeLabel::InterestedIn));
    }

    links
}

/// The synthetic user node every graph hangs off.
pub fn create_root_node() -> GraphNode {
    GraphNode {
        description: "You - the researcher exploring this network".to_string(),
        ..GraphNode::new(ROOT_NODE_ID, "User", NodeType::User)
    }
}

/// Links `nodes` and appends the root node, producing a graph ready for the caller.
pub fn assemble_graph<S: Sampler>(
    mut nodes: Vec<GraphNode>,
    max_nodes: usize,
    sampler: &mut S,
) -> GraphData {
    let links = build_links(&nodes, max_nodes, sampler);
    nodes.push(create_root_node());
    GraphData { nodes, links }
}
