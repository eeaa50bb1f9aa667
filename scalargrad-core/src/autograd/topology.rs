use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use std::collections::HashSet;

/// Builds the topological order of every node reachable from `terminal`.
///
/// This is a post-order depth-first traversal: each operand (left before right)
/// is emitted before the node that consumes it, so leaves come first and
/// `terminal` comes last. The visited set is keyed by [`NodeId`], so a node
/// shared by several consumers (fan-out, diamonds) is emitted exactly once.
///
/// The traversal keeps an explicit stack instead of recursing, so long chains
/// (e.g. a loss summed over many samples) cannot overflow the call stack. The
/// resulting order is the same as the recursive formulation.
pub fn topological_sort(graph: &Graph, terminal: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
    graph.check(terminal)?;

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<NodeId> = Vec::new();
    // (node, operands already scheduled)
    let mut stack: Vec<(NodeId, bool)> = vec![(terminal, false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node) {
            continue;
        }
        stack.push((node, true));
        let operands = graph.operands(node)?;
        // Reversed so the left operand is popped, and fully explored, first.
        for &operand in operands.iter().rev() {
            if !visited.contains(&operand) {
                stack.push((operand, false));
            }
        }
    }

    log::trace!(
        "topological_sort: {} reachable nodes from terminal {}",
        sorted_list.len(),
        terminal
    );
    Ok(sorted_list)
}

#[cfg(test)]
#[path = "topology_test.rs"]
mod tests;
