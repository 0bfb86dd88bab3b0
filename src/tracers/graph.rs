//! Graph traversal tracers
//!
//! Single-source only: nodes unreachable from the start are never visited
//! and the traversal never restarts in another component. Both frontiers are
//! explicit owned collections, so trace depth is independent of the call
//! stack.

use super::recorder::TraceRecorder;
use crate::parser::Graph;
use crate::snapshot::{
    Auxiliary, GraphView, Highlight, NodeState, Outcome, StepKind, Structure, Trace,
};
use std::collections::VecDeque;

fn view(graph: &Graph, states: &[NodeState]) -> Structure {
    Structure::Graph(GraphView {
        nodes: graph.nodes().to_vec(),
        adjacency: graph.adjacency().to_vec(),
        states: states.to_vec(),
    })
}

fn names<'a>(graph: &Graph, nodes: impl IntoIterator<Item = &'a usize>) -> Vec<String> {
    nodes
        .into_iter()
        .map(|&n| graph.name(n).to_string())
        .collect()
}

fn edge_count(graph: &Graph) -> usize {
    graph.adjacency().iter().map(Vec::len).sum()
}

fn missing_start(
    rec: TraceRecorder,
    graph: &Graph,
    states: &[NodeState],
    start: &str,
) -> Trace {
    let narration = if graph.is_empty() {
        "The graph is empty; nothing to traverse".to_string()
    } else {
        format!("Start node '{}' is not in the graph; nothing to traverse", start)
    };
    rec.finish(
        Outcome::Traversed { order: vec![] },
        view(graph, states),
        vec![],
        narration,
    )
}

fn finish_traversal(
    rec: TraceRecorder,
    graph: &Graph,
    states: &[NodeState],
    order: &[usize],
) -> Trace {
    let visited = names(graph, order);
    let narration = format!(
        "Traversal complete: visited {} of {} nodes ({})",
        visited.len(),
        graph.len(),
        visited.join(" → ")
    );
    rec.finish(
        Outcome::Traversed { order: visited },
        view(graph, states),
        order.iter().copied().map(Highlight::Node).collect(),
        narration,
    )
}

/// Breadth-first traversal with a FIFO frontier
pub fn breadth_first(graph: &Graph, start: &str) -> Trace {
    let mut rec = TraceRecorder::new("bfs", 3 * graph.len() + 2);
    let mut states = vec![NodeState::Undiscovered; graph.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let frontier = |queue: &VecDeque<usize>| Auxiliary::Queue {
        nodes: names(graph, queue),
    };

    rec.record(
        StepKind::Start,
        view(graph, &states),
        vec![],
        Some(frontier(&queue)),
        format!("Breadth-first search from '{}'", start),
    );
    let Some(source) = graph.node_index(start) else {
        return missing_start(rec, graph, &states, start);
    };

    states[source] = NodeState::Frontier;
    queue.push_back(source);
    rec.record(
        StepKind::Enqueue { node: source },
        view(graph, &states),
        vec![Highlight::Node(source)],
        Some(frontier(&queue)),
        format!("Enqueue start node {}", start),
    );

    let mut order = Vec::with_capacity(graph.len());
    while let Some(node) = queue.pop_front() {
        let name = graph.name(node);
        rec.record(
            StepKind::Dequeue { node },
            view(graph, &states),
            vec![Highlight::Node(node)],
            Some(frontier(&queue)),
            format!("Dequeue {}", name),
        );

        states[node] = NodeState::Visited;
        order.push(node);
        rec.record(
            StepKind::Visit { node },
            view(graph, &states),
            vec![Highlight::Node(node)],
            Some(frontier(&queue)),
            format!("Visit {}", name),
        );

        for &next in graph.neighbors(node) {
            if states[next] != NodeState::Undiscovered {
                continue;
            }
            states[next] = NodeState::Frontier;
            queue.push_back(next);
            rec.record(
                StepKind::Enqueue { node: next },
                view(graph, &states),
                vec![Highlight::Node(node), Highlight::Node(next)],
                Some(frontier(&queue)),
                format!("Discover {} from {}; enqueue it", graph.name(next), name),
            );
        }
    }

    finish_traversal(rec, graph, &states, &order)
}

/// Iterative depth-first traversal with a LIFO frontier.
///
/// Neighbors are pushed in reverse declared order and a node is visited when
/// popped for the first time, which reproduces the visit order of the
/// recursive formulation.
pub fn depth_first(graph: &Graph, start: &str) -> Trace {
    let capacity = 2 * (edge_count(graph) + 1) + graph.len() + 2;
    let mut rec = TraceRecorder::new("dfs", capacity);
    let mut states = vec![NodeState::Undiscovered; graph.len()];
    let mut stack: Vec<usize> = Vec::new();
    let frontier = |stack: &[usize]| Auxiliary::Stack {
        nodes: names(graph, stack),
    };

    rec.record(
        StepKind::Start,
        view(graph, &states),
        vec![],
        Some(frontier(&stack[..])),
        format!("Depth-first search from '{}'", start),
    );
    let Some(source) = graph.node_index(start) else {
        return missing_start(rec, graph, &states, start);
    };

    states[source] = NodeState::Frontier;
    stack.push(source);
    rec.record(
        StepKind::Push { node: source },
        view(graph, &states),
        vec![Highlight::Node(source)],
        Some(frontier(&stack[..])),
        format!("Push start node {}", start),
    );

    let mut order = Vec::with_capacity(graph.len());
    while let Some(node) = stack.pop() {
        let name = graph.name(node);
        let seen = states[node] == NodeState::Visited;
        rec.record(
            StepKind::Pop { node },
            view(graph, &states),
            vec![Highlight::Node(node)],
            Some(frontier(&stack[..])),
            if seen {
                format!("Pop {}: already visited, skip", name)
            } else {
                format!("Pop {}", name)
            },
        );
        if seen {
            continue;
        }

        states[node] = NodeState::Visited;
        order.push(node);
        rec.record(
            StepKind::Visit { node },
            view(graph, &states),
            vec![Highlight::Node(node)],
            Some(frontier(&stack[..])),
            format!("Visit {}", name),
        );

        for &next in graph.neighbors(node).iter().rev() {
            if states[next] == NodeState::Visited {
                continue;
            }
            states[next] = NodeState::Frontier;
            stack.push(next);
            rec.record(
                StepKind::Push { node: next },
                view(graph, &states),
                vec![Highlight::Node(node), Highlight::Node(next)],
                Some(frontier(&stack[..])),
                format!("Push {} (neighbor of {})", graph.name(next), name),
            );
        }
    }

    finish_traversal(rec, graph, &states, &order)
}
