//! Adjacency-list graph operand
//!
//! Text format, one entry per `;` or newline:
//!
//! ```text
//! A: B C; B: D; C: D E
//! D:
//! ```
//!
//! Neighbors keep their declared order and edges are directed as written.
//! A neighbor that never appears as a key still becomes a node (with no
//! outgoing edges), numbered in first-seen order.

use super::lexer::Lexer;
use super::parse::ParseError;
use rustc_hash::{FxHashMap, FxHashSet};

/// Directed graph with stable node numbering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<String>,
    index: FxHashMap<String, usize>,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of `name`, inserting it as a new node if unseen
    pub fn add_node(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(name.to_string());
        self.index.insert(name.to_string(), idx);
        self.adjacency.push(Vec::new());
        idx
    }

    pub fn add_edge(&mut self, from: usize, to: usize) {
        self.adjacency[from].push(to);
    }

    pub fn node_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn name(&self, idx: usize) -> &str {
        &self.nodes[idx]
    }

    /// Outgoing neighbors in declared order
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        &self.adjacency[idx]
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Parse adjacency-list text. Returns the graph and the first declared key,
/// which serves as the default start node.
pub fn parse_graph(raw: &str, max_nodes: usize) -> Result<(Graph, Option<String>), ParseError> {
    let mut graph = Graph::new();
    let mut declared: FxHashSet<String> = FxHashSet::default();
    let mut first_key = None;
    let mut offset = 0;
    let mut ordinal = 0;

    for segment in raw.split([';', '\n']) {
        let segment_offset = offset;
        offset += segment.chars().count() + 1;

        if segment.trim().is_empty() {
            continue;
        }
        ordinal += 1;

        let Some((key, rest)) = segment.split_once(':') else {
            return Err(ParseError::MalformedEntry {
                entry: segment.trim().to_string(),
                position: ordinal,
                expected: "node: neighbor neighbor ...",
            });
        };

        let key_tokens = Lexer::with_offset(key, segment_offset).tokenize();
        let [key_token] = key_tokens.as_slice() else {
            return Err(ParseError::MalformedEntry {
                entry: segment.trim().to_string(),
                position: ordinal,
                expected: "exactly one node name before ':'",
            });
        };

        if !declared.insert(key_token.text.clone()) {
            return Err(ParseError::DuplicateNode {
                node: key_token.text.clone(),
                position: ordinal,
            });
        }
        if first_key.is_none() {
            first_key = Some(key_token.text.clone());
        }

        let from = graph.add_node(&key_token.text);
        let rest_offset = segment_offset + key.chars().count() + 1;
        for token in Lexer::with_offset(rest, rest_offset).tokenize() {
            let to = graph.add_node(&token.text);
            graph.add_edge(from, to);
        }

        if graph.len() > max_nodes {
            return Err(ParseError::TooManyValues {
                count: graph.len(),
                limit: max_nodes,
            });
        }
    }

    Ok((graph, first_key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_adjacency() {
        let (graph, first) = parse_graph("A: B C; B: D\nC: D E; D:", 64).unwrap();
        assert_eq!(first.as_deref(), Some("A"));
        assert_eq!(graph.nodes(), &["A", "B", "C", "D", "E"]);
        let a = graph.node_index("A").unwrap();
        let names: Vec<&str> = graph.neighbors(a).iter().map(|&n| graph.name(n)).collect();
        assert_eq!(names, vec!["B", "C"]);
        assert!(graph.neighbors(graph.node_index("E").unwrap()).is_empty());
    }

    #[test]
    fn test_neighbors_accept_commas() {
        let (graph, _) = parse_graph("1: 2, 3 ,4", 64).unwrap();
        assert_eq!(graph.neighbors(0), &[1, 2, 3]);
    }

    #[test]
    fn test_empty_graph_is_valid() {
        let (graph, first) = parse_graph("  \n ; ", 64).unwrap();
        assert!(graph.is_empty());
        assert!(first.is_none());
    }

    #[test]
    fn test_entry_without_colon_is_rejected() {
        let err = parse_graph("A: B; C D", 64).unwrap_err();
        assert!(matches!(err, ParseError::MalformedEntry { position: 2, .. }));
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let err = parse_graph("A: B; A: C", 64).unwrap_err();
        assert!(matches!(err, ParseError::DuplicateNode { ref node, .. } if node == "A"));
    }

    #[test]
    fn test_node_limit() {
        let err = parse_graph("A: B C D", 3).unwrap_err();
        assert!(matches!(err, ParseError::TooManyValues { count: 4, limit: 3 }));
    }
}
