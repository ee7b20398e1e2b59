#![no_main]

use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;
use nodeweave_core::Graph;

// Byte pairs are edges over node IDs 0..32.
fuzz_target!(|data: &[u8]| {
    let mut graph: Graph<u8, u8> = Graph::new();
    for id in 0..32 {
        graph.insert(id);
    }
    for pair in data.chunks_exact(2) {
        let _ = graph.add_edge(pair[0] % 32, pair[1] % 32);
    }

    let sccs = graph.find_strongly_connected_components();
    let covered: usize = sccs.iter().map(HashSet::len).sum();
    assert_eq!(covered, graph.node_count());

    let condensed = graph.make_condensation_graph();
    assert!(condensed.is_acyclic());
    assert_eq!(condensed.node_count(), sccs.len());

    let essential = graph.find_essential_edges();
    let non_essential = graph.find_non_essential_edges();
    assert!(essential.is_disjoint(&non_essential));
    assert_eq!(essential.len() + non_essential.len(), graph.edge_count());

    let ancestors = graph.find_number_of_node_ancestors();
    assert_eq!(ancestors.len(), graph.node_count());
});
