#![no_main]

use libfuzzer_sys::fuzz_target;
use nodeweave_core::Graph;

// Each 3-byte chunk is one operation: opcode, then two node IDs in 0..16.
fuzz_target!(|data: &[u8]| {
    let mut graph: Graph<u8, u8> = Graph::new();

    for chunk in data.chunks_exact(3) {
        let (a, b) = (chunk[1] % 16, chunk[2] % 16);
        match chunk[0] % 5 {
            0 => {
                graph.insert(a);
            }
            1 => {
                let _ = graph.add_edge(a, b);
            }
            2 => {
                graph.remove_edge_between(&a, &b);
            }
            3 => {
                graph.remove_node(&a);
            }
            _ => {
                graph.update(a, b);
            }
        }
        assert!(graph.adjacency_is_consistent());
    }
});
