#![allow(dead_code)]

use nodeweave_core::Graph;

#[derive(Clone, Copy, Debug)]
pub struct BenchmarkTier {
    pub name: &'static str,
    pub node_count: u32,
    pub edges_per_node: u32,
}

pub const TIER_S: BenchmarkTier = BenchmarkTier {
    name: "S",
    node_count: 1_000,
    edges_per_node: 3,
};

pub const TIER_M: BenchmarkTier = BenchmarkTier {
    name: "M",
    node_count: 10_000,
    edges_per_node: 3,
};

pub const TIER_L: BenchmarkTier = BenchmarkTier {
    name: "L",
    node_count: 50_000,
    edges_per_node: 4,
};

pub const TIERS: [BenchmarkTier; 3] = [TIER_S, TIER_M, TIER_L];

struct Prng(u64);

impl Prng {
    const fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // 64-bit LCG constants from Numerical Recipes.
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0
    }

    fn next_below(&mut self, upper_exclusive: u32) -> u32 {
        if upper_exclusive == 0 {
            return 0;
        }
        (self.next_u64() >> 33) as u32 % upper_exclusive
    }

    fn chance(&mut self, numerator: u64, denominator: u64) -> bool {
        debug_assert!(numerator <= denominator);
        self.next_u64() % denominator < numerator
    }
}

/// Random DAG: every edge points from a lower to a higher ID, mostly to
/// nearby nodes so that long chains and many shortcuts appear.
pub fn generate_dag(tier: BenchmarkTier, seed: u64) -> Graph<u32, u32> {
    let mut prng = Prng::new(seed);
    let n = tier.node_count;
    let mut edges = Vec::with_capacity((n * tier.edges_per_node) as usize);

    for origin in 0..n.saturating_sub(1) {
        for _ in 0..tier.edges_per_node {
            let span = (n - origin - 1).min(64);
            let destination = origin + 1 + prng.next_below(span);
            edges.push((origin, destination));
        }
    }

    Graph::from_values(0..n, edges)
}

/// Random DAG plus a few back edges, producing SCCs of assorted sizes.
pub fn generate_cyclic(tier: BenchmarkTier, seed: u64) -> Graph<u32, u32> {
    let mut graph = generate_dag(tier, seed);
    let mut prng = Prng::new(seed ^ 0x5EED);

    for destination in 1..tier.node_count {
        if prng.chance(1, 20) {
            let origin = destination + prng.next_below((tier.node_count - destination).min(16));
            let _ = graph.add_edge(origin, destination.saturating_sub(1));
        }
    }

    graph
}
