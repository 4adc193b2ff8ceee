//! Shared test utilities for `weft-core`.
//!
//! Hosts the proptest configuration every suite uses and a seeded random
//! graph generator covering the topologies that stress the shortest-path and
//! spanning-tree engines.

use proptest::{
    prelude::{Strategy, any},
    test_runner::Config as ProptestConfig,
};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use test_strategy::Arbitrary;
use weft_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::graph::{Graph, Weight};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// Keeps property suites aligned on the same `PROGTEST_CASES` and
/// `WEFT_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

const MIN_NODES: usize = 2;
const MAX_NODES: usize = 40;
const DENSE_MAX_NODES: usize = 16;
const MAX_WEIGHT: Weight = 50;

/// Topology and weight pattern of a generated graph.
///
/// Sampling leans towards tie-heavy and multigraph inputs, where the two
/// shortest-path variants and the two spanning-tree constructions diverge
/// first when broken.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(crate) enum GraphShape {
    /// Random spanning path plus a handful of chords.
    #[weight(2)]
    Sparse,
    /// Most node pairs joined.
    #[weight(2)]
    Dense,
    /// Weights drawn from a pool of one to three values, so ties abound.
    #[weight(3)]
    ManyIdentical,
    /// Several components with no edges between them, plus isolated nodes.
    #[weight(2)]
    Disconnected,
    /// Parallel edges, zero weights and self-loops.
    #[weight(3)]
    Multigraph,
}

/// Generated graph together with the parameters that produced it.
#[derive(Clone, Debug)]
pub(crate) struct GraphFixture {
    pub graph: Graph,
    pub shape: GraphShape,
    pub seed: u64,
}

/// Strategy producing fixtures across every [`GraphShape`].
pub(crate) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| generate_fixture(shape, seed))
}

/// Generates the fixture for `shape` deterministically from `seed`.
pub(crate) fn generate_fixture(shape: GraphShape, seed: u64) -> GraphFixture {
    let mut rng = SmallRng::seed_from_u64(seed);
    let graph = match shape {
        GraphShape::Sparse => generate_sparse(&mut rng),
        GraphShape::Dense => generate_pairs(&mut rng, DENSE_MAX_NODES, 0.7, |r| {
            r.gen_range(1..=MAX_WEIGHT)
        }),
        GraphShape::ManyIdentical => {
            let pool: Vec<Weight> = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(1..=5))
                .collect();
            generate_pairs(&mut rng, MAX_NODES, 0.3, move |r| {
                pool.get(r.gen_range(0..pool.len())).copied().unwrap_or(1)
            })
        }
        GraphShape::Disconnected => generate_disconnected(&mut rng),
        GraphShape::Multigraph => generate_multigraph(&mut rng),
    };
    GraphFixture { graph, shape, seed }
}

/// Label for the node at `index`; zero padding keeps label order numeric.
pub(crate) fn label(index: usize) -> String {
    format!("n{index:03}")
}

fn with_nodes(count: usize) -> Graph {
    let mut graph = Graph::new();
    for index in 0..count {
        graph.add_node(&label(index));
    }
    graph
}

fn join(graph: &mut Graph, left: usize, right: usize, weight: Weight) {
    graph.connect(&label(left), &label(right), weight);
}

fn generate_pairs(
    rng: &mut SmallRng,
    max_nodes: usize,
    probability: f64,
    mut weight: impl FnMut(&mut SmallRng) -> Weight,
) -> Graph {
    let count = rng.gen_range(MIN_NODES..=max_nodes);
    let mut graph = with_nodes(count);
    for left in 0..count {
        for right in (left + 1)..count {
            if rng.gen_bool(probability) {
                let chosen = weight(rng);
                join(&mut graph, left, right, chosen);
            }
        }
    }
    graph
}

fn generate_sparse(rng: &mut SmallRng) -> Graph {
    let count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut graph = with_nodes(count);
    let mut order: Vec<usize> = (0..count).collect();
    shuffle(&mut order, rng);
    for pair in order.windows(2) {
        if let [left, right] = *pair {
            join(&mut graph, left, right, rng.gen_range(1..=MAX_WEIGHT));
        }
    }
    for _ in 0..rng.gen_range(0..=count) {
        let left = rng.gen_range(0..count);
        let right = rng.gen_range(0..count);
        if left != right {
            join(&mut graph, left, right, rng.gen_range(1..=MAX_WEIGHT));
        }
    }
    graph
}

fn generate_disconnected(rng: &mut SmallRng) -> Graph {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=4))
        .map(|_| rng.gen_range(1..=8))
        .collect();
    let isolated = rng.gen_range(0..=2);
    let count = sizes.iter().sum::<usize>() + isolated;
    let mut graph = with_nodes(count);
    let mut offset = 0;
    for size in sizes {
        for member in 1..size {
            let anchor = offset + rng.gen_range(0..member);
            join(&mut graph, anchor, offset + member, rng.gen_range(1..=MAX_WEIGHT));
        }
        for _ in 0..size {
            let left = offset + rng.gen_range(0..size);
            let right = offset + rng.gen_range(0..size);
            if left != right {
                join(&mut graph, left, right, rng.gen_range(1..=MAX_WEIGHT));
            }
        }
        offset += size;
    }
    graph
}

fn generate_multigraph(rng: &mut SmallRng) -> Graph {
    let count = rng.gen_range(MIN_NODES..=DENSE_MAX_NODES);
    let mut graph = with_nodes(count);
    for _ in 0..rng.gen_range(count..=count * 3) {
        let left = rng.gen_range(0..count);
        let right = if rng.gen_bool(0.1) {
            left
        } else {
            rng.gen_range(0..count)
        };
        let weight = rng.gen_range(0..=10);
        join(&mut graph, left, right, weight);
        if rng.gen_bool(0.3) {
            let copy = if rng.gen_bool(0.5) { weight } else { rng.gen_range(0..=10) };
            join(&mut graph, right, left, copy);
        }
    }
    graph
}

/// Fisher-Yates shuffle.
fn shuffle(items: &mut [usize], rng: &mut SmallRng) {
    for upper in (1..items.len()).rev() {
        items.swap(upper, rng.gen_range(0..=upper));
    }
}
