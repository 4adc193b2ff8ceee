//! Property-based tests for the Kruskal spanning forest.
//!
//! Compares the incremental union-find construction against an independent
//! oracle that adds each edge tentatively and undoes it when the graph
//! becomes cyclic, then checks the structural invariants of the forest.

mod equivalence;
mod oracle;
mod structural;
