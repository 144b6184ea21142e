/*
 * Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

use crate::constants::{VertexId, INVALID_NODE, WEIGHT_INF, WEIGHT_ZERO};
use crate::distance_matrix::DistanceMatrix;
use crate::shortest_path::{PathResult, ShortestPath};
use crate::visited_flags::VisitedFlags;

/// Walks the next-hop table from source towards target, collecting the path.
/// Reusable across queries, use one PathReconstructor for each thread.
pub struct PathReconstructor {
    num_nodes: usize,
    visited: VisitedFlags,
}

impl PathReconstructor {
    pub fn new(num_nodes: usize) -> Self {
        PathReconstructor {
            num_nodes,
            visited: VisitedFlags::new(num_nodes),
        }
    }

    pub fn calc_path(
        &mut self,
        matrix: &DistanceMatrix,
        source: VertexId,
        target: VertexId,
    ) -> PathResult {
        assert_eq!(
            matrix.get_num_nodes(),
            self.num_nodes,
            "given matrix has invalid node count"
        );
        let start = matrix.id_of(source);
        let end = matrix.id_of(target);
        if start == end {
            // a negative self-distance means a negative cycle runs through
            // this vertex and the hop chain would never terminate
            return if matrix.weight(start, start) < WEIGHT_ZERO {
                PathResult::CycleDetected
            } else {
                PathResult::Found(ShortestPath::singular(source))
            };
        }
        let weight = matrix.weight(start, end);
        if weight == WEIGHT_INF {
            return PathResult::NoPath;
        }
        // the visited marks double as the step bound: the walk can take at
        // most num_nodes hops before it either arrives or revisits a vertex
        self.visited.reset_all();
        self.visited.set_visited(start);
        let mut nodes = vec![source];
        let mut node = start;
        while node != end {
            let hop = matrix.next(node, end);
            if hop == INVALID_NODE {
                panic!(
                    "next-hop chain from {} to {} is broken at {}",
                    source,
                    target,
                    matrix.label(node)
                );
            }
            if self.visited.is_visited(hop) {
                return PathResult::CycleDetected;
            }
            self.visited.set_visited(hop);
            nodes.push(matrix.label(hop));
            node = hop;
        }
        PathResult::Found(ShortestPath::new(source, target, weight, nodes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::Weight;
    use crate::floyd_warshall::FloydWarshall;
    use crate::input_graph::InputGraph;

    #[test]
    fn walks_shortest_path() {
        // 0 -> 1
        // |    |
        // 2 -> 3
        let mut g = InputGraph::new();
        g.add_edge(0, 1, 10.0);
        g.add_edge(0, 2, 1.0);
        g.add_edge(2, 3, 1.0);
        g.add_edge(3, 1, 1.0);
        g.freeze();
        let m = prepare(&g);
        assert_path(&m, 0, 1, 3.0, vec![0, 2, 3, 1]);
    }

    #[test]
    fn walks_detour_over_direct_edge() {
        let mut g = InputGraph::new();
        g.add_edge(0, 1, 1.0);
        g.add_edge(1, 2, 2.0);
        g.add_edge(0, 2, 10.0);
        g.freeze();
        let m = prepare(&g);
        assert_path(&m, 0, 2, 3.0, vec![0, 1, 2]);
    }

    #[test]
    fn no_path() {
        let mut g = InputGraph::new();
        g.add_edge(0, 1, 1.0);
        g.freeze();
        let m = prepare(&g);
        let mut r = PathReconstructor::new(m.get_num_nodes());
        assert_eq!(PathResult::NoPath, r.calc_path(&m, 1, 0));
    }

    #[test]
    fn singular_path() {
        let mut g = InputGraph::new();
        g.add_edge(0, 1, 1.0);
        g.freeze();
        let m = prepare(&g);
        assert_path(&m, 1, 1, 0.0, vec![1]);
    }

    #[test]
    fn negative_cycle_self_query() {
        let mut g = InputGraph::new();
        g.add_edge(0, 1, 1.0);
        g.add_edge(1, 0, -3.0);
        g.freeze();
        let m = prepare(&g);
        let mut r = PathReconstructor::new(m.get_num_nodes());
        assert_eq!(PathResult::CycleDetected, r.calc_path(&m, 0, 0));
        assert_eq!(PathResult::CycleDetected, r.calc_path(&m, 1, 1));
    }

    #[test]
    fn corrupted_next_hops_do_not_loop_forever() {
        // 0 -> 1 -> 2 -> 3, then the hop chain is bent back into a loop
        let mut g = InputGraph::new();
        g.add_edge(0, 1, 1.0);
        g.add_edge(1, 2, 1.0);
        g.add_edge(2, 3, 1.0);
        g.freeze();
        let mut m = prepare(&g);
        m.set_next(m.id_of(1), m.id_of(3), m.id_of(0));
        let mut r = PathReconstructor::new(m.get_num_nodes());
        assert_eq!(PathResult::CycleDetected, r.calc_path(&m, 0, 3));
    }

    #[test]
    #[should_panic]
    fn panic_on_matrix_size_mismatch() {
        let mut g = InputGraph::new();
        g.add_edge(0, 1, 1.0);
        g.freeze();
        let m = prepare(&g);
        let mut r = PathReconstructor::new(5);
        r.calc_path(&m, 0, 1);
    }

    fn prepare(g: &InputGraph) -> DistanceMatrix {
        let mut fw = FloydWarshall::new(g);
        fw.relax_all();
        fw.into_matrix()
    }

    fn assert_path(
        matrix: &DistanceMatrix,
        source: VertexId,
        target: VertexId,
        weight: Weight,
        nodes: Vec<VertexId>,
    ) {
        let mut r = PathReconstructor::new(matrix.get_num_nodes());
        match r.calc_path(matrix, source, target) {
            PathResult::Found(path) => {
                assert_eq!(source, path.get_source());
                assert_eq!(target, path.get_target());
                assert_eq!(weight, path.get_weight());
                assert_eq!(nodes, *path.get_nodes());
            }
            other => panic!(
                "expected a path from {} to {}, got {:?}",
                source, target, other
            ),
        }
    }
}
