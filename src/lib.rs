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

#[macro_use]
extern crate log;

pub use crate::constants::*;
pub use crate::distance_matrix::DistanceMatrix;
pub use crate::floyd_warshall::FloydWarshall;
pub use crate::input_graph::Edge;
pub use crate::input_graph::InputGraph;
pub use crate::path_reconstructor::PathReconstructor;
pub use crate::shortest_path::PathResult;
pub use crate::shortest_path::ShortestPath;
pub use crate::vertex_arena::VertexArena;

mod constants;
mod distance_matrix;
mod floyd_warshall;
mod input_graph;
mod path_reconstructor;
mod shortest_path;
mod vertex_arena;
mod visited_flags;

/// Computes all-pairs shortest distances for the given `InputGraph` and
/// returns the relaxed distance and next-hop tables. The tables are not
/// mutated afterwards, queries and path reconstruction only read them.
pub fn prepare(input_graph: &InputGraph) -> DistanceMatrix {
    let mut fw = FloydWarshall::new(input_graph);
    fw.relax_all();
    if fw.has_negative_cycle() {
        warn!("Input graph contains a negative cycle, affected distances and paths are undefined");
    }
    fw.into_matrix()
}

/// Returns the shortest distance from `source` to `target`, or `WEIGHT_INF`
/// if `target` cannot be reached.
pub fn calc_weight(matrix: &DistanceMatrix, source: VertexId, target: VertexId) -> Weight {
    matrix.calc_weight(source, target)
}

/// Reconstructs one shortest path from `source` to `target`.
pub fn calc_path(matrix: &DistanceMatrix, source: VertexId, target: VertexId) -> PathResult {
    let mut reconstructor = PathReconstructor::new(matrix.get_num_nodes());
    reconstructor.calc_path(matrix, source, target)
}

/// Creates a `PathReconstructor` that can be used to reconstruct many paths
/// in a row. This is the preferred way in case you are reconstructing more
/// than one path. Use one `PathReconstructor` for each thread.
pub fn create_reconstructor(matrix: &DistanceMatrix) -> PathReconstructor {
    PathReconstructor::new(matrix.get_num_nodes())
}
