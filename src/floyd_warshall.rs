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

use crate::constants::{VertexId, Weight, WEIGHT_INF};
use crate::distance_matrix::DistanceMatrix;
use crate::input_graph::InputGraph;

pub struct FloydWarshall {
    num_nodes: usize,
    matrix: DistanceMatrix,
}

impl FloydWarshall {
    pub fn new(input_graph: &InputGraph) -> Self {
        FloydWarshall {
            num_nodes: input_graph.get_num_nodes(),
            matrix: DistanceMatrix::from_input_graph(input_graph),
        }
    }

    /// Runs the relaxation sweep: after vertex k finished as the intermediate,
    /// every entry is optimal over paths whose intermediates were processed so
    /// far, so once the outer loop completes the tables are globally optimal
    /// (negative cycles excepted). Running it again on an already relaxed
    /// table changes nothing.
    pub fn relax_all(&mut self) {
        let n = self.num_nodes;
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let weight_ik = self.matrix.weight(i, k);
                    let weight_kj = self.matrix.weight(k, j);
                    if weight_ik == WEIGHT_INF || weight_kj == WEIGHT_INF {
                        continue;
                    }
                    if weight_ik + weight_kj < self.matrix.weight(i, j) {
                        self.matrix.set_weight(i, j, weight_ik + weight_kj);
                        // the first hop towards k is also the first hop
                        // towards j, which keeps the table walkable by
                        // single-hop extension from the source
                        let hop = self.matrix.next(i, k);
                        self.matrix.set_next(i, j, hop);
                    }
                }
            }
        }
    }

    pub fn calc_weight(&self, source: VertexId, target: VertexId) -> Weight {
        self.matrix.calc_weight(source, target)
    }

    pub fn has_negative_cycle(&self) -> bool {
        self.matrix.has_negative_cycle()
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> DistanceMatrix {
        self.matrix
    }
}
