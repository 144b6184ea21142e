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

use serde::{Deserialize, Serialize};

use crate::constants::{NodeId, VertexId, Weight, INVALID_NODE, WEIGHT_INF, WEIGHT_ZERO};
use crate::input_graph::InputGraph;
use crate::vertex_arena::VertexArena;

/// Dense all-pairs distance and next-hop tables, indexed row-major by the
/// vertex arena's node ids. Pairs without a known path answer with the
/// sentinels, lookups never insert anything.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    num_nodes: usize,
    arena: VertexArena,
    dist: Vec<Weight>,
    next_hop: Vec<NodeId>,
}

impl DistanceMatrix {
    pub(crate) fn new(arena: VertexArena) -> Self {
        let num_nodes = arena.len();
        DistanceMatrix {
            num_nodes,
            arena,
            dist: vec![WEIGHT_INF; num_nodes * num_nodes],
            next_hop: vec![INVALID_NODE; num_nodes * num_nodes],
        }
    }

    /// Builds the unrelaxed tables from an edge list: all direct edges first,
    /// then the diagonal. This order keeps an explicitly negative self-loop
    /// observable instead of resetting it to zero.
    pub fn from_input_graph(input_graph: &InputGraph) -> Self {
        let mut matrix = DistanceMatrix::new(input_graph.get_arena().clone());
        for e in input_graph.get_edges() {
            matrix.set_edge(e.from, e.to, e.weight);
        }
        matrix.init_diagonal();
        matrix
    }

    /// Records a direct edge, overwriting any previous entry for the pair
    pub(crate) fn set_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        let idx = self.index(from, to);
        self.dist[idx] = weight;
        self.next_hop[idx] = to;
    }

    /// Sets the self-distance of every vertex to zero. A negative self-loop is
    /// kept as-is so it shows up in has_negative_cycle() instead of being
    /// silently erased.
    pub(crate) fn init_diagonal(&mut self) {
        for v in 0..self.num_nodes {
            let idx = self.index(v, v);
            if self.dist[idx] < WEIGHT_ZERO {
                warn!(
                    "Keeping negative self-loop of vertex {}, weight: {}",
                    self.arena.label(v),
                    self.dist[idx]
                );
                continue;
            }
            self.dist[idx] = WEIGHT_ZERO;
        }
    }

    /// Returns the shortest known distance between two vertex labels, or
    /// WEIGHT_INF if no path is known
    pub fn calc_weight(&self, source: VertexId, target: VertexId) -> Weight {
        self.weight(self.id_of(source), self.id_of(target))
    }

    pub fn get_num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Vertex labels in order of first appearance in the input edge list
    pub fn get_vertices(&self) -> &Vec<VertexId> {
        self.arena.labels()
    }

    /// True if any self-distance is below zero, which happens exactly when a
    /// negative cycle runs through that vertex (either relaxation drove the
    /// diagonal entry down, or the input contained a negative self-loop)
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.num_nodes).any(|v| self.dist[v * self.num_nodes + v] < WEIGHT_ZERO)
    }

    pub(crate) fn weight(&self, from: NodeId, to: NodeId) -> Weight {
        self.dist[self.index(from, to)]
    }

    pub(crate) fn set_weight(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        let idx = self.index(from, to);
        self.dist[idx] = weight;
    }

    pub(crate) fn next(&self, from: NodeId, to: NodeId) -> NodeId {
        self.next_hop[self.index(from, to)]
    }

    pub(crate) fn set_next(&mut self, from: NodeId, to: NodeId, hop: NodeId) {
        let idx = self.index(from, to);
        self.next_hop[idx] = hop;
    }

    pub(crate) fn label(&self, id: NodeId) -> VertexId {
        self.arena.label(id)
    }

    pub(crate) fn id_of(&self, label: VertexId) -> NodeId {
        match self.arena.id(label) {
            Some(id) => id,
            None => panic!("unknown vertex: {}", label),
        }
    }

    fn index(&self, from: NodeId, to: NodeId) -> usize {
        from * self.num_nodes + to
    }
}
