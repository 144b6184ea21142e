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

use crate::constants::{VertexId, Weight, WEIGHT_ZERO};

/// Outcome of a path reconstruction. All three cases are expected query
/// results: a missing path is a valid answer, and a detected cycle only
/// invalidates the queried pair, never the rest of the distance table.
#[derive(Debug, PartialEq)]
pub enum PathResult {
    Found(ShortestPath),
    NoPath,
    CycleDetected,
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        match self {
            PathResult::Found(_) => true,
            _ => false,
        }
    }

    pub fn path(self) -> Option<ShortestPath> {
        match self {
            PathResult::Found(path) => Some(path),
            _ => None,
        }
    }
}

/// A reconstructed shortest path, in external vertex labels
#[derive(Debug)]
pub struct ShortestPath {
    source: VertexId,
    target: VertexId,
    weight: Weight,
    nodes: Vec<VertexId>,
}

impl PartialEq for ShortestPath {
    fn eq(&self, other: &ShortestPath) -> bool {
        self.source == other.source && self.target == other.target && self.weight == other.weight
        // do not insist on equal nodes arrays, because there can be unambiguous shortest paths
    }
}

impl ShortestPath {
    pub fn new(source: VertexId, target: VertexId, weight: Weight, nodes: Vec<VertexId>) -> Self {
        ShortestPath {
            source,
            target,
            weight,
            nodes,
        }
    }

    pub fn singular(node: VertexId) -> Self {
        ShortestPath {
            source: node,
            target: node,
            weight: WEIGHT_ZERO,
            nodes: vec![node],
        }
    }

    pub fn get_source(&self) -> VertexId {
        self.source
    }

    pub fn get_target(&self) -> VertexId {
        self.target
    }

    pub fn get_weight(&self) -> Weight {
        self.weight
    }

    pub fn get_nodes(&self) -> &Vec<VertexId> {
        &self.nodes
    }
}
