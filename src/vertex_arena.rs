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

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::{NodeId, VertexId};

/// Assigns dense node ids to external vertex labels in order of first appearance.
/// The dense ids index the distance and next-hop tables, so a lookup for an
/// unknown label is answered without inserting anything.
///
/// Serialized as the label vector only, the reverse map is rebuilt on load.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(from = "Vec<VertexId>", into = "Vec<VertexId>")]
pub struct VertexArena {
    labels: Vec<VertexId>,
    ids: HashMap<VertexId, NodeId>,
}

impl VertexArena {
    pub fn new() -> Self {
        VertexArena {
            labels: Vec::new(),
            ids: HashMap::new(),
        }
    }

    pub fn get_or_insert(&mut self, label: VertexId) -> NodeId {
        if let Some(&id) = self.ids.get(&label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label);
        self.ids.insert(label, id);
        id
    }

    pub fn id(&self, label: VertexId) -> Option<NodeId> {
        self.ids.get(&label).cloned()
    }

    pub fn label(&self, id: NodeId) -> VertexId {
        self.labels[id]
    }

    /// Labels in order of first appearance
    pub fn labels(&self) -> &Vec<VertexId> {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for VertexArena {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<VertexId>> for VertexArena {
    fn from(labels: Vec<VertexId>) -> Self {
        let mut arena = VertexArena::new();
        for label in labels {
            arena.get_or_insert(label);
        }
        arena
    }
}

impl From<VertexArena> for Vec<VertexId> {
    fn from(arena: VertexArena) -> Self {
        arena.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_appearance_order() {
        let mut arena = VertexArena::new();
        assert_eq!(0, arena.get_or_insert(7));
        assert_eq!(1, arena.get_or_insert(3));
        assert_eq!(0, arena.get_or_insert(7));
        assert_eq!(2, arena.get_or_insert(12));
        assert_eq!(vec![7, 3, 12], *arena.labels());
        assert_eq!(3, arena.len());
    }

    #[test]
    fn lookup_does_not_insert() {
        let mut arena = VertexArena::new();
        arena.get_or_insert(5);
        assert_eq!(None, arena.id(8));
        assert_eq!(1, arena.len());
        assert_eq!(Some(0), arena.id(5));
        assert_eq!(5, arena.label(0));
    }

    #[test]
    fn rebuilt_from_labels() {
        let mut arena = VertexArena::new();
        arena.get_or_insert(9);
        arena.get_or_insert(2);
        let rebuilt = VertexArena::from(vec![9, 2]);
        assert_eq!(arena, rebuilt);
    }
}
