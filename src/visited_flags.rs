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

use std::u32::MAX;

use crate::constants::NodeId;

/// Maintains a collection of N visited marks that can efficiently be reset by
/// incrementing a single integer
pub struct VisitedFlags {
    marks: Vec<u32>,
    round: u32,
}

impl VisitedFlags {
    pub fn new(num_nodes: usize) -> Self {
        VisitedFlags {
            marks: vec![0; num_nodes],
            round: 1,
        }
    }

    pub fn is_visited(&self, node: NodeId) -> bool {
        self.marks[node] == self.round
    }

    pub fn set_visited(&mut self, node: NodeId) {
        self.marks[node] = self.round;
    }

    pub fn reset_all(&mut self) {
        if self.round == MAX {
            self.marks = vec![0; self.marks.len()];
            self.round = 1;
        } else {
            self.round += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::visited_flags::VisitedFlags;

    #[test]
    fn set_visited_and_reset() {
        let mut flags = VisitedFlags::new(5);
        assert!(!flags.is_visited(3));
        flags.set_visited(3);
        assert!(flags.is_visited(3));
        flags.reset_all();
        assert!(!flags.is_visited(3));
    }
}
