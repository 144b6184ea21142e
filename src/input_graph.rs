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

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

#[cfg(test)]
use rand::rngs::StdRng;
#[cfg(test)]
use rand::Rng;

use serde::{Deserialize, Serialize};

use crate::constants::{NodeId, VertexId, Weight};
use crate::vertex_arena::VertexArena;

#[derive(Serialize, Deserialize, Clone)]
pub struct InputGraph {
    edges: Vec<Edge>,
    arena: VertexArena,
    frozen: bool,
}

impl InputGraph {
    pub fn new() -> Self {
        InputGraph {
            edges: Vec::new(),
            arena: VertexArena::new(),
            frozen: false,
        }
    }

    /// Builds a random input graph, mostly used for testing purposes
    #[cfg(test)]
    pub fn random(rng: &mut StdRng, num_nodes: usize, mean_degree: f32) -> Self {
        InputGraph::build_random_graph(rng, num_nodes, mean_degree)
    }

    /// Reads an input graph from a text file, using the following format:
    /// a <from> <to> <weight>
    /// where <from> and <to> are vertex labels and <weight> is a real number.
    /// All other lines are ignored.
    pub fn from_file(filename: &str) -> Self {
        InputGraph::read_from_file(filename)
    }

    /// Writes the input graph to a text file, using the following format:
    /// a <from> <to> <weight>
    pub fn to_file(&self, filename: &str) -> Result<(), std::io::Error> {
        let mut f = BufWriter::new(File::create(filename)?);
        for edge in self.get_edges() {
            writeln!(
                f,
                "a {} {} {}",
                self.arena.label(edge.from),
                self.arena.label(edge.to),
                edge.weight
            )?;
        }
        Ok(())
    }

    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> usize {
        self.do_add_edge(from, to, weight, false)
    }

    pub fn add_edge_bidir(&mut self, from: VertexId, to: VertexId, weight: Weight) -> usize {
        self.do_add_edge(from, to, weight, true)
    }

    pub fn get_edges(&self) -> &Vec<Edge> {
        self.check_frozen();
        &self.edges
    }

    pub fn get_num_nodes(&self) -> usize {
        self.check_frozen();
        self.arena.len()
    }

    pub fn get_num_edges(&self) -> usize {
        self.check_frozen();
        self.edges.len()
    }

    /// Vertex labels in order of first appearance in the edge list
    pub fn get_vertices(&self) -> &Vec<VertexId> {
        self.check_frozen();
        self.arena.labels()
    }

    pub(crate) fn get_arena(&self) -> &VertexArena {
        &self.arena
    }

    pub fn freeze(&mut self) {
        if self.frozen {
            panic!("Input graph is already frozen");
        }
        self.sort();
        self.remove_duplicate_edges();
        self.frozen = true;
    }

    pub fn thaw(&mut self) {
        self.frozen = false;
    }

    fn sort(&mut self) {
        // reversing first puts the most recently added edge of each (from, to)
        // group in front, the sort itself is stable
        self.edges.reverse();
        self.edges
            .sort_by(|a, b| a.from.cmp(&b.from).then(a.to.cmp(&b.to)));
    }

    fn remove_duplicate_edges(&mut self) {
        // we go through the (already sorted!) list of edges and remove duplicates
        let len_before = self.edges.len();
        self.edges.dedup_by(|a, b| a.from == b.from && a.to == b.to);
        if len_before != self.edges.len() {
            warn!(
                "There were {} duplicate edges, only the most recently added ones were kept",
                len_before - self.edges.len()
            );
        }
    }

    pub fn unit_test_output_string(&self) -> String {
        return self
            .edges
            .iter()
            .map(|e| {
                format!(
                    "g.add_edge({}, {}, {:?});",
                    self.arena.label(e.from),
                    self.arena.label(e.to),
                    e.weight
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
            + "\n";
    }

    fn check_frozen(&self) {
        if !self.frozen {
            panic!("You need to call freeze() before using the input graph")
        }
    }

    fn do_add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight, bidir: bool) -> usize {
        if self.frozen {
            panic!("Graph is frozen already, for further changes first use thaw()");
        }
        // loops, zero and negative weights are all legal input for the
        // distance tables, only non-finite weights are rejected
        if !weight.is_finite() {
            warn!(
                "Non-finite weights are not allowed. Skipped edge! from: {}, to: {}, weight: {}",
                from, to, weight
            );
            return 0;
        }
        let from = self.arena.get_or_insert(from);
        let to = self.arena.get_or_insert(to);
        self.edges.push(Edge::new(from, to, weight));
        if bidir {
            self.edges.push(Edge::new(to, from, weight));
        }
        if bidir {
            2
        } else {
            1
        }
    }

    #[cfg(test)]
    fn build_random_graph(rng: &mut StdRng, num_nodes: usize, mean_degree: f32) -> InputGraph {
        let num_edges = (mean_degree * num_nodes as f32) as usize;
        let mut result = InputGraph::new();
        let mut edge_count = 0;
        loop {
            let head = rng.gen_range(0, num_nodes);
            let tail = rng.gen_range(0, num_nodes);
            // allow duplicates and loops to make sure the clean-up inside
            // InputGraph works correctly, keep the weights integer-valued so
            // path sums in the tests stay exact
            let weight = rng.gen_range(1, 100) as Weight;
            edge_count += result.add_edge(tail, head, weight);
            if edge_count == num_edges {
                break;
            }
        }
        result.freeze();
        result
    }

    fn read_from_file(filename: &str) -> Self {
        let file = File::open(filename).unwrap();
        let reader = BufReader::new(file);
        let mut g = InputGraph::new();
        for (index, line) in reader.lines().enumerate() {
            let s: String = line.unwrap();
            if s.starts_with("a ") {
                let (from, to, weight) = InputGraph::read_arc_line(index, &s);
                g.add_edge(from, to, weight);
            } else {
                continue;
            }
        }
        g.freeze();
        g
    }

    fn read_arc_line(index: usize, line: &String) -> (VertexId, VertexId, Weight) {
        let mut split = line[2..].split_whitespace();
        let from = split.next().unwrap().parse::<VertexId>().unwrap();
        let to = split.next().unwrap().parse::<VertexId>().unwrap();
        let weight = split.next().unwrap().parse::<Weight>().unwrap();
        assert!(
            split.next().is_none(),
            "Invalid arc line: {} | {}",
            index + 1,
            line
        );
        (from, to, weight)
    }
}

impl fmt::Debug for InputGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.unit_test_output_string())
    }
}

impl Default for InputGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Edge endpoints are the dense node ids assigned by the graph's vertex arena,
/// not the external labels passed to add_edge
#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, weight: Weight) -> Edge {
        Edge { from, to, weight }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic]
    fn panic_if_not_frozen_get_edges() {
        let mut g = InputGraph::new();
        g.add_edge(0, 1, 3.0);
        g.get_edges();
    }

    #[test]
    #[should_panic]
    fn panic_if_not_frozen_get_num_edges() {
        let mut g = InputGraph::new();
        g.add_edge(0, 1, 3.0);
        g.get_num_edges();
    }

    #[test]
    #[should_panic]
    fn panic_if_not_frozen_get_num_nodes() {
        let mut g = InputGraph::new();
        g.add_edge(0, 1, 3.0);
        g.get_num_nodes();
    }

    #[test]
    #[should_panic]
    fn panic_if_frozen_add_edge() {
        let mut g = InputGraph::new();
        g.add_edge(0, 1, 3.0);
        g.freeze();
        g.add_edge(2, 5, 4.0);
    }

    #[test]
    fn freeze_and_thaw() {
        let mut g = InputGraph::new();
        g.add_edge(0, 5, 5.0);
        g.add_edge(0, 5, 10.0);
        g.freeze();
        assert_eq!(1, g.get_num_edges());
        assert_eq!(10.0, g.get_edges()[0].weight);
        g.thaw();
        g.add_edge(0, 5, 1.0);
        g.freeze();
        assert_eq!(1, g.get_num_edges());
        assert_eq!(1.0, g.get_edges()[0].weight);
    }

    #[test]
    fn num_nodes() {
        let mut g = InputGraph::new();
        g.add_edge(7, 1, 2.0);
        g.add_edge(5, 6, 4.0);
        g.add_edge(11, 8, 3.0);
        g.freeze();
        // six distinct labels, interned in order of first appearance
        assert_eq!(6, g.get_num_nodes());
        assert_eq!(vec![7, 1, 5, 6, 11, 8], *g.get_vertices());
    }

    #[test]
    fn keeps_loops_and_signed_weights() {
        let mut g = InputGraph::new();
        g.add_edge(0, 1, 3.0);
        g.add_edge(4, 4, -2.0);
        g.add_edge(2, 5, 0.0);
        g.freeze();
        assert_eq!(3, g.get_num_edges());
    }

    #[test]
    fn skips_non_finite_weights() {
        let mut g = InputGraph::new();
        g.add_edge(0, 1, 5.0);
        g.add_edge(1, 2, std::f64::NAN);
        g.add_edge(2, 3, std::f64::INFINITY);
        g.freeze();
        assert_eq!(1, g.get_num_edges());
        // skipped edges do not register their endpoints either
        assert_eq!(2, g.get_num_nodes());
    }

    #[test]
    fn duplicate_edges_last_wins() {
        let mut g = InputGraph::new();
        g.add_edge(0, 1, 7.0);
        g.add_edge(2, 3, 5.0);
        g.add_edge(0, 2, 3.0);
        g.add_edge(0, 1, 2.0);
        g.add_edge(4, 6, 9.0);
        g.add_edge(0, 1, 4.0);
        g.freeze();
        assert_eq!(4, g.get_num_edges());
        // edges are sorted by their dense endpoint ids and duplicates are
        // removed keeping only the most recently added ones
        let weights = g
            .get_edges()
            .iter()
            .map(|e| e.weight)
            .collect::<Vec<Weight>>();
        assert_eq!(vec![4.0, 3.0, 5.0, 9.0], weights);
    }

    #[test]
    fn duplicate_edges_last_wins_more() {
        let mut g = InputGraph::new();
        g.add_edge(1, 3, 43.0);
        g.add_edge(3, 2, 90.0);
        g.add_edge(3, 2, 88.0);
        g.add_edge(2, 3, 87.0);
        g.add_edge(3, 0, 75.0);
        g.add_edge(0, 2, 45.0);
        g.add_edge(1, 3, 71.0);
        g.add_edge(4, 3, 5.0);
        g.add_edge(1, 3, 91.0);
        g.freeze();
        assert_eq!(6, g.get_num_edges());
        let weights = g
            .get_edges()
            .iter()
            .map(|e| e.weight)
            .collect::<Vec<Weight>>();
        assert_eq!(vec![91.0, 88.0, 75.0, 87.0, 45.0, 5.0], weights);
    }

    #[test]
    fn add_edge_bidir_adds_both_directions() {
        let mut g = InputGraph::new();
        assert_eq!(2, g.add_edge_bidir(0, 1, 3.0));
        g.freeze();
        assert_eq!(2, g.get_num_edges());
        assert_eq!(g.get_edges()[0].from, g.get_edges()[1].to);
        assert_eq!(g.get_edges()[0].to, g.get_edges()[1].from);
    }
}
