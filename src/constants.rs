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

/// External vertex label as it appears in the input edge list, may be sparse
pub type VertexId = usize;

/// Dense vertex index assigned at load time, used to address the tables
pub type NodeId = usize;

pub type Weight = f64;

pub const WEIGHT_ZERO: Weight = 0.0;
pub const WEIGHT_INF: Weight = std::f64::INFINITY;
pub const INVALID_NODE: NodeId = std::usize::MAX;
