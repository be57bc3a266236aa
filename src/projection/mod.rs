// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Staged construction of the unfolded square.
//!
//! The boundary projector produces the bottom stage from a separated
//! perimeter walk. Forced-edge and squash-point discovery then propose further
//! stages from the aggregate of whatever is on the stack.

pub mod boundary;
pub mod counting;
pub mod forced;
pub mod squash;
pub mod stage;

pub use boundary::{SIDE_DIRECTIONS, place_boundary, square_corners};
pub use counting::MixedRadix;
pub use forced::{find_forced_edge, forced_edges, subset_witnesses, try_insert_subset};
pub use squash::{Bridge, collect_bridges, find_squash_points, squash_stages};
pub use stage::{CurrentState, EdgeProjection, NodeProjection, Projection, ProjectionStage};
