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

/// Bounds on the combinatorial search.
///
/// None of the enumerations is bounded by anything but the problem's own
/// size, so every long-running loop checks one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBudget {
    /// Partial walks alive in one perimeter enumeration round.
    pub max_frontier: usize,
    /// Rotation offsets the corner separator tries per walk.
    pub max_rotations: usize,
    /// Perimeter candidates the solver attempts before giving up.
    pub max_candidates: usize,
    /// Stage pushes above one boundary stage.
    pub max_stages: usize,
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self {
            max_frontier: 1 << 20,
            max_rotations: 1 << 12,
            max_candidates: 256,
            max_stages: 1 << 16,
        }
    }
}

impl SearchBudget {
    /// No limits at all.
    pub fn unbounded() -> Self {
        Self {
            max_frontier: usize::MAX,
            max_rotations: usize::MAX,
            max_candidates: usize::MAX,
            max_stages: usize::MAX,
        }
    }

    pub fn with_max_frontier(mut self, limit: usize) -> Self {
        self.max_frontier = limit;
        self
    }

    pub fn with_max_rotations(mut self, limit: usize) -> Self {
        self.max_rotations = limit;
        self
    }

    pub fn with_max_candidates(mut self, limit: usize) -> Self {
        self.max_candidates = limit;
        self
    }

    pub fn with_max_stages(mut self, limit: usize) -> Self {
        self.max_stages = limit;
        self
    }
}
