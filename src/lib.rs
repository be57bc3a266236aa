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

//! Reconstructs how a unit square was folded onto a silhouette.
//!
//! Given the skeleton segments of a folded figure (exact rational endpoints),
//! the solver looks for an assignment of every skeleton point to a point of
//! `[0,1] x [0,1]` that preserves all segment lengths exactly:
//!
//! 1. [`perimeter`] enumerates closed walks of total length 4 and cuts one
//!    into four unit sides;
//! 2. [`projection::place_boundary`] lays those sides on the square's edges;
//! 3. [`projection`] grows the rest stage by stage through forced edges and
//!    squash points, with [`solver::Solver`] backtracking over the choices.
//!
//! All geometry is exact (`rug` rationals); there are no tolerances.

pub mod config;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod io;
pub mod kernel;
pub mod numeric;
pub mod perimeter;
pub mod projection;
pub mod skeleton;
pub mod solver;

pub use config::SearchBudget;
pub use error::{ParseError, PlacementError, Result, SolveError};
pub use solver::{Solution, Solver};
