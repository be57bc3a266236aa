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

use thiserror::Error;

use crate::geometry::Segment2;

/// Top-level error type for the solver.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error("the skeleton has no segments")]
    EmptySkeleton,

    #[error("perimeter search exceeded {limit} live partial walks")]
    FrontierLimit { limit: usize },

    #[error("projection search exceeded {limit} stage pushes for one candidate")]
    StageLimit { limit: usize },
}

/// Errors raised while reading problem text.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid rational: {0:?}")]
    Rational(String),

    #[error("invalid vector: {0:?}")]
    Vector(String),

    #[error("invalid segment: {0:?}")]
    Segment(String),

    #[error("invalid count: {0:?}")]
    Count(String),

    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),
}

/// Failures of a single boundary placement attempt.
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("segment {0} is not a skeleton segment in either orientation")]
    UnknownSegment(Segment2),
}

/// Convenience type alias for results using [`SolveError`].
pub type Result<T> = std::result::Result<T, SolveError>;
