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

/// Mixed-radix counter: every tuple `t` with `t[i] < sizes[i]`.
///
/// Position 0 is the fastest-moving digit. The all-zero tuple comes first.
/// Any zero-sized position means there is nothing to count.
#[derive(Debug, Clone)]
pub struct MixedRadix {
    sizes: Vec<usize>,
    current: Option<Vec<usize>>,
}

impl MixedRadix {
    pub fn new(sizes: Vec<usize>) -> Self {
        let current = if sizes.contains(&0) {
            None
        } else {
            Some(vec![0; sizes.len()])
        };
        Self { sizes, current }
    }
}

impl Iterator for MixedRadix {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let out = self.current.take()?;
        let mut next = out.clone();
        for (digit, &size) in next.iter_mut().zip(&self.sizes) {
            *digit += 1;
            if *digit < size {
                self.current = Some(next);
                return Some(out);
            }
            *digit = 0;
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::MixedRadix;

    #[test]
    fn counts_every_tuple_once() {
        let all: Vec<_> = MixedRadix::new(vec![2, 3]).collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], vec![0, 0]);
        assert_eq!(all[1], vec![1, 0]);
        assert_eq!(all[5], vec![1, 2]);
    }

    #[test]
    fn empty_position_counts_nothing() {
        assert_eq!(MixedRadix::new(vec![3, 0]).count(), 0);
    }
}
