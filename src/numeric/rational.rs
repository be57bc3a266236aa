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

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_traits::ToPrimitive;
use rug::Integer;

use crate::error::ParseError;

/// Exact rational number backed by `rug::Rational` (GMP).
///
/// Always stored in lowest terms with a positive denominator, so structural
/// equality and hashing agree with numeric equality.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rational(pub rug::Rational);

impl Rational {
    pub fn zero() -> Self {
        Rational(rug::Rational::new())
    }

    pub fn one() -> Self {
        Rational::from(1)
    }

    pub fn from_num_den(num: i64, den: i64) -> Self {
        Rational(rug::Rational::from((num, den)))
    }

    pub fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }

    pub fn is_negative(&self) -> bool {
        self.0.cmp0() == Ordering::Less
    }

    pub fn is_positive(&self) -> bool {
        self.0.cmp0() == Ordering::Greater
    }

    pub fn numer(&self) -> &Integer {
        self.0.numer()
    }

    pub fn denom(&self) -> &Integer {
        self.0.denom()
    }

    /// True when `self == q * q` for some rational `q`.
    pub fn is_square(&self) -> bool {
        !self.is_negative() && self.numer().is_perfect_square() && self.denom().is_perfect_square()
    }

    /// Exact square root, only for perfect squares.
    pub fn sqrt(&self) -> Option<Rational> {
        if !self.is_square() {
            return None;
        }
        let num = Integer::from(self.numer().sqrt_ref());
        let den = Integer::from(self.denom().sqrt_ref());
        Some(Rational(rug::Rational::from((num, den))))
    }

    pub fn square(&self) -> Rational {
        self * self
    }
}

impl From<i32> for Rational {
    fn from(value: i32) -> Self {
        Rational(rug::Rational::from(value))
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Rational(rug::Rational::from(value))
    }
}

impl From<rug::Rational> for Rational {
    fn from(value: rug::Rational) -> Self {
        Rational(value)
    }
}

impl<'a, 'b> Add<&'b Rational> for &'a Rational {
    type Output = Rational;

    fn add(self, rhs: &'b Rational) -> Rational {
        let mut result = self.0.clone();
        result += &rhs.0;
        Rational(result)
    }
}

impl<'a, 'b> Sub<&'b Rational> for &'a Rational {
    type Output = Rational;

    fn sub(self, rhs: &'b Rational) -> Rational {
        let mut result = self.0.clone();
        result -= &rhs.0;
        Rational(result)
    }
}

impl<'a, 'b> Mul<&'b Rational> for &'a Rational {
    type Output = Rational;

    fn mul(self, rhs: &'b Rational) -> Rational {
        let mut result = self.0.clone();
        result *= &rhs.0;
        Rational(result)
    }
}

impl<'a, 'b> Div<&'b Rational> for &'a Rational {
    type Output = Rational;

    fn div(self, rhs: &'b Rational) -> Rational {
        // rug panics on division by zero; callers check divisors first
        let mut result = self.0.clone();
        result /= &rhs.0;
        Rational(result)
    }
}

impl Add for Rational {
    type Output = Rational;
    fn add(self, rhs: Rational) -> Rational {
        &self + &rhs
    }
}

impl Sub for Rational {
    type Output = Rational;
    fn sub(self, rhs: Rational) -> Rational {
        &self - &rhs
    }
}

impl Mul for Rational {
    type Output = Rational;
    fn mul(self, rhs: Rational) -> Rational {
        &self * &rhs
    }
}

impl Div for Rational {
    type Output = Rational;
    fn div(self, rhs: Rational) -> Rational {
        &self / &rhs
    }
}

impl<'a> AddAssign<&'a Rational> for Rational {
    fn add_assign(&mut self, rhs: &'a Rational) {
        self.0 += &rhs.0;
    }
}

impl<'a> SubAssign<&'a Rational> for Rational {
    fn sub_assign(&mut self, rhs: &'a Rational) {
        self.0 -= &rhs.0;
    }
}

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl<'a> Neg for &'a Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational(-self.0.clone())
    }
}

impl PartialEq<i32> for Rational {
    fn eq(&self, other: &i32) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<i32> for Rational {
    fn partial_cmp(&self, other: &i32) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl FromStr for Rational {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<rug::Rational>()
            .map(Rational)
            .map_err(|_| ParseError::Rational(trimmed.to_string()))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        if *self.denom() == 1 {
            self.numer().to_i64()
        } else {
            None
        }
    }

    fn to_u64(&self) -> Option<u64> {
        if *self.denom() == 1 {
            self.numer().to_u64()
        } else {
            None
        }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}
