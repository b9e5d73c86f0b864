/*
Copyright (c) 2021 VMware, Inc.
SPDX-License-Identifier: MIT
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Election IDs: the 128-bit rank a controller bids for mastership.

use proto::p4runtime::Uint128;

use std::fmt::{self, Display};
use std::num::ParseIntError;
use std::str::FromStr;

/// A P4Runtime election ID.  Ordering is over the full 128-bit value, so a
/// larger `high` always wins regardless of `low`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElectionId(pub u128);

impl ElectionId {
    pub fn new(high: u64, low: u64) -> Self {
        ElectionId(((high as u128) << 64) | low as u128)
    }

    pub fn high(self) -> u64 {
        (self.0 >> 64) as u64
    }

    pub fn low(self) -> u64 {
        self.0 as u64
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for ElectionId {
    fn from(low: u64) -> Self {
        ElectionId(low as u128)
    }
}

impl From<&Uint128> for ElectionId {
    fn from(x: &Uint128) -> Self {
        ElectionId::new(x.high, x.low)
    }
}

impl From<ElectionId> for Uint128 {
    fn from(id: ElectionId) -> Self {
        let mut uint128 = Uint128::new();
        uint128.set_high(id.high());
        uint128.set_low(id.low());
        uint128
    }
}

/// Accepts either a decimal `u128` or `high:low`.
impl FromStr for ElectionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((high, low)) => Ok(ElectionId::new(high.trim().parse()?, low.trim().parse()?)),
            None => Ok(ElectionId(s.trim().parse()?)),
        }
    }
}

impl Display for ElectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.high() == 0 {
            write!(f, "{}", self.low())
        } else {
            write!(f, "{}:{}", self.high(), self.low())
        }
    }
}

/// Hands out election IDs that differ only in `low`, starting from a seed.
/// `previous` is how a test derives backup IDs below a primary's.
#[derive(Clone, Debug)]
pub struct ElectionIdGenerator {
    current: u64,
    high: u64,
}

impl ElectionIdGenerator {
    pub fn new(seed_low: u64) -> Self {
        ElectionIdGenerator {
            current: seed_low,
            high: 0,
        }
    }

    /// Returns the current ID, then advances.
    pub fn next(&mut self) -> ElectionId {
        let id = self.current();
        self.current = self.current.wrapping_add(1);
        id
    }

    /// Steps back, then returns the new current ID.
    pub fn previous(&mut self) -> ElectionId {
        self.current = self.current.wrapping_sub(1);
        self.current()
    }

    pub fn current(&self) -> ElectionId {
        ElectionId::new(self.high, self.current)
    }

    pub fn reset(&mut self, seed_low: u64) {
        self.current = seed_low;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_across_words() {
        assert!(ElectionId::new(1, 0) > ElectionId::new(0, u64::MAX));
        assert!(ElectionId::from(101) > ElectionId::from(100));
    }

    #[test]
    fn parses_both_forms() {
        assert_eq!("100".parse::<ElectionId>().unwrap(), ElectionId::from(100));
        assert_eq!("1:2".parse::<ElectionId>().unwrap(), ElectionId::new(1, 2));
        assert!("x".parse::<ElectionId>().is_err());
        assert_eq!(ElectionId::new(1, 2).to_string(), "1:2");
    }

    #[test]
    fn uint128_conversion() {
        let id = ElectionId::new(7, 9);
        let wire: Uint128 = id.into();
        assert_eq!((wire.high, wire.low), (7, 9));
        assert_eq!(ElectionId::from(&wire), id);
    }

    #[test]
    fn generator_sequence() {
        let mut gen = ElectionIdGenerator::new(100);
        assert_eq!(gen.current(), ElectionId::from(100));
        assert_eq!(gen.previous(), ElectionId::from(99));
        assert_eq!(gen.next(), ElectionId::from(99));
        assert_eq!(gen.next(), ElectionId::from(100));
        gen.reset(5);
        assert_eq!(gen.current(), ElectionId::from(5));
    }
}
