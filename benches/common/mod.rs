#![allow(dead_code)]

use std::ops::Range;

pub const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur \
                         adipiscing elit, sed do eiusmod tempor incididunt \
                         ut labore et dolore magna aliqua. Ut enim ad minim \
                         veniam, quis nostrud exercitation ullamco laboris \
                         nisi ut aliquip ex ea commodo consequat.";

pub fn text_of(chars: usize) -> String {
    let mut s = String::new();
    while s.len() < chars {
        s.push_str(LOREM);
        s.push('\n');
    }
    s
}

pub fn tiny() -> String {
    text_of(1 << 6)
}

pub fn small() -> String {
    text_of(1 << 10)
}

pub fn medium() -> String {
    text_of(1 << 15)
}

pub fn large() -> String {
    text_of(1 << 20)
}

/// Cycles through 100 evenly spaced sub-ranges of `0..len`, so edit
/// benchmarks touch every region of the rope instead of hammering one
/// spot.
#[derive(Clone)]
pub struct PercentRanges {
    ranges: Vec<Range<usize>>,
    next: usize,
}

impl PercentRanges {
    pub fn new(len: usize) -> Self {
        let ranges = (0..100)
            .map(|p| (len * p / 100)..(len * (p + 1) / 100))
            .collect();

        Self { ranges, next: 0 }
    }
}

impl Iterator for PercentRanges {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let range = self.ranges[self.next].clone();
        self.next = (self.next + 1) % self.ranges.len();
        Some(range)
    }
}
