//! Artboard selection expressions.
//!
//! Users number artboards from 1. An expression such as `"1, 3, 5-8"`
//! selects single artboards and inclusive ranges; parsing yields the
//! matching zero-based index ranges. Ranges stay unexpanded, so an upper
//! bound far past the document's artboard count costs nothing.

use crate::error::{Error, Result};
use crate::model::RegionIndex;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Which artboards a run affects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "ranges", rename_all = "snake_case")]
pub enum SelectionSpec {
    /// Every artboard
    #[default]
    All,
    /// Zero-based index ranges, sorted and non-overlapping
    Explicit(Vec<RangeInclusive<RegionIndex>>),
}

impl SelectionSpec {
    /// Parse an expression into an explicit selection.
    pub fn parse(expr: &str) -> Result<Self> {
        parse_selection(expr).map(SelectionSpec::Explicit)
    }

    /// Select exactly the given zero-based indices.
    pub fn indices(indices: impl IntoIterator<Item = RegionIndex>) -> Self {
        SelectionSpec::Explicit(merge_ranges(indices.into_iter().map(|i| i..=i).collect()))
    }

    /// Check if a region should be included.
    pub fn includes(&self, index: RegionIndex) -> bool {
        match self {
            SelectionSpec::All => true,
            SelectionSpec::Explicit(ranges) => ranges.iter().any(|r| r.contains(&index)),
        }
    }

    /// Selected ranges that fall outside a document with `count` regions,
    /// clipped to start at `count`.
    pub fn out_of_range(&self, count: usize) -> Vec<RangeInclusive<RegionIndex>> {
        match self {
            SelectionSpec::All => Vec::new(),
            SelectionSpec::Explicit(ranges) => ranges
                .iter()
                .filter(|r| *r.end() >= count)
                .map(|r| (*r.start()).max(count)..=*r.end())
                .collect(),
        }
    }
}

/// Parse a selection expression (e.g., "1,3,5-8") into zero-based ranges.
///
/// Whitespace around tokens and around `-` is ignored. Overlapping and
/// adjacent ranges are merged, so the result is sorted and duplicate-free.
/// The first malformed token aborts parsing with [`Error::Parse`].
pub fn parse_selection(expr: &str) -> Result<Vec<RangeInclusive<RegionIndex>>> {
    let mut ranges = Vec::new();

    for token in expr.split(',') {
        let token = token.trim();
        if token.is_empty() {
            return Err(Error::parse(token, "empty artboard number"));
        }

        if let Some((start, end)) = token.split_once('-') {
            let start = parse_position(token, start)?;
            let end = parse_position(token, end)?;
            if start > end {
                return Err(Error::parse(
                    token,
                    format!("range start {} is after range end {}", start, end),
                ));
            }
            ranges.push((start - 1)..=(end - 1));
        } else {
            let index = parse_position(token, token)? - 1;
            ranges.push(index..=index);
        }
    }

    Ok(merge_ranges(ranges))
}

/// Format zero-based ranges as one-based text (e.g., "2, 6-9").
pub fn describe_ranges(ranges: &[RangeInclusive<RegionIndex>]) -> String {
    ranges
        .iter()
        .map(|r| {
            let (start, end) = (r.start().saturating_add(1), r.end().saturating_add(1));
            if start == end {
                start.to_string()
            } else {
                format!("{}-{}", start, end)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse one one-based artboard number out of `token`.
fn parse_position(token: &str, part: &str) -> Result<usize> {
    let part = part.trim();
    if part.is_empty() {
        return Err(Error::parse(token, "missing artboard number"));
    }

    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::parse(
            token,
            format!("'{}' is not an artboard number", part),
        ));
    }

    // Only overflow is left to fail here
    let position: usize = part
        .parse()
        .map_err(|_| Error::parse(token, format!("'{}' is too large", part)))?;

    if position == 0 {
        return Err(Error::parse(token, "artboard numbers start at 1"));
    }

    Ok(position)
}

/// Sort ranges and merge the ones that overlap or touch.
fn merge_ranges(
    mut ranges: Vec<RangeInclusive<RegionIndex>>,
) -> Vec<RangeInclusive<RegionIndex>> {
    ranges.sort_by_key(|r| *r.start());

    let mut merged: Vec<RangeInclusive<RegionIndex>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        if let Some(last) = merged.last_mut() {
            if *range.start() <= last.end().saturating_add(1) {
                if range.end() > last.end() {
                    *last = *last.start()..=*range.end();
                }
                continue;
            }
        }
        merged.push(range);
    }
    merged
}
