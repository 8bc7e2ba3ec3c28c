//! Source locations in Agda's interactive syntax
//!
//! Every goal-directed command carries the exact source range of its goal,
//! written in the printable form of Agda's own `Range` type:
//!
//! ```text
//! (intervalsToRange (Just (mkAbsolute "Foo.agda")) [Interval (Pn () 10 1 11 ) (Pn () 15 1 16 )])
//! ```

use crate::error::CommandError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// A location in a source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    src_file: PathBuf,
    /// Flat character offset
    offset: usize,
    /// Line number (1-indexed)
    line: usize,
    /// Column number (1-indexed)
    column: usize,
}

impl Position {
    /// Create a position, checking that the source file exists on disk
    pub fn new(
        src_file: impl AsRef<Path>,
        offset: usize,
        line: usize,
        column: usize,
    ) -> Result<Self, CommandError> {
        let src_file = src_file.as_ref();
        if !src_file.exists() {
            return Err(CommandError::InvalidLocation {
                path: src_file.to_path_buf(),
            });
        }

        Ok(Self {
            src_file: src_file.to_path_buf(),
            offset,
            line,
            column,
        })
    }

    pub fn src_file(&self) -> &Path {
        &self.src_file
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Pn () {} {} {} )", self.offset, self.line, self.column)
    }
}

/// A pair of positions in the same file, start before end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    start: Position,
    end: Position,
}

impl Interval {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> &Position {
        &self.start
    }

    pub fn end(&self) -> &Position {
        &self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Interval {} {}]", self.start, self.end)
    }
}

/// Zero or more intervals sharing one source file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Range {
    intervals: Vec<Interval>,
}

impl Range {
    pub fn new(intervals: Vec<Interval>) -> Self {
        Self { intervals }
    }

    /// The range that points nowhere, rendered as `noRange`
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// File shared by every interval, taken from the first one
    pub fn src_file(&self) -> Option<&Path> {
        self.intervals.first().map(|i| i.start().src_file())
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(src_file) = self.src_file() else {
            return f.write_str("noRange");
        };

        write!(
            f,
            "(intervalsToRange (Just (mkAbsolute \"{}\"))",
            src_file.display()
        )?;
        for interval in &self.intervals {
            write!(f, " {}", interval)?;
        }
        f.write_str(")")
    }
}

/// Build a one-interval range over `src_file` from two (offset, line, column) triples
pub fn range_builder(
    src_file: impl AsRef<Path>,
    p1: usize,
    l1: usize,
    c1: usize,
    p2: usize,
    l2: usize,
    c2: usize,
) -> Result<Range, CommandError> {
    let src_file = src_file.as_ref();
    let start = Position::new(src_file, p1, l1, c1)?;
    let end = Position::new(src_file, p2, l2, c2)?;
    Ok(Range::new(vec![Interval::new(start, end)]))
}

/// Textual form of a range as typed at the REPL or on the command line
///
/// `-` means no range; `P:L:C-P:L:C` is one interval. The file is supplied
/// later by whoever resolves the spec, usually the builder's source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSpec {
    NoRange,
    Interval {
        start: (usize, usize, usize),
        end: (usize, usize, usize),
    },
}

impl RangeSpec {
    /// Resolve against a source file, checking that it exists
    pub fn resolve(&self, src_file: impl AsRef<Path>) -> Result<Range, CommandError> {
        match *self {
            RangeSpec::NoRange => Ok(Range::empty()),
            RangeSpec::Interval {
                start: (p1, l1, c1),
                end: (p2, l2, c2),
            } => range_builder(src_file, p1, l1, c1, p2, l2, c2),
        }
    }
}

const RANGE_SPEC_FORMS: &[&str] = &["-", "<offset>:<line>:<column>-<offset>:<line>:<column>"];

fn parse_triple(s: &str) -> Option<(usize, usize, usize)> {
    let mut parts = s.split(':');
    let p = parts.next()?.parse().ok()?;
    let l = parts.next()?.parse().ok()?;
    let c = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((p, l, c))
}

impl FromStr for RangeSpec {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            return Ok(RangeSpec::NoRange);
        }

        let invalid = || CommandError::invalid_argument(s, RANGE_SPEC_FORMS);
        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        Ok(RangeSpec::Interval {
            start: parse_triple(start).ok_or_else(invalid)?,
            end: parse_triple(end).ok_or_else(invalid)?,
        })
    }
}
