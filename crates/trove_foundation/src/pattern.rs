//! Regular expression values.

use std::fmt;
use std::sync::Arc;

use regex::{Regex, RegexBuilder};

use crate::error::Error;

/// Flag set of a [`Pattern`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct PatternFlags {
    /// `g`: match repeatedly.
    pub global: bool,
    /// `i`: case-insensitive.
    pub ignore_case: bool,
    /// `m`: `^`/`$` match at line boundaries.
    pub multiline: bool,
    /// `s`: `.` matches newlines.
    pub dot_all: bool,
    /// `u`: unicode mode.
    pub unicode: bool,
    /// `y`: anchored at the last match position.
    pub sticky: bool,
}

impl PatternFlags {
    /// Parses a flag string such as `"gi"`.
    ///
    /// # Errors
    ///
    /// Returns an error on unknown or repeated flags.
    pub fn parse(flags: &str) -> Result<Self, String> {
        let mut parsed = Self::default();
        for c in flags.chars() {
            let slot = match c {
                'g' => &mut parsed.global,
                'i' => &mut parsed.ignore_case,
                'm' => &mut parsed.multiline,
                's' => &mut parsed.dot_all,
                'u' => &mut parsed.unicode,
                'y' => &mut parsed.sticky,
                other => return Err(format!("unknown flag '{other}'")),
            };
            if *slot {
                return Err(format!("repeated flag '{c}'"));
            }
            *slot = true;
        }
        Ok(parsed)
    }
}

impl fmt::Display for PatternFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = [
            (self.global, 'g'),
            (self.ignore_case, 'i'),
            (self.multiline, 'm'),
            (self.dot_all, 's'),
            (self.unicode, 'u'),
            (self.sticky, 'y'),
        ];
        for (set, c) in flags {
            if set {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

/// Compiled regular expression with its source text and flags.
#[derive(Clone)]
pub struct Pattern {
    source: Arc<str>,
    flags: PatternFlags,
    regex: Arc<Regex>,
}

impl Pattern {
    /// Compiles a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidPattern`](crate::ErrorKind::InvalidPattern)
    /// if the flags or the source are rejected.
    pub fn new(source: &str, flags: &str) -> crate::Result<Self> {
        let parsed = PatternFlags::parse(flags).map_err(|msg| Error::invalid_pattern(source, msg))?;
        let regex = RegexBuilder::new(source)
            .case_insensitive(parsed.ignore_case)
            .multi_line(parsed.multiline)
            .dot_matches_new_line(parsed.dot_all)
            .build()
            .map_err(|e| Error::invalid_pattern(source, e.to_string()))?;

        Ok(Self {
            source: source.into(),
            flags: parsed,
            regex: Arc::new(regex),
        })
    }

    /// Returns the source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the flag set.
    #[must_use]
    pub const fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// Returns true if the pattern matches anywhere in `haystack`.
    ///
    /// Sticky patterns only match at the start.
    #[must_use]
    pub fn is_match(&self, haystack: &str) -> bool {
        if self.flags.sticky {
            return self.regex.find(haystack).is_some_and(|m| m.start() == 0);
        }
        self.regex.is_match(haystack)
    }

    /// Returns the compiled regex.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
