//! Line-by-line rewrite engine
//!
//! Each line goes through the optional bullet fix and then through every
//! detector of the registry in order, each detector seeing the output of the
//! ones before it.
//!
//! Replacement is offset based: each occurrence's own byte span is replaced,
//! so an identical span elsewhere on the line is never touched by accident.
//! Occurrences that are already canonical are left as they are.

use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::detectors::{registry, Detector};
use crate::error::{Error, HyphenationError, Result};

const LIST_MARKERS: [char; 2] = ['*', '#'];

/// Run configuration, usually built from command-line flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteOptions {
    /// Insert a space after run-together list markers
    pub bullet_fix: bool,
    /// Emit `{{ISBNT|...}}` for ISBNs
    pub table_context: bool,
    /// Only emit lines that changed
    pub changes_only: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            bullet_fix: true,
            table_context: false,
            changes_only: false,
        }
    }
}

/// Result of the bullet fix on one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bullet<'a> {
    /// Line kept, possibly with a space inserted
    Keep(Cow<'a, str>),
    /// Line was nothing but list markers
    Drop,
}

/// Space out a leading list marker run, or drop a marker-only line.
pub fn fix_bullets(line: &str) -> Bullet<'_> {
    let run = line.len() - line.trim_start_matches(LIST_MARKERS).len();
    if run == 0 {
        return Bullet::Keep(Cow::Borrowed(line));
    }
    let (markers, rest) = line.split_at(run);
    if rest.is_empty() {
        return Bullet::Drop;
    }
    if rest.starts_with(' ') {
        Bullet::Keep(Cow::Borrowed(line))
    } else {
        Bullet::Keep(Cow::Owned(format!("{} {}", markers, rest)))
    }
}

/// Widen `span` over a `<small>...</small>` pair wrapping exactly it.
fn small_wrapper(line: &str, span: Range<usize>) -> Range<usize> {
    let before = line[..span.start].trim_end();
    let after = line[span.end..].trim_start();
    match (before.strip_suffix("<small>"), after.strip_prefix("</small>")) {
        (Some(head), Some(tail)) => head.len()..line.len() - tail.len(),
        _ => span,
    }
}

/// Outcome of rewriting one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRewrite {
    /// Rewritten text, `None` when the line is dropped
    pub text: Option<String>,
    pub changed: bool,
}

/// Rewritten document plus change count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RewriteReport {
    /// Lines to print, already filtered for changes-only mode
    pub lines: Vec<String>,
    /// Number of lines whose rewritten form differs from the input
    pub changed: usize,
}

impl fmt::Display for RewriteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;
        write!(f, "LINES CHANGED: {}", self.changed)
    }
}

/// Applies a detector registry to documents
pub struct Rewriter<'r> {
    detectors: &'r [Detector],
    options: RewriteOptions,
}

impl Rewriter<'static> {
    /// Rewriter over the built-in registry
    pub fn new(options: RewriteOptions) -> Self {
        Self::with_detectors(registry(), options)
    }
}

impl<'r> Rewriter<'r> {
    pub fn with_detectors(detectors: &'r [Detector], options: RewriteOptions) -> Self {
        Self { detectors, options }
    }

    pub fn options(&self) -> &RewriteOptions {
        &self.options
    }

    /// Run every detector over one line.
    pub fn rewrite_line(&self, line: &str) -> std::result::Result<LineRewrite, HyphenationError> {
        let mut current = if self.options.bullet_fix {
            match fix_bullets(line) {
                Bullet::Keep(text) => text.into_owned(),
                Bullet::Drop => {
                    return Ok(LineRewrite {
                        text: None,
                        changed: true,
                    })
                }
            }
        } else {
            line.to_string()
        };

        for detector in self.detectors {
            if let Some(rewritten) = self.apply_detector(detector, &current)? {
                current = rewritten;
            }
        }

        let changed = current != line;
        Ok(LineRewrite {
            text: Some(current),
            changed,
        })
    }

    /// Replace every occurrence of one detector, `None` if nothing changed.
    fn apply_detector(
        &self,
        detector: &Detector,
        line: &str,
    ) -> std::result::Result<Option<String>, HyphenationError> {
        let strips_small = detector.normalizer.identifier().is_some();
        let mut out = String::with_capacity(line.len());
        let mut last = 0;
        let mut rewrote = false;
        for occurrence in detector.find(line) {
            let replacement = detector.normalizer.apply(
                occurrence.matched,
                occurrence.raw,
                self.options.table_context,
            )?;
            if replacement == occurrence.matched {
                continue;
            }
            debug!(
                detector = detector.name,
                matched = occurrence.matched,
                replacement = replacement.as_str(),
                "Rewriting occurrence"
            );

            let mut span = occurrence.target;
            if strips_small {
                let wrapped = small_wrapper(line, span.clone());
                if wrapped.start >= last {
                    span = wrapped;
                }
            }
            out.push_str(&line[last..span.start]);
            out.push_str(&replacement);
            last = span.end;
            rewrote = true;
        }

        if !rewrote {
            return Ok(None);
        }
        out.push_str(&line[last..]);
        Ok(Some(out))
    }

    /// Rewrite a whole document.
    ///
    /// Stops at the first fatal normalization error; no partial report is
    /// returned in that case.
    pub fn rewrite_document(&self, text: &str) -> Result<RewriteReport> {
        let mut report = RewriteReport::default();
        for (index, line) in text.split('\n').enumerate() {
            let rewrite = self
                .rewrite_line(line)
                .map_err(|source| Error::Normalization {
                    line: index + 1,
                    source,
                })?;
            if rewrite.changed {
                report.changed += 1;
            }
            if let Some(text) = rewrite.text {
                if !self.options.changes_only || rewrite.changed {
                    report.lines.push(text);
                }
            }
        }
        Ok(report)
    }
}
