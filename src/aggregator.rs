use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::{DateTime, FixedOffset, NaiveDate};
use log::{debug, info, warn};
use xxhash_rust::xxh3::Xxh3Builder;

use crate::error::{CookieError, Result};
use crate::record::{self, CookieRecord};

/// How far the scan reads once the target date's block has been left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Stop at the first record past the target date. Only correct for logs
    /// sorted newest first.
    #[default]
    EarlyExit,
    /// Read every record regardless of order.
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    Continue,
    Stop,
}

pub fn most_active_cookies(
    path: impl AsRef<Path>,
    date: NaiveDate,
    mode: ScanMode,
) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| CookieError::io(path, err))?;
    let reader = io::BufReader::new(file);

    let mut aggregator = ActivityAggregator::new(date, mode);
    aggregator.process(reader).map_err(|err| match err {
        CookieError::Io { source, .. } => CookieError::io(path, source),
        other => other,
    })?;
    aggregator.most_active()
}

pub fn process_file(
    path: impl AsRef<Path>,
    date: NaiveDate,
    mode: ScanMode,
    output: &mut dyn Write,
) -> Result<()> {
    let path = path.as_ref();
    let cookies = most_active_cookies(path, date, mode)?;
    write_cookies(&cookies, output).map_err(|err| CookieError::io("<output>", err))
}

pub fn write_cookies(cookies: &[String], output: &mut dyn Write) -> io::Result<()> {
    for cookie in cookies {
        writeln!(output, "{}", cookie)?;
    }
    output.flush()
}

/// Per-cookie occurrence counts for a single target day.
pub struct ActivityAggregator {
    target: NaiveDate,
    mode: ScanMode,
    bucket: HashMap<String, Activity, Xxh3Builder>,
    previous: Option<DateTime<FixedOffset>>,
    unsorted_reported: bool,
    line: usize,
}

#[derive(PartialEq, Debug, Clone)]
struct Activity {
    first_seen: usize,
    count: usize,
}

impl ActivityAggregator {
    pub fn new(target: NaiveDate, mode: ScanMode) -> Self {
        ActivityAggregator {
            target,
            mode,
            bucket: HashMap::with_capacity_and_hasher(64, Xxh3Builder::new()),
            previous: None,
            unsorted_reported: false,
            line: 0,
        }
    }

    pub fn process<R: BufRead>(&mut self, reader: R) -> Result<&Self> {
        let mut lines = reader.lines();

        // header
        if lines.next().transpose().map_err(read_error)?.is_some() {
            self.line = 1;
        }

        for line in lines {
            let line = line.map_err(read_error)?;
            self.line += 1;

            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let record =
                record::parse(line).map_err(|reason| CookieError::malformed(self.line, reason))?;
            if self.add(record) == Scan::Stop {
                debug!(
                    "left {} behind at line {}, stopping early",
                    self.target, self.line
                );
                break;
            }
        }

        info!(
            "scanned {} lines, {} distinct cookies on {}",
            self.line,
            self.bucket.len(),
            self.target
        );
        Ok(self)
    }

    pub fn add(&mut self, record: CookieRecord) -> Scan {
        self.check_order(&record.timestamp);

        if record.date() == self.target {
            let first_seen = self.bucket.len();
            self.bucket
                .entry(record.cookie)
                .and_modify(|activity| activity.count += 1)
                .or_insert(Activity {
                    first_seen,
                    count: 1,
                });
            return Scan::Continue;
        }

        match self.mode {
            ScanMode::EarlyExit if !self.bucket.is_empty() => Scan::Stop,
            _ => Scan::Continue,
        }
    }

    pub fn count(&self, cookie: &str) -> usize {
        self.bucket.get(cookie).map_or(0, |activity| activity.count)
    }

    /// Cookies sharing the highest count, in the order they were first seen.
    pub fn most_active(&self) -> Result<Vec<String>> {
        let max = self
            .bucket
            .values()
            .map(|activity| activity.count)
            .max()
            .ok_or(CookieError::DateNotFound { date: self.target })?;

        let mut winners: Vec<_> = self
            .bucket
            .iter()
            .filter(|(_, activity)| activity.count == max)
            .collect();
        winners.sort_unstable_by_key(|(_, activity)| activity.first_seen);

        Ok(winners
            .into_iter()
            .map(|(cookie, _)| cookie.clone())
            .collect())
    }

    fn check_order(&mut self, timestamp: &DateTime<FixedOffset>) {
        if let Some(previous) = self.previous {
            if *timestamp > previous && !self.unsorted_reported {
                warn!(
                    "cookie log is not sorted newest first (line {}: {} follows {}); \
                     results may be incomplete without --full-scan",
                    self.line, timestamp, previous
                );
                self.unsorted_reported = true;
            }
        }
        self.previous = Some(*timestamp);
    }
}

fn read_error(err: io::Error) -> CookieError {
    CookieError::io("<input>", err)
}
