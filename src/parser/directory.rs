//! AP directory extraction from `show ap summary` output.
//!
//! A summary row looks like
//!
//! ```text
//! AP-Lobby   2   AIR-AP2802I   00:11:22:33:44:55   Floor1   US   10.0.0.5   4   [0 ,0 ,0 ]
//! ```
//!
//! i.e. name, slot count, model, MAC, location, country, IP, client count
//! and a bracketed status column. Rows are anchored on that arrangement so
//! wrapped continuation lines and banners are rejected.

use super::schema::AccessPoint;
use super::table::{FieldSplit, RowRecognizer, TableLayout};
use crate::utils::error::CollectError;
use log::debug;
use std::collections::HashMap;

/// Token index of the AP name in a summary row
const NAME_FIELD: usize = 0;

/// Token index of the location in a summary row
const LOCATION_FIELD: usize = 4;

/// Tokens before the bracketed status column
const LEADING_TOKENS: usize = 8;

/// Recognizes data rows of the AP summary table
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryRowRecognizer;

impl RowRecognizer for SummaryRowRecognizer {
    fn recognizes(&self, line: &str) -> bool {
        let line = line.trim();
        if !line.ends_with(']') {
            return false;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() <= LEADING_TOKENS {
            return false;
        }

        is_number(tokens[1]) && is_number(tokens[7]) && tokens[LEADING_TOKENS].starts_with('[')
    }
}

fn is_number(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// AP name to location mapping, plus names in discovery order
///
/// Built once per run and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    order: Vec<String>,
    locations: HashMap<String, String>,
}

impl Directory {
    /// Record one summary row
    ///
    /// A repeated name keeps its first position but takes the later location.
    pub fn insert(&mut self, name: &str, location: &str) {
        if !self.locations.contains_key(name) {
            self.order.push(name.to_string());
        }
        self.locations
            .insert(name.to_string(), location.trim().to_string());
    }

    /// AP names in discovery order
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Location recorded for `name`, if the AP is known
    pub fn location(&self, name: &str) -> Option<&str> {
        self.locations.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.locations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Access points in discovery order
    pub fn access_points(&self) -> impl Iterator<Item = AccessPoint> + '_ {
        self.order.iter().map(move |name| AccessPoint {
            name: name.clone(),
            location: self.location(name).unwrap_or_default().to_string(),
        })
    }
}

/// Build the AP directory from `show ap summary` output
///
/// # Errors
/// * `CollectError::EmptyDirectory` - no summary row was recognized
pub fn parse_ap_summary(output: &str) -> Result<Directory, CollectError> {
    let layout = TableLayout::new(SummaryRowRecognizer, FieldSplit::Tokens, LEADING_TOKENS + 1);

    let directory = layout.rows(output).fold(Directory::default(), |mut dir, fields| {
        dir.insert(fields[NAME_FIELD], fields[LOCATION_FIELD]);
        dir
    });

    if directory.is_empty() {
        return Err(CollectError::EmptyDirectory);
    }

    debug!("AP summary lists {} access points", directory.len());

    Ok(directory)
}
