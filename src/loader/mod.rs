mod error;


pub use error::{LoadError, LoadErrorKind};

use crate::clusterer::{Cluster, ClusterSet, Point, PointId};
use log::{debug, info};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Smallest accepted coordinate (inclusive)
pub const MIN_COORDINATE: f32 = 0.0;

/// Largest accepted coordinate (inclusive)
pub const MAX_COORDINATE: f32 = 1000.0;

/// Largest object count a header may declare
pub const MAX_OBJECTS: usize = 999_999_999;

/// Most clusters reserved up front; the set grows past this as lines arrive
const PREALLOCATE_LIMIT: usize = 4096;

const COUNT_PREFIX: &str = "count=";

/// Description of the input format, shown when a file is rejected
pub const FILE_FORMAT_HELP: &str = "\
Input file format:
  The first line declares the number of objects as \"count=N\", N > 0.
  Each of the following N lines defines one object as \"ID X Y\", where
  ID is an integer unique within the file and X, Y are coordinates with
  0 <= X <= 1000 and 0 <= Y <= 1000. Blank lines are ignored.";

/// Parses `count=N` followed by `N` lines of `ID X Y` into one cluster per point
#[derive(Debug, Clone)]
pub struct Loader {
    min_coordinate: f32,
    max_coordinate: f32,
    max_objects: usize,
}

impl Loader {
    /// Create a loader with the default coordinate range and object limit
    pub fn new() -> Self {
        Self {
            min_coordinate: MIN_COORDINATE,
            max_coordinate: MAX_COORDINATE,
            max_objects: MAX_OBJECTS,
        }
    }

    /// Set the inclusive range both coordinates must fall in
    pub fn coordinate_range(mut self, min: f32, max: f32) -> Self {
        self.min_coordinate = min;
        self.max_coordinate = max;
        self
    }

    /// Set the largest object count a header may declare
    pub fn max_objects(mut self, max: usize) -> Self {
        self.max_objects = max;
        self
    }

    /// Load points from a file on disk
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<ClusterSet, LoadError> {
        let path = path.as_ref();
        info!("Loading objects from {}", path.display());

        let file = File::open(path).map_err(|e| LoadError::new(e, 0))?;
        self.load_reader(BufReader::new(file))
    }

    /// Load points from in-memory text
    pub fn load_str(&self, text: &str) -> Result<ClusterSet, LoadError> {
        self.load_reader(text.as_bytes())
    }

    /// Load points from any buffered reader.
    ///
    /// On failure the error carries how many points had been loaded; everything
    /// allocated so far has already been released.
    pub fn load_reader<R: BufRead>(&self, reader: R) -> Result<ClusterSet, LoadError> {
        let mut lines = reader.lines().enumerate().map(|(i, line)| (i + 1, line));

        let declared = self.read_header(&mut lines)?;
        debug!("Header declares {} objects", declared);

        let mut clusters = ClusterSet::with_capacity(declared.min(PREALLOCATE_LIMIT))
            .map_err(|e| LoadError::new(e, 0))?;
        let mut seen: HashMap<PointId, usize> = HashMap::new();
        let mut surplus = 0;

        for (line_no, line) in lines {
            let loaded = clusters.len();
            let line = line.map_err(|e| LoadError::new(e, loaded))?;
            let text = line.trim();

            if text.is_empty() {
                continue;
            }

            // Keep counting past the declared total so the mismatch can be reported
            if loaded == declared {
                surplus += 1;
                continue;
            }

            let point = self
                .parse_point(line_no, text)
                .map_err(|kind| LoadError::new(kind, loaded))?;

            if let Some(&first_line) = seen.get(&point.id) {
                return Err(LoadError::new(
                    LoadErrorKind::DuplicateId {
                        line: line_no,
                        id: point.id,
                        first_line,
                    },
                    loaded,
                ));
            }
            seen.insert(point.id, line_no);

            let mut cluster = Cluster::new();
            cluster
                .append(point)
                .map_err(|e| LoadError::new(e, loaded))?;
            clusters
                .push(cluster)
                .map_err(|e| LoadError::new(e, loaded))?;
        }

        let loaded = clusters.len();
        if loaded != declared || surplus > 0 {
            return Err(LoadError::new(
                LoadErrorKind::CountMismatch {
                    declared,
                    found: loaded + surplus,
                },
                loaded,
            ));
        }

        info!("Loaded {} objects", loaded);
        Ok(clusters)
    }

    /// Read the first non-blank line and return the declared object count
    fn read_header<I>(&self, lines: &mut I) -> Result<usize, LoadError>
    where
        I: Iterator<Item = (usize, std::io::Result<String>)>,
    {
        for (line_no, line) in lines {
            let line = line.map_err(|e| LoadError::new(e, 0))?;
            let header = line.trim_start();

            if header.is_empty() {
                continue;
            }

            let malformed = || {
                LoadError::new(
                    LoadErrorKind::MalformedHeader {
                        line: line_no,
                        content: header.to_string(),
                    },
                    0,
                )
            };

            let value = header.strip_prefix(COUNT_PREFIX).ok_or_else(malformed)?;
            if value.chars().any(char::is_whitespace) {
                return Err(malformed());
            }

            let declared = match value.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(LoadError::new(
                        LoadErrorKind::InvalidCount {
                            value: value.to_string(),
                        },
                        0,
                    ));
                }
            };

            if declared > self.max_objects {
                return Err(LoadError::new(
                    LoadErrorKind::TooManyObjects {
                        declared,
                        max: self.max_objects,
                    },
                    0,
                ));
            }

            return Ok(declared);
        }

        Err(LoadError::new(LoadErrorKind::MissingHeader, 0))
    }

    /// Parse and range-check one `ID X Y` line
    fn parse_point(&self, line: usize, text: &str) -> Result<Point, LoadErrorKind> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        let [id, x, y] = fields.as_slice() else {
            return Err(LoadErrorKind::InvalidLine {
                line,
                fields: fields.len(),
            });
        };

        let Ok(id) = id.parse::<PointId>() else {
            return Err(LoadErrorKind::InvalidField {
                line,
                field: "id",
                value: id.to_string(),
            });
        };
        let x = parse_coordinate(line, "X", x)?;
        let y = parse_coordinate(line, "Y", y)?;

        self.check_range(line, 'X', x)?;
        self.check_range(line, 'Y', y)?;

        Ok(Point::new(id, x, y))
    }

    fn check_range(&self, line: usize, axis: char, value: f32) -> Result<(), LoadErrorKind> {
        if value >= self.min_coordinate && value <= self.max_coordinate {
            return Ok(());
        }

        Err(LoadErrorKind::CoordinateOutOfRange {
            line,
            axis,
            value,
            min: self.min_coordinate,
            max: self.max_coordinate,
        })
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_coordinate(line: usize, field: &'static str, raw: &str) -> Result<f32, LoadErrorKind> {
    raw.parse::<f32>().map_err(|_| LoadErrorKind::InvalidField {
        line,
        field,
        value: raw.to_string(),
    })
}
