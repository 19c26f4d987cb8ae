// Flat-file persistence.
//
// Each course occupies three consecutive lines: name, credits, grade
// points. There is no header and no escaping, so a name containing a
// newline cannot round-trip.

use crate::course::{Course, UnnamedCounter};
use crate::grades::Grade;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_DATA_FILE: &str = "gpa_data.txt";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error while {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    fn io(operation: &'static str, path: &Path, source: io::Error) -> Self {
        StorageError::Io {
            operation,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result of reading a data file.
#[derive(Debug, Default)]
pub struct Loaded {
    pub courses: Vec<Course>,
    /// Highest `N` among `Unnamed Course N` names on file, 0 if none.
    pub max_unnamed_suffix: u32,
    /// Complete records dropped because a numeric field was unusable.
    pub skipped: usize,
}

/// Overwrite `path` with every course in order.
pub fn save(courses: &[Course], path: &Path) -> Result<(), StorageError> {
    // Truncate-and-rewrite; there is no append mode.
    let file = File::create(path).map_err(|e| StorageError::io("opening for write", path, e))?;
    let mut out = BufWriter::new(file);
    for course in courses {
        if course.name.contains('\n') {
            tracing::warn!(name = %course.name.escape_debug(), "course name contains a newline; the data file will not read back cleanly");
        }
        writeln!(out, "{}", course.name)
            .and_then(|_| writeln!(out, "{}", course.credits()))
            .and_then(|_| writeln!(out, "{}", course.points()))
            .map_err(|e| StorageError::io("writing", path, e))?;
    }
    out.flush().map_err(|e| StorageError::io("writing", path, e))?;
    tracing::debug!(count = courses.len(), path = %path.display(), "saved courses");
    Ok(())
}

/// Read courses from `path`. A missing file is a first run, not an error.
pub fn load(path: &Path) -> Result<Loaded, StorageError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no data file yet; starting empty");
            return Ok(Loaded::default());
        }
        Err(e) => return Err(StorageError::io("opening", path, e)),
    };
    read_courses(BufReader::new(file)).map_err(|e| StorageError::io("reading", path, e))
}

/// Parse the three-line record format from any buffered reader.
///
/// Every record consumes exactly three lines before it is parsed, so a
/// malformed record is dropped on its own and the records after it stay
/// aligned. A trailing record with fewer than three lines is ignored.
/// Lines are read as raw bytes: a name that is not valid UTF-8 is decoded
/// lossily, a numeric field that is not valid UTF-8 makes its record
/// malformed.
pub fn read_courses(reader: impl BufRead) -> io::Result<Loaded> {
    let mut lines = reader.split(b'\n').map(|line| line.map(strip_cr));
    let mut loaded = Loaded::default();
    let mut counter = UnnamedCounter::default();
    let mut line_no = 0usize;

    loop {
        // Pull the whole record before looking at any of it.
        let Some(name) = lines.next().transpose()? else {
            break;
        };
        let Some(credits) = lines.next().transpose()? else {
            break;
        };
        let Some(points) = lines.next().transpose()? else {
            break;
        };
        let first_line = line_no + 1;
        line_no += 3;

        // A bad byte in a name keeps the record; numeric fields are
        // checked in parse_record.
        let name = match String::from_utf8(name) {
            Ok(name) => name,
            Err(e) => {
                let name = String::from_utf8_lossy(e.as_bytes()).into_owned();
                tracing::warn!(line = first_line, name = %name, "course name is not valid UTF-8; replaced invalid bytes");
                name
            }
        };

        match parse_record(name, &credits, &points) {
            Ok(course) => {
                counter.observe(&course.name);
                loaded.courses.push(course);
            }
            Err(reason) => {
                tracing::warn!(line = first_line, reason, "skipping malformed course record");
                loaded.skipped += 1;
            }
        }
    }

    loaded.max_unnamed_suffix = counter.current();
    Ok(loaded)
}

fn strip_cr(mut line: Vec<u8>) -> Vec<u8> {
    if line.last() == Some(&b'\r') {
        line.pop();
    }
    line
}

fn parse_record(name: String, credits: &[u8], points: &[u8]) -> Result<Course, &'static str> {
    let credits: u32 = std::str::from_utf8(credits)
        .ok()
        .and_then(|text| text.trim().parse().ok())
        .ok_or("credits are not a whole number")?;
    let points: f64 = std::str::from_utf8(points)
        .ok()
        .and_then(|text| text.trim().parse().ok())
        .ok_or("grade points are not a number")?;
    let grade = Grade::from_points(points).ok_or("grade points are not in the grade table")?;
    Course::new(name, credits, grade).map_err(|_| "credits are out of range")
}
