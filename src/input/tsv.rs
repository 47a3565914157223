use std::io::BufRead;
use std::path::Path;

use crate::input::metrics::{METRIC_FIELDS, RawMetrics};
use crate::input::reader::open_maybe_gz;
use crate::input::{DEFAULT_USERNAME, InputError, RawProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Username,
    Platform,
    Metric(usize),
    Ignored,
}

pub fn parse_profiles_tsv(path: &Path) -> Result<Vec<RawProfile>, InputError> {
    let reader = open_maybe_gz(path)?;
    parse_profiles_tsv_reader(reader).map_err(|e| match e {
        InputError::Io { source, .. } => InputError::Io {
            path: path.display().to_string(),
            source,
        },
        other => other,
    })
}

pub fn parse_profiles_tsv_reader<R: BufRead>(mut reader: R) -> Result<Vec<RawProfile>, InputError> {
    let mut buf = String::new();
    let read = reader.read_line(&mut buf).map_err(io_err)?;
    if read == 0 {
        return Ok(Vec::new());
    }
    let header: Vec<String> = buf
        .trim_end()
        .split('\t')
        .map(|s| s.trim().to_ascii_lowercase())
        .collect();

    let mut columns = Vec::with_capacity(header.len());
    for (idx, name) in header.iter().enumerate() {
        let column = match name.as_str() {
            "username" | "user" => Column::Username,
            "platform" => Column::Platform,
            other if METRIC_FIELDS.contains(&other) => Column::Metric(idx),
            other => {
                tracing::warn!(column = other, "unknown profile column; ignoring");
                Column::Ignored
            }
        };
        columns.push(column);
    }

    let mut profiles = Vec::new();
    let mut line_no = 1usize;
    loop {
        buf.clear();
        let read = reader.read_line(&mut buf).map_err(io_err)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() > columns.len() {
            tracing::warn!(
                line = line_no,
                extra = fields.len() - columns.len(),
                "profile row has more fields than header; extra fields ignored"
            );
        }

        let mut profile = RawProfile {
            username: DEFAULT_USERNAME.to_string(),
            platform: None,
            metrics: RawMetrics::default(),
        };
        for (idx, column) in columns.iter().enumerate() {
            let Some(value) = fields.get(idx).map(|s| s.trim()) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            match column {
                Column::Username => profile.username = value.to_string(),
                Column::Platform => profile.platform = Some(value.to_string()),
                Column::Metric(h) => {
                    profile
                        .metrics
                        .set_field(&header[*h], value)
                        .map_err(|msg| InputError::Parse(format!("line {line_no}: {msg}")))?;
                }
                Column::Ignored => {}
            }
        }
        profiles.push(profile);
    }

    Ok(profiles)
}

fn io_err(source: std::io::Error) -> InputError {
    InputError::Io {
        path: "<stream>".to_string(),
        source,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tsv.rs"]
mod tests;
