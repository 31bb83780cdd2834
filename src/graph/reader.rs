use num_traits::{Float, NumCast, Zero};
use std::fmt::Debug;
use std::io::BufRead;

use crate::graph::AdjacencyRecord;
use crate::{Error, Result};

/// Reads a line-oriented adjacency-list file into a flat edge relation.
///
/// Each line describes one vertex:
/// `origin<TAB>ignored-field<TAB>dest1:weight1,dest2:weight2,...`
///
/// Lines with exactly two fields describe vertices with no outgoing edges and
/// are skipped; blank lines are skipped; any other malformed line aborts
/// ingestion with a [`Error::FormatError`]. A negative weight fails fast with
/// [`Error::NegativeWeight`] before the engine ever sees it.
pub fn read_adjacency_list<W, R>(reader: R) -> Result<Vec<AdjacencyRecord<String, W>>>
where
    W: Float + Zero + NumCast + Debug + Copy,
    R: BufRead,
{
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        records.extend(parse_adjacency_line(&line, index + 1)?);
    }
    Ok(records)
}

/// Parses a single adjacency line into its edge records.
///
/// `line_number` is 1-based and only used in error messages.
pub fn parse_adjacency_line<W>(
    line: &str,
    line_number: usize,
) -> Result<Vec<AdjacencyRecord<String, W>>>
where
    W: Float + Zero + NumCast + Debug + Copy,
{
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let fields: Vec<&str> = trimmed.split('\t').collect();
    match fields.len() {
        // A vertex with no outgoing edges contributes nothing to the relation
        2 => Ok(Vec::new()),
        3 => {
            let origin = fields[0].trim();
            let mut records = Vec::new();
            for pair in fields[2].split(',') {
                let (destination, weight) =
                    pair.split_once(':').ok_or_else(|| Error::FormatError {
                        line: line_number,
                        reason: format!(
                            "edge entry `{}` is missing its `:` separator",
                            pair.trim()
                        ),
                    })?;

                let raw: f64 = weight.trim().parse().map_err(|_| Error::FormatError {
                    line: line_number,
                    reason: format!("edge weight `{}` is not a number", weight.trim()),
                })?;
                if raw < 0.0 {
                    return Err(Error::NegativeWeight(raw));
                }
                let weight: W = NumCast::from(raw).ok_or(Error::WeightOutOfRange(raw))?;

                records.push(AdjacencyRecord::new(
                    origin.to_string(),
                    destination.trim().to_string(),
                    weight,
                ));
            }
            Ok(records)
        }
        count => Err(Error::FormatError {
            line: line_number,
            reason: format!("expected 2 or 3 tab-separated fields, found {}", count),
        }),
    }
}
