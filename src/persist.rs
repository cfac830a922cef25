//! Reading and writing `.switch` files.
//!
//! A `.switch` file is a line-oriented, human-editable listing of switching
//! values: a header of `#` comment lines, then one record per combinational
//! input, then one record per internal node in the same dependency order the
//! simulator uses. Identifiers on disk are the live ids shifted down by one
//! (see [`IdOffset`]).
//!
//! ```text
//! # Switching Activities Template File
//! # Format: ID [Switching Value Placeholder]
//! # CIs: 2
//! # Nodes: 4
//!
//! CI 0: ID=0 0.5
//! CI 1: ID=1 0.5
//! Node 0: ID=2 0.5
//! ```
//!
//! The loader is strict: comment lines are skipped only as a contiguous
//! prefix, both blocks must contain exactly as many records as the live
//! network requires, and every identifier read from the file is
//! bounds-checked before it is used as an index. A file that disagrees with
//! the network fails loudly instead of producing a misaligned vector.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;

use crate::network::Aig;
use crate::switching::{IdOffset, SwitchingVector};

/// Value written for every record in a fresh template: "not yet measured".
pub const PLACEHOLDER: f32 = 0.5;

/// Which block of a `.switch` file a record belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RecordKind {
    Ci,
    Node,
}

impl RecordKind {
    fn tag(self) -> &'static str {
        match self {
            RecordKind::Ci => "CI",
            RecordKind::Node => "Node",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Failures of the persistence layer.
///
/// All of these are terminal for the call that produced them: nothing is
/// retried, and no partially built vector ever escapes.
#[derive(Debug, Error)]
pub enum SwitchError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{kind} record {index}: malformed line {line:?}")]
    BadRecord {
        kind: RecordKind,
        index: usize,
        line: String,
    },

    #[error("unexpected end of file while reading {kind} record {index}")]
    UnexpectedEof { kind: RecordKind, index: usize },

    #[error("{kind} record {index}: ID={id} out of range (network has {max} persisted ids)")]
    IdOutOfRange {
        kind: RecordKind,
        index: usize,
        id: u32,
        max: usize,
    },
}

/// Writes a switching template for the network to `<base_name>.switch`.
///
/// Every combinational input and every internal node (in dependency order)
/// gets one record with the [`PLACEHOLDER`] value, ready to be edited and
/// fed back to [`load_switching`]. Returns the path of the written file.
///
/// # Errors
///
/// Returns [`SwitchError::Io`] when the file cannot be created or written.
pub fn write_template(aig: &Aig, base_name: &str) -> Result<PathBuf, SwitchError> {
    let path = PathBuf::from(format!("{}.switch", base_name));
    let offset = IdOffset::new(aig.max_id());
    let mut out = BufWriter::new(File::create(&path)?);

    writeln!(out, "# Switching Activities Template File")?;
    writeln!(out, "# Format: ID [Switching Value Placeholder]")?;
    writeln!(out, "# CIs: {}", aig.ci_count())?;
    writeln!(out, "# Nodes: {}", aig.max_id())?;
    writeln!(out)?;

    for (i, &ci) in aig.cis().iter().enumerate() {
        writeln!(out, "CI {}: ID={} {}", i, offset.to_persisted(ci), PLACEHOLDER)?;
    }
    for (i, id) in aig.dfs_order().into_iter().enumerate() {
        writeln!(out, "Node {}: ID={} {}", i, offset.to_persisted(id), PLACEHOLDER)?;
    }
    out.flush()?;

    info!("switching template written to {}", path.display());
    Ok(path)
}

/// Loads switching values for the network from a `.switch` file.
///
/// The file must contain exactly [`Aig::ci_count`] `CI` records followed by
/// one `Node` record per entry of [`Aig::dfs_order`]. The resulting vector
/// holds, at each persisted identifier named by the file, the value read
/// for it.
///
/// # Errors
///
/// - [`SwitchError::Io`] — the file cannot be opened or read.
/// - [`SwitchError::BadRecord`] — a line does not match the record grammar
///   (this includes comments interleaved with data).
/// - [`SwitchError::UnexpectedEof`] — the file ends before both blocks are
///   complete.
/// - [`SwitchError::IdOutOfRange`] — a record names an identifier outside
///   the live network.
pub fn load_switching(aig: &Aig, path: &Path) -> Result<SwitchingVector, SwitchError> {
    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines();

    // Skip blank and comment lines, but only as a contiguous prefix. The
    // first line that is neither is data and belongs to the CI block.
    let mut pending = None;
    for line in lines.by_ref() {
        let line = line?;
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        pending = Some(line);
        break;
    }

    let offset = IdOffset::new(aig.max_id());
    let mut switching = SwitchingVector::zeroed(aig.max_id());

    let n_cis = aig.ci_count();
    let n_nodes = aig.dfs_order().len();
    parse_block(&mut lines, &mut pending, RecordKind::Ci, n_cis, offset, &mut switching)?;
    parse_block(&mut lines, &mut pending, RecordKind::Node, n_nodes, offset, &mut switching)?;

    debug!(
        "loaded {} CI and {} node switching values from {}",
        n_cis,
        n_nodes,
        path.display()
    );
    Ok(switching)
}

/// Loads switching values, or falls back to writing a template.
///
/// An absent `path` is not an error: a template named after `base_name` is
/// written instead and the result is `Ok(None)` — the caller is expected to
/// edit the template and call again.
pub fn load_or_template(
    aig: &Aig,
    path: Option<&Path>,
    base_name: &str,
) -> Result<Option<SwitchingVector>, SwitchError> {
    match path {
        Some(path) => load_switching(aig, path).map(Some),
        None => {
            warn!("no switching file given, writing a template instead");
            write_template(aig, base_name)?;
            Ok(None)
        }
    }
}

struct Record {
    /// Position field from the file. Parsed for grammar conformance, but
    /// the record's position in the file is authoritative.
    #[allow(dead_code)]
    index: usize,
    id: u32,
    value: f32,
}

/// Parses one `<tag> <i>: ID=<id> <value>` line.
///
/// Shared by both blocks so the two parse loops cannot diverge. Incidental
/// whitespace around tokens is tolerated, trailing garbage is not.
fn parse_record(line: &str, kind: RecordKind) -> Option<Record> {
    let rest = line.trim().strip_prefix(kind.tag())?;
    let (index_str, rest) = rest.split_once(':')?;
    let index: usize = index_str.trim().parse().ok()?;
    let rest = rest.trim_start().strip_prefix("ID")?;
    let rest = rest.trim_start().strip_prefix('=')?;

    let mut fields = rest.split_whitespace();
    let id: u32 = fields.next()?.parse().ok()?;
    let value: f32 = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(Record { index, id, value })
}

fn parse_block(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    pending: &mut Option<String>,
    kind: RecordKind,
    count: usize,
    offset: IdOffset,
    switching: &mut SwitchingVector,
) -> Result<(), SwitchError> {
    for i in 0..count {
        let line = match pending.take() {
            Some(line) => line,
            None => match lines.next() {
                Some(line) => line?,
                None => return Err(SwitchError::UnexpectedEof { kind, index: i }),
            },
        };

        let record = match parse_record(&line, kind) {
            Some(record) => record,
            None => return Err(SwitchError::BadRecord { kind, index: i, line }),
        };

        if offset.from_persisted(record.id).is_none() {
            return Err(SwitchError::IdOutOfRange {
                kind,
                index: i,
                id: record.id,
                max: offset.len(),
            });
        }

        debug!("{} {}: ID={} {}", kind, i, record.id, record.value);
        switching.set(record.id, record.value);
    }
    Ok(())
}
