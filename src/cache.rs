//! Persisting first-round scores.
//!
//! Scoring the full dictionary is by far the most expensive round, and its
//! result depends only on the dictionary, so it is worth keeping on disk.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::solver::Scored;

/// Read cached scores. Returns `None` if the file does not exist.
pub fn load_scores(path: impl AsRef<Path>) -> Result<Option<Vec<Scored>>> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let scores: Vec<Scored> = serde_json::from_reader(BufReader::new(file))?;
    info!("loaded {} cached scores from {}", scores.len(), path.display());
    Ok(Some(scores))
}

/// Write scores as pretty-printed JSON, replacing any existing file.
pub fn save_scores(path: impl AsRef<Path>, scores: &[Scored]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, scores)?;
    writer.flush()?;
    info!("cached {} scores in {}", scores.len(), path.display());
    Ok(())
}
