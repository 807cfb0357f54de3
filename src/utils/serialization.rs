use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use bincode::Options;

use crate::errors::SearchError;

/// Writes a binary snapshot of `data` to the target file.
pub fn save_to_disk<T: Serialize, TPath: AsRef<Path>>(
    data: &T,
    path: TPath,
) -> Result<(), SearchError> {
    let options = bincode::DefaultOptions::new();
    let options = options.with_no_limit();
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    options.serialize_into(writer, data)?;
    Ok(())
}

/// Reads back a snapshot previously written by [`save_to_disk`].
pub fn load_from_disk<T: DeserializeOwned, TPath: AsRef<Path>>(
    path: TPath,
) -> Result<T, SearchError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let options = bincode::DefaultOptions::new();
    let options = options.with_no_limit();
    Ok(options.deserialize_from(reader)?)
}
