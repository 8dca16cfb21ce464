//! Whole-file load/save of the roster as YAML. Records live under a top-level
//! `players` key; a missing file loads as an empty roster.

use std::path::Path;
use std::{fs, io};

use tracing::debug;

use crate::error::Error;
use crate::roster::Roster;

pub fn load(path: &Path) -> Result<Roster, Error> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no roster file, starting empty");
            return Ok(Roster::default());
        }
        Err(err) => {
            return Err(Error::Read {
                path: path.to_owned(),
                source: err,
            });
        }
    };

    serde_yaml::from_str(&text).map_err(|err| Error::Parse {
        path: path.to_owned(),
        source: err,
    })
}

/// Sorts by character name, then rewrites the whole file. Callers only invoke
/// this after the in-memory mutation has fully succeeded, so a failed
/// operation never touches the file.
pub fn save(path: &Path, roster: &mut Roster) -> Result<(), Error> {
    roster.sort_by_name();
    let text = serde_yaml::to_string(roster).map_err(Error::Encode)?;
    fs::write(path, text).map_err(|err| Error::Write {
        path: path.to_owned(),
        source: err,
    })?;
    debug!(path = %path.display(), characters = roster.characters().len(), "roster saved");
    Ok(())
}
