use std::{io::Read, path::PathBuf};

use anyhow::{bail, Context, Result};
use serde::{de::DeserializeOwned, Serialize};

use crate::IoArgs;

/// Structure that abstracts the input and output of subcommands.
///
/// Either end can be a file path or the standard stream, spelled `-`.
pub struct IoPipe {
    source: Source,
    dest: PathBuf,
}

impl IoPipe {
    /// Decode the input as a JSON array of records.
    pub fn read_records<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        match &self.source {
            Source::Stdin(content) => {
                serde_json::from_str(content).context("invalid JSON on stdin")
            }
            Source::File { path, content } => serde_json::from_str(content)
                .with_context(|| format!("invalid JSON in {path:?}")),
        }
    }

    pub fn write_json(&self, value: &impl Serialize) -> Result<()> {
        self.write_text(lineup::to_json_string(value)?)
    }

    pub fn write_text(&self, output: impl AsRef<str>) -> Result<()> {
        if self.dest.to_str() == Some("-") {
            print!("{}", output.as_ref());
        } else {
            std::fs::write(&self.dest, output.as_ref())
                .with_context(|| format!("failed to write {:?}", self.dest))?;
        }
        Ok(())
    }
}

impl TryFrom<IoArgs> for IoPipe {
    type Error = anyhow::Error;

    fn try_from(value: IoArgs) -> Result<Self> {
        let source = if value.input.to_str() == Some("-") {
            // Read stdin to string.
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Source::Stdin(input)
        } else if value.input.is_file() {
            let content = std::fs::read_to_string(&value.input)
                .with_context(|| format!("failed to read {:?}", value.input))?;
            Source::File {
                path: value.input,
                content,
            }
        } else {
            bail!("input {:?} is not a file", value.input);
        };

        Ok(IoPipe {
            source,
            dest: value.output,
        })
    }
}

enum Source {
    Stdin(String),
    File { path: PathBuf, content: String },
}
