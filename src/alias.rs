use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AliasError {
    /// Missing `=`, an empty name or command after trimming, an `=` in the
    /// name, or a line break on either side.
    #[error("invalid alias format, use: alias name=command")]
    Malformed,

    #[error("failed to save aliases to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Split `name=command` at the first `=` and trim both sides.
///
/// Everything after the first `=` belongs to the command, so commands may
/// themselves contain `=`.
pub fn parse_directive(text: &str) -> Result<(String, String), AliasError> {
    let (name, command) = text.split_once('=').ok_or(AliasError::Malformed)?;
    validate(name, command)
}

fn validate(name: &str, command: &str) -> Result<(String, String), AliasError> {
    let (name, command) = (name.trim(), command.trim());
    if name.is_empty() || command.is_empty() || name.contains('=') {
        return Err(AliasError::Malformed);
    }
    if [name, command].iter().any(|s| s.contains(['\n', '\r'])) {
        return Err(AliasError::Malformed);
    }
    Ok((name.to_string(), command.to_string()))
}

/// User-defined short names for literal shell commands, backed by a
/// `name=command` text file that is rewritten in full on every change.
#[derive(Debug)]
pub struct AliasStore {
    path: PathBuf,
    aliases: BTreeMap<String, String>,
}

impl AliasStore {
    /// Read aliases from `path`, creating an empty file (and its parent
    /// directory) if it does not exist yet.
    ///
    /// Lines without `=` or with an empty side are skipped.
    pub fn load(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if let Some(dir) = path.parent() {
                    fs::create_dir_all(dir)?;
                }
                fs::write(&path, "")?;
                String::new()
            }
            Err(e) => return Err(e),
        };

        let mut aliases = BTreeMap::new();
        for (lineno, line) in contents.lines().enumerate() {
            match line.split_once('=').map(|(n, c)| validate(n, c)) {
                Some(Ok((name, command))) => {
                    aliases.insert(name, command);
                }
                _ => tracing::debug!(line = lineno + 1, "skipping malformed alias line"),
            }
        }
        tracing::info!(count = aliases.len(), path = %path.display(), "aliases loaded");
        Ok(Self { path, aliases })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create or overwrite an alias and persist the whole mapping.
    ///
    /// On any error the mapping is left as it was.
    pub fn set(&mut self, name: &str, command: &str) -> Result<(String, String), AliasError> {
        let (name, command) = validate(name, command)?;
        let previous = self.aliases.insert(name.clone(), command.clone());
        if let Err(e) = self.save() {
            match previous {
                Some(old) => self.aliases.insert(name, old),
                None => self.aliases.remove(&name),
            };
            return Err(e);
        }
        Ok((name, command))
    }

    /// Exact, case-sensitive lookup.
    pub fn resolve(&self, input: &str) -> Option<&str> {
        self.aliases.get(input).map(String::as_str)
    }

    pub fn all(&self) -> &BTreeMap<String, String> {
        &self.aliases
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.aliases.keys().map(String::as_str)
    }

    fn save(&self) -> Result<(), AliasError> {
        let mut contents = String::new();
        for (name, command) in &self.aliases {
            contents.push_str(name);
            contents.push('=');
            contents.push_str(command);
            contents.push('\n');
        }
        fs::write(&self.path, contents).map_err(|source| AliasError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
