//! Input source selection.

use std::fmt;
use std::path::PathBuf;

/// Where pair records are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Path(PathBuf),
}

impl InputSource {
    /// Resolve an optional `-i` argument. Missing or `-` means stdin.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => InputSource::Path(path),
            _ => InputSource::Stdin,
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("stdin"),
            InputSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}
