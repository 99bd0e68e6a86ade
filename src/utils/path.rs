//! `~` expansion for paths taken from the configuration file or the CLI.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };

    match path.strip_prefix('~') {
        Some("") => home,
        Some(rest) if rest.starts_with('/') || rest.starts_with('\\') => {
            home.join(&rest[1..])
        }
        _ => PathBuf::from(path),
    }
}
