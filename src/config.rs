use std::path::PathBuf;

use crate::chat::jokes::JokeList;

pub struct Config {
    pub port: u16,
    pub jokes_path: Option<PathBuf>,
    pub public_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jokes_path: std::env::var("BANTER_JOKES_PATH").ok().map(PathBuf::from),
            public_dir: std::env::var("BANTER_PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./public")),
        }
    }

    /// Joke list from `BANTER_JOKES_PATH`, or the built-in set when unset.
    pub fn load_jokes(&self) -> std::io::Result<JokeList> {
        match &self.jokes_path {
            Some(path) => JokeList::from_file(path),
            None => Ok(JokeList::builtin()),
        }
    }
}
