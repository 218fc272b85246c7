use std::io;
use std::path::Path;

use rand::seq::SliceRandom;

/// Jokes served in response to `/joke`.
pub const BUILTIN_JOKES: &[&str] = &[
    "What do you call a fish with no eyes? A fsh.",
    "Why don't scientists trust atoms? They make up everything.",
    "I told my wife she was drawing her eyebrows too high. She looked surprised.",
    "What do you call eight hobbits? A hobbyte.",
    "Why did the scarecrow win an award? He was outstanding in his field.",
    "I would tell you a UDP joke, but you might not get it.",
    "There are only two hard things in computer science: cache invalidation, naming things, and off-by-one errors.",
    "Why do programmers prefer dark mode? Because light attracts bugs.",
];

// Fallback for an empty list; constructors reject those.
const NO_JOKE: &str = "I had a joke for you, but I lost it.";

/// A fixed set of canned jokes, selected pseudo-randomly one at a time.
#[derive(Debug)]
pub struct JokeList {
    jokes: Vec<String>,
}

impl JokeList {
    /// The built-in list.
    pub fn builtin() -> Self {
        Self {
            jokes: BUILTIN_JOKES.iter().map(|j| j.to_string()).collect(),
        }
    }

    /// Load jokes from a newline-delimited file. Blank lines are skipped;
    /// a file with no jokes in it is an error.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let jokes: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        if jokes.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("joke file {} contains no jokes", path.display()),
            ));
        }
        Ok(Self { jokes })
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    /// Pick one joke at random.
    pub fn pick(&self) -> &str {
        self.jokes
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .unwrap_or(NO_JOKE)
    }
}
