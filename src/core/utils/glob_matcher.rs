use anyhow::{Context, Result};
use regex::Regex;

/// Translate a path glob into an anchored regular expression.
///
/// - `**` matches anything, separators included, so `src/**/*.ts` needs at
///   least one directory below `src` (list `src/*.ts` too for top-level files)
/// - `*` matches within a single path segment
/// - `?` matches one character other than `/`
///
/// Every other character is matched literally.
pub fn glob_to_regex(glob: &str) -> String {
    let mut out = String::with_capacity(glob.len() * 2 + 2);
    out.push('^');

    let mut chars = glob.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                out.push_str(".*");
            }
            '*' => out.push_str("[^/]*"),
            '?' => out.push_str("[^/]"),
            c => {
                let mut buf = [0u8; 4];
                out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
            }
        }
    }

    out.push('$');
    out
}

/// A set of path globs; a path is accepted when any of them matches.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    regexes: Vec<Regex>,
}

impl PathMatcher {
    pub fn new(globs: &[String]) -> Result<Self> {
        let regexes = globs
            .iter()
            .map(|glob| {
                Regex::new(&glob_to_regex(glob))
                    .with_context(|| format!("Invalid scan pattern: \"{}\"", glob))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { regexes })
    }

    /// Test a `/`-separated path relative to the scan root.
    pub fn is_match(&self, relative_path: &str) -> bool {
        self.regexes.iter().any(|re| re.is_match(relative_path))
    }
}
