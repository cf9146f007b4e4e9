//! Glob expansion relative to a base path.
//!
//! The effective pattern is the string concatenation of the base path and
//! the pattern. It then goes through tilde expansion and, when enabled,
//! brace expansion before each resulting pattern is matched against the
//! filesystem with the `glob` crate.

use std::ffi::OsString;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::path::brace::{expand_braces, has_braces, BACKSLASH_ESCAPES};
use crate::path::normalize::expand_tilde_str;

/// Whether brace expansion is available on this platform.
///
/// The musl libc `glob(3)` has no brace support, so patterns behave like
/// they would with the system glob there. Every other target expands braces.
/// This is the single place the platform difference is decided;
/// [`GlobOptions::default`] and configuration overrides build on it.
pub const PLATFORM_BRACE_EXPANSION: bool = !cfg!(target_env = "musl");

/// Options controlling glob expansion.
///
/// # Examples
///
/// ```
/// use projpath::path::{GlobOptions, PLATFORM_BRACE_EXPANSION};
///
/// let options = GlobOptions::default();
/// assert_eq!(options.brace_expansion, PLATFORM_BRACE_EXPANSION);
/// assert!(options.mark_directories);
///
/// let options = GlobOptions::default().with_brace_expansion(false);
/// assert!(!options.brace_expansion);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobOptions {
    /// Expand `{a,b}` groups before matching.
    pub brace_expansion: bool,
    /// Append a trailing separator to matched directories.
    pub mark_directories: bool,
    /// Match names case-sensitively.
    pub case_sensitive: bool,
    /// Expand a leading `~` to the home directory.
    pub tilde_expansion: bool,
}

impl Default for GlobOptions {
    fn default() -> Self {
        Self {
            brace_expansion: PLATFORM_BRACE_EXPANSION,
            mark_directories: true,
            case_sensitive: true,
            tilde_expansion: true,
        }
    }
}

impl GlobOptions {
    /// Build options from a merged configuration, falling back to defaults.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        let Some(glob) = config.glob.as_ref() else {
            return defaults;
        };

        Self {
            brace_expansion: glob.brace_expansion.unwrap_or(defaults.brace_expansion),
            mark_directories: glob.mark_directories.unwrap_or(defaults.mark_directories),
            case_sensitive: glob.case_sensitive.unwrap_or(defaults.case_sensitive),
            tilde_expansion: glob.tilde_expansion.unwrap_or(defaults.tilde_expansion),
        }
    }

    /// Enable or disable brace expansion.
    #[must_use]
    pub fn with_brace_expansion(mut self, enabled: bool) -> Self {
        self.brace_expansion = enabled;
        self
    }

    /// Enable or disable the trailing separator on matched directories.
    #[must_use]
    pub fn with_mark_directories(mut self, enabled: bool) -> Self {
        self.mark_directories = enabled;
        self
    }

    /// Enable or disable case-sensitive matching.
    #[must_use]
    pub fn with_case_sensitive(mut self, enabled: bool) -> Self {
        self.case_sensitive = enabled;
        self
    }

    /// Enable or disable tilde expansion.
    #[must_use]
    pub fn with_tilde_expansion(mut self, enabled: bool) -> Self {
        self.tilde_expansion = enabled;
        self
    }

    fn match_options(self) -> glob::MatchOptions {
        glob::MatchOptions {
            case_sensitive: self.case_sensitive,
            require_literal_separator: true,
            require_literal_leading_dot: true,
        }
    }
}

/// Find files and directories matching `pattern` under `base`.
///
/// `pattern` is appended to `base` as a string, so it must carry its own
/// leading separator (`"/*.txt"` when `base` has no trailing one). Entries
/// are returned in the order the matcher yields them; callers should not
/// depend on it. Paths that are not valid UTF-8 and entries that cannot be
/// read are skipped. No match is an empty result, not an error.
///
/// Malformed syntax is matched literally, as the platform `glob(3)` does: a
/// `[` without a closing `]` stands for itself and a run of `*` behaves as a
/// single `*`.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if `base` is not valid UTF-8 or the home
/// directory is needed but unknown.
///
/// # Examples
///
/// ```
/// use projpath::path::{glob, GlobOptions};
/// use std::fs;
///
/// let dir = tempfile::tempdir().unwrap();
/// fs::write(dir.path().join("a.txt"), "").unwrap();
/// fs::write(dir.path().join("c.md"), "").unwrap();
///
/// let found = glob(dir.path(), "/*.txt", GlobOptions::default()).unwrap();
/// assert_eq!(found, vec![dir.path().join("a.txt")]);
///
/// assert!(glob(dir.path(), "/nomatch*", GlobOptions::default()).unwrap().is_empty());
/// ```
pub fn glob(base: &Path, pattern: &str, options: GlobOptions) -> Result<Vec<PathBuf>> {
    let base_str = base.to_str().ok_or_else(|| Error::InvalidPath {
        path: base.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    let mut effective = format!("{base_str}{pattern}");
    if options.tilde_expansion {
        effective = expand_tilde_str(&effective)?;
    }

    let patterns = if options.brace_expansion && has_braces(&effective) {
        expand_braces(&effective)
    } else {
        vec![effective.clone()]
    };

    let mut matches = Vec::new();
    for single in &patterns {
        collect_matches(&to_glob_syntax(single), options, &mut matches)?;
    }

    log::debug!(
        "glob '{effective}' expanded to {} pattern(s), {} match(es)",
        patterns.len(),
        matches.len()
    );
    Ok(matches)
}

fn collect_matches(pattern: &str, options: GlobOptions, matches: &mut Vec<PathBuf>) -> Result<()> {
    let entries = match glob::glob_with(pattern, options.match_options()) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("pattern '{pattern}' rejected ({}), matching it literally", e.msg);
            let literal = glob::Pattern::escape(pattern);
            glob::glob_with(&literal, options.match_options()).map_err(|e| {
                Error::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: format!("{} (at position {})", e.msg, e.pos),
                }
            })?
        }
    };

    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                log::debug!("skipping unreadable glob entry: {e}");
                continue;
            }
        };

        if path.to_str().is_none() {
            log::debug!("skipping non UTF-8 glob match: {}", path.display());
            continue;
        }

        if options.mark_directories && path.is_dir() {
            matches.push(mark_directory(path));
        } else {
            matches.push(path);
        }
    }

    Ok(())
}

/// Rewrite a shell-style pattern into the syntax the `glob` crate accepts.
///
/// Backslash escapes become bracket escapes, a `[` with no closing `]` is
/// matched literally, and runs of `*` collapse to one `*` since `**` carries
/// no recursive meaning here.
fn to_glob_syntax(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' if BACKSLASH_ESCAPES && i + 1 < chars.len() => {
                push_literal(&mut out, chars[i + 1]);
                i += 2;
            }
            '*' => {
                out.push('*');
                while i < chars.len() && chars[i] == '*' {
                    i += 1;
                }
            }
            '[' => {
                if let Some(end) = bracket_end(&chars, i) {
                    out.extend(&chars[i..=end]);
                    i = end + 1;
                } else {
                    push_literal(&mut out, '[');
                    i += 1;
                }
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

fn push_literal(out: &mut String, c: char) {
    if matches!(c, '*' | '?' | '[' | ']') {
        out.push('[');
        out.push(c);
        out.push(']');
    } else {
        out.push(c);
    }
}

/// Index of the `]` closing the bracket class opened at `open`.
fn bracket_end(chars: &[char], open: usize) -> Option<usize> {
    let mut first = open + 1;
    if chars.get(first) == Some(&'!') {
        first += 1;
    }
    // the first member may itself be `]`
    (first + 1..chars.len()).find(|&j| chars[j] == ']')
}

/// Append a trailing separator unless one is already present.
fn mark_directory(path: PathBuf) -> PathBuf {
    let mut raw: OsString = path.into_os_string();
    let already_marked = raw
        .to_str()
        .is_some_and(|s| s.ends_with('/') || s.ends_with(MAIN_SEPARATOR));
    if !already_marked {
        raw.push(MAIN_SEPARATOR.to_string());
    }
    PathBuf::from(raw)
}
