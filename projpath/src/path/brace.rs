//! Shell-style brace expansion for glob patterns.
//!
//! `{a,b}` is expanded before matching: `src/{app,lib}/*.rs` becomes
//! `src/app/*.rs` followed by `src/lib/*.rs`. Braces may nest. A backslash
//! escapes the next character (except on Windows, where it is the path
//! separator), and an unbalanced `{` or an empty `{}` is kept literally.

/// Whether `\` escapes the following character in a pattern.
pub(crate) const BACKSLASH_ESCAPES: bool = !cfg!(windows);

/// Expand every brace group in `pattern`.
///
/// Alternatives are produced in the order they are written, left to right,
/// with no de-duplication. A pattern without brace groups yields itself.
///
/// # Examples
///
/// ```
/// use projpath::path::brace::expand_braces;
///
/// assert_eq!(expand_braces("*.{h,m}"), vec!["*.h", "*.m"]);
/// assert_eq!(
///     expand_braces("{a,b}/{x,y}"),
///     vec!["a/x", "a/y", "b/x", "b/y"]
/// );
/// assert_eq!(expand_braces("a{b,c{d,e}}"), vec!["ab", "acd", "ace"]);
/// assert_eq!(expand_braces("plain/{}"), vec!["plain/{}"]);
/// ```
#[must_use]
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let mut out = Vec::new();
    expand_into(pattern, &mut out);
    out
}

fn expand_into(pattern: &str, out: &mut Vec<String>) {
    let Some(group) = find_group(pattern) else {
        out.push(pattern.to_string());
        return;
    };

    let prefix = &pattern[..group.open];
    let suffix = &pattern[group.close + 1..];

    let mut start = group.open + 1;
    for &comma in group.commas.iter().chain(std::iter::once(&group.close)) {
        let alternative = &pattern[start..comma];
        expand_into(&format!("{prefix}{alternative}{suffix}"), out);
        start = comma + 1;
    }
}

/// Byte offsets of one top-level brace group.
#[derive(Debug, PartialEq, Eq)]
struct BraceGroup {
    open: usize,
    close: usize,
    commas: Vec<usize>,
}

/// Find the first brace group that has a matching close and is not `{}`.
fn find_group(pattern: &str) -> Option<BraceGroup> {
    let bytes = pattern.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if BACKSLASH_ESCAPES => i += 2,
            b'{' => {
                if let Some(group) = match_group(bytes, i) {
                    return Some(group);
                }
                i += 1;
            }
            _ => i += 1,
        }
    }
    None
}

fn match_group(bytes: &[u8], open: usize) -> Option<BraceGroup> {
    let mut depth = 0usize;
    let mut commas = Vec::new();
    let mut i = open + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if BACKSLASH_ESCAPES => {
                i += 2;
                continue;
            }
            b'{' => depth += 1,
            b'}' if depth == 0 => {
                if i == open + 1 {
                    return None;
                }
                return Some(BraceGroup {
                    open,
                    close: i,
                    commas,
                });
            }
            b'}' => depth -= 1,
            b',' if depth == 0 => commas.push(i),
            _ => {}
        }
        i += 1;
    }
    None
}

/// Check whether `pattern` contains at least one expandable brace group.
#[must_use]
pub fn has_braces(pattern: &str) -> bool {
    find_group(pattern).is_some()
}
