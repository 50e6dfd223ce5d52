//! Text filters: shell quoting and regular expressions.
//!
//! The regex filters take two optional flags, `ignorecase` and `multiline`.
//! They compose independently: both may be set at once.

use std::borrow::Cow;

use regex::{Captures, Regex, RegexBuilder};

use crate::error::{FilterError, Result};

/// Quotes `text` so a POSIX shell reads it back as a single word.
///
/// Text made only of safe characters is returned as is; everything else is
/// wrapped in single quotes with embedded single quotes escaped.
pub fn quote(text: &str) -> Cow<'_, str> {
    shell_words::quote(text)
}

/// Escapes every regex metacharacter in `text`.
pub fn regex_escape(text: &str) -> String {
    regex::escape(text)
}

/// Flags shared by the regex filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegexFlags {
    /// Case-insensitive matching.
    pub ignorecase: bool,
    /// `^` and `$` match at line boundaries.
    pub multiline: bool,
}

impl RegexFlags {
    pub fn new(ignorecase: bool, multiline: bool) -> Self {
        Self {
            ignorecase,
            multiline,
        }
    }

    /// Compiles `pattern` with these flags applied.
    pub fn compile(&self, pattern: &str) -> Result<Regex> {
        tracing::trace!(pattern, flags = ?self, "compiling regex");
        Ok(RegexBuilder::new(pattern)
            .case_insensitive(self.ignorecase)
            .multi_line(self.multiline)
            .build()?)
    }
}

/// Captured groups of a match. Groups that did not take part are `None`.
pub type Groups = Vec<Option<String>>;

fn groups(caps: &Captures<'_>) -> Groups {
    caps.iter()
        .skip(1)
        .map(|group| group.map(|m| m.as_str().to_string()))
        .collect()
}

/// Groups of the first match of `pattern` anywhere in `text`.
///
/// Returns `None` when nothing matches.
///
/// ```
/// use saltmill_filters::filters::{regex_search, RegexFlags};
///
/// let found = regex_search("abcd", "^(.*)BC(.*)$", RegexFlags::new(true, false)).unwrap();
/// assert_eq!(found, Some(vec![Some("a".to_string()), Some("d".to_string())]));
/// ```
pub fn regex_search(text: &str, pattern: &str, flags: RegexFlags) -> Result<Option<Groups>> {
    let re = flags.compile(pattern)?;
    Ok(re.captures(text).map(|caps| groups(&caps)))
}

/// Groups of a match of `pattern` at the very start of `text`.
///
/// The match is anchored at the start only; it need not consume the whole text.
pub fn regex_match(text: &str, pattern: &str, flags: RegexFlags) -> Result<Option<Groups>> {
    let re = flags.compile(&format!(r"\A(?:{pattern})"))?;
    Ok(re.captures(text).map(|caps| groups(&caps)))
}

/// Replaces every non-overlapping match of `pattern` in `text`.
///
/// The replacement uses backslash references: `\1` or `\g<1>` for numbered
/// groups, `\g<name>` for named ones, `\\` for a backslash and `\n`, `\t`,
/// `\r` for control characters. A `$` is literal.
///
/// ```
/// use saltmill_filters::filters::{regex_replace, RegexFlags};
///
/// let out = regex_replace("lets replace spaces", r"\s+", "__", RegexFlags::default()).unwrap();
/// assert_eq!(out, "lets__replace__spaces");
/// ```
pub fn regex_replace(
    text: &str,
    pattern: &str,
    replacement: &str,
    flags: RegexFlags,
) -> Result<String> {
    let re = flags.compile(pattern)?;
    let template = expand_backrefs(replacement)?;
    Ok(re.replace_all(text, template.as_str()).into_owned())
}

/// Rewrites a backslash-style replacement into the `regex` crate's `$` syntax.
fn expand_backrefs(replacement: &str) -> Result<String> {
    let mut out = String::with_capacity(replacement.len());
    let mut chars = replacement.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '$' => out.push_str("$$"),
            '\\' => match chars.peek().copied() {
                Some(d) if d.is_ascii_digit() => {
                    let mut group = String::new();
                    while let Some(d) = chars.peek().copied().filter(char::is_ascii_digit) {
                        if group.len() == 2 {
                            break;
                        }
                        group.push(d);
                        chars.next();
                    }
                    out.push_str(&format!("${{{group}}}"));
                }
                Some('g') => {
                    chars.next();
                    if chars.peek() == Some(&'<') {
                        chars.next();
                        let mut name = String::new();
                        loop {
                            match chars.next() {
                                Some('>') => break,
                                Some(c) => name.push(c),
                                None => {
                                    return Err(FilterError::InvalidReplacement {
                                        replacement: replacement.to_string(),
                                        reason: "missing > in group reference",
                                    })
                                }
                            }
                        }
                        out.push_str(&format!("${{{name}}}"));
                    } else {
                        out.push_str("\\g");
                    }
                }
                Some('\\') => {
                    chars.next();
                    out.push('\\');
                }
                Some('n') => {
                    chars.next();
                    out.push('\n');
                }
                Some('t') => {
                    chars.next();
                    out.push('\t');
                }
                Some('r') => {
                    chars.next();
                    out.push('\r');
                }
                _ => out.push('\\'),
            },
            _ => out.push(c),
        }
    }

    Ok(out)
}
