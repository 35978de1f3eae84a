/// How an expected string is matched against an actual one
///
/// The shape of the expected string picks the strategy, see [`Pattern::classify`].
#[derive(Clone, Debug)]
pub enum Pattern<'s> {
    /// `golden<ext>`: compare with the gold master of the case with extension `ext`
    Golden(&'s str),
    /// `^...$`: full regex match
    Regex(regex::bytes::Regex),
    /// `...text...`: `text` is contained
    Substring(&'s str),
    /// `text...`: `text` is a prefix
    Prefix(&'s str),
    /// `...text`: `text` is a suffix
    Suffix(&'s str),
    /// `=text`: exactly `text`
    Escaped(&'s str),
    /// Anything else: exactly itself
    Literal(&'s str),
}

type Rule = for<'s> fn(&'s str) -> Option<Pattern<'s>>;

/// Classification rules, first match wins
const RULES: [Rule; 6] = [golden, regex, substring, prefix, suffix, escaped];

const ELLIPSIS: &str = "...";

impl<'s> Pattern<'s> {
    /// Classify `want` by its syntactic shape
    ///
    /// A string too short to hold its delimiters and some content is a [`Pattern::Literal`], as is
    /// a `^...$` string that is not a valid regex.
    ///
    /// ```rust
    /// use goldbox::Pattern;
    ///
    /// assert!(matches!(Pattern::classify("...ab..."), Pattern::Substring("ab")));
    /// assert!(matches!(Pattern::classify("golden.json"), Pattern::Golden(".json")));
    /// assert!(matches!(Pattern::classify("..."), Pattern::Literal("...")));
    /// ```
    pub fn classify(want: &'s str) -> Self {
        RULES
            .iter()
            .find_map(|rule| rule(want))
            .unwrap_or(Pattern::Literal(want))
    }

    /// Whether `got` satisfies the pattern
    ///
    /// `got` is compared byte for byte. Returns `None` for [`Pattern::Golden`] which needs the
    /// gold master content.
    pub fn is_match(&self, got: &[u8]) -> Option<bool> {
        let ok = match self {
            Pattern::Golden(_) => return None,
            Pattern::Regex(re) => re.is_match(got),
            Pattern::Substring(s) => contains(got, s.as_bytes()),
            Pattern::Prefix(s) => got.starts_with(s.as_bytes()),
            Pattern::Suffix(s) => got.ends_with(s.as_bytes()),
            Pattern::Escaped(s) | Pattern::Literal(s) => got == s.as_bytes(),
        };
        Some(ok)
    }

    /// Qualifier appended to the field name in messages, e.g. `" prefix"`
    pub fn label(&self) -> String {
        match self {
            Pattern::Golden(ext) => format!(" golden{ext}"),
            Pattern::Regex(_) => " pattern".to_owned(),
            Pattern::Substring(_) => " substring".to_owned(),
            Pattern::Prefix(_) => " prefix".to_owned(),
            Pattern::Suffix(_) => " suffix".to_owned(),
            Pattern::Escaped(_) => " escaped".to_owned(),
            Pattern::Literal(_) => String::new(),
        }
    }
}

/// Extension of the last path element of `name`, including the dot
///
/// Empty when the last element has no dot.
///
/// ```rust
/// assert_eq!(goldbox::extension("out/report.json"), ".json");
/// assert_eq!(goldbox::extension("golden.ext.ext"), ".ext");
/// assert_eq!(goldbox::extension("dir.d/file"), "");
/// ```
pub fn extension(name: &str) -> &str {
    for (i, c) in name.char_indices().rev() {
        if std::path::is_separator(c) {
            break;
        }
        if c == '.' {
            return &name[i..];
        }
    }
    ""
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}

fn golden(want: &str) -> Option<Pattern<'_>> {
    let ext = extension(want);
    (want.strip_prefix("golden") == Some(ext)).then_some(Pattern::Golden(ext))
}

fn regex(want: &str) -> Option<Pattern<'_>> {
    if want.len() > 2 && want.starts_with('^') && want.ends_with('$') {
        // Invalid expressions fall through to the literal match
        regex::bytes::Regex::new(want).ok().map(Pattern::Regex)
    } else {
        None
    }
}

fn substring(want: &str) -> Option<Pattern<'_>> {
    if want.len() > 2 * ELLIPSIS.len() {
        want.strip_prefix(ELLIPSIS)?
            .strip_suffix(ELLIPSIS)
            .map(Pattern::Substring)
    } else {
        None
    }
}

fn prefix(want: &str) -> Option<Pattern<'_>> {
    if want.len() > ELLIPSIS.len() {
        want.strip_suffix(ELLIPSIS).map(Pattern::Prefix)
    } else {
        None
    }
}

fn suffix(want: &str) -> Option<Pattern<'_>> {
    if want.len() > ELLIPSIS.len() {
        want.strip_prefix(ELLIPSIS).map(Pattern::Suffix)
    } else {
        None
    }
}

fn escaped(want: &str) -> Option<Pattern<'_>> {
    if want.len() > 1 {
        want.strip_prefix('=').map(Pattern::Escaped)
    } else {
        None
    }
}
