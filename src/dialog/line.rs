/*! Line grammar

A dialog line is a turn number, a single space, the utterance and optionally a tab followed by the answer:

```text
3 what genre is Jaws?\tThriller,Adventure
```

Only the beginning of the line has to match: anything after a second tab is ignored.
!*/
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LINE: Regex = Regex::new(r"^([0-9]+) ([^\t]+)(?:\t([^\t]*))?")
        .expect("line grammar is a valid regex");
}

/// Fields extracted from a single line, borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub utterance_id: i32,
    pub text: &'a str,
    /// Raw answer field, `None` when there is no tab.
    pub answer: Option<&'a str>,
}

/// Parse a line (without its trailing newline).
///
/// On failure, returns a short human readable reason.
pub fn parse_line(line: &str) -> Result<Line<'_>, String> {
    let caps = LINE.captures(line).ok_or_else(|| mismatch_reason(line))?;

    // groups 1 and 2 are mandatory when the regex matched.
    let (prefix, text) = match (caps.get(1), caps.get(2)) {
        (Some(p), Some(t)) => (p.as_str(), t.as_str()),
        _ => return Err(mismatch_reason(line)),
    };

    let utterance_id = prefix
        .parse::<i32>()
        .map_err(|_| format!("turn number {} is out of range", prefix))?;

    Ok(Line {
        utterance_id,
        text,
        answer: caps.get(3).map(|m| m.as_str()),
    })
}

fn mismatch_reason(line: &str) -> String {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        "line does not start with a turn number".to_string()
    } else if !rest.starts_with(' ') {
        "expected a single space after the turn number".to_string()
    } else {
        "missing utterance text".to_string()
    }
}
