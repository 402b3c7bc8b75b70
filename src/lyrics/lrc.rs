use thiserror::Error;
use tracing::warn;

/// A single timed lyric line extracted from an LRC document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricLine {
    /// Playback offset of the line, in milliseconds.
    pub time_ms: u64,
    /// Lyric text with the timestamp tag stripped and whitespace trimmed.
    pub text: String,
}

/// Errors raised while reading LRC timestamp tags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LrcError {
    /// The tag looked like `[..:..]` but its numeric groups were not valid.
    #[error("malformed LRC timestamp `{0}`: expected [mm:ss] or [mm:ss.fff]")]
    MalformedTimestamp(String),
}

/// Split a leading `[...]` tag from a line, returning the tag interior and
/// the remainder of the line. Leading whitespace before the tag is ignored.
fn leading_tag(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim_start();
    let rest = trimmed.strip_prefix('[')?;
    let end = rest.find(']')?;
    Some((&rest[..end], &rest[end + 1..]))
}

fn parse_group(tag: &str, group: &str) -> Result<u64, LrcError> {
    if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LrcError::MalformedTimestamp(tag.to_string()));
    }
    group
        .parse::<u64>()
        .map_err(|_| LrcError::MalformedTimestamp(tag.to_string()))
}

/// Parse a `[mm:ss]` or `[mm:ss.fff]` tag into a millisecond offset.
///
/// The fractional part, when present, is right-padded with zeros (or
/// truncated) to exactly three digits before being read as milliseconds.
pub fn parse_timestamp(tag: &str) -> Result<u64, LrcError> {
    let inner = tag
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .ok_or_else(|| LrcError::MalformedTimestamp(tag.to_string()))?;

    parse_timestamp_inner(tag, inner)
}

fn parse_timestamp_inner(tag: &str, inner: &str) -> Result<u64, LrcError> {
    let (minutes, seconds) = inner
        .split_once(':')
        .ok_or_else(|| LrcError::MalformedTimestamp(tag.to_string()))?;

    let (seconds, fraction) = match seconds.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (seconds, None),
    };

    let minutes = parse_group(tag, minutes)?;
    let seconds = parse_group(tag, seconds)?;
    let millis = match fraction {
        Some(fraction) => {
            // Only the first three digits carry millisecond weight, so the
            // fraction is validated as digits but never parsed whole.
            if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                return Err(LrcError::MalformedTimestamp(tag.to_string()));
            }
            let mut digits = String::with_capacity(3);
            digits.extend(fraction.chars().take(3));
            while digits.len() < 3 {
                digits.push('0');
            }
            parse_group(tag, &digits)?
        }
        None => 0,
    };

    minutes
        .checked_mul(60_000)
        .and_then(|ms| ms.checked_add(seconds.checked_mul(1_000)?))
        .and_then(|ms| ms.checked_add(millis))
        .ok_or_else(|| LrcError::MalformedTimestamp(tag.to_string()))
}

/// Render a millisecond offset as a canonical `[mm:ss.fff]` tag.
pub fn format_timestamp(time_ms: u64) -> String {
    let minutes = time_ms / 60_000;
    let seconds = (time_ms % 60_000) / 1_000;
    let millis = time_ms % 1_000;
    format!("[{minutes:02}:{seconds:02}.{millis:03}]")
}

/// Shift a single timestamp tag by a signed millisecond delta.
///
/// Offsets never go negative: a delta larger than the timestamp clamps the
/// result at `[00:00.000]`.
pub fn adjust_timestamp(tag: &str, delta_ms: i64) -> Result<String, LrcError> {
    let time_ms = parse_timestamp(tag)?;
    let adjusted = (time_ms as i64).saturating_add(delta_ms).max(0) as u64;
    Ok(format_timestamp(adjusted))
}

/// Shift the leading timestamp of every line in an LRC document.
///
/// Lines without a parsable leading tag (plain text, metadata tags, malformed
/// groups) pass through untouched.
pub fn adjust_lrc(content: &str, delta_ms: i64) -> String {
    content
        .split('\n')
        .map(|line| {
            let Some((inner, rest)) = leading_tag(line) else {
                return line.to_string();
            };
            let tag = format!("[{inner}]");
            match adjust_timestamp(&tag, delta_ms) {
                Ok(adjusted) => format!("{adjusted}{rest}"),
                Err(_) => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse an LRC document into timed lines, in input order.
///
/// Lines with no leading `[..:..]` tag are skipped and do not shift the
/// indices of later entries. A tag with malformed numeric groups does not
/// abort the parse: the line is logged and kept as a zero-offset entry
/// carrying the raw text, so callers still see it.
pub fn parse_lrc(content: &str) -> Vec<LyricLine> {
    let mut lines = Vec::new();

    for raw in content.lines() {
        let Some((inner, rest)) = leading_tag(raw) else {
            continue;
        };
        if !inner.contains(':') {
            // Metadata or section tags such as `[Chorus]`.
            continue;
        }

        let tag = format!("[{inner}]");
        match parse_timestamp_inner(&tag, inner) {
            Ok(time_ms) => lines.push(LyricLine {
                time_ms,
                text: rest.trim().to_string(),
            }),
            Err(err) => {
                warn!(line = raw, error = %err, "keeping malformed LRC line verbatim");
                lines.push(LyricLine {
                    time_ms: 0,
                    text: raw.trim().to_string(),
                });
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_fractional_tags() {
        assert_eq!(parse_timestamp("[00:05]").unwrap(), 5_000);
        assert_eq!(parse_timestamp("[01:23.45]").unwrap(), 83_450);
        assert_eq!(parse_timestamp("[01:23.4]").unwrap(), 83_400);
        assert_eq!(parse_timestamp("[01:23.4567]").unwrap(), 83_456);
        assert_eq!(parse_timestamp("[10:00.000]").unwrap(), 600_000);
    }

    #[test]
    fn rejects_malformed_groups() {
        for tag in ["[aa:05]", "[00:xx]", "[00:05.ab]", "[:05]", "[00:]", "[0005]"] {
            assert!(matches!(
                parse_timestamp(tag),
                Err(LrcError::MalformedTimestamp(_))
            ));
        }
    }

    #[test]
    fn rejects_offsets_that_overflow_milliseconds() {
        // Parses as u64 but cannot be expressed in milliseconds.
        assert!(matches!(
            parse_timestamp("[10000000000000000000:00]"),
            Err(LrcError::MalformedTimestamp(_))
        ));
        assert!(matches!(
            parse_timestamp("[00:18446744073709551615]"),
            Err(LrcError::MalformedTimestamp(_))
        ));

        let lines = parse_lrc("[10000000000000000000:00]hello world");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].time_ms, 0);
        assert_eq!(lines[0].text, "[10000000000000000000:00]hello world");
    }

    #[test]
    fn long_fractions_truncate_instead_of_overflowing() {
        assert_eq!(
            parse_timestamp("[00:01.123456789012345678901]").unwrap(),
            1_123
        );
    }

    #[test]
    fn format_then_parse_round_trips() {
        for ms in [0, 999, 1_000, 59_999, 83_456, 600_000, 3_599_999] {
            let tag = format_timestamp(ms);
            assert_eq!(parse_timestamp(&tag).unwrap(), ms, "tag {tag}");
        }
    }

    #[test]
    fn adjust_is_reversible_above_zero() {
        let shifted = adjust_timestamp("[01:23.450]", 1_500).unwrap();
        assert_eq!(shifted, "[01:24.950]");
        let restored = adjust_timestamp(&shifted, -1_500).unwrap();
        assert_eq!(restored, "[01:23.450]");
    }

    #[test]
    fn adjust_clamps_at_zero() {
        assert_eq!(adjust_timestamp("[00:01.000]", -5_000).unwrap(), "[00:00.000]");
    }

    #[test]
    fn adjust_lrc_shifts_only_parsable_tags() {
        let content = "[00:01.000]one\nplain text\n[Chorus]\n[00:02.000]two";
        let shifted = adjust_lrc(content, 500);
        assert_eq!(
            shifted,
            "[00:01.500]one\nplain text\n[Chorus]\n[00:02.500]two"
        );
    }

    #[test]
    fn parse_lrc_keeps_input_order_and_skips_untagged_lines() {
        let content = "title line\n[00:10]second\n[00:05] first \n\n[Verse]\n[00:20]third";
        let lines = parse_lrc(content);
        assert_eq!(
            lines,
            vec![
                LyricLine {
                    time_ms: 10_000,
                    text: "second".into()
                },
                LyricLine {
                    time_ms: 5_000,
                    text: "first".into()
                },
                LyricLine {
                    time_ms: 20_000,
                    text: "third".into()
                },
            ]
        );
    }

    #[test]
    fn parse_lrc_keeps_malformed_lines_verbatim() {
        let lines = parse_lrc("[xx:05]ghost\n[00:05]real");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].time_ms, 0);
        assert_eq!(lines[0].text, "[xx:05]ghost");
        assert_eq!(lines[1].text, "real");
    }
}
