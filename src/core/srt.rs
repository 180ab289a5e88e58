//! SubRip (`.srt`) caption parser.
//!
//! A file is a sequence of blocks: an optional numeric index line, a timing
//! line (`00:00:01,000 --> 00:00:04,000`), the caption text lines, and a blank
//! separator line. Parsing is lenient the way common players are: a missing
//! trailing blank line, a missing separator before the next `index + timing`
//! pair, `.`, `:` or full-width delimiters inside timestamps, and trailing
//! positional metadata after the end timestamp are all accepted. A blank line
//! only ends a caption when a new block (or the end of input) follows it, so
//! captions may contain blank lines.
use std::time::Duration;

use nom::IResult;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, one_of, space0};
use nom::combinator::{all_consuming, map_res, opt};
use nom::sequence::{delimited, preceded, tuple};
use thiserror::Error;
use tracing::debug;

/// One timed text entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    /// Sequence number, when the block carries one
    pub index: Option<u64>,
    pub start: Duration,
    pub end: Duration,
    /// Caption body; multiple lines are joined with `\n`
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: expected a subtitle index or timing line, found {found:?}")]
    UnexpectedLine { line: usize, found: String },

    #[error("line {line}: expected a timing line after the subtitle index, found {found:?}")]
    ExpectedTiming { line: usize, found: String },

    #[error("line {line}: subtitle index is not followed by a timing line")]
    MissingTiming { line: usize },
}

fn field(i: &str) -> IResult<&str, u32> {
    map_res(digit1, |s: &str| s.parse::<u32>())(i)
}

// Full-width forms show up in files produced by CJK subtitle editors.
fn delimiter(i: &str) -> IResult<&str, char> {
    one_of(",.:，．。：")(i)
}

fn timestamp(i: &str) -> IResult<&str, Duration> {
    let (i, (hours, _, minutes, _, seconds)) =
        tuple((field, delimiter, field, delimiter, field))(i)?;
    let (i, millis) = opt(preceded(delimiter, field))(i)?;

    let secs = (u64::from(hours) * 60 + u64::from(minutes)) * 60 + u64::from(seconds);
    let millis = u64::from(millis.unwrap_or(0));
    Ok((i, Duration::from_secs(secs) + Duration::from_millis(millis)))
}

// Anything after the end timestamp (e.g. `X1:100 X2:200`) is ignored.
fn timing(i: &str) -> IResult<&str, (Duration, Duration)> {
    let (i, start) = preceded(space0, timestamp)(i)?;
    let (i, _) = delimited(space0, tag("-->"), space0)(i)?;
    let (i, end) = timestamp(i)?;
    Ok((i, (start, end)))
}

fn index(i: &str) -> IResult<&str, u64> {
    all_consuming(delimited(
        space0,
        map_res(digit1, |s: &str| s.parse::<u64>()),
        space0,
    ))(i)
}

fn parse_timing(line: &str) -> Option<(Duration, Duration)> {
    timing(line).ok().map(|(_, span)| span)
}

fn parse_index(line: &str) -> Option<u64> {
    index(line).ok().map(|(_, n)| n)
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// An index line directly followed by a timing line opens a new block even
/// without a blank separator.
fn starts_caption(lines: &[&str], pos: usize) -> bool {
    parse_index(lines[pos]).is_some()
        && lines
            .get(pos + 1)
            .is_some_and(|next| parse_timing(next).is_some())
}

/// Whether the blank line at `pos` ends the caption: only when the next
/// non-blank line opens a block (index and timing, or a bare timing line)
/// or nothing but blank lines remain.
fn ends_caption(lines: &[&str], pos: usize) -> bool {
    match (pos..lines.len()).find(|&next| !is_blank(lines[next])) {
        Some(next) => starts_caption(lines, next) || parse_timing(lines[next]).is_some(),
        None => true,
    }
}

/// Parse the full text of an `.srt` file into its captions, in file order.
pub fn parse_captions(input: &str) -> Result<Vec<Caption>, ParseError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let normalized = input.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.lines().collect();

    let mut captions = Vec::new();
    let mut pos = 0;
    while pos < lines.len() {
        if is_blank(lines[pos]) {
            pos += 1;
            continue;
        }

        let index = parse_index(lines[pos]);
        let timing_pos = if index.is_some() { pos + 1 } else { pos };
        let Some(timing_line) = lines.get(timing_pos) else {
            return Err(ParseError::MissingTiming { line: pos + 1 });
        };
        let Some((start, end)) = parse_timing(timing_line) else {
            let found = timing_line.to_string();
            return Err(match index {
                Some(_) => ParseError::ExpectedTiming {
                    line: timing_pos + 1,
                    found,
                },
                None => ParseError::UnexpectedLine {
                    line: timing_pos + 1,
                    found,
                },
            });
        };

        pos = timing_pos + 1;
        let body_start = pos;
        while pos < lines.len() {
            let done = if is_blank(lines[pos]) {
                ends_caption(&lines, pos)
            } else {
                starts_caption(&lines, pos)
            };
            if done {
                break;
            }
            pos += 1;
        }

        captions.push(Caption {
            index,
            start,
            end,
            text: lines[body_start..pos].join("\n"),
        });
    }

    debug!("Parsed {} captions", captions.len());
    Ok(captions)
}
