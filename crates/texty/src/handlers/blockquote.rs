//! Character-level re-segmentation of quoted content.
//!
//! Quote formatting is a block attribute, so every visual line of a quote
//! needs its own terminating newline. Inline runs from the formatter may
//! straddle line breaks; they are exploded into characters, split on `'\n'`
//! and regrouped per line.

use texty_core::{Attributes, Op};

/// A character paired with the attributes of the run it came from
#[derive(Debug, Clone, Copy)]
struct CharInfo<'a> {
    ch: char,
    attributes: &'a Attributes,
}

/// Turn formatter output into quoted lines.
///
/// Each line is trimmed; lines left empty are dropped. Every surviving line
/// is followed by a `{blockquote: true}` newline.
pub(super) fn quote_lines(ops: &[Op]) -> Vec<Op> {
    let plain = Attributes::default();
    let chars: Vec<CharInfo> = ops
        .iter()
        .flat_map(|op| {
            let attributes = op.attributes.as_ref().unwrap_or(&plain);
            op.text.chars().map(move |ch| CharInfo { ch, attributes })
        })
        .collect();

    let mut quoted = Vec::new();
    for line in chars.split(|info| info.ch == '\n') {
        let line = trim(line);
        if line.is_empty() {
            continue;
        }
        quoted.extend(regroup(line));
        quoted.push(Op::block_newline(Attributes::blockquote()));
    }
    quoted
}

fn trim<'a, 'b>(line: &'b [CharInfo<'a>]) -> &'b [CharInfo<'a>] {
    let Some(start) = line.iter().position(|info| !info.ch.is_whitespace()) else {
        return &[];
    };
    let end = line
        .iter()
        .rposition(|info| !info.ch.is_whitespace())
        .map_or(start, |last| last + 1);
    &line[start..end]
}

/// Merge consecutive characters sharing the same attributes into runs
fn regroup(line: &[CharInfo]) -> Vec<Op> {
    line.chunk_by(|a, b| a.attributes == b.attributes)
        .map(|run| {
            let text: String = run.iter().map(|info| info.ch).collect();
            Op::insert_with(text, run[0].attributes.clone())
        })
        .collect()
}
