//! Word wrapping for multi-line labels

use unicode_linebreak::linebreaks;

const TAB_SIZE: usize = 8;

/// A run of text that is either one word or one stretch of spaces
struct Chunk {
    text: String,
    space: bool,
}

impl Chunk {
    fn len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Wrap `text` into lines of at most `width` chars.
///
/// Tabs expand to the next multiple of 8 columns and other whitespace
/// becomes a space; runs of spaces are kept and count toward the width.
/// Spaces are dropped where a line ends and where a wrapped line starts,
/// but indentation of the first line is kept. Break opportunities follow
/// UAX #14. A word longer than `width` fills the rest of the current line
/// and continues on the next ones. Blank text yields no lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    // Reversed so the next chunk is at the end
    let mut chunks = chunks(&expand_whitespace(text));
    chunks.reverse();

    let mut lines = Vec::new();
    while !chunks.is_empty() {
        let mut line: Vec<Chunk> = Vec::new();
        let mut line_len = 0;

        if !lines.is_empty() && chunks.last().is_some_and(|c| c.space) {
            chunks.pop();
        }

        while let Some(chunk) = chunks.pop() {
            if line_len + chunk.len() <= width {
                line_len += chunk.len();
                line.push(chunk);
            } else {
                chunks.push(chunk);
                break;
            }
        }

        if let Some(chunk) = chunks.pop() {
            if chunk.len() > width {
                let (head, rest) = split_at_char(&chunk.text, width - line_len);
                if !head.is_empty() {
                    line.push(Chunk {
                        text: head.to_string(),
                        space: chunk.space,
                    });
                }
                chunks.push(Chunk {
                    text: rest.to_string(),
                    space: chunk.space,
                });
            } else {
                chunks.push(chunk);
            }
        }

        while line.last().is_some_and(|c| c.space) {
            line.pop();
        }
        if !line.is_empty() {
            lines.push(line.into_iter().map(|c| c.text).collect());
        }
    }
    lines
}

fn expand_whitespace(text: &str) -> String {
    let mut expanded = String::with_capacity(text.len());
    let mut column = 0;
    for c in text.chars() {
        if c == '\t' {
            let stop = (column / TAB_SIZE + 1) * TAB_SIZE;
            expanded.extend(std::iter::repeat(' ').take(stop - column));
            column = stop;
        } else {
            expanded.push(if c.is_whitespace() { ' ' } else { c });
            column += 1;
        }
    }
    expanded
}

/// Words and space runs in order, split at the line break opportunities
fn chunks(text: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut start = 0;
    for (end, _) in linebreaks(text) {
        let segment = &text[start..end];
        start = end;
        let word = segment.trim_end_matches(' ');
        let spaces = &segment[word.len()..];
        if !word.is_empty() {
            chunks.push(Chunk {
                text: word.to_string(),
                space: false,
            });
        }
        if !spaces.is_empty() {
            chunks.push(Chunk {
                text: spaces.to_string(),
                space: true,
            });
        }
    }
    chunks
}

fn split_at_char(text: &str, chars: usize) -> (&str, &str) {
    let index = text.char_indices().nth(chars).map_or(text.len(), |(i, _)| i);
    text.split_at(index)
}
