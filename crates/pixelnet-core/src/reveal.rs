//! Typewriter-style text reveal.
//!
//! Each tick uncovers one visible character. Newlines never cost a tick of
//! their own: they are emitted as line breaks together with the character
//! that follows them, so a text takes exactly as many ticks as it has
//! non-newline characters.

use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    Char(char),
    LineBreak,
}

pub type TickOutput = SmallVec<[Segment; 2]>;

#[derive(Clone, Debug)]
pub struct TextReveal {
    chars: Vec<char>,
    cursor: usize,
}

impl TextReveal {
    /// Leading and trailing whitespace of `source` is dropped.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.trim().chars().collect(),
            cursor: 0,
        }
    }

    /// Terminal state: every character has been uncovered.
    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.cursor >= self.chars.len()
    }

    /// Ticks left before the reveal completes.
    pub fn ticks_remaining(&self) -> usize {
        self.chars[self.cursor.min(self.chars.len())..]
            .iter()
            .filter(|c| **c != '\n')
            .count()
    }

    /// Uncover the next visible character, preceded by any pending line breaks.
    /// Returns nothing once revealed.
    pub fn tick(&mut self) -> TickOutput {
        let mut out = TickOutput::new();
        while let Some(&c) = self.chars.get(self.cursor) {
            self.cursor += 1;
            if c == '\n' {
                out.push(Segment::LineBreak);
            } else {
                out.push(Segment::Char(c));
                break;
            }
        }
        out
    }

    /// Text uncovered so far, line breaks as `'\n'`.
    pub fn visible(&self) -> String {
        self.chars[..self.cursor.min(self.chars.len())].iter().collect()
    }

    pub fn source_len(&self) -> usize {
        self.chars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_newline_rides_with_first_char() {
        let mut r = TextReveal::new("x\n\ny");
        assert_eq!(r.tick().as_slice(), &[Segment::Char('x')]);
        assert_eq!(
            r.tick().as_slice(),
            &[Segment::LineBreak, Segment::LineBreak, Segment::Char('y')]
        );
        assert!(r.is_revealed());
        assert!(r.tick().is_empty());
    }

    #[test]
    fn whitespace_only_source_is_already_revealed() {
        let r = TextReveal::new("  \n ");
        assert!(r.is_revealed());
        assert_eq!(r.ticks_remaining(), 0);
    }
}
