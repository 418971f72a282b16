//! Key path tracking for merge diagnostics.

use std::fmt;

#[derive(Clone, Debug)]
enum Segment {
    Key(String),
    Index(usize),
}

/// Location inside a nested value, rendered as `a.b[2].c`.
#[derive(Clone, Debug, Default)]
pub(super) struct KeyPath {
    segments: Vec<Segment>,
}

impl KeyPath {
    pub(super) fn push_key(&mut self, key: &str) {
        self.segments.push(Segment::Key(key.to_owned()));
    }

    pub(super) fn push_index(&mut self, index: usize) {
        self.segments.push(Segment::Index(index));
    }

    pub(super) fn pop(&mut self) {
        self.segments.pop();
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        for (position, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if position == 0 => f.write_str(key)?,
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
