use crate::interpreter::value::core::{Object, Range};

/// A single-pass cursor over a list, a string or a range.
///
/// Iterators cannot be restarted; ask the source object for a new one
/// instead. Callers check [`IteratorObject::has_next`] before advancing, or
/// use the [`Iterator`] implementation, which returns `None` once the
/// cursor is exhausted.
#[derive(Debug, Clone)]
pub enum IteratorObject {
    /// Walks the elements of a list.
    List(ListIterator),
    /// Walks the characters of a string.
    String(StringIterator),
    /// Walks the values of a range.
    Range(RangeIterator),
}

impl IteratorObject {
    /// Returns `true` while another value is available.
    #[must_use]
    pub fn has_next(&self) -> bool {
        match self {
            Self::List(it) => it.has_next(),
            Self::String(it) => it.has_next(),
            Self::Range(it) => it.has_next(),
        }
    }
}

impl Iterator for IteratorObject {
    type Item = Object;

    fn next(&mut self) -> Option<Object> {
        match self {
            Self::List(it) => it.next(),
            Self::String(it) => it.next(),
            Self::Range(it) => it.next(),
        }
    }
}

/// Cursor over the elements a list held when the iterator was created.
///
/// The elements themselves are shared, not copied, but appending to or
/// replacing slots of the list afterwards does not affect the iteration.
#[derive(Debug, Clone)]
pub struct ListIterator {
    items: Vec<Object>,
    index: usize,
}

impl ListIterator {
    #[must_use]
    pub fn new(items: &[Object]) -> Self {
        Self { items: items.to_vec(),
               index: 0, }
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.index < self.items.len()
    }
}

impl Iterator for ListIterator {
    type Item = Object;

    fn next(&mut self) -> Option<Object> {
        let item = self.items.get(self.index)?.clone();
        self.index += 1;
        Some(item)
    }
}

/// Cursor over the characters of a string, each yielded as a new
/// one-character string.
#[derive(Debug, Clone)]
pub struct StringIterator {
    chars: Vec<char>,
    index: usize,
}

impl StringIterator {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(),
               index: 0, }
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.index < self.chars.len()
    }
}

impl Iterator for StringIterator {
    type Item = Object;

    fn next(&mut self) -> Option<Object> {
        let c = *self.chars.get(self.index)?;
        self.index += 1;
        Some(Object::from(c.to_string()))
    }
}

/// Cursor over the values of a range.
///
/// Counts forward while below `stop` when `step` is positive, and backward
/// while above `stop` otherwise.
///
/// # Example
/// ```
/// use pylite::interpreter::value::{core::Range, iterator::RangeIterator};
///
/// let down = RangeIterator::new(Range { start: 5.0,
///                                       stop:  0.0,
///                                       step:  -2.0, });
/// let values = down.map(|o| o.to_string()).collect::<Vec<_>>();
///
/// assert_eq!(values, ["5", "3", "1"]);
/// ```
#[derive(Debug, Clone)]
pub struct RangeIterator {
    current: f64,
    stop:    f64,
    step:    f64,
    forward: bool,
}

impl RangeIterator {
    #[must_use]
    pub fn new(range: Range) -> Self {
        Self { current: range.start,
               stop:    range.stop,
               step:    range.step,
               forward: range.step > 0.0, }
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        if self.forward { self.current < self.stop } else { self.current > self.stop }
    }
}

impl Iterator for RangeIterator {
    type Item = Object;

    fn next(&mut self) -> Option<Object> {
        if !self.has_next() {
            return None;
        }
        let value = self.current;
        self.current += self.step;
        Some(Object::Number(value))
    }
}
