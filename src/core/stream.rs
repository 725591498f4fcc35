//! Lazy, possibly infinite streams with fair interleaving.

use std::ops::{Add, Deref};
use std::rc::Rc;

/// A lazy sequence of values.
///
/// `Mature` holds a realized value, `Immature` holds work that has not been
/// performed yet. Nothing inside an `Immature` node runs until the stream is
/// forced by `take_inf`, `take_inf_all` or iteration.
pub enum Stream<T> {
    Empty,
    Mature(T, Tail<T>),
    Immature(Box<dyn FnOnce() -> Stream<T>>),
}

/// The rest of a stream after a mature element.
///
/// Dropping a tail unlinks the realized chain behind it one node at a time,
/// so long streams are freed without deep recursion.
pub struct Tail<T>(Box<Stream<T>>);

impl<T> Tail<T> {
    pub fn into_stream(mut self) -> Stream<T> {
        std::mem::take(&mut *self.0)
    }
}

impl<T> Deref for Tail<T> {
    type Target = Stream<T>;

    fn deref(&self) -> &Stream<T> {
        &self.0
    }
}

impl<T> Drop for Tail<T> {
    fn drop(&mut self) {
        let mut rest = std::mem::take(&mut *self.0);
        while let Stream::Mature(_, tail) = &mut rest {
            let next = std::mem::take(&mut *tail.0);
            rest = next;
        }
    }
}

impl<T> Stream<T> {
    pub fn empty() -> Self {
        Stream::Empty
    }

    pub fn singleton(x: T) -> Self {
        Stream::cons(x, Stream::Empty)
    }

    pub fn cons(a: T, d: Self) -> Self {
        Stream::Mature(a, Tail(Box::new(d)))
    }

    pub fn suspension(sup: impl 'static + FnOnce() -> Stream<T>) -> Self {
        Stream::Immature(Box::new(sup))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Stream::Empty)
    }

    /// Number of elements, or `None` if the stream still contains unforced work.
    pub fn len(&self) -> Option<usize> {
        let mut n = 0;
        let mut cursor = self;
        loop {
            match cursor {
                Stream::Empty => return Some(n),
                Stream::Mature(_, d) => {
                    n += 1;
                    cursor = &**d;
                }
                Stream::Immature(_) => return None,
            }
        }
    }

    /// Realize at most `n` elements.
    ///
    /// Suspensions are forced only until `n` mature elements are found, so
    /// this terminates on infinite streams as long as they keep producing.
    pub fn take_inf(self, n: usize) -> Stream<T> {
        self.into_iter().take(n).collect()
    }

    /// Realize all elements. Does not return if the stream is infinite.
    pub fn take_inf_all(self) -> Stream<T> {
        self.into_iter().collect()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Split off the realized prefix. The remainder is `Empty` or `Immature`.
    fn split_mature(self) -> (Vec<T>, Stream<T>) {
        let mut heads = Vec::new();
        let mut rest = self;
        while let Stream::Mature(a, d) = rest {
            heads.push(a);
            rest = d.into_stream();
        }
        (heads, rest)
    }
}

impl<T: 'static> Stream<T> {
    /// Wrap an iterator so that each element after the first is produced by
    /// its own suspension.
    pub fn lazy(mut iter: impl 'static + Iterator<Item = T>) -> Self {
        match iter.next() {
            None => Stream::Empty,
            Some(item) => Stream::cons(item, Stream::suspension(move || Stream::lazy(iter))),
        }
    }

    /// Interleaving append.
    ///
    /// When the left stream is suspended the operands swap places on
    /// resumption, so an infinite left stream cannot starve the right one.
    pub fn append_inf(s: Stream<T>, t: Stream<T>) -> Self {
        if t.is_empty() {
            return s;
        }
        let (heads, rest) = s.split_mature();
        let rest = match rest {
            Stream::Immature(sup) => Stream::suspension(move || Stream::append_inf(t, sup())),
            _ => t,
        };
        heads
            .into_iter()
            .rev()
            .fold(rest, |tail, a| Stream::cons(a, tail))
    }

    /// Map every element to a stream and interleave the results.
    pub fn append_map_inf(self, g: Rc<dyn Fn(T) -> Self>) -> Self {
        self.flat_map_rc(g)
    }

    /// Like `append_map_inf`, but the produced streams may have another item type.
    pub fn flat_map<U: 'static>(self, f: impl 'static + Fn(T) -> Stream<U>) -> Stream<U> {
        self.flat_map_rc(Rc::new(f))
    }

    fn flat_map_rc<U: 'static>(self, g: Rc<dyn Fn(T) -> Stream<U>>) -> Stream<U> {
        let (heads, rest) = self.split_mature();
        let mapped: Vec<Stream<U>> = heads.into_iter().map(|a| g(a)).collect();
        let rest = match rest {
            Stream::Immature(sup) => Stream::suspension(move || sup().flat_map_rc(g)),
            _ => Stream::Empty,
        };
        mapped
            .into_iter()
            .rev()
            .fold(rest, |tail, head| Stream::append_inf(head, tail))
    }

    pub fn map<U: 'static>(self, f: impl 'static + Fn(T) -> U) -> Stream<U> {
        self.map_rc(Rc::new(f))
    }

    fn map_rc<U: 'static>(self, f: Rc<dyn Fn(T) -> U>) -> Stream<U> {
        let (heads, rest) = self.split_mature();
        let mapped: Vec<U> = heads.into_iter().map(|a| f(a)).collect();
        let rest = match rest {
            Stream::Immature(sup) => Stream::suspension(move || sup().map_rc(f)),
            _ => Stream::Empty,
        };
        mapped
            .into_iter()
            .rev()
            .fold(rest, |tail, head| Stream::cons(head, tail))
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Stream::Empty
    }
}

impl<T: 'static> Add for Stream<T> {
    type Output = Stream<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Stream::append_inf(self, rhs)
    }
}

impl<T> FromIterator<T> for Stream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(Stream::Empty, |tail, item| Stream::cons(item, tail))
    }
}

impl<T> std::iter::IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = StreamIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        StreamIter(self)
    }
}

impl<T: PartialEq> PartialEq for Stream<T> {
    fn eq(&self, other: &Self) -> bool {
        use Stream::*;
        let (mut x, mut y) = (self, other);
        loop {
            match (x, y) {
                (Empty, Empty) => return true,
                (Mature(a, dx), Mature(b, dy)) if a == b => {
                    x = &**dx;
                    y = &**dy;
                }
                _ => return false,
            }
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Stream::Empty => write!(f, "()"),
            Stream::Immature(_) => write!(f, "(...)"),
            Stream::Mature(x, next) => {
                let mut next = next;
                write!(f, "({:?}", x)?;
                loop {
                    match &**next {
                        Stream::Empty => break,
                        Stream::Mature(x, n) => {
                            write!(f, " {:?}", x)?;
                            next = n;
                        }
                        Stream::Immature(_) => {
                            write!(f, " ...")?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
        }
    }
}

/// Iterator that forces suspensions on demand.
pub struct StreamIter<T>(Stream<T>);

impl<T> Iterator for StreamIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(&mut self.0, Stream::Empty) {
                Stream::Empty => return None,
                Stream::Mature(a, d) => {
                    self.0 = d.into_stream();
                    return Some(a);
                }
                Stream::Immature(sup) => self.0 = sup(),
            }
        }
    }
}
