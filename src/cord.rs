// lazydata - Cord: a concatenation tree specialized to text
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! [`Chain`](crate::Chain)'s design specialized to character and string
//! leaves. Concatenation and append/prepend are O(1) tree nodes; the text is
//! produced only at materialization time by the same explicit-stack walk,
//! written densely into the output (a `String` pre-sized from the stored
//! byte length, or straight into a formatter via `Display`).
//!
//! `len` counts bytes, matching `str::len`, so it can size the output buffer
//! exactly. There are no failure modes; every operation is total.

use std::fmt::{self, Write};
use std::rc::Rc;

/// A persistent string built from O(1) concatenations.
#[derive(Clone)]
pub struct Cord {
    repr: Rep,
    length: usize,
    depth: usize,
}

#[derive(Clone)]
enum Rep {
    Char(char),
    Str(Rc<str>),
    Concat(Rc<Rep>, Rc<Rep>),
}

impl Cord {
    /// The empty cord.
    pub fn empty() -> Self {
        Cord {
            repr: Rep::Str(Rc::from("")),
            length: 0,
            depth: 1,
        }
    }

    /// A one-character cord.
    pub fn of_char(value: char) -> Self {
        Cord {
            repr: Rep::Char(value),
            length: value.len_utf8(),
            depth: 1,
        }
    }

    /// A cord sharing one string leaf.
    pub fn of_str(value: &str) -> Self {
        Cord {
            repr: Rep::Str(Rc::from(value)),
            length: value.len(),
            depth: 1,
        }
    }

    /// Length in bytes (as `str::len`). O(1).
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Nesting bound used to size the flattening stack (white-box view).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Concatenate two cords. O(1).
    pub fn concat(&self, other: &Cord) -> Cord {
        Cord {
            repr: Rep::Concat(Rc::new(self.repr.clone()), Rc::new(other.repr.clone())),
            length: self.length + other.length,
            depth: usize::max(self.depth + 1, other.depth),
        }
    }

    /// Append a string leaf. O(1) apart from copying `s` into the leaf.
    pub fn append(&self, s: &str) -> Cord {
        if s.is_empty() {
            return self.clone();
        }
        Cord {
            repr: Rep::Concat(Rc::new(self.repr.clone()), Rc::new(Rep::Str(Rc::from(s)))),
            length: self.length + s.len(),
            depth: self.depth + 1,
        }
    }

    /// Prepend a string leaf. O(1) apart from copying `s` into the leaf.
    pub fn prepend(&self, s: &str) -> Cord {
        if s.is_empty() {
            return self.clone();
        }
        Cord {
            repr: Rep::Concat(Rc::new(Rep::Str(Rc::from(s))), Rc::new(self.repr.clone())),
            length: self.length + s.len(),
            depth: self.depth + 1,
        }
    }

    /// Append a single character. O(1).
    pub fn push(&self, value: char) -> Cord {
        Cord {
            repr: Rep::Concat(Rc::new(self.repr.clone()), Rc::new(Rep::Char(value))),
            length: self.length + value.len_utf8(),
            depth: self.depth + 1,
        }
    }

    /// Join cords with a separator, skipping it while the accumulator is
    /// still empty.
    pub fn join<'a, I>(sep: &str, items: I) -> Cord
    where
        I: IntoIterator<Item = &'a Cord>,
    {
        let mut acc = Cord::empty();
        for item in items {
            if acc.is_empty() {
                acc = item.clone();
            } else {
                acc = acc.append(sep).concat(item);
            }
        }
        acc
    }

    /// Flatten into a `String` allocated once from the stored byte length.
    pub fn flatten(&self) -> String {
        let mut out = String::with_capacity(self.length);
        self.write_into(&mut out)
            .expect("writing into a String cannot fail");
        out
    }

    /// The explicit-stack flattening walk: descend left spines, stack
    /// pending rights, emit leaves in order. Never recurses, so one-sided
    /// trees of any depth are safe.
    fn write_into<W: Write>(&self, out: &mut W) -> fmt::Result {
        let mut rights: Vec<&Rep> = Vec::with_capacity(self.depth);
        let mut current = Some(&self.repr);
        while let Some(rep) = current {
            match rep {
                Rep::Char(value) => {
                    out.write_char(*value)?;
                    current = rights.pop();
                }
                Rep::Str(value) => {
                    out.write_str(value)?;
                    current = rights.pop();
                }
                Rep::Concat(left, right) => {
                    rights.push(right.as_ref());
                    current = Some(left.as_ref());
                }
            }
        }
        Ok(())
    }
}

impl Default for Cord {
    fn default() -> Self {
        Cord::empty()
    }
}

impl std::ops::Add for &Cord {
    type Output = Cord;

    fn add(self, other: &Cord) -> Cord {
        self.concat(other)
    }
}

impl From<&str> for Cord {
    fn from(value: &str) -> Self {
        Cord::of_str(value)
    }
}

impl From<char> for Cord {
    fn from(value: char) -> Self {
        Cord::of_char(value)
    }
}

impl fmt::Display for Cord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_into(f)
    }
}

impl fmt::Debug for Cord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cord({:?})", self.flatten())
    }
}

/// Equality is by flattened text, not tree shape.
impl PartialEq for Cord {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.flatten() == other.flatten()
    }
}

impl Eq for Cord {}
