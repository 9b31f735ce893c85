use std::fmt::Write;
use std::hash::Hash;

use crate::base;

/// Writes `Bag(a[1], b[2])`.
pub(crate) fn write_compact<'a, V, W>(
    w: &mut W,
    counts: impl IntoIterator<Item = (&'a V, usize)>,
) -> std::fmt::Result
where
    V: std::fmt::Display + 'a,
    W: Write + ?Sized,
{
    w.write_str("Bag(")?;
    for (i, (item, n)) in counts.into_iter().enumerate() {
        if i > 0 {
            w.write_str(", ")?;
        }
        write!(w, "{}[{}]", item, n)?;
    }
    w.write_str(")")
}

/// Writes `Bag(["a", "b", "b"])`.
pub(crate) fn write_verbose<'a, V, W>(
    w: &mut W,
    counts: impl IntoIterator<Item = (&'a V, usize)>,
) -> std::fmt::Result
where
    V: std::fmt::Debug + 'a,
    W: Write + ?Sized,
{
    w.write_str("Bag([")?;
    let copies = counts
        .into_iter()
        .flat_map(|(item, n)| std::iter::repeat_n(item, n));
    for (i, item) in copies.enumerate() {
        if i > 0 {
            w.write_str(", ")?;
        }
        write!(w, "{:?}", item)?;
    }
    w.write_str("])")
}

/// Rendering options for a bag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Printer {
    pub style: base::Style,

    /// Write distinct items in ascending order rather than storage order.
    pub sorted: bool,
}

impl Printer {
    pub fn with_style(self, style: base::Style) -> Self {
        Self { style, ..self }
    }

    pub fn with_sorted(self) -> Self {
        Self {
            sorted: true,
            ..self
        }
    }

    /// `V: Ord` is required even when unsorted, since `sorted` is chosen at
    /// runtime.
    pub fn print<V>(&self, bag: &base::Bag<V>) -> Result<String, serde_json::Error>
    where
        V: Eq + Hash + Ord + std::fmt::Display + std::fmt::Debug + serde::Serialize,
    {
        let counts = match self.sorted {
            true => bag.sorted_counts(),
            false => bag.counts().collect(),
        };
        let mut s = String::new();
        match self.style {
            base::Style::Compact => {
                write_compact(&mut s, counts).expect("writing to a String should not fail")
            }
            base::Style::Verbose => {
                write_verbose(&mut s, counts).expect("writing to a String should not fail")
            }
            base::Style::Json => {
                s = serde_json::to_string(&counts.into_iter().collect::<JsonCounts<_>>())?
            }
        }
        Ok(s)
    }
}

/// Map that serializes entries in the order they were collected.
struct JsonCounts<'a, V>(Vec<(&'a V, usize)>);

impl<'a, V> FromIterator<(&'a V, usize)> for JsonCounts<'a, V> {
    fn from_iter<T: IntoIterator<Item = (&'a V, usize)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<V: serde::Serialize> serde::Serialize for JsonCounts<'_, V> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, n)| (k, n)))
    }
}
