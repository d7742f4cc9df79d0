use std::fmt;

/// An ordered list of integers, the decoded form of a delimited list field.
///
/// Order is significant and duplicates are allowed.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct IntegerList(Vec<i64>);

impl IntegerList {
    pub fn new(numbers: Vec<i64>) -> Self {
        Self(numbers)
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.0.iter()
    }

    pub fn push(&mut self, number: i64) {
        self.0.push(number);
    }

    pub fn into_vec(self) -> Vec<i64> {
        self.0
    }
}

impl From<Vec<i64>> for IntegerList {
    fn from(numbers: Vec<i64>) -> Self {
        Self(numbers)
    }
}

impl From<IntegerList> for Vec<i64> {
    fn from(list: IntegerList) -> Self {
        list.0
    }
}

impl FromIterator<i64> for IntegerList {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a IntegerList {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for IntegerList {
    type Item = i64;
    type IntoIter = std::vec::IntoIter<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl PartialEq<Vec<i64>> for IntegerList {
    fn eq(&self, other: &Vec<i64>) -> bool {
        &self.0 == other
    }
}

impl PartialEq<[i64]> for IntegerList {
    fn eq(&self, other: &[i64]) -> bool {
        self.0 == *other
    }
}

impl<const N: usize> PartialEq<[i64; N]> for IntegerList {
    fn eq(&self, other: &[i64; N]) -> bool {
        self.0 == *other
    }
}

/// Renders as `[1, 2, 3]`.
impl fmt::Display for IntegerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{n}")?;
        }
        f.write_str("]")
    }
}

/// Renders as `IntegerList(1, 2, 3)`.
impl fmt::Debug for IntegerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IntegerList(")?;
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{n}")?;
        }
        f.write_str(")")
    }
}

impl serde::Serialize for IntegerList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for IntegerList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<i64>::deserialize(deserializer).map(Self)
    }
}
