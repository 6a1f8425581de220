use std::ops::Deref;

use crate::error::{Error, Result};
use crate::{Tag, Value};

/// An NBT list. Every element has the same tag type, which is fixed when the
/// list is built. An empty list always has the element type [`Tag::End`].
///
/// ```
/// # use bednbt::{List, Tag, Value};
/// let list = List::new(vec![Value::Int(1), Value::Int(2)]).unwrap();
/// assert_eq!(list.element_tag(), Tag::Int);
///
/// assert!(List::new(vec![Value::Byte(1), Value::Short(2)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    element: Tag,
    values: Vec<Value>,
}

impl List {
    /// Build a list, failing with a type error if the values do not all share
    /// one tag type or if any of them is an End value.
    pub fn new(values: Vec<Value>) -> Result<Self> {
        let element = match values.first() {
            Some(first) => first.tag(),
            None => return Ok(Self::empty()),
        };

        if element == Tag::End {
            return Err(Error::type_mismatch("list elements can not be End tags"));
        }

        if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| v.tag() != element) {
            return Err(Error::type_mismatch(format!(
                "list of {} can not hold {} at index {}",
                element,
                v.tag(),
                i
            )));
        }

        Ok(Self { element, values })
    }

    pub fn empty() -> Self {
        Self {
            element: Tag::End,
            values: Vec::new(),
        }
    }

    /// Tag type shared by every element.
    pub fn element_tag(&self) -> Tag {
        self.element
    }

    pub fn into_inner(self) -> Vec<Value> {
        self.values
    }
}

impl Default for List {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for List {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
