use std::ops::Deref;

use crate::error::Result;
use crate::value::checked;

/// NBT ByteArray. Bedrock treats the elements as unsigned bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ByteArray {
    data: Vec<u8>,
}

impl ByteArray {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Build from wider integers, failing if any is outside `0..=255`.
    pub fn from_ints<I, T>(ints: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<i128>,
    {
        let data = ints
            .into_iter()
            .map(|v| checked(v, "ByteArray element"))
            .collect::<Result<_>>()?;
        Ok(Self { data })
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl Deref for ByteArray {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// NBT IntArray.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntArray {
    data: Vec<i32>,
}

impl IntArray {
    pub fn new(data: Vec<i32>) -> Self {
        Self { data }
    }

    /// Build from wider integers, failing if any does not fit in an `i32`.
    pub fn from_ints<I, T>(ints: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<i128>,
    {
        let data = ints
            .into_iter()
            .map(|v| checked(v, "IntArray element"))
            .collect::<Result<_>>()?;
        Ok(Self { data })
    }

    pub fn into_inner(self) -> Vec<i32> {
        self.data
    }
}

impl Deref for IntArray {
    type Target = Vec<i32>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// NBT LongArray.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LongArray {
    data: Vec<i64>,
}

impl LongArray {
    pub fn new(data: Vec<i64>) -> Self {
        Self { data }
    }

    /// Build from wider integers, failing if any does not fit in an `i64`.
    pub fn from_ints<I, T>(ints: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<i128>,
    {
        let data = ints
            .into_iter()
            .map(|v| checked(v, "LongArray element"))
            .collect::<Result<_>>()?;
        Ok(Self { data })
    }

    pub fn into_inner(self) -> Vec<i64> {
        self.data
    }
}

impl Deref for LongArray {
    type Target = Vec<i64>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
