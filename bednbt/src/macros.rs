/// Produce a [`Compound`][`crate::Compound`] from `"name" => value` pairs.
/// Each value goes through `Value::from`, so plain Rust numbers, strings,
/// bools and already built lists or compounds can be used directly.
///
/// The result is a `Result` since the compound is validated as it is built:
///
/// ```rust
/// use bednbt::{compound, list, Value};
///
/// # fn main() -> bednbt::error::Result<()> {
/// let c = compound! {
///     "key1": "value1",
///     "key2": 42,
///     "key3": list![4, 2]?,
///     "nested": compound! { "flag": true }?,
/// }?;
/// assert_eq!(c["key2"], Value::Int(42));
///
/// assert!(compound! { "a": 1, "a": 2 }.is_err());
/// # Ok(())
/// # }
/// ```
///
/// Unlike SNBT, names need quoted strings (or any `Into<String>` expression).
/// `=>` may be used in place of `:` between a name and its value.
#[macro_export]
macro_rules! compound {
    () => {
        ::std::result::Result::<$crate::Compound, $crate::error::Error>::Ok(
            $crate::Compound::new(),
        )
    };

    ($($key:literal : $value:expr),+ $(,)?) => {
        $crate::Compound::from_entries(::std::vec![
            $(($key, $crate::Value::from($value))),+
        ])
    };

    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Compound::from_entries(::std::vec![
            $(($key, $crate::Value::from($value))),+
        ])
    };
}

/// Produce a [`List`][`crate::List`] from values. Fails if the values are
/// not all of one tag type.
///
/// ```rust
/// use bednbt::{list, Tag};
///
/// assert_eq!(list![1_i8, 2_i8, 3_i8].unwrap().element_tag(), Tag::Byte);
/// assert!(list![1_i8, 2_i16].is_err());
/// assert_eq!(list![].unwrap().element_tag(), Tag::End);
/// ```
#[macro_export]
macro_rules! list {
    () => {
        ::std::result::Result::<$crate::List, $crate::error::Error>::Ok($crate::List::empty())
    };

    ($($value:expr),+ $(,)?) => {
        $crate::List::new(::std::vec![$($crate::Value::from($value)),+])
    };
}
