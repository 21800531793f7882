use crate::args::ParsedArgs;
use crate::error::InvalidArguments;
use std::ffi::OsString;
use std::num::IntErrorKind;
use std::path::PathBuf;
use std::str::FromStr;

/// What a [`ValueRef`] points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    /// An option, by its full name
    Name(&'a str),
    /// A positional argument, zero-based
    Index(usize),
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(name: &'a str) -> Self {
        Key::Name(name)
    }
}

impl<'a> From<&'a String> for Key<'a> {
    fn from(name: &'a String) -> Self {
        Key::Name(name)
    }
}

impl From<usize> for Key<'_> {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

/// A lazily converted view of one option or positional argument.
///
/// Nothing is looked up until one of the accessors is called, and the view borrows the
/// parser, so it can't outlive the parse it was taken from.
#[derive(Debug, Clone, Copy)]
pub struct ValueRef<'a> {
    args: &'a ParsedArgs,
    key: Key<'a>,
}

impl<'a> ValueRef<'a> {
    pub(crate) fn new(args: &'a ParsedArgs, key: Key<'a>) -> Self {
        ValueRef { args, key }
    }

    pub fn key(&self) -> Key<'a> {
        self.key
    }

    /// Whether the option was given, or the position is in bounds
    pub fn exists(&self) -> bool {
        match self.key {
            Key::Name(name) => self.args.options.contains_key(name),
            Key::Index(index) => index < self.args.arguments.len(),
        }
    }

    /// Returns the raw text. Options that take no value read as `""`.
    pub fn as_str(&self) -> Result<&'a str, InvalidArguments> {
        let args = self.args;
        match self.key {
            Key::Name(name) => args
                .options
                .get(name)
                .map(String::as_str)
                .ok_or_else(|| InvalidArguments::MissingOption(name.to_string())),
            Key::Index(index) => args
                .arguments
                .get(index)
                .map(String::as_str)
                .ok_or(InvalidArguments::MissingArgument(index)),
        }
    }

    /// Converts the value to `T`, failing if it is absent or malformed
    pub fn value<T: FromValue>(&self) -> Result<T, InvalidArguments> {
        T::from_value(self)
    }

    /// Like [`value`](Self::value), but an absent value yields `default`.
    ///
    /// A value that is present but can't be converted is still an error.
    pub fn value_or<T: FromValue>(&self, default: T) -> Result<T, InvalidArguments> {
        if self.exists() {
            self.value()
        } else {
            Ok(default)
        }
    }
}

impl ValueRef<'_> {
    /// Compares after converting to `T`. A value that is absent or can't be converted is
    /// never equal.
    pub fn eq_value<T: FromValue + PartialEq>(&self, other: T) -> bool {
        self.value::<T>().is_ok_and(|v| v == other)
    }
}

impl PartialEq<str> for ValueRef<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str().is_ok_and(|v| v == other)
    }
}

impl PartialEq<&str> for ValueRef<'_> {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// Types a [`ValueRef`] can be converted into
pub trait FromValue: Sized {
    fn from_value(value: &ValueRef<'_>) -> Result<Self, InvalidArguments>;
}

impl FromValue for String {
    fn from_value(value: &ValueRef<'_>) -> Result<Self, InvalidArguments> {
        value.as_str().map(str::to_string)
    }
}

impl FromValue for PathBuf {
    fn from_value(value: &ValueRef<'_>) -> Result<Self, InvalidArguments> {
        value.as_str().map(PathBuf::from)
    }
}

impl FromValue for OsString {
    fn from_value(value: &ValueRef<'_>) -> Result<Self, InvalidArguments> {
        value.as_str().map(OsString::from)
    }
}

/// Presence test. Never fails.
impl FromValue for bool {
    fn from_value(value: &ValueRef<'_>) -> Result<Self, InvalidArguments> {
        Ok(value.exists())
    }
}

macro_rules! from_value_for_integers {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromValue for $t {
                fn from_value(value: &ValueRef<'_>) -> Result<Self, InvalidArguments> {
                    parse_integer_prefix(value.as_str()?)
                }
            }
        )*
    };
}

from_value_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Reads an optional `-` followed by as many ASCII digits as there are and ignores the rest, so
// "12x" is 12. Text without a single leading digit is rejected.
fn parse_integer_prefix<T>(text: &str) -> Result<T, InvalidArguments>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    let sign = usize::from(text.starts_with('-'));
    let digits = text[sign..].bytes().take_while(u8::is_ascii_digit).count();

    if digits == 0 {
        return Err(InvalidArguments::NotNumeric(text.to_string()));
    }

    text[..sign + digits].parse::<T>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            InvalidArguments::OutOfRange(text.to_string())
        }
        // e.g. a minus sign on an unsigned type
        _ => InvalidArguments::NotNumeric(text.to_string()),
    })
}
