//! Core record types
//!
//! `User` is the finished record every construction style produces. Its
//! fields are private so a record cannot change once it has been built.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Placeholder phone assigned by the options constructor when none is given
pub const DEFAULT_PHONE: &str = "default";

/// A phone value, kept either as a number or as free text
///
/// Deserializes from any string or number. Numbers that do not fit a `u64`
/// (negative or fractional) are kept as text in their written form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Phone {
    /// Numeric phone such as `111222333`
    Number(u64),
    /// Textual phone such as `"555-0100"` or the `"default"` placeholder
    Text(String),
}

impl Phone {
    /// The placeholder phone used by [`crate::UserOptions::default`]
    pub fn placeholder() -> Self {
        Phone::Text(DEFAULT_PHONE.to_string())
    }

    /// Whether this is the `"default"` placeholder
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Phone::Text(text) if text == DEFAULT_PHONE)
    }
}

impl Default for Phone {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl From<u64> for Phone {
    fn from(number: u64) -> Self {
        Phone::Number(number)
    }
}

impl From<u32> for Phone {
    fn from(number: u32) -> Self {
        Phone::Number(u64::from(number))
    }
}

impl From<&str> for Phone {
    fn from(text: &str) -> Self {
        Phone::Text(text.to_string())
    }
}

impl From<String> for Phone {
    fn from(text: String) -> Self {
        Phone::Text(text)
    }
}

/// Parses user input: plain digits become a number, everything else stays text.
///
/// Digit strings with a leading zero stay text so the zero is not lost.
impl FromStr for Phone {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let is_digits = !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit());
        let keeps_zero = input.len() > 1 && input.starts_with('0');

        if is_digits && !keeps_zero {
            if let Ok(number) = input.parse::<u64>() {
                return Ok(Phone::Number(number));
            }
        }
        Ok(Phone::Text(input.to_string()))
    }
}

struct PhoneVisitor;

impl<'de> Visitor<'de> for PhoneVisitor {
    type Value = Phone;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a phone number or phone text")
    }

    fn visit_u64<E: de::Error>(self, number: u64) -> Result<Phone, E> {
        Ok(Phone::Number(number))
    }

    fn visit_i64<E: de::Error>(self, number: i64) -> Result<Phone, E> {
        match u64::try_from(number) {
            Ok(number) => Ok(Phone::Number(number)),
            Err(_) => Ok(Phone::Text(number.to_string())),
        }
    }

    fn visit_f64<E: de::Error>(self, number: f64) -> Result<Phone, E> {
        Ok(Phone::Text(number.to_string()))
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<Phone, E> {
        Ok(Phone::Text(text.to_string()))
    }

    fn visit_string<E: de::Error>(self, text: String) -> Result<Phone, E> {
        Ok(Phone::Text(text))
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PhoneVisitor)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phone::Number(number) => write!(f, "{}", number),
            Phone::Text(text) => write!(f, "{}", text),
        }
    }
}

/// A user profile record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    age: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
}

impl User {
    /// Construct a record with every field given positionally.
    ///
    /// Optional fields that are not known must still be passed as `None`,
    /// in the right order. [`User::builder`] and [`User::from_options`]
    /// avoid that.
    pub fn from_parts(
        name: impl Into<String>,
        age: Option<u32>,
        phone: Option<Phone>,
        address: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            phone,
            address,
        }
    }

    /// A record with only the mandatory name set
    pub(crate) fn named(name: impl Into<String>) -> Self {
        Self::from_parts(name, None, None, None)
    }

    /// Start a fluent builder for a record named `name`
    pub fn builder(name: impl Into<String>) -> crate::UserBuilder {
        crate::UserBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn phone(&self) -> Option<&Phone> {
        self.phone.as_ref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub(crate) fn set_age(&mut self, age: u32) {
        self.age = Some(age);
    }

    pub(crate) fn set_phone(&mut self, phone: Phone) {
        self.phone = Some(phone);
    }

    pub(crate) fn set_address(&mut self, address: String) {
        self.address = Some(address);
    }
}

/// Renders as `User { name: 'Travis', age: 18, phone: 111222333 }`,
/// leaving absent fields out. Quotes and backslashes inside text are
/// escaped with a backslash.
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User {{ name: ")?;
        write_quoted(f, &self.name)?;
        if let Some(age) = self.age {
            write!(f, ", age: {}", age)?;
        }
        match &self.phone {
            Some(Phone::Number(number)) => write!(f, ", phone: {}", number)?,
            Some(Phone::Text(text)) => {
                write!(f, ", phone: ")?;
                write_quoted(f, text)?;
            }
            None => {}
        }
        if let Some(address) = &self.address {
            write!(f, ", address: ")?;
            write_quoted(f, address)?;
        }
        write!(f, " }}")
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_str("'")?;
    for c in text.chars() {
        if c == '\'' || c == '\\' {
            f.write_str("\\")?;
        }
        write!(f, "{}", c)?;
    }
    f.write_str("'")
}
