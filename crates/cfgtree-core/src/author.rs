//! Change author identity
//!
//! An [`Author`] is the contributor of a change, either an individual or a
//! team. Parsing is lenient: the email is never validated and equality is an
//! exact match on both name and email.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The contributor of a change, written as `Name <email>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Author {
    name: String,
    email: String,
}

impl Author {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Parse an author from a string in the format `name <foo@bar.com>`.
    ///
    /// The name is everything before the first `<` and the email is
    /// everything after it up to a closing `>` that ends the input. Both
    /// must be non-empty before trimming; surrounding whitespace is trimmed
    /// afterwards.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || Error::InvalidAuthor {
            input: input.to_string(),
        };

        let (name, rest) = input.split_once('<').ok_or_else(invalid)?;
        let email = rest.strip_suffix('>').ok_or_else(invalid)?;
        if name.is_empty() || email.is_empty() || email.contains('>') {
            return Err(invalid());
        }

        Ok(Self::new(name.trim(), email.trim()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

impl FromStr for Author {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Author {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Author> for String {
    fn from(author: Author) -> Self {
        author.to_string()
    }
}
