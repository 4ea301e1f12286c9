//! Column type declaration parsing
//!
//! Turns a declaration such as `varchar(255)`, `decimal(10,2)`,
//! `int(10) unsigned` or `set('a','b')` into a `TypeDecl`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::TypeMappingError;
use crate::sql::{Category, PureType};

/// Column attributes that may follow the bare type name
const TYPE_ATTRIBUTES: &[&str] = &["unsigned", "signed", "zerofill"];

/// Classified column type declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    declaration: String,
    pure_type: PureType,
    length: u32,
    precision: Option<u32>,
    options: Vec<String>,
    unsigned: bool,
}

impl TypeDecl {
    /// Classify a raw type declaration
    pub fn parse(declaration: &str) -> Result<Self, TypeMappingError> {
        let parts = split_declaration(declaration)?;

        let head = parts.head.trim().to_lowercase();
        let mut words = head.split_whitespace();
        let name = words.next().unwrap_or_default();
        let mut unsigned = false;
        for word in words {
            if !TYPE_ATTRIBUTES.contains(&word) {
                return Err(TypeMappingError::UnsupportedType(head.clone()));
            }
            unsigned |= word == "unsigned";
        }
        let pure_type: PureType = name.parse()?;

        unsigned |= parts
            .tail
            .split_whitespace()
            .any(|word| word.eq_ignore_ascii_case("unsigned"));

        let (length, precision) = parts.inner.map(parse_length).unwrap_or((0, None));

        let options = match (pure_type.category(), parts.inner) {
            (Category::EnumSet, Some(inner)) => parse_options(declaration, inner)?,
            _ => Vec::new(),
        };

        Ok(Self {
            declaration: declaration.to_string(),
            pure_type,
            length,
            precision,
            options,
            unsigned,
        })
    }

    /// The declaration exactly as supplied
    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    pub fn pure_type(&self) -> PureType {
        self.pure_type
    }

    pub fn category(&self) -> Category {
        self.pure_type.category()
    }

    /// Declared length, or 0 when the declaration carries none
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Declared scale, e.g. the `2` in `decimal(10,2)`
    pub fn precision(&self) -> Option<u32> {
        self.precision
    }

    /// Permitted members of an `enum` or `set` column
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn is_unsigned(&self) -> bool {
        self.unsigned
    }
}

impl FromStr for TypeDecl {
    type Err = TypeMappingError;

    fn from_str(declaration: &str) -> Result<Self, Self::Err> {
        TypeDecl::parse(declaration)
    }
}

/// A declaration split around its first parenthesized group
struct DeclarationParts<'a> {
    head: &'a str,
    inner: Option<&'a str>,
    tail: &'a str,
}

/// Split at the first `(` and its matching `)`, skipping over quoted text
fn split_declaration(declaration: &str) -> Result<DeclarationParts<'_>, TypeMappingError> {
    let Some(open) = declaration.find('(') else {
        return Ok(DeclarationParts {
            head: declaration,
            inner: None,
            tail: "",
        });
    };

    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut depth = 0usize;
    for (offset, ch) in declaration[open..].char_indices() {
        let index = open + offset;
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '\'' | '"' => quote = Some(ch),
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(DeclarationParts {
                        head: &declaration[..open],
                        inner: Some(&declaration[open + 1..index]),
                        tail: &declaration[index + 1..],
                    });
                }
            }
            _ => {}
        }
    }

    Err(TypeMappingError::MalformedDeclaration {
        declaration: declaration.to_string(),
        reason: "unterminated parenthesis".to_string(),
    })
}

/// First parenthesized integer is the length, an optional second one the scale
fn parse_length(inner: &str) -> (u32, Option<u32>) {
    let mut items = inner.split(',').map(str::trim);
    let length = items.next().and_then(|item| item.parse().ok());
    match length {
        Some(length) => (length, items.next().and_then(|item| item.parse().ok())),
        None => (0, None),
    }
}

/// Parse `'a','b''s','c'` into its unquoted members
fn parse_options(declaration: &str, inner: &str) -> Result<Vec<String>, TypeMappingError> {
    let malformed = |reason: &str| TypeMappingError::MalformedDeclaration {
        declaration: declaration.to_string(),
        reason: reason.to_string(),
    };

    let mut options = Vec::new();
    let mut chars = inner.chars().peekable();
    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        let Some(quote) = chars.next() else {
            break;
        };
        if quote != '\'' && quote != '"' {
            return Err(malformed("option list members must be quoted"));
        }

        let mut option = String::new();
        let mut closed = false;
        while let Some(ch) = chars.next() {
            if ch == '\\' {
                if let Some(next) = chars.next() {
                    option.push(next);
                }
            } else if ch == quote {
                if chars.next_if_eq(&quote).is_some() {
                    option.push(quote);
                } else {
                    closed = true;
                    break;
                }
            } else {
                option.push(ch);
            }
        }
        if !closed {
            return Err(malformed("unterminated quoted option"));
        }
        options.push(option);

        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        match chars.next() {
            Some(',') => continue,
            None => break,
            Some(_) => return Err(malformed("expected ',' between options")),
        }
    }

    Ok(options)
}
