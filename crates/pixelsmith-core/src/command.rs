//! Tokenizing command lines and recognising session directives.
//!
//! A command line is split on whitespace; the first token is the directive.
//! `load`, `save` and `exit` are handled by the dispatcher itself. Anything
//! else is handed to [`Transformation::parse`](crate::Transformation::parse).

use std::path::PathBuf;

use crate::error::{EditError, Result};

/// Whitespace tokenizer with positional argument helpers.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    directive: &'a str,
    args: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    /// Split `line`. Returns `None` for a blank line.
    pub fn new(line: &'a str) -> Option<Self> {
        let mut args = line.split_whitespace();
        let directive = args.next()?;
        Some(Self { directive, args })
    }

    pub fn directive(&self) -> &'a str {
        self.directive
    }

    /// Next argument as a string.
    pub fn next_arg(&mut self, what: &str) -> Result<&'a str> {
        self.args.next().ok_or_else(|| {
            EditError::MalformedCommand(format!("`{}` expects {}", self.directive, what))
        })
    }

    /// Next argument as a signed integer.
    pub fn next_int(&mut self, what: &str) -> Result<i64> {
        let token = self.next_arg(what)?;
        token.parse().map_err(|_| {
            EditError::MalformedCommand(format!(
                "`{}` expects an integer {}, got `{}`",
                self.directive, what, token
            ))
        })
    }
}

/// What a command line asks the dispatcher to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Decode an image and make it current.
    Load(PathBuf),
    /// Encode the current image.
    Save(PathBuf),
    /// End the session.
    Exit,
    /// Parse the whole line as a transformation.
    Edit,
}

impl Directive {
    /// Classify a command line. Returns `Ok(None)` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let Some(mut tokens) = Tokens::new(line) else {
            return Ok(None);
        };
        let directive = match tokens.directive() {
            "load" => Directive::Load(PathBuf::from(tokens.next_arg("a path")?)),
            "save" => Directive::Save(PathBuf::from(tokens.next_arg("a path")?)),
            "exit" => Directive::Exit,
            _ => Directive::Edit,
        };
        Ok(Some(directive))
    }
}
