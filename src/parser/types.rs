//! Type expression parsing
//!
//! ```text
//! Type      := BaseName GenericArgs? Modifier*
//! GenericArgs := '<' Type (',' Type)* ('>' | '>>')
//! Modifier  := '*' | '[' ']' | 'const' | 'volatile'
//! ```
//!
//! A `>>` closing a nested list is split by the stream: the inner list takes
//! its first character and the outer list reads the remaining `>`, so
//! `map<K, list<V>>` needs no space between the closers.

use super::ast::{SourceLocation, Type, TYPE_NAME_MAX};
use super::parse::Parser;
use super::token::TokenKind;
use crate::errors::{Annotation, CompileError};

/// What follows one generic argument.
enum ArgEnd {
    Comma,
    Close,
    SplitClose,
    Other,
    EndOfFile,
}

enum Modifier {
    Pointer,
    Array { bracket: SourceLocation },
    Const,
    Volatile,
}

impl<'a> Parser<'a> {
    pub fn parse_type(&mut self) -> Result<Type, CompileError> {
        let base = self.next_token("type name")?;
        if base.kind != TokenKind::Word {
            return Err(Self::expected_at("type name", &base));
        }
        if base.text.len() >= TYPE_NAME_MAX {
            return Err(CompileError::TypeNameTooLong {
                location: base.location,
                width: base.width(),
                max: TYPE_NAME_MAX - 1,
            });
        }

        let mut ty = Type::named(&base.text, self.env);

        if self.check_operator("<") {
            if !ty.is_object() {
                return Err(CompileError::ArgumentsOnPrimitive {
                    name: base.text,
                    location: base.location,
                });
            }
            self.tokens.next();
            let args = self.parse_type_arguments()?;
            if let Some(slot) = ty.args_mut() {
                *slot = args;
            }
        }

        self.parse_type_modifiers(ty)
    }

    /// Arguments after the opening `<`, through the closing `>`.
    fn parse_type_arguments(&mut self) -> Result<Vec<Type>, CompileError> {
        let mut args = Vec::new();

        loop {
            args.push(self.parse_type()?);

            let end = match self.tokens.peek() {
                None => ArgEnd::EndOfFile,
                Some(token) if token.is_operator(",") => ArgEnd::Comma,
                Some(token) if token.is_operator(">") => ArgEnd::Close,
                Some(token) if token.is_operator(">>") => ArgEnd::SplitClose,
                Some(_) => ArgEnd::Other,
            };

            match end {
                ArgEnd::Comma => {
                    self.tokens.next();
                }
                ArgEnd::Close => {
                    self.tokens.next();
                    return Ok(args);
                }
                ArgEnd::SplitClose => {
                    self.tokens.split_shift_right();
                    return Ok(args);
                }
                ArgEnd::Other => {
                    self.tokens.next();
                    return Err(self.expected_after_last(", or >"));
                }
                ArgEnd::EndOfFile => {
                    return Err(CompileError::UnexpectedEof {
                        expected: ", or >".to_string(),
                    })
                }
            }
        }
    }

    fn peek_modifier(&self) -> Option<Modifier> {
        let token = self.tokens.peek()?;
        if token.is_operator("*") {
            Some(Modifier::Pointer)
        } else if token.is_operator("[") {
            Some(Modifier::Array {
                bracket: token.location,
            })
        } else if token.is_word("const") {
            Some(Modifier::Const)
        } else if token.is_word("volatile") {
            Some(Modifier::Volatile)
        } else {
            None
        }
    }

    /// Apply modifiers left to right. Qualifiers mark the type built so far;
    /// `*` and `[]` wrap it.
    fn parse_type_modifiers(&mut self, mut ty: Type) -> Result<Type, CompileError> {
        while let Some(modifier) = self.peek_modifier() {
            self.tokens.next();
            ty = match modifier {
                Modifier::Pointer => Type::pointer_to(ty, self.env)?,
                Modifier::Array { bracket } => {
                    if !self.match_operator("]") {
                        return Err(CompileError::Expected {
                            what: "]".to_string(),
                            annotation: Annotation::After {
                                location: bracket.next_column(),
                            },
                        });
                    }
                    Type::array_of(ty, self.env)?
                }
                Modifier::Const => {
                    ty.is_const = true;
                    ty
                }
                Modifier::Volatile => {
                    ty.is_volatile = true;
                    ty
                }
            };
        }
        Ok(ty)
    }
}
