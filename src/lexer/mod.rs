//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Pull-based tokenization, one token per `next_token` call
//! - Recognition of keywords, identifiers, integers and operators
//! - Token position tracking for error reporting
//! - Passing unrecognised bytes through as `ILLEGAL` tokens

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
