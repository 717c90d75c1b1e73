//! Recursive-descent parser for the formula grammar.
//!
//! ```text
//! formula := term* charge?
//! term    := group | atom
//! group   := '(' term* ')' number?
//! atom    := SYMBOL number?
//! number  := digit+ ('.' digit+)?
//! SYMBOL  := [A-Z][a-z]*
//! ```
//!
//! Groups recurse once per nesting level. Coefficients are accumulated into
//! an ordered composition as soon as a term is complete, so the element
//! order of the result is the order of first occurrence.

use super::CHARGE_SYMBOL;
use super::charge::{self, Charge};
use super::error::ParseError;
use super::scanner::Scanner;

/// Ordered symbol → coefficient list.
pub(super) type Composition = Vec<(String, f64)>;

/// Output of a successful parse, before it is wrapped into a `Formula`.
#[derive(Debug)]
pub(super) struct Parsed<'a> {
    pub elemental: &'a str,
    pub composition: Composition,
    pub charge: Charge,
}

pub(super) struct Parser<'a> {
    scanner: Scanner<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            scanner: Scanner::new(source),
        }
    }

    /// formula := term* charge?
    pub fn parse(mut self) -> Result<Parsed<'a>, ParseError> {
        let composition = self.parse_terms()?;
        let elemental = self.scanner.consumed();
        let position = self.scanner.position();

        let charge = match self.scanner.peek() {
            None => Charge::neutral(),
            Some('+' | '-') => charge::resolve(self.scanner.rest(), position)?,
            Some(')') => return Err(ParseError::UnmatchedClose { position }),
            Some(character) => {
                return Err(ParseError::UnexpectedCharacter {
                    character,
                    position,
                });
            }
        };

        Ok(Parsed {
            elemental,
            composition,
            charge,
        })
    }

    /// term*
    ///
    /// Stops at the first character that cannot start a term and leaves it
    /// for the caller to interpret.
    fn parse_terms(&mut self) -> Result<Composition, ParseError> {
        let mut composition = Composition::new();
        loop {
            match self.scanner.peek() {
                Some('(') => {
                    let group = self.parse_group()?;
                    merge(&mut composition, group, 1.0);
                }
                Some(c) if c.is_ascii_uppercase() => {
                    let (symbol, coefficient) = self.parse_atom()?;
                    accumulate(&mut composition, symbol, coefficient);
                }
                Some(c) if c.is_ascii_digit() => {
                    let position = self.scanner.position();
                    let number = self.scanner.eat_while(|c| c.is_ascii_digit() || c == '.');
                    return Err(ParseError::dangling_number(number, position));
                }
                Some(c) if c.is_alphabetic() => {
                    let position = self.scanner.position();
                    let symbol = self.scanner.eat_while(char::is_alphabetic);
                    return Err(ParseError::invalid_symbol(symbol, position));
                }
                _ => return Ok(composition),
            }
        }
    }

    /// group := '(' term* ')' number?
    fn parse_group(&mut self) -> Result<Composition, ParseError> {
        let open = self.scanner.position();
        self.scanner.bump(); // '('

        let inner = self.parse_terms()?;

        match self.scanner.peek() {
            Some(')') => {
                self.scanner.bump();
            }
            None => return Err(ParseError::UnmatchedOpen { position: open }),
            Some(character) => {
                return Err(ParseError::UnexpectedCharacter {
                    character,
                    position: self.scanner.position(),
                });
            }
        }

        let multiplier = self.parse_number()?.unwrap_or(1.0);
        let mut group = Composition::with_capacity(inner.len());
        merge(&mut group, inner, multiplier);
        Ok(group)
    }

    /// atom := SYMBOL number?
    fn parse_atom(&mut self) -> Result<(String, f64), ParseError> {
        let start = self.scanner.position();
        self.scanner.bump(); // uppercase initial
        self.scanner.eat_while(|c| c.is_ascii_lowercase());
        let symbol = self.scanner.slice_from(start);

        if symbol == CHARGE_SYMBOL {
            return Err(ParseError::ReservedSymbol {
                symbol: symbol.to_string(),
                position: start,
            });
        }

        let coefficient = self.parse_number()?.unwrap_or(1.0);
        Ok((symbol.to_string(), coefficient))
    }

    /// number := digit+ ('.' digit+)?
    fn parse_number(&mut self) -> Result<Option<f64>, ParseError> {
        let start = self.scanner.position();
        if self.scanner.eat_while(|c| c.is_ascii_digit()).is_empty() {
            return Ok(None);
        }

        if self.scanner.peek() == Some('.') {
            self.scanner.bump();
            if self.scanner.eat_while(|c| c.is_ascii_digit()).is_empty() {
                return Err(ParseError::invalid_number(
                    self.scanner.slice_from(start),
                    start,
                ));
            }
        }

        let text = self.scanner.slice_from(start);
        text.parse::<f64>()
            .map(Some)
            .map_err(|_| ParseError::invalid_number(text, start))
    }
}

fn accumulate(composition: &mut Composition, symbol: String, coefficient: f64) {
    match composition.iter_mut().find(|(s, _)| *s == symbol) {
        Some((_, existing)) => *existing += coefficient,
        None => composition.push((symbol, coefficient)),
    }
}

fn merge(into: &mut Composition, from: Composition, multiplier: f64) {
    for (symbol, coefficient) in from {
        accumulate(into, symbol, coefficient * multiplier);
    }
}
