use crate::errors::{Error, Result};

/// Command characters of the SVG path grammar.
pub const PATH_COMMANDS: &str = "MmLlHhVvZzCcSsQqTtAa";

/// Character-level reader over SVG path data (and point lists, which share
/// the same number grammar).
pub struct PathTokens {
    data: Vec<char>,
    index: usize,
}

impl PathTokens {
    pub fn new(data: &str) -> Self {
        Self {
            data: data.chars().collect(),
            index: 0,
        }
    }

    pub fn current(&self) -> Option<char> {
        self.data.get(self.index).copied()
    }

    pub fn advance(&mut self) {
        self.index += 1;
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.data.len()
    }

    pub fn at_command(&self) -> bool {
        self.current().is_some_and(|c| PATH_COMMANDS.contains(c))
    }

    pub fn at_number_start(&self) -> bool {
        self.current()
            .is_some_and(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
    }

    fn check_not_end(&self) -> Result<()> {
        if self.at_end() {
            Err(Error::Parse("ran out of data!".to_string()))
        } else {
            Ok(())
        }
    }

    pub fn skip_whitespace(&mut self) {
        // SVG definition of whitespace is 0x20, 0x9, 0xA, 0xD. Rust's is_ascii_whitespace()
        // also includes 0xC, but is close enough and convenient.
        while self.current().is_some_and(|c| c.is_ascii_whitespace()) {
            self.advance();
        }
    }

    pub fn skip_wsp_comma(&mut self) {
        self.skip_whitespace();
        if self.current() == Some(',') {
            self.advance();
            self.skip_whitespace();
        }
    }

    pub fn read_command(&mut self) -> Result<char> {
        match self.current() {
            Some(command) if self.at_command() => {
                self.advance();
                self.skip_wsp_comma();
                Ok(command)
            }
            other => Err(Error::InvalidValue(
                "path command".to_string(),
                other.map(|c| c.to_string()).unwrap_or_default(),
            )),
        }
    }

    /// Arc flags may be written without separators, e.g. `a10 10 0 0110 10`.
    pub fn read_flag(&mut self) -> Result<f32> {
        self.check_not_end()?;
        let res = match self.current() {
            Some('0') => 0.,
            Some('1') => 1.,
            other => {
                return Err(Error::InvalidValue(
                    "flag".to_string(),
                    other.map(|c| c.to_string()).unwrap_or_default(),
                ))
            }
        };
        self.advance();
        self.skip_wsp_comma();
        Ok(res)
    }

    pub fn read_number(&mut self) -> Result<f32> {
        self.check_not_end()?;
        let mut mult = 1.;
        match self.current() {
            Some('-') => {
                mult = -1.;
                self.advance();
            }
            Some('+') => {
                self.advance();
            }
            _ => {}
        };
        Ok(mult * self.read_non_negative()?)
    }

    fn read_non_negative(&mut self) -> Result<f32> {
        self.check_not_end()?;
        let mut s = String::new();
        let mut dot_valid = true;
        let mut exp_valid = true;
        while let Some(ch) = self.current() {
            match ch {
                '0'..='9' => {
                    s.push(ch);
                    self.advance();
                }
                '.' if dot_valid => {
                    s.push(ch);
                    self.advance();
                    dot_valid = false;
                }
                'e' | 'E' if exp_valid && s.ends_with(|c: char| c.is_ascii_digit()) => {
                    s.push(ch);
                    self.advance();
                    // include sign character if present
                    if let Some(sign @ ('-' | '+')) = self.current() {
                        s.push(sign);
                        self.advance();
                    }
                    exp_valid = false;
                    dot_valid = false;
                }
                _ => break,
            }
        }
        self.skip_wsp_comma();
        s.parse()
            .map_err(|_| Error::InvalidValue("number".to_string(), s))
    }
}
