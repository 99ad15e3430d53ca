use std::io::Read;
use thiserror::Error;
use tracing::trace;

/// Receives the structure of a report as it is read.
///
/// Lengths are passed on as found in the report (inches), angles in degrees.
pub trait ParseEventHandler {
    fn start_component(&mut self);
    fn end_component(&mut self);
    fn start_pad(&mut self);
    fn end_pad(&mut self);
    fn position(&mut self, x: f64, y: f64);
    fn size(&mut self, width: f64, height: f64);
    fn drill(&mut self, diameter: f64);
    fn orientation(&mut self, angle: f64);
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid number. keyword: '{keyword}', token: '{token}', line: {line}")]
    InvalidNumber { keyword: &'static str, token: String, line: usize },

    #[error("Missing argument. keyword: '{keyword}', line: {line}")]
    MissingArgument { keyword: &'static str, line: usize },

    #[error("Unable to read report. cause: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads a report, calling `handler` for every structural element found.
///
/// Tokens are separated by whitespace, anything that is not a known keyword is skipped.
pub fn parse<R: Read, H: ParseEventHandler>(mut input: R, handler: &mut H) -> Result<(), ParseError> {
    // bytes, not text; free text such as values and comments need not be valid UTF-8.
    let mut content: Vec<u8> = vec![];
    input.read_to_end(&mut content)?;

    let mut tokens = Tokens::new(&content);

    while let Some((token, line)) = tokens.next_token() {
        match token {
            b"$MODULE" => handler.start_component(),
            b"$EndMODULE" => handler.end_component(),
            b"$PAD" => handler.start_pad(),
            b"$EndPAD" => handler.end_pad(),
            b"position" => {
                let x = tokens.number("position", line)?;
                let y = tokens.number("position", line)?;
                handler.position(x, y);
            },
            b"size" => {
                let width = tokens.number("size", line)?;
                let height = tokens.number("size", line)?;
                handler.size(width, height);
            },
            b"drill" => {
                let diameter = tokens.number("drill", line)?;
                handler.drill(diameter);
            },
            b"orientation" => {
                let angle = tokens.number("orientation", line)?;
                handler.orientation(angle);
            },
            _ => trace!("Skipping token. token: '{}', line: {}", String::from_utf8_lossy(token), line),
        }
    }

    Ok(())
}

/// Whitespace separated tokens along with their (1-based) line number.
struct Tokens<'a> {
    content: &'a [u8],
    offset: usize,
    line: usize,
}

impl<'a> Tokens<'a> {
    fn new(content: &'a [u8]) -> Self {
        Self { content, offset: 0, line: 1 }
    }

    fn next_token(&mut self) -> Option<(&'a [u8], usize)> {
        while let Some(&byte) = self.content.get(self.offset) {
            if !byte.is_ascii_whitespace() {
                break;
            }
            if byte == b'\n' {
                self.line += 1;
            }
            self.offset += 1;
        }

        if self.offset >= self.content.len() {
            return None;
        }

        let start = self.offset;
        while self.content.get(self.offset).is_some_and(|byte| !byte.is_ascii_whitespace()) {
            self.offset += 1;
        }

        Some((&self.content[start..self.offset], self.line))
    }

    /// Arguments may continue on the following lines.
    fn number(&mut self, keyword: &'static str, keyword_line: usize) -> Result<f64, ParseError> {
        let (token, line) = self.next_token()
            .ok_or(ParseError::MissingArgument { keyword, line: keyword_line })?;

        std::str::from_utf8(token).ok()
            .and_then(|text| text.parse::<f64>().ok())
            .ok_or_else(|| ParseError::InvalidNumber {
                keyword,
                token: String::from_utf8_lossy(token).into_owned(),
                line,
            })
    }
}
