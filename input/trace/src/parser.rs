use crate::token::{SpannedToken, Token, tokenize};
use doomweb_common::error::ShellError;
use doomweb_common::span::Span;
use doomweb_gamepad::InputSnapshot;
use doomweb_gamepad::layout::{axis_by_name, button_by_name};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A pad at this index announced itself.
    Connect(u32),
    /// The pad at this index went away.
    Disconnect(u32),
    /// One poll cycle that read this state. Anything not listed is released
    /// or centered.
    Frame(InputSnapshot),
    /// One poll cycle where the active pad could not be read.
    Lost,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub command: Command,
    pub span: Span,
    /// 1-based source line
    pub line: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    pub steps: Vec<Step>,
}

fn syntax(message: impl Into<String>, span: Span) -> ShellError {
    ShellError::TraceSyntax {
        message: message.into(),
        span,
    }
}

pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<SpannedToken>,
    pos: usize,
    last_span: Span,
    errors: Vec<ShellError>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: tokenize(source),
            pos: 0,
            last_span: Span::new(0, 0),
            errors: Vec::new(),
        }
    }

    pub fn current(&self) -> &Token {
        &self.tokens[self.pos].token
    }

    pub fn current_span(&self) -> Span {
        self.tokens[self.pos].span
    }

    pub fn advance(&mut self) -> &SpannedToken {
        let tok = &self.tokens[self.pos];
        self.last_span = tok.span;
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        tok
    }

    pub fn at_end(&self) -> bool {
        matches!(self.current(), Token::Eof)
    }

    fn at_line_end(&self) -> bool {
        matches!(self.current(), Token::Newline | Token::Eof)
    }

    pub fn skip_newlines(&mut self) {
        while matches!(self.current(), Token::Newline) {
            self.advance();
        }
    }

    /// Skip the rest of a broken line.
    pub fn synchronize(&mut self) {
        while !self.at_line_end() {
            self.advance();
        }
    }

    pub fn parse_trace(&mut self) -> Trace {
        let mut steps = Vec::new();

        self.skip_newlines();
        while !self.at_end() {
            match self.parse_step() {
                Ok(step) => steps.push(step),
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize();
                }
            }
            self.skip_newlines();
        }

        Trace { steps }
    }

    fn parse_step(&mut self) -> Result<Step, ShellError> {
        let start = self.current_span();
        let command = match self.current() {
            Token::Connect => {
                self.advance();
                Command::Connect(self.parse_index()?)
            }
            Token::Disconnect => {
                self.advance();
                Command::Disconnect(self.parse_index()?)
            }
            Token::Frame => {
                self.advance();
                Command::Frame(self.parse_frame()?)
            }
            Token::Lost => {
                self.advance();
                Command::Lost
            }
            other => {
                return Err(syntax(
                    format!("expected 'connect', 'disconnect', 'frame' or 'lost', found '{other}'"),
                    start,
                ));
            }
        };

        if !self.at_line_end() {
            return Err(syntax(
                format!("unexpected '{}' at end of line", self.current()),
                self.current_span(),
            ));
        }

        Ok(Step {
            command,
            span: start.merge(self.last_span),
            line: start.line(self.source),
        })
    }

    fn parse_index(&mut self) -> Result<u32, ShellError> {
        let span = self.current_span();
        match self.current() {
            Token::Number(v) if *v >= 0.0 && v.fract() == 0.0 && *v <= f64::from(u32::MAX) => {
                let index = *v as u32;
                self.advance();
                Ok(index)
            }
            Token::Number(v) => Err(syntax(
                format!("gamepad index must be a non-negative integer, found {v}"),
                span,
            )),
            other => Err(syntax(format!("expected gamepad index, found '{other}'"), span)),
        }
    }

    fn parse_frame(&mut self) -> Result<InputSnapshot, ShellError> {
        let mut snapshot = InputSnapshot::neutral();

        while !self.at_line_end() {
            let name_span = self.current_span();
            let name = match self.current() {
                Token::Ident(name) => name.clone(),
                other => {
                    return Err(syntax(
                        format!("expected a button or axis name, found '{other}'"),
                        name_span,
                    ));
                }
            };
            self.advance();

            if !matches!(self.current(), Token::Eq) {
                let button = button_by_name(&name)
                    .ok_or_else(|| syntax(format!("unknown button '{name}'"), name_span))?;
                snapshot.press(button);
                continue;
            }

            self.advance();
            let axis = axis_by_name(&name)
                .ok_or_else(|| syntax(format!("unknown axis '{name}'"), name_span))?;
            let value_span = self.current_span();
            let value = match self.current() {
                Token::Number(v) => *v,
                other => {
                    return Err(syntax(
                        format!("expected a value for axis '{name}', found '{other}'"),
                        value_span,
                    ));
                }
            };
            if !(-1.0..=1.0).contains(&value) {
                return Err(syntax(
                    format!("axis value {value} is outside [-1, 1]"),
                    value_span,
                ));
            }
            self.advance();
            snapshot.set_axis(axis, value);
        }

        Ok(snapshot)
    }
}

/// Parse a trace script. All malformed lines are reported, not just the first.
pub fn parse(source: &str) -> Result<Trace, Vec<ShellError>> {
    let mut parser = Parser::new(source);
    let trace = parser.parse_trace();

    if parser.errors.is_empty() {
        Ok(trace)
    } else {
        Err(parser.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doomweb_gamepad::layout::{axis, button};

    fn messages(source: &str) -> Vec<String> {
        parse(source)
            .unwrap_err()
            .iter()
            .map(|e| e.to_string())
            .collect()
    }

    #[test]
    fn test_parse_commands() {
        let trace = parse("# demo\nconnect 0\n\nframe south ly=-0.5\nlost\ndisconnect 0\n").unwrap();
        let commands: Vec<_> = trace.steps.iter().map(|s| s.command.clone()).collect();
        assert_eq!(
            commands,
            vec![
                Command::Connect(0),
                Command::Frame(
                    InputSnapshot::neutral()
                        .with_button(button::SOUTH)
                        .with_axis(axis::LEFT_Y, -0.5)
                ),
                Command::Lost,
                Command::Disconnect(0),
            ]
        );
        let lines: Vec<_> = trace.steps.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![2, 4, 5, 6]);
    }

    #[test]
    fn test_empty_frame_is_neutral() {
        let trace = parse("frame").unwrap();
        assert_eq!(trace.steps[0].command, Command::Frame(InputSnapshot::neutral()));
        assert_eq!(trace.steps[0].span, Span::new(0, 5));
    }

    #[test]
    fn test_step_span_covers_line() {
        let trace = parse("connect 7").unwrap();
        assert_eq!(trace.steps[0].span, Span::new(0, 9));
    }

    #[test]
    fn test_reports_every_bad_line() {
        let errors = messages("frame turbo\nconnect -1\nframe lx=2\njump\n");
        assert_eq!(
            errors,
            vec![
                "Trace error: unknown button 'turbo'",
                "Trace error: gamepad index must be a non-negative integer, found -1",
                "Trace error: axis value 2 is outside [-1, 1]",
                "Trace error: expected 'connect', 'disconnect', 'frame' or 'lost', found 'jump'",
            ]
        );
    }

    #[test]
    fn test_error_spans_point_at_token() {
        let errors = parse("frame south qx=0.5").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].span(), Some(Span::new(12, 14)));
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        let errors = messages("lost 3");
        assert_eq!(errors, vec!["Trace error: unexpected '3' at end of line"]);
    }

    #[test]
    fn test_missing_axis_value() {
        let errors = messages("frame rx=");
        assert_eq!(
            errors,
            vec!["Trace error: expected a value for axis 'rx', found 'EOF'"]
        );
    }
}
