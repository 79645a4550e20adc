use crate::{
    error::MossResult,
    lexer::Lexer,
    utils::{is_name, is_name_start},
    Token,
};

/// Token-level primitives shared by the statement and expression parsers
pub(crate) trait BaseParser {
    fn toks(&self) -> &Lexer;
    fn toks_mut(&mut self) -> &mut Lexer;

    /// Skip spaces and tabs, reporting whether any were consumed.
    ///
    /// Newlines are never skipped here: line structure is significant, so the
    /// statement parser consumes them explicitly.
    fn spaces(&mut self) -> bool {
        let mut seen_whitespace = false;

        while matches!(self.toks().peek(), Some(Token { kind: ' ' | '\t', .. })) {
            self.toks_mut().next();
            seen_whitespace = true;
        }

        seen_whitespace
    }

    fn next_matches(&mut self, s: &str) -> bool {
        for (idx, c) in s.chars().enumerate() {
            match self.toks().peek_n(idx) {
                Some(Token { kind, .. }) if kind == c => {}
                _ => return false,
            }
        }

        true
    }

    fn skip_silent_comment(&mut self) -> MossResult<()> {
        debug_assert!(self.next_matches("//"));
        self.toks_mut().next();
        self.toks_mut().next();
        while self.toks().peek().is_some() && !self.toks().next_char_is('\n') {
            self.toks_mut().next();
        }
        Ok(())
    }

    /// Skip a `/* .. */` comment, which must close before the end of the line
    fn skip_loud_comment(&mut self) -> MossResult<()> {
        debug_assert!(self.next_matches("/*"));
        self.toks_mut().next();
        self.toks_mut().next();

        loop {
            let mut next = self.toks_mut().next();

            match next {
                Some(Token { kind: '*', .. }) => {}
                Some(Token { kind: '\n', .. }) | None => {
                    return Err(("expected */.", self.toks().prev_span()).into())
                }
                _ => continue,
            }

            loop {
                next = self.toks_mut().next();

                if !matches!(next, Some(Token { kind: '*', .. })) {
                    break;
                }
            }

            match next {
                Some(Token { kind: '/', .. }) => return Ok(()),
                Some(Token { kind: '\n', .. }) | None => {
                    return Err(("expected */.", self.toks().prev_span()).into())
                }
                _ => continue,
            }
        }
    }

    fn scan_char(&mut self, c: char) -> bool {
        if let Some(Token { kind, .. }) = self.toks().peek() {
            if kind == c {
                self.toks_mut().next();
                return true;
            }
        }

        false
    }

    fn expect_char(&mut self, c: char) -> MossResult<()> {
        match self.toks().peek() {
            Some(tok) if tok.kind == c => {
                self.toks_mut().next();
                Ok(())
            }
            _ => Err((format!("expected \"{}\".", c), self.toks().current_span()).into()),
        }
    }

    fn parse_identifier(&mut self) -> MossResult<String> {
        let mut buffer = String::new();

        while self.scan_char('-') {
            buffer.push('-');
        }

        match self.toks().peek() {
            Some(tok) if is_name_start(tok.kind) => {
                buffer.push(tok.kind);
                self.toks_mut().next();
            }
            Some(..) | None => {
                return Err(("Expected identifier.", self.toks().current_span()).into())
            }
        }

        while let Some(tok) = self.toks().peek() {
            if !is_name(tok.kind) {
                break;
            }

            buffer.push(tok.kind);
            self.toks_mut().next();
        }

        Ok(buffer)
    }

    /// Parse a quoted string literal, returning its contents with the quotes
    /// stripped and `\`-escapes resolved
    fn parse_string(&mut self) -> MossResult<String> {
        let quote = match self.toks_mut().next() {
            Some(Token {
                kind: kind @ ('"' | '\''),
                ..
            }) => kind,
            Some(..) | None => {
                return Err(("Expected string.", self.toks().current_span()).into())
            }
        };

        let mut buffer = String::new();

        while let Some(tok) = self.toks().peek() {
            match tok.kind {
                '\n' => break,
                '\\' => {
                    self.toks_mut().next();
                    if let Some(escaped) = self.toks_mut().next() {
                        buffer.push(escaped.kind);
                    }
                }
                c if c == quote => {
                    self.toks_mut().next();
                    return Ok(buffer);
                }
                c => {
                    buffer.push(c);
                    self.toks_mut().next();
                }
            }
        }

        Err((format!("Expected {}.", quote), self.toks().current_span()).into())
    }
}
