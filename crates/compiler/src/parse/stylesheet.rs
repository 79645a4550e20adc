use codemap::{Span, Spanned};

use crate::{
    ast::{
        AstExpr, AstInclude, AstMixin, AstRuleSet, AstStmt, AstStyle, AstVariableDecl, Param,
        ParamList, StyleSheet,
    },
    common::Identifier,
    error::MossResult,
    lexer::Lexer,
    selector::SelectorList,
    Token,
};

use super::{value::ValueParser, BaseParser};

/// What a line turned out to be after looking ahead to its end
enum LineKind {
    /// `name = expr`
    Assignment,
    /// `name: expr`
    Property,
    /// `selector, selector:` with nothing after the colon
    RuleSet,
}

/// Parses the indentation-structured statement grammar.
///
/// Statements cannot be told apart from their first token (`a = 1`, `a: 1`,
/// and `a:` all begin with an identifier), so each line is classified by a
/// cursor-restoring scan to its end before the real parse starts.
pub(crate) struct StylesheetParser {
    pub toks: Lexer,
    current_indentation: usize,
    next_indentation: Option<usize>,
    next_indentation_end: Option<usize>,
    /// Whether this document indents with spaces (`Some(true)`), tabs
    /// (`Some(false)`), or has not yet committed to either
    indent_with_spaces: Option<bool>,
}

impl BaseParser for StylesheetParser {
    fn toks(&self) -> &Lexer {
        &self.toks
    }

    fn toks_mut(&mut self) -> &mut Lexer {
        &mut self.toks
    }
}

impl StylesheetParser {
    pub fn new(toks: Lexer) -> Self {
        StylesheetParser {
            toks,
            current_indentation: 0,
            next_indentation: None,
            next_indentation_end: None,
            indent_with_spaces: None,
        }
    }

    pub fn parse(mut self) -> MossResult<StyleSheet> {
        let body = self.parse_statements()?;
        Ok(StyleSheet { body })
    }

    fn parse_statements(&mut self) -> MossResult<Vec<AstStmt>> {
        if self.toks.next_char_is(' ') || self.toks.next_char_is('\t') {
            return Err((
                "Indenting at the beginning of the document is illegal.",
                self.toks.current_span(),
            )
                .into());
        }

        let mut statements = Vec::new();

        while self.toks.peek().is_some() {
            if let Some(child) = self.parse_child(Self::parse_top_level_statement)? {
                statements.push(child);
            }

            let indentation = self.read_indentation()?;
            debug_assert_eq!(indentation, 0);
        }

        Ok(statements)
    }

    /// Dispatch a single line, skipping blank lines and comments
    fn parse_child(
        &mut self,
        child: fn(&mut Self) -> MossResult<AstStmt>,
    ) -> MossResult<Option<AstStmt>> {
        match self.toks.peek() {
            Some(Token { kind: '\n', .. }) => Ok(None),
            Some(Token { kind: '/', .. }) => match self.toks.peek_n(1) {
                Some(Token { kind: '/', .. }) => {
                    self.skip_silent_comment()?;
                    Ok(None)
                }
                Some(Token { kind: '*', .. }) => {
                    self.skip_loud_comment()?;
                    self.expect_statement_separator()?;
                    Ok(None)
                }
                _ => child(self).map(Some),
            },
            _ => child(self).map(Some),
        }
    }

    fn parse_top_level_statement(&mut self) -> MossResult<AstStmt> {
        if self.toks.next_char_is('@') {
            return self.parse_at_rule(true);
        }

        match self.classify_line()? {
            LineKind::Assignment => Ok(AstStmt::VariableDecl(self.parse_variable_declaration()?)),
            LineKind::RuleSet => Ok(AstStmt::RuleSet(self.parse_style_rule()?)),
            LineKind::Property => {
                let span = self.line_span();
                Err(("Declarations may only be used within style rules.", span).into())
            }
        }
    }

    fn parse_body_statement(&mut self) -> MossResult<AstStmt> {
        if self.toks.next_char_is('@') {
            return self.parse_at_rule(false);
        }

        match self.classify_line()? {
            LineKind::Assignment => Ok(AstStmt::VariableDecl(self.parse_variable_declaration()?)),
            LineKind::Property => Ok(AstStmt::Style(self.parse_property()?)),
            LineKind::RuleSet => Ok(AstStmt::RuleSet(self.parse_style_rule()?)),
        }
    }

    /// Scan to the end of the current line, then restore the cursor.
    ///
    /// A line whose last meaningful character is a `:` opens a nested rule; a
    /// top-level `=` before any `:` makes it an assignment; any other line
    /// with a `:` is a property declaration. Characters inside strings or
    /// parentheses do not count.
    fn classify_line(&mut self) -> MossResult<LineKind> {
        let start = self.toks.cursor();

        let mut quote: Option<char> = None;
        let mut depth = 0_usize;
        let mut saw_colon = false;
        let mut saw_equals = false;
        let mut last_meaningful: Option<char> = None;

        while let Some(tok) = self.toks.next() {
            let c = tok.kind;

            if c == '\n' {
                break;
            }

            if let Some(q) = quote {
                if c == q {
                    quote = None;
                    last_meaningful = Some(c);
                }
                continue;
            }

            match c {
                '"' | '\'' => quote = Some(c),
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                ':' if depth == 0 => saw_colon = true,
                '=' if depth == 0 && !saw_colon => saw_equals = true,
                _ => {}
            }

            if c != ' ' && c != '\t' {
                last_meaningful = Some(c);
            }
        }

        let span = self.toks.span_from(start);
        self.toks.set_cursor(start);

        if last_meaningful == Some(':') && quote.is_none() {
            Ok(LineKind::RuleSet)
        } else if saw_equals {
            Ok(LineKind::Assignment)
        } else if saw_colon {
            Ok(LineKind::Property)
        } else {
            Err(("expected \":\".", span).into())
        }
    }

    /// The span of the rest of the current line, without consuming it
    fn line_span(&mut self) -> Span {
        let start = self.toks.cursor();
        while let Some(tok) = self.toks.peek() {
            if tok.kind == '\n' {
                break;
            }
            self.toks.next();
        }
        let span = self.toks.span_from(start);
        self.toks.set_cursor(start);
        span
    }

    fn parse_variable_declaration(&mut self) -> MossResult<AstVariableDecl> {
        let name = Identifier::from(self.parse_identifier()?);
        self.spaces();
        self.expect_char('=')?;
        self.spaces();
        let value = ValueParser::parse_expression(self)?;
        self.expect_statement_separator()?;

        Ok(AstVariableDecl { name, value })
    }

    fn parse_property(&mut self) -> MossResult<AstStyle> {
        let start = self.toks.cursor();
        let name = self.parse_identifier()?;
        self.spaces();
        self.expect_char(':')?;
        self.spaces();
        let value = ValueParser::parse_expression(self)?;
        let span = self.toks.span_from(start);
        self.expect_statement_separator()?;

        Ok(AstStyle { name, value, span })
    }

    fn parse_style_rule(&mut self) -> MossResult<AstRuleSet> {
        let start = self.toks.cursor();

        while let Some(tok) = self.toks.peek() {
            if tok.kind == '\n' {
                break;
            }
            self.toks.next();
        }

        let raw = self.toks.raw_text(start);
        let span = self.toks.span_from(start);

        let trimmed = raw.trim_end();
        debug_assert!(trimmed.ends_with(':'));
        let selector = SelectorList::parse(&trimmed[..trimmed.len() - 1], span)?;

        let body = self.parse_children(Self::parse_body_statement)?;

        if body.is_empty() {
            return Err(("Expected indented block.", span).into());
        }

        Ok(AstRuleSet { selector, body })
    }

    /// `@name(..):` with a body is a mixin definition; `@name(..)` without a
    /// trailing colon is a mixin call.
    ///
    /// The two cannot be told apart until the closing paren, so the
    /// parenthesized items are parsed as `expr` or `expr = expr` pairs first
    /// and validated once the statement's role is known.
    fn parse_at_rule(&mut self, top_level: bool) -> MossResult<AstStmt> {
        let start = self.toks.cursor();
        self.expect_char('@')?;

        let name_start = self.toks.cursor();
        let name = Identifier::from(self.parse_identifier()?);
        let name_span = self.toks.span_from(name_start);

        let mut items: Vec<(Spanned<AstExpr>, Option<Spanned<AstExpr>>)> = Vec::new();

        self.spaces();
        if self.scan_char('(') {
            loop {
                self.spaces();

                if self.scan_char(')') {
                    break;
                }

                let value = ValueParser::parse_expression(self)?;
                self.spaces();

                let default = if self.scan_char('=') {
                    self.spaces();
                    Some(ValueParser::parse_expression(self)?)
                } else {
                    None
                };

                self.spaces();
                if !self.scan_char(',') {
                    self.expect_char(')')?;
                    break;
                }
            }
        }

        self.spaces();

        if self.scan_char(':') {
            if !top_level {
                return Err((
                    "Mixins may only be defined at the root of the stylesheet.",
                    self.toks.span_from(start),
                )
                    .into());
            }

            let mut params = Vec::new();
            for (value, default) in items {
                let param_name = match value.node {
                    AstExpr::Ident(name) => name,
                    _ => return Err(("Expected identifier.", value.span).into()),
                };

                params.push(Param {
                    name: param_name,
                    default,
                });
            }

            let body = self.parse_children(Self::parse_body_statement)?;

            if body.is_empty() {
                return Err(("Expected indented block.", self.toks.span_from(start)).into());
            }

            Ok(AstStmt::Mixin(AstMixin {
                name,
                name_span,
                params: ParamList { params },
                body,
            }))
        } else {
            let mut args = Vec::new();
            for (value, default) in items {
                if let Some(default) = default {
                    // `name = expr` only makes sense in a definition
                    return Err(("expected \")\".", default.span).into());
                }

                args.push(value);
            }

            let span = self.toks.span_from(start);
            self.expect_statement_separator()?;

            Ok(AstStmt::Include(AstInclude {
                name: Spanned {
                    node: name,
                    span: name_span,
                },
                args,
                span,
            }))
        }
    }

    fn parse_children(
        &mut self,
        child: fn(&mut Self) -> MossResult<AstStmt>,
    ) -> MossResult<Vec<AstStmt>> {
        let mut children = Vec::new();

        self.while_indented_lower(|parser| {
            if let Some(parsed_child) = parser.parse_child(child)? {
                children.push(parsed_child);
            }

            Ok(())
        })?;

        Ok(children)
    }

    fn at_end_of_statement(&self) -> bool {
        matches!(self.toks.peek(), Some(Token { kind: '\n', .. }) | None)
    }

    fn expect_statement_separator(&mut self) -> MossResult<()> {
        if !self.at_end_of_statement() {
            self.expect_newline()?;
        }

        if self.peek_indentation()? <= self.current_indentation {
            return Ok(());
        }

        Err((
            "Nothing may be indented here.",
            self.toks.current_span(),
        )
            .into())
    }

    fn expect_newline(&mut self) -> MossResult<()> {
        match self.toks.peek() {
            Some(Token { kind: ';', .. }) => Err((
                "semicolons aren't allowed in the indented syntax.",
                self.toks.current_span(),
            )
                .into()),
            Some(Token { kind: '\n', .. }) => {
                self.toks.next();
                Ok(())
            }
            _ => Err(("expected newline.", self.toks.current_span()).into()),
        }
    }

    /// The indentation of the next non-blank line, leaving the cursor where
    /// it is
    fn peek_indentation(&mut self) -> MossResult<usize> {
        if let Some(next) = self.next_indentation {
            return Ok(next);
        }

        if self.toks.peek().is_none() {
            self.next_indentation = Some(0);
            self.next_indentation_end = Some(self.toks.cursor());
            return Ok(0);
        }

        let start = self.toks.cursor();

        if !self.scan_char('\n') {
            return Err(("Expected newline.", self.toks.current_span()).into());
        }

        let mut contains_tab;
        let mut contains_space;
        let mut next_indentation;

        loop {
            contains_tab = false;
            contains_space = false;
            next_indentation = 0;

            while let Some(next) = self.toks.peek() {
                match next.kind {
                    ' ' => contains_space = true,
                    '\t' => contains_tab = true,
                    _ => break,
                }

                next_indentation += 1;
                self.toks.next();
            }

            if self.toks.peek().is_none() {
                self.next_indentation = Some(0);
                self.next_indentation_end = Some(self.toks.cursor());
                self.toks.set_cursor(start);
                return Ok(0);
            }

            if !self.scan_char('\n') {
                break;
            }
        }

        self.check_indentation_consistency(contains_tab, contains_space, start)?;

        self.next_indentation = Some(next_indentation);

        if next_indentation > 0 {
            self.indent_with_spaces.get_or_insert(contains_space);
        }

        self.next_indentation_end = Some(self.toks.cursor());
        self.toks.set_cursor(start);

        Ok(next_indentation)
    }

    fn check_indentation_consistency(
        &mut self,
        contains_tab: bool,
        contains_space: bool,
        start: usize,
    ) -> MossResult<()> {
        // NOTE: error message spans here start from the beginning of the line
        if contains_tab {
            if contains_space {
                return Err((
                    "Tabs and spaces may not be mixed.",
                    self.toks.span_from(start),
                )
                    .into());
            } else if self.indent_with_spaces == Some(true) {
                return Err(("Expected spaces, was tabs.", self.toks.span_from(start)).into());
            }
        } else if contains_space && self.indent_with_spaces == Some(false) {
            return Err(("Expected tabs, was spaces.", self.toks.span_from(start)).into());
        }

        Ok(())
    }

    /// Commit to the indentation most recently peeked, advancing past the
    /// newline and leading whitespace
    fn read_indentation(&mut self) -> MossResult<usize> {
        self.current_indentation = match self.next_indentation {
            Some(indent) => indent,
            None => self.peek_indentation()?,
        };

        if let Some(end) = self.next_indentation_end {
            self.toks.set_cursor(end);
        }

        self.next_indentation = None;
        self.next_indentation_end = None;

        Ok(self.current_indentation)
    }

    /// Run `body` for each line indented further than the current one,
    /// requiring every direct child to share one indentation level
    fn while_indented_lower(
        &mut self,
        mut body: impl FnMut(&mut Self) -> MossResult<()>,
    ) -> MossResult<()> {
        let parent_indentation = self.current_indentation;
        let mut child_indentation = None;

        while self.peek_indentation()? > parent_indentation {
            let indentation = self.read_indentation()?;
            let child_indent = *child_indentation.get_or_insert(indentation);

            if child_indent != indentation {
                return Err((
                    format!(
                        "Inconsistent indentation, expected {child_indent} spaces.",
                        child_indent = child_indent
                    ),
                    self.toks.current_span(),
                )
                    .into());
            }

            body(self)?;
        }

        Ok(())
    }
}
