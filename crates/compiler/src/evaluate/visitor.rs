use std::mem;

use codemap::{CodeMap, Spanned};

use crate::{
    ast::{
        AstExpr, AstInclude, AstMixin, AstRuleSet, AstStmt, AstStyle, AstVariableDecl, Mixin,
        StyleSheet,
    },
    common::QuoteKind,
    error::MossResult,
    value::Value,
    Options,
};

use super::{
    bin_op::binary_op,
    css_tree::{CssRule, CssTree, CssTreeIdx, Style},
    scope::Scopes,
};

/// Evaluates a parsed stylesheet into flat CSS rules.
///
/// Walks the statement tree once, carrying the scope stack, the selectors of
/// the enclosing rule, and the rule currently collecting declarations.
pub(crate) struct Visitor<'a> {
    pub env: Scopes,
    pub options: &'a Options<'a>,
    map: &'a CodeMap,
    css_tree: CssTree,
    /// The rule currently collecting declarations, `None` at the top level
    parent: Option<CssTreeIdx>,
    /// The resolved selectors of the enclosing rule block
    current_selectors: Option<Vec<String>>,
}

impl<'a> Visitor<'a> {
    pub fn new(options: &'a Options<'a>, map: &'a CodeMap) -> Self {
        Visitor {
            env: Scopes::new(),
            options,
            map,
            css_tree: CssTree::new(),
            parent: None,
            current_selectors: None,
        }
    }

    pub fn visit_stylesheet(&mut self, style_sheet: StyleSheet) -> MossResult<()> {
        for stmt in style_sheet.body {
            self.css_tree.next_stmt();
            self.visit_stmt(stmt)?;
        }

        Ok(())
    }

    pub fn finish(self) -> Vec<CssRule> {
        self.css_tree.finish()
    }

    fn visit_stmt(&mut self, stmt: AstStmt) -> MossResult<()> {
        match stmt {
            AstStmt::VariableDecl(decl) => self.visit_variable_decl(decl),
            AstStmt::RuleSet(ruleset) => self.visit_ruleset(ruleset),
            AstStmt::Style(style) => self.visit_style(style),
            AstStmt::Mixin(mixin) => self.visit_mixin_decl(mixin),
            AstStmt::Include(include) => self.visit_include(include),
        }
    }

    fn visit_variable_decl(&mut self, decl: AstVariableDecl) -> MossResult<()> {
        let value = self.visit_expr(&decl.value)?;
        self.env.insert_var(decl.name, value);
        Ok(())
    }

    fn visit_ruleset(&mut self, ruleset: AstRuleSet) -> MossResult<()> {
        let resolved = ruleset
            .selector
            .resolve_against(self.current_selectors.as_deref())?;

        let rule = CssRule {
            selector: resolved.join(", "),
            styles: Vec::new(),
            group_start: false,
        };

        let old_selectors = self.current_selectors.replace(resolved);

        let result = self.with_parent(rule, |visitor| {
            for stmt in ruleset.body {
                visitor.visit_stmt(stmt)?;
            }

            Ok(())
        });

        self.current_selectors = old_selectors;

        result
    }

    fn visit_style(&mut self, style: AstStyle) -> MossResult<()> {
        let parent = match self.parent {
            Some(parent) => parent,
            None => {
                return Err((
                    "Declarations may only be used within style rules.",
                    style.span,
                )
                    .into())
            }
        };

        let value = self.visit_expr(&style.value)?;

        self.css_tree.add_style(
            parent,
            Style {
                property: style.name,
                value,
            },
        );

        Ok(())
    }

    fn visit_mixin_decl(&mut self, mixin: AstMixin) -> MossResult<()> {
        if self.env.mixin_exists(mixin.name) && !self.options.quiet {
            let loc = self.map.look_up_span(mixin.name_span);
            self.options
                .logger
                .warning(loc, &format!("Mixin {} is being redefined.", mixin.name));
        }

        let scope = self.env.new_closure();
        self.env.insert_mixin(
            mixin.name,
            Mixin {
                declaration: mixin,
                env: scope,
            },
        );

        Ok(())
    }

    fn visit_include(&mut self, include: AstInclude) -> MossResult<()> {
        let mixin = self.env.get_mixin(include.name)?;

        // arguments are evaluated in the caller's scope, the body in the
        // mixin's own
        let mut args = Vec::with_capacity(include.args.len());
        for arg in &include.args {
            args.push(self.visit_expr(arg)?);
        }

        mixin.declaration.params.verify(args.len(), include.span)?;

        let Mixin { declaration, env } = mixin;
        let env = env.new_closure();

        self.with_environment(env, |visitor| {
            visitor.with_scope(|visitor| {
                let mut args = args.into_iter();

                for param in &declaration.params.params {
                    let value = match args.next() {
                        Some(value) => value,
                        None => match &param.default {
                            Some(default) => visitor.visit_expr(default)?,
                            // `verify` has already covered the gap
                            None => unreachable!(),
                        },
                    };

                    visitor.env.insert_var(param.name, value);
                }

                for stmt in declaration.body {
                    visitor.visit_stmt(stmt)?;
                }

                Ok(())
            })
        })
    }

    fn with_parent(
        &mut self,
        rule: CssRule,
        callback: impl FnOnce(&mut Self) -> MossResult<()>,
    ) -> MossResult<()> {
        let parent_idx = self.parent.unwrap_or(CssTree::ROOT);
        let idx = self.css_tree.add_child(rule, parent_idx);

        let old_parent = self.parent.replace(idx);
        let result = self.with_scope(callback);
        self.parent = old_parent;

        result
    }

    fn with_scope<T>(&mut self, callback: impl FnOnce(&mut Self) -> T) -> T {
        self.env.enter_new_scope();
        let val = callback(self);
        self.env.exit_scope();
        val
    }

    fn with_environment<T>(&mut self, env: Scopes, callback: impl FnOnce(&mut Self) -> T) -> T {
        let mut env = env;
        mem::swap(&mut self.env, &mut env);
        let val = callback(self);
        mem::swap(&mut self.env, &mut env);
        val
    }

    fn visit_expr(&mut self, expr: &Spanned<AstExpr>) -> MossResult<Value> {
        Ok(match &expr.node {
            AstExpr::BinaryOp(op) => {
                let left = self.visit_expr(&op.lhs)?;
                let right = self.visit_expr(&op.rhs)?;
                binary_op(left, op.op, right, expr.span)?
            }
            AstExpr::Number { n, unit } => Value::Dimension(*n, unit.clone()),
            AstExpr::Color(color) => Value::Color(*color),
            AstExpr::String(s) => Value::String(s.clone(), QuoteKind::Quoted),
            AstExpr::Ident(name) => match self.env.get_var(*name) {
                Some(value) => value,
                None => Value::Ident(*name),
            },
            AstExpr::FunctionCall(call) => {
                let mut args = Vec::with_capacity(call.args.len());
                for arg in &call.args {
                    args.push(self.visit_expr(arg)?.inspect());
                }

                Value::String(format!("{}({})", call.name, args.join(", ")), QuoteKind::None)
            }
            AstExpr::List(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    values.push(self.visit_expr(item)?);
                }

                Value::List(values)
            }
            AstExpr::Paren(inner) => self.visit_expr(inner)?,
        })
    }
}
