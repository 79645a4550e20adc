use codemap::Span;

use crate::error::MossResult;

/// A comma-separated selector group as written at the head of a rule block.
///
/// Selectors are treated as text: the language never inspects selector
/// structure beyond the leading parent reference `&`, so everything else is
/// carried verbatim (with whitespace runs collapsed) into the output.
#[derive(Debug, Clone)]
pub(crate) struct SelectorList {
    components: Vec<Selector>,
    pub span: Span,
}

#[derive(Debug, Clone)]
struct Selector {
    /// Whether the selector begins with `&`
    parent_ref: bool,
    /// The text after the marker; a parent reference keeps its leading
    /// combinator spacing, so `& > div` stores `" > div"` and `&:hover`
    /// stores `":hover"`
    text: String,
}

fn collapse_spaces(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl SelectorList {
    pub fn parse(text: &str, span: Span) -> MossResult<Self> {
        let mut components = Vec::new();

        for part in text.split(',') {
            let part = part.trim();

            if part.is_empty() {
                return Err(("Expected selector.", span).into());
            }

            if let Some(rest) = part.strip_prefix('&') {
                if rest.contains('&') {
                    return Err((
                        "Only one parent selector \"&\" is allowed per selector.",
                        span,
                    )
                        .into());
                }

                let text = if rest.starts_with(char::is_whitespace) {
                    format!(" {}", collapse_spaces(rest))
                } else {
                    collapse_spaces(rest)
                };

                components.push(Selector {
                    parent_ref: true,
                    text,
                });
            } else {
                if part.contains('&') {
                    return Err((
                        "Parent selector \"&\" may only appear at the beginning of a selector.",
                        span,
                    )
                        .into());
                }

                components.push(Selector {
                    parent_ref: false,
                    text: collapse_spaces(part),
                });
            }
        }

        Ok(SelectorList { components, span })
    }

    /// Combine this group with the already-resolved selectors of the enclosing
    /// rule, producing one selector per (parent, component) pair with the
    /// parent varying slowest.
    ///
    /// A plain component is joined to each parent as a descendant; a parent
    /// reference splices its text directly onto the parent. At the top level
    /// there is nothing for `&` to refer to, which is an error.
    pub fn resolve_against(&self, parent: Option<&[String]>) -> MossResult<Vec<String>> {
        let parents = match parent {
            Some(parents) => parents,
            None => {
                if self.components.iter().any(|s| s.parent_ref) {
                    return Err((
                        "Top-level selectors may not contain the parent selector \"&\".",
                        self.span,
                    )
                        .into());
                }

                return Ok(self.components.iter().map(|s| s.text.clone()).collect());
            }
        };

        let mut resolved = Vec::with_capacity(parents.len() * self.components.len());

        for parent in parents {
            for component in &self.components {
                if component.parent_ref {
                    resolved.push(format!("{}{}", parent, component.text));
                } else {
                    resolved.push(format!("{} {}", parent, component.text));
                }
            }
        }

        Ok(resolved)
    }
}
