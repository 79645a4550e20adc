use std::fmt::Write;

use crate::{
    color::{Color, COLOR_NAMES},
    evaluate::CssRule,
    value::Value,
    Options,
};

/// The CSS text of a single value
pub(crate) fn serialize_value(value: &Value) -> String {
    match value {
        Value::Dimension(n, unit) => format!("{}{}", n, unit),
        Value::Color(color) => serialize_color(*color),
        // string contents pass through without quotes
        Value::String(s, _) => s.clone(),
        Value::Ident(name) => name.to_string(),
        Value::List(items) => items
            .iter()
            .map(serialize_value)
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn serialize_color(color: Color) -> String {
    match COLOR_NAMES.get(&color.packed()) {
        Some(name) => (*name).to_owned(),
        None => format!("#{:06x}", color.packed()),
    }
}

/// Writes flattened rules as expanded CSS.
///
/// Rules belonging to the same top-level statement are contiguous; a single
/// blank line separates one top-level statement's output from the next.
pub(crate) struct Serializer {
    buffer: String,
    indent_width: usize,
    wrote_any: bool,
    needs_separator: bool,
}

impl Serializer {
    pub fn new(options: &Options) -> Self {
        Serializer {
            buffer: String::new(),
            indent_width: options.indent_width,
            wrote_any: false,
            needs_separator: false,
        }
    }

    pub fn visit_rule(&mut self, rule: &CssRule) {
        debug_assert!(!rule.styles.is_empty());

        if rule.group_start && self.wrote_any {
            self.needs_separator = true;
        }

        if self.needs_separator {
            self.buffer.push('\n');
            self.needs_separator = false;
        }

        self.buffer.push_str(&rule.selector);
        self.buffer.push_str(" {\n");

        for style in &rule.styles {
            for _ in 0..self.indent_width {
                self.buffer.push(' ');
            }

            let _ = writeln!(
                self.buffer,
                "{}: {};",
                style.property,
                serialize_value(&style.value)
            );
        }

        self.buffer.push_str("}\n");
        self.wrote_any = true;
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}
