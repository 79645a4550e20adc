/*!
This crate provides functionality for compiling an indentation-based CSS
superset to plain CSS.

The input language adds variables, mixins, nested selectors with parent
references, and arithmetic over dimensions and colors on top of ordinary CSS
declarations. Blocks are introduced by a trailing `:` and delimited by
indentation rather than braces; the compiler flattens the nesting and emits
deterministic, readably-formatted CSS.

## Use as library
```
# use moss_compiler as moss;
fn main() -> Result<(), Box<moss::Error>> {
    let css = moss::from_string(
        "body:\n    padding: 2px + 3px".to_owned(),
        &moss::Options::default(),
    )?;
    assert_eq!(css, "body {\n    padding: 5px;\n}\n");
    Ok(())
}
```

## Use as binary
```bash
cargo install moss
moss input.ccss
```
*/

#![warn(clippy::all, clippy::cargo, clippy::dbg_macro)]
#![deny(missing_debug_implementations)]
#![allow(
    clippy::use_self,
    clippy::single_match,
    clippy::new_without_default,
    clippy::single_match_else,
    clippy::multiple_crate_versions,
    clippy::comparison_chain,
    unknown_lints
)]

use codemap::CodeMap;

use evaluate::Visitor;
use lexer::Lexer;
use parse::StylesheetParser;
use serializer::Serializer;
#[cfg(feature = "wasm-exports")]
use wasm_bindgen::prelude::*;

pub use crate::error::{ErrorKind, MossError as Error, MossResult as Result};
pub use crate::logger::{Logger, NullLogger, StdLogger};
pub use crate::options::Options;
pub(crate) use crate::lexer::Token;

pub use codemap;

mod ast;
mod color;
mod common;
mod error;
mod evaluate;
mod interner;
mod lexer;
mod logger;
mod options;
mod parse;
mod selector;
mod serializer;
mod unit;
mod utils;
mod value;

/// Compile CSS from a string, attributing errors to `file_name`.
///
/// The file name appears in resolved error locations and in warnings printed
/// by the [`Logger`], but the file itself is never read. Callers that own the
/// I/O, like the `moss` front end, read the file and pass its contents here.
pub fn from_string_with_file_name(
    input: String,
    file_name: &str,
    options: &Options,
) -> Result<String> {
    let mut map = CodeMap::new();
    let file = map.add_file(file_name.to_owned(), input);
    let lexer = Lexer::new_from_file(&file);

    let stylesheet = match StylesheetParser::new(lexer).parse() {
        Ok(v) => v,
        Err(e) => return Err(Box::new(e.resolve_span(&map))),
    };

    let mut visitor = Visitor::new(options, &map);
    match visitor.visit_stylesheet(stylesheet) {
        Ok(()) => {}
        Err(e) => return Err(Box::new(e.resolve_span(&map))),
    }
    let rules = visitor.finish();

    let mut serializer = Serializer::new(options);
    for rule in &rules {
        serializer.visit_rule(rule);
    }

    Ok(serializer.finish())
}

/// Compile CSS from a string
///
/// ```
/// # use moss_compiler as moss;
/// fn main() -> Result<(), Box<moss::Error>> {
///     let css = moss::from_string("a:\n    color: #F00".to_string(), &moss::Options::default())?;
///     assert_eq!(css, "a {\n    color: red;\n}\n");
///     Ok(())
/// }
/// ```
#[inline]
pub fn from_string<S: Into<String>>(input: S, options: &Options) -> Result<String> {
    from_string_with_file_name(input.into(), "stdin", options)
}

#[cfg(feature = "wasm-exports")]
#[wasm_bindgen(js_name = from_string)]
pub fn from_string_js(input: String) -> std::result::Result<String, String> {
    from_string(input, &Options::default()).map_err(|e| e.to_string())
}
