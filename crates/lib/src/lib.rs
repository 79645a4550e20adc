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
#![allow(clippy::multiple_crate_versions, unknown_lints)]

use std::path::Path;

pub use moss_compiler::*;

/// Compile CSS from a path
///
/// n.b. `moss` does not currently support files or paths that are not valid UTF-8
///
/// ```no_run
/// fn main() -> Result<(), Box<moss::Error>> {
///     let css = moss::from_path("input.ccss", &moss::Options::default())?;
///     Ok(())
/// }
/// ```
#[inline]
pub fn from_path<P: AsRef<Path>>(p: P, options: &Options) -> Result<String> {
    let path = p.as_ref();
    let input = std::fs::read_to_string(path)?;
    from_string_with_file_name(input, &path.to_string_lossy(), options)
}
