pub(crate) use base::BaseParser;
pub(crate) use stylesheet::StylesheetParser;

mod base;
mod stylesheet;
mod value;
