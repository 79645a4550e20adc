use std::io::Write;

use moss::{ErrorKind, Options};

#[test]
fn compiles_from_path() {
    let mut file = tempfile::Builder::new()
        .suffix(".ccss")
        .tempfile()
        .unwrap();
    write!(file, "a:\n    color: red\n").unwrap();

    let css = moss::from_path(file.path(), &Options::default()).unwrap();
    assert_eq!(css, "a {\n    color: red;\n}\n");
}

#[test]
fn missing_file_is_io_error() {
    let err = moss::from_path("does-not-exist.ccss", &Options::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(err.location().is_none());
}

#[test]
fn error_location_names_the_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".ccss")
        .tempfile()
        .unwrap();
    write!(file, "a:\n    color red\n").unwrap();

    let err = moss::from_path(file.path(), &Options::default()).unwrap_err();
    let loc = err.location().expect("parse errors carry a location");
    assert!(loc.file.name().ends_with(".ccss"));
    assert_eq!(loc.begin.line, 1);
}

#[test]
fn from_string_errors_point_at_stdin() {
    let err = moss::from_string("a:\n    color red\n".to_string(), &Options::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    let loc = err.location().expect("parse errors carry a location");
    assert_eq!(loc.file.name(), "stdin");
    assert_eq!(loc.begin.line, 1);
}
