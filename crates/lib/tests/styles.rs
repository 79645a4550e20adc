#[macro_use]
mod macros;

test!(
    simple_declaration,
    "body:\n    top: 5\n",
    "body {\n    top: 5;\n}\n"
);
test!(
    input_indent_width_is_free,
    "body:\n top: 5",
    "body {\n    top: 5;\n}\n"
);
test!(
    multiple_declarations,
    "body:\n    top: 5\n    left: 10px\n",
    "body {\n    top: 5;\n    left: 10px;\n}\n"
);
test!(
    space_separated_list,
    "a:\n    margin: 1px 2px 3px 4px\n",
    "a {\n    margin: 1px 2px 3px 4px;\n}\n"
);
test!(
    bare_words_pass_through,
    "a:\n    font-weight: bold\n",
    "a {\n    font-weight: bold;\n}\n"
);
test!(
    bare_word_list,
    "a:\n    font-family: arial sans-serif\n",
    "a {\n    font-family: arial sans-serif;\n}\n"
);
test!(
    signed_number_starts_new_list_element,
    "a:\n    margin: 0 -10px\n",
    "a {\n    margin: 0 -10px;\n}\n"
);
test!(
    blank_line_between_top_level_statements,
    "a:\n    color: red\n\nb:\n    color: blue\n",
    "a {\n    color: red;\n}\n\nb {\n    color: blue;\n}\n"
);
test!(empty_input, "", "");
test!(only_a_comment, "// nothing here\n", "");
test!(
    silent_comment_in_body,
    "a:\n    // note\n    color: red\n",
    "a {\n    color: red;\n}\n"
);
test!(
    loud_comment_in_body,
    "a:\n    /* note */\n    color: red\n",
    "a {\n    color: red;\n}\n"
);
test!(
    crlf_line_endings,
    "a:\r\n    color: red\r\n",
    "a {\n    color: red;\n}\n"
);
test!(
    trailing_spaces_after_value,
    "a:\n    top: 5  \n",
    "a {\n    top: 5;\n}\n"
);
test!(
    declarations_after_nested_rule_stay_with_parent,
    "body:\n    color: red\n    div:\n        top: 1px\n    margin: 0\n",
    "body {\n    color: red;\n    margin: 0;\n}\nbody div {\n    top: 1px;\n}\n"
);
test!(
    no_trailing_newline_in_input,
    "a:\n    color: red",
    "a {\n    color: red;\n}\n"
);
test!(
    configured_indent_width,
    "a:\n    color: red\n",
    "a {\n  color: red;\n}\n",
    moss::Options::default().indent_width(2)
);
#[test]
fn emission_is_deterministic() {
    let input = "x = 1px\na, b:\n    top: x\n    c:\n        left: x * 2\n";
    let first = moss::from_string(input.to_string(), &moss::Options::default()).expect(input);
    let second = moss::from_string(input.to_string(), &moss::Options::default()).expect(input);
    assert_eq!(first, second);
}

error!(
    unclosed_loud_comment,
    "/* foo\n", "Error: expected */."
);
error!(
    top_level_declaration,
    "top: 5\n", "Error: Declarations may only be used within style rules."
);
error!(line_without_colon, "a\n", "Error: expected \":\".");
