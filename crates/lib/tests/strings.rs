#[macro_use]
mod macros;

test!(
    double_quoted_string_emits_contents,
    "a:\n    font-family: \"Helvetica Neue\"\n",
    "a {\n    font-family: Helvetica Neue;\n}\n"
);
test!(
    single_quoted_string_emits_contents,
    "a:\n    content: 'hi'\n",
    "a {\n    content: hi;\n}\n"
);
test!(
    string_concatenation,
    "a:\n    content: \"foo\" + \"bar\"\n",
    "a {\n    content: foobar;\n}\n"
);
test!(
    string_plus_number,
    "a:\n    content: \"a\" + 1\n",
    "a {\n    content: a1;\n}\n"
);
test!(
    number_plus_string,
    "a:\n    content: 1 + \"a\"\n",
    "a {\n    content: 1a;\n}\n"
);
test!(
    quotes_survive_inside_call_arguments,
    "a:\n    font: local(\"Gentium\")\n",
    "a {\n    font: local(\"Gentium\");\n}\n"
);
test!(
    url_call_reassembled,
    "a:\n    background: url(\"/img/a.png\")\n",
    "a {\n    background: url(\"/img/a.png\");\n}\n"
);
test!(
    call_with_multiple_arguments,
    "a:\n    color: rgb(255, 0, 0)\n",
    "a {\n    color: rgb(255, 0, 0);\n}\n"
);
test!(
    call_in_list,
    "a:\n    background: url(\"a.png\") no-repeat\n",
    "a {\n    background: url(\"a.png\") no-repeat;\n}\n"
);
error!(
    unclosed_string,
    "a:\n    content: \"abc\n", "Error: Expected \"."
);
