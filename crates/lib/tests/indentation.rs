#[macro_use]
mod macros;

test!(
    tabs_may_indent,
    "a:\n\tcolor: red\n",
    "a {\n    color: red;\n}\n"
);
test!(
    deep_indentation_is_relative,
    "a:\n        color: red\n",
    "a {\n    color: red;\n}\n"
);
error!(
    indent_at_start_of_document,
    "  a:\n    color: red\n",
    "Error: Indenting at the beginning of the document is illegal."
);
error!(
    inconsistent_sibling_indentation,
    "a:\n    color: red\n  top: 5\n",
    "Error: Inconsistent indentation, expected 4 spaces."
);
error!(
    indent_after_declaration,
    "a:\n    color: red\n        top: 5\n",
    "Error: Nothing may be indented here."
);
error!(
    tabs_and_spaces_on_one_line,
    "a:\n \tcolor: red\n", "Error: Tabs and spaces may not be mixed."
);
error!(
    tab_after_committing_to_spaces,
    "a:\n    color: red\nb:\n\tcolor: red\n",
    "Error: Expected spaces, was tabs."
);
error!(
    space_after_committing_to_tabs,
    "a:\n\tcolor: red\nb:\n    color: red\n",
    "Error: Expected tabs, was spaces."
);
error!(
    semicolon_after_declaration,
    "a:\n    color: red;\n",
    "Error: semicolons aren't allowed in the indented syntax."
);
error!(
    space_inside_property_name,
    "a:\n    -moz -space: 5\n", "Error: expected \":\"."
);
