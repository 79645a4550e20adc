#[macro_use]
mod macros;

test!(
    nested_rule,
    "a:\n    b:\n        color: red\n",
    "a b {\n    color: red;\n}\n"
);
test!(
    parent_with_own_declarations,
    "a:\n    color: blue\n    b:\n        color: red\n",
    "a {\n    color: blue;\n}\na b {\n    color: red;\n}\n"
);
test!(
    three_levels,
    "ul:\n    color: black\n    li:\n        color: blue\n        a:\n            color: green\n",
    "ul {\n    color: black;\n}\nul li {\n    color: blue;\n}\nul li a {\n    color: green;\n}\n"
);
test!(
    comma_cross_product,
    ".one, .two:\n    .three, .four:\n        color: red\n",
    ".one .three, .one .four, .two .three, .two .four {\n    color: red;\n}\n"
);
test!(
    cross_product_with_parent_reference_combinator,
    ".one, .two:\n    .three, .four:\n        color: red\n        & > div:\n            color: blue\n",
    ".one .three, .one .four, .two .three, .two .four {\n    color: red;\n}\n.one .three > div, .one .four > div, .two .three > div, .two .four > div {\n    color: blue;\n}\n"
);
test!(
    parent_reference_suffix,
    "a:\n    color: blue\n    &:hover:\n        color: red\n",
    "a {\n    color: blue;\n}\na:hover {\n    color: red;\n}\n"
);
test!(
    parent_reference_with_combinator,
    "a:\n    & > b:\n        color: red\n",
    "a > b {\n    color: red;\n}\n"
);
test!(
    parent_reference_in_group,
    "a, b:\n    &:hover, c:\n        color: red\n",
    "a:hover, a c, b:hover, b c {\n    color: red;\n}\n"
);
test!(
    whitespace_in_selector_collapsed,
    "a    b:\n    color: red\n",
    "a b {\n    color: red;\n}\n"
);
test!(
    selector_text_passes_through,
    "div#id .class:\n    color: red\n",
    "div#id .class {\n    color: red;\n}\n"
);
test!(
    pseudo_class_at_top_level,
    "a:hover:\n    color: red\n",
    "a:hover {\n    color: red;\n}\n"
);
error!(
    top_level_parent_reference,
    "&:hover:\n    color: red\n",
    "Error: Top-level selectors may not contain the parent selector \"&\"."
);
error!(
    two_parent_references,
    "a:\n    && b:\n        color: red\n",
    "Error: Only one parent selector \"&\" is allowed per selector."
);
error!(
    parent_reference_mid_selector,
    "a:\n    b &:\n        color: red\n",
    "Error: Parent selector \"&\" may only appear at the beginning of a selector."
);
error!(
    empty_selector_in_group,
    "a, :\n    color: red\n", "Error: Expected selector."
);
error!(empty_block, "a:\n", "Error: Expected indented block.");
error!(
    empty_block_before_next_rule,
    "a:\nb:\n    color: red\n", "Error: Expected indented block."
);
