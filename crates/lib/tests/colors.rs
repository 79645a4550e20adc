#[macro_use]
mod macros;

test!(
    keyword_preferred_over_hex,
    "a:\n    color: #F00\n",
    "a {\n    color: red;\n}\n"
);
test!(
    six_digit_hex_passes_through,
    "a:\n    color: #123456\n",
    "a {\n    color: #123456;\n}\n"
);
test!(
    three_digit_hex_doubles,
    "a:\n    color: #abc\n",
    "a {\n    color: #aabbcc;\n}\n"
);
test!(
    single_spelling_for_aliased_keywords,
    "a:\n    color: #0ff\n",
    "a {\n    color: aqua;\n}\n"
);
test!(
    rebeccapurple,
    "a:\n    color: #663399\n",
    "a {\n    color: rebeccapurple;\n}\n"
);
test!(
    channelwise_addition,
    "a:\n    color: #111 + #222\n",
    "a {\n    color: #333333;\n}\n"
);
test!(
    addition_reaching_a_keyword,
    "a:\n    color: #f00 + #0f0\n",
    "a {\n    color: yellow;\n}\n"
);
test!(
    addition_clamps_at_white,
    "a:\n    color: #fff + #111\n",
    "a {\n    color: white;\n}\n"
);
test!(
    subtraction_clamps_at_black,
    "a:\n    color: #333 - #444\n",
    "a {\n    color: black;\n}\n"
);
error!(
    four_hex_digits,
    "a:\n    color: #1111\n", "Error: Expected 3 or 6 hex digits."
);
