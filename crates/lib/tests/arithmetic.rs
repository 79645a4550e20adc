#[macro_use]
mod macros;

test!(addition_glued, "a:\n    top: 2+4\n", "a {\n    top: 6;\n}\n");
test!(
    addition_spaced,
    "a:\n    top: 2 + 4\n",
    "a {\n    top: 6;\n}\n"
);
test!(
    subtraction_spaced,
    "a:\n    top: 5 - 1\n",
    "a {\n    top: 4;\n}\n"
);
test!(
    multiplication_binds_tighter,
    "a:\n    top: 2 + 3 * 4\n",
    "a {\n    top: 14;\n}\n"
);
test!(
    parens_override_precedence,
    "a:\n    top: (2 + 3) * 4\n",
    "a {\n    top: 20;\n}\n"
);
test!(
    mixed_spacing,
    "a:\n    top: (5+4 - 1) /2\n",
    "a {\n    top: 4;\n}\n"
);
test!(
    addition_keeps_unit,
    "a:\n    top: 2px + 3px\n",
    "a {\n    top: 5px;\n}\n"
);
test!(
    unitless_right_operand,
    "a:\n    top: 2px + 3\n",
    "a {\n    top: 5px;\n}\n"
);
test!(
    unit_comes_from_right,
    "a:\n    top: 2 + 3em\n",
    "a {\n    top: 5em;\n}\n"
);
test!(
    multiplication_with_unit,
    "a:\n    top: 2px * 3\n",
    "a {\n    top: 6px;\n}\n"
);
test!(
    division_by_unitless,
    "a:\n    top: 10px / 2\n",
    "a {\n    top: 5px;\n}\n"
);
test!(
    repeating_decimal_truncated,
    "a:\n    top: 1 / 3\n",
    "a {\n    top: 0.3333333333;\n}\n"
);
test!(
    whole_result_prints_without_decimal,
    "a:\n    top: 0.5 * 4\n",
    "a {\n    top: 2;\n}\n"
);
test!(
    fractional_operand,
    "a:\n    top: 1.5px * 2\n",
    "a {\n    top: 3px;\n}\n"
);
test!(
    negative_result,
    "a:\n    top: 0 - 5\n",
    "a {\n    top: -5;\n}\n"
);
test!(
    negative_right_operand,
    "a:\n    top: 2 * -3\n",
    "a {\n    top: -6;\n}\n"
);
test!(
    percent_arithmetic,
    "a:\n    width: 50% + 10%\n",
    "a {\n    width: 60%;\n}\n"
);
test!(
    unknown_units_combine_when_equal,
    "a:\n    width: 5foo + 1foo\n",
    "a {\n    width: 6foo;\n}\n"
);
error!(
    incompatible_units,
    "a:\n    top: 1em + 1px\n", "Error: Incompatible units px and em."
);
error!(
    incompatible_unknown_units,
    "a:\n    width: 5foo + 1bar\n", "Error: Incompatible units bar and foo."
);
error!(
    division_by_zero,
    "a:\n    top: 1 / 0\n", "Error: Division by zero."
);
error!(
    string_subtraction_is_undefined,
    "a:\n    top: \"a\" - 1\n", "Error: Undefined operation \"\"a\" - 1\"."
);
