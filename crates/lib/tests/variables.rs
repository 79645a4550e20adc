#[macro_use]
mod macros;

test!(
    simple_variable,
    "height = 2px\na:\n    height: height\n",
    "a {\n    height: 2px;\n}\n"
);
test!(
    arithmetic_on_variable,
    "w = 5px\na:\n    width: w * 2\n",
    "a {\n    width: 10px;\n}\n"
);
test!(
    variable_defined_from_variable,
    "a = 1px\nb = a + 1px\nc:\n    top: b\n",
    "c {\n    top: 2px;\n}\n"
);
test!(
    later_assignment_wins,
    "x = 1\nx = 2\na:\n    top: x\n",
    "a {\n    top: 2;\n}\n"
);
test!(
    local_assignment_shadows_global,
    "top = 3\nbody:\n    top: top\ndiv:\n    top = 2\n    top: top\n",
    "body {\n    top: 3;\n}\n\ndiv {\n    top: 2;\n}\n"
);
test!(
    local_assignment_does_not_leak,
    "a:\n    x = 1\n    top: x\nb:\n    top: x\n",
    "a {\n    top: 1;\n}\n\nb {\n    top: x;\n}\n"
);
test!(
    list_valued_variable,
    "pad = 1px 2px\na:\n    margin: pad\n",
    "a {\n    margin: 1px 2px;\n}\n"
);
test!(
    variable_inside_list,
    "x = 5px\na:\n    margin: 0 x\n",
    "a {\n    margin: 0 5px;\n}\n"
);
test!(
    color_valued_variable,
    "accent = #2e4dff\na:\n    color: accent\n",
    "a {\n    color: #2e4dff;\n}\n"
);
error!(
    undefined_variable_in_arithmetic,
    "a:\n    top: foo + 1\n", "Error: Undefined variable: foo."
);
error!(
    undefined_variable_right_operand,
    "a:\n    top: 1 + foo\n", "Error: Undefined variable: foo."
);
