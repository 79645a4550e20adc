use macros::TestLogger;

#[macro_use]
mod macros;

test!(
    mixin_without_parameters,
    "@ruled():\n    border: 1px\na:\n    @ruled()\n",
    "a {\n    border: 1px;\n}\n"
);
test!(
    mixin_with_argument,
    "@emphasis(tone):\n    color: tone\na:\n    @emphasis(green)\n",
    "a {\n    color: green;\n}\n"
);
test!(
    default_fills_missing_argument,
    "@emphasis(tone, size=5em):\n    color: tone\n    font-size: size\na:\n    @emphasis(green)\n",
    "a {\n    color: green;\n    font-size: 5em;\n}\n"
);
test!(
    argument_overrides_default,
    "@emphasis(tone, size=5em):\n    color: tone\n    font-size: size\na:\n    @emphasis(#F00, 2pt)\n",
    "a {\n    color: red;\n    font-size: 2pt;\n}\n"
);
test!(
    default_participates_in_body_arithmetic,
    "@abc(a, b, c=25px):\n    color: a\n    size: b\n    font-size: c - 10px\nbody:\n    @abc(green, 5em)\n",
    "body {\n    color: green;\n    size: 5em;\n    font-size: 15px;\n}\n"
);
test!(
    explicit_argument_replaces_default_in_arithmetic,
    "@abc(a, b, c=25px):\n    color: a\n    size: b\n    font-size: c - 10px\nbody:\n    @abc(#F00, 2pt, 11px)\n",
    "body {\n    color: red;\n    size: 2pt;\n    font-size: 1px;\n}\n"
);
test!(
    default_may_reference_earlier_parameter,
    "@pad(x, y = x * 2):\n    padding: x y\na:\n    @pad(2px)\n",
    "a {\n    padding: 2px 4px;\n}\n"
);
test!(
    mixin_body_sees_definition_scope,
    "accent = red\n@titled():\n    color: accent\ndiv:\n    accent = blue\n    @titled()\n",
    "div {\n    color: red;\n}\n"
);
test!(
    mixin_sees_later_writes_to_captured_scope,
    "accent = red\n@titled():\n    color: accent\naccent = green\nbody:\n    @titled()\n",
    "body {\n    color: green;\n}\n"
);
test!(
    mixin_with_nested_rule,
    "@hoverable():\n    &:hover:\n        color: red\na:\n    @hoverable()\n",
    "a:hover {\n    color: red;\n}\n"
);
test!(
    top_level_call_may_emit_rules,
    "@thing():\n    a:\n        color: red\n@thing()\n",
    "a {\n    color: red;\n}\n"
);
test!(
    top_level_call_expanding_two_blocks_stays_contiguous,
    "@thing():\n    a:\n        color: red\n    b:\n        color: blue\n@thing()\n",
    "a {\n    color: red;\n}\nb {\n    color: blue;\n}\n"
);
test!(
    separate_top_level_calls_get_blank_separator,
    "@thing():\n    a:\n        color: red\n@thing()\n@thing()\n",
    "a {\n    color: red;\n}\n\na {\n    color: red;\n}\n"
);
test!(
    argument_expression_evaluated_at_call_site,
    "@sized(w):\n    width: w\na:\n    @sized(1px + 2px)\n",
    "a {\n    width: 3px;\n}\n"
);
error!(
    undefined_mixin,
    "a:\n    @nope()\n", "Error: Undefined mixin."
);
error!(
    too_many_arguments,
    "@emphasis(tone, size=5em):\n    color: tone\na:\n    @emphasis(green, 1px, 2px)\n",
    "Error: Only 2 arguments allowed, but 3 were passed."
);
error!(
    too_many_arguments_singular,
    "@emphasis(tone):\n    color: tone\na:\n    @emphasis(green, 1px)\n",
    "Error: Only 1 argument allowed, but 2 were passed."
);
error!(
    missing_required_argument,
    "@emphasis(tone):\n    color: tone\na:\n    @emphasis()\n",
    "Error: Missing argument tone."
);
error!(
    default_in_call_arguments,
    "@m():\n    color: red\nb:\n    @m(x = 1)\n",
    "Error: expected \")\"."
);
error!(
    mixin_defined_inside_rule,
    "a:\n    @m():\n        color: red\n",
    "Error: Mixins may only be defined at the root of the stylesheet."
);
error!(
    non_identifier_parameter,
    "@m(1px):\n    color: red\n", "Error: Expected identifier."
);
error!(
    top_level_call_injecting_declarations,
    "@m():\n    color: red\n@m()\n",
    "Error: Declarations may only be used within style rules."
);

#[test]
fn redefinition_warns_and_later_definition_wins() {
    let input = "@m():\n    color: red\n@m():\n    color: blue\na:\n    @m()\n";
    let logger = TestLogger::default();
    let options = moss::Options::default().logger(&logger);
    let output = moss::from_string(input.to_string(), &options).expect(input);
    assert_eq!(&output, "a {\n    color: blue;\n}\n");
    assert_eq!(
        &[String::from("Mixin m is being redefined.")],
        logger.warning_messages().as_slice()
    );
}

#[test]
fn quiet_suppresses_redefinition_warning() {
    let input = "@m():\n    color: red\n@m():\n    color: blue\na:\n    @m()\n";
    let logger = TestLogger::default();
    let options = moss::Options::default().logger(&logger).quiet(true);
    let output = moss::from_string(input.to_string(), &options).expect(input);
    assert_eq!(&output, "a {\n    color: blue;\n}\n");
    assert_eq!(&[] as &[String], logger.warning_messages().as_slice());
}
