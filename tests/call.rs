#[macro_use]
mod common;

tests!(calling_a_bool_is_a_runtime_error is ERR ["true();"] "Can only call functions");

tests!(calling_nil_is_a_runtime_error is ERR ["nil();"] "Can only call functions");

tests!(calling_a_number_is_a_runtime_error is ERR ["123();"] "Can only call functions");

tests!(calling_a_string_is_a_runtime_error is ERR [r#""str"();"#] "Can only call functions");

tests!(wrong_arity_is_a_runtime_error is ERR [r#"
    fun f(a, b) { return a + b; }
    f(1);
"#] "Expected 2 arguments but got 1");

tests!(calling_a_function_value_works is OK [r#"
    fun add(a, b) { return a + b; }
    print add(1, 2);
"#] "3");
