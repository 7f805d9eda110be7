#[macro_use]
mod common;

tests!(global_assignment is OK ["var a = 1; a = 2; print a;"] "2");

tests!(assignment_is_an_expression is OK ["var a = 1; var b = (a = 2); print a; print b;"] "2", "2");

tests!(assignment_to_local is OK [r#"var a = "before"; { a = "after"; print a; }"#] "after");

tests!(assignment_returns_assigned_value is OK ["var a = 1; print a = 2;"] "2");

tests!(undefined_assignment_target_is_a_runtime_error is ERR ["a = 1;"] "Undefined variable 'a'");

tests!(invalid_assignment_target_is_a_parse_error is ERR ["var a = 1; var b = 2; a + b = 3;"]
    "Invalid assignment target");
