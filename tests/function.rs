#[macro_use]
mod common;

tests!(function_body_must_be_a_block is ERR ["fun f() 123;"] "Expected '{' before function body");

tests!(empty_body_returns_nil is OK ["fun f() {} print f();"] "nil");

tests!(extra_call_arguments_is_a_runtime_error is ERR [r#"
    fun f(a, b) { return a + b; }
    f(1, 2, 3, 4);
"#] "Expected 2 arguments but got 4");

tests!(missing_call_arguments_is_a_runtime_error is ERR [r#"
    fun f(a, b) { return a + b; }
    f(1);
"#] "Expected 2 arguments but got 1");

tests!(missing_comma_between_parameters_is_a_parse_error is ERR [r#"
    fun f(a, b c) {}
"#] "Expected ')' after parameters");

tests!(mutual_recursion_across_globals is OK [r#"
    fun isEven(n) {
        if (n == 0) return true;
        return isOdd(n - 1);
    }
    fun isOdd(n) {
        if (n == 0) return false;
        return isEven(n - 1);
    }
    print isEven(10);
    print isOdd(10);
"#] "true", "false");

tests!(nested_call_with_arguments is OK [r#"
    fun returnArg(arg) { return arg; }
    fun returnFunCallWithArg(func, arg) { return returnArg(func)(arg); }
    fun printArg(arg) { print arg; }

    returnFunCallWithArg(printArg, "hello world")();
"#] "hello world");

tests!(recursion_sums_a_range is OK [r#"
    fun sum(n) {
        if (n < 1) return 0;
        return n + sum(n - 1);
    }
    print sum(6);
"#] "21");

tests!(printing_a_function_shows_its_name is OK [r#"
    fun foo() {}
    print foo;
"#] "<fn foo>");

tests!(printing_a_native_function_shows_its_name is OK ["print time;"] "<native fn time>");

tests!(too_many_parameters_is_a_parse_error is ERR [
    &format!("fun f({}) {{}}", (0..=255).map(|i| format!("a{i}")).collect::<Vec<_>>().join(", "))
] "Cannot have more than 255 parameters");

tests!(too_many_arguments_is_a_runtime_error is ERR [
    &format!("fun f() {{}} f({});", (0..=255).map(|i| i.to_string()).collect::<Vec<_>>().join(", "))
] "Cannot have more than 255 arguments");
