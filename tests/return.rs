#[macro_use]
mod common;

tests!(code_after_a_return_in_an_if_branch_does_not_run is OK [r#"
    fun f() {
        if (true) {
            return "ok";
        }
        print "unreachable";
    }
    print f();
"#] "ok");

tests!(code_after_a_return_in_a_while_loop_does_not_run_again is OK [r#"
    fun f() {
        var i = 0;
        while (true) {
            if (i == 2) return "ok";
            i = i + 1;
        }
    }
    print f();
"#] "ok");

tests!(return_with_no_value_yields_nil is OK [r#"
    fun f() {
        return;
    }
    print f();
"#] "nil");

tests!(falling_off_the_end_of_a_function_yields_nil is OK [r#"
    fun f() {
        print "side effect";
    }
    print f();
"#] "side effect", "nil");

tests!(return_at_top_level_is_a_resolve_error is ERR [r#"
    return "no function here";
"#] "Cannot return from top-level code");

tests!(returning_a_closure_still_carries_its_captured_environment is OK [r#"
    fun make() {
        var x = "captured";
        fun inner() { return x; }
        return inner;
    }
    print make()();
"#] "captured");
