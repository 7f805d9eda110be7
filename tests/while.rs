#[macro_use]
mod common;

tests!(while_loop_counts_up_while_condition_holds is OK [r#"
    var i = 0;
    while (i < 3) {
        print i;
        i = i + 1;
    }
"#] "0", "1", "2");

tests!(a_false_condition_skips_the_body_entirely is OK [r#"
    while (false) print "never";
    print "after";
"#] "after");

tests!(a_fresh_closure_per_iteration_captures_its_own_binding is OK [r#"
    fun run() {
        var i = 1;
        while (i <= 3) {
            var captured = i;
            fun show() { print captured; }
            show();
            i = i + 1;
        }
    }
    run();
"#] "1", "2", "3");

tests!(a_return_inside_a_while_body_stops_the_loop_immediately is OK [r#"
    fun f() {
        var i = 0;
        while (true) {
            if (i == 2) return i;
            i = i + 1;
        }
    }
    print f();
"#] "2");

tests!(var_is_not_an_expression_so_var_in_while_body_is_a_parse_error is ERR [r#"
    while (true) var i = 0;
"#] "Expected expression");

tests!(fun_is_not_an_expression_so_fun_in_while_body_is_a_parse_error is ERR [r#"
    while (true) fun f() {}
"#] "Expected expression");
