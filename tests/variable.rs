#[macro_use]
mod common;

tests!(redeclaring_a_local_in_the_same_scope_is_a_resolve_error is ERR [r#"
    {
        var a = "first";
        var a = "second";
    }
"#] "A variable is already defined with name 'a' in this scope");

tests!(duplicate_parameter_names_are_a_resolve_error is ERR [r#"
    fun f(arg, arg) {
        print arg;
    }
"#] "A variable is already defined with name 'arg' in this scope");

tests!(a_local_binds_to_the_scope_active_at_declaration_not_at_use is OK [r#"
    var a = "outer";
    {
        fun showA() {
            print a;
        }
        showA();
        var a = "inner";
        showA();
    }
"#] "outer", "outer");

tests!(redeclaring_a_global_is_allowed is OK [r#"
    var a = "first";
    var a = "second";
    print a;
"#] "second");

tests!(reassigning_a_global_is_allowed is OK [r#"
    var a = 1;
    a = 2;
    print a;
"#] "2");

tests!(shadowing_a_global_with_a_local_and_restoring_it_after_the_block is OK [r#"
    var a = "global";
    {
        var a = "local";
        print a;
    }
    print a;
"#] "local", "global");

tests!(nested_blocks_can_see_an_outer_blocks_local is OK [r#"
    {
        var a = "outer";
        {
            print a;
        }
    }
"#] "outer");

tests!(referencing_an_undefined_global_is_a_runtime_error is ERR [r#"
    print notDefined;
"#] "Undefined variable 'notDefined'");

tests!(referencing_an_undefined_local_is_a_runtime_error is ERR [r#"
    {
        print notDefined;
    }
"#] "Undefined variable 'notDefined'");

tests!(an_uninitialized_variable_defaults_to_nil is OK [r#"
    var a;
    print a;
"#] "nil");

tests!(using_false_as_a_variable_name_is_a_parse_error is ERR [r#"
    var false = 1;
"#] "Expect variable name");

tests!(using_nil_as_a_variable_name_is_a_parse_error is ERR [r#"
    var nil = 1;
"#] "Expect variable name");

tests!(a_locals_initializer_may_read_an_enclosing_variable_of_a_different_name is OK [r#"
    var a = "value";
    {
        var b = a;
        print b;
    }
"#] "value");

tests!(a_local_initializer_cannot_read_its_own_not_yet_defined_name is ERR [r#"
    {
        var a = "outer";
        var a = a;
    }
"#] "Cannot read local variable in its own initializer");
