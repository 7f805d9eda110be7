#[macro_use]
mod common;

tests!(empty_block_does_not_break_surrounding_code is OK ["{} print \"ok\";"] "ok");

tests!(block_scope_shadows_outer_scope is OK [r#"
    var a = "outer";
    {
        var a = "inner";
        print a;
    }
    print a;
"#] "inner", "outer");

tests!(assignment_in_block_escapes_it is OK [r#"
    var a = "outer";
    {
        a = "inner";
    }
    print a;
"#] "inner");
