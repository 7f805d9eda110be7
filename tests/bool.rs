#[macro_use]
mod common;

tests!(equality_is_structural is OK [r#"
    print true == true;
    print true == false;
    print false == true;
    print false == false;
    print true == 1;
    print false == 0;
    print true == "true";
    print false == "false";
"#] "true", "false", "false", "true", "false", "false", "false", "false");

tests!(not_negates is OK [r#"
    print !true;
    print !false;
    print !!true;
"#] "false", "true", "true");
