#[macro_use]
mod common;

tests!(empty_file_produces_no_output is OK [""]);

tests!(precedence_follows_the_arithmetic_ladder is OK [r#"
    print 2 + 3 * 4;
    print 20 - 3 * 4;
    print (2 + 3) * (4 - 2);
    print 10 - 2 - 3 - 5;
    print 1 < 2 == 3 < 4;
    print 2 + 2 == 4;
    print !(1 == 2);
    print true and true or false;
"#] "14", "8", "10", "0", "true", "true", "true", "true");

tests!(unexpected_character_is_a_scan_error is ERR [r#"
    var a = 1;
    var b = a | 2;
"#] "Unexpected character '|'");
