#[macro_use]
mod common;

tests!(trailing_dot_with_no_digits_is_a_scan_error is ERR [r#"
    print 123.;
"#] "Unterminated number");

tests!(leading_dot_is_not_a_valid_number_and_parses_as_an_error is ERR [r#"
    print .456;
"#] "Expected expression");

tests!(literals_round_trip_through_display is OK [r#"
    print 123;
    print 987654;
    print 0;
    print 123.456;
    print -0.001;
"#] "123", "987654", "0", "123.456", "-0.001");

tests!(division_by_a_variable_holding_zero_is_still_a_runtime_error is ERR [r#"
    var z = 0;
    print 1 / z;
"#] "Division by 0");
