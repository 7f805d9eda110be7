#[macro_use]
mod common;

tests!(line_comment_at_eof_does_not_crash is OK ["print \"ok\"; // comment"] "ok");

tests!(only_line_comment_produces_no_output is OK ["// comment"]);

tests!(only_line_comment_and_newline_produces_no_output is OK ["// comment\n"]);

tests!(block_comment_can_span_multiple_lines is OK [r#"
    /* this
       spans
       lines */
    print "ok";
"#] "ok");

tests!(block_comments_nest is OK [r#"
    /* outer /* inner */ still outer */
    print "ok";
"#] "ok");

tests!(unicode_in_a_comment_is_ignored is OK ["// 日本語 emoji 🎉\nprint \"ok\";"] "ok");
