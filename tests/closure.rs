#[macro_use]
mod common;

tests!(assign_to_closure is OK [r#"
    var f;
    var g;

    {
        var local = "local";
        fun f_() {
            print local;
            local = "after f";
            print local;
        }
        f = f_;

        fun g_() {
            print local;
            local = "after g";
            print local;
        }
        g = g_;
    }

    f();
    g();
"#] "local", "after f", "after f", "after g");

tests!(close_over_later_variable is OK [r#"
    fun f() {
        var a = "a";
        var b = "b";
        fun g() {
            print b;
            print a;
        }
        g();
    }
    f();
"#] "b", "a");

tests!(nested_closure is OK [r#"
    fun f() {
        var a = "a";
        fun g() {
            var b = "b";
            fun h() {
                var c = "c";
                fun i() {
                    print a;
                    print b;
                    print c;
                }
                i();
            }
            h();
        }
        g();
    }
    f();
"#] "a", "b", "c");

tests!(reference_closure_multiple_times is OK [r#"
    fun f() {
        var a = "a";
        fun g() {
            print a;
            print a;
        }
        g();
    }
    f();
"#] "a", "a");

tests!(closures_share_captured_mutable_state is OK [r#"
    fun counter() {
        var count = 0;
        fun increment() {
            count = count + 1;
            print count;
        }
        return increment;
    }

    var c = counter();
    c();
    c();
    c();
"#] "1", "2", "3");
