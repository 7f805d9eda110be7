use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_FIXTURE_ID: AtomicU32 = AtomicU32::new(0);

/// Writes `source` to a fresh file under the system temp directory and
/// returns its path. Used by the `is ERR` arm of [`tests!`] so it can drive
/// the real `rocks` binary (and observe its real exit code) the way
/// `assert_cmd` expects, rather than the library API directly.
pub fn write_fixture(source: &str) -> std::path::PathBuf {
    let id = NEXT_FIXTURE_ID.fetch_add(1, Ordering::Relaxed);
    let mut path = std::env::temp_dir();
    path.push(format!("rocks-test-{}-{}.rocks", std::process::id(), id));
    std::fs::write(&path, source).expect("should have been able to write the fixture file");
    path
}

/// Runs an inline Rocks source string against an in-process interpreter and
/// asserts its captured stdout, or drives the real `rocks` binary over a
/// temp file and asserts its stderr and exit status.
///
/// Source is supplied inline rather than read from a fixture-file tree.
#[macro_export]
macro_rules! tests {
    ($name:ident is OK [$source:expr] $($expected:expr),* $(,)?) => {
        #[test]
        fn $name() {
            use rocks_lang::interpreter::{CaptureWriter, Interpreter};
            use rocks_lang::parser::Parser;
            use rocks_lang::resolver::Resolver;
            use rocks_lang::scanner::Scanner;

            let tokens = Scanner::new($source).scan_tokens();
            let statements = Parser::new(tokens).parse();

            let output = CaptureWriter::new();
            let mut interpreter = Interpreter::with_writer(Box::new(output.clone()));
            Resolver::new(&mut interpreter).resolve(&statements);
            interpreter.interpret(&statements);

            #[allow(unused_mut)]
            let mut expected: Vec<&str> = vec![$($expected),*];
            let joined = if expected.is_empty() {
                String::new()
            } else {
                expected.push("");
                expected.join("\n")
            };

            assert_eq!(output.contents(), joined);
        }
    };

    ($name:ident is ERR [$source:expr] $($expected:expr),* $(,)?) => {
        #[test]
        fn $name() {
            use assert_cmd::Command;

            let path = $crate::common::write_fixture($source);

            let output = Command::cargo_bin("rocks").unwrap()
                .arg(&path)
                .output()
                .expect("rocks binary should have run");

            std::fs::remove_file(&path).ok();

            assert!(!output.status.success(), "expected a non-zero exit code");

            let stderr = String::from_utf8(output.stderr).expect("stderr should be valid UTF-8");
            for expected in [$($expected),*] {
                assert!(
                    stderr.contains(expected),
                    "expected stderr to contain {expected:?}, got {stderr:?}"
                );
            }
        }
    };
}
