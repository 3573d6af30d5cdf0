// Exercises the ',' (input) instruction with bytes piped on stdin. The
// program itself comes from a file or --eval so stdin stays free for input.
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn bft() -> Command {
    Command::cargo_bin("bft").unwrap()
}

#[test]
fn reads_one_byte_from_stdin_and_echoes_it() {
    let mut program = NamedTempFile::new().unwrap();
    program.write_all(b",.").unwrap();

    bft()
        .arg(program.path())
        .write_stdin("Z")
        .assert()
        .success()
        .stdout("Z\n");
}

#[test]
fn copies_stdin_to_stdout_until_end_of_input() {
    // ",[.,]" is the classic cat program; it relies on EOF writing 0.
    bft()
        .arg("-e")
        .arg(",[.,]")
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn end_of_input_writes_zero_into_the_cell() {
    // The cell holds 3 before the ',' at EOF; afterwards '.' emits 0.
    bft()
        .arg("-e")
        .arg("+++,.")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::eq(b"\x00\n" as &[u8]));
}
