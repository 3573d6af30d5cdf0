use assert_cmd::Command;
use predicates::prelude::*;

fn bft() -> Command {
    Command::cargo_bin("bft").unwrap()
}

#[test]
fn eval_runs_the_cell_counting_program() {
    bft()
        .arg("-e")
        .arg("++++++++[>++++++++<-]>+.")
        .assert()
        .success()
        .stdout("A\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn eval_runs_hello_world() {
    let code = "++++++++++[>+++++++>++++++++++>+++>+<<<<-]>++.>+.+++++++..+++.>++.\
                <<+++++++++++++++.>.+++.------.--------.>+.>.";
    bft()
        .arg("--eval")
        .arg(code)
        .assert()
        .success()
        .stdout("Hello World!\n\n");
}

#[test]
fn empty_program_prints_only_the_trailing_newline() {
    bft().arg("-e").arg("").assert().success().stdout("\n");
}

#[test]
fn comment_text_around_instructions_is_ignored() {
    bft()
        .arg("-e")
        .arg("print an A: ++++++++ [>++++++++<-] >+. done")
        .assert()
        .success()
        .stdout("A\n");
}

#[test]
fn eval_conflicts_with_file_arguments() {
    bft()
        .arg("-e")
        .arg("+.")
        .arg("program.bf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
