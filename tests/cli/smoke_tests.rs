use predicates::prelude::*;

use crate::common::{DOGS, input_file, words};

#[test]
fn shows_help() {
    words()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("words"))
        .stdout(predicate::str::contains("--stem <LANGUAGE>"))
        .stdout(predicate::str::contains("--max-token-size"));
}

#[test]
fn shows_version() {
    words()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn one_word_per_line() {
    words()
        .write_stdin("Hello, world. Nice dog!")
        .assert()
        .success()
        .stdout("Hello\nworld\nNice\ndog\n");
}

#[test]
fn counts_words() {
    words().arg("--count").write_stdin(DOGS).assert().success().stdout("5\n");
}

#[test]
fn counts_all_tokens() {
    words().args(["-a", "-c"]).write_stdin(DOGS).assert().success().stdout("9\n");
}

#[test]
fn all_tokens_keep_punctuation_and_spaces() {
    words()
        .args(["--all", "--delimiter", "|"])
        .write_stdin("Hi, you")
        .assert()
        .success()
        .stdout("Hi|,| |you\n");
}

#[test]
fn delimiter_escapes_are_decoded() {
    words()
        .args(["-d", r"\t"])
        .write_stdin("one two")
        .assert()
        .success()
        .stdout("one\ttwo\n");

    words()
        .args(["-d", r"\x2c "])
        .write_stdin("one two")
        .assert()
        .success()
        .stdout("one, two\n");
}

#[test]
fn empty_delimiter_means_newline() {
    words().args(["-d", ""]).write_stdin("one two").assert().success().stdout("one\ntwo\n");
}

#[test]
fn empty_input() {
    words().write_stdin("").assert().success().stdout("\n");
    words().arg("-c").write_stdin("").assert().success().stdout("0\n");
}

#[test]
fn reads_file_argument() {
    let (_dir, path) = input_file("dogs.txt", DOGS.as_bytes());
    words().arg("-c").arg(&path).assert().success().stdout("5\n");
}

#[test]
fn dash_reads_stdin() {
    words().args(["-c", "-"]).write_stdin(DOGS).assert().success().stdout("5\n");
}

#[test]
fn invalid_utf8_passes_through_with_all() {
    words()
        .args(["-a", "-d", "|"])
        .write_stdin(&b"ab\xffcd"[..])
        .assert()
        .success()
        .stdout(&b"ab|\xff|cd\n"[..]);
}
