use predicates::prelude::*;

use crate::common::words;

#[test]
fn unknown_stemmer_fails_without_output() {
    words()
        .args(["--stem", "foo"])
        .write_stdin("")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("unknown stemmer language 'foo'"))
        .stderr(predicate::str::contains("english"));
}

#[test]
fn bad_delimiter_fails() {
    words()
        .args(["-d", r"\q"])
        .write_stdin("one two")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("couldn't parse delimiter"));
}

#[test]
fn missing_file_fails() {
    words()
        .arg("does/not/exist.txt")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot open does/not/exist.txt"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    words().arg("--bogus").assert().code(2);
}

#[test]
fn token_larger_than_buffer_fails() {
    words()
        .args(["--max-token-size", "8"])
        .write_stdin("a".repeat(64))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("token exceeds the 8 byte buffer limit"));
}

#[test]
fn tiny_buffer_still_splits_short_words() {
    words()
        .args(["--max-token-size", "16"])
        .write_stdin("one two three four five six")
        .assert()
        .success()
        .stdout("one\ntwo\nthree\nfour\nfive\nsix\n");
}

#[test]
fn unknown_stemmer_is_rejected_before_input_is_opened() {
    words()
        .args(["--stem", "foo", "does/not/exist.txt"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("unknown stemmer language 'foo'"))
        .stderr(predicate::str::contains("cannot open").not());
}
