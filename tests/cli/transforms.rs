use crate::common::{DOGS, words};

#[test]
fn lower_and_upper() {
    words().args(["--lower", "-d", " "]).write_stdin("Hello, goodbye").assert().success().stdout("hello goodbye\n");
    words().args(["--upper", "-d", " "]).write_stdin("Hello, goodbye").assert().success().stdout("HELLO GOODBYE\n");
}

#[test]
fn strips_diacritics() {
    words()
        .args(["--diacritics", "-d", " "])
        .write_stdin("I am reading a résumé in Malmö")
        .assert()
        .success()
        .stdout("I am reading a resume in Malmo\n");

    words()
        .args(["--diacritics", "--lower", "-d", " "])
        .write_stdin("I am reading a résumé in Malmö")
        .assert()
        .success()
        .stdout("i am reading a resume in malmo\n");
}

#[test]
fn stems_english() {
    words()
        .args(["--stem", "english", "-d", " "])
        .write_stdin(DOGS)
        .assert()
        .success()
        .stdout("I am walk the Dog\n");
}

#[test]
fn stemmer_language_is_case_insensitive() {
    words().args(["--stem", "English"]).write_stdin("walking").assert().success().stdout("walk\n");
}

#[test]
fn transform_order_follows_the_command_line() {
    words()
        .args(["--stem", "english", "--upper"])
        .write_stdin("walking")
        .assert()
        .success()
        .stdout("WALK\n");

    words()
        .args(["--upper", "--stem", "english"])
        .write_stdin("walking")
        .assert()
        .success()
        .stdout("WALKING\n");
}

#[test]
fn count_ignores_transforms() {
    words().args(["-c", "--stem", "english", "--lower"]).write_stdin(DOGS).assert().success().stdout("5\n");
}
