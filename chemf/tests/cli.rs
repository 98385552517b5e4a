//! Runs the `chemf` binary the way a user would.

use assert_cmd::Command;
use predicates::prelude::*;

fn chemf() -> Command {
    Command::cargo_bin("chemf").unwrap()
}

#[test]
fn help() {
    chemf()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("empirical formulas"));
}

#[test]
fn convert_arguments() {
    chemf()
        .args(["(CH3)2C[C6H2(Br)2OH]2", "[(CH3)2SiH]2NH", "NaCl"])
        .assert()
        .success()
        .stdout("Br4C15H12O2\nC4H15NSi2\nClNa\n");
}

#[test]
fn hill_order() {
    chemf()
        .args(["--hill", "(CH3)2C[C6H2(Br)2OH]2"])
        .assert()
        .success()
        .stdout("C15H12Br4O2\n");
}

#[test]
fn json_output() {
    chemf()
        .args(["--json", "H2O"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""formula":"H2O""#))
        .stdout(predicate::str::contains(r#""composition":{"H":2,"O":1}"#));
}

#[test]
fn names_output() {
    chemf()
        .args(["--names", "NaCl"])
        .assert()
        .success()
        .stdout("Cl\tchlorine\t1\nNa\tsodium\t1\n");
}

#[test]
fn strict_rejects_unclosed_group() {
    chemf()
        .arg("(CH3")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("unclosed group"));
}

#[test]
fn lenient_warns_on_unclosed_group() {
    chemf()
        .args(["--lenient", "(CH3"])
        .assert()
        .success()
        .stdout("CH3\n")
        .stderr(predicate::str::contains("Warning"));
}

#[test]
fn one_failure_fails_the_run() {
    chemf()
        .args(["H2O", "Xx", "CO2"])
        .assert()
        .failure()
        .stdout("H2O\nCO2\n")
        .stderr(predicate::str::contains("Xx"));
}

#[test]
fn stdin_lines() {
    chemf()
        .write_stdin("Ca(OH)2\n\n  \nK4[Fe(CN)6]\n")
        .assert()
        .success()
        .stdout("CaH2O2\nC6FeK4N6\n");
}

#[test]
fn empty_formula() {
    chemf()
        .arg("")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("empty formula"));
}

#[test]
fn blank_formula() {
    chemf()
        .arg(" ")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("empty formula"));
}

#[test]
fn deeply_nested_formula() {
    let formula = format!("{}H{}", "(".repeat(10_000), ")".repeat(10_000));
    chemf()
        .arg(formula)
        .assert()
        .failure()
        .stderr(predicate::str::contains("nested too deeply"));
}
