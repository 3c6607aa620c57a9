use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

use pretty_assertions::assert_eq;

fn packvec(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_packvec"))
        .args(args)
        .output()
        .expect("packvec should be runnable")
}

fn stdout(args: &[&str]) -> String {
    let output = packvec(args);
    assert!(output.status.success(), "{output:?}");
    String::from_utf8(output.stdout).expect("output should be utf8")
}

#[test]
fn bits_change_base() {
    assert_eq!(stdout(&["bits", "0x55555"]), "/lll1\n");
    assert_eq!(stdout(&["bits", "/lll1", "--base", "16"]), "0x555550\n");
    assert_eq!(
        stdout(&["bits", "0x55555", "-b", "2"]),
        "0b10101010101010101010\n"
    );
    assert_eq!(stdout(&["bits", "0x55555", "--json"]), "BitVec[/lll1]\n");
}

#[test]
fn bits_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_packvec"))
        .args(["bits", "--base", "8"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("packvec should be runnable");
    let Some(mut stdin) = child.stdin.take() else {
        panic!("couldn't retrieve stdin handle to packvec")
    };
    stdin
        .write_all(b"0b101\n")
        .expect("writing into packvec stdin should work");
    drop(stdin);

    let output = child.wait_with_output().expect("packvec should exit");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "05\n");
}

#[test]
fn ones() {
    assert_eq!(stdout(&["ones", "0x55"]), "0 2 4 6\n");
    assert_eq!(stdout(&["ones", "0x00"]), "\n");
}

#[test]
fn bad_bits() {
    let output = packvec(&["bits", "1000AFG"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid bit string"), "{stderr}");

    assert!(!packvec(&["bits", "0x55", "--base", "10"]).status.success());
}

#[test]
fn numbers() {
    assert_eq!(stdout(&["ints", "1,2,3"]), "1,2,3\n");
    assert_eq!(stdout(&["ints", "-15,-17", "--sum"]), "-32\n");
    assert_eq!(stdout(&["ints", "1, 2", "--json"]), "[1,2]\n");
    assert_eq!(stdout(&["floats", "0.5,1.25", "--sum"]), "1.75\n");
    assert_eq!(stdout(&["--growth", "exact", "floats", "0.5,2"]), "0.5,2\n");
    assert!(!packvec(&["ints", "1,x"]).status.success());
}

#[test]
fn negative_numbers_are_values() {
    assert_eq!(stdout(&["ints", "-15,-17"]), "-15,-17\n");
    assert_eq!(stdout(&["ints", "--sum", "-15,-17"]), "-32\n");
    assert_eq!(stdout(&["floats", "-0.5,2", "--json"]), "[-0.5,2.0]\n");
    assert_eq!(stdout(&["--growth", "exact", "ints", "-1"]), "-1\n");

    let output = packvec(&["ints", "-1,-x"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid i32 list"), "{stderr}");
}
