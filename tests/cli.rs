use assert_cmd::prelude::*;
use std::process::Command;

#[test]
fn run_convert() {
    let dir = std::env::temp_dir().join("iris2dhall-run-convert");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("iris.data"),
        "5.1,3.5,1.4,0.2,Iris-setosa\n7.0,3.2,4.7,1.4,Iris-versicolor\n",
    )
    .unwrap();
    let mut cmd = Command::cargo_bin("iris2dhall").unwrap();
    cmd.current_dir(&dir);
    cmd.assert().success().stdout(
        ", { sepal = { length = Length.centimeters 5.1, width = Length.centimeters 3.5 }, petal = { length = Length.centimeters 1.4, width = Length.centimeters 0.2 }, class = Setosa }\n\
         , { sepal = { length = Length.centimeters 7.0, width = Length.centimeters 3.2 }, petal = { length = Length.centimeters 4.7, width = Length.centimeters 1.4 }, class = Versicolor }\n",
    );
}

#[test]
fn run_missing_file() {
    let mut cmd = Command::cargo_bin("iris2dhall").unwrap();
    cmd.arg("doesntexist.data");
    cmd.assert().failure();
}

#[test]
fn run_short_record() {
    let dir = std::env::temp_dir().join("iris2dhall-run-short");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("iris.data"), "5.1,3.5,1.4,0.2\n").unwrap();
    let mut cmd = Command::cargo_bin("iris2dhall").unwrap();
    cmd.current_dir(&dir);
    cmd.assert().failure();
}
