use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .arg("1")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert!(v["id"].is_u64());
    assert_eq!(v["phase"], "Action");
    assert_eq!(v["players"].as_array().map(Vec::len), Some(2));
    assert_eq!(v["arena"]["grids"].as_array().map(Vec::len), Some(2));
}

#[test]
fn sim_binary_is_deterministic() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_sim"))
            .arg("42")
            .output()
            .expect("failed to run sim binary")
            .stdout
    };
    assert_eq!(run(), run());
}
