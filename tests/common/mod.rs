use assert_cmd::Command;

pub fn orgtag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("orgtag").unwrap();
    cmd.env_remove("GITHUB_TOKEN");
    cmd.env_remove("RUST_LOG");
    cmd
}
