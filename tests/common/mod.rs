use assert_cmd::Command;

pub fn journalyze_cmd() -> Command {
    let mut cmd = Command::cargo_bin("journalyze").unwrap();
    cmd.env_remove("JOURNALYZE_ROOT");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}
