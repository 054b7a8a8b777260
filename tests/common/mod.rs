use assert_cmd::Command;

pub fn moodlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodlog").unwrap();
    cmd.env_remove("MOODLOG_CONFIG");
    cmd.env_remove("MOODLOG_SYSTEM_SCHEME");
    cmd.env_remove("MOODLOG_LOG");
    cmd
}
