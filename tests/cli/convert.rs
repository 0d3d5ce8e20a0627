use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

const CONFIG: &str = r#"{
    "baseDir": ".",
    "jobs": [{ "source": "words.txt", "dest": "words.json" }]
}"#;

#[test]
fn test_convert_writes_exact_output() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".freqdictrc.json", CONFIG)?;
    test.write_file("words.txt", "le 100\nla 90\n")?;

    let output = test.convert_command().output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("words.json")?,
        "[\n  {\"w\":\"le\",\"f\":100},\n  {\"w\":\"la\",\"f\":90}\n]"
    );

    Ok(())
}

#[test]
fn test_convert_empty_input() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".freqdictrc.json", CONFIG)?;
    test.write_file("words.txt", "")?;

    let output = test.convert_command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("words.json")?, "[\n]");

    Ok(())
}

#[test]
fn test_convert_skips_invalid_lines_with_warnings() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".freqdictrc.json", CONFIG)?;
    test.write_file("words.txt", "le 100\nsolo\nword abc\nla 90\n")?;

    let output = test.convert_command().output()?;

    // Warnings map to exit code 1, but the file is still produced.
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        test.read_file("words.json")?,
        "[\n  {\"w\":\"le\",\"f\":100},\n  {\"w\":\"la\",\"f\":90}\n]"
    );

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("line 2"));
    assert!(stdout.contains("malformed-line"));
    assert!(stdout.contains("line 3"));
    assert!(stdout.contains("invalid-frequency"));

    Ok(())
}

#[test]
fn test_blank_lines_produce_no_warnings() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".freqdictrc.json", CONFIG)?;
    test.write_file("words.txt", "\nle 100\n\n\nla 90\n")?;

    let output = test.convert_command().output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(!stdout.contains("warning"));

    Ok(())
}

#[test]
fn test_missing_source_does_not_block_other_jobs() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".freqdictrc.json",
        r#"{
            "baseDir": ".",
            "jobs": [
                { "source": "missing.txt", "dest": "missing.json" },
                { "source": "words.txt", "dest": "words.json" }
            ]
        }"#,
    )?;
    test.write_file("words.txt", "la 90\n")?;

    let output = test.convert_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(!test.file_exists("missing.json"));
    assert_eq!(test.read_file("words.json")?, "[\n  {\"w\":\"la\",\"f\":90}\n]");

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("missing.txt not found"));
    assert!(stdout.contains("source-not-found"));

    Ok(())
}

#[test]
fn test_multi_word_phrases_and_non_ascii() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".freqdictrc.json", CONFIG)?;
    test.write_file("words.txt", "New York 1234\nschön 42\n")?;

    let output = test.convert_command().output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("words.json")?,
        "[\n  {\"w\":\"New York\",\"f\":1234},\n  {\"w\":\"schön\",\"f\":42}\n]"
    );

    Ok(())
}

#[test]
fn test_destination_is_overwritten() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".freqdictrc.json", CONFIG)?;
    test.write_file("words.txt", "le 100\n")?;
    test.write_file("words.json", "[\n  {\"w\":\"stale\",\"f\":1}\n]")?;

    let output = test.convert_command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("words.json")?, "[\n  {\"w\":\"le\",\"f\":100}\n]");

    Ok(())
}

#[test]
fn test_base_dir_flag_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".freqdictrc.json",
        r#"{
            "baseDir": "wrong",
            "jobs": [{ "source": "words.txt", "dest": "words.json" }]
        }"#,
    )?;
    test.write_file("data/words.txt", "le 100\n")?;

    let output = test.convert_command().args(["--base-dir", "data"]).output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("data/words.json")?,
        "[\n  {\"w\":\"le\",\"f\":100}\n]"
    );

    Ok(())
}

#[test]
fn test_default_jobs_without_config() -> Result<()> {
    let test = CliTest::new()?;
    // Stop the config file search at the project root.
    test.write_file(".git/HEAD", "ref: refs/heads/main\n")?;

    let output = test.convert_command().output()?;

    // None of the default dictionary sources exist, so every job is skipped.
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("en_50k.txt not found"));
    assert!(stdout.contains("es_50k.txt not found"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".freqdictrc.json", "{ not json")?;

    let output = test.convert_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Failed to parse config file"));

    Ok(())
}

#[test]
fn test_verbose_prints_progress() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".freqdictrc.json", CONFIG)?;
    test.write_file("words.txt", "le 100\n")?;

    let output = test.convert_command().arg("--verbose").output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Reading"));
    assert!(stdout.contains("words.txt"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("convert"));
    assert!(stdout.contains("init"));

    Ok(())
}
