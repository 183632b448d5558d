//! # Integration Tests
//!
//! End-to-end runs through the file-backed router.
//!
//! Covers:
//! - the worked example from the help text
//! - destination reuse within and across inputs
//! - all-or-nothing cleanup on every error kind

#[cfg(test)]
mod contract_tests {
    use contracts::{Delimiter, ErrorKind, LineClass};

    #[test]
    fn test_classifier_examples() {
        let class = classifier::classify("FTEE", "// FTEE foo.bar baz.txt").unwrap();
        assert_eq!(
            class,
            LineClass::Directive(vec!["foo.bar".into(), "baz.txt".into()])
        );

        let cases = [
            ("//FTEE somefile", ErrorKind::UnboundedDelimiter),
            ("// FTEE foo.bar FTEE baz.txt", ErrorKind::MultipleDelimiters),
            ("// FTEE", ErrorKind::MissingTargets),
        ];
        for (line, kind) in cases {
            let err = classifier::classify("FTEE", line).unwrap_err();
            assert_eq!(err.kind(), kind, "line: {line:?}");
        }
    }

    #[test]
    fn test_default_delimiter() {
        assert_eq!(Delimiter::default().as_str(), contracts::DEFAULT_DELIMITER);
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use contracts::{ErrorKind, RunConfig};
    use tempfile::{tempdir, TempDir};

    /// Write `name` into `dir`, expanding `{dir}` to the directory path
    fn write_input(dir: &TempDir, name: &str, template: &str) -> PathBuf {
        let path = dir.path().join(name);
        let root = dir.path().display().to_string();
        fs::write(&path, template.replace("{dir}", &root)).unwrap();
        path
    }

    fn read(dir: &TempDir, name: &str) -> String {
        fs::read_to_string(dir.path().join(name)).unwrap()
    }

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// The worked example from `ftee --help`
    #[test]
    fn test_e2e_help_example() {
        let dir = tempdir().unwrap();
        let input = write_input(
            &dir,
            "input.txt",
            "This is ignored
FTEE {dir}/out1
This goes into out1 only.
FTEE {dir}/out2
This goes into out2 only.
FTEE {dir}/out1 {dir}/out3
This goes into out1 and out3.
",
        );

        let report = router::split_files(&RunConfig::default(), &[&input]).unwrap();

        assert_eq!(
            read(&dir, "out1"),
            "This goes into out1 only.\nThis goes into out1 and out3.\n"
        );
        assert_eq!(read(&dir, "out2"), "This goes into out2 only.\n");
        assert_eq!(read(&dir, "out3"), "This goes into out1 and out3.\n");
        assert_eq!(entries(dir.path()), ["input.txt", "out1", "out2", "out3"]);
        assert_eq!(report.destinations.len(), 3);
        assert_eq!(report.router.lines_discarded, 1);
    }

    /// A destination named again later is appended to, not truncated
    #[test]
    fn test_e2e_reused_destination_not_truncated() {
        let dir = tempdir().unwrap();
        let input = write_input(
            &dir,
            "input.txt",
            "# FTEE {dir}/a.txt
first
# FTEE {dir}/b.txt
other
# FTEE {dir}/a.txt
second
",
        );

        router::split_files(&RunConfig::default(), &[&input]).unwrap();
        assert_eq!(read(&dir, "a.txt"), "first\nsecond\n");
        assert_eq!(read(&dir, "b.txt"), "other\n");
    }

    /// Pre-existing files are overwritten once per run
    #[test]
    fn test_e2e_existing_output_overwritten() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("out.txt"), "stale contents\n").unwrap();
        let input = write_input(&dir, "input.txt", "FTEE {dir}/out.txt\nfresh\n");

        router::split_files(&RunConfig::default(), &[&input]).unwrap();
        assert_eq!(read(&dir, "out.txt"), "fresh\n");
    }

    /// Active targets survive the end of an input file
    #[test]
    fn test_e2e_multi_file_continuity() {
        let dir = tempdir().unwrap();
        let first = write_input(&dir, "a.in", "FTEE {dir}/out1\nfrom a\n");
        let second = write_input(&dir, "b.in", "from b\nFTEE {dir}/out2\nto out2\n");

        let report = router::split_files(&RunConfig::default(), &[&first, &second]).unwrap();

        assert_eq!(read(&dir, "out1"), "from a\nfrom b\n");
        assert_eq!(read(&dir, "out2"), "to out2\n");
        assert_eq!(report.inputs, [first, second]);
    }

    /// A later input can append to a destination an earlier input created
    #[test]
    fn test_e2e_later_input_appends() {
        let dir = tempdir().unwrap();
        let first = write_input(&dir, "a.in", "FTEE {dir}/shared\none\n");
        let second = write_input(&dir, "b.in", "FTEE {dir}/shared\ntwo\n");

        router::split_files(&RunConfig::default(), &[&first, &second]).unwrap();
        assert_eq!(read(&dir, "shared"), "one\ntwo\n");
    }

    /// Create failure on line N removes outputs from lines 1..N-1
    #[test]
    fn test_e2e_create_failure_is_atomic() {
        let dir = tempdir().unwrap();
        let input = write_input(
            &dir,
            "input.txt",
            "FTEE {dir}/good1
written
FTEE {dir}/good2 {dir}/good1
also written
FTEE {dir}/missing/dir/bad
never
",
        );

        let err = router::split_files(&RunConfig::default(), &[&input]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DestinationCreate);
        assert!(err.to_string().contains("line 5"), "got: {err}");
        assert_eq!(entries(dir.path()), ["input.txt"]);
    }

    /// Malformed directive in the second input removes outputs of the first
    #[test]
    fn test_e2e_directive_error_in_later_input() {
        let dir = tempdir().unwrap();
        let first = write_input(&dir, "a.in", "FTEE {dir}/out\nkept?\n");
        let second = write_input(&dir, "b.in", "more\n// FTEE\n");

        let err = router::split_files(&RunConfig::default(), &[&first, &second]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingTargets);
        let message = err.to_string();
        assert!(message.contains("b.in line 2"), "got: {message}");
        assert!(message.contains("No file names found after delimiter FTEE"));
        assert_eq!(entries(dir.path()), ["a.in", "b.in"]);
    }

    /// Missing input after successful ones still cleans up
    #[test]
    fn test_e2e_missing_input_cleans_up() {
        let dir = tempdir().unwrap();
        let first = write_input(&dir, "a.in", "FTEE {dir}/out\ndata\n");
        let missing = dir.path().join("nope.in");

        let err = router::split_files(&RunConfig::default(), &[&first, &missing]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InputOpen);
        assert!(err.to_string().contains("nope.in"));
        assert_eq!(entries(dir.path()), ["a.in"]);
    }

    /// Custom delimiter from a config file
    #[test]
    fn test_e2e_config_file_delimiter() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("ftee.toml");
        fs::write(&config_path, "delimiter = \"-->\"\n").unwrap();
        let config = config_loader::ConfigLoader::load_from_path(&config_path).unwrap();

        let input = write_input(
            &dir,
            "page.html",
            "<!-- --> {dir}/head.html -->\n<title>x</title>\n",
        );
        let err = router::split_files(&config, &[&input]).unwrap_err();
        // The closing "-->" is a second delimiter field
        assert_eq!(err.kind(), ErrorKind::MultipleDelimiters);

        let input = write_input(
            &dir,
            "page.html",
            "<!-- --> {dir}/head.html\n<title>x</title>\nFTEE is plain text here\n",
        );
        router::split_files(&config, &[&input]).unwrap();
        assert_eq!(
            read(&dir, "head.html"),
            "<title>x</title>\nFTEE is plain text here\n"
        );
    }

    /// Lines before the first directive go nowhere
    #[test]
    fn test_e2e_no_directive_no_output() {
        let dir = tempdir().unwrap();
        let input = write_input(&dir, "input.txt", "just\nsome\ntext\n");

        let report = router::split_files(&RunConfig::default(), &[&input]).unwrap();

        assert!(report.destinations.is_empty());
        assert_eq!(report.router.lines_discarded, 3);
        assert_eq!(entries(dir.path()), ["input.txt"]);
    }
}
