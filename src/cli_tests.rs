    use super::*;

    fn classify(args: &[&str]) -> Invocation {
        let args: Vec<OsString> = args.iter().map(OsString::from).collect();
        Invocation::classify(&args)
    }

    #[test]
    fn test_cli_empty_args() {
        assert_eq!(classify(&[]), Invocation::NoArgs);
    }

    #[test]
    fn test_cli_version_flags() {
        assert_eq!(classify(&["--version"]), Invocation::Version);
        assert_eq!(classify(&["-v"]), Invocation::Version);
    }

    #[test]
    fn test_cli_version_only_when_sole_argument() {
        // fizzy may have its own -v / --version under a subcommand.
        assert_eq!(classify(&["card", "--version"]), Invocation::Forward);
        assert_eq!(classify(&["-v", "card"]), Invocation::Forward);
        assert_eq!(classify(&["--version", "--version"]), Invocation::Forward);
    }

    #[test]
    fn test_cli_other_single_args_forward() {
        assert_eq!(classify(&["--help"]), Invocation::Forward);
        assert_eq!(classify(&["-V"]), Invocation::Forward);
        assert_eq!(classify(&[""]), Invocation::Forward);
    }

    #[test]
    fn test_cli_version_line() {
        let line = version_line();
        assert!(line.starts_with("fizzy-md version "));
        assert!(line.ends_with(env!("CARGO_PKG_VERSION")));
        assert!(!line.contains('\n'));
    }
