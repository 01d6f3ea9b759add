    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_delegate_not_found_carries_install_hint() {
        let empty = TempDir::new().unwrap();
        let err = Delegate::locate_in("fizzy", Some(empty.path().as_os_str()), empty.path()).unwrap_err();
        match &err {
            Error::DelegateNotFound { name, install_hint, .. } => {
                assert_eq!(name, "fizzy");
                assert!(install_hint.contains("fizzy-cli"));
            }
            other => panic!("expected DelegateNotFound, got {other:?}"),
        }
        assert_eq!(err.to_string(), "fizzy command not found in PATH");
    }

    #[test]
    fn test_delegate_unstartable_is_execution_error() {
        let dir = TempDir::new().unwrap();
        let delegate = Delegate {
            path: dir.path().join("vanished"),
        };
        let err = delegate.run(&[]).unwrap_err();
        assert!(matches!(err, Error::DelegateExecution { .. }));
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        fn sh() -> Delegate {
            Delegate::locate("sh").expect("sh should be on PATH")
        }

        fn run_sh(script: &str) -> i32 {
            let args = [OsString::from("-c"), OsString::from(script)];
            exit_code(sh().run(&args).unwrap())
        }

        #[test]
        fn test_delegate_success_maps_to_zero() {
            assert_eq!(run_sh("exit 0"), 0);
        }

        #[test]
        fn test_delegate_exit_code_passes_through() {
            assert_eq!(run_sh("exit 3"), 3);
            assert_eq!(run_sh("exit 42"), 42);
        }

        #[test]
        fn test_delegate_signal_maps_to_shell_convention() {
            assert_eq!(run_sh("kill -TERM $$"), 128 + 15);
        }

        #[test]
        fn test_delegate_located_in_custom_path() {
            let dir = TempDir::new().unwrap();
            let script = dir.path().join("fizzy");
            fs::write(&script, "#!/bin/sh\nexit 5\n").unwrap();
            fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

            let delegate = Delegate::locate_in("fizzy", Some(dir.path().as_os_str()), dir.path()).unwrap();
            assert_eq!(delegate.path(), script.as_path());
            assert_eq!(exit_code(delegate.run(&[]).unwrap()), 5);
        }
    }
