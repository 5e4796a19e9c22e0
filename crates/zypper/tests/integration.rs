//! Integration tests for zypper invocation

#[cfg(test)]
mod tests {
    use autopatch_errors::ZypperError;
    use autopatch_types::{Outcome, Subcommand};
    use autopatch_zypper::testing::{ScriptedRunner, UnspawnableRunner};
    use autopatch_zypper::*;
    use proptest::prelude::*;

    const ZYPPER: &str = "/usr/bin/zypper";

    #[test]
    fn test_classifier_table() {
        use Subcommand::{Apply, Check, List, PostCheck};

        let cases = [
            (Check, 0, Outcome::NoPatchesNeeded),
            (Check, 100, Outcome::PatchesAvailable),
            (Check, 101, Outcome::SecurityPatchesAvailable),
            (Check, 102, Outcome::HardFailure(102)),
            (List, 0, Outcome::Listed),
            (List, 100, Outcome::HardFailure(100)),
            (Apply, 0, Outcome::AppliedOk),
            (Apply, 102, Outcome::AppliedRebootNeeded),
            (Apply, 103, Outcome::AppliedRestartManagerNeeded),
            (Apply, 107, Outcome::HardFailure(107)),
            (PostCheck, 0, Outcome::PostCheckOk),
            (PostCheck, 102, Outcome::PostCheckRebootNeeded),
            (PostCheck, 103, Outcome::HardFailure(103)),
            (PostCheck, 7, Outcome::Locked),
            (List, 106, Outcome::ReposSkipped),
        ];
        for (sub, code, expected) in cases {
            assert_eq!(classify(sub, code), expected, "{sub} {code}");
        }
    }

    #[test]
    fn test_accepted_codes() {
        assert_eq!(accepted_codes(Subcommand::Check), vec![0, 100, 101]);
        assert_eq!(accepted_codes(Subcommand::List), vec![0]);
        assert_eq!(accepted_codes(Subcommand::Apply), vec![0, 102, 103]);
        assert_eq!(accepted_codes(Subcommand::PostCheck), vec![0, 102]);
        for sub in Subcommand::ALL {
            assert!(!is_accepted(sub, 7));
        }
    }

    #[test]
    fn test_invoke_writes_output_and_records_span() {
        let runner = ScriptedRunner::new().outputs(Subcommand::Check, &[(100, "2 patches needed\n")]);
        let zypper = Zypper::new(runner, ZYPPER);
        let mut sink = String::from("earlier\n");

        let invocation = zypper.invoke(Subcommand::Check, &mut sink).unwrap();
        assert_eq!(invocation.outcome, Outcome::PatchesAvailable);
        assert_eq!(invocation.exit_code, 100);
        assert_eq!(
            invocation.command,
            "/usr/bin/zypper --quiet --non-interactive patch-check"
        );
        assert_eq!(invocation.stdout, OutputSpan { offset: 8, len: 17 });
        assert_eq!(&sink[invocation.stdout.offset..invocation.stdout.end()], "2 patches needed\n");
    }

    #[test]
    fn test_failing_invoke_keeps_output() {
        let runner = ScriptedRunner::new().script(
            Subcommand::Apply,
            [RawOutput::exited(107, "installing foo\n").with_stderr("scriptlet failed")],
        );
        let zypper = Zypper::new(runner, ZYPPER);
        let mut sink = String::new();

        let err = zypper.invoke(Subcommand::Apply, &mut sink).unwrap_err();
        assert_eq!(sink, "installing foo\n");
        match err {
            ZypperError::Exit {
                outcome,
                exit_code,
                stderr,
                ..
            } => {
                assert_eq!(outcome, Outcome::HardFailure(107));
                assert_eq!(exit_code, 107);
                assert_eq!(stderr, "scriptlet failed");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_lock_is_classified_transient() {
        let runner = ScriptedRunner::new().codes(Subcommand::List, &[7]);
        let zypper = Zypper::new(runner, ZYPPER);
        let err = zypper.invoke(Subcommand::List, &mut String::new()).unwrap_err();
        assert_eq!(err.outcome(), Some(Outcome::Locked));
        assert_eq!(err.exit_code(), Some(7));
    }

    #[test]
    fn test_signal_is_terminated() {
        let runner = ScriptedRunner::new().script(
            Subcommand::PostCheck,
            [RawOutput {
                exit_code: None,
                ..RawOutput::default()
            }],
        );
        let zypper = Zypper::new(runner, ZYPPER);
        let err = zypper
            .invoke(Subcommand::PostCheck, &mut String::new())
            .unwrap_err();
        assert!(matches!(err, ZypperError::Terminated { .. }));
        assert_eq!(err.exit_code(), None);
    }

    #[test]
    fn test_spawn_failure_propagates() {
        let zypper = Zypper::new(UnspawnableRunner, ZYPPER);
        let err = zypper.invoke(Subcommand::Check, &mut String::new()).unwrap_err();
        assert!(matches!(err, ZypperError::SpawnFailed { .. }));
    }

    #[test]
    fn test_scripted_runner_repeats_last_step() {
        let runner = ScriptedRunner::new().codes(Subcommand::Check, &[7, 100]);
        let zypper = Zypper::new(runner, ZYPPER);
        let mut sink = String::new();

        assert!(zypper.invoke(Subcommand::Check, &mut sink).is_err());
        for _ in 0..3 {
            let invocation = zypper.invoke(Subcommand::Check, &mut sink).unwrap();
            assert_eq!(invocation.exit_code, 100);
        }
        assert_eq!(zypper.runner().count(Subcommand::Check), 4);
        assert_eq!(zypper.runner().count(Subcommand::Apply), 0);
    }

    fn any_subcommand() -> impl Strategy<Value = Subcommand> {
        prop::sample::select(Subcommand::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn classify_is_total_and_consistent(sub in any_subcommand(), code in -300i32..300) {
            let outcome = classify(sub, code);
            if is_accepted(sub, code) {
                prop_assert!(!outcome.is_failure());
            } else {
                prop_assert!(outcome.is_failure());
                prop_assert_eq!(outcome.exit_code(), Some(code));
            }
        }
    }
}
