//! Property-based tests for vocabulary checking and argument passthrough

use proptest::prelude::*;
use refl::error::CommandError;
use refl::protocol::{
    Backend, CommandKind, Commands, ComputeMode, Range, RemoveOrKeep, Rewrite, UseForce,
};

fn rewrite_token() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(Rewrite::TOKENS)
}

/// Identifier-shaped words that are not in `tokens`
fn outside(tokens: &'static [&'static str]) -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,12}".prop_filter("legal token", move |v| !tokens.contains(&v.as_str()))
}

proptest! {
    /// A legal token appears verbatim in the inner command
    #[test]
    fn test_valid_rewrite_tokens_pass_through(token in rewrite_token()) {
        let mut commands = Commands::new("Foo.agda");
        let line = commands.issue_line(&format!("solveAll {}", token)).unwrap();
        prop_assert_eq!(line, format!("IOTCM \"Foo.agda\" NonInteractive Indirect (Cmd_solveAll {})", token));
        prop_assert_eq!(commands.history().len(), 1);
    }

    /// Anything outside the closed set is rejected and leaves no history
    #[test]
    fn test_unknown_backends_are_rejected(value in "[A-Za-z][A-Za-z0-9]{0,12}") {
        prop_assume!(!Backend::TOKENS.contains(&value.as_str()));

        let mut commands = Commands::new("Foo.agda");
        let err = commands.issue_line(&format!("compile {}", value)).unwrap_err();
        prop_assert_eq!(
            err,
            CommandError::InvalidArgument {
                value: value.clone(),
                allowed: Backend::TOKENS.to_vec(),
            }
        );
        prop_assert!(commands.history().is_empty());
    }

    /// Vocabulary parsing is case-sensitive
    #[test]
    fn test_compute_mode_case_matters(index in 0..ComputeMode::TOKENS.len()) {
        let token = ComputeMode::TOKENS[index];
        prop_assert!(token.parse::<ComputeMode>().is_ok());
        let lowered = token.to_lowercase();
        prop_assert!(lowered.parse::<ComputeMode>().is_err());
    }

    /// Expressions are embedded without escaping or alteration
    #[test]
    fn test_expressions_are_embedded_verbatim(expr in "[a-z][a-z0-9 _+]{0,20}[a-z0-9]") {
        let mut commands = Commands::new("Foo.agda");
        let line = commands.infer_toplevel(Rewrite::AsIs, &expr);
        prop_assert_eq!(
            line,
            format!("IOTCM \"Foo.agda\" NonInteractive Indirect (Cmd_infer_toplevel AsIs \"{}\")", expr)
        );
    }

    /// Flags appear quoted, comma-separated and in order
    #[test]
    fn test_compile_flags_keep_order(flags in proptest::collection::vec("-[a-z0-9-]{1,8}", 0..5)) {
        let mut commands = Commands::new("Foo.agda");
        commands.compile(Backend::GhcNoMain, &flags);
        let quoted: Vec<String> = flags.iter().map(|f| format!("\"{}\"", f)).collect();
        prop_assert_eq!(
            &commands.history()[0],
            &format!("Cmd_compile GHCNoMain \"Foo.agda\" [{}]", quoted.join(","))
        );
    }

    /// Every backend renders its own token in a global compile
    #[test]
    fn test_every_backend_reaches_compile(backend in proptest::sample::select(Backend::ALL)) {
        let mut commands = Commands::new("Foo.agda");
        let line = commands.compile(backend, &[] as &[&str]);
        prop_assert_eq!(
            line,
            format!("IOTCM \"Foo.agda\" None Indirect (Cmd_compile {} \"Foo.agda\" [])", backend.as_str())
        );
    }

    /// Both compute commands carry the chosen mode, each in its own scope
    #[test]
    fn test_every_compute_mode_reaches_both_compute_commands(
        mode in proptest::sample::select(ComputeMode::ALL),
    ) {
        let mut commands = Commands::new("Foo.agda");
        prop_assert_eq!(
            commands.compute(mode),
            format!("IOTCM \"Foo.agda\" NonInteractive Indirect (Cmd_compute {})", mode)
        );
        prop_assert_eq!(
            commands.compute_toplevel(mode, "suc zero"),
            format!("IOTCM \"Foo.agda\" None Indirect (Cmd_compute_toplevel {} \"suc zero\")", mode)
        );
        prop_assert_eq!(commands.history().len(), 2);
    }

    /// Token highlighting puts the choice after the file name
    #[test]
    fn test_every_remove_or_keep_reaches_token_highlighting(
        remove in proptest::sample::select(RemoveOrKeep::ALL),
    ) {
        let mut commands = Commands::new("Foo.agda");
        prop_assert_eq!(
            commands.token_highlighting(remove),
            format!("IOTCM \"Foo.agda\" NonInteractive Indirect (Cmd_tokenHighlighting \"Foo.agda\" {})", remove)
        );
    }

    /// Give carries the force flag ahead of the interaction id
    #[test]
    fn test_every_use_force_reaches_give(
        force in proptest::sample::select(UseForce::ALL),
        id in 0u32..1000,
    ) {
        let mut commands = Commands::new("Foo.agda");
        prop_assert_eq!(
            commands.give(force, id, Range::empty()),
            format!("IOTCM \"Foo.agda\" NonInteractive Indirect (Cmd_give {} {} noRange \"Foo.agda\")", force, id)
        );
    }

    /// Unknown highlighting choices are rejected before anything is recorded
    #[test]
    fn test_unknown_remove_or_keep_is_rejected(value in outside(RemoveOrKeep::TOKENS)) {
        let mut commands = Commands::new("Foo.agda");
        let err = commands.issue_line(&format!("tokenHighlighting {}", value)).unwrap_err();
        prop_assert_eq!(
            err,
            CommandError::InvalidArgument {
                value: value.clone(),
                allowed: RemoveOrKeep::TOKENS.to_vec(),
            }
        );
        prop_assert!(commands.history().is_empty());
    }

    /// Unknown compute modes are rejected by both compute commands
    #[test]
    fn test_unknown_compute_modes_are_rejected(value in outside(ComputeMode::TOKENS)) {
        let expected = CommandError::InvalidArgument {
            value: value.clone(),
            allowed: ComputeMode::TOKENS.to_vec(),
        };
        let mut commands = Commands::new("Foo.agda");

        let err = commands.issue_kind(CommandKind::Compute, &value).unwrap_err();
        prop_assert_eq!(&err, &expected);
        let err = commands
            .issue_line(&format!("compute_toplevel {} suc zero", value))
            .unwrap_err();
        prop_assert_eq!(&err, &expected);
        prop_assert!(commands.history().is_empty());
    }
}
