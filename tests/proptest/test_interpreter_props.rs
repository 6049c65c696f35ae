//! Property-based Tests for the Command Interpreter
//!
//! The interpreter must behave on every input string: never panic,
//! classify the fixed command set exactly, and treat everything else as
//! an unknown command rather than an error.

use proptest::prelude::*;
use termblog::commands::{interpret, Effect};

proptest! {
    #[test]
    fn interpret_never_panics(line in ".*") {
        let _ = interpret(&line);
    }

    #[test]
    fn whitespace_only_lines_are_noops(line in "[ \t\r\n]*") {
        prop_assert_eq!(interpret(&line), Effect::Noop);
    }

    #[test]
    fn first_token_decides_the_effect(
        name in "[a-z]{1,10}",
        rest in "( [a-z0-9-]{1,8}){0,3}",
    ) {
        let line = format!("{}{}", name, rest);
        let effect = interpret(&line);
        match name.as_str() {
            "help" => prop_assert_eq!(effect, Effect::Help),
            "clear" => prop_assert_eq!(effect, Effect::Clear),
            "ls" => prop_assert_eq!(effect, Effect::List),
            "cd" => prop_assert!(matches!(effect, Effect::ChangeDirectory(_))),
            "cat" => prop_assert!(matches!(effect, Effect::ReadFile(_))),
            _ => prop_assert_eq!(effect, Effect::Unknown(name.clone())),
        }
    }

    #[test]
    fn only_the_first_argument_is_kept(arg in "[a-z0-9._-]{1,12}", extra in "[a-z]{1,6}") {
        let line = format!("cat {} {}", arg, extra);
        prop_assert_eq!(interpret(&line), Effect::ReadFile(Some(arg.clone())));
    }

    #[test]
    fn leading_and_trailing_whitespace_is_ignored(pad_l in "[ \t]{0,4}", pad_r in "[ \t]{0,4}") {
        let line = format!("{}ls{}", pad_l, pad_r);
        prop_assert_eq!(interpret(&line), Effect::List);
    }
}
