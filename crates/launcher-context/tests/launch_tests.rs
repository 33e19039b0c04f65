//! Launching scripts through the script runner

use launcher_context::prelude::*;
use launcher_context::{is_interactive, SCRIPT_RUNNER_CLASS, SETTINGS_CLASS};
use launcher_invoke::CallError;
use launcher_test_utils::{init_tracing, ExecutedCommand, FakeGrails, FakeGrailsRuntime};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn context_on(fake: &FakeGrails) -> DelegatingLaunchContext {
    DelegatingLaunchContext::new(GrailsVersion::new(2, 0, 0), fake.loader(), None, None).unwrap()
}

fn single_execution(fake: &FakeGrails) -> ExecutedCommand {
    let mut executions = fake.executions();
    assert_eq!(executions.len(), 1);
    executions.remove(0)
}

#[test]
fn launch_without_env_passes_two_arguments() {
    init_tracing();
    let fake = FakeGrailsRuntime::new(&GrailsVersion::new(2, 0, 0)).build();
    let mut context = context_on(&fake);
    context.set_script_name(Some("RunApp".to_string()));
    context.set_args(Some("-https".to_string()));

    let status = context.launch().unwrap();

    assert_eq!(status, 0);
    assert_eq!(
        single_execution(&fake),
        ExecutedCommand {
            script_name: Some("RunApp".to_string()),
            args: Some("-https".to_string()),
            env: None,
            arity: 2,
            interactive: Some(true),
            settings_class: SETTINGS_CLASS.to_string(),
        }
    );
}

#[test]
fn launch_with_env_passes_three_arguments() {
    let fake = FakeGrailsRuntime::new(&GrailsVersion::new(2, 0, 0)).build();
    let mut context = context_on(&fake);
    context.set_script_name(Some("War".to_string()));
    context.set_args(Some("target/app.war".to_string()));
    context.set_env(Some("production".to_string()));

    context.launch().unwrap();

    let executed = single_execution(&fake);
    assert_eq!(executed.arity, 3);
    assert_eq!(executed.script_name.as_deref(), Some("War"));
    assert_eq!(executed.args.as_deref(), Some("target/app.war"));
    assert_eq!(executed.env.as_deref(), Some("production"));
}

#[test]
fn absent_script_and_args_are_passed_as_null() {
    let fake = FakeGrailsRuntime::new(&GrailsVersion::new(2, 0, 0)).build();
    let context = context_on(&fake);

    context.launch().unwrap();

    let executed = single_execution(&fake);
    assert_eq!(executed.script_name, None);
    assert_eq!(executed.args, None);
    assert_eq!(executed.interactive, Some(true));
}

#[test]
fn non_interactive_flag_reaches_the_runner() {
    let fake = FakeGrailsRuntime::new(&GrailsVersion::new(2, 0, 0)).build();
    let mut context = context_on(&fake);
    context.set_script_name(Some("TestApp".to_string()));
    context.set_args(Some("-unit --non-interactive".to_string()));
    assert!(!context.is_interactive());

    context.launch().unwrap();

    let executed = single_execution(&fake);
    assert_eq!(executed.interactive, Some(false));
    assert_eq!(executed.args.as_deref(), Some("-unit --non-interactive"));
}

#[test]
fn exit_status_is_returned_unchanged() {
    let fake = FakeGrailsRuntime::new(&GrailsVersion::new(2, 0, 0))
        .with_exit_code(3)
        .build();
    let mut context = context_on(&fake);
    context.set_script_name(Some("Compile".to_string()));

    assert_eq!(context.launch().unwrap(), 3);
}

#[test]
fn launch_can_repeat() {
    let fake = FakeGrailsRuntime::new(&GrailsVersion::new(2, 0, 0)).build();
    let mut context = context_on(&fake);
    context.set_script_name(Some("Clean".to_string()));

    context.launch().unwrap();
    context.set_env(Some("test".to_string()));
    context.launch().unwrap();

    let arities: Vec<usize> = fake.executions().iter().map(|e| e.arity).collect();
    assert_eq!(arities, vec![2, 3]);
}

#[test]
fn missing_runner_fails_launch() {
    let fake = FakeGrailsRuntime::new(&GrailsVersion::new(2, 0, 0))
        .without_script_runner()
        .build();
    let context = context_on(&fake);

    let err = context.launch().unwrap_err();

    assert!(!err.is_construction());
    let cause = err.invocation().unwrap();
    assert_eq!(cause.target(), SCRIPT_RUNNER_CLASS);
    assert_eq!(cause.operation(), "loadClass");
    assert!(matches!(cause.cause(), CallError::ClassNotFound(_)));
    assert!(fake.executions().is_empty());
}

fn plain_token() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9=./-]{1,12}".prop_filter("not a non-interactive flag", |token| {
        token != "--non-interactive" && token != "-non-interactive"
    })
}

proptest! {
    #[test]
    fn tokens_without_the_flag_stay_interactive(tokens in prop::collection::vec(plain_token(), 0..8)) {
        prop_assert!(is_interactive(Some(&tokens.join(" "))));
    }

    #[test]
    fn flag_anywhere_is_non_interactive(
        tokens in prop::collection::vec(plain_token(), 0..8),
        position in any::<prop::sample::Index>(),
        single_dash in any::<bool>(),
    ) {
        let flag = if single_dash { "-non-interactive" } else { "--non-interactive" };
        let mut tokens = tokens;
        let at = position.index(tokens.len() + 1);
        tokens.insert(at, flag.to_string());
        prop_assert!(!is_interactive(Some(&tokens.join(" "))));
    }

    #[test]
    fn flag_glued_to_other_text_is_ignored(prefix in "[a-z]{1,6}", suffix in "[a-z]{1,6}") {
        let glued = format!("{prefix}--non-interactive {suffix}-non-interactive-{suffix}");
        prop_assert!(is_interactive(Some(&glued)));
    }
}
