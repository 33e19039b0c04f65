use launcher_invoke::{
    invoke, invoke_or_wrap, object_ref, CallError, DynamicObject, ObjectRef, ParamType, Value,
};
use mockall::mock;
use std::path::PathBuf;

mock! {
    pub Target {}

    impl DynamicObject for Target {
        fn class_name(&self) -> String;
        fn call(
            &mut self,
            operation: &str,
            params: &[ParamType],
            args: Vec<Value>,
        ) -> Result<Value, CallError>;
    }
}

impl std::fmt::Debug for MockTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MockTarget")
    }
}

fn shared(mock: MockTarget) -> ObjectRef {
    object_ref(mock)
}

#[test]
fn arguments_reach_the_target_unchanged() {
    let mut mock = MockTarget::new();
    mock.expect_call()
        .withf(|operation, params, args| {
            operation.to_string() == "setClassesDir"
                && params.to_vec() == vec![ParamType::Path]
                && args.to_vec() == vec![Value::Path(PathBuf::from("/build/classes"))]
        })
        .times(1)
        .returning(|_, _, _| Ok(Value::Null));

    let target = shared(mock);
    let result = invoke(
        &target,
        "setClassesDir",
        &[ParamType::Path],
        vec![PathBuf::from("/build/classes").into()],
    )
    .unwrap();
    assert!(result.is_null());
}

#[test]
fn mismatched_arguments_never_reach_the_target() {
    let mut mock = MockTarget::new();
    mock.expect_call().never();
    mock.expect_class_name()
        .return_const("grails.util.BuildSettings".to_string());

    let target = shared(mock);
    let err = invoke_or_wrap(&target, "setDependenciesExternallyConfigured", &[ParamType::Bool], vec![Value::Null])
        .unwrap_err();

    assert_eq!(err.target(), "grails.util.BuildSettings");
    assert!(matches!(err.cause(), CallError::ArgumentMismatch { .. }));
}

#[test]
fn target_failures_are_wrapped_with_their_cause() {
    let mut mock = MockTarget::new();
    mock.expect_call()
        .withf(|operation, _, _| operation.to_string() == "getGrailsWorkDir")
        .returning(|operation, _, _| {
            Err(CallError::target_failure("grails.util.BuildSettings", operation, "disk gone"))
        });
    mock.expect_class_name()
        .return_const("grails.util.BuildSettings".to_string());

    let target = shared(mock);

    let raw = invoke(&target, "getGrailsWorkDir", &[], vec![]).unwrap_err();
    assert!(matches!(raw, CallError::TargetFailure { .. }));

    let wrapped = invoke_or_wrap(&target, "getGrailsWorkDir", &[], vec![]).unwrap_err();
    assert_eq!(wrapped.operation(), "getGrailsWorkDir");
    assert!(wrapped.to_string().contains("disk gone"));
}
