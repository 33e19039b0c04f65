//! Serialized launch contexts handed between processes

use launcher_context::prelude::*;
use launcher_test_utils::FakeGrailsRuntime;
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tempfile::TempDir;

fn sample() -> SerializableLaunchContext {
    SerializableLaunchContext::new(GrailsVersion::new(2, 0, 0).with_tag("RC1"))
        .with_dir(DirProperty::BaseDir, "/work/app")
        .with_dir(DirProperty::ClassesDir, "/work/app/target/classes")
        .with_dependencies(DependencyScope::Compile, ["/libs/a.jar", "/libs/b.jar"])
        .with_dependencies(DependencyScope::Build, ["/libs/ivy.jar"])
        .with_script_name("RunApp")
        .with_args("--non-interactive")
        .with_plain_output(true)
}

#[test]
fn file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("launch.json");
    let context = sample();

    context.write_to(&path).unwrap();
    let restored = SerializableLaunchContext::read_from(&path).unwrap();

    assert_eq!(restored, context);
    assert_eq!(restored.grails_version().to_string(), "2.0.0.RC1");
}

#[test]
fn reading_a_missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = SerializableLaunchContext::read_from(&path).unwrap_err();

    assert!(matches!(err, LaunchError::Io { path: ref p, .. } if *p == path));
    assert!(err.invocation().is_none());
}

#[test]
fn reading_a_corrupt_file_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("launch.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = SerializableLaunchContext::read_from(&path).unwrap_err();

    assert!(matches!(err, LaunchError::Serialization(_)));
}

#[test]
fn unknown_dependency_scope_is_rejected() {
    let json = r#"{
        "grails-version": "2.0.0",
        "dependencies": { "optional": ["/libs/x.jar"] }
    }"#;

    assert!(SerializableLaunchContext::from_json(json).is_err());
}

#[test]
fn snapshot_of_a_delegating_context() {
    let grails_version = GrailsVersion::new(1, 3, 7);
    let fake = FakeGrailsRuntime::new(&grails_version)
        .with_console(false)
        .with_default_dir("GrailsWorkDir", "/home/dev/.grails/1.3.7")
        .build();
    let mut context = DelegatingLaunchContext::new(
        grails_version.clone(),
        fake.loader(),
        None,
        Some(PathBuf::from("/work/app")),
    )
    .unwrap();
    context
        .set_dependencies(DependencyScope::Provided, Some(vec![PathBuf::from("/libs/servlet-api.jar")]))
        .unwrap();
    context
        .set_dependencies(DependencyScope::Build, Some(vec![PathBuf::from("/libs/gant.jar")]))
        .unwrap();
    context.set_script_name(Some("Compile".to_string()));

    let snapshot = SerializableLaunchContext::snapshot(&context).unwrap();

    let expected = SerializableLaunchContext::new(grails_version)
        .with_dir(DirProperty::BaseDir, "/work/app")
        .with_dir(DirProperty::GrailsWorkDir, "/home/dev/.grails/1.3.7")
        .with_dependencies(DependencyScope::Provided, ["/libs/servlet-api.jar"])
        .with_dependencies(DependencyScope::Build, ["/libs/gant.jar"])
        .with_script_name("Compile")
        .with_plain_output(true);
    assert_eq!(snapshot, expected);
}

#[test]
fn snapshot_of_a_context_without_provided_scope() {
    let grails_version = GrailsVersion::new(1, 1, 1);
    let fake = FakeGrailsRuntime::new(&grails_version).build();
    let mut context =
        DelegatingLaunchContext::new(grails_version.clone(), fake.loader(), None, None).unwrap();
    context
        .set_dependencies(DependencyScope::Compile, Some(vec![PathBuf::from("/libs/a.jar")]))
        .unwrap();

    let snapshot = SerializableLaunchContext::snapshot(&context).unwrap();

    let expected = SerializableLaunchContext::new(grails_version)
        .with_dependencies(DependencyScope::Compile, ["/libs/a.jar"])
        .with_plain_output(true);
    assert_eq!(snapshot, expected);
    assert!(!fake.settings_calls().mentions("ProvidedDependencies"));
}

#[test]
fn written_context_can_seed_a_delegating_context() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("launch.json");
    sample().write_to(&path).unwrap();

    let request = SerializableLaunchContext::read_from(&path).unwrap();
    let fake = FakeGrailsRuntime::new(request.grails_version()).build();
    let context = DelegatingLaunchContext::copy_of(fake.loader(), &request).unwrap();

    assert!(!context.is_interactive());
    assert_eq!(
        context.dir(DirProperty::ClassesDir).unwrap(),
        Some(PathBuf::from("/work/app/target/classes"))
    );
    assert_eq!(
        context.dependencies(DependencyScope::Build).unwrap(),
        Some(vec![PathBuf::from("/libs/ivy.jar")])
    );
}
