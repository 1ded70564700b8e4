//! End-to-end pipeline tests: real adapters, no disk for the filesystem.

use std::path::Path;
use std::sync::Arc;

use skema_adapters::{BuiltinTemplates, MemoryFilesystem, ScriptedPrompter};
use skema_core::{
    application::{GenerateInput, GenerateService, ports::Prompter},
    domain::{NamingConfig, NamingPattern},
    error::SkemaResult,
};

/// Forwarder so tests can keep a handle on the prompter they hand over.
struct SharedPrompter(Arc<ScriptedPrompter>);

impl Prompter for SharedPrompter {
    fn select_schematic(&self, kinds: &[&'static str]) -> SkemaResult<String> {
        self.0.select_schematic(kinds)
    }
    fn input_name(&self, message: &str) -> SkemaResult<String> {
        self.0.input_name(message)
    }
}

fn service(prompter: Arc<ScriptedPrompter>, fs: MemoryFilesystem) -> GenerateService {
    GenerateService::new(
        Box::new(SharedPrompter(prompter)),
        Box::new(BuiltinTemplates::new()),
        Box::new(fs),
    )
}

#[test]
fn generates_usecase_with_kebab_folder_and_pascal_class() {
    let fs = MemoryFilesystem::new();
    let prompter = Arc::new(ScriptedPrompter::with_answers(Vec::<String>::new()));
    let svc = service(prompter, fs.clone());

    let report = svc
        .run(
            GenerateInput {
                schematic: Some("usecase".into()),
                name: Some("OrderTotal".into()),
                with_spec: true,
            },
            &NamingConfig::new(NamingPattern::KebabCase),
            Path::new("."),
        )
        .unwrap();

    assert_eq!(report.class_identifier, "OrderTotal");
    assert_eq!(
        report.file,
        Path::new("./src/order-total/order-total.usecase.ts")
    );

    let source = fs.read_file(&report.file).expect("source file written");
    assert!(source.contains("export class OrderTotalUseCase"));

    let spec_path = report.spec_file.expect("spec file emitted by default");
    let spec = fs.read_file(&spec_path).expect("spec file written");
    assert!(spec.contains("describe('OrderTotalUseCase'"));
    // The spec sits beside order-total.usecase.ts and must import it by
    // that stem for the import to resolve.
    assert!(
        spec.contains("from './order-total.usecase'"),
        "spec import does not match the emitted source file:\n{spec}"
    );
}

#[test]
fn spec_import_resolves_under_every_naming_pattern() {
    for pattern in [
        NamingPattern::Lowercase,
        NamingPattern::KebabCase,
        NamingPattern::PascalCase,
        NamingPattern::CamelCase,
    ] {
        let fs = MemoryFilesystem::new();
        let prompter = Arc::new(ScriptedPrompter::with_answers(Vec::<String>::new()));
        let svc = service(prompter, fs.clone());

        let report = svc
            .run(
                GenerateInput {
                    schematic: Some("dto".into()),
                    name: Some("OrderTotal".into()),
                    with_spec: true,
                },
                &NamingConfig::new(pattern),
                Path::new("."),
            )
            .unwrap();

        let stem = report
            .file
            .file_stem()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        let spec = fs.read_file(&report.spec_file.unwrap()).unwrap();
        assert!(
            spec.contains(&format!("from './{stem}'")),
            "pattern {pattern:?}: import does not resolve:\n{spec}"
        );
    }
}

#[test]
fn fully_interactive_run_asks_schematic_then_name() {
    let fs = MemoryFilesystem::new();
    let prompter = Arc::new(ScriptedPrompter::with_answers(["dto", "user_profile"]));
    let svc = service(prompter.clone(), fs.clone());

    let report = svc
        .run(
            GenerateInput {
                schematic: None,
                name: None,
                with_spec: false,
            },
            &NamingConfig::new(NamingPattern::PascalCase),
            Path::new("."),
        )
        .unwrap();

    let questions = prompter.questions();
    assert_eq!(questions.len(), 2);
    assert!(questions[0].starts_with("select schematic"));
    assert!(questions[1].contains("dto"), "name prompt names the kind");

    assert_eq!(report.file, Path::new("./src/UserProfile/UserProfile.dto.ts"));
    let dto = fs.read_file(&report.file).unwrap();
    assert!(dto.contains("UserProfileDto"));
}

#[test]
fn unsupported_schematic_writes_nothing() {
    let fs = MemoryFilesystem::new();
    let prompter = Arc::new(ScriptedPrompter::with_answers(Vec::<String>::new()));
    let svc = service(prompter, fs.clone());

    let err = svc
        .run(
            GenerateInput {
                schematic: Some("widget".into()),
                name: Some("Anything".into()),
                with_spec: true,
            },
            &NamingConfig::default(),
            Path::new("."),
        )
        .unwrap_err();

    assert!(err.to_string().contains("unsupported schematic 'widget'"));
    assert!(fs.list_files().is_empty(), "no partial output on failure");
}

#[test]
fn rerun_into_existing_folder_succeeds() {
    let fs = MemoryFilesystem::new();
    fs.seed_directory(Path::new("./src/order-total"));

    let prompter = Arc::new(ScriptedPrompter::with_answers(Vec::<String>::new()));
    let svc = service(prompter, fs.clone());

    let input = GenerateInput {
        schematic: Some("usecase".into()),
        name: Some("OrderTotal".into()),
        with_spec: true,
    };

    svc.run(input.clone(), &NamingConfig::default(), Path::new("."))
        .unwrap();
    svc.run(input, &NamingConfig::default(), Path::new("."))
        .unwrap();
}
