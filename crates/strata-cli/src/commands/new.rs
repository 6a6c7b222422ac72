//! Implementation of the `strata new` command.
//!
//! Responsibility: validate names, wire the local adapters into the core
//! scaffold service, and display the resulting report. No business logic
//! lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use strata_adapters::{LocalFilesystem, SimpleRenderer};
use strata_core::{
    application::{Action, ReportEntry, ScaffoldReport, ScaffoldService},
    domain::{ArtifactKind, Identifier, ProjectLayout},
};

use crate::{
    cli::{NewCommands, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// A validated `new` request.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Request {
    Feature(Identifier),
    Artifact {
        kind: ArtifactKind,
        feature: Identifier,
        name: Identifier,
    },
}

/// Execute `strata new`.
///
/// 1. Validate every name (nothing is written if one is invalid)
/// 2. Resolve project root and layout from flags and config
/// 3. Run the scaffold service against the local filesystem
/// 4. Print the report; a failed step turns into a non-zero exit
#[instrument(skip_all)]
pub fn execute(
    cmd: NewCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let request = parse_request(cmd)?;

    let root = resolve_root(&global, &config);
    let layout = ProjectLayout::new(&config.layout.source_dir, &config.layout.test_dir)?;
    debug!(root = %root.display(), source_dir = %layout.source_dir(), "Layout resolved");

    let service = ScaffoldService::new(
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
        layout,
        root,
    );

    let report = match &request {
        Request::Feature(feature) => {
            output.header(&format!("Scaffolding feature '{feature}'"))?;
            service.create_feature(feature)
        }
        Request::Artifact {
            kind,
            feature,
            name,
        } => {
            output.header(&format!("Scaffolding {kind} '{name}' in '{feature}'"))?;
            service.create_artifact(*kind, feature, name)
        }
    };

    info!(
        created = report.created().count(),
        skipped = report.skipped().count(),
        failed = report.failures().count(),
        "Scaffold finished"
    );

    print_report(&report, &output)?;

    let failed = report.failures().count();
    if failed > 0 {
        return Err(CliError::PartialFailure { failed });
    }
    Ok(())
}

// ── Validation ────────────────────────────────────────────────────────────────

fn parse_request(cmd: NewCommands) -> CliResult<Request> {
    let artifact = |kind: ArtifactKind, feature: String, name: String| -> CliResult<Request> {
        Ok(Request::Artifact {
            kind,
            feature: Identifier::parse(&feature)?,
            name: Identifier::parse(&name)?,
        })
    };

    match cmd {
        NewCommands::Feature { name } => Ok(Request::Feature(Identifier::parse(&name)?)),
        NewCommands::Page { feature, page } => artifact(ArtifactKind::Page, feature, page),
        NewCommands::Provider { feature, name } => artifact(ArtifactKind::Provider, feature, name),
        NewCommands::Entity { feature, name } => artifact(ArtifactKind::Entity, feature, name),
        NewCommands::Usecase { feature, name } => artifact(ArtifactKind::Usecase, feature, name),
        NewCommands::Repository { feature, name } => {
            artifact(ArtifactKind::Repository, feature, name)
        }
        NewCommands::Datasource { feature, name } => {
            artifact(ArtifactKind::Datasource, feature, name)
        }
    }
}

/// `--root` wins over `project.root`.
fn resolve_root(global: &GlobalArgs, config: &AppConfig) -> PathBuf {
    global
        .root
        .clone()
        .unwrap_or_else(|| config.project.root.clone())
}

// ── Report rendering ──────────────────────────────────────────────────────────

fn print_report(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(report).map_err(|e| CliError::Internal {
            message: format!("cannot serialise report: {e}"),
        })?;
        output.data(&json)?;
        return Ok(());
    }

    for entry in &report.entries {
        print_entry(entry, output)?;
    }

    let created = report.created().count();
    let skipped = report.skipped().count();
    output.print("")?;
    output.print(&format!("{created} created, {skipped} already present"))?;
    Ok(())
}

fn print_entry(entry: &ReportEntry, output: &OutputManager) -> std::io::Result<()> {
    let path = entry.path.display();
    match &entry.action {
        Action::DirectoryEnsured => Ok(()),
        Action::Created => output.success(&format!("created   {path}")),
        Action::RegistryCreated => output.success(&format!("created   {path} (registry)")),
        Action::Skipped => output.warning(&format!("exists    {path}")),
        Action::FragmentInserted { label, placement } => {
            output.info(&format!("updated   {path}: {label} ({placement})"))
        }
        Action::FragmentPresent { label } => {
            output.info(&format!("unchanged {path}: {label} already registered"))
        }
        Action::Failed { reason } => output.error(&format!("failed    {path}: {reason}")),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn globals(root: Option<&str>) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            root: root.map(PathBuf::from),
            output_format: OutputFormat::Plain,
        }
    }

    #[test]
    fn feature_name_is_case_folded() {
        let request = parse_request(NewCommands::Feature {
            name: "Billing".into(),
        })
        .unwrap();
        assert_eq!(request, Request::Feature(Identifier::parse("billing").unwrap()));
    }

    #[test]
    fn page_maps_to_page_kind() {
        let request = parse_request(NewCommands::Page {
            feature: "shop".into(),
            page: "cart".into(),
        })
        .unwrap();
        assert!(matches!(
            request,
            Request::Artifact { kind: ArtifactKind::Page, ref name, .. } if name.as_str() == "cart"
        ));
    }

    #[test]
    fn invalid_name_is_a_user_error() {
        let err = parse_request(NewCommands::Entity {
            feature: "shop".into(),
            name: "1item".into(),
        })
        .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn invalid_feature_is_rejected_before_name() {
        let err = parse_request(NewCommands::Usecase {
            feature: "../etc".into(),
            name: "ok".into(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("../etc"));
    }

    #[test]
    fn root_flag_beats_config() {
        let mut config = AppConfig::default();
        config.project.root = PathBuf::from("/from/config");

        assert_eq!(
            resolve_root(&globals(Some("/from/flag")), &config),
            PathBuf::from("/from/flag")
        );
        assert_eq!(resolve_root(&globals(None), &config), PathBuf::from("/from/config"));
        assert_eq!(
            resolve_root(&globals(None), &AppConfig::default()),
            PathBuf::from(".")
        );
    }
}
