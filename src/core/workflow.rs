//! The create-device workflow.
//!
//! normalize → derive → check (local, then remote) → generate → render →
//! review → confirm → apply. Nothing is written before [`apply`], and
//! [`apply`] does not roll back earlier steps when a later one fails.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::config::Settings;
use crate::core::conflicts;
use crate::core::domain::{DeviceIdentity, DeviceLayout, Secrets};
use crate::core::exec::CommandRunner;
use crate::core::render::PlanBlocks;
use crate::core::rng;
use crate::core::secrets::SecretsManager;
use crate::error::{ConflictError, Error, Result};

/// Raw names as entered by the operator.
#[derive(Debug, Clone, Default)]
pub struct CreateRequest {
    pub friendly_name: String,
    pub type_name: Option<String>,
}

/// How far to go once the plan is built.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateOptions {
    /// Stop after review; write nothing
    pub dry_run: bool,
    /// Skip the confirmation prompt
    pub force: bool,
}

/// Everything needed to apply a new device, computed without side effects.
#[derive(Debug)]
pub struct Plan {
    pub identity: DeviceIdentity,
    pub layout: DeviceLayout,
    pub blocks: PlanBlocks,
    pub secrets: Secrets,
}

/// What [`apply`] changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub item: String,
    pub secret_fields: Vec<String>,
    pub template_file: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Result of a full run.
#[derive(Debug)]
pub enum Outcome {
    DryRun(Plan),
    Applied(Applied),
}

/// The person running the tool: shown the plan, asked to confirm it.
pub trait Operator {
    /// Present the plan. `dry_run` plans are never applied.
    fn review(&mut self, plan: &Plan, dry_run: bool);

    /// Whether to go ahead with the plan.
    fn confirm(&mut self, plan: &Plan) -> Result<bool>;
}

/// Run the whole workflow.
///
/// # Errors
///
/// Any validation, conflict, dependency or external-tool failure, or
/// `Error::Aborted` if the operator declines.
pub fn create_device(
    request: &CreateRequest,
    options: CreateOptions,
    settings: &Settings,
    runner: &dyn CommandRunner,
    operator: &mut dyn Operator,
) -> Result<Outcome> {
    let plan = build_plan(request, settings, runner)?;
    operator.review(&plan, options.dry_run);

    if options.dry_run {
        info!(device = %plan.identity, "dry run, nothing written");
        return Ok(Outcome::DryRun(plan));
    }

    if !options.force && !operator.confirm(&plan)? {
        return Err(Error::Aborted);
    }

    apply(&plan, settings, runner).map(Outcome::Applied)
}

/// Validate names, check for conflicts, generate secrets and render text.
pub fn build_plan(
    request: &CreateRequest,
    settings: &Settings,
    runner: &dyn CommandRunner,
) -> Result<Plan> {
    let identity = DeviceIdentity::parse(&request.friendly_name, request.type_name.as_deref())?;
    let layout = DeviceLayout::derive(&identity, settings);
    debug!(?layout, "derived layout");

    conflicts::check_local(&layout, &settings.template_file)?;

    let op = SecretsManager::connect(runner, settings)?;
    conflicts::check_remote(&layout, &op)?;

    let secrets = rng::generate(runner, settings)?;
    let blocks = PlanBlocks::render(&identity, &layout);

    Ok(Plan {
        identity,
        layout,
        blocks,
        secrets,
    })
}

/// Store the secrets, then write the template block, device file and
/// package, in that order.
pub fn apply(plan: &Plan, settings: &Settings, runner: &dyn CommandRunner) -> Result<Applied> {
    let layout = &plan.layout;

    let op = SecretsManager::connect(runner, settings)?;
    op.set_fields(&[
        (layout.encryption_key_field.as_str(), plan.secrets.encryption_key()),
        (layout.ota_password_field.as_str(), plan.secrets.ota_password()),
    ])?;

    append_template(&settings.template_file, &plan.blocks.template_block)?;

    let mut files = Vec::new();
    write_new(&layout.device_file, &plan.blocks.device_yaml)
        .map_err(|e| conflict_or_io(e, || ConflictError::ConfigFile(layout.device_file.clone())))?;
    files.push(layout.device_file.clone());

    if let (Some(package), Some(yaml)) = (&layout.package, &plan.blocks.base_package_yaml) {
        create_package_dir(&package.dir)?;
        write_new(&package.file, yaml)
            .map_err(|e| conflict_or_io(e, || ConflictError::PackageDir(package.dir.clone())))?;
        files.push(package.file.clone());
    }

    info!(device = %plan.identity, files = files.len(), "device created");

    Ok(Applied {
        item: op.item().to_string(),
        secret_fields: vec![
            layout.encryption_key_field.clone(),
            layout.ota_password_field.clone(),
        ],
        template_file: settings.template_file.clone(),
        files,
    })
}

/// Whether a typed answer means yes (`y` or `yes`, any case).
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn append_template(path: &Path, block: &str) -> Result<()> {
    let needs_newline = match fs::read(path) {
        Ok(existing) => existing.last().is_some_and(|b| *b != b'\n'),
        Err(e) if e.kind() == ErrorKind::NotFound => false,
        Err(e) => return Err(e.into()),
    };

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if needs_newline {
        file.write_all(b"\n")?;
    }
    file.write_all(block.as_bytes())?;
    Ok(())
}

fn write_new(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(contents.as_bytes())
}

/// Create `dir` itself with `create_dir`, so one that appeared after the
/// checks is a conflict rather than silently reused.
fn create_package_dir(dir: &Path) -> Result<()> {
    if let Some(parent) = dir.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::create_dir(dir)
        .map_err(|e| conflict_or_io(e, || ConflictError::PackageDir(dir.to_path_buf())))
}

fn conflict_or_io(e: std::io::Error, conflict: impl FnOnce() -> ConflictError) -> Error {
    if e.kind() == ErrorKind::AlreadyExists {
        conflict().into()
    } else {
        e.into()
    }
}
