//! Create-device command.
//!
//! Shows the plan, asks for confirmation, and reports what was written.

use dialoguer::Input;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::cli::{output, CreateArgs};
use crate::core::config::Settings;
use crate::core::exec::SystemRunner;
use crate::core::workflow::{
    self, Applied, CreateOptions, CreateRequest, Operator, Outcome, Plan,
};
use crate::error::Result;

const CONFIRM_PROMPT: &str = "Apply these changes? [y/N]";

/// Create a device in the repository at `root` (or the current directory).
pub fn execute(args: CreateArgs, root: Option<PathBuf>) -> Result<()> {
    let root = match root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let settings = Settings::load(root, args.op)?;
    info!(root = %settings.root.display(), "creating device");

    let request = CreateRequest {
        friendly_name: args.name,
        type_name: args.type_name,
    };
    let options = CreateOptions {
        dry_run: args.dry_run,
        force: args.force,
    };

    let mut operator = Terminal {
        root: settings.root.clone(),
    };
    match workflow::create_device(&request, options, &settings, &SystemRunner, &mut operator)? {
        Outcome::DryRun(_) => {
            println!();
            output::warn("dry run: nothing was written");
        }
        Outcome::Applied(applied) => operator.summarize(&applied),
    }

    Ok(())
}

/// Operator at an interactive terminal, or at the other end of a pipe.
struct Terminal {
    root: PathBuf,
}

impl Terminal {
    fn display(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    fn summarize(&self, applied: &Applied) {
        println!();
        for field in &applied.secret_fields {
            output::success(&format!("stored {} on {}", output::key(field), applied.item));
        }
        output::success(&format!(
            "appended to {}",
            output::path(&self.display(&applied.template_file))
        ));
        for file in &applied.files {
            output::success(&format!("wrote {}", output::path(&self.display(file))));
        }
    }
}

impl Operator for Terminal {
    fn review(&mut self, plan: &Plan, dry_run: bool) {
        let layout = &plan.layout;

        output::section(&format!("Device {}", plan.identity));
        output::kv("name:         ", &layout.config_name);
        output::kv("friendly name:", &layout.config_friendly_name);
        output::kv("secrets from: ", &layout.section.name);

        output::section("Secrets manager");
        output::kv("field:", &layout.encryption_key_field);
        output::kv("field:", &layout.ota_password_field);
        if dry_run {
            output::warn("generated values are shown in cleartext");
            output::kv(&format!("{}:", layout.encryption_key_name), plan.secrets.encryption_key());
            output::kv(&format!("{}:", layout.ota_password_name), plan.secrets.ota_password());
        }

        output::section("Append to secrets template");
        output::block(&plan.blocks.template_block);

        output::section(&format!("Write {}", self.display(&layout.device_file)));
        output::block(&plan.blocks.device_yaml);

        if let (Some(package), Some(yaml)) = (&layout.package, &plan.blocks.base_package_yaml) {
            output::section(&format!("Write {}", self.display(&package.file)));
            output::block(yaml);
        }
        println!();
    }

    fn confirm(&mut self, _plan: &Plan) -> Result<bool> {
        let answer = if io::stdin().is_terminal() {
            Input::<String>::new()
                .with_prompt(CONFIRM_PROMPT)
                .allow_empty(true)
                .interact_text()?
        } else {
            output::prompt(CONFIRM_PROMPT);
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            println!();
            input
        };

        Ok(workflow::is_affirmative(&answer))
    }
}
