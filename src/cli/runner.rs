use std::path::{Path, PathBuf};

use crate::{
    cli::{CreateArgs, NewArgs},
    config::ProjectConfig,
    error::Result,
    ioutils::project_target,
    module::{ModuleInjector, ModuleRequest},
    project::ProjectCreator,
    prompt::{
        get_prompt_provider, select_variant, InteractiveModuleRequests, PromptProvider,
        VariantSelection,
    },
    remote::{HttpFetcher, TemplateFetcher, VariantResolver},
    renderer::get_template_engine,
    template::OperationExecutor,
};

/// Runs `codecraft create` with terminal prompts.
pub fn run_create(args: CreateArgs) -> Result<()> {
    let prompter = get_prompt_provider();
    Runner::new(&prompter).create(&args)
}

/// Runs `codecraft new` against the remote template index.
pub fn run_new(args: NewArgs) -> Result<()> {
    let prompter = get_prompt_provider();
    let fetcher = HttpFetcher::new()?;
    Runner::new(&prompter).new_project(&args, &fetcher)
}

/// Orchestrates project creation followed by module injection.
pub struct Runner<'a> {
    prompter: &'a dyn PromptProvider,
}

impl<'a> Runner<'a> {
    pub fn new(prompter: &'a dyn PromptProvider) -> Self {
        Self { prompter }
    }

    /// Creates a project from the local configuration document, then injects the
    /// requested modules.
    pub fn create(&self, args: &CreateArgs) -> Result<()> {
        // Flag values are validated before anything is written.
        let requested = args
            .databases
            .iter()
            .map(|s| ModuleRequest::parse_database(s))
            .chain(args.modules.iter().map(|s| ModuleRequest::parse_module(s)))
            .collect::<Result<Vec<_>>>()?;

        let config = ProjectConfig::load(&args.config)?;
        let framework = config.framework(&args.framework);
        let target = project_target(output_base(args.output_dir.as_deref())?, &args.project_name);

        let engine = get_template_engine();
        let executor = OperationExecutor::new(args.dry_run);
        ProjectCreator::new(engine.as_ref(), &executor).create_project(
            &target,
            &args.project_name,
            &framework.project_structure,
        )?;
        println!(
            "{} project '{}' created successfully.",
            display_name(&args.framework),
            args.project_name
        );

        let interactive = (!args.non_interactive)
            .then(|| InteractiveModuleRequests::new(self.prompter, &framework.modules));
        let requests = requested.into_iter().map(Ok).chain(interactive.into_iter().flatten());

        let injected =
            ModuleInjector::new(&target, &args.project_name, &framework.modules, &executor)
                .inject_all(requests)?;
        log::debug!("Injected {injected} module(s) into '{}'", target.display());

        if executor.is_dry_run() {
            println!("Dry run: nothing was written.");
        }
        Ok(())
    }

    /// Creates a project from a remote template variant, prompting for every
    /// part of the variant not given on the command line.
    pub fn new_project(&self, args: &NewArgs, fetcher: &dyn TemplateFetcher) -> Result<()> {
        let resolver = VariantResolver::new(fetcher, &args.base_url)?;
        let variant = select_variant(
            self.prompter,
            &resolver,
            VariantSelection {
                language: args.language.clone(),
                framework: args.framework.clone(),
                version: args.version.clone(),
            },
        )?;

        println!("Creating project {} with {variant}...", args.project_name);
        let entries = resolver.resolve(&variant)?;

        let target = project_target(output_base(args.output_dir.as_deref())?, &args.project_name);
        let engine = get_template_engine();
        let executor = OperationExecutor::new(args.dry_run).with_fetcher(fetcher);
        ProjectCreator::new(engine.as_ref(), &executor).create_from_listing(
            &target,
            &args.project_name,
            &entries,
        )?;

        println!("Project {} created successfully!", args.project_name);
        if executor.is_dry_run() {
            println!("Dry run: nothing was written.");
        }
        Ok(())
    }
}

fn output_base(output_dir: Option<&Path>) -> Result<PathBuf> {
    match output_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}

/// Human-readable framework name used in the confirmation message.
fn display_name(framework: &str) -> &str {
    match framework {
        "fastapi" => "FastAPI",
        "nestjs" => "NestJS",
        "django" => "Django",
        other => other,
    }
}
