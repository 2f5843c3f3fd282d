//! CLI Adapter.

mod logging;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::adapters::{FilesystemTemplateSource, MinijinjaTemplateRenderer};
use crate::app::commands::{
    export, parse_inputs,
    partial::{self, PartialOptions},
    render::{self, RenderOptions},
    resolve::{self, ResolveOptions},
};
use crate::app::{AppContext, config};
use crate::domain::{AppError, PromptEnv};

#[derive(Parser)]
#[command(name = "promptspec")]
#[command(version)]
#[command(
    about = "Resolve and render language- and model-specialized prompt templates",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Config file (defaults to ./promptspec.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SelectArgs {
    /// Target language (overrides prompt.lang)
    #[arg(short, long)]
    lang: Option<String>,
    /// Target model (overrides prompt.llm)
    #[arg(short = 'm', long)]
    llm: Option<String>,
}

impl SelectArgs {
    fn into_env(self) -> PromptEnv {
        PromptEnv { lang: self.lang, llm: self.llm }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render the variant matching the language and model
    #[clap(visible_alias = "r")]
    Render {
        /// Prompt document (YAML)
        file: PathBuf,
        #[command(flatten)]
        select: SelectArgs,
        /// Variable to substitute
        #[arg(long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,
        /// Print the output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show which section would be selected, without rendering it
    Resolve {
        /// Prompt document (YAML)
        file: PathBuf,
        #[command(flatten)]
        select: SelectArgs,
    },
    /// Bind variables into the raw document, keeping its variants
    #[clap(visible_alias = "p")]
    Partial {
        /// Prompt document (YAML)
        file: PathBuf,
        /// Variable to bind
        #[arg(long = "var", value_name = "NAME=VALUE", required = true)]
        vars: Vec<String>,
        /// Write the bound document here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the document as a `{ "template": ... }` JSON record
    Export {
        /// Prompt document (YAML)
        file: PathBuf,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = execute(cli.command, cli.config.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(command: Commands, config_path: Option<&Path>) -> Result<(), AppError> {
    let ctx = AppContext::new(FilesystemTemplateSource::new(), MinijinjaTemplateRenderer::new());

    match command {
        Commands::Render { file, select, vars, json } => {
            let settings = config::load_settings(config_path)?;
            let options =
                RenderOptions { path: file, env: select.into_env(), inputs: parse_inputs(&vars)? };
            let output = render::execute(&ctx, &options, &settings.prompt)?;
            if json {
                println!("{}", render::output_json(&output)?);
            } else {
                print_block(&render::format_output(&output));
            }
        }
        Commands::Resolve { file, select } => {
            let settings = config::load_settings(config_path)?;
            let options = ResolveOptions { path: file, env: select.into_env() };
            let resolved = resolve::execute(&ctx, &options, &settings.prompt)?;
            println!("# selected: {}", resolve::describe_path(&resolved));
            print_block(&resolve::section_yaml(&resolved.section)?);
        }
        Commands::Partial { file, vars, output } => {
            let options = PartialOptions { path: file, inputs: parse_inputs(&vars)?, output };
            let bound = partial::execute(&ctx, &options)?;
            match &options.output {
                Some(path) => println!("✅ Wrote bound template to {}", path.display()),
                None => print_block(bound.as_str()),
            }
        }
        Commands::Export { file } => {
            println!("{}", export::execute(&ctx, &file)?);
        }
    }

    Ok(())
}

/// Print `text`, adding a final newline only when it lacks one.
fn print_block(text: &str) {
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}
