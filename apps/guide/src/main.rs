use std::path::PathBuf;

use anyhow::{Context, Result};
use catalog::report::PreferenceReport;
use clap::{Parser, Subcommand};
use render::{filters::Filter, RenderOptions, Variant};
use shared::domain::PropId;
use tracing_subscriber::EnvFilter;

mod app_state;
mod build;
mod config;

use app_state::AppState;
use build::{build_site, load_catalog};
use config::load_settings;

#[derive(Parser, Debug)]
#[command(name = "guide", about = "Builds the npc gift preference guide")]
struct Cli {
    /// Directory or http(s) URL with npcs.json, props.json and gifts.json.
    #[arg(long, global = true)]
    data: Option<String>,
    #[arg(long, global = true, default_value = "guide.toml")]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the guide page into the output directory.
    Build {
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long)]
        variant: Option<Variant>,
        #[arg(long)]
        shell: Option<PathBuf>,
        #[arg(long)]
        image_root: Option<String>,
        /// Filter to apply when the page opens; repeatable.
        #[arg(long = "hide")]
        hide: Vec<Filter>,
        /// Prop id whose cells start out selected; repeatable.
        #[arg(long = "select")]
        select: Vec<String>,
    },
    /// Load and join the data, then report what was found.
    Check,
    /// Print the gift preferences of one npc or prop.
    Lookup {
        #[command(subcommand)]
        target: LookupTarget,
    },
}

#[derive(Subcommand, Debug)]
enum LookupTarget {
    Npc { query: String },
    Prop { query: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut settings = load_settings(&cli.config);
    if let Some(data) = cli.data {
        settings.data_root = data;
    }

    match cli.command {
        Command::Build {
            out,
            variant,
            shell,
            image_root,
            hide,
            select,
        } => {
            if let Some(out) = out {
                settings.output_dir = out;
            }
            if let Some(variant) = variant {
                settings.variant = variant;
            }
            if let Some(shell) = shell {
                settings.page_shell = Some(shell);
            }
            if let Some(image_root) = image_root {
                settings.image_root = image_root;
            }
            let options = RenderOptions {
                variant: settings.variant,
                image_root: settings.image_root.clone(),
                hidden: hide,
                selected: select.into_iter().map(PropId::new).collect(),
            };

            let state = AppState::new(settings, options);
            let index = build_site(&state).await?;
            println!("wrote {}", index.display());
        }
        Command::Check => {
            let catalog = load_catalog(&settings.data_root).await?;
            println!(
                "{} npcs, {} props, {} gifts joined from {}",
                catalog.npcs().count(),
                catalog.props().count(),
                catalog.gift_count(),
                settings.data_root
            );
        }
        Command::Lookup { target } => {
            let catalog = load_catalog(&settings.data_root).await?;
            let report = match target {
                LookupTarget::Npc { query } => catalog
                    .find_npc(&query)
                    .map(|view| PreferenceReport::for_npc(&view))
                    .with_context(|| format!("no npc matches '{query}'"))?,
                LookupTarget::Prop { query } => catalog
                    .find_prop(&query)
                    .map(|view| PreferenceReport::for_prop(&view))
                    .with_context(|| format!("no prop matches '{query}'"))?,
            };
            print!("{report}");
        }
    }

    Ok(())
}
