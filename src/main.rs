use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use yansi::Paint;

use waypoint::config::{self, DirectoryConfig};
use waypoint::staging::picker::{load_blob, pick_images};
use waypoint::{
    Blob, FileStagingArea, HttpDirectory, RegionDirectory, RegionSelector, SelectableOption, Selection,
    PLACEHOLDER_VALUE,
};

#[derive(Parser)]
#[command(
    name = "waypoint",
    author,
    version,
    about = "Pick a region and sub-region, or stage an image for upload",
    long_about = r#"waypoint — cascading region picker and image staging.

Regions and their sub-regions are read from a localidades-style directory
(WAYPOINT_DIRECTORY_URL). Use `--env-file` or environment variables to point
at a different directory.

Examples:
  waypoint regions
  waypoint sub-regions SP
  waypoint pick
  waypoint pick --region MG --sub-region "Belo Horizonte"
  waypoint stage ./photo.png
"#,
    after_help = "Use `waypoint <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Do not echo directory requests and responses
    #[arg(long, global = true)]
    silent: bool,
    /// Load environment variables from this file instead of `.env`
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "List regions", long_about = "Read the region directory once and print the options the picker would offer.")]
    Regions,
    #[command(about = "List the sub-regions of a region", long_about = "Select `code` as the region and print the sub-region options loaded for it.")]
    SubRegions { code: String },
    #[command(about = "Run the cascading form", long_about = "Choose a region, then one of its sub-regions, then proceed. Without flags the choices are read interactively from stdin. The selection handed to the next screen is printed as JSON.")]
    Pick {
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        sub_region: Option<String>,
    },
    #[command(about = "Stage an image for upload", long_about = "Load the given files, keep the first image (image/* only, single file) and stage it. Prints the accepted file and its preview handle.")]
    Stage {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    #[command(about = "Validate configuration and directory connectivity")]
    CheckConfig,
}

fn options_table(header: &str, options: &[SelectableOption]) -> Option<Table> {
    if options.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table.set_header(vec!["#", header]);
    for (i, option) in options.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), option.label.clone()]);
    }
    Some(table)
}

fn print_options(header: &str, options: &[SelectableOption]) {
    match options_table(header, options) {
        Some(table) => println!("\n{table}\n"),
        None => println!("(empty list)"),
    }
}

fn build_http_directory() -> HttpDirectory {
    match HttpDirectory::new(DirectoryConfig::from_env()) {
        Ok(directory) => directory,
        Err(e) => {
            tracing::error!(%e, "Failed to build directory client");
            eprintln!("{}: {}", Paint::red("Failed to build directory client"), e);
            process::exit(1);
        }
    }
}

fn build_directory() -> Arc<dyn RegionDirectory> {
    Arc::new(build_http_directory())
}

fn print_selection(selection: Selection) {
    let json = serde_json::to_string_pretty(&selection).unwrap_or_else(|_| format!("{:?}", selection));
    println!("{}\n{}", Paint::new("Proceeding with:").green(), json);
}

/// Resolve a typed answer to an option value: either a 1-based index or
/// the label itself. Empty input means the placeholder.
fn resolve_choice(input: &str, options: &[SelectableOption]) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return PLACEHOLDER_VALUE.to_string();
    }
    if let Ok(n) = trimmed.parse::<usize>() {
        if let Some(option) = n.checked_sub(1).and_then(|i| options.get(i)) {
            return option.value.clone();
        }
    }
    options
        .iter()
        .find(|o| o.label.eq_ignore_ascii_case(trimmed))
        .map(|o| o.value.clone())
        .unwrap_or_else(|| trimmed.to_string())
}

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, question: &str) -> String {
    println!("{}", Paint::new(question).cyan());
    match lines.next_line().await {
        Ok(Some(line)) => line,
        Ok(None) => String::new(),
        Err(e) => {
            tracing::warn!(%e, "failed to read stdin");
            String::new()
        }
    }
}

async fn run_pick(region: Option<String>, sub_region: Option<String>) {
    let selector = RegionSelector::init(build_directory(), print_selection).await;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let region = match region {
        Some(r) => r,
        None => {
            let options = selector.regions();
            print_options("Region", &options);
            let answer = prompt(&mut lines, "Select a region (number or code, empty to skip):").await;
            resolve_choice(&answer, &options)
        }
    };
    selector.on_region_change(region);
    selector.settle().await;

    let sub_region = match sub_region {
        Some(s) => Some(s),
        None => {
            let options = selector.sub_regions();
            print_options("Sub-region", &options);
            let answer = prompt(&mut lines, "Select a sub-region (number or name, empty to skip):").await;
            let choice = resolve_choice(&answer, &options);
            (choice != PLACEHOLDER_VALUE).then_some(choice)
        }
    };
    if let Some(name) = sub_region {
        selector.on_sub_region_change(name);
    }
    selector.proceed();
}

async fn run_stage(paths: Vec<PathBuf>) {
    let mut candidates = Vec::new();
    for path in &paths {
        match load_blob(path).await {
            Ok(blob) => candidates.push(blob),
            Err(e) => eprintln!("{}: {}", Paint::new("Skipping").yellow(), e),
        }
    }
    let offered = pick_images(candidates);
    if offered.is_empty() {
        eprintln!("{}", Paint::new("No image among the given files").yellow());
    }

    let mut area = FileStagingArea::new(|file: &Blob| {
        println!(
            "{} {} ({}, {} bytes)",
            Paint::new("Accepted").green(),
            file.name(),
            file.content_type(),
            file.len()
        );
    });
    area.accept_drop(offered);

    match area.current_preview() {
        Some(preview) => println!("{} {}", Paint::new("Preview:").cyan(), preview),
        None => println!("{}", Paint::new("No image selected").dim()),
    }
}

async fn run_check_config() {
    let directory = build_http_directory();
    let cfg = directory.config();
    println!("Directory URL: {}", cfg.base_url);
    println!("Order by:      {}", cfg.order_by);
    println!("Timeout:       {}s", cfg.timeout.as_secs());
    match directory.regions().await {
        Ok(regions) => {
            println!(
                "{}",
                Paint::new(format!("Configuration looks valid ({} regions returned)", regions.len())).green()
            );
        }
        Err(e) => {
            eprintln!("{}: {}", Paint::new("Configuration appears invalid").red(), e);
            process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        waypoint::api::set_silent(true);
    }

    config::load_env_file(cli.env_file.as_deref());

    match cli.command {
        Commands::Regions => {
            let selector = RegionSelector::init(build_directory(), |_: Selection| {}).await;
            print_options("Region", &selector.regions());
        }
        Commands::SubRegions { code } => {
            let selector = RegionSelector::new(build_directory(), |_: Selection| {});
            selector.on_region_change(code);
            selector.settle().await;
            print_options("Sub-region", &selector.sub_regions());
        }
        Commands::Pick { region, sub_region } => run_pick(region, sub_region).await,
        Commands::Stage { paths } => run_stage(paths).await,
        Commands::CheckConfig => run_check_config().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<SelectableOption> {
        vec![SelectableOption::uniform("MG"), SelectableOption::uniform("SP")]
    }

    #[test]
    fn test_resolve_choice_by_index() {
        assert_eq!(resolve_choice("2", &options()), "SP");
    }

    #[test]
    fn test_resolve_choice_by_label() {
        assert_eq!(resolve_choice(" mg ", &options()), "MG");
    }

    #[test]
    fn test_resolve_choice_empty_is_placeholder() {
        assert_eq!(resolve_choice("", &options()), PLACEHOLDER_VALUE);
    }

    #[test]
    fn test_resolve_choice_out_of_range_is_passed_through() {
        assert_eq!(resolve_choice("9", &options()), "9");
    }
}
