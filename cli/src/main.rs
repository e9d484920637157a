//! artinset CLI - add margins and padding to artboards

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use artinset::render::{plan_to_json, report_to_json, summary, JsonFormat};
use artinset::{
    describe_ranges, load_document, save_document, Artifact, Artinset, RenderAs, Tool, Unit,
    UserInput,
};

#[derive(Parser)]
#[command(name = "artinset")]
#[command(version)]
#[command(about = "Add margins and padding to the artboards of a design document", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw margins inside artboards as guides or rectangles
    Margin {
        #[command(flatten)]
        run: RunArgs,

        /// Margin on every edge
        #[arg(long = "margin", value_name = "VALUE", allow_hyphen_values = true)]
        value: Option<String>,

        /// Draw margins as guides or black-stroked rectangles
        #[arg(long = "as", value_enum, default_value = "guide")]
        style: MarginStyle,
    },

    /// Grow or shrink artboard boundaries
    #[command(alias = "pad")]
    Padding {
        #[command(flatten)]
        run: RunArgs,

        /// Padding on every edge
        #[arg(long = "padding", value_name = "VALUE", allow_hyphen_values = true)]
        value: Option<String>,
    },

    /// Show artboards and layers of a document
    Info {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

/// Options shared by the margin and padding commands.
#[derive(Args)]
struct RunArgs {
    /// Input document (JSON)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (overwrites the input if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Artboards to affect (e.g., "1, 3, 5-8"); all artboards if omitted
    #[arg(short, long, value_name = "EXPR")]
    artboards: Option<String>,

    /// Top edge value
    #[arg(long, allow_hyphen_values = true)]
    top: Option<String>,

    /// Left edge value
    #[arg(long, allow_hyphen_values = true)]
    left: Option<String>,

    /// Right edge value
    #[arg(long, allow_hyphen_values = true)]
    right: Option<String>,

    /// Bottom edge value
    #[arg(long, allow_hyphen_values = true)]
    bottom: Option<String>,

    /// Unit of the entered values
    #[arg(long, value_enum, default_value = "points", env = "ARTINSET_UNIT")]
    unit: UnitArg,

    /// Points per inch (defaults to 96 for margins, 72 for padding)
    #[arg(long, value_name = "FACTOR", env = "ARTINSET_PPI")]
    ppi: Option<f64>,

    /// Alternate left/right values between odd and even artboards
    #[arg(long)]
    alternate: bool,

    /// Left value for odd artboards
    #[arg(long, allow_hyphen_values = true)]
    odd_left: Option<String>,

    /// Right value for odd artboards
    #[arg(long, allow_hyphen_values = true)]
    odd_right: Option<String>,

    /// Left value for even artboards
    #[arg(long, allow_hyphen_values = true)]
    even_left: Option<String>,

    /// Right value for even artboards
    #[arg(long, allow_hyphen_values = true)]
    even_right: Option<String>,

    /// Show what would change without writing the document
    #[arg(long)]
    dry_run: bool,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,
}

impl RunArgs {
    fn has_edges(&self) -> bool {
        self.top.is_some() || self.left.is_some() || self.right.is_some() || self.bottom.is_some()
    }

    fn has_alternate(&self) -> bool {
        self.alternate
            || self.odd_left.is_some()
            || self.odd_right.is_some()
            || self.even_left.is_some()
            || self.even_right.is_some()
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum UnitArg {
    /// Document points
    #[value(alias = "pixels")]
    Points,
    /// Inches
    Inches,
}

impl From<UnitArg> for Unit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Points => Unit::Points,
            UnitArg::Inches => Unit::Inches,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum MarginStyle {
    /// Non-printing guides
    Guide,
    /// Unfilled rectangles with a black stroke
    Rectangle,
}

impl From<MarginStyle> for RenderAs {
    fn from(style: MarginStyle) -> Self {
        match style {
            MarginStyle::Guide => RenderAs::Guide,
            MarginStyle::Rectangle => RenderAs::Rectangle,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Margin { run, value, style }) => {
            cmd_run(Tool::Margin, &run, value.as_deref(), style.into())
        }
        Some(Commands::Padding { run, value }) => {
            cmd_run(Tool::Padding, &run, value.as_deref(), RenderAs::Guide)
        }
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: artinset <margin|padding|info> [FILE]".yellow());
            println!("       artinset --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Translate command-line flags into the same form state the dialogs collect.
fn build_input(tool: Tool, args: &RunArgs, value: Option<&str>, render_as: RenderAs) -> UserInput {
    let mut input = UserInput::for_tool(tool)
        .with_unit(args.unit.into())
        .with_render_as(render_as);

    if let Some(expr) = &args.artboards {
        input = input.with_selection(expr.as_str());
    }
    if let Some(factor) = args.ppi {
        input = input.with_points_per_inch(factor);
    }
    if let Some(value) = value {
        input = input.with_all(value);
    }

    if args.has_edges() {
        input.directional = true;
        for (field, arg) in [
            (&mut input.top, &args.top),
            (&mut input.left, &args.left),
            (&mut input.right, &args.right),
            (&mut input.bottom, &args.bottom),
        ] {
            if let Some(v) = arg {
                *field = Some(v.clone());
            }
        }
    }

    if args.has_alternate() {
        input.alternate = true;
        input.odd_left = args.odd_left.clone();
        input.odd_right = args.odd_right.clone();
        input.even_left = args.even_left.clone();
        input.even_right = args.even_right.clone();
    }

    input
}

fn cmd_run(
    tool: Tool,
    args: &RunArgs,
    value: Option<&str>,
    render_as: RenderAs,
) -> Result<(), Box<dyn std::error::Error>> {
    let input_path = args
        .input
        .as_deref()
        .ok_or(artinset::Error::NoActiveDocument)?;

    let user_input = build_input(tool, args, value, render_as);
    let builder = Artinset::new(tool).with_input(&user_input)?;

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Loading document...");
    let mut doc = load_document(input_path)?;
    pb.inc(1);

    if args.dry_run {
        pb.set_message("Planning...");
        let plan = builder.plan(Some(&doc))?;
        pb.finish_and_clear();

        if args.json {
            println!("{}", plan_to_json(&plan, JsonFormat::Pretty)?);
            return Ok(());
        }

        println!("{} {} (dry run)", "Would apply".yellow().bold(), tool);
        print_artifacts(&plan.artifacts);
        print_ignored(&plan.ignored);
        print_degenerate(plan.degenerate_count());
        return Ok(());
    }

    pb.set_message(format!("Applying {}...", tool));
    let report = builder.run(Some(&mut doc))?;
    pb.inc(1);

    pb.set_message("Saving document...");
    let output = args.output.as_deref().unwrap_or(input_path);
    save_document(&doc, output)?;
    pb.inc(1);
    pb.finish_and_clear();

    if args.json {
        println!("{}", report_to_json(&report, JsonFormat::Pretty)?);
        return Ok(());
    }

    println!(
        "{} {} to {} artboards",
        "Applied".green().bold(),
        tool,
        report.applied_count()
    );
    print_artifacts(&report.artifacts);
    print_ignored(&report.ignored);

    print_degenerate(report.degenerate_count());

    println!("{} {}", "Saved to".green(), output.display());

    Ok(())
}

fn print_artifacts(artifacts: &[Artifact]) {
    let count = artifacts.len();
    for (i, artifact) in artifacts.iter().enumerate() {
        let branch = if i + 1 == count { "└─" } else { "├─" };
        let line = match artifact {
            Artifact::Boundary { index, after, .. } => format!(
                "artboard {}: [{}, {}, {}, {}]",
                index + 1,
                after.left,
                after.top,
                after.right,
                after.bottom
            ),
            Artifact::Margin(shape) => format!(
                "artboard {}: {} x {} at ({}, {})",
                shape.index + 1,
                shape.bounds.width,
                shape.bounds.height,
                shape.bounds.left,
                shape.bounds.top
            ),
        };
        println!("  {} {}", branch.dimmed(), line);
    }
}

fn print_ignored(ignored: &[RangeInclusive<usize>]) {
    if ignored.is_empty() {
        return;
    }
    println!(
        "{} artboards {} do not exist",
        "Skipped:".yellow().bold(),
        describe_ranges(ignored)
    );
}

fn print_degenerate(count: usize) {
    if count > 0 {
        println!(
            "{} {} margins have no area: offsets exceed the artboard",
            "Warning:".yellow().bold(),
            count
        );
    }
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}", summary(&doc));

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "artinset".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Artboard margin and padding tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn run_args(argv: &[&str]) -> (Tool, RunArgs, Option<String>, RenderAs) {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Some(Commands::Margin { run, value, style }) => (Tool::Margin, run, value, style.into()),
            Some(Commands::Padding { run, value }) => (Tool::Padding, run, value, RenderAs::Guide),
            _ => panic!("Expected margin or padding command"),
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_margin_flags() {
        let (tool, args, value, render_as) = run_args(&[
            "artinset",
            "margin",
            "doc.json",
            "--margin",
            "0.5",
            "--unit",
            "inches",
            "--as",
            "rectangle",
            "-a",
            "1, 3",
        ]);

        let input = build_input(tool, &args, value.as_deref(), render_as);
        let (selection, config) = input.capture(tool).unwrap();
        assert!(selection.includes(2));
        assert!(!selection.includes(1));
        assert_eq!(config.unit, Unit::Inches);
        assert_eq!(config.points_per_inch, 96.0);
        assert_eq!(config.render_as, RenderAs::Rectangle);
    }

    #[test]
    fn test_edge_flags_default_to_zero() {
        let (tool, args, value, render_as) =
            run_args(&["artinset", "padding", "doc.json", "--top", "-5"]);

        let input = build_input(tool, &args, value.as_deref(), render_as);
        assert!(input.directional);
        assert_eq!(input.top.as_deref(), Some("-5"));
        assert_eq!(input.left.as_deref(), Some("0"));
        assert!(input.capture(tool).is_ok());
    }

    #[test]
    fn test_partial_alternate_is_config_error() {
        let (tool, args, value, render_as) = run_args(&[
            "artinset",
            "pad",
            "doc.json",
            "--odd-left",
            "10",
        ]);

        let input = build_input(tool, &args, value.as_deref(), render_as);
        assert!(input.alternate);
        assert!(matches!(
            input.capture(tool),
            Err(artinset::Error::Config(_))
        ));
    }

    #[test]
    fn test_pixels_alias() {
        let (_, args, _, _) = run_args(&["artinset", "margin", "--unit", "pixels"]);
        assert!(args.unit == UnitArg::Points);
        assert!(args.input.is_none());
    }

    #[test]
    fn test_dry_run_json_flags() {
        let (_, args, _, _) = run_args(&["artinset", "margin", "doc.json", "--dry-run", "--json"]);
        assert!(args.dry_run);
        assert!(args.json);
    }
}
