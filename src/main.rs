// SPDX-License-Identifier: MIT
//
// palette-studio — command-line host for the palette crates.
//
//   ps-color  → parsing, hex/RGB/HSL, CIELAB adjustments
//   ps-theory → WCAG contrast, vision simulation, harmony suggestions
//   ps-studio → palette files, sessions, preview roles, config
//
// Every command parses its color arguments up front and fails with the
// offending input on a typo. `--json` swaps the text report for the same
// data as pretty JSON on stdout; logs always go to stderr.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ps_color::{Adjustment, Color, Hsl, adjust, named, parse, rotate_hue};
use ps_studio::{Palette, PaletteDocument, Studio, StudioConfig};
use ps_theory::contrast::{
    BackgroundCheck, ContrastResult, check_backgrounds, contrast_str, readable_text_color,
    relative_luminance,
};
use ps_theory::vision::simulate_str;
use ps_theory::{Recommendation, VisionKind, recommend};

/// Build accessible color palettes: contrast, color-blindness simulation and
/// harmony suggestions.
#[derive(Parser, Debug)]
#[command(name = "palette-studio")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Session config file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show hex, RGB, HSL and luminance of a color
    Inspect { color: String },

    /// Brighten, darken, saturate or desaturate a color
    Adjust {
        color: String,

        /// brighten, darken, saturate or desaturate
        #[arg(value_parser = parse_adjustment)]
        op: Adjustment,

        /// Step size; 1.0 is one perceptual step
        #[arg(long, default_value_t = 0.5)]
        amount: f64,
    },

    /// Rotate the hue of a color
    Rotate {
        color: String,

        /// Degrees to add to the hue (may be negative)
        #[arg(allow_negative_numbers = true)]
        degrees: f64,
    },

    /// Contrast ratio and WCAG levels for a text/background pair
    Contrast { foreground: String, background: String },

    /// Check a color against the common backgrounds
    Check { color: String },

    /// Simulate how colors look under a color vision deficiency
    Simulate {
        /// none, protanopia, deuteranopia or tritanopia
        #[arg(value_parser = parse_vision)]
        kind: VisionKind,

        /// Colors to simulate; unparseable inputs are echoed unchanged
        #[arg(required = true)]
        colors: Vec<String>,
    },

    /// Suggest harmonious colors for a base color
    Recommend {
        base: String,

        /// Exclude colors already in this palette file
        #[arg(long)]
        palette: Option<PathBuf>,
    },

    /// Create and edit palette files
    #[command(subcommand)]
    Palette(PaletteCommand),
}

#[derive(Subcommand, Debug)]
enum PaletteCommand {
    /// Create a palette file
    New {
        file: PathBuf,

        /// Palette name (defaults to the configured export name)
        #[arg(long)]
        name: Option<String>,

        /// Start empty instead of with the starter colors
        #[arg(long)]
        empty: bool,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show entries, simulation, contrast pairs and preview roles
    Show {
        file: PathBuf,

        /// Vision mode for the simulated views
        #[arg(long, value_parser = parse_vision)]
        vision: Option<VisionKind>,
    },

    /// Add a color
    Add {
        file: PathBuf,
        color: String,

        /// Entry name (defaults to "Color N")
        #[arg(long)]
        name: Option<String>,
    },

    /// Remove an entry by id
    Remove { file: PathBuf, id: String },

    /// Rename an entry; an empty name clears it
    Rename { file: PathBuf, id: String, name: String },

    /// Change an entry's color in place
    Update {
        file: PathBuf,
        id: String,
        color: String,

        /// New entry name; omitted or empty keeps the current one
        #[arg(long)]
        name: Option<String>,
    },
}

fn parse_adjustment(s: &str) -> std::result::Result<Adjustment, String> {
    Adjustment::from_name(s).ok_or_else(|| {
        let names: Vec<_> = Adjustment::all().iter().map(|a| a.name()).collect();
        format!("expected one of: {}", names.join(", "))
    })
}

fn parse_vision(s: &str) -> std::result::Result<VisionKind, String> {
    VisionKind::from_name(s).ok_or_else(|| {
        let names: Vec<_> = VisionKind::all().iter().map(|k| k.name()).collect();
        format!("expected one of: {}", names.join(", "))
    })
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => StudioConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => StudioConfig::default(),
    };

    let out = Output { json: args.json };
    match args.command {
        Command::Inspect { color } => inspect(&out, &color),
        Command::Adjust { color, op, amount } => {
            let result = adjust(parse_color(&color)?, op, amount);
            out.color(&result)
        }
        Command::Rotate { color, degrees } => {
            let result = rotate_hue(parse_color(&color)?, degrees);
            out.color(&result)
        }
        Command::Contrast { foreground, background } => contrast(&out, &foreground, &background),
        Command::Check { color } => check(&out, parse_color(&color)?),
        Command::Simulate { kind, colors } => simulate(&out, kind, &colors),
        Command::Recommend { base, palette } => {
            recommendations(&out, parse_color(&base)?, palette.as_deref())
        }
        Command::Palette(cmd) => palette_command(&out, config, cmd),
    }
}

fn parse_color(input: &str) -> Result<Color> {
    parse(input).with_context(|| format!("Failed to read color argument '{input}'"))
}

// ─── Output ──────────────────────────────────────────────────────────────────

/// Where a command's report goes: text lines or pretty JSON.
struct Output {
    json: bool,
}

impl Output {
    /// Print `value` as JSON, or run `text` to print the human report.
    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce()) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            text();
        }
        Ok(())
    }

    fn color(&self, color: &Color) -> Result<()> {
        self.emit(color, || println!("{color}"))
    }
}

fn format_hsl(hsl: Hsl) -> String {
    format!("hsl({:.0}, {:.0}%, {:.0}%)", hsl.h, hsl.s * 100.0, hsl.l * 100.0)
}

fn format_contrast(result: &ContrastResult) -> String {
    format!(
        "{:>5.2}:1  normal {:<4}  large {}",
        result.ratio, result.normal_text, result.large_text
    )
}

// ─── Single-color commands ───────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Inspection {
    hex: Color,
    rgb: [u8; 3],
    hsl: Hsl,
    luminance: f64,
    name: Option<&'static str>,
    readable_text: Color,
}

fn inspect(out: &Output, input: &str) -> Result<()> {
    let color = parse_color(input)?;
    let (r, g, b) = color.to_rgb();
    let report = Inspection {
        hex: color,
        rgb: [r, g, b],
        hsl: color.to_hsl(),
        luminance: relative_luminance(color),
        name: named::name_of(color),
        readable_text: readable_text_color(color),
    };
    out.emit(&report, || {
        println!("hex        {}", report.hex);
        println!("rgb        rgb({r}, {g}, {b})");
        println!("hsl        {}", format_hsl(report.hsl));
        println!("luminance  {:.4}", report.luminance);
        if let Some(name) = report.name {
            println!("name       {name}");
        }
        println!("text       {}", report.readable_text);
    })
}

fn contrast(out: &Output, foreground: &str, background: &str) -> Result<()> {
    let ratio = contrast_str(foreground, background).context("Failed to read color argument")?;
    let result = ContrastResult::from_ratio(ratio);
    out.emit(&result, || println!("{}", format_contrast(&result)))
}

fn print_checks(checks: &[BackgroundCheck]) {
    for check in checks {
        println!(
            "  {:<11} {}  {}",
            check.name,
            check.background,
            format_contrast(&check.result)
        );
    }
}

fn check(out: &Output, color: Color) -> Result<()> {
    let checks = check_backgrounds(color);
    out.emit(&checks, || {
        println!("{color} against common backgrounds:");
        print_checks(&checks);
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Simulation {
    input: String,
    simulated: String,
    different: bool,
    /// Contrast of the simulated color against white.
    contrast_on_white: f64,
}

fn simulate(out: &Output, kind: VisionKind, inputs: &[String]) -> Result<()> {
    let rows: Vec<Simulation> = inputs
        .iter()
        .map(|input| {
            let simulated = simulate_str(input, kind);
            // An echoed, unparseable input has no meaningful ratio; report 1:1.
            let contrast_on_white = contrast_str(&simulated, "#ffffff").unwrap_or(1.0);
            let different = parse(input).is_ok_and(|c| c.to_hex() != simulated);
            Simulation {
                input: input.clone(),
                simulated,
                different,
                contrast_on_white,
            }
        })
        .collect();
    out.emit(&rows, || {
        println!("{}", kind.label());
        if let Some(note) = kind.description() {
            println!("{note}");
        }
        for row in &rows {
            let badge = if row.different { "Different" } else { "Same" };
            println!(
                "  {:<20} → {:<9} {:>5.2}:1 on white  {badge}",
                row.input, row.simulated, row.contrast_on_white
            );
        }
    })
}

fn print_recommendations(recs: &[Recommendation]) {
    for rec in recs {
        println!("  {:<14} {}  {}", rec.label, rec.color, rec.category);
    }
}

fn recommendations(out: &Output, base: Color, palette_file: Option<&Path>) -> Result<()> {
    let existing = match palette_file {
        Some(path) => load_document(path)?.into_palette().colors(),
        None => Vec::new(),
    };
    let recs = recommend(base, &existing);
    out.emit(&recs, || {
        println!("Suggestions for {base}:");
        print_recommendations(&recs);
    })
}

// ─── Palette files ───────────────────────────────────────────────────────────

fn load_document(path: &Path) -> Result<PaletteDocument> {
    PaletteDocument::load(path).with_context(|| format!("Failed to read palette {}", path.display()))
}

fn save_palette(path: &Path, name: String, palette: &Palette) -> Result<PaletteDocument> {
    let doc = PaletteDocument::new(name, palette);
    doc.save(path)
        .with_context(|| format!("Failed to write palette {}", path.display()))?;
    info!("Saved {} colors to {}", doc.colors.len(), path.display());
    Ok(doc)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaletteReport<'a> {
    document: &'a PaletteDocument,
    vision: VisionKind,
    simulated: Vec<ps_studio::SimulatedEntry>,
    combinations: Vec<ps_studio::PairContrast>,
    summary: ps_studio::Summary,
    preview: ps_studio::PreviewScheme,
}

fn palette_command(out: &Output, config: StudioConfig, cmd: PaletteCommand) -> Result<()> {
    match cmd {
        PaletteCommand::New { file, name, empty, force } => {
            if file.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", file.display());
            }
            let name = name.unwrap_or_else(|| config.export_name.clone());
            let palette = if empty || !config.starter_palette {
                Palette::new()
            } else {
                Palette::starter()
            };
            let doc = save_palette(&file, name, &palette)?;
            out.emit(&doc, || println!("Created {} with {} colors", file.display(), doc.colors.len()))
        }
        PaletteCommand::Show { file, vision } => {
            let doc = load_document(&file)?;
            let mut studio = Studio::with_palette(config, doc.clone().into_palette());
            if let Some(kind) = vision {
                studio.set_vision(kind);
            }
            let report = PaletteReport {
                document: &doc,
                vision: studio.vision(),
                simulated: studio.simulated(),
                combinations: studio.combinations(),
                summary: studio.summary(),
                preview: studio.preview(),
            };
            out.emit(&report, || print_palette(&report))
        }
        PaletteCommand::Add { file, color, name } => {
            let doc = load_document(&file)?;
            let doc_name = doc.name.clone();
            let mut studio = Studio::with_palette(config, doc.into_palette());
            studio.select(parse_color(&color)?);
            let entry = match name {
                Some(name) => studio.add_color(studio.selected(), Some(name)),
                None => studio.add_selected(),
            }
            .clone();
            save_palette(&file, doc_name, studio.palette())?;
            out.emit(&entry, || {
                println!("Added {} as {}", entry.color, entry.id);
            })
        }
        PaletteCommand::Remove { file, id } => {
            let doc = load_document(&file)?;
            let doc_name = doc.name.clone();
            let mut palette = doc.into_palette();
            let removed = palette.remove(&id)?;
            save_palette(&file, doc_name, &palette)?;
            out.emit(&removed, || println!("Removed {} ({})", removed.id, removed.color))
        }
        PaletteCommand::Rename { file, id, name } => {
            let doc = load_document(&file)?;
            let doc_name = doc.name.clone();
            let mut palette = doc.into_palette();
            palette.rename(&id, &name)?;
            save_palette(&file, doc_name, &palette)?;
            let entry = palette.get(&id).context("Renamed entry disappeared")?;
            out.emit(entry, || println!("Renamed {id}"))
        }
        PaletteCommand::Update { file, id, color, name } => {
            let color = parse_color(&color)?;
            let doc = load_document(&file)?;
            let doc_name = doc.name.clone();
            let mut studio = Studio::with_palette(config, doc.into_palette());
            studio.update(&id, color, name.as_deref())?;
            save_palette(&file, doc_name, studio.palette())?;
            let entry = studio.palette().get(&id).context("Updated entry disappeared")?;
            out.emit(entry, || println!("Updated {id} to {}", entry.color))
        }
    }
}

fn print_palette(report: &PaletteReport<'_>) {
    let doc = report.document;
    println!(
        "{} ({} colors, exported {})",
        doc.name,
        doc.colors.len(),
        doc.exported_at.format("%Y-%m-%d %H:%M UTC")
    );
    for entry in &doc.colors {
        println!(
            "  {:>4}  {}  {}",
            entry.id,
            entry.color,
            entry.name.as_deref().unwrap_or("")
        );
    }

    println!();
    println!("{}", report.vision.label());
    for sim in &report.simulated {
        let badge = if sim.different { "Different" } else { "Same" };
        println!("  {:>4}  {} → {}  {badge}", sim.id, sim.original, sim.simulated);
    }

    if !report.combinations.is_empty() {
        println!();
        println!("Combinations:");
        for pair in &report.combinations {
            println!("  {:>4} / {:<4} {}", pair.first, pair.second, format_contrast(&pair.result));
        }
    }

    println!();
    println!(
        "{} of {} colors reach AA on white",
        report.summary.aa_compliant, report.summary.total
    );

    let preview = &report.preview;
    println!(
        "Preview: primary {} / secondary {} / accent {}",
        preview.primary.fill, preview.secondary.fill, preview.accent.fill
    );
}
