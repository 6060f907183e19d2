//! Command-line front end for romsweep.
//!
//! Scans a flat ROM directory, groups files by base title and either
//! reports or applies the per-title keeper selection.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use romsweep_lib::{
    CleanError, CleanOptions, OsFilesystem, execute_moves, plan_moves, resolve_preferences,
    scan_groups, scan_inventory, write_report,
};

#[derive(Parser)]
#[command(name = "romsweep")]
#[command(version, about = "Deduplicate ROM sets by filename region and language tags")]
struct Cli {
    /// ROM directory to work on (defaults to the current directory)
    #[arg(short, long, global = true)]
    rom_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick one file per title and move it into the destination directory
    Clean {
        /// Where kept files go (defaults to "moved" inside the ROM directory)
        #[arg(short, long)]
        dest_dir: Option<PathBuf>,

        /// Comma-separated attributes to keep, most preferred first
        #[arg(short, long)]
        keep: Option<String>,

        /// Actually move files; without this flag the run only reports
        #[arg(long)]
        apply: bool,

        /// Keep a title's only file even when no attribute matches
        #[arg(long)]
        keep_one: bool,

        /// Write the selection plan as JSON to this path
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,
    },

    /// List title groups and their extracted attributes
    Scan,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let rom_dir = cli.rom_dir.unwrap_or_else(|| PathBuf::from("."));

    let result = match cli.command {
        Commands::Clean {
            dest_dir,
            keep,
            apply,
            keep_one,
            report,
        } => run_clean(rom_dir, dest_dir, keep, apply, keep_one, report),
        Commands::Scan => run_scan(rom_dir),
    };

    if let Err(e) = result {
        eprintln!("{} {e}", "\u{2718}".if_supports_color(Stdout, |t| t.red()));
        std::process::exit(1);
    }
}

fn run_clean(
    rom_dir: PathBuf,
    dest_dir: Option<PathBuf>,
    keep: Option<String>,
    apply: bool,
    keep_one: bool,
    report: Option<PathBuf>,
) -> Result<(), CleanError> {
    let mut options = CleanOptions::new(rom_dir)
        .preferences(resolve_preferences(keep.as_deref()))
        .dry_run(!apply)
        .keep_singletons(keep_one);
    if let Some(dir) = dest_dir {
        options = options.dest_dir(dir);
    }
    log::debug!(
        "cleaning {} -> {} keeping [{}]",
        options.rom_dir.display(),
        options.dest_dir.display(),
        options.preferences,
    );

    println!(
        "Cleaning {} into {}",
        options
            .rom_dir
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
        options
            .dest_dir
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
    println!("Keeping: {}", options.preferences);
    if options.dry_run {
        println!(
            "{}",
            "Dry run: no files will be moved".if_supports_color(Stdout, |t| t.dimmed())
        );
    }
    println!();

    let fs_access = OsFilesystem;
    let groups = scan_groups(&fs_access, &options.rom_dir)?;
    let plan = plan_moves(&groups, &options);

    for selection in &plan.selections {
        println!("{selection}");
    }

    if let Some(path) = &report {
        write_report(path, &plan, &options)?;
        println!(
            "{}",
            format!("Report written to {}", path.display())
                .if_supports_color(Stdout, |t| t.dimmed())
        );
    }

    let moved = if options.dry_run {
        None
    } else {
        Some(execute_moves(&fs_access, &plan, &options)?)
    };

    println!();
    println!("{}", "Summary:".if_supports_color(Stdout, |t| t.bold()));
    println!(
        "  {} {} of {} titles have a keeper",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        plan.matched(),
        plan.selections.len(),
    );
    if plan.unmatched() > 0 {
        println!(
            "  {} {} without an acceptable variant",
            "?".if_supports_color(Stdout, |t| t.yellow()),
            plan.unmatched(),
        );
    }
    match moved {
        Some(summary) => println!(
            "  {} {} files moved to {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            summary.moved,
            options.dest_dir.display(),
        ),
        None => println!(
            "  {}",
            "Nothing was moved (pass --apply to move files)"
                .if_supports_color(Stdout, |t| t.dimmed())
        ),
    }

    Ok(())
}

fn run_scan(rom_dir: PathBuf) -> Result<(), CleanError> {
    println!(
        "Scanning {}",
        rom_dir.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    println!();

    let inventory = scan_inventory(&OsFilesystem, &rom_dir)?;

    if inventory.groups.is_empty() && inventory.skipped.is_empty() {
        println!("{}", "No files found.".if_supports_color(Stdout, |t| t.dimmed()));
        return Ok(());
    }

    for (base_title, files) in &inventory.groups {
        println!("{}", base_title.if_supports_color(Stdout, |t| t.bold()));
        for rom in files {
            println!(
                "  {} {}",
                rom.filename,
                format!("[{}]", rom.attributes.join(", "))
                    .if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }

    if !inventory.skipped.is_empty() {
        println!();
        for name in &inventory.skipped {
            println!(
                "  {} {} {}",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                name,
                "(no tag region)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }

    Ok(())
}
