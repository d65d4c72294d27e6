//! Development tasks: man pages and shell completions.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Project maintenance tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Render man pages for the CLI and each subcommand
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out_dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => man(&out_dir),
        Task::Completions { out_dir } => completions(&out_dir),
    }
}

fn man(out_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let cmd = readability_scores::command();
    clap_mangen::generate_to(cmd, out_dir).context("failed to render man pages")?;
    println!("man pages written to {}", out_dir.display());
    Ok(())
}

fn completions(out_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let mut cmd = readability_scores::command();
    let bin_name = cmd.get_name().to_string();
    for shell in [
        Shell::Bash,
        Shell::Elvish,
        Shell::Fish,
        Shell::PowerShell,
        Shell::Zsh,
    ] {
        let path = clap_complete::generate_to(shell, &mut cmd, &bin_name, out_dir)
            .with_context(|| format!("failed to generate {shell} completions"))?;
        println!("{}", path.display());
    }
    Ok(())
}
