use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bugassign_rs::{contacts_for, PackageTree};

/// Suggest an assignee and CC list for a bug title or package atom.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Bug title or package atom; multiple words are joined with spaces
    #[arg(required = true)]
    words: Vec<String>,

    /// Package tree root (overrides $PORTDIR)
    #[arg(long)]
    portdir: Option<PathBuf>,
}

impl Cli {
    fn tree(&self) -> PackageTree {
        match &self.portdir {
            Some(root) => PackageTree::new(root.clone()),
            None => PackageTree::from_env(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Some(root) = &cli.portdir {
        ensure!(root.is_dir(), "package tree root does not exist: {}", root.display());
    }

    let contacts = contacts_for(&cli.words.join(" "), &cli.tree());
    if let Some((assignee, cc)) = contacts.split_first() {
        println!(" assign-to:  {assignee}");
        println!("        cc:  {}", cc.join(","));
    }

    Ok(())
}
