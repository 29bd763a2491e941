mod palette;
mod printer;
mod theme;
mod value;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use printer::{
    plist::{self, EncodeError},
    Printer,
};
use value::Value;

/// Generate the Flat Light color scheme and install it into Sublime Text.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() -> anyhow::Result<()> {
    Args::parse();

    let registry = theme::style_registry();
    let document = theme::config(&registry);
    let xml = render(&document)?;

    println!("Saving theme!");

    let file_name = format!("{}.tmTheme", palette::THEME_NAME);
    write_theme(&installed_theme_path(&file_name)?, &xml)?;
    write_theme(Path::new(&file_name), &xml)?;

    Ok(())
}

fn render(document: &Value) -> Result<Vec<u8>, EncodeError> {
    let mut xml = Vec::new();
    let mut printer = Printer::new(&mut xml);
    plist::generate(&mut printer, document)?;
    Ok(xml)
}

fn write_theme(path: &Path, xml: &[u8]) -> anyhow::Result<()> {
    fs::write(path, xml)
        .with_context(|| format!("failed to write {}", path.display()))
}

/// Sublime Text picks up user themes from its `Packages/User` directory.
fn installed_theme_path(file_name: &str) -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir()
        .context("could not determine the home directory")?;
    Ok(home
        .join("Library")
        .join("Application Support")
        .join("Sublime Text 3")
        .join("Packages")
        .join("User")
        .join(file_name))
}
