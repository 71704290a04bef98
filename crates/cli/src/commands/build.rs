use anyhow::{Context, Result};
use chrono::Utc;
use conference_kit_generator::{Environment, GeneratedSite, RenderOptions, generate_site};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::schedule::{check_editions, into_edition_data, load_conference, print_report};

pub struct BuildArgs {
    pub output: Option<PathBuf>,
    pub production: bool,
    pub inline_assets: bool,
}

/// Build static site for deployment
pub async fn run(path: PathBuf, args: BuildArgs) -> Result<()> {
    build_site(&path, &args).map(|_| ())
}

/// Validate every schedule, then render and write the site. Returns the
/// output directory.
pub fn build_site(path: &Path, args: &BuildArgs) -> Result<PathBuf> {
    let environment = if args.production {
        Environment::Production
    } else {
        Environment::Development
    };
    let output = args.output.clone().unwrap_or_else(|| {
        path.join(match environment {
            Environment::Production => "docs",
            Environment::Development => "dist",
        })
    });

    println!("🔨 Building static site...");
    println!("   Source: {}", path.display());
    println!("   Output: {}", output.display());
    println!("   Environment: {}", environment);
    println!();

    let conference = load_conference(path)?;
    println!("✓ Loaded: {}", conference.event.name);
    println!("  Date: {}", conference.event.date);
    println!();

    // Validate every schedule before touching the output directory
    println!("🔍 Validating program schedules...");
    let checked = check_editions(path, &conference);
    for edition in &checked {
        print_report(edition);
    }

    if checked.iter().any(|c| !c.is_valid()) {
        eprintln!();
        eprintln!("💡 How to fix:");
        eprintln!("  1. Check the locations and categories arrays of the schedule file.");
        eprintln!("  2. Make sure every program's location and category match those arrays.");
        eprintln!("  3. Use YYYY-MM-DD dates and HH:MM-HH:MM time ranges (start before end).");
        eprintln!("  4. Walk-through files must be JSON with a title and link on every card.");
    }
    let editions = into_edition_data(checked)?;
    println!();

    let options = RenderOptions {
        inline_assets: args.inline_assets || conference.build.inline_assets,
        preview: false,
        environment,
        version: env!("CARGO_PKG_VERSION").to_string(),
        now: Utc::now(),
    };

    println!("📄 Generating pages...");
    let site = generate_site(&conference, &editions, &options)?;
    write_site(&output, &site)?;
    println!(
        "   ✓ Wrote {} page(s) and {} generated file(s)",
        site.pages.len(),
        site.assets.len()
    );

    println!("📁 Copying static files...");
    let copied_assets = copy_dir(&path.join("assets"), &output.join("assets"))?;
    println!("   ✓ Copied {} asset file(s)", copied_assets);
    let copied_data = copy_dir(&path.join("data"), &output.join("data"))?;
    println!("   ✓ Copied {} data file(s)", copied_data);

    let total: usize = editions.iter().map(|e| e.schedule.programs.len()).sum();
    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!("   Programs: {} across {} edition(s)", total, editions.len());
    println!();
    println!("To test locally:");
    println!("   cd {} && python3 -m http.server 8000", output.display());
    println!();

    Ok(output)
}

/// Write generated pages and assets below `output`, creating directories
pub fn write_site(output: &Path, site: &GeneratedSite) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let pages = site
        .pages
        .iter()
        .map(|(path, html)| (path, html.as_bytes()));
    let assets = site.assets.iter().map(|(path, data)| (path, data.as_slice()));

    for (relative, contents) in pages.chain(assets) {
        let target = output.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&target, contents)
            .with_context(|| format!("Failed to write {}", target.display()))?;
    }

    Ok(())
}

/// Recursively copy a directory tree. A missing source copies nothing.
fn copy_dir(src: &Path, dst: &Path) -> Result<usize> {
    if !src.exists() {
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(src)?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &target)
                .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
            copied += 1;
        }
    }

    Ok(copied)
}
