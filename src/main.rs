use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use pill_match::catalog;
use pill_match::filter::ALL_CATEGORIES;
use pill_match::utils::logging::{print_catalog_table, print_recommendation};
use pill_match::{
    Catalog, Matcher, MeasurementInput, PillMatchConfig, RecommendationOptions, all_cohort_keys,
    parse_age,
};

/// Command-line arguments for pill-match
#[derive(Parser, Debug)]
#[command(name = "pill-match")]
#[command(about = "Match age and BMI cohorts against an oral contraceptive catalog")]
#[command(version)]
struct Args {
    /// Catalog JSON file to use instead of the reference catalog
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a person and list the suitable pills
    Check {
        /// Age in years; only the leading whole number is read
        #[arg(long, allow_hyphen_values = true)]
        age: Option<String>,

        /// Weight in kilograms
        #[arg(long, allow_negative_numbers = true)]
        weight: Option<f64>,

        /// Height in centimeters
        #[arg(long, allow_negative_numbers = true)]
        height: Option<f64>,

        /// Report relevant health conditions
        #[arg(long)]
        health_conditions: bool,

        /// Only show this category
        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,

        /// Show brand counts instead of brand names
        #[arg(long)]
        hide_brands: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or exchange catalogs
    #[command(subcommand)]
    Catalog(CatalogCommand),
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Write the active catalog as JSON
    Export {
        /// Destination file
        #[arg(long, short, value_name = "FILE")]
        output: PathBuf,
    },

    /// Check that a file is a valid catalog
    Validate {
        /// Catalog file to check
        file: PathBuf,
    },

    /// List catalog entries
    List {
        /// Case-insensitive search over names, brands and descriptions
        #[arg(long, default_value = "")]
        search: String,

        /// Only list this category
        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,
    },

    /// Print every valid cohort key
    Groups,
}

fn load_catalog(config: &PillMatchConfig) -> Result<Catalog> {
    let catalog = catalog::load_configured(config).with_context(|| match &config.catalog_path {
        Some(path) => format!("Failed to load catalog from {}", path.display()),
        None => "Failed to load the reference catalog".to_string(),
    })?;
    info!(
        "Using catalog with {} entries in {} categories",
        catalog.len(),
        catalog.categories().len()
    );
    Ok(catalog)
}

fn run_check(config: PillMatchConfig, input: &MeasurementInput, options: &RecommendationOptions, json: bool) -> Result<()> {
    let catalog = load_catalog(&config)?;
    let matcher = Matcher::new(config);
    let recommendation = matcher.recommend(input, &catalog, options)?;

    if json {
        let rendered = serde_json::to_string_pretty(&recommendation)
            .context("Failed to render recommendation as JSON")?;
        println!("{rendered}");
    } else {
        print_recommendation(&recommendation);
    }
    Ok(())
}

fn run_validate(file: &Path) -> Result<()> {
    let catalog = catalog::load_from_path(file)
        .with_context(|| format!("{} is not a valid catalog", file.display()))?;
    println!(
        "{}: {} entries, {} categories",
        file.display(),
        catalog.len(),
        catalog.categories().len()
    );
    Ok(())
}

fn run_list(config: &PillMatchConfig, term: &str, category: &str) -> Result<()> {
    let catalog = load_catalog(config)?;
    let entries = catalog::search(&catalog, term, category);
    print_catalog_table(&entries);
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let start = Instant::now();

    let mut config = PillMatchConfig::from_env();
    if let Some(path) = args.catalog {
        config = config.with_catalog_path(path);
    }
    info!("{config}");

    match args.command {
        Command::Check {
            age,
            weight,
            height,
            health_conditions,
            category,
            hide_brands,
            json,
        } => {
            let input = MeasurementInput {
                age: age.as_deref().and_then(parse_age),
                weight_kg: weight,
                height_cm: height,
                has_health_conditions: health_conditions,
            };
            let options = RecommendationOptions {
                category,
                show_brand_names: !hide_brands,
            };
            run_check(config, &input, &options, json)?;
        }
        Command::Catalog(CatalogCommand::Export { output }) => {
            let catalog = load_catalog(&config)?;
            catalog::export_to_path(&catalog, &output)
                .with_context(|| format!("Failed to export catalog to {}", output.display()))?;
            println!("Exported {} entries to {}", catalog.len(), output.display());
        }
        Command::Catalog(CatalogCommand::Validate { file }) => run_validate(&file)?,
        Command::Catalog(CatalogCommand::List { search, category }) => {
            run_list(&config, &search, &category)?;
        }
        Command::Catalog(CatalogCommand::Groups) => {
            for key in all_cohort_keys() {
                println!("{key}");
            }
        }
    }

    info!("Finished in {:?}", start.elapsed());
    Ok(())
}
