//! Luna Rituals CLI - migrations, image seeding, design specs and batch jobs.
//!
//! # Usage
//!
//! ```bash
//! # Run storefront database migrations
//! luna-cli migrate
//!
//! # Seed product image rows
//! luna-cli seed images -f data/product-images.yaml --clear
//!
//! # Build one design spec with its generation prompt
//! luna-cli design-spec --theme peace --mood coastal --prompt
//!
//! # Batch jobs over the catalog
//! luna-cli batch design-specs --all --output out/design-specs
//! luna-cli batch print-listings --test --output out/listings
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use luna_rituals_core::ProductId;
use luna_rituals_core::catalog::AffirmationCategory;
use luna_rituals_core::design::{BuildSpecOptions, LayoutArchetype, MoodSlug, Seed, ThemeSlug};

mod batch;
mod commands;

#[derive(Parser)]
#[command(name = "luna-cli")]
#[command(author, version, about = "Luna Rituals CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run storefront database migrations
    Migrate,
    /// Seed database tables from files
    Seed {
        #[command(subcommand)]
        target: SeedTarget,
    },
    /// Build a design spec
    DesignSpec(DesignSpecArgs),
    /// Run a sequential batch job over affirmations
    Batch {
        #[command(subcommand)]
        job: BatchJob,
    },
}

#[derive(Subcommand)]
enum SeedTarget {
    /// Seed product images from a YAML file
    Images {
        /// Path to the YAML seed file
        #[arg(short, long)]
        file: PathBuf,

        /// Delete existing images of each seeded product first
        #[arg(long)]
        clear: bool,
    },
}

#[derive(Args)]
struct DesignSpecArgs {
    #[arg(long)]
    theme: ThemeSlug,

    #[arg(long)]
    mood: MoodSlug,

    /// Layout archetype override
    #[arg(long)]
    layout: Option<LayoutArchetype>,

    /// Keywords replacing the last supporting phrase
    #[arg(long, default_value = "")]
    keywords: String,

    /// Explicit seed (number or text)
    #[arg(long)]
    seed: Option<String>,

    #[arg(long, default_value_t = 0)]
    style_variant: u32,

    #[arg(long, default_value_t = 0)]
    accent_variant: u32,

    #[arg(long, default_value_t = 0)]
    palette_variant: u32,

    #[arg(long, default_value_t = 0)]
    copy_variant: u32,

    #[arg(long, default_value_t = 0)]
    texture_variant: u32,

    /// Custom palette, comma separated `#RRGGBB` values
    #[arg(long, value_delimiter = ',')]
    palette: Option<Vec<String>>,

    /// Custom headline (used with --phrase)
    #[arg(long)]
    headline: Option<String>,

    /// Custom supporting phrase, repeatable (used with --headline)
    #[arg(long = "phrase")]
    phrases: Option<Vec<String>>,

    /// Include the rendered generation prompt
    #[arg(long)]
    prompt: bool,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl DesignSpecArgs {
    fn to_options(&self) -> BuildSpecOptions {
        let mut options = BuildSpecOptions::new(self.theme, self.mood);
        options.layout_override = self.layout;
        options.keywords.clone_from(&self.keywords);
        options.seed = self.seed.as_deref().map(parse_seed);
        options.style_variant = self.style_variant;
        options.accent_variant = self.accent_variant;
        options.palette_variant = self.palette_variant;
        options.copy_variant = self.copy_variant;
        options.texture_variant = self.texture_variant;
        options.custom_palette_hex.clone_from(&self.palette);
        options.custom_headline.clone_from(&self.headline);
        options.custom_supporting_phrases.clone_from(&self.phrases);
        options
    }
}

/// Numeric seeds stay numbers so they match seeds sent as JSON numbers.
fn parse_seed(raw: &str) -> Seed {
    let number = raw.parse::<i64>().map(serde_json::Number::from).ok().or_else(|| {
        raw.parse::<f64>().ok().and_then(serde_json::Number::from_f64)
    });
    number.map_or_else(|| Seed::Text(raw.to_owned()), Seed::Number)
}

#[derive(Args)]
struct SelectionArgs {
    /// Every affirmation
    #[arg(long)]
    all: bool,

    /// First two matching affirmations only
    #[arg(long)]
    test: bool,

    /// Comma separated affirmation ids
    #[arg(long, value_delimiter = ',')]
    products: Option<Vec<ProductId>>,

    /// Affirmation category, e.g. Self-Love
    #[arg(long)]
    category: Option<AffirmationCategory>,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Delay between items in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
}

impl SelectionArgs {
    fn selection(&self) -> batch::Selection {
        batch::Selection {
            all: self.all,
            test: self.test,
            products: self.products.clone(),
            category: self.category,
        }
    }

    const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Subcommand)]
enum BatchJob {
    /// Write a design spec JSON per affirmation
    DesignSpecs {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Mood applied to every spec
        #[arg(long, default_value = "minimalist")]
        mood: MoodSlug,
    },
    /// Write print-on-demand listing payloads per affirmation
    PrintListings {
        #[command(flatten)]
        selection: SelectionArgs,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::storefront().await?,
        Commands::Seed { target } => match target {
            SeedTarget::Images { file, clear } => {
                commands::seed::images(&file, clear).await?;
            }
        },
        Commands::DesignSpec(args) => {
            commands::design_spec::run(&args.to_options(), args.prompt, args.output.as_deref())
                .await?;
        }
        Commands::Batch { job } => match job {
            BatchJob::DesignSpecs { selection, mood } => {
                commands::batch::design_specs(
                    &selection.selection(),
                    selection.output.clone(),
                    mood,
                    selection.delay(),
                )
                .await?;
            }
            BatchJob::PrintListings { selection } => {
                commands::batch::print_listings(
                    &selection.selection(),
                    selection.output.clone(),
                    selection.delay(),
                )
                .await?;
            }
        },
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_design_spec_args() {
        let cli = Cli::try_parse_from([
            "luna-cli",
            "design-spec",
            "--theme",
            "peace",
            "--mood",
            "modern-serif",
            "--seed",
            "7",
            "--palette",
            "#112233,#445566",
        ])
        .unwrap();

        let Commands::DesignSpec(args) = cli.command else {
            panic!("expected design-spec");
        };
        let options = args.to_options();
        assert_eq!(options.theme, ThemeSlug::Peace);
        assert_eq!(options.mood, MoodSlug::ModernSerif);
        assert_eq!(options.seed, Some(Seed::Number(7_i64.into())));
        assert_eq!(
            options.custom_palette_hex,
            Some(vec!["#112233".to_string(), "#445566".to_string()])
        );
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let result = Cli::try_parse_from([
            "luna-cli",
            "design-spec",
            "--theme",
            "gloom",
            "--mood",
            "pastel",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_batch_args() {
        let cli = Cli::try_parse_from([
            "luna-cli",
            "batch",
            "print-listings",
            "--products",
            "aff-001,aff-002",
            "--output",
            "out",
            "--delay-ms",
            "0",
        ])
        .unwrap();

        let Commands::Batch {
            job: BatchJob::PrintListings { selection },
        } = cli.command
        else {
            panic!("expected print-listings");
        };
        assert_eq!(selection.selection().resolve().unwrap().len(), 2);
        assert_eq!(selection.delay(), Duration::ZERO);
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("-12"), Seed::Number((-12_i64).into()));
        assert_eq!(parse_seed("1.5").to_string(), "1.5");
        assert!(matches!(parse_seed("1.5"), Seed::Number(_)));
        assert_eq!(parse_seed("moon"), Seed::Text("moon".to_string()));
        assert_eq!(parse_seed("NaN"), Seed::Text("NaN".to_string()));
    }
}
