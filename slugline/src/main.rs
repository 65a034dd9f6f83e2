use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use slugline_core::config::{self, Config, ConfigEntryStatus, CONFIG_FILE};
use slugline_core::{init, make_with_options, SlugOptions};
use std::io::{self, BufRead, Write};
use std::path::Path;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(
    name = "slugline",
    version = VERSION,
    about = "Turn titles and filenames into URL-safe slugs",
    long_about = "slugline turns titles, labels and filenames (Latin or Cyrillic) into lowercase, URL-safe slugs.\n\nDefaults come from $SLUGLINE_DIR/config and SLUGLINE_* env vars; flags win over both."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the slug for TEXT, or for each line of stdin
    Make {
        /// Text to slugify (words are joined with spaces); reads stdin when omitted
        text: Vec<String>,

        /// Separator between words
        #[arg(short, long)]
        separator: Option<String>,

        /// Maximum slug length in characters (0 = unlimited)
        #[arg(short, long)]
        max_length: Option<usize>,

        /// Custom replacement as C=TEXT (repeatable), e.g. -r '&=and'
        #[arg(short, long = "replace", value_name = "C=TEXT")]
        replacements: Vec<String>,

        /// Keep a trailing .ext instead of dropping it
        #[arg(long)]
        keep_extension: bool,

        /// Keep Latin letters with diacritics and non-ASCII digits
        #[arg(long)]
        unicode_letters: bool,

        /// Print one JSON object per input
        #[arg(long)]
        json: bool,
    },

    /// Inspect the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Create the slugline directory with a template config
    Init,

    /// Print version
    Version,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective default options as JSON
    Show,
    /// Validate the config file
    Check,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let slugline_dir = config::default_slugline_dir();
    log::debug!("slugline dir: {}", slugline_dir.display());

    let result = match cli.command {
        None | Some(Commands::Version) => {
            println!("slugline {}", VERSION);
            Ok(())
        }
        Some(Commands::Make {
            text,
            separator,
            max_length,
            replacements,
            keep_extension,
            unicode_letters,
            json,
        }) => Config::load(&slugline_dir).and_then(|cfg| {
            let overrides = Overrides {
                separator,
                max_length,
                replacements,
                keep_extension,
                unicode_letters,
            };
            let options = overrides.apply(cfg.options)?;
            cmd_make(&text, &options, json)
        }),
        Some(Commands::Config {
            command: ConfigCommands::Show,
        }) => Config::load(&slugline_dir).and_then(|cfg| cmd_config_show(&cfg)),
        Some(Commands::Config {
            command: ConfigCommands::Check,
        }) => cmd_config_check(&slugline_dir),
        Some(Commands::Init) => init::init_dir(&slugline_dir).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// Flags that override the loaded defaults.
struct Overrides {
    separator: Option<String>,
    max_length: Option<usize>,
    replacements: Vec<String>,
    keep_extension: bool,
    unicode_letters: bool,
}

impl Overrides {
    fn apply(self, mut options: SlugOptions) -> Result<SlugOptions> {
        if let Some(separator) = self.separator {
            options.separator = separator;
        }
        if let Some(max_length) = self.max_length {
            options.max_length = max_length;
        }
        for spec in &self.replacements {
            let (from, to) = config::parse_replacement(spec)
                .with_context(|| format!("invalid --replace {spec:?}"))?;
            options.custom_replacements.insert(from, to);
        }
        if self.keep_extension {
            options.strip_extension = false;
        }
        if self.unicode_letters {
            options.unicode_letters = true;
        }
        Ok(options)
    }
}

fn cmd_make(text: &[String], options: &SlugOptions, json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !text.is_empty() {
        let input = text.join(" ");
        return print_slug(&mut out, &input, options, json);
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        print_slug(&mut out, &line, options, json)?;
    }
    Ok(())
}

fn print_slug(out: &mut impl Write, input: &str, options: &SlugOptions, json: bool) -> Result<()> {
    let slug = make_with_options(input, options);
    if json {
        let record = serde_json::json!({ "input": input, "slug": slug });
        writeln!(out, "{record}")?;
    } else {
        writeln!(out, "{slug}")?;
    }
    Ok(())
}

fn cmd_config_show(config: &Config) -> Result<()> {
    println!("{}", config.options.to_pretty_json()?);
    Ok(())
}

fn cmd_config_check(slugline_dir: &Path) -> Result<()> {
    let path = slugline_dir.join(CONFIG_FILE);
    if !path.exists() {
        println!("No config file at {} (defaults apply)", path.display());
        return Ok(());
    }

    let entries = config::validate_config_file(&path)?;
    let mut problems = 0;
    for entry in &entries {
        let prefix = format!("{}:{}", path.display(), entry.line);
        match &entry.status {
            ConfigEntryStatus::Ok => println!("{prefix}: ok {}={}", entry.key, entry.value),
            ConfigEntryStatus::InvalidValue { note } => {
                problems += 1;
                println!("{prefix}: invalid {}={} ({note})", entry.key, entry.value);
            }
            ConfigEntryStatus::UnknownKey { suggestion } => {
                problems += 1;
                match suggestion {
                    Some(s) => println!("{prefix}: unknown key {:?}, did you mean {s:?}?", entry.key),
                    None => println!("{prefix}: unknown key {:?}", entry.key),
                }
            }
        }
    }

    if problems > 0 {
        bail!("{problems} problem(s) in {}", path.display());
    }
    println!("Config OK ({} entries)", entries.len());
    Ok(())
}
