use std::borrow::Cow;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use inglish::rewrite::{parse_rules_toml, preset_toml, Preset, Rewriter};
use inglish::{PhoneticDictionary, Transliterator};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "inglish", about = "Transliterate English into Inglish")]
struct Cli {
    /// English → Kirschenbaum IPA dictionary (`word;phonetic` per line)
    #[arg(long, global = true, env = "INGLISH_DICT", default_value = "dicts/english-to-ipa.csv")]
    dict: PathBuf,
    /// Custom rewrite rules TOML (overrides --preset)
    #[arg(long, global = true)]
    rules: Option<PathBuf>,
    /// Built-in rewrite rules
    #[arg(long, global = true, value_enum, default_value_t = Preset::Standard)]
    preset: Preset,
    /// Write a JSON trace to this directory (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text, prompting for it when omitted
    Translate {
        /// English text
        text: Option<String>,
    },
    /// Show the phonetic stage only
    Ipa {
        /// English text
        text: String,
    },
    /// Show each word through both stages
    Explain {
        /// English text
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Rewrite rule tools
    Rules {
        #[command(subcommand)]
        command: RulesCommand,
    },
    /// Dictionary tools
    Dict {
        #[command(subcommand)]
        command: DictCommand,
    },
}

#[derive(Subcommand)]
enum RulesCommand {
    /// Print the active rule table (`--rules` file or preset) as TOML
    Export,
    /// Check a rules TOML file
    Validate {
        /// Rules file
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum DictCommand {
    /// Load a dictionary and report its size
    Info {
        /// Dictionary file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        inglish::trace_init::init_tracing(dir);
    }

    match &cli.command {
        Command::Translate { text } => {
            let (dict, rewriter) = open_resources(&cli);
            let t = Transliterator::new(&dict, &rewriter);
            match text {
                Some(text) => println!("{}", t.transliterate_line(text)),
                None => {
                    let input = die!(prompt("Enter English: "), "Error reading input: {}");
                    println!("Thiz iz Inglish: {}", t.transliterate_line(&input));
                }
            }
        }
        Command::Ipa { text } => {
            let (dict, rewriter) = open_resources(&cli);
            let t = Transliterator::new(&dict, &rewriter);
            let phonetic: Vec<String> = t.phonetic(text).iter().map(ToString::to_string).collect();
            println!("{}", phonetic.join(" "));
        }
        Command::Explain { text, json } => {
            let (dict, rewriter) = open_resources(&cli);
            let words = Transliterator::new(&dict, &rewriter).explain(text);
            if *json {
                let out = die!(serde_json::to_string_pretty(&words), "Error encoding JSON: {}");
                println!("{out}");
            } else {
                for w in &words {
                    let flag = if w.resolved { "" } else { "  (unresolved)" };
                    println!("{:<16} {:<20} {}{flag}", w.english, w.phonetic, w.inglish);
                }
                let unresolved = words.iter().filter(|w| !w.resolved).count();
                println!("{} words, {unresolved} unresolved", words.len());
            }
        }
        Command::Rules { command } => match command {
            RulesCommand::Export => {
                let content = read_rules_toml(&cli);
                die!(parse_rules_toml(&content), "Error in rules file: {}");
                print!("{content}");
            }
            RulesCommand::Validate { file } => {
                let content = die!(
                    fs::read_to_string(file),
                    "Error reading {}: {}",
                    file.display()
                );
                let config = die!(parse_rules_toml(&content), "Error: {}");
                println!(
                    "OK: {} markers, {} rules",
                    config.markers.len(),
                    config.rules.len()
                );
            }
        },
        Command::Dict { command } => match command {
            DictCommand::Info { file } => {
                let dict = open_dict(file);
                let silent = dict.iter().filter(|(_, p)| p.is_empty()).count();
                println!("{}: {} entries ({silent} silent)", file.display(), dict.len());
            }
        },
    }
}

fn open_dict(path: &Path) -> PhoneticDictionary {
    die!(
        PhoneticDictionary::open(path),
        "Error opening dictionary {}: {}",
        path.display()
    )
}

fn open_resources(cli: &Cli) -> (PhoneticDictionary, Rewriter) {
    let rewriter = match &cli.rules {
        Some(_) => die!(
            Rewriter::from_toml(&read_rules_toml(cli)),
            "Error in rules file: {}"
        ),
        None => Rewriter::preset(cli.preset),
    };
    (open_dict(&cli.dict), rewriter)
}

/// Rule table TOML: the `--rules` file when given, otherwise the preset.
fn read_rules_toml(cli: &Cli) -> Cow<'static, str> {
    match &cli.rules {
        Some(path) => Cow::Owned(die!(
            fs::read_to_string(path),
            "Error reading {}: {}",
            path.display()
        )),
        None => Cow::Borrowed(preset_toml(cli.preset)),
    }
}

/// Print `message` and read one line from stdin without its line ending.
fn prompt(message: &str) -> io::Result<String> {
    let mut stdout = io::stdout();
    stdout.write_all(message.as_bytes())?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}
