use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use pronounce_dict::{PhoneticDictionary, RhymeMatch};
use pronounce_protocol::{parse_pronunciation, Phoneme};
use serde::Serialize;
use tracing::debug;

#[derive(Parser)]
#[command(author, version, about = "Pronunciations, syllables and rhymes from a CMU-format dictionary")]
struct Cli {
    /// Dictionary file; the bundled CMU dictionary when omitted
    #[arg(short, long, value_name = "FILE", env = "PRONOUNCE_DICT", global = true)]
    dict: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every pronunciation of a word
    Lookup { word: String },
    /// Count the syllables of a pronunciation, e.g. "F UW1 B AA1 R"
    Syllables { pronunciation: String },
    /// Whether the dictionary knows a word
    Has { word: String },
    /// Whether two words rhyme
    Rhymes { word1: String, word2: String },
}

#[derive(Serialize)]
struct PronunciationReport {
    pronunciation: String,
    syllables: usize,
    phonemes: Vec<Phoneme>,
}

#[derive(Serialize)]
struct LookupReport {
    word: String,
    pronunciations: Vec<PronunciationReport>,
}

#[derive(Serialize)]
struct RhymeReport {
    word1: String,
    word2: String,
    rhymes: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pair: Option<MatchedPair>,
}

#[derive(Serialize)]
struct MatchedPair {
    first: String,
    second: String,
    rime: String,
}

impl From<RhymeMatch> for MatchedPair {
    fn from(m: RhymeMatch) -> Self {
        Self {
            first: m.first,
            second: m.second,
            rime: m.rime,
        }
    }
}

fn report(pronunciation: &str) -> anyhow::Result<PronunciationReport> {
    Ok(PronunciationReport {
        pronunciation: pronunciation.to_string(),
        syllables: PhoneticDictionary::syllable_count(pronunciation),
        phonemes: parse_pronunciation(pronunciation)
            .with_context(|| format!("Bad pronunciation '{}'", pronunciation))?,
    })
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn open_dictionary(cli: &Cli) -> anyhow::Result<PhoneticDictionary> {
    let dict = PhoneticDictionary::with_source(cli.dict.clone())
        .context("Failed to open dictionary")?;
    debug!(path = %dict.source().path().display(), "dictionary bound");
    Ok(dict)
}

/// Executes one subcommand and returns what should be printed.
fn run(cli: &Cli) -> anyhow::Result<String> {
    match &cli.command {
        // Syllable counting needs no dictionary
        Command::Syllables { pronunciation } => {
            if cli.json {
                to_json(&report(pronunciation)?)
            } else {
                Ok(PhoneticDictionary::syllable_count(pronunciation).to_string())
            }
        }
        Command::Lookup { word } => {
            let dict = open_dictionary(cli)?;
            let pronunciations = dict.pronunciations(word)?;
            if cli.json {
                let pronunciations = pronunciations
                    .iter()
                    .map(String::as_str)
                    .map(report)
                    .collect::<anyhow::Result<Vec<_>>>()?;
                to_json(&LookupReport {
                    word: word.clone(),
                    pronunciations,
                })
            } else {
                Ok(pronunciations
                    .iter()
                    .map(|p| format!("{}\t({} syllables)", p, PhoneticDictionary::syllable_count(p)))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
        Command::Has { word } => {
            let found = open_dictionary(cli)?.has_word(word)?;
            if cli.json {
                to_json(&serde_json::json!({ "word": word, "found": found }))
            } else {
                Ok(found.to_string())
            }
        }
        Command::Rhymes { word1, word2 } => {
            let found = open_dictionary(cli)?.rhyme_match(word1, word2)?;
            if cli.json {
                to_json(&RhymeReport {
                    word1: word1.clone(),
                    word2: word2.clone(),
                    rhymes: found.is_some(),
                    pair: found.map(MatchedPair::from),
                })
            } else {
                Ok(match found {
                    Some(m) => format!("true\t{} / {} share \"{}\"", m.first, m.second, m.rime),
                    None => "false".to_string(),
                })
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    println!("{}", run(&cli)?);
    Ok(())
}
