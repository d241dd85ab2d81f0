use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::bio::TaxonomicLevel;
use crate::io::write_count_table;
use crate::metadata::SampleNamer;
use crate::pipeline::{bracken_to_krona, combine_reports};

pub const CONVERT_USAGE: &str =
    "Usage: bracken-tools convert <bracken_input.txt> <krona_output.txt>";

/// Post-processing for Bracken abundance reports.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a Bracken report into Krona text input (count, taxon)
    Convert {
        /// Bracken report to read
        #[arg(value_name = "BRACKEN_INPUT")]
        input: Option<PathBuf>,

        /// Krona text file to write
        #[arg(value_name = "KRONA_OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Combine Bracken reports into one table with samples as rows
    Combine {
        /// List of Bracken files (species, genus, family)
        #[arg(long, required = true, num_args = 1.., value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Output combined file
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Pattern removed from file names to get sample labels; repeat to
        /// give several. Replaces the default _bracken_S.txt, _bracken_G.txt
        /// and _bracken_F.txt.
        #[arg(long = "suffix", value_name = "PATTERN")]
        suffixes: Vec<String>,
    },
}

/// Main entry point for CLI
pub fn run_cli(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Convert { input, output } => {
            let (Some(input), Some(output)) = (input, output) else {
                println!("{}", CONVERT_USAGE);
                return Ok(ExitCode::from(1));
            };

            bracken_to_krona(&input, &output).with_context(|| {
                format!(
                    "converting {} to Krona text {}",
                    input.display(),
                    output.display()
                )
            })?;
        }

        Commands::Combine {
            files,
            output,
            suffixes,
        } => {
            let namer = if suffixes.is_empty() {
                for level in TaxonomicLevel::sample_suffix_levels() {
                    debug!(
                        "Stripping {} report suffix '{}' from sample labels",
                        level,
                        level.bracken_suffix()
                    );
                }
                SampleNamer::default()
            } else {
                debug!("Stripping custom sample label patterns: {:?}", suffixes);
                SampleNamer::new(suffixes)
            };

            info!("Combining {} Bracken reports", files.len());
            let table = combine_reports(&files, &namer).context("reading Bracken reports")?;
            write_count_table(&table, &output)
                .with_context(|| format!("writing combined table {}", output.display()))?;

            let (n_samples, n_taxa) = table.dimensions();
            info!(
                "Wrote {} samples x {} taxa to {}",
                n_samples,
                n_taxa,
                output.display()
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_combine() {
        let cli = Cli::try_parse_from([
            "bracken-tools",
            "combine",
            "--files",
            "a_bracken_S.txt",
            "b_bracken_S.txt",
            "-o",
            "combined.tsv",
        ])
        .unwrap();

        match cli.command {
            Commands::Combine {
                files,
                output,
                suffixes,
            } => {
                assert_eq!(
                    files,
                    vec![
                        PathBuf::from("a_bracken_S.txt"),
                        PathBuf::from("b_bracken_S.txt")
                    ]
                );
                assert_eq!(output, PathBuf::from("combined.tsv"));
                assert!(suffixes.is_empty());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_combine_with_suffixes() {
        let cli = Cli::try_parse_from([
            "bracken-tools",
            "combine",
            "--suffix",
            ".bracken",
            "--suffix",
            ".tsv",
            "--output",
            "out.tsv",
            "--files",
            "x.bracken.tsv",
        ])
        .unwrap();

        match cli.command {
            Commands::Combine { suffixes, .. } => {
                assert_eq!(suffixes, vec![".bracken", ".tsv"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_combine_requires_files_and_output() {
        assert!(Cli::try_parse_from(["bracken-tools", "combine", "-o", "out.tsv"]).is_err());
        assert!(Cli::try_parse_from(["bracken-tools", "combine", "--files", "a.txt"]).is_err());
    }

    #[test]
    fn test_convert_positionals_are_optional() {
        let cli = Cli::try_parse_from(["bracken-tools", "convert", "only_input.txt"]).unwrap();
        match cli.command {
            Commands::Convert { input, output } => {
                assert_eq!(input, Some(PathBuf::from("only_input.txt")));
                assert!(output.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
