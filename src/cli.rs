//! Command-line definitions.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "phonecmp", version, about = "Compare mobile phones side-by-side")]
pub struct Args {
    /// Config file (TOML, YAML or JSON)
    #[arg(long, global = true, env = "PHONECMP_CONFIG")]
    pub config: Option<PathBuf>,
    /// CMS entry export to load phones from; overrides the config file
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
    /// More logging (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the slug for a phone title
    Slug { title: String },
    /// Build a comparison path from 2 to 4 phone titles
    Encode {
        #[arg(required = true, num_args = 2..=4)]
        titles: Vec<String>,
    },
    /// Print the slugs in a comparison path, one per line
    Decode { path: String },
    /// List every phone in the catalog
    List,
    /// Show a single phone
    Show { slug: String },
    /// Rank phones in a comparison path, spec by spec
    Compare { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[rstest]
    #[case(&["phonecmp", "encode", "Pixel 9"])]
    #[case(&["phonecmp", "encode", "A", "B", "C", "D", "E"])]
    fn test_encode_title_count(#[case] argv: &[&str]) {
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["phonecmp", "compare", "a-vs-b", "--catalog", "phones.json", "-vv"]).unwrap();
        assert_eq!(args.catalog, Some(PathBuf::from("phones.json")));
        assert_eq!(args.verbose, 2);
        assert!(matches!(args.command, Command::Compare { path } if path == "a-vs-b"));
    }
}
