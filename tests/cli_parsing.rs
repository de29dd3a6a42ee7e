//! CLI argument parsing tests.

use clap::Parser;
use dogdex::cli::{Cli, Commands};

#[test]
fn test_parse_lookup_single_breed() {
    let cli = Cli::try_parse_from(["dogdex", "lookup", "akita"]).unwrap();

    assert!(!cli.json);
    match cli.command {
        Commands::Lookup { breeds, stats } => {
            assert_eq!(breeds, vec!["akita".to_string()]);
            assert!(!stats);
        }
    }
}

#[test]
fn test_parse_lookup_multiple_breeds() {
    let cli = Cli::try_parse_from(["dogdex", "lookup", "akita", "husky", "pug"]).unwrap();

    match cli.command {
        Commands::Lookup { breeds, .. } => {
            assert_eq!(
                breeds,
                vec!["akita".to_string(), "husky".to_string(), "pug".to_string()]
            );
        }
    }
}

#[test]
fn test_parse_lookup_requires_at_least_one_breed() {
    let result = Cli::try_parse_from(["dogdex", "lookup"]);
    assert!(result.is_err(), "lookup without breeds must be rejected");
}

#[test]
fn test_parse_lookup_with_stats() {
    let cli = Cli::try_parse_from(["dogdex", "lookup", "akita", "--stats"]).unwrap();

    match cli.command {
        Commands::Lookup { stats, .. } => assert!(stats),
    }
}

#[test]
fn test_parse_global_json_flag() {
    let cli = Cli::try_parse_from(["dogdex", "lookup", "akita", "--json"]).unwrap();
    assert!(cli.json);

    // Global flags also parse before the subcommand.
    let cli = Cli::try_parse_from(["dogdex", "--json", "lookup", "akita"]).unwrap();
    assert!(cli.json);
}

#[test]
fn test_parse_unknown_command_is_rejected() {
    let result = Cli::try_parse_from(["dogdex", "fetch", "akita"]);
    assert!(result.is_err());
}
