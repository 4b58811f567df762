//! Match commands
//!
//! Usage:
//!   paddock matches list [--stadium <NAME>] [--sport <NAME>]
//!   paddock matches get <ID>

use clap::{Args, Subcommand};
use paddock_api::{open_state, AppConfig};
use paddock_core::MatchFilter;
use paddock_service::{GetMatchRequest, ListMatchesRequest};

use super::print_json;

#[derive(Debug, Args)]
pub struct MatchesArgs {
    #[command(subcommand)]
    pub command: MatchesCommand,
}

#[derive(Debug, Subcommand)]
pub enum MatchesCommand {
    /// List matches, optionally narrowed by stadium and sport
    List {
        #[arg(long)]
        stadium: Option<String>,

        #[arg(long)]
        sport: Option<String>,
    },
    /// Show one match
    Get {
        /// Match id
        id: i64,
    },
}

/// Execute matches command
pub fn execute(args: MatchesArgs, config: AppConfig) -> anyhow::Result<()> {
    let state = open_state(&config)?;

    match args.command {
        MatchesCommand::List { stadium, sport } => {
            let filter = MatchFilter { stadium, sport };
            let response = state.sports.list_matches(ListMatchesRequest {
                filter: Some(filter),
            })?;
            print_json(&response)
        }
        MatchesCommand::Get { id } => {
            let response = state.sports.get_match(GetMatchRequest { match_id: id })?;
            print_json(&response)
        }
    }
}
