//! Race commands
//!
//! Usage:
//!   paddock races list [--meeting-id <ID>]... [--visible <true|false>] [--order <asc|desc>]
//!   paddock races get <ID>

use clap::{Args, Subcommand, ValueEnum};
use paddock_api::{open_state, AppConfig};
use paddock_core::{RaceFilter, SortOrder};
use paddock_service::{GetRaceRequest, ListRacesRequest};

use super::print_json;

#[derive(Debug, Args)]
pub struct RacesArgs {
    #[command(subcommand)]
    pub command: RacesCommand,
}

#[derive(Debug, Subcommand)]
pub enum RacesCommand {
    /// List races (visible only, earliest first, unless told otherwise)
    List(ListArgs),
    /// Show one race
    Get {
        /// Race id
        id: i64,
    },
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Restrict to these meetings (repeatable)
    #[arg(long = "meeting-id")]
    pub meeting_ids: Vec<i64>,

    /// Show visible (true) or hidden (false) races
    #[arg(long)]
    pub visible: Option<bool>,

    /// Start time ordering
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Asc => SortOrder::Ascending,
            OrderArg::Desc => SortOrder::Descending,
        }
    }
}

impl ListArgs {
    fn into_filter(self) -> RaceFilter {
        RaceFilter {
            meeting_ids: self.meeting_ids,
            visible: self.visible,
            order: self.order.map(SortOrder::from),
        }
    }
}

/// Execute races command
pub fn execute(args: RacesArgs, config: AppConfig) -> anyhow::Result<()> {
    let state = open_state(&config)?;

    match args.command {
        RacesCommand::List(list) => {
            let response = state.racing.list_races(ListRacesRequest {
                filter: Some(list.into_filter()),
            })?;
            print_json(&response)
        }
        RacesCommand::Get { id } => {
            let response = state.racing.get_race(GetRaceRequest { race_id: id })?;
            print_json(&response)
        }
    }
}
