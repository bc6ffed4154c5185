mod analysis;
mod catalog;
mod config;
mod display;
mod draft;
mod error;
mod logging;

use analysis::filter::available_heroes;
use analysis::recommender::{PickRecommender, ScoringRules};
use anyhow::Context;
use catalog::loader::load_catalog;
use catalog::models::Hero;
use catalog::Catalog;
use clap::{Parser, Subcommand};
use config::Config;
use display::output::{
    display_breakdown, display_candidates, display_error, display_heroes, display_info,
    display_matchup, display_success, display_team, display_warning,
};
use draft::command::{DraftCommand, HELP};
use draft::{AddOutcome, DraftEvent, DraftSession, TEAM_SIZE};
use error::AppError;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "Dota Pick")]
#[command(about = "Rank Dota 2 heroes against the team you have picked", long_about = None)]
struct Args {
    /// JSON catalog to use instead of the built-in heroes
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Add position/attribute diversity bonuses to team scores
    #[arg(long, global = true)]
    bonuses: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the hero catalog alphabetically
    Heroes {
        /// Filter by name, role, attribute or position
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Rank candidate heroes against a team
    Rank {
        /// Selected heroes, comma separated (max 5)
        #[arg(short, long, value_delimiter = ',')]
        team: Vec<String>,

        /// Filter by name, role, attribute or position
        #[arg(short, long, default_value = "")]
        query: String,

        /// Number of candidates to display
        #[arg(short = 'n', long)]
        top_n: Option<usize>,
    },

    /// Matchup score of one hero facing another
    Score {
        hero: String,
        against: String,
    },

    /// Show how a candidate's team score is built
    Explain {
        /// Selected heroes, comma separated (max 5)
        #[arg(short, long, value_delimiter = ',', required = true)]
        team: Vec<String>,

        candidate: String,
    },

    /// Interactive drafting session
    Draft {
        /// Number of candidates to display after each change
        #[arg(short = 'n', long)]
        top_n: Option<usize>,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut config = Config::from_env()?;
    if let Some(path) = args.catalog {
        config.catalog_path = Some(path);
    }
    if args.bonuses {
        config.bonuses = true;
    }

    logging::init_logging(&config.log_filter);
    debug!(?config, "configuration resolved");

    let catalog = load_catalog(config.catalog_path.as_deref())?;
    let rules = if config.bonuses {
        ScoringRules::with_diversity_bonuses()
    } else {
        ScoringRules::matchups_only()
    };

    match args.command {
        Command::Heroes { query } => {
            let heroes = available_heroes(catalog.heroes(), &[], &query);
            display_heroes(&heroes);
        }
        Command::Rank { team, query, top_n } => {
            let mut session = DraftSession::new(&catalog, rules);
            for hero in resolve_team(&catalog, &team)? {
                let name = hero.localized_name.clone();
                if !session.apply(DraftEvent::Add(hero)) {
                    display_warning(&format!("{} listed twice, ignoring", name));
                }
            }
            session.apply(DraftEvent::SetQuery(query));

            display_team(session.team());
            display_candidates(
                session.candidates(),
                session.team(),
                session.query(),
                Some(top_n.unwrap_or(config.top_n)),
            );
        }
        Command::Score { hero, against } => {
            let hero = catalog.find(&hero)?;
            let against = catalog.find(&against)?;
            let score = catalog
                .matchups()
                .score(&hero.localized_name, &against.localized_name);
            display_matchup(hero, against, score);
        }
        Command::Explain { team, candidate } => {
            let team = resolve_team(&catalog, &team)?;
            let candidate = catalog.find(&candidate)?;
            let recommender = PickRecommender::new(catalog.matchups(), rules);
            display_breakdown(&team, candidate, &recommender.breakdown(&team, candidate));
        }
        Command::Draft { top_n } => {
            let mut session = DraftSession::new(&catalog, rules);
            let stdin = io::stdin();
            run_draft(&mut session, stdin.lock(), top_n.unwrap_or(config.top_n))
                .map_err(|e| AppError::IoError(format!("{:#}", e)))?;
        }
    }

    Ok(())
}

fn resolve_team(catalog: &Catalog, names: &[String]) -> Result<Vec<Hero>, AppError> {
    let names: Vec<&str> = names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .collect();

    if names.len() > TEAM_SIZE {
        return Err(AppError::TeamTooLarge {
            given: names.len(),
            max: TEAM_SIZE,
        });
    }

    catalog.find_all(&names)
}

fn run_draft<R: BufRead>(
    session: &mut DraftSession,
    input: R,
    top_n: usize,
) -> anyhow::Result<()> {
    display_info(&format!(
        "{} heroes loaded. Type 'help' for commands.",
        session.catalog().len()
    ));
    display_candidates(
        session.candidates(),
        session.team(),
        session.query(),
        Some(top_n),
    );

    let mut stdout = io::stdout();
    print!("draft> ");
    stdout.flush().context("flushing prompt")?;

    for line in input.lines() {
        let line = line.context("reading draft command")?;

        match DraftCommand::parse(&line) {
            Ok(Some(DraftCommand::Quit)) => break,
            Ok(Some(command)) => handle_command(session, command, top_n),
            Ok(None) => {}
            Err(e) => display_error(&e.to_string()),
        }

        print!("draft> ");
        stdout.flush().context("flushing prompt")?;
    }

    println!();
    Ok(())
}

fn handle_command(session: &mut DraftSession, command: DraftCommand, top_n: usize) {
    let changed = match command {
        DraftCommand::Add(name) => match session.catalog().find(&name).cloned() {
            Ok(hero) => match session.add(&hero) {
                AddOutcome::Added => {
                    display_success(&format!("Added {}", hero.localized_name));
                    true
                }
                AddOutcome::TeamFull => {
                    display_warning("Team is full (5/5)");
                    false
                }
                AddOutcome::AlreadySelected => {
                    display_warning(&format!("{} is already on the team", hero.localized_name));
                    false
                }
            },
            Err(e) => {
                display_error(&e.to_string());
                false
            }
        },
        DraftCommand::Remove(name) => match session.catalog().find(&name).cloned() {
            Ok(hero) => {
                let name = hero.localized_name.clone();
                if session.apply(DraftEvent::Remove(hero)) {
                    display_success(&format!("Removed {}", name));
                    true
                } else {
                    display_warning(&format!("{} is not on the team", name));
                    false
                }
            }
            Err(e) => {
                display_error(&e.to_string());
                false
            }
        },
        DraftCommand::Clear => {
            session.apply(DraftEvent::ClearTeam);
            display_success("Team cleared");
            true
        }
        DraftCommand::Search(query) => session.apply(DraftEvent::SetQuery(query)),
        DraftCommand::ResetSearch => session.apply(DraftEvent::ClearQuery),
        DraftCommand::Explain(name) => {
            match session.catalog().find(&name) {
                Ok(candidate) => {
                    let breakdown = session.recommender().breakdown(session.team(), candidate);
                    display_breakdown(session.team(), candidate, &breakdown);
                }
                Err(e) => display_error(&e.to_string()),
            }
            false
        }
        DraftCommand::Team => {
            display_team(session.team());
            false
        }
        DraftCommand::List => {
            display_candidates(
                session.candidates(),
                session.team(),
                session.query(),
                Some(top_n),
            );
            false
        }
        DraftCommand::Help => {
            println!("{}", HELP);
            false
        }
        DraftCommand::Quit => false,
    };

    if changed {
        display_team(session.team());
        if !session.query().is_empty() {
            display_info(&format!("Filter: \"{}\"", session.query()));
        }
        display_candidates(
            session.candidates(),
            session.team(),
            session.query(),
            Some(top_n),
        );
    }
}
