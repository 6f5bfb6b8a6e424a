// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod seed;

use clap::{Args as ClapArgs, Parser, Subcommand};
use kickstart_lister::{KickstartLister, ListerConfig};
use kickstart_lister_domain::{OrgId, PageControl, UserContext};
use kickstart_lister_persistence::Persistence;
use kickstart_lister_provisioning::InMemoryCobbler;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// Kickstart Lister - inspect the provisioning records of an organization
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Path to a JSON lister configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to a JSON list of provisioning profiles to serve
    #[arg(short, long)]
    profiles: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List kickstart profiles
    Kickstarts(OrgArgs),
    /// List cryptographic keys
    CryptoKeys(OrgArgs),
    /// List file preservation lists
    FileLists(OrgArgs),
    /// List activation keys
    ActivationKeys {
        #[command(flatten)]
        org: OrgArgs,
        /// Only list keys that are not disabled
        #[arg(long)]
        active_only: bool,
    },
    /// List provisioning profiles visible to a user
    Profiles {
        /// Login of the user to list for
        #[arg(long)]
        login: String,
        /// Organization to use when the login is not in the database
        #[arg(long)]
        org: Option<i64>,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(ClapArgs, Debug)]
struct OrgArgs {
    /// Organization id
    #[arg(long)]
    org: i64,
    #[command(flatten)]
    page: PageArgs,
}

#[derive(ClapArgs, Debug)]
struct PageArgs {
    /// 1-based position of the first record
    #[arg(long, default_value_t = 1)]
    start: usize,
    /// Records per page; all records when omitted
    #[arg(long)]
    page_size: Option<usize>,
    /// Case-insensitive text the record name must contain
    #[arg(long)]
    filter: Option<String>,
}

impl PageArgs {
    fn page_control(&self) -> Result<PageControl, Box<dyn std::error::Error>> {
        let mut pc: PageControl = PageControl::unbounded().with_start(self.start);
        if let Some(size) = self.page_size {
            pc = pc.with_page_size(size)?;
        }
        if let Some(filter) = &self.filter {
            pc = pc.with_filter(filter);
        }
        Ok(pc)
    }
}

type CliLister = KickstartLister<Persistence, InMemoryCobbler>;

fn to_json<T: Serialize>(value: &T) -> Result<String, Box<dyn std::error::Error>> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn build_lister(args: &Args) -> Result<CliLister, Box<dyn std::error::Error>> {
    let config: ListerConfig = match &args.config {
        Some(path) => ListerConfig::from_path(path)?,
        None => ListerConfig::default(),
    };

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path.display());
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let provisioning: InMemoryCobbler = match &args.profiles {
        Some(path) => seed::load_backend(path)?,
        None => InMemoryCobbler::new(),
    };

    Ok(KickstartLister::new(persistence, provisioning, config)?)
}

/// Resolves the user a profile listing runs as.
fn resolve_user(
    lister: &mut CliLister,
    login: &str,
    org: Option<i64>,
) -> Result<UserContext, Box<dyn std::error::Error>> {
    if let Some(user) = lister.store_mut().get_user_by_login(login)? {
        return Ok(user);
    }
    match org {
        Some(org) => {
            warn!("User '{}' not found; listing for org {}", login, org);
            Ok(UserContext::new(0, OrgId::new(org), login))
        }
        None => Err(format!("Unknown user '{login}'; pass --org to list anyway").into()),
    }
}

/// Runs one command and returns its JSON output.
fn run(lister: &mut CliLister, command: &Command) -> Result<String, Box<dyn std::error::Error>> {
    match command {
        Command::Kickstarts(args) => {
            let pc: PageControl = args.page.page_control()?;
            to_json(&lister.kickstarts_in_org(OrgId::new(args.org), Some(&pc))?)
        }
        Command::CryptoKeys(args) => {
            let pc: PageControl = args.page.page_control()?;
            to_json(&lister.crypto_keys_in_org(OrgId::new(args.org), Some(&pc))?)
        }
        Command::FileLists(args) => {
            let pc: PageControl = args.page.page_control()?;
            to_json(&lister.preservation_lists_in_org(OrgId::new(args.org), Some(&pc))?)
        }
        Command::ActivationKeys { org, active_only } => {
            let pc: PageControl = org.page.page_control()?;
            let org_id: OrgId = OrgId::new(org.org);
            if *active_only {
                to_json(&lister.active_activation_keys_in_org(org_id, Some(&pc))?)
            } else {
                to_json(&lister.activation_keys_in_org(org_id, Some(&pc))?)
            }
        }
        Command::Profiles { login, org, page } => {
            let pc: PageControl = page.page_control()?;
            let user: UserContext = resolve_user(lister, login, *org)?;
            to_json(&lister.list_cobbler_profiles(&user, Some(&pc))?)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Kickstart Lister");

    let mut lister: CliLister = build_lister(&args)?;
    let output: String = run(&mut lister, &args.command)?;
    println!("{output}");

    Ok(())
}
