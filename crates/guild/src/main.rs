//! Adventurers' guild roster manager
//!
//! Main entry point for the command-line host.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use guild_core::{Attribute, Attributes, GuildRng, HeroRecord, Roster, attempt, describe, select_party, success_chance};
use guild_save::{DecodePolicy, GuildConfig, SaveError, Schema, load_roster, roster_exists, save_roster};

/// Manage the adventurers' guild roster
#[derive(Parser, Debug)]
#[command(name = "guild")]
#[command(author, version, about = "Adventurers' Guild - recruit, dismiss and send heroes questing", long_about = None)]
struct Args {
    /// Roster file (overrides the config file)
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// JSON config file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Column layout: full, classic or name-only
    #[arg(short = 's', long = "schema")]
    schema: Option<Schema>,

    /// Skip malformed lines instead of failing
    #[arg(long = "lenient")]
    lenient: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recruit the founding heroes, save, clear and reload them
    Demo,

    /// Show every hero in the guild
    Show,

    /// Add a hero to the guild
    Recruit {
        name: String,
        #[arg(long, default_value = "")]
        role: String,
        #[arg(long = "str", default_value_t = 10)]
        strength: i32,
        #[arg(long = "dex", default_value_t = 10)]
        dexterity: i32,
        #[arg(long = "con", default_value_t = 10)]
        constitution: i32,
        #[arg(long = "int", default_value_t = 10)]
        intelligence: i32,
        #[arg(long = "wis", default_value_t = 10)]
        wisdom: i32,
        #[arg(long = "cha", default_value_t = 10)]
        charisma: i32,
        #[arg(long, default_value = "")]
        special: String,
        #[arg(long, default_value = "")]
        backstory: String,
    },

    /// Remove the first hero with this name
    Dismiss { name: String },

    /// Look up a hero by name
    Find { name: String },

    /// Pick a random party and attempt a quest
    Party {
        size: usize,
        /// RNG seed for a reproducible party
        #[arg(long)]
        seed: Option<u64>,
        /// Attribute the quest tests
        #[arg(long, default_value = "strength")]
        attr: Attribute,
        #[arg(long, default_value_t = 40)]
        difficulty: i32,
    },
}

/// Settings after merging the config file with command-line overrides
struct Session {
    path: PathBuf,
    schema: Schema,
    policy: DecodePolicy,
}

impl Session {
    fn from_args(args: &Args) -> Result<Self, SaveError> {
        let config = match &args.config {
            Some(path) => GuildConfig::load(path)?,
            None => GuildConfig::default(),
        };
        Ok(Self {
            path: args.file.clone().unwrap_or_else(|| config.roster_path()),
            schema: args.schema.unwrap_or(config.schema),
            policy: if args.lenient {
                DecodePolicy::Lenient
            } else {
                config.policy
            },
        })
    }

    /// Load the roster, starting empty when no file exists yet
    fn load_or_empty(&self) -> Result<Roster, SaveError> {
        if roster_exists(&self.path) {
            load_roster(&self.path, self.schema, self.policy)
        } else {
            log::info!("No roster at {}, starting fresh", self.path.display());
            Ok(Roster::new())
        }
    }

    fn save(&self, roster: &Roster) -> Result<(), SaveError> {
        save_roster(roster, &self.path, self.schema)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), SaveError> {
    let session = Session::from_args(args)?;

    match &args.command {
        Command::Demo => run_demo(&session),
        Command::Show => {
            show_guild(&session.load_or_empty()?);
            Ok(())
        }
        Command::Recruit {
            name,
            role,
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
            special,
            backstory,
        } => {
            let mut roster = session.load_or_empty()?;
            let attributes = Attributes::new([
                *strength,
                *dexterity,
                *constitution,
                *intelligence,
                *wisdom,
                *charisma,
            ]);
            roster.append(
                HeroRecord::new(name.as_str(), role.as_str(), attributes)
                    .with_special_ability(special.as_str())
                    .with_backstory(backstory.as_str()),
            );
            println!("{name} has joined the Adventurers' Guild!");
            session.save(&roster)
        }
        Command::Dismiss { name } => {
            let mut roster = session.load_or_empty()?;
            match roster.remove_by_name(name) {
                Some(hero) => {
                    println!("{} has left the Adventurers' Guild.", hero.name);
                    session.save(&roster)
                }
                None => {
                    println!("No hero named {name} in the guild.");
                    Ok(())
                }
            }
        }
        Command::Find { name } => {
            let roster = session.load_or_empty()?;
            match roster.find_by_name(name) {
                Some(hero) => show_hero(hero),
                None => println!("No hero named {name} in the guild."),
            }
            Ok(())
        }
        Command::Party {
            size,
            seed,
            attr,
            difficulty,
        } => {
            let roster = session.load_or_empty()?;
            let mut rng = seed.map(GuildRng::new).unwrap_or_default();
            run_party(&roster, *size, *attr, *difficulty, &mut rng);
            Ok(())
        }
    }
}

/// The founding members recruited by `demo`
fn founders() -> Roster {
    [
        HeroRecord::new("Aldric the Brave", "Warrior", Attributes::new([18, 14, 16, 10, 12, 13]))
            .with_special_ability("Shield Wall")
            .with_backstory("A veteran of countless wars. Aldric leads with courage and strength."),
        HeroRecord::new("Luna the Swift", "Rogue", Attributes::new([12, 20, 13, 14, 11, 15]))
            .with_special_ability("Shadowstep")
            .with_backstory("A nimble rogue who grew up in the streets and knows how to survive."),
        HeroRecord::new("Kael the Rogue", "Rogue", Attributes::new([14, 18, 12, 12, 10, 9]))
            .with_special_ability("Backstab")
            .with_backstory("Once a thief. Kael now seeks redemption through aiding those in need."),
        HeroRecord::new("Zara the Sorceress", "Mage", Attributes::new([8, 16, 10, 19, 14, 12]))
            .with_special_ability("Arcane Surge")
            .with_backstory("Zara wields arcane powers and seeks lost knowledge in ancient ruins."),
    ]
    .into_iter()
    .collect()
}

fn run_demo(session: &Session) -> Result<(), SaveError> {
    let path = &session.path;
    let mut guild = founders();
    for name in guild.names() {
        println!("{name} has joined the Adventurers' Guild!");
    }
    show_guild(&guild);

    session.save(&guild)?;
    println!("Guild list saved to {}.", path.display());

    guild = Roster::new();
    show_guild(&guild);

    guild = load_roster(path, session.schema, session.policy)?;
    println!("Guild list loaded from {}.", path.display());
    show_guild(&guild);
    Ok(())
}

fn show_guild(roster: &Roster) {
    if roster.is_empty() {
        println!("The Adventurers' Guild is empty.");
        return;
    }
    println!("Guild Members:");
    for hero in roster {
        println!("  {hero}");
    }
}

fn show_hero(hero: &HeroRecord) {
    println!("{hero}");
    for attr in Attribute::ALL {
        let value = hero.stat(attr);
        println!("  {:<12} {:>3}  ({})", attr.full_name(), value, describe(value));
    }
    println!("  {:<12} {:>3}", "total", hero.attributes.total());
}

fn run_party(roster: &Roster, size: usize, attr: Attribute, difficulty: i32, rng: &mut GuildRng) {
    let party = select_party(roster, size, rng);
    if party.is_empty() {
        println!("Nobody is available for the quest.");
        return;
    }

    println!("The party sets out (seed {}):", rng.seed());
    for hero in &party {
        println!("  {hero}");
    }

    let chance = success_chance(&party, attr, difficulty);
    println!("Testing {attr} against difficulty {difficulty}: {chance}% chance of success.");
    if attempt(&party, attr, difficulty, rng) {
        println!("The quest succeeds!");
    } else {
        println!("The quest fails.");
    }
}
