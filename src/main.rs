use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use rusty_maze::construction::{
    create_maze, create_maze_with_builder, CountingMazeBuilder, Family, MazePrototypeFactory,
    StandardMazeBuilder,
};
use rusty_maze::maze::{
    Direction, Door, EnterContext, Explorer, Maze, MazeSummary, Room, Spell, Wall,
};
use rusty_maze::MazeError;

#[derive(Parser, Debug)]
#[command(name = "rusty-maze")]
#[command(about = "Builds the two-room maze with a chosen construction strategy", long_about = None)]
struct Args {
    /// How the maze is put together
    #[arg(short, long, value_enum, default_value_t = Strategy::Factory)]
    strategy: Strategy,

    /// Product family (strange: bombed walls with plain rooms, prototype only)
    #[arg(short, long, value_enum, default_value_t = FamilyArg::Standard)]
    family: FamilyArg,

    /// Seed for spells and bomb damage (random if not provided)
    #[arg(long)]
    seed: Option<u64>,

    /// Spell spoken in front of enchanted doors
    #[arg(long)]
    spell: Option<String>,

    /// Walk from room 1 through its east door
    #[arg(long)]
    walk: bool,

    /// Print the maze as JSON
    #[arg(long)]
    json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Factory,
    Builder,
    Counting,
    Prototype,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum FamilyArg {
    Standard,
    Enchanted,
    Bombed,
    Strange,
}

impl Strategy {
    fn label(self) -> &'static str {
        match self {
            Strategy::Factory => "factory",
            Strategy::Builder => "builder",
            Strategy::Counting => "counting",
            Strategy::Prototype => "prototype",
        }
    }
}

impl FamilyArg {
    fn label(self) -> &'static str {
        match self {
            FamilyArg::Standard => "standard",
            FamilyArg::Enchanted => "enchanted",
            FamilyArg::Bombed => "bombed",
            FamilyArg::Strange => "strange",
        }
    }
}

fn unsupported(strategy: Strategy, family: FamilyArg) -> MazeError {
    MazeError::UnsupportedFamily {
        strategy: strategy.label().to_string(),
        family: family.label().to_string(),
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn prototype_factory(family: FamilyArg, seed: Option<u64>) -> MazePrototypeFactory {
    let mut rng = rng_from(seed);
    match family {
        FamilyArg::Standard => MazePrototypeFactory::simple(),
        FamilyArg::Bombed => MazePrototypeFactory::bombed(&mut rng),
        FamilyArg::Strange => MazePrototypeFactory::strange(),
        FamilyArg::Enchanted => MazePrototypeFactory::new(
            Maze::new(),
            Wall::new(),
            Room::enchanted(0, Spell::random(&mut rng)),
            Door::enchanted_template(Spell::random(&mut rng)),
        ),
    }
}

/// `None` pour le constructeur qui ne fait que compter.
fn build(args: &Args) -> Result<Option<Maze>> {
    let maze = match args.strategy {
        Strategy::Factory => {
            let family = match args.family {
                FamilyArg::Standard => Family::Standard,
                FamilyArg::Enchanted => Family::Enchanted,
                FamilyArg::Bombed => Family::Bombed,
                FamilyArg::Strange => return Err(unsupported(args.strategy, args.family).into()),
            };
            let mut factory = family.factory(args.seed);
            Some(create_maze(factory.as_mut())?)
        }
        Strategy::Prototype => {
            let mut factory = prototype_factory(args.family, args.seed);
            Some(create_maze(&mut factory)?)
        }
        Strategy::Builder => {
            if args.family != FamilyArg::Standard {
                return Err(unsupported(args.strategy, args.family).into());
            }
            let maze = create_maze_with_builder(&mut StandardMazeBuilder::new())?
                .context("the standard builder gave no maze")?;
            Some(maze)
        }
        Strategy::Counting => {
            let mut builder = CountingMazeBuilder::new();
            create_maze_with_builder(&mut builder)?;
            let (rooms, doors) = builder.counts();
            println!("The maze would have {} room(s) and {} door(s)", rooms, doors);
            None
        }
    };
    Ok(maze)
}

fn walk(maze: &mut Maze, spell: Option<Spell>) -> Result<()> {
    let ctx = EnterContext { spell };
    // la porte du constructeur est au premier mur commun, pas forcément à l'est
    let direction = Direction::all()
        .find(|&d| {
            maze.get_room(1)
                .and_then(|r| r.get_side(d))
                .is_some_and(|s| s.as_door().is_some())
        })
        .unwrap_or(Direction::East);

    let mut explorer = Explorer::new(1, direction);
    explorer.enter_current(maze, &ctx)?;
    let outcome = explorer.step(maze, direction, &ctx)?;
    println!("Walking {} from room 1: {:?}", direction, outcome);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let spell = args.spell.as_deref().map(Spell::from_name).transpose()?;

    let Some(mut maze) = build(&args)? else {
        return Ok(());
    };

    if args.walk {
        walk(&mut maze, spell)?;
    }

    let summary = MazeSummary::from(&maze);
    if args.json {
        println!("{}", summary.to_json()?);
    } else {
        print!("{}", summary.to_text());
    }

    Ok(())
}
