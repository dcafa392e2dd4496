use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub enum Query {
    #[command(about = "List every player seen in the ingested histories", alias = "ls")]
    Players,
    #[command(about = "Show preflop stats for one player", alias = "p")]
    Player {
        #[arg(required = true)]
        name: String,
    },
    #[command(
        about = "Show aggregate-weighted averages across all players",
        alias = "pop"
    )]
    Population,
    #[command(about = "Dump every player's stats as JSON", alias = "json")]
    Export,
}
