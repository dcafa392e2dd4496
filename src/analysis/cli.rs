use super::analysis::Analysis;
use super::query::Query;
use crate::save::Store;
use clap::Parser;
use colored::*;
use std::io::Write;

/// interactive stats viewer: a readline loop dispatching [Query] commands
/// against the store. quit with "quit" or "exit".
pub struct CLI<S>(Analysis<S>);

impl<S: Store> CLI<S> {
    pub fn new(store: S) -> Self {
        Self(Analysis::new(store))
    }

    pub fn run(&self) {
        log::info!("launching analysis");
        loop {
            print!("> ");
            let ref mut input = String::new();
            std::io::stdout().flush().unwrap();
            std::io::stdin().read_line(input).unwrap();
            match input.trim() {
                "quit" => break,
                "exit" => break,
                _ => match self.handle(input) {
                    Err(e) => eprintln!("handle error: {}", e),
                    Ok(_) => continue,
                },
            }
        }
    }

    fn handle(&self, input: &str) -> Result<(), Box<dyn std::error::Error>> {
        match Query::try_parse_from(std::iter::once("> ").chain(input.split_whitespace()))? {
            Query::Players => Ok(println!("{}", self.0.players()?.join("\n"))),
            Query::Player { name } => Ok(match self.0.sheet(&name)? {
                Some(sheet) => {
                    println!("{:<24} {}", name.bold(), sheet);
                    for (position, sheet) in self.0.positions(&name)?.unwrap_or_default() {
                        println!("{:>24} {}", position.dimmed(), sheet);
                    }
                }
                None => println!("{} {}", name.bold(), "no data".dimmed()),
            }),
            Query::Population => Ok(println!(
                "{:<24} {}",
                "population".bold(),
                self.0.population()?
            )),
            Query::Export => Ok(println!(
                "{}",
                serde_json::to_string_pretty(&self.0.export()?)?
            )),
        }
    }
}
