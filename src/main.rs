use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use itertools::Itertools;
use spgraph::{
    load,
    solver::{Solver, Strategy},
    store::GraphStore,
    types::VId,
};
use std::error::Error;

fn read_graph(matches: &ArgMatches) -> load::Result<GraphStore> {
    let path = matches.value_of("GRAPH").unwrap();
    if matches.is_present("sqlite") {
        load::read_sqlite(path)
    } else {
        load::read_file(path)
    }
}

fn parse_strategy(matches: &ArgMatches) -> spgraph::error::Result<Strategy> {
    matches.value_of("strategy").unwrap_or("heap").parse()
}

fn parse_vid(matches: &ArgMatches, name: &str) -> Result<VId, Box<dyn Error>> {
    Ok(matches.value_of(name).unwrap().parse()?)
}

fn handle_info(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    println!("{}", read_graph(matches)?.info());
    Ok(())
}

fn handle_query(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = read_graph(matches)?;
    let solver = Solver::with_strategy(&graph, parse_strategy(matches)?);
    println!(
        "{}",
        solver.shortest_path(parse_vid(matches, "FROM")?, parse_vid(matches, "TO")?)?
    );
    Ok(())
}

fn handle_distances(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = read_graph(matches)?;
    let solver = Solver::with_strategy(&graph, parse_strategy(matches)?);
    println!(
        "{}",
        solver
            .distances_from(parse_vid(matches, "FROM")?)?
            .iter()
            .join(" ")
    );
    Ok(())
}

fn graph_args<'a, 'b>() -> Vec<Arg<'a, 'b>> {
    vec![
        Arg::with_name("GRAPH")
            .help("Sets the graph file, an edge list unless --sqlite is given")
            .required(true)
            .index(1),
        Arg::with_name("sqlite")
            .long("sqlite")
            .help("Reads GRAPH as a SQLite3 database"),
    ]
}

fn query_args<'a, 'b>() -> Vec<Arg<'a, 'b>> {
    vec![Arg::with_name("strategy")
        .long("strategy")
        .takes_value(true)
        .possible_values(&["heap", "linear"])
        .default_value("heap")
        .help("Sets how vertices are settled")]
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new("spgraph")
        .about("Shortest paths over weighted undirected graphs")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("info")
                .about("Prints the size of the graph")
                .args(&graph_args()),
        )
        .subcommand(
            SubCommand::with_name("query")
                .about("Prints the distance between two vertices, -1 if unreachable")
                .setting(AppSettings::AllowNegativeNumbers)
                .args(&graph_args())
                .args(&query_args())
                .arg(Arg::with_name("FROM").required(true).index(2))
                .arg(Arg::with_name("TO").required(true).index(3)),
        )
        .subcommand(
            SubCommand::with_name("distances")
                .about("Prints the distances from one vertex to every vertex")
                .setting(AppSettings::AllowNegativeNumbers)
                .args(&graph_args())
                .args(&query_args())
                .arg(Arg::with_name("FROM").required(true).index(2)),
        )
        .get_matches();
    if let Some(matches) = matches.subcommand_matches("info") {
        handle_info(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("query") {
        handle_query(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("distances") {
        handle_distances(matches)?;
    }
    Ok(())
}
