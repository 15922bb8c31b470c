use std::env;
use std::process;

use log::error;

use recipe_scout::{
    estimate_time_bucket, search_engine_with_config, CatalogConfig, FavoritesStore, FilterSpec,
    Recipe, SearchResults,
};

const USAGE: &str = "Usage: recipe-scout <query> [--category C] [--area A] \
                     [--time quick|moderate|leisure] [--mood comfort|healthy|indulgent|adventurous]
       recipe-scout --random
       recipe-scout --favorites";

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run(env::args().skip(1).collect()).await {
        error!("{}", err);
        eprintln!("{}", err);
        process::exit(1);
    }
}

async fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = CatalogConfig::load().unwrap_or_default();

    if args.first().map(String::as_str) == Some("--favorites") {
        let store = FavoritesStore::open(&config.favorites_path);
        for entry in store.list() {
            println!(
                "{}  {} [{} / {}] ({})",
                entry.id,
                entry.name,
                entry.category.as_deref().unwrap_or("?"),
                entry.area.as_deref().unwrap_or("?"),
                entry.time.as_str()
            );
        }
        return Ok(());
    }

    let engine = search_engine_with_config(&config)?;

    if args.first().map(String::as_str) == Some("--random") {
        let results = engine.random_suggestion().await;
        print_results(&results);
        return Ok(());
    }

    let (query, spec) = parse_args(&args)?;
    let results = engine.search(&query, &spec).await;
    print_results(&results);
    Ok(())
}

fn parse_args(args: &[String]) -> Result<(String, FilterSpec), String> {
    let mut query = None;
    let mut spec = FilterSpec::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut flag_value = |name: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{} needs a value\n{}", name, USAGE))
        };
        match arg.as_str() {
            "--category" => spec.category = Some(flag_value("--category")?),
            "--area" => spec.area = Some(flag_value("--area")?),
            "--time" => spec.time = Some(flag_value("--time")?.parse()?),
            "--mood" => spec.mood = Some(flag_value("--mood")?.parse()?),
            other if other.starts_with("--") => {
                return Err(format!("unknown flag {}\n{}", other, USAGE))
            }
            other => query = Some(other.to_string()),
        }
    }

    let query = query.ok_or_else(|| format!("no query given\n{}", USAGE))?;
    Ok((query, spec))
}

fn print_results(results: &SearchResults) {
    if results.is_empty() {
        println!("No meals found with the selected filters.");
        return;
    }
    print_bucket("By name", &results.by_name);
    print_bucket("By ingredient", &results.by_ingredient);
    print_bucket("By category", &results.by_category);
    print_bucket("By area", &results.by_area);
}

fn print_bucket(label: &str, records: &[Recipe]) {
    if records.is_empty() {
        return;
    }
    println!("{}:", label);
    for recipe in records {
        println!(
            "  {}  {} [{} / {}] ({})",
            recipe.id,
            recipe.name,
            recipe.category.as_deref().unwrap_or("?"),
            recipe.area.as_deref().unwrap_or("?"),
            estimate_time_bucket(recipe).as_str()
        );
    }
}
