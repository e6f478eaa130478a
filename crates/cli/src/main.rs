use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{Catalog, LoadReport, LoaderOptions, Name, WorkSummary, load_from_path};
use queries::*;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

/// Credits - analytical queries over a movie credits dataset
#[derive(Parser)]
#[command(name = "credits")]
#[command(about = "Ask questions about who worked on which movie", long_about = None)]
struct Cli {
    /// Path to the credits CSV file
    #[arg(short, long, default_value = "tmdb_5000_credits.csv")]
    data: PathBuf,

    /// Field delimiter of the CSV file
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Print results as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show dataset totals and skipped rows
    Summary,

    /// Films with a Director credit for a person
    ByDirector {
        #[arg(long, default_value = "Steven Spielberg")]
        director: String,
    },

    /// Distinct characters played by an actor
    Characters {
        #[arg(long, default_value = "Tom Hanks")]
        actor: String,
    },

    /// Films with the largest casts
    LargestCasts {
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Actors appearing in the most films
    TopActors {
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Every distinct crew department
    Departments,

    /// Films scored by a composer
    ByComposer {
        #[arg(long, default_value = "Hans Zimmer")]
        composer: String,
    },

    /// First credited director of every film
    Directors,

    /// Films whose cast includes every listed actor
    WithActors {
        /// Repeat to require several actors
        #[arg(long = "actor", num_args = 1.., default_values = ["Brad Pitt", "George Clooney"])]
        actors: Vec<String>,
    },

    /// Number of distinct people credited in a department
    DepartmentSize {
        #[arg(long, default_value = "Camera")]
        department: String,
    },

    /// People in both the cast and the crew of a film
    Overlap {
        #[arg(long, default_value = "Titanic")]
        title: String,
    },

    /// Crew members who worked most often with a director
    InnerCircle {
        #[arg(long, default_value = "Quentin Tarantino")]
        director: String,

        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Actor pairs sharing the most films
    Pairs {
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Crew members spanning the most departments
    Diversity {
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// People who directed, produced and wrote the same film
    Trios,

    /// Co-stars one and two films away from an actor
    Separation {
        #[arg(long, default_value = "Kevin Bacon")]
        root: String,
    },

    /// Average cast and crew size per director
    DirectorGroups,

    /// Most common crew department of each actor who also worked crew
    CareerPaths,

    /// People who worked on films by both directors
    Shared {
        #[arg(long, default_value = "Martin Scorsese")]
        first: String,

        #[arg(long, default_value = "Christopher Nolan")]
        second: String,
    },

    /// Average cast size of the films each department worked on
    DepartmentAverages,

    /// Character name patterns of an actor
    Archetypes {
        #[arg(long, default_value = "Johnny Depp")]
        actor: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let delimiter = u8::try_from(cli.delimiter)
        .map_err(|_| anyhow!("Delimiter must be a single ASCII character, got {:?}", cli.delimiter))?;
    let options = LoaderOptions::new().with_delimiter(delimiter);

    let start = Instant::now();
    let report = load_from_path(&cli.data, &options)
        .with_context(|| format!("Failed to load credits from {}", cli.data.display()))?;
    if !cli.json {
        eprintln!(
            "{} Loaded {} films in {:?} ({} rows skipped)",
            "✓".green(),
            report.retained(),
            start.elapsed(),
            report.skipped.len()
        );
    }

    let catalog = &report.catalog;
    let json = cli.json;

    match cli.command {
        Commands::Summary => handle_summary(&report, json)?,
        Commands::ByDirector { director } => print_works(
            json,
            &format!("Films directed by {director}"),
            &films_by_director(catalog, &director),
        )?,
        Commands::Characters { actor } => {
            let characters = characters_by_actor(catalog, &actor);
            emit(json, &characters, || {
                print_header(&format!("Characters played by {actor}"), characters.len());
                for character in &characters {
                    println!("  {character}");
                }
            })?
        }
        Commands::LargestCasts { limit } => {
            let casts = largest_casts(catalog, limit);
            emit(json, &casts, || {
                print_header("Largest casts", casts.len());
                for row in &casts {
                    println!("  {:>4}  {}", row.cast_size.to_string().green(), row.work.title);
                }
            })?
        }
        Commands::TopActors { limit } => print_counts(
            json,
            "Actors in the most films",
            &top_actors_by_film_count(catalog, limit),
        )?,
        Commands::Departments => print_names(json, "Departments", &unique_departments(catalog))?,
        Commands::ByComposer { composer } => print_works(
            json,
            &format!("Films scored by {composer}"),
            &films_by_composer(catalog, &composer),
        )?,
        Commands::Directors => {
            let directors = director_by_work(catalog);
            emit(json, &directors, || {
                print_header("Director of each film", directors.len());
                for (id, director) in &directors {
                    let director = director.as_deref().unwrap_or(UNKNOWN_DIRECTOR);
                    println!("  {:>7}  {}", id.to_string().dimmed(), director);
                }
            })?
        }
        Commands::WithActors { actors } => print_works(
            json,
            &format!("Films starring {}", actors.join(" and ")),
            &films_with_actors(catalog, &actors[..]),
        )?,
        Commands::DepartmentSize { department } => {
            let count = count_people_in_department(catalog, &department);
            emit(json, &count, || {
                println!(
                    "{} {}",
                    format!("People credited in {department}:").bold().blue(),
                    count.to_string().green()
                );
            })?
        }
        Commands::Overlap { title } => handle_overlap(catalog, &title, json)?,
        Commands::InnerCircle { director, limit } => print_counts(
            json,
            &format!("Inner circle of {director}"),
            &inner_circle(catalog, &director, limit),
        )?,
        Commands::Pairs { limit } => {
            let pairs = top_actor_pairs(catalog, limit);
            emit(json, &pairs, || {
                print_header("Most frequent actor pairs", pairs.len());
                for pair in &pairs {
                    println!(
                        "  {:>4}  {} / {}",
                        pair.count.to_string().green(),
                        pair.first,
                        pair.second
                    );
                }
            })?
        }
        Commands::Diversity { limit } => print_counts(
            json,
            "Crew across the most departments",
            &diversity_index(catalog, limit),
        )?,
        Commands::Trios => {
            let trios = creative_trios(catalog);
            emit(json, &trios, || {
                print_header("Directed, produced and wrote the same film", trios.len());
                for trio in &trios {
                    println!("  {}  {}", trio.person.to_string().bold(), trio.work.title);
                }
            })?
        }
        Commands::Separation { root } => {
            let rings = degrees_of_separation(catalog, &root);
            emit(json, &rings, || {
                print_header(&format!("One film from {root}"), rings.first.len());
                print_name_list(&rings.first);
                print_header(&format!("Two films from {root}"), rings.second.len());
                print_name_list(&rings.second);
            })?
        }
        Commands::DirectorGroups => {
            let groups = group_by_director(catalog);
            emit(json, &groups, || {
                print_header("Films per director", groups.len());
                for group in &groups {
                    println!(
                        "  {:>4}  {}  (avg cast {:.1}, avg crew {:.1})",
                        group.films.to_string().green(),
                        group.director,
                        group.avg_cast,
                        group.avg_crew
                    );
                }
            })?
        }
        Commands::CareerPaths => {
            let paths = career_paths(catalog);
            emit(json, &paths, || {
                print_header("Actors who also worked crew", paths.len());
                for path in &paths {
                    println!(
                        "  {}  {} ({} credits)",
                        path.person.to_string().bold(),
                        path.department,
                        path.credits
                    );
                }
            })?
        }
        Commands::Shared { first, second } => print_names(
            json,
            &format!("Worked with both {first} and {second}"),
            &shared_collaborators(catalog, &first, &second),
        )?,
        Commands::DepartmentAverages => {
            let averages = department_cast_averages(catalog);
            emit(json, &averages, || {
                print_header("Average cast size per department", averages.len());
                for row in &averages {
                    println!(
                        "  {:>7}  {} ({} films)",
                        format!("{:.2}", row.avg_cast).green(),
                        row.department,
                        row.works
                    );
                }
            })?
        }
        Commands::Archetypes { actor } => {
            let archetypes = character_archetypes(catalog, &actor);
            emit(json, &archetypes, || {
                print_header(&format!("Character archetypes of {actor}"), archetypes.len());
                for row in &archetypes {
                    println!("  {:>4}  {}", row.count.to_string().green(), row.token);
                }
            })?
        }
    }

    Ok(())
}

/// Totals for the loaded file
#[derive(Serialize)]
struct Summary<'a> {
    films: usize,
    people: usize,
    departments: usize,
    skipped: Vec<SkippedLine<'a>>,
}

#[derive(Serialize)]
struct SkippedLine<'a> {
    line: u64,
    reason: &'a str,
}

/// Handle the 'summary' command
fn handle_summary(report: &LoadReport, json: bool) -> Result<()> {
    let catalog: &Catalog = &report.catalog;
    let summary = Summary {
        films: catalog.len(),
        people: catalog.people().len(),
        departments: catalog.departments().len(),
        skipped: report
            .skipped
            .iter()
            .map(|s| SkippedLine {
                line: s.line,
                reason: &s.reason,
            })
            .collect(),
    };

    emit(json, &summary, || {
        println!("{}", "Dataset summary".bold().blue());
        println!("  Films:       {}", summary.films.to_string().green());
        println!("  People:      {}", summary.people.to_string().green());
        println!("  Departments: {}", summary.departments.to_string().green());
        if !summary.skipped.is_empty() {
            println!("  Skipped rows: {}", summary.skipped.len().to_string().yellow());
            for row in &summary.skipped {
                println!("    line {}: {}", row.line, row.reason);
            }
        }
    })
}

/// Handle the 'overlap' command
///
/// An unknown title is reported, not treated as a failure.
fn handle_overlap(catalog: &Catalog, title: &str, json: bool) -> Result<()> {
    match cast_and_crew_overlap(catalog, title) {
        Some(overlap) => print_names(json, &format!("Cast and crew of {title}"), &overlap),
        None => emit(json, &None::<Vec<Name>>, || {
            println!("{} {}", "Film not found:".yellow(), title);
        }),
    }
}

/// Print `value` as JSON, or run the table renderer
fn emit<T: Serialize + ?Sized>(json: bool, value: &T, render: impl FnOnce()) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
        println!("{text}");
    } else {
        render();
    }
    Ok(())
}

fn print_header(title: &str, count: usize) {
    println!("{} {}", format!("{title}:").bold().blue(), format!("{count} found").dimmed());
}

fn print_name_list(names: &[Name]) {
    for name in names {
        println!("  {name}");
    }
}

fn print_works(json: bool, title: &str, works: &[WorkSummary]) -> Result<()> {
    emit(json, works, || {
        print_header(title, works.len());
        for work in works {
            println!("  {:>7}  {}", work.id.to_string().dimmed(), work.title);
        }
    })
}

fn print_names(json: bool, title: &str, names: &[Name]) -> Result<()> {
    emit(json, names, || {
        print_header(title, names.len());
        print_name_list(names);
    })
}

fn print_counts(json: bool, title: &str, rows: &[NameCount]) -> Result<()> {
    emit(json, rows, || {
        print_header(title, rows.len());
        for (rank, row) in rows.iter().enumerate() {
            println!(
                "  {:>3}. {:<40} {}",
                rank + 1,
                row.name.to_string(),
                row.count.to_string().green()
            );
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::load_from_reader;

    fn catalog() -> Catalog {
        let text = "movie_id,title,cast,crew\n1,Titanic,[],[]\n";
        load_from_reader(text.as_bytes(), &LoaderOptions::default())
            .unwrap()
            .catalog
    }

    #[test]
    fn test_overlap_for_unknown_title_is_not_an_error() {
        let catalog = catalog();
        assert!(handle_overlap(&catalog, "No Such Film", false).is_ok());
        assert!(handle_overlap(&catalog, "No Such Film", true).is_ok());
        assert!(handle_overlap(&catalog, "titanic", false).is_ok());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["credits", "with-actors"]);
        assert_eq!(cli.data, PathBuf::from("tmdb_5000_credits.csv"));
        assert_eq!(cli.delimiter, ',');
        match cli.command {
            Commands::WithActors { actors } => {
                assert_eq!(actors, vec!["Brad Pitt", "George Clooney"])
            }
            _ => panic!("expected with-actors"),
        }
    }
}
