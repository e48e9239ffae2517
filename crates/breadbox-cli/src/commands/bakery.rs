use clap::Subcommand;
use serde_json::json;

use breadbox_core::{Baker, SqliteStore, BREADS};

#[derive(Subcommand)]
pub enum BakeryAction {
    /// Print level, experience, selection, and owned counts as JSON
    Status,
    /// List the bread catalog with unlock state
    Catalog,
    /// Select a bread (must be unlocked)
    Select {
        /// Bread key, e.g. PlainBread
        key: String,
    },
    /// Award a bread for a completed focus session
    Award {
        /// Bread key, e.g. PlainBread
        key: String,
        /// Session duration in seconds
        #[arg(long)]
        seconds: u64,
    },
    /// Print the focus log, newest first
    Log,
}

pub async fn run(action: BakeryAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::open()?;
    let mut baker = Baker::new();
    baker.load(&store).await?;

    match action {
        BakeryAction::Status => {
            let status = json!({
                "level": baker.level(),
                "experience": baker.experience(),
                "selected_bread_key": baker.selected_bread_key(),
                "bread_counts": baker.bread_counts(),
            });
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        BakeryAction::Catalog => {
            let level = baker.level();
            let catalog: Vec<_> = BREADS
                .iter()
                .map(|bread| {
                    json!({
                        "key": bread.key,
                        "name": bread.name,
                        "required_level": bread.required_level,
                        "unlocked": bread.required_level <= level,
                        "owned": baker.bread_count(bread.key),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
        BakeryAction::Select { key } => {
            if baker.set_selected_bread(&store, &key).await? {
                println!("Selected: {key}");
            } else {
                eprintln!("Bread is locked or unknown: {key}");
            }
        }
        BakeryAction::Award { key, seconds } => match baker.award_bread(&store, &key, seconds).await? {
            Some(outcome) => println!("{}", serde_json::to_string_pretty(&outcome)?),
            None => eprintln!("Unknown bread: {key}"),
        },
        BakeryAction::Log => {
            println!("{}", serde_json::to_string_pretty(baker.focus_logs())?);
        }
    }

    Ok(())
}
