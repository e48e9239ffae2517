use clap::Subcommand;

use breadbox_core::storage::keys;
use breadbox_core::{SqliteStore, StorageGateway, TimerEngine};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start the countdown for the active mode
    Start,
    /// Pause the running countdown
    Pause,
    /// Resume a paused countdown
    Resume,
    /// Reset the active mode to its configured duration
    Reset,
    /// Force immediate completion
    Complete,
    /// Switch to rest mode
    Rest,
    /// Skip rest and return to focus mode
    SkipRest,
    /// Print current timer state as JSON
    Status,
    /// Configure the initial duration for focus (or rest) mode
    Set {
        /// Duration in seconds
        #[arg(long)]
        seconds: u64,
        /// Apply to the rest duration instead of focus
        #[arg(long)]
        rest: bool,
    },
}

async fn load_engine(store: &SqliteStore) -> TimerEngine {
    // A missing or unreadable checkpoint just means a fresh engine.
    match store.get_json::<TimerEngine>(keys::TIMER_ENGINE).await {
        Ok(Some(engine)) => engine,
        _ => TimerEngine::new(),
    }
}

async fn save_engine(
    store: &SqliteStore,
    engine: &TimerEngine,
) -> Result<(), Box<dyn std::error::Error>> {
    store.set_json(keys::TIMER_ENGINE, engine).await?;
    Ok(())
}

pub async fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::open()?;
    let mut engine = load_engine(&store).await;

    // Catch up to the wall clock before applying the action; the deadline
    // checkpointed by a previous invocation may have expired since.
    if let Some(completed) = engine.tick() {
        println!("{}", serde_json::to_string_pretty(&completed)?);
    }

    let event = match action {
        TimerAction::Start => engine.start(),
        TimerAction::Pause => engine.pause(),
        TimerAction::Resume => engine.resume(),
        TimerAction::Reset => engine.reset(),
        TimerAction::Complete => engine.complete(),
        TimerAction::Rest => engine.transition_to_rest(),
        TimerAction::SkipRest => engine.skip_rest(),
        TimerAction::Status => Some(engine.snapshot()),
        TimerAction::Set { seconds, rest } => {
            if rest {
                engine.set_rest_initial_seconds(seconds);
            } else {
                engine.set_initial_seconds(seconds);
            }
            Some(engine.snapshot())
        }
    };

    // Guarded transitions that didn't apply print the state instead.
    match event {
        Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
        None => println!("{}", serde_json::to_string_pretty(&engine.snapshot())?),
    }

    save_engine(&store, &engine).await
}
