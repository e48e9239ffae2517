use clap::Subcommand;
use serde_json::json;

use breadbox_core::{Settings, SqliteStore};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print current settings as JSON
    Show,
    /// Set the daily focus goal in minutes (clamped to 25..=600)
    SetGoal {
        minutes: u32,
    },
    /// Enable or disable notifications
    SetNotifications {
        enabled: bool,
    },
    /// Enable or disable sound
    SetSound {
        enabled: bool,
    },
}

pub async fn run(action: SettingsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::open()?;
    let mut settings = Settings::new();
    settings.load(&store).await?;

    match action {
        SettingsAction::Show => {}
        SettingsAction::SetGoal { minutes } => {
            settings.set_daily_focus_goal_minutes(&store, minutes).await?;
        }
        SettingsAction::SetNotifications { enabled } => {
            settings.set_notifications_enabled(&store, enabled).await?;
        }
        SettingsAction::SetSound { enabled } => {
            settings.set_sound_enabled(&store, enabled).await?;
        }
    }

    let view = json!({
        "notifications_enabled": settings.notifications_enabled(),
        "sound_enabled": settings.sound_enabled(),
        "daily_focus_goal_minutes": settings.daily_focus_goal_minutes(),
    });
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
