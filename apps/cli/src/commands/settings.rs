//! `settings` - show and change application settings.

use clap::{Args, Subcommand, ValueEnum};
use tracing::info;

use resto_core::{Settings, ThemeMode};
use resto_db::Store;

use crate::error::AppError;

#[derive(Debug, Subcommand)]
pub enum SettingsAction {
    /// Print current settings
    Show,
    /// Change one or more settings
    Set(SetArgs),
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// UI theme preference
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Record completed calculations in the history log
    #[arg(long, value_name = "BOOL")]
    pub save_history: Option<bool>,

    /// Attach a position to history records
    #[arg(long, value_name = "BOOL")]
    pub save_location: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Auto,
    Light,
    Dark,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Auto => ThemeMode::Auto,
            ThemeArg::Light => ThemeMode::Light,
            ThemeArg::Dark => ThemeMode::Dark,
        }
    }
}

pub async fn run(store: &Store, action: SettingsAction) -> Result<(), AppError> {
    let repo = store.settings();

    match action {
        SettingsAction::Show => {
            print!("{}", render_settings(&repo.load_or_default().await));
        }
        SettingsAction::Set(args) => {
            // load_or_default on purpose: a corrupt blob is replaced by the
            // merged result instead of blocking every future `set`
            let mut settings = repo.load_or_default().await;
            if !apply(&mut settings, &args) {
                return Err(AppError::InvalidInput(
                    "nothing to change: pass --theme, --save-history or --save-location".into(),
                ));
            }
            repo.save(&settings).await?;
            info!("settings updated");
            print!("{}", render_settings(&settings));
        }
    }

    Ok(())
}

/// Applies the given overrides; returns whether anything was set.
fn apply(settings: &mut Settings, args: &SetArgs) -> bool {
    let mut changed = false;
    if let Some(theme) = args.theme {
        settings.theme = theme.into();
        changed = true;
    }
    if let Some(save_history) = args.save_history {
        settings.save_history = save_history;
        changed = true;
    }
    if let Some(save_location) = args.save_location {
        settings.save_location = save_location;
        changed = true;
    }
    changed
}

fn render_settings(settings: &Settings) -> String {
    let theme = match settings.theme {
        ThemeMode::Auto => "auto",
        ThemeMode::Light => "light",
        ThemeMode::Dark => "dark",
    };
    format!(
        "theme:          {theme}\n\
         save history:   {}\n\
         save location:  {}\n",
        on_off(settings.save_history),
        on_off(settings.save_location),
    )
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides() {
        let mut settings = Settings::default();
        let changed = apply(
            &mut settings,
            &SetArgs {
                theme: Some(ThemeArg::Dark),
                save_history: None,
                save_location: Some(true),
            },
        );

        assert!(changed);
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert!(settings.save_history); // untouched
        assert!(settings.save_location);
    }

    #[test]
    fn test_apply_nothing_reports_unchanged() {
        let mut settings = Settings::default();
        let changed = apply(
            &mut settings,
            &SetArgs {
                theme: None,
                save_history: None,
                save_location: None,
            },
        );

        assert!(!changed);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_render_defaults() {
        let text = render_settings(&Settings::default());
        assert!(text.contains("theme:          auto"));
        assert!(text.contains("save history:   on"));
        assert!(text.contains("save location:  off"));
    }
}
