//! WrldBldr Party - Character roster editing core for turn-based RPG screens
//!
//! The binary runs one scripted session against the core:
//! - Rolls a party through the create flow
//! - Rerolls one member in the update flow and cancels, restoring it
//! - Creates an item and equips it
//! - Lays out the first two battle rounds
//!
//! Saved records are announced over the save channel and logged by a
//! background listener.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wrldbldr_party::application::services::{
    CharacterCommand, CommandOutcome, ItemCommand, RosterService, RoundSummary,
};
use wrldbldr_party::domain::entities::PlayerInfo;
use wrldbldr_party::domain::value_objects::{EquipmentSlot, ItemAttribute, ItemLocation, MonsterJob};
use wrldbldr_party::infrastructure::config::AppConfig;
use wrldbldr_party::infrastructure::save_channel::{save_listener, ChannelSaveNotifier};
use wrldbldr_party::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wrldbldr_party=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting WrldBldr Party");

    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Max level: {}", config.max_level);
    tracing::info!("  Abilities: {}..={}", config.abilities.min, config.abilities.max);
    tracing::info!("  Party size: {}", config.party_size);

    let (notifier, receiver) = ChannelSaveNotifier::channel();
    let listener = tokio::spawn(save_listener(receiver));

    let saved = {
        let mut state = AppState::new(config, Arc::new(notifier))?;
        tracing::info!(items = state.catalog.len(), "Application state initialized");
        run_session(&mut state.roster, state.config.party_size)?
        // Dropping the state drops the last notifier and lets the listener finish
    };

    let announced = listener.await.context("Save listener task failed")?;
    tracing::info!(saved, announced, "Session finished");
    Ok(())
}

/// Returns how many records were saved
fn run_session(roster: &mut RosterService, party_size: usize) -> Result<usize> {
    let mut saved = 0;

    for _ in 0..party_size {
        let mut editor = roster.begin_create();
        editor.apply(CharacterCommand::Randomize)?;
        match editor.apply(CharacterCommand::Save)? {
            CommandOutcome::Committed => saved += 1,
            outcome => tracing::warn!(?outcome, "Rolled character was not saved"),
        }
        roster.finish(editor);
    }

    if let Some(first) = roster.characters().first().cloned() {
        let mut editor = roster.begin_update(first.id)?;
        editor.apply(CharacterCommand::Randomize)?;
        editor.apply(CharacterCommand::SetLevel(roster.context().levels.max_level()))?;
        tracing::debug!(rerolled = %editor.character().name, "Rerolled, now cancelling");
        editor.apply(CharacterCommand::Cancel)?;
        debug_assert_eq!(editor.character(), &first);
        roster.finish(editor);
    }

    let mut item_editor = roster.begin_item();
    for command in [
        ItemCommand::SetName("Lucky Coin".to_string()),
        ItemCommand::SetDescription("Always lands face up".to_string()),
        ItemCommand::SetLocation(ItemLocation::Necklace),
        ItemCommand::SetAttribute(ItemAttribute::Defense),
        ItemCommand::SetValue(1.0),
    ] {
        item_editor.apply(command)?;
    }
    if item_editor.apply(ItemCommand::Save)? == CommandOutcome::Committed {
        saved += 1;
    }

    if let (Some(item_id), Some(wearer)) = (
        roster.finish_item(item_editor),
        roster.characters().first().map(|c| c.id),
    ) {
        let mut editor = roster.begin_update(wearer)?;
        let choices: Vec<String> = editor
            .pick_list(EquipmentSlot::Necklace)
            .into_iter()
            .map(|item| item.name)
            .collect();
        tracing::debug!(?choices, "Necklace choices");
        editor.apply(CharacterCommand::AssignSlot {
            slot: EquipmentSlot::Necklace,
            item_id: Some(item_id),
        })?;
        for (slot, item) in editor.equipment() {
            tracing::debug!(%slot, item = %item.name, image = %item.image_uri, "Equipment");
        }
        if editor.apply(CharacterCommand::Save)? == CommandOutcome::Committed {
            saved += 1;
        }
        roster.finish(editor);
    }

    let levels = roster.context().levels.clone();
    let monster = |name: &str, level: u32, job: MonsterJob, image: &str| {
        PlayerInfo::monster(name, level, job)
            .with_image(image)
            .with_health(levels.health_for(level))
    };
    roster.begin_battle(vec![
        monster("Vault Sentry", 2, MonsterJob::Guard, "sentry.png").with_stats(4, 2, 5),
        monster("Hired Blade", 3, MonsterJob::Mercenary, "blade.png").with_stats(6, 4, 2),
        monster("Big Sal", 4, MonsterJob::Henchman, "sal.png").with_stats(7, 1, 6),
    ]);
    log_round(&roster.round_summary());
    log_round(&roster.next_round());
    tracing::info!(
        round = roster.battle().round_count,
        fighters = roster.battle().players.len(),
        "Battle ready"
    );

    Ok(saved)
}

fn log_round(summary: &RoundSummary) {
    tracing::info!("{}", summary.title);
    for card in summary.party.iter().chain(&summary.monsters) {
        tracing::info!(
            row = card.position.row,
            column = card.position.column,
            "{} | {} | {}",
            card.name,
            card.level_and_job,
            card.stats
        );
    }
}
